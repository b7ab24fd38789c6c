//! Langton's Ant handle.

use crate::automaton::LangtonAnt;
use crate::config::GridParams;

/// Creates a `size`×`size` all-white grid with the ant centered, facing up.
///
/// # Returns
/// A pointer to a new ant, or null if `size` is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `ta_ant_destroy()`.
#[no_mangle]
pub extern "C" fn ta_ant_create(size: i32) -> *mut LangtonAnt {
    let params = match GridParams::new(size as i64) {
        Ok(params) => params,
        Err(_) => return std::ptr::null_mut(),
    };

    match LangtonAnt::new(params.size) {
        Ok(ant) => Box::into_raw(Box::new(ant)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys an ant and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_ant_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ta_ant_destroy(ptr: *mut LangtonAnt) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Makes one move.
///
/// # Safety
/// - `ptr` must be a valid ant pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ta_ant_step(ptr: *mut LangtonAnt) {
    if ptr.is_null() {
        return;
    }

    (*ptr).step();
}

/// Gets a cell color (0 = white, 1 = black). Coordinates wrap around the
/// torus.
///
/// # Safety
/// - `ptr` must be a valid ant pointer, or null
#[no_mangle]
pub unsafe extern "C" fn ta_ant_get_cell(ptr: *const LangtonAnt, row: i32, col: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let ant = &*ptr;
    let n = ant.size();
    ant.is_black(super::wrap_coord(row, n), super::wrap_coord(col, n)) as u8
}

/// Writes the ant's position into `out_row` / `out_col`.
///
/// # Safety
/// - `ptr` must be a valid ant pointer, or null
/// - `out_row` and `out_col` must be valid for writes, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer)
#[no_mangle]
pub unsafe extern "C" fn ta_ant_position(
    ptr: *const LangtonAnt,
    out_row: *mut i32,
    out_col: *mut i32,
) -> i32 {
    if ptr.is_null() || out_row.is_null() || out_col.is_null() {
        return 1;
    }

    let (row, col) = (*ptr).position();
    *out_row = row as i32;
    *out_col = col as i32;
    0
}

/// Heading index: 0 = up, 1 = right, 2 = down, 3 = left.
///
/// # Safety
/// - `ptr` must be a valid ant pointer, or null
///
/// # Returns
/// The heading index, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_ant_heading(ptr: *const LangtonAnt) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).heading().index()
}

/// Gets the number of moves made, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid ant pointer, or null
#[no_mangle]
pub unsafe extern "C" fn ta_ant_get_generation(ptr: *const LangtonAnt) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_first_move() {
        unsafe {
            let ant = ta_ant_create(7);
            assert!(!ant.is_null());

            let (mut row, mut col) = (-1, -1);
            assert_eq!(ta_ant_position(ant, &mut row, &mut col), 0);
            assert_eq!((row, col), (3, 3));
            assert_eq!(ta_ant_heading(ant), 0);

            ta_ant_step(ant);

            assert_eq!(ta_ant_get_cell(ant, 3, 3), 1);
            assert_eq!(ta_ant_heading(ant), 1);
            ta_ant_position(ant, &mut row, &mut col);
            assert_eq!((row, col), (3, 4));
            assert_eq!(ta_ant_get_generation(ant), 1);

            ta_ant_destroy(ant);
        }
    }

    #[test]
    fn test_get_cell_wraps() {
        unsafe {
            let ant = ta_ant_create(4);
            ta_ant_step(ant);
            // Start cell (2,2) is black; -2 wraps to 2
            assert_eq!(ta_ant_get_cell(ant, -2, -2), 1);
            ta_ant_destroy(ant);
        }
    }

    #[test]
    fn test_invalid_size_returns_null() {
        assert!(ta_ant_create(0).is_null());
        assert!(ta_ant_create(-10).is_null());
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            ta_ant_destroy(ptr::null_mut()); // Should not crash
            ta_ant_step(ptr::null_mut()); // Should not crash
            assert_eq!(ta_ant_get_cell(ptr::null(), 0, 0), 0);
            assert_eq!(ta_ant_heading(ptr::null()), 0);
            assert_eq!(ta_ant_get_generation(ptr::null()), 0);

            let (mut row, mut col) = (0, 0);
            assert_eq!(ta_ant_position(ptr::null(), &mut row, &mut col), 1);

            let ant = ta_ant_create(3);
            assert_eq!(ta_ant_position(ant, ptr::null_mut(), &mut col), 1);
            ta_ant_destroy(ant);
        }
    }
}
