//! Game of Life handle: creation, cell access, and stepping.

use crate::automaton::{index_of, LifeGrid};
use crate::config::GridParams;
use crate::rng::create_rng;

fn validated_size(size: i32) -> Option<usize> {
    GridParams::new(size as i64).ok().map(|p| p.size)
}

/// Creates a `size`×`size` grid with each cell alive with probability 0.5,
/// drawn from a generator seeded with `seed`.
///
/// # Returns
/// A pointer to a new grid, or null if `size` is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `ta_life_destroy()`.
#[no_mangle]
pub extern "C" fn ta_life_create(size: i32, seed: u64) -> *mut LifeGrid {
    let Some(size) = validated_size(size) else {
        return std::ptr::null_mut();
    };

    match LifeGrid::new(size, &mut create_rng(seed)) {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Creates an all-dead `size`×`size` grid, or null if `size` is not positive.
#[no_mangle]
pub extern "C" fn ta_life_create_empty(size: i32) -> *mut LifeGrid {
    let Some(size) = validated_size(size) else {
        return std::ptr::null_mut();
    };

    match LifeGrid::empty(size) {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys a grid and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_life_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ta_life_destroy(ptr: *mut LifeGrid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Sets a cell to alive (non-zero) or dead (0). Coordinates wrap around the
/// torus.
///
/// # Safety
/// - `ptr` must be a valid grid pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ta_life_set_cell(ptr: *mut LifeGrid, row: i32, col: i32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let grid = &mut *ptr;
    let n = grid.size();
    grid.set(super::wrap_coord(row, n), super::wrap_coord(col, n), alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive). Coordinates wrap around
/// the torus.
///
/// # Safety
/// - `ptr` must be a valid grid pointer, or null
///
/// # Returns
/// 0 if ptr is null or the cell is dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn ta_life_get_cell(ptr: *const LifeGrid, row: i32, col: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let grid = &*ptr;
    let n = grid.size();
    let idx = index_of(super::wrap_coord(row, n), super::wrap_coord(col, n), n);
    grid.cells()[idx] as u8
}

/// Advances the grid by one generation (B3/S23, toroidal Moore neighborhood).
///
/// # Safety
/// - `ptr` must be a valid grid pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ta_life_step(ptr: *mut LifeGrid) {
    if ptr.is_null() {
        return;
    }

    (*ptr).step();
}

/// Gets the current generation counter, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid grid pointer, or null
#[no_mangle]
pub unsafe extern "C" fn ta_life_get_generation(ptr: *const LifeGrid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
