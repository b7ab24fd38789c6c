//! Elementary automaton handle: creation, stepping, state import/export.

use crate::automaton::ElementaryAutomaton;
use crate::config::ElementaryParams;
use crate::rng::create_rng;

/// Creates an elementary automaton of `size` cells using `rule`.
///
/// A rule of -1 picks a rule uniformly from 0..=255 using `seed`; `seed` is
/// ignored otherwise.
///
/// # Returns
/// A pointer to a new automaton, or null if `size` is not positive or `rule`
/// is out of range.
///
/// # Safety
/// The returned pointer must eventually be freed with `ta_elementary_destroy()`.
#[no_mangle]
pub extern "C" fn ta_elementary_create(size: i32, rule: i32, seed: u64) -> *mut ElementaryAutomaton {
    let mut rng = create_rng(seed);
    let params = match ElementaryParams::new(size as i64, rule as i64, &mut rng) {
        Ok(params) => params,
        Err(_) => return std::ptr::null_mut(),
    };

    match ElementaryAutomaton::from_params(&params) {
        Ok(automaton) => Box::into_raw(Box::new(automaton)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys an automaton and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_elementary_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_destroy(ptr: *mut ElementaryAutomaton) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Advances the automaton by one generation.
///
/// # Safety
/// - `ptr` must be a valid automaton pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_step(ptr: *mut ElementaryAutomaton) {
    if ptr.is_null() {
        return;
    }

    (*ptr).step();
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid automaton pointer, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_get_generation(ptr: *const ElementaryAutomaton) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Number of cells in the ring, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid automaton pointer, or null
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_size(ptr: *const ElementaryAutomaton) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).size() as u64
}

/// Gets a cell (0 = dead, 1 = alive). Negative or oversized indices wrap
/// around the ring.
///
/// # Safety
/// - `ptr` must be a valid automaton pointer, or null
///
/// # Returns
/// 0 if ptr is null or the cell is dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_get_cell(ptr: *const ElementaryAutomaton, index: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let automaton = &*ptr;
    automaton.get(super::wrap_coord(index, automaton.size()))
}

/// Replaces the state from a buffer of characters: byte `'1'` is alive,
/// anything else dead. Short input is zero-padded, long input truncated.
///
/// # Safety
/// - `ptr` must be a valid automaton pointer
/// - `in_buf` must point to at least `len` readable bytes
///
/// # Returns
/// Number of bytes consumed (at most the ring size), or 0 on null pointers.
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_load(
    ptr: *mut ElementaryAutomaton,
    in_buf: *const u8,
    len: usize,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let automaton = &mut *ptr;
    let bytes = std::slice::from_raw_parts(in_buf, len);

    // One char per byte keeps positions aligned even for non-ASCII input
    let state: String = bytes.iter().map(|&b| b as char).collect();
    automaton.load_state(&state);

    len.min(automaton.size()) as u64
}

/// Writes the state into `out_buf` as `'0'`/`'1'` bytes in index order.
///
/// # Safety
/// - `ptr` must be a valid automaton pointer
/// - `out_buf` must point to at least `len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on null pointers or if `len` is smaller
/// than the ring size.
#[no_mangle]
pub unsafe extern "C" fn ta_elementary_extract(
    ptr: *const ElementaryAutomaton,
    out_buf: *mut u8,
    len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let automaton = &*ptr;
    let size = automaton.size();

    // Ensure buffer is large enough
    if len < size {
        return 0;
    }

    let out_slice = std::slice::from_raw_parts_mut(out_buf, size);
    for (out, &cell) in out_slice.iter_mut().zip(automaton.cells()) {
        *out = if cell == 1 { b'1' } else { b'0' };
    }

    size as u64
}
