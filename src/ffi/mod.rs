//! C FFI layer for host embedding.
//!
//! This module exports C ABI functions for hosts that load the library
//! dynamically (LuaJIT FFI, C, Python ctypes). All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions. Each
//! simulation is an opaque handle created by `ta_*_create` and released by
//! the matching `ta_*_destroy`.

pub mod ant;
pub mod elementary;
pub mod life;

pub use ant::{
    ta_ant_create, ta_ant_destroy, ta_ant_get_cell, ta_ant_get_generation, ta_ant_heading,
    ta_ant_position, ta_ant_step,
};
pub use elementary::{
    ta_elementary_create, ta_elementary_destroy, ta_elementary_extract,
    ta_elementary_get_cell, ta_elementary_get_generation, ta_elementary_load,
    ta_elementary_size, ta_elementary_step,
};
pub use life::{
    ta_life_create, ta_life_create_empty, ta_life_destroy, ta_life_get_cell,
    ta_life_get_generation, ta_life_set_cell, ta_life_step,
};

use crate::automaton::wrap;

/// Map a signed host coordinate onto `[0, n)`.
#[inline]
pub(crate) fn wrap_coord(coord: i32, n: usize) -> usize {
    wrap(0, coord as isize, n)
}
