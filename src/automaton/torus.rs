//! Toroidal index arithmetic and Moore-neighborhood counting.
//!
//! Every simulation in this crate lives on a ring (1-D) or a torus (2-D):
//! stepping off one edge re-enters on the opposite edge.

/// Wrap `i + delta` into `[0, n)`.
///
/// Equivalent to `(i + delta + n) % n` for `|delta| <= n`, and still correct
/// for larger offsets.
#[inline]
pub fn wrap(i: usize, delta: isize, n: usize) -> usize {
    debug_assert!(n > 0);
    (i as isize + delta).rem_euclid(n as isize) as usize
}

/// Calculate the linear index for a (row, col) coordinate in an N×N grid.
#[inline]
pub fn index_of(row: usize, col: usize, n: usize) -> usize {
    row * n + col
}

/// Count alive neighbors using the Moore neighborhood (8 neighbors) with
/// toroidal wrap on both axes.
///
/// On grids smaller than 3×3 the same cell can be reached through more than
/// one offset; each offset is counted separately.
pub fn count_neighbors(cells: &[bool], n: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for dr in -1..=1 {
        for dc in -1..=1 {
            // Skip the center cell
            if dr == 0 && dc == 0 {
                continue;
            }

            let nr = wrap(row, dr, n);
            let nc = wrap(col, dc, n);

            if cells[index_of(nr, nc, n)] {
                count += 1;
            }
        }
    }

    count
}
