/// Count type used for per-cell neighbor mine totals.
pub type NeighborCount = u16;

/// Largest number of cells a single board may hold; keeps every count and
/// flat cell index representable as [`NeighborCount`].
pub const MAX_CELLS: usize = NeighborCount::MAX as usize;

/// Splits a row-major flat cell index into `(row, col)`.
#[inline]
pub(crate) fn unflatten(index: usize, width: usize) -> (usize, usize) {
    (index / width, index % width)
}

/// Iterates the in-bounds cells of the Chebyshev-radius box around `center`,
/// excluding `center` itself.
pub(crate) fn neighbors(
    center: (usize, usize),
    bounds: (usize, usize),
    radius: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (row, col) = center;
    let (rows, cols) = bounds;
    let row_lo = row.saturating_sub(radius);
    let row_hi = row.saturating_add(radius).min(rows - 1);
    let col_lo = col.saturating_sub(radius);
    let col_hi = col.saturating_add(radius).min(cols - 1);
    (row_lo..=row_hi)
        .flat_map(move |nr| (col_lo..=col_hi).map(move |nc| (nr, nc)))
        .filter(move |&cell| cell != center)
}
