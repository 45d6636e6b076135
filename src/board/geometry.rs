//! Board coordinate geometry.
//!
//! Index validity and the column-membership sets used to stop an offset from
//! wrapping across the left or right edge of the board. An offset that moves
//! one column left (-9, -1, 7, 15, -17) must not start on the first column;
//! one that moves two columns left (-10, 6) must not start on the first or
//! second column. Rightward offsets mirror this with the eighth and seventh
//! columns.

use once_cell::sync::Lazy;

use super::Square;

pub const NUM_SQUARES: usize = 64;
pub const NUM_SQUARES_PER_ROW: usize = 8;

fn init_column(column: usize) -> [bool; NUM_SQUARES] {
    let mut set = [false; NUM_SQUARES];
    for idx in (column..NUM_SQUARES).step_by(NUM_SQUARES_PER_ROW) {
        set[idx] = true;
    }
    set
}

fn init_row(row: usize) -> [bool; NUM_SQUARES] {
    let mut set = [false; NUM_SQUARES];
    let start = row * NUM_SQUARES_PER_ROW;
    for flag in &mut set[start..start + NUM_SQUARES_PER_ROW] {
        *flag = true;
    }
    set
}

static FIRST_COLUMN: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| init_column(0));
static SECOND_COLUMN: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| init_column(1));
static SEVENTH_COLUMN: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| init_column(6));
static EIGHTH_COLUMN: Lazy<[bool; NUM_SQUARES]> = Lazy::new(|| init_column(7));

/// Rows indexed from the top: row 0 is the eighth rank.
static ROWS: Lazy<[[bool; NUM_SQUARES]; NUM_SQUARES_PER_ROW]> =
    Lazy::new(|| std::array::from_fn(init_row));

/// True iff `index` addresses a square on the board.
#[inline]
#[must_use]
pub const fn is_valid(index: i32) -> bool {
    index >= 0 && index < NUM_SQUARES as i32
}

#[inline]
#[must_use]
pub fn is_in_first_column(sq: Square) -> bool {
    FIRST_COLUMN[sq.index()]
}

#[inline]
#[must_use]
pub fn is_in_second_column(sq: Square) -> bool {
    SECOND_COLUMN[sq.index()]
}

#[inline]
#[must_use]
pub fn is_in_seventh_column(sq: Square) -> bool {
    SEVENTH_COLUMN[sq.index()]
}

#[inline]
#[must_use]
pub fn is_in_eighth_column(sq: Square) -> bool {
    EIGHTH_COLUMN[sq.index()]
}

/// True iff `sq` lies on `row` (0 = eighth rank, 7 = first rank).
#[inline]
#[must_use]
pub fn is_in_row(sq: Square, row: usize) -> bool {
    ROWS.get(row).is_some_and(|set| set[sq.index()])
}

/// Horizontal component of a raw index offset, in columns.
///
/// Valid for every offset a chess piece uses (|offset| <= 17): the result is
/// in `-2..=2` and negative means "towards file a".
#[inline]
#[must_use]
pub const fn column_shift(offset: i8) -> i8 {
    (offset + 4).rem_euclid(NUM_SQUARES_PER_ROW as i8) - 4
}

/// Stepping from `sq` by `offset` would wrap past the left edge.
#[must_use]
pub fn is_first_column_exclusion(sq: Square, offset: i8) -> bool {
    match column_shift(offset) {
        -1 => is_in_first_column(sq),
        -2 => is_in_first_column(sq) || is_in_second_column(sq),
        _ => false,
    }
}

/// Stepping from `sq` by `offset` would wrap past the right edge.
#[must_use]
pub fn is_eighth_column_exclusion(sq: Square, offset: i8) -> bool {
    match column_shift(offset) {
        1 => is_in_eighth_column(sq),
        2 => is_in_seventh_column(sq) || is_in_eighth_column(sq),
        _ => false,
    }
}

/// Either edge exclusion fires for this step.
#[inline]
#[must_use]
pub fn is_edge_exclusion(sq: Square, offset: i8) -> bool {
    is_first_column_exclusion(sq, offset) || is_eighth_column_exclusion(sq, offset)
}

/// One checked step: on-board and not wrapping an edge.
#[inline]
#[must_use]
pub fn step(sq: Square, offset: i8) -> Option<Square> {
    if is_edge_exclusion(sq, offset) {
        None
    } else {
        sq.offset(offset)
    }
}
