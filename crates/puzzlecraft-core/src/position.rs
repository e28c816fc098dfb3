//! Coordinate types for grid topologies.

use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

/// A coordinate that can identify a cell of a [`Grid`](crate::Grid).
///
/// Coordinates are small `Copy` values with structural equality. The total
/// order is only used to break ties deterministically in priority queues.
pub trait Coordinate: Copy + Eq + Ord + Hash + Debug + Default {
    /// Returns the sum of absolute differences over every axis.
    fn manhattan(self, other: Self) -> u32;
}

#[inline]
fn axis_distance(a: usize, b: usize) -> u32 {
    u32::try_from(a.abs_diff(b)).unwrap_or(u32::MAX)
}

/// A position on a flat grid.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Coordinate as _, Pos2};
///
/// let a = Pos2::new(0, 0);
/// let b = Pos2::new(2, 3);
/// assert_eq!(a.manhattan(b), 5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos2 {
    row: usize,
    col: usize,
}

impl Pos2 {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Coordinate for Pos2 {
    #[inline]
    fn manhattan(self, other: Self) -> u32 {
        axis_distance(self.row, other.row).saturating_add(axis_distance(self.col, other.col))
    }
}

impl Display for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A position on a layered grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos3 {
    layer: usize,
    row: usize,
    col: usize,
}

impl Pos3 {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(layer: usize, row: usize, col: usize) -> Self {
        Self { layer, row, col }
    }

    /// Returns the layer index.
    #[must_use]
    #[inline]
    pub const fn layer(self) -> usize {
        self.layer
    }

    /// Returns the row within the layer.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column within the layer.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position projected onto its layer.
    #[must_use]
    #[inline]
    pub const fn flatten(self) -> Pos2 {
        Pos2::new(self.row, self.col)
    }
}

impl Coordinate for Pos3 {
    #[inline]
    fn manhattan(self, other: Self) -> u32 {
        axis_distance(self.layer, other.layer)
            .saturating_add(axis_distance(self.row, other.row))
            .saturating_add(axis_distance(self.col, other.col))
    }
}

impl Display for Pos3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.layer, self.row, self.col)
    }
}

/// A position on a circular grid: a ring (0 is innermost) and a sector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingPos {
    ring: usize,
    sector: usize,
}

impl RingPos {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(ring: usize, sector: usize) -> Self {
        Self { ring, sector }
    }

    /// Returns the ring index.
    #[must_use]
    #[inline]
    pub const fn ring(self) -> usize {
        self.ring
    }

    /// Returns the sector index.
    #[must_use]
    #[inline]
    pub const fn sector(self) -> usize {
        self.sector
    }
}

impl Coordinate for RingPos {
    #[inline]
    fn manhattan(self, other: Self) -> u32 {
        axis_distance(self.ring, other.ring).saturating_add(axis_distance(self.sector, other.sector))
    }
}

impl Display for RingPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ring {}, sector {})", self.ring, self.sector)
    }
}
