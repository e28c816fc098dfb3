//! Circular grid made of concentric rings split into sectors.

use std::fmt::{self, Display, Write as _};

use crate::{Grid, Neighbors, RingPos};

/// Maximum number of rings created by [`CircularGrid::for_size`].
pub const MAX_RINGS: usize = 10;

/// Maximum number of sectors created by [`CircularGrid::for_size`].
pub const MAX_SECTORS: usize = 36;

/// A circular grid of `rings × sectors` cells.
///
/// A cell connects radially to the same sector on the inner and outer ring,
/// and tangentially to the previous and next sector on its own ring. Sector
/// indices wrap around.
///
/// The start is sector 0 of the innermost ring and the goal sits on the
/// outermost ring, half way around.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{CircularGrid, Grid, RingPos};
///
/// let grid = CircularGrid::new(3, 8);
/// assert_eq!(grid.goal(), RingPos::new(2, 4));
///
/// // Sector 0 wraps around to sector 7.
/// let neighbors = grid.neighbors(RingPos::new(0, 0));
/// assert_eq!(
///     neighbors.as_slice(),
///     [RingPos::new(1, 0), RingPos::new(0, 7), RingPos::new(0, 1)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularGrid {
    rings: usize,
    sectors: usize,
    open: Vec<bool>,
}

impl CircularGrid {
    /// Creates a fully walkable grid.
    ///
    /// # Panics
    ///
    /// Panics if `rings` or `sectors` is zero.
    #[must_use]
    pub fn new(rings: usize, sectors: usize) -> Self {
        assert!(rings > 0 && sectors > 0, "grid must have at least one cell");
        Self {
            rings,
            sectors,
            open: vec![true; rings * sectors],
        }
    }

    /// Creates a fully walkable grid scaled from a maze size.
    ///
    /// Uses `min(size, 10)` rings and `min(2 × size, 36)` sectors.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn for_size(size: usize) -> Self {
        Self::new(size.min(MAX_RINGS), (size * 2).min(MAX_SECTORS))
    }

    /// Returns the number of rings.
    #[must_use]
    #[inline]
    pub fn rings(&self) -> usize {
        self.rings
    }

    /// Returns the number of sectors per ring.
    #[must_use]
    #[inline]
    pub fn sectors(&self) -> usize {
        self.sectors
    }

    /// Returns every position, ring by ring.
    pub fn positions(&self) -> impl Iterator<Item = RingPos> + use<> {
        let sectors = self.sectors;
        (0..self.rings).flat_map(move |ring| (0..sectors).map(move |sector| RingPos::new(ring, sector)))
    }

    /// Marks a cell as walkable or blocked.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_walkable(&mut self, pos: RingPos, walkable: bool) {
        assert!(self.contains(pos), "{pos} is out of bounds");
        self.open[pos.ring() * self.sectors + pos.sector()] = walkable;
    }

    /// Opens the start and goal cells.
    pub fn open_endpoints(&mut self) {
        self.set_walkable(self.start(), true);
        self.set_walkable(self.goal(), true);
    }

    fn sector_distance(&self, a: usize, b: usize) -> usize {
        let d = a.abs_diff(b) % self.sectors;
        d.min(self.sectors - d)
    }
}

impl Grid for CircularGrid {
    type Position = RingPos;

    #[inline]
    fn start(&self) -> RingPos {
        RingPos::new(0, 0)
    }

    #[inline]
    fn goal(&self) -> RingPos {
        RingPos::new(self.rings - 1, self.sectors / 2)
    }

    #[inline]
    fn contains(&self, pos: RingPos) -> bool {
        pos.ring() < self.rings && pos.sector() < self.sectors
    }

    #[inline]
    fn is_walkable(&self, pos: RingPos) -> bool {
        self.contains(pos) && self.open[pos.ring() * self.sectors + pos.sector()]
    }

    fn neighbors(&self, pos: RingPos) -> Neighbors<RingPos> {
        let (ring, sector) = (pos.ring(), pos.sector());
        let counter_clockwise = (sector + self.sectors - 1) % self.sectors;
        let clockwise = (sector + 1) % self.sectors;
        let candidates = [
            ring.checked_sub(1).map(|r| RingPos::new(r, sector)),
            Some(RingPos::new(ring + 1, sector)),
            Some(RingPos::new(ring, counter_clockwise)),
            (clockwise != counter_clockwise).then_some(RingPos::new(ring, clockwise)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&next| next != pos && self.is_walkable(next))
            .collect()
    }

    fn distance_estimate(&self, from: RingPos, to: RingPos) -> u32 {
        let steps = from.ring().abs_diff(to.ring()) + self.sector_distance(from.sector(), to.sector());
        u32::try_from(steps).unwrap_or(u32::MAX)
    }
}

impl Display for CircularGrid {
    /// Writes one line per ring, innermost first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ring in 0..self.rings {
            if ring > 0 {
                f.write_char('\n')?;
            }
            for sector in 0..self.sectors {
                let pos = RingPos::new(ring, sector);
                let ch = if pos == self.start() {
                    'S'
                } else if pos == self.goal() {
                    'G'
                } else if self.is_walkable(pos) {
                    '.'
                } else {
                    '#'
                };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}
