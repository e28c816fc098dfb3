//! Layered 3D grid built from rectangular layers.

use std::fmt::{self, Display, Write as _};

use crate::{Grid, Neighbors, Pos2, Pos3, RectGrid};

/// A stack of equally sized [`RectGrid`] layers.
///
/// A cell connects to its four in-layer neighbours and to the cells directly
/// above and below it in the adjacent layers. The start defaults to the
/// top-left cell of the first layer and the goal to the bottom-right cell of
/// the last layer. The start and goal recorded on the individual layers are
/// ignored.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Grid, LayeredGrid, Pos3};
///
/// let grid = LayeredGrid::new(3, 4, 4);
/// assert_eq!(grid.goal(), Pos3::new(2, 3, 3));
/// assert_eq!(grid.neighbors(Pos3::new(1, 0, 0)).len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeredGrid {
    layers: Vec<RectGrid>,
    start: Pos3,
    goal: Pos3,
}

impl LayeredGrid {
    /// Creates a grid of `depth` fully walkable layers.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    #[must_use]
    pub fn new(depth: usize, rows: usize, cols: usize) -> Self {
        Self::from_layers((0..depth).map(|_| RectGrid::new(rows, cols)).collect())
    }

    /// Creates a grid from existing layers.
    ///
    /// # Panics
    ///
    /// Panics if `layers` is empty or the layers differ in size.
    #[must_use]
    pub fn from_layers(layers: Vec<RectGrid>) -> Self {
        assert!(!layers.is_empty(), "layered grid needs at least one layer");
        let (rows, cols) = (layers[0].rows(), layers[0].cols());
        assert!(
            layers
                .iter()
                .all(|layer| layer.rows() == rows && layer.cols() == cols),
            "all layers must have the same size"
        );
        let depth = layers.len();
        Self {
            layers,
            start: Pos3::new(0, 0, 0),
            goal: Pos3::new(depth - 1, rows - 1, cols - 1),
        }
    }

    /// Returns the number of layers.
    #[must_use]
    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layer at `index`, if any.
    #[must_use]
    #[inline]
    pub fn layer(&self, index: usize) -> Option<&RectGrid> {
        self.layers.get(index)
    }

    /// Returns all layers, first to last.
    #[must_use]
    #[inline]
    pub fn layers(&self) -> &[RectGrid] {
        &self.layers
    }

    /// Marks a cell as walkable or blocked.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_walkable(&mut self, pos: Pos3, walkable: bool) {
        self.layers[pos.layer()].set_walkable(pos.flatten(), walkable);
    }

    /// Opens the start and goal cells.
    pub fn open_endpoints(&mut self) {
        self.set_walkable(self.start, true);
        self.set_walkable(self.goal, true);
    }
}

impl Grid for LayeredGrid {
    type Position = Pos3;

    #[inline]
    fn start(&self) -> Pos3 {
        self.start
    }

    #[inline]
    fn goal(&self) -> Pos3 {
        self.goal
    }

    #[inline]
    fn contains(&self, pos: Pos3) -> bool {
        self.layers
            .get(pos.layer())
            .is_some_and(|layer| layer.contains(pos.flatten()))
    }

    #[inline]
    fn is_walkable(&self, pos: Pos3) -> bool {
        self.layers
            .get(pos.layer())
            .is_some_and(|layer| layer.is_walkable(pos.flatten()))
    }

    fn neighbors(&self, pos: Pos3) -> Neighbors<Pos3> {
        let mut neighbors = Neighbors::new();
        let layer = pos.layer();
        if let Some(grid) = self.layers.get(layer) {
            let flat: Pos2 = pos.flatten();
            neighbors.extend(
                grid.neighbors(flat)
                    .into_iter()
                    .map(|next| Pos3::new(layer, next.row(), next.col())),
            );
        }
        let vertical = [layer.checked_sub(1), Some(layer + 1)];
        for next_layer in vertical.into_iter().flatten() {
            let next = Pos3::new(next_layer, pos.row(), pos.col());
            if self.is_walkable(next) {
                neighbors.push(next);
            }
        }
        neighbors
    }
}

impl Display for LayeredGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "layer {i}:")?;
            for row in 0..layer.rows() {
                f.write_char('\n')?;
                for col in 0..layer.cols() {
                    let pos = Pos3::new(i, row, col);
                    let ch = if pos == self.start {
                        'S'
                    } else if pos == self.goal {
                        'G'
                    } else if self.is_walkable(pos) {
                        '.'
                    } else {
                        '#'
                    };
                    f.write_char(ch)?;
                }
            }
        }
        Ok(())
    }
}
