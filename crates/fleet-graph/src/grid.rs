//! Rectangular grid layouts.
//!
//! Grid cells are numbered row-major starting at 1:
//!
//! ```text
//!   cols = 3
//!   1  2  3      y = 0
//!   4  5  6      y = 1
//! ```
//!
//! so node `n` sits at `x = (n - 1) % cols`, `y = (n - 1) / cols`.

use fleet_core::NodeId;

use crate::{Graph, GraphBuilder};

/// Dimensions of a rectangular grid whose cells are graph nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
}

impl GridLayout {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Like [`new`](Self::new), but `None` for an empty grid or one with
    /// more cells than `NodeId` can number.
    pub fn checked(rows: u32, cols: u32) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        rows.checked_mul(cols)?;
        Some(Self { rows, cols })
    }

    /// Saturates at `u32::MAX` for layouts not built with
    /// [`checked`](Self::checked).
    pub fn cell_count(&self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }

    /// `(x, y)` of `node`, or `None` if the node is outside the grid.
    pub fn node_to_coord(&self, node: NodeId) -> Option<(u32, u32)> {
        if node.0 == 0 || node.0 > self.cell_count() {
            return None;
        }
        let zero_based = node.0 - 1;
        Some((zero_based % self.cols, zero_based / self.cols))
    }

    /// Inverse of [`node_to_coord`](Self::node_to_coord).
    pub fn coord_to_node(&self, x: u32, y: u32) -> Option<NodeId> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        y.checked_mul(self.cols)
            .and_then(|v| v.checked_add(x))
            .and_then(|v| v.checked_add(1))
            .map(NodeId)
    }

    /// Build the 4-connected grid graph for this layout.
    ///
    /// Neighbors are listed up, left, right, down, which is ascending node
    /// id order, so enumeration on a grid is reproducible.
    pub fn build_graph(&self) -> Graph {
        let mut b = GraphBuilder::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                let Some(node) = self.coord_to_node(x, y) else { continue };
                b.add_node(node);

                let up    = y.checked_sub(1).and_then(|uy| self.coord_to_node(x, uy));
                let left  = x.checked_sub(1).and_then(|lx| self.coord_to_node(lx, y));
                let right = self.coord_to_node(x + 1, y);
                let down  = self.coord_to_node(x, y + 1);

                for n in [up, left, right, down].into_iter().flatten() {
                    b.add_directed_edge(node, n);
                }
            }
        }
        b.build()
    }
}
