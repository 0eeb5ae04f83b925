//! Node and bar storage for pin-jointed planar frames.

use petgraph::graph::{EdgeIndex, Graph, NodeIndex};

use crate::errors::FrameEditError;
use crate::geometry::{point, Point};

/// Internal representation of a frame node.
#[derive(Clone, Debug)]
struct Node {
    /// Position of the node in metres.
    position: Point,
}

/// Internal representation of a bar. Connectivity lives on the graph edge itself.
#[derive(Clone, Debug, Default)]
struct Bar;

/// Container for the connectivity of a pin-jointed frame.
///
/// Nodes and bars keep their insertion order, so node `i` is the `i`-th call to
/// [`Frame::add_node`] and bars are drawn in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Underlying graph storage for nodes and bars.
    graph: Graph<Node, Bar>,
}

impl Frame {
    /// Create an empty frame.
    ///
    /// # Examples
    /// ```
    /// use trussplot::Frame;
    ///
    /// let frame = Frame::new();
    /// assert_eq!(frame.node_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Build a square of the given side with its four edges and both diagonals.
    ///
    /// Nodes are numbered `(0, 0)`, `(0, side)`, `(side, side)`, `(side, 0)`; bars are
    /// the edges `0-1`, `1-2`, `2-3`, `3-0` followed by the diagonals `0-2` and `1-3`.
    ///
    /// # Examples
    /// ```
    /// use trussplot::Frame;
    ///
    /// let frame = Frame::x_braced_square(2.0);
    /// assert_eq!(frame.node_count(), 4);
    /// assert_eq!(frame.bar_count(), 6);
    /// ```
    #[must_use]
    pub fn x_braced_square(side: f64) -> Self {
        let mut frame = Self::new();
        let corners = [
            frame.add_node(point(0.0, 0.0)),
            frame.add_node(point(0.0, side)),
            frame.add_node(point(side, side)),
            frame.add_node(point(side, 0.0)),
        ];
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)] {
            frame.graph.add_edge(corners[a], corners[b], Bar);
        }
        frame
    }

    /// Return the number of nodes in the frame.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of bars in the frame.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add a new node to the frame.
    pub fn add_node(&mut self, position: Point) -> NodeIndex {
        self.graph.add_node(Node { position })
    }

    /// Connect two existing nodes with a bar.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownNode`] when either endpoint is not part of this frame.
    pub fn add_bar(&mut self, start: NodeIndex, end: NodeIndex) -> Result<EdgeIndex, FrameEditError> {
        for node in [start, end] {
            if self.graph.node_weight(node).is_none() {
                return Err(FrameEditError::UnknownNode(node));
            }
        }
        Ok(self.graph.add_edge(start, end, Bar))
    }

    /// Connect nodes addressed by their insertion index.
    ///
    /// Every pair is checked before any bar is added, so a failed call leaves the frame
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownNode`] for the first pair that references a missing node.
    pub fn add_bars(&mut self, pairs: &[(usize, usize)]) -> Result<Vec<EdgeIndex>, FrameEditError> {
        let pairs = pairs
            .iter()
            .map(|&(a, b)| (NodeIndex::new(a), NodeIndex::new(b)))
            .collect::<Vec<_>>();
        for node in pairs.iter().flat_map(|&(a, b)| [a, b]) {
            if self.graph.node_weight(node).is_none() {
                return Err(FrameEditError::UnknownNode(node));
            }
        }
        Ok(pairs
            .into_iter()
            .map(|(start, end)| self.graph.add_edge(start, end, Bar))
            .collect())
    }

    /// Retrieve the position of a node.
    #[must_use]
    pub fn node_position(&self, node: NodeIndex) -> Option<Point> {
        self.graph.node_weight(node).map(|node| node.position)
    }

    /// Retrieve the positions of the two nodes a bar connects.
    #[must_use]
    pub fn bar_endpoints(&self, bar: EdgeIndex) -> Option<(Point, Point)> {
        let (start, end) = self.graph.edge_endpoints(bar)?;
        Some((self.node_position(start)?, self.node_position(end)?))
    }

    /// Node positions in insertion order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.graph
            .node_weights()
            .map(|node| node.position)
            .collect()
    }

    /// Endpoints of every bar in insertion order.
    #[must_use]
    pub fn bar_segments(&self) -> Vec<(Point, Point)> {
        self.graph
            .edge_indices()
            .filter_map(|bar| self.bar_endpoints(bar))
            .collect()
    }

    /// Smallest and largest node X coordinate, or `None` for an empty frame.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.graph.node_weights().map(|node| node.position.x))
    }

    /// Smallest and largest node Y coordinate, or `None` for an empty frame.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.graph.node_weights().map(|node| node.position.y))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, value| match range {
        None => Some((value, value)),
        Some((low, high)) => Some((low.min(value), high.max(value))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_braced_square_has_expected_topology() {
        let frame = Frame::x_braced_square(2.0);
        assert_eq!(frame.node_count(), 4);
        assert_eq!(frame.bar_count(), 6);
        assert_eq!(
            frame.positions(),
            vec![
                point(0.0, 0.0),
                point(0.0, 2.0),
                point(2.0, 2.0),
                point(2.0, 0.0)
            ]
        );
        let segments = frame.bar_segments();
        assert_eq!(segments[4], (point(0.0, 0.0), point(2.0, 2.0)));
        assert_eq!(segments[5], (point(0.0, 2.0), point(2.0, 0.0)));
    }

    #[test]
    fn add_bars_matches_builder() {
        let mut frame = Frame::new();
        for (x, y) in [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)] {
            frame.add_node(point(x, y));
        }
        let bars = frame
            .add_bars(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)])
            .expect("all endpoints exist");
        assert_eq!(bars.len(), 6);
        assert_eq!(frame.bar_segments(), Frame::x_braced_square(2.0).bar_segments());
    }

    #[test]
    fn bar_to_unknown_node_is_rejected() {
        let mut frame = Frame::new();
        let a = frame.add_node(point(0.0, 0.0));

        let mut other = Frame::new();
        other.add_node(point(0.0, 0.0));
        let foreign = other.add_node(point(1.0, 0.0));

        let error = frame.add_bar(a, foreign).expect_err("foreign node rejected");
        assert_eq!(error, FrameEditError::UnknownNode(foreign));
        assert_eq!(frame.bar_count(), 0);

        let error = frame
            .add_bars(&[(0, 3)])
            .expect_err("out of range index rejected");
        assert_eq!(error, FrameEditError::UnknownNode(NodeIndex::new(3)));
    }

    #[test]
    fn failed_add_bars_leaves_frame_unchanged() {
        let mut frame = Frame::new();
        frame.add_node(point(0.0, 0.0));
        frame.add_node(point(1.0, 0.0));

        let error = frame
            .add_bars(&[(0, 1), (1, 0), (1, 9)])
            .expect_err("dangling pair rejected");
        assert_eq!(error, FrameEditError::UnknownNode(NodeIndex::new(9)));
        assert_eq!(frame.bar_count(), 0);

        let bars = frame.add_bars(&[(0, 1)]).expect("valid pair accepted");
        assert_eq!(bars.len(), 1);
        assert_eq!(frame.bar_count(), 1);
    }

    #[test]
    fn extents_cover_all_nodes() {
        let mut frame = Frame::new();
        assert_eq!(frame.x_extent(), None);
        assert_eq!(frame.y_extent(), None);

        frame.add_node(point(-1.5, 4.0));
        assert_eq!(frame.x_extent(), Some((-1.5, -1.5)));

        frame.add_node(point(3.0, -2.0));
        frame.add_node(point(0.5, 7.25));
        assert_eq!(frame.x_extent(), Some((-1.5, 3.0)));
        assert_eq!(frame.y_extent(), Some((-2.0, 7.25)));
    }
}
