//! Error types produced while building frames, evaluating rod sections or drawing diagrams.

use petgraph::graph::NodeIndex;
use thiserror::Error;

/// Error returned when editing a [`Frame`](crate::Frame) with invalid indices.
///
/// # Examples
///
/// ```
/// use petgraph::graph::NodeIndex;
/// use trussplot::{point, Frame, FrameEditError};
///
/// let mut frame = Frame::new();
/// let a = frame.add_node(point(0.0, 0.0));
/// let missing = NodeIndex::new(7);
/// let error = frame.add_bar(a, missing).expect_err("unknown node is rejected");
/// assert_eq!(error, FrameEditError::UnknownNode(missing));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum FrameEditError {
    /// Returned when a node cannot be found in the frame.
    #[error("node {0:?} does not exist in this frame")]
    UnknownNode(NodeIndex),
}

/// Error returned when rod section inputs are not physically meaningful.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RodPropertyError {
    /// Returned when the side length of the square section is zero, negative or not finite.
    #[error("rod side must be positive (received {side})")]
    NonPositiveSide {
        /// Rejected side length in metres.
        side: f64,
    },
    /// Returned when the Young's modulus is zero, negative or not finite.
    #[error("Young's modulus must be positive (received {youngs_modulus})")]
    NonPositiveYoungsModulus {
        /// Rejected modulus in pascals.
        youngs_modulus: f64,
    },
}

/// Error returned when a diagram cannot be laid out.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DiagramError {
    /// Returned when the frame has no nodes, so support spans are undefined.
    #[error("frame has no nodes; support lines need at least one node to span")]
    EmptyFrame,
}

/// Error returned when a diagram cannot be written by the plotting backend.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// Returned when the plotting backend reports a failure.
    #[error("plotting backend failed: {0}")]
    Backend(String),
}
