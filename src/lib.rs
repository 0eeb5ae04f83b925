#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod diagram;
pub mod errors;
pub mod frame;
pub mod geometry;
pub mod render;
pub mod rod;

pub use diagram::{Arrow, Diagram, PointLoad, Segment, Supports, ARROW_SCALE, SUPPORT_MARGIN};
pub use errors::{DiagramError, FrameEditError, RenderError, RodPropertyError};
pub use frame::Frame;
pub use geometry::{force, point, Force, Point};
pub use render::{DiagramStyle, FigureSettings};
pub use rod::{compute_rod_properties, RodProperties, SectionProperties};
