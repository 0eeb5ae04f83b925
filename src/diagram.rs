//! Backend-independent layout of a frame diagram.
//!
//! A [`Diagram`] holds every primitive the figure needs, already positioned in plot
//! coordinates and in drawing order. The plotting backend in [`crate::render`] only
//! translates these primitives; all of the geometry lives here.

use serde::Serialize;

use crate::errors::DiagramError;
use crate::frame::Frame;
use crate::geometry::{point, Force, Point};

/// Distance support lines extend beyond the outermost nodes, in plot units.
pub const SUPPORT_MARGIN: f64 = 0.5;

/// Plot units drawn per newton of load. A 1000 N load becomes a unit-length arrow.
pub const ARROW_SCALE: f64 = 0.001;

/// Positions of the two reference support lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Supports {
    /// X coordinate of the vertical wall.
    pub wall_x: f64,
    /// Y coordinate of the horizontal wall.
    pub wall_y: f64,
}

/// A point load, specified independently of the frame nodes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointLoad {
    /// Where the load acts.
    pub point: Point,
    /// Load vector in newtons.
    pub force: Force,
}

/// A straight line between two plot points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    /// First end of the segment.
    pub start: Point,
    /// Second end of the segment.
    pub end: Point,
}

impl Segment {
    /// Create a segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Arrow representing a load, from the point of application towards the force direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Arrow {
    /// Tail of the arrow (the load point).
    pub tail: Point,
    /// Head of the arrow.
    pub head: Point,
}

impl Arrow {
    /// Scale a force into an arrow anchored at `tail`.
    #[must_use]
    pub fn from_load(load: &PointLoad, scale: f64) -> Self {
        let head = load.point.to_vector() + load.force.to_vector() * scale;
        Self {
            tail: load.point,
            head: head.into(),
        }
    }

    /// Drawn length of the arrow in plot units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.tail.distance_to(self.head)
    }
}

/// Fully laid out diagram, ready to hand to a plotting backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagram {
    /// Vertical support line at `wall_x`.
    pub vertical_support: Segment,
    /// Horizontal support line at `wall_y`.
    pub horizontal_support: Segment,
    /// One segment per bar, in bar order.
    pub bars: Vec<Segment>,
    /// The load arrow.
    pub load_arrow: Arrow,
    /// One marker per node, in node order.
    pub nodes: Vec<Point>,
}

impl Diagram {
    /// Lay out the support lines, bars, load arrow and node markers for a frame.
    ///
    /// The vertical support spans the node Y range and the horizontal support spans the
    /// node X range, each widened by [`SUPPORT_MARGIN`] on both sides. The load arrow is
    /// scaled by [`ARROW_SCALE`].
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::EmptyFrame`] when the frame has no nodes.
    ///
    /// # Examples
    /// ```
    /// use trussplot::{force, point, Diagram, Frame, PointLoad, Supports};
    ///
    /// let frame = Frame::x_braced_square(2.0);
    /// let supports = Supports { wall_x: 0.0, wall_y: 5.0 };
    /// let load = PointLoad { point: point(2.0, 0.0), force: force(0.0, -1_000.0) };
    /// let diagram = Diagram::build(&frame, &supports, &load).expect("frame has nodes");
    /// assert_eq!(diagram.bars.len(), 6);
    /// assert_eq!(diagram.load_arrow.head, point(2.0, -1.0));
    /// ```
    pub fn build(
        frame: &Frame,
        supports: &Supports,
        load: &PointLoad,
    ) -> Result<Self, DiagramError> {
        let (x_min, x_max) = frame.x_extent().ok_or(DiagramError::EmptyFrame)?;
        let (y_min, y_max) = frame.y_extent().ok_or(DiagramError::EmptyFrame)?;

        let vertical_support = Segment::new(
            point(supports.wall_x, y_min - SUPPORT_MARGIN),
            point(supports.wall_x, y_max + SUPPORT_MARGIN),
        );
        let horizontal_support = Segment::new(
            point(x_min - SUPPORT_MARGIN, supports.wall_y),
            point(x_max + SUPPORT_MARGIN, supports.wall_y),
        );
        let bars = frame
            .bar_segments()
            .into_iter()
            .map(|(start, end)| Segment::new(start, end))
            .collect::<Vec<_>>();
        let load_arrow = Arrow::from_load(load, ARROW_SCALE);

        tracing::debug!(
            bars = bars.len(),
            nodes = frame.node_count(),
            load_newtons = load.force.magnitude(),
            arrow_length = load_arrow.length(),
            "laid out frame diagram"
        );

        Ok(Self {
            vertical_support,
            horizontal_support,
            bars,
            load_arrow,
            nodes: frame.positions(),
        })
    }

    /// Both support lines, vertical first.
    #[must_use]
    pub fn supports(&self) -> [Segment; 2] {
        [self.vertical_support, self.horizontal_support]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::force;
    use approx::assert_relative_eq;

    fn reference_supports() -> Supports {
        Supports {
            wall_x: 0.0,
            wall_y: 5.0,
        }
    }

    fn downward_load(magnitude: f64) -> PointLoad {
        PointLoad {
            point: point(2.0, 0.0),
            force: force(0.0, -magnitude),
        }
    }

    #[test]
    fn square_frame_layout() {
        let frame = Frame::x_braced_square(2.0);
        let diagram = Diagram::build(&frame, &reference_supports(), &downward_load(1_000.0))
            .expect("frame has nodes");

        assert_eq!(diagram.nodes.len(), 4);
        assert_eq!(diagram.bars.len(), 6);
        assert_eq!(diagram.supports().len(), 2);

        assert_eq!(
            diagram.vertical_support,
            Segment::new(point(0.0, -0.5), point(0.0, 2.5))
        );
        assert_eq!(
            diagram.horizontal_support,
            Segment::new(point(-0.5, 5.0), point(2.5, 5.0))
        );
        assert_eq!(diagram.load_arrow.tail, point(2.0, 0.0));
        assert_eq!(diagram.load_arrow.head, point(2.0, -1.0));
    }

    #[test]
    fn primitive_counts_follow_the_frame() {
        let mut frame = Frame::new();
        let a = frame.add_node(point(-3.0, 1.0));
        let b = frame.add_node(point(4.0, 1.5));
        let c = frame.add_node(point(0.5, 9.0));
        frame.add_bar(a, b).expect("nodes exist");
        frame.add_bar(b, c).expect("nodes exist");

        let diagram = Diagram::build(&frame, &reference_supports(), &downward_load(10.0))
            .expect("frame has nodes");
        assert_eq!(diagram.nodes.len(), 3);
        assert_eq!(diagram.bars.len(), 2);
        assert_eq!(diagram.bars[1], Segment::new(point(4.0, 1.5), point(0.5, 9.0)));
    }

    #[test]
    fn support_spans_track_node_extents_with_margin() {
        let node_sets: [&[(f64, f64)]; 3] = [
            &[(0.0, 0.0)],
            &[(-2.0, 3.0), (1.0, -4.0), (0.25, 0.75)],
            &[(10.0, 10.0), (12.5, 11.0), (11.0, 20.0), (9.5, 15.0)],
        ];
        for nodes in node_sets {
            let mut frame = Frame::new();
            for &(x, y) in nodes {
                frame.add_node(point(x, y));
            }
            let supports = Supports {
                wall_x: -7.0,
                wall_y: 42.0,
            };
            let diagram = Diagram::build(&frame, &supports, &downward_load(1.0))
                .expect("frame has nodes");

            let x_min = nodes.iter().map(|n| n.0).fold(f64::INFINITY, f64::min);
            let x_max = nodes.iter().map(|n| n.0).fold(f64::NEG_INFINITY, f64::max);
            let y_min = nodes.iter().map(|n| n.1).fold(f64::INFINITY, f64::min);
            let y_max = nodes.iter().map(|n| n.1).fold(f64::NEG_INFINITY, f64::max);

            let vertical = diagram.vertical_support;
            assert_eq!(vertical.start, point(-7.0, y_min - 0.5));
            assert_eq!(vertical.end, point(-7.0, y_max + 0.5));

            let horizontal = diagram.horizontal_support;
            assert_eq!(horizontal.start, point(x_min - 0.5, 42.0));
            assert_eq!(horizontal.end, point(x_max + 0.5, 42.0));
        }
    }

    #[test]
    fn arrow_length_is_linear_in_force() {
        let frame = Frame::x_braced_square(2.0);
        let single = Diagram::build(&frame, &reference_supports(), &downward_load(1_000.0))
            .expect("frame has nodes");
        let double = Diagram::build(&frame, &reference_supports(), &downward_load(2_000.0))
            .expect("frame has nodes");
        assert_relative_eq!(single.load_arrow.length(), 1.0, max_relative = 1.0e-12);
        assert_relative_eq!(
            double.load_arrow.length(),
            2.0 * single.load_arrow.length(),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn arrow_follows_oblique_force() {
        let load = PointLoad {
            point: point(1.0, 1.0),
            force: force(300.0, -400.0),
        };
        let arrow = Arrow::from_load(&load, ARROW_SCALE);
        assert_relative_eq!(arrow.head.x, 1.3, max_relative = 1.0e-12);
        assert_relative_eq!(arrow.head.y, 0.6, max_relative = 1.0e-12);
        assert_relative_eq!(arrow.length(), 0.5, max_relative = 1.0e-12);
    }

    #[test]
    fn load_point_is_not_snapped_to_a_node() {
        let frame = Frame::x_braced_square(2.0);
        let load = PointLoad {
            point: point(0.7, -3.0),
            force: force(0.0, -1_000.0),
        };
        let diagram =
            Diagram::build(&frame, &reference_supports(), &load).expect("frame has nodes");
        assert_eq!(diagram.load_arrow.tail, point(0.7, -3.0));
        assert!(!diagram.nodes.contains(&diagram.load_arrow.tail));
    }

    #[test]
    fn empty_frame_is_rejected() {
        let error = Diagram::build(&Frame::new(), &reference_supports(), &downward_load(1.0))
            .expect_err("no nodes to span");
        assert_eq!(error, DiagramError::EmptyFrame);
    }
}
