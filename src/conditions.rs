use trussplot::{force, point, Frame, FrameEditError, Point, PointLoad, RodProperties, Supports};

/// Fixed inputs for the braced square demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareFrameConditions {
    /// Node coordinates in metres, indexed 0..3.
    pub nodes: Vec<Point>,
    /// Bars as pairs of node indices: four edges, then the two diagonals.
    pub bars: Vec<(usize, usize)>,
    /// Reference walls drawn for context.
    pub supports: Supports,
    /// Load drawn on the diagram. Its point is an independent literal, not a node lookup.
    pub load: PointLoad,
    /// Aluminium rod used for every bar.
    pub rod: RodProperties,
}

impl Default for SquareFrameConditions {
    fn default() -> Self {
        Self {
            // A 2 m square, numbered anticlockwise from the origin.
            nodes: vec![
                point(0.0, 0.0),
                point(0.0, 2.0),
                point(2.0, 2.0),
                point(2.0, 0.0),
            ],
            // The four edges alone would rack under shear; the two diagonals add the
            // X bracing (https://en.wikipedia.org/wiki/Cross_bracing).
            bars: vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)],
            // Walls are reference lines only and are not attached to any node.
            supports: Supports {
                wall_x: 0.0,
                wall_y: 5.0,
            },
            // 1 kN acting straight down. The point happens to coincide with node 3 but
            // is kept as its own literal.
            load: PointLoad {
                point: point(2.0, 0.0),
                force: force(0.0, -1_000.0),
            },
            // 35 mm solid square aluminium bar: E = 69 GPa, yield = 276 MPa
            // (typical of 6061-T6, https://en.wikipedia.org/wiki/6061_aluminium_alloy).
            rod: RodProperties::new(0.035, 69.0e9, 276.0e6),
        }
    }
}

/// Assemble the frame described by the conditions.
pub fn build_square_frame(conditions: &SquareFrameConditions) -> Result<Frame, FrameEditError> {
    let mut frame = Frame::new();

    // Nodes first, so bar indices below refer to insertion order.
    for &position in &conditions.nodes {
        frame.add_node(position);
    }

    // Bars are only added once every index has been checked against the nodes.
    frame.add_bars(&conditions.bars)?;
    tracing::debug!(
        nodes = frame.node_count(),
        bars = frame.bar_count(),
        "built square frame"
    );
    Ok(frame)
}
