//! Draw a [`Diagram`] with the `plotpy` matplotlib backend.

use std::ffi::OsStr;

use plotpy::{Canvas, Curve, GraphMaker, Plot};

use crate::diagram::{Arrow, Diagram, Segment};
use crate::errors::RenderError;
use crate::geometry::Point;

/// Axis and figure settings applied after all layers are added.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureSettings {
    /// Keep one plotted unit the same length on both axes.
    pub equal_axes: bool,
    /// Draw the background grid.
    pub grid: bool,
    /// Figure title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Figure width and height in inches.
    pub size_inches: (f64, f64),
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            equal_axes: true,
            grid: true,
            title: "Square with X Bracing".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            size_inches: (6.0, 6.0),
        }
    }
}

impl FigureSettings {
    /// Apply the settings to a plot.
    pub fn apply(&self, plot: &mut Plot) {
        plot.set_equal_axes(self.equal_axes).set_title(&self.title);
        if self.grid {
            plot.grid_and_labels(&self.x_label, &self.y_label);
        } else {
            plot.set_label_x(&self.x_label).set_label_y(&self.y_label);
        }
        plot.set_figure_size_inches(self.size_inches.0, self.size_inches.1);
    }
}

/// Colours and widths for each layer of a frame diagram, plus the figure settings.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramStyle {
    /// Colour of the support lines.
    pub support_color: String,
    /// Line width of the support lines.
    pub support_width: f64,
    /// Colour of the bars.
    pub bar_color: String,
    /// Line width of the bars.
    pub bar_width: f64,
    /// Colour of the load arrow.
    pub arrow_color: String,
    /// Matplotlib arrow style, e.g. `-|>`.
    pub arrow_style: String,
    /// Size of the arrow head.
    pub arrow_head_scale: f64,
    /// Line width of the arrow shaft.
    pub arrow_width: f64,
    /// Colour of the node markers.
    pub node_color: String,
    /// Marker size of the nodes in points.
    pub node_size: f64,
    /// Axes, labels, title and figure size.
    pub figure: FigureSettings,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            support_color: "black".to_string(),
            support_width: 3.0,
            bar_color: "tab:blue".to_string(),
            bar_width: 2.0,
            arrow_color: "tab:red".to_string(),
            arrow_style: "-|>".to_string(),
            arrow_head_scale: 15.0,
            arrow_width: 2.0,
            node_color: "tab:orange".to_string(),
            node_size: 7.75,
            figure: FigureSettings::default(),
        }
    }
}

/// Plot objects for each layer of the diagram.
pub struct Layers {
    /// Vertical then horizontal support line.
    pub supports: Vec<Curve>,
    /// One curve per bar.
    pub bars: Vec<Curve>,
    /// The load arrow.
    pub arrow: Canvas,
    /// All node markers in a single scatter curve.
    pub nodes: Curve,
}

impl Layers {
    /// Build the plot objects for a diagram.
    #[must_use]
    pub fn new(diagram: &Diagram, style: &DiagramStyle) -> Self {
        let supports = diagram
            .supports()
            .iter()
            .map(|segment| line(segment, &style.support_color, style.support_width))
            .collect();
        let bars = diagram
            .bars
            .iter()
            .map(|segment| line(segment, &style.bar_color, style.bar_width))
            .collect();
        Self {
            supports,
            bars,
            arrow: arrow(&diagram.load_arrow, style),
            nodes: markers(&diagram.nodes, style),
        }
    }

    /// Layers in the order they are added to the plot: supports, bars, arrow, nodes.
    ///
    /// Later entries are drawn over earlier ones, so the node markers end up on top.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&dyn GraphMaker> {
        let mut order: Vec<&dyn GraphMaker> = Vec::new();
        for curve in self.supports.iter().chain(self.bars.iter()) {
            order.push(curve);
        }
        order.push(&self.arrow);
        order.push(&self.nodes);
        order
    }
}

fn line(segment: &Segment, color: &str, width: f64) -> Curve {
    let mut curve = Curve::new();
    curve.set_line_color(color).set_line_width(width);
    let x = vec![segment.start.x, segment.end.x];
    let y = vec![segment.start.y, segment.end.y];
    curve.draw(&x, &y);
    curve
}

fn arrow(load_arrow: &Arrow, style: &DiagramStyle) -> Canvas {
    let mut canvas = Canvas::new();
    canvas
        .set_edge_color(&style.arrow_color)
        .set_face_color(&style.arrow_color)
        .set_line_width(style.arrow_width)
        .set_arrow_style(&style.arrow_style)
        .set_arrow_scale(style.arrow_head_scale);
    canvas.draw_arrow(
        load_arrow.tail.x,
        load_arrow.tail.y,
        load_arrow.head.x,
        load_arrow.head.y,
    );
    canvas
}

fn markers(nodes: &[Point], style: &DiagramStyle) -> Curve {
    let mut curve = Curve::new();
    curve
        .set_line_style("None")
        .set_marker_style("o")
        .set_marker_color(&style.node_color)
        .set_marker_line_color(&style.node_color)
        .set_marker_size(style.node_size);
    let x = nodes.iter().map(|node| node.x).collect::<Vec<_>>();
    let y = nodes.iter().map(|node| node.y).collect::<Vec<_>>();
    curve.draw(&x, &y);
    curve
}

/// Assemble the complete figure: supports, bars, arrow, then nodes on top.
#[must_use]
pub fn compose(diagram: &Diagram, style: &DiagramStyle) -> Plot {
    let layers = Layers::new(diagram, style);
    let mut plot = Plot::new();
    for layer in layers.draw_order() {
        plot.add(layer);
    }
    style.figure.apply(&mut plot);
    plot
}

/// Compose the figure and write it to `figure_path`.
///
/// The backend writes a python script next to the figure and runs it with matplotlib.
///
/// # Errors
///
/// Returns [`RenderError::Backend`] when python or matplotlib fails.
pub fn save<P>(diagram: &Diagram, style: &DiagramStyle, figure_path: &P) -> Result<(), RenderError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let plot = compose(diagram, style);
    let path: &OsStr = figure_path.as_ref();
    tracing::info!(?path, "saving frame diagram");
    plot.save(figure_path)
        .map_err(|message| RenderError::Backend(message.to_string()))
}

/// Compose the figure and open it in a matplotlib window.
///
/// The call returns once the window is closed. plotpy still needs somewhere to put its
/// generated script, so `script_path` should point into a scratch directory.
///
/// # Errors
///
/// Returns [`RenderError::Backend`] when python or matplotlib fails.
pub fn show<P>(diagram: &Diagram, style: &DiagramStyle, script_path: &P) -> Result<(), RenderError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let plot = compose(diagram, style);
    let path: &OsStr = script_path.as_ref();
    tracing::info!(?path, "showing frame diagram");
    plot.show(script_path)
        .map_err(|message| RenderError::Backend(message.to_string()))
}
