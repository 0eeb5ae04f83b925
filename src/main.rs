mod analysis;
mod conditions;
mod report;

use analysis::run_analysis;
use clap::Parser;
use conditions::{build_square_frame, SquareFrameConditions};
use report::render_summary;
use std::error::Error;
use std::path::PathBuf;
use tracing::Level;
use trussplot::{render, Diagram, DiagramStyle};

/// Print rod section properties and draw the X-braced square frame.
#[derive(Parser, Debug)]
#[command(name = "trussplot", version, about)]
struct Cli {
    /// Save the diagram to this file instead of opening a window. The extension picks
    /// the image format.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the properties without drawing the diagram.
    #[arg(long)]
    no_plot: bool,

    /// Print the properties as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v for info, -vv for debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries nothing but the property listing.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // All geometry, material and load values are fixed literals. Nothing on the
    // command line changes the structure being drawn.
    let conditions = SquareFrameConditions::default();

    // Evaluate the closed-form section properties of the rod. These are the textbook
    // formulas for a solid square section, see
    // https://en.wikipedia.org/wiki/Second_moment_of_area and
    // https://en.wikipedia.org/wiki/Young%27s_modulus.
    let summary = run_analysis(&conditions)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    if cli.no_plot {
        return Ok(());
    }

    // Lay out the figure: walls, bars, the scaled load arrow and the node markers.
    // The load is drawn only; no equilibrium is solved
    // (https://en.wikipedia.org/wiki/Truss#Analysis would be the next step).
    let frame = build_square_frame(&conditions)?;
    let diagram = Diagram::build(&frame, &conditions.supports, &conditions.load)?;
    let style = DiagramStyle::default();

    match &cli.output {
        Some(path) => {
            render::save(&diagram, &style, path)?;
            tracing::info!(path = %path.display(), "diagram written");
        }
        None => {
            // plotpy always writes its generated script somewhere, so keep it out of
            // the working directory.
            let scratch = std::env::temp_dir()
                .join("trussplot")
                .join("square_x_bracing.svg");
            render::show(&diagram, &style, &scratch)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_opens_a_window() {
        let cli = Cli::parse_from(["trussplot"]);
        assert_eq!(cli.output, None);
        assert!(!cli.no_plot);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn output_switches_to_saving() {
        let cli = Cli::parse_from(["trussplot", "--output", "frame.png", "-vv"]);
        assert_eq!(cli.output, Some(PathBuf::from("frame.png")));
        assert_eq!(cli.verbose, 2);
    }
}
