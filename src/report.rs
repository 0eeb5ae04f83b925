use crate::analysis::PropertySummary;
use std::fmt::Write;

/// Render the six-line property listing.
///
/// Area is fixed-point; inertia, modulus, yield stress and rigidity use scientific
/// notation the way hand calculations are usually written.
#[must_use]
pub fn render_summary(summary: &PropertySummary) -> String {
    let mut output = String::new();
    let rod = &summary.rod;
    let section = &summary.section;

    writeln!(&mut output, "Rod side: {:.4} m", rod.side).expect("writing to string cannot fail");
    writeln!(&mut output, "Rod area: {:.6} m^2", section.area)
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Moment of inertia: {:.6e} m^4",
        section.moment_of_inertia
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "Young's modulus: {:.2e} Pa", rod.youngs_modulus)
        .expect("writing to string cannot fail");
    writeln!(&mut output, "Yield stress: {:.2e} Pa", rod.yield_stress)
        .expect("writing to string cannot fail");
    write!(
        &mut output,
        "Axial rigidity EA: {:.2e} N",
        section.axial_rigidity
    )
    .expect("writing to string cannot fail");

    output
}
