use crate::conditions::SquareFrameConditions;
use serde::Serialize;
use trussplot::{RodProperties, RodPropertyError, SectionProperties};

/// Rod inputs together with the derived section quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertySummary {
    /// Inputs, echoed in the report.
    pub rod: RodProperties,
    /// Area, moment of inertia and axial rigidity.
    pub section: SectionProperties,
}

/// Evaluate the section formulas for the rod used in the demonstration.
///
/// Only closed-form section properties are computed; the frame is never solved.
pub fn run_analysis(
    conditions: &SquareFrameConditions,
) -> Result<PropertySummary, RodPropertyError> {
    let section = conditions.rod.section()?;
    tracing::info!(
        area = section.area,
        moment_of_inertia = section.moment_of_inertia,
        axial_rigidity = section.axial_rigidity,
        "evaluated rod section"
    );
    Ok(PropertySummary {
        rod: conditions.rod,
        section,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn produces_expected_section() {
        let summary =
            run_analysis(&SquareFrameConditions::default()).expect("literal rod is valid");
        assert_relative_eq!(summary.section.area, 0.001_225, max_relative = 1.0e-9);
        assert_relative_eq!(
            summary.section.moment_of_inertia,
            0.035_f64.powi(4) / 12.0,
            max_relative = 1.0e-9
        );
        assert_relative_eq!(summary.section.axial_rigidity, 8.4525e7, max_relative = 1.0e-9);
        assert_eq!(summary.rod.yield_stress, 276.0e6);
    }

    #[test]
    fn illegal_rod_propagates() {
        let conditions = SquareFrameConditions {
            rod: RodProperties::new(-0.035, 69.0e9, 276.0e6),
            ..SquareFrameConditions::default()
        };
        assert_eq!(
            run_analysis(&conditions),
            Err(RodPropertyError::NonPositiveSide { side: -0.035 })
        );
    }
}
