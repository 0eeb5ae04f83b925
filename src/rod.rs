//! Section properties of solid square rods.

use serde::Serialize;

use crate::errors::RodPropertyError;

/// Material and geometric inputs for a solid square rod.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RodProperties {
    /// Side length of the square cross-section in metres.
    pub side: f64,
    /// Young's modulus in pascals.
    pub youngs_modulus: f64,
    /// Yield stress in pascals. Reported only; no stress check uses it.
    pub yield_stress: f64,
}

/// Quantities derived from [`RodProperties`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SectionProperties {
    /// Cross-sectional area in square metres.
    pub area: f64,
    /// Second moment of area about a centroidal axis in metres to the fourth.
    pub moment_of_inertia: f64,
    /// Axial rigidity `EA` in newtons.
    pub axial_rigidity: f64,
}

impl RodProperties {
    /// Create a set of rod properties.
    #[must_use]
    pub const fn new(side: f64, youngs_modulus: f64, yield_stress: f64) -> Self {
        Self {
            side,
            youngs_modulus,
            yield_stress,
        }
    }

    /// Evaluate the section properties of this rod.
    ///
    /// # Errors
    ///
    /// See [`compute_rod_properties`].
    pub fn section(&self) -> Result<SectionProperties, RodPropertyError> {
        compute_rod_properties(self.side, self.youngs_modulus, self.yield_stress)
    }
}

/// Compute area, moment of inertia and axial rigidity for a solid square rod.
///
/// * area `A = s²`
/// * moment of inertia `I = s⁴ / 12`
/// * axial rigidity `EA = E · A`
///
/// The yield stress is accepted so callers can pass a full material record, but it does
/// not enter any of the formulas.
///
/// # Errors
///
/// Returns [`RodPropertyError::NonPositiveSide`] when `side` is not a finite positive number
/// and [`RodPropertyError::NonPositiveYoungsModulus`] when `youngs_modulus` is not.
///
/// # Examples
/// ```
/// use trussplot::compute_rod_properties;
///
/// let section = compute_rod_properties(0.035, 69.0e9, 276.0e6).expect("valid rod");
/// assert!((section.area - 0.001225).abs() < 1.0e-15);
/// assert!((section.axial_rigidity - 8.4525e7).abs() < 1.0e-3);
/// ```
pub fn compute_rod_properties(
    side: f64,
    youngs_modulus: f64,
    _yield_stress: f64,
) -> Result<SectionProperties, RodPropertyError> {
    if !(side.is_finite() && side > 0.0) {
        return Err(RodPropertyError::NonPositiveSide { side });
    }
    if !(youngs_modulus.is_finite() && youngs_modulus > 0.0) {
        return Err(RodPropertyError::NonPositiveYoungsModulus { youngs_modulus });
    }
    let area = side * side;
    Ok(SectionProperties {
        area,
        moment_of_inertia: side.powi(4) / 12.0,
        axial_rigidity: youngs_modulus * area,
    })
}
