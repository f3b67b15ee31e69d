use catalog::RiskPoint;
use foundation::numfmt;

/// Formatted popup fields for one risk point.
///
/// The rendering surface owns markup and interaction; this is the
/// structured text it interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDetail {
    /// "R$ 1.000.000" (whole-number grouping).
    pub exposed_value: String,
    /// "R$ 1.234,56" (two decimal places).
    pub expected_annual_loss: String,
    /// "(-23.5505°, -46.6333°)", latitude first, 4 decimal places.
    pub coordinates: String,
}

impl PointDetail {
    pub fn for_point(point: &RiskPoint) -> Self {
        Self {
            exposed_value: numfmt::brl_whole(point.value),
            expected_annual_loss: numfmt::brl(point.eai),
            coordinates: format!("({:.4}°, {:.4}°)", point.lat, point.lon),
        }
    }
}
