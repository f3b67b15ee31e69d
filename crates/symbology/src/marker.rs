use catalog::RiskPoint;

/// Stroke/fill pair for points with a positive expected annual loss.
pub const LOSS_STROKE: &str = "#b91c1c";
pub const LOSS_FILL: &str = "#ef4444";

/// Stroke/fill pair for exposure-only points (no expected loss).
pub const EXPOSURE_STROKE: &str = "#c2410c";
pub const EXPOSURE_FILL: &str = "#f97316";

/// Visible floor for loss markers.
const LOSS_RADIUS_MIN: f64 = 8.0;

/// Flat radius for zero-loss points; log10(1) would collapse them otherwise.
const EXPOSURE_RADIUS: f64 = 6.0;

/// Circle-marker encoding handed to the rendering surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub stroke: &'static str,
    pub weight: f64,
    pub fill: &'static str,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Logarithmic radius scaling keeps markers legible across
    /// orders-of-magnitude loss differences.
    pub fn for_point(point: &RiskPoint) -> Self {
        if point.eai > 0.0 {
            Self {
                radius: (5.0 + (point.eai + 1.0).log10() * 2.0).max(LOSS_RADIUS_MIN),
                stroke: LOSS_STROKE,
                weight: 2.0,
                fill: LOSS_FILL,
                fill_opacity: 0.7,
            }
        } else {
            Self {
                radius: EXPOSURE_RADIUS,
                stroke: EXPOSURE_STROKE,
                weight: 2.0,
                fill: EXPOSURE_FILL,
                fill_opacity: 0.7,
            }
        }
    }
}
