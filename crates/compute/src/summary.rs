use catalog::Scenario;

/// Aggregate exposure statistics for one scenario's feature collection.
///
/// A pure projection of the scenario: recompute on every scenario change
/// instead of caching. Sums are plain f64 addition with no rounding;
/// formatting is a presentation concern.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RiskSummary {
    pub points: usize,
    pub total_value: f64,
    pub total_eai: f64,
}

impl RiskSummary {
    /// Absent or empty data yields the zero summary, not an error.
    pub fn of(scenario: &Scenario) -> Self {
        let Some(data) = &scenario.data else {
            return Self::default();
        };
        let mut out = Self::default();
        for point in &data.features {
            out.points += 1;
            out.total_value += point.value;
            out.total_eai += point.eai;
        }
        out
    }
}
