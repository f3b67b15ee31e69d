use foundation::numfmt;

/// Identifier for a user-created asset. Monotonically increasing within a
/// registry and never reused, even after removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(u64);

/// A user-entered point of interest, independent of scenario data.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAsset {
    pub id: AssetId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Append-ordered collection of user assets with input validation.
///
/// Inputs arrive as raw text-field strings from the presentation layer;
/// rejected submissions leave the collection untouched.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    next_id: u64,
    assets: Vec<CustomAsset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw inputs and appends a new asset.
    ///
    /// Returns `None` without mutating unless the trimmed name is non-empty
    /// and all three values parse as finite numbers.
    pub fn add(
        &mut self,
        name: &str,
        lat_raw: &str,
        lon_raw: &str,
        value_raw: &str,
    ) -> Option<AssetId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let lat = parse_finite(lat_raw)?;
        let lon = parse_finite(lon_raw)?;
        let value = parse_finite(value_raw)?;

        let id = AssetId(self.next_id);
        self.next_id += 1;
        self.assets.push(CustomAsset {
            id,
            name: name.to_string(),
            lat,
            lon,
            value,
        });
        Some(id)
    }

    /// Removes the asset with `id` if present.
    ///
    /// Returns `true` if the collection changed.
    pub fn remove(&mut self, id: AssetId) -> bool {
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        self.assets.len() != before
    }

    /// Assets in insertion order.
    pub fn assets(&self) -> &[CustomAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Display row for one asset in the asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSummary {
    pub name: String,
    /// Truncated integer coordinates: "Lat: -23, Lon: -46".
    pub position: String,
    /// BRL-formatted value: "R$ 1.000.000,00".
    pub value: String,
}

impl AssetSummary {
    pub fn of(asset: &CustomAsset) -> Self {
        Self {
            name: asset.name.clone(),
            position: format!(
                "Lat: {}, Lon: {}",
                asset.lat.trunc() as i64,
                asset.lon.trunc() as i64
            ),
            value: numfmt::brl(asset.value),
        }
    }
}
