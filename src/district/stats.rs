use serde_json::{Map, Value};

use super::Demographic;
use crate::map::ActiveMetric;

/// Label used when a feature carries no `DISTRICT` property.
pub const DISTRICT_PLACEHOLDER: &str = "District";

/// Typed statistics of one police district.
///
/// Counts default to 0 when absent from the source properties. Shares stay
/// `None` when absent, so "0%" and "no share published" remain distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictStatistics {
    pub district: String,
    pub total: u64,
    /// Whether the source carried a usable `DISTRICT` value.
    labelled: bool,
    counts: [u64; 8],
    shares: [Option<f64>; 8],
}

impl Default for DistrictStatistics {
    fn default() -> Self {
        Self {
            district: DISTRICT_PLACEHOLDER.to_string(),
            total: 0,
            labelled: false,
            counts: [0; 8],
            shares: [None; 8],
        }
    }
}

impl DistrictStatistics {
    /// Normalize a raw GeoJSON `properties` value. Anything that is not an
    /// object yields the all-default record.
    pub fn from_value(properties: &Value) -> Self {
        match properties.as_object() {
            Some(props) => Self::from_properties(props),
            None => Self::default(),
        }
    }

    /// Normalize a raw property bag. Never fails; the input is not modified.
    pub fn from_properties(props: &Map<String, Value>) -> Self {
        let district = district_label(props.get("DISTRICT"));
        let mut stats = Self {
            labelled: district.is_some(),
            district: district.unwrap_or_else(|| DISTRICT_PLACEHOLDER.to_string()),
            total: count_value(props.get("TOTAL")),
            ..Self::default()
        };

        for demographic in Demographic::ALL {
            let i = demographic.index();
            stats.counts[i] = count_value(props.get(demographic.key()));
            stats.shares[i] = share_value(props.get(demographic.pct_key()));
        }

        stats
    }

    /// Builder used by tests and callers that assemble records directly.
    pub fn new(district: impl Into<String>, total: u64) -> Self {
        Self { district: district.into(), total, labelled: true, ..Self::default() }
    }

    pub fn with_count(mut self, demographic: Demographic, count: u64) -> Self {
        self.counts[demographic.index()] = count;
        self
    }

    pub fn with_share(mut self, demographic: Demographic, share: f64) -> Self {
        self.shares[demographic.index()] = share.is_finite().then_some(share);
        self
    }

    /// Label written to exports: the published label, or "0" when the source had none.
    pub fn export_label(&self) -> &str {
        match self.labelled {
            true => &self.district,
            false => "0",
        }
    }

    /// Absolute count for a category (0 when the source omitted it).
    #[inline] pub fn count(&self, demographic: Demographic) -> u64 { self.counts[demographic.index()] }

    /// Fractional share in [0, 1], if the source published one.
    #[inline] pub fn share(&self, demographic: Demographic) -> Option<f64> { self.shares[demographic.index()] }

    /// Value of the given metric, preferring the share and falling back to the count.
    pub fn metric_value(&self, metric: ActiveMetric) -> f64 {
        match metric {
            ActiveMetric::Total => self.total as f64,
            ActiveMetric::Share(demographic) => self.share(demographic)
                .unwrap_or_else(|| self.count(demographic) as f64),
        }
    }

    /// Canonical property bag for this record.
    pub fn to_properties(&self) -> Map<String, Value> {
        let mut props = Map::new();
        if self.labelled {
            props.insert("DISTRICT".to_string(), Value::from(self.district.clone()));
        }
        props.insert("TOTAL".to_string(), Value::from(self.total));
        for demographic in Demographic::ALL {
            props.insert(demographic.key().to_string(), Value::from(self.count(demographic)));
            if let Some(share) = self.share(demographic) {
                props.insert(demographic.pct_key().to_string(), Value::from(share));
            }
        }
        props
    }
}

/// District labels may be published as strings or bare numbers; missing,
/// null or blank labels yield `None`.
fn district_label(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (_, Some(u)) => u.to_string(),
            _ => n.to_string(),
        }),
        _ => None,
    }
}

/// Non-negative integer count; absent, null, negative or unparseable values become 0.
fn count_value(value: Option<&Value>) -> u64 {
    let number = match value {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(u) => return u,
            None => n.as_f64(),
        },
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(x) if x.is_finite() && x > 0.0 => x.round() as u64,
        _ => 0,
    }
}

/// Fractional share; absent, null or unparseable values stay unset.
fn share_value(value: Option<&Value>) -> Option<f64> {
    let share = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    share.filter(|x| x.is_finite())
}
