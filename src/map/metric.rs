use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Serialize, Serializer};

use crate::district::Demographic;

/// Statistic selected to drive choropleth coloring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveMetric {
    /// Total population.
    #[default]
    Total,
    /// Share of one demographic category (`*_PCT`).
    Share(Demographic),
}

impl ActiveMetric {
    /// Selector order: total first, then each category.
    pub fn all() -> impl Iterator<Item = ActiveMetric> {
        std::iter::once(ActiveMetric::Total)
            .chain(Demographic::ALL.into_iter().map(ActiveMetric::Share))
    }

    pub fn key(&self) -> &'static str {
        match self {
            ActiveMetric::Total => "TOTAL",
            ActiveMetric::Share(demographic) => demographic.pct_key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveMetric::Total => "Total Population",
            ActiveMetric::Share(demographic) => demographic.label(),
        }
    }
}

impl fmt::Display for ActiveMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActiveMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        if key == "TOTAL" { return Ok(ActiveMetric::Total) }
        Demographic::from_pct_key(&key)
            .map(ActiveMetric::Share)
            .ok_or_else(|| anyhow!(
                "Unknown metric {:?}. Expected one of: {}",
                s,
                ActiveMetric::all().map(|m| m.key()).collect::<Vec<_>>().join(", ")
            ))
    }
}

impl Serialize for ActiveMetric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_total() {
        assert_eq!(ActiveMetric::default(), ActiveMetric::Total);
    }

    #[test]
    fn catalogue_order_and_labels() {
        let keys: Vec<&str> = ActiveMetric::all().map(|m| m.key()).collect();
        assert_eq!(keys, [
            "TOTAL", "WHITE_PCT", "BLACK_PCT", "HISPANIC_PCT", "ASIAN_PCT",
            "AMERICAN_INDIAN_PCT", "PACIFIC_ISLANDER_PCT", "TWO_OR_MORE_PCT", "OTHER_PCT",
        ]);
        assert_eq!(ActiveMetric::Total.label(), "Total Population");
        assert_eq!(ActiveMetric::Share(Demographic::TwoOrMore).label(), "Two or More");
    }

    #[test]
    fn parse_keys() {
        assert_eq!("TOTAL".parse::<ActiveMetric>().unwrap(), ActiveMetric::Total);
        assert_eq!("black_pct".parse::<ActiveMetric>().unwrap(), ActiveMetric::Share(Demographic::Black));
        assert!("BLACK".parse::<ActiveMetric>().is_err());
        for metric in ActiveMetric::all() {
            assert_eq!(metric.to_string().parse::<ActiveMetric>().unwrap(), metric);
        }
    }
}
