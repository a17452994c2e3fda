use serde::Serialize;

use crate::{
    common::format::{format_share, group_thousands},
    district::{Demographic, DistrictStatistics},
};
use super::selection::SelectionState;

/// One demographic line of the detail panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DemographicRow {
    pub label: &'static str,
    /// Percentage when a share is published, raw count otherwise. A category
    /// with neither shows "0" rather than a blank, since absent counts are 0.
    pub value: String,
}

/// Display fields for the selected district.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailPanel {
    pub district: String,
    /// Total population, thousands-grouped.
    pub total: String,
    pub rows: Vec<DemographicRow>,
}

impl DetailPanel {
    /// Project the selection; `None` while idle (the panel is not rendered at all).
    pub fn from_selection(selection: &SelectionState) -> Option<Self> {
        selection.selected().map(Self::from_statistics)
    }

    pub fn from_statistics(stats: &DistrictStatistics) -> Self {
        let rows = Demographic::ALL.into_iter()
            .map(|demographic| DemographicRow {
                label: demographic.label(),
                value: match stats.share(demographic) {
                    Some(share) => format_share(share),
                    None => stats.count(demographic).to_string(),
                },
            })
            .collect();

        Self { district: stats.district.clone(), total: group_thousands(stats.total), rows }
    }

    /// Display value for one category.
    pub fn value(&self, demographic: Demographic) -> Option<&str> {
        self.rows.iter()
            .find(|row| row.label == demographic.label())
            .map(|row| row.value.as_str())
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let width = self.rows.iter().map(|row| row.label.len()).max().unwrap_or(0).max("Total Population".len());
        let mut out = format!("District: {}\n", self.district);
        out.push_str(&format!("{:<width$}  {}\n", "Total Population", self.total));
        for row in &self.rows {
            out.push_str(&format!("{:<width$}  {}\n", row.label, row.value));
        }
        out
    }
}
