use serde::Serialize;

use crate::{
    common::format::group_thousands,
    district::{Demographic, DistrictStatistics},
};

/// One row of the district table shown under the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub district: String,
    pub total: String,
    pub white: String,
    pub black: String,
    pub hispanic: String,
    pub asian: String,
}

/// Thousands-grouped absolute counts per district, in source order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DistrictTable {
    pub rows: Vec<TableRow>,
}

impl DistrictTable {
    pub const HEADERS: [&'static str; 6] = ["District", "Total Pop", "White", "Black", "Hispanic", "Asian"];

    pub fn new<'a>(features: impl IntoIterator<Item = &'a DistrictStatistics>) -> Self {
        let rows = features.into_iter()
            .map(|stats| TableRow {
                district: stats.district.clone(),
                total: group_thousands(stats.total),
                white: group_thousands(stats.count(Demographic::White)),
                black: group_thousands(stats.count(Demographic::Black)),
                hispanic: group_thousands(stats.count(Demographic::Hispanic)),
                asian: group_thousands(stats.count(Demographic::Asian)),
            })
            .collect();
        Self { rows }
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Fixed-width text rendering: district left-aligned, counts right-aligned.
    pub fn render_text(&self) -> String {
        let cells: Vec<[&str; 6]> = self.rows.iter()
            .map(|r| [r.district.as_str(), r.total.as_str(), r.white.as_str(), r.black.as_str(), r.hispanic.as_str(), r.asian.as_str()])
            .collect();

        let mut widths = Self::HEADERS.map(str::len);
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) { *w = (*w).max(cell.len()) }
        }

        let line = |row: &[&str; 6]| -> String {
            row.iter().enumerate()
                .map(|(i, cell)| match i {
                    0 => format!("{:<w$}", cell, w = widths[i]),
                    _ => format!("{:>w$}", cell, w = widths[i]),
                })
                .collect::<Vec<_>>()
                .join("  ")
        };

        let mut out = line(&Self::HEADERS);
        out.push('\n');
        for row in &cells {
            out.push_str(&line(row));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_source_order() {
        let stats = [
            DistrictStatistics::new("Zeta", 12000).with_count(Demographic::White, 4500),
            DistrictStatistics::new("Alpha", 800),
        ];
        let table = DistrictTable::new(&stats);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].district, "Zeta");
        assert_eq!(table.rows[0].total, "12,000");
        assert_eq!(table.rows[0].white, "4,500");
        assert_eq!(table.rows[1].black, "0");
    }

    #[test]
    fn text_is_aligned() {
        let stats = [DistrictStatistics::new("North", 1500), DistrictStatistics::new("S", 20)];
        let text = DistrictTable::new(&stats).render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("District"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[1].contains("1,500"));
    }
}
