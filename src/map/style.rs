use serde::Serialize;

use crate::{
    district::DistrictStatistics,
    io::color::{sequential_color, Rgb},
};
use super::{metric::ActiveMetric, selection::SelectionState};

/// Leaflet path options for one district polygon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    /// Stroke color.
    pub color: Rgb,
    /// Stroke width in pixels.
    pub weight: u32,
    pub fill_color: Rgb,
    pub fill_opacity: f64,
}

/// Style of every district that is not the selected one.
pub const UNSELECTED: VisualStyle = VisualStyle {
    color: Rgb::new(0x25, 0x63, 0xeb),
    weight: 1,
    fill_color: Rgb::new(0x3b, 0x82, 0xf6),
    fill_opacity: 0.2,
};

/// Style of the selected district(s).
pub const SELECTED: VisualStyle = VisualStyle {
    color: Rgb::new(0x1e, 0x3a, 0x8a),
    weight: 2,
    fill_color: Rgb::new(0x1d, 0x4e, 0xd8),
    fill_opacity: 0.6,
};

/// Two-state choropleth style.
///
/// A feature is highlighted when its `DISTRICT` label equals the selected
/// record's label, so features sharing a label highlight together. The
/// metric is accepted but does not change the result; see [`style_scaled`].
pub fn style(feature: &DistrictStatistics, selection: &SelectionState, _metric: ActiveMetric) -> VisualStyle {
    match selection.selected() {
        Some(selected) if selected.district == feature.district => SELECTED,
        _ => UNSELECTED,
    }
}

/// Two-state style with the fill color taken from a metric ramp.
pub fn style_scaled(feature: &DistrictStatistics, selection: &SelectionState, scale: &MetricScale) -> VisualStyle {
    let mut visual = style(feature, selection, scale.metric());
    if let Some(t) = scale.normalized(feature) {
        visual.fill_color = sequential_color(t);
    }
    visual
}

/// Min-max normalization of one metric across a district set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricScale {
    metric: ActiveMetric,
    range: Option<(f64, f64)>,
}

impl MetricScale {
    pub fn new<'a>(metric: ActiveMetric, features: impl IntoIterator<Item = &'a DistrictStatistics>) -> Self {
        let range = features.into_iter()
            .map(|stats| stats.metric_value(metric))
            .filter(|x| x.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            });
        Self { metric, range }
    }

    #[inline] pub fn metric(&self) -> ActiveMetric { self.metric }

    /// Observed (min, max), `None` for an empty district set.
    #[inline] pub fn range(&self) -> Option<(f64, f64)> { self.range }

    /// Position of a district's value in [0, 1]. A flat range maps to 0.5.
    pub fn normalized(&self, feature: &DistrictStatistics) -> Option<f64> {
        let (lo, hi) = self.range?;
        let x = feature.metric_value(self.metric);
        if !x.is_finite() { return None }
        if hi - lo <= f64::EPSILON { return Some(0.5) }
        Some(((x - lo) / (hi - lo)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::Demographic;

    fn focused(label: &str) -> SelectionState {
        SelectionState::Focused(DistrictStatistics::new(label, 0))
    }

    #[test]
    fn idle_is_unselected() {
        let f = DistrictStatistics::new("A", 100);
        assert_eq!(style(&f, &SelectionState::Idle, ActiveMetric::Total), UNSELECTED);
    }

    #[test]
    fn selected_by_label() {
        let a = DistrictStatistics::new("A", 100);
        let b = DistrictStatistics::new("B", 100);
        let sel = focused("A");
        assert_eq!(style(&a, &sel, ActiveMetric::Total), SELECTED);
        assert_eq!(style(&b, &sel, ActiveMetric::Total), UNSELECTED);
    }

    #[test]
    fn selected_is_darker() {
        let lum = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
        assert!(lum(SELECTED.color) < lum(UNSELECTED.color));
        assert!(lum(SELECTED.fill_color) < lum(UNSELECTED.fill_color));
        assert!(SELECTED.fill_opacity > UNSELECTED.fill_opacity);
    }

    #[test]
    fn serializes_as_leaflet_options() {
        let json = serde_json::to_value(UNSELECTED).unwrap();
        assert_eq!(json["color"], "#2563eb");
        assert_eq!(json["weight"], 1);
        assert_eq!(json["fillColor"], "#3b82f6");
        assert_eq!(json["fillOpacity"], 0.2);
    }

    #[test]
    fn scale_normalizes_over_set() {
        let set = [
            DistrictStatistics::new("A", 100),
            DistrictStatistics::new("B", 300),
            DistrictStatistics::new("C", 200),
        ];
        let scale = MetricScale::new(ActiveMetric::Total, &set);
        assert_eq!(scale.range(), Some((100.0, 300.0)));
        assert_eq!(scale.normalized(&set[0]), Some(0.0));
        assert_eq!(scale.normalized(&set[1]), Some(1.0));
        assert_eq!(scale.normalized(&set[2]), Some(0.5));
    }

    #[test]
    fn flat_and_empty_scales() {
        let set = [DistrictStatistics::new("A", 7), DistrictStatistics::new("B", 7)];
        let flat = MetricScale::new(ActiveMetric::Total, &set);
        assert_eq!(flat.normalized(&set[0]), Some(0.5));

        let empty = MetricScale::new(ActiveMetric::Total, std::iter::empty());
        assert_eq!(empty.range(), None);
        assert_eq!(empty.normalized(&set[0]), None);
    }

    #[test]
    fn scaled_keeps_selection_contract() {
        let white = ActiveMetric::Share(Demographic::White);
        let set = [
            DistrictStatistics::new("A", 10).with_share(Demographic::White, 0.1),
            DistrictStatistics::new("B", 10).with_share(Demographic::White, 0.9),
        ];
        let scale = MetricScale::new(white, &set);

        let idle = style_scaled(&set[1], &SelectionState::Idle, &scale);
        assert_eq!((idle.color, idle.weight, idle.fill_opacity), (UNSELECTED.color, 1, 0.2));

        let sel = style_scaled(&set[1], &focused("B"), &scale);
        assert_eq!((sel.color, sel.weight, sel.fill_opacity), (SELECTED.color, 2, 0.6));
        assert_eq!(sel.fill_color, sequential_color(1.0));
        assert_ne!(style_scaled(&set[0], &SelectionState::Idle, &scale).fill_color, idle.fill_color);
    }
}
