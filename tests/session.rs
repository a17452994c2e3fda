use districtview::{
    style, ActiveMetric, City, CityRegistry, Demographic, DistrictStatistics, FeatureCollection,
    LoadError, LoadOutcome, MapEvent, MapSession, RequestToken, SelectionState, SELECTED, UNSELECTED,
};
use proptest::{prelude::*, sample::Index};
use serde_json::json;

/// One-feature collection whose label records which request produced it.
fn response_for(city: &City, token: RequestToken) -> FeatureCollection {
    FeatureCollection::from_value(json!({
        "type": "FeatureCollection",
        "features": [{ "type": "Feature", "geometry": null, "properties": { "DISTRICT": format!("{}#{}", city.id, token.get()), "TOTAL": 1 } }],
    }))
    .unwrap()
}

fn arb_metric() -> impl Strategy<Value = ActiveMetric> {
    any::<Index>().prop_map(|i| {
        let all: Vec<ActiveMetric> = ActiveMetric::all().collect();
        all[i.index(all.len())]
    })
}

fn arb_statistics() -> impl Strategy<Value = DistrictStatistics> {
    ("[A-Za-z0-9 ]{0,12}", any::<u32>(), any::<u32>(), prop::option::of(0.0f64..=1.0)).prop_map(
        |(label, total, white, share)| {
            let stats = DistrictStatistics::new(label, total as u64).with_count(Demographic::White, white as u64);
            match share {
                Some(share) => stats.with_share(Demographic::White, share),
                None => stats,
            }
        },
    )
}

#[derive(Clone, Debug)]
enum Op {
    Select(usize),
    Clear,
    Deliver(Index, bool),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..10).prop_map(Op::Select),
        1 => Just(Op::Clear),
        5 => (any::<Index>(), any::<bool>()).prop_map(|(i, ok)| Op::Deliver(i, ok)),
    ]
}

proptest! {
    #[test]
    fn idle_styles_everything_unselected(stats in arb_statistics(), metric in arb_metric()) {
        prop_assert_eq!(style(&stats, &SelectionState::Idle, metric), UNSELECTED);
    }

    #[test]
    fn shared_labels_highlight_together(
        a in arb_statistics(),
        b in arb_statistics(),
        metric in arb_metric(),
    ) {
        let mut b = b;
        b.district = a.district.clone();
        let selection = SelectionState::Focused(a.clone());
        prop_assert_eq!(style(&a, &selection, metric), SELECTED);
        prop_assert_eq!(style(&b, &selection, metric), SELECTED);
    }

    #[test]
    fn only_latest_response_is_displayed(ops in prop::collection::vec(arb_op(), 1..40)) {
        let registry = CityRegistry::builtin();
        let mut session = MapSession::new();
        let mut in_flight: Vec<(RequestToken, City)> = Vec::new();
        let mut latest: Option<RequestToken> = None;

        for op in ops {
            match op {
                Op::Select(i) => {
                    let city = registry.cities()[i].clone();
                    let request = session.select_city(Some(city)).unwrap();
                    latest = Some(request.token);
                    in_flight.push((request.token, request.city));
                }
                Op::Clear => {
                    prop_assert!(session.select_city(None).is_none());
                    latest = None;
                }
                Op::Deliver(i, ok) => {
                    if in_flight.is_empty() { continue }
                    let (token, city) = in_flight.remove(i.index(in_flight.len()));
                    let result = match ok {
                        true => Ok(response_for(&city, token)),
                        false => Err(LoadError::Fetch { url: city.source_path.clone(), message: "503".into() }),
                    };
                    let expected = match (latest == Some(token), ok) {
                        (false, _) => LoadOutcome::Stale,
                        (true, true) => LoadOutcome::Applied,
                        (true, false) => LoadOutcome::Failed,
                    };
                    prop_assert_eq!(session.complete_load(token, result), expected);
                    if expected != LoadOutcome::Stale { latest = None }
                }
            }

            if let Some(features) = session.features() {
                let city = session.city().unwrap();
                let shown = features.get(0).unwrap().district();
                let prefix = format!("{}#", city.id);
                prop_assert!(shown.starts_with(&prefix));
                prop_assert_eq!(session.pending(), None);
            }
        }
    }
}

#[test]
fn city_change_resets_selection_even_for_same_city() {
    let registry = CityRegistry::builtin();
    let raleigh = registry.get("raleigh-nc").unwrap().clone();

    let mut session = MapSession::new();
    let request = session.select_city(Some(raleigh.clone())).unwrap();
    session.complete_load(request.token, Ok(response_for(&raleigh, request.token)));
    session.handle_event(MapEvent::FeatureClick(0));
    assert!(!session.selection().is_idle());

    session.select_city(Some(raleigh));
    assert!(session.selection().is_idle());
    assert!(session.detail_panel().is_none());
}

#[test]
fn late_response_for_previous_city_is_ignored() {
    let registry = CityRegistry::builtin();
    let raleigh = registry.get("raleigh-nc").unwrap().clone();
    let denver = registry.get("denver-co").unwrap().clone();

    let mut session = MapSession::new();
    let first = session.select_city(Some(raleigh.clone())).unwrap();
    let second = session.select_city(Some(denver.clone())).unwrap();

    assert_eq!(session.complete_load(second.token, Ok(response_for(&denver, second.token))), LoadOutcome::Applied);
    assert_eq!(session.complete_load(first.token, Ok(response_for(&raleigh, first.token))), LoadOutcome::Stale);
    assert!(session.feature(0).unwrap().district().starts_with("denver-co#"));
}
