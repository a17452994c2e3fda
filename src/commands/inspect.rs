use anyhow::{bail, Result};

use crate::cli::{Cli, InspectArgs};
use crate::map::{ActiveMetric, MapEvent, MAP_LIMITS};

pub fn run(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let metric: ActiveMetric = args.metric.parse()?;

    let mut session = super::open_session(cli, &args.city)?;
    session.set_metric(metric);
    session.set_scaled(args.scaled);

    if let Some(label) = &args.district {
        let Some(index) = session.features().and_then(|fc| fc.position(label)) else {
            bail!("[commands::inspect] No district labelled {:?} in {}", label, args.city);
        };
        session.handle_event(MapEvent::FeatureClick(index));
    }

    if let Some(viewport) = session.viewport() {
        println!(
            "Viewport: {:.4}, {:.4} @ zoom {} (limits {}..={})",
            viewport.center.lat, viewport.center.lng, viewport.zoom, MAP_LIMITS.min_zoom, MAP_LIMITS.max_zoom,
        );
    }
    println!("Metric: {} ({})", metric.label(), metric.key());
    println!();

    let features = session.features().map(|fc| fc.features()).unwrap_or_default();
    let width = features.iter().map(|f| f.district().len()).max().unwrap_or(0).max("District".len());
    println!("{:<width$}  {:>12}  Stroke   Weight  Fill     Opacity", "District", "Value");
    for (feature, style) in features.iter().zip(session.styles()) {
        println!(
            "{:<width$}  {:>12.4}  {}  {:>6}  {}  {:>7.2}",
            feature.district(),
            feature.statistics().metric_value(metric),
            style.color, style.weight, style.fill_color, style.fill_opacity,
        );
    }
    println!();

    match session.detail_panel() {
        Some(panel) => print!("{}", panel.render_text()),
        None => println!("Click on a district to view details"),
    }
    Ok(())
}
