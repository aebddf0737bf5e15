// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the CO2 / GDP bubble chart for a few years and interactions into
//! `co2viz_demo.html`.
//!
//! Usage: `co2viz_demo [DATA.json] [CONFIG.json]`. Without a data file the embedded
//! sample dataset is used.

mod html;
mod svg;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use co2viz_chart::{
    ChartConfig, ChartController, FileSource, LogAlerts, SliderDispatch, StaticSource,
};
use co2viz_charts::SliderGeometry;
use html::HtmlSection;
use svg::SvgSurface;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("../data/sample.json");
const OUTPUT: &str = "co2viz_demo.html";

type Chart = ChartController<SvgSurface, LogAlerts>;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let data_path = args.next();
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {path}"))?;
            ChartConfig::from_json_str(&text)
                .with_context(|| format!("Invalid chart config in {path}"))?
        }
        None => ChartConfig::default(),
    };

    let mut chart = ChartController::new(config, SvgSurface::default(), LogAlerts);
    let loaded = match &data_path {
        Some(path) => pollster::block_on(chart.load(&FileSource::new(path))),
        None => pollster::block_on(chart.load(&StaticSource::new("embedded sample", SAMPLE))),
    };
    loaded.context("Failed to load the dataset")?;

    let mut sections = vec![snapshot(
        &chart,
        "Initial view",
        "Bubbles placed by GDP (x) and CO2 emissions (y), sized by population and colored by GDP.",
    )];

    let first_year = chart.config().years.first;
    chart.set_year(first_year);
    sections.push(snapshot(
        &chart,
        "First year",
        "The same chart after moving to the first year of the range; countries without data are gray or absent.",
    ));

    if let Some(code) = chart.entries().iter().find(|e| e.is_placed()).map(|e| e.code.clone()) {
        chart.select(&code);
        sections.push(snapshot(
            &chart,
            "Selection",
            &format!("{code} selected: painted full red above the other bubbles."),
        ));
    }

    chart.set_color_mode("heat");
    sections.push(snapshot(
        &chart,
        "Heat gradient",
        "Colors switched to the HSL heat gradient.",
    ));

    let chart = Rc::new(RefCell::new(chart));
    drag_year_slider(&chart)?;
    sections.push(snapshot(
        &chart.borrow(),
        "Year slider",
        "The year slider dragged to its last step; the chart followed once per step crossed.",
    ));

    let html = html::render_report("CO2 vs. GDP", &sections);
    std::fs::write(OUTPUT, html).with_context(|| format!("Failed to write {OUTPUT}"))?;
    tracing::info!(
        frames = chart.borrow().surface().redraws(),
        "wrote {OUTPUT}"
    );
    Ok(())
}

fn snapshot(chart: &Chart, title: &str, description: &str) -> HtmlSection {
    HtmlSection {
        title: format!("{title}: {}", chart.year()),
        description: description.to_owned(),
        svg: chart.surface().svg().to_owned(),
    }
}

/// Drags the year slider from its current step to the end of the track.
fn drag_year_slider(chart: &Rc<RefCell<Chart>>) -> Result<()> {
    let geometry = SliderGeometry::default();
    let mut slider = chart
        .borrow()
        .year_slider(geometry)
        .context("Failed to build the year slider")?;
    SliderDispatch::new(chart).register(&mut slider);

    slider.pointer_down_on_marker();
    let start = geometry.track_left + slider.marker_left() + geometry.marker_width;
    let end = geometry.track_left + geometry.track_width + geometry.marker_width;
    let mut x = start;
    while x <= end {
        if let Some(value) = slider.pointer_move(x) {
            tracing::debug!(value, "slider moved");
        }
        x += slider.step_px() / 3.0;
    }
    slider.pointer_up();

    SliderDispatch::<Chart>::unregister(&mut slider);
    Ok(())
}
