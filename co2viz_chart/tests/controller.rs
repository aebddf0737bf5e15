// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end controller scenarios against a recording surface.

use std::cell::RefCell;
use std::rc::Rc;

use co2viz_chart::{
    BubbleEntry, ChartConfig, ChartController, ChartFrame, ChartSurface, InfoPanel, LoadError,
    SliderDispatch, StaticSource,
};
use co2viz_charts::{FALLBACK_COLOR, Gradient, SELECTED_COLOR, SliderGeometry, color_for};
use kurbo::Point;

const DATA: &str = r#"{
    "data": [
        {
            "Country Name": "United States",
            "Country Code": "USA",
            "GDP Data": { "2000": 36000, "2014": 55000 },
            "CO2 Data": { "2000": 5800000, "2014": 5000000 },
            "Population Data": { "2000": 282000000, "2014": 318900000 },
            "Forest area (sq. km)": { "2014": "3100950" }
        },
        {
            "Country Name": "Nowhere",
            "Country Code": "XYZ",
            "GDP Data": { "2010": 100 },
            "CO2 Data": {},
            "Population Data": {}
        }
    ],
    "ids": { "USA": 0, "XYZ": 1 }
}"#;

#[derive(Debug)]
struct Painted {
    year: u16,
    color_mode: String,
    entries: Vec<BubbleEntry>,
}

#[derive(Debug, Default)]
struct Recording {
    frames: Vec<Painted>,
}

impl ChartSurface for Recording {
    fn redraw(&mut self, frame: &ChartFrame<'_>) {
        self.frames.push(Painted {
            year: frame.year,
            color_mode: frame.color_mode.to_owned(),
            entries: frame.entries.to_vec(),
        });
    }
}

type Chart = ChartController<Recording, Vec<String>>;

fn loaded_chart() -> Chart {
    let mut chart = ChartController::new(ChartConfig::default(), Recording::default(), Vec::new());
    pollster::block_on(chart.load(&StaticSource::new("memory", DATA))).unwrap();
    chart
}

fn redraws(chart: &Chart) -> usize {
    chart.surface().frames.len()
}

fn usa_center(chart: &Chart) -> Point {
    let frame = chart.frame();
    let (_, bubble) = frame
        .bubbles()
        .into_iter()
        .find(|(i, _)| frame.entries[*i].code == "USA")
        .unwrap();
    bubble.center
}

#[test]
fn load_paints_the_initial_year_once() {
    let chart = loaded_chart();
    assert!(chart.is_loaded());
    assert_eq!(redraws(&chart), 1);
    assert_eq!(chart.surface().frames[0].year, 2014);
    assert_eq!(chart.surface().frames[0].color_mode, "default");
    assert_eq!(chart.entries().len(), 2);
    assert!(chart.alerts().is_empty());
}

#[test]
fn set_year_positions_present_data_and_grays_missing_data() {
    let mut chart = loaded_chart();
    chart.set_year(2014);
    assert_eq!(redraws(&chart), 2);

    let usa = chart.entry("USA").unwrap();
    assert_eq!(usa.x, Some(55000.0));
    assert_eq!(usa.y, Some(5_000_000.0));
    assert!(usa.is_placed());

    let xyz = chart.entry("XYZ").unwrap();
    assert_eq!(xyz.x, None);
    assert_eq!(xyz.y, None);
    assert_eq!(xyz.color(), FALLBACK_COLOR);

    let last = chart.surface().frames.last().unwrap();
    assert_eq!(last.entries[0].x, Some(55000.0));
    assert_eq!(chart.frame().bubbles().len(), 1, "XYZ has nothing to place");
}

#[test]
fn set_year_recomputes_and_clamps() {
    let mut chart = loaded_chart();
    chart.set_year(2000);
    assert_eq!(chart.year(), 2000);
    assert_eq!(chart.entry("USA").unwrap().x, Some(36000.0));

    chart.set_year(1960);
    assert_eq!(chart.year(), 1990);
    assert_eq!(chart.entry("USA").unwrap().x, None);
    assert_eq!(chart.entry("USA").unwrap().color(), FALLBACK_COLOR);
    assert_eq!(redraws(&chart), 3);
}

#[test]
fn selection_is_exclusive_and_restores_data_colors() {
    let mut chart = loaded_chart();
    assert!(chart.select("USA"));
    assert_eq!(chart.entry("USA").unwrap().color(), SELECTED_COLOR);

    assert!(chart.select("XYZ"));
    assert_eq!(chart.selected(), Some("XYZ"));
    let selected: Vec<_> = chart
        .entries()
        .iter()
        .filter(|e| e.selected)
        .map(|e| e.code.as_str())
        .collect();
    assert_eq!(selected, ["XYZ"]);

    let cfg = ChartConfig::default();
    let expected = color_for(
        Some(55000.0),
        cfg.color_domain.min,
        cfg.color_domain.max,
        &Gradient::default(),
    );
    assert_eq!(chart.entry("USA").unwrap().color(), expected);
    assert_eq!(chart.entry("XYZ").unwrap().color(), SELECTED_COLOR);
    assert_eq!(redraws(&chart), 3);
}

#[test]
fn selection_survives_year_changes() {
    let mut chart = loaded_chart();
    chart.select("USA");
    chart.set_year(2000);
    assert_eq!(chart.selected(), Some("USA"));
    assert_eq!(chart.entry("USA").unwrap().color(), SELECTED_COLOR);
    assert!(matches!(chart.info_panel(), InfoPanel::Country(info) if info.name == "United States"));
}

#[test]
fn unknown_selection_and_empty_deselect_change_nothing() {
    let mut chart = loaded_chart();
    assert!(!chart.select("FRA"));
    assert!(!chart.deselect());
    assert_eq!(redraws(&chart), 1);

    chart.select("USA");
    assert!(chart.deselect());
    assert_eq!(chart.selected(), None);
    assert_eq!(chart.info_panel(), &InfoPanel::Overview);
    assert_ne!(chart.entry("USA").unwrap().color(), SELECTED_COLOR);
}

#[test]
fn color_mode_falls_back_and_ignores_repeats() {
    let mut chart = loaded_chart();
    assert!(!chart.set_color_mode("no-such-gradient"), "resolves to the active default");
    assert!(!chart.set_color_mode("default"));
    assert_eq!(redraws(&chart), 1);

    let before = chart.entry("USA").unwrap().data_color;
    assert!(chart.set_color_mode("heat"));
    assert_eq!(chart.color_mode(), "heat");
    assert_ne!(chart.entry("USA").unwrap().data_color, before);
    assert_eq!(chart.surface().frames.last().unwrap().color_mode, "heat");

    assert!(!chart.set_color_mode("heat"));
    assert!(chart.set_color_mode("no-such-gradient"));
    assert_eq!(chart.color_mode(), "default");
    assert_eq!(chart.entry("USA").unwrap().data_color, before);
    assert_eq!(redraws(&chart), 3);
}

#[test]
fn failed_fetch_alerts_once_and_leaves_the_chart_empty() {
    let mut chart = ChartController::new(ChartConfig::default(), Recording::default(), Vec::new());
    let source = StaticSource::new("memory", DATA).with_status(500);
    let err = pollster::block_on(chart.load(&source)).unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 500, .. }));
    assert_eq!(chart.alerts().len(), 1);
    assert_eq!(redraws(&chart), 0);
    assert!(!chart.is_loaded());
    assert!(chart.entries().is_empty());

    chart.set_year(2000);
    assert_eq!(chart.year(), 2000);
    assert_eq!(redraws(&chart), 0);
}

#[test]
fn malformed_document_alerts_once() {
    let mut chart = ChartController::new(ChartConfig::default(), Recording::default(), Vec::new());
    let err = pollster::block_on(chart.load(&StaticSource::new("memory", "{ \"data\": ["))).unwrap_err();
    assert!(matches!(err, LoadError::Dataset(_)));
    assert_eq!(
        chart.alerts(),
        &["There was a problem fetching the data to populate the graph."]
    );
}

#[test]
fn clicks_select_and_drags_do_not() {
    let mut chart = loaded_chart();
    let usa = usa_center(&chart);
    assert_eq!(chart.hit_test(usa), Some(0));

    chart.pointer_down(usa);
    chart.pointer_move(Point::new(usa.x + 30.0, usa.y));
    assert!(chart.pointer_up());
    assert!(!chart.click(usa), "release after a drag is not a click");
    assert_eq!(chart.selected(), None);

    chart.pointer_down(usa);
    assert!(!chart.pointer_up());
    assert!(chart.click(usa));
    assert_eq!(chart.selected(), Some("USA"));

    chart.pointer_down(Point::new(1.0, 1.0));
    chart.pointer_up();
    assert!(chart.click(Point::new(1.0, 1.0)));
    assert_eq!(chart.selected(), None);
}

#[test]
fn hover_drives_the_info_panel_and_tooltip() {
    let mut chart = loaded_chart();
    let usa = usa_center(&chart);
    assert_eq!(chart.hover(usa), Some("USA"));
    let InfoPanel::Country(info) = chart.info_panel() else {
        panic!("expected country info, got {:?}", chart.info_panel());
    };
    assert_eq!(info.name, "United States");
    assert!(info.rows.iter().any(|r| r.label == "Forest Area(sq. km)" && r.value == "3100950.00"));

    assert_eq!(chart.hover(Point::new(1.0, 1.0)), None);
    assert_eq!(chart.info_panel(), &InfoPanel::Overview);

    assert_eq!(
        chart.tooltip_lines("USA").unwrap(),
        [
            "United States",
            "GDP: 55000.00000",
            "CO2: 5000000.00000",
            "Population: 318900000"
        ]
    );
    assert!(chart.country_info("FRA").is_none());
}

#[test]
fn year_slider_drives_the_chart_through_the_dispatcher() {
    let chart = Rc::new(RefCell::new(loaded_chart()));
    let geometry = SliderGeometry {
        track_left: 100.0,
        track_width: 240.0,
        marker_width: 16.0,
    };
    let mut slider = chart.borrow().year_slider(geometry).unwrap();
    assert_eq!(slider.value(), 2014.0);
    let labeled: Vec<_> = slider
        .ticks()
        .into_iter()
        .filter_map(|t| t.label)
        .collect();
    assert_eq!(labeled, ["1990", "2000", "2010"]);

    SliderDispatch::new(&chart).register(&mut slider);
    slider.pointer_down_on_marker();
    // Step 10 of 24 is 2000; each step is 10px wide.
    assert_eq!(slider.pointer_move(208.0), Some(2000.0));
    assert_eq!(slider.pointer_move(209.0), None);
    slider.pointer_up();
    assert_eq!(chart.borrow().year(), 2000);
    assert_eq!(redraws(&chart.borrow()), 2);

    SliderDispatch::<Chart>::unregister(&mut slider);
    slider.pointer_down_on_marker();
    assert_eq!(slider.pointer_move(118.0), Some(1991.0));
    assert_eq!(chart.borrow().year(), 2000);
    assert_eq!(redraws(&chart.borrow()), 2);
}

#[test]
fn dispatcher_ignores_moves_back_to_the_shown_year() {
    let chart = Rc::new(RefCell::new(loaded_chart()));
    let dispatch = SliderDispatch::new(&chart);
    assert!(!dispatch.dispatch(2014.0));
    assert!(dispatch.dispatch(1995.0));
    assert_eq!(redraws(&chart.borrow()), 2);
}
