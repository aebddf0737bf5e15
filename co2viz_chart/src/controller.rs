// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use co2viz_charts::{Gradient, LogAxis, Slider, SliderError, SliderGeometry};
use co2viz_data::{Dataset, Year};
use kurbo::Point;

use crate::alerts::AlertSink;
use crate::config::ChartConfig;
use crate::entry::BubbleEntry;
use crate::error::LoadError;
use crate::info::{CountryInfo, InfoPanel, country_info, tooltip_lines};
use crate::interaction::{DragDetector, YearTarget};
use crate::source::DataSource;
use crate::surface::{ChartFrame, ChartSurface};

/// Element id of the year slider.
pub const YEAR_SLIDER_ID: &str = "year-slider";

/// Orchestrates the bubble chart: owns the dataset, the per-year entries, the selection
/// and the active gradient, and repaints the surface once per mutating call.
///
/// Before a successful [`ChartController::load`] the chart is empty and mutating calls
/// only update state.
#[derive(Debug)]
pub struct ChartController<S, A> {
    config: ChartConfig,
    surface: S,
    alerts: A,
    dataset: Option<Dataset>,
    entries: Vec<BubbleEntry>,
    x_axis: LogAxis,
    y_axis: LogAxis,
    gradient: Gradient,
    year: Year,
    selected: Option<usize>,
    hovered: Option<usize>,
    drag: DragDetector,
    info: InfoPanel,
}

impl<S: ChartSurface, A: AlertSink> ChartController<S, A> {
    /// Creates an empty chart.
    pub fn new(config: ChartConfig, surface: S, alerts: A) -> Self {
        let x_axis = LogAxis::new(config.x_axis.min, config.x_axis.max);
        let y_axis = LogAxis::new(config.y_axis.min, config.y_axis.max);
        let gradient = Gradient::named(&config.color_mode);
        let year = config.years.clamp(config.initial_year);
        Self {
            config,
            surface,
            alerts,
            dataset: None,
            entries: Vec::new(),
            x_axis,
            y_axis,
            gradient,
            year,
            selected: None,
            hovered: None,
            drag: DragDetector::default(),
            info: InfoPanel::Overview,
        }
    }

    /// Fetches and parses the dataset, then paints the current year.
    ///
    /// On failure exactly one alert is raised, the chart stays empty, and the error is
    /// returned. There is no retry.
    pub async fn load<D: DataSource>(&mut self, source: &D) -> Result<(), LoadError> {
        let location = source.location();
        tracing::debug!(%location, "fetching dataset");
        let loaded = match source.fetch().await {
            Ok(bytes) => Dataset::from_json_slice(&bytes).map_err(LoadError::from),
            Err(err) => Err(err),
        };
        let dataset = match loaded {
            Ok(dataset) => dataset,
            Err(err) => {
                tracing::error!(%location, error = %err, "failed to load dataset");
                self.alerts.alert(err.user_message());
                return Err(err);
            }
        };
        tracing::info!(%location, countries = dataset.len(), "dataset loaded");
        self.dataset = Some(dataset);
        self.selected = None;
        self.hovered = None;
        self.info = InfoPanel::Overview;
        self.rebuild_entries();
        self.redraw();
        Ok(())
    }

    /// Shows `year`, clamped to the configured range.
    ///
    /// Every entry's position, radius and color are recomputed; selection is kept.
    pub fn set_year(&mut self, year: Year) {
        let clamped = self.config.years.clamp(year);
        if clamped != year {
            tracing::debug!(year, clamped, "year outside the configured range");
        }
        self.year = clamped;
        if self.dataset.is_none() {
            return;
        }
        self.rebuild_entries();
        self.refresh_info();
        tracing::debug!(year = self.year, "year changed");
        self.redraw();
    }

    /// Selects the country with `code`, deselecting any previous one.
    ///
    /// Returns `false` (and changes nothing) for unknown codes.
    pub fn select(&mut self, code: &str) -> bool {
        let Some(index) = self.dataset.as_ref().and_then(|d| d.position(code)) else {
            tracing::warn!(code, "cannot select unknown country");
            return false;
        };
        if self.selected == Some(index) {
            return true;
        }
        if let Some(previous) = self.selected.replace(index)
            && let Some(entry) = self.entries.get_mut(previous)
        {
            entry.selected = false;
        }
        if let Some(entry) = self.entries.get_mut(index) {
            entry.selected = true;
        }
        self.info = self.info_for(index).map_or(InfoPanel::Overview, InfoPanel::Country);
        tracing::debug!(code, "country selected");
        self.redraw();
        true
    }

    /// Clears the selection. Returns whether anything was selected.
    pub fn deselect(&mut self) -> bool {
        let Some(previous) = self.selected.take() else {
            return false;
        };
        if let Some(entry) = self.entries.get_mut(previous) {
            entry.selected = false;
        }
        self.info = InfoPanel::Overview;
        tracing::debug!("selection cleared");
        self.redraw();
        true
    }

    /// Switches the gradient; unknown names select the default gradient.
    ///
    /// Asking for the active gradient does nothing. Returns whether the gradient changed.
    pub fn set_color_mode(&mut self, name: &str) -> bool {
        let gradient = Gradient::named(name);
        if gradient.name() != name {
            tracing::debug!(requested = name, using = gradient.name(), "unknown color mode");
        }
        if gradient.name() == self.gradient.name() {
            return false;
        }
        self.gradient = gradient;
        if let Some(dataset) = &self.dataset {
            for (entry, record) in self.entries.iter_mut().zip(dataset.records()) {
                entry.restyle(
                    record,
                    self.year,
                    &self.config.color_key,
                    self.config.color_domain,
                    &self.gradient,
                );
            }
        }
        tracing::debug!(mode = self.gradient.name(), "color mode changed");
        self.redraw();
        true
    }

    /// Pointer pressed on the chart.
    pub fn pointer_down(&mut self, at: Point) {
        self.drag.pointer_down(at);
    }

    /// Pointer moved over the chart; updates the hover state. Returns the hovered code.
    pub fn pointer_move(&mut self, to: Point) -> Option<&str> {
        self.drag.pointer_move(to);
        self.hover(to)
    }

    /// Pointer released. Returns whether the gesture was a drag.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.pointer_up()
    }

    /// A click at `point`: selects the bubble there, or deselects on the background.
    ///
    /// Ignored right after a drag. Returns whether the click was handled.
    pub fn click(&mut self, point: Point) -> bool {
        if !self.drag.allows_click() {
            tracing::debug!("click after drag ignored");
            return false;
        }
        match self.hit_test(point) {
            Some(index) => {
                let code = self.entries[index].code.clone();
                self.select(&code)
            }
            None => {
                self.deselect();
                true
            }
        }
    }

    /// Index of the topmost bubble under `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.frame().hit_test(point)
    }

    /// Updates the hovered country and the side panel for a pointer at `point`.
    ///
    /// Leaving every bubble returns the panel to the selection, or the overview.
    pub fn hover(&mut self, point: Point) -> Option<&str> {
        let hit = self.hit_test(point);
        if hit != self.hovered {
            self.hovered = hit;
            self.refresh_info();
        }
        hit.map(|i| self.entries[i].code.as_str())
    }

    /// Side panel contents for the country with `code` in the displayed year.
    pub fn country_info(&self, code: &str) -> Option<CountryInfo> {
        let index = self.dataset.as_ref()?.position(code)?;
        self.info_for(index)
    }

    /// Tooltip lines for the country with `code`.
    pub fn tooltip_lines(&self, code: &str) -> Option<Vec<String>> {
        self.entry(code).map(tooltip_lines)
    }

    /// A year slider over the configured range with decade labels, showing the
    /// displayed year. Connect it with [`crate::SliderDispatch`].
    pub fn year_slider(&self, geometry: SliderGeometry) -> Result<Slider, SliderError> {
        let years = self.config.years;
        let labels = years
            .iter()
            .filter(|y| y % 10 == 0)
            .map(f64::from)
            .collect::<Vec<_>>();
        let mut slider = Slider::new(
            YEAR_SLIDER_ID,
            f64::from(years.first),
            f64::from(years.last),
            1.0,
            labels,
            geometry,
            |_| {},
        )?;
        slider.selected_val(f64::from(self.year));
        Ok(slider)
    }

    /// The current frame.
    pub fn frame(&self) -> ChartFrame<'_> {
        ChartFrame {
            year: self.year,
            entries: &self.entries,
            x_axis: &self.x_axis,
            y_axis: &self.y_axis,
            plot_size: self.config.plot_size,
            color_mode: self.gradient.name(),
        }
    }

    /// Displayed year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Name of the active gradient.
    pub fn color_mode(&self) -> &str {
        self.gradient.name()
    }

    /// The active gradient.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Code of the selected country.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.entries[i].code.as_str())
    }

    /// Code of the hovered country.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.map(|i| self.entries[i].code.as_str())
    }

    /// What the side panel shows.
    pub fn info_panel(&self) -> &InfoPanel {
        &self.info
    }

    /// Per-country entries for the displayed year, in dataset order.
    pub fn entries(&self) -> &[BubbleEntry] {
        &self.entries
    }

    /// The entry for `code`.
    pub fn entry(&self, code: &str) -> Option<&BubbleEntry> {
        let index = self.dataset.as_ref()?.position(code)?;
        self.entries.get(index)
    }

    /// The loaded dataset.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Whether a dataset has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Configuration the chart was built with.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The surface frames are painted on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The alert sink.
    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    fn rebuild_entries(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.entries.clear();
            return;
        };
        self.entries = dataset
            .iter()
            .map(|record| {
                BubbleEntry::for_year(
                    record,
                    self.year,
                    &self.config.color_key,
                    self.config.color_domain,
                    &self.gradient,
                )
            })
            .collect();
        if let Some(entry) = self.selected.and_then(|i| self.entries.get_mut(i)) {
            entry.selected = true;
        }
    }

    fn info_for(&self, index: usize) -> Option<CountryInfo> {
        let record = self.dataset.as_ref()?.records().get(index)?;
        Some(country_info(record, self.year))
    }

    fn refresh_info(&mut self) {
        self.info = self
            .hovered
            .or(self.selected)
            .and_then(|i| self.info_for(i))
            .map_or(InfoPanel::Overview, InfoPanel::Country);
    }

    fn redraw(&mut self) {
        let frame = ChartFrame {
            year: self.year,
            entries: &self.entries,
            x_axis: &self.x_axis,
            y_axis: &self.y_axis,
            plot_size: self.config.plot_size,
            color_mode: self.gradient.name(),
        };
        tracing::debug!(year = frame.year, entries = frame.entries.len(), "redraw");
        self.surface.redraw(&frame);
    }
}

impl<S: ChartSurface, A: AlertSink> YearTarget for ChartController<S, A> {
    fn current_year(&self) -> Year {
        self.year
    }

    fn show_year(&mut self, year: Year) {
        self.set_year(year);
    }
}
