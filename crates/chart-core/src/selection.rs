// File: crates/chart-core/src/selection.rs
// Summary: Click-driven point selection: marker styling and companion list filtering.

use std::rc::Rc;

use skia_safe as skia;
use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::page::{ChartSurface, CompanionElement, Page};
use crate::point::DataPoint;
use crate::theme::PointStyle;
use crate::types::{ClickEvent, Transition};

/// Which point, if any, is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

impl Selection {
    /// Next state for a click that resolved to `hit`. Hitting the selected point
    /// again keeps it selected; a miss clears the selection.
    pub fn on_hit(self, hit: Option<usize>) -> Selection {
        match hit {
            Some(i) => Selection::Selected(i),
            None => Selection::Unselected,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Selected(i) => Some(i),
            Selection::Unselected => None,
        }
    }
}

/// Selection plus the marker styling derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    pub selection: Selection,
    pub colors: Vec<skia::Color>,
    pub radii: Vec<f32>,
}

impl SelectionState {
    /// Style every one of `len` points: defaults everywhere except the selected index.
    pub fn compute(selection: Selection, len: usize, style: &PointStyle) -> Self {
        let mut colors = vec![style.default_color; len];
        let mut radii = vec![style.default_radius; len];
        if let Some(i) = selection.index().filter(|&i| i < len) {
            colors[i] = style.selected_color;
            radii[i] = style.selected_radius;
        }
        Self { selection, colors, radii }
    }
}

/// Binds a chart's clicks to marker highlighting and to a date-filtered list of
/// contract links.
pub struct SelectionController<C, L> {
    chart: C,
    links: Vec<L>,
    points: Rc<[DataPoint]>,
    style: PointStyle,
    state: SelectionState,
}

impl<C: ChartSurface, L: CompanionElement> SelectionController<C, L> {
    /// Wire `points` into `chart` and start unselected with every link shown.
    pub fn new(mut chart: C, links: Vec<L>, points: Rc<[DataPoint]>, style: PointStyle) -> Self {
        chart.set_data(&points);
        let state = SelectionState::compute(Selection::Unselected, points.len(), &style);
        let mut controller = Self { chart, links, points, style, state };
        controller.apply(Selection::Unselected);
        controller
    }

    /// Look up the chart container `chart_id` and the list `list_id` on `page`.
    pub fn attach<P>(page: &P, chart_id: &str, list_id: &str, points: Rc<[DataPoint]>, style: PointStyle) -> Result<Self>
    where
        P: Page<Chart = C, Link = L>,
    {
        let chart = page
            .chart(chart_id)
            .ok_or_else(|| ChartError::ContainerNotFound(chart_id.to_string()))?;
        let links = page
            .links(list_id)
            .ok_or_else(|| ChartError::ListNotFound(list_id.to_string()))?;
        debug!(chart_id, list_id, points = points.len(), links = links.len(), "selection attached");
        Ok(Self::new(chart, links, points, style))
    }

    /// Click handler: resolve the nearest point and restyle chart and list.
    pub fn on_chart_click(&mut self, event: &ClickEvent) {
        let hit = self.chart.element_at(event);
        debug!(x = event.x, y = event.y, ?hit, "chart click");
        self.select(hit);
    }

    /// Move to the state for a click resolving to `hit`. Out of range indices
    /// count as a miss.
    pub fn select(&mut self, hit: Option<usize>) {
        let hit = match hit {
            Some(i) if i >= self.points.len() => {
                warn!(index = i, points = self.points.len(), "click index out of range");
                None
            }
            other => other,
        };
        let next = self.state.selection.on_hit(hit);
        self.apply(next);
    }

    fn apply(&mut self, selection: Selection) {
        let state = SelectionState::compute(selection, self.points.len(), &self.style);
        let key = selection.index().map(|i| self.points[i].date_key());

        self.chart.set_point_styles(&state.colors, &state.radii);
        self.chart.set_active(selection.index());
        self.chart.update(Transition::NONE);

        let mut shown = 0usize;
        for link in &mut self.links {
            let visible = match &key {
                Some(k) => link.date_attr().as_deref() == Some(k.as_str()),
                None => true,
            };
            link.set_visible(visible);
            shown += visible as usize;
        }
        debug!(?selection, shown, total = self.links.len(), "selection applied");
        self.state = state;
    }

    pub fn selection(&self) -> Selection { self.state.selection }
    pub fn state(&self) -> &SelectionState { &self.state }
    pub fn selected_point(&self) -> Option<&DataPoint> {
        self.state.selection.index().and_then(|i| self.points.get(i))
    }
    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn chart(&self) -> &C { &self.chart }
    pub fn links(&self) -> &[L] { &self.links }
}
