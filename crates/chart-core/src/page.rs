// File: crates/chart-core/src/page.rs
// Summary: Host page seams (chart surface, companion links, lookup by id) and an
// in-memory page used by the demo and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use skia_safe as skia;

use crate::point::DataPoint;
use crate::types::{ClickEvent, Transition};
use crate::Chart;

/// What the selection logic needs from a chart.
pub trait ChartSurface {
    /// Wire the ordered series into the chart.
    fn set_data(&mut self, points: &[DataPoint]);
    /// Index of the point under the click, if any.
    fn element_at(&self, event: &ClickEvent) -> Option<usize>;
    /// Replace per-point marker colors and radii (one entry per point).
    fn set_point_styles(&mut self, colors: &[skia::Color], radii: &[f32]);
    /// Point whose tooltip is shown.
    fn set_active(&mut self, _index: Option<usize>) {}
    /// Redraw with the given transition.
    fn update(&mut self, transition: Transition);
}

/// A link in the companion list, carrying a `data-date` attribute.
pub trait CompanionElement {
    fn date_attr(&self) -> Option<String>;
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// Element lookup on the host page. Returned values are handles to elements
/// the page owns.
pub trait Page {
    type Chart: ChartSurface;
    type Link: CompanionElement;

    fn chart(&self, id: &str) -> Option<Self::Chart>;
    /// Child links of the list container `list_id`, in document order.
    fn links(&self, list_id: &str) -> Option<Vec<Self::Link>>;
}

// Shared handles, so the page and the controller see the same element.
impl<T: ChartSurface> ChartSurface for Rc<RefCell<T>> {
    fn set_data(&mut self, points: &[DataPoint]) { self.borrow_mut().set_data(points) }
    fn element_at(&self, event: &ClickEvent) -> Option<usize> { self.borrow().element_at(event) }
    fn set_point_styles(&mut self, colors: &[skia::Color], radii: &[f32]) {
        self.borrow_mut().set_point_styles(colors, radii)
    }
    fn set_active(&mut self, index: Option<usize>) { self.borrow_mut().set_active(index) }
    fn update(&mut self, transition: Transition) { self.borrow_mut().update(transition) }
}

impl<T: CompanionElement> CompanionElement for Rc<RefCell<T>> {
    fn date_attr(&self) -> Option<String> { self.borrow().date_attr() }
    fn set_visible(&mut self, visible: bool) { self.borrow_mut().set_visible(visible) }
    fn is_visible(&self) -> bool { self.borrow().is_visible() }
}

/// A contract link as rendered in the companion list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractLink {
    pub href: String,
    pub label: String,
    pub date: Option<String>,
    pub hidden: bool,
}

impl ContractLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>, date: impl Into<String>) -> Self {
        Self { href: href.into(), label: label.into(), date: Some(date.into()), hidden: false }
    }

    /// A link with no `data-date` attribute.
    pub fn undated(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self { href: href.into(), label: label.into(), date: None, hidden: false }
    }
}

impl CompanionElement for ContractLink {
    fn date_attr(&self) -> Option<String> { self.date.clone() }
    fn set_visible(&mut self, visible: bool) { self.hidden = !visible; }
    fn is_visible(&self) -> bool { !self.hidden }
}

pub type LinkHandle = Rc<RefCell<ContractLink>>;

/// Page held in memory: charts and link lists registered by id.
pub struct MemoryPage<C = Chart> {
    charts: HashMap<String, Rc<RefCell<C>>>,
    lists: HashMap<String, Vec<LinkHandle>>,
}

impl<C> MemoryPage<C> {
    pub fn new() -> Self {
        Self { charts: HashMap::new(), lists: HashMap::new() }
    }

    /// Register a chart container; returns the shared handle.
    pub fn add_chart(&mut self, id: impl Into<String>, chart: C) -> Rc<RefCell<C>> {
        let handle = Rc::new(RefCell::new(chart));
        self.charts.insert(id.into(), Rc::clone(&handle));
        handle
    }

    /// Register a list container with its links; returns the shared handles.
    pub fn add_list(&mut self, id: impl Into<String>, links: Vec<ContractLink>) -> Vec<LinkHandle> {
        let handles: Vec<LinkHandle> = links.into_iter().map(|l| Rc::new(RefCell::new(l))).collect();
        self.lists.insert(id.into(), handles.clone());
        handles
    }
}

impl<C> Default for MemoryPage<C> {
    fn default() -> Self { Self::new() }
}

impl<C: ChartSurface> Page for MemoryPage<C> {
    type Chart = Rc<RefCell<C>>;
    type Link = LinkHandle;

    fn chart(&self, id: &str) -> Option<Self::Chart> {
        self.charts.get(id).cloned()
    }

    fn links(&self, list_id: &str) -> Option<Vec<Self::Link>> {
        self.lists.get(list_id).cloned()
    }
}
