// File: crates/chart-core/tests/selection.rs
// Purpose: Selection state machine, marker styling and companion list filtering,
// against a scripted chart and against the real chart's hit testing.

use std::rc::Rc;

use chart_core::page::LinkHandle;
use chart_core::{
    Chart, ChartError, ChartSurface, ClickEvent, CompanionElement, ContractLink, DataPoint, MemoryPage,
    PointStyle, Selection, SelectionController, Transition,
};
use chrono::NaiveDate;
use skia_safe::Color;

/// Chart stand-in whose click resolution is set by the test.
#[derive(Default)]
struct ScriptedChart {
    next_hit: Option<usize>,
    loaded: usize,
    colors: Vec<Color>,
    radii: Vec<f32>,
    active: Option<usize>,
    transitions: Vec<Transition>,
}

impl ChartSurface for ScriptedChart {
    fn set_data(&mut self, points: &[DataPoint]) { self.loaded = points.len(); }
    fn element_at(&self, _event: &ClickEvent) -> Option<usize> { self.next_hit }
    fn set_point_styles(&mut self, colors: &[Color], radii: &[f32]) {
        self.colors = colors.to_vec();
        self.radii = radii.to_vec();
    }
    fn set_active(&mut self, index: Option<usize>) { self.active = index; }
    fn update(&mut self, transition: Transition) { self.transitions.push(transition); }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn two_points() -> Rc<[DataPoint]> {
    vec![
        DataPoint::new(d(2020, 1, 1), 1000.0, 2),
        DataPoint::new(d(2020, 2, 1), 5000.0, 7),
    ]
    .into()
}

fn links() -> Vec<ContractLink> {
    vec![
        ContractLink::new("/contratos/a", "A", "2020-01-01"),
        ContractLink::new("/contratos/b", "B", "2020-02-01"),
        ContractLink::new("/contratos/c", "C", "2020-02-01"),
        ContractLink::new("/contratos/d", "D", "2020-03-01"),
        ContractLink::undated("/contratos/e", "E"),
    ]
}

type Scripted = SelectionController<Rc<std::cell::RefCell<ScriptedChart>>, LinkHandle>;

fn scripted() -> (Scripted, Rc<std::cell::RefCell<ScriptedChart>>, Vec<LinkHandle>) {
    let mut page = MemoryPage::<ScriptedChart>::new();
    let chart = page.add_chart("chart", ScriptedChart::default());
    let handles = page.add_list("contracts", links());
    let ctl = SelectionController::attach(&page, "chart", "contracts", two_points(), PointStyle::default())
        .expect("attach");
    (ctl, chart, handles)
}

fn visible(handles: &[LinkHandle]) -> Vec<bool> {
    handles.iter().map(|h| h.is_visible()).collect()
}

fn click(ctl: &mut Scripted, chart: &Rc<std::cell::RefCell<ScriptedChart>>, hit: Option<usize>) {
    chart.borrow_mut().next_hit = hit;
    ctl.on_chart_click(&ClickEvent::new(0.0, 0.0));
}

#[test]
fn attach_wires_points_and_starts_unselected() {
    let (ctl, chart, handles) = scripted();
    let style = PointStyle::default();
    assert_eq!(ctl.selection(), Selection::Unselected);
    assert_eq!(chart.borrow().loaded, 2);
    assert_eq!(chart.borrow().colors, vec![style.default_color; 2]);
    assert_eq!(chart.borrow().radii, vec![style.default_radius; 2]);
    assert!(visible(&handles).iter().all(|v| *v));
}

#[test]
fn clicking_point_highlights_it_and_filters_links() {
    let (mut ctl, chart, handles) = scripted();
    let style = PointStyle::default();

    click(&mut ctl, &chart, Some(1));

    assert_eq!(ctl.selection(), Selection::Selected(1));
    assert_eq!(ctl.selected_point().map(|p| p.date_key()), Some("2020-02-01".to_string()));
    let c = chart.borrow();
    assert_eq!(c.colors, vec![style.default_color, style.selected_color]);
    assert_eq!(c.radii, vec![style.default_radius, style.selected_radius]);
    assert_eq!(c.active, Some(1));
    // Duplicate dates are shown together; undated links are hidden.
    assert_eq!(visible(&handles), vec![false, true, true, false, false]);
}

#[test]
fn reclicking_same_point_keeps_selection() {
    let (mut ctl, chart, handles) = scripted();

    click(&mut ctl, &chart, Some(0));
    let first = ctl.state().clone();
    let first_visible = visible(&handles);

    click(&mut ctl, &chart, Some(0));
    assert_eq!(ctl.selection(), Selection::Selected(0));
    assert_eq!(ctl.state(), &first);
    assert_eq!(visible(&handles), first_visible);
    assert_eq!(first_visible, vec![true, false, false, false, false]);
}

#[test]
fn switching_points_moves_highlight() {
    let (mut ctl, chart, _handles) = scripted();
    let style = PointStyle::default();

    click(&mut ctl, &chart, Some(0));
    click(&mut ctl, &chart, Some(1));

    assert_eq!(ctl.selection(), Selection::Selected(1));
    assert_eq!(chart.borrow().radii, vec![style.default_radius, style.selected_radius]);
}

#[test]
fn miss_resets_everything() {
    let (mut ctl, chart, handles) = scripted();
    let style = PointStyle::default();

    click(&mut ctl, &chart, Some(1));
    click(&mut ctl, &chart, None);

    assert_eq!(ctl.selection(), Selection::Unselected);
    assert_eq!(ctl.selected_point(), None);
    assert_eq!(chart.borrow().colors, vec![style.default_color; 2]);
    assert_eq!(chart.borrow().radii, vec![style.default_radius; 2]);
    assert_eq!(chart.borrow().active, None);
    assert!(visible(&handles).iter().all(|v| *v));

    // Missing again while unselected stays unselected.
    click(&mut ctl, &chart, None);
    assert_eq!(ctl.selection(), Selection::Unselected);
}

#[test]
fn every_redraw_is_instant() {
    let (mut ctl, chart, _handles) = scripted();
    click(&mut ctl, &chart, Some(1));
    click(&mut ctl, &chart, None);
    let transitions = chart.borrow().transitions.clone();
    assert_eq!(transitions.len(), 3, "attach plus two clicks");
    assert!(transitions.iter().all(|t| *t == Transition::NONE && t.is_instant()));
}

#[test]
fn out_of_range_hit_counts_as_miss() {
    let (mut ctl, chart, handles) = scripted();
    click(&mut ctl, &chart, Some(0));
    click(&mut ctl, &chart, Some(9));
    assert_eq!(ctl.selection(), Selection::Unselected);
    assert!(visible(&handles).iter().all(|v| *v));
}

#[test]
fn custom_style_is_per_instance() {
    let mut page = MemoryPage::<ScriptedChart>::new();
    let chart = page.add_chart("chart", ScriptedChart::default());
    page.add_list("contracts", links());
    let style = PointStyle {
        default_color: Color::from_argb(255, 200, 200, 200),
        selected_color: Color::from_argb(255, 220, 38, 38),
        default_radius: 2.0,
        selected_radius: 8.0,
    };
    let mut ctl = SelectionController::attach(&page, "chart", "contracts", two_points(), style).unwrap();
    chart.borrow_mut().next_hit = Some(0);
    ctl.on_chart_click(&ClickEvent::new(1.0, 1.0));
    assert_eq!(chart.borrow().colors, vec![style.selected_color, style.default_color]);
    assert_eq!(chart.borrow().radii, vec![8.0, 2.0]);
}

#[test]
fn missing_containers_are_setup_errors() {
    let mut page = MemoryPage::<ScriptedChart>::new();
    page.add_chart("chart", ScriptedChart::default());
    page.add_list("contracts", links());

    let err = SelectionController::attach(&page, "nope", "contracts", two_points(), PointStyle::default())
        .err()
        .expect("missing chart");
    assert!(matches!(err, ChartError::ContainerNotFound(ref id) if id == "nope"));
    assert_eq!(err.to_string(), "container not found: #nope");

    let err = SelectionController::attach(&page, "chart", "nope", two_points(), PointStyle::default())
        .err()
        .expect("missing list");
    assert!(matches!(err, ChartError::ListNotFound(_)));
}

#[test]
fn real_chart_click_resolves_nearest_point() {
    let mut page = MemoryPage::<Chart>::new();
    let chart = page.add_chart("chart", Chart::new());
    let handles = page.add_list("contracts", links());
    let mut ctl = SelectionController::attach(&page, "chart", "contracts", two_points(), PointStyle::default())
        .expect("attach");

    let at = chart.borrow().pixel_of(1).expect("point 1 on canvas");
    ctl.on_chart_click(&ClickEvent::new(at.x + 1.5, at.y - 1.5));

    assert_eq!(ctl.selection(), Selection::Selected(1));
    assert_eq!(visible(&handles), vec![false, true, true, false, false]);
    {
        let c = chart.borrow();
        assert_eq!(c.point_radii(), &[3.0, 6.0]);
        assert_eq!(c.active(), Some(1));
        assert_eq!(c.last_transition(), Some(Transition::NONE));
    }

    // Far corner of the canvas hits nothing.
    ctl.on_chart_click(&ClickEvent::new(0.0, 0.0));
    assert_eq!(ctl.selection(), Selection::Unselected);
    assert!(visible(&handles).iter().all(|v| *v));
    assert_eq!(chart.borrow().point_radii(), &[3.0, 3.0]);
}
