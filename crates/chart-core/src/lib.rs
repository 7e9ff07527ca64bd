// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; spending chart, magnitude formatting and
// click-driven point selection.

pub mod chart;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod error;
pub mod format;
pub mod point;
pub mod fiscal;
pub mod page;
pub mod selection;

pub use chart::{Chart, RenderOptions};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::{PointStyle, Theme};
pub use text::TextShaper;
pub use error::{ChartError, Result};
pub use format::{format_magnitude, format_grouped, currency_tick};
pub use point::{chart_data, ContractRecord, DataPoint};
pub use page::{ChartSurface, CompanionElement, ContractLink, MemoryPage, Page};
pub use selection::{Selection, SelectionController, SelectionState};
pub use types::{ClickEvent, Transition};
