// File: crates/chart-core/src/error.rs
// Summary: Error type shared by formatting, page binding and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// NaN or an infinity was handed to the formatter.
    #[error("cannot format non-finite value {0}")]
    NonFinite(f64),

    /// No chart container with the given id exists on the page.
    #[error("container not found: #{0}")]
    ContainerNotFound(String),

    /// No companion list with the given id exists on the page.
    #[error("companion list not found: #{0}")]
    ListNotFound(String),

    #[error("failed to create raster surface")]
    Surface,

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
