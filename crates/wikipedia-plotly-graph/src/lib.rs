#![forbid(unsafe_code)]

mod figure;
mod position;
mod trace;

pub use figure::{Annotation, Axis, DEFAULT_OUTPUT, Figure, FigureStyle, Margin, Title};
pub use position::PositionMap;
pub use trace::{ColorBar, ColorBarTitle, EdgeTrace, Line, Marker, NodeTrace, hover_text};

use fastrand::Rng;
use std::path::Path;
use thiserror::Error;
use wikipedia_graph::LinkGraph;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Node '{0}' has no position")]
    MissingPosition(String),
    #[error("Failed to serialise figure: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}

/// Lay the graph out randomly and write it to `path` as a standalone page
pub fn render_graph(
    graph: &LinkGraph,
    origin: &str,
    rng: &mut Rng,
    path: impl AsRef<Path>,
) -> Result<Figure, RenderError> {
    let positions = PositionMap::random(graph, rng);

    let figure = Figure::new(graph, &positions, origin)?;

    figure.write_html(path)?;

    Ok(figure)
}
