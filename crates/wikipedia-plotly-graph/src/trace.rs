use serde::Serialize;
use wikipedia_graph::LinkGraph;

use crate::{PositionMap, RenderError};

fn position(positions: &PositionMap, node: &str) -> Result<(f64, f64), RenderError> {
    positions
        .get(node)
        .ok_or_else(|| RenderError::MissingPosition(node.to_string()))
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub width: f64,
    pub color: &'static str,
}

/// Every edge as one line segment, segments are separated by a `null` point
#[derive(Debug, Clone, Serialize)]
pub struct EdgeTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub line: Line,
    pub hoverinfo: &'static str,
    pub mode: &'static str,
}

impl EdgeTrace {
    pub fn from_graph(graph: &LinkGraph, positions: &PositionMap) -> Result<Self, RenderError> {
        let mut x = Vec::with_capacity(graph.edge_count() * 3);
        let mut y = Vec::with_capacity(graph.edge_count() * 3);

        for (lhs, rhs) in graph.edges() {
            let (x0, y0) = position(positions, lhs)?;
            let (x1, y1) = position(positions, rhs)?;

            x.extend([Some(x0), Some(x1), None]);
            y.extend([Some(y0), Some(y1), None]);
        }

        Ok(Self {
            kind: "scatter",
            x,
            y,
            line: Line {
                width: 0.5,
                color: "#888",
            },
            hoverinfo: "none",
            mode: "lines",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBarTitle {
    pub text: &'static str,
    pub side: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub thickness: u32,
    pub title: ColorBarTitle,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub showscale: bool,
    pub colorscale: &'static str,
    pub reversescale: bool,
    /// The degree of each node
    pub color: Vec<usize>,
    pub size: u32,
    pub colorbar: ColorBar,
}

/// One marker per node, coloured by how many neighbours it has
#[derive(Debug, Clone, Serialize)]
pub struct NodeTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub hoverinfo: &'static str,
    pub text: Vec<String>,
    pub marker: Marker,
}

impl NodeTrace {
    pub fn from_graph(graph: &LinkGraph, positions: &PositionMap) -> Result<Self, RenderError> {
        let mut x = Vec::with_capacity(graph.node_count());
        let mut y = Vec::with_capacity(graph.node_count());
        let mut degrees = Vec::with_capacity(graph.node_count());
        let mut text = Vec::with_capacity(graph.node_count());

        for (node, degree) in graph.node_degrees() {
            let (node_x, node_y) = position(positions, node)?;

            x.push(node_x);
            y.push(node_y);
            degrees.push(degree);
            text.push(hover_text(node, degree));
        }

        Ok(Self {
            kind: "scatter",
            x,
            y,
            mode: "markers",
            hoverinfo: "text",
            text,
            marker: Marker {
                showscale: true,
                colorscale: "RdBu",
                reversescale: true,
                color: degrees,
                size: 10,
                colorbar: ColorBar {
                    thickness: 15,
                    title: ColorBarTitle {
                        text: "Node Connections",
                        side: "right",
                    },
                    xanchor: "left",
                },
            },
        })
    }
}

pub fn hover_text(node: &str, degree: usize) -> String {
    format!("Page: {node}<br># of connections: {degree}")
}
