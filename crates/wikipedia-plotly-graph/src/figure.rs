use std::path::Path;

use log::info;
use serde::Serialize;
use wikipedia_graph::LinkGraph;

use crate::{EdgeTrace, NodeTrace, PositionMap, RenderError};

/// Where [`Figure::write_html`] puts the page when no other path is given
pub const DEFAULT_OUTPUT: &str = "file.html";

const PLOT_DIV: &str = "wikipedia-graph";

const ATTRIBUTION: &str = "Visualisation based on the Plotly network graph example: \
    <a href='https://plotly.com/python/network-graphs/'> https://plotly.com/python/network-graphs/</a>";

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub b: u32,
    pub l: u32,
    pub r: u32,
    pub t: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    pub zeroline: bool,
    pub showticklabels: bool,
}

impl Axis {
    /// No grid, zero line or labels
    pub fn hidden() -> Self {
        Self {
            showgrid: false,
            zeroline: false,
            showticklabels: false,
        }
    }
}

/// The cosmetic part of the figure, none of it depends on the graph
#[derive(Debug, Clone, Serialize)]
pub struct FigureStyle {
    pub title: Title,
    pub showlegend: bool,
    pub hovermode: &'static str,
    pub margin: Margin,
    pub annotations: Vec<Annotation>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: String,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title: Title {
                text: "<br>Links between Wikipedia Pages".to_string(),
            },
            showlegend: false,
            hovermode: "closest",
            margin: Margin {
                b: 20,
                l: 5,
                r: 5,
                t: 40,
            },
            annotations: vec![Annotation {
                text: ATTRIBUTION.to_string(),
                showarrow: false,
                xref: "paper",
                yref: "paper",
                x: 0.005,
                y: -0.002,
            }],
            xaxis: Axis::hidden(),
            yaxis: Axis::hidden(),
            plot_bgcolor: "lightsteelblue".to_string(),
        }
    }
}

impl FigureStyle {
    /// The default style, titled after the page the crawl started from
    pub fn for_origin(origin: &str) -> Self {
        Self {
            title: Title {
                text: format!("<br>Links between Wikipedia Pages (starting with {origin})"),
            },
            ..Self::default()
        }
    }

    pub fn background(self, color: impl Into<String>) -> Self {
        Self {
            plot_bgcolor: color.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Trace {
    Edges(EdgeTrace),
    Nodes(NodeTrace),
}

/// A plotly figure of a [`LinkGraph`]
#[derive(Debug, Clone)]
pub struct Figure {
    origin: String,
    data: [Trace; 2],
    layout: FigureStyle,
}

impl Figure {
    pub fn new(graph: &LinkGraph, positions: &PositionMap, origin: &str) -> Result<Self, RenderError> {
        let edges = EdgeTrace::from_graph(graph, positions)?;
        let nodes = NodeTrace::from_graph(graph, positions)?;

        info!("Graph created");

        Ok(Self {
            origin: origin.to_string(),
            data: [Trace::Edges(edges), Trace::Nodes(nodes)],
            layout: FigureStyle::for_origin(origin),
        })
    }

    pub fn with_style(self, layout: FigureStyle) -> Self {
        Self { layout, ..self }
    }

    pub fn edge_trace(&self) -> Option<&EdgeTrace> {
        self.data.iter().find_map(|trace| match trace {
            Trace::Edges(edges) => Some(edges),
            Trace::Nodes(_) => None,
        })
    }

    pub fn node_trace(&self) -> Option<&NodeTrace> {
        self.data.iter().find_map(|trace| match trace {
            Trace::Nodes(nodes) => Some(nodes),
            Trace::Edges(_) => None,
        })
    }

    pub fn style(&self) -> &FigureStyle {
        &self.layout
    }

    /// A standalone page that draws the figure with plotly.js.
    ///
    /// The library is inlined so the page works offline.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let scripts = plotly::Plot::offline_js_sources();
        let data = script_json(&self.data)?;
        let layout = script_json(&self.layout)?;
        let title = escape_html(&format!(
            "Links between Wikipedia Pages (starting with {})",
            self.origin
        ));

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
{scripts}
</head>
<body style="margin:0">
<div id="{PLOT_DIV}" style="width:100%;height:100vh;"></div>
<script type="text/javascript">
Plotly.newPlot("{PLOT_DIV}", {data}, {layout}, {{"responsive": true}});
</script>
</body>
</html>
"#
        ))
    }

    /// Replaces anything already at `path`
    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        std::fs::write(path.as_ref(), self.to_html()?)?;

        info!("File saved");

        Ok(())
    }
}

// `</` would end the surrounding script tag
fn script_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
