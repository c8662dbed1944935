// ─────────────────────────────────────────────────────────────────────
// SCPN Shot Dashboard — Chart Specifications
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plotly-compatible figure descriptions.
//!
//! Serializes to `{"data": [...], "layout": {...}}`, the shape
//! `Plotly.newPlot` and `plotly_chart` both accept.

use serde::Serialize;

/// Line style shared by traces and shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl Line {
    pub fn solid(color: &str) -> Self {
        Line {
            color: color.to_string(),
            dash: None,
        }
    }

    pub fn dashed(color: &str) -> Self {
        Line {
            color: color.to_string(),
            dash: Some("dash".to_string()),
        }
    }
}

/// Line-mode scatter trace (time series).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    pub mode: String,
    pub line: Line,
}

/// 2-D heatmap trace. `z[row][col]` with rows along `y`, columns along `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    pub z: Vec<Vec<f64>>,
    pub x: Vec<f64>,
    pub y: Vec<usize>,
    pub colorscale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Heatmap(HeatmapTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    pub const ZERO: Margin = Margin {
        l: 0,
        r: 0,
        t: 0,
        b: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

/// Vertical line spanning the full plot height, in data x / paper y.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub xref: String,
    pub yref: String,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub text: String,
    pub showarrow: bool,
    pub xanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Layout {
    pub fn new(title: &str, height: u32) -> Self {
        Layout {
            height,
            title: Title {
                text: title.to_string(),
            },
            margin: None,
            xaxis: None,
            yaxis: None,
            shapes: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_axis_titles(mut self, x: &str, y: &str) -> Self {
        self.xaxis = Some(Axis {
            title: Title { text: x.to_string() },
        });
        self.yaxis = Some(Axis {
            title: Title { text: y.to_string() },
        });
        self
    }
}

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Figure {
            data: Vec::new(),
            layout,
        }
    }

    pub fn add_line(&mut self, x: Vec<f64>, y: Vec<f64>, name: &str, color: &str) -> &mut Self {
        self.data.push(Trace::Scatter(ScatterTrace {
            x,
            y,
            name: name.to_string(),
            mode: "lines".to_string(),
            line: Line::solid(color),
        }));
        self
    }

    pub fn add_heatmap(
        &mut self,
        z: Vec<Vec<f64>>,
        x: Vec<f64>,
        y: Vec<usize>,
        colorscale: &str,
    ) -> &mut Self {
        self.data.push(Trace::Heatmap(HeatmapTrace {
            z,
            x,
            y,
            colorscale: colorscale.to_string(),
        }));
        self
    }

    /// Dashed vertical marker at `x` with a text label at the top.
    pub fn add_vline(&mut self, x: f64, color: &str, text: &str) -> &mut Self {
        self.layout.shapes.push(Shape {
            kind: "line".to_string(),
            xref: "x".to_string(),
            yref: "paper".to_string(),
            x0: x,
            x1: x,
            y0: 0.0,
            y1: 1.0,
            line: Line::dashed(color),
        });
        self.layout.annotations.push(Annotation {
            x,
            y: 1.0,
            xref: "x".to_string(),
            yref: "paper".to_string(),
            text: text.to_string(),
            showarrow: false,
            xanchor: "left".to_string(),
        });
        self
    }

    /// Number of data points across all traces.
    pub fn n_points(&self) -> usize {
        self.data
            .iter()
            .map(|t| match t {
                Trace::Scatter(s) => s.y.len(),
                Trace::Heatmap(h) => h.z.iter().map(Vec::len).sum(),
            })
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
