//! Route rendering boundary.
//!
//! Renderers consume only the finished edge list and, optionally, a circuit.
//! No solving happens here.
//!
//! - [`RouteRenderer`]: the boundary trait
//! - [`DotRenderer`]: Graphviz DOT text output

use std::fmt::Display;

use crate::config::SolverConfig;
use crate::models::Edge;

/// Turns a graph (and optionally a route over it) into a drawable form.
pub trait RouteRenderer<V> {
    /// Rendered artefact (text, image bytes, ...).
    type Output;

    /// Renders `edges`, overlaying `circuit` when given.
    fn render(&self, edges: &[Edge<V>], circuit: Option<&[V]>) -> Self::Output;
}

/// Renders to Graphviz DOT.
///
/// Every edge is drawn with its weight as label. With route highlighting on,
/// each circuit step is drawn again as a red edge labelled with its step
/// number.
///
/// # Examples
///
/// ```
/// use u_postman::graph::Graph;
/// use u_postman::render::{DotRenderer, RouteRenderer};
///
/// let mut g = Graph::new();
/// g.add_edge("A", "B", 3.0);
/// g.add_edge("B", "A", 2.0);
///
/// let sol = g.solve().unwrap();
/// let dot = DotRenderer::new()
///     .with_highlight_route(true)
///     .render(g.edges(), Some(sol.circuit()));
/// assert!(dot.starts_with("graph \"route\" {"));
/// assert!(dot.contains("\"A\" -- \"B\" [label=\"3\"];"));
/// assert!(dot.contains("color=red"));
/// ```
#[derive(Debug, Clone)]
pub struct DotRenderer {
    name: String,
    highlight_route: bool,
}

impl DotRenderer {
    /// Creates a renderer named `route` without highlighting.
    pub fn new() -> Self {
        Self {
            name: "route".to_string(),
            highlight_route: false,
        }
    }

    /// Creates a renderer honouring `config.highlight_route`.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new().with_highlight_route(config.highlight_route)
    }

    /// Sets the DOT graph name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enables or disables the red circuit overlay.
    pub fn with_highlight_route(mut self, highlight: bool) -> Self {
        self.highlight_route = highlight;
        self
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Display> RouteRenderer<V> for DotRenderer {
    type Output = String;

    fn render(&self, edges: &[Edge<V>], circuit: Option<&[V]>) -> String {
        let mut lines = vec![
            format!("graph {} {{", quote(&self.name)),
            "    node [shape=circle, style=filled, fillcolor=lightblue, fontsize=10];".to_string(),
        ];

        lines.extend(edges.iter().map(|e| {
            format!(
                "    {} -- {} [label=\"{}\"];",
                quote(&e.u),
                quote(&e.v),
                e.weight
            )
        }));

        if let (true, Some(circuit)) = (self.highlight_route, circuit) {
            lines.extend(circuit.windows(2).enumerate().map(|(step, w)| {
                format!(
                    "    {} -- {} [color=red, penwidth=2, fontcolor=red, label=\"{}\"];",
                    quote(&w[0]),
                    quote(&w[1]),
                    step + 1
                )
            }));
        }

        lines.push("}".to_string());
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn quote(value: &impl Display) -> String {
    format!("\"{}\"", value.to_string().replace('\\', "\\\\").replace('"', "\\\""))
}
