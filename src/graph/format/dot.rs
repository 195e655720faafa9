//! Graphviz DOT output with pinned node positions.
//!
//! The output is meant for `neato -n2`, which keeps every `pos` as given
//! (in points) instead of computing a layout.

use crate::graph::style::{with_alpha, DiagramStyle, TITLE};
use crate::graph::view::ErdGraph;

/// Generate DOT source for the diagram
pub fn to_dot(graph: &ErdGraph, style: &DiagramStyle) -> String {
    let mut output = String::new();

    // Header
    output.push_str("digraph ERD {\n");
    output.push_str(&format!(
        "  graph [label=\"{}\", labelloc=t, fontname=\"{}\", fontsize={}, pad=\"{}\", dpi={}, outputorder=edgesfirst];\n",
        escape_dot_string(TITLE),
        style.bold_font,
        style.title_font_size,
        style.pad,
        style.dpi
    ));

    // Uniform circles, bold labels
    output.push_str(&format!(
        "  node [shape=circle, fixedsize=true, width={d}, height={d}, style=filled, penwidth=0, fontname=\"{}\", fontsize={}];\n",
        style.bold_font,
        style.label_font_size,
        d = style.node_diameter
    ));
    output.push_str(&format!(
        "  edge [color=\"{}\", penwidth={}, arrowhead=normal, arrowsize={}];\n\n",
        style.edge_color, style.edge_width, style.arrow_size
    ));

    for table in &graph.tables {
        output.push_str(&format!(
            "  {} [pos=\"{},{}\", fillcolor=\"{}\"];\n",
            escape_dot_id(&table.name),
            table.position.x * style.scale,
            table.position.y * style.scale,
            with_alpha(&table.color, style.node_alpha)
        ));
    }

    // Legend box, lower-left
    let origin = graph.min_position();
    output.push_str(&format!(
        "  legend [shape=box, style=\"rounded,filled\", fixedsize=false, width=0, height=0, margin=\"0.15,0.08\", fontname=\"{}\", fontsize={}, fillcolor=\"{}\", label=\"{}\", pos=\"{},{}\"];\n",
        style.font,
        style.legend_font_size,
        with_alpha(&style.legend_fill, style.legend_alpha),
        legend_label(&graph.legend_text()),
        origin.x * style.scale + style.legend_offset.0,
        origin.y * style.scale + style.legend_offset.1
    ));

    if !graph.edges.is_empty() {
        output.push('\n');
    }

    for edge in &graph.edges {
        output.push_str(&format!(
            "  {} -> {};\n",
            escape_dot_id(&edge.from_table),
            escape_dot_id(&edge.to_table)
        ));
    }

    output.push_str("}\n");
    output
}

/// Left-justified multi-line label (`\l` ends each line)
fn legend_label(text: &str) -> String {
    text.lines()
        .map(|line| format!("{}\\l", escape_dot_string(line)))
        .collect()
}

/// Escape a string for use inside a quoted DOT string
fn escape_dot_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape a string for use as a DOT node ID
fn escape_dot_id(s: &str) -> String {
    if s.chars().all(|c| c.is_alphanumeric() || c == '_') && !s.is_empty() {
        s.to_string()
    } else {
        format!("\"{}\"", escape_dot_string(s))
    }
}
