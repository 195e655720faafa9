//! Mermaid erDiagram format output.

use crate::graph::view::ErdGraph;

/// Generate a Mermaid erDiagram, tables in declaration order
pub fn to_mermaid(graph: &ErdGraph) -> String {
    let mut output = String::new();

    output.push_str("erDiagram\n");

    for table in &graph.tables {
        let safe_name = escape_mermaid_id(&table.name);
        output.push_str(&format!("    {} {{\n", safe_name));

        for col in &table.columns {
            let mut line = format!("        {} {}", col.col_type, escape_mermaid_id(&col.name));
            if let Some(marker) = col.key.marker() {
                line.push(' ');
                line.push_str(marker);
            }
            if let Some(ref note) = col.note {
                line.push_str(&format!(" \"{}\"", note.replace('"', "'")));
            }
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str("    }\n");
    }

    if !graph.edges.is_empty() {
        output.push('\n');
    }

    // Parent on the left, child on the right
    for edge in &graph.edges {
        let label = edge.via_column.as_deref().unwrap_or("has");
        output.push_str(&format!(
            "    {} {} {} : \"{}\"\n",
            escape_mermaid_id(&edge.from_table),
            edge.cardinality.as_mermaid(),
            escape_mermaid_id(&edge.to_table),
            label
        ));
    }

    output
}

/// Escape a string for use as a Mermaid entity ID
fn escape_mermaid_id(s: &str) -> String {
    // Mermaid IDs should be alphanumeric with underscores
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
