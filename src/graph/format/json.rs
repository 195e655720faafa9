//! JSON format output for ERD data.

use crate::graph::view::ErdGraph;
use serde::Serialize;

/// JSON representation of the ERD
#[derive(Debug, Serialize)]
pub struct ErdJson {
    pub tables: Vec<TableJson>,
    pub relationships: Vec<RelationshipJson>,
    pub stats: ErdStats,
}

/// JSON representation of a table with layout and column details
#[derive(Debug, Serialize)]
pub struct TableJson {
    pub name: String,
    pub description: String,
    pub position: PositionJson,
    pub color: String,
    pub columns: Vec<ColumnJson>,
}

#[derive(Debug, Serialize)]
pub struct PositionJson {
    pub x: f64,
    pub y: f64,
}

/// JSON representation of a column
#[derive(Debug, Serialize)]
pub struct ColumnJson {
    pub name: String,
    #[serde(rename = "type")]
    pub col_type: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_table: Option<String>,
}

/// JSON representation of a relationship
#[derive(Debug, Serialize)]
pub struct RelationshipJson {
    pub from_table: String,
    pub to_table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via_column: Option<String>,
    pub cardinality: String,
}

/// ERD statistics
#[derive(Debug, Serialize)]
pub struct ErdStats {
    pub table_count: usize,
    pub column_count: usize,
    pub relationship_count: usize,
}

/// Generate JSON output from the diagram graph
pub fn to_json(graph: &ErdGraph) -> String {
    let erd = build_erd_json(graph);
    serde_json::to_string_pretty(&erd).unwrap_or_else(|_| "{}".to_string())
}

/// Build the JSON structure
pub fn build_erd_json(graph: &ErdGraph) -> ErdJson {
    let tables = graph
        .tables
        .iter()
        .map(|table| TableJson {
            name: table.name.clone(),
            description: table.description.clone(),
            position: PositionJson {
                x: table.position.x,
                y: table.position.y,
            },
            color: table.color.clone(),
            columns: table
                .columns
                .iter()
                .map(|col| ColumnJson {
                    name: col.name.clone(),
                    col_type: col.col_type.to_string(),
                    is_primary_key: col.is_primary_key(),
                    is_foreign_key: col.is_foreign_key(),
                    note: col.note.clone(),
                    references_table: col.references_table.clone(),
                })
                .collect(),
        })
        .collect();

    let relationships = graph
        .edges
        .iter()
        .map(|e| RelationshipJson {
            from_table: e.from_table.clone(),
            to_table: e.to_table.clone(),
            via_column: e.via_column.clone(),
            cardinality: format!("{:?}", e.cardinality),
        })
        .collect();

    ErdJson {
        tables,
        relationships,
        stats: ErdStats {
            table_count: graph.table_count(),
            column_count: graph.column_count(),
            relationship_count: graph.edge_count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_structure() {
        let graph = ErdGraph::scholarship().unwrap();
        let erd = build_erd_json(&graph);

        assert_eq!(erd.tables.len(), 5);
        assert_eq!(erd.relationships.len(), 4);
        assert_eq!(erd.stats.table_count, 5);
        assert_eq!(erd.stats.column_count, 48);
        assert_eq!(erd.tables[0].name, "users");
    }

    #[test]
    fn test_json_fk_references() {
        let graph = ErdGraph::scholarship().unwrap();
        let erd = build_erd_json(&graph);

        let junction = erd
            .tables
            .iter()
            .find(|t| t.name == "student_scholarships")
            .unwrap();
        let fk = junction
            .columns
            .iter()
            .find(|c| c.name == "scholarshipId")
            .unwrap();

        assert!(fk.is_foreign_key);
        assert_eq!(fk.references_table, Some("scholarships".to_string()));
    }

    #[test]
    fn test_json_output() {
        let graph = ErdGraph::scholarship().unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&graph)).unwrap();

        assert_eq!(value["tables"][3]["position"]["x"], 4.0);
        assert_eq!(value["tables"][3]["color"], "#DDA0DD");
        assert_eq!(value["relationships"][1]["cardinality"], "OneToOne");
        assert_eq!(value["stats"]["relationship_count"], 4);
    }
}
