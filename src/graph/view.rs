//! Diagram model: fixed nodes, positions, colors and FK edges.

use crate::schema::{
    entities, referenced_entity, AttrType, Entity, KeyKind, Relationship, RELATIONSHIPS,
};
use ahash::AHashMap;
use anyhow::{bail, Result};

/// Hand-picked node positions in layout units (not computed)
pub const LAYOUT: [(&str, Position); 5] = [
    ("users", Position { x: 0.0, y: 2.0 }),
    ("user_applications", Position { x: 2.0, y: 3.0 }),
    ("students", Position { x: 0.0, y: 0.0 }),
    ("scholarships", Position { x: 4.0, y: 1.0 }),
    ("student_scholarships", Position { x: 2.0, y: 0.0 }),
];

/// Node fill colors, assigned by declaration order
pub const PALETTE: [&str; 5] = ["#FFB6C1", "#98FB98", "#87CEEB", "#DDA0DD", "#F0E68C"];

/// 2D coordinate in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Information about a column, derived from its declaration
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub name: String,
    /// Display type (for ERD rendering)
    pub col_type: AttrType,
    pub key: KeyKind,
    /// Non-key annotation such as an allowed-values list
    pub note: Option<String>,
    /// If FK, which table it references
    pub references_table: Option<String>,
}

impl ColumnInfo {
    pub fn is_primary_key(&self) -> bool {
        self.key == KeyKind::Primary
    }

    pub fn is_foreign_key(&self) -> bool {
        self.key == KeyKind::Foreign
    }
}

/// A table drawn as one node
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub name: String,
    pub description: String,
    /// Legend phrase
    pub summary: String,
    pub position: Position,
    pub color: String,
    pub columns: Vec<ColumnInfo>,
}

/// Relationship cardinality for ERD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    #[default]
    OneToMany, // parent row owns many child rows
    OneToOne,
}

impl Cardinality {
    /// Mermaid ERD notation, parent on the left
    pub fn as_mermaid(self) -> &'static str {
        match self {
            Cardinality::OneToMany => "||--o{",
            Cardinality::OneToOne => "||--||",
        }
    }
}

/// A directed parent -> child edge
#[derive(Debug, Clone)]
pub struct EdgeInfo {
    /// Referenced (parent) table
    pub from_table: String,
    /// Referencing (child) table
    pub to_table: String,
    /// FK column on the child, when one points back at the parent
    pub via_column: Option<String>,
    pub cardinality: Cardinality,
}

/// The diagram graph: nodes keep declaration order
#[derive(Debug)]
pub struct ErdGraph {
    pub tables: Vec<TableInfo>,
    pub edges: Vec<EdgeInfo>,
    index: AHashMap<String, usize>,
}

impl ErdGraph {
    /// The scholarship tracking diagram: 5 tables, 4 relationships
    pub fn scholarship() -> Result<Self> {
        Self::build(entities(), &RELATIONSHIPS, &LAYOUT, &PALETTE)
    }

    /// Build a graph from entity records, relationships, a manual layout and
    /// a palette. Colors are assigned by position and cycle if the palette
    /// is shorter than the entity list.
    pub fn build(
        entities: &[Entity],
        relationships: &[Relationship],
        layout: &[(&str, Position)],
        palette: &[&str],
    ) -> Result<Self> {
        if palette.is_empty() {
            bail!("palette must contain at least one color");
        }

        let positions: AHashMap<&str, Position> = layout.iter().copied().collect();
        let mut tables = Vec::with_capacity(entities.len());
        let mut index = AHashMap::new();

        for (i, entity) in entities.iter().enumerate() {
            let Some(position) = positions.get(entity.name).copied() else {
                bail!("no layout position for table '{}'", entity.name);
            };
            if index.insert(entity.name.to_string(), i).is_some() {
                bail!("duplicate table '{}'", entity.name);
            }

            let columns = entity
                .parsed_attributes()
                .iter()
                .map(|attr| ColumnInfo {
                    name: attr.name.to_string(),
                    col_type: attr.attr_type(),
                    key: attr.key,
                    note: attr.note().map(str::to_string),
                    references_table: referenced_entity(entity.name, attr)
                        .map(|e| e.name.to_string()),
                })
                .collect();

            tables.push(TableInfo {
                name: entity.name.to_string(),
                description: entity.description.to_string(),
                summary: entity.summary.to_string(),
                position,
                color: palette[i % palette.len()].to_string(),
                columns,
            });
        }

        let mut graph = Self {
            tables,
            edges: Vec::with_capacity(relationships.len()),
            index,
        };

        for rel in relationships {
            let Some(parent) = graph.get_table(rel.parent) else {
                bail!("relationship references unknown table '{}'", rel.parent);
            };
            let Some(child) = graph.get_table(rel.child) else {
                bail!("relationship references unknown table '{}'", rel.child);
            };

            let via_column = child
                .columns
                .iter()
                .find(|c| c.is_foreign_key() && c.references_table.as_deref() == Some(rel.parent))
                .map(|c| c.name.clone());

            // A back-reference from the parent makes it one-to-one
            let cardinality = if parent
                .columns
                .iter()
                .any(|c| c.is_foreign_key() && c.references_table.as_deref() == Some(rel.child))
            {
                Cardinality::OneToOne
            } else {
                Cardinality::OneToMany
            };

            graph.edges.push(EdgeInfo {
                from_table: rel.parent.to_string(),
                to_table: rel.child.to_string(),
                via_column,
                cardinality,
            });
        }

        Ok(graph)
    }

    /// Get the number of tables in the graph
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    /// Get table info by name
    pub fn get_table(&self, name: &str) -> Option<&TableInfo> {
        self.index.get(name).map(|&i| &self.tables[i])
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.from_table == from && e.to_table == to)
    }

    /// Lower-left corner of the layout, in layout units
    pub fn min_position(&self) -> Position {
        self.tables.iter().fold(
            Position {
                x: f64::INFINITY,
                y: f64::INFINITY,
            },
            |acc, t| Position {
                x: acc.x.min(t.position.x),
                y: acc.y.min(t.position.y),
            },
        )
    }

    /// Legend block: one `name: summary` line per table
    pub fn legend_text(&self) -> String {
        self.tables
            .iter()
            .map(|t| format!("{}: {}", t.name, t.summary))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
