//! ERD (Entity-Relationship Diagram) model and formatters.
//!
//! This module provides:
//! - The fixed diagram graph (tables, positions, colors, FK edges)
//! - Drawing style constants for the rendered image
//! - Output formats: DOT (Graphviz, pinned layout), Mermaid, JSON

pub mod format;
pub mod style;
pub mod view;

pub use format::{to_dot, to_json, to_mermaid, OutputFormat};
pub use style::{DiagramStyle, TITLE};
pub use view::{ErdGraph, LAYOUT, PALETTE};
// Re-export for tests and external use
#[allow(unused_imports)]
pub use view::{Cardinality, ColumnInfo, EdgeInfo, Position, TableInfo};
