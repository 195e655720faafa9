//! Output format implementations for the ERD.

mod dot;
pub(crate) mod json;
mod mermaid;

pub use dot::to_dot;
pub use json::to_json;
pub use mermaid::to_mermaid;
#[allow(unused_imports)]
pub use json::{ColumnJson, ErdJson, ErdStats, RelationshipJson, TableJson};

use std::fmt;
use std::str::FromStr;

/// Output format for the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raster image drawn by Graphviz
    #[default]
    Png,
    /// Graphviz DOT source with pinned positions
    Dot,
    /// Mermaid erDiagram format
    Mermaid,
    /// JSON format for programmatic use
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: {}. Valid options: png, dot, mermaid, json",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Dot => "dot",
            OutputFormat::Mermaid => "mmd",
            OutputFormat::Json => "json",
        }
    }

    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "dot" | "gv" => Some(OutputFormat::Dot),
            "mmd" | "mermaid" => Some(OutputFormat::Mermaid),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Whether this format needs the external drawing program
    pub fn is_raster(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("PNG".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert_eq!("mmd".parse::<OutputFormat>(), Ok(OutputFormat::Mermaid));
        assert!("svg".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_extension_round_trip() {
        for format in [
            OutputFormat::Png,
            OutputFormat::Dot,
            OutputFormat::Mermaid,
            OutputFormat::Json,
        ] {
            assert_eq!(OutputFormat::from_extension(format.extension()), Some(format));
        }
        assert_eq!(OutputFormat::from_extension("svg"), None);
    }

    #[test]
    fn test_only_png_is_raster() {
        assert!(OutputFormat::Png.is_raster());
        assert!(!OutputFormat::Dot.is_raster());
        assert!(!OutputFormat::Mermaid.is_raster());
        assert!(!OutputFormat::Json.is_raster());
    }
}
