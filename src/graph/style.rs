//! Drawing constants for the rendered diagram.

/// Figure title
pub const TITLE: &str = "Scholarship Tracking System - Entity Relationship Diagram";

/// Visual style of the rendered ERD
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStyle {
    /// Points per layout unit
    pub scale: f64,
    /// Node circle diameter in inches (uniform for all nodes)
    pub node_diameter: f64,
    pub node_alpha: f64,
    pub edge_color: String,
    pub edge_width: f64,
    pub arrow_size: f64,
    pub font: String,
    pub bold_font: String,
    pub label_font_size: u32,
    pub title_font_size: u32,
    pub legend_font_size: u32,
    pub legend_fill: String,
    pub legend_alpha: f64,
    /// Legend center relative to the lower-left node, in points
    pub legend_offset: (f64, f64),
    /// Margin around the drawing in inches
    pub pad: f64,
    pub dpi: u32,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            scale: 144.0,
            node_diameter: 0.76,
            node_alpha: 0.8,
            edge_color: "gray".to_string(),
            edge_width: 2.0,
            arrow_size: 1.5,
            font: "Helvetica".to_string(),
            bold_font: "Helvetica-Bold".to_string(),
            label_font_size: 10,
            title_font_size: 16,
            legend_font_size: 9,
            legend_fill: "#D3D3D3".to_string(),
            legend_alpha: 0.8,
            legend_offset: (120.0, -110.0),
            pad: 0.1,
            dpi: 300,
        }
    }
}

impl DiagramStyle {
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}

/// Append an alpha channel to a `#RRGGBB` color. Named colors pass through.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    let is_rgb = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !is_rgb {
        return color.to_string();
    }
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{}{:02X}", color, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#FFB6C1", 0.8), "#FFB6C1CC");
        assert_eq!(with_alpha("#000000", 1.0), "#000000FF");
        assert_eq!(with_alpha("gray", 0.5), "gray");
    }

    #[test]
    fn test_with_dpi() {
        let style = DiagramStyle::default().with_dpi(72);
        assert_eq!(style.dpi, 72);
        assert_eq!(DiagramStyle::default().dpi, 300);
    }
}
