//! Default command: entity report followed by the diagram.

use super::DEFAULT_OUTPUT;
use crate::graph::{to_dot, to_json, to_mermaid, DiagramStyle, ErdGraph, OutputFormat};
use crate::render::{self, install_hint, RenderError};
use crate::report;
use crate::schema::entities;
use anyhow::{bail, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Install line of the text-only fallback
pub const INSTALL_LINE: &str = "Install with: pip install matplotlib networkx";

/// Run the report and render the diagram
pub fn run(
    output: Option<PathBuf>,
    format: Option<String>,
    dpi: u32,
    show: bool,
    diagram: bool,
) -> Result<()> {
    // Parse format
    let format = if let Some(ref f) = format {
        f.parse().map_err(|e| anyhow::anyhow!("{}", e))?
    } else if let Some(ref out) = output {
        format_from_output(out)?
    } else {
        OutputFormat::Png
    };

    if dpi == 0 {
        bail!("--dpi must be greater than zero");
    }

    let output = output.unwrap_or_else(|| default_output(format));

    println!("Generating ERD for Scholarship Tracking System...");

    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report::write_report(&mut out, entities())?;
        out.flush()?;
    }

    if !diagram {
        return Ok(());
    }

    let graph = ErdGraph::scholarship()?;

    if format.is_raster() {
        let style = DiagramStyle::default().with_dpi(dpi);
        let dot = to_dot(&graph, &style);

        match render::render_png(&dot, &output, dpi) {
            Ok(()) => {
                println!("ERD saved as '{}'", output.display());
                if show {
                    render::show(&output)?;
                }
            }
            Err(e) if e.is_unavailable() => {
                print_fallback(&e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        let content = match format {
            OutputFormat::Mermaid => to_mermaid(&graph),
            OutputFormat::Json => to_json(&graph),
            _ => to_dot(&graph, &DiagramStyle::default().with_dpi(dpi)),
        };
        write_output(&output, &content)?;
        println!("ERD saved as '{}'", output.display());
    }

    eprintln!(
        "\nERD: {} tables, {} columns, {} relationships",
        graph.table_count(),
        graph.column_count(),
        graph.edge_count()
    );

    Ok(())
}

/// Detect the format from the output extension; no extension means png
fn format_from_output(path: &Path) -> Result<OutputFormat> {
    match path.extension() {
        None => Ok(OutputFormat::Png),
        Some(ext) => {
            let ext = ext.to_string_lossy();
            match OutputFormat::from_extension(&ext) {
                Some(format) => Ok(format),
                None => bail!(
                    "Unknown format for output extension: {}. Valid options: png, dot, mermaid, json",
                    ext
                ),
            }
        }
    }
}

/// `scholarship_erd.<ext>` in the working directory
fn default_output(format: OutputFormat) -> PathBuf {
    Path::new(DEFAULT_OUTPUT).with_extension(format.extension())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Text-only degradation when Graphviz is missing
fn print_fallback(err: &RenderError) {
    println!("Graphviz not available: {}", err);
    println!("{}", INSTALL_LINE);
    println!("Graphviz renders the diagram here: {}", install_hint());
    println!(
        "\nERD.md file already contains the Mermaid diagram which can be viewed in Markdown viewers."
    );
}
