mod erd;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Default output image, written to the working directory
pub const DEFAULT_OUTPUT: &str = "scholarship_erd.png";

#[derive(Parser)]
#[command(name = "scholarship-erd")]
#[command(version)]
#[command(
    about = "Print the scholarship tracking schema and render its entity-relationship diagram",
    long_about = None
)]
pub struct Cli {
    /// Output file (default: scholarship_erd.<ext> in the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: png, dot, mermaid, json (detected from --output extension if not specified)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Raster resolution for png output
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Do not open the rendered image in a viewer
    #[arg(long)]
    pub no_show: bool,

    /// Only print the entity report
    #[arg(long)]
    pub no_diagram: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(shell) = cli.completions {
        generate(
            shell,
            &mut Cli::command(),
            "scholarship-erd",
            &mut io::stdout(),
        );
        return Ok(());
    }

    erd::run(
        cli.output,
        cli.format,
        cli.dpi,
        !cli.no_show,
        !cli.no_diagram,
    )
}
