//! Raster rendering through Graphviz and the platform image viewer.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Graphviz layout program that honors pinned `pos` attributes
pub const LAYOUT_PROGRAM: &str = "neato";

/// Errors from the external drawing layer
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing program is not installed
    #[error("'{program}' command not found ({source})")]
    Unavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program ran but exited unsuccessfully
    #[error("Graphviz {program} command failed with status: {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("Failed to run Graphviz: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    /// True when the drawing dependency itself is missing
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RenderError::Unavailable { .. })
    }
}

/// Platform-specific command that installs Graphviz
pub fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "brew install graphviz"
    } else if cfg!(target_os = "windows") {
        "winget install graphviz"
    } else {
        "apt install graphviz"
    }
}

/// Render DOT source to a PNG at `dpi` using `neato -n2`
pub fn render_png(dot_source: &str, output_path: &Path, dpi: u32) -> Result<(), RenderError> {
    render_with(LAYOUT_PROGRAM, dot_source, output_path, dpi)
}

/// Render with an explicit Graphviz program
pub fn render_with(
    program: &str,
    dot_source: &str,
    output_path: &Path,
    dpi: u32,
) -> Result<(), RenderError> {
    let mut child = Command::new(program)
        .arg("-n2")
        .arg("-Tpng")
        .arg(format!("-Gdpi={}", dpi))
        .arg("-o")
        .arg(output_path)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RenderError::Unavailable {
                    program: program.to_string(),
                    source: e,
                }
            } else {
                RenderError::Io(e)
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot_source.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(RenderError::Failed {
            program: program.to_string(),
            status,
        });
    }

    eprintln!("Rendered with {}: {}", program, output_path.display());
    Ok(())
}

/// Whether a graphical session is available to show the image
pub fn has_display() -> bool {
    display_from_env(|var| std::env::var_os(var))
}

/// Display detection over an injectable environment lookup
fn display_from_env<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| lookup(var).is_some_and(|v| !v.is_empty()))
}

/// Open the image in the platform viewer and wait for it to return.
///
/// Returns immediately when there is no display.
pub fn show(path: &Path) -> anyhow::Result<()> {
    show_with(path, has_display())
}

fn show_with(path: &Path, display: bool) -> anyhow::Result<()> {
    if !display {
        eprintln!("No display available, not opening {}", path.display());
        return Ok(());
    }

    let mut cmd = viewer_command(path);
    let status = cmd
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open viewer for {}: {}", path.display(), e))?;
    if !status.success() {
        anyhow::bail!("Image viewer exited with status: {}", status);
    }
    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg("-W").arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "/WAIT", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
