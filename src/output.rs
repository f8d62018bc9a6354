//! Writing the generated artifact and the optional `gofmt` pass.
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Generated files must carry the `.go` extension.
pub fn check_output_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("go") => Ok(()),
        _ => Err(Error::invalid_argument(
            "out",
            format!(
                "path of output go struct file should end with '.go', for example: -o output/somestruct.go (got {})",
                path.display()
            ),
        )),
    }
}

/// Write to `out` (creating parent directories) or to stdout when `None`.
pub fn write_output(out: Option<&Path>, source: &str) -> Result<()> {
    let Some(path) = out else {
        print!("{source}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, source).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), bytes = source.len(), "wrote output");
    Ok(())
}

/// Run `gofmt -w` on a written file.
pub fn gofmt(path: &Path) -> Result<()> {
    run_formatter("gofmt", path)
}

fn run_formatter(program: &str, path: &Path) -> Result<()> {
    debug!(program, path = %path.display(), "running formatter");
    let output = Command::new(program)
        .arg("-w")
        .arg(path)
        .output()
        .map_err(|e| Error::Format { path: path.to_path_buf(), output: e.to_string() })?;
    if !output.status.success() {
        let mut details = String::from_utf8_lossy(&output.stdout).into_owned();
        details.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(Error::Format { path: path.to_path_buf(), output: details });
    }
    Ok(())
}
