//! Measurement reports and their provenance sidecars.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One measured shape, as written to `--out`.
#[derive(Debug, Serialize)]
pub struct Measurement {
    pub input: String,
    pub points: usize,
    /// Square meters for areas, meters for lengths.
    pub value: f64,
    pub readable: String,
    pub metric: bool,
}

/// Write `report` as pretty JSON to `out`, plus `<stem>.provenance.json` next to it.
pub fn write_report<P: AsRef<Path>>(
    out: P,
    report: &Measurement,
    params: Value,
) -> Result<PathBuf> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = provenance_path(out);
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": drawgeom::VERSION,
        "params": params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
