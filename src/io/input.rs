use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CoachError, Result};
use crate::io::SessionLayout;
use crate::models::SessionId;

/// Read the raw transcript for a session
///
/// When the file is missing, the error lists the raw sessions that do
/// exist so the user can pick one.
pub fn read_raw_transcript(layout: &SessionLayout, session: &SessionId) -> Result<String> {
    let path = layout.raw_path(session);
    if !path.exists() {
        return Err(CoachError::InputNotFound {
            what: "Raw transcript",
            path,
            available: describe_available_raw(&layout.raw_dir())?,
        });
    }

    info!("Reading: {}", path.display());
    Ok(std::fs::read_to_string(&path)?)
}

/// Read the formatted Markdown transcript for a session
pub fn read_formatted_transcript(layout: &SessionLayout, session: &SessionId) -> Result<String> {
    let path = layout.formatted_path(session);
    if !path.exists() {
        return Err(CoachError::InputNotFound {
            what: "Formatted file",
            path,
            available: describe_available_formatted(&layout.formatted_dir())?,
        });
    }

    info!("Reading: {}", path.display());
    Ok(std::fs::read_to_string(&path)?)
}

/// List files in `dir` with the given extension, sorted by name
///
/// Returns `None` when the directory does not exist.
fn list_files(dir: &Path, extension: &str) -> Result<Option<Vec<PathBuf>>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(Some(files))
}

/// Raw sessions are listed by stem so they can be pasted back as the argument
fn describe_available_raw(dir: &Path) -> Result<String> {
    let mut out = String::from("Available raw files:");
    match list_files(dir, "txt")? {
        None => out.push_str("\n  (raw directory does not exist)"),
        Some(files) if files.is_empty() => out.push_str("\n  (none)"),
        Some(files) => {
            for file in files {
                if let Some(stem) = file.file_stem() {
                    out.push_str(&format!("\n  - {}", stem.to_string_lossy()));
                }
            }
        }
    }
    Ok(out)
}

fn describe_available_formatted(dir: &Path) -> Result<String> {
    let mut out = String::from("Available formatted files:");
    match list_files(dir, "md")? {
        None => out.push_str("\n  (none - formatted directory does not exist)"),
        Some(files) => {
            for file in files {
                if let Some(name) = file.file_name() {
                    out.push_str(&format!("\n  - {}", name.to_string_lossy()));
                }
            }
        }
    }
    Ok(out)
}
