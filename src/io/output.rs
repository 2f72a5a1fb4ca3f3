use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Write a Markdown document, creating parent directories as needed
pub fn write_markdown(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    info!("Saved: {}", path.display());
    Ok(())
}
