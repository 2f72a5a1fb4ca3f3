use std::path::{Path, PathBuf};

use crate::models::SessionId;

pub const DEFAULT_BASE_DIR: &str = "cambly";

/// Directory layout for session files, relative to a base directory
///
/// ```text
/// <base>/.env
/// <base>/raw/<id>.txt        raw transcript export
/// <base>/formatted/<id>.md   output of `format`, input of `correct`
/// <base>/output/<id>.md      correction document
/// ```
#[derive(Debug, Clone)]
pub struct SessionLayout {
    base_dir: PathBuf,
}

impl Default for SessionLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl SessionLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn env_path(&self) -> PathBuf {
        self.base_dir.join(".env")
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.base_dir.join("raw")
    }

    pub fn formatted_dir(&self) -> PathBuf {
        self.base_dir.join("formatted")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join("output")
    }

    pub fn raw_path(&self, session: &SessionId) -> PathBuf {
        self.raw_dir().join(format!("{session}.txt"))
    }

    pub fn formatted_path(&self, session: &SessionId) -> PathBuf {
        self.formatted_dir().join(format!("{session}.md"))
    }

    pub fn output_path(&self, session: &SessionId) -> PathBuf {
        self.output_dir().join(format!("{session}.md"))
    }
}
