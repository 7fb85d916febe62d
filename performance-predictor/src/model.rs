use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use color_eyre::Result;
use color_eyre::eyre::Context;
use score_forest::forest::Forest;
use tracing::{info, warn};

const DEFAULT_LOAD_ERROR: &str = "Failed to load forest model";

/// Anything able to produce a pretrained forest.
pub trait ModelSource {
    fn load(&self) -> Result<Forest>;
}

/// A `{ "trees": [...] }` artifact stored on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelSource for JsonFileSource {
    fn load(&self) -> Result<Forest> {
        let bytes = fs::read(&self.path)
            .context(format!("Could not read model file {}", self.path.display()))?;

        Forest::from_slice(&bytes)
            .context(format!("Could not decode model file {}", self.path.display()))
    }
}

/// Outcome of a model load. Loading never fails: a failed load leaves no
/// forest and keeps the error text for display.
#[derive(Debug, Clone, Default)]
pub struct LoadedModel {
    forest: Option<Arc<Forest>>,
    error: Option<String>,
}

impl LoadedModel {
    pub fn from_source(source: &dyn ModelSource) -> Self {
        match source.load() {
            Ok(forest) => {
                info!(trees = forest.num_trees(), "forest model loaded");
                Self::from_forest(forest)
            }
            Err(err) => {
                let mut message = format!("{err:#}");
                if message.trim().is_empty() {
                    message = DEFAULT_LOAD_ERROR.to_string();
                }
                warn!(error = %message, "forest model unavailable, using heuristic scoring");
                Self {
                    forest: None,
                    error: Some(message),
                }
            }
        }
    }

    pub fn from_forest(forest: Forest) -> Self {
        Self {
            forest: Some(Arc::new(forest)),
            error: None,
        }
    }

    /// No model and no error, as before any load was attempted.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn forest(&self) -> Option<&Forest> {
        self.forest.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the ensemble can be consulted at all. An empty forest counts
    /// as unusable.
    pub fn is_usable(&self) -> bool {
        self.forest().is_some_and(|f| !f.is_empty())
    }
}
