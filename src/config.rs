//! Configuration loading from `.stmtmap.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Root configuration structure for stmtmap
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StmtmapConfig {
    /// Size thresholds for reporting
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Bodies above this many elementary statements are flagged
    #[serde(default = "default_max_statements")]
    pub max_statements: usize,

    /// Bodies nesting deeper than this are flagged
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_max_statements() -> usize {
    20
}

fn default_max_nesting_depth() -> usize {
    4
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            max_statements: default_max_statements(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: Option<String>,
}

impl StmtmapConfig {
    pub fn max_statements(&self) -> usize {
        self.thresholds
            .as_ref()
            .map(|t| t.max_statements)
            .unwrap_or_else(default_max_statements)
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.thresholds
            .as_ref()
            .map(|t| t.max_nesting_depth)
            .unwrap_or_else(default_max_nesting_depth)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.default_format.as_deref())
    }
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> Result<StmtmapConfig, String> {
    toml::from_str::<StmtmapConfig>(contents)
        .map_err(|e| format!("Failed to parse .stmtmap.toml: {e}"))
}

fn try_load_config_from_path(config_path: &Path) -> Option<StmtmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.stmtmap.toml`, falling back to
/// defaults when none is found.
pub fn load_config() -> StmtmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return StmtmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".stmtmap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            StmtmapConfig::default()
        })
}
