//! Run configuration: feed list, keyword list, and output layout.
//!
//! The pipeline never reads module-level state; a [`Config`] value is built
//! once at startup and passed in explicitly. The compiled-in watchlist makes
//! a bare `veille_news` invocation work with no arguments, and a YAML file
//! can replace it wholesale via `--config`.
//!
//! # YAML shape
//!
//! ```yaml
//! feeds:
//!   - https://www.zdnet.fr/feeds/rss/actualites/
//! keywords:
//!   - ransomware
//!   - kubernetes
//! output_dir: ./output
//! ```

use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use url::Url;

/// Subdirectory of the output root holding the dated archive files.
pub const ARCHIVE_SUBDIR: &str = "archives";

/// Name of the rolling index file at the output root.
pub const INDEX_FILE: &str = "index.json";

/// Everything a run needs: where to read, what to keep, where to write.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Feed URLs, fetched in this order.
    pub feeds: Vec<String>,
    /// Keywords an entry must contain (case-insensitive) to be kept.
    pub keywords: Vec<String>,
    /// Output root; archives and the index live underneath it.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Config {
    /// The compiled-in watchlist used when no config file is given.
    pub fn builtin() -> Self {
        Config {
            feeds: vec![
                "https://www.zdnet.fr/feeds/rss/actualites/".to_string(),
                "https://www.lemondeinformatique.fr/flux-rss/thematique/toutes-les-actualites/rss.xml".to_string(),
                "https://techcrunch.com/feed/".to_string(),
            ],
            keywords: [
                "cybersécurité",
                "ransomware",
                "zero trust",
                "cloud",
                "aws",
                "azure",
                "gcp",
                "ia",
                "intelligence artificielle",
                "llm",
                "openai",
                "mistral",
                "devops",
                "kubernetes",
                "docker",
                "linux",
                "windows",
                "android",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            output_dir: default_output_dir(),
        }
    }

    /// Load the run configuration.
    ///
    /// With a path, parse that YAML file; otherwise fall back to the
    /// compiled-in watchlist. Either way every feed URL must parse.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let config = match path {
            Some(p) => Self::from_yaml_file(Path::new(p))?,
            None => Self::builtin(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }

    /// Reject feed entries that are not URLs before any fetching starts.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for feed in &self.feeds {
            if let Err(e) = Url::parse(feed) {
                return Err(format!("invalid feed url {feed:?}: {e}").into());
            }
        }
        Ok(())
    }

    /// Directory the dated archive files are written to.
    pub fn archive_dir(&self) -> PathBuf {
        self.output_dir.join(ARCHIVE_SUBDIR)
    }

    /// Path of the rolling index file.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    /// Archive file path as stored in the index: relative to the output
    /// root, forward slashes regardless of platform.
    pub fn archive_rel_path(&self, filename: &str) -> String {
        format!("{ARCHIVE_SUBDIR}/{filename}")
    }
}
