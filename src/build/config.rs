use crate::result::{MiniCliError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

// Files processed by a freshly generated config, relative to source_dir.
static DEFAULT_FILES: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("js/listbox.js"),
        PathBuf::from("styles/listbox.css"),
    ]
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    pub build: Build,
    pub minifier: MinifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub postfix: String,
    pub files: Vec<PathBuf>,
}

/// External minifier settings. When `command` is set it replaces the
/// default `java -jar <jar>` runner entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinifierConfig {
    pub jar: PathBuf,
    pub command: Option<PathBuf>,
    pub args: Option<Vec<String>>,
}

/// Absolute source/output directories for one run, resolved against the
/// directory containing the configuration file.
#[derive(Debug, Clone)]
pub struct BuildRoots {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            build: Build {
                source_dir: "src".into(),
                output_dir: "build".into(),
                postfix: ".min".to_string(),
                files: DEFAULT_FILES.clone(),
            },
            minifier: MinifierConfig {
                jar: "tools/yuicompressor.jar".into(),
                command: None,
                args: None,
            },
        }
    }
}

impl BuildConfig {
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: BuildConfig = toml::from_str(&content).map_err(|e| {
            MiniCliError::Config(format!("Invalid build config format: {}", e).into())
        })?;

        Ok(config)
    }

    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            MiniCliError::Config(format!("Failed to serialize build config: {}", e).into())
        })?;

        fs::write(path, content).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.build.source_dir.as_os_str().is_empty() {
            return Err(MiniCliError::Config("Source directory cannot be empty".into()));
        }

        if self.build.output_dir.as_os_str().is_empty() {
            return Err(MiniCliError::Config("Output directory cannot be empty".into()));
        }

        if self.build.postfix.is_empty() {
            return Err(MiniCliError::Config("Postfix cannot be empty".into()));
        }

        if self.build.files.is_empty() {
            return Err(MiniCliError::Config("File list cannot be empty".into()));
        }

        if self.minifier.command.is_none() && self.minifier.jar.as_os_str().is_empty() {
            return Err(MiniCliError::Config(
                "Minifier jar cannot be empty without a command override".into(),
            ));
        }

        Ok(())
    }

    /// Joining an absolute configured path leaves it untouched, so absolute
    /// directories in the config win over the base directory.
    pub fn resolve_roots(&self, base: &Path) -> BuildRoots {
        BuildRoots {
            source: base.join(&self.build.source_dir),
            output: base.join(&self.build.output_dir),
        }
    }
}
