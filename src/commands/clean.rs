use crate::build::BuildConfig;
use crate::cli::parser::CliParser;
use crate::result::{MiniCliError, Result};
use std::path::Path;
use tokio::fs;

pub async fn execute(config_path: Option<&str>) -> Result<()> {
    let mut cmd = CleanCommand::new();
    cmd.execute(config_path.map(|s| s.to_string())).await
}

#[derive(Default)]
pub struct CleanCommand;

impl CleanCommand {
    pub fn new() -> Self {
        Self
    }

    /// Removes the output directory without rebuilding.
    pub async fn execute(&mut self, config_path: Option<String>) -> Result<()> {
        let config_file = config_path.unwrap_or_else(|| "minicli.toml".to_string());

        if !Path::new(&config_file).exists() {
            return Err(MiniCliError::NotFound(
                format!(
                    "Configuration file '{}' not found. Run 'minicli setup' to create it.",
                    config_file
                )
                .into(),
            ));
        }

        let config_file = CliParser::validate_config_path(&config_file)?;
        let base = super::build::config_base_dir(&config_file)?;
        let config = BuildConfig::from_file(&config_file).await?;
        let roots = config.resolve_roots(&base);

        if fs::metadata(&roots.output).await.is_ok() {
            fs::remove_dir_all(&roots.output).await?;
            println!("Removed build directory: {}", roots.output.display());
            log::info!("Removed build directory: {}", roots.output.display());
        } else {
            println!("Nothing to clean: {}", roots.output.display());
        }

        Ok(())
    }
}
