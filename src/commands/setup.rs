use crate::build::BuildConfig;
use crate::result::{MiniCliError, Result};
use std::path::Path;

pub async fn execute(force: bool) -> Result<()> {
    let mut cmd = SetupCommand::new();
    cmd.execute(force).await
}

#[derive(Default)]
pub struct SetupCommand;

impl SetupCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&mut self, force: bool) -> Result<()> {
        let config_file = "minicli.toml";

        log::info!("Starting setup process with force: {}", force);

        if Path::new(config_file).exists() && !force {
            log::warn!("minicli.toml already exists, setup aborted");
            return Err(MiniCliError::Config(
                "minicli.toml already exists. Use --force to overwrite.".into(),
            ));
        }

        BuildConfig::default()
            .save_to_file(Path::new(config_file))
            .await?;

        println!("minicli.toml created successfully!");
        println!();
        println!("Please edit minicli.toml to match your project:");
        println!("   - List the files to minify under [build] files");
        println!("   - Update source_dir and output_dir if needed");
        println!("   - Point [minifier] jar at your yuicompressor.jar");
        println!();
        println!("Then run: minicli build");

        log::info!("Setup completed successfully");

        Ok(())
    }
}
