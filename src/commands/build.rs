use crate::build::BuildConfig;
use crate::cli::parser::CliParser;
use crate::minifier::MinifierManager;
use crate::result::{MiniCliError, Result};
use crate::utils::paths;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub async fn execute(config_path: Option<&str>, verbose: bool, no_stats: bool) -> Result<()> {
    let mut cmd = BuildCommand::new();
    cmd.execute(config_path.map(|s| s.to_string()), verbose, no_stats)
        .await
}

/// One processed file: the configured relative path plus the absolute
/// input/output paths derived from it. Order matches the config file list.
pub struct BuildEntry {
    pub name: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Default)]
pub struct BuildCommand;

impl BuildCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &mut self,
        config_path: Option<String>,
        verbose: bool,
        no_stats: bool,
    ) -> Result<()> {
        println!("Minifying project...");

        let build_spinner = ProgressBar::new_spinner();
        build_spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        build_spinner.set_message("Loading build configuration...");
        build_spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let (config, base) = self.load_build_config(config_path).await?;
        config.validate()?;

        log::info!(
            "Starting minification of {} files under {}",
            config.build.files.len(),
            base.display()
        );

        if verbose {
            build_spinner.finish_and_clear();
            println!("Build configuration:");
            println!("  Source dir: {}", config.build.source_dir.display());
            println!("  Output dir: {}", config.build.output_dir.display());
            println!("  Postfix: {}", config.build.postfix);
            println!("  Files: {}", config.build.files.len());

            build_spinner.set_message("Running minifier...");
            build_spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        } else {
            build_spinner.set_message("Running minifier...");
        }

        let build_start = Instant::now();
        let result = run_build(&config, &base).await;
        build_spinner.finish_and_clear();

        let entries = result?;
        let time_str = format_duration(build_start.elapsed());
        println!("Build successful: {} files ({})", entries.len(), time_str);
        log::info!(
            "Build completed successfully: {} files in {}",
            entries.len(),
            time_str
        );

        if !no_stats {
            print_stats(&entries).await?;
        }

        Ok(())
    }

    async fn load_build_config(
        &self,
        config_path: Option<String>,
    ) -> Result<(BuildConfig, PathBuf)> {
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
        let base = config_base_dir(&config_file)?;
        let config = BuildConfig::from_file(&config_file).await?;

        Ok((config, base))
    }
}

/** Runs one complete build against a validated configuration
 *
 * Strictly linear: resolve roots, reset the output directory, then for each
 * configured file derive the minified name, ensure its parent directory and
 * invoke the external minifier. Files are processed sequentially; the first
 * failure aborts the run, leaving any already-built artifacts in place.
 */
pub async fn run_build(config: &BuildConfig, base: &Path) -> Result<Vec<BuildEntry>> {
    let roots = config.resolve_roots(base);
    let minifier = MinifierManager::from_config(&config.minifier, base)?;

    let outputs = paths::derive_output_files(&config.build.files, &config.build.postfix);
    debug_assert_eq!(outputs.len(), config.build.files.len());

    // The output directory is owned by this run; stale artifacts go first.
    paths::reset_dir(&roots.output).await?;

    let mut entries = Vec::with_capacity(outputs.len());

    for (file, out_name) in config.build.files.iter().zip(outputs) {
        let input = roots.source.join(file);
        if !input.exists() {
            return Err(MiniCliError::NotFound(
                format!("Source file not found: {}", input.display()).into(),
            ));
        }

        let output = roots.output.join(&out_name);
        if let Some(parent) = output.parent() {
            paths::ensure_dir(parent).await?;
        }

        log::info!("Minifying {} -> {}", input.display(), output.display());
        minifier.minify(&input, &output).await?;

        entries.push(BuildEntry {
            name: file.clone(),
            input,
            output,
        });
    }

    Ok(entries)
}

/// Prints one `name: before -> after` line per processed file, sizes in
/// kilobytes. A missing output despite a zero minifier exit is reported as
/// its own error rather than a bare IO failure.
pub async fn print_stats(entries: &[BuildEntry]) -> Result<()> {
    for entry in entries {
        let before = tokio::fs::metadata(&entry.input).await?.len();
        let after = tokio::fs::metadata(&entry.output)
            .await
            .map_err(|_| {
                MiniCliError::NotFound(
                    format!("Minified output missing: {}", entry.output.display()).into(),
                )
            })?
            .len();

        println!(
            "{:>20}: {} -> {}",
            entry.name.to_string_lossy(),
            paths::format_kb(before),
            paths::format_kb(after)
        );
    }

    Ok(())
}

pub(crate) fn config_base_dir(config_file: &Path) -> Result<PathBuf> {
    match config_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => std::env::current_dir().map_err(|e| {
            MiniCliError::Process(format!("Failed to get current directory: {}", e).into())
        }),
    }
}

fn format_duration(duration: std::time::Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms >= 1000 {
        let seconds = duration.as_secs_f64();
        format!("{:.2}s", seconds)
    } else {
        format!("{}ms", total_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_config_name_resolves_against_cwd() {
        let base = config_base_dir(Path::new("minicli.toml")).expect("base dir");
        assert!(base.is_absolute());
    }

    #[test]
    fn nested_config_resolves_against_its_directory() {
        let base = config_base_dir(Path::new("/project/minicli.toml")).expect("base dir");
        assert_eq!(base, PathBuf::from("/project"));
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(std::time::Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(std::time::Duration::from_millis(1500)), "1.50s");
    }
}
