use crate::build::MinifierConfig;
use crate::result::{MiniCliError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use which::which;

/** Locates and invokes the external minifier
 *
 * The default runner is `java -jar <jar>`; a configured `command` override
 * replaces it entirely. Either way the tool is treated as an opaque
 * collaborator invoked as `<runner> <input> -o <output>`, one blocking
 * subprocess per file.
 */
pub struct MinifierManager {
    runner: PathBuf,
    jar: Option<PathBuf>,
    extra_args: Vec<String>,
}

impl MinifierManager {
    /// Resolves the runner before the first invocation so a missing Java
    /// runtime or jar fails the build up front, not halfway through.
    pub fn from_config(config: &MinifierConfig, base: &Path) -> Result<Self> {
        let extra_args = config.args.clone().unwrap_or_default();

        if let Some(command) = &config.command {
            let runner = Self::resolve_command(command, base)?;
            log::info!("Using minifier command override: {}", runner.display());

            return Ok(Self {
                runner,
                jar: None,
                extra_args,
            });
        }

        let java = which("java")
            .map_err(|_| MiniCliError::NotFound(MiniCliError::JAVA_NOT_FOUND.into()))?;

        let jar = base.join(&config.jar);
        if !jar.exists() {
            return Err(MiniCliError::NotFound(
                format!("Minifier jar not found: {}", jar.display()).into(),
            ));
        }

        log::info!("Using minifier jar: {}", jar.display());

        Ok(Self {
            runner: java,
            jar: Some(jar),
            extra_args,
        })
    }

    fn resolve_command(command: &Path, base: &Path) -> Result<PathBuf> {
        let resolved = base.join(command);
        if resolved.exists() {
            return Ok(resolved);
        }

        // Bare names fall back to PATH lookup
        which(command).map_err(|_| {
            MiniCliError::NotFound(
                format!("Minifier command not found: {}", command.display()).into(),
            )
        })
    }

    pub async fn minify(&self, input: &Path, output: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.runner);

        if let Some(jar) = &self.jar {
            cmd.arg("-jar").arg(jar);
        }

        for arg in &self.extra_args {
            cmd.arg(arg);
        }

        cmd.arg(input).arg("-o").arg(output);
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::piped());

        let result = cmd.output().await.map_err(|e| {
            MiniCliError::Process(format!("Failed to execute minifier: {}", e).into())
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);

            if !stderr.is_empty() {
                eprintln!("Minifier stderr:\n{}", stderr);
            }

            log::error!(
                "Minification failed for {} with stderr: {}",
                input.display(),
                stderr
            );

            return Err(MiniCliError::Process(
                format!(
                    "Minification failed for {} with exit code: {}",
                    input.display(),
                    result.status.code().unwrap_or(-1)
                )
                .into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_jar_is_a_distinct_error() {
        let config = MinifierConfig {
            jar: "tools/definitely-not-there.jar".into(),
            command: None,
            args: None,
        };

        let tmp = tempfile::tempdir().expect("tempdir");
        let result = MinifierManager::from_config(&config, tmp.path());

        // Either the jar or the java runtime is reported as missing; both
        // surface before any subprocess runs.
        assert!(matches!(result, Err(MiniCliError::NotFound(_))));
    }

    #[test]
    fn missing_command_override_is_reported() {
        let config = MinifierConfig {
            jar: "tools/yuicompressor.jar".into(),
            command: Some("no-such-minifier-binary".into()),
            args: None,
        };

        let tmp = tempfile::tempdir().expect("tempdir");
        let result = MinifierManager::from_config(&config, tmp.path());

        assert!(matches!(result, Err(MiniCliError::NotFound(_))));
    }
}
