pub mod parser;

use crate::commands::CommandExecutor;
use crate::result::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "minicli")]
#[command(about = "CLI tool for producing minified JS/CSS build artifacts")]
#[command(version = "0.1.0")]
#[command(arg_required_else_help = true)]
#[command(
    help_template = "{before-help}{name} v{version}\n\n{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
pub enum Commands {
    #[command(about = "Minify the configured source files into the build directory")]
    Build {
        #[arg(short, long, help = "Build configuration file")]
        config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        verbose: bool,

        #[arg(long, help = "Skip the before/after size report")]
        no_stats: bool,
    },

    #[command(about = "Setup project with default minicli.toml")]
    Setup {
        #[arg(long, help = "Force overwrite existing minicli.toml")]
        force: bool,
    },

    #[command(about = "Remove the build directory")]
    Clean {
        #[arg(short, long, help = "Build configuration file")]
        config: Option<String>,
    },
}

impl Default for Cli {
    fn default() -> Self {
        Self::parse()
    }
}

impl Cli {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn execute(self) -> Result<()> {
        let mut executor = CommandExecutor::new();

        match self.command {
            Commands::Build {
                config,
                verbose,
                no_stats,
            } => executor.build_project(config, verbose, no_stats).await,
            Commands::Setup { force } => executor.setup_project(force).await,
            Commands::Clean { config } => executor.clean_project(config).await,
        }
    }
}
