/// minicli - A build orchestrator for minified web assets
///
/// This crate drives an external minifier (a Java-based compressor such as
/// YUI Compressor) over a configured list of JS/CSS source files, recreating
/// the build output directory on each run and reporting size deltas.
///
/// Main modules:
/// - build: Build configuration (TOML) and root resolution
/// - cli: Command-line interface parsing and execution
/// - commands: Implementation of the build, setup and clean commands
/// - minifier: External minifier discovery and invocation
/// - result: Error handling and result types
/// - utils: Path derivation and directory helpers
pub mod build;
pub mod cli;
pub mod commands;
pub mod minifier;
pub mod result;
pub mod utils;
