use std::borrow::Cow;
use thiserror::Error;

/** Main Result type alias for minicli operations
 *
 * # Usage
 * ```no_run
 * use minicli::result::Result;
 *
 * async fn read_config() -> Result<String> {
 *     // Function automatically propagates MiniCliError
 *     let content = std::fs::read_to_string("minicli.toml")?;
 *     Ok(content)
 * }
 * ```
 */
pub type Result<T> = std::result::Result<T, MiniCliError>;

/** Error enumeration for the minicli application
 *
 * # Error Categories
 * - **Io**: File system and I/O operations
 * - **Process**: External minifier execution failures
 * - **Config**: Configuration parsing and validation errors
 * - **NotFound**: Missing files, directories or executables
 * - **TomlParse**: TOML configuration parsing failures
 * - **TomlSerialize**: TOML serialization errors
 *
 * # Design Notes
 * - Uses `Cow<'static, str>` for efficient string storage
 * - Automatic From implementations for common error types
 */
#[derive(Error, Debug)]
pub enum MiniCliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process error: {0}")]
    Process(Cow<'static, str>),

    #[error("Config error: {0}")]
    Config(Cow<'static, str>),

    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MiniCliError {
    // Process-related error constants
    pub const JAVA_NOT_FOUND: &'static str = "Java runtime not found on PATH";
    pub const MINIFY_FAILED: &'static str = "Minification failed";

    // Configuration-related error constants
    pub const INVALID_CONFIG: &'static str = "Invalid configuration format";

    /** Creates a Process error with flexible message input
     *
     * # Supported Input Types
     * - `&'static str` for static strings (no allocation)
     * - `String` for dynamic strings
     * - Any type implementing `Into<Cow<'static, str>>`
     */
    pub fn process(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Process(msg.into())
    }

    /** Creates a Config error with flexible message input
     *
     * # Use Cases
     * - Invalid configuration formats
     * - Missing required configuration fields
     * - Configuration validation failures
     */
    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(msg.into())
    }

    /** Creates a NotFound error with flexible message input
     *
     * # Use Cases
     * - Missing source files or directories
     * - Minifier jar or runner executable not found
     * - Configuration files not found
     */
    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}
