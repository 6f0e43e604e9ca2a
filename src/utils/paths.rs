use crate::result::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/** Derives the minified filename for a source path
 *
 * Inserts `postfix` immediately before the file extension, preserving the
 * extension and any leading directory components:
 * `js/listbox.js` + `.min` becomes `js/listbox.min.js`.
 *
 * Files without an extension (including dotfiles) get the postfix appended
 * to the full name instead.
 */
pub fn minified_name(path: &Path, postfix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let new_name = match name.rfind('.') {
        // A leading dot marks a dotfile, not an extension
        Some(dot) if dot > 0 => format!("{}{}{}", &name[..dot], postfix, &name[dot..]),
        _ => format!("{}{}", name, postfix),
    };

    path.with_file_name(new_name)
}

/// Maps every input file to its minified counterpart, 1:1 and
/// order-preserving.
pub fn derive_output_files(files: &[PathBuf], postfix: &str) -> Vec<PathBuf> {
    files.iter().map(|f| minified_name(f, postfix)).collect()
}

/// Creates the directory and any missing parents; succeeds if it already
/// exists.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Recreates `path` as an empty directory, removing any previous contents.
/// Destructive: callers own the directory for the duration of a run.
pub async fn reset_dir(path: &Path) -> Result<()> {
    if fs::metadata(path).await.is_ok() {
        fs::remove_dir_all(path).await?;
    }
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Renders a byte count as kilobytes with one decimal, e.g. `2.0kb`.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1}kb", bytes as f64 / 1024.0)
}
