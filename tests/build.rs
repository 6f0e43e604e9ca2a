//! End-to-end build runs against a temporary project tree, with a stub
//! shell script standing in for the Java minifier. The stub receives the
//! same `<input> -o <output>` argument convention as the real tool.
#![cfg(unix)]

use minicli::build::BuildConfig;
use minicli::commands::build::{print_stats, run_build};
use minicli::result::MiniCliError;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn write_stub_minifier(dir: &Path, body: &str) -> PathBuf {
    let stub = dir.join("stub-minifier.sh");
    fs::write(&stub, format!("#!/bin/sh\n{}\n", body)).expect("write stub");

    let mut perms = fs::metadata(&stub).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub, perms).expect("chmod stub");

    stub
}

/// A minifier that just copies input to output ($1 is the input path, $3
/// the output path after the -o flag).
fn copy_stub(dir: &Path) -> PathBuf {
    write_stub_minifier(dir, "cp \"$1\" \"$3\"")
}

fn seed_project(root: &Path) -> BuildConfig {
    fs::create_dir_all(root.join("src/js")).expect("mkdir js");
    fs::create_dir_all(root.join("src/styles")).expect("mkdir styles");
    fs::write(root.join("src/js/listbox.js"), vec![b'a'; 2048]).expect("write js");
    fs::write(root.join("src/styles/listbox.css"), vec![b'b'; 1024]).expect("write css");

    let mut config = BuildConfig::default();
    config.minifier.command = Some(copy_stub(root));
    config
}

#[tokio::test]
async fn build_produces_minified_artifacts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = seed_project(tmp.path());

    let entries = run_build(&config, tmp.path()).await.expect("build");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, PathBuf::from("js/listbox.js"));
    assert_eq!(entries[1].name, PathBuf::from("styles/listbox.css"));

    let js_out = tmp.path().join("build/js/listbox.min.js");
    let css_out = tmp.path().join("build/styles/listbox.min.css");
    assert!(js_out.is_file());
    assert!(css_out.is_file());

    // Copy-stub: before and after sizes are equal
    assert_eq!(fs::metadata(&js_out).expect("js metadata").len(), 2048);
    assert_eq!(fs::metadata(&css_out).expect("css metadata").len(), 1024);

    // The report reads the same files and must succeed
    print_stats(&entries).await.expect("stats");
}

#[tokio::test]
async fn rerun_removes_stale_artifacts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = seed_project(tmp.path());

    run_build(&config, tmp.path()).await.expect("first build");

    let stale = tmp.path().join("build/stale.txt");
    fs::write(&stale, b"left over").expect("write stale");

    run_build(&config, tmp.path()).await.expect("second build");

    assert!(!stale.exists());
    assert!(tmp.path().join("build/js/listbox.min.js").is_file());
    assert!(tmp.path().join("build/styles/listbox.min.css").is_file());
}

#[tokio::test]
async fn build_creates_missing_output_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = seed_project(tmp.path());

    assert!(!tmp.path().join("build").exists());
    run_build(&config, tmp.path()).await.expect("build");

    let build_dir = tmp.path().join("build");
    assert!(build_dir.is_dir());
    assert!(fs::read_dir(&build_dir).expect("read_dir").count() > 0);
}

#[tokio::test]
async fn failing_minifier_aborts_the_run() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut config = seed_project(tmp.path());
    config.minifier.command = Some(write_stub_minifier(
        tmp.path(),
        "echo 'boom' >&2\nexit 1",
    ));

    let result = run_build(&config, tmp.path()).await;

    assert!(matches!(result, Err(MiniCliError::Process(_))));
    // Failed before producing the first artifact
    assert!(!tmp.path().join("build/js/listbox.min.js").exists());
}

#[tokio::test]
async fn missing_source_file_is_reported() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut config = seed_project(tmp.path());
    config.build.files.push(PathBuf::from("js/not-there.js"));

    let result = run_build(&config, tmp.path()).await;

    assert!(matches!(result, Err(MiniCliError::NotFound(_))));
}
