//! Integration tests for the incroot binary.
//!
//! These tests build temporary C/C++ project trees, run the real binary
//! against them with a local template file (no network), and verify the
//! printed summary and the generated config.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TEMPLATE: &str = "flags = [\n$IncludePaths]\n";

/// Project layout from the classic scenario: a header in `a/`, a source in
/// `b/` including it, and a local completion template.
fn create_test_project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    fs::create_dir_all(dir.path().join("a")).expect("Failed to create a/");
    fs::create_dir_all(dir.path().join("b")).expect("Failed to create b/");
    fs::write(dir.path().join("a/x.h"), "#pragma once\n").expect("Failed to write header");
    fs::write(
        dir.path().join("b/y.cpp"),
        "#include \"x.h\"\nint main() { return 0; }\n",
    )
    .expect("Failed to write source");
    fs::write(dir.path().join("template.py"), TEMPLATE).expect("Failed to write template");

    dir
}

fn run_incroot(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_incroot"))
        .args(args)
        .current_dir(project)
        .output()
        .expect("Failed to execute incroot")
}

#[test]
fn generates_config_from_scanned_includes() {
    let project = create_test_project();

    let output = run_incroot(
        project.path(),
        &[
            "--template",
            "template.py",
            "--output",
            "conf.py",
            "--format",
            "v1",
        ],
    );
    assert!(
        output.status.success(),
        "incroot failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total header: 1"), "stdout was: {stdout}");
    assert!(stdout.contains("Gen Include:"), "stdout was: {stdout}");

    let conf = fs::read_to_string(project.path().join("conf.py")).expect("conf.py not written");
    assert!(conf.starts_with("flags = [\n"));
    assert!(conf.contains("'-Ia',"), "conf was: {conf}");
    assert!(conf.contains("'-I.',"), "conf was: {conf}");
    assert!(!conf.contains("$IncludePaths"), "placeholder not substituted");
}

#[test]
fn v2_format_splits_flag_and_path() {
    let project = create_test_project();

    let output = run_incroot(
        project.path(),
        &["--template", "template.py", "--output", "conf.py"],
    );
    assert!(output.status.success());

    let conf = fs::read_to_string(project.path().join("conf.py")).unwrap();
    assert!(conf.contains("'-I',\n'a',"), "conf was: {conf}");
}

#[test]
fn dry_run_writes_nothing() {
    let project = create_test_project();

    let output = run_incroot(
        project.path(),
        &["--dry-run", "--template", "template.py", "--output", "conf.py"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Gen Include:"));
    assert!(!project.path().join("conf.py").exists());
}

#[test]
fn default_exclusion_skips_third_party() {
    let project = create_test_project();
    fs::create_dir_all(project.path().join("third_party")).unwrap();
    fs::write(
        project.path().join("third_party/vendored.cpp"),
        "#include \"vendored_dep.h\"\n",
    )
    .unwrap();

    let output = run_incroot(
        project.path(),
        &["--template", "template.py", "--output", "conf.py"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total header: 1"), "stdout was: {stdout}");
}

#[test]
fn custom_exclusion_overrides_default() {
    let project = create_test_project();

    // With `b` excluded nothing is scanned, so only the sentinel survives.
    let output = run_incroot(
        project.path(),
        &[
            "-x",
            "b",
            "--format",
            "v1",
            "--template",
            "template.py",
            "--output",
            "conf.py",
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total header: 0"), "stdout was: {stdout}");

    let conf = fs::read_to_string(project.path().join("conf.py")).unwrap();
    assert!(conf.contains("'-I.',"));
    assert!(!conf.contains("'-Ia',"));
}

#[test]
fn unreadable_template_degrades_without_failing() {
    let project = create_test_project();

    // Pointing at a directory: no fetch is attempted, the read fails, the
    // run still exits 0 and simply produces no config.
    let output = run_incroot(project.path(), &["--template", "a", "--output", "conf.py"]);
    assert!(output.status.success());
    assert!(!project.path().join("conf.py").exists());
}

#[test]
fn verbose_mode_reports_files_and_system_headers() {
    let project = create_test_project();
    fs::write(
        project.path().join("b/z.cpp"),
        "#include <vector>\nint f() { return 1; }\n",
    )
    .unwrap();

    let output = run_incroot(
        project.path(),
        &["-v", "--dry-run", "--template", "template.py"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[b/y.cpp]"), "stdout was: {stdout}");
    assert!(stdout.contains("vector"), "stdout was: {stdout}");
    assert!(stdout.contains("Total header: 2"), "stdout was: {stdout}");
}

#[test]
fn vscode_flag_emits_cpp_properties() {
    let project = create_test_project();

    let output = run_incroot(
        project.path(),
        &["--vscode", "--template", "template.py", "--output", "conf.py"],
    );
    assert!(output.status.success());

    let properties = project.path().join(".vscode/c_cpp_properties.json");
    let content = fs::read_to_string(&properties).expect("c_cpp_properties.json not written");
    assert!(content.contains("${workspaceFolder}/a"), "content was: {content}");
}

#[test]
fn project_config_supplies_defaults() {
    let project = create_test_project();
    fs::write(
        project.path().join("incroot.toml"),
        "[output]\nformat = \"v1\"\nfile = \"from_config.py\"\ntemplate = \"template.py\"\n",
    )
    .unwrap();

    let output = run_incroot(project.path(), &[]);
    assert!(output.status.success());

    let conf = fs::read_to_string(project.path().join("from_config.py"))
        .expect("configured output not written");
    assert!(conf.contains("'-Ia',"), "conf was: {conf}");
}
