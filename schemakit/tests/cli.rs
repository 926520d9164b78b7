//! Runs the schemakit binary against temporary projects.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

fn schemakit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schemakit"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let schemas = temp.path().join("schemas");
    fs::create_dir_all(schemas.join("objects")).unwrap();
    fs::write(
        schemas.join("index.ts"),
        "// Modules\n// ---------------\n\nconst modules = [\n  modulesHero,\n]\n",
    )
    .unwrap();
    fs::write(
        schemas.join("objects/builder.ts"),
        "of: [\n    {type: 'module.hero'},\n  ]\n",
    )
    .unwrap();
    temp
}

#[test]
fn test_missing_name_exits_1() {
    let temp = project();
    let output = schemakit(temp.path(), &["add"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("schemas/modules").exists());
}

#[test]
fn test_invalid_name_exits_1_before_writing() {
    let temp = project();
    let output = schemakit(temp.path(), &["add", "hero-banner", "--no-open"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("schemas/modules").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("hero-banner"));
}

#[test]
fn test_help_exits_0() {
    let temp = TempDir::new().unwrap();
    let output = schemakit(temp.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_add_registers_module() {
    let temp = project();
    let output = schemakit(temp.path(), &["add", "bar", "--no-open"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added bar (module.bar)"));
    assert!(stdout.contains("schemas/modules/bar.ts (created)"));

    assert!(temp.path().join("schemas/modules/bar.ts").is_file());
    let index = fs::read_to_string(temp.path().join("schemas/index.ts")).unwrap();
    assert_eq!(
        index,
        "// Modules\n// ---------------\nimport modulesBar from './modules/bar'\n\nconst modules = [\n  modulesHero,\n  modulesBar,\n]\n"
    );
}

#[test]
fn test_add_with_dir_and_dry_run() {
    let temp = project();
    let cwd = TempDir::new().unwrap();
    let dir = temp.path().to_str().unwrap();
    let output = schemakit(cwd.path(), &["add", "bar", "--dir", dir, "--dry-run"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Dry run"));
    assert!(!temp.path().join("schemas/modules/bar.ts").exists());
}

#[test]
fn test_missing_registry_fails() {
    let temp = project();
    fs::remove_file(temp.path().join("schemas/index.ts")).unwrap();

    let output = schemakit(temp.path(), &["add", "bar", "--no-open"]);

    assert!(!output.status.success());
    // Earlier writes are not rolled back
    assert!(temp.path().join("schemas/modules/bar.ts").is_file());
}

#[test]
fn test_init_then_list() {
    let temp = project();

    let output = schemakit(temp.path(), &["init"]);
    assert!(output.status.success());
    assert!(temp.path().join("schemakit.toml").is_file());

    let output = schemakit(temp.path(), &["init"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("already exists"));

    schemakit(temp.path(), &["add", "bar", "--no-open"]);
    let output = schemakit(temp.path(), &["list"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("  - bar\n"));
}

#[test]
fn test_bad_config_exits_1() {
    let temp = project();
    fs::write(temp.path().join("schemakit.toml"), "[paths\n").unwrap();

    let output = schemakit(temp.path(), &["add", "bar", "--no-open"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("schemas/modules").exists());
}
