//! CLI integration tests for java-digest

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let beans = temp_dir.path().join("core/src/main/java/beans");
    fs::create_dir_all(&beans).unwrap();
    fs::write(
        beans.join("BeanFactory.java"),
        "package beans;\n\n// Central registry\npublic interface BeanFactory {\n    Object getBean(String name);\n}\n",
    )
    .unwrap();
    fs::write(
        beans.join("DefaultBeanFactory.java"),
        "package beans;\n\npublic class DefaultBeanFactory implements BeanFactory {\n    @Override\n    public Object getBean(String name) {\n        return registry.get(name);\n    }\n}\n",
    )
    .unwrap();
    fs::write(beans.join("Util.java"), "package beans;\n\nclass Util {}\n").unwrap();

    let tests = temp_dir.path().join("core/src/test/java/beans");
    fs::create_dir_all(&tests).unwrap();
    fs::write(tests.join("BeanFactoryTest.java"), "class BeanFactoryTest {}\n").unwrap();
    temp_dir
}

fn cmd() -> Command {
    Command::cargo_bin("java-digest").unwrap()
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--elide-bodies"));
}

#[test]
fn test_default_run_writes_output_txt() {
    let project = create_test_project();
    cmd().arg(project.path()).assert().success();

    let text = fs::read_to_string(project.path().join("output.txt")).unwrap();
    assert!(text.contains("BeanFactory.java ==="));
    assert!(text.contains("Util.java ==="));
    assert!(text.contains("return registry.get(name);"));
    assert!(!text.contains("Central registry"));
    assert!(!text.contains("BeanFactoryTest"));
}

#[test]
fn test_names_and_elision() {
    let project = create_test_project();
    let out = project.path().join("beans.txt");
    cmd()
        .arg(project.path())
        .args(["--name", "BeanFactory", "--elide-bodies", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Merged 2 file(s)"));

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("    @Override\n    public Object getBean(String name){\n}\n"));
    assert!(!text.contains("registry.get"));
    assert!(!text.contains("Util.java"));
}

#[test]
fn test_config_file_is_picked_up() {
    let project = create_test_project();
    fs::write(
        project.path().join(".java_digest_config.json"),
        r#"{"names": ["Util"], "elide_bodies": true}"#,
    )
    .unwrap();
    cmd().arg(project.path()).assert().success();

    let text = fs::read_to_string(project.path().join("output.txt")).unwrap();
    assert!(text.contains("Util.java ==="));
    assert!(!text.contains("BeanFactory.java ==="));
}

#[test]
fn test_invalid_config_fails() {
    let project = create_test_project();
    let config = project.path().join("bad.json");
    fs::write(&config, "{ not json").unwrap();
    cmd()
        .arg(project.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}

#[test]
fn test_by_name_without_names_fails() {
    let project = create_test_project();
    cmd()
        .arg(project.path())
        .args(["--mode", "by-name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    cmd()
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}
