use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_jdoc")))
}

/// Write a source file under the fixed scan root of a project directory.
fn write_source(project: &Path, rel: &str, content: &str) {
    let path = project.join("src/main/java").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

const WIDGET: &str = "\
/**
 * A configurable widget.
 */
@ClassDocumentation
public class Widget {
    /**
     * Builds the widget.
     */
    @MethodDocumentation
    public void build() {
    }

    public void reset() {
    }
}
";

// -- the Widget scenario --

#[test]
fn documented_method_yields_exactly_one_method_record() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path(), "Widget.java", WIDGET);

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Method build in class Widget is annotated with @MethodDocumentation",
        ))
        .stdout(predicate::str::contains(
            "Method reset in class Widget is not annotated with @MethodDocumentation",
        ));

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    assert!(report.contains("Method build in class Widget has JavaDoc comment: "));
    assert!(report.contains("* Builds the widget."));
    assert!(!report.contains("reset"));
}

#[test]
fn type_record_precedes_its_method_records() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path(), "Widget.java", WIDGET);

    cmd().current_dir(dir.path()).assert().success();

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    let class_at = report.find("Class Widget has JavaDoc comment").unwrap();
    let method_at = report.find("Method build in class Widget").unwrap();
    assert!(class_at < method_at);
}

// -- marking never gates inclusion --

#[test]
fn unmarked_documented_type_is_still_reported() {
    let dir = TempDir::new().unwrap();
    write_source(
        dir.path(),
        "Plain.java",
        "/**\n * Undecorated but documented.\n */\npublic class Plain {\n}\n",
    );

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Class Plain is not annotated with @ClassDocumentation",
        ));

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    assert!(report.contains("Class Plain has JavaDoc comment: "));
    assert!(report.contains("* Undecorated but documented."));
}

#[test]
fn undocumented_tree_produces_empty_report() {
    let dir = TempDir::new().unwrap();
    write_source(
        dir.path(),
        "Bare.java",
        "@ClassDocumentation\npublic class Bare {\n    public void run() {\n    }\n}\n",
    );

    cmd().current_dir(dir.path()).assert().success();

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    assert_eq!(report, "");
}

// -- discovery --

#[test]
fn discovery_is_recursive() {
    let dir = TempDir::new().unwrap();
    write_source(
        dir.path(),
        "com/example/deep/Nested.java",
        "/** Deeply nested. */\npublic class Nested {\n}\n",
    );

    cmd().current_dir(dir.path()).assert().success();

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    assert!(report.contains("Class Nested has JavaDoc comment: "));
}

#[test]
fn non_java_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path(), "Real.java", "public class Real {\n}\n");
    write_source(dir.path(), "README.md", "/** Not a source file. */ class Fake {}\n");

    cmd().current_dir(dir.path()).assert().success();

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    assert!(!report.contains("Fake"));
}

#[test]
fn missing_root_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("scan root is not a directory"));

    assert!(!dir.path().join("javadoc.txt").exists());
}

// -- partial-failure resilience --

#[test]
fn malformed_file_is_skipped_and_run_completes() {
    let dir = TempDir::new().unwrap();
    write_source(
        dir.path(),
        "Alpha.java",
        "/** Alpha doc. */\npublic class Alpha {\n}\n",
    );
    write_source(dir.path(), "Broken.java", "public class Broken {\n");
    write_source(
        dir.path(),
        "Omega.java",
        "/** Omega doc. */\npublic class Omega {\n}\n",
    );

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: skipping"))
        .stderr(predicate::str::contains("Broken.java"));

    let report = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();
    assert!(report.contains("Class Alpha has JavaDoc comment: "));
    assert!(report.contains("Class Omega has JavaDoc comment: "));
    assert!(!report.contains("Broken"));
}

#[test]
fn unwritable_report_is_diagnosed_and_run_completes() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path(), "Widget.java", WIDGET);
    // A directory at the report path makes every write fail.
    fs::create_dir(dir.path().join("javadoc.txt")).unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to write report"))
        .stdout(predicate::str::contains("Class Widget has JavaDoc comment"));
}

// -- idempotence --

#[test]
fn rerun_on_unchanged_tree_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path(), "Widget.java", WIDGET);
    write_source(
        dir.path(),
        "com/example/Other.java",
        "/** Other doc. */\nclass Other {\n}\n",
    );

    cmd().current_dir(dir.path()).assert().success();
    let first = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();

    cmd().current_dir(dir.path()).assert().success();
    let second = fs::read_to_string(dir.path().join("javadoc.txt")).unwrap();

    assert_eq!(first, second);
}

// -- fixed interface: no arguments accepted --

#[test]
fn stray_arguments_are_rejected() {
    cmd().arg("--bogus").assert().failure();
    cmd().arg("extra").assert().failure();
}
