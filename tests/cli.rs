use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn gsc(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gsc"));
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn rel(parts: &[&str]) -> PathBuf {
    parts.iter().collect()
}

#[test]
fn version_works() {
    let tmp = tempfile::tempdir().unwrap();
    gsc(tmp.path()).arg("-v").assert().success().stdout("0.0.1\n");
    gsc(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout("0.0.1\n");
}

#[test]
fn template_creates_both_files() {
    let tmp = tempfile::tempdir().unwrap();
    let resolvers = rel(&["services", "greet", "greet.resolvers.js"]);
    let type_defs = rel(&["services", "greet", "greet.typeDefs.js"]);

    gsc(tmp.path())
        .args(["template", "greet", "--root", "services", "--type", "Mutation"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{} creation complete.",
            resolvers.display()
        )))
        .stdout(predicate::str::contains(format!(
            "{} creation complete.",
            type_defs.display()
        )));

    let r = fs::read_to_string(tmp.path().join(&resolvers)).unwrap();
    assert!(r.contains("greetResolverFn"));
    let t = fs::read_to_string(tmp.path().join(&type_defs)).unwrap();
    assert!(t.contains("type Mutation"));
    assert!(t.contains("type GreetResult"));
}

#[test]
fn second_run_reports_existing_files_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let args = ["template", "greet", "--root", "services", "--type", "Mutation"];
    gsc(tmp.path()).args(args).assert().success();

    let resolvers = rel(&["services", "greet", "greet.resolvers.js"]);
    let type_defs = rel(&["services", "greet", "greet.typeDefs.js"]);
    fs::write(tmp.path().join(&resolvers), "// edited").unwrap();

    gsc(tmp.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("creation complete.").not())
        .stderr(predicate::str::contains(format!(
            "{} file already exists.",
            resolvers.display()
        )))
        .stderr(predicate::str::contains(format!(
            "{} file already exists.",
            type_defs.display()
        )));

    assert_eq!(
        fs::read_to_string(tmp.path().join(&resolvers)).unwrap(),
        "// edited"
    );
}

#[test]
fn tpl_alias_uses_default_root_and_type() {
    let tmp = tempfile::tempdir().unwrap();
    gsc(tmp.path()).args(["tpl", "signUp"]).assert().success();

    let t = fs::read_to_string(tmp.path().join(rel(&["users", "signUp", "signUp.typeDefs.js"])));
    let t = t.unwrap();
    assert!(t.contains("type Query {"));
    assert!(t.contains("type SignUpResult {"));
    assert!(
        tmp.path()
            .join(rel(&["users", "signUp", "signUp.resolvers.js"]))
            .is_file()
    );
}

#[test]
fn short_type_flag_accepts_q() {
    let tmp = tempfile::tempdir().unwrap();
    gsc(tmp.path())
        .args(["template", "me", "-r", "accounts", "-t", "q"])
        .assert()
        .success();
    let t = fs::read_to_string(tmp.path().join(rel(&["accounts", "me", "me.typeDefs.js"])));
    let t = t.unwrap();
    assert!(t.contains("type Query {"));
}

#[test]
fn unknown_command_prints_notice_and_help() {
    let tmp = tempfile::tempdir().unwrap();
    gsc(tmp.path())
        .args(["frobnicate", "now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The command could not be found."))
        .stdout(predicate::str::contains("Usage: gsc"))
        .stdout(predicate::str::contains("template"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn root_that_is_a_file_fails_loudly() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("users"), "not a directory").unwrap();
    gsc(tmp.path())
        .args(["template", "signUp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create directory"));
}
