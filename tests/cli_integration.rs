//! Binary-level tests for the routing paths that need no live cluster.
//! Everything that talks to kubectl is covered at the command layer against
//! the static gateway.

use assert_cmd::Command;
use predicates::prelude::*;

fn kq() -> Command {
    Command::cargo_bin("kq").unwrap()
}

#[test]
fn no_arguments_shows_help() {
    kq().assert()
        .success()
        .stdout(predicate::str::contains("Basic Commands"))
        .stdout(predicate::str::contains("Fuzzy search"));
}

#[test]
fn help_token_shows_help() {
    kq().arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Commands"));
}

#[test]
fn helpish_first_token_shows_help() {
    kq().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Commands"));
}

#[test]
fn bare_all_shows_all_usage() {
    kq().arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("List of all namespaces"))
        .stdout(predicate::str::contains("List of all pods"));
}

#[test]
fn bare_find_shows_find_usage() {
    kq().arg("find")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find namespace"))
        .stdout(predicate::str::contains("Find pod"));
}

#[test]
fn find_ns_without_query_shows_its_usage() {
    kq().args(["find", "ns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find namespace"))
        .stdout(predicate::str::contains("Find pod").not());
}

#[test]
fn unknown_pod_subcommand_shows_context_help() {
    kq().args(["prod", "web", "restart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("restart"))
        .stdout(predicate::str::contains("Run bash in pod"));
}

#[test]
fn two_tokens_without_subcommand_show_context_help() {
    kq().args(["prod", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logs"))
        .stdout(predicate::str::contains("bash"));
}
