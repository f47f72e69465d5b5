// Binary-level checks: exit codes, stderr messages and help text


use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use test_helpers::*;

fn zig_install(env: &TestEnvironment) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zig-install"));
    cmd.env("NO_COLOR", "1")
        .arg("--tar-dest")
        .arg(&env.tar_dest)
        .arg("--dest")
        .arg(&env.dest)
        .arg("--bin-dir")
        .arg(&env.bin)
        .arg("--lib-dir")
        .arg(&env.lib)
        .arg("--platform")
        .arg("x86_64-linux");
    cmd
}

#[test]
fn help_lists_environment_variables() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zig-install"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ZIG_TAR_DEST"))
        .stdout(predicate::str::contains("ZIG_INDEX_URL"))
        .stdout(predicate::str::contains("ZIG_VERSION"))
        .stdout(predicate::str::contains("--bin-dir"));
}

#[test]
fn malformed_flag_fails_before_any_work() {
    let env = TestEnvironment::new();
    let mut cmd = zig_install(&env);
    cmd.arg("--definitely-not-a-flag");

    cmd.assert().failure().code(2);
    assert!(!env.tar_dest.exists());
}

#[test]
fn unknown_version_exits_nonzero() {
    if !tar_available() {
        return;
    }
    let env = TestEnvironment::new();
    let mut server = mockito::Server::new();
    let tarball_url = format!("{}/zig.tar.gz", server.url());
    let _index = server
        .mock("GET", "/index.json")
        .with_status(200)
        .with_body(index_json("0.11.0", "x86_64-linux", &tarball_url, &"a".repeat(64)))
        .create();
    let tarball = server
        .mock("GET", "/zig.tar.gz")
        .expect(0)
        .create();

    let mut cmd = zig_install(&env);
    cmd.arg("--index-url")
        .arg(format!("{}/index.json", server.url()))
        .arg("--version")
        .arg("9.9.9");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("9.9.9"));
    tarball.assert();
}

#[test]
fn version_from_environment_is_used() {
    if !tar_available() {
        return;
    }
    let env = TestEnvironment::new();
    let archive = release_archive(true);
    let mut server = mockito::Server::new();
    let tarball_url = format!("{}/zig.tar.gz", server.url());
    let _index = server
        .mock("GET", "/index.json")
        .with_status(200)
        .with_body(index_json("0.11.0", "x86_64-linux", &tarball_url, &sha256_hex(&archive)))
        .create();
    let _tarball = server
        .mock("GET", "/zig.tar.gz")
        .with_status(200)
        .with_body(archive)
        .create();

    let mut cmd = zig_install(&env);
    cmd.env("ZIG_VERSION", "0.11.0")
        .env("ZIG_INDEX_URL", format!("{}/index.json", server.url()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("installed successfully"));
    assert!(env.bin.join("zig").exists());
    assert!(env.lib.join("zig/std/std.zig").exists());
}

#[test]
fn missing_tar_fails_before_network() {
    let env = TestEnvironment::new();
    let empty_path = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    let index = server
        .mock("GET", "/index.json")
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create();

    let mut cmd = zig_install(&env);
    cmd.env("PATH", empty_path.path())
        .arg("--index-url")
        .arg(format!("{}/index.json", server.url()));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing dependency: tar"));
    index.assert();
    assert!(!env.tar_dest.exists());
}
