//! Integration tests for the toolvers binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LLVM: &str = r#"<html><body><p>
<a href="https://releases.llvm.org/download.html#18.1.8"><b>LLVM 18.1.8</b></a>
<a href="https://releases.llvm.org/download.html#17.0.6"><b>LLVM 17.0.6</b></a>
</p></body></html>"#;

const GCC: &str = r#"<html><body><table><tr><td><dl>
<dt><span class="version"><a href="gcc-14/">GCC 14.2</a></span></dt>
<dt><span class="version"><a href="gcc-13/">GCC 13.3</a></span></dt>
<dt><span class="version"><a href="gcc-12/">GCC 12.4</a></span></dt>
</dl></td></tr></table></body></html>"#;

const PYTHON: &str = r#"<html><body><section id="supported-versions">
<table><tbody>
<tr><td>main</td></tr>
<tr><td>3.12</td></tr>
<tr><td>3.11</td></tr>
<tr><td>3.10</td></tr>
</tbody></table></section></body></html>"#;

const RUBY: &str = r#"<html><body><div id="content-wrapper"><div>
<h3>Ruby 3.3</h3>
<p>status: normal maintenance<br>
normal maintenance until: TBD</p>
<h3>Ruby 3.2</h3>
<p>status: security maintenance<br>
normal maintenance until: 2025-04-01</p>
<h3>Ruby 3.0</h3>
<p>status: eol<br>
normal maintenance until: 2023-04-01</p>
</div></div></body></html>"#;

const UBUNTU_REPORT: &str = r#"{
  "name": "Ubuntu",
  "description": "Ubuntu 22.04",
  "results": {
    "python3": {"version": "3.10.6", "via": null},
    "ruby": {"version": "3.0.2", "via": null},
    "clang": {"version": "14.0", "via": null},
    "gcc": {"version": "11.2.0", "via": null}
  }
}"#;

const FREEBSD_REPORT: &str = r#"{
  "name": "FreeBSD",
  "description": "FreeBSD 14.0-RELEASE",
  "results": {
    "llvm": {"version": "18.1.8", "via": null},
    "clang": {"version": "18.1.8", "via": "llvm"},
    "gcc": {"version": "14.2.0", "via": null}
  }
}"#;

fn toolvers() -> Command {
    Command::new(cargo_bin("toolvers"))
}

/// A project with two collected reports and a config pointing every
/// upstream page at `server`.
fn setup_project(server: &MockServer) -> TempDir {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("ubuntu_22.04.json"), UBUNTU_REPORT).unwrap();
    fs::write(source.join("freebsd_14.0-release.json"), FREEBSD_REPORT).unwrap();

    let config = format!(
        "http_timeout_secs: 5\nupstream:\n  urls:\n    clang: {}\n    gcc: {}\n    python3: {}\n    ruby: {}\n",
        server.url("/llvm"),
        server.url("/gcc"),
        server.url("/python"),
        server.url("/ruby"),
    );
    fs::write(temp.path().join("ci.yml"), config).unwrap();
    temp
}

fn serve_upstream_pages(server: &MockServer) {
    for (path, body) in [("/llvm", LLVM), ("/gcc", GCC), ("/python", PYTHON), ("/ruby", RUBY)] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200).body(body);
        });
    }
}

fn build_local(project: &Path) -> assert_cmd::assert::Assert {
    toolvers()
        .current_dir(project)
        .args(["--config", "ci.yml", "build", "local"])
        .assert()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    toolvers()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("collect"))
        .stdout(predicate::str::contains("build"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    toolvers()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("toolvers"));
    Ok(())
}

#[test]
fn build_without_id_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    toolvers()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: toolvers build BUILD_ID"));
    assert!(!temp.path().join("_site").exists());
    Ok(())
}

#[test]
fn collect_requires_a_target() -> Result<(), Box<dyn std::error::Error>> {
    toolvers()
        .args(["collect", "Debian 12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--docker"));
    Ok(())
}

#[test]
fn collect_rejects_unsupported_image() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    toolvers()
        .current_dir(temp.path())
        .args(["collect", "Alpine 3.19", "--docker", "alpine:3.19"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown operating system"));
    assert!(!temp.path().join("source").exists());
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("toolvers.yml"), "site: public\n")?;
    toolvers()
        .current_dir(temp.path())
        .args(["build", "local"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    toolvers()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toolvers"));
    Ok(())
}

#[test]
fn build_local_generates_site() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve_upstream_pages(&server);
    let project = setup_project(&server);

    build_local(project.path())
        .success()
        .stdout(predicate::str::contains("2 systems"));

    let site = project.path().join("_site");
    let index = fs::read_to_string(site.join("index.html"))?;
    assert!(index.contains("<th>FreeBSD 14.0-RELEASE</th>"));
    assert!(index.contains("<th>Ubuntu 22.04</th>"));
    assert!(index.find("FreeBSD 14.0-RELEASE") < index.find("Ubuntu 22.04"));
    assert!(index.contains("18.1.8&nbsp;<sup>*</sup> (via llvm)"));
    assert!(index.contains("<td class=\"unsupported\""));
    assert!(index.contains("<td class=\"unknown\">??</td>"));
    assert!(index.contains("3.0.2&nbsp;<sup>&ddagger;</sup>"));
    assert!(index.contains(&server.url("/python")));
    assert!(!index.contains("{{"));

    assert!(site.join("application.css").is_file());
    assert!(site.join("data/source/ubuntu_22.04.json").is_file());
    let listing = fs::read_to_string(site.join("data/index.html"))?;
    assert!(listing.contains("source/"));
    let source_listing = fs::read_to_string(site.join("data/source/index.html"))?;
    assert!(source_listing.contains("freebsd_14.0-release.json"));
    assert!(source_listing.contains("ubuntu_22.04.json"));
    Ok(())
}

#[test]
fn build_local_fails_when_llvm_page_changes() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/llvm");
        then.status(200).body("<html><body>New look!</body></html>");
    });
    let project = setup_project(&server);

    build_local(project.path())
        .code(1)
        .stderr(predicate::str::contains("No supported versions found for clang"));
    assert!(!project.path().join("_site/index.html").exists());
    Ok(())
}
