//! Integration tests for the sdk-bootstrap binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A command isolated from the caller's SDK and prompt settings.
fn bootstrap(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("sdk-bootstrap"));
    cmd.current_dir(project)
        .arg("--non-interactive")
        .env_remove("VULKAN_SDK")
        .env_remove("SDK_BOOTSTRAP_PROMPT_INSTALL_SDK")
        .env_remove("RUST_LOG");
    cmd
}

fn sdk_dir(project: &Path, version: &str) -> PathBuf {
    let dir = project.join("VulkanSDK").join(version);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn install_debug_libs(sdk_root: &Path) {
    fs::create_dir_all(sdk_root.join("Lib")).unwrap();
    fs::write(sdk_root.join("Lib").join("shaderc_sharedd.lib"), "lib").unwrap();
}

fn debug_libs_zip() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("Lib/shaderc_sharedd.lib", options).unwrap();
    writer.write_all(b"debug build").unwrap();
    writer.start_file("Bin/glslangValidatord.exe", options).unwrap();
    writer.write_all(b"binary").unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sdk-bootstrap"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Vulkan SDK"))
        .stdout(predicate::str::contains("debug-libs"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sdk-bootstrap"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_unset_sdk_declines_install() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bootstrap(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "You don't have the Vulkan SDK installed!",
        ))
        .stdout(predicate::str::contains(
            "Would you like to install the Vulkan SDK? no",
        ));

    assert!(!temp.path().join("ZeoEngine").exists());
    Ok(())
}

#[test]
fn cli_empty_sdk_variable_counts_as_unset() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bootstrap(temp.path())
        .env("VULKAN_SDK", "")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("installed!"));
    Ok(())
}

#[test]
fn cli_version_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let sdk_root = sdk_dir(temp.path(), "1.3.204.1");

    bootstrap(temp.path())
        .arg("check")
        .env("VULKAN_SDK", &sdk_root)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Located Vulkan SDK at"))
        .stderr(predicate::str::contains(
            "You don't have the correct Vulkan SDK version! (requires 1.2.170.0)",
        ));
    Ok(())
}

#[test]
fn cli_ready_when_debug_libs_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let sdk_root = sdk_dir(temp.path(), "1.2.170.0");
    install_debug_libs(&sdk_root);

    bootstrap(temp.path())
        .env("VULKAN_SDK", &sdk_root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct Vulkan SDK located at"))
        .stdout(predicate::str::contains("Vulkan SDK debug libs located at"))
        .stdout(predicate::str::contains("Downloading").not());
    Ok(())
}

#[test]
fn cli_sdk_root_flag_overrides_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let sdk_root = sdk_dir(temp.path(), "1.2.170.0");
    install_debug_libs(&sdk_root);

    bootstrap(temp.path())
        .env("VULKAN_SDK", temp.path().join("VulkanSDK").join("1.1.0.0"))
        .arg("--sdk-root")
        .arg(&sdk_root)
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_downloads_missing_debug_libs() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/VulkanSDK-1.2.170.0-DebugLibs.zip");
        then.status(200).body(debug_libs_zip());
    });

    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".sdk-bootstrap.yml"),
        format!(
            "debug_libs:\n  url: {}\n",
            server.url("/VulkanSDK-1.2.170.0-DebugLibs.zip")
        ),
    )?;
    let sdk_root = sdk_dir(temp.path(), "1.2.170.0");

    bootstrap(temp.path())
        .env("VULKAN_SDK", &sdk_root)
        .assert()
        .success()
        .stderr(predicate::str::contains("No Vulkan SDK debug libs found."))
        .stdout(predicate::str::contains("Vulkan SDK debug libs located at"));

    mock.assert_calls(1);
    assert_eq!(
        fs::read_to_string(sdk_root.join("Lib").join("shaderc_sharedd.lib"))?,
        "debug build"
    );
    assert!(sdk_root.join("Bin").join("glslangValidatord.exe").exists());

    // Second run finds the marker and makes no request.
    bootstrap(temp.path())
        .env("VULKAN_SDK", &sdk_root)
        .assert()
        .success();
    mock.assert_calls(1);
    Ok(())
}

#[test]
fn cli_checksum_mismatch_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/DebugLibs.zip");
        then.status(200).body(debug_libs_zip());
    });

    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".sdk-bootstrap.yml"),
        format!(
            "debug_libs:\n  url: {}\n  sha256: {}\n",
            server.url("/DebugLibs.zip"),
            "0".repeat(64)
        ),
    )?;
    let sdk_root = sdk_dir(temp.path(), "1.2.170.0");

    bootstrap(temp.path())
        .env("VULKAN_SDK", &sdk_root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert!(!sdk_root.join("Lib").join("shaderc_sharedd.lib").exists());
    Ok(())
}

#[test]
fn cli_invalid_prompt_override_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bootstrap(temp.path())
        .env("SDK_BOOTSTRAP_PROMPT_INSTALL_SDK", "maybe")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("install_sdk"));
    Ok(())
}

#[test]
fn cli_status_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = bootstrap(temp.path())
        .args(["status", "--json"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["status"], "not_installed");
    assert_eq!(report["env_var"], "VULKAN_SDK");
    assert_eq!(report["required_version"], "1.2.170.0");
    assert!(report["location"].is_null());
    Ok(())
}

#[test]
fn cli_status_reads_project_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let project = temp.path().join("engine");
    fs::create_dir_all(&project)?;
    fs::write(
        project.join(".sdk-bootstrap.yml"),
        "sdk_name: Test SDK\nenv_var: TEST_SDK_ROOT\nrequired_version: \"2.0\"\n",
    )?;
    let sdk_root = sdk_dir(temp.path(), "2.0");

    bootstrap(temp.path())
        .env("TEST_SDK_ROOT", &sdk_root)
        .arg("--project")
        .arg(&project)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Test SDK - Status"))
        .stdout(predicate::str::contains("Test SDK is installed"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    bootstrap(temp.path())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn cli_rejects_empty_required_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".sdk-bootstrap.yml"), "required_version: \"\"\n")?;
    let sdk_root = sdk_dir(temp.path(), "1.3.204.1");

    bootstrap(temp.path())
        .env("VULKAN_SDK", &sdk_root)
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("required_version must not be empty"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sdk-bootstrap"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sdk-bootstrap"));
    Ok(())
}
