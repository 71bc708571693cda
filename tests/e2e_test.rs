//! End-to-end tests for the tildesite binary.

mod common;

use anyhow::Result;
use common::{create_test_project, read_output, write_content};
use std::process::Command;

/// Tests full binary execution generates the site.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let project = create_test_project()?;
    write_content(project.path(), "index.md", "# Home\n\nWelcome.")?;
    write_content(project.path(), "about.md", "# About\n")?;
    let content = project.path().join("content");
    let output = project.path().join("dist");

    // Act
    let status = Command::new("cargo")
        .args([
            "run",
            "--quiet",
            "--manifest-path",
            concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"),
            "--",
        ])
        .arg(&content)
        .arg("-o")
        .arg(&output)
        .args([
            "--title",
            "E2E Site",
            "--author",
            "testuser",
            "--nav",
            "About=/about",
            "--no-open",
        ])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");

    let index = read_output(&output, "index.html")?;
    assert!(index.contains("<title>E2E Site</title>"));
    assert!(index.contains("testuser"));
    assert!(index.contains(r#"<span class="route-prompt">~/</span>"#));

    let about = read_output(&output, "about/index.html")?;
    assert!(about.contains("<title>About - E2E Site</title>"));
    assert!(about.contains(r#"<span class="route-prompt">~/about</span>"#));

    Ok(())
}

/// Tests binary rejects a missing content directory.
#[test]
fn test_missing_content_e2e() -> Result<()> {
    // Arrange
    let project = create_test_project()?;
    let missing = project.path().join("missing");

    // Act
    let status = Command::new("cargo")
        .args([
            "run",
            "--quiet",
            "--manifest-path",
            concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"),
            "--",
        ])
        .arg(&missing)
        .arg("--no-open")
        .status()?;

    // Assert
    assert!(!status.success(), "Missing content should fail");

    Ok(())
}
