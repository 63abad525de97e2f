use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn parse_config(content: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "attributes",
        "ignoreTags",
        "templateDelimiters",
        "include",
        "exclude",
        "color",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{field}' field"
        );
    }

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(parsed)
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .i18n-lint.json\n");

    let parsed = parse_config(&test.read_file(".i18n-lint.json")?)?;
    assert_eq!(parsed["attributes"], json!(["alt", "placeholder", "title"]));
    assert_eq!(parsed["ignoreTags"], json!(["script", "style", "pre", "code"]));
    assert_eq!(parsed["templateDelimiters"], json!([]));
    assert_eq!(parsed["color"], json!(true));

    Ok(())
}

#[test]
fn test_init_records_options() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args([
            "--init",
            "-t",
            "{{,}}",
            "-a",
            "alt,title",
            "--no-color",
            "templates/**/*.html",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0));

    let parsed = parse_config(&test.read_file(".i18n-lint.json")?)?;
    assert_eq!(parsed["attributes"], json!(["alt", "title"]));
    assert_eq!(parsed["templateDelimiters"], json!([["{{", "}}"]]));
    assert_eq!(parsed["include"], json!(["templates/**/*.html"]));
    assert_eq!(parsed["color"], json!(false));

    Ok(())
}

#[test]
fn test_init_then_check_uses_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("views/page.html", "<p>{{ 'welcome' | t }}</p>\n<p>Welcome</p>\n")?;

    let init = test
        .command()
        .args(["--init", "-t", "{{,}}", "views/*.html"])
        .output()?;
    assert_eq!(init.status.code(), Some(0));

    let output = test.command().args(["-r", "unix"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "views/page.html:2:3 Hardcoded <p> tag\n");

    Ok(())
}

#[test]
fn test_init_custom_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["--init", "--config", "lint.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created lint.json\n");
    assert!(test.root().join("lint.json").exists());
    assert!(!test.root().join(".i18n-lint.json").exists());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", "{}")?;

    let output = test.command().arg("--init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: .i18n-lint.json already exists\n"
    );
    assert_eq!(test.read_file(".i18n-lint.json")?, "{}");

    Ok(())
}
