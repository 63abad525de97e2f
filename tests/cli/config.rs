use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_config_ignore_tags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", r#"{ "ignoreTags": ["h1"] }"#)?;
    test.write_file("page.html", "<h1>Brand</h1>\n<p>Welcome</p>\n")?;

    let output = test.command().args(["-r", "unix", "page.html"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "page.html:2:3 Hardcoded <p> tag\n");

    Ok(())
}

#[test]
fn test_config_template_delimiters() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18n-lint.json",
        r#"{ "templateDelimiters": [["{{", "}}"], ["{%", "%}"]] }"#,
    )?;
    test.write_file(
        "page.html",
        "<p>{{ 'hello' | translate }}</p>\n<p>{% trans 'bye' %}</p>\n",
    )?;

    let output = test.command().arg("page.html").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_config_single_delimiter_pair() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", r#"{ "templateDelimiters": ["<%", "%>"] }"#)?;
    test.write_file("page.html", "<p><%= t('hello') %></p>\n")?;

    let output = test.command().arg("page.html").output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_config_include_is_used_without_arguments() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", r#"{ "include": ["views/*.html"] }"#)?;
    test.write_file("views/home.html", "<p>Home</p>")?;
    test.write_file("other/skip.html", "<p>Skipped</p>")?;

    let output = test.command().args(["-r", "unix"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "views/home.html:1:3 Hardcoded <p> tag\n");

    Ok(())
}

#[test]
fn test_config_exclude() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", r#"{ "exclude": ["**/legacy/**"] }"#)?;
    test.write_file("views/legacy/old.html", "<p>Old page</p>")?;
    test.write_file("views/new.html", "<p>New page</p>")?;

    let output = test
        .command()
        .args(["-r", "unix", "views/**/*.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "views/new.html:1:3 Hardcoded <p> tag\n");

    Ok(())
}

#[test]
fn test_config_found_in_parent_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", r#"{ "attributes": ["title"] }"#)?;
    test.write_file("app/views/form.html", "<input placeholder=\"Name\" title=\"Your name\">")?;

    let output = test
        .command()
        .current_dir(test.root().join("app/views"))
        .args(["-r", "unix", "form.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "form.html:1:33 Hardcoded 'title' attribute\n");

    Ok(())
}

#[test]
fn test_command_line_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", r#"{ "ignoreTags": ["p"] }"#)?;
    test.write_file("page.html", "<p>Hello</p>\n<h2>Title</h2>\n")?;

    let output = test
        .command()
        .args(["-r", "unix", "-i", "h2", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "page.html:1:3 Hardcoded <p> tag\n");

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lint/strict.json", r#"{ "attributes": ["alt", "aria-label"] }"#)?;
    test.write_file("page.html", "<button aria-label=\"Close dialog\">x</button>")?;

    let output = test
        .command()
        .args(["-r", "unix", "-c", "lint/strict.json", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "page.html:1:20 Hardcoded 'aria-label' attribute\n"
    );

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18n-lint.json", "{ not json")?;
    test.write_file("page.html", "<p>Hello</p>")?;

    let output = test.command().arg("page.html").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Failed to parse config file"), "{err}");

    Ok(())
}

#[test]
fn test_invalid_exclude_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("page.html", "<p>Hello</p>")?;

    let output = test
        .command()
        .args(["-e", "**/[oops", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Invalid glob pattern in 'exclude'"), "{err}");

    Ok(())
}

#[test]
fn test_missing_config_path() -> Result<()> {
    let test = CliTest::with_file("page.html", "<p>Hello</p>")?;

    let output = test
        .command()
        .args(["-c", "nope.json", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read config file: nope.json"));

    Ok(())
}

#[test]
fn test_malformed_delimiters_warn_only_when_verbose() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18n-lint.json",
        r#"{ "templateDelimiters": [["{{", "}}"], ["{%"]] }"#,
    )?;
    test.write_file("page.html", "<p>{{ 'hello' | t }}</p>\n")?;

    let quiet = test.command().arg("page.html").output()?;
    assert_eq!(quiet.status.code(), Some(0));
    assert_eq!(stderr(&quiet), "");

    let verbose = test.command().args(["-v", "page.html"]).output()?;
    assert_eq!(verbose.status.code(), Some(0));
    let err = stderr(&verbose);
    assert!(err.contains("Ignoring template delimiters [\"{%\"]"), "{err}");

    Ok(())
}
