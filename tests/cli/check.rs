use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_stdin, stderr, stdout};

#[test]
fn test_hardcoded_text() -> Result<()> {
    let test = CliTest::with_file("page.html", "<p>Hello world</p>\n")?;

    let output = test.command().args(["-r", "unix", "page.html"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "page.html:1:3 Hardcoded <p> tag\n");
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "page.html",
        "<div>\n  <p>{{ 'greeting' | translate }}</p>\n  <img src=\"logo.png\" alt=\"\">\n</div>\n",
    )?;

    let output = test
        .command()
        .args(["-t", "{{,}}", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_multiple_files_in_argument_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("b.html", "<h1>Welcome</h1>")?;
    test.write_file("a.html", "<input placeholder=\"Name\" title=\"Your name\">")?;

    let output = test
        .command()
        .args(["-r", "unix", "b.html", "a.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @r"
    b.html:1:4 Hardcoded <h1> tag
    a.html:1:20 Hardcoded 'placeholder' attribute
    a.html:1:33 Hardcoded 'title' attribute
    ");

    Ok(())
}

#[test]
fn test_glob_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("templates/home.html", "<p>Home</p>")?;
    test.write_file("templates/about/team.html", "<p>Our team</p>")?;
    test.write_file("templates/notes.txt", "<p>Not a template</p>")?;

    let output = test
        .command()
        .args(["-r", "unix", "templates/**/*.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    let mut lines: Vec<&str> = out.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec![
            "templates/about/team.html:1:3 Hardcoded <p> tag",
            "templates/home.html:1:3 Hardcoded <p> tag",
        ]
    );

    Ok(())
}

#[test]
fn test_exclude() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/index.html", "<p>{{ t }}</p>")?;
    test.write_file("site/vendor/widget.html", "<p>Third party</p>")?;

    let output = test
        .command()
        .args(["-t", "{{,}}", "-e", "vendor", "site/**/*.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_attributes_option() -> Result<()> {
    let test = CliTest::with_file(
        "form.html",
        "<input placeholder=\"Name\" title=\"Your name\">",
    )?;

    let output = test
        .command()
        .args(["-r", "unix", "-a", "title", "form.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "form.html:1:33 Hardcoded 'title' attribute\n");

    Ok(())
}

#[test]
fn test_ignore_tags_option() -> Result<()> {
    let test = CliTest::with_file("page.html", "<div>\n  <h1>Brand</h1>\n</div>\n")?;

    let output = test
        .command()
        .args(["-i", "h1", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_stdin_without_arguments() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["-r", "simple"]);
    let output = run_with_stdin(cmd, "<p>Piped text</p>\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "stdin: line 1, column 3, Hardcoded <p> tag\n");

    Ok(())
}

#[test]
fn test_stdin_dash_argument() -> Result<()> {
    let test = CliTest::with_file("page.html", "<b>Bold</b>")?;

    let mut cmd = test.command();
    cmd.args(["-r", "unix", "page.html", "-"]);
    let output = run_with_stdin(cmd, "<i>Italic</i>")?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @r"
    page.html:1:3 Hardcoded <b> tag
    stdin:1:3 Hardcoded <i> tag
    ");

    Ok(())
}

#[test]
fn test_no_files() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(64));
    let out = stdout(&output);
    assert!(out.starts_with("No files specified.\n"), "{out}");
    assert!(out.contains("Usage: i18n-lint"), "{out}");

    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("missing.html").output()?;

    assert_eq!(output.status.code(), Some(66));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "missing.html: No such file or directory\n"
    );

    Ok(())
}

#[test]
fn test_directory_argument() -> Result<()> {
    let test = CliTest::with_file("templates/page.html", "<p>Hi</p>")?;

    let output = test.command().arg("templates").output()?;

    assert_eq!(output.status.code(), Some(64));
    assert_eq!(stderr(&output), "templates: is a directory\n");

    Ok(())
}

#[test]
fn test_verbose_summary() -> Result<()> {
    let test = CliTest::with_file("page.html", "<p>Hello</p>\n<p>World</p>\n")?;

    let output = test
        .command()
        .args(["-v", "-r", "unix", "page.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(
        err.contains("Checked 1 file, found 2 hardcoded strings"),
        "{err}"
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Usage: i18n-lint [OPTIONS] [FILES]..."), "{out}");
    assert!(out.contains("--template-delimiters"), "{out}");

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("-V").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!("i18n-lint {}\n", env!("CARGO_PKG_VERSION"))
    );

    Ok(())
}
