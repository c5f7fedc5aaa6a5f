use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const MARKUP: &str = r#"<div class="foo"></div>"#;
const STYLES: &str = ".foo{} .bar{} #baz{} #qux{}";

#[test]
fn test_few_unused_selectors_go_to_console() -> Result<()> {
    let test = CliTest::with_files(&[("index.html", MARKUP), ("css/site.css", STYLES)])?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(1));
    assert_eq!(
        out.stdout,
        "\nUnused class selectors:\n[\"bar\"]\n\nUnused ID selectors:\n[\"baz\", \"qux\"]\n"
    );
    assert!(!test.exists("unused-selectors.txt"));

    Ok(())
}

#[test]
fn test_no_unused_selectors() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "index.html",
            r#"<div id="main" class="a b"><p ng-class="{c: on}"></p></div>"#,
        ),
        ("style.scss", ".a {} .b {} .c {} #main { color: #fff; }"),
    ])?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Unused class selectors:\n[]"));
    assert!(out.stdout.contains("Unused ID selectors:\n[]"));

    Ok(())
}

#[test]
fn test_many_unused_selectors_go_to_file() -> Result<()> {
    let test = CliTest::with_files(&[
        ("index.html", "<div></div>"),
        ("style.css", ".c1 {} .c2 {} .c3 {} .c4 {} .c5 {} .c6 {}"),
    ])?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("File written to ./unused-selectors.txt"));
    assert!(!out.stdout.contains("Unused class selectors:"));
    assert_eq!(
        test.read_file("unused-selectors.txt")?,
        "## Unused Class Selectors - 6 ##\n\n\t.c1\n\t.c2\n\t.c3\n\t.c4\n\t.c5\n\t.c6\n\n## Unused ID Selectors - 0 ##\n"
    );

    Ok(())
}

#[test]
fn test_custom_root_and_output() -> Result<()> {
    let test = CliTest::with_files(&[
        ("site/index.html", MARKUP),
        ("site/site.sass", STYLES),
        ("other/ignored.css", ".not-scanned {}"),
    ])?;

    let out = test.run(&["site", "reports/out.txt", "--threshold", "1"])?;

    // the parent directory does not exist, so the write fails without aborting
    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Failed to write report"));
    assert!(!test.exists("reports/out.txt"));

    test.write_file("reports/.keep", "")?;
    let out = test.run(&["site", "reports/out.txt", "--threshold", "1"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("File written to reports/out.txt"));
    assert_eq!(
        test.read_file("reports/out.txt")?,
        "## Unused Class Selectors - 1 ##\n\n\t.bar\n\n## Unused ID Selectors - 2 ##\n\n\t#baz\n\t#qux"
    );

    Ok(())
}

#[test]
fn test_missing_root_directory() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["does-not-exist"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Could not find directory does-not-exist"));
    assert!(out.stdout.is_empty());
    assert!(!test.exists("unused-selectors.txt"));

    Ok(())
}

#[test]
fn test_git_directory_is_skipped() -> Result<()> {
    let test = CliTest::with_files(&[
        ("index.html", MARKUP),
        ("style.css", ".foo {}"),
        (".git/info/page.html", r#"<div class="stale"></div>"#),
        (".git/info/old.css", ".stale {}"),
    ])?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert!(!out.stdout.contains("stale"));

    Ok(())
}

#[test]
fn test_custom_exclusions_replace_default() -> Result<()> {
    let test = CliTest::with_files(&[
        ("index.html", MARKUP),
        ("style.css", ".foo {}"),
        ("vendor/lib.css", ".vendored {}"),
    ])?;

    let out = test.run(&["--exclude", "vendor"])?;
    assert_eq!(out.code, Some(0));

    let out = test.run(&[])?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("[\"vendored\"]"));

    Ok(())
}

#[test]
fn test_non_utf8_files_do_not_abort_run() -> Result<()> {
    let test = CliTest::with_files(&[("site.css", ".foo{} .bar{}")])?;
    let mut page = br#"<footer class="foo">"#.to_vec();
    page.push(0xa9);
    page.extend_from_slice(b" 2020</footer>");
    std::fs::write(test.root().join("index.html"), page)?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.is_empty());
    assert_eq!(
        out.stdout,
        "\nUnused class selectors:\n[\"bar\"]\n\nUnused ID selectors:\n[]\n"
    );

    Ok(())
}

#[test]
fn test_verbose_reports_file_counts() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a.html", MARKUP),
        ("b.html", MARKUP),
        ("c.css", ".foo {}"),
    ])?;

    let out = test.run(&["-v"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stderr.contains("2 markup, 1 stylesheet file(s)"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["--help"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage: selcheck [OPTIONS] [ROOT] [OUTPUT]"));
    assert!(out.stdout.contains("--threshold"));

    Ok(())
}
