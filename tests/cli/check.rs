use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_consistent_project() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/A.vue", "<i18n>\nen:\n  a: A\nfr:\n  a: A\n</i18n>\n"),
        ("src/b.lang.yml", "en:\n  b: B\nfr:\n  b: B\n"),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Checked 2 components in 2 languages - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_missing_languages_and_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/A.vue", "<i18n>\nen:\n  title: Title\n</i18n>\n"),
        (
            "src/B.vue",
            "<i18n>\nen:\n  a: A\n  b: B\nfr:\n  a: A\nde:\n  a: A\n  b: B\n</i18n>\n",
        ),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @r#"
    error: Missing de translations  missing-language
      --> src/A.vue

    error: Missing fr translations  missing-language
      --> src/A.vue

    error: Missing translation for "b" in fr  missing-key
      --> src/B.vue

    ✘ 3 problems (2 missing languages, 1 missing key) in 2 components
    "#);
    Ok(())
}

#[test]
fn test_check_after_fixing_violations() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/A.vue", "<i18n>\nen:\n  a: A\n</i18n>\n"),
        ("src/B.vue", "<i18n>\nfr:\n  b: B\n</i18n>\n"),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    test.write_file(
        "src/A.vue",
        "<i18n>\nen:\n  a: A\nfr:\n  a: A\n</i18n>\n",
    )?;
    test.write_file(
        "src/B.vue",
        "<i18n>\nen:\n  b: B\nfr:\n  b: B\n</i18n>\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_export_edit_import_cycle() -> Result<()> {
    let test = CliTest::with_files(&[(
        "src/A.vue",
        "<template><p/></template>\n\n<i18n>\nen:\n  a: A\n  b: B\nfr:\n  a: A-fr\n</i18n>\n",
    )])?;

    assert_eq!(test.check_command().output()?.status.code(), Some(1));
    assert_eq!(test.export_command().output()?.status.code(), Some(0));

    test.write_file(
        "translations/translations.fr.yml",
        "src/A.vue:\n  a: A-fr\n  b: B-fr\n",
    )?;
    assert_eq!(test.import_command().output()?.status.code(), Some(0));

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    Ok(())
}

#[test]
fn test_check_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 0 components in 0 languages - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_files(&[(".i18nsyncrc.json", r#"{ "components": ["src/["] }"#)])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("components"), "stderr: {}", stderr(&output));
    Ok(())
}

#[test]
fn test_check_skips_ignored_files() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/A.vue", "<i18n>\nen:\n  a: A\n</i18n>\n"),
        (
            "src/node_modules/lib/B.vue",
            "<i18n>\nfr:\n  b: B\n</i18n>\n",
        ),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
