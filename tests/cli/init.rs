use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created"));

    let content = test.read_file(".i18nsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in [
        "components",
        "langFiles",
        "ignores",
        "translationsDir",
        "translationsPrefix",
        "format",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{}'", field);
    }
    assert_eq!(parsed["format"], "yaml");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_files(&[(".i18nsyncrc.json", "{}")])?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: .i18nsyncrc.json already exists\n"
    );
    assert_eq!(test.read_file(".i18nsyncrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("src/App.vue", "<i18n>\nen:\n  a: A\n</i18n>\n")?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("translations/translations.en.yml")?,
        "src/App.vue:\n  a: A\n"
    );
    Ok(())
}
