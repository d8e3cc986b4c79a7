use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP_VUE: &str = r#"<template>
  <h1>{{ $t('title') }}</h1>
</template>

<i18n>
en:
  title: Welcome
  nav:
    home: Home
fr:
  title: Bienvenue
  nav:
    home: Accueil
</i18n>
"#;

#[test]
fn test_export_writes_language_files() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/App.vue", APP_VUE),
        ("src/components/common.lang.yml", "en:\n  save: Save\n"),
    ])?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Exported 2 components into 2 language files\n"
    );

    assert_eq!(
        test.read_file("translations/translations.en.yml")?,
        "src/App.vue:\n  nav:\n    home: Home\n  title: Welcome\nsrc/components/common.lang.yml:\n  save: Save\n"
    );
    assert_eq!(
        test.read_file("translations/translations.fr.yml")?,
        "src/App.vue:\n  nav:\n    home: Accueil\n  title: Bienvenue\n"
    );
    Ok(())
}

#[test]
fn test_export_verbose_lists_files() -> Result<()> {
    let test = CliTest::with_files(&[("src/App.vue", APP_VUE)])?;

    let output = test.export_command().arg("--verbose").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Exporting files:\n  src/App.vue\nWriting files:\n  translations/translations.en.yml\n  translations/translations.fr.yml\n✓ Exported 1 component into 2 language files\n"
    );
    Ok(())
}

#[test]
fn test_export_uses_config_file() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".i18nsyncrc.json",
            r#"{ "components": ["app/**/*.vue"], "translationsDir": "locales", "translationsPrefix": "messages", "format": "json" }"#,
        ),
        ("app/Home.vue", "<i18n lang=\"json\">\n{\"en\": {\"hi\": \"Hi\"}}\n</i18n>\n"),
        ("src/Ignored.vue", "<i18n>\nde:\n  hi: Hallo\n</i18n>\n"),
    ])?;
    test.write_file("app/nested/.keep", "")?;

    let output = test
        .export_command()
        .current_dir(test.root().join("app/nested"))
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("locales/messages.en.json")?,
        "{\n  \"app/Home.vue\": {\n    \"hi\": \"Hi\"\n  }\n}\n"
    );
    assert!(!test.root().join("locales/messages.de.json").exists());
    Ok(())
}

#[test]
fn test_export_invalid_source_fails_without_writing() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/App.vue", APP_VUE),
        ("src/Broken.vue", "<i18n>\nen: [oops\n</i18n>\n"),
    ])?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error:"), "stderr: {}", err);
    assert!(err.contains("Broken.vue"), "stderr: {}", err);
    assert!(!test.root().join("translations").exists());
    Ok(())
}

#[test]
fn test_export_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Exported 0 components into 0 language files\n"
    );
    assert!(!test.root().join("translations").exists());
    Ok(())
}
