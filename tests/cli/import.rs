use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_import_updates_embedded_and_standalone_sources() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "src/App.vue",
            "<template>\n  <p>{{ $t('hi') }}</p>\n</template>\n\n<i18n>\nen:\n  hi: Hi\n</i18n>\n\n<style>\np { color: red; }\n</style>\n",
        ),
        ("src/Plain.vue", "<template>\n  <p>plain</p>\n</template>\n"),
        (
            "translations/translations.en.yml",
            "src/App.vue:\n  hi: Hello\nsrc/Plain.vue:\n  ok: OK\nsrc/forms.lang.json:\n  send: Send\n",
        ),
        (
            "translations/translations.fr.yml",
            "src/App.vue:\n  hi: Salut\n",
        ),
    ])?;

    let output = test.import_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Imported 2 languages into 3 components\n"
    );

    assert_eq!(
        test.read_file("src/App.vue")?,
        "<template>\n  <p>{{ $t('hi') }}</p>\n</template>\n\n<i18n>\nen:\n  hi: Hello\nfr:\n  hi: Salut\n</i18n>\n\n<style>\np { color: red; }\n</style>\n"
    );
    assert_eq!(
        test.read_file("src/Plain.vue")?,
        "<template>\n  <p>plain</p>\n</template>\n\n<i18n>\nen:\n  ok: OK\n</i18n>\n"
    );
    assert_eq!(
        test.read_file("src/forms.lang.json")?,
        "{\n  \"en\": {\n    \"send\": \"Send\"\n  }\n}\n"
    );
    Ok(())
}

#[test]
fn test_import_keeps_locale_blocks() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "src/App.vue",
            "<i18n locale=\"en\">\nhi: Hi\n</i18n>\n<i18n locale=\"fr\" lang=\"json\">\n{\"hi\": \"Salut\"}\n</i18n>\n",
        ),
        ("translations/translations.en.yml", "src/App.vue:\n  hi: Hello\n"),
        ("translations/translations.fr.yml", "src/App.vue:\n  hi: Bonjour\n"),
    ])?;

    let output = test.import_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("src/App.vue")?,
        "<i18n locale=\"en\">\nhi: Hello\n</i18n>\n<i18n locale=\"fr\" lang=\"json\">\n{\n  \"hi\": \"Bonjour\"\n}\n</i18n>\n"
    );
    Ok(())
}

#[test]
fn test_import_warns_about_unwritable_components() -> Result<()> {
    let test = CliTest::with_files(&[(
        "translations/translations.en.yml",
        "README.md:\n  a: b\n",
    )])?;

    let output = test.import_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stderr(&output),
        "warning: Skipping README.md: not a .vue file or *.lang.<ext> file\n"
    );
    assert!(!test.root().join("README.md").exists());
    Ok(())
}

#[test]
fn test_import_missing_component_file_fails() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "translations/translations.en.yml",
            "src/a.lang.yml:\n  a: new\nsrc/zz/Gone.vue:\n  a: b\n",
        ),
        ("src/a.lang.yml", "en:\n  a: old\n"),
    ])?;

    let output = test.import_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Gone.vue"));
    assert_eq!(test.read_file("src/a.lang.yml")?, "en:\n  a: old\n");
    Ok(())
}

#[test]
fn test_import_edits_survive_next_export() -> Result<()> {
    let test = CliTest::with_files(&[(
        "src/App.vue",
        "<i18n>\nen:\n  a: A\n</i18n>\n<i18n>\nfr:\n  a: F\n</i18n>\n",
    )])?;

    assert_eq!(test.export_command().output()?.status.code(), Some(0));
    test.write_file("translations/translations.fr.yml", "src/App.vue:\n  a: F2\n")?;
    let output = test.import_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("src/App.vue")?,
        "<i18n>\nen:\n  a: A\n</i18n>\n<i18n>\nfr:\n  a: F2\n</i18n>\n"
    );
    assert_eq!(test.export_command().output()?.status.code(), Some(0));
    assert_eq!(
        test.read_file("translations/translations.fr.yml")?,
        "src/App.vue:\n  a: F2\n"
    );
    Ok(())
}

#[test]
fn test_export_then_import_round_trip() -> Result<()> {
    let app = "<template>\n  <p>{{ $t('a') }}</p>\n</template>\n\n<i18n>\nen:\n  a: A\n  n: 3\n  ok: true\nfr:\n  a: A-fr\n</i18n>\n";
    let test = CliTest::with_files(&[
        ("src/App.vue", app),
        ("src/shared.lang.yml", "en:\n  b: B\n"),
    ])?;

    let output = test.export_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    let output = test.import_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("translations/translations.en.yml")?,
        "src/App.vue:\n  a: A\n  n: 3\n  ok: true\nsrc/shared.lang.yml:\n  b: B\n"
    );
    assert_eq!(test.read_file("src/App.vue")?, app);
    assert_eq!(test.read_file("src/shared.lang.yml")?, "en:\n  b: B\n");
    Ok(())
}
