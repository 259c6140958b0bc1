use anyhow::Result;
use serde_json::{Value, json};

use crate::CliTest;

fn parse_output(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

#[test]
fn test_single_file() -> Result<()> {
    let test = CliTest::with_file(
        "style.css",
        r#":root{--brand-color:#FF5733;} .btn{padding:8px;margin:8px;color:#FF5733;}"#,
    )?;

    let output = test.command().arg("style.css").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Extracted tokens from 1 CSS file"));
    assert!(stdout.contains("saved to tokens.json"));

    let tokens = parse_output(&test, "tokens.json")?;
    assert_eq!(tokens["css_variables"]["brand-color"], json!("#FF5733"));
    assert_eq!(tokens["colors"]["#FF5733"], json!(2));
    assert_eq!(tokens["spacing"]["8px"], json!(2));

    Ok(())
}

#[test]
fn test_directory_maps_each_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.css", ".a { margin: 4px; }")?;
    test.write_file("b/c.css", ".c { font-family: serif; }")?;
    test.write_file("b/readme.txt", "not css")?;

    let output = test.command().arg(".").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Extracted tokens from 2 CSS files"));

    let tokens = parse_output(&test, "tokens.json")?;
    let records = tokens.as_object().expect("directory output is a mapping");
    assert_eq!(records.len(), 2);
    let (_, c_record) = records
        .iter()
        .find(|(path, _)| path.ends_with("c.css"))
        .expect("c.css analyzed");
    assert_eq!(c_record["font_families"], json!(["serif"]));

    Ok(())
}

#[test]
fn test_invalid_path_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("is not a valid file or directory"));
    assert!(!test.has_file("tokens.json"));

    Ok(())
}

#[test]
fn test_output_flag_overrides_default() -> Result<()> {
    let test = CliTest::with_file("style.css", ".a { gap: 1rem; }")?;

    let output = test
        .command()
        .args(["style.css", "--output", "out/design.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("saved to out/design.json"));
    assert!(test.has_file("out/design.json"));
    assert!(!test.has_file("tokens.json"));

    Ok(())
}

#[test]
fn test_ignore_pattern_excludes_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site.css", ".a { width: 10px; }")?;
    test.write_file("vendor/reset.css", ".b { height: 1px; }")?;

    let output = test
        .command()
        .args([".", "--ignore", "**/vendor/**"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("1 CSS file "));

    let tokens = parse_output(&test, "tokens.json")?;
    assert!(!tokens.as_object().unwrap().keys().any(|k| k.contains("vendor")));

    Ok(())
}

#[test]
fn test_config_file_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".cssdigrc.json",
        r#"{ "ignores": ["generated"], "output": "design-tokens.json" }"#,
    )?;
    test.write_file("base.css", ".a { padding: 2px; }")?;
    test.write_file("generated/build.css", ".g { padding: 9px; }")?;

    let output = test.command().arg(".").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("saved to design-tokens.json"));

    let tokens = parse_output(&test, "design-tokens.json")?;
    let records = tokens.as_object().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records.keys().all(|k| k.ends_with("base.css")));

    Ok(())
}

#[test]
fn test_duplicate_declarations_stay_deduplicated() -> Result<()> {
    let css = "\
.a { font-family: serif; box-shadow: none; }
.b { font-family: serif; box-shadow: none; }
.c { font-family: serif; box-shadow: 0 0 1px #000; }
";
    let test = CliTest::with_file("style.css", css)?;

    let output = test.command().arg("style.css").output()?;
    assert_eq!(output.status.code(), Some(0));

    let tokens = parse_output(&test, "tokens.json")?;
    assert_eq!(tokens["font_families"], json!(["serif"]));
    assert_eq!(tokens["shadows"], json!(["none", "0 0 1px #000"]));

    Ok(())
}

#[test]
fn test_malformed_css_degrades_silently() -> Result<()> {
    let test = CliTest::with_file("broken.css", "this is not { css at all ;;; #zz")?;

    let output = test.command().arg("broken.css").output()?;

    assert_eq!(output.status.code(), Some(0));
    let tokens = parse_output(&test, "tokens.json")?;
    assert_eq!(tokens["css_variables"], json!({}));
    assert_eq!(tokens["colors"], json!({}));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--ignore"));

    Ok(())
}
