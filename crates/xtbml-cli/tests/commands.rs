//! End-to-end tests for the convert, list and show commands.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use xtbml_cli::commands::{run_convert, run_list, run_show};

fn document(identity: &str, name: &str, keyword: &str) -> String {
    format!(
        r#"<XTbML version="1.0">
  <ContentClassification>
    <TableIdentity>{identity}</TableIdentity>
    <ProviderName>Society of Actuaries</ProviderName>
    <ContentType tc="3">Annuitant Mortality</ContentType>
    <TableName>{name}</TableName>
    <KeyWord>{keyword}</KeyWord>
  </ContentClassification>
  <Table>
    <MetaData>
      <ScalingFactor>0</ScalingFactor>
      <Nation tc="US">United States</Nation>
      <AxisDef id="Age">
        <ScaleType tc="1">Age</ScaleType>
        <AxisName>AttainedAge</AxisName>
        <MinScaleValue>40</MinScaleValue>
        <MaxScaleValue>43</MaxScaleValue>
        <Increment>1</Increment>
      </AxisDef>
    </MetaData>
    <Values>
      <Axis>
        <Y t="40">0.0125</Y>
        <Y t="41">0.0131</Y>
        <Y t="42">0.0139</Y>
        <Y t="43"/>
      </Axis>
    </Values>
  </Table>
</XTbML>"#
    )
}

fn text(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

fn convert(src: &Path, dst: &Path) -> (String, String, bool) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let report = run_convert(src, dst, &mut out, &mut err).unwrap();
    (text(out), text(err), report.has_failures())
}

#[test]
fn convert_prints_each_converted_file() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("t1.xml"), document("1", "Alpha Table", "Aggregate")).unwrap();
    fs::write(src.path().join("t2.xml"), document("2", "Beta Table", "Select")).unwrap();

    let (out, err, failed) = convert(src.path(), dst.path());

    assert!(!failed);
    assert!(err.is_empty());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Converted t1.xml -> "));
    assert!(lines[0].ends_with("t1.json"));
    assert!(lines[1].starts_with("Converted t2.xml -> "));
    assert!(dst.path().join("t2.json").is_file());
}

#[test]
fn convert_reports_empty_source() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let (out, err, failed) = convert(src.path(), dst.path());

    assert!(!failed);
    assert!(err.is_empty());
    assert_eq!(out, "No XML files converted.\n");
}

#[test]
fn convert_prints_failures_to_err_and_keeps_going() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("a.xml"), "<XTbML><Table>").unwrap();
    fs::write(src.path().join("b.xml"), document("2", "Beta Table", "Select")).unwrap();

    let (out, err, failed) = convert(src.path(), dst.path());

    assert!(failed);
    assert!(out.starts_with("Converted b.xml -> "));
    assert!(err.starts_with("conversion failed: "));
    assert!(err.contains("a.xml"));
    assert!(!dst.path().join("a.json").exists());
}

#[test]
fn convert_missing_source_is_an_error() {
    let dst = TempDir::new().unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let missing = dst.path().join("missing");

    let result = run_convert(&missing, dst.path(), &mut out, &mut err);

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn list_filters_by_query() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("t1.xml"), document("1", "Alpha Table", "Aggregate")).unwrap();
    fs::write(src.path().join("t2.xml"), document("2", "Beta Table", "Select")).unwrap();
    convert(src.path(), dst.path());

    let mut out = Vec::new();
    let count = run_list(dst.path(), None, &mut out).unwrap();
    assert_eq!(count, 2);
    let listing = text(out);
    assert!(listing.contains("alpha_table"));
    assert!(listing.contains("beta_table"));

    let mut out = Vec::new();
    let count = run_list(dst.path(), Some("SELECT beta"), &mut out).unwrap();
    assert_eq!(count, 1);
    let listing = text(out);
    assert!(listing.contains("beta_table"));
    assert!(!listing.contains("alpha_table"));

    let mut out = Vec::new();
    let count = run_list(dst.path(), Some("gamma"), &mut out).unwrap();
    assert_eq!(count, 0);
    assert_eq!(text(out), "No converted tables found.\n");
}

#[test]
fn show_prints_classification_and_leading_rates() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    fs::write(src.path().join("t1.xml"), document("1", "Alpha Table", "Aggregate")).unwrap();
    convert(src.path(), dst.path());

    let mut out = Vec::new();
    run_show(&dst.path().join("t1.json"), 2, &mut out).unwrap();
    let shown = text(out);

    assert!(shown.contains("alpha_table"));
    assert!(shown.contains("Annuitant Mortality (3)"));
    assert!(shown.contains("Table 1 (4 rates)"));
    assert!(shown.contains("AttainedAge"));
    assert!(shown.contains("0.0125"));
    assert!(!shown.contains("0.0139"));
    assert!(shown.contains("... 2 more"));
}

#[test]
fn show_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    assert!(run_show(&dir.path().join("missing.json"), 5, &mut out).is_err());
}
