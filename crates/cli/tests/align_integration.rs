//! End-to-end CLI tests: spawn the binary against real files in a temp dir.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn jalign(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jalign"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to spawn jalign")
}

fn write_csv_pair(dir: &Path, journals: &str, abbrevs: &str) {
    fs::write(dir.join("journals.csv"), journals).unwrap();
    fs::write(dir.join("abbreviations.csv"), abbrevs).unwrap();
}

const CSV_PAIR_CONFIG: &str = r#"
name = "CSV pair"
mode = "ratio"

[input]
file = "journals.csv"
abbreviations_file = "abbreviations.csv"

[output]
file = "report.csv"
"#;

#[test]
fn consistent_lists_exit_zero() {
    let dir = tempdir().unwrap();
    write_csv_pair(
        dir.path(),
        "ID,Journal Name,Impact Factor\n1,PLOS ONE,3.75\n",
        "Journal Name,Abbreviation_1\nplos one,PO\n",
    );
    fs::write(dir.path().join("align.toml"), CSV_PAIR_CONFIG).unwrap();

    let out = jalign(&["run", "align.toml"], dir.path());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(out.status.code(), Some(0), "stderr: {stderr}");
    assert!(stderr.contains("1 exact"), "stderr: {stderr}");

    // Report exists but holds only the header
    let report = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    assert_eq!(report.lines().count(), 1);
}

#[test]
fn discrepant_lists_exit_one_and_report() {
    let dir = tempdir().unwrap();
    write_csv_pair(
        dir.path(),
        "ID,Journal Name,Impact Factor\n1,Nature Meddicine,82.9\n",
        "Journal Name,Abbreviation_1\nnature medicine,Nat. Med.\n",
    );
    fs::write(dir.path().join("align.toml"), CSV_PAIR_CONFIG).unwrap();

    let out = jalign(&["run", "align.toml"], dir.path());
    assert_eq!(out.status.code(), Some(1));

    let report = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    assert!(report.contains("nature meddicine,nature medicine,"));
}

#[test]
fn json_output_carries_the_result() {
    let dir = tempdir().unwrap();
    write_csv_pair(
        dir.path(),
        "ID,Journal Name,Impact Factor\n1,Cell,64.5\n",
        "Journal Name,Abbreviation_1\ncell,C\n",
    );
    fs::write(dir.path().join("align.toml"), CSV_PAIR_CONFIG).unwrap();

    let out = jalign(&["run", "align.toml", "--json"], dir.path());
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["meta"]["mode"], "ratio");
    assert_eq!(json["summary"]["exact"], 1);
    assert_eq!(json["aligned"][0]["journal_name"], "Cell");
}

#[test]
fn distance_mode_merges_workbook_sheets() {
    let dir = tempdir().unwrap();
    let workbook_path = dir.path().join("Lab1.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    {
        let ws = workbook.add_worksheet().set_name("sheet1").unwrap();
        ws.write_string(0, 0, "ID").unwrap();
        ws.write_string(0, 1, "Journal Name").unwrap();
        ws.write_string(0, 2, "Impact Factor").unwrap();
        ws.write_number(1, 0, 1.0).unwrap();
        ws.write_string(1, 1, "Journal of Physics A").unwrap();
        ws.write_number(1, 2, 2.1).unwrap();
        ws.write_number(2, 0, 2.0).unwrap();
        ws.write_string(2, 1, "Nature Medicine").unwrap();
        ws.write_number(2, 2, 82.9).unwrap();
    }
    {
        let ws = workbook.add_worksheet().set_name("sheet2").unwrap();
        ws.write_string(0, 0, "Journal Name").unwrap();
        ws.write_string(0, 1, "Abbreviation_1").unwrap();
        ws.write_string(1, 0, "journal of physics").unwrap();
        ws.write_string(1, 1, "J. Phys.").unwrap();
        ws.write_string(2, 0, "nature medicine").unwrap();
        ws.write_string(2, 1, "Nat. Med.").unwrap();
    }
    workbook.save(&workbook_path).unwrap();

    fs::write(
        dir.path().join("align.toml"),
        r#"
name = "Merge"
mode = "distance"

[input]
file = "Lab1.xlsx"

[output]
file = "merged.xlsx"
"#,
    )
    .unwrap();

    let out = jalign(&["run", "align.toml"], dir.path());
    let stderr = String::from_utf8_lossy(&out.stderr);
    // physics pair is fuzzy (distance 2), nature medicine exact: all aligned
    assert_eq!(out.status.code(), Some(0), "stderr: {stderr}");
    assert!(stderr.contains("1 exact"), "stderr: {stderr}");
    assert!(stderr.contains("1 fuzzy"), "stderr: {stderr}");
    assert!(dir.path().join("merged.xlsx").exists());
}

#[test]
fn validate_accepts_and_rejects() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.toml"), CSV_PAIR_CONFIG).unwrap();
    fs::write(
        dir.path().join("bad.toml"),
        "name = \"Bad\"\nmode = \"soundex\"\n\n[input]\nfile = \"x.xlsx\"\n",
    )
    .unwrap();

    let out = jalign(&["validate", "good.toml"], dir.path());
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("valid"));

    let out = jalign(&["validate", "bad.toml"], dir.path());
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn missing_workbook_is_runtime_error() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("align.toml"),
        r#"
name = "Missing"
mode = "ratio"

[input]
file = "nope.xlsx"
"#,
    )
    .unwrap();

    let out = jalign(&["run", "align.toml"], dir.path());
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
}
