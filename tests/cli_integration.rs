/// End-to-end tests for the vc-audit binary
///
/// These run the compiled binary against the spreadsheet fixtures in
/// test-fixtures/ and inspect stdout, the exit status and the sample file.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Helper to get the test fixtures directory
fn fixtures_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures")
}

// Helper to run vc-audit with an input workbook and output path
fn run_audit(input: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vc-audit"))
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .arg("--no-color")
        .args(extra)
        .env_remove("VC_AUDIT_INPUT")
        .env_remove("VC_AUDIT_OUTPUT")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run vc-audit: {}", e))
}

fn read_sample(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("sample file should exist");
    serde_json::from_str(&content).expect("sample file should be valid JSON")
}

#[test]
fn test_fixtures_exist() {
    let fixtures = fixtures_dir();
    assert!(fixtures.join("audit-data.xlsx").exists());
    assert!(fixtures.join("required-only.xlsx").exists());
    assert!(fixtures.join("missing-members.xlsx").exists());
}

#[test]
fn test_full_workbook_report() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("audit_sample.json");
    let output = run_audit(&fixtures_dir().join("audit-data.xlsx"), &out_path, &[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert!(stdout.contains("Total VC Firms: 6\n"));
    assert!(stdout.contains("Total Team Members: 10\n"));
    assert!(stdout.contains("Total Portfolio Companies: 3\n"));
    assert!(stdout.contains("Extraction Metrics Available: Yes\n"));

    assert!(stdout.contains("Avg team members per firm: 1.7\n"));
    assert!(stdout.contains("Min team members: 1\n"));
    assert!(stdout.contains("Max team members: 3\n"));
    assert!(stdout.contains("LinkedIn URL coverage: 6/10 (60.0%)\n"));
    assert!(stdout.contains("Email coverage: 6/10 (60.0%)\n"));
    assert!(stdout.contains("Portfolio Companies coverage: 5/10 (50.0%)\n"));
    assert!(stdout.contains("Title coverage: 9/10 (90.0%)\n"));

    let tier1 = stdout.find("  Tier 1: 5 (50.0%)\n").expect("tier 1 line");
    let tier2 = stdout.find("  Tier 2: 3 (30.0%)\n").expect("tier 2 line");
    let tier3 = stdout.find("  Tier 3: 2 (20.0%)\n").expect("tier 3 line");
    assert!(tier1 < tier2 && tier2 < tier3);

    assert!(stdout.contains("Total unique firms: 6\n"));

    let sample = read_sample(&out_path);
    let firms = sample.as_array().unwrap();
    assert_eq!(firms.len(), 5);

    let mut names: Vec<&str> = firms.iter().map(|f| f["firm"].as_str().unwrap()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 5, "sampled firms must be distinct");

    for firm in firms {
        assert_eq!(firm["firm_data"]["companyName"], firm["firm"]);
        for member in firm["team_members"].as_array().unwrap() {
            assert_eq!(member["vcFirm"], firm["firm"]);
        }
    }
}

#[test]
fn test_same_seed_reproduces_sample() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    let input = fixtures_dir().join("audit-data.xlsx");

    assert!(run_audit(&input, &first, &["--seed", "42"]).status.success());
    assert!(run_audit(&input, &second, &["--seed", "42"]).status.success());

    assert_eq!(read_sample(&first), read_sample(&second));
}

#[test]
fn test_missing_optional_sheets_are_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("audit_sample.json");
    let output = run_audit(&fixtures_dir().join("required-only.xlsx"), &out_path, &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Total Portfolio Companies"));
    assert!(stdout.contains("Extraction Metrics Available: No\n"));

    let sample = read_sample(&out_path);
    assert_eq!(sample.as_array().unwrap().len(), 1);
    assert_eq!(sample[0]["firm"], "Acme VC");
    assert_eq!(sample[0]["website"], "https://acme.vc");
    assert_eq!(sample[0]["team_members"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_required_sheet_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("audit_sample.json");
    let output = run_audit(&fixtures_dir().join("missing-members.xlsx"), &out_path, &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Team Members"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("DATA OVERVIEW"));
    assert!(!out_path.exists());
}

#[test]
fn test_missing_input_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("audit_sample.json");
    let output = run_audit(&dir.path().join("does-not-exist.xlsx"), &out_path, &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    assert!(!out_path.exists());
}

#[test]
fn test_zero_sample_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("audit_sample.json");
    let output = run_audit(&fixtures_dir().join("audit-data.xlsx"), &out_path, &["--sample-size", "0"]);

    assert!(!output.status.success());
    assert!(!out_path.exists());
}
