use assert_cmd::Command;
use predicates::prelude::*;

fn feynman() -> Command {
    let mut cmd = Command::cargo_bin("feynman").unwrap();
    cmd.env("FEYNMAN_CONFIG", "/nonexistent/feynman/config.toml")
        .env("NO_COLOR", "1")
        .env_remove("FEYNMAN_TABLE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn classify_outputs_json_report() {
    let output = feynman()
        .args(["--output", "json", "classify", "e+ e- -> mu+ mu-"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["violations"].as_array().unwrap().len(), 0);
    assert_eq!(report["interactions"]["em"]["initial_pairs"][0][0], "positron");
    assert_eq!(report["interactions"]["em"]["final_pairs"][0][0], "antimuon");
}

#[test]
fn classify_accepts_separate_words() {
    feynman()
        .args(["classify", "n", "->", "p", "e-", "nu_e~"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flavor change"))
        .stdout(predicate::str::contains("All interacting particles classified"));
}

#[test]
fn validate_allowed_reaction() {
    feynman()
        .args(["validate", "mu- -> e- nu_e~ nu_mu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Process ALLOWED"));
}

#[test]
fn validate_forbidden_reaction_exits_with_one() {
    feynman()
        .args(["validate", "sigma0 -> lambda0 pi0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FORBIDDEN due to mass conservation"));
}

#[test]
fn unknown_symbol_is_reported() {
    feynman()
        .args(["validate", "e- -> selectron"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown particle symbol 'selectron'"));
}

#[test]
fn missing_arrow_fails() {
    feynman()
        .args(["classify", "e- e+"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'->'"));
}

#[test]
fn particles_filtered_by_category() {
    let output = feynman()
        .args(["--output", "json", "particles", "--category", "lepton"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().any(|row| row["symbol"] == "e-"));
    assert!(rows.iter().all(|row| row["category"] == "lepton"));
}

#[test]
fn config_shows_defaults() {
    feynman()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("check_mass: true"))
        .stdout(predicate::str::contains("skip_forbidden: false"));
}

#[test]
fn diagram_writes_tex_source() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("diagrams");

    feynman()
        .args(["diagram", "--out"])
        .arg(&out)
        .args(["--name", "ee_mumu", "e+ e- -> mu+ mu-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ee_mumu.tex"));

    let tex = std::fs::read_to_string(out.join("ee_mumu.tex")).unwrap();
    for symbol in ["e^+", "e^-", r"\mu^+", r"\mu^-", r"\gamma"] {
        assert!(tex.contains(symbol), "missing {} in\n{}", symbol, tex);
    }
    assert!(tex.contains(r"\usepackage[compat=1.1.0]{tikz-feynman}"));
}

#[test]
fn diagram_json_lists_written_files() {
    let dir = tempfile::tempdir().unwrap();

    let output = feynman()
        .args(["--output", "json", "diagram", "--out"])
        .arg(dir.path())
        .arg("n -> p e- nu_e~")
        .output()
        .unwrap();
    assert!(output.status.success());

    let written: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(written["tex"].as_str().unwrap().ends_with("diagram.tex"));
    assert!(written.get("pdf").is_none());
    assert!(dir.path().join("diagram.tex").exists());
}
