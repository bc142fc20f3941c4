use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn habitual() -> Command {
    Command::cargo_bin("habitual").unwrap()
}

// ---------------------------------------------------------------------------
// habitual catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_list_shows_builtin_records() {
    habitual()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doodle-lunch"))
        .stdout(predicate::str::contains("commute-podcast"));
}

#[test]
fn catalog_list_json_is_valid() {
    let out = habitual()
        .args(["catalog", "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
}

#[test]
fn catalog_show_known_id() {
    habitual()
        .args(["catalog", "show", "one-leg-brush"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stand on one leg"))
        .stdout(predicate::str::contains("movement"));
}

#[test]
fn catalog_show_unknown_id_fails() {
    habitual()
        .args(["catalog", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        r#"
- id: tiny-stretch
  title: Stretch while the kettle boils
  description: Reach for the ceiling until the water is ready
  duration: 1 min
  science_note: Brief stretching improves circulation
  category: movement
  personality_tags: [methodical]
  goal_tags: [move_more]
"#,
    )
    .unwrap();

    habitual()
        .args(["--catalog", path.to_str().unwrap(), "catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tiny-stretch"));
}

#[test]
fn catalog_file_with_duplicate_ids_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    let record = r#"
- id: dup
  title: t
  description: d
  duration: 1 min
  science_note: s
  category: mindfulness
  personality_tags: [analytical]
  goal_tags: [reduce_stress]
"#;
    std::fs::write(&path, format!("{record}{}", record.trim_start_matches('\n'))).unwrap();

    habitual()
        .args(["--catalog", path.to_str().unwrap(), "catalog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}

// ---------------------------------------------------------------------------
// habitual match
// ---------------------------------------------------------------------------

#[test]
fn match_creative_profile() {
    habitual()
        .args([
            "match",
            "--personality",
            "creative",
            "--goal",
            "be_more_creative",
            "--preference",
            "lunch_breaks",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("doodle-lunch"))
        .stdout(predicate::str::contains("thursday-text"));
}

#[test]
fn match_json_splits_current_and_suggested() {
    let out = habitual()
        .args([
            "match",
            "--json",
            "--personality",
            "analytical",
            "--goal",
            "reduce_stress",
            "--preference",
            "morning_coffee",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed["current"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["suggested"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["suggested"][0]["id"], "commute-podcast");
}

#[test]
fn match_requires_a_goal_and_a_preference() {
    habitual()
        .args(["match", "--personality", "creative"])
        .assert()
        .failure();

    habitual()
        .args([
            "match",
            "--personality",
            "creative",
            "--goal",
            "be_more_creative",
        ])
        .assert()
        .failure();
}

#[test]
fn match_rejects_unknown_personality() {
    habitual()
        .args([
            "match",
            "--personality",
            "chaotic",
            "--goal",
            "move_more",
            "--preference",
            "commuting",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chaotic"));
}

#[test]
fn match_accepts_goal_labels() {
    habitual()
        .args([
            "match",
            "--personality",
            "methodical",
            "--goal",
            "Move more",
            "--preference",
            "Before bed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("one-leg-brush"));
}
