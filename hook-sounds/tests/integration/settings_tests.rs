use crate::common::{SuiteTree, assert_path_exists, init_test_logging};
use hook_sounds_common::{ManagedHook, TargetPlatform, apply, generate, scan};
use serde_json::{Value, json};
use std::fs;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read settings")).expect("parse settings")
}

#[test]
fn test_scan_generate_apply_round() {
    init_test_logging();
    crate::test_log!("TEST START: test_scan_generate_apply_round");

    let tree = SuiteTree::with_suites(&["drift", "void"]);
    let suites = scan(&tree.root);
    let names: Vec<&str> = suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Terminal Native (Default)", "Drift", "Void"]);

    fs::create_dir_all(tree.settings.parent().unwrap()).unwrap();
    let original = r#"{
  "model": "opus",
  "hooks": {
    "Stop": [{"hooks": [{"type": "command", "command": "notify-send done"}]}],
    "SessionStart": [{"hooks": [{"type": "command", "command": "old-player old.wav &"}]}]
  }
}
"#;
    fs::write(&tree.settings, original).unwrap();

    let drift = &suites[1];
    let hooks = generate(drift, "aplay", TargetPlatform::Unix);
    let outcome = apply(&tree.settings, &hooks).expect("apply drift");

    let backup = outcome.backup_path.expect("backup expected");
    assert_path_exists(&backup);
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);

    let settings = read_json(&tree.settings);
    assert_eq!(settings["model"], json!("opus"));
    assert_eq!(
        settings["hooks"]["Stop"][0]["hooks"][0]["command"],
        json!("notify-send done")
    );
    let hooks_obj = settings["hooks"].as_object().unwrap();
    assert_eq!(hooks_obj.len(), ManagedHook::ALL.len() + 1);

    let session_start = settings["hooks"]["SessionStart"][0]["hooks"][0]["command"]
        .as_str()
        .unwrap();
    assert!(session_start.starts_with("aplay "), "{session_start}");
    assert!(session_start.contains("drift"), "{session_start}");
    assert!(session_start.ends_with("session_start.wav &"), "{session_start}");

    crate::test_log!("TEST PASS: test_scan_generate_apply_round");
}

#[test]
fn test_switching_suites_replaces_only_managed_hooks() {
    init_test_logging();
    crate::test_log!("TEST START: test_switching_suites_replaces_only_managed_hooks");

    let tree = SuiteTree::with_suites(&["drift", "void"]);
    let suites = scan(&tree.root);

    let first = apply(&tree.settings, &generate(&suites[1], "paplay", TargetPlatform::Unix))
        .expect("apply drift");
    assert!(first.backup_path.is_none());

    let second = apply(&tree.settings, &generate(&suites[2], "paplay", TargetPlatform::Unix))
        .expect("apply void");
    assert!(second.backup_path.is_some());

    let settings = read_json(&tree.settings);
    let hooks_obj = settings["hooks"].as_object().unwrap();
    assert_eq!(hooks_obj.len(), ManagedHook::ALL.len());
    for (_, groups) in hooks_obj {
        let command = groups[0]["hooks"][0]["command"].as_str().unwrap();
        assert!(command.contains("void"), "{command}");
        assert!(!command.contains("drift"), "{command}");
    }

    crate::test_log!("TEST PASS: test_switching_suites_replaces_only_managed_hooks");
}

#[test]
fn test_corrupt_settings_are_left_alone() {
    init_test_logging();
    crate::test_log!("TEST START: test_corrupt_settings_are_left_alone");

    let tree = SuiteTree::with_suites(&[]);
    fs::create_dir_all(tree.settings.parent().unwrap()).unwrap();
    fs::write(&tree.settings, "{ not json").unwrap();

    let suites = scan(&tree.root);
    let err = apply(&tree.settings, &generate(&suites[0], "afplay", TargetPlatform::Unix))
        .expect_err("corrupt settings must fail");
    assert!(err.to_string().contains("failed to parse"), "{err}");
    assert_eq!(fs::read_to_string(&tree.settings).unwrap(), "{ not json");

    crate::test_log!("TEST PASS: test_corrupt_settings_are_left_alone");
}
