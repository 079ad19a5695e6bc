use crate::common::{
    SuiteTree, assert_contains, assert_path_exists, hook_sounds_command, init_test_logging,
};
use hook_sounds_common::logging::LOG_FILE_NAME;

#[test]
fn test_help_lists_options() {
    init_test_logging();
    crate::test_log!("TEST START: test_help_lists_options");

    let tree = SuiteTree::empty();
    let output = hook_sounds_command(&tree)
        .arg("--help")
        .output()
        .expect("Failed to run hook-sounds --help");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--root", "--settings", "--player", "--preview-cooldown", "--verbose"] {
        assert_contains(&stdout, flag);
    }

    crate::test_log!("TEST PASS: test_help_lists_options");
}

#[test]
fn test_unknown_player_override_exits_with_error() {
    init_test_logging();
    crate::test_log!("TEST START: test_unknown_player_override_exits_with_error");

    let tree = SuiteTree::with_suites(&["drift"]);
    let output = hook_sounds_command(&tree)
        .args(["--player", "no-such-player-hook-sounds-test"])
        .output()
        .expect("Failed to run hook-sounds");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "no-such-player-hook-sounds-test");
    assert_contains(&stderr, "was not found on PATH");
    assert!(!tree.settings.exists(), "settings must not be created");

    crate::test_log!("TEST PASS: test_unknown_player_override_exits_with_error");
}

#[cfg(unix)]
#[test]
fn test_empty_root_exits_with_error() {
    init_test_logging();
    crate::test_log!("TEST START: test_empty_root_exits_with_error");

    let tree = SuiteTree::empty();
    let output = hook_sounds_command(&tree)
        .args(["--player", "sh", "--verbose"])
        .output()
        .expect("Failed to run hook-sounds");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "No sound suites found");
    assert_contains(&stderr, &tree.root.display().to_string());
    assert!(output.stdout.is_empty(), "no UI output expected");
    assert!(!tree.settings.exists(), "settings must not be created");

    assert_path_exists(&tree.logs.join(LOG_FILE_NAME));

    crate::test_log!("TEST PASS: test_empty_root_exits_with_error");
}

#[test]
fn test_invalid_cooldown_is_rejected() {
    init_test_logging();
    crate::test_log!("TEST START: test_invalid_cooldown_is_rejected");

    let tree = SuiteTree::with_suites(&[]);
    let output = hook_sounds_command(&tree)
        .args(["--preview-cooldown", "whenever"])
        .output()
        .expect("Failed to run hook-sounds");

    assert!(!output.status.success());
    assert_contains(&String::from_utf8_lossy(&output.stderr), "--preview-cooldown");

    crate::test_log!("TEST PASS: test_invalid_cooldown_is_rejected");
}

#[cfg(target_os = "linux")]
#[test]
fn test_removed_working_dir_exits_with_error() {
    use std::process::Command;

    init_test_logging();
    crate::test_log!("TEST START: test_removed_working_dir_exits_with_error");

    let tree = SuiteTree::with_suites(&[]);
    let doomed = tree.dir.path().join("doomed");
    std::fs::create_dir_all(&doomed).unwrap();

    // Enter the directory, remove it, then start the binary without --root.
    let output = Command::new("sh")
        .arg("-c")
        .arg(r#"cd "$1" && rmdir "$1" && exec "$2" --player sh --settings "$3""#)
        .arg("sh")
        .arg(&doomed)
        .arg(env!("CARGO_BIN_EXE_hook-sounds"))
        .arg(&tree.settings)
        .env_remove("HOOK_SOUNDS_ROOT")
        .env("HOOK_SOUNDS_LOG_DIR", &tree.logs)
        .output()
        .expect("Failed to run hook-sounds");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_contains(&stderr, "Could not determine the current directory");
    assert_contains(&stderr, "--root");
    assert!(!tree.settings.exists(), "settings must not be created");

    crate::test_log!("TEST PASS: test_removed_working_dir_exits_with_error");
}
