use hook_sounds_common::catalog::PREVIEW_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A suites root on disk plus a scratch area for settings and logs.
pub struct SuiteTree {
    pub dir: TempDir,
    pub root: PathBuf,
    pub settings: PathBuf,
    pub logs: PathBuf,
}

impl SuiteTree {
    /// Empty root: no suite has its preview file.
    pub fn empty() -> Self {
        crate::test_log!("FIXTURE: Creating empty suite tree");

        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join("sounds");
        let settings = dir.path().join("home").join(".claude").join("settings.json");
        let logs = dir.path().join("logs");
        fs::create_dir_all(&root).expect("Failed to create suites root");

        Self {
            dir,
            root,
            settings,
            logs,
        }
    }

    /// Root with the default suite plus the given sub-directory suites.
    pub fn with_suites(dirs: &[&str]) -> Self {
        let tree = Self::empty();
        touch_preview(&tree.root);
        for sub in dirs {
            touch_preview(&tree.root.join(sub));
        }
        tree
    }
}

fn touch_preview(dir: &Path) {
    fs::create_dir_all(dir).expect("Failed to create suite dir");
    fs::write(dir.join(PREVIEW_FILE), b"RIFF").expect("Failed to write preview file");
}

/// The binary with the tree's paths and no inherited `HOOK_SOUNDS_*` config.
pub fn hook_sounds_command(tree: &SuiteTree) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hook-sounds"));
    for var in [
        "HOOK_SOUNDS_ROOT",
        "HOOK_SOUNDS_SETTINGS",
        "HOOK_SOUNDS_PLAYER",
        "HOOK_SOUNDS_PREVIEW_COOLDOWN",
        "HOOK_SOUNDS_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.arg("--root")
        .arg(&tree.root)
        .arg("--settings")
        .arg(&tree.settings)
        .env("HOOK_SOUNDS_LOG_DIR", &tree.logs);
    cmd
}
