//! Settings merger.
//!
//! Writes a generated [`HookSet`] into the host application's `settings.json`
//! while leaving everything the tool does not own untouched:
//!
//! 1. Back up the existing file (if any) before anything else.
//! 2. Parse it as a generic JSON tree. A file that does not parse is never
//!    replaced.
//! 3. Under `"hooks"`, drop every managed event key and insert the new set.
//! 4. Write the document back through a temp file and rename.

use crate::errors::{MergeError, json_type_name};
use crate::hooks::{HookSet, ManagedHook};
use chrono::{DateTime, Local};
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Top-level key owned (in part) by this tool.
pub const HOOKS_KEY: &str = "hooks";

/// Result of a successful apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub settings_path: PathBuf,
    /// `None` when no settings file existed before the apply.
    pub backup_path: Option<PathBuf>,
}

/// Merge `hooks` into the settings file at `settings_path`.
pub fn apply(settings_path: &Path, hooks: &HookSet) -> Result<ApplyOutcome, MergeError> {
    apply_at(settings_path, hooks, Local::now())
}

/// [`apply`] with an explicit clock for the backup name.
pub fn apply_at(
    settings_path: &Path,
    hooks: &HookSet,
    now: DateTime<Local>,
) -> Result<ApplyOutcome, MergeError> {
    apply_with(settings_path, hooks, now, atomic_write)
}

/// [`apply_at`] with the final write step supplied by the caller.
fn apply_with<W>(
    settings_path: &Path,
    hooks: &HookSet,
    now: DateTime<Local>,
    write: W,
) -> Result<ApplyOutcome, MergeError>
where
    W: FnOnce(&Path, &[u8]) -> io::Result<()>,
{
    let backup_path = if settings_path.exists() {
        let backup = create_backup(settings_path, now).map_err(|source| MergeError::Backup {
            path: settings_path.to_path_buf(),
            source,
        })?;
        Some(backup)
    } else {
        debug!(path = %settings_path.display(), "No existing settings, skipping backup");
        None
    };

    let mut settings = read_settings(settings_path)?;
    merge_at(&mut settings, hooks, settings_path)?;

    let mut content = serde_json::to_string_pretty(&settings).map_err(MergeError::Serialize)?;
    content.push('\n');

    if let Some(parent) = settings_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| MergeError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    write(settings_path, content.as_bytes()).map_err(|source| MergeError::Write {
        path: settings_path.to_path_buf(),
        source,
    })?;

    info!(
        path = %settings_path.display(),
        backup = ?backup_path,
        hooks = hooks.iter().count(),
        "Applied sound hooks"
    );

    Ok(ApplyOutcome {
        settings_path: settings_path.to_path_buf(),
        backup_path,
    })
}

/// Read the settings document, or an empty object if the file is absent.
///
/// A file holding only whitespace is treated as empty.
pub fn read_settings(path: &Path) -> Result<Value, MergeError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(Value::Object(Map::new()));
        }
        Err(source) => {
            return Err(MergeError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        warn!(path = %path.display(), "Settings file is empty, starting from {{}}");
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(&content).map_err(|source| MergeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the managed hook keys of `settings` with `hooks`, in memory.
///
/// Keys outside the managed set are never touched.
pub fn merge_hooks(settings: &mut Value, hooks: &HookSet) -> Result<(), MergeError> {
    merge_at(settings, hooks, Path::new(""))
}

fn merge_at(settings: &mut Value, hooks: &HookSet, path: &Path) -> Result<(), MergeError> {
    let root = settings
        .as_object_mut()
        .ok_or_else(|| MergeError::NotAnObject {
            path: path.to_path_buf(),
        })?;

    let existing = root
        .entry(HOOKS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    let found = json_type_name(existing);
    let hooks_obj = existing
        .as_object_mut()
        .ok_or_else(|| MergeError::HooksNotAnObject {
            path: path.to_path_buf(),
            found,
        })?;

    for hook in ManagedHook::ALL {
        if hooks_obj.shift_remove(hook.event_name()).is_some() {
            debug!(event = hook.event_name(), "Removed previous managed hook");
        }
    }

    for (event, value) in hooks.to_json().map_err(MergeError::Serialize)? {
        hooks_obj.insert(event, value);
    }

    Ok(())
}

/// Path for a backup of `path` taken at `now`.
///
/// `settings.json` becomes `settings.json.backup_20240131_235959`. If that
/// name is taken, `_1`, `_2`, ... is appended.
pub fn backup_path_for(path: &Path, now: DateTime<Local>) -> PathBuf {
    let base = format!(
        "{}.backup_{}",
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "settings.json".to_string()),
        now.format("%Y%m%d_%H%M%S")
    );
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    let mut candidate = dir.join(&base);
    let mut counter = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{}_{}", base, counter));
        counter += 1;
    }
    candidate
}

/// Copy `path` verbatim to a timestamped sibling.
pub fn create_backup(path: &Path, now: DateTime<Local>) -> io::Result<PathBuf> {
    let backup_path = backup_path_for(path, now);
    fs::copy(path, &backup_path)?;
    debug!(backup = %backup_path.display(), "Created backup");
    Ok(backup_path)
}

/// Writes content to a file atomically using a temporary file.
///
/// A symlinked `path` is written through to its target, and an existing
/// file keeps its permissions.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if target != path {
        debug!(link = %path.display(), target = %target.display(), "Writing through symlink");
    }
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let parent = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp_path = parent.join(format!(".{}.tmp", Uuid::new_v4()));

    let result = (|| {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content)?;
        if let Some(permissions) = permissions {
            file.set_permissions(permissions)?;
        }
        file.sync_all()?;
        fs::rename(&temp_path, &target)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
