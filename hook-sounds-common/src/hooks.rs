//! Hook generation for sound suites.
//!
//! Maps a chosen suite onto the ten host hook events this tool manages. The
//! output is pure data; writing it into the settings file is the job of
//! [`crate::settings`].
//!
//! Wire shape of one managed event:
//!
//! ```json
//! "PreToolUse": [
//!   { "hooks": [ { "type": "command", "command": "afplay /s/tool_start.wav &" } ] }
//! ]
//! ```

use crate::catalog::SoundSuite;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

/// The hook events owned by this tool.
///
/// Everything else under `"hooks"` in the settings file belongs to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ManagedHook {
    SessionStart,
    SessionEnd,
    ToolStart,
    ToolComplete,
    PromptSubmit,
    ResponseStart,
    ResponseEnd,
    SubagentDone,
    PrecompactWarning,
    Notification,
}

impl ManagedHook {
    /// All managed hooks in generation order.
    pub const ALL: [ManagedHook; 10] = [
        ManagedHook::SessionStart,
        ManagedHook::SessionEnd,
        ManagedHook::ToolStart,
        ManagedHook::ToolComplete,
        ManagedHook::PromptSubmit,
        ManagedHook::ResponseStart,
        ManagedHook::ResponseEnd,
        ManagedHook::SubagentDone,
        ManagedHook::PrecompactWarning,
        ManagedHook::Notification,
    ];

    /// Internal identifier, also the stem of the suite's sound file.
    pub fn file_stem(self) -> &'static str {
        match self {
            ManagedHook::SessionStart => "session_start",
            ManagedHook::SessionEnd => "session_end",
            ManagedHook::ToolStart => "tool_start",
            ManagedHook::ToolComplete => "tool_complete",
            ManagedHook::PromptSubmit => "prompt_submit",
            ManagedHook::ResponseStart => "response_start",
            ManagedHook::ResponseEnd => "response_end",
            ManagedHook::SubagentDone => "subagent_done",
            ManagedHook::PrecompactWarning => "precompact_warning",
            ManagedHook::Notification => "notification",
        }
    }

    /// Event name used as the key under `"hooks"` in the settings file.
    pub fn event_name(self) -> &'static str {
        match self {
            ManagedHook::SessionStart => "SessionStart",
            ManagedHook::SessionEnd => "SessionEnd",
            ManagedHook::ToolStart => "PreToolUse",
            ManagedHook::ToolComplete => "PostToolUse",
            ManagedHook::PromptSubmit => "UserPromptSubmit",
            ManagedHook::ResponseStart => "ResponseStart",
            ManagedHook::ResponseEnd => "ResponseEnd",
            ManagedHook::SubagentDone => "SubagentStop",
            ManagedHook::PrecompactWarning => "PreCompact",
            ManagedHook::Notification => "Notification",
        }
    }

    pub fn description(self) -> &'static str {
        description_for(self.file_stem())
    }

    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.event_name() == name)
    }

    /// Whether `key` under `"hooks"` is owned by this tool.
    pub fn is_managed_event(key: &str) -> bool {
        Self::from_event_name(key).is_some()
    }
}

impl std::fmt::Display for ManagedHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}

/// Human-readable description for a hook identifier.
///
/// Unknown identifiers yield an empty string.
pub fn description_for(file_stem: &str) -> &'static str {
    match file_stem {
        "session_start" => "Plays when a Claude Code session starts",
        "session_end" => "Plays when a Claude Code session ends",
        "tool_start" => "Plays when a tool begins execution",
        "tool_complete" => "Plays when a tool finishes execution",
        "prompt_submit" => "Plays when user submits a prompt",
        "response_start" => "Plays when Claude starts responding",
        "response_end" => "Plays when Claude finishes responding",
        "subagent_done" => "Plays when a subagent completes its task",
        "precompact_warning" => "Plays before context window compaction",
        "notification" => "General notification sound",
        _ => "",
    }
}

/// Platform the generated commands will run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPlatform {
    Windows,
    Unix,
}

impl TargetPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            TargetPlatform::Windows
        } else {
            TargetPlatform::Unix
        }
    }
}

/// One generated hook: the shell command and what it is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEntry {
    pub command: String,
    pub description: &'static str,
}

/// Inner hook object as the host application reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHook {
    #[serde(rename = "type")]
    pub kind: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Element of a managed event's array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookGroup {
    pub hooks: Vec<CommandHook>,
}

impl HookEntry {
    /// The value stored under this hook's event name.
    pub fn to_groups(&self) -> Vec<HookGroup> {
        vec![HookGroup {
            hooks: vec![CommandHook {
                kind: "command".to_string(),
                command: self.command.clone(),
                name: None,
            }],
        }]
    }
}

/// The full set of generated hooks, one per [`ManagedHook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSet {
    entries: Vec<(ManagedHook, HookEntry)>,
}

impl HookSet {
    pub fn get(&self, hook: ManagedHook) -> Option<&HookEntry> {
        self.entries
            .iter()
            .find(|(h, _)| *h == hook)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ManagedHook, &HookEntry)> {
        self.entries.iter().map(|(h, entry)| (*h, entry))
    }

    /// Serialize to the object stored under `"hooks"`, keyed by event name.
    pub fn to_json(&self) -> Result<Map<String, Value>, serde_json::Error> {
        self.iter()
            .map(|(hook, entry)| {
                let value = serde_json::to_value(entry.to_groups())?;
                Ok((hook.event_name().to_string(), value))
            })
            .collect()
    }
}

/// Generate the hook set for `suite`.
///
/// `player` is the audio player executable used on Unix targets. The output
/// depends only on the arguments.
pub fn generate(suite: &SoundSuite, player: &str, platform: TargetPlatform) -> HookSet {
    let entries = ManagedHook::ALL
        .into_iter()
        .map(|hook| {
            let sound = sound_file_for(suite, hook, platform);
            let command = match platform {
                TargetPlatform::Windows => windows_command(&sound),
                TargetPlatform::Unix => unix_command(player, &sound),
            };
            debug!(hook = %hook, %command, "Generated hook command");
            (
                hook,
                HookEntry {
                    command,
                    description: hook.description(),
                },
            )
        })
        .collect();

    HookSet { entries }
}

/// Sound file path for a hook, formatted for the target shell.
pub fn sound_file_for(suite: &SoundSuite, hook: ManagedHook, platform: TargetPlatform) -> String {
    let path = suite.sound_path(hook).to_string_lossy().into_owned();
    match platform {
        TargetPlatform::Windows => path.replace('/', "\\"),
        TargetPlatform::Unix => path,
    }
}

fn windows_command(sound: &str) -> String {
    format!(
        "powershell -c (New-Object Media.SoundPlayer '{}').PlaySync();",
        sound.replace('\'', "''")
    )
}

fn unix_command(player: &str, sound: &str) -> String {
    format!(
        "{} {} &",
        shell_escape::unix::escape(Cow::Borrowed(player)),
        shell_escape::unix::escape(Cow::Borrowed(sound))
    )
}
