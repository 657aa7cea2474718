//! Scripted input for headless runs.
//!
//! A script holds key spans (`from_tick..to_tick`, end exclusive) and player
//! commands pinned to a tick. Tick numbers count the ticks already run, so
//! tick 0 is the very first step.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skyraid_core::commands::PlayerCommand;
use skyraid_core::input::{InputState, Key};
use skyraid_core::{Result, SkyraidError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputScript {
    pub spans: Vec<InputSpan>,
    pub commands: Vec<ScriptedCommand>,
}

/// Keys held for a range of ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSpan {
    pub from_tick: u64,
    pub to_tick: u64,
    pub keys: Vec<Key>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedCommand {
    pub tick: u64,
    pub command: PlayerCommand,
}

impl InputScript {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let script: InputScript = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        match self.spans.iter().find(|s| s.from_tick > s.to_tick) {
            Some(span) => Err(SkyraidError::InvalidConfig(format!(
                "input span ends before it starts ({}..{})",
                span.from_tick, span.to_tick
            ))),
            None => Ok(()),
        }
    }

    /// Keys held at `tick`; overlapping spans combine.
    pub fn input_at(&self, tick: u64) -> InputState {
        self.spans
            .iter()
            .filter(|s| (s.from_tick..s.to_tick).contains(&tick))
            .fold(InputState::default(), |held, s| {
                held.merge(InputState::from_keys(&s.keys))
            })
    }

    /// Commands to queue before running `tick`, in script order.
    pub fn commands_at(&self, tick: u64) -> impl Iterator<Item = &PlayerCommand> + '_ {
        self.commands
            .iter()
            .filter(move |c| c.tick == tick)
            .map(|c| &c.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{
        "spans": [
            { "from_tick": 0, "to_tick": 10, "keys": ["left"] },
            { "from_tick": 5, "to_tick": 6, "keys": ["fire", "up"] }
        ],
        "commands": [
            { "tick": 20, "command": { "type": "Pause" } },
            { "tick": 30, "command": { "type": "SetTimeScale", "scale": 2.0 } }
        ]
    }"#;

    #[test]
    fn test_spans_combine_and_end_exclusive() {
        let script = InputScript::from_json_str(SCRIPT).unwrap();
        assert_eq!(script.input_at(0), InputState::from_keys(&[Key::Left]));
        assert_eq!(
            script.input_at(5),
            InputState::from_keys(&[Key::Left, Key::Fire, Key::Up])
        );
        assert_eq!(script.input_at(6), InputState::from_keys(&[Key::Left]));
        assert_eq!(script.input_at(10), InputState::default());
    }

    #[test]
    fn test_commands_are_pinned_to_ticks() {
        let script = InputScript::from_json_str(SCRIPT).unwrap();
        assert!(matches!(
            script.commands_at(20).collect::<Vec<_>>().as_slice(),
            [PlayerCommand::Pause]
        ));
        assert_eq!(script.commands_at(21).count(), 0);
    }

    #[test]
    fn test_empty_script_holds_nothing() {
        let script = InputScript::from_json_str("{}").unwrap();
        assert_eq!(script.input_at(0), InputState::default());
    }

    #[test]
    fn test_backwards_span_is_rejected() {
        let json = r#"{ "spans": [ { "from_tick": 9, "to_tick": 3, "keys": [] } ] }"#;
        assert!(matches!(
            InputScript::from_json_str(json),
            Err(SkyraidError::InvalidConfig(_))
        ));
    }
}
