use serde::{Deserialize, Serialize};

use crate::{core::msg::location::FetchPurpose, domain::region::Region};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (location provider calls, camera moves, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    // Location provider
    RequestPermission,
    FetchPosition {
        purpose: FetchPurpose,
    },

    // Map surface
    AnimateCamera {
        region: Region,
        duration_ms: u64,
    },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::RequestPermission | Cmd::FetchPosition { .. } => true,

            Cmd::AnimateCamera { .. }
            | Cmd::Tui(..)
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::AnimateCamera { .. } => 0,

            // User-triggered fetches
            Cmd::FetchPosition { .. } => 1,

            Cmd::RequestPermission => 2,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }

    /// Short name used in execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::RequestPermission => "RequestPermission",
            Cmd::FetchPosition { .. } => "FetchPosition",
            Cmd::AnimateCamera { .. } => "AnimateCamera",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}
