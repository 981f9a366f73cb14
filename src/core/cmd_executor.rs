use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{
            location::{FetchPurpose, LocationMsg},
            Msg,
        },
    },
    infrastructure::{camera::CameraController, location::LocationProvider},
};

/// Command executor that bridges Elm commands to the location provider and camera.
///
/// Provider calls run on spawned tasks; their answers come back through the
/// message sender as [`Msg::Location`]. Concurrent requests are not merged.
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    location: Arc<dyn LocationProvider>,
    camera: Arc<dyn CameraController>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(
        msg_sender: mpsc::UnboundedSender<Msg>,
        location: Arc<dyn LocationProvider>,
        camera: Arc<dyn CameraController>,
    ) -> Self {
        Self {
            msg_sender,
            location,
            camera,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::RequestPermission => self.spawn_permission_request(),

            Cmd::FetchPosition { purpose } => self.spawn_position_fetch(purpose.clone()),

            Cmd::AnimateCamera {
                region,
                duration_ms,
            } => {
                self.camera
                    .animate_to(*region, Duration::from_millis(*duration_ms))?;
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    fn spawn_permission_request(&self) {
        let provider = Arc::clone(&self.location);
        let tx = self.msg_sender.clone();
        tokio::spawn(async move {
            let permission = provider.request_permission().await;
            if tx
                .send(Msg::Location(LocationMsg::PermissionResolved(permission)))
                .is_err()
            {
                log::warn!("CmdExecutor: runtime gone before permission resolved");
            }
        });
    }

    fn spawn_position_fetch(&self, purpose: FetchPurpose) {
        let provider = Arc::clone(&self.location);
        let tx = self.msg_sender.clone();
        tokio::spawn(async move {
            let msg = match provider.current_position().await {
                Ok(coordinates) => LocationMsg::PositionFetched {
                    purpose,
                    coordinates,
                    timestamp_ms: now_ms(),
                },
                Err(e) => LocationMsg::PositionFailed {
                    purpose,
                    reason: e.to_string(),
                },
            };
            if tx.send(Msg::Location(msg)).is_err() {
                log::warn!("CmdExecutor: runtime gone before position arrived");
            }
        });
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }
}

/// Wall clock in milliseconds since the Unix epoch, used to derive location ids
fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_tui_sender: bool,
}
