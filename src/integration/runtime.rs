use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::{
        camera::CameraController, location::LocationProvider,
        tui::text_field_engine::TuiTextFieldEngine,
    },
};

/// Message loop around the pure update function.
///
/// Raw terminal events are translated first, then domain messages are folded
/// into the state in arrival order, and the resulting commands are queued for
/// the executor.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects; commands stay queued
    pub fn new(initial_state: AppState) -> Self {
        static ENGINE: TuiTextFieldEngine = TuiTextFieldEngine;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_field: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands reach the given provider and camera
    pub fn new_with_executor(
        initial_state: AppState,
        location: Arc<dyn LocationProvider>,
        camera: Arc<dyn CameraController>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(
            runtime.msg_tx.clone(),
            location,
            camera,
        ));
        runtime
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use new_with_executor() first.".to_string())
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.clone() else {
            return Err("No command executor available. Use new_with_executor().".to_string());
        };

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) =
            update_with_context(msg, std::mem::take(&mut self.state), &self.ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // First process raw messages and convert to domain messages
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate_and_process(raw_msg, &mut all_commands);
        }

        // Process raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate_and_process(raw_msg, &mut all_commands);
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Process domain messages from spawned provider tasks
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    // Each raw event sees the state left by the previous one, so a key that
    // opens the form makes the next key a text edit
    fn translate_and_process(&mut self, raw_msg: RawMsg, all_commands: &mut Vec<Cmd>) {
        for msg in translate_raw_to_domain(raw_msg, &self.state) {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Wait for the next message from a provider task and queue it
    pub async fn await_message(&mut self) -> Option<()> {
        let msg = self.msg_rx.recv().await?;
        self.msg_queue.push_back(msg);
        Some(())
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            saved_locations: self.state.store.len(),
            pending_fetches: self.state.system.pending_fetches,
            is_form_open: self.state.form.is_open(),
            is_list_open: self.state.list.is_open(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub saved_locations: usize,
    pub pending_fetches: usize,
    pub is_form_open: bool,
    pub is_list_open: bool,
    pub has_executor: bool,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{
            form::FormMsg,
            location::{FetchPurpose, LocationMsg},
            system::SystemMsg,
        },
        domain::{
            location::{Coordinates, Permission},
            region::Region,
        },
        infrastructure::config::Config,
        test_helpers::{RecordingCamera, StubLocationProvider},
    };

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::new_with_config(Config::embedded().unwrap()))
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_process_message_queues_commands() {
        let mut runtime = create_test_runtime();
        let cmds = runtime.process_message(Msg::System(SystemMsg::Started));

        assert_eq!(cmds, vec![Cmd::RequestPermission]);
        assert_eq!(runtime.get_stats().queued_commands, 1);
        assert_eq!(runtime.pending_commands(), vec![Cmd::RequestPermission]);
        assert_eq!(runtime.get_stats().queued_commands, 0);
    }

    #[test]
    fn test_raw_keys_type_into_form() {
        let mut runtime = create_test_runtime();
        for raw in [
            key(KeyCode::Char('a')),
            key(KeyCode::Char('D')),
            key(KeyCode::Char('o')),
            key(KeyCode::Char('r')),
            key(KeyCode::Char('m')),
        ] {
            runtime.send_raw_msg(raw);
        }

        runtime.process_all_messages();

        assert!(runtime.state().form.is_open());
        assert_eq!(runtime.state().form.title().content, "Dorm");
    }

    #[test]
    fn test_enter_in_form_queues_fetch() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Form(FormMsg::Open));
        runtime.send_msg(Msg::Form(FormMsg::SetTitle("Dorm".into())));
        runtime.process_all_messages();
        runtime.send_raw_msg(key(KeyCode::Enter));

        let cmds = runtime.process_all_messages();

        assert!(matches!(
            cmds.as_slice(),
            [Cmd::FetchPosition {
                purpose: FetchPurpose::SaveDraft(_)
            }]
        ));
        assert_eq!(runtime.get_stats().pending_fetches, 1);
    }

    #[test]
    fn test_raw_sender_feeds_translation() {
        let mut runtime = create_test_runtime();
        let tx = runtime.get_raw_sender();
        tx.send(key(KeyCode::Char('a'))).unwrap();
        tx.send(RawMsg::Paste("Night market".into())).unwrap();

        runtime.process_all_messages();

        assert_eq!(runtime.state().form.title().content, "Night market");
    }

    #[test]
    fn test_execute_without_executor_fails() {
        let mut runtime = create_test_runtime();
        assert!(runtime.execute_pending_commands().is_err());
        assert!(runtime.add_tui_sender(mpsc::unbounded_channel().0).is_err());
    }

    #[tokio::test]
    async fn test_startup_permission_round_trip() {
        let provider = StubLocationProvider::denied();
        let mut runtime = Runtime::new_with_executor(
            AppState::new(),
            Arc::new(provider.clone()),
            Arc::new(RecordingCamera::new()),
        );

        runtime.send_msg(Msg::System(SystemMsg::Started));
        runtime.run_update_cycle().unwrap();
        tokio::time::timeout(Duration::from_secs(1), runtime.await_message())
            .await
            .unwrap();
        runtime.process_all_messages();

        assert_eq!(provider.permission_requests(), 1);
        assert_eq!(runtime.state().system.permission, Some(Permission::Denied));
        assert!(runtime.state().alerts.is_showing());
    }

    #[tokio::test]
    async fn test_provider_results_are_applied_in_arrival_order() {
        let mut runtime = create_test_runtime();
        let tx = runtime.get_sender();
        tx.send(Msg::Location(LocationMsg::PositionFetched {
            purpose: FetchPurpose::CenterOnUser,
            coordinates: Coordinates::new(1.0, 2.0),
            timestamp_ms: 0,
        }))
        .unwrap();

        let cmds = runtime.process_all_messages();

        assert_eq!(
            cmds,
            vec![Cmd::AnimateCamera {
                region: Region::new(1.0, 2.0, 0.0922, 0.0421),
                duration_ms: 1000,
            }]
        );
    }
}
