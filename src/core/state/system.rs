use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    domain::location::Permission,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub show_help: bool,
    /// `None` until the startup permission request resolves
    pub permission: Option<Permission>,
    /// Position fetches started but not yet answered
    pub pending_fetches: usize,
}

impl SystemState {
    pub fn is_locating(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn begin_fetch(&mut self) {
        self.pending_fetches += 1;
    }

    pub fn end_fetch(&mut self) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Started => vec![Cmd::RequestPermission],

            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                vec![]
            }

            // Alerts are owned by AppState; the coordinator routes this
            SystemMsg::ShowError(message) => vec![Cmd::LogError { message }],
        }
    }
}
