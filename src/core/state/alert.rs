use std::collections::VecDeque;

use crate::{
    core::{cmd::Cmd, msg::alert::AlertMsg},
    domain::alert::Alert,
};

/// FIFO of alerts; the front one is on screen until dismissed
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    queue: VecDeque<Alert>,
}

impl AlertState {
    pub fn push(&mut self, alert: Alert) {
        self.queue.push_back(alert);
    }

    pub fn current(&self) -> Option<&Alert> {
        self.queue.front()
    }

    pub fn is_showing(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.queue.iter()
    }

    pub fn update(&mut self, msg: AlertMsg) -> Vec<Cmd> {
        match msg {
            AlertMsg::Show(alert) => self.push(alert),
            AlertMsg::Dismiss => {
                self.queue.pop_front();
            }
        }
        vec![]
    }
}
