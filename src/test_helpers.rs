use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future::{BoxFuture, FutureExt};

use crate::{
    core::{
        cmd::Cmd,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::{
        location::{Coordinates, LocationError, Permission},
        region::{Region, INITIAL_REGION},
    },
    infrastructure::{
        camera::CameraController, location::LocationProvider,
        tui::text_field_engine::TuiTextFieldEngine,
    },
};

/// Camera double that records every move and jumps straight to the target
#[derive(Debug, Clone)]
pub struct RecordingCamera {
    moves: Arc<Mutex<Vec<(Region, Duration)>>>,
    current: Arc<Mutex<Region>>,
}

impl Default for RecordingCamera {
    fn default() -> Self {
        Self {
            moves: Arc::default(),
            current: Arc::new(Mutex::new(INITIAL_REGION)),
        }
    }
}

impl RecordingCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `animate_to` call, oldest first
    pub fn moves(&self) -> Vec<(Region, Duration)> {
        self.moves.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl CameraController for RecordingCamera {
    fn animate_to(&self, region: Region, duration: Duration) -> Result<()> {
        if let Ok(mut moves) = self.moves.lock() {
            moves.push((region, duration));
        }
        if let Ok(mut current) = self.current.lock() {
            *current = region;
        }
        Ok(())
    }

    fn current_region(&self) -> Region {
        self.current.lock().map(|r| *r).unwrap_or(INITIAL_REGION)
    }
}

/// Location provider double with a fixed answer and call counters
#[derive(Debug, Clone)]
pub struct StubLocationProvider {
    permission: Permission,
    position: Result<Coordinates, LocationError>,
    permission_requests: Arc<AtomicUsize>,
    position_requests: Arc<AtomicUsize>,
}

impl StubLocationProvider {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            permission: Permission::Granted,
            position: Ok(Coordinates::new(latitude, longitude)),
            permission_requests: Arc::default(),
            position_requests: Arc::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            position: Err(LocationError::Unavailable(reason.to_owned())),
            ..Self::at(0.0, 0.0)
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Permission::Denied,
            position: Err(LocationError::PermissionDenied),
            ..Self::at(0.0, 0.0)
        }
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn position_requests(&self) -> usize {
        self.position_requests.load(Ordering::SeqCst)
    }
}

impl LocationProvider for StubLocationProvider {
    fn request_permission(&self) -> BoxFuture<'_, Permission> {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(self.permission).boxed()
    }

    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, LocationError>> {
        self.position_requests.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(self.position.clone()).boxed()
    }
}

/// Drives key presses through the translator and update with the real text engine.
/// Provides a fluent API for form scenarios and collects the emitted commands.
pub struct FormTestHelper {
    state: AppState,
    commands: Vec<Cmd>,
}

impl Default for FormTestHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl FormTestHelper {
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            commands: vec![],
        }
    }

    /// Press a key as if typed in the terminal
    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.raw(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Type every character of `text`
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
        self
    }

    pub fn raw(&mut self, raw: RawMsg) -> &mut Self {
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.send(msg);
        }
        self
    }

    pub fn send(&mut self, msg: Msg) -> &mut Self {
        let engine = TuiTextFieldEngine;
        let ctx = UpdateContext {
            text_field: &engine,
        };
        let (state, cmds) = update_with_context(msg, std::mem::take(&mut self.state), &ctx);
        self.state = state;
        self.commands.extend(cmds);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Drain the commands collected so far
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.commands)
    }
}
