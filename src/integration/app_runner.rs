use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        camera::{CameraController, MapCamera},
        config::Config,
        location::{LocationProvider, SimulatedLocationProvider},
        tui::{self, real::RealTui},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// How long a drained event source waits on an outstanding provider call
const PROVIDER_WAIT: Duration = Duration::from_secs(5);

/// Drives the Elm loop: terminal events in, state updates, commands out, frame drawn.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    renderer: Renderer,
    camera: Arc<dyn CameraController>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner over any terminal with the given device services
    pub fn new_with_tui(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        location: Arc<dyn LocationProvider>,
        camera: Arc<dyn CameraController>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime =
            Runtime::new_with_executor(initial_state, location, Arc::clone(&camera));

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            camera,
            tui_cmd_rx,
            last_size: None,
        })
    }

    /// Create a runner over the real terminal with the simulated device
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let location = Arc::new(SimulatedLocationProvider::new(&config.location));
        let camera = Arc::new(MapCamera::new(config.map.initial_region));
        Self::new_with_tui(config, tui, location, camera)
    }

    /// Run until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.send_msg(Msg::System(SystemMsg::Started));

        loop {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            self.apply_tui_commands().await?;

            if self.runtime.state().system.should_suspend {
                {
                    let mut tui = self.tui.lock().await;
                    tui.suspend()?;
                    tui.resume()?;
                }
                self.runtime.send_raw_msg(RawMsg::Resume);
                continue;
            }

            self.render().await?;

            if self.runtime.state().system.should_quit {
                break;
            }

            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            match event {
                Some(event) => self.handle_event(event),
                None => self.wait_for_provider().await,
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: tui::Event) {
        match event {
            tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".into())),
            // Drawn once per loop regardless
            tui::Event::Render => {}
            tui::Event::Init
            | tui::Event::Closed
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Mouse(_) => {}
        }
    }

    // The event source is drained: let outstanding provider calls land, then stop
    async fn wait_for_provider(&mut self) {
        let system = &self.runtime.state().system;
        let waiting = system.is_locating() || system.permission.is_none();
        if waiting
            && tokio::time::timeout(PROVIDER_WAIT, self.runtime.await_message())
                .await
                .ok()
                .flatten()
                .is_some()
        {
            return;
        }
        self.runtime.send_raw_msg(RawMsg::Quit);
    }

    async fn apply_tui_commands(&mut self) -> Result<()> {
        let mut sizes = Vec::new();
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => sizes.push((width, height)),
            }
        }
        if sizes.is_empty() {
            return Ok(());
        }

        if let Some((w, h)) = Coalescer::decide_resize(self.last_size, &sizes) {
            self.tui
                .lock()
                .await
                .resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
            self.last_size = Some((w, h));
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let region = self.camera.current_region();
        self.renderer
            .render(&self.tui, self.runtime.state(), region)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tokio::time::timeout;

    use super::*;
    use crate::{
        infrastructure::tui::test::TestTui,
        test_helpers::{RecordingCamera, StubLocationProvider},
    };

    fn key(c: char) -> tui::Event {
        tui::Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn create_runner(test_tui: &Arc<Mutex<TestTui>>, camera: RecordingCamera) -> AppRunner {
        AppRunner::new_with_tui(
            Config::embedded().unwrap(),
            Arc::<Mutex<TestTui>>::clone(test_tui),
            Arc::new(StubLocationProvider::at(16.47, 102.82)),
            Arc::new(camera),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_quit_key_stops_loop() {
        let test_tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [key('q')]).unwrap(),
        ));
        let mut runner = create_runner(&test_tui, RecordingCamera::new());

        timeout(Duration::from_secs(1), runner.run())
            .await
            .expect("runner should stop")
            .unwrap();

        assert!(runner.runtime().state().system.should_quit);
        assert!(test_tui.lock().await.draw_count() >= 1);
    }

    #[tokio::test]
    async fn test_drained_events_wait_for_permission_then_quit() {
        let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24).unwrap()));
        let mut runner = create_runner(&test_tui, RecordingCamera::new());

        timeout(Duration::from_secs(1), runner.run())
            .await
            .expect("runner should stop")
            .unwrap();

        assert_eq!(
            runner.runtime().state().system.permission,
            Some(crate::domain::location::Permission::Granted)
        );
    }

    #[tokio::test]
    async fn test_resize_reaches_terminal() {
        let test_tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [tui::Event::Resize(100, 30)]).unwrap(),
        ));
        let mut runner = create_runner(&test_tui, RecordingCamera::new());

        timeout(Duration::from_secs(1), runner.run())
            .await
            .expect("runner should stop")
            .unwrap();

        assert_eq!(runner.last_size, Some((100, 30)));
        assert_eq!(test_tui.lock().await.buffer().area.width, 100);
    }

    #[tokio::test]
    async fn test_suspend_hands_terminal_back() {
        let ctrl_z = tui::Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let test_tui = Arc::new(Mutex::new(
            TestTui::with_events(80, 24, [ctrl_z]).unwrap(),
        ));
        let mut runner = create_runner(&test_tui, RecordingCamera::new());

        timeout(Duration::from_secs(1), runner.run())
            .await
            .expect("runner should stop")
            .unwrap();

        assert_eq!(test_tui.lock().await.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
    }
}
