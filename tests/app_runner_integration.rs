use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::Mutex;
use tokio::time::timeout;

use mapnotes::{
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
    test_helpers::{RecordingCamera, StubLocationProvider},
    RawMsg,
};

// The runner never opens a real terminal here: TestTui replays queued events
// and the stubs answer immediately.

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn create_runner(test_tui: &Arc<Mutex<TestTui>>, camera: &RecordingCamera) -> AppRunner {
    AppRunner::new_with_tui(
        Config::embedded().unwrap(),
        Arc::<Mutex<TestTui>>::clone(test_tui),
        Arc::new(StubLocationProvider::at(16.47, 102.82)),
        Arc::new(camera.clone()),
    )
    .expect("failed to create AppRunner")
}

#[tokio::test]
async fn test_app_runner_initial_state() {
    let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24).unwrap()));
    let runner = create_runner(&test_tui, &RecordingCamera::new());

    let state = runner.runtime().state();
    assert!(state.store.is_empty());
    assert_eq!(state.system.permission, None);
    assert!(runner.runtime().get_stats().has_executor);
}

#[tokio::test]
async fn test_app_runner_saves_typed_location() {
    let mut events = vec![key(KeyCode::Char('a'))];
    events.extend(typed("Dorm"));
    events.push(key(KeyCode::Enter));
    let test_tui = Arc::new(Mutex::new(TestTui::with_events(100, 30, events).unwrap()));
    let camera = RecordingCamera::new();
    let mut runner = create_runner(&test_tui, &camera);

    timeout(Duration::from_secs(2), runner.run())
        .await
        .expect("runner should finish once events and provider calls drain")
        .unwrap();

    let state = runner.runtime().state();
    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.locations()[0].title, "Dorm");
    assert!(!state.form.is_open());
    assert!(camera.moves().is_empty());

    let screen = test_tui.lock().await.screen_text();
    assert!(screen.contains("1 saved"));
}

#[tokio::test]
async fn test_app_runner_go_to_my_location_moves_camera() {
    let test_tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::Char('m'))]).unwrap(),
    ));
    let camera = RecordingCamera::new();
    let mut runner = create_runner(&test_tui, &camera);

    timeout(Duration::from_secs(2), runner.run())
        .await
        .expect("runner should finish")
        .unwrap();

    let moves = camera.moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].0.latitude, 16.47);
    assert_eq!(moves[0].0.longitude, 102.82);
    assert!(runner.runtime().state().system.should_quit);
}

#[tokio::test]
async fn test_app_runner_quit_key_exits_promptly() {
    let test_tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::Char('q')), key(KeyCode::Char('a'))]).unwrap(),
    ));
    let mut runner = create_runner(&test_tui, &RecordingCamera::new());

    let res = timeout(Duration::from_millis(500), runner.run()).await;
    assert!(res.is_ok(), "runner.run() should complete after quit");

    // The key after quit is never read
    assert!(!runner.runtime().state().form.is_open());
}

#[tokio::test]
async fn test_app_runner_preloaded_quit_skips_queued_keys() {
    let test_tui = Arc::new(Mutex::new(TestTui::new(80, 24).unwrap()));
    test_tui
        .lock()
        .await
        .enqueue_event(key(KeyCode::Char('a')));
    let mut runner = create_runner(&test_tui, &RecordingCamera::new());
    runner.runtime_mut().send_raw_msg(RawMsg::Quit);

    timeout(Duration::from_millis(500), runner.run())
        .await
        .expect("runner should stop before reading events")
        .unwrap();

    assert!(!runner.runtime().state().form.is_open());
    assert_eq!(test_tui.lock().await.draw_count(), 1);
}
