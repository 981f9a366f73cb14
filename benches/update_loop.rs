use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

use mapnotes::{
    core::msg::{
        location::{FetchPurpose, LocationMsg},
        Msg,
    },
    domain::location::{Coordinates, Draft},
    infrastructure::config::Config,
    presentation::components::Components,
    test_helpers::FormTestHelper,
    AppState,
};

const SAVED_LOCATIONS: u64 = 200;

fn state_with_locations(count: u64) -> AppState {
    let mut helper = FormTestHelper::with_state(AppState::new_with_config(
        Config::embedded().expect("embedded config"),
    ));
    for i in 0..count {
        helper.send(Msg::Location(LocationMsg::PositionFetched {
            purpose: FetchPurpose::SaveDraft(Draft::new(format!("Spot {i}"), "")),
            coordinates: Coordinates::new(17.8 + i as f64 * 0.001, 102.7),
            timestamp_ms: i,
        }));
    }
    helper.state().clone()
}

fn benchmark(c: &mut Criterion) {
    let initial = state_with_locations(0);
    c.bench_function("type-and-save", |b| {
        b.iter(|| {
            let mut helper = FormTestHelper::with_state(initial.clone());
            helper
                .press(KeyCode::Char('a'))
                .type_text(black_box("Dormitory building 7"))
                .press(KeyCode::Tab)
                .type_text(black_box("Third floor, east wing"))
                .press(KeyCode::Enter);
            helper.take_commands()
        })
    });

    let state = state_with_locations(SAVED_LOCATIONS);
    c.bench_function("markers", |b| b.iter(|| black_box(&state).markers()));

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
    let mut components = Components::new();
    let region = state.map.camera_target;
    c.bench_function("render-frame", |b| {
        b.iter(|| {
            terminal
                .draw(|f| components.render(f, black_box(&state), region))
                .expect("draw");
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
