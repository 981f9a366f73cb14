use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            alert::AlertMsg, form::FormMsg, list::ListMsg, map::MapMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::Mode,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on the focused surface and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Pasted text only means something while typing into the form
        RawMsg::Paste(text) if state.mode() == Mode::Form => vec![Msg::Form(FormMsg::Paste(text))],
        RawMsg::Paste(_) => vec![],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.mode() {
        Mode::Alert => translate_alert_keys(key),
        Mode::Form => translate_form_keys(key),
        Mode::List => translate_list_keys(key),
        Mode::Help => translate_help_keys(key),
        Mode::Map => translate_map_keys(key, state),
    }
}

/// Alerts are modal: only acknowledging them does anything
fn translate_alert_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => vec![Msg::Alert(AlertMsg::Dismiss)],
        _ => vec![],
    }
}

/// Key bindings while the add-location form is open
fn translate_form_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Form(FormMsg::Cancel)],
        KeyCode::Enter => vec![Msg::Form(FormMsg::Save)],
        KeyCode::Tab => vec![Msg::Form(FormMsg::FocusNext)],
        KeyCode::BackTab => vec![Msg::Form(FormMsg::FocusPrevious)],
        // Everything else is text editing for the focused field
        _ => vec![Msg::Form(FormMsg::Input(key))],
    }
}

/// Key bindings while the locations modal is open
fn translate_list_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => vec![Msg::List(ListMsg::HighlightPrevious)],
        KeyCode::Down | KeyCode::Char('j') => vec![Msg::List(ListMsg::HighlightNext)],
        KeyCode::Enter => vec![Msg::List(ListMsg::SelectHighlighted)],
        KeyCode::Esc | KeyCode::Char('q') => vec![Msg::List(ListMsg::Close)],
        _ => vec![],
    }
}

fn translate_help_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            vec![Msg::System(SystemMsg::ToggleHelp)]
        }
        _ => vec![],
    }
}

/// Key bindings when the map has focus, looked up in the configured keybindings
fn translate_map_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let key = normalize_key(key);
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

/// Terminals report shifted symbols such as `?` with SHIFT set; bindings are
/// written without it. Kind and state are dropped so release/repeat events
/// match the same binding.
fn normalize_key(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    if let KeyCode::Char(c) = key.code {
        if !c.is_ascii_alphabetic() {
            modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    KeyEvent::new(key.code, modifiers)
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::GoToMyLocation => vec![Msg::Map(MapMsg::GoToMyLocation)],
        Action::AddLocation => vec![Msg::Form(FormMsg::Open)],
        Action::ViewLocations if state.view_locations_available() => {
            vec![Msg::List(ListMsg::Open)]
        }
        Action::ViewLocations => vec![],
        Action::Help => vec![Msg::System(SystemMsg::ToggleHelp)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{domain::alert::Alert, infrastructure::config::Config};

    fn create_test_state() -> AppState {
        AppState::new_with_config(Config::embedded().unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_translate_system_events() {
        let state = create_test_state();

        let result = translate_raw_to_domain(RawMsg::Quit, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

        let result = translate_raw_to_domain(RawMsg::Suspend, &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Suspend)]);

        let result = translate_raw_to_domain(RawMsg::Resize(100, 50), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Resize(100, 50))]);

        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[rstest]
    #[case(KeyCode::Char('m'), Msg::Map(MapMsg::GoToMyLocation))]
    #[case(KeyCode::Char('a'), Msg::Form(FormMsg::Open))]
    #[case(KeyCode::Char('v'), Msg::List(ListMsg::Open))]
    #[case(KeyCode::Char('q'), Msg::System(SystemMsg::Quit))]
    fn test_translate_map_keybindings(#[case] code: KeyCode, #[case] expected: Msg) {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
        assert_eq!(result, vec![expected]);
    }

    #[test]
    fn test_question_mark_with_shift_toggles_help() {
        let state = create_test_state();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);

        let result = translate_raw_to_domain(RawMsg::Key(shifted), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::ToggleHelp)]);
    }

    #[test]
    fn test_translate_global_keys() {
        let mut state = create_test_state();
        state.form.open();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let result = translate_raw_to_domain(RawMsg::Key(ctrl_c), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        let result = translate_raw_to_domain(RawMsg::Key(ctrl_z), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::Suspend)]);
    }

    #[rstest]
    #[case(KeyCode::Esc, Msg::Form(FormMsg::Cancel))]
    #[case(KeyCode::Enter, Msg::Form(FormMsg::Save))]
    #[case(KeyCode::Tab, Msg::Form(FormMsg::FocusNext))]
    #[case(KeyCode::BackTab, Msg::Form(FormMsg::FocusPrevious))]
    fn test_translate_form_control_keys(#[case] code: KeyCode, #[case] expected: Msg) {
        let mut state = create_test_state();
        state.form.open();

        let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
        assert_eq!(result, vec![expected]);
    }

    #[test]
    fn test_form_swallows_map_bindings_as_text() {
        let mut state = create_test_state();
        state.form.open();

        // 'q' and 'v' are typed, not Quit / ViewLocations
        for code in [KeyCode::Char('q'), KeyCode::Char('v')] {
            let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
            assert_eq!(result, vec![Msg::Form(FormMsg::Input(key(code)))]);
        }
    }

    #[test]
    fn test_paste_goes_to_form_only() {
        let mut state = create_test_state();
        assert!(translate_raw_to_domain(RawMsg::Paste("Dorm".into()), &state).is_empty());

        state.form.open();
        let result = translate_raw_to_domain(RawMsg::Paste("Dorm".into()), &state);
        assert_eq!(result, vec![Msg::Form(FormMsg::Paste("Dorm".into()))]);
    }

    #[rstest]
    #[case(KeyCode::Up, Msg::List(ListMsg::HighlightPrevious))]
    #[case(KeyCode::Char('k'), Msg::List(ListMsg::HighlightPrevious))]
    #[case(KeyCode::Down, Msg::List(ListMsg::HighlightNext))]
    #[case(KeyCode::Char('j'), Msg::List(ListMsg::HighlightNext))]
    #[case(KeyCode::Enter, Msg::List(ListMsg::SelectHighlighted))]
    #[case(KeyCode::Esc, Msg::List(ListMsg::Close))]
    fn test_translate_list_keys(#[case] code: KeyCode, #[case] expected: Msg) {
        let mut state = create_test_state();
        state.list.open();

        let result = translate_raw_to_domain(RawMsg::Key(key(code)), &state);
        assert_eq!(result, vec![expected]);
    }

    #[test]
    fn test_alert_blocks_other_input() {
        let mut state = create_test_state();
        state.alerts.push(Alert::missing_title());

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('m'))), &state);
        assert!(result.is_empty());

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Enter)), &state);
        assert_eq!(result, vec![Msg::Alert(AlertMsg::Dismiss)]);
    }

    #[test]
    fn test_help_closes_on_escape() {
        let mut state = create_test_state();
        state.system.show_help = true;

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Esc)), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::ToggleHelp)]);

        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('a'))), &state);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Key(key(KeyCode::Char('x'))), &state);
        assert!(result.is_empty());
    }

    #[test]
    fn test_error_becomes_show_error() {
        let state = create_test_state();
        let result = translate_raw_to_domain(RawMsg::Error("boom".into()), &state);
        assert_eq!(result, vec![Msg::System(SystemMsg::ShowError("boom".into()))]);
    }
}
