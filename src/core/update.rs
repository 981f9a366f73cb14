use crate::{
    core::{
        cmd::Cmd,
        msg::{
            form::FormMsg,
            list::ListMsg,
            location::{FetchPurpose, LocationMsg},
            map::MapMsg,
            system::SystemMsg,
            Msg,
        },
        state::AppState,
        text_field_engine::{NoopTextFieldEngine, TextFieldEngine},
    },
    domain::{
        alert::Alert,
        location::{Coordinates, Permission, SavedLocation},
        region::{Region, Span, CLOSE_SPAN, WIDE_SPAN},
    },
};

/// Collaborators the pure update path may call into
pub struct UpdateContext<'a> {
    pub text_field: &'a dyn TextFieldEngine,
}

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        static ENGINE: NoopTextFieldEngine = NoopTextFieldEngine;
        Self {
            text_field: &ENGINE,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

/// Same as [`update`], with an explicit text field engine
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        Msg::System(SystemMsg::ShowError(message)) => {
            state.alerts.push(Alert::new("Error", message.clone()));
            state.system.update(SystemMsg::ShowError(message))
        }
        Msg::System(system_msg) => state.system.update(system_msg),

        Msg::Alert(alert_msg) => state.alerts.update(alert_msg),

        Msg::Form(form_msg) => update_form(form_msg, &mut state, ctx),

        Msg::List(list_msg) => update_list(list_msg, &mut state),

        Msg::Map(MapMsg::GoToMyLocation) => {
            state.system.begin_fetch();
            vec![Cmd::FetchPosition {
                purpose: FetchPurpose::CenterOnUser,
            }]
        }

        Msg::Location(location_msg) => update_location(location_msg, &mut state),
    };

    (state, commands)
}

fn update_form(msg: FormMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        FormMsg::Open if state.list.is_open() => vec![],
        FormMsg::Save => {
            if !state.form.is_open() {
                return vec![];
            }
            match state.form.submission() {
                Some(draft) => {
                    state.system.begin_fetch();
                    vec![Cmd::FetchPosition {
                        purpose: FetchPurpose::SaveDraft(draft),
                    }]
                }
                None => {
                    state.alerts.push(Alert::missing_title());
                    vec![]
                }
            }
        }
        other => state.form.update(other, ctx.text_field),
    }
}

fn update_list(msg: ListMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        ListMsg::Open => {
            if state.view_locations_available() {
                state.list.open();
            }
            vec![]
        }
        ListMsg::Close => {
            state.list.close();
            vec![]
        }
        ListMsg::HighlightNext => {
            state.list.highlight_next(state.store.all_len());
            vec![]
        }
        ListMsg::HighlightPrevious => {
            state.list.highlight_previous(state.store.all_len());
            vec![]
        }
        ListMsg::SelectHighlighted => {
            let index = state.list.highlighted();
            update_list(ListMsg::Select(index), state)
        }
        ListMsg::Select(index) => {
            if !state.list.is_open() {
                return vec![];
            }
            let Some(location) = state.store.location_at(index) else {
                return vec![];
            };
            let cmd = animate_camera(state, location.coordinates(), CLOSE_SPAN);
            state.list.close();
            vec![cmd]
        }
    }
}

fn update_location(msg: LocationMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        LocationMsg::PermissionResolved(permission) => {
            state.system.permission = Some(permission);
            match permission {
                Permission::Granted => vec![Cmd::LogInfo {
                    message: "Location permission granted".to_owned(),
                }],
                Permission::Denied => {
                    state.alerts.push(Alert::permission_denied());
                    vec![Cmd::LogInfo {
                        message: "Permission to access location was denied".to_owned(),
                    }]
                }
            }
        }

        LocationMsg::PositionFetched {
            purpose,
            coordinates,
            timestamp_ms,
        } => {
            state.system.end_fetch();
            state.map.user_position = Some(coordinates);
            match purpose {
                FetchPurpose::CenterOnUser => {
                    vec![animate_camera(state, coordinates, WIDE_SPAN)]
                }
                FetchPurpose::SaveDraft(draft) => {
                    let id = state.store.next_id(timestamp_ms);
                    let location = SavedLocation::from_draft(id, coordinates, &draft);
                    let message = format!(
                        "Saved location {} '{}' at ({}, {})",
                        location.id, location.title, location.latitude, location.longitude
                    );
                    state.store.add(location);
                    state.form.complete();
                    vec![Cmd::LogInfo { message }]
                }
            }
        }

        LocationMsg::PositionFailed { purpose, reason } => {
            state.system.end_fetch();
            let (alert, message) = match purpose {
                FetchPurpose::CenterOnUser => (
                    Alert::fetch_failed(),
                    format!("Failed to get current location: {reason}"),
                ),
                FetchPurpose::SaveDraft(_) => (
                    Alert::save_failed(),
                    format!("Failed to save location: {reason}"),
                ),
            };
            state.alerts.push(alert);
            vec![Cmd::LogError { message }]
        }
    }
}

fn animate_camera(state: &mut AppState, center: Coordinates, span: Span) -> Cmd {
    let region = Region::centered_on(center, span);
    state.map.camera_target = region;
    Cmd::AnimateCamera {
        region,
        duration_ms: state.map.animation_ms,
    }
}
