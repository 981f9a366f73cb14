//! # Mapnotes - Map Location Notes in the Terminal
//!
//! A terminal map that lets you save your current position with a title and
//! description, list what you saved, and fly the camera back to any entry.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state, owned by the update loop
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (location provider, camera, logging)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use mapnotes::{core::msg::form::FormMsg, AppState, Msg, update};
//!
//! let state = AppState::new();
//! let (state, commands) = update(Msg::Form(FormMsg::Open), state);
//!
//! assert!(state.form.is_open());
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Locations, regions, markers and alerts
//! - [`infrastructure`] - Terminal, configuration, location provider and camera
//! - [`integration`] - Runtime and application loop
//! - [`presentation`] - Components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
