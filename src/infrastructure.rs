//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Device location provider
//! - Map camera

pub mod camera;
pub mod cli;
pub mod config;
pub mod location;
pub mod tui;
