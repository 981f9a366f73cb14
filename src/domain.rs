//! Domain logic
//!
//! This module contains domain-specific types:
//! - Saved locations and the fixed sample location
//! - Camera regions and spans
//! - Map markers derived from locations
//! - User-facing alerts
//! - UI modes

pub mod alert;
pub mod location;
pub mod marker;
pub mod region;
pub mod ui;
