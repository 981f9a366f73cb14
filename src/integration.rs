//! Integration layer
//!
//! Wires the pure core to the terminal and the device:
//! - Message runtime around update
//! - Rendering
//! - The application loop

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
