//! Reusable widgets shared by the components

pub mod popup;
