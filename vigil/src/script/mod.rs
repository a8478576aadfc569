//! Scripted frame-driver logic: everything the demo mutates between input
//! polling and rendering, kept free of windowing and GPU types so it can
//! be exercised headless.

pub mod chase;
pub mod doors;
pub mod player;
pub mod security;
