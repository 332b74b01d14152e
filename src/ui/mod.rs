//! Terminal UI: one "Fetch Movies" action and one content region.

pub mod app;
pub mod body;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
