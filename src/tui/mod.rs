//! Terminal front end: layout, theme, input adapters and the demo app.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod theme;
pub mod widgets;
