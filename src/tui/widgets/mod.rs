pub mod drag_confirm;

pub use drag_confirm::{ContainerStyle, DragConfirmWidget};
