//! Slide-to-confirm control: pure threshold flags plus the state machine
//! that reacts to drag events and caller configuration.

mod flags;
mod state;

pub use flags::{derive_flags, is_confirmed, DragFlags, OVERLAP_LIMIT, SUCCESS_LIMIT, TRACK_LENGTH};
pub use state::{Callback, DragConfirm, DragConfirmProps, DragState};
