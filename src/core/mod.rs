pub mod asset;
pub mod confirm;
pub mod gesture;
pub mod logging;
