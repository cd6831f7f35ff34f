//! Property-based tests for the confirm control
//!
//! Property tests verify invariants that should hold for every drag
//! sequence, rather than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `drag_flags_props`: the pure threshold function
//!   - Overlap always matches the latest x
//!   - Success never clears once set
//!
//! - `drag_confirm_props`: the state machine driven through the gesture tracker
//!   - Position stays inside the track
//!   - A release confirms iff it lands at or past the threshold
//!   - A disabled control never starts a drag
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod drag_confirm_props;
mod drag_flags_props;
