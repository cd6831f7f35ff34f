//! Threshold flags derived from the handle's x offset.

/// Track length in units. The handle can travel from 0 to this value.
pub const TRACK_LENGTH: i32 = 160;
/// Past this offset the handle overlaps the target icon.
pub const OVERLAP_LIMIT: i32 = 124;
/// Releasing at or past this offset confirms.
pub const SUCCESS_LIMIT: i32 = 150;

/// The two flags that depend only on the handle's x offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragFlags {
    pub overlap: bool,
    pub success: bool,
}

/// Compute the flags for a handle at `x`, given the flags before the move.
///
/// `success` is sticky: once set it stays set until the caller resets the
/// drag. `overlap` follows `x` in both directions; at exactly
/// [`OVERLAP_LIMIT`] the set check wins, so the handle counts as overlapping.
pub fn derive_flags(x: i32, previous: DragFlags) -> DragFlags {
    let mut flags = previous;

    if x >= SUCCESS_LIMIT && !flags.success {
        flags.success = true;
    }

    if x >= OVERLAP_LIMIT {
        if !flags.overlap {
            flags.overlap = true;
        }
    } else if flags.overlap {
        flags.overlap = false;
    }

    flags
}

/// Whether a release at `x` confirms.
pub fn is_confirmed(x: i32) -> bool {
    x >= SUCCESS_LIMIT
}
