//! Screen layout and the mapping between terminal columns and track units.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::confirm::TRACK_LENGTH;
use crate::core::gesture::Position;

/// Height of the confirm control including its border.
pub const CONTROL_HEIGHT: u16 = 5;
/// Widest the control is drawn, border included.
pub const CONTROL_MAX_WIDTH: u16 = 60;
/// Height of the flag readout below the control.
pub const FLAGS_HEIGHT: u16 = 1;
/// Width of the draggable handle in cells.
pub const HANDLE_WIDTH: u16 = 7;

/// Computed layout regions for a single frame.
pub struct ScreenLayout {
    /// Top row: swap summary.
    pub header: Rect,
    /// The confirm control, border included.
    pub control: Rect,
    /// Flag readout under the control.
    pub flags: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let body = Layout::vertical([
            Constraint::Length(CONTROL_HEIGHT),
            Constraint::Length(FLAGS_HEIGHT),
        ])
        .flex(Flex::Center)
        .split(rows[1]);

        let width = CONTROL_MAX_WIDTH.min(area.width.saturating_sub(4));
        let center = |row: Rect| {
            Layout::horizontal([Constraint::Length(width)])
                .flex(Flex::Center)
                .split(row)[0]
        };

        ScreenLayout {
            header: rows[0],
            control: center(body[0]),
            flags: center(body[1]),
            status: rows[2],
        }
    }
}

/// Maps the `0..=TRACK_LENGTH` unit range onto the cells of a track.
///
/// At `x = 0` the handle's left edge sits on the track's left edge; at
/// `x = TRACK_LENGTH` its right edge sits on the track's right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackGeometry {
    track: Rect,
    handle_width: u16,
}

impl TrackGeometry {
    pub fn new(track: Rect, handle_width: u16) -> Self {
        Self {
            track,
            handle_width: handle_width.min(track.width),
        }
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    /// Cells the handle's left edge can move across.
    pub fn travel_cells(&self) -> u16 {
        self.track.width.saturating_sub(self.handle_width)
    }

    /// Row the handle and labels are drawn on.
    pub fn handle_row(&self) -> u16 {
        self.track.y + self.track.height / 2
    }

    /// Column of the handle's left edge for a track offset.
    pub fn column_for(&self, x: i32) -> u16 {
        let x = x.clamp(0, TRACK_LENGTH) as f64;
        let cells = (x * self.travel_cells() as f64 / TRACK_LENGTH as f64).round() as u16;
        self.track.x + cells
    }

    /// Track units for a pointer column. Columns outside the track map
    /// outside `0..=TRACK_LENGTH`; the gesture tracker clamps.
    pub fn pointer_units(&self, column: u16) -> i32 {
        let travel = self.travel_cells();
        if travel == 0 {
            return 0;
        }
        let offset = column as f64 - self.track.x as f64;
        (offset * TRACK_LENGTH as f64 / travel as f64).round() as i32
    }

    /// Pointer position in track units. Only x is meaningful on this track.
    pub fn pointer(&self, column: u16) -> Position {
        Position::new(self.pointer_units(column), 0)
    }

    /// Cells covered by the handle at `position`.
    pub fn handle_rect(&self, position: Position) -> Rect {
        Rect::new(
            self.column_for(position.x),
            self.track.y,
            self.handle_width,
            self.track.height,
        )
    }

    /// Cells of the target icon at the far end of the track.
    pub fn target_rect(&self) -> Rect {
        Rect::new(
            self.track.x + self.travel_cells(),
            self.track.y,
            self.handle_width,
            self.track.height,
        )
    }

    pub fn hits_handle(&self, column: u16, row: u16, position: Position) -> bool {
        let handle = self.handle_rect(position);
        column >= handle.x && column < handle.right() && row >= handle.y && row < handle.bottom()
    }
}
