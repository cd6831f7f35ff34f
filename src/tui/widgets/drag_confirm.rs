//! Rendering of the slide-to-confirm control.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};

use crate::core::asset::Asset;
use crate::core::confirm::{DragConfirm, DragState};
use crate::tui::layout::{TrackGeometry, HANDLE_WIDTH};
use crate::tui::theme;

/// Shown on the handle when no source asset is set.
pub const SOURCE_PLACEHOLDER: &str = "●";
/// Shown at the end of the track when no target asset is set.
pub const TARGET_PLACEHOLDER: &str = "✓";

/// Container look selected from the control's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStyle {
    Disabled,
    Success,
    Overlap,
    Dragging,
    Missed,
    Idle,
}

impl ContainerStyle {
    /// Pick the style for a state. Earlier variants win.
    pub fn select(state: &DragState, disabled: bool) -> Self {
        if disabled {
            ContainerStyle::Disabled
        } else if state.success {
            ContainerStyle::Success
        } else if state.overlap {
            ContainerStyle::Overlap
        } else if state.dragging {
            ContainerStyle::Dragging
        } else if state.missed {
            ContainerStyle::Missed
        } else {
            ContainerStyle::Idle
        }
    }

    pub fn border(self) -> Style {
        match self {
            ContainerStyle::Disabled => theme::dim(),
            ContainerStyle::Success => Style::default().fg(theme::SUCCESS),
            ContainerStyle::Overlap => Style::default().fg(theme::ACCENT),
            ContainerStyle::Dragging => Style::default().fg(theme::PRIMARY_LIGHT),
            ContainerStyle::Missed | ContainerStyle::Idle => theme::muted(),
        }
    }

    pub fn handle(self) -> Style {
        let bg = match self {
            ContainerStyle::Disabled => theme::TEXT_DIM,
            ContainerStyle::Success => theme::SUCCESS,
            ContainerStyle::Overlap => theme::ACCENT,
            ContainerStyle::Dragging => theme::PRIMARY_LIGHT,
            ContainerStyle::Missed | ContainerStyle::Idle => theme::PRIMARY,
        };
        Style::default()
            .fg(theme::BG_BASE)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Draws a [`DragConfirm`]: bordered track, source icon on the handle,
/// centered title and target icon at the far end.
pub struct DragConfirmWidget<'a> {
    control: &'a DragConfirm,
}

impl<'a> DragConfirmWidget<'a> {
    pub fn new(control: &'a DragConfirm) -> Self {
        Self { control }
    }

    fn block(style: ContainerStyle) -> Block<'static> {
        theme::block_rounded(style.border())
    }

    /// Track geometry for a control drawn into `area`, for hit-testing input
    /// against what was rendered.
    pub fn geometry(area: Rect) -> TrackGeometry {
        TrackGeometry::new(Self::block(ContainerStyle::Idle).inner(area), HANDLE_WIDTH)
    }

    pub fn style(&self) -> ContainerStyle {
        ContainerStyle::select(self.control.state(), self.control.is_disabled())
    }
}

impl Widget for DragConfirmWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        Self::block(style).render(area, buf);

        let geometry = Self::geometry(area);
        let track = geometry.track();
        if track.is_empty() {
            return;
        }
        let row = geometry.handle_row();
        let props = self.control.props();

        if !props.title.is_empty() {
            let title_style = if style == ContainerStyle::Disabled {
                theme::dim()
            } else {
                Style::default().fg(theme::TEXT)
            };
            Paragraph::new(Line::styled(props.title.as_str(), title_style))
                .alignment(Alignment::Center)
                .render(Rect::new(track.x, row, track.width, 1), buf);
        }

        let target = geometry.target_rect();
        let target_style = if style == ContainerStyle::Disabled {
            theme::dim()
        } else {
            Style::default().fg(theme::INFO).add_modifier(Modifier::BOLD)
        }
        .bg(theme::BG_SURFACE);
        render_icon(
            buf,
            Rect::new(target.x, row, target.width, 1),
            &icon_label(props.target.as_ref(), TARGET_PLACEHOLDER),
            target_style,
        );

        let handle = geometry.handle_rect(self.control.state().position);
        buf.set_style(handle, style.handle());
        render_icon(
            buf,
            Rect::new(handle.x, row, handle.width, 1),
            &icon_label(props.source.as_ref(), SOURCE_PLACEHOLDER),
            style.handle(),
        );
    }
}

/// Ticker trimmed to fit inside the handle, or the placeholder.
pub fn icon_label(asset: Option<&Asset>, placeholder: &str) -> String {
    match asset {
        Some(asset) => asset
            .ticker()
            .chars()
            .take(HANDLE_WIDTH.saturating_sub(2) as usize)
            .collect(),
        None => placeholder.to_string(),
    }
}

fn render_icon(buf: &mut Buffer, area: Rect, label: &str, style: Style) {
    let area = area.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    Clear.render(area, buf);
    buf.set_style(area, style);
    Paragraph::new(Line::styled(label, style))
        .alignment(Alignment::Center)
        .render(area, buf);
}
