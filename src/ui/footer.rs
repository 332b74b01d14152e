use crate::ui::theme::{FRAME_BORDER, PRIMARY_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " F/Enter: Fetch Movies │ ↑/↓ PgUp/PgDn: Scroll │ Home: Top │ Q/Esc: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let padding = padding_for(area.width, HINTS, &version);

        let text_style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(FRAME_BORDER)),
            )
    }
}

/// Spaces between hints and the right-aligned version, counted in chars.
fn padding_for(width: u16, hints: &str, version: &str) -> usize {
    let content_width = width.saturating_sub(2) as usize; // minus borders
    content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count())
}
