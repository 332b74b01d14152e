use crate::controller::FetchState;
use crate::ui::theme::{
    BUTTON_BG, CRAWL_YELLOW, FRAME_BORDER, MUTED_TEXT, PRIMARY_TEXT, SEPARATOR, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Action bar: the "Fetch Movies" button, endpoint and fetch status.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &FetchState, endpoint: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(PRIMARY_TEXT);
        let separator_style = Style::default().fg(SEPARATOR);
        let (status, status_color) = status_text(state);

        let button_style = if state.is_loading {
            Style::default().fg(MUTED_TEXT).bg(BUTTON_BG)
        } else {
            Style::default()
                .fg(CRAWL_YELLOW)
                .bg(BUTTON_BG)
                .add_modifier(Modifier::BOLD)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(" Fetch Movies ", button_style),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(FRAME_BORDER)),
        )
    }
}

fn status_text(state: &FetchState) -> (String, ratatui::style::Color) {
    if state.is_loading {
        ("loading".to_string(), PRIMARY_TEXT)
    } else if state.error.is_some() {
        ("failed".to_string(), STATUS_ERROR)
    } else if state.latest_request == 0 {
        ("idle".to_string(), MUTED_TEXT)
    } else {
        let count = state.movies.len();
        let noun = if count == 1 { "film" } else { "films" };
        (format!("{} {}", count, noun), STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Movie;

    #[test]
    fn status_follows_state() {
        assert_eq!(status_text(&FetchState::default()).0, "idle");

        let loading = FetchState {
            is_loading: true,
            latest_request: 1,
            ..FetchState::default()
        };
        assert_eq!(status_text(&loading).0, "loading");

        let failed = FetchState {
            error: Some("timeout".into()),
            latest_request: 1,
            ..FetchState::default()
        };
        assert_eq!(status_text(&failed), ("failed".to_string(), STATUS_ERROR));

        let loaded = FetchState {
            movies: vec![Movie {
                id: 4,
                title: "A New Hope".into(),
                opening_text: String::new(),
                release_date: "1977-05-25".into(),
            }],
            latest_request: 1,
            ..FetchState::default()
        };
        assert_eq!(status_text(&loaded).0, "1 film");
    }
}
