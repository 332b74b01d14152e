//! The content region: one of movie list, placeholder, error or spinner.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::controller::{crawl_lines, Content, EMPTY_PLACEHOLDER, LOADING_TEXT};
use crate::ui::app::App;
use crate::ui::theme::{
    CRAWL_YELLOW, FRAME_BORDER, MUTED_TEXT, PRIMARY_TEXT, STATUS_ERROR, STATUS_OK,
};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let lines = content_lines(&app.content(), app.animation_tick());
    let block = Block::default()
        .title(Span::styled(" Movies ", Style::default().fg(PRIMARY_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME_BORDER));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0));
    frame.render_widget(paragraph, area);
}

pub fn content_lines(content: &Content, animation_tick: u8) -> Vec<Line<'static>> {
    match content {
        Content::Empty => vec![Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT),
        ))],

        Content::Loading => {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            vec![Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(LOADING_TEXT, Style::default().fg(PRIMARY_TEXT)),
            ])]
        }

        Content::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))],

        Content::Movies(movies) => {
            let mut lines = Vec::new();
            for (idx, movie) in movies.iter().enumerate() {
                if idx > 0 {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(vec![
                    Span::styled(
                        movie.title.clone(),
                        Style::default()
                            .fg(CRAWL_YELLOW)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  Episode {}", movie.id),
                        Style::default().fg(MUTED_TEXT),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("Released {}", movie.release_date),
                    Style::default().fg(MUTED_TEXT),
                )));
                for crawl in crawl_lines(&movie.opening_text) {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", crawl),
                        Style::default().fg(PRIMARY_TEXT),
                    )));
                }
            }
            lines
        }
    }
}
