use crate::controller::{Content, FetchState};
use crate::ui::body::content_lines;

/// Starts a user-triggered refresh on the controller.
pub type Refresher = Box<dyn FnMut()>;

/// UI-side view of the controller plus purely visual state.
pub struct App {
    should_quit: bool,
    fetch: FetchState,
    endpoint: String,
    scroll: u16,
    animation_tick: u8,
    refresher: Option<Refresher>,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            fetch: FetchState::default(),
            endpoint: endpoint.into(),
            scroll: 0,
            animation_tick: 0,
            refresher: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn content(&self) -> Content {
        self.fetch.content()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn set_refresher(&mut self, refresher: Refresher) {
        self.refresher = Some(refresher);
    }

    /// Ask the controller for a new fetch. Returns false when nothing is
    /// wired up.
    pub fn request_refresh(&mut self) -> bool {
        let Some(refresher) = self.refresher.as_mut() else {
            return false;
        };
        refresher();
        true
    }

    /// Adopt a new controller snapshot.
    pub fn sync(&mut self, state: FetchState) {
        if state.movies != self.fetch.movies {
            self.scroll = 0;
        }
        self.fetch = state;
        self.clamp_scroll();
    }

    pub fn on_tick(&mut self) {
        if self.fetch.is_loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    fn clamp_scroll(&mut self) {
        let last_line = content_lines(&self.content(), 0).len().saturating_sub(1);
        let max = u16::try_from(last_line).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(max);
    }
}
