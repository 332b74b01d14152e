use crate::api::HttpTransport;
use crate::controller::{FetchState, FilmController, Trigger};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Fetches run on `handle`; this thread only draws and handles input.
pub fn run<T: HttpTransport>(
    controller: FilmController<T>,
    handle: Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let sender = events.sender();
    let controller = controller.with_listener(Arc::new(move |state: &FetchState| {
        let _ = sender.send(AppEvent::FetchUpdated(state.clone()));
    }));

    let mut app = App::new(controller.endpoint());
    app.sync(controller.state());

    let refresh_controller = controller.clone();
    let refresh_handle = handle.clone();
    app.set_refresher(Box::new(move || {
        refresh_controller.spawn_refresh(&refresh_handle, Trigger::User);
    }));

    controller.mount(&handle);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::FetchUpdated(state)) => app.sync(state),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
