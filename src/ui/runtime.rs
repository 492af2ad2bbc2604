use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::ConfigStore;
use crate::source::{HttpQuestionSource, QuestionSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: ConfigStore, handle: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config.clone());

    let generation = app.begin_fetch();
    spawn_fetch(&config, &handle, events.sender(), generation);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::RetryLoad {
                    let generation = app.begin_fetch();
                    spawn_fetch(&config, &handle, events.sender(), generation);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::QuestionsLoaded {
                generation,
                questions,
            }) => app.on_questions_loaded(generation, questions),
            Ok(AppEvent::LoadFailed {
                generation,
                message,
            }) => app.on_load_failed(generation, message),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Fetch questions off the UI thread; the result comes back as an event.
fn spawn_fetch(config: &ConfigStore, handle: &Handle, tx: Sender<AppEvent>, generation: u64) {
    let source_config = config.get().source;
    handle.spawn(async move {
        let event = match HttpQuestionSource::new(&source_config) {
            Ok(source) => match source.fetch_questions().await {
                Ok(questions) => AppEvent::QuestionsLoaded {
                    generation,
                    questions,
                },
                Err(err) => AppEvent::LoadFailed {
                    generation,
                    message: err.to_string(),
                },
            },
            Err(err) => AppEvent::LoadFailed {
                generation,
                message: err.to_string(),
            },
        };
        let _ = tx.send(event);
    });
}
