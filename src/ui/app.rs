use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::ConfigStore;
use crate::quiz::{Question, QuizEngine, QuizState};

/// The screen currently shown, mirroring the quiz navigation graph:
/// Loading → Quiz → Results, with LoadError as the retryable dead end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    LoadError { message: String },
    Quiz,
    Results,
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    engine: QuizEngine,
    config: ConfigStore,
    /// Deadline for the reveal-then-advance pattern, checked on tick.
    auto_advance_at: Option<Instant>,
    /// Generation of the fetch whose result we are waiting for.
    load_generation: u64,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Loading,
            engine: QuizEngine::new(),
            config,
            auto_advance_at: None,
            load_generation: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn quiz(&self) -> &QuizState {
        self.engine.state()
    }

    /// Start (or retry) a question load. Returns the generation the
    /// spawned fetch must tag its result with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.load_generation += 1;
        self.screen = Screen::Loading;
        self.auto_advance_at = None;
        self.load_generation
    }

    pub fn on_questions_loaded(&mut self, generation: u64, questions: Vec<Question>) {
        if generation != self.load_generation {
            debug!(generation, current = self.load_generation, "stale fetch result dropped");
            return;
        }
        debug!(count = questions.len(), "questions loaded");
        self.engine.load(questions);
        self.screen = Screen::Quiz;
    }

    pub fn on_load_failed(&mut self, generation: u64, message: String) {
        if generation != self.load_generation {
            debug!(generation, current = self.load_generation, "stale fetch error dropped");
            return;
        }
        warn!(%message, "question load failed");
        self.screen = Screen::LoadError { message };
    }

    pub fn select_answer(&mut self, option_index: usize) {
        if self.engine.state().answer_revealed {
            return;
        }
        self.engine.select_answer(option_index);
        if self.engine.state().answer_revealed {
            let quiz = self.config.get().quiz;
            if quiz.auto_advance {
                self.auto_advance_at =
                    Some(Instant::now() + Duration::from_millis(quiz.auto_advance_delay_ms));
            }
        }
    }

    pub fn skip(&mut self) {
        self.engine.skip();
        self.auto_advance_at = None;
        self.sync_screen();
    }

    pub fn advance(&mut self) {
        self.engine.advance();
        self.auto_advance_at = None;
        self.sync_screen();
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.auto_advance_at = None;
        self.screen = Screen::Quiz;
    }

    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.auto_advance_at {
            if Instant::now() >= deadline {
                self.advance();
            }
        }
    }

    fn sync_screen(&mut self) {
        if self.engine.state().completed {
            self.screen = Screen::Results;
        }
    }
}
