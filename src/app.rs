use std::mem;
use std::time::Duration;

use tracing::{debug, info};

use crate::event::{AppEvent, EventSender};
use crate::generator::{GeneratedQuiz, QuizForm, QuizGenerator, QuizSource};
use crate::models::{AnswerMap, NUM_OPTIONS, Quiz, QuizResults};
use crate::runner::{QuizRunner, Step, TickOutcome};
use crate::timer::{TaskGuard, Token, TokenSource, spawn_countdown};
use crate::ui;

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Topic key sent to the generator; empty for the custom category.
    pub topic: &'static str,
    pub blurb: &'static str,
}

impl Category {
    pub fn is_custom(&self) -> bool {
        self.topic.is_empty()
    }

    pub fn default_topic(&self) -> String {
        if self.is_custom() {
            String::new()
        } else {
            self.topic.to_string()
        }
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "JavaScript",
        topic: "javascript",
        blurb: "Syntax, arrays, closures",
    },
    Category {
        name: "Python",
        topic: "python",
        blurb: "Functions, lists, idioms",
    },
    Category {
        name: "History",
        topic: "history",
        blurb: "Dates, people, events",
    },
    Category {
        name: "Custom",
        topic: "",
        blurb: "Type any topic",
    },
];

pub struct GeneratorScreen {
    pub category: Category,
    pub form: QuizForm,
    pending: Option<TaskGuard>,
}

impl GeneratorScreen {
    fn new(category: Category) -> Self {
        Self::with_form(category, QuizForm::new(category.default_topic()))
    }

    fn with_form(category: Category, form: QuizForm) -> Self {
        Self {
            category,
            form,
            pending: None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating() && self.form.can_submit()
    }
}

pub struct QuizScreen {
    pub category: Category,
    pub form: QuizForm,
    pub runner: QuizRunner,
    pub source: QuizSource,
    /// Highlighted option; selection is recorded separately in the runner.
    pub cursor: usize,
    countdown: Option<TaskGuard>,
}

impl QuizScreen {
    fn sync_cursor(&mut self) {
        self.cursor = self.runner.current_answer().unwrap_or(0);
    }

    /// Replaces the countdown for the question now on screen.
    fn restart_countdown(&mut self, tokens: &mut TokenSource, tx: &EventSender) {
        self.countdown = None;
        if self.runner.has_timer() && self.runner.current_index().is_some() {
            self.countdown = Some(spawn_countdown(tokens.issue(), TICK_PERIOD, tx.clone()));
        }
    }
}

pub struct ResultsScreen {
    pub quiz: Quiz,
    pub answers: AnswerMap,
    pub results: QuizResults,
    pub review_open: bool,
    pub scroll: u16,
}

pub enum Screen {
    Home { selected: usize },
    Generator(GeneratorScreen),
    Quiz(QuizScreen),
    Results(ResultsScreen),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home { selected: 0 }
    }
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home { .. } => "home",
            Screen::Generator(_) => "generator",
            Screen::Quiz(_) => "quiz",
            Screen::Results(_) => "results",
        }
    }
}

/// Session controller: owns the current screen and moves between them.
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    generator: QuizGenerator,
    tokens: TokenSource,
    tx: EventSender,
}

impl App {
    pub fn new(generator: QuizGenerator, tx: EventSender) -> Self {
        Self {
            screen: Screen::default(),
            should_quit: false,
            generator,
            tokens: TokenSource::new(),
            tx,
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        debug!(from = self.screen.name(), to = screen.name(), "screen change");
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // Home

    pub fn select_next_category(&mut self) {
        if let Screen::Home { selected } = &mut self.screen {
            *selected = (*selected + 1) % CATEGORIES.len();
        }
    }

    pub fn select_previous_category(&mut self) {
        if let Screen::Home { selected } = &mut self.screen {
            *selected = (*selected + CATEGORIES.len() - 1) % CATEGORIES.len();
        }
    }

    pub fn choose_category(&mut self) {
        let Screen::Home { selected } = self.screen else {
            return;
        };
        let category = CATEGORIES[selected];
        info!(category = category.name, "category chosen");
        self.set_screen(Screen::Generator(GeneratorScreen::new(category)));
    }

    // Generator

    pub fn form_mut(&mut self) -> Option<&mut QuizForm> {
        match &mut self.screen {
            Screen::Generator(screen) if !screen.is_generating() => Some(&mut screen.form),
            _ => None,
        }
    }

    /// Starts generation from the form. No-op while the form is invalid or
    /// a generation is already running.
    pub fn generate(&mut self) {
        let Screen::Generator(screen) = &mut self.screen else {
            return;
        };
        if screen.is_generating() {
            return;
        }
        let Some(request) = screen.form.request() else {
            return;
        };

        info!(
            topic = %request.topic,
            difficulty = %request.difficulty,
            questions = request.question_count,
            timer = request.timer_seconds,
            "generating quiz"
        );

        let token = self.tokens.issue();
        let generator = self.generator.clone();
        let tx = self.tx.clone();
        screen.pending = Some(TaskGuard::spawn(token, async move {
            let generated = generator.generate(&request).await;
            let _ = tx.send(AppEvent::QuizReady { token, generated });
        }));
    }

    pub fn quiz_generated(&mut self, generated: GeneratedQuiz) {
        match mem::take(&mut self.screen) {
            Screen::Generator(screen) => {
                let GeneratedQuiz { quiz, source } = generated;
                info!(title = %quiz.title, ?source, "quiz ready");
                self.set_screen(Screen::Quiz(QuizScreen {
                    category: screen.category,
                    form: screen.form,
                    runner: QuizRunner::new(quiz),
                    source,
                    cursor: 0,
                    countdown: None,
                }));
            }
            other => self.screen = other,
        }
    }

    // Quiz

    pub fn start_quiz(&mut self) {
        let Screen::Quiz(screen) = &mut self.screen else {
            return;
        };
        if screen.runner.start() {
            screen.sync_cursor();
            screen.restart_countdown(&mut self.tokens, &self.tx);
        }
    }

    pub fn move_cursor_down(&mut self) {
        if let Screen::Quiz(screen) = &mut self.screen {
            screen.cursor = (screen.cursor + 1) % NUM_OPTIONS;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if let Screen::Quiz(screen) = &mut self.screen {
            screen.cursor = (screen.cursor + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    pub fn select_option(&mut self, option: usize) {
        if let Screen::Quiz(screen) = &mut self.screen {
            if screen.runner.select(option) {
                screen.cursor = option;
            }
        }
    }

    pub fn select_at_cursor(&mut self) {
        if let Screen::Quiz(screen) = &self.screen {
            let option = screen.cursor;
            self.select_option(option);
        }
    }

    pub fn next_question(&mut self) {
        let Screen::Quiz(screen) = &mut self.screen else {
            return;
        };
        match screen.runner.next() {
            Step::Moved(_) => {
                screen.sync_cursor();
                screen.restart_countdown(&mut self.tokens, &self.tx);
            }
            Step::Finished(results) => self.complete_quiz(results),
            Step::Blocked => {}
        }
    }

    pub fn previous_question(&mut self) {
        if let Screen::Quiz(screen) = &mut self.screen {
            if screen.runner.previous() {
                screen.sync_cursor();
            }
        }
    }

    pub fn submit_quiz(&mut self) {
        let Screen::Quiz(screen) = &mut self.screen else {
            return;
        };
        if let Some(results) = screen.runner.submit() {
            self.complete_quiz(results);
        }
    }

    fn complete_quiz(&mut self, results: QuizResults) {
        match mem::take(&mut self.screen) {
            Screen::Quiz(screen) => {
                let (quiz, answers) = screen.runner.into_parts();
                info!(
                    correct = results.correct,
                    total = results.total,
                    percentage = results.percentage,
                    passed = results.passed,
                    "quiz completed"
                );
                self.set_screen(Screen::Results(ResultsScreen {
                    quiz,
                    answers,
                    results,
                    review_open: false,
                    scroll: 0,
                }));
            }
            other => self.screen = other,
        }
    }

    // Results

    pub fn toggle_review(&mut self) {
        if let Screen::Results(screen) = &mut self.screen {
            screen.review_open = !screen.review_open;
            screen.scroll = 0;
        }
    }

    pub fn scroll_review_down(&mut self) {
        if let Screen::Results(screen) = &mut self.screen {
            if screen.review_open {
                let lines = ui::review_line_count(&screen.quiz, &screen.answers);
                let last = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
                screen.scroll = screen.scroll.saturating_add(1).min(last);
            }
        }
    }

    pub fn scroll_review_up(&mut self) {
        if let Screen::Results(screen) = &mut self.screen {
            screen.scroll = screen.scroll.saturating_sub(1);
        }
    }

    pub fn start_over(&mut self) {
        info!("starting over");
        self.set_screen(Screen::default());
    }

    // Navigation

    /// Steps back one screen: generator to home, quiz to generator.
    ///
    /// Dropping the old screen cancels its countdown or pending generation.
    pub fn back(&mut self) {
        match mem::take(&mut self.screen) {
            Screen::Generator(screen) => {
                if screen.is_generating() {
                    info!("generation cancelled");
                }
                let selected = CATEGORIES
                    .iter()
                    .position(|c| *c == screen.category)
                    .unwrap_or(0);
                self.set_screen(Screen::Home { selected });
            }
            Screen::Quiz(screen) => {
                self.set_screen(Screen::Generator(GeneratorScreen::with_form(
                    screen.category,
                    screen.form,
                )));
            }
            other => self.screen = other,
        }
    }

    // Background events

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(token) => self.on_tick(token),
            AppEvent::QuizReady { token, generated } => self.on_quiz_ready(token, generated),
        }
    }

    fn on_tick(&mut self, token: Token) {
        let Screen::Quiz(screen) = &mut self.screen else {
            debug!(?token, "tick outside quiz ignored");
            return;
        };
        if !screen.countdown.as_ref().is_some_and(|c| c.owns(token)) {
            debug!(?token, "stale tick ignored");
            return;
        }

        match screen.runner.tick() {
            TickOutcome::Idle | TickOutcome::Counting(_) => {}
            TickOutcome::Advanced(index) => {
                info!(question = index + 1, "previous question timed out");
                screen.sync_cursor();
                screen.restart_countdown(&mut self.tokens, &self.tx);
            }
            TickOutcome::Finished(results) => self.complete_quiz(results),
        }
    }

    fn on_quiz_ready(&mut self, token: Token, generated: GeneratedQuiz) {
        let current = matches!(
            &self.screen,
            Screen::Generator(screen) if screen.pending.as_ref().is_some_and(|p| p.owns(token))
        );
        if !current {
            debug!(?token, "stale generation result dropped");
            return;
        }
        self.quiz_generated(generated);
    }
}
