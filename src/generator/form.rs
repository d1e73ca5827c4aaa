//! Quiz configuration form state and validation.

use crate::models::Difficulty;
use crate::protocol::QuizRequest;

pub const QUESTION_COUNT_PRESETS: &[u32] = &[5, 10, 15];
pub const QUESTION_COUNT_MIN: u32 = 1;
pub const QUESTION_COUNT_MAX: u32 = 50;

pub const TIMER_PRESETS: &[u32] = &[0, 15, 30];
pub const TIMER_MIN: u32 = 5;
pub const TIMER_MAX: u32 = 600;

pub const TOPIC_MAX_LENGTH: usize = 60;
const CUSTOM_MAX_DIGITS: usize = 4;

/// A numeric input offering fixed presets plus a bounded custom entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    presets: &'static [u32],
    /// Index into `presets`; `presets.len()` means the custom entry.
    choice: usize,
    custom: String,
    min: u32,
    max: u32,
}

impl NumberField {
    fn new(presets: &'static [u32], min: u32, max: u32, custom_default: u32) -> Self {
        Self {
            presets,
            choice: 0,
            custom: custom_default.to_string(),
            min,
            max,
        }
    }

    pub fn question_count() -> Self {
        Self::new(QUESTION_COUNT_PRESETS, QUESTION_COUNT_MIN, QUESTION_COUNT_MAX, 5)
    }

    pub fn timer() -> Self {
        Self::new(TIMER_PRESETS, TIMER_MIN, TIMER_MAX, 30)
    }

    pub fn is_custom(&self) -> bool {
        self.choice == self.presets.len()
    }

    /// The effective value, or `None` when the custom entry is empty or out of range.
    pub fn value(&self) -> Option<u32> {
        if let Some(preset) = self.presets.get(self.choice) {
            return Some(*preset);
        }
        self.custom
            .parse::<u32>()
            .ok()
            .filter(|value| (self.min..=self.max).contains(value))
    }

    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn presets(&self) -> &'static [u32] {
        self.presets
    }

    pub fn choice(&self) -> usize {
        self.choice
    }

    pub fn custom_input(&self) -> &str {
        &self.custom
    }

    pub fn next_choice(&mut self) {
        self.choice = (self.choice + 1) % (self.presets.len() + 1);
    }

    pub fn previous_choice(&mut self) {
        let choices = self.presets.len() + 1;
        self.choice = (self.choice + choices - 1) % choices;
    }

    /// Picks a preset by value, or the custom entry when `None`.
    pub fn select(&mut self, preset: Option<u32>) {
        self.choice = preset
            .and_then(|value| self.presets.iter().position(|p| *p == value))
            .unwrap_or(self.presets.len());
    }

    /// Appends a digit to the custom entry. Ignored unless custom is selected.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !self.is_custom() || !c.is_ascii_digit() || self.custom.len() >= CUSTOM_MAX_DIGITS {
            return false;
        }
        self.custom.push(c);
        true
    }

    pub fn pop_digit(&mut self) {
        if self.is_custom() {
            self.custom.pop();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Difficulty,
    QuestionCount,
    Timer,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Topic,
        FormField::Difficulty,
        FormField::QuestionCount,
        FormField::Timer,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizForm {
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_count: NumberField,
    pub timer: NumberField,
    focus: FormField,
}

impl QuizForm {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            difficulty: Difficulty::default(),
            question_count: NumberField::question_count(),
            timer: NumberField::timer(),
            focus: FormField::Topic,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % FormField::ALL.len();
        self.focus = FormField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let len = FormField::ALL.len();
        let previous = (self.focus.index() + len - 1) % len;
        self.focus = FormField::ALL[previous];
    }

    /// Whether every field holds a usable value.
    pub fn can_submit(&self) -> bool {
        self.question_count.is_valid() && self.timer.is_valid()
    }

    pub fn request(&self) -> Option<QuizRequest> {
        Some(QuizRequest {
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            question_count: self.question_count.value()?,
            timer_seconds: self.timer.value()?,
        })
    }

    /// Cycles the focused field's choice. The topic has none.
    pub fn cycle(&mut self, forward: bool) {
        match (self.focus, forward) {
            (FormField::Topic, _) => {}
            (FormField::Difficulty, true) => self.difficulty = self.difficulty.next(),
            (FormField::Difficulty, false) => self.difficulty = self.difficulty.previous(),
            (FormField::QuestionCount, true) => self.question_count.next_choice(),
            (FormField::QuestionCount, false) => self.question_count.previous_choice(),
            (FormField::Timer, true) => self.timer.next_choice(),
            (FormField::Timer, false) => self.timer.previous_choice(),
        }
    }

    /// Types a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Topic => {
                if self.topic.chars().count() < TOPIC_MAX_LENGTH && !c.is_control() {
                    self.topic.push(c);
                }
            }
            FormField::Difficulty => {}
            FormField::QuestionCount => {
                self.question_count.push_digit(c);
            }
            FormField::Timer => {
                self.timer.push_digit(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Topic => {
                self.topic.pop();
            }
            FormField::Difficulty => {}
            FormField::QuestionCount => self.question_count.pop_digit(),
            FormField::Timer => self.timer.pop_digit(),
        }
    }
}
