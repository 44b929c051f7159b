use crate::model::Question;
use crate::store::ScoreStore;
use crate::timer::QUESTION_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Loading,
    Playing,
    Complete,
}

/// The session state machine. All transitions run on the main thread; the
/// timer and loader only reach it through the event loop, so no transition
/// ever interleaves with another.
pub struct AppState {
    pub screen: Screen,
    pub questions: Vec<Question>,
    pub current: usize,
    pub score: u32,
    pub selected: Option<String>,
    pub seconds_left: u16,
    pub best_score: Option<u32>,
    pub new_best: bool,
    pub choice_cursor: usize,
    pub should_quit: bool,
    store: Box<dyn ScoreStore>,
}

impl AppState {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let best_score = store.read_best();
        Self {
            screen: Screen::Loading,
            questions: Vec::new(),
            current: 0,
            score: 0,
            selected: None,
            seconds_left: QUESTION_SECONDS,
            best_score,
            new_best: false,
            choice_cursor: 0,
            should_quit: false,
            store,
        }
    }

    /// Questions finished loading: enter the first question.
    pub fn begin(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.seconds_left = QUESTION_SECONDS;
        self.choice_cursor = 0;
        self.screen = Screen::Playing;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.screen == Screen::Complete
    }

    /// Record an answer for the current question. A selection, once made,
    /// is immutable until the next advance; repeated calls are no-ops.
    pub fn select_answer(&mut self, answer: &str) {
        if self.screen != Screen::Playing || self.selected.is_some() {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if answer == question.correct_answer {
            self.score += 1;
        }
        self.selected = Some(answer.to_string());
    }

    /// Move to the next question, or finish if none remain. Callable with
    /// no selection (timer auto-skip counts the question as wrong); the
    /// answered-first guard on the Next key lives in the view layer.
    pub fn advance(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.seconds_left = QUESTION_SECONDS;
            self.choice_cursor = 0;
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        // Index N is the completed position.
        self.current = self.questions.len();
        self.screen = Screen::Complete;
        self.selected = None;

        // Strictly greater: a tie with the previous best does not write.
        if self.score > self.best_score.unwrap_or(0) {
            if let Err(e) = self.store.write_best(self.score) {
                log::warn!("could not persist best score: {}", e);
            }
            self.best_score = Some(self.score);
            self.new_best = true;
        }
    }

    /// Replay the same loaded question set. Valid from the summary only.
    pub fn restart(&mut self) {
        if self.screen != Screen::Complete {
            return;
        }
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.seconds_left = QUESTION_SECONDS;
        self.choice_cursor = 0;
        self.new_best = false;
        self.screen = Screen::Playing;
    }

    pub fn cursor_up(&mut self) {
        if self.selected.is_none() && self.choice_cursor > 0 {
            self.choice_cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.selected.is_some() {
            return;
        }
        let count = self.current_question().map_or(0, |q| q.choices().len());
        if self.choice_cursor + 1 < count {
            self.choice_cursor += 1;
        }
    }
}
