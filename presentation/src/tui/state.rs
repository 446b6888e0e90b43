//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by key handling (local edits) and TuiPresenter (UiEvent → state).

use imaginario_domain::words::validation::MAX_WORD_LENGTH;
use imaginario_domain::{GenerationResult, ViewState, WORD_COUNT};
use std::time::{Duration, Instant};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Which element of the express screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Word(usize),
    Button,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Word(0)
    }
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Word(i) if i + 1 < WORD_COUNT => Self::Word(i + 1),
            Self::Word(_) => Self::Button,
            Self::Button => Self::Word(0),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Word(0) => Self::Button,
            Self::Word(i) => Self::Word(i - 1),
            Self::Button => Self::Word(WORD_COUNT - 1),
        }
    }

    pub fn word_index(self) -> Option<usize> {
        match self {
            Self::Word(i) => Some(i),
            Self::Button => None,
        }
    }
}

/// One word input with a byte-offset cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordField {
    pub text: String,
    pub cursor: usize,
}

impl WordField {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Characters before the cursor, for cursor placement
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    fn insert(&mut self, c: char) -> bool {
        if self.char_count() >= MAX_WORD_LENGTH {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    fn delete_before_cursor(&mut self) -> bool {
        let Some(prev) = self.text[..self.cursor].chars().next_back() else {
            return false;
        };
        self.cursor -= prev.len_utf8();
        self.text.remove(self.cursor);
        true
    }

    fn left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    fn right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }
}

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    // -- View --
    pub view: ViewState,
    pub is_loading: bool,
    pub is_transitioning: bool,

    // -- Express screen --
    pub fields: [WordField; WORD_COUNT],
    pub focus: Focus,
    pub error: Option<String>,
    pub retry_status: Option<String>,

    // -- Reflection screen --
    pub result: Option<GenerationResult>,
    /// Share text to copy by hand when the clipboard failed
    pub fallback_text: Option<String>,

    // -- Chrome --
    pub model_name: String,
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,
    pub spinner_frame: usize,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    // -- Input editing --

    fn focused_field_mut(&mut self) -> Option<(usize, &mut WordField)> {
        let index = self.focus.word_index()?;
        self.fields.get_mut(index).map(|field| (index, field))
    }

    /// Insert at the cursor of the focused word.
    ///
    /// Returns the edited slot and its new text, or `None` if nothing changed
    /// (button focused, or the word is already at its length limit).
    pub fn insert_char(&mut self, c: char) -> Option<(usize, String)> {
        let (index, field) = self.focused_field_mut()?;
        field.insert(c).then(|| (index, field.text.clone()))
    }

    pub fn delete_char(&mut self) -> Option<(usize, String)> {
        let (index, field) = self.focused_field_mut()?;
        field
            .delete_before_cursor()
            .then(|| (index, field.text.clone()))
    }

    pub fn cursor_left(&mut self) {
        if let Some((_, field)) = self.focused_field_mut() {
            field.left();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some((_, field)) = self.focused_field_mut() {
            field.right();
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some((_, field)) = self.focused_field_mut() {
            field.cursor = 0;
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some((_, field)) = self.focused_field_mut() {
            field.cursor = field.text.len();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn words(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.text.clone()).collect()
    }

    /// Back to three empty words with the first one focused
    pub fn clear_words(&mut self) {
        self.fields = Default::default();
        self.focus = Focus::default();
    }

    /// Whether a submit would be accepted right now
    pub fn can_submit(&self) -> bool {
        self.view.is_express() && !self.is_loading && !self.is_transitioning
    }

    /// Whether edits should reach the word fields
    pub fn accepts_input(&self) -> bool {
        self.can_submit()
    }

    // -- Flash --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }

    // -- Spinner --

    pub fn advance_spinner(&mut self) {
        if self.is_loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }

    pub fn spinner(&self) -> char {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}
