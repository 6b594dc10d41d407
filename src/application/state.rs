//! Application state management for the cover letter form.
//!
//! [`App`] owns the session's [`FormState`] together with the collaborators
//! it talks to (random source, clipboard, PDF exporter) and exposes one
//! handler per user action. The presentation layer only ever mutates the form
//! through these handlers.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{
    ClipboardSink, FormState, Labels, Language, LetterGenerator, LinkError, RandomSource, RngSource,
};
use crate::infrastructure::{Config, PdfExporter, SystemClipboard};

/// Represents the current mode of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Moving between fields and triggering actions
    Normal,
    /// Typing into the focused field
    Editing,
    /// Help screen is displayed
    Help,
    /// Modal notice; any key dismisses it
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// A focusable form element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Skills,
    IncludeInterest,
    Interest,
    Link(usize),
}

impl Field {
    pub fn is_text(self) -> bool {
        !matches!(self, Field::IncludeInterest)
    }
}

/// Main application state: the form plus UI state.
///
/// # Examples
///
/// ```
/// use jobhelper::application::App;
/// use jobhelper::domain::Language;
///
/// let mut app = App::default();
/// app.set_skills("testing".to_string());
/// app.set_language(Language::Pt);
/// assert_eq!(app.form.skills.pt, "testing");
/// ```
pub struct App {
    /// Everything the user has entered
    pub form: FormState,
    /// Current application mode
    pub mode: AppMode,
    /// Field that receives edits and link actions
    pub focus: Field,
    /// Input buffer while editing
    pub input: String,
    /// Cursor position within the input buffer, in characters
    pub cursor_position: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Path of the last exported PDF
    pub last_export: Option<PathBuf>,
    random: Box<dyn RandomSource>,
    clipboard: Box<dyn ClipboardSink>,
    exporter: PdfExporter,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("mode", &self.mode)
            .field("focus", &self.focus)
            .field("input", &self.input)
            .field("status_message", &self.status_message)
            .field("exporter", &self.exporter)
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_collaborators(
            config.language,
            Box::new(RngSource(rand::thread_rng())),
            Box::new(SystemClipboard::new()),
            PdfExporter::new(&config.output_dir),
        )
    }

    pub fn with_collaborators(
        language: Language,
        random: Box<dyn RandomSource>,
        clipboard: Box<dyn ClipboardSink>,
        exporter: PdfExporter,
    ) -> Self {
        Self {
            form: FormState::new(language),
            mode: AppMode::Normal,
            focus: Field::Name,
            input: String::new(),
            cursor_position: 0,
            help_scroll: 0,
            status_message: None,
            last_export: None,
            random,
            clipboard,
            exporter,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.form.language.labels()
    }

    /// Switches the interface language.
    ///
    /// Seeded link placeholders follow the new language, and skills/interest
    /// text from the other language fills the new language's slot when that
    /// slot is empty. Non-empty text is never overwritten.
    pub fn set_language(&mut self, language: Language) {
        if self.form.language == language {
            return;
        }
        self.form.language = language;
        self.form.links.relabel(language);

        let skills_filled = self.form.skills.fill_from_other(language);
        let interest_filled = self.form.interest.fill_from_other(language);
        info!(%language, skills_filled, interest_filled, "language changed");
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.form.language.other());
    }

    pub fn set_name(&mut self, value: String) {
        self.form.name = value;
    }

    pub fn set_company(&mut self, value: String) {
        self.form.company = value;
    }

    pub fn set_skills(&mut self, value: String) {
        self.form.skills.set(self.form.language, value);
    }

    pub fn set_interest(&mut self, value: String) {
        self.form.interest.set(self.form.language, value);
    }

    /// Shows or hides the interest field. Hidden interest text is kept but
    /// left out of generated letters.
    pub fn toggle_include_interest(&mut self) {
        self.form.include_interest = !self.form.include_interest;
        if !self.form.include_interest && self.focus == Field::Interest {
            self.focus = Field::IncludeInterest;
        }
    }

    pub fn add_link(&mut self) -> usize {
        let index = self.form.links.add_link();
        debug!(index, "added custom link");
        index
    }

    /// Sets a link's value. Locked or unknown links are left alone.
    pub fn change_link(&mut self, index: usize, value: String) {
        if let Err(e) = self.form.links.change_link(index, value) {
            debug!(error = %e, "link edit ignored");
        }
    }

    pub fn lock_link(&mut self, index: usize) {
        match self.form.links.lock_link(index) {
            Ok(()) => debug!(index, "link locked"),
            Err(e) => debug!(error = %e, "lock ignored"),
        }
    }

    pub fn unlock_link(&mut self, index: usize) {
        match self.form.links.unlock_link(index) {
            Ok(()) => debug!(index, "link unlocked"),
            Err(e) => debug!(error = %e, "unlock ignored"),
        }
    }

    /// Copies a locked link to the clipboard and reports the outcome as a
    /// notice. Unlocked or unknown links do nothing.
    pub fn copy_link(&mut self, index: usize) {
        let labels = self.labels();
        match self.form.links.copy_link(index, self.clipboard.as_mut()) {
            Ok(()) => {
                info!(index, "link copied");
                self.show_notice(NoticeKind::Success, labels.copy_success.to_string());
            }
            Err(LinkError::Clipboard(e)) => {
                warn!(index, error = %e, "clipboard write failed");
                self.show_notice(NoticeKind::Failure, labels.copy_failure.to_string());
            }
            Err(e) => debug!(error = %e, "copy ignored"),
        }
    }

    /// Regenerates the letter from the current form. The result is kept
    /// until the next call, even if the inputs change.
    pub fn generate_letter(&mut self) {
        self.form.letter = LetterGenerator::generate(&self.form, self.random.as_mut());
        info!(language = %self.form.language, chars = self.form.letter.len(), "letter generated");
    }

    /// Writes the last generated letter to a PDF in the output directory.
    pub fn export_pdf(&mut self) {
        let labels = self.labels();
        match self.exporter.export(&self.form.letter, &self.form.name) {
            Ok(path) => {
                self.status_message = Some(format!("{} {}", labels.export_success, path.display()));
                self.last_export = Some(path);
            }
            Err(e) => {
                warn!(error = %e, "pdf export failed");
                self.status_message = Some(format!("{}: {}", labels.export_failure, e));
            }
        }
    }

    /// The last generated letter, or a placeholder before the first one.
    pub fn preview_text(&self) -> &str {
        if self.form.letter.is_empty() {
            self.labels().preview_placeholder
        } else {
            &self.form.letter
        }
    }

    pub fn show_notice(&mut self, kind: NoticeKind, message: String) {
        self.mode = AppMode::Notice(Notice { kind, message });
    }

    pub fn dismiss_notice(&mut self) {
        if matches!(self.mode, AppMode::Notice(_)) {
            self.mode = AppMode::Normal;
        }
    }

    /// Focusable fields in display order. The interest field only exists
    /// while it is included.
    pub fn focus_order(&self) -> Vec<Field> {
        let mut fields = vec![Field::Name, Field::Company, Field::Skills, Field::IncludeInterest];
        if self.form.include_interest {
            fields.push(Field::Interest);
        }
        fields.extend((0..self.form.links.len()).map(Field::Link));
        fields
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = (current as isize + step).rem_euclid(order.len() as isize) as usize;
        self.focus = order[next];
    }

    /// Link index under focus, if the focus is on a link.
    pub fn focused_link(&self) -> Option<usize> {
        match self.focus {
            Field::Link(index) => Some(index),
            _ => None,
        }
    }

    /// Current stored value of a text field.
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.form.name,
            Field::Company => &self.form.company,
            Field::Skills => self.form.active_skills(),
            Field::Interest => self.form.active_interest(),
            Field::Link(index) => self
                .form
                .links
                .get(index)
                .map(|link| link.value.as_str())
                .unwrap_or(""),
            Field::IncludeInterest => "",
        }
    }

    /// Switches to editing mode for the focused field.
    ///
    /// Locked links cannot be edited; a hint is shown instead.
    pub fn start_editing(&mut self) {
        if !self.focus.is_text() {
            return;
        }
        if let Some(index) = self.focused_link() {
            if self.form.links.get(index).is_some_and(|link| link.is_locked()) {
                self.status_message = Some(self.labels().link_locked.to_string());
                return;
            }
        }
        self.mode = AppMode::Editing;
        self.input = self.field_value(self.focus).to_string();
        self.cursor_position = self.input.chars().count();
        self.status_message = None;
    }

    /// Commits the input buffer into the focused field.
    pub fn finish_editing(&mut self) {
        let value = std::mem::take(&mut self.input);
        match self.focus {
            Field::Name => self.set_name(value),
            Field::Company => self.set_company(value),
            Field::Skills => self.set_skills(value),
            Field::Interest => self.set_interest(value),
            Field::Link(index) => self.change_link(index, value),
            Field::IncludeInterest => {}
        }
        self.mode = AppMode::Normal;
        self.cursor_position = 0;
    }

    /// Cancels editing and returns to normal mode without saving changes.
    pub fn cancel_editing(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor_position);
        self.input.insert(offset, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let offset = self.byte_offset(self.cursor_position);
            self.input.remove(offset);
        }
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let offset = self.byte_offset(self.cursor_position);
            self.input.remove(offset);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.chars().count();
    }
}
