//! TUI application state and logic

use crate::core::{WORD_LENGTH, Word, letters_to_string};
use crate::engine::{ConstraintEngine, FetchStatus};
use crate::output::formatters::upper_letters;
use crate::wordlists::{DictionarySource, FetchError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

const MAX_MESSAGES: usize = 5;
const PAGE_SIZE: isize = 10;
const TICK: Duration = Duration::from_millis(100);

type FetchResult = Result<Vec<Word>, FetchError>;

/// Editable letter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Grey,
    Green(usize),
    Orange(usize),
}

impl Field {
    const COUNT: usize = 1 + 2 * WORD_LENGTH;

    // Grey, Green 0-4, Orange 0-4
    const fn index(self) -> usize {
        match self {
            Self::Grey => 0,
            Self::Green(i) => 1 + i,
            Self::Orange(i) => 1 + WORD_LENGTH + i,
        }
    }

    const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Grey,
            i if i <= WORD_LENGTH => Self::Green(i - 1),
            i => Self::Orange(i - 1 - WORD_LENGTH),
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub engine: ConstraintEngine,
    pub focus: Field,
    pub scroll: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    source: Arc<DictionarySource>,
    runtime: Handle,
    pending: Option<oneshot::Receiver<FetchResult>>,
}

impl App {
    #[must_use]
    pub fn new(source: DictionarySource, runtime: Handle) -> Self {
        Self {
            engine: ConstraintEngine::new(),
            focus: Field::Grey,
            scroll: 0,
            messages: vec![Message {
                text: "Type letters into the focused field; TAB moves between fields.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            source: Arc::new(source),
            runtime,
            pending: None,
        }
    }

    /// Origin of the dictionary, for the status bar
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Spawn a dictionary fetch unless one is already running
    pub fn start_fetch(&mut self) {
        if self.pending.is_some() {
            return;
        }

        self.engine.begin_fetch();
        let (tx, rx) = oneshot::channel();
        let source = Arc::clone(&self.source);
        self.runtime.spawn(async move {
            let _ = tx.send(source.fetch().await);
        });
        self.pending = Some(rx);
        self.add_message(
            &format!("Loading word list from {}", self.source.describe()),
            MessageStyle::Info,
        );
    }

    /// Apply the fetch result if it has arrived
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(FetchError::Interrupted),
        };
        self.pending = None;

        match self.engine.complete_fetch(result) {
            Ok(count) => {
                self.scroll = 0;
                self.add_message(&format!("Loaded {count} words"), MessageStyle::Success);
            }
            Err(err) => {
                self.add_message(
                    &format!("{err}. Press Ctrl-R to retry."),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Current text of a field, lowercase
    #[must_use]
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Grey => letters_to_string(self.engine.grey_letters()),
            Field::Green(i) => self.engine.green_letters()[i]
                .map(|b| char::from(b).to_string())
                .unwrap_or_default(),
            Field::Orange(i) => letters_to_string(&self.engine.orange_letters()[i]),
        }
    }

    pub fn type_char(&mut self, c: char) {
        let mut text = self.field_text(self.focus);
        text.push(c.to_ascii_lowercase());
        self.apply_field(self.focus, &text);
    }

    pub fn backspace(&mut self) {
        let mut text = self.field_text(self.focus);
        if text.pop().is_some() {
            self.apply_field(self.focus, &text);
        }
    }

    /// Write a field value into the engine and re-filter
    pub fn apply_field(&mut self, field: Field, text: &str) {
        match field {
            Field::Grey => {
                let dropped = self.engine.set_grey_letters(text);
                if !dropped.is_empty() {
                    self.add_message(
                        &format!(
                            "{} already green/orange, not greyed",
                            upper_letters(&dropped)
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Field::Green(i) => {
                if !self.engine.set_green_letter(i, text) {
                    self.add_message(
                        "A green slot holds a single letter",
                        MessageStyle::Error,
                    );
                    return;
                }
            }
            Field::Orange(i) => self.engine.set_orange_letters(i, text),
        }

        self.engine.filter_word_list();
        self.scroll = 0;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.engine.filtered_count().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Short description of the fetch phase for the list title
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.engine.fetch_status() {
            FetchStatus::Idle | FetchStatus::Pending if self.engine.full_words().is_empty() => {
                "LOADING".to_string()
            }
            FetchStatus::Idle | FetchStatus::Pending => format!(
                "{}/{} (reloading)",
                self.engine.filtered_count(),
                self.engine.full_words().len()
            ),
            FetchStatus::Ready => format!(
                "{}/{}",
                self.engine.filtered_count(),
                self.engine.full_words().len()
            ),
            FetchStatus::Failed(_) if self.engine.full_words().is_empty() => "FAILED".to_string(),
            FetchStatus::Failed(_) => format!(
                "{}/{} (reload failed)",
                self.engine.filtered_count(),
                self.engine.full_words().len()
            ),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.start_fetch(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Left => self.focus = self.focus.prev(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-PAGE_SIZE),
            KeyCode::PageDown => self.scroll_by(PAGE_SIZE),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => self.type_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start_fetch();

    loop {
        app.poll_fetch();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
