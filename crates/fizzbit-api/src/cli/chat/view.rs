//! Terminal rendering of the chat widget.
//!
//! Output goes through the readline `SharedWriter`, which holds a partial
//! line until its newline arrives; a bot reply therefore shows up once its
//! reveal completes or is skipped.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline_async::SharedWriter;

use fizzbit_core::widget::state::MessageId;
use fizzbit_core::widget::view::{ChatView, Notice, NoticeLevel};
use fizzbit_core::widget::Mood;
use fizzbit_types::chat::ChatRole;

struct Terminal {
    writer: SharedWriter,
    /// Bytes of each bot message already written.
    printed: HashMap<MessageId, usize>,
    spinner: Option<ProgressBar>,
    mood: Mood,
}

pub struct TerminalView {
    terminal: Mutex<Terminal>,
}

/// Mascot face for `mood`.
pub fn mood_face(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "😼",
        Mood::Thinking => "🤔",
        Mood::Sad => "😿",
    }
}

/// Readline prompt showing the mascot's current mood.
pub fn prompt_for(mood: Mood) -> String {
    format!("  {} {} ", mood_face(mood), style("You >").green().bold())
}

/// Part of `text` not yet written, given `printed` bytes already are.
fn unrevealed(text: &str, printed: usize) -> &str {
    text.get(printed..).unwrap_or("")
}

fn notice_icon(level: NoticeLevel) -> String {
    match level {
        NoticeLevel::Info => style("i").cyan().bold().to_string(),
        NoticeLevel::Success => style("✓").green().bold().to_string(),
        NoticeLevel::Warning => style("!").yellow().bold().to_string(),
        NoticeLevel::Error => style("✗").red().bold().to_string(),
    }
}

impl TerminalView {
    pub fn new(writer: SharedWriter) -> Self {
        Self {
            terminal: Mutex::new(Terminal {
                writer,
                printed: HashMap::new(),
                spinner: None,
                mood: Mood::Happy,
            }),
        }
    }

    fn with_terminal<R>(&self, f: impl FnOnce(&mut Terminal) -> R) -> R {
        let mut terminal = self.terminal.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut terminal)
    }

    pub fn mood(&self) -> Mood {
        self.with_terminal(|t| t.mood)
    }

    /// Print one full line above the prompt.
    pub fn line(&self, text: &str) {
        self.with_terminal(|t| {
            let _ = writeln!(t.writer, "{text}");
        });
    }

    /// Dim hint line.
    pub fn hint(&self, text: &str) {
        self.line(&format!("  {}", style(text).dim()));
    }

    /// Stop the spinner if one is running.
    pub fn finish(&self) {
        self.with_terminal(|t| {
            if let Some(spinner) = t.spinner.take() {
                spinner.finish_and_clear();
            }
        });
    }
}

impl ChatView for TerminalView {
    fn show_panel(&self) {
        self.hint("🛸 Chat panel open. Say something, Earthling.");
    }

    fn focus_input(&self) {}

    fn begin_close(&self) {
        self.hint("Closing the chat panel...");
    }

    fn hide_panel(&self) {
        self.hint("😼 Fizzbit is back on Saturn's rings. /open to chat again.");
    }

    fn append_message(&self, id: MessageId, role: ChatRole, text: &str) {
        self.with_terminal(|t| match role {
            ChatRole::User => {
                let _ = writeln!(t.writer, "  {} {text}", style("You >").green().bold());
            }
            ChatRole::Bot => {
                let _ = write!(
                    t.writer,
                    "\n  {} {} {text}",
                    mood_face(t.mood),
                    style("Fizzbit").magenta().bold()
                );
                t.printed.insert(id, text.len());
            }
        });
    }

    fn set_message_text(&self, id: MessageId, text: &str) {
        self.with_terminal(|t| {
            let printed = t.printed.get(&id).copied().unwrap_or(0);
            let _ = write!(t.writer, "{}", unrevealed(text, printed));
            t.printed.insert(id, text.len().max(printed));
        });
    }

    fn message_revealed(&self, id: MessageId) {
        self.with_terminal(|t| {
            if t.printed.remove(&id).is_some() {
                let _ = writeln!(t.writer);
                let _ = writeln!(t.writer);
            }
        });
    }

    fn scroll_to_bottom(&self) {}

    fn clear_input(&self) {}

    fn set_loading(&self, loading: bool) {
        self.with_terminal(|t| {
            if let Some(spinner) = t.spinner.take() {
                spinner.finish_and_clear();
            }
            if loading {
                let spinner = ProgressBar::new_spinner();
                if let Ok(spinner_style) =
                    ProgressStyle::default_spinner().template("  {spinner:.magenta} {msg}")
                {
                    spinner.set_style(spinner_style);
                }
                spinner.set_message("Fizzbit is thinking...");
                spinner.enable_steady_tick(Duration::from_millis(80));
                t.spinner = Some(spinner);
            }
        });
    }

    fn set_mood(&self, mood: Mood) {
        self.with_terminal(|t| t.mood = mood);
    }

    fn notice(&self, notice: &Notice) {
        self.with_terminal(|t| {
            let _ = writeln!(t.writer, "  {} {}", notice_icon(notice.level), notice.text);
        });
    }
}
