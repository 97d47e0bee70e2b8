//! Terminal collaborators
//!
//! Interactive stdin prompting, the external `$EDITOR` handoff, and terminal
//! width detection. `TermUi` implements the store's injected capability
//! traits; tests drive the workflows with stubs instead.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::Command;

use terminal_size::{terminal_size, Width};

use memo_store::{ContentEditor, Prompter, Result, StoreError};

/// Detected terminal width, or 0 when stdout is not a terminal
pub fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => w as usize,
        None => 0,
    }
}

/// Interactive terminal frontend
pub struct TermUi;

impl Prompter for TermUi {
    /// Prompt until one of the accepted answers arrives
    ///
    /// The re-prompt loop is uncapped; end-of-input aborts with an error
    /// instead of spinning.
    fn confirm(&self, prompt: &str, retry: &str, accepted: &[&str]) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt).map_err(StoreError::Io)?;
        stdout.flush().map_err(StoreError::Io)?;

        let stdin = io::stdin();
        loop {
            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| StoreError::input(e.to_string()))?;
            if read == 0 {
                return Err(StoreError::input("unexpected end of input"));
            }
            let text = line.trim();
            if accepted.contains(&text) {
                return Ok(text.to_string());
            }
            write!(stdout, "{}", retry).map_err(StoreError::Io)?;
            stdout.flush().map_err(StoreError::Io)?;
        }
    }
}

impl ContentEditor for TermUi {
    /// Open `$EDITOR` on a temp file seeded with the current content and
    /// block until it exits
    fn acquire(&self, seed: &str) -> Result<String> {
        let editor = std::env::var("EDITOR").unwrap_or_default();
        let editor = editor.trim();
        if editor.is_empty() {
            return Err(StoreError::editor("EDITOR is not set"));
        }

        let mut file = tempfile::Builder::new()
            .prefix("memo-")
            .tempfile()
            .map_err(StoreError::Io)?;
        file.write_all(seed.as_bytes()).map_err(StoreError::Io)?;
        file.flush().map_err(StoreError::Io)?;

        let status = Command::new(editor)
            .arg(file.path())
            .status()
            .map_err(|e| StoreError::editor(format!("failed to launch '{}': {}", editor, e)))?;
        if !status.success() {
            return Err(StoreError::editor(format!(
                "'{}' exited with {}",
                editor, status
            )));
        }

        fs::read_to_string(file.path()).map_err(StoreError::Io)
    }
}
