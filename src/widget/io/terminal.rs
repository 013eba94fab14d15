//! # Terminal I/O Implementations
//!
//! Production implementations of the I/O abstractions using crossterm.
//! All crossterm dependencies are isolated to this module.

use super::{EventStream, Page};
use crate::widget::events::InputEvent;
use crate::widget::notifier::NoticeBoard;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use futures::StreamExt;
use std::io::{self, Write};
use tokio::time::Instant;

const SEARCH_PROMPT: &str = "Search country: ";

/// Terminal-based event stream using crossterm's async event reader
pub struct TerminalEventStream {
    events: crossterm::event::EventStream,
}

impl TerminalEventStream {
    pub fn new() -> Self {
        Self {
            events: crossterm::event::EventStream::new(),
        }
    }
}

impl Default for TerminalEventStream {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStream for TerminalEventStream {
    async fn next_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            match self.events.next().await {
                None => return Ok(None),
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(Event::Key(key))) => {
                    tracing::trace!("Received key event: {:?}", key);
                    if let Some(event) = map_key_event(key) {
                        return Ok(Some(event));
                    }
                }
                Some(Ok(_)) => {}
            }
        }
    }
}

/// Translate a key press into a search box event
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char('u') if ctrl => Some(InputEvent::Clear),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(InputEvent::Insert(ch)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Puts the terminal in raw mode on an alternate screen until dropped
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Page drawn on a terminal
///
/// Setters only update the in-memory elements; `flush` redraws the whole
/// frame, including the notice currently on the board.
pub struct TerminalPage<W: Write> {
    writer: W,
    search_value: String,
    country_list: String,
    country_info: String,
    notices: NoticeBoard,
}

impl TerminalPage<io::Stdout> {
    pub fn new(notices: NoticeBoard) -> Self {
        Self::with_writer(io::stdout(), notices)
    }
}

impl<W: Write> TerminalPage<W> {
    pub fn with_writer(writer: W, notices: NoticeBoard) -> Self {
        Self {
            writer,
            search_value: String::new(),
            country_list: String::new(),
            country_info: String::new(),
            notices,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Text lines of the frame as it would be drawn at `now`
    pub fn frame_lines(&self, now: Instant) -> Vec<String> {
        let mut lines = vec![format!("{SEARCH_PROMPT}{}", self.search_value)];

        match self.notices.current(now) {
            Some(notice) => lines.push(format!("[!] {}", notice.text)),
            None => lines.push(String::new()),
        }

        lines.push("── Countries ──".to_string());
        lines.extend(markup_text_lines(&self.country_list));
        lines.push("── Details ──".to_string());
        lines.extend(markup_text_lines(&self.country_info));
        lines
    }
}

/// Flatten a container's markup into terminal lines
///
/// Block elements (`div`, `h2`, `p`, `ul`) break lines, `li` becomes a
/// bullet row and `img` becomes a `Flag:` row with its source. Inline tags
/// are dropped and entities unescaped.
pub fn markup_text_lines(markup: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        current.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            current.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let tag = &rest[open + 1..open + close];
        rest = &rest[open + close + 1..];

        let name = tag
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match name.as_str() {
            "div" | "h2" | "p" | "ul" | "br" => end_line(&mut lines, &mut current),
            "li" => {
                end_line(&mut lines, &mut current);
                if !tag.starts_with('/') {
                    current.push_str("• ");
                }
            }
            "img" => {
                end_line(&mut lines, &mut current);
                if let Some(src) = attribute(tag, "src") {
                    lines.push(format!("Flag: {}", unescape_html(src)));
                }
            }
            _ => {}
        }
    }
    current.push_str(rest);
    end_line(&mut lines, &mut current);

    lines
}

fn end_line(lines: &mut Vec<String>, current: &mut String) {
    let line = unescape_html(current.trim());
    if !line.is_empty() && line != "•" {
        lines.push(line);
    }
    current.clear();
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!(" {name}=\"");
    let start = tag.find(&marker)? + marker.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

impl<W: Write> Page for TerminalPage<W> {
    fn search_value(&self) -> String {
        self.search_value.clone()
    }

    fn set_search_value(&mut self, value: String) {
        self.search_value = value;
    }

    fn set_country_list(&mut self, markup: String) {
        self.country_list = markup;
    }

    fn set_country_info(&mut self, markup: String) {
        self.country_info = markup;
    }

    fn flush(&mut self) -> Result<()> {
        let lines = self.frame_lines(Instant::now());

        queue!(
            self.writer,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in &lines {
            queue!(self.writer, Print(line), Print("\r\n"))?;
        }

        let cursor_column = (SEARCH_PROMPT.chars().count() + self.search_value.chars().count())
            .min(u16::MAX as usize) as u16;
        queue!(self.writer, cursor::MoveTo(cursor_column, 0))?;

        self.writer.flush()?;
        Ok(())
    }
}
