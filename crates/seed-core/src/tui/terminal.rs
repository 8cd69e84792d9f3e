//! Raw keyboard capture backed by crossterm

use crate::menu::{KeySource, MenuKey};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;

/// Terminal in raw mode for as long as the value lives
///
/// Raw mode is disabled on drop, which covers early returns, `?` and
/// unwinding panics alike.
pub struct RawTerminal {
    _raw: (),
}

impl RawTerminal {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _raw: () })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        restore();
    }
}

impl KeySource for RawTerminal {
    fn read_key(&mut self) -> io::Result<MenuKey> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(map_key(key)),
                _ => continue,
            }
        }
    }
}

/// Translate a crossterm key event into a menu key
///
/// Ctrl+C, Ctrl+X and Ctrl+Z all cancel; in raw mode none of them reach
/// the process as signals.
pub fn map_key(key: KeyEvent) -> MenuKey {
    match key.code {
        KeyCode::Up => MenuKey::Up,
        KeyCode::Down => MenuKey::Down,
        KeyCode::Enter => MenuKey::Confirm,
        KeyCode::Char(c)
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(c.to_ascii_lowercase(), 'c' | 'x' | 'z') =>
        {
            MenuKey::Cancel
        }
        _ => MenuKey::Other,
    }
}

/// Best-effort terminal restore for panic hooks and signal handlers
pub fn restore() {
    let _ = terminal::disable_raw_mode();
}
