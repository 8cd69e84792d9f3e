//! Skeleton selection menu
//!
//! The loop only sees [`MenuKey`]s through a [`KeySource`], so the raw
//! terminal can be swapped for a scripted source in tests.

use crate::error::{Result, ScaffoldError};
use crate::generate::generate;
use crate::product::ProductConfig;
use crate::root::OutputRoot;
use crate::screen;
use crate::skeleton::SkeletonKind;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Menu output is drawn while the terminal is in raw mode
const RAW_LINE_ENDING: &str = "\r\n";

/// Keys the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    Cancel,
    Other,
}

/// Source of menu keys
pub trait KeySource {
    /// Block until the next key is available
    fn read_key(&mut self) -> io::Result<MenuKey>;
}

/// Cursor over [`SkeletonKind::ALL`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    position: usize,
}

impl MenuState {
    const LEN: usize = SkeletonKind::ALL.len();

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn advance(&mut self) {
        self.position = (self.position + 1) % Self::LEN;
    }

    pub fn retreat(&mut self) {
        self.position = (self.position + Self::LEN - 1) % Self::LEN;
    }
}

/// Menu text with the entry at `position` marked
pub fn render_menu(position: usize) -> String {
    let mut text = String::from("select a skeleton:\n");
    for (i, kind) in SkeletonKind::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}", i + 1, kind.label()));
        if i == position {
            text.push_str(" *");
        }
        text.push('\n');
    }
    text
}

fn redraw<W: Write>(out: &mut W, state: &MenuState) -> io::Result<()> {
    screen::clear(out)?;
    screen::write_lines(out, &render_menu(state.position()), RAW_LINE_ENDING)
}

/// Run the menu until a skeleton is confirmed or the user cancels
///
/// Read errors are reported and the loop keeps waiting for the next key.
pub fn select<K: KeySource, W: Write>(keys: &mut K, out: &mut W) -> Result<Option<SkeletonKind>> {
    let mut state = MenuState::default();
    redraw(out, &state).map_err(ScaffoldError::Output)?;

    loop {
        let key = match keys.read_key() {
            Ok(key) => key,
            Err(e) => {
                write!(out, "{} {}{}", "error reading key:".yellow(), e, RAW_LINE_ENDING)
                    .and_then(|_| out.flush())
                    .map_err(ScaffoldError::Output)?;
                continue;
            }
        };

        match key {
            MenuKey::Down => {
                state.advance();
                redraw(out, &state).map_err(ScaffoldError::Output)?;
            }
            MenuKey::Up => {
                state.retreat();
                redraw(out, &state).map_err(ScaffoldError::Output)?;
            }
            MenuKey::Cancel => {
                screen::clear(out).map_err(ScaffoldError::Output)?;
                return Ok(None);
            }
            MenuKey::Confirm => {
                screen::clear(out).map_err(ScaffoldError::Output)?;
                return SkeletonKind::from_position(state.position()).map(Some);
            }
            MenuKey::Other => {}
        }
    }
}

/// Select a skeleton with `keys`, release them, then generate it
///
/// `keys` is dropped before the generator runs, so a raw terminal is back
/// to normal by the time instructions are printed.
pub fn plant<K: KeySource, C: ProductConfig, W: Write>(
    mut keys: K,
    root: &OutputRoot,
    base: &Path,
    config: &C,
    out: &mut W,
) -> Result<Option<SkeletonKind>> {
    let choice = select(&mut keys, out);
    drop(keys);

    match choice? {
        Some(kind) => {
            generate(kind, root, base, config, out)?;
            Ok(Some(kind))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::tests::TestConfig;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::fs;
    use std::rc::Rc;

    struct ScriptedKeys {
        keys: VecDeque<io::Result<MenuKey>>,
    }

    impl ScriptedKeys {
        fn new(keys: impl IntoIterator<Item = MenuKey>) -> Self {
            Self {
                keys: keys.into_iter().map(Ok).collect(),
            }
        }

        fn with_error_first(mut self) -> Self {
            self.keys
                .push_front(Err(io::Error::other("device gone")));
            self
        }
    }

    impl KeySource for ScriptedKeys {
        fn read_key(&mut self) -> io::Result<MenuKey> {
            self.keys
                .pop_front()
                .unwrap_or_else(|| panic!("menu asked for a key after the script ended"))
        }
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = MenuState::default();
        for n in 1..=10 {
            state.advance();
            assert_eq!(state.position(), n % 3);
        }
    }

    #[test]
    fn test_retreat_wraps() {
        let mut state = MenuState::default();
        for n in 1..=10 {
            state.retreat();
            assert_eq!(state.position(), (3 - n % 3) % 3);
        }
    }

    #[test]
    fn test_render_marks_selected_entry() {
        assert_eq!(
            render_menu(1),
            "select a skeleton:\n1. server\n2. cli *\n3. library\n"
        );
    }

    #[test]
    fn test_confirm_maps_each_position() {
        let cases = [
            (vec![], SkeletonKind::Server),
            (vec![MenuKey::Down], SkeletonKind::Cli),
            (vec![MenuKey::Down, MenuKey::Down], SkeletonKind::Library),
            (vec![MenuKey::Up], SkeletonKind::Library),
            (vec![MenuKey::Down; 3], SkeletonKind::Server),
        ];

        for (moves, expected) in cases {
            let mut keys = ScriptedKeys::new(moves.into_iter().chain([MenuKey::Confirm]));
            let mut out = Vec::new();
            let selected = select(&mut keys, &mut out).unwrap();
            assert_eq!(selected, Some(expected));
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut keys = ScriptedKeys::new([
            MenuKey::Other,
            MenuKey::Down,
            MenuKey::Other,
            MenuKey::Confirm,
        ]);
        let mut out = Vec::new();

        let selected = select(&mut keys, &mut out).unwrap();

        assert_eq!(selected, Some(SkeletonKind::Cli));
        let printed = String::from_utf8(out).unwrap();
        // Initial draw and one redraw, then the final clear
        assert_eq!(printed.matches("select a skeleton:").count(), 2);
        assert!(printed.ends_with(screen::CLEAR_SCREEN));
    }

    #[test]
    fn test_redraw_uses_raw_line_endings() {
        let mut keys = ScriptedKeys::new([MenuKey::Cancel]);
        let mut out = Vec::new();

        select(&mut keys, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("select a skeleton:\r\n1. server *\r\n2. cli\r\n"));
    }

    #[test]
    fn test_read_error_keeps_looping() {
        let mut keys = ScriptedKeys::new([MenuKey::Down, MenuKey::Confirm]).with_error_first();
        let mut out = Vec::new();

        let selected = select(&mut keys, &mut out).unwrap();

        assert_eq!(selected, Some(SkeletonKind::Cli));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("error reading key:"));
        assert!(printed.contains("device gone"));
    }

    #[test]
    fn test_cancel_creates_nothing_at_any_position() {
        for moves in 0..3 {
            let tmp = tempfile::tempdir().unwrap();
            let keys = ScriptedKeys::new(
                std::iter::repeat(MenuKey::Down)
                    .take(moves)
                    .chain([MenuKey::Cancel]),
            );
            let mut out = Vec::new();

            let planted = plant(
                keys,
                &OutputRoot::parse("myapp"),
                tmp.path(),
                &TestConfig,
                &mut out,
            )
            .unwrap();

            assert_eq!(planted, None);
            assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
        }
    }

    #[test]
    fn test_plant_generates_confirmed_skeleton() {
        let tmp = tempfile::tempdir().unwrap();
        let keys = ScriptedKeys::new([MenuKey::Up, MenuKey::Confirm]);
        let mut out = Vec::new();

        let planted = plant(
            keys,
            &OutputRoot::CurrentDir,
            tmp.path(),
            &TestConfig,
            &mut out,
        )
        .unwrap();

        assert_eq!(planted, Some(SkeletonKind::Library));
        assert!(tmp.path().join("lib.go").is_file());
        assert!(tmp.path().join("lib_test.go").is_file());
    }

    #[test]
    fn test_plant_propagates_generator_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("myapp")).unwrap();
        let keys = ScriptedKeys::new([MenuKey::Confirm]);
        let mut out = Vec::new();

        let err = plant(
            keys,
            &OutputRoot::parse("myapp"),
            tmp.path(),
            &TestConfig,
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::RootExists { .. }));
    }

    /// Key source that flags when it is dropped, like a raw terminal restoring itself
    struct ReleasingKeys {
        keys: ScriptedKeys,
        released: Rc<Cell<bool>>,
    }

    impl KeySource for ReleasingKeys {
        fn read_key(&mut self) -> io::Result<MenuKey> {
            self.keys.read_key()
        }
    }

    impl Drop for ReleasingKeys {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    /// Splits output by whether the keys were released when it was written
    struct ReleaseAwareOut {
        released: Rc<Cell<bool>>,
        while_held: Vec<u8>,
        after_release: Vec<u8>,
    }

    impl Write for ReleaseAwareOut {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.released.get() {
                self.after_release.extend_from_slice(buf);
            } else {
                self.while_held.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plant_releases_keys_before_generating() {
        let tmp = tempfile::tempdir().unwrap();
        let released = Rc::new(Cell::new(false));
        let keys = ReleasingKeys {
            keys: ScriptedKeys::new([MenuKey::Down, MenuKey::Confirm]),
            released: Rc::clone(&released),
        };
        let mut out = ReleaseAwareOut {
            released: Rc::clone(&released),
            while_held: Vec::new(),
            after_release: Vec::new(),
        };

        let planted = plant(
            keys,
            &OutputRoot::parse("tool"),
            tmp.path(),
            &TestConfig,
            &mut out,
        )
        .unwrap();

        assert_eq!(planted, Some(SkeletonKind::Cli));
        assert!(released.get());

        let held = String::from_utf8(out.while_held).unwrap();
        let after = String::from_utf8(out.after_release).unwrap();
        assert!(held.contains("select a skeleton:"));
        assert!(!held.contains("to install required packages run:"));
        assert!(after.contains("to install required packages run:"));
        assert!(after.contains("thank you for using seed"));
    }

    #[test]
    fn test_plant_releases_keys_on_cancel() {
        let released = Rc::new(Cell::new(false));
        let keys = ReleasingKeys {
            keys: ScriptedKeys::new([MenuKey::Cancel]),
            released: Rc::clone(&released),
        };
        let mut out = Vec::new();

        let planted = plant(
            keys,
            &OutputRoot::CurrentDir,
            Path::new("unused"),
            &TestConfig,
            &mut out,
        )
        .unwrap();

        assert_eq!(planted, None);
        assert!(released.get());
    }
}
