//! Terminal key handling.
//!
//! Maps crossterm events onto the two logical triggers the game understands.
//! Space is the only action key; what it does depends on the session phase.

use crate::runner::RunnerInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press. Releases (reported on some platforms) map to `None`.
pub fn map_key(key: KeyEvent) -> Option<RunnerInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let input = match key.code {
        KeyCode::Char(' ') => RunnerInput::Action,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => RunnerInput::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => RunnerInput::Quit,
        _ => RunnerInput::Other,
    };
    Some(input)
}

/// Translate any terminal event. Only key events carry input; resizes are
/// picked up by the renderer on the next draw.
pub fn map_event(event: Event) -> Option<RunnerInput> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_space_is_action() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(RunnerInput::Action));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(RunnerInput::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(RunnerInput::Quit));
        assert_eq!(map_key(press(KeyCode::Char('Q'))), Some(RunnerInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(RunnerInput::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(RunnerInput::Other));
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(RunnerInput::Other));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(RunnerInput::Other));
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_non_key_events_ignored() {
        assert_eq!(map_event(Event::Resize(80, 24)), None);
        assert_eq!(map_event(Event::FocusLost), None);
        assert_eq!(
            map_event(Event::Key(press(KeyCode::Char(' ')))),
            Some(RunnerInput::Action)
        );
    }
}
