// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const CHORD_KEY: char = 'g';

/// What a single key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    FocusOutline,
    CycleFocus,
    Quit,
    Move(isize),
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    JumpTop,
    JumpBottom,
    SelectCurrent,
    Expand,
    Collapse,
    Noop,
}

/// Maps key events to actions.
///
/// Holds exactly one unit of state: whether the previous key started the `g g` chord.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputRouter {
    pending_chord: Option<char>,
}

impl InputRouter {
    #[cfg(test)]
    pub(crate) fn pending_chord(&self) -> Option<char> {
        self.pending_chord
    }

    pub(crate) fn route(&mut self, key: KeyEvent) -> Action {
        let pending = self.pending_chord.take();

        if is_chord_key(key) {
            if pending == Some(CHORD_KEY) {
                return Action::JumpTop;
            }
            self.pending_chord = Some(CHORD_KEY);
            return Action::Noop;
        }

        action_for_key(key)
    }
}

fn is_chord_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Char(CHORD_KEY)
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn action_for_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') => Action::HalfPageDown,
            KeyCode::Char('u') => Action::HalfPageUp,
            KeyCode::Char('f') => Action::PageDown,
            KeyCode::Char('b') => Action::PageUp,
            _ => Action::Noop,
        };
    }

    match key.code {
        KeyCode::Char('e' | 'E') => Action::FocusOutline,
        KeyCode::Char('q' | 'Q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::Move(1),
        KeyCode::Char('k') | KeyCode::Up => Action::Move(-1),
        KeyCode::Char('G') | KeyCode::End => Action::JumpBottom,
        KeyCode::Home => Action::JumpTop,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Enter => Action::SelectCurrent,
        KeyCode::Right => Action::Expand,
        KeyCode::Left => Action::Collapse,
        KeyCode::Tab | KeyCode::BackTab => Action::CycleFocus,
        _ => Action::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rstest::rstest;

    use super::{Action, InputRouter};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn route_all(keys: &[KeyEvent]) -> Vec<Action> {
        let mut router = InputRouter::default();
        keys.iter().map(|key| router.route(*key)).collect()
    }

    #[rstest]
    #[case(key(KeyCode::Char('e')), Action::FocusOutline)]
    #[case(key(KeyCode::Char('E')), Action::FocusOutline)]
    #[case(key(KeyCode::Char('q')), Action::Quit)]
    #[case(key(KeyCode::Char('Q')), Action::Quit)]
    #[case(key(KeyCode::Char('j')), Action::Move(1))]
    #[case(key(KeyCode::Down), Action::Move(1))]
    #[case(key(KeyCode::Char('k')), Action::Move(-1))]
    #[case(key(KeyCode::Up), Action::Move(-1))]
    #[case(ctrl('d'), Action::HalfPageDown)]
    #[case(ctrl('u'), Action::HalfPageUp)]
    #[case(ctrl('f'), Action::PageDown)]
    #[case(ctrl('b'), Action::PageUp)]
    #[case(key(KeyCode::Home), Action::JumpTop)]
    #[case(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), Action::JumpBottom)]
    #[case(key(KeyCode::End), Action::JumpBottom)]
    #[case(key(KeyCode::Enter), Action::SelectCurrent)]
    #[case(key(KeyCode::Right), Action::Expand)]
    #[case(key(KeyCode::Left), Action::Collapse)]
    #[case(key(KeyCode::Tab), Action::CycleFocus)]
    #[case(key(KeyCode::Char('x')), Action::Noop)]
    #[case(ctrl('x'), Action::Noop)]
    fn maps_fixed_key_table(#[case] event: KeyEvent, #[case] expected: Action) {
        assert_eq!(InputRouter::default().route(event), expected);
    }

    #[test]
    fn double_g_jumps_to_top() {
        let g = key(KeyCode::Char('g'));
        assert_eq!(route_all(&[g, g]), vec![Action::Noop, Action::JumpTop]);
    }

    #[test]
    fn intervening_key_cancels_chord() {
        let g = key(KeyCode::Char('g'));
        let j = key(KeyCode::Char('j'));
        assert_eq!(route_all(&[g, j]), vec![Action::Noop, Action::Move(1)]);
        assert_eq!(route_all(&[g, j, g]), vec![Action::Noop, Action::Move(1), Action::Noop]);
    }

    #[test]
    fn triple_g_jumps_once_and_rearms() {
        let g = key(KeyCode::Char('g'));
        assert_eq!(route_all(&[g, g, g]), vec![Action::Noop, Action::JumpTop, Action::Noop]);
        assert_eq!(
            route_all(&[g, g, g, g]),
            vec![Action::Noop, Action::JumpTop, Action::Noop, Action::JumpTop]
        );
    }

    #[test]
    fn unmapped_key_clears_pending_chord() {
        let mut router = InputRouter::default();
        router.route(key(KeyCode::Char('g')));
        assert_eq!(router.pending_chord(), Some('g'));
        assert_eq!(router.route(key(KeyCode::Char('z'))), Action::Noop);
        assert_eq!(router.pending_chord(), None);
        assert_eq!(router.route(key(KeyCode::Char('g'))), Action::Noop);
    }

    #[test]
    fn ctrl_g_is_not_part_of_the_chord() {
        let g = key(KeyCode::Char('g'));
        assert_eq!(route_all(&[g, ctrl('g'), g]), vec![Action::Noop, Action::Noop, Action::Noop]);
    }
}
