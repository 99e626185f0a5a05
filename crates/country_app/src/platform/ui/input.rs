use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means for the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Search,
    /// The query text after the edit.
    Edit(String),
}

pub fn handle_key(query: &str, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => InputAction::Quit,
        KeyCode::Char('u') if ctrl => InputAction::Edit(String::new()),
        KeyCode::Enter => InputAction::Search,
        KeyCode::Backspace => {
            let mut next = query.to_string();
            if next.pop().is_some() {
                InputAction::Edit(next)
            } else {
                InputAction::None
            }
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut next = query.to_string();
            next.push(ch);
            InputAction::Edit(next)
        }
        _ => InputAction::None,
    }
}

/// Appends pasted text, dropping line breaks so a paste never submits.
pub fn handle_paste(query: &str, pasted: &str) -> InputAction {
    let cleaned: String = pasted.chars().filter(|ch| *ch != '\n' && *ch != '\r').collect();
    if cleaned.is_empty() {
        return InputAction::None;
    }
    InputAction::Edit(format!("{query}{cleaned}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_appends_verbatim() {
        assert_eq!(
            handle_key("Fra", press(KeyCode::Char('n'))),
            InputAction::Edit("Fran".to_string())
        );
        assert_eq!(
            handle_key("", press(KeyCode::Char(' '))),
            InputAction::Edit(" ".to_string())
        );
    }

    #[test]
    fn backspace_removes_last_char() {
        assert_eq!(
            handle_key("Perú", press(KeyCode::Backspace)),
            InputAction::Edit("Per".to_string())
        );
        assert_eq!(handle_key("", press(KeyCode::Backspace)), InputAction::None);
    }

    #[test]
    fn enter_searches_and_escape_quits() {
        assert_eq!(handle_key("Peru", press(KeyCode::Enter)), InputAction::Search);
        assert_eq!(handle_key("Peru", press(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(handle_key("Peru", ctrl('c')), InputAction::Quit);
    }

    #[test]
    fn ctrl_u_clears() {
        assert_eq!(handle_key("Peru", ctrl('u')), InputAction::Edit(String::new()));
    }

    #[test]
    fn other_ctrl_chords_are_ignored() {
        assert_eq!(handle_key("Peru", ctrl('x')), InputAction::None);
    }

    #[test]
    fn paste_drops_newlines() {
        assert_eq!(
            handle_paste("new ", "zealand\n"),
            InputAction::Edit("new zealand".to_string())
        );
        assert_eq!(handle_paste("x", "\r\n"), InputAction::None);
    }
}
