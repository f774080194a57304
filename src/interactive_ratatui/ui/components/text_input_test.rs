#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::style::{Color, Style};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn input_with(text: &str, cursor: usize) -> TextInput {
        let mut input = TextInput::new();
        input.set_text(text.to_string());
        input.set_cursor_position(cursor);
        input
    }

    #[test]
    fn test_text_input_creation() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = TextInput::new();
        input.set_text("reset password".to_string());
        assert_eq!(input.cursor_position(), 14);
    }

    #[test]
    fn test_sync_text_keeps_caret_when_unchanged() {
        let mut input = input_with("security", 3);

        input.sync_text("security");
        assert_eq!(input.cursor_position(), 3);

        input.sync_text("");
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::new();

        assert!(input.handle_key(create_key_event(KeyCode::Char('h'))));
        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('I'),
            KeyModifiers::SHIFT
        )));

        assert_eq!(input.text(), "hI");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = input_with("rset", 1);

        assert!(input.handle_key(create_key_event(KeyCode::Char('e'))));
        assert_eq!(input.text(), "reset");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = input_with("hello", 5);

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "hell");

        input.set_cursor_position(0);
        assert!(!input.handle_key(create_key_event(KeyCode::Backspace)));
        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "ell");

        input.set_cursor_position(3);
        assert!(!input.handle_key(create_key_event(KeyCode::Delete)));
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = input_with("hello", 5);

        assert!(!input.handle_key(create_key_event(KeyCode::Left)));
        assert_eq!(input.cursor_position(), 4);

        input.handle_key(create_key_event(KeyCode::Home));
        assert_eq!(input.cursor_position(), 0);
        input.handle_key(create_key_event(KeyCode::Left));
        assert_eq!(input.cursor_position(), 0);

        input.handle_key(create_key_event(KeyCode::End));
        assert_eq!(input.cursor_position(), 5);
        input.handle_key(create_key_event(KeyCode::Right));
        assert_eq!(input.cursor_position(), 5);
    }

    #[test]
    fn test_control_shortcuts() {
        let mut input = input_with("reset user password", 19);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(input.cursor_position(), 0);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(input.cursor_position(), 1);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert_eq!(input.cursor_position(), 19);

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "reset user ");

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('h'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "reset user");
    }

    #[test]
    fn test_kill_line_shortcuts() {
        let mut input = input_with("create security group", 7);

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "create ");

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);

        assert!(!input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_unknown_control_key_does_not_insert() {
        let mut input = input_with("abc", 3);

        assert!(!input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('t'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_alt_word_movement() {
        let mut input = input_with("manage app registrations", 0);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('f'), KeyModifiers::ALT));
        assert_eq!(input.cursor_position(), 7);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('f'), KeyModifiers::ALT));
        assert_eq!(input.cursor_position(), 11);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(input.cursor_position(), 7);
        assert_eq!(input.text(), "manage app registrations");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = input_with("パスワード", 2);

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "パワード");
        assert_eq!(input.cursor_position(), 1);

        assert!(input.handle_key(create_key_event(KeyCode::Char('ス'))));
        assert_eq!(input.text(), "パスワード");
    }

    #[test]
    fn test_render_cursor_spans() {
        let cursor = Style::default().bg(Color::White).fg(Color::Black);

        let input = input_with("abc", 1);
        let spans = input.render_cursor_spans(true, cursor);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "a");
        assert_eq!(spans[1].content, "b");
        assert_eq!(spans[1].style, cursor);
        assert_eq!(spans[2].content, "c");

        let input = input_with("abc", 3);
        let spans = input.render_cursor_spans(true, cursor);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content, " ");

        let spans = input.render_cursor_spans(false, cursor);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "abc");
    }
}
