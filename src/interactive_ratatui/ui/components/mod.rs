pub mod error_banner;
pub mod header;
pub mod help_dialog;
pub mod results_panel;
pub mod search_bar;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod help_dialog_test;
#[cfg(test)]
mod results_panel_test;
#[cfg(test)]
mod text_input_test;
#[cfg(test)]
mod view_layout_test;

use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Whether the status message is the pending Ctrl+C prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exit_prompt() {
        assert!(is_exit_prompt(&Some(EXIT_PROMPT.to_string())));
        assert!(!is_exit_prompt(&Some("Theme: light".to_string())));
        assert!(!is_exit_prompt(&Some(String::new())));
        assert!(!is_exit_prompt(&None));
    }
}
