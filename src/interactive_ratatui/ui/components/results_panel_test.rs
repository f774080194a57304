#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::results_panel::*;
    use crate::catalog::{Catalog, Role};
    use crate::interactive_ratatui::ui::app_state::AppState;
    use crate::interactive_ratatui::ui::events::Message;
    use crate::query::match_roles;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        buffer_lines(buffer).iter().any(|line| line.contains(text))
    }

    /// State after a completed search for `query` against the built-in catalog
    fn searched_state(query: &str) -> AppState {
        let mut state = AppState::new();
        state.update(Message::QueryChanged(query.to_string()));
        state.update(Message::SearchRequested);
        let id = state.search.current_search_id;
        let roles = match_roles(query, Catalog::builtin().roles());
        state.update(Message::SearchCompleted { id, roles });
        state
    }

    fn render(panel: &mut ResultsPanel, state: &AppState, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                panel.sync(state, f.area().width);
                panel.render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_loading_view() {
        let mut state = AppState::new();
        state.update(Message::QueryChanged("security".to_string()));
        state.update(Message::SearchRequested);

        let mut panel = ResultsPanel::new();
        let buffer = render(&mut panel, &state, 80, 10);

        assert!(buffer_contains(&buffer, RESULTS_TITLE));
        assert!(buffer_contains(&buffer, "Searching..."));
        assert!(buffer_contains(&buffer, LOADING_TEXT));
        assert!(!buffer_contains(&buffer, NO_RESULTS_TEXT));
    }

    #[test]
    fn test_empty_results_view() {
        let state = searched_state("zzz-no-match");

        let mut panel = ResultsPanel::new();
        let buffer = render(&mut panel, &state, 80, 10);

        assert!(buffer_contains(&buffer, "0 roles found"));
        assert!(buffer_contains(&buffer, NO_RESULTS_TEXT));
        assert!(buffer_contains(&buffer, NO_RESULTS_HINT));
        assert!(state.search.error.is_none());
    }

    #[test]
    fn test_single_result_count() {
        let state = searched_state("compliance");

        let mut panel = ResultsPanel::new();
        let buffer = render(&mut panel, &state, 80, 12);

        assert!(buffer_contains(&buffer, "1 role found"));
        assert!(!buffer_contains(&buffer, "1 roles found"));
        assert!(buffer_contains(&buffer, "Compliance Data Administrator"));
        assert!(buffer_contains(&buffer, "Recommended"));
    }

    #[test]
    fn test_cards_in_order_with_badge_on_first_only() {
        let state = searched_state("security");

        let mut panel = ResultsPanel::new();
        let buffer = render(&mut panel, &state, 100, 40);
        let lines = buffer_lines(&buffer);

        assert!(buffer_contains(&buffer, "3 roles found"));

        let row_of = |text: &str| lines.iter().position(|l| l.contains(text)).unwrap();
        let reader = row_of("Security Reader");
        let groups = row_of("Groups Administrator");
        let access = row_of("User Access Administrator");
        assert!(reader < groups && groups < access);

        assert!(lines[reader].contains("★"));
        assert!(lines[reader].contains("Recommended"));
        assert!(!lines[groups].contains("Recommended"));
        assert!(!lines[access].contains("★"));

        assert!(buffer_contains(&buffer, "Read security metrics and reports without making changes."));
        assert!(buffer_contains(&buffer, PERMISSIONS_HEADER));
        assert!(buffer_contains(&buffer, " SecurityEvents.Read.All "));
        assert!(buffer_contains(&buffer, " RoleManagement.ReadWrite.Directory "));
        assert!(buffer_contains(&buffer, " AccessReview.ReadWrite.All "));
    }

    #[test]
    fn test_view_is_memoized_on_revision() {
        let mut state = searched_state("security");
        let mut panel = ResultsPanel::new();

        render(&mut panel, &state, 80, 20);
        assert_eq!(panel.build_count(), 1);

        // Keystrokes go through the fast path and leave the section alone
        for query in ["securit", "securi", "secur"] {
            state.update(Message::QueryChanged(query.to_string()));
            render(&mut panel, &state, 80, 20);
        }
        assert_eq!(panel.build_count(), 1);

        state.update(Message::ToggleTheme);
        render(&mut panel, &state, 80, 20);
        assert_eq!(panel.build_count(), 2);

        // A width change also rebuilds, since cards wrap to the width
        render(&mut panel, &state, 60, 20);
        assert_eq!(panel.build_count(), 3);
    }

    #[test]
    fn test_navigation_keys() {
        let state = searched_state("security");
        let mut panel = ResultsPanel::new();
        render(&mut panel, &state, 80, 20);

        let msg = panel.handle_key(create_key_event(KeyCode::Down));
        assert!(matches!(msg, Some(Message::SelectResult(1))));

        let msg = panel.handle_key(create_key_event(KeyCode::End));
        assert!(matches!(msg, Some(Message::SelectResult(2))));

        // Already at the top
        assert!(panel.handle_key(create_key_event(KeyCode::Up)).is_none());

        let msg = panel.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::FocusSearchInput)));
    }

    #[test]
    fn test_navigation_with_no_results() {
        let state = searched_state("zzz-no-match");
        let mut panel = ResultsPanel::new();
        render(&mut panel, &state, 80, 20);

        assert!(panel.handle_key(create_key_event(KeyCode::Down)).is_none());
        assert!(panel.handle_key(create_key_event(KeyCode::End)).is_none());
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut state = searched_state("a");
        assert!(state.search.results.len() >= 8);

        let mut panel = ResultsPanel::new();
        render(&mut panel, &state, 80, 10);
        assert_eq!(panel.scroll_offset(), 0);

        let last = state.search.results.len() - 1;
        state.update(Message::ToggleFocus);
        state.update(Message::SelectResult(last));
        let buffer = render(&mut panel, &state, 80, 10);

        assert!(panel.scroll_offset() > 0);
        let name = state.search.results[last].name.clone();
        assert!(buffer_contains(&buffer, &name));
    }

    #[test]
    fn test_card_at_row() {
        let state = searched_state("security");
        let mut panel = ResultsPanel::new();
        render(&mut panel, &state, 80, 30);

        // Rows 0-1 are the section header
        assert_eq!(panel.card_at_row(0), None);
        assert_eq!(panel.card_at_row(2), Some(0));
        assert_eq!(panel.card_at_row(3), Some(0));
        assert_eq!(panel.card_at_row(6), Some(0));
        assert_eq!(panel.card_at_row(7), Some(1));
        assert_eq!(panel.card_at_row(12), Some(2));
        // Below the last card
        assert_eq!(panel.card_at_row(25), None);
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("Manage user access to resources", 12),
            vec!["Manage user", "access to", "resources"]
        );
        assert_eq!(wrap_words("", 10), Vec::<String>::new());
        assert_eq!(
            wrap_words("RoleManagement.ReadWrite.Directory x", 10),
            vec!["RoleManagement.ReadWrite.Directory", "x"]
        );
    }

    #[test]
    fn test_pack_tags() {
        let tags = vec![
            "User.Read.All".to_string(),
            "Group.Read.All".to_string(),
            "Directory.Read.All".to_string(),
        ];

        // Each tag costs its length plus three cells
        assert_eq!(pack_tags(&tags, 100).len(), 1);
        assert_eq!(
            pack_tags(&tags, 33),
            vec![vec!["User.Read.All", "Group.Read.All"], vec!["Directory.Read.All"]]
        );
        assert!(pack_tags(&[], 10).is_empty());
    }

    #[test]
    fn test_duplicate_permissions_render_individually() {
        let mut state = AppState::new();
        state.update(Message::QueryChanged("dup".to_string()));
        state.update(Message::SearchRequested);
        let id = state.search.current_search_id;
        state.update(Message::SearchCompleted {
            id,
            roles: vec![Role::new(1, "Dup Role", "dup", &["X.Read", "X.Read"])],
        });

        let mut panel = ResultsPanel::new();
        let buffer = render(&mut panel, &state, 80, 12);
        let tag_line = buffer_lines(&buffer)
            .into_iter()
            .find(|l| l.contains("X.Read"))
            .unwrap();
        assert_eq!(tag_line.matches("X.Read").count(), 2);
    }
}
