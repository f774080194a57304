#[cfg(test)]
mod tests {
    use super::super::models::*;

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_flips_between_two_values() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::SearchInput.toggled(), Focus::Results);
        assert_eq!(Focus::Results.toggled(), Focus::SearchInput);
    }

    #[test]
    fn test_search_error_messages() {
        assert_eq!(
            SearchError::EmptyQuery.message(),
            "Please enter a search term"
        );
        assert_eq!(
            SearchError::SearchFailure.to_string(),
            "Failed to search roles. Please try again."
        );
    }

    #[test]
    fn test_search_request_clone() {
        let request = SearchRequest {
            id: 7,
            query: "reset password".to_string(),
        };
        let cloned = request.clone();
        assert_eq!(cloned.id, 7);
        assert_eq!(cloned.query, "reset password");
    }
}
