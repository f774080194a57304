#[cfg(test)]
mod tests {
    use super::super::view_layout::{DEFAULT_STATUS_TEXT, Palette, ViewLayout};
    use crate::interactive_ratatui::domain::models::Theme;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Position};

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let area = buffer.area;
        (0..area.height).any(|y| {
            let line: String = (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            line.contains(text)
        })
    }

    #[test]
    fn test_view_layout_provides_content_area() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let layout = ViewLayout::new(Theme::Dark);
                layout.render(f, f.area(), |_f, area| {
                    assert_eq!(area.height, 19);
                    assert_eq!(area.width, 80);
                });
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Ctrl+T: Theme"));
    }

    #[test]
    fn test_view_layout_custom_status() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let layout = ViewLayout::new(Theme::Light)
                    .with_status_text(Some("Press Ctrl+C again to exit".to_string()));
                layout.render(f, f.area(), |_f, _area| {});
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Press Ctrl+C again to exit"));
        assert!(!buffer_contains_text(buffer, DEFAULT_STATUS_TEXT));
    }

    #[test]
    fn test_background_follows_theme() {
        for (theme, palette) in [(Theme::Dark, Palette::DARK), (Theme::Light, Palette::LIGHT)] {
            let backend = TestBackend::new(20, 5);
            let mut terminal = Terminal::new(backend).unwrap();

            terminal
                .draw(|f| ViewLayout::new(theme).render(f, f.area(), |_f, _area| {}))
                .unwrap();

            let buffer = terminal.backend().buffer();
            let cell = buffer.cell(Position::new(0, 0)).unwrap();
            assert_eq!(cell.bg, palette.background);
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::DARK.background, Palette::LIGHT.background);
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::DARK);
        assert_eq!(Palette::for_theme(Theme::Light), Palette::LIGHT);
    }
}
