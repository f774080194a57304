//! Glyphs standing in for the icon set used across the screen.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ShieldCheck,
    Shield,
    Sun,
    Moon,
    Search,
    SearchX,
    Loader,
    AlertCircle,
    Star,
    Key,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ShieldCheck => "⛨",
            Icon::Shield => "◆",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Search => "⌕",
            Icon::SearchX => "⊘",
            Icon::Loader => "⟳",
            Icon::AlertCircle => "⚠",
            Icon::Star => "★",
            Icon::Key => "⚷",
        }
    }

    /// Glyph followed by a single space, ready to prefix a label
    pub fn prefix(self) -> String {
        format!("{} ", self.glyph())
    }
}
