use crate::catalog::Role;
use clap::ValueEnum;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Help,
}

/// Which part of the screen receives plain key presses
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    SearchInput,
    Results,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::SearchInput => Focus::Results,
            Focus::Results => Focus::SearchInput,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-visible search errors
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchError {
    EmptyQuery,
    SearchFailure,
}

impl SearchError {
    pub fn message(self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "Please enter a search term",
            SearchError::SearchFailure => "Failed to search roles. Please try again.",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// Search request and response for the worker thread
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchResponse {
    pub id: u64,
    /// Matching roles, or the reason the search failed
    pub outcome: Result<Vec<Role>, String>,
}
