//! Timing and layout constants for the role finder TUI

// Timing
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Window for the second Ctrl+C press, in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Simulated lookup latency used when none is configured
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 1000;

// Layout
/// Height of the search form
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the error banner when an error is shown
pub const ERROR_BANNER_HEIGHT: u16 = 1;

/// Lines scrolled by PageUp/PageDown in the results section
pub const PAGE_SIZE: usize = 10;

/// Maximum width for the help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 72;

/// Minimum margin around the help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;
