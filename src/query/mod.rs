pub mod fast_lowercase;
pub mod matcher;


pub use matcher::{match_roles, role_matches};
