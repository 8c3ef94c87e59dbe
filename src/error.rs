//! Error types for menu page construction.

use thiserror::Error;

use crate::config::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("menu page was given {count} items, maximum is {PAGE_SIZE}")]
    TooManyItems { count: usize },

    #[error("headed menu page was given {count} items, maximum is one beside the heading")]
    TooManyHeaderItems { count: usize },
}
