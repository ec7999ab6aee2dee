use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows per page offered by the page-size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    All,
}

impl PageSize {
    pub const OPTIONS: [PageSize; 4] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty, PageSize::All];

    /// Row limit, `None` meaning every row
    pub fn limit(&self) -> Option<usize> {
        match self {
            PageSize::Ten => Some(10),
            PageSize::TwentyFive => Some(25),
            PageSize::Fifty => Some(50),
            PageSize::All => None,
        }
    }

    /// Query-string value
    pub fn value(&self) -> &'static str {
        match self {
            PageSize::Ten => "10",
            PageSize::TwentyFive => "25",
            PageSize::Fifty => "50",
            PageSize::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageSize::All => "All",
            other => other.value(),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid page size '{0}', expected 10, 25, 50 or all")]
pub struct InvalidPageSize(pub String);

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "10" => Ok(PageSize::Ten),
            "25" => Ok(PageSize::TwentyFive),
            "50" => Ok(PageSize::Fifty),
            "all" | "-1" => Ok(PageSize::All),
            _ => Err(InvalidPageSize(s.to_string())),
        }
    }
}

/// Configuration for the paginated table
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Pagination controls only appear above this many records
    pub threshold: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self { threshold: 10 }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn is_paginated(&self, total: usize) -> bool {
        total > self.threshold
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}
