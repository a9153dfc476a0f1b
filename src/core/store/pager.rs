//! Page windows over a collection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table or card rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => write!(f, "table"),
            ViewMode::Card => write!(f, "card"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "card" => Ok(ViewMode::Card),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Page state for one screen
///
/// The window is cumulative: page `n` shows the first `n * page_size`
/// items rather than a single bounded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
    view_mode: ViewMode,
    resets_on_view_toggle: bool,
}

impl Pager {
    /// A zero page size is treated as 1
    pub fn new(page_size: usize, resets_on_view_toggle: bool) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            view_mode: ViewMode::default(),
            resets_on_view_toggle,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// `ceil(total / page_size)`, 0 for an empty list
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Page numbers to render, `1..=page_count`
    pub fn pages(&self, total: usize) -> Vec<usize> {
        (1..=self.page_count(total)).collect()
    }

    /// Items `[0, current_page * page_size)`, clamped to the list length
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self
            .current_page
            .saturating_mul(self.page_size)
            .min(items.len());
        &items[..end]
    }

    /// Move to `page` when `1 <= page <= page_count`; returns whether it moved
    pub fn change_page(&mut self, page: usize, total: usize) -> bool {
        if page >= 1 && page <= self.page_count(total) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Switch view mode, returning to page 1 when this screen does so
    pub fn toggle_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if self.resets_on_view_toggle {
            self.current_page = 1;
        }
    }
}
