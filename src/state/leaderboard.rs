use log::debug;

use crate::cache::QueryResult;
use crate::domain::{GroupFilter, PlayerRecord, ResultSet};
use crate::errors::error_chain;
use crate::pagination::{NavAction, PageSize, PageState, PaginationConfig};

/// One table row with its rank in the full ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub player: &'a PlayerRecord,
}

impl RankedRow<'_> {
    pub fn key(&self) -> String {
        self.player.row_key(self.rank)
    }
}

/// Everything that decides which part of the ranking is on screen
#[derive(Debug, Clone)]
pub struct LeaderboardState {
    filter: GroupFilter,
    page: PageState,
    results: ResultSet,
    pagination: PaginationConfig,
    last_error: Option<String>,
}

impl LeaderboardState {
    pub fn new(pagination: PaginationConfig) -> Self {
        let filter = GroupFilter::default();
        Self {
            filter,
            page: PageState::new(),
            results: ResultSet::empty(filter),
            pagination,
            last_error: None,
        }
    }

    pub fn filter(&self) -> GroupFilter {
        self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Switch group. The page goes back to 0 and results of the old group are dropped.
    pub fn set_filter(&mut self, group: GroupFilter) {
        if group != self.filter {
            self.results = ResultSet::empty(group);
            self.last_error = None;
        }
        self.filter = group;
        self.page.reset();
    }

    pub fn set_page(&mut self, n: usize) {
        self.page.set_page(n);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page.set_page_size(size);
    }

    pub fn navigate(&mut self, action: NavAction) -> bool {
        self.page.navigate(action, &self.results.records)
    }

    /// Apply a finished query. Results for a group other than the active one are discarded.
    pub fn receive(&mut self, group: GroupFilter, result: QueryResult) -> bool {
        if group != self.filter {
            debug!("Discarding ranking for {}, active group is {}", group, self.filter);
            return false;
        }

        self.last_error = result.error.as_ref().map(|e| error_chain(e));

        match result.data {
            Some(data) if data.revision != self.results.revision || data.group != self.results.group => {
                self.results = data;
                self.page.reset();
                true
            }
            _ => false,
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.pagination.is_paginated(self.results.len())
    }

    /// Rows of the current page; below the threshold every record is shown
    pub fn rows(&self) -> Vec<RankedRow<'_>> {
        let records = &self.results.records;
        if !self.is_paginated() {
            return ranked(records, 0);
        }
        ranked(self.page.visible_slice(records), self.page.offset())
    }

    pub fn top_five(&self) -> Vec<RankedRow<'_>> {
        ranked(self.results.top_five(), 0)
    }

    /// Page being shown; always 0 while every record fits on one page
    pub fn page_index(&self) -> usize {
        if !self.is_paginated() {
            return 0;
        }
        self.page.page_index()
    }

    pub fn padding_rows(&self) -> usize {
        if !self.is_paginated() {
            return 0;
        }
        self.page.padding_rows(&self.results.records)
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(&self.results.records)
    }

    pub fn nav_target(&self, action: NavAction) -> Option<usize> {
        self.page.target(action, &self.results.records)
    }

    pub fn displayed_range(&self) -> (usize, usize) {
        self.page.displayed_range(&self.results.records)
    }
}

fn ranked(records: &[PlayerRecord], offset: usize) -> Vec<RankedRow<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(i, player)| RankedRow {
            rank: offset + i + 1,
            player,
        })
        .collect()
}
