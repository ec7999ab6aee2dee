use super::config::PageSize;

/// Page navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Previous,
    Next,
    Last,
}

impl NavAction {
    pub const ALL: [NavAction; 4] = [NavAction::First, NavAction::Previous, NavAction::Next, NavAction::Last];

    pub fn aria_label(&self) -> &'static str {
        match self {
            NavAction::First => "first page",
            NavAction::Previous => "previous page",
            NavAction::Next => "next page",
            NavAction::Last => "last page",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            NavAction::First => "⏮",
            NavAction::Previous => "‹",
            NavAction::Next => "›",
            NavAction::Last => "⏭",
        }
    }
}

/// Current page index and page size of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    page_index: usize,
    page_size: PageSize,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Any index is accepted; out-of-range pages simply show no rows
    pub fn set_page(&mut self, n: usize) {
        self.page_index = n;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Index of the first row of the current page within the full set
    pub fn offset(&self) -> usize {
        match self.page_size.limit() {
            Some(limit) => self.page_index.saturating_mul(limit),
            None => 0,
        }
    }

    pub fn visible_slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let Some(limit) = self.page_size.limit() else {
            return records;
        };
        let start = self.offset().min(records.len());
        let end = start.saturating_add(limit).min(records.len());
        &records[start..end]
    }

    /// Empty rows reserved on a short trailing page
    pub fn padding_rows<T>(&self, records: &[T]) -> usize {
        let Some(limit) = self.page_size.limit() else {
            return 0;
        };
        if self.page_index == 0 {
            return 0;
        }
        let page_end = self.page_index.saturating_add(1).saturating_mul(limit);
        page_end.saturating_sub(records.len())
    }

    pub fn page_count<T>(&self, records: &[T]) -> usize {
        if records.is_empty() {
            return 0;
        }
        match self.page_size.limit() {
            Some(limit) => records.len().div_ceil(limit),
            None => 1,
        }
    }

    pub fn is_last_page<T>(&self, records: &[T]) -> bool {
        self.page_index.saturating_add(1) >= self.page_count(records)
    }

    pub fn is_enabled<T>(&self, action: NavAction, records: &[T]) -> bool {
        match action {
            NavAction::First | NavAction::Previous => self.page_index > 0,
            NavAction::Next | NavAction::Last => !self.is_last_page(records),
        }
    }

    /// Page an action leads to, `None` when its control is disabled
    pub fn target<T>(&self, action: NavAction, records: &[T]) -> Option<usize> {
        if !self.is_enabled(action, records) {
            return None;
        }
        match action {
            NavAction::First => Some(0),
            NavAction::Previous => self.page_index.checked_sub(1),
            NavAction::Next => self.page_index.checked_add(1),
            NavAction::Last => Some(self.page_count(records).saturating_sub(1)),
        }
    }

    /// Apply a navigation action; disabled actions leave the state untouched
    pub fn navigate<T>(&mut self, action: NavAction, records: &[T]) -> bool {
        match self.target(action, records) {
            Some(page) => {
                self.set_page(page);
                true
            }
            None => false,
        }
    }

    /// 1-based rank of the row at `row` within the current page
    pub fn rank(&self, row: usize) -> usize {
        self.offset().saturating_add(row).saturating_add(1)
    }

    /// `(from, to)` 1-based bounds of the rows shown, for the footer summary
    pub fn displayed_range<T>(&self, records: &[T]) -> (usize, usize) {
        let shown = self.visible_slice(records).len();
        if shown == 0 {
            return (0, 0);
        }
        let from = self.offset().saturating_add(1);
        (from, from + shown - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    fn at(page: usize, size: PageSize) -> PageState {
        let mut state = PageState::new();
        state.set_page_size(size);
        state.set_page(page);
        state
    }

    #[test]
    fn pages_partition_the_set_in_order() {
        for len in [1, 9, 10, 11, 23, 50, 51, 137] {
            let rows = records(len);
            for size in [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty] {
                let count = at(0, size).page_count(&rows);
                let joined: Vec<usize> = (0..count)
                    .flat_map(|p| at(p, size).visible_slice(&rows).to_vec())
                    .collect();
                assert_eq!(joined, rows, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn page_count_is_zero_only_for_empty_sets() {
        let empty: Vec<usize> = Vec::new();
        for size in PageSize::OPTIONS {
            assert_eq!(at(0, size).page_count(&empty), 0);
            assert!(at(0, size).page_count(&records(1)) > 0);
        }
    }

    #[test]
    fn twenty_three_records_by_ten() {
        let rows = records(23);
        assert_eq!(at(0, PageSize::Ten).visible_slice(&rows), &rows[0..10]);
        assert_eq!(at(1, PageSize::Ten).visible_slice(&rows), &rows[10..20]);
        assert_eq!(at(2, PageSize::Ten).visible_slice(&rows), &rows[20..23]);
        assert_eq!(at(2, PageSize::Ten).padding_rows(&rows), 7);
        assert_eq!(at(0, PageSize::Ten).padding_rows(&rows), 0);
        assert_eq!(at(1, PageSize::Ten).padding_rows(&rows), 0);
        assert_eq!(at(0, PageSize::Ten).page_count(&rows), 3);
    }

    #[test]
    fn all_shows_everything_on_one_page() {
        let rows = records(137);
        let state = at(0, PageSize::All);
        assert_eq!(state.visible_slice(&rows), &rows[..]);
        assert_eq!(state.page_count(&rows), 1);
        assert_eq!(state.padding_rows(&rows), 0);
        for action in NavAction::ALL {
            assert_eq!(state.target(action, &rows), None);
        }
    }

    #[test]
    fn page_size_change_resets_index() {
        let mut state = at(4, PageSize::Ten);
        state.set_page_size(PageSize::TwentyFive);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn set_page_does_not_clamp() {
        let rows = records(5);
        let state = at(9, PageSize::Ten);
        assert_eq!(state.page_index(), 9);
        assert!(state.visible_slice(&rows).is_empty());
        assert_eq!(state.padding_rows(&rows), 95);
    }

    #[test]
    fn padding_grows_past_the_last_page() {
        let rows = records(23);
        assert_eq!(at(5, PageSize::Ten).padding_rows(&rows), 37);
        assert_eq!(at(3, PageSize::TwentyFive).padding_rows(&rows), 77);
    }

    #[test]
    fn huge_page_index_does_not_overflow() {
        let rows = records(23);
        let state = at(usize::MAX, PageSize::Ten);
        assert!(state.is_last_page(&rows));
        assert_eq!(state.target(NavAction::Next, &rows), None);
        assert_eq!(state.target(NavAction::Last, &rows), None);
        assert_eq!(state.target(NavAction::Previous, &rows), Some(usize::MAX - 1));
        assert!(state.visible_slice(&rows).is_empty());
        assert_eq!(state.displayed_range(&rows), (0, 0));
        assert_eq!(state.padding_rows(&rows), usize::MAX - 23);
    }

    #[test]
    fn navigation_targets_and_disabled_controls() {
        let rows = records(23);
        let first = at(0, PageSize::Ten);
        assert_eq!(first.target(NavAction::First, &rows), None);
        assert_eq!(first.target(NavAction::Previous, &rows), None);
        assert_eq!(first.target(NavAction::Next, &rows), Some(1));
        assert_eq!(first.target(NavAction::Last, &rows), Some(2));

        let last = at(2, PageSize::Ten);
        assert_eq!(last.target(NavAction::First, &rows), Some(0));
        assert_eq!(last.target(NavAction::Previous, &rows), Some(1));
        assert_eq!(last.target(NavAction::Next, &rows), None);
        assert_eq!(last.target(NavAction::Last, &rows), None);

        let mut state = first;
        assert!(state.navigate(NavAction::Next, &rows));
        assert!(state.navigate(NavAction::Next, &rows));
        assert!(!state.navigate(NavAction::Next, &rows));
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn ranks_continue_across_pages() {
        assert_eq!(at(0, PageSize::Ten).rank(0), 1);
        assert_eq!(at(2, PageSize::Ten).rank(2), 23);
        assert_eq!(at(1, PageSize::TwentyFive).rank(0), 26);
        assert_eq!(at(0, PageSize::All).rank(40), 41);
    }

    #[test]
    fn displayed_range_for_summary() {
        let rows = records(23);
        assert_eq!(at(0, PageSize::Ten).displayed_range(&rows), (1, 10));
        assert_eq!(at(2, PageSize::Ten).displayed_range(&rows), (21, 23));
        assert_eq!(at(0, PageSize::Ten).displayed_range::<usize>(&[]), (0, 0));
    }
}
