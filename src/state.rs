//! Container state for the paginated application list.
//!
//! Plain data with no widget types so every transition the workflow makes is
//! unit-testable. The [`App`](crate::app::App) owns one [`ListState`] and maps
//! messages onto these methods; views read it back out through accessors.
//!
//! Three hazards of the workflow are handled with generation tokens here
//! instead of bare timers and last-resolved-wins races:
//! - a fetch response only applies if it carries the token of the latest
//!   request, so a fast page-flipping user never sees stale data
//! - each tile's flip-back timer is owned by the newest toggle; expiries from
//!   older toggles are ignored
//! - the toast auto-dismiss timer cannot close a newer toast

use std::collections::HashMap;

use crate::api::{ListQuery, SortDirection, SortField};
use crate::record::{AppRecord, PageData};

/// Published to the parent/router collaborator on tile selection
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selection {
    pub id: String,
    pub name: String,
}

/// Direction of the card grid transition after a page change
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// Why the toast is being closed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastCloseReason {
    /// The toast's own dismiss control
    Dismissed,
    /// A press somewhere else in the UI; ignored, the toast only closes
    /// through explicit dismissal or its timeout
    ClickAway,
}

/// What the list area should render
#[derive(Debug, Eq, PartialEq)]
pub enum ContentKind<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Tiles(&'a [AppRecord]),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct FlipState {
    flipped: bool,
    token: u64,
}

pub struct ListState {
    page: u32,
    previous_page: Option<u32>,
    total_pages: Option<u32>,
    search: String,
    sort: SortDirection,
    sort_by: SortField,
    selected: Option<Selection>,
    toast: Option<String>,
    toast_token: u64,
    flips: HashMap<String, FlipState>,
    fetch_token: u64,
    loading: bool,
    error: Option<String>,
    records: Vec<AppRecord>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            page: 1,
            previous_page: None,
            total_pages: None,
            search: String::new(),
            sort: SortDirection::Ascending,
            sort_by: SortField::Name,
            selected: None,
            toast: None,
            toast_token: 0,
            flips: HashMap::new(),
            fetch_token: 0,
            loading: false,
            error: None,
            records: Vec::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total pages reported by the last successful fetch, 1 until known
    pub fn total_pages(&self) -> u32 {
        self.total_pages.unwrap_or(1)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&AppRecord> {
        self.records.get(index)
    }

    pub fn content(&self) -> ContentKind<'_> {
        if self.loading {
            ContentKind::Loading
        } else if let Some(error) = &self.error {
            ContentKind::Error(error)
        } else if self.records.is_empty() {
            ContentKind::Empty
        } else {
            ContentKind::Tiles(&self.records)
        }
    }

    /// Start a new fetch, invalidating any in-flight one. Returns the token
    /// the response must carry and the query to send.
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.fetch_token += 1;
        self.loading = true;
        self.error = None;
        let query = ListQuery {
            page: self.page,
            search: self.search.clone(),
            sort: self.sort,
            sort_by: self.sort_by,
        };
        (self.fetch_token, query)
    }

    /// Apply a fetch response. Returns false when the token is stale and the
    /// response was discarded.
    pub fn apply_fetch(&mut self, token: u64, result: Result<PageData, String>) -> bool {
        if token != self.fetch_token {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.total_pages = Some(page.pagination.total_pages.max(1));
                self.records = page.applications;
                self.error = None;
                // Flip state only makes sense for tiles still on screen
                let records = &self.records;
                self.flips
                    .retain(|id, _| records.iter().any(|record| &record.id == id));
            }
            Err(message) => {
                self.records.clear();
                self.error = Some(message);
            }
        }
        true
    }

    /// Returns false when the page did not change (out of range or already
    /// current); no fetch should be issued in that case.
    pub fn set_page(&mut self, new_page: u32) -> bool {
        if new_page < 1 || new_page > self.total_pages() || new_page == self.page {
            return false;
        }
        self.previous_page = Some(self.page);
        self.page = new_page;
        true
    }

    pub fn slide_direction(&self) -> SlideDirection {
        match self.previous_page {
            // First render slides in from the left
            None => SlideDirection::Left,
            Some(previous) if self.page > previous => SlideDirection::Left,
            Some(_) => SlideDirection::Right,
        }
    }

    /// Any filter change resets to the first page so the backend cannot be
    /// asked for a page that no longer exists under the new filter
    fn reset_to_first_page(&mut self) {
        if self.page != 1 {
            self.previous_page = Some(self.page);
            self.page = 1;
        }
    }

    pub fn set_search(&mut self, text: String) -> bool {
        if text == self.search {
            return false;
        }
        self.search = text;
        self.reset_to_first_page();
        true
    }

    pub fn clear_search(&mut self) -> bool {
        self.set_search(String::new())
    }

    pub fn set_sort_by(&mut self, sort_by: SortField) -> bool {
        if sort_by == self.sort_by {
            return false;
        }
        self.sort_by = sort_by;
        self.reset_to_first_page();
        true
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort = self.sort.toggled();
        self.reset_to_first_page();
    }

    /// Select the record at `index`, returning the selection to publish to
    /// the parent collaborator
    pub fn select(&mut self, index: usize) -> Option<&Selection> {
        let record = self.records.get(index)?;
        self.selected = Some(Selection {
            id: record.id.clone(),
            name: record.name.clone(),
        });
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selection| selection.id == id)
    }

    pub fn is_flipped(&self, id: &str) -> bool {
        self.flips.get(id).is_some_and(|flip| flip.flipped)
    }

    /// Toggle a tile's flip state. Returns the token the flip-back timer for
    /// this toggle must present; any previously armed timer is orphaned.
    pub fn toggle_flip(&mut self, id: &str) -> u64 {
        let flip = self.flips.entry(id.to_string()).or_default();
        flip.flipped = !flip.flipped;
        flip.token += 1;
        flip.token
    }

    /// Force a tile back to its front face if `token` still owns the timer.
    /// Returns false when a newer toggle superseded this timer.
    pub fn expire_flip(&mut self, id: &str, token: u64) -> bool {
        match self.flips.get_mut(id) {
            Some(flip) if flip.token == token => {
                flip.flipped = false;
                true
            }
            _ => false,
        }
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    /// Open the toast with an action error message, returning the token for
    /// its auto-dismiss timer
    pub fn open_toast(&mut self, message: String) -> u64 {
        self.toast = Some(message);
        self.toast_token += 1;
        self.toast_token
    }

    /// Returns true when the toast actually closed
    pub fn close_toast(&mut self, reason: ToastCloseReason) -> bool {
        match reason {
            ToastCloseReason::ClickAway => false,
            ToastCloseReason::Dismissed => self.toast.take().is_some(),
        }
    }

    pub fn expire_toast(&mut self, token: u64) -> bool {
        if token == self.toast_token {
            self.toast.take().is_some()
        } else {
            false
        }
    }

    /// After a successful delete: when the deleted record was the last one on
    /// a page past the first, step back so the refresh does not land on an
    /// empty out-of-range page
    pub fn record_deleted(&mut self) {
        if self.records.len() <= 1 && self.page > 1 {
            self.previous_page = Some(self.page);
            self.page -= 1;
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Pagination;

    fn record(id: &str, name: &str) -> AppRecord {
        AppRecord {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn page(records: Vec<AppRecord>, total_pages: u32) -> PageData {
        PageData {
            applications: records,
            pagination: Pagination { total_pages },
        }
    }

    fn loaded_state(records: Vec<AppRecord>, total_pages: u32) -> ListState {
        let mut state = ListState::new();
        let (token, _) = state.begin_fetch();
        assert!(state.apply_fetch(token, Ok(page(records, total_pages))));
        state
    }

    #[test]
    fn initial_state_matches_contract() {
        let state = ListState::new();
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.search(), "");
        assert_eq!(state.sort(), SortDirection::Ascending);
        assert_eq!(state.sort_by(), SortField::Name);
        assert!(state.selected().is_none());
        assert!(state.toast().is_none());
        assert_eq!(state.slide_direction(), SlideDirection::Left);
    }

    #[test]
    fn fetch_query_reflects_state() {
        let mut state = loaded_state(vec![record("a1", "App One")], 5);
        assert!(state.set_page(3));
        let (_, query) = state.begin_fetch();
        assert_eq!(query.page, 3);
        assert_eq!(query.sort, SortDirection::Ascending);
        assert_eq!(query.sort_by, SortField::Name);
    }

    #[test]
    fn stale_fetch_response_is_discarded() {
        let mut state = ListState::new();
        let (first, _) = state.begin_fetch();
        let (second, _) = state.begin_fetch();

        // The slower first response arrives after a newer request was made
        assert!(!state.apply_fetch(first, Ok(page(vec![record("a1", "old")], 9))));
        assert!(state.is_loading());
        assert_eq!(state.total_pages(), 1);

        assert!(state.apply_fetch(second, Ok(page(vec![record("a2", "new")], 2))));
        assert!(!state.is_loading());
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.records()[0].id, "a2");
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn content_kind_branches_are_exclusive() {
        let mut state = ListState::new();
        state.begin_fetch();
        assert_eq!(state.content(), ContentKind::Loading);

        let (token, _) = state.begin_fetch();
        state.apply_fetch(token, Err("connection refused".to_string()));
        assert_eq!(state.content(), ContentKind::Error("connection refused"));

        let (token, _) = state.begin_fetch();
        state.apply_fetch(token, Ok(page(Vec::new(), 1)));
        assert_eq!(state.content(), ContentKind::Empty);

        let (token, _) = state.begin_fetch();
        state.apply_fetch(token, Ok(page(vec![record("a1", "App One")], 1)));
        match state.content() {
            ContentKind::Tiles(records) => assert_eq!(records.len(), 1),
            other => panic!("expected tiles, got {:?}", other),
        }
    }

    #[test]
    fn set_page_rejects_out_of_range_and_current() {
        let mut state = loaded_state(vec![record("a1", "App One")], 3);
        assert!(!state.set_page(0));
        assert!(!state.set_page(4));
        assert!(!state.set_page(1));
        assert!(state.set_page(3));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn slide_direction_tracks_page_movement() {
        let mut state = loaded_state(Vec::new(), 5);
        assert_eq!(state.slide_direction(), SlideDirection::Left);
        state.set_page(2);
        assert_eq!(state.slide_direction(), SlideDirection::Left);
        state.set_page(5);
        assert_eq!(state.slide_direction(), SlideDirection::Left);
        state.set_page(4);
        assert_eq!(state.slide_direction(), SlideDirection::Right);
    }

    #[test]
    fn search_change_resets_to_first_page() {
        let mut state = loaded_state(Vec::new(), 5);
        state.set_page(4);
        assert!(state.set_search("mail".to_string()));
        assert_eq!(state.page(), 1);

        // Unchanged text issues no fetch
        assert!(!state.set_search("mail".to_string()));
    }

    #[test]
    fn sort_change_resets_to_first_page() {
        let mut state = loaded_state(Vec::new(), 5);
        state.set_page(3);
        assert!(state.set_sort_by(SortField::CreatedAt));
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.toggle_sort_direction();
        assert_eq!(state.page(), 1);
        assert_eq!(state.sort(), SortDirection::Descending);
    }

    #[test]
    fn selection_publishes_id_and_name() {
        let mut state = loaded_state(vec![record("a1", "App One")], 1);
        let selection = state.select(0).cloned().unwrap();
        assert_eq!(selection.id, "a1");
        assert_eq!(selection.name, "App One");
        assert!(state.is_selected("a1"));
        assert!(!state.is_selected("a2"));
        assert!(state.select(7).is_none());
    }

    #[test]
    fn flip_back_timer_is_owned_by_newest_toggle() {
        let mut state = loaded_state(vec![record("a1", "App One")], 1);

        // Two toggles inside the flip-back delay: the tile ends on the state
        // of the second toggle and the first timer must not clobber it
        let first = state.toggle_flip("a1");
        assert!(state.is_flipped("a1"));
        let second = state.toggle_flip("a1");
        assert!(!state.is_flipped("a1"));

        assert!(!state.expire_flip("a1", first));
        assert!(!state.is_flipped("a1"));

        assert!(state.expire_flip("a1", second));
        assert!(!state.is_flipped("a1"));

        // A third toggle after the older timers fired stays flipped until its
        // own timer expires
        let third = state.toggle_flip("a1");
        assert!(state.is_flipped("a1"));
        assert!(!state.expire_flip("a1", second));
        assert!(state.is_flipped("a1"));
        assert!(state.expire_flip("a1", third));
        assert!(!state.is_flipped("a1"));
    }

    #[test]
    fn flip_state_is_dropped_with_its_record() {
        let mut state = loaded_state(vec![record("a1", "App One")], 2);
        state.toggle_flip("a1");
        assert!(state.is_flipped("a1"));

        let (token, _) = state.begin_fetch();
        state.apply_fetch(token, Ok(page(vec![record("b1", "App Two")], 2)));
        assert!(!state.is_flipped("a1"));
    }

    #[test]
    fn toast_ignores_click_away() {
        let mut state = ListState::new();
        state.open_toast("delete failed".to_string());
        assert!(!state.close_toast(ToastCloseReason::ClickAway));
        assert_eq!(state.toast(), Some("delete failed"));
        assert!(state.close_toast(ToastCloseReason::Dismissed));
        assert!(state.toast().is_none());
    }

    #[test]
    fn toast_timer_cannot_close_a_newer_toast() {
        let mut state = ListState::new();
        let first = state.open_toast("first".to_string());
        let second = state.open_toast("second".to_string());
        assert!(!state.expire_toast(first));
        assert_eq!(state.toast(), Some("second"));
        assert!(state.expire_toast(second));
        assert!(state.toast().is_none());
    }

    #[test]
    fn deleting_last_record_on_a_page_steps_back() {
        let mut state = loaded_state(vec![record("a1", "App One")], 3);
        state.set_page(3);
        let (token, _) = state.begin_fetch();
        state.apply_fetch(token, Ok(page(vec![record("z9", "Last One")], 3)));

        state.record_deleted();
        assert_eq!(state.page(), 2);

        // More than one record left: stay on the page
        let (token, _) = state.begin_fetch();
        state.apply_fetch(
            token,
            Ok(page(vec![record("a1", "One"), record("a2", "Two")], 3)),
        );
        state.record_deleted();
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn error_replaces_records() {
        let mut state = loaded_state(vec![record("a1", "App One")], 1);
        let (token, _) = state.begin_fetch();
        state.apply_fetch(token, Err("boom".to_string()));
        assert_eq!(state.content(), ContentKind::Error("boom"));
        assert!(state.records().is_empty());
    }
}
