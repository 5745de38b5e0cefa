use crate::cli::{SortKey, ViewMode};
use crate::domain::models::{AgentCard, FilterState};
use crate::services::debounce::Debouncer;
use crate::services::filter::{compute_visibility, results_label};
use crate::services::sort::compute_order;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Owns the parsed cards, the current filter state, the active sort key
/// and view mode, and the search debouncer. One instance per catalog; the
/// cards themselves are created before the controller and never by it.
///
/// `container` mirrors the display container: a sort pass re-appends only
/// the visible cards at the tail in sorted order, hidden cards keep their
/// slot until they become visible again.
pub struct CatalogController {
    cards: Vec<AgentCard>,
    container: Vec<String>,
    visible: HashSet<String>,
    filters: FilterState,
    sort: SortKey,
    view: ViewMode,
    debouncer: Debouncer,
}

impl CatalogController {
    pub fn new(cards: Vec<AgentCard>, quiet: Duration) -> Self {
        let container = cards.iter().map(|c| c.id.clone()).collect();
        let mut controller = Self {
            cards,
            container,
            visible: HashSet::new(),
            filters: FilterState::default(),
            sort: SortKey::Rating,
            view: ViewMode::Grid,
            debouncer: Debouncer::new(quiet),
        };
        // initial pass establishes the starting visible set and order
        controller.apply_filters();
        controller
    }

    /// Recompute visibility for every card, then re-apply the current sort
    /// so order stays consistent with the active key.
    pub fn apply_filters(&mut self) {
        self.visible = compute_visibility(&self.cards, &self.filters);
        self.apply_sorting();
    }

    /// Reorder without touching membership: sort all cards, then move the
    /// visible ones to the container tail in that order.
    pub fn apply_sorting(&mut self) {
        let order = compute_order(&self.cards, self.sort);
        self.container.retain(|id| !self.visible.contains(id));
        for id in order {
            if self.visible.contains(&id) {
                self.container.push(id);
            }
        }
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.apply_filters();
    }

    pub fn set_max_price(&mut self, max_price: f64) {
        self.filters.max_price = max_price;
        self.apply_filters();
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.filters.min_rating = min_rating;
        self.apply_filters();
    }

    pub fn set_verified_only(&mut self, on: bool) {
        self.filters.verified_only = on;
        self.apply_filters();
    }

    pub fn set_protocol(&mut self, protocol: Option<String>) {
        self.filters.protocol = protocol;
        self.apply_filters();
    }

    /// Changing the sort key never changes membership, so no filter pass.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.apply_sorting();
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// A keystroke in the search box: queued behind the quiet period.
    pub fn search_input(&mut self, text: String, now: Instant) {
        self.debouncer.submit(text, now);
    }

    /// Applies the queued search query once its quiet period has elapsed.
    /// Returns true if a recomputation ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.filters.search = query;
                self.apply_filters();
                true
            }
            None => false,
        }
    }

    /// Applies any queued search query immediately.
    pub fn flush_search(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) => {
                self.filters.search = query;
                self.apply_filters();
                true
            }
            None => false,
        }
    }

    /// Reset every control to its default and re-run the pass. A queued
    /// search is dropped, as clearing also empties the search box.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.sort = SortKey::Rating;
        self.debouncer.cancel();
        self.apply_filters();
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn results_line(&self) -> String {
        results_label(self.visible.len())
    }

    /// Visible cards in display order.
    pub fn visible_cards(&self) -> Vec<&AgentCard> {
        self.container
            .iter()
            .filter(|id| self.visible.contains(*id))
            .filter_map(|id| self.cards.iter().find(|c| &c.id == id))
            .collect()
    }

    pub fn card(&self, id: &str) -> Option<&AgentCard> {
        self.cards.iter().find(|c| c.id == id)
    }
}
