//! Serializable list/filter view state.
//!
//! One explicit struct owns everything a list view tracks between queries:
//! page, search term, categorical filters, and the active sort. Transitions
//! mirror the UI affordances; anything that changes the result set resets
//! the page to 1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::listing::SortOrder;
use crate::response::PageInfo;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListState {
    pub page: i64,
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// Pagination block of the last applied response; gates page controls.
    pub pagination: Option<PageInfo>,
    pub failed: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            filters: BTreeMap::new(),
            sort_by: None,
            sort_order: SortOrder::Asc,
            pagination: None,
            failed: false,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(name.into(), value.into());
        self.page = 1;
    }

    pub fn clear_filter(&mut self, name: &str) {
        self.filters.remove(name);
        self.page = 1;
    }

    /// Clicking a sortable column header: the active field flips direction,
    /// a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_order = self.sort_order.flip();
        } else {
            self.sort_by = Some(field.to_owned());
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    /// Advance one page; a no-op unless the last response reported a next
    /// page (the control is disabled, not rejected server-side).
    pub fn next_page(&mut self) -> bool {
        let allowed = self
            .pagination
            .as_ref()
            .is_some_and(|info| info.has_next_page);
        if allowed {
            self.page += 1;
        }
        allowed
    }

    pub fn prev_page(&mut self) -> bool {
        let allowed = self
            .pagination
            .as_ref()
            .is_some_and(|info| info.has_previous_page)
            && self.page > 1;
        if allowed {
            self.page -= 1;
        }
        allowed
    }

    /// Record a successful response.
    pub fn apply(&mut self, info: PageInfo) {
        self.pagination = Some(info);
        self.failed = false;
    }

    /// Record a failed query; the state keeps its filters so the same query
    /// can be retried manually. No automatic retry is performed.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    pub fn retry(&mut self) -> String {
        self.failed = false;
        self.to_query_string()
    }

    /// Wire form of the current state.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = vec![("page", self.page.to_string())];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        for (name, value) in &self.filters {
            pairs.push((name.as_str(), value.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
            pairs.push(("sortOrder", self.sort_order.as_str().to_owned()));
        }
        serde_html_form::to_string(&pairs).unwrap_or_default()
    }
}
