//! Generic paginated list engine.
//!
//! Every list endpoint shares one contract: free-text search over designated
//! fields, exact-value categorical filters, a single sort field, and
//! `(page, limit)` slicing with pagination metadata. This module implements
//! that contract once; resources only supply a field-accessor map through
//! [`Listed`].

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::response::PageInfo;

/// A typed view over a single record field, as produced by the accessor map.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Time(DateTime<Utc>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_owned())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Str(value.clone())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl FieldValue {
    pub fn from_opt(value: Option<&str>) -> Self {
        FieldValue::Str(value.unwrap_or_default().to_owned())
    }

    /// Case-insensitive substring match. Only meaningful for string fields;
    /// `needle` must already be lowercased.
    fn contains_ci(&self, needle: &str) -> bool {
        match self {
            FieldValue::Str(s) => s.to_lowercase().contains(needle),
            _ => false,
        }
    }

    /// Exact-value comparison against a raw query-parameter string.
    fn matches_param(&self, raw: &str) -> bool {
        match self {
            FieldValue::Str(s) => s.eq_ignore_ascii_case(raw),
            FieldValue::Int(i) => raw.parse::<i64>() == Ok(*i),
            FieldValue::Bool(b) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => *b,
                "false" | "0" => !*b,
                _ => false,
            },
            FieldValue::Time(t) => raw
                .parse::<DateTime<Utc>>()
                .map(|parsed| parsed == *t)
                .unwrap_or(false),
        }
    }

    /// Ordering across values of the same kind; mismatched kinds compare
    /// equal so a bad accessor cannot panic a sort.
    fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Str(a), FieldValue::Str(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Time(a), FieldValue::Time(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Field-accessor map a record type exposes to the engine.
pub trait Listed {
    /// Fields the free-text `search` parameter matches against.
    const SEARCH_FIELDS: &'static [&'static str];
    /// Sort field used when `sortBy` is absent or names an unknown field.
    const DEFAULT_SORT: &'static str;

    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// A fully-resolved list query: normalized paging, optional search term,
/// sort, and any number of filter predicates.
pub struct ListQuery<T> {
    page: i64,
    limit: i64,
    search: Option<String>,
    sort_by: Option<String>,
    sort_order: SortOrder,
    predicates: Vec<Box<dyn Fn(&T) -> bool + Send + Sync>>,
}

impl<T: Listed> ListQuery<T> {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, 100),
            search: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            predicates: Vec::new(),
        }
    }

    pub fn search(mut self, term: Option<String>) -> Self {
        self.search = term.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn sort(mut self, by: Option<String>, order: SortOrder) -> Self {
        self.sort_by = by;
        self.sort_order = order;
        self
    }

    /// Exact-value categorical filter; `None` imposes no constraint.
    pub fn filter_eq(mut self, field: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.predicates.push(Box::new(move |record: &T| {
                record
                    .field(field)
                    .is_some_and(|v| v.matches_param(&value))
            }));
        }
        self
    }

    /// Case-insensitive substring filter on a single field.
    pub fn filter_contains(mut self, field: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let needle = value.to_lowercase();
            self.predicates.push(Box::new(move |record: &T| {
                record.field(field).is_some_and(|v| v.contains_ci(&needle))
            }));
        }
        self
    }

    pub fn filter_bool(mut self, field: &'static str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Box::new(move |record: &T| {
                record.field(field) == Some(FieldValue::Bool(value))
            }));
        }
        self
    }

    /// Arbitrary predicate for constraints the accessor map cannot express.
    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

#[derive(Debug)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub info: PageInfo,
}

/// Apply filters, search, sort, and slicing to `items`.
///
/// `totalCount` reflects the filtered-but-unsliced set; a page past the end
/// yields empty `data`, never an error. Sorting is stable, so insertion
/// order breaks ties.
pub fn select<T: Listed + Clone>(items: &[T], query: &ListQuery<T>) -> Page<T> {
    let needle = query.search.as_ref().map(|s| s.to_lowercase());

    let mut rows: Vec<&T> = items
        .iter()
        .filter(|record| query.predicates.iter().all(|p| p(record)))
        .filter(|record| match needle.as_deref() {
            None => true,
            Some(needle) => T::SEARCH_FIELDS
                .iter()
                .any(|field| record.field(field).is_some_and(|v| v.contains_ci(needle))),
        })
        .collect();

    // Unknown sort fields fall back to the record's default sort.
    let sort_field = query.sort_by.as_deref().unwrap_or(T::DEFAULT_SORT);
    rows.sort_by(|a, b| {
        let left = a.field(sort_field).or_else(|| a.field(T::DEFAULT_SORT));
        let right = b.field(sort_field).or_else(|| b.field(T::DEFAULT_SORT));
        let ordering = match (left, right) {
            (Some(l), Some(r)) => l.compare(&r),
            _ => Ordering::Equal,
        };
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total_count = rows.len() as i64;
    let info = PageInfo::new(query.page, query.limit, total_count);

    let skip = (query.page - 1).saturating_mul(query.limit) as usize;
    let data = rows
        .into_iter()
        .skip(skip)
        .take(query.limit as usize)
        .cloned()
        .collect();

    Page { data, info }
}
