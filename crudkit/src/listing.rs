//! Listing request parameters and result pages
//!
//! [`ListQuery`] captures the four query-string parameters that drive the
//! index action (page, limit, sort, order) with their defaults applied.
//! [`Page`] is the shape every pagination collaborator returns: one page of
//! entities plus the metadata a template needs to render pagination controls.

use serde::{Deserialize, Serialize};

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order (the listing default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse a query-string value; anything that is not `asc` (any case)
    /// falls back to descending.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// Whether this is ascending order.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }
}

/// Parsed listing parameters with defaults applied.
///
/// Derived from request query parameters; never persisted. Invalid or
/// non-positive values fall back to the defaults (page 1, the configured
/// per-page limit, descending order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u64,
    /// Records per page.
    pub limit: u64,
    /// Explicitly requested sort field, if any.
    pub sort: Option<String>,
    /// Sort direction.
    pub order: SortOrder,
}

impl ListQuery {
    /// Build a `ListQuery` from raw query-string pairs.
    ///
    /// Recognized keys are `page`, `limit`, `sort` and `order`; everything
    /// else is ignored. `default_limit` is the configured per-page default.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)], default_limit: u64) -> Self {
        let mut query = Self {
            page: 1,
            limit: default_limit,
            sort: None,
            order: SortOrder::default(),
        };
        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    if let Ok(page) = value.parse::<u64>() {
                        if page >= 1 {
                            query.page = page;
                        }
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse::<u64>() {
                        if limit >= 1 {
                            query.limit = limit;
                        }
                    }
                }
                "sort" => {
                    if !value.is_empty() {
                        query.sort = Some(value.clone());
                    }
                }
                "order" => query.order = SortOrder::parse(value),
                _ => {}
            }
        }
        query
    }

    /// Whether the request named a sort field itself. When it did not, the
    /// controller applies the configured default sort descending.
    #[must_use]
    pub const fn explicit_sort(&self) -> bool {
        self.sort.is_some()
    }
}

/// A page of results with pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The entities on this page.
    pub items: Vec<T>,
    /// 1-based page number this page represents.
    pub page: u64,
    /// Records per page requested.
    pub limit: u64,
    /// Total number of matching records across all pages.
    pub total: u64,
    /// Total number of pages (ceiling of `total / limit`).
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its parts, deriving the page count.
    #[must_use]
    pub fn new(items: Vec<T>, page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit)
        };
        Self {
            items,
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Whether this page carries no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
