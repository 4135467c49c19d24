//! Shared list envelope and paging parameters

use serde::Deserialize;

/// Cursor-paginated list envelope returned by every list endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub first_id: Option<String>,
    #[serde(default)]
    pub last_id: Option<String>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            first_id: None,
            last_id: None,
        }
    }
}

impl<T> ListResponse<T> {
    /// Cursor for the next page, if the API says there is one
    ///
    /// A page with `has_more` but no (or an empty) `last_id` ends the walk.
    pub fn next_cursor(&self) -> Option<&str> {
        if !self.has_more {
            return None;
        }
        self.last_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Paging parameters shared by every list endpoint
///
/// Zero / `None` / empty values are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: u32,
    pub before_id: Option<String>,
    pub after_id: Option<String>,
}

impl ListParams {
    /// Forward page of `limit` items after `after_id`
    pub fn page(limit: u32, after_id: Option<String>) -> Self {
        Self {
            limit,
            before_id: None,
            after_id,
        }
    }
}
