//! Query parameters for the book listing endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::BookFilter;

/// Default page size when `limit` is not supplied.
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

/// Query string of `GET /books`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BookListQuery {
    /// Substring filter against the referenced author name.
    pub author: Option<String>,

    /// Substring filter against the referenced category name.
    pub genre: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl BookListQuery {
    /// Validates the paging parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0 (a page past the end of the collection is fine
    ///   and yields an empty page, but page 0 is malformed)
    /// - Limit must be between 1 and 100
    pub fn paging(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err("page must be greater than 0".to_string());
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("limit must be between 1 and {MAX_LIMIT}"));
        }

        Ok((i64::from(page), i64::from(limit)))
    }

    /// Filter terms, with blank parameters treated as absent.
    pub fn filter(&self) -> BookFilter {
        let term = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        };
        BookFilter {
            author: term(&self.author),
            genre: term(&self.genre),
        }
    }
}
