//! Page-number pagination.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::error::{TrackerError, TrackerResult};

use super::filter::optional_number;

/// The `page` and `page_size` query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    #[serde(default, deserialize_with = "optional_number")]
    pub page: Option<usize>,
    /// Requested page size, capped at the configured maximum.
    #[serde(default, deserialize_with = "optional_number")]
    pub page_size: Option<usize>,
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of items across all pages.
    pub count: usize,
    /// This page's number.
    pub page: usize,
    /// Page size in effect.
    pub page_size: usize,
    /// Items on this page.
    pub results: Vec<T>,
}

/// Cuts one page out of `items`.
///
/// Page 1 always exists, even for an empty list. Any other page must start
/// inside the list.
pub fn paginate<T>(
    items: Vec<T>,
    request: PageRequest,
    config: PaginationConfig,
) -> TrackerResult<Page<T>> {
    let page = request.page.unwrap_or(1);
    if page == 0 {
        return Err(TrackerError::InvalidQuery {
            message: "page must be 1 or greater".to_string(),
        });
    }

    let page_size = match request.page_size {
        Some(0) => {
            return Err(TrackerError::InvalidQuery {
                message: "page_size must be 1 or greater".to_string(),
            });
        }
        Some(size) => size.min(config.max_page_size),
        None => config.page_size,
    }
    .max(1);

    let count = items.len();
    let pages = count.div_ceil(page_size).max(1);
    if page > pages {
        return Err(TrackerError::InvalidPage { page, pages });
    }

    let results = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Ok(Page {
        count,
        page,
        page_size,
        results,
    })
}
