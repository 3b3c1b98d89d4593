//! Query string handling: contribution filters, parent scopes and paging.
//!
//! Every filtered endpoint uses the same policy: a malformed value rejects
//! the request, an empty value is treated as absent, and unknown keys are
//! ignored.

mod filter;
mod pagination;
mod scope;

pub use filter::ContributionFilter;
pub use pagination::{Page, PageRequest, paginate};
pub use scope::{CompanyScope, CompensationScope};
