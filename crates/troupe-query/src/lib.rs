//! Query operations for Troupe.
//!
//! Two exported operations sit atop any [`Store`](troupe_core::Store)
//! backend:
//!
//! 1. **Age range** — the youngest and oldest age on file, obtained from
//!    two concurrent sorted limit-1 lookups.
//!
//! 2. **Search** — criteria-driven, sorted, paginated fetch joined with an
//!    unpaginated count of everything the criteria match.
//!
//! Both fan out their two store round-trips concurrently and join before
//! returning; a failure on either branch fails the operation as soon as it
//! is observed.

pub mod age_range;
pub mod criteria;
pub mod search;

pub use age_range::{age_range, AgeRange};
pub use criteria::{build_selector, Criteria, NumericRange};
pub use search::{search, Page, SearchResult};
