//! genzet-query
//!
//! Client-side list derivation: filter, sort and paginate an in-memory
//! collection against a `QueryState`. See `pipeline` for the entry points and
//! `listable` for the per-entity field accessors.
pub mod debounce;
pub mod listable;
pub mod page;
pub mod pipeline;
pub mod state;

pub use debounce::SearchInput;
pub use listable::{Listable, SortKey};
pub use page::ResultPage;
pub use pipeline::{build_result_page, filter, paginate, sort};
pub use state::QueryState;

pub use genzet_core::types::{SortDirection, SortField};
