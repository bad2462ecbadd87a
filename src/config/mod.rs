//! Export request model and validation.
//!
//! The request shape mirrors what the form UI posts: an ordered URL list and
//! a fully enumerable set of rendering flags. Defaults are applied during
//! deserialization so the pipeline never sees an absent field.

mod types;

pub use types::{ExportRequest, PageFormat, RenderOptions, MAX_URLS};
