//! Shared model and pure logic for the food catalog.
//!
//! Everything in this crate is free of I/O so it can be used by the backend
//! proxy and by any Rust client talking to it:
//!
//! - `model`: the canonical food item, form values and response shapes.
//! - `normalize`: conversion from loosely-typed upstream JSON into the
//!   canonical model, and from client payloads into the upstream write shape.
//! - `validation`: the food form rule set.
//! - `requests`: query-string shapes accepted by the `/api/food` routes.
//! - `query`: client-side search debouncing and list caching.

pub mod model;
pub mod normalize;
pub mod query;
pub mod requests;
pub mod validation;
