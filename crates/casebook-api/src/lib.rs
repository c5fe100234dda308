//! JSON REST API for Casebook.
//!
//! Exposes an axum [`Router`] backed by any [`casebook_core::store::CaseStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(casebook_api::api_router(store.clone()).route_layer(auth))
//! ```

pub mod error;
pub mod extract;
pub mod results;
pub mod test_cases;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use casebook_core::store::CaseStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CaseStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Test cases
    .route("/createTestCase", post(test_cases::create::<S>))
    .route("/getAllTestCases", get(test_cases::list::<S>))
    .route("/getTestCase/{id}", get(test_cases::get_one::<S>))
    .route("/updateTestCase/{id}", put(test_cases::update_one::<S>))
    .route("/deleteTestCase/{id}", delete(test_cases::delete_one::<S>))
    // Execution results
    .route("/testCases/{id}/executionResult", post(results::record::<S>))
    .route("/testCases/executionResult/{testAsset}", get(results::by_asset::<S>))
    .with_state(store)
}
