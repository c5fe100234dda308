//! HTTP server for Casebook.
//!
//! Composes the welcome route, the credential gate, and the JSON API from
//! `casebook-api` into one axum [`Router`] backed by any [`CaseStore`].

pub mod auth;
pub mod error;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use argon2::PasswordHash;
use axum::{
  Router,
  middleware,
  response::Html,
  routing::get,
};
use casebook_api::ApiError;
use casebook_core::store::CaseStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::{AuthConfig, require_auth};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CASEBOOK_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  pub store_path:         PathBuf,
  pub auth_username:      String,
  pub auth_password_hash: String,
}

impl ServerConfig {
  /// Layer defaults, the optional file at `path`, and the environment.
  ///
  /// `auth_password_hash` has no default and must come from the file or
  /// `CASEBOOK_AUTH_PASSWORD_HASH`. It must parse as a PHC string, so a bad
  /// credential stops startup instead of failing every request with 401.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let cfg: Self = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000)?
      .set_default("store_path", "testCases.db")?
      .set_default("auth_username", "GEMINDZ")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CASEBOOK"))
      .build()?
      .try_deserialize()?;

    PasswordHash::new(&cfg.auth_password_hash)
      .map_err(|e| anyhow::anyhow!("auth_password_hash is not a valid PHC string: {e}"))?;

    Ok(cfg)
  }

  /// The credential the gate checks requests against.
  pub fn auth_config(&self) -> AuthConfig {
    AuthConfig {
      username:      self.auth_username.clone(),
      password_hash: self.auth_password_hash.clone(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state handed to [`router`].
#[derive(Clone)]
pub struct AppState<S: CaseStore> {
  pub store: Arc<S>,
  pub auth:  Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the server.
///
/// Every API route sits behind [`require_auth`]; `/` and the fallback do not.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CaseStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let gate = middleware::from_fn_with_state(state.auth, require_auth);

  Router::new()
    .route("/", get(welcome))
    .merge(casebook_api::api_router(state.store).route_layer(gate))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
}

async fn welcome() -> Html<&'static str> {
  Html("<center><b>Welcome to the Casebook API for Test Case Management</b></center>")
}

async fn not_found() -> ApiError { ApiError::route_not_found() }

// ─── Integration tests ────────────────────────────────────────────────────────
