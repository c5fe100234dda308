//! HTTP Basic-auth credential gate.
//!
//! One credential pair guards every data route. The password is held only as
//! an argon2 PHC string injected from configuration.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::{Request, State},
  http::HeaderMap,
  middleware::Next,
  response::{IntoResponse, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;

use crate::error::Error;

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Verify the `Authorization: Basic …` header against `config`.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<(), Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let (scheme, encoded) = header_val.split_once(' ').ok_or(Error::Unauthorized)?;
  if !scheme.eq_ignore_ascii_case("Basic") {
    return Err(Error::Unauthorized);
  }

  let decoded = B64.decode(encoded.trim()).map_err(|_| Error::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  if username != config.username {
    return Err(Error::Unauthorized);
  }

  // `ServerConfig::load` rejects unparseable hashes, so this only trips for
  // an `AuthConfig` built by hand.
  let parsed_hash = PasswordHash::new(&config.password_hash).map_err(|e| {
    tracing::error!(error = %e, "configured password hash does not parse");
    Error::Unauthorized
  })?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(())
}

/// Middleware: reject the request with 401 unless it carries valid
/// credentials. The wrapped route never runs on rejection.
pub async fn require_auth(
  State(auth): State<Arc<AuthConfig>>,
  req:  Request,
  next: Next,
) -> Response {
  match verify_auth(req.headers(), &auth) {
    Ok(())  => next.run(req).await,
    Err(e) => {
      tracing::warn!(method = %req.method(), path = %req.uri().path(), "authentication failed");
      e.into_response()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use argon2::{PasswordHasher, password_hash::SaltString};
  use axum::http::{HeaderValue, header};
  use rand_core::OsRng;

  fn config(password: &str) -> AuthConfig {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string();
    AuthConfig { username: "GEMINDZ".to_string(), password_hash: hash }
  }

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    h
  }

  fn basic(user: &str, pass: &str) -> String {
    let encoded = B64.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
  }

  #[test]
  fn correct_credentials() {
    let cfg = config("123456");
    assert!(verify_auth(&headers(&basic("GEMINDZ", "123456")), &cfg).is_ok());
  }

  #[test]
  fn password_may_contain_colons() {
    let cfg = config("a:b:c");
    assert!(verify_auth(&headers(&basic("GEMINDZ", "a:b:c")), &cfg).is_ok());
  }

  #[test]
  fn wrong_password() {
    let cfg = config("123456");
    assert!(matches!(
      verify_auth(&headers(&basic("GEMINDZ", "wrong")), &cfg),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn wrong_username() {
    let cfg = config("123456");
    assert!(matches!(
      verify_auth(&headers(&basic("someone", "123456")), &cfg),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn missing_header() {
    let cfg = config("123456");
    assert!(matches!(verify_auth(&HeaderMap::new(), &cfg), Err(Error::Unauthorized)));
  }

  #[test]
  fn invalid_base64() {
    let cfg = config("123456");
    assert!(matches!(
      verify_auth(&headers("Basic !!!not-base64!!!"), &cfg),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn scheme_is_case_insensitive() {
    let cfg = config("123456");
    let encoded = B64.encode("GEMINDZ:123456");
    for scheme in ["basic", "BASIC", "bAsIc"] {
      let value = format!("{scheme} {encoded}");
      assert!(verify_auth(&headers(&value), &cfg).is_ok(), "{scheme}");
    }
  }

  #[test]
  fn bearer_scheme_is_rejected() {
    let cfg = config("123456");
    assert!(matches!(
      verify_auth(&headers("Bearer abc"), &cfg),
      Err(Error::Unauthorized)
    ));
  }
}
