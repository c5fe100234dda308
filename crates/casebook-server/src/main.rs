//! `server`: runs the Casebook API.
//!
//! Startup is all-or-nothing. An unreadable config, a password hash that is
//! not a PHC string, or a database that cannot be opened ends the process
//! with an error before the listener is bound.
//!
//! `server --hash-password` reads a password from stdin and prints the value
//! to put in `auth_password_hash`.

use std::{
  io::BufRead as _,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use casebook_server::{AppState, ServerConfig};
use casebook_store_sqlite::SqliteStore;
use clap::Parser;
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Test-case and execution-result service")]
struct Cli {
  /// TOML config file; missing keys fall back to defaults and `CASEBOOK_*`.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Hash a password read from stdin, print it, and exit.
  #[arg(long)]
  hash_password: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  if cli.hash_password {
    println!("{}", hash_stdin_password()?);
    return Ok(());
  }

  let cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("loading {}", cli.config.display()))?;

  let db_path = home_relative(&cfg.store_path);
  let store   = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("opening database {}", db_path.display()))?;
  tracing::info!(db = %db_path.display(), user = %cfg.auth_username, "database ready");

  let app = casebook_server::router(AppState {
    store: Arc::new(store),
    auth:  Arc::new(cfg.auth_config()),
  });

  let address  = format!("{}:{}", cfg.host, cfg.port);
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("binding {address}"))?;
  tracing::info!(%address, "accepting requests");

  axum::serve(listener, app)
    .with_graceful_shutdown(ctrl_c())
    .await
    .context("serving requests")?;

  tracing::info!("shut down cleanly");
  Ok(())
}

async fn ctrl_c() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "cannot install Ctrl-C handler; running until killed");
    std::future::pending::<()>().await;
  }
  tracing::info!("Ctrl-C received");
}

/// One line from stdin, without its line ending, hashed with default argon2id.
fn hash_stdin_password() -> anyhow::Result<String> {
  eprint!("Password: ");
  let mut line = String::new();
  std::io::stdin().lock().read_line(&mut line).context("reading stdin")?;
  let password = line.trim_end_matches(['\r', '\n']);

  let salt = SaltString::generate(&mut OsRng);
  let hash = Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map_err(|e| anyhow::anyhow!("hashing password: {e}"))?;
  Ok(hash.to_string())
}

/// `~/x` resolves against `$HOME`; every other path is used as given.
fn home_relative(path: &Path) -> PathBuf {
  match (path.strip_prefix("~"), std::env::var_os("HOME")) {
    (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
    _ => path.to_path_buf(),
  }
}
