//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is `&'static` data, so the state carries only immutable
//! configuration and needs no locking.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;

    use super::*;

    /// State bound to localhost with a throwaway assets dir.
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"),
        })
    }
}
