//! Shared application state.

use std::sync::Arc;

use crate::{
    clock::Clock,
    db::DbPool,
    keygen::KeyGenerator,
    store::{identity::IdentityStore, pair::PairStore},
};

/// State shared with every handler via axum's `State` extractor.
///
/// Cloning is cheap: the stores share the connection pool and the key
/// generator and clock sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub identities: IdentityStore,
    pub pairs: PairStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(pool: DbPool, keygen: KeyGenerator, clock: Arc<dyn Clock>) -> Self {
        Self {
            identities: IdentityStore::new(pool.clone(), Arc::new(keygen)),
            pairs: PairStore::new(pool),
            clock,
        }
    }
}
