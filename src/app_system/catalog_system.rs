use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info};

use crate::actor_framework::StoreActor;
use crate::config::AppConfig;
use crate::domain::{Product, User};
use crate::services::{ProductService, UserService};

/// Owns the store actors and hands out the services built on them.
///
/// Responsible for starting up stores, wiring services to them, and handling
/// shutdown.
pub struct CatalogSystem {
    pub product_service: ProductService,
    pub user_service: UserService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let buffer_size = config.store.buffer_size;
        info!(buffer_size, "Starting catalog system");

        // 1. Product store, identifiers start at 1
        let product_id_counter = Arc::new(AtomicU64::new(1));
        let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

        let (product_actor, product_store) = StoreActor::<Product>::new(buffer_size, next_product_id);
        let product_service = ProductService::new(Arc::new(product_store));
        let product_handle = tokio::spawn(product_actor.run());

        // 2. User store
        let user_id_counter = Arc::new(AtomicU64::new(1));
        let next_user_id = move || user_id_counter.fetch_add(1, Ordering::SeqCst);

        let (user_actor, user_store) = StoreActor::<User>::new(buffer_size, next_user_id);
        let user_service = UserService::new(Arc::new(user_store));
        let user_handle = tokio::spawn(user_actor.run());

        Self {
            product_service,
            user_service,
            handles: vec![product_handle, user_handle],
        }
    }

    /// Drops the services held here and waits for the stores to drain.
    /// Stores stop once every clone of their services is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.product_service);
        drop(self.user_service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
