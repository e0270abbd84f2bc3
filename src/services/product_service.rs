use std::sync::Arc;

use tracing::{debug, instrument};

use crate::actor_framework::StoreClient;
use crate::domain::{Product, ProductId};
use crate::error::ServiceError;
use crate::lifecycle::{parse_id, LifecycleService, Lookup};
use crate::product_actor::{ProductRequest, ProductResponse};
use crate::repository::Repository;

/// Product lifecycle: create, full-replace update, soft delete, active
/// listings and keyword search.
pub struct ProductService<R: Repository<Product> = StoreClient<Product>> {
    inner: LifecycleService<Product, R>,
}

impl<R: Repository<Product>> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<R: Repository<Product>> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { inner: LifecycleService::new(repo) }
    }

    #[instrument(skip(self, request), fields(product_name = %request.name))]
    pub async fn create_product(&self, request: ProductRequest) -> Result<ProductResponse, ServiceError> {
        debug!("Sending request");
        self.inner.create(request).await
    }

    #[instrument(skip(self, request))]
    pub async fn update_product(&self, id: ProductId, request: ProductRequest) -> Result<Lookup<ProductResponse>, ServiceError> {
        debug!("Sending request");
        self.inner.update(id, request).await
    }

    /// Active products only, in store order.
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        debug!("Sending request");
        self.inner.list_active().await
    }

    /// Soft delete: the record stays searchable.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<bool, ServiceError> {
        debug!("Sending request");
        self.inner.deactivate(id).await
    }

    /// Includes inactive products.
    #[instrument(skip(self))]
    pub async fn search_products(&self, keyword: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        debug!("Sending request");
        self.inner.search(keyword).await
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: &str) -> Result<Lookup<ProductResponse>, ServiceError> {
        debug!("Sending request");
        let id: ProductId = parse_id(id)?;
        self.inner.find_active(id).await
    }
}
