use std::sync::Arc;

use tracing::{debug, instrument};

use crate::actor_framework::StoreClient;
use crate::domain::{User, UserId};
use crate::error::ServiceError;
use crate::lifecycle::{parse_id, LifecycleService, Lookup};
use crate::repository::Repository;
use crate::user_actor::{UserRequest, UserResponse};

/// User lifecycle: create, update, fetch and list. Users have no delete.
pub struct UserService<R: Repository<User> = StoreClient<User>> {
    inner: LifecycleService<User, R>,
}

impl<R: Repository<User>> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<R: Repository<User>> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { inner: LifecycleService::new(repo) }
    }

    /// The returned projection doubles as the creation confirmation.
    #[instrument(skip(self, request), fields(user_email = %request.email))]
    pub async fn add_user(&self, request: UserRequest) -> Result<UserResponse, ServiceError> {
        debug!("Sending request");
        self.inner.create(request).await
    }

    /// `false` means the identifier did not resolve; nothing was written.
    #[instrument(skip(self, request))]
    pub async fn update_user(&self, id: &str, request: UserRequest) -> Result<bool, ServiceError> {
        debug!("Sending request");
        let id: UserId = parse_id(id)?;
        Ok(self.inner.update(id, request).await?.is_found())
    }

    #[instrument(skip(self))]
    pub async fn fetch_a_user(&self, id: &str) -> Result<Lookup<UserResponse>, ServiceError> {
        debug!("Sending request");
        let id: UserId = parse_id(id)?;
        self.inner.find(id).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        debug!("Sending request");
        self.inner.list_all().await
    }
}
