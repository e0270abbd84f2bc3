//! Generic entity lifecycle service.
//!
//! Products and users follow the same create / update / fetch / list shape;
//! [`LifecycleService`] implements it once over any [`Entity`] and
//! [`Repository`]. Deactivation and the active-only queries are only
//! available for entities that implement [`SoftDelete`].

use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::actor_framework::{Entity, SoftDelete};
use crate::error::ServiceError;
use crate::repository::Repository;

/// Outcome of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// Parses a caller-supplied identifier. No trimming or truncation.
pub fn parse_id<I>(raw: &str) -> Result<I, ServiceError>
where
    I: FromStr<Err = ParseIntError>,
{
    raw.parse().map_err(|source| ServiceError::MalformedId {
        raw: raw.to_string(),
        source,
    })
}

pub struct LifecycleService<T: Entity, R: Repository<T>> {
    repo: Arc<R>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, R: Repository<T>> Clone for LifecycleService<T, R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo), _entity: PhantomData }
    }
}

impl<T: Entity, R: Repository<T>> LifecycleService<T, R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, _entity: PhantomData }
    }

    /// Not idempotent: every call stores a new record.
    #[instrument(skip_all)]
    pub async fn create(&self, request: T::Request) -> Result<T::Response, ServiceError> {
        let saved = self.repo.save(T::from_request(request)).await?;
        if let Some(id) = saved.id() {
            info!(id = %id, "Record created");
        }
        Ok(saved.to_response())
    }

    /// Full replace of the caller-owned fields. Nothing is written when the
    /// identifier does not resolve.
    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn update(&self, id: T::Id, request: T::Request) -> Result<Lookup<T::Response>, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            debug!("Record not found");
            return Ok(Lookup::NotFound);
        };
        existing.apply_request(request);
        let saved = self.repo.save(existing).await?;
        info!("Record updated");
        Ok(Lookup::Found(saved.to_response()))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn find(&self, id: T::Id) -> Result<Lookup<T::Response>, ServiceError> {
        let found = self.repo.find_by_id(id).await?;
        Ok(Lookup::from(found).map(|entity| entity.to_response()))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<T::Response>, ServiceError> {
        let all = self.repo.find_all().await?;
        Ok(all.iter().map(T::to_response).collect())
    }

    /// Matches are projected as-is; inactive records are not filtered out.
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> Result<Vec<T::Response>, ServiceError> {
        let matches = self.repo.search(keyword).await?;
        debug!(matches = matches.len(), "Search finished");
        Ok(matches.iter().map(T::to_response).collect())
    }
}

impl<T: SoftDelete, R: Repository<T>> LifecycleService<T, R> {
    /// Marks the record inactive and keeps it stored. Returns `false`, with
    /// no write, when the identifier does not resolve.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn deactivate(&self, id: T::Id) -> Result<bool, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            debug!("Record not found");
            return Ok(false);
        };
        existing.deactivate();
        self.repo.save(existing).await?;
        info!("Record deactivated");
        Ok(true)
    }

    /// Inactive records are indistinguishable from missing ones here.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn find_active(&self, id: T::Id) -> Result<Lookup<T::Response>, ServiceError> {
        let found = self.repo.find_active_by_id(id).await?;
        Ok(Lookup::from(found).map(|entity| entity.to_response()))
    }

    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<T::Response>, ServiceError> {
        let active = self.repo.find_all_active().await?;
        Ok(active.iter().map(T::to_response).collect())
    }
}
