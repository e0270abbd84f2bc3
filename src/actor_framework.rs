use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::repository::Repository;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with mapping hooks)
// =============================================================================

/// Trait that any stored record must implement to be managed by the store
/// and the lifecycle service.
///
/// The mapping hooks are written out field by field in each implementation:
/// requests never carry the identifier or server-owned flags, and responses
/// expose everything the caller may see.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Ord + Copy + Send + Sync + Display + Debug;
    type Request: Send + Sync + Debug;
    type Response: Send + Sync + Debug;

    /// `None` until the store assigns one on first save.
    fn id(&self) -> Option<Self::Id>;
    fn assign_id(&mut self, id: Self::Id);

    // --- Mapping hooks ---

    /// Builds a fresh, unsaved entity from a caller request.
    fn from_request(request: Self::Request) -> Self;
    /// Overwrites the caller-owned fields of an existing entity.
    fn apply_request(&mut self, request: Self::Request);
    fn to_response(&self) -> Self::Response;

    // --- Query hooks ---

    fn is_active(&self) -> bool { true }
    /// Free-text predicate used by the store's search.
    fn matches(&self, _keyword: &str) -> bool { false }
}

/// Entities that are deactivated instead of being erased.
pub trait SoftDelete: Entity {
    fn deactivate(&mut self);
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest<T: Entity> {
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    FindById {
        id: T::Id,
        active_only: bool,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        active_only: bool,
        respond_to: Response<Vec<T>>,
    },
    Search {
        keyword: String,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE ACTOR
// =============================================================================

/// In-memory persistence collaborator. Owns its records and serves one
/// request at a time, so concurrent saves to the same identifier resolve as
/// last-write-wins. Listings come back in ascending identifier order.
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> StoreActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, StoreClient::new(sender))
    }

    #[instrument(name = "store_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { entity, respond_to } => {
                    let _ = respond_to.send(self.handle_save(entity));
                }
                StoreRequest::FindById { id, active_only, respond_to } => {
                    let item = self.store.get(&id)
                        .filter(|item| !active_only || item.is_active())
                        .cloned();
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::FindAll { active_only, respond_to } => {
                    let items = self.store.values()
                        .filter(|item| !active_only || item.is_active())
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Search { keyword, respond_to } => {
                    let items = self.store.values()
                        .filter(|item| item.matches(&keyword))
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
        info!(records = self.store.len(), "Store stopped");
    }

    fn handle_save(&mut self, mut entity: T) -> Result<T, StoreError> {
        let id = match entity.id() {
            Some(id) if self.store.contains_key(&id) => id,
            Some(id) => return Err(StoreError::UnknownId(id.to_string())),
            None => {
                let id = (self.next_id_fn)();
                entity.assign_id(id);
                debug!(id = %id, "Assigned identifier");
                id
            }
        };
        self.store.insert(id, entity.clone());
        Ok(entity)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Debug)]
pub struct StoreClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Entity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for StoreClient<T> {
    async fn save(&self, entity: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Save { entity, respond_to }).await
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, active_only: false, respond_to }).await
    }

    async fn find_active_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, active_only: true, respond_to }).await
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindAll { active_only: false, respond_to }).await
    }

    async fn find_all_active(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindAll { active_only: true, respond_to }).await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<T>, StoreError> {
        let keyword = keyword.to_string();
        self.request(|respond_to| StoreRequest::Search { keyword, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<u64>,
        text: String,
        archived: bool,
    }

    #[derive(Debug)]
    struct NoteRequest {
        text: String,
    }

    impl Entity for Note {
        type Id = u64;
        type Request = NoteRequest;
        type Response = String;

        fn id(&self) -> Option<u64> { self.id }
        fn assign_id(&mut self, id: u64) { self.id = Some(id); }

        fn from_request(request: NoteRequest) -> Self {
            Self { id: None, text: request.text, archived: false }
        }

        fn apply_request(&mut self, request: NoteRequest) {
            self.text = request.text;
        }

        fn to_response(&self) -> String { self.text.clone() }

        fn is_active(&self) -> bool { !self.archived }

        fn matches(&self, keyword: &str) -> bool { self.text.contains(keyword) }
    }

    fn start_store() -> StoreClient<Note> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = StoreActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    fn note(text: &str) -> Note {
        Note::from_request(NoteRequest { text: text.into() })
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_save_assigns_sequential_ids_and_keeps_them() {
        let store = start_store();

        let first = store.save(note("alpha")).await.unwrap();
        let second = store.save(note("beta")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        let mut edited = first.clone();
        edited.text = "alpha v2".into();
        let saved = store.save(edited).await.unwrap();
        assert_eq!(saved.id, Some(1));

        let all = store.find_all().await.unwrap();
        let texts: Vec<_> = all.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha v2", "beta"]);
    }

    #[tokio::test]
    async fn test_save_rejects_identifier_it_never_assigned() {
        let store = start_store();
        let mut forged = note("forged");
        forged.assign_id(42);

        let result = store.save(forged).await;
        assert_eq!(result, Err(StoreError::UnknownId("42".into())));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_active_filters_and_search_ignores_them() {
        let store = start_store();
        let kept = store.save(note("keep me")).await.unwrap();
        let mut gone = store.save(note("archive me")).await.unwrap();
        gone.archived = true;
        let gone = store.save(gone).await.unwrap();

        assert_eq!(store.find_all_active().await.unwrap(), vec![kept.clone()]);
        assert_eq!(store.find_active_by_id(gone.id.unwrap()).await.unwrap(), None);
        assert_eq!(store.find_by_id(gone.id.unwrap()).await.unwrap(), Some(gone.clone()));
        assert_eq!(store.search("me").await.unwrap(), vec![kept, gone]);
    }

    #[tokio::test]
    async fn test_closed_store_reports_error() {
        let (actor, client) = StoreActor::<Note>::new(1, || 1);
        drop(actor);

        assert_eq!(client.find_all().await, Err(StoreError::Closed));
    }
}
