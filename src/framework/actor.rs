//! # Generic Actor Server
//!
//! `ResourceActor` is the storage engine behind every repository. It owns an
//! in-memory table of records and answers [`ResourceRequest`]s one at a time.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a table of records.
///
/// This is the "server" half of a store. It owns the table (`store`) and the
/// receiving end of the channel, and processes requests *sequentially* in
/// [`run`](ResourceActor::run). No `Mutex` guards the table: exclusive ownership
/// inside the task is enough.
///
/// Sequential processing makes every single request atomic with respect to
/// the others, a `SaveMany` batch included. It does **not** make a sequence
/// of requests atomic: a caller that reads with `GetMany` and writes back with
/// `SaveMany` can interleave with other callers between the two.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new(buffer)` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Use**: clone the client wherever it is needed. Dropping every clone
///    stops the actor.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Short type name ("Product" rather than "order_recipe::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(entity_type, params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = self.get_many(&ids);
                    debug!(
                        entity_type,
                        requested = ids.len(),
                        found = items.len(),
                        "GetMany"
                    );
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::FindFirst {
                    predicate,
                    respond_to,
                } => {
                    let item = self.store.values().find(|item| predicate(*item)).cloned();
                    debug!(entity_type, found = item.is_some(), "FindFirst");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::SaveMany { items, respond_to } => {
                    let requested = items.len();
                    let written = self.save_many(entity_type, items);
                    info!(entity_type, requested, written = written.len(), "Saved");
                    let _ = respond_to.send(Ok(written));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, entity_type: &str, params: T::Create) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create() {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    /// Records in the order their IDs were asked for, each at most once.
    fn get_many(&self, ids: &[T::Id]) -> Vec<T> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    fn save_many(&mut self, entity_type: &str, items: Vec<T>) -> Vec<T> {
        let mut written = Vec::with_capacity(items.len());
        for item in items {
            let id = item.id().clone();
            match self.store.get_mut(&id) {
                Some(slot) => {
                    *slot = item.clone();
                    written.push(item);
                }
                None => warn!(entity_type, %id, "Save skipped, not found"),
            }
        }
        written
    }
}
