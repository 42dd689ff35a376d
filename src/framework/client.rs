//! # Generic Client
//!
//! The sending half of a store.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be moved
/// into other tasks. Every call sends one request and awaits its oneshot answer.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: deriving would require `T: Clone` on the client itself.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn find_first<F>(&self, predicate: F) -> Result<Option<T>, FrameworkError>
    where
        F: Fn(&T) -> bool + Send + 'static,
    {
        self.request(|respond_to| ResourceRequest::FindFirst {
            predicate: Box::new(predicate),
            respond_to,
        })
        .await
    }

    pub async fn save_many(&self, items: Vec<T>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::SaveMany { items, respond_to })
            .await
    }

    async fn request<R, F>(&self, build: F) -> Result<R, FrameworkError>
    where
        R: Send,
        F: FnOnce(Response<R>) -> ResourceRequest<T> + Send,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
