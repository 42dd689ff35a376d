//! # Generic Messages
//!
//! The request enum sent from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Filter evaluated inside the actor against every stored record.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover what a repository needs from a relational store:
///
/// - **Create**: build a record from [`ActorEntity::Create`], run the
///   `on_create` hook, insert it and return the stored record.
/// - **Get**: fetch one record by ID.
/// - **GetMany**: fetch every record whose ID is listed. Unknown IDs are
///   absent from the answer, they are not an error.
/// - **FindFirst**: return the first record matching a predicate.
/// - **SaveMany**: overwrite existing records in one batch. Records whose
///   ID is not stored are skipped; the answer lists what was written.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    FindFirst {
        predicate: Predicate<T>,
        respond_to: Response<Option<T>>,
    },
    SaveMany {
        items: Vec<T>,
        respond_to: Response<Vec<T>>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short name of the request, used in logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::GetMany { .. } => "GetMany",
            ResourceRequest::FindFirst { .. } => "FindFirst",
            ResourceRequest::SaveMany { .. } => "SaveMany",
        }
    }
}
