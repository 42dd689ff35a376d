//! # Mock Framework & Testing Guide
//!
//! Utilities for testing code that talks to a store without spawning a real
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted answers | Real table |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Use Case** | Logic *around* the client | The store itself or the full system |
//!
//! ## Two Styles
//!
//! - [`MockClient`]: queue expectations up front, run the code, then
//!   [`verify`](MockClient::verify). Requests are answered in queue order.
//! - [`create_mock_client`] + `expect_*` helpers: receive each raw request
//!   yourself, inspect its payload, and answer through the oneshot sender.
//!   Use this when the test needs to look at what was sent (e.g. the rows of a
//!   `SaveMany`).
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut customers = MockClient::<Customer>::new();
//! customers.expect_get().return_ok(None);
//!
//! let client = CustomerClient::new(customers.client());
//! assert!(client.find_by_id(&CustomerId(1)).await?.is_none());
//! customers.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request of a given kind.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    GetMany(Result<Vec<T>, FrameworkError>),
    FindFirst(Result<Option<T>, FrameworkError>),
    SaveMany(Result<Vec<T>, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "Create",
            Expectation::Get(_) => "Get",
            Expectation::GetMany(_) => "GetMany",
            Expectation::FindFirst(_) => "FindFirst",
            Expectation::SaveMany(_) => "SaveMany",
        }
    }
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    unexpected: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: ActorEntity>(state: &SharedState<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock store with expectation tracking for fluent testing.
///
/// Requests that arrive with no matching expectation are recorded and their
/// response channel is dropped, so the caller sees
/// [`FrameworkError::ActorDropped`]. [`verify`](MockClient::verify) then fails.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::GetMany { respond_to, .. },
                        Some(Expectation::GetMany(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindFirst { respond_to, .. },
                        Some(Expectation::FindFirst(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::SaveMany { respond_to, .. },
                        Some(Expectation::SaveMany(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation.as_ref().map_or("nothing", |e| e.kind());
                        let mut state = lock(&task_state);
                        state
                            .unexpected
                            .push(format!("got {}, expected {}", request.kind(), expected));
                        // Put the unmatched expectation back so verify() reports it too.
                        if let Some(expectation) = expectation {
                            state.expectations.push_front(expectation);
                        }
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Get)
    }

    /// Expects a `get_many` request.
    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::GetMany)
    }

    /// Expects a `find_first` request.
    pub fn expect_find_first(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::FindFirst)
    }

    /// Expects a `save_many` request.
    pub fn expect_save_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::SaveMany)
    }

    /// Panics unless every expectation was consumed and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<_> = state.expectations.iter().map(|e| e.kind()).collect();
            panic!("Not all expectations were met. Remaining: {:?}", remaining);
        }
    }

    fn builder<R>(
        &mut self,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            state: self.state.clone(),
        }
    }
}

/// Builder that queues the answer for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    state: SharedState<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Answers the request successfully.
    pub fn return_ok(self, value: R) {
        lock(&self.state).expectations.push_back((self.wrap)(Ok(value)));
    }

    /// Answers the request with an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.state).expectations.push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Answer channel handed back by the `expect_*` helpers.
pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off `receiver`, asserts on the
/// payload, and answers through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a GetMany.
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a SaveMany.
pub async fn expect_save_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::SaveMany { items, respond_to }) => Some((items, respond_to)),
        _ => None,
    }
}
