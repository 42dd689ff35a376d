//! # Customer Client
//!
//! [`CustomersRepository`] over the customer store.

use crate::customer_actor::CustomerError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Customer, CustomerCreate, CustomerId};
use crate::repository::CustomersRepository;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CustomerError>()
            .unwrap_or_else(|e| CustomerError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl CustomersRepository for CustomerClient {
    #[instrument(skip(self))]
    async fn create(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id.clone()).await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        debug!("Sending request");
        let email = email.to_owned();
        self.inner
            .find_first(move |customer: &Customer| customer.email == email)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_find_by_id_missing_customer() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get().return_ok(None);

        let customers = CustomerClient::new(mock.client());
        let found = customers.find_by_id(&CustomerId(4)).await.unwrap();
        assert!(found.is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_create_surfaces_validation_error() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CustomerError::ValidationError("invalid email: bob".into()),
            )));

        let customers = CustomerClient::new(mock.client());
        let err = customers
            .create(CustomerCreate {
                name: "Bob".into(),
                email: "bob".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CustomerError::ValidationError("invalid email: bob".into())
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_errors_become_communication_errors() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_find_first()
            .return_err(FrameworkError::ActorClosed);

        let customers = CustomerClient::new(mock.client());
        let err = customers.find_by_email("a@b.c").await.unwrap_err();
        assert_eq!(
            err,
            CustomerError::ActorCommunicationError("Actor closed".into())
        );

        mock.verify();
    }
}
