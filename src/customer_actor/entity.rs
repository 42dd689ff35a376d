//! [`ActorEntity`] implementation for [`Customer`].

use crate::customer_actor::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerId};

impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Rejects a blank name or an email without `@`.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(CustomerError::ValidationError("name must not be empty".into()));
        }
        if !self.email.contains('@') {
            return Err(CustomerError::ValidationError(format!(
                "invalid email: {}",
                self.email
            )));
        }
        Ok(())
    }
}
