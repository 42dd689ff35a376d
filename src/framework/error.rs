//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, as opposed to the per-record
//! errors each entity defines.

/// Errors that can occur within the actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an `EntityError`.
    ///
    /// Returns the original error unchanged when it is a transport failure
    /// or when the boxed error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("rejected: {0}")]
    struct Rejected(String);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_into_entity_error_recovers_boxed_type() {
        let err = FrameworkError::EntityError(Box::new(Rejected("empty name".into())));
        assert_eq!(
            err.into_entity_error::<Rejected>().unwrap(),
            Rejected("empty name".into())
        );
    }

    #[test]
    fn test_into_entity_error_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.into_entity_error::<Rejected>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let closed = FrameworkError::ActorClosed.into_entity_error::<Rejected>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
