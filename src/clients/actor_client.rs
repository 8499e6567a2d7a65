use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard list and delete operations.
///
/// A domain client wraps a [`ResourceClient`], names its own error type, and says how
/// framework errors map onto it. `list` and `delete` then come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every entity, in order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Remove the entity at a position and return it.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, index: usize) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(index).await.map_err(Self::map_error)
    }
}
