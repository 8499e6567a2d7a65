use crate::clients::actor_client::ActorClient;
use crate::dish_actor::DishError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Dish, DishCreate, DishUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the editor's menu, backed by the Dish actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Dish>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Dish> for MenuClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    // Entity failures travel boxed through the framework; unbox them so callers
    // can match on the original DishError.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::OutOfRange { index, len } => DishError::OutOfRange { index, len },
            FrameworkError::EntityError(inner) => match inner.downcast::<DishError>() {
                Ok(dish_error) => *dish_error,
                Err(other) => DishError::ActorCommunicationError(other.to_string()),
            },
            other => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    /// Appends a dish and returns its position.
    #[instrument(skip(self))]
    pub async fn add_dish(&self, params: DishCreate) -> Result<usize, DishError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies an update to the dish at `index` and returns the new state.
    #[instrument(skip(self))]
    pub async fn modify_dish(&self, index: usize, update: DishUpdate) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner
            .update(index, update)
            .await
            .map_err(Self::map_error)
    }

    /// Removes the dish at `index` and returns it.
    pub async fn remove_dish(&self, index: usize) -> Result<Dish, DishError> {
        self.delete(index).await
    }

    /// Snapshot of the whole menu, in order.
    pub async fn menu(&self) -> Result<Vec<Dish>, DishError> {
        self.list().await
    }
}
