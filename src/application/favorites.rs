use crate::domain::entities::favorite::Favorite;
use crate::domain::error::DomainError;
use crate::domain::ports::weather_store::WeatherStore;
use std::sync::Arc;

pub struct FavoritesUseCase {
    store: Arc<dyn WeatherStore>,
}

impl FavoritesUseCase {
    pub fn new(store: Arc<dyn WeatherStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Favorite>, DomainError> {
        self.store.list_favorites()
    }

    /// Idempotent add: a duplicate name leaves the list untouched.
    pub fn add(&self, name: &str, code: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidInput("favorite name is empty".into()));
        }
        self.store.add_favorite(name, code)
    }

    pub fn remove(&self, name: &str) -> Result<(), DomainError> {
        self.store.remove_favorite(name)
    }
}
