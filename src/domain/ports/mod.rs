pub mod forecast_source;
pub mod registry_cache;
pub mod weather_store;
