pub mod favorite;
pub mod forecast;
pub mod snapshot;
