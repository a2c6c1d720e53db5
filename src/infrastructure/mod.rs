pub mod http;
pub mod registry_cache;
pub mod sqlite;
