pub mod migrations;
pub mod weather_store;
