pub mod favorites;
pub mod fetch;
pub mod history;
pub mod normalize;
pub mod registry;
