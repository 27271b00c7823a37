pub mod graph;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod validation;
