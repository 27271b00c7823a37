pub mod state_graph;

pub use state_graph::StateGraph;
