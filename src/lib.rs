pub mod algorithm;
pub mod error;
pub mod graph;
pub mod state;

pub use algorithm::{bridges, connected_components, is_connected};
pub use error::GraphError;
pub use graph::{Graph, NamedGraph};
