use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("cannot construct a graph with {0} vertices")]
    InvalidVertexCount(i64),

    /// Self-loops have no meaningful low-link value and are rejected.
    #[error("self-loop on vertex {0} is not supported")]
    SelfLoop(usize),

    #[error("failed to parse GFA input")]
    Gfa(#[from] gfa::parser::ParseError),
}
