use std::convert::TryFrom;
use std::path::Path;

use bstr::{BStr, BString, ByteSlice};
use fxhash::FxHashMap;

use gfa::gfa::GFA;
use gfa::parser::GFAParser;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};

/// Identifies one inserted edge; parallel edges get distinct ids.
pub type EdgeId = usize;

/// One entry of a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub vertex: usize,
    pub edge: EdgeId,
}

pub type AdjacencyList = Vec<Adjacent>;

/// An undirected graph on the vertices `0..vertex_count`, stored as
/// adjacency lists in edge insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<AdjacencyList>,
    endpoints: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Graph {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
            endpoints: Vec::new(),
        }
    }

    /// Like [`Graph::new`], for callers that hold a signed count.
    pub fn try_new(vertex_count: i64) -> Result<Graph> {
        usize::try_from(vertex_count)
            .map(Graph::new)
            .map_err(|_| GraphError::InvalidVertexCount(vertex_count))
    }

    /// Builds a graph from an edge list, stopping at the first
    /// invalid edge.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Inserts the undirected edge `u -- v`. Repeated calls for the
    /// same pair add parallel edges. The graph is left untouched if
    /// either end is out of range or `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        Ok(self.push_edge(u, v))
    }

    /// Appends an edge whose ends are already known to be distinct
    /// vertices of this graph.
    pub(crate) fn push_edge(&mut self, u: usize, v: usize) -> EdgeId {
        let edge = self.endpoints.len();
        self.adjacency[u].push(Adjacent { vertex: v, edge });
        self.adjacency[v].push(Adjacent { vertex: u, edge });
        self.endpoints.push((u, v));
        edge
    }

    /// The neighbors of `v` in insertion order, with repetitions for
    /// parallel edges.
    pub fn neighbors(
        &self,
        v: usize,
    ) -> Result<impl Iterator<Item = usize> + '_> {
        Ok(self.adjacent(v)?.iter().map(|adj| adj.vertex))
    }

    pub fn adjacent(&self, v: usize) -> Result<&[Adjacent]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    pub fn degree(&self, v: usize) -> Result<usize> {
        Ok(self.adjacent(v)?.len())
    }

    /// Every edge once, as `(u, v)` in the orientation it was added,
    /// ordered by edge id.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.endpoints.iter().copied()
    }

    /// Adjacency lists indexed by vertex, for the traversals.
    pub(crate) fn lists(&self) -> &[AdjacencyList] {
        &self.adjacency
    }
}

/// Parses a GFA file, keeping segment names as raw bytes.
pub fn parse_gfa<P: AsRef<Path>>(path: P) -> Result<GFA<Vec<u8>, ()>> {
    let parser: GFAParser<Vec<u8>, ()> = GFAParser::new();
    Ok(parser.parse_file(path.as_ref())?)
}

/// A [`Graph`] whose vertices carry segment names, including the map
/// required to go from vertex index back to the name.
#[derive(Debug, Default, Clone)]
pub struct NamedGraph {
    pub graph: Graph,
    pub inv_names: Vec<BString>,
}

impl NamedGraph {
    /// Builds a graph from a sequence of named links. Names are
    /// assigned vertex indices in the order they are first seen;
    /// links from a name to itself are skipped.
    pub fn from_links<I, N>(links: I) -> NamedGraph
    where
        I: IntoIterator<Item = (N, N)>,
        N: AsRef<[u8]>,
    {
        NamedGraph::from_segments_and_links(std::iter::empty::<N>(), links)
    }

    /// Like [`NamedGraph::from_links`], but every name in `segments`
    /// becomes a vertex first, in order, whether or not it is linked.
    pub fn from_segments_and_links<S, I, N>(segments: S, links: I) -> NamedGraph
    where
        S: IntoIterator<Item = N>,
        I: IntoIterator<Item = (N, N)>,
        N: AsRef<[u8]>,
    {
        let mut name_map: FxHashMap<Vec<u8>, usize> = FxHashMap::default();
        let mut inv_names: Vec<BString> = Vec::new();
        let mut edges = Vec::new();

        let mut get_ix = |name: &[u8]| {
            if let Some(ix) = name_map.get(name) {
                *ix
            } else {
                let ix = inv_names.len();
                name_map.insert(name.to_vec(), ix);
                inv_names.push(BString::from(name));
                ix
            }
        };

        for segment in segments {
            get_ix(segment.as_ref());
        }

        for (from, to) in links {
            let from_ix = get_ix(from.as_ref());
            let to_ix = get_ix(to.as_ref());

            if from_ix == to_ix {
                warn!(segment = %from.as_ref().as_bstr(), "skipping self-loop link");
                continue;
            }
            edges.push((from_ix, to_ix));
        }

        let mut graph = Graph::new(inv_names.len());
        for (u, v) in edges {
            graph.push_edge(u, v);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built named graph"
        );

        NamedGraph { graph, inv_names }
    }

    /// Constructs the graph of a parsed GFA: one vertex per segment,
    /// in file order, and one edge per link.
    pub fn from_gfa(gfa: &GFA<Vec<u8>, ()>) -> NamedGraph {
        NamedGraph::from_segments_and_links(
            gfa.segments.iter().map(|segment| &segment.name),
            gfa.links
                .iter()
                .map(|link| (&link.from_segment, &link.to_segment)),
        )
    }

    pub fn from_gfa_path<P: AsRef<Path>>(path: P) -> Result<NamedGraph> {
        let gfa = parse_gfa(path)?;
        Ok(NamedGraph::from_gfa(&gfa))
    }

    pub fn name(&self, v: usize) -> Option<&BStr> {
        self.inv_names.get(v).map(|name| name.as_bstr())
    }
}
