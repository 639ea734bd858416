use crate::graph::{EdgeId, Graph};

/// Discovery time and low value of a vertex not yet reached.
pub const UNDISCOVERED: usize = usize::MAX;

/// Bookkeeping for one connected components search.
#[derive(Default, Debug, Clone)]
pub struct ComponentState {
    pub visited: Vec<bool>,
    pub components: Vec<Vec<usize>>,
}

impl ComponentState {
    pub fn initialize(graph: &Graph) -> ComponentState {
        ComponentState {
            visited: vec![false; graph.vertex_count()],
            components: Vec::new(),
        }
    }

    /// Opens the component that the next visited vertices belong to.
    pub fn start_component(&mut self) {
        self.components.push(Vec::new());
    }

    pub fn visit(&mut self, w: usize) {
        self.visited[w] = true;
        if let Some(component) = self.components.last_mut() {
            component.push(w);
        }
    }
}

/// Bookkeeping for one bridge search. Lives for exactly one call and
/// is discarded when the bridges have been collected.
#[derive(Default, Debug, Clone)]
pub struct BridgeState {
    pub visited: Vec<bool>,
    pub discovery: Vec<usize>,
    pub low: Vec<usize>,
    pub parent: Vec<Option<usize>>,
    /// The tree edge a vertex was reached through. Only this edge is
    /// skipped when looking for back-edges, so a parallel copy of it
    /// still counts as one.
    pub parent_edge: Vec<Option<EdgeId>>,
    /// Shared by every DFS tree of the search.
    pub count: usize,
    pub bridges: Vec<(usize, usize)>,
}

impl BridgeState {
    pub fn initialize(graph: &Graph) -> BridgeState {
        let num_nodes = graph.vertex_count();

        BridgeState {
            visited: vec![false; num_nodes],
            discovery: vec![UNDISCOVERED; num_nodes],
            low: vec![UNDISCOVERED; num_nodes],
            parent: vec![None; num_nodes],
            parent_edge: vec![None; num_nodes],
            count: 0,
            bridges: Vec::new(),
        }
    }

    pub fn mut_recur(&mut self, w: usize, via: Option<(usize, EdgeId)>) {
        self.visited[w] = true;
        self.discovery[w] = self.count;
        self.low[w] = self.count;
        self.parent[w] = via.map(|(parent, _)| parent);
        self.parent_edge[w] = via.map(|(_, edge)| edge);
        self.count += 1;
    }

    pub fn is_parent_edge(&self, w: usize, edge: EdgeId) -> bool {
        self.parent_edge[w] == Some(edge)
    }

    pub fn update_low(&mut self, w: usize, value: usize) {
        self.low[w] = self.low[w].min(value);
    }

    /// Called once the subtree under the child `u` of `w` is done.
    pub fn finish_child(&mut self, w: usize, u: usize) {
        self.update_low(w, self.low[u]);

        // nothing below u reaches w or an ancestor of w
        if self.low[u] > self.discovery[w] {
            self.bridges.push((w, u));
        }
    }
}
