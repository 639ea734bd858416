use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::graph::{AdjacencyList, EdgeId, Graph};
use crate::state::{BridgeState, ComponentState};

/// A bridge `(parent, child)`, oriented the way the DFS tree
/// crossed it.
pub type Bridge = (usize, usize);

pub type Component = Vec<usize>;

/// The explicit call stack of a depth first search. `Loop` carries the
/// position in the vertex's adjacency list, so the stack never holds
/// more than a few instructions per level of the DFS tree.
#[derive(Debug)]
enum Inst {
    Recur(usize, Option<(usize, EdgeId)>),
    Loop(usize, usize),
    Return(usize, usize),
}

type InstStack = VecDeque<Inst>;

/// Component search needs no work after a child returns, nor the
/// edge a vertex was reached through.
#[derive(Debug)]
enum ComponentInst {
    Recur(usize),
    Loop(usize, usize),
}

fn run_component_inst(
    inst: ComponentInst,
    stack: &mut VecDeque<ComponentInst>,
    state: &mut ComponentState,
    graph: &[AdjacencyList],
) {
    match inst {
        ComponentInst::Recur(w) => {
            state.visit(w);
            stack.push_front(ComponentInst::Loop(w, 0));
        }
        ComponentInst::Loop(w, ix) => {
            if let Some(adj) = graph[w].get(ix) {
                stack.push_front(ComponentInst::Loop(w, ix + 1));
                if !state.visited[adj.vertex] {
                    stack.push_front(ComponentInst::Recur(adj.vertex));
                }
            }
        }
    }
}

fn run_bridge_inst(
    inst: Inst,
    stack: &mut InstStack,
    state: &mut BridgeState,
    graph: &[AdjacencyList],
) {
    match inst {
        Inst::Recur(w, via) => {
            state.mut_recur(w, via);
            stack.push_front(Inst::Loop(w, 0));
        }
        Inst::Loop(w, ix) => {
            if let Some(adj) = graph[w].get(ix) {
                let u = adj.vertex;
                stack.push_front(Inst::Loop(w, ix + 1));

                if !state.visited[u] {
                    stack.push_front(Inst::Return(w, u));
                    stack.push_front(Inst::Recur(u, Some((w, adj.edge))));
                } else if !state.is_parent_edge(w, adj.edge) {
                    // (w, u) back-edge, or a parallel copy of the tree edge
                    state.update_low(w, state.discovery[u]);
                }
            }
        }
        Inst::Return(w, u) => {
            state.finish_child(w, u);
        }
    }
}

/// Returns the connected components of the graph, each listing its
/// vertices in DFS visitation order. Components are ordered by their
/// smallest vertex, and isolated vertices form singleton components.
pub fn connected_components(graph: &Graph) -> Vec<Component> {
    let lists = graph.lists();
    let mut state = ComponentState::initialize(graph);
    let mut stack = VecDeque::new();

    for n in 0..lists.len() {
        if !state.visited[n] {
            trace!(root = n, "starting component");
            state.start_component();
            stack.push_front(ComponentInst::Recur(n));
            while let Some(inst) = stack.pop_front() {
                run_component_inst(inst, &mut stack, &mut state, lists);
            }
        }
    }

    debug!(
        vertices = lists.len(),
        components = state.components.len(),
        "found connected components"
    );

    state.components
}

/// Finds every bridge of the graph, in the order the DFS finishes
/// the child end of each bridge.
pub fn bridges(graph: &Graph) -> Vec<Bridge> {
    let lists = graph.lists();
    let mut state = BridgeState::initialize(graph);
    let mut stack: InstStack = VecDeque::new();

    for n in 0..lists.len() {
        if !state.visited[n] {
            trace!(root = n, time = state.count, "starting DFS tree");
            stack.push_front(Inst::Recur(n, None));
            while let Some(inst) = stack.pop_front() {
                run_bridge_inst(inst, &mut stack, &mut state, lists);
            }
        }
    }

    debug!(
        vertices = lists.len(),
        edges = graph.edge_count(),
        bridges = state.bridges.len(),
        "found bridges"
    );

    state.bridges
}

/// For each vertex, the index of its component in the output of
/// [`connected_components`].
pub fn component_labels(graph: &Graph) -> Vec<usize> {
    let mut labels = vec![0; graph.vertex_count()];
    for (ix, component) in connected_components(graph).iter().enumerate() {
        for &v in component {
            labels[v] = ix;
        }
    }
    labels
}

/// A graph without vertices counts as connected.
pub fn is_connected(graph: &Graph) -> bool {
    graph.is_empty() || connected_components(graph).len() == 1
}

/// The textbook recursive formulations. They produce exactly the same
/// output as the explicit-stack versions but use one call frame per
/// level of the DFS tree, so deep graphs can overflow the stack.
pub mod recursive {
    use super::*;

    fn visit(graph: &[AdjacencyList], state: &mut ComponentState, w: usize) {
        state.visit(w);
        for adj in graph[w].iter() {
            if !state.visited[adj.vertex] {
                visit(graph, state, adj.vertex);
            }
        }
    }

    pub fn connected_components(graph: &Graph) -> Vec<Component> {
        let lists = graph.lists();
        let mut state = ComponentState::initialize(graph);

        for n in 0..lists.len() {
            if !state.visited[n] {
                state.start_component();
                visit(lists, &mut state, n);
            }
        }

        state.components
    }

    fn bridge_dfs(
        graph: &[AdjacencyList],
        state: &mut BridgeState,
        w: usize,
        via: Option<(usize, EdgeId)>,
    ) {
        state.mut_recur(w, via);

        for adj in graph[w].iter() {
            let u = adj.vertex;
            if !state.visited[u] {
                bridge_dfs(graph, state, u, Some((w, adj.edge)));
                state.finish_child(w, u);
            } else if !state.is_parent_edge(w, adj.edge) {
                state.update_low(w, state.discovery[u]);
            }
        }
    }

    pub fn bridges(graph: &Graph) -> Vec<Bridge> {
        let lists = graph.lists();
        let mut state = BridgeState::initialize(graph);

        for n in 0..lists.len() {
            if !state.visited[n] {
                bridge_dfs(lists, &mut state, n, None);
            }
        }

        state.bridges
    }
}

impl Graph {
    /// See [`connected_components`].
    pub fn find_connected_components(&self) -> Vec<Component> {
        connected_components(self)
    }

    pub fn component_labels(&self) -> Vec<usize> {
        component_labels(self)
    }

    pub fn is_connected(&self) -> bool {
        is_connected(self)
    }

    /// See [`bridges`].
    pub fn find_bridges(&self) -> Vec<Bridge> {
        bridges(self)
    }
}
