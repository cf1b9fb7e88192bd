//! Directed graph over a keyed adjacency list.
//!
//! Variables:
//!   adj[v]  = Vec<V> of out-neighbours of vertex v, insertion-ordered
//!   V       = number of vertices = adj.len()
//!   E       = number of directed edges = sum of list lengths
//!
//! Equations:
//!   add_edge(u, v):        adj[u].push(v),   E += 1   (u, v must exist)
//!   add_bidirectional:     add_edge both ways,  E += 2
//!   remove_vertex(v):      drop adj[v], then purge v from every list
//!   dfs(s):                preorder, neighbours in insertion order
//!
//! Every mutation reports success as bool; lookups use Option.

use fxhash::{FxHashMap, FxHashSet};
use std::hash::Hash;

pub struct Graph<V: Eq + Hash + Clone> {
    adj: FxHashMap<V, Vec<V>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Self {
            adj: FxHashMap::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(|n| n.len()).sum()
    }

    /// Add an isolated vertex; false when it already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adj.contains_key(&vertex) {
            return false;
        }
        self.adj.insert(vertex, Vec::new());
        true
    }

    /// Add a directed edge `from -> to`; both endpoints must already be
    /// vertices.
    pub fn add_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.adj.contains_key(to) {
            return false;
        }
        match self.adj.get_mut(from) {
            Some(neighbours) => {
                neighbours.push(to.clone());
                true
            }
            None => false,
        }
    }

    pub fn add_bidirectional_edge(&mut self, a: &V, b: &V) -> bool {
        self.add_edge(a, b) && self.add_edge(b, a)
    }

    /// Remove one `from -> to` edge; false when it does not exist.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.adj.get_mut(from) {
            Some(neighbours) => match neighbours.iter().position(|v| v == to) {
                Some(i) => {
                    neighbours.remove(i);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub fn remove_bidirectional_edge(&mut self, a: &V, b: &V) -> bool {
        self.remove_edge(a, b) && self.remove_edge(b, a)
    }

    /// Remove a vertex from a directed graph: its list is dropped and
    /// every other list is purged of references to it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adj.remove(vertex).is_none() {
            return false;
        }
        for neighbours in self.adj.values_mut() {
            neighbours.retain(|v| v != vertex);
        }
        true
    }

    /// Remove a vertex assuming edge symmetry: only the lists of its own
    /// neighbours are touched.
    pub fn remove_vertex_bidirectional(&mut self, vertex: &V) -> bool {
        let Some(neighbours) = self.adj.remove(vertex) else {
            return false;
        };
        for n in &neighbours {
            if let Some(edges) = self.adj.get_mut(n) {
                if let Some(i) = edges.iter().position(|v| v == vertex) {
                    edges.remove(i);
                }
            }
        }
        true
    }

    pub fn neighbours(&self, vertex: &V) -> Option<&[V]> {
        self.adj.get(vertex).map(|n| n.as_slice())
    }

    /// Depth-first preorder from `start`, or None when `start` is not a
    /// vertex.
    pub fn dfs(&self, start: &V) -> Option<Vec<V>> {
        fn visit<V: Eq + Hash + Clone>(
            adj: &FxHashMap<V, Vec<V>>,
            vertex: &V,
            visited: &mut FxHashSet<V>,
            out: &mut Vec<V>,
        ) {
            visited.insert(vertex.clone());
            out.push(vertex.clone());
            if let Some(neighbours) = adj.get(vertex) {
                for n in neighbours {
                    if !visited.contains(n) {
                        visit(adj, n, visited, out);
                    }
                }
            }
        }

        if !self.adj.contains_key(start) {
            return None;
        }
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        visit(&self.adj, start, &mut visited, &mut order);
        Some(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_vertex("C");
        assert!(g.add_bidirectional_edge(&"A", &"B"));
        assert!(g.add_bidirectional_edge(&"B", &"C"));
        assert!(g.add_bidirectional_edge(&"A", &"C"));
        g
    }

    #[test]
    fn vertices_and_edges_need_to_exist() {
        let mut g = Graph::new();
        assert!(g.add_vertex("A"));
        assert!(!g.add_vertex("A"));
        assert!(!g.add_edge(&"A", &"Z"));
        assert!(!g.add_edge(&"Z", &"A"));
        assert!(!g.remove_edge(&"A", &"Z"));
        assert!(!g.remove_vertex(&"Z"));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn bidirectional_edges_come_and_go_in_pairs() {
        let mut g = triangle();
        assert_eq!(g.edge_count(), 6);

        assert!(g.remove_bidirectional_edge(&"A", &"C"));
        assert_eq!(g.neighbours(&"A"), Some(&["B"][..]));
        assert_eq!(g.neighbours(&"C"), Some(&["B"][..]));
        assert!(!g.remove_bidirectional_edge(&"A", &"C"));
    }

    #[test]
    fn removing_a_vertex_purges_its_edges() {
        let mut g = triangle();
        assert!(g.remove_vertex(&"B"));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.neighbours(&"A"), Some(&["C"][..]));
        assert_eq!(g.neighbours(&"C"), Some(&["A"][..]));
        assert_eq!(g.neighbours(&"B"), None);
    }

    #[test]
    fn bidirectional_vertex_removal_uses_its_own_list() {
        let mut g = triangle();
        assert!(g.remove_vertex_bidirectional(&"C"));
        assert_eq!(g.neighbours(&"A"), Some(&["B"][..]));
        assert_eq!(g.neighbours(&"B"), Some(&["A"][..]));
        assert!(!g.remove_vertex_bidirectional(&"C"));
    }

    #[test]
    fn dfs_preorder_follows_insertion_order() {
        let mut g = Graph::new();
        for v in ["A", "B", "C", "D"] {
            g.add_vertex(v);
        }
        g.add_edge(&"A", &"B");
        g.add_edge(&"A", &"C");
        g.add_edge(&"B", &"D");
        g.add_edge(&"D", &"A"); // back edge must not revisit

        assert_eq!(g.dfs(&"A"), Some(vec!["A", "B", "D", "C"]));
        assert_eq!(g.dfs(&"C"), Some(vec!["C"]));
        assert_eq!(g.dfs(&"Z"), None);
    }
}
