//! Word co-occurrence graph and PageRank
//!
//! Undirected, weighted graph keyed by stem. Built incrementally with
//! FxHashMap adjacency, then ranked with power-iteration PageRank.

use rustc_hash::FxHashMap;

/// A node in the co-occurrence graph
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// The stem this node stands for
    pub stem: String,
    /// Adjacency: neighbor node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// Undirected co-occurrence graph
#[derive(Debug, Default)]
pub struct CooccurrenceGraph {
    stem_to_id: FxHashMap<String, u32>,
    nodes: Vec<GraphNode>,
}

impl CooccurrenceGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `stem`, returning its ID
    pub fn get_or_create_node(&mut self, stem: &str) -> u32 {
        if let Some(&id) = self.stem_to_id.get(stem) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.stem_to_id.insert(stem.to_string(), id);
        self.nodes.push(GraphNode {
            stem: stem.to_string(),
            edges: FxHashMap::default(),
        });
        id
    }

    /// Link two nodes with weight 1.0 unless they are already linked.
    ///
    /// Self-loops are ignored.
    pub fn link(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        if let Some(node) = self.nodes.get_mut(a as usize) {
            node.edges.entry(b).or_insert(1.0);
        }
        if let Some(node) = self.nodes.get_mut(b as usize) {
            node.edges.entry(a).or_insert(1.0);
        }
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes, indexed by ID
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Look up the ID of a stem
    pub fn node_id(&self, stem: &str) -> Option<u32> {
        self.stem_to_id.get(stem).copied()
    }

    fn total_weight(&self, node: usize) -> f64 {
        self.nodes[node].edges.values().sum()
    }
}

/// PageRank parameters
#[derive(Debug, Clone, Copy)]
pub struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl PageRank {
    /// Run PageRank over `graph`, returning one score per node ID.
    ///
    /// Nodes without edges spread their mass uniformly. Scores sum to 1.
    pub fn run(&self, graph: &CooccurrenceGraph) -> Vec<f64> {
        let n = graph.num_nodes();
        if n == 0 {
            return Vec::new();
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let weights: Vec<f64> = (0..n).map(|i| graph.total_weight(i)).collect();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;
        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = (0..n)
                .filter(|&i| weights[i] == 0.0)
                .map(|i| scores[i])
                .sum();
            new_scores.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, &score) in scores.iter().enumerate() {
                if weights[node] > 0.0 {
                    for (&neighbor, &weight) in &graph.nodes[node].edges {
                        new_scores[neighbor as usize] +=
                            self.damping * score * weight / weights[node];
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            std::mem::swap(&mut scores, &mut new_scores);
        }

        log::trace!("PageRank finished after {} iterations (delta {:e})", iterations, delta);

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_node() {
        let mut graph = CooccurrenceGraph::new();
        let a = graph.get_or_create_node("contract");
        let b = graph.get_or_create_node("award");
        assert_eq!(graph.get_or_create_node("contract"), a);
        assert_ne!(a, b);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.node_id("award"), Some(b));
    }

    #[test]
    fn test_link_is_undirected_and_unweighted() {
        let mut graph = CooccurrenceGraph::new();
        let a = graph.get_or_create_node("a");
        let b = graph.get_or_create_node("b");
        graph.link(a, b);
        graph.link(b, a);
        graph.link(a, a);

        assert_eq!(graph.nodes()[a as usize].edges.get(&b), Some(&1.0));
        assert_eq!(graph.nodes()[b as usize].edges.get(&a), Some(&1.0));
        assert!(!graph.nodes()[a as usize].edges.contains_key(&a));
    }

    #[test]
    fn test_pagerank_star_center_wins() {
        let mut graph = CooccurrenceGraph::new();
        let center = graph.get_or_create_node("center");
        for leaf in ["a", "b", "c", "d"] {
            let id = graph.get_or_create_node(leaf);
            graph.link(center, id);
        }

        let scores = PageRank::default().run(&graph);
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        for (id, score) in scores.iter().enumerate() {
            if id as u32 != center {
                assert!(scores[center as usize] > *score);
            }
        }
    }

    #[test]
    fn test_pagerank_empty_graph() {
        assert!(PageRank::default().run(&CooccurrenceGraph::new()).is_empty());
    }
}
