use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use crate::EdgeTable;

/// Undirected graph of identifiers built from an [`EdgeTable`].
///
/// Nodes keep the order they were first seen in. Repeated records and links in
/// both directions collapse into a single edge.
#[derive(Clone, Debug, Default)]
pub struct LinkGraph {
    graph: StableUnGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl LinkGraph {
    pub fn from_edge_table(table: &EdgeTable) -> Self {
        let mut graph = Self::default();

        for record in table {
            let origin = graph.add_node(&record.origin);
            let link = graph.add_node(&record.link);

            graph.add_edge(origin, link);
        }

        log::debug!(
            "Built graph with {} nodes and {} edges from {} records",
            graph.node_count(),
            graph.edge_count(),
            table.len()
        );

        graph
    }

    /// Returns the existing index if the identifier is already a node
    pub fn add_node(&mut self, identifier: &str) -> NodeIndex {
        if let Some(index) = self.indices.get(identifier) {
            return *index;
        }

        let index = self.graph.add_node(identifier.to_string());

        self.indices.insert(identifier.to_string(), index);

        index
    }

    /// Self loops are dropped
    pub fn add_edge(&mut self, lhs: NodeIndex, rhs: NodeIndex) {
        if lhs != rhs {
            self.graph.update_edge(lhs, rhs, ());
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, identifier: &str) -> bool {
        self.indices.contains_key(identifier)
    }

    pub fn contains_edge(&self, lhs: &str, rhs: &str) -> bool {
        match (self.indices.get(lhs), self.indices.get(rhs)) {
            (Some(lhs), Some(rhs)) => self.graph.contains_edge(*lhs, *rhs),
            _ => false,
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().filter_map(|edge| {
            let (lhs, rhs) = self.graph.edge_endpoints(edge)?;

            Some((
                self.graph.node_weight(lhs)?.as_str(),
                self.graph.node_weight(rhs)?.as_str(),
            ))
        })
    }

    /// The number of adjacent nodes
    pub fn degree(&self, identifier: &str) -> Option<usize> {
        let index = self.indices.get(identifier)?;

        Some(self.graph.neighbors(*index).count())
    }

    /// Every node alongside its degree, in node order
    pub fn node_degrees(&self) -> impl Iterator<Item = (&str, usize)> {
        self.graph.node_indices().filter_map(|index| {
            Some((
                self.graph.node_weight(index)?.as_str(),
                self.graph.neighbors(index).count(),
            ))
        })
    }
}
