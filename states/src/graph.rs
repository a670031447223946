use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first means the start node, last means the end node
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, rest)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in rest {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed graph of "`from` is read by `to`" edges.
///
/// States and computes are nodes; an edge `a -> b` means `b` must be
/// recomputed after `a` changes.
#[derive(Debug)]
pub struct Graph<Node, Edge = ()>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    routes: Vec<(Node, Edge, Node)>,

    route_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node, Edge> Default for Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node, Edge> Graph<Node, Edge>
where
    Node: Debug + PartialEq + Copy + Ord,
    Edge: Debug + PartialEq,
{
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            route_cache: BTreeMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            routes: Vec::with_capacity(capacity),
            route_cache: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: Node, to: Node, via: Edge) {
        self.routes.push((from, via, to));
        self.route_cache.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn cal_in_degree(&self) -> BTreeMap<Node, usize> {
        let mut in_degree = BTreeMap::<Node, usize>::new();

        for (from, _via, to) in &self.routes {
            in_degree.entry(*from).or_insert(0);
            *in_degree.entry(*to).or_insert(0) += 1;
        }

        in_degree
    }

    /// Kahn's algorithm. Returns every node that appears on an edge, sources first.
    ///
    /// Ties between ready nodes are broken by `Ord`, so the order is deterministic.
    pub fn topology_order(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree = self.cal_in_degree();
        let mut order = Vec::with_capacity(in_degree.len());

        while !in_degree.is_empty() {
            let Some(node) = in_degree
                .iter()
                .find(|(_, deg)| **deg == 0)
                .map(|(node, _)| *node)
            else {
                let keys: Vec<Node> = in_degree.keys().copied().collect();
                let cycle = self.find_cycle(&keys).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route: cycle }));
            };

            in_degree.remove(&node);
            order.push(node);

            for connected in self.direct_connected_nodes(node)? {
                if let Some(deg) = in_degree.get_mut(&connected) {
                    *deg -= 1;
                }
            }
        }

        Ok(order)
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        // Iterative DFS restricted to the nodes left over by Kahn's algorithm
        let mut visited = BTreeSet::new();
        let mut path_set = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbours_within = |node: Node| {
            self.direct_connected_nodes(node)
                .unwrap_or_default()
                .into_iter()
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start_node in nodes {
            if visited.contains(&start_node) {
                continue;
            }

            stack.push((start_node, neighbours_within(start_node)));
            visited.insert(start_node);
            path_set.insert(start_node);
            path.push(start_node);

            while let Some((current_node, neighbors)) = stack.last_mut() {
                if let Some(neighbor) = neighbors.next() {
                    if path_set.contains(&neighbor) {
                        if let Some(pos) = path.iter().position(|&x| x == neighbor) {
                            let mut cycle = path[pos..].to_vec();
                            cycle.push(neighbor);
                            return Some(cycle);
                        }
                    } else if !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        path_set.insert(neighbor);
                        path.push(neighbor);
                        stack.push((neighbor, neighbours_within(neighbor)));
                    }
                } else {
                    let node_to_remove = *current_node;
                    stack.pop();
                    path_set.remove(&node_to_remove);
                    path.pop();
                }
            }
        }
        None
    }

    /// # Connected Nodes, every node that transitively depends on the given node
    pub fn connected(&mut self, node: Node) -> impl Iterator<Item = &Node> {
        if !self.route_cache.contains_key(&node) {
            let collected = self.connected_nodes(node);
            self.route_cache.insert(node, collected);
        }
        self.route_cache.get(&node).into_iter().flatten()
    }

    fn direct_connected_nodes(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, _via, to) in &self.routes {
            if from == &node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }

    fn connected_nodes(&self, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::new();

        queue.push_back(node);

        while let Some(current) = queue.pop_front() {
            for (from, _via, to) in &self.routes {
                // `collected` guards against cycles
                if from == &current && collected.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }

        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_graph_build() {
        let mut graph: Graph<u32, &str> = Graph::with_capacity(10);
        graph.route_to(1, 2, "edge_1_2");
        graph.route_to(2, 3, "edge_2_3");
        graph.route_to(1, 3, "edge_1_3");

        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn topology_order_puts_sources_first() {
        let mut graph: Graph<u32, &str> = Graph::with_capacity(10);
        graph.route_to(1, 2, "edge_1_2");
        graph.route_to(2, 3, "edge_2_3");
        graph.route_to(1, 3, "edge_1_3");

        let order = graph.topology_order().expect("acyclic graph should sort");
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn topology_order_is_deterministic_for_independent_nodes() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(5, 9, ());
        graph.route_to(2, 9, ());
        graph.route_to(7, 8, ());

        let order = graph.topology_order().expect("acyclic graph should sort");
        assert_eq!(order, vec![2, 5, 7, 8, 9]);
    }

    #[test]
    fn cycle_topology_order() {
        let mut graph: Graph<u32, &str> = Graph::with_capacity(10);
        graph.route_to(1, 2, "edge_1_2");
        graph.route_to(2, 3, "edge_2_3");
        graph.route_to(3, 1, "edge_3_1");

        assert!(graph.topology_order().is_err());
    }

    #[test]
    fn duplicate_edge_detection_error_msg() {
        let mut graph: Graph<u32, &str> = Graph::with_capacity(10);
        graph.route_to(1, 2, "edge_1_2");
        graph.route_to(1, 2, "edge_1_2_dup");

        match graph.topology_order() {
            Err(TopologyError::DuplicateEdge(dep_route)) => {
                assert_eq!(format!("{dep_route:?}"), "1 -> 2");

                let err = TopologyError::DuplicateEdge(dep_route);
                let err_str = err.to_string();
                assert!(err_str.contains("Duplicate edge detected"));
                assert!(err_str.contains("from 1 to 2"));
            }
            other => panic!("Expected DuplicateEdge error, got {other:?}"),
        }
    }

    #[test]
    fn cycle_detection_error_msg() {
        let mut graph: Graph<u32, &str> = Graph::with_capacity(10);
        graph.route_to(1, 2, "edge_1_2");
        graph.route_to(2, 3, "edge_2_3");
        graph.route_to(3, 1, "edge_3_1");

        match graph.topology_order() {
            Err(TopologyError::CycleDetected(dep_route)) => {
                let nodes = dep_route.nodes().to_vec();
                assert_eq!(nodes.first(), nodes.last(), "cycle must be closed");
                assert_eq!(nodes.len(), 4);

                let err_str = TopologyError::CycleDetected(dep_route).to_string();
                assert!(err_str.contains("Cycle detected"));
                assert!(err_str.contains("->"));
            }
            other => panic!("Expected CycleDetected error, got {other:?}"),
        }
    }

    #[test]
    fn connected_is_transitive() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2, ());
        graph.route_to(2, 3, ());
        graph.route_to(4, 3, ());

        let reached: Vec<u32> = graph.connected(1).copied().collect();
        assert_eq!(reached, vec![2, 3]);

        let reached: Vec<u32> = graph.connected(3).copied().collect();
        assert!(reached.is_empty());
    }

    #[test]
    fn connected_cache_is_invalidated_by_new_routes() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2, ());
        assert_eq!(graph.connected(1).count(), 1);

        graph.route_to(2, 3, ());
        assert_eq!(graph.connected(1).count(), 2);
    }
}
