//! Maximum cardinality bipartite matching
//!
//! Used to pair the subschemas of two combined schemas. Vertices are plain
//! indices on each side; edges carry a payload that is handed back for
//! every matched pair.
//!
//! The algorithm is augmenting-path search (Kuhn): left vertices are tried in
//! index order and each vertex's edges in insertion order, so the result is
//! deterministic for a given edge list. A vertex takes its first free
//! neighbour before any earlier pair is reassigned. When several maximum
//! matchings exist the one found first under that order is returned.

/// An edge from left vertex `source` to right vertex `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub source: usize,
    pub target: usize,
    pub value: T,
}

impl<T> Edge<T> {
    pub fn new(source: usize, target: usize, value: T) -> Self {
        Self {
            source,
            target,
            value,
        }
    }
}

#[derive(Debug)]
pub struct MaximumCardinalityMatch<T> {
    left_size: usize,
    right_size: usize,
    edges: Vec<Edge<T>>,
}

impl<T> MaximumCardinalityMatch<T> {
    /// Edges referring to vertices outside `left_size` x `right_size` are ignored.
    pub fn new(left_size: usize, right_size: usize, edges: Vec<Edge<T>>) -> Self {
        Self {
            left_size,
            right_size,
            edges,
        }
    }

    /// The matched edges, ordered by left vertex
    pub fn matching(self) -> Vec<Edge<T>> {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); self.left_size];
        for (index, edge) in self.edges.iter().enumerate() {
            if edge.source < self.left_size && edge.target < self.right_size {
                adjacency[edge.source].push(index);
            }
        }

        // right vertex -> index of the edge currently matching it
        let mut matched_right: Vec<Option<usize>> = vec![None; self.right_size];
        for left in 0..self.left_size {
            let mut visited = vec![false; self.right_size];
            augment(left, &adjacency, &self.edges, &mut matched_right, &mut visited);
        }

        let mut chosen: Vec<usize> = matched_right.into_iter().flatten().collect();
        chosen.sort_by_key(|&index| self.edges[index].source);

        let mut slots: Vec<Option<Edge<T>>> = self.edges.into_iter().map(Some).collect();
        chosen
            .into_iter()
            .filter_map(|index| slots[index].take())
            .collect()
    }
}

fn augment<T>(
    left: usize,
    adjacency: &[Vec<usize>],
    edges: &[Edge<T>],
    matched_right: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    // An unmatched neighbour ends the search without disturbing earlier pairs
    for &edge_index in &adjacency[left] {
        let right = edges[edge_index].target;
        if !visited[right] && matched_right[right].is_none() {
            visited[right] = true;
            matched_right[right] = Some(edge_index);
            return true;
        }
    }
    for &edge_index in &adjacency[left] {
        let right = edges[edge_index].target;
        if visited[right] {
            continue;
        }
        visited[right] = true;
        let free = match matched_right[right] {
            None => true,
            Some(current) => augment(
                edges[current].source,
                adjacency,
                edges,
                matched_right,
                visited,
            ),
        };
        if free {
            matched_right[right] = Some(edge_index);
            return true;
        }
    }
    false
}
