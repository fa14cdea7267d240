use std::collections::HashMap;

use crate::{
    graph::GraphStore,
    path::PathResult,
    tracing_support::{info_span, trace},
};

/// Dijkstra's algorithm with a linear scan for the next vertex.
///
/// The scan walks vertices in insertion order and keeps the first strict
/// minimum, so ties go to the earlier vertex.  The search stops as soon as
/// `end` is selected, or when no unvisited vertex has a finite distance.
pub(crate) fn shortest_path(graph: &GraphStore, start: &str, end: &str) -> PathResult {
    let _span = info_span!("shortest_path", start, end).entered();

    let (Some(start_index), Some(end_index)) = (graph.vertex_index(start), graph.vertex_index(end))
    else {
        return PathResult::unreachable();
    };

    let labels: Vec<&str> = graph.vertex_labels().collect();
    let index_of: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| (*label, index))
        .collect();

    let mut distances = vec![f64::INFINITY; labels.len()];
    let mut predecessors: Vec<Option<usize>> = vec![None; labels.len()];
    let mut visited = vec![false; labels.len()];
    distances[start_index] = 0.0;

    loop {
        // Find unvisited vertex with minimum finite distance
        let mut current: Option<usize> = None;
        for (index, &distance) in distances.iter().enumerate() {
            if visited[index] || !distance.is_finite() {
                continue;
            }
            if current.is_none_or(|best| distance < distances[best]) {
                current = Some(index);
            }
        }

        let Some(current) = current else {
            break; // No more reachable vertices
        };
        if current == end_index {
            break;
        }
        visited[current] = true;

        // Update distances to neighbors
        for (neighbor, weight) in graph.traversable_from(labels[current]) {
            let Some(&neighbor) = index_of.get(neighbor) else {
                continue;
            };
            let candidate = distances[current] + weight;
            if candidate < distances[neighbor] {
                trace!(from = labels[current], to = labels[neighbor], candidate, "relaxed");
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(current);
            }
        }
    }

    if !distances[end_index].is_finite() {
        return PathResult::unreachable();
    }

    // Build path from predecessors.  The walk is bounded by the vertex count
    // so a predecessor cycle cannot hang it.
    let mut path = vec![end_index];
    let mut current = end_index;
    while current != start_index && path.len() <= labels.len() {
        let Some(previous) = predecessors[current] else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    if current != start_index {
        return PathResult::unreachable();
    }

    path.reverse();
    PathResult::new(
        distances[end_index],
        path.into_iter().map(|index| labels[index].to_string()).collect(),
    )
}
