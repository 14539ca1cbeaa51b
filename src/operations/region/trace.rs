use std::f64::consts::PI;

use crate::math::{Point2, TOLERANCE};

/// Traces closed loops from directed boundary edges.
///
/// At each vertex the walk takes the first outgoing edge clockwise from the
/// reversed incoming edge, which keeps the filled side on the left and
/// separates loops that only touch at a vertex. Chains that fail to close are
/// discarded.
pub fn trace_loops(points: &[Point2], edges: &[(usize, usize)]) -> Vec<Vec<Point2>> {
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); points.len()];
    for (edge_idx, &(from, _)) in edges.iter().enumerate() {
        outgoing[from].push(edge_idx);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = Vec::new();

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }
        let mut chain = vec![start];
        let mut current = start;
        let closed = loop {
            let Some(next) = pick_next_edge(current, edges, &outgoing, points) else {
                break false;
            };
            if next == start {
                break true;
            }
            if used[next] || chain.contains(&next) {
                break false;
            }
            chain.push(next);
            current = next;
        };

        for &e in &chain {
            used[e] = true;
        }
        if closed && chain.len() >= 3 {
            loops.push(chain.iter().map(|&e| points[edges[e].0]).collect());
        }
    }

    loops
}

/// Picks the successor of `edge` at its end vertex.
fn pick_next_edge(
    edge: usize,
    edges: &[(usize, usize)],
    outgoing: &[Vec<usize>],
    points: &[Point2],
) -> Option<usize> {
    let (from, node) = edges[edge];
    let reverse_angle = angle_of(&points[node], &points[from]);

    let mut best: Option<(usize, f64)> = None;
    for &candidate in &outgoing[node] {
        let target = edges[candidate].1;
        let next_angle = angle_of(&points[node], &points[target]);
        let mut delta = normalize_angle(reverse_angle - next_angle);
        if delta < TOLERANCE {
            delta = 2.0 * PI;
        }
        if best.is_none_or(|(_, bd)| delta < bd) {
            best = Some((candidate, delta));
        }
    }
    best.map(|(idx, _)| idx)
}

fn angle_of(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Normalizes an angle to [0, 2pi).
fn normalize_angle(a: f64) -> f64 {
    let r = a.rem_euclid(2.0 * PI);
    if r >= 2.0 * PI {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn single_square() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
        let loops = trace_loops(&points, &edges);
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
    }

    #[test]
    fn squares_touching_at_corner_stay_apart() {
        let points = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(2.0, 1.0),
            p(2.0, 2.0),
            p(1.0, 2.0),
        ];
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (4, 5), (5, 6), (6, 2)];
        let loops = trace_loops(&points, &edges);
        assert_eq!(loops.len(), 2);
        assert!(loops.iter().all(|l| l.len() == 4));
    }

    #[test]
    fn open_chain_is_discarded() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        let edges = vec![(0, 1), (1, 2)];
        assert!(trace_loops(&points, &edges).is_empty());
    }
}
