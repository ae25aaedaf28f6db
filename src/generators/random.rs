use rand::Rng;
use std::collections::HashMap;

use crate::errors::{GeneratorError, GeneratorResult};
use crate::graph::{Attributes, Graph};

fn pair_key(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

fn from_edges(name: String, n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
    let mut graph = Graph::new(&name);
    for node in 0..n {
        graph.add_node(node.to_string(), Attributes::new());
    }
    for (u, v) in edges {
        graph.add_edge(u.to_string(), v.to_string(), Attributes::new());
    }
    graph
}

/// Small-world graph: a ring where every node links to its `k / 2` nearest
/// neighbours on each side, after which each lattice edge `(u, v)` is
/// rewired to `(u, w)` with probability `p`.
pub fn watts_strogatz<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    p: f64,
    rng: &mut R,
) -> GeneratorResult<Graph> {
    if k > n {
        return Err(GeneratorError::InvalidParameters {
            generator: "watts_strogatz",
            reason: format!("k ({}) must not exceed n ({})", k, n),
        });
    }
    let name = format!("watts_strogatz({}, {}, {})", n, k, p);
    if k == n {
        let complete = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
        return Ok(from_edges(name, n, complete));
    }

    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut positions: HashMap<(usize, usize), usize> = HashMap::new();
    let mut degree = vec![0usize; n];

    for j in 1..=k / 2 {
        for u in 0..n {
            let v = (u + j) % n;
            if positions.contains_key(&pair_key(u, v)) {
                continue;
            }
            positions.insert(pair_key(u, v), edges.len());
            edges.push((u, v));
            degree[u] += 1;
            degree[v] += 1;
        }
    }

    for j in 1..=k / 2 {
        for u in 0..n {
            let v = (u + j) % n;
            if rng.gen::<f64>() >= p || degree[u] >= n - 1 {
                continue;
            }
            let Some(pos) = positions.remove(&pair_key(u, v)) else {
                continue;
            };
            let w = loop {
                let w = rng.gen_range(0..n);
                if w != u && w != v && !positions.contains_key(&pair_key(u, w)) {
                    break w;
                }
            };
            edges[pos] = (u, w);
            positions.insert(pair_key(u, w), pos);
            degree[v] -= 1;
            degree[w] += 1;
        }
    }

    Ok(from_edges(name, n, edges))
}

/// Preferential attachment: starting from a star on `m + 1` nodes, every
/// new node attaches to `m` distinct existing nodes picked with probability
/// proportional to their degree.
pub fn barabasi_albert<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    rng: &mut R,
) -> GeneratorResult<Graph> {
    if m < 1 || m >= n {
        return Err(GeneratorError::InvalidParameters {
            generator: "barabasi_albert",
            reason: format!("need 1 <= m < n, got m = {}, n = {}", m, n),
        });
    }

    let mut edges: Vec<(usize, usize)> = (1..=m).map(|leaf| (0, leaf)).collect();
    // Each node appears once per incident edge
    let mut repeated: Vec<usize> = std::iter::repeat(0).take(m).chain(1..=m).collect();

    for source in m + 1..n {
        let mut targets: Vec<usize> = Vec::with_capacity(m);
        while targets.len() < m {
            let candidate = repeated[rng.gen_range(0..repeated.len())];
            if !targets.contains(&candidate) {
                targets.push(candidate);
            }
        }
        edges.extend(targets.iter().map(|&t| (source, t)));
        repeated.extend(targets);
        repeated.extend(std::iter::repeat(source).take(m));
    }

    Ok(from_edges(format!("barabasi_albert({}, {})", n, m), n, edges))
}

/// G(n, p) random graph: every unordered pair is linked independently with
/// probability `p`.
pub fn erdos_renyi<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Graph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen::<f64>() < p {
                edges.push((u, v));
            }
        }
    }
    from_edges(format!("erdos_renyi({}, {})", n, p), n, edges)
}
