//! Dimension-agnostic simplex arithmetic.
//!
//! Reflection, expansion and contraction are all the same move: step from the
//! worst vertex through the centroid by a signed multiple of
//! `centroid - worst`. [`displace`] is that move; the named operators only
//! fix the coefficient.

use std::cmp::Ordering;

/// Orders costs ascending, placing NaN after every number.
pub(super) fn compare_costs(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Stable-sorts `vertices` ascending by cost and returns the sorted costs.
///
/// Each vertex is evaluated exactly once. If any evaluation fails the
/// vertices are left in their original order.
pub(super) fn sort_by_cost<E, F>(
    vertices: &mut Vec<Vec<f64>>,
    mut evaluate: F,
) -> Result<Vec<f64>, E>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
{
    let costs = vertices
        .iter()
        .map(|v| evaluate(v.as_slice()))
        .collect::<Result<Vec<f64>, E>>()?;

    let mut ranked: Vec<(Vec<f64>, f64)> = vertices.drain(..).zip(costs).collect();
    ranked.sort_by(|a, b| compare_costs(a.1, b.1));

    let (sorted, costs): (Vec<Vec<f64>>, Vec<f64>) = ranked.into_iter().unzip();
    *vertices = sorted;
    Ok(costs)
}

/// Mean of every vertex except the last (the worst, once sorted).
pub(super) fn centroid(vertices: &[Vec<f64>]) -> Vec<f64> {
    let kept = &vertices[..vertices.len() - 1];
    let count = kept.len() as f64;
    let dim = kept.first().map_or(0, Vec::len);

    (0..dim)
        .map(|j| kept.iter().map(|v| v[j]).sum::<f64>() / count)
        .collect()
}

/// `centroid + coefficient * (centroid - worst)`.
pub(super) fn displace(centroid: &[f64], worst: &[f64], coefficient: f64) -> Vec<f64> {
    centroid
        .iter()
        .zip(worst)
        .map(|(c, w)| c + coefficient * (c - w))
        .collect()
}

pub(super) fn reflect(centroid: &[f64], worst: &[f64], alpha: f64) -> Vec<f64> {
    displace(centroid, worst, alpha)
}

pub(super) fn expand(centroid: &[f64], worst: &[f64], gamma: f64) -> Vec<f64> {
    displace(centroid, worst, gamma)
}

pub(super) fn contract(centroid: &[f64], worst: &[f64], rho: f64) -> Vec<f64> {
    displace(centroid, worst, rho)
}

/// Moves every vertex except the first to `best + sigma * (v - best)`.
pub(super) fn reduce(vertices: &mut [Vec<f64>], sigma: f64) {
    let Some((best, rest)) = vertices.split_first_mut() else {
        return;
    };

    for vertex in rest {
        for (x, b) in vertex.iter_mut().zip(best.iter()) {
            *x = b + sigma * (*x - b);
        }
    }
}
