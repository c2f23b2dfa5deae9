use super::Algorithm;
use super::AlgorithmFailure;
use super::Point;
use super::Solver;
use super::linalg;
use super::linalg::Combinations;
use crate::SUPPORT_TOLERANCE;
use crate::VERTEX_BASIS_LIMIT;
use crate::payoff::Bimatrix;
use crate::payoff::Matrix;
use std::collections::BTreeSet;

/// A half-space `normal . z <= bound`. The constraint's position in its
/// polytope is its label.
struct Constraint {
    normal: Vec<f64>,
    bound: f64,
}

impl Constraint {
    fn slack(&self, z: &[f64]) -> f64 {
        self.bound - linalg::dot(&self.normal, z)
    }
    /// `z_i >= 0`
    fn nonnegative(dim: usize, i: usize) -> Self {
        let mut normal = vec![0.; dim];
        normal[i] = -1.;
        Self { normal, bound: 0. }
    }
    /// a payoff row bounded by one
    fn payoff(row: Vec<f64>) -> Self {
        Self {
            normal: row,
            bound: 1.,
        }
    }
}

/// a vertex of a best-response polytope with its labels.
#[derive(Debug, Clone)]
struct Vertex {
    z: Vec<f64>,
    labels: BTreeSet<usize>,
}

/// Best-response polytope over one player's (unnormalized) mixtures.
struct Polytope {
    dim: usize,
    constraints: Vec<Constraint>,
}

impl Polytope {
    /// `P = {x >= 0 : B^T x <= 1}`; label `i` is `x_i = 0`,
    /// label `m + j` is column `j` being a best response.
    fn row(b: &Matrix) -> Self {
        let (m, n) = (b.rows(), b.cols());
        let constraints = (0..m)
            .map(|i| Constraint::nonnegative(m, i))
            .chain((0..n).map(|j| Constraint::payoff(b.col(j).collect())))
            .collect();
        Self { dim: m, constraints }
    }

    /// `Q = {y >= 0 : A y <= 1}`; label `i` is row `i` being a
    /// best response, label `m + j` is `y_j = 0`.
    fn col(a: &Matrix) -> Self {
        let (m, n) = (a.rows(), a.cols());
        let constraints = (0..m)
            .map(|i| Constraint::payoff(a.row(i).to_vec()))
            .chain((0..n).map(|j| Constraint::nonnegative(n, j)))
            .collect();
        Self { dim: n, constraints }
    }

    /// intersect every `dim`-subset of constraints as equalities and
    /// keep the feasible, distinct, nonzero intersection points.
    fn vertices(&self) -> Result<Vec<Vertex>, AlgorithmFailure> {
        let size = linalg::binomial(self.constraints.len(), self.dim);
        if size > VERTEX_BASIS_LIMIT {
            return Err(AlgorithmFailure::Exhausted {
                size,
                limit: VERTEX_BASIS_LIMIT,
            });
        }
        let mut vertices = Vec::<Vertex>::new();
        for basis in Combinations::new(self.constraints.len(), self.dim) {
            let Some(z) = self.intersect(&basis) else {
                continue;
            };
            if z.iter().all(|v| v.abs() <= SUPPORT_TOLERANCE) {
                continue;
            }
            if self.constraints.iter().any(|c| c.slack(&z) < -SUPPORT_TOLERANCE) {
                continue;
            }
            if vertices.iter().any(|v| Self::coincide(&v.z, &z)) {
                continue;
            }
            let labels = self.labels(&z);
            vertices.push(Vertex { z, labels });
        }
        Ok(vertices)
    }

    fn intersect(&self, basis: &[usize]) -> Option<Vec<f64>> {
        let a = basis
            .iter()
            .map(|&c| self.constraints[c].normal.clone())
            .collect();
        let b = basis.iter().map(|&c| self.constraints[c].bound).collect();
        linalg::solve(a, b)
    }

    fn labels(&self, z: &[f64]) -> BTreeSet<usize> {
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, c)| c.slack(z).abs() <= SUPPORT_TOLERANCE)
            .map(|(label, _)| label)
            .collect()
    }

    fn coincide(u: &[f64], v: &[f64]) -> bool {
        u.iter().zip(v).all(|(a, b)| (a - b).abs() <= SUPPORT_TOLERANCE)
    }
}

/// Vertex enumeration.
///
/// Every equilibrium corresponds to a pair of nonzero vertices, one from
/// each best-response polytope, whose labels jointly cover every action.
pub struct VertexEnumeration;

impl Solver for VertexEnumeration {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Vertex
    }
    fn solve(&self, bimatrix: &Bimatrix) -> Result<Vec<Point>, AlgorithmFailure> {
        let (m, n) = bimatrix.shape();
        let p = Polytope::row(&bimatrix.b().positive()).vertices()?;
        let q = Polytope::col(&bimatrix.a().positive()).vertices()?;
        log::trace!("vertex enumeration: {} x {} vertices", p.len(), q.len());
        let points = p
            .iter()
            .flat_map(|x| q.iter().map(move |y| (x, y)))
            .filter(|(x, y)| x.labels.union(&y.labels).count() == m + n)
            .filter_map(|(x, y)| Point::normalized(x.z.clone(), y.z.clone()))
            .collect();
        Ok(points)
    }
}
