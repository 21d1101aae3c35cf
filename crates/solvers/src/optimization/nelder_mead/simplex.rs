use super::{error::InputError, geometry};

/// Positional selector for a vertex of a sorted simplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Index 0, the lowest cost.
    Best,

    /// Index `D - 1`, the highest cost that is not the worst.
    SecondWorst,

    /// Index `D`, the highest cost.
    Worst,
}

/// Costs of the best, second-worst and worst vertices after a sort.
///
/// For a one-dimensional simplex the second-worst vertex is the best one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    /// Cost of the vertex at index 0.
    pub best: f64,

    /// Cost of the vertex at index `D - 1`.
    pub second_worst: f64,

    /// Cost of the vertex at index `D`.
    pub worst: f64,
}

/// The `D + 1` vertices of a `D`-dimensional simplex.
///
/// Construction validates the vertex count, dimensions and finiteness, so a
/// `Simplex` always holds exactly `D + 1` points of dimension `D >= 1`.
///
/// Costs from the most recent sort are kept until a vertex changes, so
/// positional cost queries only answer immediately after a sort.
#[derive(Debug, Clone)]
pub struct Simplex {
    vertices: Vec<Vec<f64>>,
    costs: Option<Vec<f64>>,
}

impl Simplex {
    /// Builds the axis-aligned starting simplex around `x0`.
    ///
    /// Vertex 0 is `x0`; vertex `i` is `x0` with `step` added to coordinate `i - 1`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `x0` is empty or any resulting coordinate
    /// is non-finite.
    pub fn from_point(x0: &[f64], step: f64) -> Result<Self, InputError> {
        if x0.is_empty() {
            return Err(InputError::EmptyPoint);
        }

        let mut vertices = Vec::with_capacity(x0.len() + 1);
        vertices.push(x0.to_vec());
        for axis in 0..x0.len() {
            let mut vertex = x0.to_vec();
            vertex[axis] += step;
            vertices.push(vertex);
        }

        Self::from_vertices(vertices)
    }

    /// Wraps caller-supplied vertices after checking count, dimension and finiteness.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the vertices are empty, not `D + 1` in
    /// number, of mismatched dimension, or contain a non-finite coordinate.
    pub fn from_vertices(vertices: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let dim = match vertices.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(InputError::EmptyPoint),
        };

        if vertices.len() != dim + 1 {
            return Err(InputError::VertexCount {
                expected: dim + 1,
                found: vertices.len(),
            });
        }

        for (vertex, coords) in vertices.iter().enumerate() {
            if coords.len() != dim {
                return Err(InputError::DimensionMismatch {
                    vertex,
                    expected: dim,
                    found: coords.len(),
                });
            }
            if let Some(coordinate) = coords.iter().position(|v| !v.is_finite()) {
                return Err(InputError::NonFinite { vertex, coordinate });
            }
        }

        Ok(Self {
            vertices,
            costs: None,
        })
    }

    /// Returns the dimension `D` of the vertices.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.vertices.len() - 1
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vec<f64>] {
        &self.vertices
    }

    /// The first vertex; the best one if the simplex is sorted.
    #[must_use]
    pub fn best(&self) -> &[f64] {
        &self.vertices[0]
    }

    /// The last vertex; the worst one if the simplex is sorted.
    #[must_use]
    pub fn worst(&self) -> &[f64] {
        &self.vertices[self.dim()]
    }

    /// Sorts vertices ascending by cost and ranks the positional costs.
    ///
    /// The sort is stable, evaluates each vertex once, and orders NaN costs
    /// last.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `evaluate`; the vertex order is
    /// then unchanged.
    pub fn sort<E, F>(&mut self, evaluate: F) -> Result<Ranking, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        let costs = geometry::sort_by_cost(&mut self.vertices, evaluate)?;
        let dim = self.dim();
        let ranking = Ranking {
            best: costs[0],
            second_worst: costs[dim - 1],
            worst: costs[dim],
        };
        self.costs = Some(costs);
        Ok(ranking)
    }

    /// Cost of the vertex at `position`, or `None` if the simplex changed since
    /// it was last sorted.
    #[must_use]
    pub fn vertex_cost(&self, position: Position) -> Option<f64> {
        let costs = self.costs.as_ref()?;
        let index = match position {
            Position::Best => 0,
            Position::SecondWorst => self.dim() - 1,
            Position::Worst => self.dim(),
        };
        Some(costs[index])
    }

    /// Mean of every vertex except the last.
    #[must_use]
    pub fn centroid(&self) -> Vec<f64> {
        geometry::centroid(&self.vertices)
    }

    /// Replaces the last vertex.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DimensionMismatch`] if `vertex` does not have
    /// dimension `D`; the simplex is left unchanged.
    pub fn replace_worst(&mut self, vertex: Vec<f64>) -> Result<(), InputError> {
        let dim = self.dim();
        if vertex.len() != dim {
            return Err(InputError::DimensionMismatch {
                vertex: dim,
                expected: dim,
                found: vertex.len(),
            });
        }

        self.vertices[dim] = vertex;
        self.costs = None;
        Ok(())
    }

    /// Moves every vertex except the first toward it by the factor `sigma`.
    pub fn reduce(&mut self, sigma: f64) {
        geometry::reduce(&mut self.vertices, sigma);
        self.costs = None;
    }
}
