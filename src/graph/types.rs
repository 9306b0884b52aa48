//! The compressed QUBO graph and its query operations.

/// Compressed-sparse-row representation of a QUBO instance.
///
/// Variables are re-indexed to dense `0..n` in ascending order of their raw
/// ids. Each coupling (i, j, w) with i ≠ j is stored twice, once in each
/// endpoint's neighbor list, so evaluating a variable's local field is a
/// single contiguous scan.
///
/// Built once per solve via [`QuboGraph::from_coefficients`]; immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuboGraph {
    /// Distinct raw variable ids, sorted ascending. Position = dense index.
    pub(crate) raw_ids: Vec<i64>,

    /// Accumulated linear bias per variable, length n.
    pub(crate) linear: Vec<f64>,

    /// Start of variable i's neighbor records in the flattened arrays.
    pub(crate) offsets: Vec<usize>,

    /// Number of neighbor records for variable i.
    pub(crate) counts: Vec<usize>,

    /// Dense index of the far endpoint, one entry per neighbor record.
    /// `u32` halves the adjacency footprint versus `usize`.
    pub(crate) neighbor_target: Vec<u32>,

    /// Coupling weight, parallel to `neighbor_target`.
    pub(crate) neighbor_weight: Vec<f64>,
}

impl QuboGraph {
    /// Number of distinct variables.
    pub fn num_vars(&self) -> usize {
        self.raw_ids.len()
    }

    /// Total neighbor records: twice the number of distinct coupling pairs.
    pub fn num_neighbor_slots(&self) -> usize {
        self.neighbor_target.len()
    }

    /// Raw variable ids in dense-index order.
    pub fn raw_ids(&self) -> &[i64] {
        &self.raw_ids
    }

    /// Dense index assigned to a raw variable id, if it appears in the
    /// problem.
    pub fn index_of(&self, raw_id: i64) -> Option<usize> {
        self.raw_ids.binary_search(&raw_id).ok()
    }

    /// Linear bias of variable `i`.
    pub fn linear_bias(&self, i: usize) -> f64 {
        self.linear[i]
    }

    /// Neighbor records of variable `i` as (dense index, weight) pairs.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.offsets[i];
        let end = start + self.counts[i];
        self.neighbor_target[start..end]
            .iter()
            .zip(&self.neighbor_weight[start..end])
            .map(|(&t, &w)| (t as usize, w))
    }

    /// Local field of variable `i` under `state`: its linear bias plus the
    /// weights of all neighbors currently set to 1. This is the energy delta
    /// of flipping `i` from 0 to 1 with everything else held fixed.
    pub fn local_field(&self, i: usize, state: &[u8]) -> f64 {
        let mut field = self.linear[i];
        let start = self.offsets[i];
        for k in 0..self.counts[i] {
            let idx = start + k;
            if state[self.neighbor_target[idx] as usize] == 1 {
                field += self.neighbor_weight[idx];
            }
        }
        field
    }

    /// Total QUBO energy of `state`, counting each coupling once.
    pub fn energy(&self, state: &[u8]) -> f64 {
        debug_assert_eq!(state.len(), self.num_vars());
        let mut energy = 0.0;
        for i in 0..self.num_vars() {
            if state[i] != 1 {
                continue;
            }
            energy += self.linear[i];
            // Each pair is stored at both endpoints; halve the coupling sum.
            for (j, w) in self.neighbors(i) {
                if state[j] == 1 {
                    energy += 0.5 * w;
                }
            }
        }
        energy
    }
}
