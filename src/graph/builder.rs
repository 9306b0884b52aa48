//! Coefficient-map parsing and CSR construction.

use super::QuboGraph;
use crate::error::Error;
use std::collections::{BTreeSet, HashMap};

/// A parsed coefficient key: a single variable or an unordered pair.
enum Key {
    Linear(i64),
    Coupling(i64, i64),
}

/// Parses `"i"` or `"i,j"` into raw variable ids. An equal pair `"i,i"`
/// collapses to a linear term.
fn parse_key(key: &str) -> Result<Key, Error> {
    let malformed = || Error::MalformedKey {
        key: key.to_string(),
    };
    let mut parts = key.split(',');
    let first: i64 = parts
        .next()
        .and_then(|t| t.trim().parse().ok())
        .ok_or_else(malformed)?;
    match parts.next() {
        None => Ok(Key::Linear(first)),
        Some(second) => {
            let second: i64 = second.trim().parse().map_err(|_| malformed())?;
            if parts.next().is_some() {
                return Err(malformed());
            }
            if first == second {
                Ok(Key::Linear(first))
            } else {
                Ok(Key::Coupling(first, second))
            }
        }
    }
}

impl QuboGraph {
    /// Builds the compact graph from a sparse coefficient map.
    ///
    /// Keys name one variable (linear bias) or two comma-separated variables
    /// (symmetric coupling, recorded in both endpoints' neighbor lists).
    /// Distinct raw ids are assigned dense indices in ascending order, which
    /// makes the index assignment deterministic regardless of map iteration
    /// order.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedKey`] if a key does not parse into one or two
    /// integer ids; [`Error::NonFiniteWeight`] if a weight is NaN or
    /// infinite. The input map is never mutated.
    pub fn from_coefficients(coefficients: &HashMap<String, f64>) -> Result<Self, Error> {
        // First pass: parse every key, validate weights, collect ids.
        let mut ids = BTreeSet::new();
        let mut entries = Vec::with_capacity(coefficients.len());
        for (key, &weight) in coefficients {
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight {
                    key: key.clone(),
                    weight,
                });
            }
            let parsed = parse_key(key)?;
            match parsed {
                Key::Linear(i) => {
                    ids.insert(i);
                }
                Key::Coupling(i, j) => {
                    ids.insert(i);
                    ids.insert(j);
                }
            }
            entries.push((parsed, weight));
        }

        let raw_ids: Vec<i64> = ids.into_iter().collect();
        let n = raw_ids.len();
        let index: HashMap<i64, usize> =
            raw_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        // Second pass: accumulate biases and per-variable neighbor lists.
        let mut linear = vec![0.0; n];
        let mut adjacency: Vec<Vec<(u32, f64)>> = vec![Vec::new(); n];
        let mut total_slots = 0usize;
        for (key, weight) in entries {
            match key {
                Key::Linear(id) => {
                    linear[index[&id]] += weight;
                }
                Key::Coupling(a, b) => {
                    let i = index[&a];
                    let j = index[&b];
                    adjacency[i].push((j as u32, weight));
                    adjacency[j].push((i as u32, weight));
                    total_slots += 2;
                }
            }
        }

        // Flatten into CSR: offsets are the running slot count.
        let mut offsets = vec![0usize; n];
        let mut counts = vec![0usize; n];
        let mut neighbor_target = Vec::with_capacity(total_slots);
        let mut neighbor_weight = Vec::with_capacity(total_slots);
        let mut pos = 0usize;
        for (i, list) in adjacency.iter().enumerate() {
            offsets[i] = pos;
            counts[i] = list.len();
            for &(target, weight) in list {
                neighbor_target.push(target);
                neighbor_weight.push(weight);
                pos += 1;
            }
        }

        log::debug!("built QUBO graph: {n} variables, {total_slots} neighbor slots");

        Ok(Self {
            raw_ids,
            linear,
            offsets,
            counts,
            neighbor_target,
            neighbor_weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn qubo(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|&(k, w)| (k.to_string(), w)).collect()
    }

    #[test]
    fn test_indices_sorted_by_raw_id() {
        let graph = QuboGraph::from_coefficients(&qubo(&[
            ("10", 1.0),
            ("3", 1.0),
            ("7,3", 2.0),
        ]))
        .unwrap();

        assert_eq!(graph.raw_ids(), &[3, 7, 10]);
        assert_eq!(graph.index_of(3), Some(0));
        assert_eq!(graph.index_of(7), Some(1));
        assert_eq!(graph.index_of(10), Some(2));
        assert_eq!(graph.index_of(4), None);
    }

    #[test]
    fn test_linear_bias_accumulates() {
        // "5" and the self-pair "5,5" both contribute to the same bias.
        let graph =
            QuboGraph::from_coefficients(&qubo(&[("5", -1.5), ("5,5", 2.0)])).unwrap();

        assert_eq!(graph.num_vars(), 1);
        assert!((graph.linear_bias(0) - 0.5).abs() < 1e-12);
        assert_eq!(graph.num_neighbor_slots(), 0);
    }

    #[test]
    fn test_coupling_stored_at_both_endpoints() {
        let graph = QuboGraph::from_coefficients(&qubo(&[("1,2", 3.5)])).unwrap();

        assert_eq!(graph.num_neighbor_slots(), 2);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![(1, 3.5)]);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(0, 3.5)]);
    }

    #[test]
    fn test_csr_offsets_partition_slots() {
        let graph = QuboGraph::from_coefficients(&qubo(&[
            ("0,1", 1.0),
            ("0,2", 2.0),
            ("1,2", 3.0),
        ]))
        .unwrap();

        assert_eq!(graph.num_neighbor_slots(), 6);
        let mut seen = 0;
        for i in 0..graph.num_vars() {
            assert_eq!(graph.offsets[i], seen);
            seen += graph.counts[i];
        }
        assert_eq!(seen, 6);
    }

    #[test]
    fn test_malformed_keys_rejected() {
        for key in ["", "a", "1,b", "1,2,3", "1.5", ","] {
            let err = QuboGraph::from_coefficients(&qubo(&[(key, 1.0)])).unwrap_err();
            assert_eq!(
                err,
                Error::MalformedKey {
                    key: key.to_string()
                },
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_whitespace_in_pair_key_tolerated() {
        let graph = QuboGraph::from_coefficients(&qubo(&[("1, 2", 1.0)])).unwrap();
        assert_eq!(graph.raw_ids(), &[1, 2]);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let err = QuboGraph::from_coefficients(&qubo(&[("0", f64::NAN)])).unwrap_err();
        assert!(matches!(err, Error::NonFiniteWeight { .. }));
    }

    #[test]
    fn test_negative_raw_ids_sort_before_positive() {
        let graph =
            QuboGraph::from_coefficients(&qubo(&[("-3", 1.0), ("2,-3", 1.0)])).unwrap();
        assert_eq!(graph.raw_ids(), &[-3, 2]);
    }

    #[test]
    fn test_empty_map_builds_empty_graph() {
        let graph = QuboGraph::from_coefficients(&HashMap::new()).unwrap();
        assert_eq!(graph.num_vars(), 0);
        assert_eq!(graph.num_neighbor_slots(), 0);
    }

    #[test]
    fn test_local_field_hand_built() {
        // 3 variables: bias -1 on var 0, couplings (0,1)=2 and (0,2)=-3.
        let graph = QuboGraph::from_coefficients(&qubo(&[
            ("0", -1.0),
            ("0,1", 2.0),
            ("0,2", -3.0),
        ]))
        .unwrap();

        // state = [_, 1, 0]: field(0) = -1 + 2 = 1
        assert!((graph.local_field(0, &[0, 1, 0]) - 1.0).abs() < 1e-12);
        // state = [_, 1, 1]: field(0) = -1 + 2 - 3 = -2
        assert!((graph.local_field(0, &[0, 1, 1]) + 2.0).abs() < 1e-12);
        // state = [_, 0, 0]: field(0) = bias only
        assert!((graph.local_field(0, &[1, 0, 0]) + 1.0).abs() < 1e-12);
        // field(1) depends only on var 0's value
        assert!((graph.local_field(1, &[1, 0, 0]) - 2.0).abs() < 1e-12);
        assert!((graph.local_field(1, &[0, 0, 1]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_counts_each_coupling_once() {
        let graph = QuboGraph::from_coefficients(&qubo(&[
            ("0", -1.0),
            ("1", -1.0),
            ("0,1", 2.0),
        ]))
        .unwrap();

        assert!((graph.energy(&[0, 0]) - 0.0).abs() < 1e-12);
        assert!((graph.energy(&[1, 0]) + 1.0).abs() < 1e-12);
        assert!((graph.energy(&[0, 1]) + 1.0).abs() < 1e-12);
        // Both set: -1 - 1 + 2 = 0, the coupling penalty applied once.
        assert!((graph.energy(&[1, 1]) - 0.0).abs() < 1e-12);
    }

    // Random coefficient maps over a small id universe.
    fn arb_coefficients() -> impl Strategy<Value = HashMap<String, f64>> {
        let entry = (0i64..20, 0i64..20, -10.0f64..10.0).prop_map(|(i, j, w)| {
            if i == j {
                (i.to_string(), w)
            } else {
                (format!("{i},{j}"), w)
            }
        });
        prop::collection::vec(entry, 0..30).prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_adjacency_is_symmetric(coeffs in arb_coefficients()) {
            let graph = QuboGraph::from_coefficients(&coeffs).unwrap();
            for i in 0..graph.num_vars() {
                for (j, w) in graph.neighbors(i) {
                    prop_assert!(
                        graph.neighbors(j).any(|(t, bw)| t == i && bw == w),
                        "edge ({i}->{j}, {w}) has no mirror"
                    );
                }
            }
        }

        #[test]
        fn prop_slot_count_is_twice_pair_count(coeffs in arb_coefficients()) {
            let graph = QuboGraph::from_coefficients(&coeffs).unwrap();
            let pairs = coeffs
                .keys()
                .filter(|k| k.contains(','))
                .count();
            prop_assert_eq!(graph.num_neighbor_slots(), 2 * pairs);
        }

        #[test]
        fn prop_index_assignment_deterministic(coeffs in arb_coefficients()) {
            let a = QuboGraph::from_coefficients(&coeffs).unwrap();
            // Rebuild from a map populated in a different insertion order.
            let mut reversed: Vec<(String, f64)> =
                coeffs.iter().map(|(k, &w)| (k.clone(), w)).collect();
            reversed.reverse();
            let b = QuboGraph::from_coefficients(&reversed.into_iter().collect()).unwrap();
            prop_assert_eq!(a.raw_ids(), b.raw_ids());
            prop_assert_eq!(a.linear, b.linear);
        }
    }
}
