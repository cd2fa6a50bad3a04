//! Weighted random operator selection.
//!
//! Pure functions over an eligibility snapshot: no hidden state, the random
//! draw is an explicit input, so unit tests can pin exact outcomes. Callers
//! must treat the snapshot as advisory; the capacity invariant is enforced
//! at assignment time by a conditional atomic increment in storage.

use rand::Rng;

use crate::domain::foundation::OperatorId;
use crate::domain::operator::Operator;

/// One operator configured for a source, paired with its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub operator: Operator,
    pub weight: i32,
}

impl Candidate {
    pub fn new(operator: Operator, weight: i32) -> Self {
        Self { operator, weight }
    }
}

/// Filters a snapshot down to operators that are active and below capacity.
///
/// Preserves input order; the cumulative walk in [`pick_weighted`] relies on
/// a stable order for deterministic tests.
pub fn eligible_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| c.operator.is_eligible())
        .collect()
}

/// Cumulative-weight walk over an eligible set.
///
/// `draw` must lie in `[0, total_weight)`. Returns the first candidate whose
/// cumulative weight strictly exceeds the draw, so candidate *i* owns the
/// half-open interval `[cum_{i-1}, cum_i)` and is chosen with probability
/// `weight_i / total`. Zero-weight candidates own an empty interval and are
/// never picked here. The last candidate is the fallback against floating
/// point rounding at the upper edge.
pub fn pick_weighted(eligible: &[Candidate], draw: f64) -> Option<&Candidate> {
    if eligible.is_empty() {
        return None;
    }

    let mut cumulative = 0.0;
    for candidate in eligible {
        cumulative += f64::from(candidate.weight);
        if draw < cumulative {
            return Some(candidate);
        }
    }

    eligible.last()
}

/// Selects an operator from a source snapshot.
///
/// Filters to eligible operators, then draws uniformly in
/// `[0, total_weight)`. A degenerate all-zero-weight configuration falls
/// back to a uniform choice among the eligible rather than failing.
/// Returns `None` when nothing is configured or nothing is eligible.
pub fn select_operator<R: Rng + ?Sized>(
    candidates: Vec<Candidate>,
    rng: &mut R,
) -> Option<OperatorId> {
    let eligible = eligible_candidates(candidates);
    if eligible.is_empty() {
        return None;
    }

    let total: i64 = eligible.iter().map(|c| i64::from(c.weight)).sum();
    if total == 0 {
        let index = rng.gen_range(0..eligible.len());
        return Some(eligible[index].operator.id());
    }

    let draw = rng.gen_range(0.0..total as f64);
    pick_weighted(&eligible, draw).map(|c| c.operator.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn operator(id: i64, is_active: bool, max_load: i32, current_load: i32) -> Operator {
        let now = Timestamp::now();
        Operator::reconstitute(
            OperatorId::new(id),
            format!("op-{}", id),
            is_active,
            max_load,
            current_load,
            now,
            now,
        )
    }

    fn candidate(id: i64, weight: i32) -> Candidate {
        Candidate::new(operator(id, true, 100, 0), weight)
    }

    #[test]
    fn empty_set_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_operator(vec![], &mut rng), None);
    }

    #[test]
    fn filters_inactive_and_overloaded() {
        let candidates = vec![
            Candidate::new(operator(1, false, 10, 0), 50),
            Candidate::new(operator(2, true, 10, 10), 50),
            Candidate::new(operator(3, true, 10, 9), 50),
        ];
        let eligible = eligible_candidates(candidates);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].operator.id(), OperatorId::new(3));
    }

    #[test]
    fn deterministic_draws_hit_interval_boundaries() {
        // Weights 10 and 30: intervals [0,10) and [10,40).
        let eligible = vec![candidate(1, 10), candidate(2, 30)];

        assert_eq!(
            pick_weighted(&eligible, 0.0).unwrap().operator.id(),
            OperatorId::new(1)
        );
        assert_eq!(
            pick_weighted(&eligible, 9.999).unwrap().operator.id(),
            OperatorId::new(1)
        );
        assert_eq!(
            pick_weighted(&eligible, 10.0).unwrap().operator.id(),
            OperatorId::new(2)
        );
        assert_eq!(
            pick_weighted(&eligible, 39.999).unwrap().operator.id(),
            OperatorId::new(2)
        );
    }

    #[test]
    fn upper_edge_falls_back_to_last_candidate() {
        let eligible = vec![candidate(1, 10), candidate(2, 30)];
        // A rounding artifact could produce exactly total_weight.
        assert_eq!(
            pick_weighted(&eligible, 40.0).unwrap().operator.id(),
            OperatorId::new(2)
        );
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let candidates = vec![candidate(1, 0), candidate(2, 0), candidate(3, 0)];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let picked = select_operator(candidates.clone(), &mut rng).unwrap();
            seen.insert(picked.as_i64());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn proportions_converge_to_weight_ratio() {
        // Weights 10 and 30 over 1000 draws: count ratio should sit near
        // 1:3, within sampling error.
        let candidates = vec![candidate(1, 10), candidate(2, 30)];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<i64, u32> = HashMap::new();

        for _ in 0..1000 {
            let picked = select_operator(candidates.clone(), &mut rng).unwrap();
            *counts.entry(picked.as_i64()).or_default() += 1;
        }

        let ratio = f64::from(counts[&1]) / f64::from(counts[&2]);
        assert!((0.25..0.40).contains(&ratio), "ratio was {}", ratio);
    }

    #[test]
    fn excluding_a_candidate_redistributes_its_share() {
        // With operator 2 at capacity, operator 1 takes the full share even
        // with the maximum weight configured on operator 2.
        let candidates = vec![
            candidate(1, 10),
            Candidate::new(operator(2, true, 5, 5), 100),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(
                select_operator(candidates.clone(), &mut rng),
                Some(OperatorId::new(1))
            );
        }
    }

    proptest! {
        #[test]
        fn never_selects_an_operator_at_capacity(
            weights in proptest::collection::vec((1i32..=100, 0i32..=1), 1..10),
            seed in any::<u64>(),
        ) {
            // Operators with marker 1 sit at capacity; they must never win.
            let candidates: Vec<Candidate> = weights
                .iter()
                .enumerate()
                .map(|(i, (weight, at_capacity))| {
                    let load = if *at_capacity == 1 { 5 } else { 0 };
                    Candidate::new(operator(i as i64, true, 5, load), *weight)
                })
                .collect();

            let at_capacity: Vec<i64> = candidates
                .iter()
                .filter(|c| c.operator.current_load() >= c.operator.max_load())
                .map(|c| c.operator.id().as_i64())
                .collect();

            let mut rng = StdRng::seed_from_u64(seed);
            match select_operator(candidates, &mut rng) {
                Some(id) => prop_assert!(!at_capacity.contains(&id.as_i64())),
                None => prop_assert_eq!(at_capacity.len(), weights.len()),
            }
        }

        #[test]
        fn draw_inside_range_always_picks_someone(
            weights in proptest::collection::vec(1i32..=100, 1..10),
            fraction in 0.0f64..1.0,
        ) {
            let eligible: Vec<Candidate> = weights
                .iter()
                .enumerate()
                .map(|(i, w)| candidate(i as i64, *w))
                .collect();
            let total: i64 = weights.iter().map(|w| i64::from(*w)).sum();
            let draw = fraction * total as f64;

            prop_assert!(pick_weighted(&eligible, draw).is_some());
        }
    }
}
