//! Positional matching of censored patterns against candidate domains.
//!
//! Every candidate is compared independently on the rayon thread pool. The
//! candidates are only read, so no synchronization is involved, and indexed
//! collection keeps the results in candidate order.

use rayon::prelude::*;

use crate::censor::CensoredPattern;
use crate::domain::Domain;
use crate::types::{MatchOutcome, MatchReport};

/// Return the candidates consistent with `pattern`, in candidate order.
pub fn match_domains(pattern: &CensoredPattern, candidates: &[Domain]) -> Vec<Domain> {
    candidates
        .par_iter()
        .filter(|domain| domain.matches(pattern))
        .cloned()
        .collect()
}

/// Check every candidate against `pattern` and keep all outcomes.
pub fn report(pattern: &CensoredPattern, candidates: &[Domain]) -> MatchReport {
    let outcomes = candidates
        .par_iter()
        .map(|domain| MatchOutcome {
            domain: domain.clone(),
            matched: domain.matches(pattern),
        })
        .collect();
    MatchReport::new(outcomes)
}
