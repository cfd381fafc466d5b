//! Contact id generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{ID_ALPHABET, ID_LENGTH};
use crate::contact::ContactId;

/// Random id source for new contacts
///
/// Produces `ID_LENGTH` symbols from the URL-safe `ID_ALPHABET`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: Pcg32,
}

impl IdGenerator {
    /// Deterministic generator (tests, reproducible sessions)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn next_id(&mut self) -> ContactId {
        let id: String = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect();
        ContactId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let mut ids = IdGenerator::new(7);
        let id = ids.next_id();
        assert_eq!(id.as_str().len(), ID_LENGTH);
        assert!(id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_same_seed_same_ids() {
        let mut a = IdGenerator::new(12345);
        let mut b = IdGenerator::new(12345);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_ids_distinct() {
        let mut ids = IdGenerator::new(1);
        let seen: HashSet<_> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }
}
