use super::*;
use rand::prelude::*;

/// Uniform generator, every digit independently drawn from `0..=9`.
#[derive(Clone, Debug)]
pub struct RandomPatternGenerator {
    rng: SmallRng,
}

impl RandomPatternGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl PatternGenerator for RandomPatternGenerator {
    fn generate(&mut self, len: usize) -> SecretPattern {
        let digits = (0..len)
            .map(|_| self.rng.random_range(0..=MAX_DIGIT))
            .collect();
        let secret = SecretPattern { digits };
        log::debug!("Generated secret pattern: {}", secret);
        secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length_of_digits() {
        let mut generator = RandomPatternGenerator::new(7);

        for len in [1, 3, 8] {
            let secret = generator.generate(len);
            assert_eq!(secret.len(), len);
            assert!(secret.digits().iter().all(|&digit| digit <= MAX_DIGIT));
        }
    }

    #[test]
    fn same_seed_generates_same_sequence() {
        let mut a = RandomPatternGenerator::new(42);
        let mut b = RandomPatternGenerator::new(42);

        for _ in 0..10 {
            assert_eq!(a.generate(3), b.generate(3));
        }
    }
}
