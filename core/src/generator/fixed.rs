use super::*;
use alloc::vec::Vec;

/// Replays a fixed list of patterns in order, wrapping around at the end.
///
/// Each pattern is cut or zero-padded to the requested length.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPatternGenerator {
    patterns: Vec<SecretPattern>,
    next: usize,
}

impl FixedPatternGenerator {
    pub fn new(patterns: Vec<SecretPattern>) -> Self {
        Self { patterns, next: 0 }
    }

    pub fn repeating(pattern: SecretPattern) -> Self {
        Self::new(alloc::vec![pattern])
    }
}

impl PatternGenerator for FixedPatternGenerator {
    fn generate(&mut self, len: usize) -> SecretPattern {
        let Some(source) = self.patterns.get(self.next) else {
            log::warn!("No fixed patterns available, using a blank pattern");
            return SecretPattern::blank(len);
        };
        self.next = (self.next + 1) % self.patterns.len();

        let digits = source
            .digits()
            .iter()
            .copied()
            .chain(core::iter::repeat(0))
            .take(len)
            .collect();
        SecretPattern { digits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn replays_patterns_in_order_and_wraps() {
        let first = SecretPattern::new(&[1, 2, 3]).unwrap();
        let second = SecretPattern::new(&[4, 5, 6]).unwrap();
        let mut generator = FixedPatternGenerator::new(vec![first.clone(), second.clone()]);

        assert_eq!(generator.generate(3), first);
        assert_eq!(generator.generate(3), second);
        assert_eq!(generator.generate(3), first);
    }

    #[test]
    fn adapts_pattern_to_requested_length() {
        let mut generator = FixedPatternGenerator::repeating(SecretPattern::new(&[7, 8]).unwrap());

        assert_eq!(generator.generate(1).digits(), &[7]);
        assert_eq!(generator.generate(4).digits(), &[7, 8, 0, 0]);
    }

    #[test]
    fn empty_list_falls_back_to_blank() {
        let mut generator = FixedPatternGenerator::new(vec![]);

        assert_eq!(generator.generate(3).digits(), &[0, 0, 0]);
    }
}
