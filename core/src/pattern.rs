use smallvec::SmallVec;

use crate::*;

/// One comma-separated element of a search pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternTerm {
    Digit(Digit),
    /// Anything that is not a whole number in `0..=9`, never equal to a slot.
    Never,
}

impl PatternTerm {
    /// Reads a token the way a numeric form field converts text to a number.
    ///
    /// Surrounding whitespace is ignored and a blank token reads as 0,
    /// so `"1,,2"` looks for 1, 0, 2.
    /// `"2.0"` and `"2e0"` are both the digit 2. Anything else can never match.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            return Self::Digit(0);
        }
        match token.parse::<f64>() {
            Ok(value) if is_digit_value(value) => Self::Digit(value as Digit),
            _ => Self::Never,
        }
    }

    pub const fn matches(self, slot: Slot) -> bool {
        match (self, slot) {
            (Self::Digit(expected), Slot::Digit(actual)) => expected == actual,
            _ => false,
        }
    }
}

fn is_digit_value(value: f64) -> bool {
    (0.0..=f64::from(MAX_DIGIT)).contains(&value) && f64::from(value as Digit) == value
}

/// Parsed search input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    terms: SmallVec<[PatternTerm; 8]>,
}

impl Pattern {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GameError::EmptyPattern);
        }
        Ok(Self {
            terms: text.split(',').map(PatternTerm::parse).collect(),
        })
    }

    pub fn terms(&self) -> &[PatternTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether this is exactly the secret, term for term.
    pub fn is_secret(&self, secret: &SecretPattern) -> bool {
        self.len() == secret.len()
            && self
                .terms
                .iter()
                .zip(secret.digits())
                .all(|(&term, &digit)| term == PatternTerm::Digit(digit))
    }

    /// Lowest offset where every term equals the slot under it.
    pub fn find_in(&self, slots: &[Slot]) -> Option<MatchWindow> {
        let len = self.len();
        if len == 0 || len > slots.len() {
            return None;
        }

        let start = slots.windows(len).position(|window| {
            window
                .iter()
                .zip(&self.terms)
                .all(|(&slot, term)| term.matches(slot))
        })?;
        log::trace!("Pattern {:?} matched at {}", self.terms, start);
        Some(MatchWindow::new(start, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[Option<Digit>]) -> alloc::vec::Vec<Slot> {
        values.iter().copied().map(Slot::from).collect()
    }

    #[test]
    fn tokens_parse_like_numeric_fields() {
        assert_eq!(PatternTerm::parse("3"), PatternTerm::Digit(3));
        assert_eq!(PatternTerm::parse(" 7 "), PatternTerm::Digit(7));
        assert_eq!(PatternTerm::parse("2.0"), PatternTerm::Digit(2));
        assert_eq!(PatternTerm::parse("0"), PatternTerm::Digit(0));
        assert_eq!(PatternTerm::parse("abc"), PatternTerm::Never);
        assert_eq!(PatternTerm::parse(""), PatternTerm::Digit(0));
        assert_eq!(PatternTerm::parse("  "), PatternTerm::Digit(0));
        assert_eq!(PatternTerm::parse("2.5"), PatternTerm::Never);
        assert_eq!(PatternTerm::parse("12"), PatternTerm::Never);
        assert_eq!(PatternTerm::parse("-1"), PatternTerm::Never);
        assert_eq!(PatternTerm::parse("NaN"), PatternTerm::Never);
    }

    #[test]
    fn blank_token_matches_zero() {
        let slots = slots(&[Some(1), Some(0), Some(2), None, None, None, None, None]);

        assert_eq!(
            Pattern::parse("1,,2").unwrap().find_in(&slots),
            Some(MatchWindow::new(0, 3))
        );
        assert_eq!(Pattern::parse("1,,2").unwrap().find_in(&[Slot::Empty; 8]), None);
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(Pattern::parse(""), Err(GameError::EmptyPattern));
        assert_eq!(Pattern::parse("   "), Err(GameError::EmptyPattern));
    }

    #[test]
    fn lowest_overlapping_match_wins() {
        let slots = slots(&[Some(1), Some(2), Some(1), Some(2), None, None, None, None]);
        let pattern = Pattern::parse("1,2").unwrap();

        assert_eq!(pattern.find_in(&slots), Some(MatchWindow::new(0, 2)));
    }

    #[test]
    fn match_is_exact_and_contiguous() {
        let slots = slots(&[Some(1), Some(9), Some(2), Some(3), None, None, None, None]);

        assert_eq!(
            Pattern::parse("2,3").unwrap().find_in(&slots),
            Some(MatchWindow::new(2, 2))
        );
        assert_eq!(Pattern::parse("1,2").unwrap().find_in(&slots), None);
    }

    #[test]
    fn invalid_tokens_never_match_empty_slots() {
        let slots = [Slot::Empty; 8];

        assert_eq!(Pattern::parse("x").unwrap().find_in(&slots), None);
        assert_eq!(Pattern::parse("1,,2").unwrap().find_in(&slots), None);
        assert_eq!(Pattern::parse("0").unwrap().find_in(&slots), None);
    }

    #[test]
    fn pattern_longer_than_slots_never_matches() {
        let slots = [Slot::Digit(1); 8];
        let pattern = Pattern::parse("1,1,1,1,1,1,1,1,1").unwrap();

        assert_eq!(pattern.len(), 9);
        assert_eq!(pattern.find_in(&slots), None);
        assert_eq!(
            Pattern::parse("1,1,1,1,1,1,1,1").unwrap().find_in(&slots),
            Some(MatchWindow::new(0, 8))
        );
    }

    #[test]
    fn secret_comparison_is_term_for_term() {
        let secret = SecretPattern::new(&[4, 0, 7]).unwrap();

        assert!(Pattern::parse("4, 0, 7").unwrap().is_secret(&secret));
        assert!(!Pattern::parse("4,0").unwrap().is_secret(&secret));
        assert!(!Pattern::parse("4,0,7,1").unwrap().is_secret(&secret));
        assert!(!Pattern::parse("4,x,7").unwrap().is_secret(&secret));
    }
}
