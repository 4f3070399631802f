use crate::*;

/// Leading integer of `text` after optional whitespace and sign.
/// Trailing garbage is ignored (`"3abc"` is 3, `"2.9"` is 2).
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse an index field, anything that is not a position in `0..slot_count` is out of bounds.
pub fn parse_index(text: &str, slot_count: usize) -> Result<usize> {
    leading_integer(text)
        .and_then(|value| usize::try_from(value).ok())
        .filter(|&index| index < slot_count)
        .ok_or(GameError::IndexOutOfBounds)
}

pub fn parse_digit(text: &str) -> Result<Digit> {
    leading_integer(text)
        .and_then(|value| Digit::try_from(value).ok())
        .filter(|&digit| digit <= MAX_DIGIT)
        .ok_or(GameError::InvalidDigit)
}

/// Index is checked before the value, so a bad index is reported even when the value is also bad.
pub fn insert_command(index: &str, value: &str, slot_count: usize) -> Result<Command> {
    let index = parse_index(index, slot_count)?;
    let value = parse_digit(value)?;
    Ok(Command::Insert { index, value })
}

pub fn delete_command(index: &str, slot_count: usize) -> Result<Command> {
    let index = parse_index(index, slot_count)?;
    Ok(Command::Delete { index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_accepts_integer_prefix() {
        assert_eq!(parse_index("3", 8), Ok(3));
        assert_eq!(parse_index("  5", 8), Ok(5));
        assert_eq!(parse_index("2.9", 8), Ok(2));
        assert_eq!(parse_index("7abc", 8), Ok(7));
        assert_eq!(parse_index("+1", 8), Ok(1));
        assert_eq!(parse_index("-0", 8), Ok(0));
    }

    #[test]
    fn index_rejects_missing_negative_and_large_values() {
        for text in ["", "abc", "-1", "8", "99999999999999999999999", "- 1"] {
            assert_eq!(parse_index(text, 8), Err(GameError::IndexOutOfBounds), "{text:?}");
        }
    }

    #[test]
    fn digit_must_be_in_range() {
        assert_eq!(parse_digit("0"), Ok(0));
        assert_eq!(parse_digit("9"), Ok(9));
        assert_eq!(parse_digit("10"), Err(GameError::InvalidDigit));
        assert_eq!(parse_digit("-3"), Err(GameError::InvalidDigit));
        assert_eq!(parse_digit(""), Err(GameError::InvalidDigit));
        assert_eq!(parse_digit("x"), Err(GameError::InvalidDigit));
    }

    #[test]
    fn insert_reports_index_error_first() {
        assert_eq!(insert_command("9", "x", 8), Err(GameError::IndexOutOfBounds));
        assert_eq!(insert_command("1", "x", 8), Err(GameError::InvalidDigit));
        assert_eq!(
            insert_command("1", "4", 8),
            Ok(Command::Insert { index: 1, value: 4 })
        );
    }

    #[test]
    fn delete_only_needs_an_index() {
        assert_eq!(delete_command("7", 8), Ok(Command::Delete { index: 7 }));
        assert_eq!(delete_command("", 8), Err(GameError::IndexOutOfBounds));
    }
}
