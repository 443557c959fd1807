//! Lenient handling of the positional count arguments.

use std::str::FromStr;

/// Parses the leading positive integer of `raw`, falling back to `default`.
///
/// Only the leading digits after an optional sign are read, so `"12abc"`
/// gives 12 and `"1.5"` gives 1. Missing values, text without leading
/// digits, non-positive numbers and overflow all yield the default.
pub fn parse_count<T>(raw: Option<&str>, default: T) -> T
where
    T: FromStr + PartialOrd + Default,
{
    raw.and_then(leading_integer)
        .and_then(|digits| digits.parse::<T>().ok())
        .filter(|n| *n > T::default())
        .unwrap_or(default)
}

/// Returns the leading unsigned digits of a non-negative integer prefix.
fn leading_integer(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let unsigned = match trimmed.as_bytes().first() {
        Some(b'-') => return None,
        Some(b'+') => &trimmed[1..],
        _ => trimmed,
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    (end > 0).then(|| &unsigned[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_counts() {
        assert_eq!(parse_count::<u64>(Some("1000"), 500), 1000);
        assert_eq!(parse_count::<usize>(Some(" 10 "), 50), 10);
        assert_eq!(parse_count::<u64>(Some("+7"), 500), 7);
    }

    #[test]
    fn test_leading_integer_prefix() {
        let cases = vec![("12abc", 12), ("1.5", 1), ("  300 requests", 300), ("8e3", 8)];

        for (raw, expected) in cases {
            assert_eq!(parse_count::<u64>(Some(raw), 500), expected, "Failed for {raw:?}");
            assert_eq!(parse_count::<usize>(Some(raw), 50), expected as usize, "Failed for {raw:?}");
        }
    }

    #[test]
    fn test_missing_uses_default() {
        assert_eq!(parse_count::<u64>(None, 500), 500);
        assert_eq!(parse_count::<usize>(None, 50), 50);
    }

    #[test]
    fn test_garbage_uses_default() {
        let cases = vec![
            "abc",
            "",
            "   ",
            "+",
            "-",
            "-5",
            "-12abc",
            "0",
            "00",
            "0.9",
            ".5",
            "abc12",
            "99999999999999999999999",
        ];

        for raw in cases {
            assert_eq!(parse_count::<u64>(Some(raw), 500), 500, "Failed for {raw:?}");
            assert_eq!(parse_count::<usize>(Some(raw), 50), 50, "Failed for {raw:?}");
        }
    }
}
