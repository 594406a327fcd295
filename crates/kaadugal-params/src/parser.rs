//! Line tokenizer and value parsing for the `key: value` parameter format.

/// How a line is split into key/value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Every `:`-delimited token alternates between key and value, so
    /// `a: 1: b: 2` yields the pairs `(a, 1)` and `(b, 2)`.
    #[default]
    Toggle,
    /// Only the first `:` separates key from value; the value keeps any
    /// further colons.
    FirstColon,
}

/// How numeric values are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberParsing {
    /// Use the longest numeric prefix and fall back to zero, like C `atoi`/`atof`.
    #[default]
    Lenient,
    /// The whole value (ignoring surrounding whitespace) must be a finite number.
    Strict,
}

fn trim_leading_blanks(token: &str) -> &str {
    token.trim_start_matches([' ', '\t'])
}

/// Split one non-comment line into `(key, value)` pairs.
///
/// Keys and values are left-trimmed of spaces and tabs. A key without a
/// following value is dropped, as is the empty token after a trailing `:`.
pub fn split_pairs(line: &str, mode: SplitMode) -> Vec<(&str, &str)> {
    match mode {
        SplitMode::Toggle => {
            let mut tokens: Vec<&str> = line.split(':').collect();
            if line.ends_with(':') {
                tokens.pop();
            }
            tokens
                .chunks_exact(2)
                .map(|pair| (trim_leading_blanks(pair[0]), trim_leading_blanks(pair[1])))
                .collect()
        }
        SplitMode::FirstColon => match line.split_once(':') {
            Some((_, "")) | None => Vec::new(),
            Some((key, value)) => vec![(trim_leading_blanks(key), trim_leading_blanks(value))],
        },
    }
}

/// Parse an integer value.
///
/// Returns `None` only in [`NumberParsing::Strict`] mode.
pub fn parse_int(value: &str, mode: NumberParsing) -> Option<i32> {
    match mode {
        NumberParsing::Lenient => Some(lenient_int(value)),
        NumberParsing::Strict => value.trim().parse().ok(),
    }
}

/// Parse a floating-point value.
///
/// Returns `None` only in [`NumberParsing::Strict`] mode.
pub fn parse_float(value: &str, mode: NumberParsing) -> Option<f64> {
    match mode {
        NumberParsing::Lenient => Some(lenient_float(value)),
        NumberParsing::Strict => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite()),
    }
}

fn lenient_int(value: &str) -> i32 {
    let bytes = value.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    // Accumulate as negative so i32::MIN is reachable; saturate on overflow.
    let mut acc: i32 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i32::from(b - b'0');
        acc = match acc.checked_mul(10).and_then(|a| a.checked_sub(digit)) {
            Some(next) => next,
            None => return if negative { i32::MIN } else { i32::MAX },
        };
    }

    if negative {
        acc
    } else {
        acc.checked_neg().unwrap_or(i32::MAX)
    }
}

fn lenient_float(value: &str) -> f64 {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let rest = &s[end..];
    for word in ["infinity", "inf", "nan"] {
        if rest
            .get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
        {
            return s[..end + word.len()].parse().unwrap_or(0.0);
        }
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_splits_single_pair() {
        assert_eq!(
            split_pairs("NumTrees: 10", SplitMode::Toggle),
            vec![("NumTrees", "10")]
        );
    }

    #[test]
    fn toggle_trims_only_leading_blanks() {
        assert_eq!(
            split_pairs(" \tMinGain:\t 0.5 ", SplitMode::Toggle),
            vec![("MinGain", "0.5 ")]
        );
    }

    #[test]
    fn toggle_alternates_on_extra_colons() {
        assert_eq!(
            split_pairs("NumTrees: 10: MaxTreeLevels: 4", SplitMode::Toggle),
            vec![("NumTrees", "10"), ("MaxTreeLevels", "4")]
        );
        // An odd token count leaves a dangling key with no value.
        assert_eq!(
            split_pairs("Path: C: data", SplitMode::Toggle),
            vec![("Path", "C")]
        );
    }

    #[test]
    fn toggle_drops_trailing_colon_token() {
        assert!(split_pairs("NumTrees:", SplitMode::Toggle).is_empty());
        assert_eq!(
            split_pairs("NumTrees::", SplitMode::Toggle),
            vec![("NumTrees", "")]
        );
    }

    #[test]
    fn line_without_colon_has_no_pairs() {
        assert!(split_pairs("NumTrees 10", SplitMode::Toggle).is_empty());
        assert!(split_pairs("NumTrees 10", SplitMode::FirstColon).is_empty());
    }

    #[test]
    fn first_colon_keeps_rest_of_line() {
        assert_eq!(
            split_pairs("NumTrees: 10: MaxTreeLevels: 4", SplitMode::FirstColon),
            vec![("NumTrees", "10: MaxTreeLevels: 4")]
        );
        assert!(split_pairs("NumTrees:", SplitMode::FirstColon).is_empty());
    }

    #[test]
    fn lenient_int_uses_numeric_prefix() {
        assert_eq!(parse_int("42", NumberParsing::Lenient), Some(42));
        assert_eq!(parse_int("  -7xyz", NumberParsing::Lenient), Some(-7));
        assert_eq!(parse_int("+3", NumberParsing::Lenient), Some(3));
        assert_eq!(parse_int("12 # trailing", NumberParsing::Lenient), Some(12));
        assert_eq!(parse_int("4.9", NumberParsing::Lenient), Some(4));
    }

    #[test]
    fn lenient_int_defaults_to_zero() {
        assert_eq!(parse_int("", NumberParsing::Lenient), Some(0));
        assert_eq!(parse_int("ten", NumberParsing::Lenient), Some(0));
        assert_eq!(parse_int("-", NumberParsing::Lenient), Some(0));
    }

    #[test]
    fn lenient_int_saturates() {
        assert_eq!(parse_int("99999999999", NumberParsing::Lenient), Some(i32::MAX));
        assert_eq!(parse_int("-99999999999", NumberParsing::Lenient), Some(i32::MIN));
        assert_eq!(parse_int("-2147483648", NumberParsing::Lenient), Some(i32::MIN));
    }

    #[test]
    fn lenient_float_uses_numeric_prefix() {
        assert_eq!(parse_float("0.01", NumberParsing::Lenient), Some(0.01));
        assert_eq!(parse_float(" -1.5e-3abc", NumberParsing::Lenient), Some(-1.5e-3));
        assert_eq!(parse_float(".5", NumberParsing::Lenient), Some(0.5));
        assert_eq!(parse_float("3.", NumberParsing::Lenient), Some(3.0));
        assert_eq!(parse_float("2e", NumberParsing::Lenient), Some(2.0));
        assert_eq!(parse_float("abc", NumberParsing::Lenient), Some(0.0));
        assert_eq!(parse_float(".", NumberParsing::Lenient), Some(0.0));
    }

    #[test]
    fn lenient_float_accepts_special_words() {
        let inf = parse_float("INF", NumberParsing::Lenient).unwrap();
        assert!(inf.is_infinite() && inf > 0.0);
        assert!(parse_float("nan", NumberParsing::Lenient).unwrap().is_nan());
    }

    #[test]
    fn strict_rejects_garbage() {
        assert_eq!(parse_int(" 8 ", NumberParsing::Strict), Some(8));
        assert_eq!(parse_int("8x", NumberParsing::Strict), None);
        assert_eq!(parse_int("", NumberParsing::Strict), None);
        assert_eq!(parse_float("0.25", NumberParsing::Strict), Some(0.25));
        assert_eq!(parse_float("0.25.1", NumberParsing::Strict), None);
        assert_eq!(parse_float("inf", NumberParsing::Strict), None);
    }
}
