use crate::ResolvedToken;

// Every finite f64 has a terminating decimal expansion within this many digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point rendering that rounds halves away from zero on the exact binary
/// value, so `to_fixed(1.25, 1)` is `"1.3"` where `format!("{:.1}")` gives `"1.2"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Groups thousands with commas: `1234567` -> `"1,234,567"`.
pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Makes whitespace visible for token chips.
pub fn visible_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' => '␣',
            '\n' => '↵',
            '\t' => '→',
            other => other,
        })
        .collect()
}

/// Id array view: `[15496, 220, 995]`.
pub fn format_id_list(tokens: &[ResolvedToken]) -> String {
    let ids: Vec<String> = tokens.iter().map(|t| t.id.to_string()).collect();
    format!("[{}]", ids.join(", "))
}
