//! Base62 encoding of sequential link IDs.
//!
//! Codes are the shortest base62 rendering of the counter value, so the
//! first link is `1`, the 62nd is `10` and so on. The alphabet puts digits
//! first, then lowercase, then uppercase letters.

const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes a non-negative integer as a base62 string.
///
/// # Examples
///
/// ```
/// use kv_shortener::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(11);
    while n > 0 {
        buf.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    buf.reverse();

    // Only ASCII bytes from ALPHABET are pushed.
    buf.into_iter().map(char::from).collect()
}

/// Decodes a base62 string back to its integer value.
///
/// Returns `None` for empty input, characters outside the alphabet, or
/// values that overflow `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u64, |acc, b| {
        let digit = digit_value(b)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

fn digit_value(b: u8) -> Option<u64> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u64),
        b'a'..=b'z' => Some((b - b'a') as u64 + 10),
        b'A'..=b'Z' => Some((b - b'A') as u64 + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_small_values() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(1), "1");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
    }

    #[test]
    fn test_encode_rolls_over_to_two_chars() {
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62 - 1), "ZZ");
        assert_eq!(encode(62 * 62), "100");
    }

    #[test]
    fn test_encode_max_fits_route_pattern() {
        let code = encode(u64::MAX);
        assert_eq!(code.len(), 11);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_decode_inverts_encode() {
        for n in [1u64, 61, 62, 3843, 3844, 1_000_000, u64::MAX] {
            assert_eq!(decode(&encode(n)), Some(n), "value {n}");
        }
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("ab-c"), None);
        assert_eq!(decode("ZZZZZZZZZZZZ"), None);
    }

    #[test]
    fn test_encoding_preserves_order_within_same_length() {
        let a = encode(100);
        let b = encode(101);
        assert_eq!(a.len(), b.len());
        assert!(decode(&a) < decode(&b));
    }
}
