//! Fractional order keys for tasks and lists.
//!
//! Order keys are base-62 strings compared lexicographically, so an item can
//! be inserted between any two neighbors without renumbering siblings. The
//! alphabet is `0-9 A-Z a-z`, whose ASCII order matches its digit order, so
//! plain string comparison is the only comparison ever needed.
//!
//! Generated keys never end in the zero digit; a key with a trailing `0`
//! would have no room below it for the suffix-extension step.

use std::cmp::Ordering;

use crate::error::CoreError;

const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE: usize = DIGITS.len();

fn digit_index(c: u8) -> Option<usize> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as usize),
        b'A'..=b'Z' => Some((c - b'A') as usize + 10),
        b'a'..=b'z' => Some((c - b'a') as usize + 36),
        _ => None,
    }
}

/// Validate a caller-supplied order key.
///
/// Keys must be non-empty, drawn from the base-62 alphabet, and must not end
/// in `0`.
pub fn validate_key(key: &str) -> Result<(), CoreError> {
    if key.is_empty() {
        return Err(CoreError::Validation("Order key must not be empty".into()));
    }
    if let Some(c) = key.bytes().find(|c| digit_index(*c).is_none()) {
        return Err(CoreError::Validation(format!(
            "Order key contains invalid character {:?}",
            c as char
        )));
    }
    if key.ends_with('0') {
        return Err(CoreError::Validation(
            "Order key must not end in the zero digit".into(),
        ));
    }
    Ok(())
}

/// Generate a key strictly between `a` and `b` under lexicographic ordering.
///
/// `None` for `a` means "before everything"; `None` for `b` means "after
/// everything". Both `None` yields an initial key in the middle of the
/// space. Bounds must satisfy `a < b`.
pub fn key_between(a: Option<&str>, b: Option<&str>) -> Result<String, CoreError> {
    if let Some(a) = a {
        validate_key(a)?;
    }
    if let Some(b) = b {
        validate_key(b)?;
    }
    if let (Some(a), Some(b)) = (a, b) {
        if a >= b {
            return Err(CoreError::Validation(format!(
                "Order key bounds out of order: {a:?} >= {b:?}"
            )));
        }
    }
    Ok(midpoint(a.unwrap_or(""), b))
}

/// Core midpoint step. `a` may be empty (lowest bound); `b == None` means no
/// upper bound. Requires `a < b` when `b` is present.
fn midpoint(a: &str, b: Option<&str>) -> String {
    if let Some(b) = b {
        // Strip the longest common prefix, treating `a` as padded with zero
        // digits. The prefix is carried into the result unchanged.
        let mut n = 0;
        let ab = a.as_bytes();
        let bb = b.as_bytes();
        while n < bb.len() && ab.get(n).copied().unwrap_or(b'0') == bb[n] {
            n += 1;
        }
        if n > 0 {
            let a_rest = if n < a.len() { &a[n..] } else { "" };
            return format!("{}{}", &b[..n], midpoint(a_rest, Some(&b[n..])));
        }
    }

    // First digits differ (or are absent).
    let digit_a = a
        .bytes()
        .next()
        .and_then(digit_index)
        .unwrap_or(0);
    let digit_b = b
        .and_then(|b| b.bytes().next())
        .and_then(digit_index)
        .unwrap_or(BASE);

    if digit_b - digit_a > 1 {
        let mid = (digit_a + digit_b) / 2;
        return (DIGITS[mid] as char).to_string();
    }

    // Consecutive leading digits: no room at this position.
    match b {
        // The upper bound has more digits, so its first digit alone already
        // sits strictly between the bounds.
        Some(b) if b.len() > 1 => b[..1].to_string(),
        // Otherwise keep `a`'s digit and extend below the (now unbounded)
        // remainder of `a`.
        _ => {
            let a_rest = if a.is_empty() { "" } else { &a[1..] };
            format!("{}{}", DIGITS[digit_a] as char, midpoint(a_rest, None))
        }
    }
}

/// Generate `n` ordered keys strictly between `a` and `b` in one pass.
///
/// Used by batch moves and batch clones so every new key is computed before
/// any row is written.
pub fn n_keys_between(
    a: Option<&str>,
    b: Option<&str>,
    n: usize,
) -> Result<Vec<String>, CoreError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    if b.is_none() {
        // Append: chain upward from `a`.
        let mut out = Vec::with_capacity(n);
        let mut prev = a.map(str::to_string);
        for _ in 0..n {
            let key = key_between(prev.as_deref(), None)?;
            prev = Some(key.clone());
            out.push(key);
        }
        return Ok(out);
    }
    if a.is_none() {
        // Prepend: chain downward from `b`, then restore order.
        let mut out = Vec::with_capacity(n);
        let mut next = b.map(str::to_string);
        for _ in 0..n {
            let key = key_between(None, next.as_deref())?;
            next = Some(key.clone());
            out.push(key);
        }
        out.reverse();
        return Ok(out);
    }
    // Bounded gap: bisect so key lengths stay balanced.
    let mid_idx = n / 2;
    let mid = key_between(a, b)?;
    let mut out = n_keys_between(a, Some(&mid), mid_idx)?;
    out.push(mid.clone());
    let upper = n_keys_between(Some(&mid), b, n - mid_idx - 1)?;
    out.extend(upper);
    Ok(out)
}

/// Total order over (order key, id) pairs.
///
/// Keys compare lexicographically; items without a key sort after keyed
/// items; equal (or equally absent) keys fall back to the stable entity id,
/// so ordering is total even if a data race ever produced duplicate keys.
pub fn cmp_keys(a_key: Option<&str>, a_id: &str, b_key: Option<&str>, b_id: &str) -> Ordering {
    match (a_key, b_key) {
        (Some(a), Some(b)) => a.cmp(b).then_with(|| a_id.cmp(b_id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_id.cmp(b_id),
    }
}
