//! Per-attribute comparator functions.
//!
//! Every comparator is total: an absent value on either side short-circuits
//! to 0 before any string operation runs. Empty strings are not normalized
//! here; that responsibility, if wanted, belongs to the data loader's caller.

/// Score two optional name tokens (first name or surname).
///
/// Case-insensitive equality earns `full`. A single-character token that is
/// a case-sensitive prefix of the other side earns `partial`, checked in
/// both directions.
#[inline]
pub fn name_score(a: Option<&str>, b: Option<&str>, full: i32, partial: i32) -> i32 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0,
    };

    if a.to_lowercase() == b.to_lowercase() {
        full
    } else if is_single_char(a) && b.starts_with(a) {
        partial
    } else if is_single_char(b) && a.starts_with(b) {
        partial
    } else {
        0
    }
}

/// Score two optional email addresses.
///
/// Case-insensitive equality earns `full`. Otherwise the segments before the
/// first `'@'` are compared byte for byte; equal non-empty local parts earn
/// `partial` (same mailbox name, different or missing domain).
#[inline]
pub fn email_score(e1: Option<&str>, e2: Option<&str>, full: i32, partial: i32) -> i32 {
    let (e1, e2) = match (e1, e2) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0,
    };

    if e1.to_lowercase() == e2.to_lowercase() {
        return full;
    }

    let local1 = e1.split('@').next().unwrap_or("");
    let local2 = e2.split('@').next().unwrap_or("");
    if !local1.is_empty() && local1 == local2 {
        partial
    } else {
        0
    }
}

/// Score two optional postal codes. Exact (case-sensitive) equality only.
#[inline]
pub fn zip_score(z1: Option<&str>, z2: Option<&str>, weight: i32) -> i32 {
    match (z1, z2) {
        (Some(a), Some(b)) if a == b => weight,
        _ => 0,
    }
}

/// Score two optional street addresses.
///
/// Case-insensitive equality earns `full`; one address containing the other
/// as a case-sensitive substring earns `partial`. Two present addresses that
/// agree on neither always incur `penalty`: a dissimilar address actively
/// lowers confidence even when names or emails agree.
///
/// Note the substring check is case-sensitive while the equality check is
/// not.
#[inline]
pub fn address_score(a1: Option<&str>, a2: Option<&str>, full: i32, partial: i32, penalty: i32) -> i32 {
    let (a1, a2) = match (a1, a2) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0,
    };

    if a1.to_lowercase() == a2.to_lowercase() {
        full
    } else if a1.contains(a2) || a2.contains(a1) {
        partial
    } else {
        penalty
    }
}

/// One Unicode scalar, not one byte.
fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}
