//! coder/canonical.rs
//! Canonical prefix-code assignment from a code-length table.
//!
//! Design notes:
//! - Only code lengths travel on the wire; both sides assign the same
//!   codes from them, so no tree or tie-break discipline needs to be
//!   shared between encoder and decoder.
//! - Assignment order is (length, symbol value) ascending: the first
//!   code is all zeros, each next code is the previous plus one,
//!   left-shifted when the length grows.

/// Build the canonical code table. Symbols with length zero are absent
/// and get an empty entry.
pub fn canonical_codes(lengths: &[u8; 256]) -> Vec<Vec<bool>> {
    let mut table = vec![Vec::new(); 256];

    let mut order: Vec<(u8, usize)> = lengths
        .iter()
        .enumerate()
        .filter(|(_, &len)| len > 0)
        .map(|(sym, &len)| (len, sym))
        .collect();
    order.sort_unstable();

    let mut code: Vec<bool> = Vec::new();
    for (len, sym) in order {
        if code.is_empty() {
            code = vec![false; usize::from(len)];
        } else {
            if !increment(&mut code) {
                // The length table over-subscribes the code space
                // (corrupt input); later symbols stay unassigned and
                // the decoder dead-ends on them.
                break;
            }
            code.resize(usize::from(len), false);
        }
        table[sym] = code.clone();
    }
    table
}

/// Binary +1 on a fixed-width code. Returns false on overflow.
fn increment(code: &mut [bool]) -> bool {
    for bit in code.iter_mut().rev() {
        *bit = !*bit;
        if *bit {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(pairs: &[(u8, u8)]) -> [u8; 256] {
        let mut table = [0u8; 256];
        for &(sym, len) in pairs {
            table[sym as usize] = len;
        }
        table
    }

    #[test]
    fn known_answer_assignment() {
        let codes = canonical_codes(&lengths(&[(b'a', 1), (b'b', 2), (b'c', 2)]));
        assert_eq!(codes[b'a' as usize], vec![false]);
        assert_eq!(codes[b'b' as usize], vec![true, false]);
        assert_eq!(codes[b'c' as usize], vec![true, true]);
    }

    #[test]
    fn equal_lengths_assign_in_symbol_order() {
        let codes = canonical_codes(&lengths(&[(b'z', 2), (b'a', 2), (b'm', 2), (b'q', 2)]));
        assert_eq!(codes[b'a' as usize], vec![false, false]);
        assert_eq!(codes[b'm' as usize], vec![false, true]);
        assert_eq!(codes[b'q' as usize], vec![true, false]);
        assert_eq!(codes[b'z' as usize], vec![true, true]);
    }

    #[test]
    fn codes_are_prefix_free() {
        let codes = canonical_codes(&lengths(&[(0, 1), (1, 3), (2, 3), (3, 4), (4, 4)]));
        let assigned: Vec<&Vec<bool>> = codes.iter().filter(|c| !c.is_empty()).collect();
        assert_eq!(assigned.len(), 5);
        for (i, a) in assigned.iter().enumerate() {
            for (j, b) in assigned.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn oversubscribed_lengths_stop_safely() {
        // Three one-bit codes cannot exist; the third symbol must stay
        // unassigned instead of wrapping around.
        let codes = canonical_codes(&lengths(&[(0, 1), (1, 1), (2, 1)]));
        assert_eq!(codes[0], vec![false]);
        assert_eq!(codes[1], vec![true]);
        assert!(codes[2].is_empty());
    }

    #[test]
    fn empty_table_assigns_nothing() {
        let codes = canonical_codes(&[0u8; 256]);
        assert!(codes.iter().all(|c| c.is_empty()));
    }
}
