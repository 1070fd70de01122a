//! Identifier generation and content hashing.
//!
//! Two identifier strategies back the generated class names: a monotonic
//! time-based counter ([`UidSource`]) and a content hash ([`hash`]).

use std::cell::Cell;

use crate::clock::Clock;

/// Initial state of the times-33 hash.
pub const HASH_SEED: u32 = 5381;

/// Radix used for class-name bodies. Base 36 keeps them compact.
pub const DEFAULT_RADIX: u32 = 36;

/// Daniel J. Bernstein's times-33 string hash.
///
/// Folds UTF-16 code units from the last to the first:
/// `h = h * 33 ^ unit`, seeded with [`HASH_SEED`]. The right-to-left
/// traversal over UTF-16 units is the reference order; keep it for
/// bit-for-bit stable identifiers. `hash("")` is the seed itself.
pub fn hash(text: &str) -> u32 {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut hash = HASH_SEED;
    for unit in units.into_iter().rev() {
        hash = hash.wrapping_mul(33) ^ u32::from(unit);
    }
    hash
}

/// Renders `value` with lowercase digits in the given radix (2..=36).
pub(crate) fn to_radix(mut value: u64, radix: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    debug_assert!((2..=36).contains(&radix));
    let radix = u64::from(radix.clamp(2, 36));

    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    digits.reverse();
    // DIGITS is ASCII.
    String::from_utf8(digits).unwrap_or_default()
}

/// Monotonic time-based identifier source.
///
/// Issues millisecond offsets from a month anchor fixed at construction.
/// Same-millisecond and clock-skew calls increment past the previous value,
/// so the underlying integers are strictly increasing. Values grow without
/// bound over a long-lived process; that is a known limitation, not a defect.
#[derive(Debug)]
pub struct UidSource {
    anchor_ms: i64,
    last: Cell<i64>,
}

impl UidSource {
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            anchor_ms: clock.month_start_ms(),
            last: Cell::new(0),
        }
    }

    /// Next identifier, rendered in `radix`.
    pub fn next(&self, clock: &dyn Clock, radix: u32) -> String {
        let mut elapsed = clock.now_ms() - self.anchor_ms;
        if elapsed <= self.last.get() {
            elapsed = self.last.get() + 1;
        }
        self.last.set(elapsed);
        to_radix(elapsed.max(0) as u64, radix)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::FakeClock;

    #[test]
    fn empty_string_hashes_to_seed() {
        assert_eq!(hash(""), HASH_SEED);
    }

    #[test]
    fn hash_is_deterministic() {
        let text = "&& { background-color: red; }";
        assert_eq!(hash(text), hash(text));
    }

    #[test]
    fn hash_reference_values() {
        // 5381 * 33 ^ 'a'
        assert_eq!(hash("a"), 177_604);
        assert_ne!(hash("ab"), hash("ba"));
    }

    #[test]
    fn radix_rendering() {
        assert_eq!(to_radix(0, 36), "0");
        assert_eq!(to_radix(35, 36), "z");
        assert_eq!(to_radix(36, 36), "10");
        assert_eq!(to_radix(255, 16), "ff");
    }

    #[test]
    fn uids_strictly_increase_with_frozen_clock() {
        let clock = FakeClock::at(5_000);
        let source = UidSource::new(&clock);

        let ids: Vec<String> = (0..4).map(|_| source.next(&clock, 10)).collect();
        assert_eq!(ids, ["5000", "5001", "5002", "5003"]);
    }

    #[test]
    fn uids_survive_clock_skew() {
        let clock = FakeClock::at(5_000);
        let source = UidSource::new(&clock);
        let first = source.next(&clock, 10);

        clock.advance(-2_000);
        let second = source.next(&clock, 10);
        assert_eq!(first, "5000");
        assert_eq!(second, "5001");

        clock.advance(10_000);
        assert_eq!(source.next(&clock, 10), "13000");
    }
}
