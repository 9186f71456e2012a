//! Winter's spigot for the decimal digits of π.
//!
//! Every outer pass walks the remainder table from the current cursor down to
//! index 1, leaving the new remainders in place, and yields one group of four
//! digits. The cursor drops by [`TERMS_PER_GROUP`] per pass, so the table is
//! consumed as it goes and a generator can only be run once.

use crate::error::SpigotError;
use spigot_params::specs::arith::{BASE, DIGITS_PER_GROUP, SEED, TERMS_PER_GROUP};
use std::fmt;
use tracing::{debug, trace};

/// Number of 4-digit groups emitted for `digit_count` digits
pub fn group_count(digit_count: usize) -> Result<usize, SpigotError> {
    if digit_count == 0 {
        return Err(SpigotError::InvalidArgument { requested: 0 });
    }
    Ok(digit_count.div_ceil(DIGITS_PER_GROUP))
}

/// Remainder table length for `digit_count` digits
///
/// One pass consumes [`TERMS_PER_GROUP`] series terms and yields one group,
/// so the cursor starts at `TERMS_PER_GROUP * group_count` and the table
/// needs one more slot for index 0. For the reference 800 digits this is
/// 14 * 200 + 1 = 2801.
pub fn table_len(digit_count: usize) -> Result<usize, SpigotError> {
    let overflow = SpigotError::ArithmeticOverflow { digit_count };
    let len = group_count(digit_count)?
        .checked_mul(TERMS_PER_GROUP)
        .and_then(|terms| terms.checked_add(1))
        .ok_or_else(|| overflow.clone())?;

    // Entries are remainders of 2i - 1 and must fit u32. That also bounds the
    // u64 accumulator by 2 * BASE * 2^32.
    let max_divisor = u64::try_from(len)
        .ok()
        .and_then(|len| len.checked_mul(2))
        .ok_or_else(|| overflow.clone())?;
    if max_divisor > u64::from(u32::MAX) {
        return Err(overflow);
    }

    Ok(len)
}

/// One emitted group of (normally) four decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup(u64);

impl DigitGroup {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw group value, `carry + d / BASE`
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DigitGroup {
    // `%.4d`: zero-padded to four, wider values printed in full
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Allocate `len` table entries, all set to [`SEED`]
fn seeded_table(len: usize) -> Result<Vec<u32>, SpigotError> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| SpigotError::TableAllocation { entries: len })?;
    table.resize(len, SEED);
    Ok(table)
}

/// Lazy, single-pass stream of π digit groups
#[derive(Debug)]
pub struct PiDigits {
    table: Vec<u32>,
    cursor: usize,
    carry: u64,
}

impl PiDigits {
    /// Allocate and seed the remainder table for `digit_count` digits
    pub fn new(digit_count: usize) -> Result<Self, SpigotError> {
        let len = table_len(digit_count)?;
        debug!(
            "Remainder table: {} entries for {} digits ({} groups)",
            len,
            digit_count,
            (len - 1) / TERMS_PER_GROUP
        );

        Ok(Self {
            table: seeded_table(len)?,
            cursor: len - 1,
            carry: 0,
        })
    }

    /// Length of the remainder table
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Groups still to be emitted
    pub fn remaining(&self) -> usize {
        self.cursor / TERMS_PER_GROUP
    }

    /// Run the inner loop for the current cursor and return the final `d`
    fn pass(&mut self) -> u64 {
        let mut d: u64 = 0;
        let mut i = self.cursor;
        loop {
            d += u64::from(self.table[i]) * BASE;
            let b = 2 * i as u64 - 1;
            // b <= 2 * table_len, checked to fit u32 in table_len()
            self.table[i] = (d % b) as u32;
            d /= b;
            if i == 1 {
                break;
            }
            i -= 1;
            d *= i as u64;
        }
        d
    }
}

impl Iterator for PiDigits {
    type Item = DigitGroup;

    fn next(&mut self) -> Option<DigitGroup> {
        if self.cursor == 0 {
            return None;
        }

        let d = self.pass();
        let group = DigitGroup(self.carry + d / BASE);
        self.carry = d % BASE;
        trace!("k={} group={}", self.cursor, group);

        self.cursor -= TERMS_PER_GROUP;
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PiDigits {}

/// Generate `digit_count` digits and concatenate the groups
pub fn pi_digits(digit_count: usize) -> Result<String, SpigotError> {
    let digits = PiDigits::new(digit_count)?;
    Ok(digits.map(|group| group.to_string()).collect())
}
