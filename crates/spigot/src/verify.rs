//! Checks generated output against the trusted expansion of π.

use crate::error::SpigotError;
use crate::generator::DigitGroup;
use spigot_params::reference::{PI_DIGITS, PI_DIGITS_LEN};
use tracing::debug;

/// Compare the rendered `groups` with [`PI_DIGITS`] over the digits both cover
///
/// The final group of a spigot run is not trustworthy and is skipped at
/// whatever width it renders to. Digits past the end of the reference are
/// not checked.
pub fn verify(groups: &[DigitGroup]) -> Result<(), SpigotError> {
    let Some((tail, trusted)) = groups.split_last() else {
        return Ok(());
    };
    let output: String = trusted.iter().map(|group| group.to_string()).collect();
    debug!("Skipping final group {}", tail);

    let checked = output.len().min(PI_DIGITS_LEN);
    let mismatch = output
        .chars()
        .zip(PI_DIGITS.chars())
        .enumerate()
        .find(|(_, (actual, expected))| actual != expected);

    if let Some((position, (actual, expected))) = mismatch {
        return Err(SpigotError::AssertionFailure {
            position,
            expected,
            actual,
        });
    }

    debug!("Verified {} digits against reference", checked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::PiDigits;

    fn groups(values: &[u64]) -> Vec<DigitGroup> {
        values.iter().copied().map(DigitGroup::new).collect()
    }

    #[test]
    fn generated_output_verifies() {
        for n in [1, 8, 800, 1000] {
            let generated: Vec<_> = PiDigits::new(n).unwrap().collect();
            verify(&generated).unwrap();
        }
    }

    #[test]
    fn wrong_digit_is_reported() {
        let err = verify(&groups(&[3141, 5936, 5358])).unwrap_err();
        assert_eq!(
            err,
            SpigotError::AssertionFailure {
                position: 6,
                expected: '2',
                actual: '3',
            }
        );
    }

    #[test]
    fn final_group_is_not_checked() {
        verify(&groups(&[3141, 5926, 1])).unwrap();
        verify(&groups(&[9999])).unwrap();
        verify(&[]).unwrap();
    }

    #[test]
    fn wide_final_group_is_skipped_whole() {
        // renders as "3141592610000"; none of "10000" may be compared
        verify(&groups(&[3141, 5926, 10000])).unwrap();
    }
}
