use rand::Rng;

use crate::consts::MAX_SEQUENCE;
use crate::{Gender, SequenceNumber};

/// Even numbers in `2..=998`
const EVEN_COUNT: u16 = MAX_SEQUENCE / 2;
/// Odd numbers in `1..=999`
const ODD_COUNT: u16 = MAX_SEQUENCE / 2 + 1;

impl SequenceNumber {
    /// Draws a uniformly random sequence number in `1..=999` whose parity
    /// matches `gender`: even for [`Gender::Female`], odd for [`Gender::Male`].
    ///
    /// Consumes exactly one draw from `rng`.
    pub fn generate<R: Rng + ?Sized>(gender: Gender, rng: &mut R) -> Self {
        // The stored value is 1 + offset, so odd offsets give even numbers.
        let offset = match gender {
            Gender::Female => 2 * rng.gen_range(0..EVEN_COUNT) + 1,
            Gender::Male => 2 * rng.gen_range(0..ODD_COUNT),
        };
        Self::from_offset(offset)
    }
}
