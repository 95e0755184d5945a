//! BLAKE2b personalizations of the tagged midstate hashes (ZIP 143).
//!
//! Not applied by `SighashCacheBuilder` yet: the modern variant currently stores
//! the untagged single-round aggregates.

pub const PREVOUTS_HASH_PERSONALIZATION: &'static [u8; 16] = b"ZcashPrevoutHash";
pub const SEQUENCE_HASH_PERSONALIZATION: &'static [u8; 16] = b"ZcashSequencHash";
pub const OUTPUTS_HASH_PERSONALIZATION: &'static [u8; 16] = b"ZcashOutputsHash";

#[cfg(test)]
mod tests {
	use super::{PREVOUTS_HASH_PERSONALIZATION, SEQUENCE_HASH_PERSONALIZATION, OUTPUTS_HASH_PERSONALIZATION};

	#[test]
	fn test_personalizations() {
		assert_eq!(PREVOUTS_HASH_PERSONALIZATION, b"ZcashPrevoutHash");
		assert_eq!(SEQUENCE_HASH_PERSONALIZATION, b"ZcashSequencHash");
		assert_eq!(OUTPUTS_HASH_PERSONALIZATION, b"ZcashOutputsHash");
	}
}
