//! Sighash midstate cache for Zcash transparent transactions.
//!
//! ```
//! extern crate zecsighash;
//!
//! use zecsighash::{Transaction, SighashCache, SighashVariant};
//!
//! fn main() {
//! 	let transaction = Transaction::default();
//! 	let cache = SighashCache::new(&transaction);
//! 	assert_eq!(cache.variant(), SighashVariant::Modern);
//! }
//! ```

pub extern crate bitcrypto as crypto;
pub extern crate chain;
pub extern crate primitives;
pub extern crate serialization as ser;
pub extern crate sighash;

pub use primitives::{hash, bytes};

pub use chain::{Transaction, TransactionInput, TransactionOutput, OutPoint};
pub use ser::{deserialize, serialize, Error};
pub use sighash::{SighashCache, SighashCacheBuilder, SighashVariant, MidstateHashes};

/// Decodes a transaction from its wire encoding and builds its sighash cache.
pub fn sighash_cache_from_bytes(data: &[u8]) -> Result<(Transaction, SighashCache), Error> {
	let transaction: Transaction = deserialize(data)?;
	let cache = SighashCache::new(&transaction);
	Ok((transaction, cache))
}

#[cfg(test)]
mod tests {
	use chain::test_helpers::TransactionBuilder;
	use super::{Transaction, SighashCache, SighashVariant, Error, serialize, sighash_cache_from_bytes};

	#[test]
	fn test_sighash_cache_from_bytes() {
		let t: Transaction = TransactionBuilder::with_version(1)
			.add_coinbase_input()
			.add_output(50, "51".into())
			.into();
		let encoded = serialize(&t);

		let (decoded, cache) = sighash_cache_from_bytes(&encoded).unwrap();
		assert_eq!(decoded, t);
		assert_eq!(cache, SighashCache::new(&t));
		assert_eq!(cache.variant(), SighashVariant::Legacy);
	}

	#[test]
	fn test_sighash_cache_from_truncated_bytes() {
		assert_eq!(sighash_cache_from_bytes(&[1, 0, 0]).unwrap_err(), Error::UnexpectedEnd);
	}

	#[cfg(target_pointer_width = "64")]
	#[test]
	fn test_sighash_cache_from_bytes_with_huge_script_length() {
		let mut data = vec![1, 0, 0, 0, 1];
		data.extend_from_slice(&[0x11; 32]);
		data.extend_from_slice(&[0, 0, 0, 0]);
		data.extend_from_slice(&[0xff; 9]);
		assert_eq!(sighash_cache_from_bytes(&data).unwrap_err(), Error::UnexpectedEnd);
	}

	#[test]
	fn test_sighash_cache_from_bytes_with_huge_input_count() {
		let data = [1, 0, 0, 0, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x22];
		assert_eq!(sighash_cache_from_bytes(&data).unwrap_err(), Error::UnexpectedEnd);
	}
}
