//! Aggregate hashes over the repeated transaction fields.
//!
//! Each function concatenates the wire encoding of one field across the whole
//! transaction, in transaction order, and hashes the result once.

use chain::{TransactionInput, TransactionOutput};
use crypto::sha256;
use hash::H256;
use ser::{Serializable, Stream};

/// Hash of all previous outputs (txid:index) referenced by the inputs.
pub fn compute_hash_prevouts(inputs: &[TransactionInput]) -> H256 {
	let mut stream = Stream::with_capacity(inputs.len() * 36);
	for input in inputs {
		stream.append(&input.previous_output);
	}
	sha256(&stream.out())
}

/// Hash of the sequence numbers of all inputs.
pub fn compute_hash_sequence(inputs: &[TransactionInput]) -> H256 {
	let mut stream = Stream::with_capacity(inputs.len() * 4);
	for input in inputs {
		stream.append(&input.sequence);
	}
	sha256(&stream.out())
}

/// Hash of all outputs, each encoded as value followed by the length-prefixed script.
pub fn compute_hash_outputs(outputs: &[TransactionOutput]) -> H256 {
	let size = outputs.iter().map(Serializable::serialized_size).sum();
	let mut stream = Stream::with_capacity(size);
	for output in outputs {
		stream.append(output);
	}
	sha256(&stream.out())
}
