use chain::{Transaction, TransactionInput, TransactionOutput};
use crypto::sha256;
use hash::H256;
use classify::{SighashVariant, classify};
use midstate::{compute_hash_prevouts, compute_hash_sequence, compute_hash_outputs};

/// The three aggregates of one midstate variant.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct MidstateHashes {
	pub hash_prevouts: H256,
	pub hash_sequence: H256,
	pub hash_outputs: H256,
}

impl MidstateHashes {
	fn compute(inputs: &[TransactionInput], outputs: &[TransactionOutput]) -> Self {
		MidstateHashes {
			hash_prevouts: compute_hash_prevouts(inputs),
			hash_sequence: compute_hash_sequence(inputs),
			hash_outputs: compute_hash_outputs(outputs),
		}
	}

	/// One more hash round over every aggregate.
	fn rehash(&self) -> Self {
		MidstateHashes {
			hash_prevouts: sha256(&*self.hash_prevouts),
			hash_sequence: sha256(&*self.hash_sequence),
			hash_outputs: sha256(&*self.hash_outputs),
		}
	}
}

/// Signature portions cache.
///
/// Built once per transaction and reused for the digest of every input.
/// Only the fields of `variant()` are populated, the other variant is zeroed.
#[derive(Debug, PartialEq, Clone)]
pub struct SighashCache {
	variant: SighashVariant,
	legacy: MidstateHashes,
	modern: MidstateHashes,
}

impl SighashCache {
	pub fn new(transaction: &Transaction) -> Self {
		SighashCacheBuilder::new(transaction).build()
	}

	pub fn variant(&self) -> SighashVariant {
		self.variant
	}

	/// Double-hashed aggregates, zero unless the variant is `Legacy`.
	pub fn legacy(&self) -> &MidstateHashes {
		&self.legacy
	}

	/// Single-hashed aggregates, zero unless the variant is `Modern`.
	pub fn modern(&self) -> &MidstateHashes {
		&self.modern
	}
}

pub struct SighashCacheBuilder<'a> {
	inputs: &'a [TransactionInput],
	outputs: &'a [TransactionOutput],
}

impl<'a> SighashCacheBuilder<'a> {
	pub fn new(transaction: &'a Transaction) -> Self {
		SighashCacheBuilder::with_parts(&transaction.inputs, &transaction.outputs)
	}

	/// Builder over inputs and outputs that are not (yet) part of a `Transaction`.
	pub fn with_parts(inputs: &'a [TransactionInput], outputs: &'a [TransactionOutput]) -> Self {
		SighashCacheBuilder {
			inputs: inputs,
			outputs: outputs,
		}
	}

	pub fn build(self) -> SighashCache {
		let variant = classify(self.inputs);
		let base = MidstateHashes::compute(self.inputs, self.outputs);

		let cache = match variant {
			SighashVariant::Legacy => SighashCache {
				variant,
				legacy: base.rehash(),
				modern: MidstateHashes::default(),
			},
			// TODO: apply the ZIP 143 personalized BLAKE2b from `constants` once the modern digest is specified
			SighashVariant::Modern => SighashCache {
				variant,
				legacy: MidstateHashes::default(),
				modern: base,
			},
		};

		trace!(target: "sighash", "Sighash cache for {} inputs, {} outputs: {:?} midstate",
			self.inputs.len(), self.outputs.len(), variant);

		cache
	}
}
