use chain::TransactionInput;

/// Midstate convention required by a transaction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SighashVariant {
	/// Double-hashed aggregates. Required as soon as one input spends the null outpoint.
	Legacy,
	/// Single-hashed aggregates.
	Modern,
}

/// Picks the midstate variant for the given inputs.
///
/// A single coinbase-style input is enough to select `Legacy`, whatever the other inputs are.
pub fn classify(inputs: &[TransactionInput]) -> SighashVariant {
	if inputs.iter().any(|input| input.previous_output.is_null()) {
		SighashVariant::Legacy
	} else {
		SighashVariant::Modern
	}
}

#[cfg(test)]
mod tests {
	use chain::test_helpers::TransactionBuilder;
	use chain::Transaction;
	use super::{SighashVariant, classify};

	#[test]
	fn test_classify_no_inputs() {
		assert_eq!(classify(&[]), SighashVariant::Modern);
	}

	#[test]
	fn test_classify_regular_inputs() {
		let t: Transaction = TransactionBuilder::with_version(1)
			.add_input(1u8.into(), 0, 0xffffffff)
			.add_input(2u8.into(), 1, 0xfffffffe)
			.into();
		assert_eq!(classify(&t.inputs), SighashVariant::Modern);
	}

	#[test]
	fn test_classify_coinbase_input() {
		let t: Transaction = TransactionBuilder::with_version(1)
			.add_coinbase_input()
			.into();
		assert_eq!(classify(&t.inputs), SighashVariant::Legacy);
	}

	#[test]
	fn test_classify_mixed_inputs() {
		let t: Transaction = TransactionBuilder::with_version(1)
			.add_input(1u8.into(), 0, 0xffffffff)
			.add_input(2u8.into(), 1, 0xffffffff)
			.add_coinbase_input()
			.add_input(3u8.into(), 2, 0xffffffff)
			.into();
		assert_eq!(classify(&t.inputs), SighashVariant::Legacy);
	}

	#[test]
	fn test_classify_requires_both_sentinel_fields() {
		// zero hash alone or max index alone is an ordinary outpoint
		let t: Transaction = TransactionBuilder::with_version(1)
			.add_input(Default::default(), 0, 0xffffffff)
			.add_input(7u8.into(), u32::max_value(), 0xffffffff)
			.into();
		assert_eq!(classify(&t.inputs), SighashVariant::Modern);
	}
}
