//! Builders for transactions used in tests and benchmarks.

use bytes::Bytes;
use hash::H256;
use transaction::{Transaction, TransactionInput, TransactionOutput, OutPoint};

#[derive(Debug, Default, Clone)]
pub struct TransactionBuilder {
	transaction: Transaction,
}

impl TransactionBuilder {
	pub fn with_version(version: i32) -> Self {
		let mut builder = TransactionBuilder::default();
		builder.transaction.version = version;
		builder
	}

	pub fn add_input(mut self, hash: H256, index: u32, sequence: u32) -> Self {
		self.transaction.inputs.push(TransactionInput {
			previous_output: OutPoint {
				hash: hash,
				index: index,
			},
			script_sig: Bytes::default(),
			sequence: sequence,
		});
		self
	}

	pub fn add_coinbase_input(mut self) -> Self {
		self.transaction.inputs.push(TransactionInput::coinbase(Bytes::default()));
		self
	}

	pub fn add_output(mut self, value: u64, script_pubkey: Bytes) -> Self {
		self.transaction.outputs.push(TransactionOutput {
			value: value,
			script_pubkey: script_pubkey,
		});
		self
	}

	pub fn into_transaction(self) -> Transaction {
		self.transaction
	}
}

impl From<TransactionBuilder> for Transaction {
	fn from(builder: TransactionBuilder) -> Self {
		builder.into_transaction()
	}
}
