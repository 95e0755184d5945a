//! Zcash transparent transaction.
//! https://zips.z.cash/protocol/protocol.pdf#txnencodingandconsensus

use std::io;
use hex::FromHex;
use bytes::Bytes;
use ser::{deserialize, serialize};
use crypto::dhash256;
use hash::H256;
use constants::SEQUENCE_FINAL;
use ser::{Error, Serializable, Deserializable, Stream, Reader, CompactInteger};

/// Original bitcoin transaction version.
pub const BTC_TX_VERSION: i32 = 1;
/// Sprout-era transaction version wit JS.
pub const SPROUT_TX_VERSION: i32 = 2;
/// Overwinter-era transaction version.
pub const OVERWINTER_TX_VERSION: i32 = 3;
/// Sapling-era transaction version.
pub const SAPLING_TX_VERSION: i32 = 4;

/// Overwinter version group id.
pub const OVERWINTER_TX_VERSION_GROUP_ID: u32 = 0x03C48270;
/// Sapling version group id.
pub const SAPLING_TX_VERSION_GROUP_ID: u32 = 0x892F2085;

const OVERWINTERED_FLAG: u32 = 0x80000000;

/// Reference to an output of a previous transaction.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct OutPoint {
	pub hash: H256,
	pub index: u32,
}

impl OutPoint {
	/// The sentinel outpoint carried by coinbase-style inputs.
	pub fn null() -> Self {
		OutPoint {
			hash: H256::default(),
			index: u32::max_value(),
		}
	}

	pub fn is_null(&self) -> bool {
		self.hash.is_zero() && self.index == u32::max_value()
	}
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct TransactionInput {
	pub previous_output: OutPoint,
	pub script_sig: Bytes,
	pub sequence: u32,
}

impl TransactionInput {
	pub fn coinbase(script_sig: Bytes) -> Self {
		TransactionInput {
			previous_output: OutPoint::null(),
			script_sig: script_sig,
			sequence: SEQUENCE_FINAL,
		}
	}

	pub fn is_final(&self) -> bool {
		self.sequence == SEQUENCE_FINAL
	}
}

#[derive(Debug, PartialEq, Clone)]
pub struct TransactionOutput {
	pub value: u64,
	pub script_pubkey: Bytes,
}

/// Transaction with transparent inputs and outputs only.
///
/// Shielded components are not modelled: the JoinSplit and Sapling
/// lists are always encoded empty and rejected by the decoder when present.
///
/// Encoding follows the header fields and does not validate them, so only
/// transactions the decoder accepts survive a round trip.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct Transaction {
	/// Overwintered transactions must carry version 3 with the Overwinter
	/// group id or version 4 with the Sapling group id. Any other combination
	/// still encodes, but the decoder rejects the result with `InvalidFormat`.
	pub overwintered: bool,
	pub version: i32,
	/// Only encoded for overwintered transactions.
	pub version_group_id: u32,
	pub inputs: Vec<TransactionInput>,
	pub outputs: Vec<TransactionOutput>,
	pub lock_time: u32,
	pub expiry_height: u32,
	/// Sapling value balance. Only encoded for Sapling transactions; any
	/// other transaction drops it on encode and decodes it back as zero.
	pub value_balance: i64,
}

/// Parses a hex literal. Panics on malformed input; use `deserialize` for untrusted data.
impl From<&'static str> for Transaction {
	fn from(s: &'static str) -> Self {
		let bytes: Vec<u8> = s.from_hex().unwrap_or_else(|_| panic!("invalid transaction hex literal"));
		deserialize(&bytes as &[u8]).unwrap_or_else(|err| panic!("invalid transaction literal: {:?}", err))
	}
}

impl Transaction {
	/// Returns version as it is serialized (including overwintered flag).
	pub fn serialized_version(&self) -> u32 {
		let mut version = self.version as u32;
		if self.overwintered {
			version = version | OVERWINTERED_FLAG;
		}
		version
	}

	pub fn hash(&self) -> H256 {
		transaction_hash(self)
	}

	/// True if any input spends the sentinel outpoint.
	pub fn is_null(&self) -> bool {
		self.inputs.iter().any(|input| input.previous_output.is_null())
	}

	pub fn is_coinbase(&self) -> bool {
		self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
	}

	pub fn is_sapling(&self) -> bool {
		self.overwintered && self.version == SAPLING_TX_VERSION && self.version_group_id == SAPLING_TX_VERSION_GROUP_ID
	}
}

impl Serializable for OutPoint {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.hash)
			.append(&self.index);
	}

	fn serialized_size(&self) -> usize {
		36
	}
}

impl Deserializable for OutPoint {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		Ok(OutPoint {
			hash: reader.read()?,
			index: reader.read()?,
		})
	}
}

impl Serializable for TransactionInput {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.previous_output)
			.append(&self.script_sig)
			.append(&self.sequence);
	}
}

impl Deserializable for TransactionInput {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		Ok(TransactionInput {
			previous_output: reader.read()?,
			script_sig: reader.read()?,
			sequence: reader.read()?,
		})
	}
}

impl Serializable for TransactionOutput {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.value)
			.append(&self.script_pubkey);
	}

	fn serialized_size(&self) -> usize {
		8 + self.script_pubkey.serialized_size()
	}
}

impl Deserializable for TransactionOutput {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		Ok(TransactionOutput {
			value: reader.read()?,
			script_pubkey: reader.read()?,
		})
	}
}

impl Serializable for Transaction {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&self.serialized_version());
		if self.overwintered {
			stream.append(&self.version_group_id);
		}

		stream.append_list(&self.inputs)
			.append_list(&self.outputs)
			.append(&self.lock_time);

		if self.overwintered {
			stream.append(&self.expiry_height);
		}

		if self.is_sapling() {
			// value balance, no spends, no outputs
			stream.append(&self.value_balance)
				.append(&CompactInteger::from(0u8))
				.append(&CompactInteger::from(0u8));
		}

		if self.version >= SPROUT_TX_VERSION {
			// no joinsplits
			stream.append(&CompactInteger::from(0u8));
		}
	}
}

impl Deserializable for Transaction {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		// original bitcoin tx format:
		// version (1), inputs, outputs, lock_time
		//
		// sprout format:
		// version (2), inputs, outputs, lock_time, joint split
		//
		// overwinter format (ZIP 202):
		// overwintered, version (3), version group, inputs, outputs, lock_time, expiry height, joint split
		//
		// sapling format (ZIP 243):
		// overwintered, version (4), version group, inputs, outputs, lock_time, expiry height,
		// value balance, spends, outputs, joint split, binding sig

		let version: u32 = reader.read()?;
		let overwintered = (version & OVERWINTERED_FLAG) != 0;
		let version = (version & !OVERWINTERED_FLAG) as i32;

		let version_group_id = if overwintered {
			reader.read()?
		} else {
			0
		};

		// reject overwintered transactions of unknown versions
		let is_overwinter_tx = overwintered && version == OVERWINTER_TX_VERSION && version_group_id == OVERWINTER_TX_VERSION_GROUP_ID;
		let is_sapling_tx = overwintered && version == SAPLING_TX_VERSION && version_group_id == SAPLING_TX_VERSION_GROUP_ID;
		if overwintered && !is_overwinter_tx && !is_sapling_tx {
			return Err(Error::InvalidFormat(format!("Invalid overwinter transaction version: {}, version group: {}",
				version, version_group_id)));
		}

		let inputs: Vec<TransactionInput> = reader.read_list()?;
		let outputs = reader.read_list()?;
		let lock_time = reader.read()?;

		let expiry_height = if overwintered {
			reader.read()?
		} else {
			0
		};

		let value_balance = if is_sapling_tx {
			let value_balance = reader.read()?;
			expect_no_shielded_data(reader, "Sapling spends")?;
			expect_no_shielded_data(reader, "Sapling outputs")?;
			value_balance
		} else {
			0
		};

		if version >= SPROUT_TX_VERSION {
			expect_no_shielded_data(reader, "JoinSplit descriptions")?;
		}

		Ok(Transaction {
			overwintered,
			version,
			version_group_id,
			inputs,
			outputs,
			lock_time,
			expiry_height,
			value_balance,
		})
	}
}

fn expect_no_shielded_data<T>(reader: &mut Reader<T>, what: &str) -> Result<(), Error> where T: io::Read {
	let count: u64 = reader.read::<CompactInteger>()?.into();
	if count != 0 {
		return Err(Error::InvalidFormat(format!("Unsupported shielded data: {} {}", count, what)));
	}
	Ok(())
}

pub(crate) fn transaction_hash(transaction: &Transaction) -> H256 {
	dhash256(&serialize(transaction))
}
