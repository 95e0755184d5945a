use chain::Transaction;
use chain::constants::SATOSHIS_IN_COIN;
use chain::test_helpers::TransactionBuilder;
use primitives::hash::H256;
use sighash::SighashCache;
use super::Benchmark;

fn synthetic_transaction(inputs: usize) -> Transaction {
	let mut builder = TransactionBuilder::with_version(4);
	for i in 0..inputs {
		let mut hash = H256::default();
		hash[..8].copy_from_slice(&(i as u64 + 1).to_le_bytes());
		builder = builder
			.add_input(hash, i as u32, 0xffffffff)
			.add_output(SATOSHIS_IN_COIN, vec![0x51; 25].into());
	}
	builder.into()
}

// Midstate as read by every input's digest; keeps the optimizer from dropping the work.
fn digest_input(cache: &SighashCache) -> u8 {
	let midstate = cache.modern();
	midstate.hash_prevouts[0] ^ midstate.hash_sequence[0] ^ midstate.hash_outputs[0]
}

pub fn cached(benchmark: &mut Benchmark, inputs: usize) {
	let transaction = synthetic_transaction(inputs);
	let mut acc = 0u8;

	benchmark.samples(inputs);
	benchmark.start();
	let cache = SighashCache::new(&transaction);
	for _ in 0..inputs {
		acc ^= digest_input(&cache);
	}
	benchmark.stop();

	trace!(target: "bencher", "cached checksum {}", acc);
}

pub fn rebuilt(benchmark: &mut Benchmark, inputs: usize) {
	let transaction = synthetic_transaction(inputs);
	let mut acc = 0u8;

	benchmark.samples(inputs);
	benchmark.start();
	for _ in 0..inputs {
		acc ^= digest_input(&SighashCache::new(&transaction));
	}
	benchmark.stop();

	trace!(target: "bencher", "rebuilt checksum {}", acc);
}
