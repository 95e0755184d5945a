extern crate sha2;
extern crate primitives;

use sha2::{Digest, Sha256};
use primitives::hash::H256;

/// Incremental double SHA-256 hasher.
#[derive(Default, Clone)]
pub struct DHash256 {
	hasher: Sha256,
}

impl DHash256 {
	pub fn new() -> Self {
		DHash256::default()
	}

	pub fn input(&mut self, d: &[u8]) {
		self.hasher.update(d)
	}

	pub fn finish(self) -> H256 {
		let first = self.hasher.finalize();
		let second = Sha256::digest(&first);
		H256::from(&second[..])
	}
}

/// SHA-256
#[inline]
pub fn sha256(input: &[u8]) -> H256 {
	let result = Sha256::digest(input);
	H256::from(&result[..])
}

/// Double SHA-256
#[inline]
pub fn dhash256(input: &[u8]) -> H256 {
	let mut hasher = DHash256::new();
	hasher.input(input);
	hasher.finish()
}
