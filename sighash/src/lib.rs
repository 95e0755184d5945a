//! Sighash midstate cache.
//!
//! Signing every input of a transaction needs the same three aggregates over
//! the previous outputs, the sequence numbers and the outputs. They are
//! computed once per transaction by `SighashCacheBuilder` and shared, read
//! only, by all per-input digest computations.

#[macro_use]
extern crate log;
extern crate bitcrypto as crypto;
extern crate chain;
extern crate primitives;
extern crate serialization as ser;

pub mod constants;

mod classify;
mod midstate;
mod sighash_cache;

pub use primitives::{hash, bytes};

pub use classify::{SighashVariant, classify};
pub use midstate::{compute_hash_prevouts, compute_hash_sequence, compute_hash_outputs};
pub use sighash_cache::{SighashCache, SighashCacheBuilder, MidstateHashes};
