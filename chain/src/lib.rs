extern crate rustc_hex as hex;
extern crate primitives;
extern crate bitcrypto as crypto;
extern crate serialization as ser;

pub mod constants;

mod transaction;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use primitives::{hash, bytes};

pub use transaction::{BTC_TX_VERSION, SPROUT_TX_VERSION, OVERWINTER_TX_VERSION, SAPLING_TX_VERSION};
pub use transaction::{OVERWINTER_TX_VERSION_GROUP_ID, SAPLING_TX_VERSION_GROUP_ID};
pub use transaction::{Transaction, TransactionInput, TransactionOutput, OutPoint};
