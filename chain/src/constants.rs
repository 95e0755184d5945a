/// Setting nSequence to this value for every input in a transaction
/// disables nLockTime.
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Number of zatoshis in single coin
pub const SATOSHIS_IN_COIN: u64 = 100_000_000;
