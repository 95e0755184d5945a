//! Fixed-size hashes and byte buffers shared by every crate of the workspace.

extern crate rustc_hex as hex;

pub mod bytes;
pub mod hash;
