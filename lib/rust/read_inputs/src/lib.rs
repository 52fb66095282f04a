//! Tools for locating sequencing read files and working out how each one
//! should be handed to an assembler.
//! Major functionality includes:
//! * Inferring the read-pair role of a file (forward, reverse, interleaved or
//!   single) from the conventions used in its file name
//! * Recursively finding every regular file below a query path
//! * Passing forward and reverse files without a mate as single-end reads
#![deny(missing_docs)]
#![deny(rust_2018_idioms, unused)]

pub mod find;
pub mod pairing;
pub mod role;

pub use find::{find_inputs, InputError, InputSpec};
pub use pairing::demote_orphan_mates;
pub use role::ReadRole;
