//! UTF-8 decoding/encoding and the case folding used for keyword lookups.

pub mod case;
pub mod utf8;

pub use case::uppercase;
pub use utf8::{decode_one, decoded_length, encode_one, to_codepoints};
