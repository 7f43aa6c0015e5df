//! # huffcode
//!
//! Static Huffman coding of a symbol stream.  The encoded form is a logical
//! stream of `'0'`/`'1'` characters, bit packing is left to the caller.
//!
//! ```
//! let input: Vec<char> = "I am Sam. Sam I am.".chars().collect();
//! let enc = huffcode::huffman::compress(&input,&huffcode::STD_OPTIONS).expect("encoding failed");
//! let dec = huffcode::huffman::decode(&enc.stream,&enc.table).expect("decoding failed");
//! assert_eq!(input,dec);
//! ```

pub mod tools;
pub mod huffman;
pub mod report;

type DYNERR = Box<dyn std::error::Error>;

/// Coding Errors
#[derive(thiserror::Error,Debug,PartialEq)]
pub enum Error {
    #[error("no symbols to process")]
    EmptyInput,
    #[error("input has {0} symbols, which exceeds the limit")]
    InputTooLarge(usize),
    #[error("symbol {0} has no code")]
    LookupMiss(String),
    #[error("stream ended at bit {position} with unmatched bits {pending}")]
    DecodeExhaustion {
        position: usize,
        pending: String
    },
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit {
        position: usize,
        found: char
    },
    #[error("removal past the end of the sorted list")]
    UnderflowViolation,
    #[error("decoded stream does not match the input")]
    RoundTripMismatch
}

/// Options controlling the coding pipeline
#[derive(Clone)]
pub struct Options {
    /// decode the stream after encoding and compare with the input
    pub verify: bool,
    /// return error if the input has more symbols than this
    pub max_symbols: usize
}

pub const STD_OPTIONS: Options = Options {
    verify: true,
    max_symbols: u32::MAX as usize/4
};
