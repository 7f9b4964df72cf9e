//! # nary-huffman
//!
//! Builds N-ary Huffman trees from a symbol -> weight mapping and derives a prefix codeword for
//! every symbol.
//!
//! ```rust
//! use nary_huffman::build;
//!
//! let tree = build([('a', 5u32), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)], 3)?;
//! for (symbol, code) in tree.codewords() {
//!     println!("{symbol}: {code}");
//! }
//! # Ok::<(), nary_huffman::HuffmanError>(())
//! ```

pub mod codeword;
pub mod error;
pub mod huffman;
pub mod node;
pub mod queue;

#[cfg(test)]
mod proptests;

pub use codeword::{CodeTable, Codeword, Codewords, codewords};
pub use error::HuffmanError;
pub use huffman::{HuffmanTree, build, padding_needed};
pub use node::{Node, Weight};
pub use queue::MergeQueue;
