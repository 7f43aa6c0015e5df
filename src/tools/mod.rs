//! Containers used to build the Huffman tree.

pub mod freq_map;
pub mod sorted_list;
pub mod huff_tree;
