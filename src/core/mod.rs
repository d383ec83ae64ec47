// File: src/core/mod.rs
pub mod converter;
pub mod map;
pub mod matcher;
pub mod trie;
pub mod types;
