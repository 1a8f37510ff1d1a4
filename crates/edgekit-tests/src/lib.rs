//! Integration tests for edgekit crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the core buffer types and the edge detection operations.
