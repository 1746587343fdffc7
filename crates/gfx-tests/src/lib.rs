//! Integration tests for the gfx color crates.
//!
//! This crate contains end-to-end tests that check the crates together:
//! float colors packed to device pixels, kernels reached through
//! `Rgba8T`, raw buffers read through channel orders.
