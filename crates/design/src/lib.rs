//! # Quickbeam Design Documentation
//!
//! This crate contains design documentation and decision records for
//! the Quickbeam project.
//!
//! ## Documentation Location
//!
//! All design documents are located in the `docs/` directory at the
//! root of this crate.
//!
//! Key documents:
//! - `architecture.md` - Overall system architecture
//! - `numbering.md` - The post-order numbering contract and its
//!   invariants

// This is a documentation-only crate
#![no_std]
