//! # Shepherd Design Documentation
//!
//! This crate contains design documentation and decision records for the
//! Shepherd proposal-corpus validator.
//!
//! ## Documentation Location
//!
//! All design documents are located in the `docs/` directory at the root
//! of this crate.
//!
//! Key documents:
//! - `architecture.md` - Overall validator architecture
//! - `adr/` - Decision records

// This is a documentation-only crate
#![no_std]
