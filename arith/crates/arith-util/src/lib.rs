//! arith-util - Shared helpers for the arith front end
//!
//! This crate holds the small, dependency-free string utilities used by the
//! lexer and by the interactive loop:
//!
//! - [`is_space`] - the whitespace classification shared by every crate
//! - [`parse_int_or_zero`] - leading base-10 integer conversion that never fails
//! - [`is_null_or_whitespace`] - blank-line detection for the read loop
//!
//! # Example
//!
//! ```
//! use arith_util::{is_null_or_whitespace, parse_int_or_zero};
//!
//! assert_eq!(parse_int_or_zero("42"), 42);
//! assert_eq!(parse_int_or_zero("   "), 0);
//! assert!(is_null_or_whitespace(" \t"));
//! ```

#![warn(missing_docs)]

pub mod string;

pub use string::{is_null_or_whitespace, is_space, parse_int_or_zero};
