//! Core library for casekit
//!
//! This crate implements the **Functional Core** of the casekit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The casekit project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`casekit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`casekit`**: I/O operations and orchestration (the Imperative Shell)
//!
//! Every function in this crate is pure: the same input always produces the
//! same output, nothing is logged, read or written, and no state is shared
//! between calls. Converters can be called from any number of threads at once.
//!
//! # Module Organization
//!
//! - [`case`]: Tokenization and the word-case converters (camelCase, dot.case,
//!   kebab-case, snake_case, PascalCase)
//! - [`batch`]: Converting many dynamic values at once and summarizing the result
//!
//! # Example Usage
//!
//! ```rust
//! use casekit_core::case::{to_camel_case, to_dot_case, to_kebab_case, CaseError};
//!
//! assert_eq!(to_camel_case("hello world").unwrap(), "helloWorld");
//! assert_eq!(to_dot_case("hello_world_foo").unwrap(), "hello.world.foo");
//! assert_eq!(
//!     to_kebab_case("Hello World! This is a test_string.").unwrap(),
//!     "hello-world-this-is-a-test-string"
//! );
//!
//! // Absent values are not an error
//! assert_eq!(to_camel_case(None::<&str>).unwrap(), "");
//!
//! // Non-string values are
//! let number = serde_json::json!(123);
//! assert!(matches!(
//!     to_camel_case(&number),
//!     Err(CaseError::TypeKind { .. })
//! ));
//! ```

pub mod batch;
pub mod case;
