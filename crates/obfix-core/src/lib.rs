//! # obfix-core
//!
//! Validation, normalization, and serialization pipeline for orderbook test
//! fixtures.
//!
//! The crate is a pure function of tabular input to (issues, normalized rows,
//! formatted text): a caller hands over six tables plus two threshold scalars
//! as a [`Submission`], and gets back either every [`ValidationIssue`] found
//! across all tables or a [`Fixture`] that renders the sectioned text artifact
//! consumed by the external test runner.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Table schemas, cell semantics, OrderType/Action enums, date formats |
//! | [`error`] | Structured validation issues and the issue taxonomy |
//! | [`validate`] | Field rules, time defaulting, table and order validation |
//! | [`render`] | Fixed-width bordered table serialization |
//! | [`fixture`] | Submission pipeline and fixture document assembly |
//!
//! ## Quick start
//!
//! ```rust
//! use obfix_core::{Submission, Table, TableRole};
//!
//! let mut orders = Table::empty(TableRole::IncomingOrders);
//! orders.push_record([
//!     ("OrderCounter", "1"),
//!     ("Action", "Add"),
//!     ("Symbol", "ABC"),
//!     ("OrderType", "Market"),
//!     ("Side", "Buy"),
//!     ("Price", "100"),
//!     ("Quantity", "10"),
//!     ("ParticipantID", "1_AB12"),
//! ]);
//!
//! let mut submission = Submission::new("basic_add", 3, 100);
//! submission.incoming_orders = orders;
//!
//! let fixture = submission.validate().expect("submission is valid");
//! assert_eq!(fixture.file_name(), "basic_add.txt");
//! let text = fixture.render();
//! assert!(text.starts_with("---------------------ARGUMENTS---------------------\n"));
//! ```

pub mod domain;
pub mod error;
pub mod fixture;
pub mod render;
pub mod validate;

// Re-export commonly used types at crate root for convenience

pub use domain::{is_placeholder, Action, OrderType, Table, TableRole};
pub use error::{IssueKind, ValidationIssue};
pub use fixture::{Fixture, Submission};
pub use render::format_table;
pub use validate::{validate_incoming_orders, validate_table, FieldRule};
