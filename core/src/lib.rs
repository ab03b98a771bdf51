//! Core types for enum name-map generation.
//!
//! This crate defines the data model for grouping enum symbols by their
//! underlying value:
//!
//! - [`AliasGroup`] — a base entry (the canonical symbol) together with the
//!   ordered list of aliases declared for the same value.
//! - [`NameTable`] — the full set of groups, iterated in first-insertion
//!   order.
//!
//! # Example
//!
//! ```
//! use enum_name_map_core::NameTable;
//!
//! let mut table = NameTable::new();
//! table.insert_base("VK_PRESENT_MODE_FIFO_KHR");
//! table.insert_base("VK_PRESENT_MODE_MAILBOX_KHR");
//! assert!(table.push_alias("VK_PRESENT_MODE_FIFO_KHR", "VK_PRESENT_MODE_FIFO_LEGACY"));
//!
//! let group = table.find_group("VK_PRESENT_MODE_FIFO_KHR").unwrap();
//! assert_eq!(
//!     group.display_label(),
//!     "VK_PRESENT_MODE_FIFO_KHR (aka VK_PRESENT_MODE_FIFO_LEGACY)"
//! );
//! ```

mod types;

pub use types::*;
