//! Pagetree: Materialized-Path Page Tree Index
//!
//! A durable index over pages and folders addressed by slash-delimited paths,
//! scoped per locale. Subtree lookups resolve the top-level branch of a path
//! and return the whole branch in path order straight from storage.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod relations;
pub mod resolver;
pub mod store;
pub mod tree;
pub mod types;

pub use api::PageTreeApi;
pub use error::{ApiError, StorageError, ValidationError};
pub use resolver::{FetchTreeOptions, NodeKind, SubtreeResolver, TreeRow, TreeSource};
pub use store::{NewTreeNode, TreeNode, TreeNodeStore};
pub use types::{LocaleCode, NodeId, PageId};
