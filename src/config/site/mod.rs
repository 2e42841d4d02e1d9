//! Site-scoped configuration.

pub mod storage_paths;
