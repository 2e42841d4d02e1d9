//! Config composition: default layer and merge orchestration.

pub(crate) mod merge_policy;
pub mod service;
