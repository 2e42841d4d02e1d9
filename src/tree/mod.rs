//! Tree structure helpers shared by the store and the resolver.

pub mod path;
