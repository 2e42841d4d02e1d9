//! Integration tests for the page tree index

mod node_lifecycle;
mod site_open;
mod subtree_properties;
mod subtree_resolution;
mod support;
