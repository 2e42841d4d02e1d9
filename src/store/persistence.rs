//! Sled-backed Tree Index Store
//!
//! Two trees are kept in one sled database:
//! - `tree_nodes`: big-endian node id -> bincode `TreeNode`
//! - `tree_paths`: `path \0 locale` -> big-endian node id
//!
//! The path key sorts exactly like the path string, with a path ordered
//! before every path it prefixes, so prefix scans come back in path order.

use super::validation::{normalize_private_ns, validate_new_node, validate_node};
use super::{NewTreeNode, SubtreeQuery, TreeNode, TreeNodeStore};
use crate::error::{ApiError, StorageError};
use crate::tree::path::SEPARATOR;
use crate::types::{LocaleCode, NodeId};
use chrono::{DateTime, Utc};
use sled::transaction::{
    ConflictableTransactionError, ConflictableTransactionResult, TransactionError,
};
use sled::{IVec, Transactional};
use std::path::Path;
use tracing::{debug, info, warn};

const NODES_TREE: &str = "tree_nodes";
const PATHS_TREE: &str = "tree_paths";
const KEY_SEPARATOR: u8 = 0;

/// Tree Index Store on sled
pub struct SledTreeNodeStore {
    db: sled::Db,
    nodes: sled::Tree,
    paths: sled::Tree,
}

impl SledTreeNodeStore {
    /// Open (or create) a store at the given directory
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        info!(path = %path.display(), "Opened tree index store");
        Self::from_db(db)
    }

    /// Build a store on an already opened database
    pub fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let nodes = db.open_tree(NODES_TREE)?;
        let paths = db.open_tree(PATHS_TREE)?;
        Ok(Self { db, nodes, paths })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert_record(&self, record: TreeNode) -> Result<TreeNode, StorageError> {
        let encoded = bincode::serialize(&record)?;
        let id_key = node_key(record.id);
        let index_key = path_key(&record.path, &record.locale_code);

        (&self.nodes, &self.paths)
            .transaction(|(nodes, paths)| -> ConflictableTransactionResult<_, StorageError> {
                if paths.get(index_key.as_slice())?.is_some() {
                    return Err(ConflictableTransactionError::Abort(
                        StorageError::PathConflict {
                            locale: record.locale_code.to_string(),
                            path: record.path.clone(),
                        },
                    ));
                }
                nodes.insert(&id_key[..], encoded.as_slice())?;
                paths.insert(index_key.as_slice(), &id_key[..])?;
                Ok(())
            })
            .map_err(from_transaction_error)?;
        Ok(record)
    }

    fn update_record(&self, node: &TreeNode) -> Result<TreeNode, StorageError> {
        let id_key = node_key(node.id);
        let new_index_key = path_key(&node.path, &node.locale_code);

        (&self.nodes, &self.paths)
            .transaction(|(nodes, paths)| -> ConflictableTransactionResult<_, StorageError> {
                let existing = match nodes.get(&id_key[..])? {
                    Some(bytes) => {
                        decode_node(&bytes).map_err(ConflictableTransactionError::Abort)?
                    }
                    None => {
                        return Err(ConflictableTransactionError::Abort(
                            StorageError::NodeNotFound(node.id),
                        ))
                    }
                };

                let old_index_key = path_key(&existing.path, &existing.locale_code);
                if old_index_key != new_index_key {
                    if paths.get(new_index_key.as_slice())?.is_some() {
                        return Err(ConflictableTransactionError::Abort(
                            StorageError::PathConflict {
                                locale: node.locale_code.to_string(),
                                path: node.path.clone(),
                            },
                        ));
                    }
                    paths.remove(old_index_key.as_slice())?;
                    paths.insert(new_index_key.as_slice(), &id_key[..])?;
                }

                let mut updated = node.clone();
                updated.private_ns = normalize_private_ns(updated.private_ns);
                updated.created_at = existing.created_at;
                updated.updated_at = stamp_after(existing.updated_at);

                let encoded = bincode::serialize(&updated)
                    .map_err(|e| ConflictableTransactionError::Abort(StorageError::from(e)))?;
                nodes.insert(&id_key[..], encoded)?;
                Ok(updated)
            })
            .map_err(from_transaction_error)
    }

    fn remove_record(&self, id: NodeId) -> Result<Option<TreeNode>, StorageError> {
        let id_key = node_key(id);
        (&self.nodes, &self.paths)
            .transaction(|(nodes, paths)| -> ConflictableTransactionResult<_, StorageError> {
                let existing = match nodes.remove(&id_key[..])? {
                    Some(bytes) => {
                        decode_node(&bytes).map_err(ConflictableTransactionError::Abort)?
                    }
                    None => return Ok(None),
                };
                paths.remove(path_key(&existing.path, &existing.locale_code))?;
                Ok(Some(existing))
            })
            .map_err(from_transaction_error)
    }

    fn load(&self, id: NodeId) -> Result<Option<TreeNode>, StorageError> {
        match self.nodes.get(node_key(id))? {
            Some(bytes) => Ok(Some(decode_node(&bytes)?)),
            None => Ok(None),
        }
    }

    fn load_by_path(
        &self,
        locale: &LocaleCode,
        path: &str,
    ) -> Result<Option<TreeNode>, StorageError> {
        match self.paths.get(path_key(path, locale))? {
            Some(id_bytes) => self.load(decode_id(&id_bytes)?),
            None => Ok(None),
        }
    }
}

impl TreeNodeStore for SledTreeNodeStore {
    fn insert(&self, node: NewTreeNode) -> Result<TreeNode, ApiError> {
        let validated = validate_new_node(&node)?;

        let id = self.db.generate_id().map_err(|e| {
            let e = StorageError::from(e);
            warn!(
                path = %validated.path,
                locale = %validated.locale_code,
                error = %e,
                "Failed to allocate tree node id"
            );
            e
        })?;
        let now = Utc::now();
        let record = TreeNode {
            id,
            path: validated.path,
            depth: validated.depth,
            title: validated.title,
            is_folder: node.is_folder,
            is_private: node.is_private,
            private_ns: normalize_private_ns(node.private_ns),
            parent: node.parent,
            page_id: node.page_id,
            locale_code: validated.locale_code,
            created_at: now,
            updated_at: now,
        };
        let (path, locale) = (record.path.clone(), record.locale_code.clone());

        let record = self.insert_record(record).map_err(|e| {
            warn!(
                id,
                path = %path,
                locale = %locale,
                error = %e,
                "Failed to insert tree node"
            );
            e
        })?;

        debug!(
            id = record.id,
            path = %record.path,
            locale = %record.locale_code,
            "Inserted tree node"
        );
        Ok(record)
    }

    fn update(&self, node: &TreeNode) -> Result<TreeNode, ApiError> {
        validate_node(node)?;

        let updated = self.update_record(node).map_err(|e| {
            warn!(
                id = node.id,
                path = %node.path,
                locale = %node.locale_code,
                error = %e,
                "Failed to update tree node"
            );
            e
        })?;

        debug!(id = updated.id, path = %updated.path, "Updated tree node");
        Ok(updated)
    }

    fn get(&self, id: NodeId) -> Result<Option<TreeNode>, StorageError> {
        self.load(id).map_err(|e| {
            warn!(id, error = %e, "Failed to read tree node");
            e
        })
    }

    fn get_by_path(
        &self,
        locale: &LocaleCode,
        path: &str,
    ) -> Result<Option<TreeNode>, StorageError> {
        self.load_by_path(locale, path).map_err(|e| {
            warn!(
                path,
                locale = %locale,
                error = %e,
                "Failed to read tree node by path"
            );
            e
        })
    }

    fn delete(&self, id: NodeId) -> Result<Option<TreeNode>, StorageError> {
        let removed = self.remove_record(id).map_err(|e| {
            warn!(id, error = %e, "Failed to delete tree node");
            e
        })?;

        if let Some(node) = &removed {
            debug!(id, path = %node.path, "Deleted tree node");
        }
        Ok(removed)
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    fn query_subtree(&self, query: &SubtreeQuery) -> Result<Vec<TreeNode>, StorageError> {
        // `root\0` sorts before `root/`, so the root rows come first.
        let mut root_prefix = query.root_path.as_bytes().to_vec();
        root_prefix.push(KEY_SEPARATOR);
        let mut descendant_prefix = query.root_path.as_bytes().to_vec();
        descendant_prefix.push(SEPARATOR as u8);

        let locale_filter = query.locale.as_ref().map(|l| l.as_str().as_bytes());

        let mut results = Vec::new();
        let entries = self
            .paths
            .scan_prefix(&root_prefix)
            .chain(self.paths.scan_prefix(&descendant_prefix));
        for entry in entries {
            let (key, id_bytes) = entry?;
            if let Some(locale) = locale_filter {
                if locale_of_key(&key)? != locale {
                    continue;
                }
            }
            let id = decode_id(&id_bytes)?;
            match self.load(id)? {
                Some(node) if is_current_key(&key, &node) && query.matches(&node) => {
                    results.push(node)
                }
                // Node re-keyed after the index scan.
                Some(node) => debug!(id, path = %node.path, "Skipping stale index entry"),
                // Deleted after the index scan.
                None => debug!(id, "Skipping index entry without node"),
            }
        }
        Ok(results)
    }
}

fn node_key(id: NodeId) -> [u8; 8] {
    id.to_be_bytes()
}

fn path_key(path: &str, locale: &LocaleCode) -> Vec<u8> {
    let mut key = Vec::with_capacity(path.len() + 1 + locale.as_str().len());
    key.extend_from_slice(path.as_bytes());
    key.push(KEY_SEPARATOR);
    key.extend_from_slice(locale.as_str().as_bytes());
    key
}

fn is_current_key(key: &[u8], node: &TreeNode) -> bool {
    key == path_key(&node.path, &node.locale_code).as_slice()
}

fn locale_of_key(key: &[u8]) -> Result<&[u8], StorageError> {
    key.iter()
        .position(|b| *b == KEY_SEPARATOR)
        .map(|idx| &key[idx + 1..])
        .ok_or_else(|| {
            StorageError::CorruptIndex(format!(
                "path key without locale: {}",
                String::from_utf8_lossy(key)
            ))
        })
}

fn decode_id(bytes: &IVec) -> Result<NodeId, StorageError> {
    let raw: [u8; 8] = bytes[..].try_into().map_err(|_| {
        StorageError::CorruptIndex(format!("node id has {} bytes, expected 8", bytes.len()))
    })?;
    Ok(NodeId::from_be_bytes(raw))
}

fn decode_node(bytes: &[u8]) -> Result<TreeNode, StorageError> {
    Ok(bincode::deserialize(bytes)?)
}

fn from_transaction_error(err: TransactionError<StorageError>) -> StorageError {
    match err {
        TransactionError::Abort(e) => e,
        TransactionError::Storage(e) => StorageError::Database(e),
    }
}

/// Current time, strictly later than `previous`.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}
