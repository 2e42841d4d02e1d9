//! Foreign references
//!
//! Tree nodes point at external content and locale records by identifier
//! only. Callers that need the records supply a directory to resolve them.

use crate::error::ApiError;
use crate::store::TreeNode;
use crate::types::{LocaleCode, PageId};

/// Lookup into the external content record store
pub trait PageDirectory {
    type Page;

    fn page(&self, id: PageId) -> Result<Option<Self::Page>, ApiError>;
}

/// Lookup into the external locale store
pub trait LocaleDirectory {
    type Locale;

    fn locale(&self, code: &LocaleCode) -> Result<Option<Self::Locale>, ApiError>;
}

impl TreeNode {
    /// Resolve the linked content record. Folders and unlinked nodes yield `None`.
    pub fn resolve_page<D: PageDirectory + ?Sized>(
        &self,
        pages: &D,
    ) -> Result<Option<D::Page>, ApiError> {
        match self.page_id {
            Some(page_id) if !self.is_folder => pages.page(page_id),
            _ => Ok(None),
        }
    }

    pub fn resolve_locale<D: LocaleDirectory + ?Sized>(
        &self,
        locales: &D,
    ) -> Result<Option<D::Locale>, ApiError> {
        locales.locale(&self.locale_code)
    }
}
