//! Cached version and capability information
//!
//! The server's interface versions are fetched once per client lifetime
//! and reused for every capability check. Refreshing is intentionally
//! racy: concurrent first use from multiple tasks may fetch redundantly,
//! but every successful fetch stores an equivalent value, so
//! last-write-wins is safe. A populated cache is never reset to empty.

use std::sync::{Arc, RwLock};

use metrica_api::InterfaceVersionRange;

use crate::feature::FeatureMatrix;

/// How a cached value is obtained
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchBehavior {
    /// Use the cached value when present, fetch otherwise
    FetchIfNotCached,
    /// Always fetch fresh, then update the cache
    FetchAlways,
}

/// Version range and derived feature matrix, stored together
#[derive(Clone, Debug)]
pub struct VersionInfo {
    pub versions: InterfaceVersionRange,
    pub features: FeatureMatrix,
}

impl VersionInfo {
    pub fn new(versions: InterfaceVersionRange) -> Self {
        let features = FeatureMatrix::new(&versions);
        Self { versions, features }
    }
}

/// Process-lifetime cache for [`VersionInfo`]
#[derive(Debug, Default)]
pub struct VersionCache {
    info: RwLock<Option<Arc<VersionInfo>>>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently cached value, if any
    pub fn get(&self) -> Option<Arc<VersionInfo>> {
        self.info
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Stores a freshly fetched value and returns it. Never called with
    /// anything but a complete value, so the cache cannot regress to
    /// empty.
    pub fn store(&self, info: VersionInfo) -> Arc<VersionInfo> {
        let info = Arc::new(info);
        let mut guard = self.info.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::clone(&info));
        info
    }
}
