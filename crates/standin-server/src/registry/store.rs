//! The mock registry: keyed storage, duplicate rejection, lookup.

use super::key::key_for;
use super::types::{IncomingRequest, MockDefinition, MockResponse, MockSubmission};
use super::validate::validate;
use crate::error::MockError;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// In-memory store of mock definitions keyed by path+method.
///
/// One instance is created at startup and shared by handle across request
/// handlers; tests construct their own throwaway instances. The map is the
/// only shared mutable state in the system, so every check-then-mutate runs
/// under a single write-lock acquisition: no two concurrent `add` calls can
/// both observe a key as absent, and no two concurrent `find` calls can
/// consume the same sequence element.
#[derive(Default)]
pub struct MockRegistry {
    mocks: RwLock<HashMap<String, MockDefinition>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one definition or an ordered batch.
    ///
    /// Elements are processed sequentially and each is committed as soon as
    /// it passes its own checks, so a batch that fails part-way leaves the
    /// earlier elements stored. Callers relying on the original behavior can
    /// re-submit only the tail of a failed batch; see DESIGN.md.
    pub fn add(&self, submission: MockSubmission) -> Result<(), MockError> {
        for mock in submission.into_vec() {
            self.add_one(mock)?;
        }
        Ok(())
    }

    fn add_one(&self, mock: MockDefinition) -> Result<(), MockError> {
        debug!(name = %mock.name, path = %mock.request.path, "mock received");

        let mut mocks = self.mocks.write();
        let key = key_for(&mock.request.path, &mock.request.method);
        if mocks.contains_key(&key) {
            warn!(%key, name = %mock.name, "mock already registered for this key");
            return Err(MockError::AlreadyExists(format!(
                "a mock for {} {} is already registered",
                mock.request.method.to_uppercase(),
                mock.request.path
            )));
        }

        let validated = validate(&mock)?;
        info!(%key, name = %validated.name, "mock registered");
        mocks.insert(key, validated);
        Ok(())
    }

    /// Match an incoming request against the registry.
    ///
    /// Returns `Ok(None)` when no mock occupies the derived key; the caller
    /// owns the translation of absence into a transport-level 404. A matched
    /// single-response mock is returned as stored. A matched sequenced mock
    /// is consumed: the returned definition carries the sequence head as its
    /// (single) response while the stored sequence shrinks by one, and an
    /// already-exhausted sequence fails with `NotFound`.
    pub fn find(&self, request: &IncomingRequest) -> Result<Option<MockDefinition>, MockError> {
        let key = key_for(&request.path, &request.method);
        debug!(%key, "locating mock");

        let mut mocks = self.mocks.write();
        let Some(stored) = mocks.get_mut(&key) else {
            debug!(%key, "no mock registered");
            return Ok(None);
        };

        match &stored.response {
            MockResponse::Single(_) => {
                info!(%key, name = %stored.name, "mock matched");
                Ok(Some(stored.clone()))
            }
            MockResponse::Sequence(_) => {
                let next = stored.response.take_next()?;
                info!(
                    %key,
                    name = %stored.name,
                    remaining = stored.response.remaining().unwrap_or(0),
                    "consumed sequenced response"
                );
                let mut matched = stored.clone();
                matched.response = MockResponse::Single(next);
                Ok(Some(matched))
            }
        }
    }

    /// Every stored definition. Iteration order is unspecified.
    pub fn all(&self) -> Vec<MockDefinition> {
        let mocks = self.mocks.read();
        debug!(count = mocks.len(), "listing mocks");
        mocks.values().cloned().collect()
    }

    /// Drop every stored definition. Idempotent.
    pub fn clear(&self) {
        self.mocks.write().clear();
        debug!("registry cleared");
    }

    /// Number of stored definitions.
    pub fn count(&self) -> usize {
        self.mocks.read().len()
    }
}
