//! Stable content hashes for operations, used as persisted-query ids.

mod operation_identity;
mod persisted_query_manifest;

pub use operation_identity::fragment_closure;
pub use operation_identity::identify;
pub use operation_identity::OperationIdentity;
pub use persisted_query_manifest::ManifestError;
pub use persisted_query_manifest::PersistedQuery;
pub use persisted_query_manifest::PersistedQueryManifest;

#[cfg(test)]
mod tests;
