use crate::operation::CompiledDocument;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ManifestError>;

/// One entry of a [`PersistedQueryManifest`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PersistedQuery {
    pub name: String,
    pub source: String,
}

/// Maps each operation id to the operation's name and canonical source, in
/// insertion order.
///
/// Serializes as a JSON object keyed by id.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct PersistedQueryManifest {
    queries: IndexMap<String, PersistedQuery>,
}
impl PersistedQueryManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest containing every operation in `document`.
    pub fn from_document(document: &CompiledDocument) -> Result<Self> {
        let mut manifest = Self::new();
        for operation in document.operations() {
            let identity = operation.identity(document.fragments());
            manifest.insert(identity.id.clone(), PersistedQuery {
                name: operation.name().to_string(),
                source: identity.canonical_source.clone(),
            })?;
        }
        Ok(manifest)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge every entry of `other` into this manifest.
    pub fn extend(&mut self, other: PersistedQueryManifest) -> Result<()> {
        for (id, query) in other.queries {
            self.insert(id, query)?;
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PersistedQuery> {
        self.queries.get(id)
    }

    /// Add an entry. Re-inserting an identical operation under the same id
    /// is a no-op; a different operation name under an existing id is a
    /// [`ManifestError::DuplicateOperationId`].
    pub fn insert(&mut self, id: String, query: PersistedQuery) -> Result<()> {
        if let Some(existing) = self.queries.get(id.as_str()) {
            if existing.name != query.name {
                return Err(ManifestError::DuplicateOperationId {
                    id,
                    name1: existing.name.clone(),
                    name2: query.name,
                });
            }
            log::trace!("Skipping duplicate manifest entry for `{}`", query.name);
            return Ok(());
        }

        self.queries.insert(id, query);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersistedQuery)> {
        self.queries.iter().map(|(id, query)| (id.as_str(), query))
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(
        "Operations `{name1}` and `{name2}` have the same persisted-query id \
        `{id}`"
    )]
    DuplicateOperationId {
        id: String,
        name1: String,
        name2: String,
    },

    #[error("Failed to (de)serialize persisted-query manifest: {0}")]
    Json(#[from] serde_json::Error),
}
