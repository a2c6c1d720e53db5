use crate::domain::error::DomainError;
use crate::domain::ports::registry_cache::RegistryCache;
use crate::domain::upstream::RegistryDocument;
use std::fs;
use std::path::PathBuf;

/// JSON file mirroring the upstream registry response shape. Read before the
/// network is tried; written through after a successful remote fetch.
pub struct RegistryCacheFile {
    path: PathBuf,
}

impl RegistryCacheFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegistryCache for RegistryCacheFile {
    fn read(&self) -> Result<RegistryDocument, DomainError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| DomainError::RegistryLoad(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| DomainError::Parse(format!("registry cache {}: {e}", self.path.display())))
    }

    fn write(&self, doc: &RegistryDocument) -> Result<(), DomainError> {
        let text = serde_json::to_string_pretty(doc)
            .map_err(|e| DomainError::Parse(e.to_string()))?;
        fs::write(&self.path, text)
            .map_err(|e| DomainError::RegistryLoad(format!("{}: {e}", self.path.display())))
    }
}
