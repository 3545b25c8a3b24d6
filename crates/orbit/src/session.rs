//! Explicit application state for interior construction.
//!
//! A [`Session`] owns the selected blueprint path, the construction options
//! and at most one constructed [`Interior`].

use std::path::{Path, PathBuf};

use orbit_core::{Blueprint, OrbitError, Result};
use orbit_interior::{build_from_blueprint, Interior, InteriorOptions};

/// Inputs of a construction.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Blueprint to build from. `None` until one is selected.
    pub blueprint_path: Option<PathBuf>,
    pub options: InteriorOptions,
}

impl SessionConfig {
    /// Creates a config with a blueprint already selected.
    pub fn with_blueprint(path: impl Into<PathBuf>) -> Self {
        Self {
            blueprint_path: Some(path.into()),
            options: InteriorOptions::default(),
        }
    }
}

/// Blueprint selection plus the current construction.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    interior: Option<Interior>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            interior: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mutable access to the options used by the next construction.
    pub fn options_mut(&mut self) -> &mut InteriorOptions {
        &mut self.config.options
    }

    /// Selects the blueprint for the next construction.
    ///
    /// An existing construction is kept until it is deleted or replaced.
    pub fn select_blueprint(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        log::debug!("selected blueprint '{}'", path.display());
        self.config.blueprint_path = Some(path);
    }

    pub fn blueprint_path(&self) -> Option<&Path> {
        self.config.blueprint_path.as_deref()
    }

    pub fn can_construct(&self) -> bool {
        self.config.blueprint_path.is_some()
    }

    /// Loads the selected blueprint and builds a new interior from it.
    ///
    /// The new construction replaces the current one.
    pub fn construct(&mut self) -> Result<&Interior> {
        let path = self
            .config
            .blueprint_path
            .as_deref()
            .ok_or(OrbitError::NoBlueprintSelected)?;
        let blueprint = Blueprint::from_path(path)?;
        let interior = build_from_blueprint(&blueprint, &self.config.options);

        if self.interior.is_some() {
            log::debug!("replacing previous construction");
        }
        Ok(self.interior.insert(interior))
    }

    /// The current construction, if any.
    pub fn interior(&self) -> Option<&Interior> {
        self.interior.as_ref()
    }

    pub fn can_delete(&self) -> bool {
        self.interior.is_some()
    }

    /// Tears the current construction down children-first.
    ///
    /// Returns the names of the removed nodes in removal order.
    pub fn delete(&mut self) -> Result<Vec<String>> {
        let interior = self.interior.take().ok_or(OrbitError::NothingConstructed)?;
        let removed = interior.teardown();
        log::info!("deleted construction ({} nodes)", removed.len());
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_interior::ROOT_NAME;

    fn write_blueprint(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("blueprint.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_construct_without_blueprint() {
        let mut session = Session::default();
        assert!(!session.can_construct());
        assert!(matches!(
            session.construct(),
            Err(OrbitError::NoBlueprintSelected)
        ));
    }

    #[test]
    fn test_delete_without_construction() {
        let mut session = Session::default();
        assert!(!session.can_delete());
        assert!(matches!(session.delete(), Err(OrbitError::NothingConstructed)));
    }

    #[test]
    fn test_construct_then_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_blueprint(
            dir.path(),
            r#"{"volumes": [{"x_start": 0, "x_end": 2, "y_start": 0, "y_end": 1, "z_start": 0, "z_end": 1}]}"#,
        );

        let mut session = Session::new(SessionConfig::with_blueprint(path));
        assert!(session.can_construct());
        assert_eq!(session.construct().unwrap().stats().cells, 2);
        assert!(session.can_delete());

        let removed = session.delete().unwrap();
        assert_eq!(removed.last().map(String::as_str), Some(ROOT_NAME));
        assert!(session.interior().is_none());
        assert!(!session.can_delete());
    }

    #[test]
    fn test_missing_blueprint_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::default();
        session.select_blueprint(dir.path().join("missing.json"));
        assert!(matches!(
            session.construct(),
            Err(OrbitError::FileAccess { .. })
        ));
        assert!(!session.can_delete());
    }
}
