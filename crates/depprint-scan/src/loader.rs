//! Loading descriptors from module directories.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use depprint_core::ReportError;

use crate::descriptor::Descriptor;

/// File name of a module descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

/// Source of module descriptors.
///
/// A missing descriptor is `Ok(None)`; a descriptor that exists but cannot
/// be read or parsed is an error.
pub trait DescriptorLoader {
    /// Load the descriptor of the module rooted at `module_root`.
    fn load(&self, module_root: &Path) -> Result<Option<Descriptor>, ReportError>;
}

impl<L: DescriptorLoader + ?Sized> DescriptorLoader for &L {
    fn load(&self, module_root: &Path) -> Result<Option<Descriptor>, ReportError> {
        (**self).load(module_root)
    }
}

/// Reads `pom.xml` files from disk.
#[derive(Debug, Clone, Default)]
pub struct PomLoader;

impl PomLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Path of the descriptor file inside a module directory.
    pub fn descriptor_path(module_root: &Path) -> PathBuf {
        module_root.join(DESCRIPTOR_FILE_NAME)
    }
}

impl DescriptorLoader for PomLoader {
    fn load(&self, module_root: &Path) -> Result<Option<Descriptor>, ReportError> {
        let path = Self::descriptor_path(module_root);
        if !path.is_file() {
            return Ok(None);
        }

        let xml = std::fs::read_to_string(&path).map_err(|e| ReportError::io(&path, e))?;
        Descriptor::parse(&xml, path).map(Some)
    }
}

/// Descriptors held in memory, keyed by module directory.
///
/// Useful when the host has already parsed the project model.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    descriptors: HashMap<PathBuf, Descriptor>,
}

impl MemoryLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor for a module directory.
    pub fn insert(&mut self, module_root: impl Into<PathBuf>, descriptor: Descriptor) {
        self.descriptors.insert(module_root.into(), descriptor);
    }

    /// Parse and register descriptor XML for a module directory.
    pub fn insert_xml(
        &mut self,
        module_root: impl Into<PathBuf>,
        xml: &str,
    ) -> Result<(), ReportError> {
        let module_root = module_root.into();
        let descriptor = Descriptor::parse(xml, PomLoader::descriptor_path(&module_root))?;
        self.insert(module_root, descriptor);
        Ok(())
    }
}

impl DescriptorLoader for MemoryLoader {
    fn load(&self, module_root: &Path) -> Result<Option<Descriptor>, ReportError> {
        Ok(self.descriptors.get(module_root).cloned())
    }
}
