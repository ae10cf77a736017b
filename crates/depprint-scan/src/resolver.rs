//! Recursive module tree resolution.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use depprint_core::{Keyed, KeyedSet, ModuleRecord, ModuleTree, ReportError, ScanStats};

use crate::descriptor::normalize;
use crate::loader::{DescriptorLoader, PomLoader};

/// Upper bound on `<parent>` hops when looking for the aggregator root.
const MAX_PARENT_HOPS: usize = 64;

/// Discovers the leaf modules of a multi-module project.
pub struct ModuleResolver<L = PomLoader> {
    loader: L,
    climb_to_root: bool,
}

impl ModuleResolver<PomLoader> {
    /// Create a resolver reading `pom.xml` files from disk.
    pub fn new() -> Self {
        Self::with_loader(PomLoader::new())
    }
}

impl Default for ModuleResolver<PomLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DescriptorLoader> ModuleResolver<L> {
    /// Create a resolver over a custom descriptor source.
    pub fn with_loader(loader: L) -> Self {
        Self {
            loader,
            climb_to_root: true,
        }
    }

    /// Whether to climb from the start directory to the top-most aggregator
    /// before walking modules (on by default).
    pub fn climb_to_root(mut self, climb: bool) -> Self {
        self.climb_to_root = climb;
        self
    }

    /// Resolve the leaf modules below the project at `start`.
    pub fn resolve(&self, start: &Path) -> Result<ModuleTree, ReportError> {
        let started = Instant::now();
        let start = normalize(start);

        let root_dir = if self.climb_to_root {
            self.find_aggregator_root(&start)?
        } else {
            start
        };

        let descriptor = self
            .loader
            .load(&root_dir)?
            .ok_or_else(|| ReportError::NotFound {
                path: PomLoader::descriptor_path(&root_dir),
            })?;
        let root = descriptor.resolve_root(&root_dir)?;
        debug!(root = %root.key(), path = %root_dir.display(), "resolving modules");

        let mut walk = LeafWalk::default();
        walk.stats.record_descriptor(0);
        let mut ancestors = vec![root.root.clone()];
        walk.absorb(self.collect_leaves(&root, &descriptor.modules, 1, &mut ancestors)?);

        let leaves = order_leaves(walk.leaves);
        Ok(ModuleTree::new(root, leaves, walk.stats, started.elapsed()))
    }

    /// Walk `<parent>` links upwards while the parent descriptor is present
    /// on disk and is the project it claims to be.
    pub fn find_aggregator_root(&self, start: &Path) -> Result<PathBuf, ReportError> {
        let mut current = start.to_path_buf();

        for _ in 0..MAX_PARENT_HOPS {
            let Some(descriptor) = self.loader.load(&current)? else {
                break;
            };
            let Some(parent) = descriptor.parent.as_ref() else {
                break;
            };
            let Some(parent_dir) = parent.directory(&current) else {
                break;
            };
            if parent_dir == current {
                break;
            }
            let Some(parent_descriptor) = self.loader.load(&parent_dir)? else {
                break;
            };
            if !parent_descriptor.is_referenced_by(parent) {
                debug!(
                    path = %parent_dir.display(),
                    "descriptor at parent path is a different project, stopping climb"
                );
                break;
            }
            current = parent_dir;
        }

        Ok(current)
    }

    /// Collect the leaves below `parent`, whose declared modules are given.
    ///
    /// A declared module without a descriptor ends the walk of `parent`'s
    /// module list: whatever was collected so far is returned and the
    /// remaining siblings are not visited. A malformed descriptor anywhere
    /// fails the whole walk, as does a module whose directory is one of its
    /// own aggregators (`ancestors`, root first, ending with `parent`).
    fn collect_leaves(
        &self,
        parent: &ModuleRecord,
        modules: &[String],
        depth: u32,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<LeafWalk, ReportError> {
        let mut walk = LeafWalk::default();
        let inherited = parent.inherited();

        for name in modules {
            let child_root = normalize(&parent.root.join(name));
            if ancestors.contains(&child_root) {
                return Err(ReportError::ModuleCycle { path: child_root });
            }

            let Some(descriptor) = self.loader.load(&child_root)? else {
                debug!(
                    parent = %parent.key(),
                    module = %name,
                    path = %child_root.display(),
                    "no descriptor for declared module, skipping the rest of this module list"
                );
                walk.stats.record_missing();
                return Ok(walk);
            };
            walk.stats.record_descriptor(depth);

            let child = descriptor.resolve(&child_root, &inherited);
            if descriptor.is_aggregator() {
                walk.stats.record_aggregator();
                ancestors.push(child_root);
                let below = self.collect_leaves(&child, &descriptor.modules, depth + 1, ancestors)?;
                ancestors.pop();
                walk.absorb(below);
            } else {
                walk.leaves.push(child);
            }
        }

        Ok(walk)
    }
}

/// Leaves and stats gathered below one module.
#[derive(Debug, Default)]
struct LeafWalk {
    leaves: Vec<ModuleRecord>,
    stats: ScanStats,
}

impl LeafWalk {
    fn absorb(&mut self, other: LeafWalk) {
        self.leaves.extend(other.leaves);
        self.stats.merge(&other.stats);
    }
}

/// Order leaves ascending by coordinate key, keeping the first of each key.
pub fn order_leaves(leaves: impl IntoIterator<Item = ModuleRecord>) -> Vec<ModuleRecord> {
    leaves.into_iter().collect::<KeyedSet<_>>().into_vec()
}
