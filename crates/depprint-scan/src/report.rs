//! Turning a resolved module tree into report lines.

use depprint_core::{LineFormatter, ModuleTree, PrintConfig};

/// Format every leaf module of `tree`, in order.
pub fn module_lines(tree: &ModuleTree, config: &PrintConfig) -> Vec<String> {
    if config.verbose {
        tracing::info!("{} project modules found:", tree.leaf_count());
    }

    let formatter = LineFormatter::new(config);
    tree.leaves
        .iter()
        .map(|module| {
            if config.verbose {
                tracing::info!(
                    "- {}:{}:{} ({})",
                    module.group_id,
                    module.artifact_id,
                    module.version,
                    module.packaging
                );
            }
            formatter.format_module(module)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use depprint_core::{ModuleRecord, ScanStats};
    use std::time::Duration;

    #[test]
    fn test_module_lines() {
        let tree = ModuleTree::new(
            ModuleRecord::new("G1", "A1", "1.0", "pom", "/r"),
            vec![
                ModuleRecord::new("G1", "A1-m1", "1.0", "jar", "/r/m1"),
                ModuleRecord::new("G1", "A1-m2", "1.0", "war", "/r/m2"),
            ],
            ScanStats::new(),
            Duration::ZERO,
        );
        let config = PrintConfig {
            print_packaging: true,
            verbose: true,
            ..PrintConfig::default()
        };

        assert_eq!(
            module_lines(&tree, &config),
            vec!["G1:A1-m1:1.0:jar", "G1:A1-m2:1.0:war"]
        );
    }
}
