//! Property tests for the reconcile scanner.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::tempdir;

use reposweep::{KeepSet, ReconcileScanner, ScanRoot};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]{1,3}",
        "[a-c]{1,3}\\.git",
        Just(".git".to_string()),
    ]
}

/// Directory paths relative to a scan root, 1 to 3 levels deep
fn layout() -> impl Strategy<Value = Vec<PathBuf>> {
    proptest::collection::vec(proptest::collection::vec(segment(), 1..=3), 0..8)
        .prop_map(|paths| {
            paths
                .into_iter()
                .map(|segs| segs.iter().collect::<PathBuf>())
                .collect()
        })
}

/// Create the layout under `root` and return every `.git`-suffixed directory in it
fn materialize(root: &Path, layout: &[PathBuf]) -> BTreeSet<PathBuf> {
    let mut candidates = BTreeSet::new();
    for rel in layout {
        std::fs::create_dir_all(root.join(rel)).unwrap();
        for ancestor in rel.ancestors() {
            let is_candidate = ancestor
                .file_name()
                .map(|n| n.to_string_lossy().ends_with(".git"))
                .unwrap_or(false);
            if is_candidate {
                candidates.insert(root.join(ancestor));
            }
        }
    }
    candidates
}

fn pick(candidates: &BTreeSet<PathBuf>, mask: &[bool]) -> KeepSet {
    candidates
        .iter()
        .enumerate()
        .filter(|(i, _)| mask[i % mask.len()])
        .map(|(_, p)| p.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the plan is exactly the candidates minus the keep set.
    #[test]
    fn property_plan_is_candidates_minus_keep(
        layout in layout(),
        mask in proptest::collection::vec(any::<bool>(), 1..16),
    ) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("projects");
        std::fs::create_dir_all(&root).unwrap();
        let candidates = materialize(&root, &layout);
        let keep = pick(&candidates, &mask);

        let plan = ReconcileScanner::new().find_deletable(&keep, &ScanRoot::new(&root));

        for path in plan.iter() {
            prop_assert!(!keep.contains(path), "kept path planned: {}", path.display());
            prop_assert!(path.starts_with(&root));
        }
        let expected: BTreeSet<PathBuf> = candidates
            .iter()
            .filter(|p| !keep.contains(p))
            .cloned()
            .collect();
        let actual: BTreeSet<PathBuf> = plan.iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: keep entries pointing into another root protect nothing here.
    #[test]
    fn property_keep_sets_do_not_cross_roots(layout in layout()) {
        let dir = tempdir().unwrap();
        let projects = dir.path().join("projects");
        let objects = dir.path().join("project-objects");
        std::fs::create_dir_all(&projects).unwrap();
        std::fs::create_dir_all(&objects).unwrap();
        materialize(&projects, &layout);
        let mirrored = materialize(&objects, &layout);

        let foreign_keep: KeepSet = mirrored.into_iter().collect();
        let scanner = ReconcileScanner::new();
        let with_foreign = scanner.find_deletable(&foreign_keep, &ScanRoot::new(&projects));
        let with_none = scanner.find_deletable(&KeepSet::new(), &ScanRoot::new(&projects));

        prop_assert_eq!(with_foreign, with_none);
    }

    /// PROPERTY: scanning never changes the filesystem.
    #[test]
    fn property_scan_is_read_only(layout in layout()) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("projects");
        std::fs::create_dir_all(&root).unwrap();
        let candidates = materialize(&root, &layout);

        let _ = ReconcileScanner::new().scan(&KeepSet::new(), &ScanRoot::new(&root));

        for path in &candidates {
            prop_assert!(path.is_dir());
        }
    }
}
