//! Property tests for workspace resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use wsver::infrastructure::MemoryFs;
use wsver::{CandidateFiles, WorkspaceResolver, WsverError};

const WORKSPACE: &str = r#"{"version":1,"projects":{"a":{"root":"a"}}}"#;

fn candidate_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("candidate-{i}.json")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the first readable candidate wins, after exactly its
    /// position's worth of reads.
    #[test]
    fn property_first_readable_candidate_wins(
        count in 1usize..6,
        present in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let names = candidate_names(count);
        let mut fs = MemoryFs::new();
        for (name, exists) in names.iter().zip(&present) {
            if *exists {
                fs = fs.with_file(Path::new("/ws").join(name), WORKSPACE);
            }
        }

        let resolver = WorkspaceResolver::with_candidates(&fs, CandidateFiles::new(names.clone()));
        let result = resolver.resolve(Path::new("/ws"));

        match present.iter().take(count).position(|p| *p) {
            Some(index) => {
                let resolved = result.unwrap();
                prop_assert_eq!(resolved.path, Path::new("/ws").join(&names[index]));
                prop_assert_eq!(fs.reads().len(), index + 1);
            }
            None => {
                let is_not_found = matches!(result, Err(WsverError::WorkspaceNotFound { .. }));
                prop_assert!(is_not_found);
                prop_assert_eq!(fs.reads().len(), count);
            }
        }
    }

    /// PROPERTY: reads happen in candidate order and never repeat.
    #[test]
    fn property_reads_follow_candidate_order(count in 1usize..6) {
        let names = candidate_names(count);
        let fs = MemoryFs::new();
        let resolver = WorkspaceResolver::with_candidates(&fs, CandidateFiles::new(names.clone()));

        let _ = resolver.resolve(Path::new("/ws"));

        let expected: Vec<PathBuf> = names.iter().map(|n| Path::new("/ws").join(n)).collect();
        prop_assert_eq!(fs.reads(), expected);
    }

    /// PROPERTY: arbitrary file content never panics the resolver.
    #[test]
    fn property_arbitrary_content_never_panics(content in ".{0,200}") {
        let fs = MemoryFs::new().with_file("/ws/workspace.json", content);
        let resolver = WorkspaceResolver::new(&fs);

        match resolver.resolve(Path::new("/ws")) {
            Ok(_) | Err(WsverError::WorkspaceParse { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}
