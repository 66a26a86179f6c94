//! Property tests for declarative project selection.

use proptest::prelude::*;

use wsver::{select_from_list, ProjectDefinition, WorkspaceDefinition, WsverError};

fn workspace(names: &[String]) -> WorkspaceDefinition {
    names.iter().fold(WorkspaceDefinition::new(1), |ws, name| {
        ws.with_project(name.clone(), ProjectDefinition::new(name.clone()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a selection is either exactly the known requested names, or
    /// an error naming every unknown one.
    #[test]
    fn property_selection_is_all_or_nothing(
        declared in proptest::collection::btree_set("[a-e]", 0..5),
        requested in proptest::collection::vec("[a-g]", 0..6),
    ) {
        let declared: Vec<String> = declared.into_iter().collect();
        let ws = workspace(&declared);

        let unknown: Vec<&String> = requested.iter().filter(|r| !declared.contains(r)).collect();

        match select_from_list(&ws, &requested) {
            Ok(selection) => {
                prop_assert!(unknown.is_empty());
                let got: Vec<&str> = selection.iter().collect();
                let expected: Vec<&str> = declared
                    .iter()
                    .map(String::as_str)
                    .filter(|d| requested.iter().any(|r| r == d))
                    .collect();
                prop_assert_eq!(got, expected);
            }
            Err(WsverError::UnknownProject { names }) => {
                prop_assert!(!unknown.is_empty());
                for name in unknown {
                    prop_assert!(names.contains(name));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}
