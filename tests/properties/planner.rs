//! Property tests for mutation planning.

use proptest::prelude::*;

use wsver::{
    plan_mutations, ProjectDefinition, SelectionResult, TargetDefinition, VersioningMode,
    WorkspaceDefinition, WorkspaceEdit,
};

fn workspace_strategy() -> impl Strategy<Value = WorkspaceDefinition> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..8).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .fold(WorkspaceDefinition::new(1), |ws, (i, name)| {
                let mut project = ProjectDefinition::new(format!("libs/{name}"));
                if i % 2 == 0 {
                    project = project.with_target("build", TargetDefinition::new("x:build"));
                }
                ws.with_project(name, project)
            })
    })
}

/// A workspace plus a non-empty subset of its project names
fn workspace_and_selection() -> impl Strategy<Value = (WorkspaceDefinition, Vec<String>)> {
    workspace_strategy().prop_flat_map(|ws| {
        let names: Vec<String> = ws.project_names().map(str::to_string).collect();
        let len = names.len();
        (
            Just(ws),
            proptest::sample::subsequence(names, 1..=len).prop_shuffle(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: independent mode changes exactly the selected projects, and
    /// leaves their other targets in place.
    #[test]
    fn property_independent_touches_only_selection((ws, selected) in workspace_and_selection()) {
        let selection: SelectionResult = selected.iter().map(String::as_str).collect();
        let edits = plan_mutations(&ws, &VersioningMode::Independent(selection)).unwrap();

        prop_assert_eq!(edits.len(), selected.len());

        let mut applied = ws.clone();
        let replaced = edits.apply(&mut applied);
        prop_assert!(replaced.is_empty());
        prop_assert_eq!(applied.projects.len(), ws.projects.len());

        for (name, before) in &ws.projects {
            let after = &applied.projects[name];
            if selected.contains(name) {
                prop_assert!(after.has_target("version"));
                for (target, definition) in before.targets() {
                    prop_assert_eq!(after.target(target), Some(definition));
                }
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// PROPERTY: edits come out in workspace order, whatever the selection order.
    #[test]
    fn property_edits_follow_workspace_order((ws, selected) in workspace_and_selection()) {
        let selection: SelectionResult = selected.iter().map(String::as_str).collect();
        let edits = plan_mutations(&ws, &VersioningMode::Independent(selection)).unwrap();

        let touched: Vec<&str> = edits.touched_projects().collect();
        let expected: Vec<&str> = ws
            .project_names()
            .filter(|name| selected.iter().any(|s| s == name))
            .collect();
        prop_assert_eq!(touched, expected);
    }

    /// PROPERTY: synchronized mode always yields one `workspace` project,
    /// whatever the workspace declares.
    #[test]
    fn property_synchronized_is_constant(ws in workspace_strategy()) {
        let edits = plan_mutations(&ws, &VersioningMode::Synchronized).unwrap();

        prop_assert_eq!(edits.len(), 1);
        let is_workspace_project = matches!(
            edits.iter().next(),
            Some(WorkspaceEdit::AddProject { name, .. }) if name == "workspace"
        );
        prop_assert!(is_workspace_project);
        prop_assert_eq!(
            &edits,
            &plan_mutations(&WorkspaceDefinition::new(1), &VersioningMode::Synchronized).unwrap()
        );
    }

    /// PROPERTY: applying the same plan twice gives the same workspace.
    #[test]
    fn property_apply_is_idempotent((ws, selected) in workspace_and_selection()) {
        let selection: SelectionResult = selected.iter().map(String::as_str).collect();
        let edits = plan_mutations(&ws, &VersioningMode::Independent(selection)).unwrap();

        let mut once = ws.clone();
        edits.apply(&mut once);
        let mut twice = once.clone();
        let replaced = edits.apply(&mut twice);

        prop_assert_eq!(twice, once);
        prop_assert_eq!(replaced.len(), edits.len());
    }
}
