//! Unit tests for the catalog listing command.

use super::helpers::Workspace;
use super::*;
use crate::catalog::{CatalogConfig, list_catalog};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

#[rstest]
fn converting_without_catalog_errors() {
    match CatalogConfig::try_from(CatalogArgs::default()) {
        Err(CliError::MissingArgument { field, env }) => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATALOG_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn lists_names_in_catalog_order(workspace: Workspace) {
    let config = CatalogConfig {
        catalog: workspace.catalog(),
    };
    let mut stdout = Vec::new();
    list_catalog(&config, &mut stdout).expect("catalog should list");
    let listing = String::from_utf8(stdout).expect("stdout utf-8");
    let names: Vec<_> = listing.lines().collect();
    assert_eq!(names.len(), 21);
    assert_eq!(names.first(), Some(&"Mojito"));
    assert_eq!(names.last(), Some(&"Tequila Sunrise"));
}

#[rstest]
fn missing_catalogs_are_reported(workspace: Workspace) {
    let config = CatalogConfig {
        catalog: workspace.path("absent.json"),
    };
    let mut stdout = Vec::new();
    match list_catalog(&config, &mut stdout) {
        Err(CliError::MissingSourceFile { field, .. }) => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn invalid_records_name_the_cocktail(workspace: Workspace) {
    let catalog = workspace.write(
        "invalid.json",
        r#"{"cocktails": [{"name": "Bramble", "base_spirit": "gin",
            "flavor_tags": ["sweet"], "skill_required": "beginner",
            "strength_rating": 14, "occasion_tags": ["party"],
            "season_tags": ["autumn"]}]}"#,
    );
    let mut stdout = Vec::new();
    let err = list_catalog(&CatalogConfig { catalog }, &mut stdout).expect_err("invalid strength");
    assert!(matches!(err, CliError::LoadCatalog(_)));
    assert!(err.to_string().contains("Bramble"));
}
