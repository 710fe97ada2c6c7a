use super::*;
use crate::sample::SampleMetadata;
use crate::test_support::candidate;

fn catalog() -> SampleCatalog {
    let candidates = vec![
        candidate("samples::GeometryEngine", "Geodesic Operations"),
        candidate("samples::GeometryEngine", "Convex Hull"),
        candidate("samples::Layers", "WMTS Layer"),
        candidate("samples::Map", "Search Portal Maps"),
        candidate("samples::Data", "Edit And Sync Features"),
    ];
    SampleCatalog::build(&candidates)
}

fn names(tree: &SearchableTree) -> Vec<&str> {
    tree.all_samples().iter().map(|s| s.name()).collect()
}

// ========================================
// build / accessor tests
// ========================================

#[test]
fn test_build_exposes_sorted_samples_and_categories() {
    let catalog = catalog();

    assert_eq!(catalog.len(), 5);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.categories(), vec!["Data", "GeometryEngine", "Layers", "Map"]);
    let geometry: Vec<&str> = catalog.samples()[1..3].iter().map(|s| s.name()).collect();
    assert_eq!(geometry, vec!["Convex Hull", "Geodesic Operations"]);
}

#[test]
fn test_empty_catalog() {
    let catalog = SampleCatalog::build(&Vec::<SampleCandidate>::new());
    assert!(catalog.is_empty());
    assert_eq!(catalog.full_tree().name(), ROOT_NAME);
    assert!(catalog.search("").is_none());
}

// ========================================
// search tests
// ========================================

#[test]
fn test_search_by_name_keeps_only_matching_category() {
    let catalog = catalog();

    let tree = catalog.search("convex").unwrap();

    assert_eq!(tree.name(), ROOT_NAME);
    let categories: Vec<&str> = tree.sub_trees().map(|t| t.name()).collect();
    assert_eq!(categories, vec!["GeometryEngine"]);
    assert_eq!(names(&tree), vec!["Convex Hull"]);
}

#[test]
fn test_search_by_tag() {
    let candidates = vec![
        candidate("samples::Layers", "WMTS Layer"),
        SampleCandidate::new("samples::Map", crate::sample::SampleFactory::of::<crate::test_support::StubView>())
            .with_metadata(SampleMetadata::new("Open Map", "Opens a map.", "").with_tags(["WebMap"])),
    ];
    let catalog = SampleCatalog::build(&candidates);

    let tree = catalog.search("webmap").unwrap();

    assert_eq!(names(&tree), vec!["Open Map"]);
}

#[test]
fn test_search_by_description() {
    let catalog = catalog();
    let tree = catalog.search("portal maps sample").unwrap();
    assert_eq!(names(&tree), vec!["Search Portal Maps"]);
}

#[test]
fn test_search_without_match_is_none() {
    assert!(catalog().search("raster").is_none());
}

#[test]
fn test_search_blank_text_returns_everything() {
    let catalog = catalog();
    let tree = catalog.search("   ").unwrap();
    assert_eq!(&tree, catalog.full_tree());
}

#[test]
fn test_search_does_not_change_full_tree() {
    let catalog = catalog();
    let before = catalog.full_tree().clone();

    let _ = catalog.search("wmts");

    assert_eq!(catalog.full_tree(), &before);
}

// ========================================
// find tests
// ========================================

#[test]
fn test_find_by_name_case_insensitive() {
    let catalog = catalog();
    let found = catalog.find("convex hull").unwrap();
    assert_eq!(found.qualified_name(), "GeometryEngine/Convex Hull");
}

#[test]
fn test_find_by_qualified_name() {
    let catalog = catalog();
    let found = catalog.find("layers/WMTS Layer").unwrap();
    assert_eq!(found.name(), "WMTS Layer");
}

#[test]
fn test_find_unknown_is_not_found() {
    let catalog = catalog();
    assert!(matches!(
        catalog.find("Nope"),
        Err(GalleryError::SampleNotFound(name)) if name == "Nope"
    ));
}

#[test]
fn test_find_same_name_in_two_categories_is_ambiguous() {
    let candidates = vec![
        candidate("samples::Maps", "Overview"),
        candidate("samples::Layers", "Overview"),
    ];
    let catalog = SampleCatalog::build(&candidates);

    match catalog.find("overview") {
        Err(GalleryError::AmbiguousSample { candidates, .. }) => {
            assert_eq!(candidates, vec!["Layers/Overview", "Maps/Overview"]);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert_eq!(catalog.find("Maps/Overview").unwrap().category(), "Maps");
}

#[test]
fn test_find_duplicate_registration_resolves_to_first() {
    let candidates = vec![
        candidate("samples::Maps", "Overview"),
        candidate("samples::Maps", "Overview"),
    ];
    let catalog = SampleCatalog::build(&candidates);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.find("Overview").unwrap().qualified_name(), "Maps/Overview");
}
