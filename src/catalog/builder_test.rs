use super::*;
use crate::sample::{AuxiliaryFileKind, SampleFactory, SampleMetadata};
use crate::test_support::{candidate, StubView};

fn names(samples: &[Arc<SampleDescriptor>]) -> Vec<&str> {
    samples.iter().map(|s| s.name()).collect()
}

fn tree_names(tree: &SearchableTree) -> Vec<&str> {
    tree.sub_trees().map(|t| t.name()).collect()
}

// ========================================
// category_from_namespace tests
// ========================================

#[test]
fn test_category_uses_last_rust_path_segment() {
    assert_eq!(category_from_namespace("samples::GeometryEngine"), "GeometryEngine");
}

#[test]
fn test_category_uses_last_dotted_segment() {
    assert_eq!(
        category_from_namespace("ArcGISRuntime.Samples.Network_Analysis"),
        "Network Analysis"
    );
}

#[test]
fn test_category_replaces_every_underscore() {
    assert_eq!(category_from_namespace("samples::Graphics_Overlay_Basics"), "Graphics Overlay Basics");
}

#[test]
fn test_category_single_segment() {
    assert_eq!(category_from_namespace("Maps"), "Maps");
}

#[test]
fn test_category_trailing_separator_is_empty() {
    assert_eq!(category_from_namespace("samples::"), "");
}

// ========================================
// make_descriptor tests
// ========================================

#[test]
fn test_candidate_without_metadata_is_skipped() {
    let c = SampleCandidate::new("samples::Maps", SampleFactory::of::<StubView>());
    assert!(make_descriptor(c).unwrap().is_none());
}

#[test]
fn test_blank_name_is_error() {
    let c = candidate("samples::Maps", "   ");
    assert!(matches!(make_descriptor(c), Err(GalleryError::InvalidMetadata(_))));
}

#[test]
fn test_blank_category_is_error() {
    let c = candidate("samples::", "Orphan");
    assert!(matches!(make_descriptor(c), Err(GalleryError::InvalidMetadata(_))));
}

#[test]
fn test_invalid_offline_data_id_is_error() {
    let c = candidate("samples::Data", "Sync").with_offline_data(["../etc"]);
    assert!(matches!(make_descriptor(c), Err(GalleryError::InvalidMetadata(_))));
}

#[test]
fn test_optional_metadata_defaults_to_empty() {
    let d = make_descriptor(candidate("samples::Maps", "Plain")).unwrap().unwrap();
    assert!(d.offline_data_ids().is_empty());
    assert!(d.auxiliary_files().is_empty());
    assert_eq!(d.path(), None);
    assert_eq!(d.image(), None);
}

#[test]
fn test_optional_metadata_is_carried_over() {
    let c = candidate("samples::Data", "Edit And Sync Features")
        .with_offline_data(["3f1bbf0ec70b409a975f5c91f363fe7d"])
        .with_auxiliary_files(AuxiliaryFileKind::Class, ["sync_helper.rs"])
        .with_auxiliary_files(AuxiliaryFileKind::Xaml, ["EditAndSyncFeatures.xaml"])
        .with_path("src/samples/data/edit_and_sync_features.rs")
        .with_image("edit_and_sync.png");

    let d = make_descriptor(c).unwrap().unwrap();

    assert_eq!(d.category(), "Data");
    assert_eq!(d.offline_data_ids(), ["3f1bbf0ec70b409a975f5c91f363fe7d".to_string()]);
    assert_eq!(d.auxiliary_files().len(), 2);
    assert_eq!(d.auxiliary_files_of(AuxiliaryFileKind::Class), vec!["sync_helper.rs"]);
    assert_eq!(d.path(), Some("src/samples/data/edit_and_sync_features.rs"));
    assert_eq!(d.image(), Some("edit_and_sync.png"));
}

#[test]
fn test_metadata_fields_are_copied() {
    let c = SampleCandidate::new("samples::GeometryEngine", SampleFactory::of::<StubView>())
        .with_metadata(
            SampleMetadata::new("Convex Hull", "Encloses points.", "Tap the map.")
                .with_tags(["Analysis", "ConvexHull"]),
        );

    let d = make_descriptor(c).unwrap().unwrap();

    assert_eq!(d.name(), "Convex Hull");
    assert_eq!(d.description(), "Encloses points.");
    assert_eq!(d.instructions(), "Tap the map.");
    assert_eq!(d.tags(), ["Analysis".to_string(), "ConvexHull".to_string()]);
}

// ========================================
// build_catalog tests
// ========================================

#[test]
fn test_build_end_to_end_with_malformed_candidate() {
    let candidates = vec![
        candidate("samples::Maps", "Search Portal Maps"),
        candidate("samples::Analysis", "Convex Hull"),
        // メタデータなし
        SampleCandidate::new("samples::Analysis", SampleFactory::of::<StubView>()),
    ];

    let built = build_catalog(&candidates);

    assert_eq!(built.samples.len(), 2);
    assert_eq!(tree_names(&built.tree), vec!["Analysis", "Maps"]);
    assert_eq!(built.tree.name(), ROOT_NAME);
}

#[test]
fn test_build_skips_invalid_candidates_and_keeps_the_rest() {
    let candidates = vec![
        candidate("samples::Maps", ""),
        candidate("samples::", "No Category"),
        candidate("samples::Maps", "Valid"),
    ];

    let built = build_catalog(&candidates);

    assert_eq!(names(&built.samples), vec!["Valid"]);
}

#[test]
fn test_build_skips_duplicate_name_in_same_category() {
    let candidates = vec![
        candidate("samples::Maps", "Overview"),
        SampleCandidate::new("samples::Maps", SampleFactory::of::<StubView>())
            .with_metadata(SampleMetadata::new("overview", "Second registration.", "")),
        candidate("samples::Layers", "Overview"),
    ];

    let built = build_catalog(&candidates);

    assert_eq!(built.samples.len(), 2);
    let maps = built.tree.find_child("Maps").unwrap();
    assert_eq!(maps.sample_count(), 1);
    let kept = maps.samples().next().unwrap();
    assert_eq!(kept.name(), "Overview");
    assert_eq!(kept.description(), "Overview sample");
    assert_eq!(built.tree.find_child("Layers").unwrap().sample_count(), 1);
}

#[test]
fn test_build_empty_source() {
    let built = build_catalog(&Vec::<SampleCandidate>::new());
    assert!(built.samples.is_empty());
    assert!(built.tree.items().is_empty());
}

#[test]
fn test_samples_sorted_by_category_then_name_case_insensitive() {
    let candidates = vec![
        candidate("samples::Maps", "beta"),
        candidate("samples::Layers", "WMTS Layer"),
        candidate("samples::Maps", "Alpha"),
        candidate("samples::Maps", "charlie"),
    ];

    let built = build_catalog(&candidates);

    assert_eq!(names(&built.samples), vec!["WMTS Layer", "Alpha", "beta", "charlie"]);
}

#[test]
fn test_category_order_is_case_sensitive() {
    // 大文字は小文字より前（序数比較）
    let candidates = vec![
        candidate("samples::analysis", "A"),
        candidate("samples::Maps", "B"),
    ];

    let built = build_catalog(&candidates);

    assert_eq!(tree_names(&built.tree), vec!["Maps", "analysis"]);
    assert_eq!(names(&built.samples), vec!["B", "A"]);
}

#[test]
fn test_tree_groups_each_category_once() {
    let candidates = vec![
        candidate("samples::Maps", "One"),
        candidate("other.path.Maps", "Two"),
        candidate("samples::Data", "Three"),
    ];

    let built = build_catalog(&candidates);

    assert_eq!(tree_names(&built.tree), vec!["Data", "Maps"]);
    let maps = built.tree.find_child("Maps").unwrap();
    let in_maps: Vec<&str> = maps.samples().map(|s| s.name()).collect();
    assert_eq!(in_maps, vec!["One", "Two"]);
    assert_eq!(maps.sub_trees().count(), 0);
}

#[test]
fn test_tree_shares_descriptors_with_sample_list() {
    let candidates = vec![candidate("samples::Maps", "Shared")];

    let built = build_catalog(&candidates);

    let from_tree = built.tree.all_samples()[0];
    assert!(Arc::ptr_eq(from_tree, &built.samples[0]));
}
