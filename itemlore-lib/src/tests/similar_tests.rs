use super::*;

fn opts() -> SimilarityOptions {
    SimilarityOptions::new("installX")
}

fn legacy_opts() -> SimilarityOptions {
    SimilarityOptions::new("installX").legacy_sub_types(true)
}

fn sword() -> ItemRecord {
    ItemRecord::new("DIAMOND_SWORD")
        .with_display_name("§bFrost Edge")
        .with_lore(["Forged in the north", "Unbreakable"])
        .with_tag("installX", "abc")
}

#[test]
fn reflexive_for_well_formed_items() {
    let options = opts();
    let item = sword();
    assert!(options.is_similar(Some(&item), Some(&item)));

    let bare = ItemRecord::new("ARROW");
    assert!(options.is_similar(Some(&bare), Some(&bare)));
}

#[test]
fn missing_reference_on_either_side_is_not_similar() {
    let options = opts();
    let item = sword();
    assert!(!options.is_similar(None, Some(&item)));
    assert!(!options.is_similar(Some(&item), None));
    assert!(!options.is_similar(None, None));
}

#[test]
fn different_type_is_not_similar() {
    let options = opts();
    let a = ItemRecord::new("DIAMOND_SWORD");
    let b = ItemRecord::new("IRON_SWORD");
    assert!(!options.is_similar(Some(&a), Some(&b)));
}

#[test]
fn one_sided_metadata_is_not_similar() {
    let options = opts();
    let plain = ItemRecord::new("DIAMOND_SWORD");
    let named = ItemRecord::new("DIAMOND_SWORD").with_display_name("Frost Edge");
    assert!(!options.is_similar(Some(&plain), Some(&named)));
}

#[test]
fn sub_types_gate_only_in_legacy_mode() {
    let a = ItemRecord::new("WOOL").with_sub_type(3);
    let b = ItemRecord::new("WOOL").with_sub_type(5);

    assert!(!legacy_opts().is_similar(Some(&a), Some(&b)));
    assert!(opts().is_similar(Some(&a), Some(&b)));
}

#[test]
fn exempt_type_ignores_sub_types_in_legacy_mode() {
    // A drawn bow's sub-type is mechanically generated
    let a = ItemRecord::new("BOW").with_sub_type(12);
    let b = ItemRecord::new("BOW").with_sub_type(384);
    assert!(legacy_opts().is_similar(Some(&a), Some(&b)));
}

#[test]
fn exemption_table_is_extensible() {
    let options = legacy_opts().exempt_sub_type("FISHING_ROD");
    let a = ItemRecord::new("FISHING_ROD").with_sub_type(1);
    let b = ItemRecord::new("FISHING_ROD").with_sub_type(7);
    assert!(options.is_similar(Some(&a), Some(&b)));
}

#[test]
fn display_names_compare_without_color_markup_or_case() {
    let options = opts();
    let a = ItemRecord::new("DIAMOND_SWORD").with_display_name("§bFrost Edge");
    let b = ItemRecord::new("DIAMOND_SWORD").with_display_name("&bfrost edge");
    assert!(options.is_similar(Some(&a), Some(&b)));

    let c = ItemRecord::new("DIAMOND_SWORD").with_display_name("Frost Fang");
    assert!(!options.is_similar(Some(&a), Some(&c)));
}

#[test]
fn lore_must_match_element_wise() {
    let options = opts();
    let a = ItemRecord::new("BOOK").with_lore(["line one", "line two"]);
    let b = ItemRecord::new("BOOK").with_lore(["line one", "line two"]);
    let c = ItemRecord::new("BOOK").with_lore(["line two", "line one"]);
    let d = ItemRecord::new("BOOK").with_lore(["line one"]);

    assert!(options.is_similar(Some(&a), Some(&b)));
    assert!(!options.is_similar(Some(&a), Some(&c)));
    assert!(!options.is_similar(Some(&a), Some(&d)));
}

#[test]
fn absent_lore_and_empty_lore_are_distinct() {
    let options = opts();
    let none = ItemRecord::new("BOOK").with_metadata(true);
    let empty = ItemRecord::new("BOOK").with_lore(Vec::<String>::new());
    assert!(!options.is_similar(Some(&none), Some(&empty)));
}

#[test]
fn one_sided_tag_is_not_similar() {
    let options = opts();
    let tagged = ItemRecord::new("EMERALD").with_tag("installX", "abc");
    let untagged = ItemRecord::new("EMERALD");
    assert!(!options.is_similar(Some(&tagged), Some(&untagged)));
}

#[test]
fn differing_tag_values_are_not_similar() {
    let options = opts();
    let a = ItemRecord::new("EMERALD").with_tag("installX", "abc");
    let b = ItemRecord::new("EMERALD").with_tag("installX", "def");
    assert!(!options.is_similar(Some(&a), Some(&b)));
}

#[test]
fn item_suffixed_tag_key_is_checked_too() {
    let options = opts();
    let a = ItemRecord::new("EMERALD").with_tag("installX_Item", "token");
    let b = ItemRecord::new("EMERALD");
    assert!(!options.is_similar(Some(&a), Some(&b)));

    let c = ItemRecord::new("EMERALD").with_tag("installX_Item", "token");
    assert!(options.is_similar(Some(&a), Some(&c)));
}

#[test]
fn unrelated_tags_are_ignored() {
    let options = opts();
    let a = ItemRecord::new("EMERALD").with_tag("someOtherPlugin", "1");
    let b = ItemRecord::new("EMERALD").with_tag("someOtherPlugin", "2");
    assert!(options.is_similar(Some(&a), Some(&b)));
}

#[test]
fn symmetric_across_mismatch_kinds() {
    let options = legacy_opts();
    let base = sword();
    let variants = [
        ItemRecord::new("IRON_SWORD"),
        sword().with_sub_type(9),
        sword().with_display_name("Other Name"),
        sword().with_lore(["different lore"]),
        sword().with_tag("installX", "zzz"),
        ItemRecord::new("DIAMOND_SWORD"),
    ];

    for other in &variants {
        assert_eq!(
            options.is_similar(Some(&base), Some(other)),
            options.is_similar(Some(other), Some(&base)),
            "asymmetric result for {other:?}"
        );
    }
}

#[test]
fn options_deserialize_with_defaults() {
    let options: SimilarityOptions =
        serde_json::from_str(r#"{ "install_key": "installX", "legacy_sub_types": true }"#).unwrap();
    assert!(options.legacy_sub_types);
    assert_eq!(options.install_key, "installX");
    assert_eq!(options.sub_type_exempt, ["BOW"]);
}
