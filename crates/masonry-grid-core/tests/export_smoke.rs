use masonry_grid_core::prelude::*;

#[test]
fn export_json_smoke() {
    let specs = vec![
        ItemSpec::new("a", 32.0, 8.0),
        ItemSpec::new("b", 10.0, 0.0),
        ItemSpec::new("", 12.0, 0.0),
    ];
    let params = LayoutParameters::builder()
        .column_count(2)
        .cell_padding(2.0)
        .content_width(100.0)
        .build();
    let out = compute_layout(specs.len(), &params, &mut ItemSpecs(&specs)).expect("layout");
    let meta = masonry_grid_core::Meta::for_params(&params);

    let list = masonry_grid_core::to_json(&out, &meta);
    let obj = list.as_object().expect("object");
    assert!(obj.contains_key("items"));
    assert!(obj.contains_key("size"));
    assert!(obj.contains_key("meta"));
    assert_eq!(list["items"][0]["primaryHeight"], 32.0);
    assert_eq!(list["meta"]["column_count"], 2);

    let keys: Vec<&str> = specs.iter().map(|s| s.key.as_str()).collect();
    let keyed = masonry_grid_core::to_json_keyed(&out, keys.as_slice(), &meta);
    let items = keyed["items"].as_object().expect("object");
    assert_eq!(items.len(), 3);
    assert_eq!(items["b"]["column"], 1);
    assert_eq!(items["2"]["frame"]["y"], 46.0);

    // The result itself round-trips through serde.
    let text = serde_json::to_string(&out).expect("serialize");
    let back: LayoutResult = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, out);
}

#[test]
fn duplicate_keys_export_every_item() {
    let specs = vec![
        ItemSpec::new("a", 10.0, 0.0),
        ItemSpec::new("a", 20.0, 0.0),
        ItemSpec::new("b", 30.0, 0.0),
    ];
    let params = LayoutParameters::new(2, 0.0, 100.0);
    let out = compute_layout(specs.len(), &params, &mut ItemSpecs(&specs)).expect("layout");
    let meta = masonry_grid_core::Meta::for_params(&params);

    let keys: Vec<&str> = specs.iter().map(|s| s.key.as_str()).collect();
    let keyed = masonry_grid_core::to_json_keyed(&out, keys.as_slice(), &meta);
    let items = keyed["items"].as_object().expect("object");
    assert_eq!(items.len(), out.len());
    assert_eq!(items["a"]["primaryHeight"], 10.0);
    assert_eq!(items["a#1"]["primaryHeight"], 20.0);
    assert_eq!(items["b"]["primaryHeight"], 30.0);
}
