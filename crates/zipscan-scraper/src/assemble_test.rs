use super::*;

fn radius_query() -> RadiusQuery {
    RadiusQuery {
        lower_radius: 0,
        upper_radius: 5,
        base_zipcode: "92101".to_owned(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn county_fields(zips: &[&str], cities: &[&str], counties: &[&str]) -> ExtractedFields {
    ExtractedFields::from_fields(vec![
        (ZIPS.to_owned(), strings(zips)),
        (CITY.to_owned(), strings(cities)),
        (COUNTY.to_owned(), strings(counties)),
    ])
}

// ---------------------------------------------------------------------------
// radius
// ---------------------------------------------------------------------------

#[test]
fn radius_emits_one_row_per_surrounding_zip_in_order() {
    let rows = assemble_radius(&radius_query(), strings(&["92103", "92102", "92103"])).unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.zip == "92101" && r.upper_radius == 5));
    let surrounding: Vec<&str> = rows.iter().map(|r| r.surrounding_zip.as_str()).collect();
    assert_eq!(surrounding, vec!["92103", "92102", "92103"]);
    assert_eq!(rows[0].radius_column(), "Zip_within_5_miles");
}

#[test]
fn radius_with_no_matches_is_empty_result_error() {
    let err = assemble_radius(&radius_query(), Vec::new()).unwrap_err();
    assert!(
        matches!(err, ScraperError::EmptyResult { ref base_zipcode, upper_radius: 5, .. } if base_zipcode == "92101"),
        "expected EmptyResult, got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// county
// ---------------------------------------------------------------------------

#[test]
fn county_rows_are_title_cased_and_stamped_with_state() {
    let fields = county_fields(
        &["92101", "90001"],
        &["san-diego", "los-angeles"],
        &["san-diego", "los-angeles"],
    );
    let rows = assemble_county(&fields, "ca").unwrap();

    assert_eq!(
        rows,
        vec![
            CountyRecord {
                city: "San Diego".to_owned(),
                state: "CA".to_owned(),
                county: "San Diego".to_owned(),
                zip: "92101".to_owned(),
            },
            CountyRecord {
                city: "Los Angeles".to_owned(),
                state: "CA".to_owned(),
                county: "Los Angeles".to_owned(),
                zip: "90001".to_owned(),
            },
        ]
    );
}

#[test]
fn county_state_is_upper_cased_regardless_of_input_case() {
    for state in ["ca", "Ca", "CA"] {
        let rows = assemble_county(&county_fields(&["1"], &["a"], &["b"]), state).unwrap();
        assert!(rows.iter().all(|r| r.state == "CA"));
    }
}

#[test]
fn county_length_mismatch_is_field_alignment_error() {
    let fields = county_fields(
        &["92101", "92102", "92103"],
        &["san-diego", "la-jolla"],
        &["san-diego", "san-diego", "san-diego"],
    );
    let err = assemble_county(&fields, "ca").unwrap_err();

    match err {
        ScraperError::FieldAlignment { lengths } => assert_eq!(
            lengths,
            vec![
                ("zips".to_owned(), 3),
                ("city".to_owned(), 2),
                ("county".to_owned(), 3),
            ]
        ),
        other => panic!("expected FieldAlignment, got: {other:?}"),
    }
}

#[test]
fn county_missing_field_counts_as_empty() {
    let fields = ExtractedFields::from_fields(vec![(ZIPS.to_owned(), strings(&["92101"]))]);
    let err = assemble_county(&fields, "ca").unwrap_err();
    assert!(matches!(err, ScraperError::FieldAlignment { .. }));
}

#[test]
fn county_with_no_rows_is_empty_table() {
    let rows = assemble_county(&county_fields(&[], &[], &[]), "ca").unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// coordinates
// ---------------------------------------------------------------------------

#[test]
fn coordinates_drop_last_match() {
    let record =
        assemble_coordinates("92101", strings(&["32.7157", "-117.1611", "99.9999"])).unwrap();

    assert_eq!(record.zip, "92101");
    assert_eq!(record.latitude, "32.7157");
    assert_eq!(record.longitude, "-117.1611");
}

#[test]
fn coordinates_keep_first_two_of_longer_lists() {
    let record =
        assemble_coordinates("92101", strings(&["1.0", "2.0", "3.0", "4.0"])).unwrap();
    assert_eq!((record.latitude.as_str(), record.longitude.as_str()), ("1.0", "2.0"));
}

#[test]
fn coordinates_with_too_few_matches_is_error() {
    let err = assemble_coordinates("92101", strings(&["32.7157", "-117.1611"])).unwrap_err();
    assert!(
        matches!(err, ScraperError::CoordinatesNotFound { found: 1, .. }),
        "expected CoordinatesNotFound, got: {err:?}"
    );

    let err = assemble_coordinates("92101", Vec::new()).unwrap_err();
    assert!(matches!(err, ScraperError::CoordinatesNotFound { found: 0, .. }));
}

// ---------------------------------------------------------------------------
// place names
// ---------------------------------------------------------------------------

#[test]
fn normalize_place_name_examples() {
    assert_eq!(normalize_place_name("san-diego"), "San Diego");
    assert_eq!(normalize_place_name("los-angeles"), "Los Angeles");
    assert_eq!(normalize_place_name("SAN-DIEGO"), "San Diego");
    assert_eq!(normalize_place_name("orange"), "Orange");
    assert_eq!(normalize_place_name("st_louis"), "St_Louis");
    assert_eq!(normalize_place_name(""), "");
}
