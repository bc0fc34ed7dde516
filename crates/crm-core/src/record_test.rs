use super::*;

fn headers(names: &[&str]) -> StringRecord {
    StringRecord::from(names.to_vec())
}

#[test]
fn test_stage_round_trips_every_name() {
    for stage in Stage::ALL {
        assert_eq!(Stage::from_name(stage.as_str()), Some(stage));
    }
    assert_eq!(Stage::default(), Stage::NewLead);
}

#[test]
fn test_stage_names_are_case_sensitive() {
    assert_eq!(Stage::from_name("New_Lead"), None);
    assert_eq!(Stage::from_name(" new_lead"), None);
    assert_eq!(Stage::from_name("prospect"), None);
    assert_eq!(Stage::from_name(""), None);
}

#[test]
fn test_temperature_level_lookup() {
    assert_eq!(TemperatureLevel::from_name("hot"), Some(TemperatureLevel::Hot));
    assert_eq!(TemperatureLevel::from_name("cold"), Some(TemperatureLevel::Cold));
    assert_eq!(TemperatureLevel::from_name("HOT"), None);
    assert_eq!(TemperatureLevel::from_name("lukewarm"), None);
    assert_eq!(TemperatureLevel::default().as_str(), "neutral");
}

#[test]
fn test_enum_serde_names_match_database_names() {
    let stage: Stage = serde_yaml::from_str("high_intent").unwrap();
    assert_eq!(stage, Stage::HighIntent);
    let level: TemperatureLevel = serde_yaml::from_str("warm").unwrap();
    assert_eq!(level, TemperatureLevel::Warm);
}

#[test]
fn test_insert_columns_shape() {
    assert_eq!(INSERT_COLUMNS.len(), 14);
    assert_eq!(INSERT_COLUMNS[0], "user_id");
    assert_eq!(INSERT_COLUMNS[13], "investment_profile");
}

#[test]
fn test_column_map_reports_missing_and_present() {
    let err = ColumnMap::from_headers(&headers(&["name", "phone", "source"])).unwrap_err();
    match err {
        CoreError::MissingColumns {
            required,
            missing,
            present,
        } => {
            assert_eq!(required, vec!["name", "source", "stage"]);
            assert_eq!(missing, vec!["stage"]);
            assert_eq!(present, vec!["name", "phone", "source"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_column_map_is_case_sensitive() {
    let err = ColumnMap::from_headers(&headers(&["Name", "source", "stage"])).unwrap_err();
    assert!(err.to_string().contains("Missing required columns: name"));
}

#[test]
fn test_from_row_defaults_absent_optional_columns() {
    let columns = ColumnMap::from_headers(&headers(&["name", "source", "stage"])).unwrap();
    let record = ClientRecord::from_row(&columns, &headers(&["Ann", "referral", "nurturing"]));

    assert_eq!(record.name, "Ann");
    assert_eq!(record.source, "referral");
    assert_eq!(record.stage, "nurturing");
    assert_eq!(record.temperature_score, "50");
    assert_eq!(record.temperature_level, "neutral");
    assert_eq!(record.phone, "");
    assert_eq!(record.investment_profile, "");
}

#[test]
fn test_from_row_keeps_empty_cells_of_present_columns() {
    let columns = ColumnMap::from_headers(&headers(&[
        "stage",
        "temperature_score",
        "name",
        "temperature_level",
        "source",
    ]))
    .unwrap();
    let record =
        ClientRecord::from_row(&columns, &headers(&["deposited", "", "Bo", "", "ads"]));

    assert_eq!(record.name, "Bo");
    assert_eq!(record.stage, "deposited");
    assert_eq!(record.temperature_score, "");
    assert_eq!(record.temperature_level, "");
}

#[test]
fn test_from_row_short_row_uses_absent_column_defaults() {
    let columns = ColumnMap::from_headers(&headers(&[
        "name",
        "source",
        "stage",
        "phone",
        "temperature_score",
        "temperature_level",
    ]))
    .unwrap();
    let record = ClientRecord::from_row(&columns, &headers(&["Cy", "web", "nurturing"]));

    assert_eq!(record.name, "Cy");
    assert_eq!(record.phone, "");
    assert_eq!(record.temperature_score, "50");
    assert_eq!(record.temperature_level, "neutral");
}

#[test]
fn test_from_row_short_row_missing_required_cell_is_empty() {
    let columns = ColumnMap::from_headers(&headers(&["name", "source", "stage"])).unwrap();
    let record = ClientRecord::from_row(&columns, &headers(&["Di", "web"]));

    assert_eq!(record.source, "web");
    assert_eq!(record.stage, "");
}

#[test]
fn test_from_row_ignores_unknown_columns_and_last_duplicate_wins() {
    let columns =
        ColumnMap::from_headers(&headers(&["name", "notes", "source", "stage", "name"])).unwrap();
    let record = ClientRecord::from_row(
        &columns,
        &headers(&["first", "ignored", "web", "new_lead", "second"]),
    );

    assert_eq!(record.name, "second");
    assert_eq!(record.source, "web");
}
