use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["petai-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_nearby_with_defaults() {
    let cli = Cli::try_parse_from(["petai-cli", "nearby", "--lat", "35.68", "--lng", "139.76"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Nearby {
            ref category,
            radius: None,
            ..
        }) if category == "all"
    ));
}

#[test]
fn parses_nearby_with_negative_coordinates_and_radius() {
    let cli = Cli::try_parse_from([
        "petai-cli",
        "nearby",
        "--lat",
        "-33.86",
        "--lng",
        "-151.2",
        "--category",
        "grooming",
        "--radius",
        "1500",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Nearby {
            lat,
            lng,
            category,
            radius,
        }) => {
            assert!((lat + 33.86).abs() < f64::EPSILON);
            assert!((lng + 151.2).abs() < f64::EPSILON);
            assert_eq!(category, "grooming");
            assert_eq!(radius, Some(1500));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn nearby_requires_both_coordinates() {
    assert!(Cli::try_parse_from(["petai-cli", "nearby", "--lat", "35.68"]).is_err());
}

#[test]
fn parses_place_command() {
    let cli = Cli::try_parse_from(["petai-cli", "place", "ChIJ-abc"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Place { ref place_id }) if place_id == "ChIJ-abc"
    ));
}

#[test]
fn parses_track_command() {
    let cli = Cli::try_parse_from([
        "petai-cli",
        "track",
        "--kind",
        "business_call_click",
        "--category",
        "veterinary",
        "--business-name",
        "Paw Clinic",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Track {
            kind: EventKind::BusinessCallClick,
            category: Some(ref c),
            business_name: Some(_),
            ref source,
        }) if c == "veterinary" && source == "cli"
    ));
}

#[test]
fn track_rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["petai-cli", "track", "--kind", "page_view"]).is_err());
}

#[test]
fn parses_stats_json_flag() {
    let cli = Cli::try_parse_from(["petai-cli", "stats", "--json"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Stats { json: true })));

    let cli = Cli::try_parse_from(["petai-cli", "stats"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Stats { json: false })));
}

#[test]
fn empty_result_message_names_category_key() {
    let origin = petai_core::Coordinate {
        lat: 35.68,
        lng: 139.76,
    };
    assert_eq!(
        places::empty_result_message(petai_core::SearchCategory::All, origin),
        "no places found near 35.68,139.76"
    );
    assert_eq!(
        places::empty_result_message(petai_core::SearchCategory::PetShop, origin),
        "no places found near 35.68,139.76 (category: pet_shop)"
    );
}
