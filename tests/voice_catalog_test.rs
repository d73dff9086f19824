use semporna::application::services::VoiceCatalog;
use semporna::domain::EngineKind;

#[test]
fn given_known_selectors_when_resolving_then_each_maps_to_its_engine() {
    let catalog = VoiceCatalog::new();

    let cases = [
        ("male", EngineKind::GoogleTts, "default"),
        ("female", EngineKind::GoogleTts, "default"),
        ("uk_male", EngineKind::StreamElements, "Brian"),
        ("uk_female", EngineKind::StreamElements, "Amy"),
        ("indian_female", EngineKind::StreamElements, "Raveena"),
        ("spanish_male", EngineKind::StreamElements, "Enrique"),
        ("spanish_female", EngineKind::StreamElements, "Conchita"),
        ("german_male", EngineKind::StreamElements, "Hans"),
        ("german_female", EngineKind::StreamElements, "Marlene"),
        ("french_male", EngineKind::StreamElements, "Mathieu"),
        ("french_female", EngineKind::StreamElements, "Celine"),
        ("offline_male", EngineKind::Espeak, "male"),
        ("offline_female", EngineKind::Espeak, "female"),
    ];

    for (selector, engine, voice_id) in cases {
        let profile = catalog.resolve(selector);
        assert_eq!(profile.engine, engine, "selector {selector}");
        assert_eq!(profile.voice_id, voice_id, "selector {selector}");
    }
}

#[test]
fn given_unknown_selector_when_resolving_then_default_profile_is_returned() {
    let catalog = VoiceCatalog::new();

    let profile = catalog.resolve("robot_overlord");

    assert_eq!(profile.selector, "male");
    assert_eq!(profile.engine, EngineKind::GoogleTts);
}

#[test]
fn given_empty_selector_when_resolving_then_default_profile_is_returned() {
    let catalog = VoiceCatalog::new();

    assert_eq!(catalog.resolve("").selector, "male");
    assert_eq!(catalog.resolve("   ").selector, "male");
}

#[test]
fn given_padded_or_mixed_case_selector_when_resolving_then_it_still_matches() {
    let catalog = VoiceCatalog::new();

    assert_eq!(catalog.resolve("  UK_Male  ").voice_id, "Brian");
    assert_eq!(catalog.resolve("FEMALE").selector, "female");
}
