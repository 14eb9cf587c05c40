use super::*;

#[test]
fn parses_known_names() {
    assert_eq!("WELCOME".parse::<ScreenName>().unwrap(), ScreenName::Welcome);
    assert_eq!(
        "NFC_REGISTERED_OTHER_SITE".parse::<ScreenName>().unwrap(),
        ScreenName::NfcRegisteredOtherSite
    );
}

#[test]
fn rejects_unknown_and_differently_cased_names() {
    let err = "welcome".parse::<ScreenName>().unwrap_err();
    assert!(matches!(err, LcmError::Input(_)));
    assert!("NOT_A_SCREEN".parse::<ScreenName>().is_err());
}

#[test]
fn wire_names_are_unique_and_round_trip() {
    let mut seen = std::collections::HashSet::new();
    for screen in ScreenName::ALL {
        assert!(seen.insert(screen.as_str()));
        assert_eq!(screen.as_str().parse::<ScreenName>().unwrap(), *screen);
        let json = serde_json::to_string(screen).unwrap();
        assert_eq!(json, format!("\"{}\"", screen.as_str()));
    }
    assert_eq!(seen.len(), 49);
}

#[test]
fn deserializing_unknown_name_fails() {
    assert!(serde_json::from_str::<ScreenName>("\"LOBBY\"").is_err());
}
