use super::*;
use crate::config::{
    model::{FrameGeometry, ImageAnimation, ImageFrame, Passthrough},
    screen::ScreenName,
};

fn image_entry(name: ScreenName, file: &str) -> ScreenEntry {
    ScreenEntry::single_image(
        name,
        ImageFrame {
            geometry: FrameGeometry {
                h: 240u32.into(),
                ..FrameGeometry::default()
            },
            file: file.to_string(),
            animation: ImageAnimation::Slideshow,
            duration: Some(1000u32.into()),
            count: Some(4u32.into()),
            animation_loop: Some(true),
            extra: Passthrough::new(),
        },
    )
}

fn doc_with(entries: Vec<ScreenEntry>) -> ConfigDocument {
    let mut settings = Passthrough::new();
    settings.insert("lcmBrightness".to_string(), serde_json::json!(80));
    settings.insert("sysid".to_string(), serde_json::json!("a575"));
    ConfigDocument {
        screens: entries,
        settings,
    }
}

#[test]
fn replaces_existing_entry_and_keeps_others() {
    let doc = doc_with(vec![
        image_entry(ScreenName::Welcome, "old.png"),
        image_entry(ScreenName::Offline, "offline.png"),
    ]);
    let new_entry = image_entry(ScreenName::Welcome, "new.png");

    let merged = merge_screen(&doc, new_entry.clone());

    assert_eq!(merged.screens.len(), 2);
    assert_eq!(merged.screens[0], doc.screens[1]);
    assert_eq!(merged.screens[1], new_entry);
    assert_eq!(merged.settings, doc.settings);
    merged.validate().unwrap();
}

#[test]
fn inserts_missing_entry_at_end() {
    let doc = doc_with(vec![
        image_entry(ScreenName::Offline, "offline.png"),
        image_entry(ScreenName::Pairing, "pairing.png"),
    ]);
    let merged = merge_screen(&doc, image_entry(ScreenName::Talking, "talk.png"));
    let names: Vec<_> = merged.screens.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![ScreenName::Offline, ScreenName::Pairing, ScreenName::Talking]
    );
}

#[test]
fn merge_is_idempotent() {
    let doc = doc_with(vec![
        image_entry(ScreenName::Pairing, "pairing.png"),
        image_entry(ScreenName::Welcome, "old.png"),
        image_entry(ScreenName::Offline, "offline.png"),
    ]);
    let entry = image_entry(ScreenName::Welcome, "new.png");

    let once = merge_screen(&doc, entry.clone());
    let twice = merge_screen(&once, entry);
    assert_eq!(once, twice);
}

#[test]
fn input_document_is_left_untouched() {
    let doc = doc_with(vec![image_entry(ScreenName::Welcome, "old.png")]);
    let before = doc.clone();
    let _ = merge_screen(&doc, image_entry(ScreenName::Welcome, "new.png"));
    assert_eq!(doc, before);
}

#[test]
fn untouched_entries_keep_unknown_fields_and_raw_numbers() {
    let raw = serde_json::json!({
        "screens": [
            {
                "name": "OFFLINE",
                "frames": [{
                    "images": [{
                        "x": 10.5, "y": 0, "w": 0, "h": 240,
                        "horizontal": "center", "vertical": "middle",
                        "file": "offline.png", "animation": "breathing",
                        "duration": 750.25, "opacity": 50
                    }]
                }]
            },
            { "name": "WELCOME", "frames": [] }
        ],
        "sysid": "a575"
    });
    let doc: ConfigDocument = serde_json::from_value(raw.clone()).unwrap();

    let merged = merge_screen(&doc, image_entry(ScreenName::Welcome, "new.png"));
    let out = serde_json::to_value(&merged).unwrap();

    assert_eq!(out["screens"][0], raw["screens"][0]);
    assert_eq!(out["screens"][1]["frames"][0]["images"][0]["file"], "new.png");
    assert_eq!(out["sysid"], "a575");
}
