use super::*;

#[test]
fn normalize_rel_path_cleans_separators_and_dots() {
    assert_eq!(normalize_rel_path("a/./b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("frames\\walk").unwrap(), "frames/walk");
    assert_eq!(normalize_rel_path("wave.gif/").unwrap(), "wave.gif");
}

#[test]
fn normalize_rel_path_rejects_escapes() {
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../secret.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn default_layout_paths() {
    let ws = Workspace::default();
    assert_eq!(
        ws.animation_source("wave.gif").unwrap(),
        PathBuf::from("src/animations/wave.gif")
    );
    assert_eq!(ws.lcm_config_path(), PathBuf::from("build/ubnt_lcm_gui.json"));
    assert_eq!(
        ws.sounds_config_path(),
        PathBuf::from("build/ubnt_sounds_leds.conf")
    );
}

#[test]
fn rooted_workspace_prefixes_every_root() {
    let ws = Workspace::rooted_at("/tmp/project");
    assert_eq!(ws.chimes_root, PathBuf::from("/tmp/project/src/chimes"));
    assert_eq!(ws.output_root, PathBuf::from("/tmp/project/build"));
    assert!(matches!(
        ws.lcm_config_source(),
        ConfigSource::PriorOrPackaged { prior, .. } if prior == ws.lcm_config_path()
    ));
}
