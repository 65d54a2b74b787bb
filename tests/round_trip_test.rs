use dupini::{Config, ConfigFile, ConfigOptions, DuplicateSectionPolicy, Record};
use std::fs;

const UE3_SAMPLE: &str = r#"
; Rising Storm 2 engine settings
[URL]
Protocol=ro2
Name=Player
Map=VNTE-CuChi
LocalMap=ROEntry.ro2
Port=7777 ; game port
PeerPort=7778

[Engine.Engine]
NetworkDevice=IpDrv.TcpNetDriver
; colors used by the light complexity view
LightComplexityColors=(R=0,G=0,B=0,A=1)
LightComplexityColors=(R=0,G=255,B=0,A=1)
LightComplexityColors=(R=63,G=191,B=0,A=1)
bAllowMatureLanguage=FALSE#parental
DefaultPostProcessName=

[SystemSettings]
MaxAnisotropy=4
bUseMaxQualityMode=False

[Empty]
"#;

#[test]
fn test_round_trip_is_stable() {
    let first: Config = UE3_SAMPLE.parse().unwrap();
    let text = first.serialize();
    let second: Config = text.parse().unwrap();

    assert_eq!(first, second);
    // a second pass produces byte-identical output
    assert_eq!(second.serialize(), text);
}

#[test]
fn test_round_trip_normalizes_delimiter() {
    let config: Config = UE3_SAMPLE.parse().unwrap();
    let text = config.serialize();

    assert!(text.starts_with("# Rising Storm 2 engine settings\n\n[URL]\n"));
    assert!(text.contains("Port=7777# game port\n"));
    assert!(text.contains("bAllowMatureLanguage=FALSE#parental\n"));
    assert!(text.contains("DefaultPostProcessName=\n"));
    assert!(text.ends_with("[Empty]\n\n"));
}

#[test]
fn test_round_trip_after_mutation() {
    let mut config: Config = UE3_SAMPLE.parse().unwrap();
    config.set("Engine.Engine", vec![
        ("bAllowMatureLanguage", "TRUE", ""),
        ("bUseTextureStreaming", "False", ""),
    ]);
    config.create_section("TextureStreaming", vec![Record::new("PoolSize", "99999", "")]);
    config.delete("URL", "LocalMap", false);

    let reparsed: Config = config.serialize().parse().unwrap();
    assert_eq!(reparsed, config);
    assert_eq!(
        reparsed.get("Engine.Engine", "bAllowMatureLanguage").unwrap().comment,
        "parental"
    );
    assert_eq!(reparsed.get("TextureStreaming", "PoolSize").unwrap().value, "99999");
    assert!(!reparsed.contains_option("URL", "LocalMap"));
}

#[test]
fn test_round_trip_merges_duplicate_headers_once() {
    let options = ConfigOptions::default().with_duplicate_sections(DuplicateSectionPolicy::Merge);
    let mut first = Config::with_options(options.clone()).unwrap();
    first.parse("[A]\nx=1\n[B]\ny=1\n[A]\nx=2\n");

    let mut second = Config::with_options(options).unwrap();
    second.parse(&first.serialize());

    assert_eq!(first, second);
    assert_eq!(second.serialize().matches("[A]").count(), 1);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ROEngine.ini");
    fs::write(&path, UE3_SAMPLE).unwrap();

    let mut file = ConfigFile::load(&path).unwrap();
    let report = file.set("SystemSettings", vec![
        ("MaxAnisotropy", "16", ""),
        ("MaxAniso", "16", ""),
    ]);
    assert_eq!(report.applied(), 1);
    assert_eq!(report.notices().len(), 1);
    file.save().unwrap();

    let reloaded = ConfigFile::load(&path).unwrap();
    assert_eq!(reloaded.get("SystemSettings", "MaxAnisotropy").unwrap().value, "16");
    assert_eq!(reloaded.config(), file.config());
}
