//! Applies a batch of quality tweaks to an Unreal Engine 3 `ROEngine.ini`.
//!
//! ```bash
//! cargo run --example ro_engine                # uses demos/ROEngine.ini
//! cargo run --example ro_engine -- path/to/ROEngine.ini
//! RUST_LOG=dupini=debug cargo run --example ro_engine
//! ```
//!
//! The edited file is written to the system temp dir so the input is
//! never touched.

use dupini::{ConfigFile, EditReport, Record};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let input = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("demos/ROEngine.ini");
        path
    });

    let mut engine = ConfigFile::load(&input)?;
    println!("Loaded {} sections from {}", engine.len(), input.display());

    let mut report = EditReport::new();

    report.merge(engine.set("SystemSettings", [
        ("bUseMaxQualityMode", "True", ""),
        ("MaxAnisotropy", "16", ""),
        ("MaxMultisamples", "1", ""),
        ("OnlyStreamInTextures", "False", ""),
    ]));

    report.merge(engine.set("TextureStreaming", [
        ("PoolSize", "99999", ""),
        ("AllowStreamingLightmaps", "False", ""),
        ("UsePriorityStreaming", "False", ""),
        ("bAllowSwitchingStreamingSystem", "False", ""),
    ]));

    report.merge(engine.set("Core.System", ("SizeOfPermanentObjectPool", "4000", "")));

    report.merge(engine.set("Engine.Engine", [
        ("bAllowMatureLanguage", "TRUE", ""),
        ("bUseTextureStreaming", "False", ""),
    ]));

    // Recolor every step after the first
    report.merge(engine.set_multiple_options(
        "Engine.Engine",
        "LightComplexityColors",
        &["(R=255,G=255,B=255,A=1)", "(R=200,G=200,B=200,A=1)", "(R=150,G=150,B=150,A=1)"],
        1,
    ));

    // Insert a note at the top of URL, built from a raw line
    let note = engine.tokenize("; edited by ro_engine");
    report.merge(engine.create_option("URL", note, 0));

    report.merge(engine.create_section("Demo.Settings", vec![
        Record::new("Enabled", "True", " added by the demo"),
    ]));

    // Typos are reported with suggestions, not applied
    report.merge(engine.set("SystemSettings", ("MaxAniso", "8", "")));
    report.merge(engine.set("TextureStreamin", ("PoolSize", "1", "")));

    println!("Applied {} change(s)", report.applied());
    for notice in report.notices() {
        println!("  ! {}", notice);
    }

    let output = std::env::temp_dir().join("ROEngine_modified.ini");
    engine.save_as(&output)?;
    println!("Wrote {}", output.display());

    Ok(())
}
