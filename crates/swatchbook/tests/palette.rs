use std::io::{Error, ErrorKind};

use swatchbook::error::PaletteError;
use swatchbook::gpl::MAX_COLORS;
use swatchbook::sink::{DirectorySink, FileSink, MemorySink};
use swatchbook::termco::{ColorLike, Named, Rgb};
use swatchbook::{Color, GplPalette};

/// A sink that always fails and counts its invocations.
#[derive(Default)]
struct ReadOnly {
    calls: usize,
}

impl FileSink for ReadOnly {
    fn write(&mut self, _: &str, _: &str) -> std::io::Result<()> {
        self.calls += 1;
        Err(Error::new(ErrorKind::PermissionDenied, "read-only file system"))
    }
}

#[test]
fn test_canonical_fixture() -> Result<(), PaletteError> {
    let palette = GplPalette::new("My Palette", vec![Color::from_rgb(255, 0, 0)])?;
    assert_eq!(
        palette.to_gpl()?,
        "GIMP Palette\nName: My Palette\nColumns: 8\n\n255   0   0 #ff0000\n"
    );
    assert_eq!(palette.filename(), "My_Palette.gpl");
    Ok(())
}

#[test]
fn test_size_limit() {
    let colors: Vec<_> = (0..=0xff_u32)
        .map(|level| Color::from_hex(level * 0x010101))
        .collect();
    assert_eq!(colors.len(), MAX_COLORS);
    let palette = GplPalette::new("Grays", colors);
    assert!(palette.is_ok_and(|p| p.len() == 256));

    let colors = vec![Color::from_hex(0xffffff); 257];
    let error = GplPalette::new("Too Many", colors)
        .err()
        .as_ref()
        .map(ToString::to_string);
    assert_eq!(
        error.as_deref(),
        Some("palette should have at most 256 colors but has 257")
    );
}

#[test]
fn test_comment_and_names() -> Result<(), PaletteError> {
    let palette = GplPalette::new(
        "Primaries",
        vec![
            Named::new("Red", Color::from_rgb(255, 0, 0)),
            Named::new("Green", Color::from_hsv(120.0, 1.0, 1.0)),
            Named::new("Blue", Color::from_hex_str("00f")),
        ],
    )?
    .with_comment("Additive primaries");

    assert_eq!(
        palette.to_gpl()?,
        "GIMP Palette\nName: Primaries\nColumns: 8\n#Additive primaries\n\n\
        255   0   0 Red\n  \
        0 255   0 Green\n  \
        0   0 255 Blue\n"
    );
    Ok(())
}

#[test]
fn test_save_to_memory() -> Result<(), PaletteError> {
    let palette = GplPalette::new("Two Tone", vec![Rgb::new(10, 20, 30), Rgb::new(200, 100, 0)])?;
    let mut sink = MemorySink::new();
    palette.save(&mut sink)?;

    assert_eq!(sink.len(), 1);
    assert_eq!(
        sink.get("Two_Tone.gpl"),
        Some("GIMP Palette\nName: Two Tone\nColumns: 8\n\n 10  20  30 #0a141e\n200 100   0 #c86400\n")
    );
    Ok(())
}

#[test]
fn test_save_to_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join(format!("swatchbook-palette-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;

    let palette = GplPalette::new("Disk Palette", vec![Color::from_hex(0x336699)])?;
    palette.save(&mut DirectorySink::new(&dir))?;

    let text = std::fs::read_to_string(dir.join("Disk_Palette.gpl"))?;
    assert_eq!(text, palette.to_gpl()?);
    assert!(text.ends_with(" 51 102 153 #336699\n"));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_save_stays_in_directory() -> Result<(), Box<dyn std::error::Error>> {
    let base = std::env::temp_dir().join(format!("swatchbook-confined-{}", std::process::id()));
    let root = base.join("inner");
    std::fs::create_dir_all(&root)?;
    let mut sink = DirectorySink::new(&root);

    for (title, filename) in [
        ("../x", ".._x.gpl"),
        ("/abs", "_abs.gpl"),
        ("AC/DC", "AC_DC.gpl"),
    ] {
        let palette = GplPalette::new(title, vec![Color::from_hex(0xff8700)])?;
        palette.save(&mut sink)?;
        assert_eq!(std::fs::read_to_string(root.join(filename))?, palette.to_gpl()?);
    }

    assert!(!base.join("x.gpl").exists());
    assert_eq!(std::fs::read_dir(&base)?.count(), 1);
    assert_eq!(std::fs::read_dir(&root)?.count(), 3);

    std::fs::remove_dir_all(&base)?;
    Ok(())
}

#[test]
fn test_sink_unavailable() -> Result<(), PaletteError> {
    let palette = GplPalette::new("Locked", vec![Color::default()])?;
    let mut sink = ReadOnly::default();

    let Err(PaletteError::SinkUnavailable { filename, source }) = palette.save(&mut sink) else {
        panic!("saving to read-only sink should fail");
    };
    assert_eq!(filename, "Locked.gpl");
    assert_eq!(source.kind(), ErrorKind::PermissionDenied);
    assert_eq!(source.to_string(), "read-only file system");
    assert_eq!(sink.calls, 1);
    Ok(())
}

#[test]
fn test_invalid_entry_skips_sink() -> Result<(), PaletteError> {
    let palette = GplPalette::new(
        "Sparse",
        vec![Some(Color::default()), Some(Color::from_hex(0xffffff)), None],
    )?;
    let mut sink = MemorySink::new();

    assert!(matches!(
        palette.save(&mut sink),
        Err(PaletteError::InvalidEntry { index: 2 })
    ));
    assert!(sink.is_empty());
    Ok(())
}

#[test]
fn test_dyn_entries() -> Result<(), PaletteError> {
    let fog = Color::from_hex(0xd3d3d3);
    let black = Rgb::new(0, 0, 0);
    let entries: Vec<&dyn ColorLike> = vec![&fog, &black];
    let palette = GplPalette::new("Borrowed", entries)?;
    assert_eq!(
        palette.to_gpl()?,
        "GIMP Palette\nName: Borrowed\nColumns: 8\n\n211 211 211 #d3d3d3\n  0   0   0 #000000\n"
    );
    Ok(())
}
