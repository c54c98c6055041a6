use std::io::Result;

use swatchbook::sink::DirectorySink;
use swatchbook::termco::Named;
use swatchbook::{Color, GplPalette};

fn main() -> Result<()> {
    // 1. Pick a base color and derive a few more
    let base = Color::from_hex_str("#2a9d8f");
    let mut lighter = base;
    lighter.set_val(base.val() + 0.2);
    let mut complement = base;
    complement.set_hue((base.hue() + 180.0) % 360.0);
    let mut safe = base;
    safe.to_web_safe();

    let mut entries = vec![
        Named::new("Base", base),
        Named::new("Lighter", lighter),
        Named::new("Complement", complement),
        Named::new("Web-safe", safe),
    ];
    for index in 0..4 {
        entries.push(Named::new(format!("Surprise {}", index + 1), Color::random()));
    }

    // 2. Build the palette
    let palette = GplPalette::new("Swatchbook Demo", entries)?
        .with_comment("Generated by the export example");
    print!("{}", palette.to_gpl()?);

    // 3. Save it
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    palette.save(&mut DirectorySink::new(&dir))?;
    println!("\nSaved {}/{}", dir, palette.filename());

    Ok(())
}
