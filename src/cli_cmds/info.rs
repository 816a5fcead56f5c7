use anyhow::Result;
use frostpaint::palettes::catalog;
use frostpaint::Config;
use std::path::Path;

pub fn cmd_palettes() {
    for palette in catalog() {
        println!("{} - {}", palette.name, palette.description);
        for color in palette.colors {
            println!("  {}  {}", color.hex_code, color.name);
        }
    }
}

pub fn cmd_config(config: &Config, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
