mod analyze;
mod info;
mod paint;

pub use analyze::{cmd_detect, cmd_extract};
pub use info::{cmd_config, cmd_palettes};
pub use paint::{cmd_complement, cmd_matches, cmd_preview};

use anyhow::Result;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
