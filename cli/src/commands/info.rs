use colored::*;

use crate::terminal::{colors, print};
use square_common::config::Config;
use square_core::MAX_SAFE_INPUT;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    let details: [(&str, ColoredString); 3] = [
        ("Version", env!("CARGO_PKG_VERSION").color(colors::ACCENT)),
        ("Overflow policy", cfg.overflow.to_string().color(colors::ACCENT)),
        ("Max safe input", format!("±{MAX_SAFE_INPUT}").color(colors::RESULT)),
    ];

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(key_width);

    for (key, value) in details {
        print::aligned_line(key, value);
    }
    Ok(())
}
