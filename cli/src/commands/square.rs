use colored::*;
use tracing::error;

use crate::{mprint, terminal::{colors, print}};
use square_common::{config::Config, success, warn};
use square_core::{Squared, is_safe, square_all};

pub fn square(values: &[i64], cfg: &Config) -> anyhow::Result<()> {
    let results: Vec<Squared> = square_all(values, cfg.overflow);

    // Failed inputs are reported on their own line, not aligned.
    let key_width: usize = results
        .iter()
        .filter(|s| s.is_ok())
        .map(|s| s.input.to_string().len())
        .max()
        .unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(key_width);

    for squared in &results {
        print_result(squared, cfg);
    }

    let failed: usize = results.iter().filter(|s| !s.is_ok()).count();
    print_summary(results.len() - failed, failed, cfg);

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} value(s) overflowed under the '{}' policy",
            results.len(),
            cfg.overflow
        );
    }
    Ok(())
}

fn print_result(squared: &Squared, cfg: &Config) {
    let value: i64 = match squared.result {
        Ok(value) => value,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    if !is_safe(squared.input) {
        warn!("{} is outside the safe range, {} result", squared.input, cfg.overflow);
    }

    match cfg.quiet {
        2 => {
            mprint!(&value.to_string());
        }
        _ => print::aligned_line(
            &squared.input.to_string(),
            value.to_string().color(colors::RESULT).bold(),
        ),
    }
}

fn print_summary(squared: usize, failed: usize, cfg: &Config) {
    let squared: ColoredString = format!("{squared} squared").bold().green();
    let failed: ColoredString = match failed {
        0 => "none overflowed".color(colors::TEXT_DEFAULT),
        n => format!("{n} overflowed").bold().red(),
    };
    let output: String = format!("{squared}, {failed} ({} policy)", cfg.overflow);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        1 => success!("{}", output),
        _ => {}
    }
}
