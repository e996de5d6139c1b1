mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, square};
use square_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        overflow: commands.overflow,
        quiet: commands.quiet.min(2),
        no_banner: commands.no_banner,
    };

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Square { values } => {
            print::header("squaring", cfg.quiet);
            square::square(&values, &cfg)
        }
    }
}
