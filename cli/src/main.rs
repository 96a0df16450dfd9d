mod commands;
mod terminal;

use commands::{CommandLine, Commands, catalog, compare};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);
    let cfg = commands.to_config();

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Compare { targets, .. } => {
            print::header("getting ready to compare", cfg.quiet);
            compare::compare(&targets, &cfg).await
        }
        Commands::Catalog => {
            print::header("scan catalog", cfg.quiet);
            catalog::catalog();
            Ok(())
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
