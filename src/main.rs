use callfwd::cli::{Cli, Commands, ConfigCommands};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => callfwd::cli::serve::run_serve(&args).await,
        Commands::Config(ConfigCommands::Init(args)) => callfwd::cli::handle_config_init(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
