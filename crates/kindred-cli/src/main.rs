//! Kindred CLI - infer family relationships among memorial guestbook authors.

use clap::Parser;
use kindred_cli::commands;
use kindred_cli::logging;
use kindred_cli::{Cli, Command, Config, Formatter};
use kindred_guestbook::Guestbook;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kindred_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load config: an explicit path must exist, the default one is created on demand
    let (config, fallback) = match &cli.config {
        Some(path) => (Config::load_from(path)?, None),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    if let Some(e) = fallback {
        tracing::debug!(error = %e, "Config load failed");
        eprintln!("{}", formatter.warning(&format!("Using default configuration: {}", e)));
    }

    let output = match cli.command {
        Command::Relations => commands::execute_relations(&formatter)?,
        Command::Rules => commands::execute_rules(&formatter)?,
        cmd => {
            // Commands that read guestbook data
            let data_path = config.resolve_data_path(cli.data)?;
            let guestbook = Guestbook::from_path(&data_path, config.guestbook.clone())?;

            match cmd {
                Command::Search(args) => commands::execute_search(args, &guestbook, &formatter)?,
                Command::Mesh(args) => commands::execute_mesh(args, &guestbook, &formatter)?,
                Command::Groups(args) => commands::execute_groups(args, &guestbook, &formatter)?,
                Command::Graph(args) => commands::execute_graph(args, &guestbook, &formatter)?,
                Command::Explain(args) => commands::execute_explain(args, &guestbook, &formatter)?,
                Command::Relations | Command::Rules => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
