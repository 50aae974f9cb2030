use super::args::{Cli, Commands, ConfigCommand, HistoryCommand};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogSink};
use anyhow::Result;
use bintrack_runtime::{Config, resolve_data_dir};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    // The browser owns the terminal, so its logs go to a file.
    let sink = match command {
        Commands::Browse { .. } => LogSink::File(&data_dir),
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, sink)?;

    let config = Config::load(&data_dir)?.with_server_override(cli.server.as_deref());
    let ctx = HandlerContext::new(cli.format, data_dir.clone(), config);

    match command {
        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Show => handlers::config::show(&ctx),
        },
        command => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(dispatch(&ctx, command))
        }
    }
}

async fn dispatch(ctx: &HandlerContext, command: Commands) -> Result<()> {
    match command {
        Commands::List { search, view } => {
            handlers::list::handle(ctx, search, view.map(Into::into)).await
        }

        Commands::Bins { search } => handlers::bins::handle(ctx, search).await,

        Commands::Products { query } => handlers::products::handle(ctx, query).await,

        Commands::Add {
            bin_id,
            upc,
            description,
            cases,
            qty_per_case,
        } => {
            let args = handlers::record::RecordArgs {
                bin_id,
                upc,
                description,
                cases,
                qty_per_case,
            };
            handlers::record::handle_add(ctx, args).await
        }

        Commands::Update {
            id,
            bin_id,
            upc,
            description,
            cases,
            qty_per_case,
        } => {
            let args = handlers::record::RecordArgs {
                bin_id,
                upc,
                description,
                cases,
                qty_per_case,
            };
            handlers::record::handle_update(ctx, id, args).await
        }

        Commands::Adjust { id, by, notes } => {
            handlers::record::handle_adjust(ctx, id, by, notes).await
        }

        Commands::Delete { id, yes } => handlers::record::handle_delete(ctx, id, yes).await,

        Commands::History { command } => match command {
            HistoryCommand::List {
                record_id,
                operation,
                user,
                since,
                until,
                limit,
            } => {
                let args = handlers::history::HistoryArgs {
                    record_id,
                    operation: operation.map(Into::into),
                    user,
                    since,
                    until,
                    limit,
                };
                handlers::history::list(ctx, args).await
            }
            HistoryCommand::Stats => handlers::history::stats(ctx).await,
        },

        Commands::Health => handlers::health::handle(ctx).await,

        Commands::Logout => handlers::logout::handle(ctx).await,

        Commands::Browse { view } => handlers::browse::handle(ctx, view.map(Into::into)).await,

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(ctx, force),
            ConfigCommand::Show => handlers::config::show(ctx),
        },
    }
}

fn show_guidance(data_dir: &Path) {
    let config_exists = Config::path_in(data_dir).exists();

    println!("bintrack - Warehouse bin-location inventory client\n");

    if !config_exists {
        println!("Get started:");
        println!("  bintrack config init --server http://<host>:5000\n");
        println!("Then sign in through the server's /login page and paste the");
        println!("session cookie into server.session_cookie.\n");
    } else {
        println!("Quick commands:");
        println!("  bintrack list                     # Table of all records");
        println!("  bintrack list -s cold --view card # Filtered cards");
        println!("  bintrack adjust <ID> --by -2      # Remove two cases");
        println!("  bintrack browse                   # Interactive browser\n");
    }

    println!("For more commands:");
    println!("  bintrack --help");
}
