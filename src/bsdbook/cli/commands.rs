use super::print::{
    print_books, print_config, print_messages, print_note_entries, print_tag_matches,
};
use super::setup::{Cli, Commands, Target};
use bsdbook::api::{BookApi, ConfigAction};
use bsdbook::config::BookConfig;
use bsdbook::editor::open_in_editor;
use bsdbook::error::Result;
use bsdbook::http::HttpServer;
use bsdbook::paths::BookPaths;
use bsdbook::store::fs::FileStore;
use bsdbook::store::DataStore;
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: BookApi<FileStore>,
    config: BookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let default_level = match (&command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Serve { .. }, false) => "info",
        _ => "warn",
    };
    init_tracing(default_level, cli.verbose);

    let ctx = init_context()?;

    match command {
        Commands::Install => handle_install(&ctx),
        Commands::Books => handle_books(&ctx),
        Commands::Create { target } => handle_create(&ctx, target),
        Commands::Delete { target } => handle_delete(&ctx, target),
        Commands::Show { target } => handle_show(&ctx, &target),
        Commands::Edit { book, note } => handle_edit(&ctx, &book, &note),
        Commands::Serve { port, host } => handle_serve(&ctx, port, host),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr. `RUST_LOG` wins unless `--verbose` was given.
fn init_tracing(default_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let paths = BookPaths::resolve()?;
    let config = BookConfig::load(paths.root()).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        BookConfig::default()
    });
    let paths = paths.with_note_ext(&config.note_ext);
    debug!(root = %paths.root().display(), ext = paths.note_ext(), "resolved books root");

    Ok(AppContext {
        api: BookApi::new(FileStore::new(paths)),
        config,
    })
}

fn handle_install(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.install()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_books(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.books()?;
    print_books(&result.books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &AppContext, target: Target) -> Result<()> {
    let result = match target {
        Target::Book { name } => ctx.api.create_book(&name)?,
        Target::Note { book, name } => ctx.api.create_note(&book, &name)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, target: Target) -> Result<()> {
    let result = match target {
        Target::Book { name } => ctx.api.delete_book(&name)?,
        Target::Note { book, name } => ctx.api.delete_note(&book, &name)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, target: &str) -> Result<()> {
    let result = match target {
        "todos" => ctx.api.todos()?,
        "links" => ctx.api.links()?,
        book => {
            let result = ctx.api.show_book(book)?;
            print_note_entries(book, &result.note_entries);
            result
        }
    };
    print_tag_matches(&result.tag_matches);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &AppContext, book: &str, note: &str) -> Result<()> {
    let result = ctx.api.note_path(book, note)?;
    for path in &result.note_paths {
        open_in_editor(path)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_serve(ctx: &AppContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.host.clone());
    let port = port.unwrap_or(ctx.config.port);

    let server = HttpServer::bind((host.as_str(), port), ctx.config.buffer_size)?;
    println!(
        "Serving {} on http://{}",
        ctx.api.store().paths().root().display(),
        server.local_addr()?
    );
    server.serve_forever(ctx.api.store());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
