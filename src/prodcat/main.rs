use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use prodcat::api::{CatalogApi, CmdMessage, ConfigAction, MessageLevel};
use prodcat::commands;
use prodcat::config::{self, CatalogConfig};
use prodcat::error::{CatalogError, Result};
use prodcat::store::builtin::BuiltinSource;
use prodcat::store::fs::JsonDirSource;
use prodcat::store::CatalogSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands, FilterArgs};
use cli::render::{
    render_category_buttons, render_product_table, render_user_tabs, ViewOptions,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CatalogApi,
    view: ViewOptions,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let config_dir = config_dir()?;
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let config = CatalogConfig::load(&config_dir)?;
    let mut ctx = init_context(&cli, &config)?;

    match cli.command {
        Some(Commands::List(filters)) => handle_list(&mut ctx, &filters),
        Some(Commands::Users(filters)) => handle_users(&mut ctx, &filters),
        Some(Commands::Categories(filters)) => handle_categories(&mut ctx, &filters),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        Some(Commands::Browse) => handle_browse(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&mut ctx, &FilterArgs::default()),
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("PRODCAT_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "prodcat", "prodcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine config dir".into()))
}

fn init_context(cli: &Cli, config: &CatalogConfig) -> Result<AppContext> {
    let data_dir = cli.data_dir.clone().or_else(|| config.data_dir.clone());
    let source: Box<dyn CatalogSource> = match data_dir {
        Some(dir) => Box::new(JsonDirSource::new(dir)),
        None => Box::new(BuiltinSource),
    };

    let api = CatalogApi::load(source.as_ref())?;
    let view = ViewOptions {
        line_width: config.line_width,
        use_color: !cli.no_color && console::colors_enabled(),
    };

    Ok(AppContext { api, view })
}

fn apply_filters(ctx: &mut AppContext, filters: &FilterArgs) -> Result<()> {
    if let Some(query) = &filters.query {
        ctx.api.set_query(query.as_str());
    }
    if let Some(user) = &filters.user {
        ctx.api.select_user_by(user)?;
    }
    for category in &filters.categories {
        ctx.api.toggle_category_by(category)?;
    }
    if filters.all_categories {
        ctx.api.select_all_categories();
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filters: &FilterArgs) -> Result<()> {
    apply_filters(ctx, filters)?;
    let result = ctx.api.list_products()?;
    print!("{}", render_product_table(&result.listed_products, ctx.view));
    print_messages(&result.messages);
    Ok(())
}

fn handle_users(ctx: &mut AppContext, filters: &FilterArgs) -> Result<()> {
    apply_filters(ctx, filters)?;
    let result = ctx.api.user_tabs()?;
    print!("{}", render_user_tabs(&result.user_tabs, ctx.view.use_color));
    Ok(())
}

fn handle_categories(ctx: &mut AppContext, filters: &FilterArgs) -> Result<()> {
    apply_filters(ctx, filters)?;
    let result = ctx.api.category_buttons()?;
    print!(
        "{}",
        render_category_buttons(&result.category_buttons, ctx.view.use_color)
    );
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    if result.report.is_some_and(|r| !r.is_clean()) {
        return Err(CatalogError::Api("Catalog has dangling references".into()));
    }
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli::browse::run(&mut ctx.api, stdin.lock(), &mut stdout, ctx.view)
}

fn handle_config(config_dir: &std::path::Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(config_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in config::KEYS {
                if let Some(val) = config.get(key) {
                    println!("{} = {}", key, val);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
