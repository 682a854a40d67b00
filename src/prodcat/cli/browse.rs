//! Line-driven filtering session.
//!
//! Reads one command per line and applies it to the API's filter state, then
//! re-renders the table. This is the single control path that mutates the
//! controller for the lifetime of the session.

use super::render::{
    render_category_buttons, render_filter_summary, render_product_table, render_user_tabs,
    ViewOptions,
};
use prodcat::api::CatalogApi;
use prodcat::error::Result;
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

const HELP: &str = "\
commands:
  query <text>   filter by product name (alias: q)
  clear          clear the query
  user <sel>     select a user by name or id, or `all` (alias: u)
  toggle <id>    toggle a category in the selection (alias: t)
  all            show all categories
  reset          reset every filter
  show           print the table again
  users          show the user tabs
  categories     show the category buttons
  help           this text
  quit           leave (alias: exit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Query(String),
    Clear,
    User(String),
    Toggle(String),
    AllCategories,
    Reset,
    Show,
    Users,
    Categories,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim_end(), ""));

        let needs_arg = |name: &str| {
            if rest.trim().is_empty() {
                Err(format!("`{}` needs an argument", name))
            } else {
                Ok(rest.trim().to_string())
            }
        };

        match word {
            // The query keeps its spacing; trimming is the filter's job.
            "query" | "q" => Ok(BrowseCommand::Query(rest.to_string())),
            "clear" => Ok(BrowseCommand::Clear),
            "user" | "u" => needs_arg("user").map(BrowseCommand::User),
            "toggle" | "t" => needs_arg("toggle").map(BrowseCommand::Toggle),
            "all" => Ok(BrowseCommand::AllCategories),
            "reset" => Ok(BrowseCommand::Reset),
            "show" | "" => Ok(BrowseCommand::Show),
            "users" => Ok(BrowseCommand::Users),
            "categories" | "cats" => Ok(BrowseCommand::Categories),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" => Ok(BrowseCommand::Quit),
            other => Err(format!("Unknown command: {} (try `help`)", other)),
        }
    }
}

pub fn run<R: BufRead, W: Write>(
    api: &mut CatalogApi,
    input: R,
    out: &mut W,
    opts: ViewOptions,
) -> Result<()> {
    write_view(api, out, opts)?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            // The offending bytes are already consumed; keep reading.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        let outcome = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            BrowseCommand::Users => {
                write!(out, "{}", render_user_tabs(&api.user_tabs()?.user_tabs, opts.use_color))?;
                continue;
            }
            BrowseCommand::Categories => {
                let buttons = api.category_buttons()?.category_buttons;
                write!(out, "{}", render_category_buttons(&buttons, opts.use_color))?;
                continue;
            }
            BrowseCommand::Show => Ok(()),
            BrowseCommand::Query(text) => {
                api.set_query(text);
                Ok(())
            }
            BrowseCommand::Clear => {
                api.clear_query();
                Ok(())
            }
            BrowseCommand::User(selector) => api.select_user_by(&selector),
            BrowseCommand::Toggle(selector) => api.toggle_category_by(&selector),
            BrowseCommand::AllCategories => {
                api.select_all_categories();
                Ok(())
            }
            BrowseCommand::Reset => {
                api.reset_all();
                Ok(())
            }
        };

        match outcome {
            Ok(()) => write_view(api, out, opts)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    Ok(())
}

fn write_view<W: Write>(api: &CatalogApi, out: &mut W, opts: ViewOptions) -> Result<()> {
    let rows = api.list_products()?.listed_products;
    writeln!(out, "{}", render_filter_summary(api.controller().criteria()))?;
    write!(out, "{}", render_product_table(&rows, opts))?;
    out.flush()?;
    Ok(())
}
