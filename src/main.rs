//! wraplist - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use wraplist::config::{self, ResolvedConfig};
use wraplist::integration::ItemSeparator;
use wraplist::state::{ListState, Outcome, PickerState};
use wraplist::view::{ColorConfig, ListStyles};
use wraplist::view_state::Glyphs;

/// wraplist - pick items from a wrapped, numbered list
#[derive(Parser, Debug)]
#[command(name = "wraplist")]
#[command(version)]
#[command(
    about = "Pick lines from a file or stdin in a scrollable, soft-wrapping list",
    long_about = "Pick lines from a file or stdin in a scrollable, soft-wrapping list.\n\n\
                  The list is drawn on stderr; selected items are printed to stdout, \
                  one per line. Keys: j/k move, digits set a count, space toggles, \
                  m/M mark/unmark, v inverts, s sorts, +/- move the item, \
                  r toggles relative numbers, Enter accepts, q aborts."
)]
pub struct Args {
    /// File with one item per line (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Items are NUL-separated and may span several lines
    #[arg(short = '0', long = "null")]
    pub null: bool,

    /// Start with relative line numbers
    #[arg(short, long)]
    pub relative: bool,

    /// Rows kept between the cursor and the window edges
    #[arg(long)]
    pub scroll_margin: Option<usize>,

    /// Sort the items by text before showing them
    #[arg(short, long)]
    pub sort: bool,

    /// Use [x]/[ ] checkboxes instead of the item glyphs
    #[arg(long)]
    pub checkboxes: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// How input is divided into items.
    pub fn separator(&self) -> ItemSeparator {
        if self.null {
            ItemSeparator::Nul
        } else {
            ItemSeparator::Newline
        }
    }
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, config::ConfigError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);

    // Flags only override when set
    let relative_override = args.relative.then_some(true);
    Ok(config::apply_cli_overrides(
        with_env,
        relative_override,
        args.scroll_margin,
    ))
}

/// Build the list the picker starts with.
fn build_list(items: Vec<String>, config: &ResolvedConfig, args: &Args) -> ListState<String> {
    let mut list = ListState::new();
    list.add_items(items);
    list.set_numbering(config.numbering());
    list.set_scroll_margin(config.scroll_margin);
    list.set_glyphs(if args.checkboxes {
        Glyphs::checkboxes()
    } else {
        config.glyphs.clone()
    });
    list.set_equals(|a: &String, b: &String| a == b);
    if args.sort {
        list.sort();
    }
    list
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    wraplist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut input_source = wraplist::source::detect_input_source(args.file.clone())?;
    let items = input_source.read_items(args.separator())?;
    info!(count = items.len(), "items loaded");

    let picker = PickerState::new(build_list(items, &config, &args));
    let styles = ListStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    match wraplist::view::run_picker(picker, styles)? {
        Outcome::Confirm(selection) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(selection.as_bytes())?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Abort | Outcome::Continue => Ok(ExitCode::from(1)),
    }
}
