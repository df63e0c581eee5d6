//! Demo host for the sideview controller
//!
//! Runs a scripted activate → position → toggle session against a JSON (or
//! built-in sample) data source and prints the resulting workspace state.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use sideview::commands::Command;
use sideview::config::ConfigStore;
use sideview::controller::Controller;
use sideview::data::{Item, JsonDataSource};
use sideview::panel::DockSide;

#[derive(Parser, Debug)]
#[command(name = "sideview", version, about = "Dockable side-panel controller demo")]
struct Cli {
    /// Dock target: "Left (first)", "Left (last)", "Right (first)", "Right (last)"
    #[arg(long, default_value = "Right (last)")]
    position: String,

    /// JSON file holding an array of items to display
    #[arg(long)]
    data: Option<PathBuf>,

    /// Enable hover-driven auto-hide
    #[arg(long)]
    autohide: bool,

    /// Number of toggle-panel commands to run after attaching
    #[arg(long, default_value_t = 0)]
    toggles: u32,
}

fn sample_items() -> Vec<Item> {
    vec![
        Item::group("clients"),
        Item::project("website"),
        Item::project("backend"),
    ]
}

fn main() -> Result<()> {
    sideview::tracing::init();
    let cli = Cli::parse();

    let source = match cli.data {
        Some(path) => JsonDataSource::load(path)?,
        None => JsonDataSource::new(sample_items()),
    };

    let mut controller = Controller::new(ConfigStore::load(), Box::new(source));
    controller.activate();
    controller.state_mut().workspace.complete_startup();

    controller.config_mut().set_panel_position(&cli.position);
    controller.config_mut().set_auto_hide(cli.autohide);
    controller.pump();

    for _ in 0..cli.toggles {
        controller.execute(Command::TogglePanel);
    }

    report(&controller);
    controller.deactivate();
    Ok(())
}

fn report(controller: &Controller) {
    let state = controller.state();
    let Some(view) = state.registry.get(state.id) else {
        println!("no view registered");
        return;
    };

    match state.workspace.panel_for_item(&view) {
        Some(panel) => {
            let side = match state.workspace.side_of(panel) {
                Some(DockSide::Left) => "left",
                Some(DockSide::Right) => "right",
                None => "detached",
            };
            println!(
                "panel: {} dock, {}",
                side,
                if state.workspace.is_visible(panel) {
                    "visible"
                } else {
                    "hidden"
                }
            );
        }
        None => println!("panel: not attached (position '{}' unrecognized?)", controller.config().settings().panel_position),
    }

    let view = view.borrow();
    println!(
        "view: {} items, autohide={}, header={}",
        view.items().len(),
        view.is_autohide(),
        view.is_title_visible()
    );
    println!(
        "subscriptions: {} outstanding ({} acquired / {} released)",
        state.ledger.outstanding(),
        state.ledger.acquired_total(),
        state.ledger.released_total()
    );
}
