// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use ron::ser::PrettyConfig;
use serde::Serialize;
use splitpane::config::Config;
use splitpane::log;
use splitpane::model::{LayoutDirection, Size};
use tracing::debug;

/// Computes two-pane split layouts.
#[derive(Parser)]
#[command(version, name = "splitpane")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    Layout(CmdLayout),
    #[command(subcommand)]
    Config(CmdConfig),
}

/// Lays out a split container and prints the resulting rectangles.
///
/// Leave out --width and --height to see the layout used before the container
/// has been measured.
#[derive(Parser, Clone)]
struct CmdLayout {
    /// Container width in pixels.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Container height in pixels.
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Use a right-to-left layout, overriding the config.
    #[arg(long)]
    rtl: bool,

    /// Drag the divider by a pointer movement of DX:DY pixels. May be repeated.
    #[arg(long, value_name = "DX:DY", value_parser = parse_drag, allow_hyphen_values = true)]
    drag: Vec<(f64, f64)>,

    /// Place the panes without a divider or minimum sizes.
    #[arg(long)]
    two_pane: bool,

    /// Path to a custom config file.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

/// Commands to manage the config.
#[derive(Subcommand, Clone)]
enum CmdConfig {
    /// Checks that the config file is valid.
    Verify {
        /// Path to a custom config file.
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

fn parse_drag(arg: &str) -> Result<(f64, f64), String> {
    let Some((dx, dy)) = arg.split_once(':') else {
        return Err(format!("expected DX:DY, got {arg:?}"));
    };
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok((parse(dx)?, parse(dy)?))
}

fn main() -> Result<(), anyhow::Error> {
    let opt: Opt = Parser::parse();
    let _log_guard = log::init_logging();

    match opt.command {
        Command::Layout(cmd) => layout(cmd),
        Command::Config(CmdConfig::Verify { config }) => {
            Config::load(config.as_deref())?;
            eprintln!("Config is valid");
            Ok(())
        }
    }
}

fn layout(cmd: CmdLayout) -> anyhow::Result<()> {
    let config = Config::load(cmd.config.as_deref())?;
    let direction = if cmd.rtl {
        LayoutDirection::RightToLeft
    } else {
        config.settings.direction
    };
    let size = match (cmd.width, cmd.height) {
        (Some(width), Some(height)) => Some(Size::new(width, height)),
        _ => None,
    };

    let mut split = config.split_layout()?;
    if cmd.two_pane {
        let Some(size) = size else {
            bail!("--two-pane needs --width and --height");
        };
        let mut placement = split.layout_two_pane(size, direction, config.density);
        for (dx, dy) in cmd.drag {
            split.apply_drag_delta(placement.drag_delta(dx, dy));
            placement = split.layout_two_pane(size, direction, config.density);
        }
        debug!(divider_offset = split.divider_offset().get());
        return print_ron(&placement);
    }

    let mut placement = split.layout(size, direction, config.density)?;
    for (dx, dy) in cmd.drag {
        split.apply_drag_delta(placement.drag_delta(dx, dy));
        placement = split
            .layout(size, direction, config.density)
            .with_context(|| format!("Layout failed after dragging by {dx}:{dy}"))?;
    }
    debug!(divider_offset = split.divider_offset().get());
    print_ron(&placement)
}

fn print_ron(value: &impl Serialize) -> anyhow::Result<()> {
    let out = ron::ser::to_string_pretty(value, PrettyConfig::new())?;
    println!("{out}");
    Ok(())
}
