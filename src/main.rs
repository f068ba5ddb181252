//! Christmas VGA Test Pattern - Entry Point
//!
//! Handles command line arguments, installs logging and dispatches to the
//! window, snapshot or probe commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use xmasvga::config::DisplayConfig;
use xmasvga::pattern::{probe, PatternGenerator};
use xmasvga::ui::Ui;

#[derive(Parser)]
#[command(name = "xmas-vga")]
#[command(about = "Christmas tree VGA test-pattern generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the animated pattern in a window
    Window {
        /// Integer window scale (1-4)
        #[arg(short, long, default_value_t = 1)]
        scale: u32,
    },
    /// Render frames headless and save the last one as PNG
    Snapshot {
        /// Number of frames to run from reset
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        frames: u32,
        /// Output image path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the pipeline's decision for one coordinate
    Probe {
        #[arg(long)]
        x: u16,
        #[arg(long)]
        y: u16,
        /// Blink phase (0-3)
        #[arg(long, default_value_t = 0)]
        phase: u8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut generator = PatternGenerator::new();

    match cli.command.unwrap_or(Commands::Window { scale: 1 }) {
        Commands::Window { scale } => {
            let config = DisplayConfig::with_scale(scale)?;
            let mut ui = Ui::new(config).context("failed to initialize window")?;
            ui.run(&mut generator).context("window loop failed")?;
        }
        Commands::Snapshot { frames, output } => {
            let frame = generator.render_frames(frames);
            frame
                .save_png(&output)
                .with_context(|| format!("failed to save {}", output.display()))?;
        }
        Commands::Probe { x, y, phase } => {
            let p = probe(x, y, phase)?;
            println!("coordinate:  ({}, {})", p.x, p.y);
            println!(
                "shapes:      tree={} trunk={} star={} stripe={}",
                p.flags.is_tree_body, p.flags.is_trunk, p.flags.is_star, p.flags.is_light_stripe
            );
            if let Some(cell) = p.cell {
                println!(
                    "text:        line {} char {} {:?} block ({}, {})",
                    cell.line,
                    cell.char_index,
                    cell.character().unwrap_or(' '),
                    cell.block_x,
                    cell.block_y
                );
            }
            println!("font bit:    {}", p.font_bit);
            println!("layer:       {:?}", p.layer);
            println!("color:       ({}, {}, {})", p.color.r, p.color.g, p.color.b);
            println!("pin word:    {:#010b}", p.word);
        }
    }

    Ok(())
}
