//! snmputil — SNMP link utilization from two walk files.
//!
//! Opens two textual SNMP walk dumps, lists the interfaces common to both
//! captures, and calculates counter deltas and bandwidth utilization for a
//! selected interface. Results can be saved as JSON.
//!
//! Walks are expected with numeric OIDs, one `<OID> = <TYPE>: <VALUE>`
//! record per line. Counters are limited to 32 bits.

mod app;
mod export;
mod input;
mod ui;
mod walk;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use walk::parser::{build_interface_snapshot, find_interfaces, ParseError};
use walk::reader::read_walk_file;
use walk::stats::calculate_statistics;

/// Event poll timeout in milliseconds
const POLL_TIMEOUT_MS: u64 = 200;

#[derive(Debug, Parser)]
#[command(
    name = "snmputil",
    version,
    about = "Compare two SNMP walk files and calculate interface utilization"
)]
struct Args {
    /// First walk file
    #[arg(default_value = "walk1.txt")]
    first: PathBuf,

    /// Second walk file
    #[arg(default_value = "walk2.txt")]
    second: PathBuf,

    /// Print statistics for this interface index and exit (no TUI)
    #[arg(short, long, value_name = "INDEX")]
    interface: Option<u64>,

    /// With --interface, also write the statistics as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(index) = args.interface {
        return run_report(&args, index);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &args);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, args: &Args) -> Result<()> {
    let mut app = App::new(
        args.first.to_string_lossy().into_owned(),
        args.second.to_string_lossy().into_owned(),
    );

    loop {
        // Update visible rows based on terminal size
        let size = terminal.size()?;
        app.visible_rows = ui::interface_rows(size.height);

        // Draw
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        // Purely event driven; the timeout only keeps resizes snappy.
        if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    // Crossterm fires Press and Release on some platforms;
                    // only handle Press.
                    if key.kind == KeyEventKind::Press {
                        input::handle_input(&mut app, key);
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.select_prev(),
                    MouseEventKind::ScrollDown => app.select_next(),
                    _ => {}
                },
                Event::Resize(_, _) => {
                    // Handled on next draw
                }
                _ => {}
            }
        }
    }
}

/// Non-interactive mode: parse both walks, calculate statistics for the
/// requested interface, print them, and optionally export as JSON.
fn run_report(args: &Args, index: u64) -> Result<()> {
    let walk1 = read_walk_file(&args.first)?;
    let walk2 = read_walk_file(&args.second)?;

    let interfaces = match find_interfaces(&walk1, &walk2) {
        Ok(interfaces) => interfaces,
        Err(ParseError::IncompatibleWalks) => {
            bail!("the walk files are not compatible with each other")
        }
        Err(e) => bail!(e),
    };
    if !interfaces.iter().any(|entry| entry.index == index) {
        bail!("interface {index} not found in the walk files");
    }

    let snap1 = build_interface_snapshot(&walk1, index);
    let snap2 = build_interface_snapshot(&walk2, index);
    let (earlier, later) = if snap1.sys_up_time <= snap2.sys_up_time {
        (&snap1, &snap2)
    } else {
        (&snap2, &snap1)
    };

    let rows = calculate_statistics(earlier, later)?;
    for row in &rows {
        println!("{}: {}", row.description, row.value);
    }
    if let Some(path) = &args.export {
        export::write_json(&rows, path)?;
        println!("Saved stats to {}.", path.display());
    }
    Ok(())
}
