//! Native driver: the pager over a simulated page, fed from line commands.
//!
//! Real time elapsed between commands is forwarded to the simulated clock, so
//! typing two `next` commands quickly shows the transition lock at work.

pub mod commands;

use std::io::{self, BufRead, Write};
use std::path::Path;

use paged_scroll_core::{HeadlessSurface, PagedScrollController, PagerConfig, PagerError};
use thiserror::Error;
use web_time::Instant;

use commands::{Command, HELP};

/// Panes simulated when the configuration names none.
pub const DEFAULT_PANE_COUNT: usize = 10;

/// Height of every simulated pane, in pixels.
pub const DEFAULT_PANE_HEIGHT: f64 = 900.0;

/// Errors that end the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Pager(#[from] PagerError),
}

/// Load the configuration file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PagerConfig, DriverError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(PagerConfig::from_json(&json)?)
        }
        None => Ok(PagerConfig::default()),
    }
}

/// Build an initialized pager over a simulated page sized for `config`.
pub fn build_pager(
    config: &PagerConfig,
) -> Result<PagedScrollController<HeadlessSurface>, DriverError> {
    let panes = match config.section_names.len() {
        0 => DEFAULT_PANE_COUNT,
        named => named,
    };
    let surface = HeadlessSurface::uniform(panes, DEFAULT_PANE_HEIGHT);
    let mut pager = PagedScrollController::new(surface, config)?;
    pager.initialize();
    Ok(pager)
}

/// Read commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    config: &PagerConfig,
    input: R,
    mut output: W,
) -> Result<(), DriverError> {
    let mut pager = build_pager(config)?;
    let mut last_tick = Instant::now();

    writeln!(output, "{}", pager.indicator_view().label)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        pager.advance(last_tick.elapsed());
        last_tick = Instant::now();

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::State => write_state(&pager, &mut output)?,
            command => {
                let changed = command.apply(&mut pager);
                log::debug!("{:?} -> changed: {}", command, changed);
                write_status(&pager, &mut output)?;
            }
        }
    }

    Ok(())
}

fn write_status<W: Write>(
    pager: &PagedScrollController<HeadlessSurface>,
    output: &mut W,
) -> io::Result<()> {
    let view = pager.indicator_view();
    writeln!(
        output,
        "{} {} [{:?}] y={}",
        view.label,
        view.toggle_glyph,
        pager.phase(),
        pager.surface().transform()
    )
}

fn write_state<W: Write>(
    pager: &PagedScrollController<HeadlessSurface>,
    output: &mut W,
) -> io::Result<()> {
    for section in pager.sections() {
        let marker = if section.index == pager.current_index() {
            '>'
        } else {
            ' '
        };
        let offset = section
            .offset
            .map_or_else(|| "-".to_string(), |offset| offset.to_string());
        writeln!(
            output,
            "{} {:>2} {:<28} {}",
            marker, section.index, section.name, offset
        )?;
    }
    Ok(())
}
