//! Line commands understood by the native driver.

use std::str::{FromStr, SplitWhitespace};
use std::time::Duration;

use paged_scroll_core::{
    HeadlessSurface, InputEvent, Key, LayoutTrigger, PagedScrollController,
};
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Prev,
    Home,
    End,
    Wheel(f64),
    Swipe { from: f64, to: f64 },
    Goto(i64),
    Toggle,
    Select(usize),
    Outside,
    Resize { pane: usize, height: f64 },
    Wait(Duration),
    State,
    Help,
    Quit,
}

/// Errors from parsing a command line.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs a <{argument}> argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid <{argument}>: '{value}'")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },

    #[error("Unexpected extra argument '{0}'")]
    Trailing(String),
}

pub const HELP: &str = "\
commands:
  next | prev | home | end     keyboard navigation
  wheel <dy>                   wheel event (positive = down)
  swipe <from_y> <to_y>        touch gesture
  goto <n>                     navigation button to section n (0-based)
  toggle | select <n> | outside
                               indicator dropdown
  resize <pane> <height>       change a pane's height and recompute layout
  wait <ms>                    advance the clock
  state                        list sections
  quit";

fn arg<T: FromStr>(
    parts: &mut SplitWhitespace<'_>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, CommandError> {
    let value = parts
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        argument,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;

        let command = match name {
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "home" => Command::Home,
            "end" => Command::End,
            "wheel" => Command::Wheel(arg(&mut parts, "wheel", "dy")?),
            "swipe" => Command::Swipe {
                from: arg(&mut parts, "swipe", "from_y")?,
                to: arg(&mut parts, "swipe", "to_y")?,
            },
            "goto" => Command::Goto(arg(&mut parts, "goto", "n")?),
            "toggle" => Command::Toggle,
            "select" => Command::Select(arg(&mut parts, "select", "n")?),
            "outside" => Command::Outside,
            "resize" => Command::Resize {
                pane: arg(&mut parts, "resize", "pane")?,
                height: arg(&mut parts, "resize", "height")?,
            },
            "wait" => Command::Wait(Duration::from_millis(arg(&mut parts, "wait", "ms")?)),
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match parts.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl Command {
    /// Apply an input command to the pager. Returns whether anything changed.
    ///
    /// `State`, `Help` and `Quit` are handled by the driver and change nothing.
    pub fn apply(self, pager: &mut PagedScrollController<HeadlessSurface>) -> bool {
        match self {
            Command::Next => pager.handle_input(InputEvent::Key(Key::Down)),
            Command::Prev => pager.handle_input(InputEvent::Key(Key::Up)),
            Command::Home => pager.handle_input(InputEvent::Key(Key::Home)),
            Command::End => pager.handle_input(InputEvent::Key(Key::End)),
            Command::Wheel(delta_y) => pager.handle_input(InputEvent::Wheel { delta_y }),
            Command::Swipe { from, to } => {
                pager.handle_input(InputEvent::TouchStart { y: from });
                pager.handle_input(InputEvent::TouchEnd { y: to })
            }
            Command::Goto(target) => pager.handle_input(InputEvent::NavButton { target }),
            Command::Toggle => pager.handle_input(InputEvent::DropdownToggle),
            Command::Select(index) => pager.handle_input(InputEvent::DropdownSelect(index)),
            Command::Outside => pager.handle_input(InputEvent::OutsideClick),
            Command::Resize { pane, height } => {
                if !pager.surface_mut().set_pane_height(pane, height) {
                    log::warn!("No pane {}", pane);
                    return false;
                }
                pager.handle_input(InputEvent::Layout(LayoutTrigger::Resize))
            }
            Command::Wait(duration) => {
                pager.advance(duration);
                true
            }
            Command::State | Command::Help | Command::Quit => false,
        }
    }
}
