//! Built-in commands.
//!
//! | Command    | Output                                          |
//! |------------|-------------------------------------------------|
//! | `conix`    | version banner (three lines)                    |
//! | `fortnite` | a reminder of what the terminal is for          |
//! | `shimboot` | `no`                                            |
//! | other      | `command not found: <input>`                    |

pub const NOT_FOUND_PREFIX: &str = "command not found: ";

pub const BANNER: &str = "CONIX Kernel v0.1.1\nby Coen Buck\nReleased November 3rd, 2025";

struct Command {
    name: &'static str,
    output: &'static str,
}

static COMMANDS: &[Command] = &[
    Command {
        name: "conix",
        output: BANNER,
    },
    Command {
        name: "fortnite",
        output: "timmy this is NOT how the terminal works",
    },
    Command {
        name: "shimboot",
        output: "no",
    },
];

/// What a submitted line produces. Every line produces something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response<'a> {
    Output(&'static str),
    NotFound(&'a [u8]),
}

/// Exact, case-sensitive lookup of `line` in the command table.
pub fn dispatch(line: &[u8]) -> Response<'_> {
    COMMANDS
        .iter()
        .find(|command| command.name.as_bytes() == line)
        .map(|command| Response::Output(command.output))
        .unwrap_or(Response::NotFound(line))
}
