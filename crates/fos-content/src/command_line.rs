//! Command Line
//!
//! Switches and arguments of the browser process and of the child processes
//! it launches.

use std::fmt;

const SWITCH_PREFIX: &str = "--";
const SWITCH_TERMINATOR: &str = "--";
const SWITCH_VALUE_SEPARATOR: char = '=';

/// Parsed command line: program, `--switch[=value]` entries and positional arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    /// Program path (argv[0])
    program: String,
    /// Switches in the order they were parsed or appended
    switches: Vec<(String, String)>,
    /// Positional arguments
    args: Vec<String>,
}

impl CommandLine {
    /// Create an empty command line for a program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            switches: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Parse the current process's arguments
    pub fn from_env() -> Self {
        Self::from_args(std::env::args())
    }

    /// Parse from an argv-style sequence; the first item is the program
    pub fn from_args<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let mut command_line = Self::new(argv.next().unwrap_or_default());
        let mut parse_switches = true;

        for arg in argv {
            if parse_switches && arg == SWITCH_TERMINATOR {
                parse_switches = false;
                continue;
            }

            match arg.strip_prefix(SWITCH_PREFIX) {
                Some(switch) if parse_switches && !switch.is_empty() => {
                    let (name, value) = switch
                        .split_once(SWITCH_VALUE_SEPARATOR)
                        .unwrap_or((switch, ""));
                    command_line.switches.push((name.to_string(), value.to_string()));
                }
                _ => command_line.args.push(arg),
            }
        }

        command_line
    }

    /// Program path
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether a switch is present
    pub fn has_switch(&self, name: &str) -> bool {
        self.switches.iter().any(|(n, _)| n == name)
    }

    /// Value of a switch; the last occurrence wins. Valueless switches yield `""`.
    pub fn switch_value(&self, name: &str) -> Option<&str> {
        self.switches
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a valueless switch
    pub fn append_switch(&mut self, name: &str) {
        self.append_switch_with_value(name, "");
    }

    /// Append a switch with a value
    pub fn append_switch_with_value(&mut self, name: &str, value: &str) {
        self.switches.push((name.to_string(), value.to_string()));
    }

    /// Append a positional argument
    pub fn append_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Switches in order
    pub fn switches(&self) -> impl Iterator<Item = (&str, &str)> {
        self.switches.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Positional arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the argv used to spawn the process
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(1 + self.switches.len() + self.args.len() + 1);
        argv.push(self.program.clone());

        for (name, value) in &self.switches {
            if value.is_empty() {
                argv.push(format!("{SWITCH_PREFIX}{name}"));
            } else {
                argv.push(format!("{SWITCH_PREFIX}{name}{SWITCH_VALUE_SEPARATOR}{value}"));
            }
        }

        // Keep dash-prefixed positionals from being read back as switches
        if self.args.iter().any(|a| a.starts_with('-')) {
            argv.push(SWITCH_TERMINATOR.to_string());
        }
        argv.extend(self.args.iter().cloned());

        argv
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}
