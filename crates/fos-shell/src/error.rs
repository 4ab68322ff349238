//! Shell errors

/// Shell error
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Invalid switch: --{switch} requires a value")]
    InvalidSwitch { switch: &'static str },
}
