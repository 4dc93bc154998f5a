use std::{error::Error, fmt::Display, io};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlotErr {
    /// Kind and message of the underlying IO error.
    Io(io::ErrorKind, String),
    InvalidLogLevel(String),
    InvalidFlag(String),
}

impl Display for PlotErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotErr::Io(_, msg) => write!(f, "failed to write plot: {}", msg),
            PlotErr::InvalidLogLevel(level) => {
                write!(f, "invalid log level: {:?}", level)
            }
            PlotErr::InvalidFlag(flag) => {
                write!(f, "invalid boolean flag: {:?}", flag)
            }
        }
    }
}

impl Error for PlotErr {}

impl From<io::Error> for PlotErr {
    fn from(err: io::Error) -> Self {
        PlotErr::Io(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn io_error_keeps_message() {
        let err = PlotErr::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only file system",
        ));
        assert_eq!(
            err,
            PlotErr::Io(
                io::ErrorKind::PermissionDenied,
                "read-only file system".to_string()
            )
        );
        assert_eq!(
            err.to_string(),
            "failed to write plot: read-only file system"
        );
    }
}
