//! Client code and the demo entry sequence
//!
//! Output always goes through an [`io::Write`] sink so callers decide where
//! it lands. The binary passes stdout, tests pass a `Vec<u8>`.

use std::io::{self, Write};

use crate::creator::{CircleCreator, ShapeCreator, ShapeCreatorExt, SquareCreator};
use crate::error::AppError;

/// Run a creator's template operation and write the result as one line
///
/// The caller only depends on [`ShapeCreator`], never on a concrete shape.
pub fn client_code<W: Write + ?Sized>(out: &mut W, creator: &dyn ShapeCreator) -> io::Result<()> {
    writeln!(out, "{}", creator.create())
}

/// Write the full demo: a circle block, a blank line, then a square block
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// shape_factory::run_app(&mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("App: Drawing a circle.\n"));
/// ```
pub fn run_app<W: Write + ?Sized>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "App: Drawing a circle.")?;
    client_code(out, &CircleCreator)?;
    writeln!(out)?;

    writeln!(out, "App: Drawing a square.")?;
    client_code(out, &SquareCreator)?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn capture(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_client_code_circle() {
        let out = capture(|buf| client_code(buf, &CircleCreator).unwrap());
        assert_eq!(out, "ShapeCreator: Created shape - Drawing a circle\n");
    }

    #[test]
    fn test_client_code_square() {
        let out = capture(|buf| client_code(buf, &SquareCreator).unwrap());
        assert_eq!(out, "ShapeCreator: Created shape - Drawing a square\n");
    }

    #[test]
    fn test_run_app_is_deterministic() {
        let first = capture(|buf| run_app(buf).unwrap());
        let second = capture(|buf| run_app(buf).unwrap());
        assert_eq!(first, second);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_app_reports_sink_failure() {
        let result = run_app(&mut FailingSink);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
