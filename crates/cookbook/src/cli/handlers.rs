//! One-shot command handlers shared by the binary and the shell.
//!
//! Each handler renders its outcome and reports whether the command
//! succeeded, so the caller decides the exit status.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::render::Renderer;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::Session;

/// Assess BMI from user text and render the result.
///
/// Unparseable input is rendered as the invalid-input message and reported
/// as `Ok(false)`; the session is left untouched.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn bmi<W: Write>(
    session: &Session,
    weight: &str,
    height: &str,
    renderer: &mut Renderer<W>,
) -> Result<bool> {
    match session.assess_bmi(weight, height) {
        Ok(view) => {
            renderer.bmi(&view)?;
            Ok(true)
        }
        Err(err @ Error::InvalidNumericInput { .. }) => {
            debug!("Rejected BMI input: {}", err);
            renderer.invalid_input(&err)?;
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

/// Load and validate the configuration file at `path`, reporting the outcome.
///
/// Load and validation failures are rendered against the path and reported
/// as `Ok(false)`.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn validate_config<W: Write>(path: &Path, renderer: &mut Renderer<W>) -> Result<bool> {
    match Config::load_from(Some(path.to_path_buf())) {
        Ok(_) => {
            renderer.message(&format!("{}: configuration is valid.", path.display()))?;
            Ok(true)
        }
        Err(e) => {
            debug!("Configuration at {} rejected: {}", path.display(), e);
            renderer.message(&format!("{}: {e}", path.display()))?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::logging::init_test_logging;
    use crate::session::view::INVALID_INPUT_MESSAGE;

    fn renderer(format: OutputFormat) -> Renderer<Vec<u8>> {
        init_test_logging();
        Renderer::new(Vec::new(), format)
    }

    fn output(renderer: Renderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_bmi_valid_input_succeeds() {
        let session = Session::new(&Config::default());
        let mut out = renderer(OutputFormat::Plain);
        assert!(bmi(&session, "70", "5.9", &mut out).unwrap());
        let text = output(out);
        assert!(text.contains("BMI: 21.65"));
        assert!(text.contains("You have a balanced weight!"));
    }

    #[test]
    fn test_bmi_invalid_input_reports_failure() {
        let session = Session::new(&Config::default());
        let mut out = renderer(OutputFormat::Plain);
        assert!(!bmi(&session, "seventy", "5.9", &mut out).unwrap());
        let text = output(out);
        assert!(text.contains(INVALID_INPUT_MESSAGE));
        assert!(text.contains("seventy"));
        assert!(!text.contains("BMI:"));
    }

    #[test]
    fn test_bmi_invalid_input_as_json() {
        let session = Session::new(&Config::default());
        let mut out = renderer(OutputFormat::Json);
        assert!(!bmi(&session, "70", "nan", &mut out).unwrap());
        let json: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
        assert_eq!(json["error"], "invalid_input");
        assert_eq!(json["message"], INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_validate_config_accepts_good_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nhistory_limit = 3").unwrap();

        let mut out = renderer(OutputFormat::Plain);
        assert!(validate_config(file.path(), &mut out).unwrap());
        assert!(output(out).ends_with(": configuration is valid.\n"));
    }

    #[test]
    fn test_validate_config_reports_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nhistory_limit = 0").unwrap();

        let mut out = renderer(OutputFormat::Plain);
        assert!(!validate_config(file.path(), &mut out).unwrap());
        let text = output(out);
        assert!(text.starts_with(&file.path().display().to_string()));
        assert!(text.contains("history_limit must be greater than 0"));
    }

    #[test]
    fn test_validate_config_reports_unparseable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nhistory_limit = \"lots\"").unwrap();

        let mut out = renderer(OutputFormat::Plain);
        assert!(!validate_config(file.path(), &mut out).unwrap());
        assert!(output(out).contains("failed to load configuration"));
    }
}
