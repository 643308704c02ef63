//! Interactive parameter input
//!
//! Reads the column parameters one per line. A non-numeric answer or a set
//! of values that fails validation restarts the whole sequence, up to a
//! bounded number of attempts.

use std::io::{self, BufRead, Write};

use mccabe_rs::physics::ColumnParameters;
use thiserror::Error;

/// Prompts, in input order
pub const PROMPTS: [&str; 6] = [
    "Alpha (relative volatility): ",
    "Molar Reflux Ratio: ",
    "Feed Thermal Condition (q) (1=Saturated Liquid): ",
    "Feed Composition (zf): ",
    "Bottoms Composition (xb): ",
    "Distillate Composition (xd): ",
];

/// Errors of the interactive input loop
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended before all parameters were entered")]
    EndOfInput,

    #[error("No valid parameters after {0} attempts")]
    TooManyAttempts(usize),
}

/// Parameters given up front; `None` entries are asked for
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresetParameters(pub [Option<f64>; 6]);

impl PresetParameters {
    /// All six values, if every one was given
    pub fn complete(&self) -> Option<ColumnParameters> {
        let [alpha, r, q, zf, xb, xd] = self.0;
        Some(ColumnParameters::new(alpha?, r?, q?, zf?, xb?, xd?))
    }
}

/// Read one answer; `Ok(None)` at end of input
fn read_answer<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<Option<String>, PromptError> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Collect and validate parameters, asking for the missing ones
///
/// Once a set of values fails validation, the preset values are no longer
/// trusted and every parameter is asked for on the next attempt.
///
/// # Errors
///
/// - `PromptError::EndOfInput` if the reader is exhausted mid-sequence
/// - `PromptError::TooManyAttempts` after `max_attempts` rejected sequences
pub fn read_parameters<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    preset: &PresetParameters,
    max_attempts: usize,
) -> Result<ColumnParameters, PromptError> {
    let mut preset = *preset;

    for attempt in 1..=max_attempts {
        writeln!(writer, "\nInput parameters and press Enter to continue")?;

        let mut values = [0.0; 6];
        let mut parsed_all = true;

        for (i, prompt) in PROMPTS.iter().enumerate() {
            if let Some(value) = preset.0[i] {
                values[i] = value;
                continue;
            }

            let answer = read_answer(reader, writer, prompt)?.ok_or(PromptError::EndOfInput)?;
            match answer.parse::<f64>() {
                Ok(value) => values[i] = value,
                Err(_) => {
                    writeln!(writer, "Error: All inputs must be valid numbers.")?;
                    parsed_all = false;
                    break;
                }
            }
        }

        if !parsed_all {
            tracing::debug!(attempt, "non-numeric input, restarting");
            continue;
        }

        let [alpha, r, q, zf, xb, xd] = values;
        let params = ColumnParameters::new(alpha, r, q, zf, xb, xd);

        match params.validate() {
            Ok(()) => return Ok(params),
            Err(e) => {
                writeln!(writer, "Error: {}", e)?;
                tracing::debug!(attempt, error = %e, "parameters rejected, restarting");
                preset = PresetParameters::default();
            }
        }
    }

    Err(PromptError::TooManyAttempts(max_attempts))
}

/// Ask whether to save the diagram; `s` (any case) means yes
pub fn ask_save<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool, PromptError> {
    let answer = read_answer(reader, writer, "Save as image if needed press s.\n")?;
    Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("s")))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, preset: PresetParameters) -> (Result<ColumnParameters, PromptError>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_parameters(&mut reader, &mut output, &preset, 3);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reads_all_six_values() {
        let (result, output) = run("2.5\n2\n1\n0.5\n0.05\n0.95\n", PresetParameters::default());
        let params = result.unwrap();

        assert_eq!(params, ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95));
        for prompt in PROMPTS {
            assert!(output.contains(prompt));
        }
    }

    #[test]
    fn test_non_numeric_input_restarts() {
        let input = "abc\n2.5\n2\n1\n0.5\n0.05\n0.95\n";
        let (result, output) = run(input, PresetParameters::default());

        assert!(result.is_ok());
        assert!(output.contains("Error: All inputs must be valid numbers."));
        assert_eq!(output.matches("Input parameters").count(), 2);
    }

    #[test]
    fn test_invalid_parameters_restart() {
        let input = "1.0\n2\n1\n0.5\n0.05\n0.95\n2.5\n2\n1\n0.5\n0.05\n0.95\n";
        let (result, output) = run(input, PresetParameters::default());

        assert_eq!(result.unwrap().alpha, 2.5);
        assert!(output.contains("Relative volatility (alpha) must be greater than 1."));
    }

    #[test]
    fn test_preset_values_are_not_prompted() {
        let preset = PresetParameters([Some(2.5), Some(2.0), Some(1.0), None, None, None]);
        let (result, output) = run("0.5\n0.05\n0.95\n", preset);

        assert_eq!(result.unwrap().reflux_ratio, 2.0);
        assert!(!output.contains(PROMPTS[0]));
        assert!(output.contains(PROMPTS[3]));
    }

    #[test]
    fn test_invalid_preset_is_asked_again() {
        // alpha = 0.5 from the command line can never validate
        let preset = PresetParameters([Some(0.5), None, None, None, None, None]);
        let input = "2\n1\n0.5\n0.05\n0.95\n2.5\n2\n1\n0.5\n0.05\n0.95\n";
        let (result, output) = run(input, preset);

        assert_eq!(result.unwrap(), ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95));
        assert_eq!(output.matches("Relative volatility (alpha) must be greater than 1.").count(), 1);
        assert_eq!(output.matches(PROMPTS[0]).count(), 1);
    }

    #[test]
    fn test_non_numeric_input_keeps_preset() {
        let preset = PresetParameters([Some(2.5), None, None, None, None, None]);
        let (result, output) = run("x\n2\n1\n0.5\n0.05\n0.95\n", preset);

        assert_eq!(result.unwrap().alpha, 2.5);
        assert!(!output.contains(PROMPTS[0]));
    }

    #[test]
    fn test_end_of_input() {
        let (result, _) = run("2.5\n2\n", PresetParameters::default());
        assert!(matches!(result, Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_attempts_are_bounded() {
        let (result, _) = run("x\nx\nx\nx\n", PresetParameters::default());
        assert!(matches!(result, Err(PromptError::TooManyAttempts(3))));
    }

    #[test]
    fn test_complete_preset() {
        let preset = PresetParameters([Some(2.5), Some(2.0), Some(1.0), Some(0.5), Some(0.05), Some(0.95)]);
        assert!(preset.complete().is_some());
        assert!(PresetParameters::default().complete().is_none());
    }

    #[test]
    fn test_ask_save() {
        let mut output = Vec::new();
        assert!(ask_save(&mut Cursor::new(b"S\n".to_vec()), &mut output).unwrap());
        assert!(!ask_save(&mut Cursor::new(b"\n".to_vec()), &mut output).unwrap());
        assert!(!ask_save(&mut Cursor::new(Vec::new()), &mut output).unwrap());
    }
}
