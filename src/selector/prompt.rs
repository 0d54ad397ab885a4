//! Console question/answer loop with injectable input and output.
//!
//! The validation step is a pure function; `Prompter` only adds the I/O around it,
//! so tests can script the operator's answers with in-memory buffers.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::path::PathBuf;

use thiserror::Error;

/// Failure while obtaining a selection from the operator.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The answer is not one of the listed candidates.
    #[error("{input:?} is not one of the available entries")]
    NotFound { input: String },
    /// Input ended before a valid answer was given.
    #[error("input closed before a valid selection was made")]
    InputClosed,
    /// The candidate directory could not be listed.
    #[error("failed to list {}", dir.display())]
    Listing {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Check `input` against the candidate set.
///
/// Only an exact match is accepted: no trimming, no case folding.
///
/// # Returns
///
/// The matching candidate, or `SelectionError::NotFound`.
pub fn validate_selection<'a>(input: &str, candidates: &'a [String]) -> Result<&'a str, SelectionError> {
    candidates
        .iter()
        .find(|candidate| candidate.as_str() == input)
        .map(String::as_str)
        .ok_or_else(|| SelectionError::NotFound { input: input.to_string() })
}

/// Candidates rendered as a bracketed, single-quoted list: `['a', 'b']`.
pub fn format_candidates(candidates: &[String]) -> String {
    let quoted: Vec<String> = candidates.iter().map(|candidate| format!("'{}'", candidate)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Wording of one question/answer exchange.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    /// Printed before the candidate list, if any.
    pub heading: Option<&'a str>,
    /// Printed right before reading the answer.
    pub prompt: &'a str,
    /// Printed after an answer that is not a candidate.
    pub rejection: &'a str,
}

/// Reads answers from `R` and writes prompts to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter bound to the process console.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until the answer exactly matches one of the listed candidates.
    ///
    /// `list_candidates` is called at the start of every round, so each answer is
    /// checked against a fresh listing. Each round shows that listing and the prompt,
    /// then reads one line. There is no retry limit; the loop only ends early when
    /// input is closed or listing fails.
    pub fn choose<F>(&mut self, question: &Question<'_>, mut list_candidates: F) -> Result<String, SelectionError>
    where
        F: FnMut() -> Result<Vec<String>, SelectionError>,
    {
        loop {
            let candidates = list_candidates()?;
            if let Some(heading) = question.heading {
                writeln!(self.output, "{}", heading)?;
            }
            writeln!(self.output, "{}", format_candidates(&candidates))?;
            write!(self.output, "{}", question.prompt)?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match validate_selection(&answer, &candidates) {
                Ok(choice) => return Ok(choice.to_string()),
                Err(SelectionError::NotFound { input }) => {
                    log::debug!("Rejected selection {:?}", input);
                    writeln!(self.output, "{}", question.rejection)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Read one line with its terminator removed and nothing else.
    fn read_answer(&mut self) -> Result<String, SelectionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SelectionError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Give back the output sink (used by tests to inspect what was printed).
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUESTION: Question<'static> = Question {
        heading: None,
        prompt: "Choose an algorithm:",
        rejection: "That algorithm doesn't exist",
    };

    fn candidates() -> Vec<String> {
        vec!["festive".to_string(), "panda".to_string(), "tobasco".to_string()]
    }

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn validate_accepts_only_exact_candidates() {
        let list = candidates();
        assert_eq!(validate_selection("panda", &list).unwrap(), "panda");
        for input in ["Panda", " panda", "panda ", "", "pand", "pandas"] {
            assert!(matches!(validate_selection(input, &list), Err(SelectionError::NotFound { .. })), "accepted {:?}", input);
        }
    }

    #[test]
    fn choose_returns_first_valid_answer() {
        let mut prompter = prompter("panda\nfestive\n");
        assert_eq!(prompter.choose(&QUESTION, || Ok(candidates())).unwrap(), "panda");
    }

    #[test]
    fn choose_reprompts_after_invalid_answers() {
        let mut prompter = prompter("bola\nPANDA\ntobasco\n");
        assert_eq!(prompter.choose(&QUESTION, || Ok(candidates())).unwrap(), "tobasco");

        let printed = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(printed.matches("That algorithm doesn't exist").count(), 2);
        assert_eq!(printed.matches("Choose an algorithm:").count(), 3);
        assert_eq!(printed.matches("['festive', 'panda', 'tobasco']").count(), 3);
    }

    #[test]
    fn choose_strips_crlf_but_not_spaces() {
        let mut prompter = prompter("panda \r\npanda\r\n");
        assert_eq!(prompter.choose(&QUESTION, || Ok(candidates())).unwrap(), "panda");
        let printed = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(printed.matches("That algorithm doesn't exist").count(), 1);
    }

    #[test]
    fn choose_accepts_final_line_without_newline() {
        let mut prompter = prompter("festive");
        assert_eq!(prompter.choose(&QUESTION, || Ok(candidates())).unwrap(), "festive");
    }

    #[test]
    fn choose_fails_when_input_closes() {
        let mut prompter = prompter("nope\n");
        assert!(matches!(prompter.choose(&QUESTION, || Ok(candidates())), Err(SelectionError::InputClosed)));
    }

    #[test]
    fn heading_is_printed_before_candidates() {
        let question = Question {
            heading: Some("Number of clients:"),
            prompt: "Plot for which number of clients?",
            rejection: "That number of clients doesn't exist",
        };
        let mut prompter = prompter("5\n");
        let list = vec!["5".to_string(), "10".to_string()];
        assert_eq!(prompter.choose(&question, || Ok(list.clone())).unwrap(), "5");
        let printed = String::from_utf8(prompter.into_output()).unwrap();
        assert!(printed.starts_with("Number of clients:\n['5', '10']\nPlot for which number of clients?"));
    }

    #[test]
    fn candidates_are_relisted_every_round() {
        let mut rounds = 0;
        let mut prompter = prompter("bola\nbola\n");
        let choice = prompter
            .choose(&QUESTION, || {
                rounds += 1;
                let mut list = candidates();
                if rounds > 1 {
                    list.push("bola".to_string());
                }
                Ok(list)
            })
            .unwrap();
        assert_eq!(choice, "bola");
        assert_eq!(rounds, 2);

        let printed = String::from_utf8(prompter.into_output()).unwrap();
        assert!(printed.contains("['festive', 'panda', 'tobasco', 'bola']"));
        assert_eq!(printed.matches("That algorithm doesn't exist").count(), 1);
    }

    #[test]
    fn listing_failure_stops_the_loop() {
        let mut prompter = prompter("panda\n");
        let result = prompter.choose(&QUESTION, || {
            Err(SelectionError::Listing {
                dir: PathBuf::from("dash-log-files"),
                source: io::Error::new(io::ErrorKind::NotFound, "gone"),
            })
        });
        assert!(matches!(result, Err(SelectionError::Listing { .. })));
    }

    #[test]
    fn candidates_print_as_quoted_list() {
        assert_eq!(format_candidates(&[]), "[]");
        assert_eq!(format_candidates(&["1".to_string(), "10".to_string()]), "['1', '10']");
    }
}
