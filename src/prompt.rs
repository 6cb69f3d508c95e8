use crate::REPROMPT;
use crate::engine::ChoiceEngine;
use crate::error::ValidationError;
use crate::session::Prompt;
use std::collections::VecDeque;
use std::io::BufRead;
use std::io::Write;

/// Fixed queue of lines. Remembers every rejection it was told about.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    lines: VecDeque<String>,
    rejected: Vec<ValidationError>,
}

impl Scripted {
    pub fn rejected(&self) -> &[ValidationError] {
        &self.rejected
    }
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Scripted {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
            rejected: Vec::new(),
        }
    }
}
impl<S: Into<String>, const N: usize> From<[S; N]> for Scripted {
    fn from(lines: [S; N]) -> Self {
        lines.into_iter().collect()
    }
}

impl Prompt for Scripted {
    fn ask(&mut self, _: &ChoiceEngine) -> Option<String> {
        self.lines.pop_front()
    }
    fn reject(&mut self, error: &ValidationError) {
        self.rejected.push(error.clone());
    }
}

/// Plain line-oriented prompt over any reader and writer.
///
/// Used when stdin is not a terminal, so end of input is seen as a
/// zero-byte read rather than blocking forever.
#[derive(Debug)]
pub struct Lines<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Lines<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// "Please choose one of the following, Rock Paper Scissors: "
pub fn question(engine: &ChoiceEngine) -> String {
    engine
        .options()
        .iter()
        .fold(String::from("Please choose one of the following,"), |q, g| {
            format!("{} {}", q, g)
        })
}

impl<R: BufRead, W: Write> Prompt for Lines<R, W> {
    fn ask(&mut self, engine: &ChoiceEngine) -> Option<String> {
        if let Err(e) =
            write!(self.writer, "{}: ", question(engine)).and_then(|_| self.writer.flush())
        {
            log::warn!("prompt write failed: {}", e);
        }
        // a line that is not UTF-8 is a bad choice, not the end of input
        let ref mut bytes = Vec::new();
        match self.reader.read_until(b'\n', bytes) {
            Ok(0) => None,
            Ok(_) => Some(
                String::from_utf8_lossy(bytes)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            ),
            Err(e) => {
                log::warn!("prompt read failed: {}", e);
                None
            }
        }
    }
    fn reject(&mut self, _: &ValidationError) {
        if let Err(e) = writeln!(self.writer, "{}", REPROMPT) {
            log::warn!("prompt write failed: {}", e);
        }
    }
}

/// Terminal prompt backed by `dialoguer`.
///
/// Returns the raw line, blank ones included, so rejections and the
/// attempt limit go through [`Session::acquire`](crate::Session::acquire)
/// exactly as for [`Lines`]. A failed interaction (closed terminal,
/// interrupted read) counts as exhausted input.
#[cfg(feature = "cli")]
#[derive(Debug, Default)]
pub struct Interactive;

#[cfg(feature = "cli")]
impl Prompt for Interactive {
    fn ask(&mut self, engine: &ChoiceEngine) -> Option<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(question(engine))
            .report(false)
            .allow_empty(true)
            .interact_text()
            .inspect_err(|e| log::warn!("terminal prompt failed: {}", e))
            .ok()
    }
    fn reject(&mut self, error: &ValidationError) {
        println!("{} ({})", REPROMPT, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_lists_options_in_order() {
        assert_eq!(
            question(&ChoiceEngine::default()),
            "Please choose one of the following, Rock Paper Scissors"
        );
    }

    #[test]
    fn lines_strip_newlines_and_report_eof() {
        let engine = ChoiceEngine::default();
        let ref mut prompt = Lines::new("Rock\r\npaper\n".as_bytes(), Vec::new());
        assert_eq!(prompt.ask(&engine).as_deref(), Some("Rock"));
        assert_eq!(prompt.ask(&engine).as_deref(), Some("paper"));
        assert_eq!(prompt.ask(&engine), None);
    }

    #[test]
    fn lines_reprompt_after_rejection() {
        let engine = ChoiceEngine::default();
        let mut prompt = Lines::new("Dynamite\n".as_bytes(), Vec::new());
        let line = prompt.ask(&engine).unwrap();
        prompt.reject(&engine.validate(line.as_str()).unwrap_err());
        let (_, written) = prompt.into_inner();
        let written = String::from_utf8(written).unwrap();
        assert!(written.starts_with("Please choose one of the following,"));
        assert!(written.ends_with("You must enter a valid choice.\n"));
    }

    #[test]
    fn lines_drive_a_session_to_completion() {
        let session = crate::session::Session::default();
        let ref mut prompt = Lines::new("\nLizard\nscissors\n".as_bytes(), Vec::new());
        let choice = session.acquire(prompt).unwrap();
        assert_eq!(choice.gesture().name(), "Scissors");
        assert_eq!(session.acquire(prompt), Err(crate::error::SessionError::Exhausted));
    }

    #[test]
    fn lines_reject_invalid_utf8_and_keep_reading() {
        let session = crate::session::Session::default();
        let mut prompt = Lines::new(&b"\xff\xfe\nRock\n"[..], Vec::new());
        let choice = session.acquire(&mut prompt).unwrap();
        assert_eq!(choice.gesture().name(), "Rock");
        let (_, written) = prompt.into_inner();
        let written = String::from_utf8(written).unwrap();
        assert_eq!(written.matches(REPROMPT).count(), 1);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn interactive_leaves_validation_to_the_session() {
        fn prompt<P: Prompt + Default>() -> P {
            P::default()
        }
        let mut interactive = prompt::<Interactive>();
        interactive.reject(&ValidationError::Empty);
    }

    #[test]
    fn scripted_collects_from_iterators() {
        let prompt = ["a", "b"].into_iter().collect::<Scripted>();
        assert_eq!(prompt.remaining(), 2);
        assert!(prompt.rejected().is_empty());
    }
}
