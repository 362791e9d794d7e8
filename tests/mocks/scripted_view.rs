use contact_assistant::view::{DisplayData, UserView};
use std::collections::VecDeque;
use std::io;

/// View that replays scripted input lines and records everything shown.
///
/// Structured data is recorded in the same text form the console uses,
/// so assertions read like a transcript.
#[allow(dead_code)]
pub struct ScriptedView {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
    fail_when_exhausted: bool,
}

#[allow(dead_code)]
impl ScriptedView {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
            fail_when_exhausted: false,
        }
    }

    /// Report a read error instead of end of input once the script runs out.
    pub fn fail_when_exhausted(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }

    /// Everything displayed so far, one entry per line.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Displayed lines with the welcome banner stripped.
    pub fn replies(&self) -> &[String] {
        self.output.get(1..).unwrap_or_default()
    }

    /// Number of times input was requested.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl UserView for ScriptedView {
    fn display_message(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn display_data(&mut self, data: DisplayData<'_>) {
        match data {
            DisplayData::Birthdays(entries) => self
                .output
                .extend(entries.iter().map(ToString::to_string)),
            DisplayData::Book(book) => self
                .output
                .extend(book.records().iter().map(ToString::to_string)),
        }
    }

    fn get_input(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        match self.input.pop_front() {
            Some(line) => Ok(Some(line)),
            None if self.fail_when_exhausted => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            None => Ok(None),
        }
    }
}
