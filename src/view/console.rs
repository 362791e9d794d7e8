use super::{DisplayData, UserView};
use std::io::{self, BufRead, Write};
use tracing::error;

/// Line-oriented view over a reader and a writer.
///
/// [`ConsoleView::stdio`] binds it to the process stdin and stdout.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<io::StdinLock<'static>, io::Stdout> {
    /// A view reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer the view prints to.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the view and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            error!("Failed to write output: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> UserView for ConsoleView<R, W> {
    fn display_message(&mut self, message: &str) {
        self.write_line(message);
    }

    fn display_data(&mut self, data: DisplayData<'_>) {
        match data {
            DisplayData::Birthdays(entries) => {
                for entry in entries {
                    self.write_line(&entry.to_string());
                }
            }
            DisplayData::Book(book) if book.is_empty() => self.write_line("No contacts saved."),
            DisplayData::Book(book) => {
                for record in book.records() {
                    self.write_line(&record.to_string());
                }
            }
        }
    }

    fn get_input(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Invalid UTF-8 is replaced rather than failing the read
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Name;
    use crate::models::{AddressBook, Record, UpcomingBirthday};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn view(input: &str) -> ConsoleView<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(view: ConsoleView<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(view.into_output()).unwrap()
    }

    #[test]
    fn test_get_input_reads_lines_then_eof() {
        let mut view = view("hello\r\nadd john 1234567890\n");
        assert_eq!(view.get_input("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(
            view.get_input("> ").unwrap().as_deref(),
            Some("add john 1234567890")
        );
        assert_eq!(view.get_input("> ").unwrap(), None);
        assert_eq!(output(view), "> > > ");
    }

    #[test]
    fn test_get_input_replaces_invalid_utf8() {
        let mut view = ConsoleView::new(Cursor::new(b"add jane \xff\xfe\nexit\n".to_vec()), Vec::new());
        assert_eq!(
            view.get_input("").unwrap().as_deref(),
            Some("add jane \u{FFFD}\u{FFFD}")
        );
        assert_eq!(view.get_input("").unwrap().as_deref(), Some("exit"));
        assert_eq!(view.get_input("").unwrap(), None);
    }

    #[test]
    fn test_display_message() {
        let mut view = view("");
        view.display_message("Contact added.");
        assert_eq!(output(view), "Contact added.\n");
    }

    #[test]
    fn test_display_book() {
        let mut book = AddressBook::new();
        let mut record = Record::new(Name::new("john").unwrap());
        record.add_phone("1234567890").unwrap();
        book.add_record(record);
        book.add_record(Record::new(Name::new("jane").unwrap()));

        let mut view = view("");
        view.display_data(DisplayData::Book(&book));
        assert_eq!(
            output(view),
            "Contact name: john, phones: 1234567890\nContact name: jane, phones: \n"
        );
    }

    #[test]
    fn test_display_empty_book() {
        let book = AddressBook::new();
        let mut view = view("");
        view.display_data(DisplayData::Book(&book));
        assert_eq!(output(view), "No contacts saved.\n");
    }

    #[test]
    fn test_display_birthdays() {
        let entries = vec![UpcomingBirthday {
            name: "john".to_string(),
            congratulation_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        }];
        let mut view = view("");
        view.display_data(DisplayData::Birthdays(&entries));
        assert_eq!(output(view), "john - 2024.06.10\n");
    }
}
