//! AddressBook: the keyed, ordered collection of contacts.
//!
//! Also hosts the upcoming-birthday query and its weekend-adjustment
//! helpers.

use super::record::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default lookahead window for [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Textual format of a congratulation date.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to congratulate on, already moved off weekends
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn date_text(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date_text())
    }
}

/// Collection of records keyed by contact name.
///
/// Records keep their insertion order. Every record is stored under its
/// own name, so the key/name invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with the same
    /// name in its current position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Find a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove a record by name. Does nothing if absent.
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            self.records.remove(index);
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Birthdays within `days` days of the local current date.
    pub fn upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays(Local::now().date_naive(), days)
    }

    /// Birthdays falling between `today` and `today + days`, inclusive.
    ///
    /// Each birthday is placed in `today`'s year, or in the next year when
    /// that date has already passed. Dates landing on a weekend are moved
    /// to the following Monday. Results follow book order.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let window = i64::from(days);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();

                let mut occurrence = birthday_in_year(birthday, today.year())?;
                if occurrence < today {
                    occurrence = birthday_in_year(birthday, today.year() + 1)?;
                }

                let days_until = (occurrence - today).num_days();
                if !(0..=window).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: adjust_for_weekend(occurrence),
                })
            })
            .collect()
    }
}

/// The anniversary of `date` in `year`.
///
/// 29 February maps to 1 March in non-leap years.
fn birthday_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// First date strictly after `start` that falls on `weekday`.
pub fn next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(start.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    start + Duration::days(days_ahead)
}

/// Move a Saturday or Sunday forward to the next Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    if date.weekday().num_days_from_monday() >= 5 {
        next_weekday(date, Weekday::Mon)
    } else {
        date
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - snapshot is the ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.records)
    }
}

// Keys are rebuilt from record names, so a duplicate name overwrites in place.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
