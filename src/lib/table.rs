use std::{borrow::Cow, fmt, io, path::Path};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::variable::Variable;

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// A delimited table: a header row followed by data rows, kept as raw fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
  pub header: Vec<String>,
  pub rows: Vec<Vec<String>>,
}

impl Table {
  pub fn new<I, S>(header: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      header: header.into_iter().map(Into::into).collect(),
      rows: Vec::new(),
    }
  }

  pub fn push_row<I, S>(&mut self, row: I)
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.rows.push(row.into_iter().map(Into::into).collect());
  }

  /// Reads column 1 as the name and column 2 as the value of each data row.
  ///
  /// Both columns are trimmed. Rows with fewer than two columns or an empty
  /// name are dropped; any further columns are ignored.
  pub fn variables(&self) -> Vec<Variable> {
    self
      .rows
      .iter()
      .filter_map(|row| match row.as_slice() {
        [name, value, ..] => {
          let name = name.trim();
          if name.is_empty() {
            #[cfg(feature = "tracing")]
            trace!("Skipping row with empty name");
            None
          } else {
            Some(Variable::new(name, value.trim()))
          }
        }
        _ => None,
      })
      .collect()
  }
}

impl fmt::Display for Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_record(f, self.header.as_slice())?;
    for row in &self.rows {
      write_record(f, row.as_slice())?;
    }
    Ok(())
  }
}

impl TryFrom<&str> for Table {
  type Error = TableError;

  fn try_from(s: &str) -> Result<Self, Self::Error> {
    let mut records = parse_records(s)?.into_iter();
    let header = records.next().ok_or(TableError::MissingHeader)?;
    let rows: Vec<_> = records.collect();

    #[cfg(feature = "tracing")]
    debug!("Parsed table with {} data rows", rows.len());

    Ok(Self { header, rows })
  }
}

/// Reads the local variables file: header row skipped, see [`Table::variables`].
pub fn read_variables<P: AsRef<Path>>(path: P) -> Result<Vec<Variable>, TableError> {
  #[cfg(feature = "tracing")]
  debug!("Reading variables from {:?}", path.as_ref());

  let content = std::fs::read_to_string(path).map_err(TableError::Io)?;
  let table = Table::try_from(content.as_str())?;
  Ok(table.variables())
}

/// Quotes a field when it would otherwise be misread.
pub fn quote_field(field: &str) -> Cow<'_, str> {
  let needs_quotes = field.starts_with([' ', '\t'])
    || field.contains([SEPARATOR, QUOTE, '\r', '\n']);

  if needs_quotes {
    let escaped = field.replace(QUOTE, "\"\"");
    Cow::Owned(format!("{QUOTE}{escaped}{QUOTE}"))
  } else {
    Cow::Borrowed(field)
  }
}

fn write_record<W: fmt::Write, S: AsRef<str>>(w: &mut W, fields: &[S]) -> fmt::Result {
  for (i, field) in fields.iter().enumerate() {
    if i > 0 {
      w.write_char(SEPARATOR)?;
    }
    w.write_str(&quote_field(field.as_ref()))?;
  }
  w.write_char('\n')
}

fn parse_records(s: &str) -> Result<Vec<Vec<String>>, TableError> {
  let mut records = Vec::new();
  let mut record = Vec::new();
  let mut field = String::new();
  let mut quoted = false;
  let mut in_quotes = false;
  let mut line = 1;
  let mut quote_line = 1;
  let mut chars = s.chars().peekable();

  while let Some(c) = chars.next() {
    if in_quotes {
      match c {
        QUOTE if chars.peek() == Some(&QUOTE) => {
          chars.next();
          field.push(QUOTE);
        }
        QUOTE => in_quotes = false,
        '\r' if chars.peek() == Some(&'\n') => {}
        '\n' => {
          line += 1;
          field.push('\n');
        }
        _ => field.push(c),
      }
      continue;
    }

    match c {
      QUOTE if field.is_empty() && !quoted => {
        quoted = true;
        in_quotes = true;
        quote_line = line;
      }
      SEPARATOR => {
        record.push(std::mem::take(&mut field));
        quoted = false;
      }
      '\r' if chars.peek() == Some(&'\n') => {}
      '\n' => {
        line += 1;
        // Blank lines carry no record.
        if !record.is_empty() || !field.is_empty() || quoted {
          record.push(std::mem::take(&mut field));
          records.push(std::mem::take(&mut record));
        }
        quoted = false;
      }
      _ => field.push(c),
    }
  }

  if in_quotes {
    return Err(TableError::UnterminatedQuote(quote_line));
  }

  if !record.is_empty() || !field.is_empty() || quoted {
    record.push(field);
    records.push(record);
  }

  Ok(records)
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
  #[error("Failed to read file: {0}")]
  Io(io::Error),
  #[error("File is empty, expected a header row")]
  MissingHeader,
  #[error("Unterminated quoted field starting on line {0}")]
  UnterminatedQuote(usize),
}
