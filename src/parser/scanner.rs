// Line classification for the graph builder

use crate::config::ParseMode;
use crate::error::{Error, Result};
use crate::parser::line::{parse_line, split_lines, GedcomLine, LineSplit};
use std::iter::{Enumerate, Peekable};

/// What a logical line means to the graph builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// `0 @I1@ INDI` with the record id
    BeginIndividual(&'a str),
    /// `1 NAME` with the raw name value
    Name(Option<&'a str>),
    /// `1 BIRT`, with the date of an immediately following `2 DATE` line
    Birth(Option<&'a str>),
    Husband(&'a str),
    Wife(&'a str),
    Child(&'a str),
    /// `0 @F1@ FAM`
    BeginFamily,
    /// Any other level-0 record (HEAD, SUBM, SOUR, TRLR, ...)
    BeginRecord,
    /// Everything the builder ignores
    Other,
}

/// A classified line with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned<'a> {
    pub line: usize,
    pub field: Field<'a>,
}

/// Iterator classifying the lines of a GEDCOM document.
///
/// Each item covers one line, except that a `BIRT` line consumes the `DATE`
/// line directly after it.
pub struct Scanner<'a> {
    lines: Peekable<Enumerate<LineSplit<'a>>>,
    mode: ParseMode,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, mode: ParseMode) -> Self {
        Self {
            lines: split_lines(text).enumerate().peekable(),
            mode,
        }
    }

    fn classify(&mut self, line: GedcomLine<'a>, number: usize) -> Result<Field<'a>> {
        let field = match (line.level, line.tag) {
            (0, "INDI") => match line.xref {
                Some(id) => Field::BeginIndividual(id),
                None => self.reject(number, "INDI record without an id", Field::BeginRecord)?,
            },
            (0, "FAM") => Field::BeginFamily,
            (0, _) => Field::BeginRecord,
            (1, "NAME") => Field::Name(line.value),
            (1, "BIRT") => Field::Birth(self.take_birth_date()),
            (1, "HUSB") => pointer(line, Field::Husband),
            (1, "WIFE") => pointer(line, Field::Wife),
            (1, "CHIL") => pointer(line, Field::Child),
            _ => Field::Other,
        };
        Ok(field)
    }

    /// Consume the next line if it is the `2 DATE` belonging to a `1 BIRT`
    fn take_birth_date(&mut self) -> Option<&'a str> {
        let &(_, next) = self.lines.peek()?;
        let date = match parse_line(next) {
            Ok(Some(line)) if line.is(2, "DATE") => line.value,
            _ => return None,
        };
        self.lines.next();
        date
    }

    /// Fail in strict mode, fall back to `tolerated` otherwise
    fn reject(&self, number: usize, message: &str, tolerated: Field<'a>) -> Result<Field<'a>> {
        match self.mode {
            ParseMode::Strict => Err(Error::parse(number, message)),
            ParseMode::Tolerant => {
                log::trace!("ignoring line {}: {}", number, message);
                Ok(tolerated)
            }
        }
    }
}

fn pointer<'a>(line: GedcomLine<'a>, make: fn(&'a str) -> Field<'a>) -> Field<'a> {
    line.value.map(make).unwrap_or(Field::Other)
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Scanned<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, raw) = self.lines.next()?;
        let number = idx + 1;

        let field = match parse_line(raw) {
            Ok(Some(line)) => self.classify(line, number),
            Ok(None) => Ok(Field::Other),
            Err(e) => self.reject(number, e.message(), Field::Other),
        };

        Some(field.map(|field| Scanned { line: number, field }))
    }
}
