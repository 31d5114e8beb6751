// GEDCOM line model
//
// Every GEDCOM line has the shape `<level> [<@xref@>] <tag> [value]`. Only the
// structure is checked here; meaning is assigned by the scanner.

/// A single structurally valid GEDCOM line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    /// Nesting level (0 starts a record)
    pub level: u8,
    /// Cross-reference id such as `@I1@`, if present
    pub xref: Option<&'a str>,
    /// Tag such as `INDI` or `NAME`
    pub tag: &'a str,
    /// Trimmed line value, if any
    pub value: Option<&'a str>,
}

impl<'a> GedcomLine<'a> {
    /// Check level and tag together
    pub fn is(&self, level: u8, tag: &str) -> bool {
        self.level == level && self.tag == tag
    }
}

/// Why a non-blank line could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    MissingLevel,
    MissingTag,
}

impl LineError {
    pub fn message(self) -> &'static str {
        match self {
            LineError::MissingLevel => "line does not start with a level number",
            LineError::MissingTag => "line has no tag",
        }
    }
}

/// Parse a raw line. Blank lines yield `Ok(None)`.
pub fn parse_line(raw: &str) -> Result<Option<GedcomLine<'_>>, LineError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (level, rest) = split_token(line);
    let level: u8 = level.parse().map_err(|_| LineError::MissingLevel)?;

    let (xref, rest) = match split_token(rest) {
        (token, after) if token.starts_with('@') => (Some(token), after),
        // `0 I1 INDI`: record id without @ delimiters, followed by one tag
        (token, after) if level == 0 && is_single_token(after) => (Some(token), after),
        _ => (None, rest),
    };

    let (tag, value) = split_token(rest);
    if tag.is_empty() {
        return Err(LineError::MissingTag);
    }

    Ok(Some(GedcomLine {
        level,
        xref,
        tag,
        value: (!value.is_empty()).then_some(value),
    }))
}

fn is_single_token(s: &str) -> bool {
    !s.is_empty() && !s.contains(char::is_whitespace)
}

/// Iterator over lines ending in `\n`, `\r\n` or a lone `\r`
#[derive(Debug, Clone)]
pub struct LineSplit<'a> {
    rest: &'a str,
}

/// Split text into lines, accepting all three newline conventions.
/// Like `str::lines`, a trailing terminator does not yield an empty line.
pub fn split_lines(text: &str) -> LineSplit<'_> {
    LineSplit { rest: text }
}

impl<'a> Iterator for LineSplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.find(['\r', '\n']) {
            Some(idx) => {
                let terminator = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                let line = &self.rest[..idx];
                self.rest = &self.rest[idx + terminator..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        Some(line)
    }
}

/// Split off the first whitespace-delimited token, trimming the remainder
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_with_xref() {
        let line = parse_line("0 @I1@ INDI").unwrap().unwrap();
        assert_eq!(line.level, 0);
        assert_eq!(line.xref, Some("@I1@"));
        assert_eq!(line.tag, "INDI");
        assert_eq!(line.value, None);
    }

    #[test]
    fn test_field_line_keeps_inner_spaces() {
        let line = parse_line("1 NAME John  /Smith/ \r").unwrap().unwrap();
        assert!(line.is(1, "NAME"));
        assert_eq!(line.xref, None);
        assert_eq!(line.value, Some("John  /Smith/"));
    }

    #[test]
    fn test_pointer_value_is_not_xref() {
        let line = parse_line("1 HUSB @I1@").unwrap().unwrap();
        assert_eq!(line.tag, "HUSB");
        assert_eq!(line.value, Some("@I1@"));
    }

    #[test]
    fn test_bare_record_id() {
        let line = parse_line("0 I1 INDI").unwrap().unwrap();
        assert_eq!(line.xref, Some("I1"));
        assert_eq!(line.tag, "INDI");

        let line = parse_line("0 NOTE free text here").unwrap().unwrap();
        assert_eq!(line.xref, None);
        assert_eq!(line.tag, "NOTE");

        let line = parse_line("1 NAME Anna").unwrap().unwrap();
        assert_eq!(line.xref, None);
        assert_eq!(line.tag, "NAME");
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines: Vec<_> = split_lines("0 HEAD\r1 CHAR UTF-8\r\n0 @I1@ INDI\n\n0 TRLR\r").collect();
        assert_eq!(lines, vec!["0 HEAD", "1 CHAR UTF-8", "0 @I1@ INDI", "", "0 TRLR"]);
    }

    #[test]
    fn test_split_lines_without_trailing_newline() {
        let lines: Vec<_> = split_lines("0 HEAD\n0 TRLR").collect();
        assert_eq!(lines, vec!["0 HEAD", "0 TRLR"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   \r"), Ok(None));
    }

    #[test]
    fn test_missing_level() {
        assert_eq!(parse_line("NAME John"), Err(LineError::MissingLevel));
    }

    #[test]
    fn test_xref_without_tag() {
        assert_eq!(parse_line("0 @I1@"), Err(LineError::MissingTag));
    }
}
