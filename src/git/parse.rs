//! Git output parsing functions

use crate::Error;

/// Prefix `git blame` puts on ids of lines that predate the history boundary.
const BOUNDARY_MARKER: char = '^';

/// One line of `git blame` output: the revision that last touched the line,
/// and everything after the revision id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionRecord {
    pub revision_id: String,
    /// Author, date, line number and source text, as printed by `git blame`
    pub text: String,
}

impl AttributionRecord {
    /// The string shown for this record in the picker.
    pub fn display(&self) -> String {
        format!("{} {}", self.revision_id, self.text)
    }
}

/// Parse default-format `git blame` output.
///
/// Records come back last line first. A line without a space after the id is
/// rejected rather than truncated.
///
/// ```
/// use getpr::git::parse_blame;
///
/// let records = parse_blame("^737302e (skanehira 2020-11-02 23:28:33 +0900 1) # github-blame").unwrap();
/// assert_eq!(records[0].revision_id, "737302e");
/// ```
pub fn parse_blame(output: &str) -> Result<Vec<AttributionRecord>, Error> {
    let output = output.trim_end_matches(['\r', '\n']);
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let lines: Vec<&str> = output.split('\n').collect();
    lines
        .iter()
        .enumerate()
        .rev()
        .map(|(index, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let malformed = || Error::MalformedAttributionLine {
                line_number: index + 1,
                line: line.to_string(),
            };
            let (id, text) = line.split_once(' ').ok_or_else(malformed)?;
            let id = id.trim_start_matches(BOUNDARY_MARKER);
            if id.is_empty() {
                return Err(malformed());
            }
            Ok(AttributionRecord {
                revision_id: id.to_string(),
                text: text.to_string(),
            })
        })
        .collect()
}
