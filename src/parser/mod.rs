// Parser module: decoding and classifying GEDCOM lines

pub mod decode;
pub mod line;
pub mod scanner;

pub use decode::decode;
pub use line::{parse_line, GedcomLine, LineError};
pub use scanner::{Field, Scanned, Scanner};
