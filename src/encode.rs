//! Decimal text rendering of sequence terms.

/// Separator written before each term in text mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    /// A `.` between terms, the default.
    #[default]
    Dot,
    /// One term per line.
    Newline,
}

impl Separator {
    fn as_char(self) -> char {
        match self {
            Separator::Dot => '.',
            Separator::Newline => '\n',
        }
    }
}

/// Pre-rendered decimal forms of every symbol, each prefixed with the
/// separator.
///
/// The separator is always a single byte, so the first term of a stream can
/// be written bare by slicing one byte off its entry.
pub(crate) fn term_table(separator: Separator) -> [String; 256] {
    std::array::from_fn(|term| format!("{}{}", separator.as_char(), term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_table() {
        let table = term_table(Separator::Dot);
        assert_eq!(table[0], ".0");
        assert_eq!(table[42], ".42");
        assert_eq!(table[255], ".255");
    }

    #[test]
    fn test_newline_table() {
        let table = term_table(Separator::Newline);
        assert_eq!(table[0], "\n0");
        assert_eq!(table[255], "\n255");
    }

    #[test]
    fn test_every_entry_round_trips() {
        for separator in [Separator::Dot, Separator::Newline] {
            let table = term_table(separator);
            for (term, entry) in table.iter().enumerate() {
                assert_eq!(entry.as_bytes()[0] as char, separator.as_char());
                assert_eq!(entry[1..].parse::<usize>().unwrap(), term);
            }
        }
    }
}
