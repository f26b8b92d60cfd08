//! Buffered term output.

use std::io::{self, Write};

use crate::encode::{term_table, Separator};
use crate::error::ConipError;

/// Output encoding for the term stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Separator-prefixed decimal text; the first term omits its separator.
    Text(Separator),
    /// One raw byte per term, no separators.
    Binary,
}

impl Default for Encoding {
    fn default() -> Encoding {
        Encoding::Text(Separator::Dot)
    }
}

/// Consumes a term stream and writes it to a buffered destination.
///
/// The sink owns the destination for the lifetime of the stream. Any write
/// or flush failure is fatal and surfaces as [`ConipError::Io`]; there is no
/// retry and no partial-success state.
///
/// # Example
///
/// ```
/// use conip::{Encoding, Separator, Sink, Terms};
///
/// let sink = Sink::new(Vec::new(), Encoding::Text(Separator::Dot), 4096).unwrap();
/// let out = sink.consume(Terms::with_max_symbol(1)).unwrap();
/// assert_eq!(out, b"0.0.0.0.1.0.0.1.1.0.1.0.1.1.1.1.0.0.0");
/// ```
#[derive(Debug)]
pub struct Sink<W: Write> {
    out: io::BufWriter<W>,
    encoding: Encoding,
}

impl<W: Write> Sink<W> {
    /// Creates a sink writing to `dest` through a `buffer_size`-byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConipError::InvalidBufferSize`] if `buffer_size` is zero.
    pub fn new(dest: W, encoding: Encoding, buffer_size: usize) -> Result<Sink<W>, ConipError> {
        if buffer_size == 0 {
            return Err(ConipError::InvalidBufferSize(buffer_size));
        }
        Ok(Sink {
            out: io::BufWriter::with_capacity(buffer_size, dest),
            encoding,
        })
    }

    /// Writes every term of the stream in order, flushes, and returns the
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns [`ConipError::Io`] on the first write or flush failure.
    pub fn consume<I>(mut self, terms: I) -> Result<W, ConipError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut terms = terms.into_iter();
        match self.encoding {
            Encoding::Binary => {
                for term in terms {
                    self.out.write_all(&[term])?;
                }
            }
            Encoding::Text(separator) => {
                let table = term_table(separator);
                if let Some(first) = terms.next() {
                    // The first term is written without its separator.
                    self.out.write_all(table[usize::from(first)][1..].as_bytes())?;
                }
                for term in terms {
                    self.out.write_all(table[usize::from(term)].as_bytes())?;
                }
            }
        }
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}
