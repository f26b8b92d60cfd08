#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
//! # conip
//!
//! Generates a minimal-size string containing every IPv4 address.
//!
//! The sequence produced is the de Bruijn sequence B(256, 4) beginning with
//! four zeros: a cyclic sequence of 2^32 byte-valued terms in which every
//! possible string of four symbols occurs exactly once as a window of
//! consecutive terms. Read four terms at a time, the stream therefore
//! enumerates every IPv4 address exactly once.
//!
//! ## Output
//!
//! - **Text mode** (default): each term rendered as decimal, terms separated
//!   by `.` or by newlines. Around 14.2 GiB in total.
//! - **Binary mode**: one raw byte per term, no separators. Exactly
//!   2^32 + 3 bytes: the three extra terms repeat the start of the sequence
//!   to close the cycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use conip::{Encoding, Separator, Sink, Terms};
//!
//! // The full sequence is enormous, so render the two-symbol analog
//! // B(2, 4) instead.
//! let sink = Sink::new(Vec::new(), Encoding::Text(Separator::Dot), 4096)?;
//! let out = sink.consume(Terms::with_max_symbol(1))?;
//! assert_eq!(out, b"0.0.0.0.1.0.0.1.1.0.1.0.1.1.1.1.0.0.0");
//! # Ok::<(), conip::ConipError>(())
//! ```
//!
//! For the real thing, [`spawn_terms`] runs the generator on its own thread
//! behind a bounded channel so that generation and writing overlap:
//!
//! ```rust,no_run
//! use conip::{spawn_terms, Encoding, Sink, Terms};
//!
//! let sink = Sink::new(std::io::stdout().lock(), Encoding::Binary, 4096)?;
//! sink.consume(spawn_terms(Terms::new()))?;
//! # Ok::<(), conip::ConipError>(())
//! ```

mod debruijn;
mod encode;
mod error;
mod sink;
mod stream;

// Re-export public types
pub use debruijn::{is_lyndon, Terms, MAX_SYMBOL};
pub use encode::Separator;
pub use error::ConipError;
pub use sink::{Encoding, Sink};
pub use stream::{spawn_terms, HANDOFF_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;

    // Each stage is tested in its own module; these exercise the whole
    // pipeline, generator thread included.
    #[test]
    fn test_threaded_pipeline_matches_direct_iteration() {
        let direct = Sink::new(Vec::new(), Encoding::Binary, 64)
            .unwrap()
            .consume(Terms::with_max_symbol(3))
            .unwrap();

        let threaded = Sink::new(Vec::new(), Encoding::Binary, 64)
            .unwrap()
            .consume(spawn_terms(Terms::with_max_symbol(3)))
            .unwrap();

        assert_eq!(threaded, direct);
        assert_eq!(threaded.len(), 4usize.pow(4) + 3);
    }

    #[test]
    fn test_text_pipeline_round_trip() {
        let text = Sink::new(Vec::new(), Encoding::Text(Separator::Newline), 64)
            .unwrap()
            .consume(spawn_terms(Terms::with_max_symbol(2)))
            .unwrap();

        let parsed: Vec<u8> = String::from_utf8(text)
            .unwrap()
            .lines()
            .map(|line| line.parse().unwrap())
            .collect();
        assert_eq!(parsed, Terms::with_max_symbol(2).collect::<Vec<u8>>());
    }
}
