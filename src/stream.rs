//! Generator-to-sink handoff.

use std::sync::mpsc;
use std::thread;

use log::info;

use crate::debruijn::Terms;

/// Capacity of the bounded handoff between the generator thread and the
/// consumer. Holds one whole 4-symbol burst, so generation and output can
/// overlap without letting either side run far ahead.
pub const HANDOFF_CAPACITY: usize = 4;

/// Moves the generator onto its own thread and returns the receiving end of
/// a bounded FIFO channel carrying its terms in generation order.
///
/// The channel closes once the final term has been sent, so iterating the
/// receiver yields the complete stream and then ends. Dropping the receiver
/// early stops the generator thread on its next send; nothing durable is
/// left behind.
///
/// Each time the head of the working word advances, the generator thread
/// reports it at `info` level. Reports are sparse at first and become more
/// frequent toward the end of the stream.
///
/// # Example
///
/// ```
/// use conip::{spawn_terms, Terms};
///
/// let rx = spawn_terms(Terms::with_max_symbol(1));
/// let seq: Vec<u8> = rx.into_iter().collect();
/// assert_eq!(seq.len(), 19);
/// ```
pub fn spawn_terms(mut terms: Terms) -> mpsc::Receiver<u8> {
    let (tx, rx) = mpsc::sync_channel(HANDOFF_CAPACITY);
    thread::spawn(move || {
        let max = terms.max_symbol();
        let mut high = terms.high_byte();
        while let Some(term) = terms.next() {
            if tx.send(term).is_err() {
                // Receiver is gone; abandon the stream.
                return;
            }
            let h = terms.high_byte();
            if h != high {
                high = h;
                info!("working word head now {high} of {max}");
            }
        }
    });
    rx
}
