//! Whitespace-separated numeric input.
//!
//! [`TokenReader`] treats its input as one stream of tokens regardless of
//! line breaks, so `1 100 50` on one line and one value per line are read
//! the same way.

use std::collections::VecDeque;
use std::io::BufRead;

use log::trace;

use crate::error::InputError;

/// Reads whitespace-separated tokens from a buffered reader.
///
/// # Examples
/// ```
/// use u_sampling::input::TokenReader;
/// let mut reader = TokenReader::new("2.5\n1 100 50\n".as_bytes());
/// assert_eq!(reader.next_f64("rate").unwrap(), 2.5);
/// assert_eq!(reader.next_f64("min").unwrap(), 1.0);
/// ```
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads the next token as an `f64`.
    ///
    /// `field` names the parameter in the error on failure.
    pub fn next_f64(&mut self, field: &'static str) -> Result<f64, InputError> {
        let token = self
            .next_token()?
            .ok_or(InputError::UnexpectedEof { field })?;
        let value = token
            .parse::<f64>()
            .map_err(|_| InputError::InvalidNumber { field, token })?;
        trace!("read {field} = {value}");
        Ok(value)
    }
}
