//! Reading the sequence from a text stream.
//!
//! Values are whitespace-separated and may be spread over any number of
//! lines. Reading stops as soon as the requested count has been collected, so
//! an interactive user is never asked for more than that and anything after
//! the last wanted value is left unread.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Upper bound on the up-front reservation in [`read_sequence`].
const MAX_RESERVE: usize = 4096;

/// Why the sequence could not be read.
#[derive(Debug)]
pub enum InputError {
    /// The underlying stream failed.
    Io(io::Error),
    /// A token did not parse as an integer. `position` is 1-based.
    InvalidToken { position: usize, token: String },
    /// The stream ended before `expected` values were read.
    Insufficient { expected: usize, found: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "failed to read input: {}", e),
            InputError::InvalidToken { position, token } => {
                write!(f, "element {} is not an integer: '{}'", position, token)
            }
            InputError::Insufficient { expected, found } => {
                write!(
                    f,
                    "expected {} elements but input ended after {}",
                    expected, found
                )
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Read exactly `count` whitespace-separated values from `reader`.
///
/// Fails fast on the first token that does not parse, and reports a short
/// read if the stream ends early. Tokens after the `count`-th value on the
/// same line are ignored.
pub fn read_sequence<T, R>(reader: &mut R, count: usize) -> Result<Vec<T>, InputError>
where
    T: FromStr,
    R: BufRead,
{
    // The count comes from the user; only reserve what a short read can fill.
    let mut values = Vec::with_capacity(count.min(MAX_RESERVE));
    let mut line = String::new();

    while values.len() < count {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::Insufficient {
                expected: count,
                found: values.len(),
            });
        }

        for token in line.split_whitespace() {
            if values.len() == count {
                break;
            }
            let value = token.parse::<T>().map_err(|_| InputError::InvalidToken {
                position: values.len() + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}
