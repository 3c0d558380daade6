#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate chrono;
#[macro_use]
extern crate quick_error;

mod checksum;
pub mod err;
mod lexer;
pub mod parser;

pub use err::{FormatError, InvalidValueError, ParseError};
pub use lexer::NmeaMessage;
pub use parser::{determine_separator, parse, CardDir, GllParser, ModeIndicator, MwvParser,
                 Status, WindReference, WindSpeedUnit};
