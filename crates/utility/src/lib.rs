//! Small helpers shared by the front ends: CSV input, text wrapping, EBCDIC
//! conversion, and environment lookups.

pub mod csv_reader;
pub mod date;
pub mod ebcdic;
pub mod env;
pub mod wordwrap;

pub use csv_reader::{CsvError, CsvOptions, CsvReader};
pub use date::is_leap_year;
pub use ebcdic::{Codec, EbcdicCodec, ascii_to_ebcdic, ebcdic_to_ascii};
pub use wordwrap::wordwrap;
