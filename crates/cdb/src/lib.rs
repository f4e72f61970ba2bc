//! CDATA flat data files.
//!
//! A data file is a header followed by fixed-length record slots addressed by
//! 1-based record number. Deleted slots are chained into a free list and
//! reused before the file grows.
//!
//! ```text
//! offset 0   first_record  u32 LE   head of the free list, 0 if empty
//! offset 4   next_record   u32 LE   next never-used record number
//! offset 8   record_length u16 LE   payload bytes per record
//! offset 10  reserved      2 bytes
//! offset 12  slot 1, slot 2, ...    1 status byte + payload each
//! ```

mod datafile;
mod error;
mod header;

pub use datafile::{DataFile, Records};
pub use error::{DataFileError, DataFileResult};
pub use header::{FileHeader, HEADER_LEN, MIN_RECORD_LENGTH};

/// Record number. Valid numbers start at 1.
pub type Rptr = u32;
