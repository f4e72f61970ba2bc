use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Rptr;
use crate::error::{DataFileError, DataFileResult};

pub const HEADER_LEN: u64 = 12;

/// A deleted slot stores the next free record number in its payload.
pub const MIN_RECORD_LENGTH: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub first_record: Rptr,
    pub next_record: Rptr,
    pub record_length: u16,
}

impl FileHeader {
    pub fn new(record_length: u16) -> Self {
        Self {
            first_record: 0,
            next_record: 1,
            record_length,
        }
    }

    /// Bytes per slot on disk (status byte + payload).
    pub fn slot_len(&self) -> u64 {
        u64::from(self.record_length) + 1
    }

    /// Byte offset of record `n`'s slot.
    pub fn locate(&self, n: Rptr) -> u64 {
        HEADER_LEN + u64::from(n - 1) * self.slot_len()
    }

    pub fn read_from<R: Read>(mut r: R) -> DataFileResult<Self> {
        let first_record = r.read_u32::<LittleEndian>()?;
        let next_record = r.read_u32::<LittleEndian>()?;
        let record_length = r.read_u16::<LittleEndian>()?;
        let _reserved = r.read_u16::<LittleEndian>()?;
        Ok(Self {
            first_record,
            next_record,
            record_length,
        })
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> DataFileResult<()> {
        w.write_u32::<LittleEndian>(self.first_record)?;
        w.write_u32::<LittleEndian>(self.next_record)?;
        w.write_u16::<LittleEndian>(self.record_length)?;
        w.write_u16::<LittleEndian>(0)?;
        Ok(())
    }

    /// Check the header against itself and the on-disk file size.
    pub fn validate(&self, file_len: u64) -> DataFileResult<()> {
        if self.record_length < MIN_RECORD_LENGTH {
            return Err(DataFileError::InvalidHeader(format!(
                "record length {} is below the minimum of {MIN_RECORD_LENGTH}",
                self.record_length
            )));
        }
        if self.next_record == 0 {
            return Err(DataFileError::InvalidHeader("next record is 0".into()));
        }
        if self.first_record >= self.next_record {
            return Err(DataFileError::InvalidHeader(format!(
                "free list head {} is past the last record",
                self.first_record
            )));
        }
        let needed = self.locate(self.next_record);
        if file_len < needed {
            return Err(DataFileError::InvalidHeader(format!(
                "file is {file_len} bytes but {needed} are needed for {} records",
                self.next_record - 1
            )));
        }
        Ok(())
    }
}
