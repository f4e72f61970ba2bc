use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Rptr;
use crate::error::{DataFileError, DataFileResult};
use crate::header::{FileHeader, HEADER_LEN, MIN_RECORD_LENGTH};

const LIVE: u8 = 0x00;
const DELETED: u8 = 0xFF;

/// An open data file.
///
/// The header is written back after every mutation; [`DataFile::close`] and
/// `Drop` flush it once more.
#[derive(Debug)]
pub struct DataFile {
    file: File,
    path: PathBuf,
    header: FileHeader,
    closed: bool,
}

impl DataFile {
    /// Create (or truncate) a data file holding records of `record_length` bytes.
    pub fn create(path: impl AsRef<Path>, record_length: u16) -> DataFileResult<Self> {
        if record_length < MIN_RECORD_LENGTH {
            return Err(DataFileError::RecordLength(format!(
                "record length must be at least {MIN_RECORD_LENGTH} bytes, got {record_length}"
            )));
        }
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        let mut df = Self {
            file,
            path,
            header: FileHeader::new(record_length),
            closed: false,
        };
        df.write_header()?;
        tracing::debug!(path = %df.path.display(), record_length, "created data file");
        Ok(df)
    }

    pub fn open(path: impl AsRef<Path>) -> DataFileResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new().read(true).write(true).open(&path)?;

        let file_len = file.metadata()?.len();
        if file_len < HEADER_LEN {
            return Err(DataFileError::InvalidHeader(format!(
                "file is {file_len} bytes, shorter than the header"
            )));
        }
        file.seek(SeekFrom::Start(0))?;
        let header = FileHeader::read_from(&mut file)?;
        header.validate(file_len)?;

        Ok(Self {
            file,
            path,
            header,
            closed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> FileHeader {
        self.header
    }

    pub fn record_length(&self) -> usize {
        usize::from(self.header.record_length)
    }

    /// Store `data` in a free slot and return its record number.
    ///
    /// Shorter payloads are zero-padded to the record length. The header only
    /// records the allocation once the slot and the header are both on disk.
    pub fn new_record(&mut self, data: &[u8]) -> DataFileResult<Rptr> {
        let payload = self.padded(data)?;
        let previous = self.header;
        let mut next = previous;

        let reused = previous.first_record != 0;
        let rptr = if reused {
            let rptr = previous.first_record;
            let (status, next_free) = self.read_slot_head(rptr)?;
            if status != DELETED {
                return Err(DataFileError::InvalidHeader(format!(
                    "free list points at live record {rptr}"
                )));
            }
            next.first_record = next_free;
            rptr
        } else {
            let rptr = previous.next_record;
            next.next_record = rptr.checked_add(1).ok_or_else(|| {
                DataFileError::InvalidHeader("record numbers exhausted".into())
            })?;
            rptr
        };

        self.write_slot(rptr, LIVE, &payload)?;
        self.header = next;
        if let Err(e) = self.write_header() {
            self.header = previous;
            if reused {
                // put the slot back on the free list
                let mut link = vec![0u8; self.record_length()];
                LittleEndian::write_u32(&mut link[..4], next.first_record);
                let _ = self.write_slot(rptr, DELETED, &link);
            }
            return Err(e);
        }
        Ok(rptr)
    }

    /// Read record `n` into `buf`, which must be exactly one record long.
    pub fn read_record(&mut self, n: Rptr, buf: &mut [u8]) -> DataFileResult<()> {
        if buf.len() != self.record_length() {
            return Err(DataFileError::RecordLength(format!(
                "buffer is {} bytes, records are {}",
                buf.len(),
                self.record_length()
            )));
        }
        self.check_exists(n)?;
        self.file.seek(SeekFrom::Start(self.header.locate(n)))?;
        let status = self.file.read_u8()?;
        if status == DELETED {
            return Err(DataFileError::Deleted(n));
        }
        self.file.read_exact(buf)?;
        Ok(())
    }

    pub fn read(&mut self, n: Rptr) -> DataFileResult<Vec<u8>> {
        let mut buf = vec![0u8; self.record_length()];
        self.read_record(n, &mut buf)?;
        Ok(buf)
    }

    /// Overwrite live record `n`.
    pub fn write_record(&mut self, n: Rptr, data: &[u8]) -> DataFileResult<()> {
        let payload = self.padded(data)?;
        self.check_live(n)?;
        self.write_slot(n, LIVE, &payload)
    }

    /// Delete live record `n` and push it onto the free list.
    pub fn delete_record(&mut self, n: Rptr) -> DataFileResult<()> {
        self.check_live(n)?;

        let mut payload = vec![0u8; self.record_length()];
        LittleEndian::write_u32(&mut payload[..4], self.header.first_record);
        self.write_slot(n, DELETED, &payload)?;

        self.header.first_record = n;
        self.write_header()
    }

    /// Live records in record-number order.
    pub fn records(&mut self) -> Records<'_> {
        Records { file: self, next: 1 }
    }

    pub fn live_count(&mut self) -> DataFileResult<usize> {
        let mut count = 0;
        for rec in self.records() {
            rec?;
            count += 1;
        }
        Ok(count)
    }

    /// Flush the header and sync to disk.
    pub fn close(mut self) -> DataFileResult<()> {
        self.flush()?;
        self.closed = true;
        Ok(())
    }

    fn flush(&mut self) -> DataFileResult<()> {
        self.write_header()?;
        self.file.sync_all()?;
        Ok(())
    }

    fn padded(&self, data: &[u8]) -> DataFileResult<Vec<u8>> {
        let len = self.record_length();
        if data.len() > len {
            return Err(DataFileError::RecordLength(format!(
                "payload is {} bytes, records are {len}",
                data.len()
            )));
        }
        let mut payload = vec![0u8; len];
        payload[..data.len()].copy_from_slice(data);
        Ok(payload)
    }

    fn check_exists(&self, n: Rptr) -> DataFileResult<()> {
        if n == 0 || n >= self.header.next_record {
            return Err(DataFileError::NotFound(n));
        }
        Ok(())
    }

    fn check_live(&mut self, n: Rptr) -> DataFileResult<()> {
        let (status, _) = self.read_slot_head(n)?;
        if status == DELETED {
            return Err(DataFileError::Deleted(n));
        }
        Ok(())
    }

    /// Status byte and the first four payload bytes as a record number.
    fn read_slot_head(&mut self, n: Rptr) -> DataFileResult<(u8, Rptr)> {
        self.check_exists(n)?;
        self.file.seek(SeekFrom::Start(self.header.locate(n)))?;
        let status = self.file.read_u8()?;
        let link = self.file.read_u32::<LittleEndian>()?;
        Ok((status, link))
    }

    fn write_slot(&mut self, n: Rptr, status: u8, payload: &[u8]) -> DataFileResult<()> {
        self.file.seek(SeekFrom::Start(self.header.locate(n)))?;
        self.file.write_u8(status)?;
        self.file.write_all(payload)?;
        Ok(())
    }

    fn write_header(&mut self) -> DataFileResult<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.header.write_to(&mut self.file)?;
        Ok(())
    }
}

impl Drop for DataFile {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.flush() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to flush data file on drop");
        }
    }
}

/// Iterator over live records; see [`DataFile::records`].
pub struct Records<'a> {
    file: &'a mut DataFile,
    next: Rptr,
}

impl Iterator for Records<'_> {
    type Item = DataFileResult<(Rptr, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.file.header.next_record {
            let n = self.next;
            self.next += 1;
            match self.file.read(n) {
                Ok(data) => return Some(Ok((n, data))),
                Err(DataFileError::Deleted(_)) => continue,
                Err(e) => {
                    self.next = self.file.header.next_record;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn record(tag: u8) -> Vec<u8> {
        vec![tag; 8]
    }

    #[test]
    fn create_rejects_short_records() {
        let dir = TempDir::new().unwrap();
        let err = DataFile::create(dir.path().join("x.dat"), 3).unwrap_err();
        assert!(matches!(err, DataFileError::RecordLength(_)));
    }

    #[test]
    fn appends_reads_and_rewrites() {
        let dir = TempDir::new().unwrap();
        let mut df = DataFile::create(dir.path().join("a.dat"), 8).unwrap();

        assert_eq!(df.new_record(&record(1)).unwrap(), 1);
        assert_eq!(df.new_record(&record(2)).unwrap(), 2);
        assert_eq!(df.read(2).unwrap(), record(2));

        df.write_record(1, b"abc").unwrap();
        assert_eq!(df.read(1).unwrap(), b"abc\0\0\0\0\0".to_vec());

        assert!(matches!(df.read(3), Err(DataFileError::NotFound(3))));
        assert!(matches!(df.read(0), Err(DataFileError::NotFound(0))));
        assert!(matches!(df.new_record(&[0u8; 9]), Err(DataFileError::RecordLength(_))));

        let mut small = [0u8; 4];
        assert!(matches!(df.read_record(1, &mut small), Err(DataFileError::RecordLength(_))));
    }

    #[test]
    fn deleted_slots_are_reused_last_in_first_out() {
        let dir = TempDir::new().unwrap();
        let mut df = DataFile::create(dir.path().join("b.dat"), 8).unwrap();
        for tag in 1..=4 {
            df.new_record(&record(tag)).unwrap();
        }

        df.delete_record(2).unwrap();
        df.delete_record(4).unwrap();
        assert_eq!(df.header().first_record, 4);
        assert!(matches!(df.read(2), Err(DataFileError::Deleted(2))));
        assert!(matches!(df.write_record(2, &record(9)), Err(DataFileError::Deleted(2))));
        assert!(matches!(df.delete_record(2), Err(DataFileError::Deleted(2))));
        assert_eq!(df.live_count().unwrap(), 2);

        assert_eq!(df.new_record(&record(5)).unwrap(), 4);
        assert_eq!(df.new_record(&record(6)).unwrap(), 2);
        assert_eq!(df.header().first_record, 0);
        assert_eq!(df.new_record(&record(7)).unwrap(), 5);
    }

    #[test]
    fn failed_write_leaves_allocation_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("w.dat");
        let mut df = DataFile::create(&path, 8).unwrap();
        for tag in 1..=3 {
            df.new_record(&record(tag)).unwrap();
        }
        df.delete_record(2).unwrap();
        let before = df.header();

        // a read-only handle makes every write fail
        let writable = std::mem::replace(&mut df.file, File::open(&path).unwrap());
        assert!(matches!(df.new_record(&record(7)), Err(DataFileError::Io(_))));
        assert_eq!(df.header(), before);
        df.file = writable;

        assert_eq!(df.new_record(&record(7)).unwrap(), 2);
        assert_eq!(df.new_record(&record(8)).unwrap(), 4);

        let before = df.header();
        let writable = std::mem::replace(&mut df.file, File::open(&path).unwrap());
        assert!(df.new_record(&record(9)).is_err());
        assert_eq!(df.header(), before);
        df.file = writable;
        df.close().unwrap();

        let mut df = DataFile::open(&path).unwrap();
        assert_eq!(df.header(), before);
        assert_eq!(df.live_count().unwrap(), 4);
    }

    #[test]
    fn survives_close_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.dat");

        let mut df = DataFile::create(&path, 6).unwrap();
        df.new_record(b"alpha").unwrap();
        df.new_record(b"beta").unwrap();
        df.new_record(b"gamma").unwrap();
        df.delete_record(2).unwrap();
        df.close().unwrap();

        let mut df = DataFile::open(&path).unwrap();
        assert_eq!(df.record_length(), 6);
        let live: Vec<(Rptr, Vec<u8>)> = df.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(live, vec![(1, b"alpha\0".to_vec()), (3, b"gamma\0".to_vec())]);
        assert_eq!(df.new_record(b"delta").unwrap(), 2);
    }

    #[test]
    fn open_rejects_truncated_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("d.dat");
        {
            let mut df = DataFile::create(&path, 8).unwrap();
            df.new_record(&record(1)).unwrap();
            df.new_record(&record(2)).unwrap();
        }
        let f = OpenOptions::new().write(true).open(&path).unwrap();
        f.set_len(HEADER_LEN + 9).unwrap();
        drop(f);

        assert!(matches!(DataFile::open(&path), Err(DataFileError::InvalidHeader(_))));

        std::fs::write(&path, [0u8; 5]).unwrap();
        assert!(matches!(DataFile::open(&path), Err(DataFileError::InvalidHeader(_))));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Delete(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![any::<u8>().prop_map(Op::Insert), any::<usize>().prop_map(Op::Delete)]
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

        /// The file agrees with a simple model after any insert/delete sequence,
        /// and never grows while free slots remain.
        #[test]
        fn matches_model(ops in prop::collection::vec(op(), 1..60)) {
            let dir = TempDir::new().unwrap();
            let mut df = DataFile::create(dir.path().join("p.dat"), 4).unwrap();
            let mut model: std::collections::BTreeMap<Rptr, u8> = Default::default();

            for op in ops {
                match op {
                    Op::Insert(tag) => {
                        let had_free = df.header().first_record != 0;
                        let before = df.header().next_record;
                        let n = df.new_record(&[tag; 4]).unwrap();
                        if had_free {
                            prop_assert_eq!(df.header().next_record, before);
                        }
                        prop_assert!(model.insert(n, tag).is_none());
                    }
                    Op::Delete(i) => {
                        if model.is_empty() {
                            continue;
                        }
                        let n = *model.keys().nth(i % model.len()).unwrap();
                        df.delete_record(n).unwrap();
                        model.remove(&n);
                    }
                }
            }

            let live: Vec<(Rptr, Vec<u8>)> = df.records().collect::<Result<_, _>>().unwrap();
            let expected: Vec<(Rptr, Vec<u8>)> = model.iter().map(|(n, t)| (*n, vec![*t; 4])).collect();
            prop_assert_eq!(live, expected);
        }
    }
}
