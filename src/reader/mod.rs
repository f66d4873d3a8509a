#![doc = r#"
Sequential, big-endian access to the bytes of a MIDI file.

A [`Reader`] owns nothing but a borrowed slice and a position into it. Every
read either returns a fresh value and advances the position, or fails with a
[`ReaderError`] stamped with the offset where it failed. The only way back is
[`Reader::rewind`], used to un-read a single data byte when running status
applies.
"#]

mod error;
pub use error::*;

use crate::ParseError;

/// The largest number of bytes a variable-length quantity may occupy
pub const MAX_VLQ_BYTES: usize = 4;

/// A movable cursor over a MIDI byte slice.
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    position: usize,
    last_error_offset: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader positioned at the first byte of `data`
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self {
            data,
            position: 0,
            last_error_offset: 0,
        }
    }

    /// The offset of the next byte to be read
    #[inline]
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// The offset at which the last parse error was raised
    pub const fn last_error_offset(&self) -> usize {
        self.last_error_offset
    }

    pub(crate) fn set_last_error_offset(&mut self, offset: usize) {
        self.last_error_offset = offset;
    }

    /// Number of bytes left to read
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every byte has been consumed
    #[inline]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Read the next `len` bytes.
    ///
    /// Fails with [`ReaderErrorKind::UnexpectedEof`] without moving if fewer
    /// than `len` bytes remain.
    pub fn read_exact(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        if self.remaining() < len {
            return Err(ReaderError::oob(self.position));
        }
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Read the next `N` bytes into an array
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let Some(&byte) = self.data.get(self.position) else {
            return Err(ReaderError::oob(self.position));
        };
        self.position += 1;
        Ok(byte)
    }

    /// Read a big-endian `u16`
    pub fn read_u16_be(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32`
    pub fn read_u32_be(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Move the position back by `len` bytes.
    ///
    /// Never moves before the start of the slice.
    pub fn rewind(&mut self, len: usize) {
        debug_assert!(len <= self.position, "rewound past the start of the data");
        self.position = self.position.saturating_sub(len);
    }

    /// Decode a MIDI variable-length quantity.
    ///
    /// Each byte contributes its low 7 bits, most significant group first.
    /// A byte with the high bit clear ends the quantity. At most
    /// [`MAX_VLQ_BYTES`] bytes are accepted, giving 28 bits of payload.
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        let start = self.position;
        let mut value: u32 = 0;
        for _ in 0..MAX_VLQ_BYTES {
            let byte = self.read_u8()?;
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(inv_data_at(self, start, ParseError::MalformedVlq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vlq(bytes: &[u8]) -> ReadResult<u32> {
        Reader::from_byte_slice(bytes).read_vlq()
    }

    #[test]
    fn reads_known_vlq_vectors() {
        assert_eq!(vlq(&[0x00]).unwrap(), 0);
        assert_eq!(vlq(&[0x7F]).unwrap(), 127);
        assert_eq!(vlq(&[0x81, 0x00]).unwrap(), 128);
        assert_eq!(vlq(&[0x81, 0x40]).unwrap(), 192);
        assert_eq!(vlq(&[0xC0, 0x00]).unwrap(), 0x2000);
        assert_eq!(vlq(&[0xFF, 0xFF, 0xFF, 0x7F]).unwrap(), 0x0FFF_FFFF);
    }

    #[test]
    fn vlq_stops_on_first_terminal_byte() {
        let bytes = [0x81, 0x00, 0x42];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_vlq().unwrap(), 128);
        assert_eq!(reader.buffer_position(), 2);
        assert_eq!(reader.read_u8().unwrap(), 0x42);
    }

    #[test]
    fn five_byte_vlq_is_malformed() {
        let err = vlq(&[0x81, 0x80, 0x80, 0x80, 0x00]).unwrap_err();
        assert_eq!(err.position(), 0);
        assert!(matches!(
            err.error_kind(),
            ReaderErrorKind::ParseError(ParseError::MalformedVlq)
        ));
    }

    #[test]
    fn truncated_vlq_is_eof() {
        let err = vlq(&[0x81, 0x80]).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn numbers_are_big_endian() {
        let bytes = [0x00, 0x06, 0x12, 0x34, 0x56, 0x78];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_u16_be().unwrap(), 6);
        assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
        assert!(reader.is_at_end());
    }

    #[test]
    fn short_read_does_not_advance() {
        let bytes = [b'M', b'T', b'h'];
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = reader.read_exact_size::<4>().unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(reader.buffer_position(), 0);
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn rewind_unreads_a_byte() {
        let bytes = [0x3C, 0x64];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 0x3C);
        reader.rewind(1);
        assert_eq!(reader.buffer_position(), 0);
        assert_eq!(reader.read_exact(2).unwrap(), &[0x3C, 0x64]);
    }
}
