//! Binary file primitives
//!
//! Fixed-width little-endian reads and writes over any `std::io` stream.
//! Strings are stored with a 4 byte unsigned length prefix followed by the
//! UTF-8 bytes, without a terminator.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Binary writing helpers for any output stream
pub trait BinaryWrite: Write {
    /// Write a boolean as a single byte (1 or 0)
    fn write_bool(&mut self, value: bool) -> io::Result<()> {
        self.write_u8(u8::from(value))
    }

    /// Write a 4 byte signed integer
    fn write_int32(&mut self, value: i32) -> io::Result<()> {
        self.write_i32::<LittleEndian>(value)
    }

    /// Write a 4 byte unsigned integer
    fn write_uint32(&mut self, value: u32) -> io::Result<()> {
        self.write_u32::<LittleEndian>(value)
    }

    /// Write a 4 byte IEEE float
    fn write_float32(&mut self, value: f32) -> io::Result<()> {
        self.write_f32::<LittleEndian>(value)
    }

    /// Write a size-prefixed UTF-8 string
    fn write_string_sized(&mut self, value: &str) -> io::Result<()> {
        let len = u32::try_from(value.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "string too long for size prefix"))?;
        self.write_uint32(len)?;
        self.write_all(value.as_bytes())
    }
}

impl<W: Write + ?Sized> BinaryWrite for W {}

/// Binary reading helpers for any input stream
pub trait BinaryRead: Read {
    /// Read a single byte boolean; any non-zero byte is true
    fn read_bool(&mut self) -> io::Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a 4 byte signed integer
    fn read_int32(&mut self) -> io::Result<i32> {
        self.read_i32::<LittleEndian>()
    }

    /// Read a 4 byte unsigned integer
    fn read_uint32(&mut self) -> io::Result<u32> {
        self.read_u32::<LittleEndian>()
    }

    /// Read a 4 byte IEEE float
    fn read_float32(&mut self) -> io::Result<f32> {
        self.read_f32::<LittleEndian>()
    }

    /// Read a size-prefixed UTF-8 string
    fn read_string_sized(&mut self) -> io::Result<String> {
        let len = self.read_uint32()? as usize;
        let mut bytes = vec![0u8; len];
        self.read_exact(&mut bytes)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: Read + ?Sized> BinaryRead for R {}
