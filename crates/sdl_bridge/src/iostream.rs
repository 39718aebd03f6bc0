//! Byte streams over files and memory (`SDL_IOStream`)
//!
//! [`IoStream`] implements `std::io::Read`, `Write` and `Seek`, so it can be
//! handed to any Rust decoder as well as to SDL loaders such as
//! [`Surface::load_bmp_io`](crate::surface::Surface::load_bmp_io).

use std::ffi::c_int;
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::path::Path;
use std::ptr::NonNull;

use crate::context::Sdl;
use crate::error::{Error, Result};
use crate::properties::Properties;
use crate::sys::{self, SDL_IOStream};

/// Property holding the buffer of a dynamic memory stream
pub const PROP_DYNAMIC_MEMORY: &str = "SDL.iostream.dynamic.memory";

/// `SDL_IOStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoStatus {
    /// Everything is fine
    Ready,
    /// Read or write error
    Error,
    /// End of file
    Eof,
    /// Non-blocking operation would block
    NotReady,
    /// Tried to write a read-only buffer
    ReadOnly,
    /// Tried to read a write-only buffer
    WriteOnly,
}

impl IoStatus {
    /// Decode a native value
    pub const fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Eof,
            3 => Self::NotReady,
            4 => Self::ReadOnly,
            5 => Self::WriteOnly,
            _ => Self::Ready,
        }
    }
}

/// `SDL_IOWhence`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Whence {
    /// From the beginning
    Set = 0,
    /// From the current position
    Cur = 1,
    /// From the end
    End = 2,
}

/// A readable and/or writable stream, closed on drop
pub struct IoStream {
    sdl: Sdl,
    raw: NonNull<SDL_IOStream>,
}

// SAFETY: a stream may move between threads; it is never shared.
unsafe impl Send for IoStream {}

impl IoStream {
    /// Open a file; `mode` follows `fopen` (`"rb"`, `"wb"`, `"r+b"`, ...)
    pub fn from_file(sdl: &Sdl, path: impl AsRef<Path>, mode: &str) -> Result<Self> {
        let path = sys::path_c_string(path.as_ref())?;
        let mode = sys::c_string(mode)?;
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_IOFromFile)(path.as_ptr(), mode.as_ptr()) })?;
        Ok(Self { sdl: sdl.clone(), raw })
    }

    /// Read/write stream over a caller buffer of fixed size
    pub fn from_mem<'a>(sdl: &Sdl, buffer: &'a mut [u8]) -> Result<BorrowedIoStream<'a>> {
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_IOFromMem)(buffer.as_mut_ptr().cast(), buffer.len()) })?;
        Ok(BorrowedIoStream::new(Self { sdl: sdl.clone(), raw }))
    }

    /// Read-only stream over a caller buffer
    pub fn from_const_mem<'a>(sdl: &Sdl, buffer: &'a [u8]) -> Result<BorrowedIoStream<'a>> {
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_IOFromConstMem)(buffer.as_ptr().cast(), buffer.len()) })?;
        Ok(BorrowedIoStream::new(Self { sdl: sdl.clone(), raw }))
    }

    /// Growable in-memory stream owned by SDL
    pub fn dynamic(sdl: &Sdl) -> Result<Self> {
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_IOFromDynamicMem)() })?;
        Ok(Self { sdl: sdl.clone(), raw })
    }

    /// Raw stream pointer
    pub fn raw(&self) -> *mut SDL_IOStream {
        self.raw.as_ptr()
    }

    /// Owning context
    pub fn sdl(&self) -> &Sdl {
        &self.sdl
    }

    /// Give up ownership; the caller becomes responsible for closing the stream
    pub fn into_raw(self) -> NonNull<SDL_IOStream> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used or dropped again.
        drop(unsafe { std::ptr::read(&this.sdl) });
        this.raw
    }

    /// Close, flushing pending writes, and report failure
    pub fn close(self) -> Result<()> {
        let this = ManuallyDrop::new(self);
        let ok = unsafe { (this.sdl.api().SDL_CloseIO)(this.raw()) };
        // SAFETY: `this` is never used or dropped again.
        let sdl = unsafe { std::ptr::read(&this.sdl) };
        sdl.check(ok)
    }

    /// Associated property group
    pub fn properties(&self) -> Result<Properties> {
        Properties::of_object(&self.sdl, unsafe { (self.sdl.api().SDL_GetIOProperties)(self.raw()) })
    }

    /// Status of the last read or write
    pub fn status(&self) -> IoStatus {
        IoStatus::from_raw(unsafe { (self.sdl.api().SDL_GetIOStatus)(self.raw()) })
    }

    /// Total size in bytes
    pub fn size(&self) -> Result<u64> {
        let size = unsafe { (self.sdl.api().SDL_GetIOSize)(self.raw()) };
        u64::try_from(size).map_err(|_| self.sdl.error())
    }

    /// Move the position; returns the new absolute offset
    pub fn seek(&self, offset: i64, whence: Whence) -> Result<u64> {
        let pos = unsafe { (self.sdl.api().SDL_SeekIO)(self.raw(), offset, whence as c_int) };
        u64::try_from(pos).map_err(|_| self.sdl.error())
    }

    /// Current position
    pub fn tell(&self) -> Result<u64> {
        let pos = unsafe { (self.sdl.api().SDL_TellIO)(self.raw()) };
        u64::try_from(pos).map_err(|_| self.sdl.error())
    }

    /// Read up to `buf.len()` bytes; 0 means end of stream or not ready
    pub fn read(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let n = unsafe { (self.sdl.api().SDL_ReadIO)(self.raw(), buf.as_mut_ptr().cast(), buf.len()) };
        if n == 0 && self.status() == IoStatus::Error {
            return Err(self.sdl.error());
        }
        Ok(n)
    }

    /// Write bytes; a short count without an error means the stream is full or not ready
    pub fn write(&self, buf: &[u8]) -> Result<usize> {
        let n = unsafe { (self.sdl.api().SDL_WriteIO)(self.raw(), buf.as_ptr().cast(), buf.len()) };
        if n < buf.len() && matches!(self.status(), IoStatus::Error | IoStatus::ReadOnly) {
            return Err(self.sdl.error());
        }
        Ok(n)
    }

    /// Flush buffered writes
    pub fn flush(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_FlushIO)(self.raw()) })
    }

    /// Read everything from the current position to the end
    pub fn load_all(&self) -> Result<Vec<u8>> {
        let mut size = 0usize;
        let data = unsafe { (self.sdl.api().SDL_LoadFile_IO)(self.raw(), &mut size, false) };
        unsafe { self.sdl.take_bytes(data, size) }
    }

    /// Write all of `data`
    pub fn save_all(&self, data: &[u8]) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_SaveFile_IO)(self.raw(), data.as_ptr().cast(), data.len(), false)
        })
    }

    /// Copy of the buffer behind a [`IoStream::dynamic`] stream
    pub fn dynamic_memory(&self) -> Result<Vec<u8>> {
        let props = self.properties()?;
        let memory = props.get_pointer(PROP_DYNAMIC_MEMORY, std::ptr::null_mut())?;
        if memory.is_null() {
            return Ok(Vec::new());
        }
        let len = usize::try_from(self.size()?).map_err(|_| Error::OutOfRange {
            what: "stream size",
            value: u64::MAX,
        })?;
        // SAFETY: SDL keeps `size` bytes behind the dynamic memory pointer.
        Ok(unsafe { std::slice::from_raw_parts(memory.cast::<u8>(), len) }.to_vec())
    }
}

macro_rules! endian_io {
    ($( $ty:ty => $read:ident / $sdl_read:ident, $write:ident / $sdl_write:ident; )*) => {
        impl IoStream {
            $(
                #[doc = concat!("Read a `", stringify!($ty), "` (`", stringify!($sdl_read), "`)")]
                pub fn $read(&self) -> Result<$ty> {
                    let mut value: $ty = 0;
                    self.sdl.check(unsafe { (self.sdl.api().$sdl_read)(self.raw(), &mut value) })?;
                    Ok(value)
                }

                #[doc = concat!("Write a `", stringify!($ty), "` (`", stringify!($sdl_write), "`)")]
                pub fn $write(&self, value: $ty) -> Result<()> {
                    self.sdl.check(unsafe { (self.sdl.api().$sdl_write)(self.raw(), value) })
                }
            )*
        }
    };
}

endian_io! {
    u8 => read_u8 / SDL_ReadU8, write_u8 / SDL_WriteU8;
    u16 => read_u16_le / SDL_ReadU16LE, write_u16_le / SDL_WriteU16LE;
    u16 => read_u16_be / SDL_ReadU16BE, write_u16_be / SDL_WriteU16BE;
    u32 => read_u32_le / SDL_ReadU32LE, write_u32_le / SDL_WriteU32LE;
    u32 => read_u32_be / SDL_ReadU32BE, write_u32_be / SDL_WriteU32BE;
    u64 => read_u64_le / SDL_ReadU64LE, write_u64_le / SDL_WriteU64LE;
    u64 => read_u64_be / SDL_ReadU64BE, write_u64_be / SDL_WriteU64BE;
    i16 => read_i16_le / SDL_ReadS16LE, write_i16_le / SDL_WriteS16LE;
    i16 => read_i16_be / SDL_ReadS16BE, write_i16_be / SDL_WriteS16BE;
    i32 => read_i32_le / SDL_ReadS32LE, write_i32_le / SDL_WriteS32LE;
    i32 => read_i32_be / SDL_ReadS32BE, write_i32_be / SDL_WriteS32BE;
    i64 => read_i64_le / SDL_ReadS64LE, write_i64_le / SDL_WriteS64LE;
    i64 => read_i64_be / SDL_ReadS64BE, write_i64_be / SDL_WriteS64BE;
}

impl Drop for IoStream {
    fn drop(&mut self) {
        if !unsafe { (self.sdl.api().SDL_CloseIO)(self.raw()) } {
            log::warn!("Closing I/O stream failed: {}", self.sdl.error());
        }
    }
}

impl fmt::Debug for IoStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoStream").field("raw", &self.raw).finish()
    }
}

impl io::Read for &IoStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = IoStream::read(self, buf)?;
        if n == 0 && !buf.is_empty() && self.status() == IoStatus::NotReady {
            return Err(io::ErrorKind::WouldBlock.into());
        }
        Ok(n)
    }
}

impl io::Write for &IoStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = IoStream::write(self, buf)?;
        if n == 0 && !buf.is_empty() {
            return Err(match self.status() {
                IoStatus::NotReady => io::ErrorKind::WouldBlock.into(),
                _ => io::ErrorKind::WriteZero.into(),
            });
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(IoStream::flush(self)?)
    }
}

impl io::Seek for &IoStream {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            io::SeekFrom::Start(offset) => (
                i64::try_from(offset).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?,
                Whence::Set,
            ),
            io::SeekFrom::Current(offset) => (offset, Whence::Cur),
            io::SeekFrom::End(offset) => (offset, Whence::End),
        };
        Ok(IoStream::seek(self, offset, whence)?)
    }
}

macro_rules! forward_std_io {
    ($($ty:ty),*) => {
        $(
            impl io::Read for $ty {
                fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                    let mut stream: &IoStream = self;
                    io::Read::read(&mut stream, buf)
                }
            }

            impl io::Write for $ty {
                fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                    let mut stream: &IoStream = self;
                    io::Write::write(&mut stream, buf)
                }

                fn flush(&mut self) -> io::Result<()> {
                    let mut stream: &IoStream = self;
                    io::Write::flush(&mut stream)
                }
            }

            impl io::Seek for $ty {
                fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
                    let mut stream: &IoStream = self;
                    io::Seek::seek(&mut stream, pos)
                }
            }
        )*
    };
}

forward_std_io!(IoStream, BorrowedIoStream<'_>);

/// A stream over caller memory, valid while the buffer is borrowed
///
/// Derefs to [`IoStream`] for reading and writing but never hands out the
/// owning stream, so it cannot outlive the buffer.
pub struct BorrowedIoStream<'a> {
    stream: IoStream,
    _buffer: PhantomData<&'a mut [u8]>,
}

impl BorrowedIoStream<'_> {
    fn new(stream: IoStream) -> Self {
        Self {
            stream,
            _buffer: PhantomData,
        }
    }

    /// Close and report failure
    pub fn close(self) -> Result<()> {
        self.stream.close()
    }
}

impl Deref for BorrowedIoStream<'_> {
    type Target = IoStream;

    fn deref(&self) -> &IoStream {
        &self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decoding() {
        assert_eq!(IoStatus::from_raw(0), IoStatus::Ready);
        assert_eq!(IoStatus::from_raw(2), IoStatus::Eof);
        assert_eq!(IoStatus::from_raw(5), IoStatus::WriteOnly);
        assert_eq!(IoStatus::from_raw(-7), IoStatus::Ready);
    }

    #[test]
    fn test_whence_values() {
        assert_eq!(Whence::Set as c_int, 0);
        assert_eq!(Whence::Cur as c_int, 1);
        assert_eq!(Whence::End as c_int, 2);
    }

    #[test]
    fn test_error_converts_to_io_error() {
        let err: io::Error = Error::Sdl("disk on fire".into()).into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(err.to_string().contains("disk on fire"));
    }
}
