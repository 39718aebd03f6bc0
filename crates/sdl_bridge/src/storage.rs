//! Storage containers (`SDL_Storage`)
//!
//! Paths inside a storage container always use `/` separators and are
//! relative to the container root. Title storage is read-only; user storage
//! is writable.

use std::any::Any;
use std::ffi::{c_char, c_int, c_void};
use std::fmt;
use std::mem::ManuallyDrop;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::ptr::NonNull;

use bitflags::bitflags;

use crate::context::Sdl;
use crate::error::{Error, Result};
use crate::properties::Properties;
use crate::sys::{self, SDL_PathInfo, SDL_Storage};

/// `SDL_PathType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// Does not exist
    None,
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Something else (device, pipe, ...)
    Other,
}

impl PathType {
    /// Decode a native value
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::File,
            2 => Self::Directory,
            3 => Self::Other,
            _ => Self::None,
        }
    }
}

/// Metadata for a path inside a storage container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathInfo {
    /// Kind of entry
    pub path_type: PathType,
    /// Size in bytes
    pub size: u64,
    /// Creation time, nanoseconds since the Unix epoch
    pub create_time: i64,
    /// Last modification time, nanoseconds since the Unix epoch
    pub modify_time: i64,
    /// Last access time, nanoseconds since the Unix epoch
    pub access_time: i64,
}

impl From<SDL_PathInfo> for PathInfo {
    fn from(info: SDL_PathInfo) -> Self {
        Self {
            path_type: PathType::from_raw(info.path_type),
            size: info.size,
            create_time: info.create_time,
            modify_time: info.modify_time,
            access_time: info.access_time,
        }
    }
}

bitflags! {
    /// `SDL_GlobFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlobFlags: u32 {
        /// Match without regard to case
        const CASE_INSENSITIVE = 1 << 0;
    }
}

/// Returned from a directory enumeration callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enumeration {
    /// Keep going
    Continue,
    /// Stop early; the enumeration still succeeds
    Stop,
}

const ENUM_CONTINUE: c_int = 0;
const ENUM_SUCCESS: c_int = 1;
const ENUM_FAILURE: c_int = 2;

struct DirectoryWalk<F> {
    f: F,
    panic: Option<Box<dyn Any + Send>>,
}

unsafe extern "C" fn directory_trampoline<F: FnMut(&str, &str) -> Enumeration>(
    userdata: *mut c_void,
    dirname: *const c_char,
    fname: *const c_char,
) -> c_int {
    let state = &mut *userdata.cast::<DirectoryWalk<F>>();
    if state.panic.is_some() {
        return ENUM_FAILURE;
    }
    let dirname = sys::string_from_ptr(dirname);
    let fname = sys::string_from_ptr(fname);
    match panic::catch_unwind(AssertUnwindSafe(|| (state.f)(&dirname, &fname))) {
        Ok(Enumeration::Continue) => ENUM_CONTINUE,
        Ok(Enumeration::Stop) => ENUM_SUCCESS,
        Err(payload) => {
            state.panic = Some(payload);
            ENUM_FAILURE
        }
    }
}

/// An open storage container
pub struct Storage {
    sdl: Sdl,
    raw: NonNull<SDL_Storage>,
}

impl Storage {
    /// Read-only storage for the application's own files
    pub fn open_title(sdl: &Sdl, override_path: Option<&Path>, props: Option<&Properties>) -> Result<Self> {
        let path = override_path.map(sys::path_c_string).transpose()?;
        let raw = unsafe {
            (sdl.api().SDL_OpenTitleStorage)(
                sys::optional_ptr(&path),
                props.map_or(0, Properties::id),
            )
        };
        Self::opened(sdl, raw, "title")
    }

    /// Writable per-user storage for `org`/`app`
    pub fn open_user(sdl: &Sdl, org: &str, app: &str, props: Option<&Properties>) -> Result<Self> {
        let org = sys::c_string(org)?;
        let app = sys::c_string(app)?;
        let raw = unsafe {
            (sdl.api().SDL_OpenUserStorage)(org.as_ptr(), app.as_ptr(), props.map_or(0, Properties::id))
        };
        Self::opened(sdl, raw, "user")
    }

    /// Storage rooted at a filesystem directory
    pub fn open_file(sdl: &Sdl, path: impl AsRef<Path>) -> Result<Self> {
        let path = sys::path_c_string(path.as_ref())?;
        let raw = unsafe { (sdl.api().SDL_OpenFileStorage)(path.as_ptr()) };
        Self::opened(sdl, raw, "file")
    }

    fn opened(sdl: &Sdl, raw: *mut SDL_Storage, kind: &str) -> Result<Self> {
        let raw = sdl.check_ptr(raw)?;
        log::debug!("Opened {kind} storage");
        Ok(Self { sdl: sdl.clone(), raw })
    }

    /// Raw storage pointer
    pub fn raw(&self) -> *mut SDL_Storage {
        self.raw.as_ptr()
    }

    /// Close and report errors, such as a failed final write
    pub fn close(self) -> Result<()> {
        let this = ManuallyDrop::new(self);
        let ok = unsafe { (this.sdl.api().SDL_CloseStorage)(this.raw()) };
        // SAFETY: `this` is never used or dropped again.
        let sdl = unsafe { std::ptr::read(&this.sdl) };
        sdl.check(ok)
    }

    /// True once the container can be accessed
    pub fn ready(&self) -> bool {
        unsafe { (self.sdl.api().SDL_StorageReady)(self.raw()) }
    }

    /// Size of a file in bytes
    pub fn file_size(&self, path: &str) -> Result<u64> {
        let path = sys::c_string(path)?;
        let mut length = 0u64;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_GetStorageFileSize)(self.raw(), path.as_ptr(), &mut length)
        })?;
        Ok(length)
    }

    /// Read a whole file
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let length = self.file_size(path)?;
        let mut data = vec![0u8; usize::try_from(length).map_err(|_| Error::OutOfRange {
            what: "storage file size",
            value: length,
        })?];
        let path = sys::c_string(path)?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_ReadStorageFile)(self.raw(), path.as_ptr(), data.as_mut_ptr().cast(), length)
        })?;
        Ok(data)
    }

    /// Create or replace a file
    pub fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let path = sys::c_string(path)?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_WriteStorageFile)(self.raw(), path.as_ptr(), data.as_ptr().cast(), data.len() as u64)
        })
    }

    /// Create a directory, including missing parents
    pub fn create_directory(&self, path: &str) -> Result<()> {
        let path = sys::c_string(path)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_CreateStorageDirectory)(self.raw(), path.as_ptr()) })
    }

    /// Call `f(dirname, entry)` for every entry of a directory; `None` walks the root
    ///
    /// Returning [`Enumeration::Stop`] ends the walk early without an error.
    /// A panic inside `f` stops the walk and is resumed here.
    pub fn enumerate_directory<F>(&self, path: Option<&str>, f: F) -> Result<()>
    where
        F: FnMut(&str, &str) -> Enumeration,
    {
        let path = sys::optional_c_string(path)?;
        let mut state = DirectoryWalk { f, panic: None };
        let ok = unsafe {
            (self.sdl.api().SDL_EnumerateStorageDirectory)(
                self.raw(),
                sys::optional_ptr(&path),
                Some(directory_trampoline::<F>),
                std::ptr::addr_of_mut!(state).cast(),
            )
        };
        if let Some(payload) = state.panic {
            panic::resume_unwind(payload);
        }
        self.sdl.check(ok)
    }

    /// Names of the entries of a directory
    pub fn list_directory(&self, path: Option<&str>) -> Result<Vec<String>> {
        let mut entries = Vec::new();
        self.enumerate_directory(path, |_, name| {
            entries.push(name.to_owned());
            Enumeration::Continue
        })?;
        entries.sort();
        Ok(entries)
    }

    /// Remove a file or an empty directory
    pub fn remove_path(&self, path: &str) -> Result<()> {
        let path = sys::c_string(path)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_RemoveStoragePath)(self.raw(), path.as_ptr()) })
    }

    /// Rename a file or directory
    pub fn rename_path(&self, from: &str, to: &str) -> Result<()> {
        let from = sys::c_string(from)?;
        let to = sys::c_string(to)?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_RenameStoragePath)(self.raw(), from.as_ptr(), to.as_ptr())
        })
    }

    /// Copy a file
    pub fn copy_file(&self, from: &str, to: &str) -> Result<()> {
        let from = sys::c_string(from)?;
        let to = sys::c_string(to)?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_CopyStorageFile)(self.raw(), from.as_ptr(), to.as_ptr())
        })
    }

    /// Metadata for a path
    pub fn path_info(&self, path: &str) -> Result<PathInfo> {
        let path = sys::c_string(path)?;
        let mut info = SDL_PathInfo::default();
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_GetStoragePathInfo)(self.raw(), path.as_ptr(), &mut info)
        })?;
        Ok(info.into())
    }

    /// True if `path` exists
    pub fn exists(&self, path: &str) -> bool {
        self.path_info(path)
            .map(|info| info.path_type != PathType::None)
            .unwrap_or(false)
    }

    /// Bytes left in the container
    pub fn space_remaining(&self) -> u64 {
        unsafe { (self.sdl.api().SDL_GetStorageSpaceRemaining)(self.raw()) }
    }

    /// Entries under `path` (or the root) matching a `*`/`?` pattern; `None` matches everything
    pub fn glob_directory(&self, path: Option<&str>, pattern: Option<&str>, flags: GlobFlags) -> Result<Vec<String>> {
        let path = sys::optional_c_string(path)?;
        let pattern = sys::optional_c_string(pattern)?;
        let mut count: c_int = 0;
        let list = unsafe {
            (self.sdl.api().SDL_GlobStorageDirectory)(
                self.raw(),
                sys::optional_ptr(&path),
                sys::optional_ptr(&pattern),
                flags.bits(),
                &mut count,
            )
        };
        // SAFETY: SDL returned `count` strings in one allocation.
        unsafe { self.sdl.take_string_list(list, count) }
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        if !unsafe { (self.sdl.api().SDL_CloseStorage)(self.raw()) } {
            log::warn!("Closing storage failed: {}", self.sdl.error());
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage").field("raw", &self.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn invoke<F: FnMut(&str, &str) -> Enumeration>(state: &mut DirectoryWalk<F>, dir: &CStr, name: &CStr) -> c_int {
        unsafe { directory_trampoline::<F>((state as *mut DirectoryWalk<F>).cast(), dir.as_ptr(), name.as_ptr()) }
    }

    #[test]
    fn test_path_type_decoding() {
        assert_eq!(PathType::from_raw(0), PathType::None);
        assert_eq!(PathType::from_raw(1), PathType::File);
        assert_eq!(PathType::from_raw(2), PathType::Directory);
        assert_eq!(PathType::from_raw(3), PathType::Other);
    }

    #[test]
    fn test_path_info_conversion() {
        let raw = SDL_PathInfo {
            path_type: 1,
            size: 42,
            create_time: 1,
            modify_time: 2,
            access_time: 3,
        };
        let info = PathInfo::from(raw);
        assert_eq!(info.path_type, PathType::File);
        assert_eq!(info.size, 42);
        assert_eq!(info.modify_time, 2);
    }

    #[test]
    fn test_walk_maps_results() {
        let mut seen = Vec::new();
        let mut state = DirectoryWalk {
            f: |dir: &str, name: &str| {
                seen.push(format!("{dir}{name}"));
                if name == "stop" {
                    Enumeration::Stop
                } else {
                    Enumeration::Continue
                }
            },
            panic: None,
        };
        assert_eq!(invoke(&mut state, c"saves/", c"a.dat"), ENUM_CONTINUE);
        assert_eq!(invoke(&mut state, c"saves/", c"stop"), ENUM_SUCCESS);
        drop(state);
        assert_eq!(seen, vec!["saves/a.dat", "saves/stop"]);
    }

    #[test]
    fn test_walk_panic_fails_enumeration() {
        let mut state = DirectoryWalk {
            f: |_: &str, _: &str| -> Enumeration { panic!("bad entry") },
            panic: None,
        };
        assert_eq!(invoke(&mut state, c"", c"x"), ENUM_FAILURE);
        assert_eq!(invoke(&mut state, c"", c"y"), ENUM_FAILURE);
        assert!(state.panic.is_some());
    }

    #[test]
    fn test_glob_flag_value() {
        assert_eq!(GlobFlags::CASE_INSENSITIVE.bits(), 1);
    }
}
