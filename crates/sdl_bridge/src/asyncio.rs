//! Asynchronous file I/O (`SDL_AsyncIO`, `SDL_AsyncIOQueue`)
//!
//! SDL performs the reads and writes on its own worker threads and reports
//! each finished task on a queue. Buffers handed to SDL must stay put until
//! the task completes, so the queue owns them: every submitted task gets a
//! [`TaskId`] slot holding its buffer, and the buffer comes back inside the
//! [`AsyncOutcome`] once the result is collected.
//!
//! Destroying a queue blocks until its outstanding tasks have finished; only
//! then are the buffers released.

use std::ffi::c_void;
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use slotmap::{new_key_type, Key, KeyData, SlotMap};

use crate::context::Sdl;
use crate::error::{Error, Result};
use crate::sys::{self, SDL_AsyncIO, SDL_AsyncIOOutcome, SDL_AsyncIOQueue};

new_key_type! {
    /// Identifies one submitted task on its queue
    pub struct TaskId;
}

/// `SDL_AsyncIOTaskType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsyncTaskType {
    /// A read (including whole-file loads)
    Read,
    /// A write
    Write,
    /// A close
    Close,
}

impl AsyncTaskType {
    const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Write,
            2 => Self::Close,
            _ => Self::Read,
        }
    }
}

/// `SDL_AsyncIOResult`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsyncResult {
    /// Finished; the transfer may still be short at end of file
    Complete,
    /// Failed; `SDL_GetError` has details
    Failure,
    /// Canceled before it ran
    Canceled,
}

impl AsyncResult {
    const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Failure,
            2 => Self::Canceled,
            _ => Self::Complete,
        }
    }
}

/// Result of a finished task
#[derive(Debug)]
pub struct AsyncOutcome {
    /// Task this outcome belongs to; `None` for tasks not submitted through this crate
    pub task: Option<TaskId>,
    /// What kind of task finished
    pub task_type: AsyncTaskType,
    /// How it finished
    pub result: AsyncResult,
    /// The task's buffer: bytes read (truncated to the transfer), or the data that was written
    pub buffer: Vec<u8>,
    /// File offset of the transfer
    pub offset: u64,
    /// Bytes asked for
    pub bytes_requested: u64,
    /// Bytes actually moved
    pub bytes_transferred: u64,
}

impl AsyncOutcome {
    /// True for [`AsyncResult::Complete`]
    pub fn is_complete(&self) -> bool {
        self.result == AsyncResult::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskKind {
    Read,
    Write,
    LoadFile,
    Close,
}

struct Pending {
    kind: TaskKind,
    buffer: Vec<u8>,
}

fn task_token(task: TaskId) -> *mut c_void {
    task.data().as_ffi() as usize as *mut c_void
}

fn find_task(pending: &SlotMap<TaskId, Pending>, userdata: *mut c_void) -> Option<TaskId> {
    let token = userdata as usize as u64;
    if cfg!(target_pointer_width = "64") {
        let task = TaskId::from(KeyData::from_ffi(token));
        pending.contains_key(task).then_some(task)
    } else {
        // Only the slot index fits; at most one live key uses a given index.
        pending
            .keys()
            .find(|task| task.data().as_ffi() & 0xFFFF_FFFF == token)
    }
}

/// Completion queue for async I/O tasks
pub struct AsyncIoQueue {
    sdl: Sdl,
    raw: NonNull<SDL_AsyncIOQueue>,
    pending: Mutex<SlotMap<TaskId, Pending>>,
}

// SAFETY: SDL async I/O queues may be used from any thread; buffers are behind the mutex.
unsafe impl Send for AsyncIoQueue {}
unsafe impl Sync for AsyncIoQueue {}

impl AsyncIoQueue {
    /// Create a queue
    pub fn new(sdl: &Sdl) -> Result<Self> {
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_CreateAsyncIOQueue)() })?;
        log::debug!("Created async I/O queue");
        Ok(Self {
            sdl: sdl.clone(),
            raw,
            pending: Mutex::new(SlotMap::with_key()),
        })
    }

    /// Raw queue pointer
    pub fn raw(&self) -> *mut SDL_AsyncIOQueue {
        self.raw.as_ptr()
    }

    fn pending(&self) -> MutexGuard<'_, SlotMap<TaskId, Pending>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of tasks whose outcome has not been collected yet
    pub fn pending_tasks(&self) -> usize {
        self.pending().len()
    }

    /// Register a task and run `submit` with its buffer pointer and userdata token.
    /// The slot is released again if submission fails.
    fn submit(
        &self,
        kind: TaskKind,
        mut buffer: Vec<u8>,
        submit: impl FnOnce(*mut c_void, *mut c_void) -> bool,
    ) -> Result<TaskId> {
        let ptr = buffer.as_mut_ptr().cast::<c_void>();
        let mut pending = self.pending();
        // The Vec's heap block does not move when the slot map grows.
        let task = pending.insert(Pending { kind, buffer });
        if submit(ptr, task_token(task)) {
            Ok(task)
        } else {
            pending.remove(task);
            Err(self.sdl.error())
        }
    }

    fn collect(&self, outcome: &SDL_AsyncIOOutcome) -> AsyncOutcome {
        let mut pending = self.pending();
        let task = find_task(&pending, outcome.userdata);
        let entry = task.and_then(|task| pending.remove(task));
        drop(pending);

        let transferred = usize::try_from(outcome.bytes_transferred).unwrap_or(usize::MAX);
        let buffer = match entry {
            Some(Pending {
                kind: TaskKind::Read,
                mut buffer,
            }) => {
                buffer.truncate(transferred);
                buffer
            }
            Some(Pending {
                kind: TaskKind::LoadFile,
                ..
            }) => {
                if outcome.buffer.is_null() {
                    Vec::new()
                } else {
                    // SAFETY: SDL allocated the file contents for us; we free them after copying.
                    let bytes =
                        unsafe { std::slice::from_raw_parts(outcome.buffer.cast::<u8>(), transferred) }.to_vec();
                    unsafe { self.sdl.free(outcome.buffer) };
                    bytes
                }
            }
            Some(Pending { buffer, .. }) => buffer,
            None => Vec::new(),
        };

        AsyncOutcome {
            task,
            task_type: AsyncTaskType::from_raw(outcome.task_type),
            result: AsyncResult::from_raw(outcome.result),
            buffer,
            offset: outcome.offset,
            bytes_requested: outcome.bytes_requested,
            bytes_transferred: outcome.bytes_transferred,
        }
    }

    /// Take a finished outcome without blocking
    pub fn get_result(&self) -> Option<AsyncOutcome> {
        let mut outcome = SDL_AsyncIOOutcome::default();
        unsafe { (self.sdl.api().SDL_GetAsyncIOResult)(self.raw(), &mut outcome) }
            .then(|| self.collect(&outcome))
    }

    /// Block until an outcome is available, the timeout passes, or [`Self::signal`] is called.
    /// `None` timeout waits forever.
    pub fn wait_result(&self, timeout: Option<Duration>) -> Option<AsyncOutcome> {
        let timeout_ms = timeout.map_or(-1, |t| i32::try_from(t.as_millis()).unwrap_or(i32::MAX));
        let mut outcome = SDL_AsyncIOOutcome::default();
        unsafe { (self.sdl.api().SDL_WaitAsyncIOResult)(self.raw(), &mut outcome, timeout_ms) }
            .then(|| self.collect(&outcome))
    }

    /// Wake every thread blocked in [`Self::wait_result`]
    pub fn signal(&self) {
        unsafe { (self.sdl.api().SDL_SignalAsyncIOQueue)(self.raw()) };
    }

    /// Load a whole file in the background; the outcome buffer holds its contents
    pub fn load_file_async(&self, path: impl AsRef<Path>) -> Result<TaskId> {
        let path = sys::path_c_string(path.as_ref())?;
        let queue = self.raw();
        self.submit(TaskKind::LoadFile, Vec::new(), |_, userdata| unsafe {
            (self.sdl.api().SDL_LoadFileAsync)(path.as_ptr(), queue, userdata)
        })
    }
}

impl Drop for AsyncIoQueue {
    fn drop(&mut self) {
        let outstanding = self.pending().len();
        if outstanding > 0 {
            log::debug!("Destroying async I/O queue with {outstanding} outstanding task(s)");
        }
        // Blocks until outstanding tasks finish; their buffers are freed afterwards.
        unsafe { (self.sdl.api().SDL_DestroyAsyncIOQueue)(self.raw()) };
    }
}

impl fmt::Debug for AsyncIoQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncIoQueue")
            .field("pending", &self.pending_tasks())
            .finish()
    }
}

/// A file opened for asynchronous access
///
/// Dropping without [`AsyncIo::close`] closes the file synchronously.
pub struct AsyncIo {
    sdl: Sdl,
    raw: Option<NonNull<SDL_AsyncIO>>,
}

// SAFETY: SDL async I/O objects may be used from any thread.
unsafe impl Send for AsyncIo {}
unsafe impl Sync for AsyncIo {}

impl AsyncIo {
    /// Open a file; `mode` is `"r"`, `"w"`, `"r+"` or `"w+"`
    pub fn from_file(sdl: &Sdl, path: impl AsRef<Path>, mode: &str) -> Result<Self> {
        let path = sys::path_c_string(path.as_ref())?;
        let mode = sys::c_string(mode)?;
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_AsyncIOFromFile)(path.as_ptr(), mode.as_ptr()) })?;
        Ok(Self {
            sdl: sdl.clone(),
            raw: Some(raw),
        })
    }

    fn handle(&self) -> Result<*mut SDL_AsyncIO> {
        self.raw
            .map(NonNull::as_ptr)
            .ok_or_else(|| Error::Sdl("async I/O handle already closed".to_string()))
    }

    /// File size in bytes
    pub fn size(&self) -> Result<u64> {
        let size = unsafe { (self.sdl.api().SDL_GetAsyncIOSize)(self.handle()?) };
        u64::try_from(size).map_err(|_| self.sdl.error())
    }

    /// Queue a read of `len` bytes at `offset`
    pub fn read(&self, offset: u64, len: usize, queue: &AsyncIoQueue) -> Result<TaskId> {
        let raw = self.handle()?;
        queue.submit(TaskKind::Read, vec![0; len], |ptr, userdata| unsafe {
            (self.sdl.api().SDL_ReadAsyncIO)(raw, ptr, offset, len as u64, queue.raw(), userdata)
        })
    }

    /// Queue a write of `data` at `offset`; the data comes back in the outcome
    pub fn write(&self, offset: u64, data: Vec<u8>, queue: &AsyncIoQueue) -> Result<TaskId> {
        let raw = self.handle()?;
        let len = data.len() as u64;
        queue.submit(TaskKind::Write, data, |ptr, userdata| unsafe {
            (self.sdl.api().SDL_WriteAsyncIO)(raw, ptr, offset, len, queue.raw(), userdata)
        })
    }

    /// Queue a close after the already queued tasks; `flush` syncs writes to disk
    pub fn close(mut self, flush: bool, queue: &AsyncIoQueue) -> Result<TaskId> {
        let raw = self.handle()?;
        let task = queue.submit(TaskKind::Close, Vec::new(), |_, userdata| unsafe {
            (self.sdl.api().SDL_CloseAsyncIO)(raw, flush, queue.raw(), userdata)
        })?;
        self.raw = None;
        Ok(task)
    }
}

impl Drop for AsyncIo {
    fn drop(&mut self) {
        let Some(raw) = self.raw.take() else {
            return;
        };
        let api = self.sdl.api();
        unsafe {
            let queue = (api.SDL_CreateAsyncIOQueue)();
            if queue.is_null() {
                log::warn!("Leaking async I/O handle: {}", self.sdl.error());
                return;
            }
            if (api.SDL_CloseAsyncIO)(raw.as_ptr(), false, queue, std::ptr::null_mut()) {
                let mut outcome = SDL_AsyncIOOutcome::default();
                (api.SDL_WaitAsyncIOResult)(queue, &mut outcome, -1);
            } else {
                log::warn!("Closing async I/O handle failed: {}", self.sdl.error());
            }
            (api.SDL_DestroyAsyncIOQueue)(queue);
        }
    }
}

impl fmt::Debug for AsyncIo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncIo").field("open", &self.raw.is_some()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_tokens_round_trip() {
        let mut pending = SlotMap::<TaskId, Pending>::with_key();
        let first = pending.insert(Pending {
            kind: TaskKind::Read,
            buffer: vec![0; 4],
        });
        let second = pending.insert(Pending {
            kind: TaskKind::Write,
            buffer: vec![1, 2],
        });

        assert_eq!(find_task(&pending, task_token(first)), Some(first));
        assert_eq!(find_task(&pending, task_token(second)), Some(second));

        pending.remove(first);
        assert_eq!(find_task(&pending, task_token(first)), None);
    }

    #[test]
    fn test_stale_token_does_not_match_reused_slot() {
        let mut pending = SlotMap::<TaskId, Pending>::with_key();
        let old = pending.insert(Pending {
            kind: TaskKind::Close,
            buffer: Vec::new(),
        });
        pending.remove(old);
        let new = pending.insert(Pending {
            kind: TaskKind::Close,
            buffer: Vec::new(),
        });

        assert_eq!(find_task(&pending, task_token(new)), Some(new));
        if cfg!(target_pointer_width = "64") {
            assert_eq!(find_task(&pending, task_token(old)), None);
        }
    }

    #[test]
    fn test_outcome_enums() {
        assert_eq!(AsyncTaskType::from_raw(0), AsyncTaskType::Read);
        assert_eq!(AsyncTaskType::from_raw(2), AsyncTaskType::Close);
        assert_eq!(AsyncResult::from_raw(1), AsyncResult::Failure);
        assert_eq!(AsyncResult::from_raw(2), AsyncResult::Canceled);
    }

    #[test]
    fn test_null_userdata_is_foreign() {
        let pending = SlotMap::<TaskId, Pending>::with_key();
        assert_eq!(find_task(&pending, std::ptr::null_mut()), None);
    }
}
