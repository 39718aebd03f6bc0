//! Property groups (`SDL_PropertiesID`)
//!
//! A property group is a thread-safe string-keyed bag of typed values. SDL
//! uses them for creation parameters and to expose platform handles. A
//! [`Properties`] either owns its group (created here) or borrows one owned
//! by SDL or by another object.

use std::any::Any;
use std::ffi::{c_char, c_void};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::context::Sdl;
use crate::error::Result;
use crate::sys::{self, SDL_PropertiesID};

/// `SDL_PropertyType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Not set
    Invalid,
    /// Raw pointer
    Pointer,
    /// UTF-8 string
    String,
    /// 64-bit integer
    Number,
    /// 32-bit float
    Float,
    /// Boolean
    Boolean,
}

impl PropertyType {
    /// Decode a native value
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Pointer,
            2 => Self::String,
            3 => Self::Number,
            4 => Self::Float,
            5 => Self::Boolean,
            _ => Self::Invalid,
        }
    }
}

/// A property group
pub struct Properties {
    sdl: Sdl,
    id: SDL_PropertiesID,
    owned: bool,
}

impl Properties {
    /// Create an empty group, destroyed on drop
    pub fn new(sdl: &Sdl) -> Result<Self> {
        let id = sdl.check_id(unsafe { (sdl.api().SDL_CreateProperties)() })?;
        log::trace!("Created property group {id}");
        Ok(Self {
            sdl: sdl.clone(),
            id,
            owned: true,
        })
    }

    /// The process-wide global group
    pub fn global(sdl: &Sdl) -> Result<Self> {
        let id = sdl.check_id(unsafe { (sdl.api().SDL_GetGlobalProperties)() })?;
        Ok(Self::borrowed(sdl, id))
    }

    /// Wrap a group owned by SDL or another object; not destroyed on drop
    pub(crate) fn borrowed(sdl: &Sdl, id: SDL_PropertiesID) -> Self {
        Self {
            sdl: sdl.clone(),
            id,
            owned: false,
        }
    }

    /// Borrow the group of an object, failing on the zero id
    pub(crate) fn of_object(sdl: &Sdl, id: SDL_PropertiesID) -> Result<Self> {
        Ok(Self::borrowed(sdl, sdl.check_id(id)?))
    }

    /// Native id
    pub fn id(&self) -> SDL_PropertiesID {
        self.id
    }

    /// Copy every property into `dst`
    pub fn copy_to(&self, dst: &Self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_CopyProperties)(self.id, dst.id) })
    }

    /// Hold the group's lock until the guard drops, for multi-property updates
    pub fn lock(&self) -> Result<PropertiesLock<'_>> {
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_LockProperties)(self.id) })?;
        Ok(PropertiesLock { properties: self })
    }

    /// Store a raw pointer
    pub fn set_pointer(&self, name: &str, value: *mut c_void) -> Result<()> {
        let name = sys::c_string(name)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetPointerProperty)(self.id, name.as_ptr(), value) })
    }

    /// Store a string (copied by SDL)
    pub fn set_string(&self, name: &str, value: &str) -> Result<()> {
        let name = sys::c_string(name)?;
        let value = sys::c_string(value)?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_SetStringProperty)(self.id, name.as_ptr(), value.as_ptr())
        })
    }

    /// Store an integer
    pub fn set_number(&self, name: &str, value: i64) -> Result<()> {
        let name = sys::c_string(name)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetNumberProperty)(self.id, name.as_ptr(), value) })
    }

    /// Store a float
    pub fn set_float(&self, name: &str, value: f32) -> Result<()> {
        let name = sys::c_string(name)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetFloatProperty)(self.id, name.as_ptr(), value) })
    }

    /// Store a boolean
    pub fn set_boolean(&self, name: &str, value: bool) -> Result<()> {
        let name = sys::c_string(name)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_SetBooleanProperty)(self.id, name.as_ptr(), value) })
    }

    /// True if `name` is set
    pub fn has(&self, name: &str) -> Result<bool> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.sdl.api().SDL_HasProperty)(self.id, name.as_ptr()) })
    }

    /// Type of the value stored under `name`
    pub fn property_type(&self, name: &str) -> Result<PropertyType> {
        let name = sys::c_string(name)?;
        Ok(PropertyType::from_raw(unsafe {
            (self.sdl.api().SDL_GetPropertyType)(self.id, name.as_ptr())
        }))
    }

    /// Pointer stored under `name`, or `default`
    pub fn get_pointer(&self, name: &str, default: *mut c_void) -> Result<*mut c_void> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.sdl.api().SDL_GetPointerProperty)(self.id, name.as_ptr(), default) })
    }

    /// String stored under `name`, or `default`; numbers and booleans are formatted by SDL
    pub fn get_string(&self, name: &str, default: &str) -> Result<String> {
        let name = sys::c_string(name)?;
        let default = sys::c_string(default)?;
        // SDL returns either its internal copy or our default; both outlive this call.
        Ok(unsafe {
            sys::string_from_ptr((self.sdl.api().SDL_GetStringProperty)(
                self.id,
                name.as_ptr(),
                default.as_ptr(),
            ))
        })
    }

    /// Integer stored under `name`, or `default`
    pub fn get_number(&self, name: &str, default: i64) -> Result<i64> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.sdl.api().SDL_GetNumberProperty)(self.id, name.as_ptr(), default) })
    }

    /// Float stored under `name`, or `default`
    pub fn get_float(&self, name: &str, default: f32) -> Result<f32> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.sdl.api().SDL_GetFloatProperty)(self.id, name.as_ptr(), default) })
    }

    /// Boolean stored under `name`, or `default`
    pub fn get_boolean(&self, name: &str, default: bool) -> Result<bool> {
        let name = sys::c_string(name)?;
        Ok(unsafe { (self.sdl.api().SDL_GetBooleanProperty)(self.id, name.as_ptr(), default) })
    }

    /// Remove a property
    pub fn clear(&self, name: &str) -> Result<()> {
        let name = sys::c_string(name)?;
        self.sdl
            .check(unsafe { (self.sdl.api().SDL_ClearProperty)(self.id, name.as_ptr()) })
    }

    /// Call `f` with the name of every property; the group stays locked meanwhile
    pub fn enumerate<F: FnMut(&str)>(&self, f: F) -> Result<()> {
        let mut state = Enumeration { f, panic: None };
        let ok = unsafe {
            (self.sdl.api().SDL_EnumerateProperties)(
                self.id,
                Some(enumerate_trampoline::<F>),
                std::ptr::addr_of_mut!(state).cast(),
            )
        };
        if let Some(payload) = state.panic {
            panic::resume_unwind(payload);
        }
        self.sdl.check(ok)
    }

    /// Names of every property
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        self.enumerate(|name| names.push(name.to_owned()))?;
        names.sort();
        Ok(names)
    }
}

struct Enumeration<F> {
    f: F,
    panic: Option<Box<dyn Any + Send>>,
}

unsafe extern "C" fn enumerate_trampoline<F: FnMut(&str)>(
    userdata: *mut c_void,
    _props: SDL_PropertiesID,
    name: *const c_char,
) {
    let state = &mut *userdata.cast::<Enumeration<F>>();
    if state.panic.is_some() {
        return;
    }
    let name = sys::string_from_ptr(name);
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| (state.f)(&name))) {
        state.panic = Some(payload);
    }
}

impl Drop for Properties {
    fn drop(&mut self) {
        if self.owned {
            log::trace!("Destroying property group {}", self.id);
            unsafe { (self.sdl.api().SDL_DestroyProperties)(self.id) };
        }
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("id", &self.id)
            .field("owned", &self.owned)
            .finish()
    }
}

/// Guard returned by [`Properties::lock`]
pub struct PropertiesLock<'a> {
    properties: &'a Properties,
}

impl Drop for PropertiesLock<'_> {
    fn drop(&mut self) {
        let props = self.properties;
        unsafe { (props.sdl.api().SDL_UnlockProperties)(props.id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn invoke<F: FnMut(&str)>(state: &mut Enumeration<F>, name: &CStr) {
        unsafe { enumerate_trampoline::<F>((state as *mut Enumeration<F>).cast(), 1, name.as_ptr()) }
    }

    #[test]
    fn test_property_type_decoding() {
        assert_eq!(PropertyType::from_raw(0), PropertyType::Invalid);
        assert_eq!(PropertyType::from_raw(2), PropertyType::String);
        assert_eq!(PropertyType::from_raw(5), PropertyType::Boolean);
        assert_eq!(PropertyType::from_raw(99), PropertyType::Invalid);
    }

    #[test]
    fn test_trampoline_forwards_names() {
        let mut seen = Vec::new();
        let mut state = Enumeration {
            f: |name: &str| seen.push(name.to_owned()),
            panic: None,
        };
        invoke(&mut state, c"SDL.window.title");
        assert!(state.panic.is_none());
        drop(state);
        assert_eq!(seen, vec!["SDL.window.title".to_string()]);
    }

    #[test]
    fn test_trampoline_captures_panic() {
        let mut calls = 0;
        let mut state = Enumeration {
            f: |_: &str| {
                calls += 1;
                panic!("boom");
            },
            panic: None,
        };
        invoke(&mut state, c"a");
        invoke(&mut state, c"b");
        assert!(state.panic.is_some());
        drop(state);
        assert_eq!(calls, 1);
    }
}
