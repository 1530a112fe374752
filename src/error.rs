//! # Error Types and Translation from the Native Library
//!
//! Every fallible native call returns a success flag. On failure the native
//! library keeps a thread-local error code and message, valid until the next
//! native call on the same thread, so the flag is checked and the error state
//! fetched immediately at every call site (see [`crate::Clingo::check`]).

use core::ffi::{c_int, CStr};
use std::any::Any;
use std::panic::resume_unwind;

use thiserror::Error;

use crate::ffi;

/// Error classes reported by the native library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A precondition of the failed call was violated
    Runtime,
    /// An invalid literal or malformed state was passed
    Logic,
    /// Native memory allocation failed
    BadAlloc,
    /// Failure without a more specific class, also used for errors signalled
    /// by user callbacks
    Unknown,
}

impl ErrorCode {
    pub(crate) fn from_raw(code: ffi::clingo_error_t) -> Self {
        match code {
            1 => ErrorCode::Runtime,
            2 => ErrorCode::Logic,
            3 => ErrorCode::BadAlloc,
            _ => ErrorCode::Unknown,
        }
    }

    pub(crate) fn to_raw(self) -> ffi::clingo_error_t {
        match self {
            ErrorCode::Runtime => 1,
            ErrorCode::Logic => 2,
            ErrorCode::BadAlloc => 3,
            ErrorCode::Unknown => 4,
        }
    }
}

/// Error fetched from the native library after a failed call
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("clingo: {message} ({code:?})")]
pub struct NativeError {
    pub(crate) code: ErrorCode,
    pub(crate) message: String,
}

impl NativeError {
    /// The native error class
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The native error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error raised by a user callback while the native library was in control
///
/// Wraps the original error instead of the generic native error state, so the
/// cause of a failed ground or solve call remains inspectable.
#[derive(Error, Debug)]
#[error("error in user callback during {during}")]
pub struct CallbackError {
    pub(crate) during: &'static str,
    #[source]
    pub(crate) source: anyhow::Error,
}

impl CallbackError {
    /// The operation whose callback failed (`"ground"`, `"solve"`, ...)
    #[must_use]
    pub fn during(&self) -> &'static str {
        self.during
    }
}

/// Fatal error returned if the clingo C API returns an invalid value
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("clingo c-api returned an invalid value: {api_call} -> {value}")]
pub struct InvalidApiReturn {
    pub(crate) api_call: &'static str,
    pub(crate) value: c_int,
}

/// A failure captured at a callback trampoline
///
/// Native code cannot unwind Rust panics, so trampolines catch both explicit
/// callback errors and panics, signal failure through the callback return
/// protocol, and leave the original cause here to be rethrown once control is
/// back on the Rust side of the boundary.
#[derive(Debug)]
pub(crate) enum Fault {
    Error(anyhow::Error),
    Panic(Box<dyn Any + Send + 'static>),
}

impl Fault {
    /// Turns the stored fault back into the caller-visible failure
    ///
    /// Panics are resumed; explicit errors become a [`CallbackError`].
    pub(crate) fn rethrow(self, during: &'static str) -> anyhow::Error {
        match self {
            Fault::Error(source) => CallbackError { during, source }.into(),
            Fault::Panic(payload) => resume_unwind(payload),
        }
    }
}

impl crate::Clingo {
    /// Checks a native success flag, fetching the thread-local error state on
    /// failure
    ///
    /// Must be invoked directly after the call that produced `ok`, before any
    /// further native call on this thread.
    pub(crate) fn check(&self, ok: bool) -> Result<(), NativeError> {
        if ok {
            return Ok(());
        }
        Err(self.fetch_error())
    }

    pub(crate) fn fetch_error(&self) -> NativeError {
        let vt = self.vtable();
        let code = ErrorCode::from_raw(unsafe { (vt.error_code)() });
        let raw = unsafe { (vt.error_message)() };
        let message = if raw.is_null() {
            String::from("no message")
        } else {
            unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
        };
        NativeError { code, message }
    }
}
