//! # Logger Callback Plumbing
//!
//! The native library reports warnings (undefined operations, missing atoms,
//! parse issues below the error threshold) through a logger callback. By
//! default these are forwarded to the [`log`] crate facade; a custom closure
//! can be registered per control object instead.

use core::ffi::{c_char, c_void, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::ffi;
use crate::types::Warning;

pub(crate) type LoggerCallbackPtr<'a> = Box<dyn FnMut(Warning, &str) + 'a>;
/// Double boxing is necessary to get thin pointers for casting
pub(crate) type LoggerStore<'a> = Box<LoggerCallbackPtr<'a>>;

/// The logger used when none is supplied: forward to the `log` facade
pub(crate) fn default_logger() -> LoggerCallbackPtr<'static> {
    Box::new(|warning, message| log::warn!(target: "clingo", "{warning:?}: {message}"))
}

/// Raw callback forwarding native warnings to the stored closure
///
/// The native side treats the logger as infallible, so panics cannot be
/// reported upwards; they are caught and logged instead of crossing the
/// boundary.
pub(crate) unsafe extern "C" fn logger_trampoline(
    code: ffi::clingo_warning_t,
    message: *const c_char,
    data: *mut c_void,
) {
    let cb = &mut *data.cast::<LoggerCallbackPtr<'_>>();
    let warning = Warning::from_raw(code);
    let message = if message.is_null() {
        String::new()
    } else {
        CStr::from_ptr(message).to_string_lossy().into_owned()
    };
    if catch_unwind(AssertUnwindSafe(|| cb(warning, &message))).is_err() {
        log::error!(target: "clingo", "logger callback panicked");
    }
}
