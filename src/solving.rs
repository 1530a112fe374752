//! # Solve Handles and Solve Events
//!
//! A solve call hands back a [`SolveHandle`] representing the in-flight
//! search. The handle is the only way to observe models and the final result,
//! and it must be closed exactly once; dropping it closes it as well.
//!
//! Solve events (model found, statistics update, unsat, finish) arrive
//! through a single native callback carrying a type tag. The trampoline
//! decodes the tag once into the typed [`SolveEventHandler`] dispatch; the
//! model view passed to `on_model` cannot outlive the callback invocation.
//! The native library may invoke the callback from its own worker threads,
//! which is why registered handlers have to be [`Send`].

use core::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cpu_time::ProcessTime;

use crate::control::ControlStats;
use crate::error::{ErrorCode, Fault};
use crate::model::Model;
use crate::statistics::Statistics;
use crate::types::SolveResult;
use crate::{ffi, Clingo};

/// Typed observer for solve events
///
/// All methods have default implementations. Events of one solve step arrive
/// in the order the native library defines: zero or more models, then exactly
/// one finish event; statistics and unsat notifications may occur in between.
pub trait SolveEventHandler {
    /// Called for every model found; return `Ok(false)` to stop the search
    ///
    /// The model view is only valid for the duration of the call.
    ///
    /// # Errors
    ///
    /// An error aborts solving and is rethrown from the solve handle.
    fn on_model(&mut self, model: &Model<'_>) -> anyhow::Result<bool> {
        let _ = model;
        Ok(true)
    }

    /// Called when the problem becomes unsatisfiable under the current
    /// optimization bound
    fn on_unsat(&mut self) {}

    /// Called when the statistics of a solving step have been updated
    fn on_statistics(&mut self, step: &Statistics<'_>, accumulated: &Statistics<'_>) {
        let _ = (step, accumulated);
    }

    /// Called exactly once when the search finishes, with the final result
    fn on_finish(&mut self, result: SolveResult) {
        let _ = result;
    }
}

/// Userdata threaded through the native solve event callback
pub(crate) struct EventDispatch<'a> {
    pub(crate) handler: &'a mut (dyn SolveEventHandler + Send),
    pub(crate) lib: Clingo,
    pub(crate) fault: Option<Fault>,
}

pub(crate) unsafe extern "C" fn solve_event_trampoline(
    event_type: ffi::clingo_solve_event_type_t,
    event: *mut c_void,
    data: *mut c_void,
    goon: *mut bool,
) -> bool {
    let dispatch = &mut *data.cast::<EventDispatch<'_>>();
    let lib = dispatch.lib.clone();
    let outcome = catch_unwind(AssertUnwindSafe(|| -> anyhow::Result<bool> {
        match event_type {
            0 => {
                if event.is_null() {
                    return Ok(true);
                }
                let model = Model::new(&lib, event.cast_const().cast::<ffi::clingo_model>());
                dispatch.handler.on_model(&model)
            }
            1 => {
                dispatch.handler.on_unsat();
                Ok(true)
            }
            2 => {
                let stats = *event.cast::<[*mut ffi::clingo_statistics; 2]>();
                let step = Statistics::new(&lib, stats[0].cast_const());
                let accumulated = Statistics::new(&lib, stats[1].cast_const());
                dispatch.handler.on_statistics(&step, &accumulated);
                Ok(true)
            }
            3 => {
                let bits = *event.cast::<ffi::clingo_solve_result_bitset_t>();
                dispatch.handler.on_finish(SolveResult::from_raw(bits));
                Ok(true)
            }
            // tolerate event kinds added by newer native versions
            _ => Ok(true),
        }
    }));
    match outcome {
        Ok(Ok(go)) => {
            *goon = go;
            true
        }
        Ok(Err(err)) => {
            dispatch.fault = Some(Fault::Error(err));
            (lib.vtable().set_error)(
                ErrorCode::Unknown.to_raw(),
                c"solve event callback failed".as_ptr(),
            );
            false
        }
        Err(payload) => {
            dispatch.fault = Some(Fault::Panic(payload));
            (lib.vtable().set_error)(
                ErrorCode::Unknown.to_raw(),
                c"solve event callback panicked".as_ptr(),
            );
            false
        }
    }
}

/// Handle to an in-flight or finished search
///
/// Holds the mutable borrow of its control object, so a second solve cannot
/// start while one is active. Closed exactly once, either explicitly through
/// [`SolveHandle::close`] or on drop.
pub struct SolveHandle<'a> {
    pub(crate) lib: Clingo,
    pub(crate) handle: *mut ffi::clingo_solve_handle,
    pub(crate) event: Option<Box<EventDispatch<'a>>>,
    pub(crate) prop_fault: Arc<Mutex<Option<Fault>>>,
    pub(crate) stats: &'a mut ControlStats,
    pub(crate) closed: bool,
}

impl std::fmt::Debug for SolveHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveHandle")
            .field("handle", &self.handle)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl<'a> SolveHandle<'a> {
    /// Blocks until the search finishes and returns the final result
    ///
    /// # Errors
    ///
    /// Rethrows errors and panics raised by registered callbacks; otherwise
    /// fails with the native error.
    pub fn get(&mut self) -> anyhow::Result<SolveResult> {
        let start = ProcessTime::now();
        let mut bits: ffi::clingo_solve_result_bitset_t = 0;
        let ok = unsafe { (self.lib.vtable().solve_handle_get)(self.handle, &mut bits) };
        self.stats.cpu_solve_time += start.elapsed();
        if !ok {
            return Err(self.failure());
        }
        // a hook that cannot signal failure (undo, a panicking logger) may
        // have left a fault behind even though the native call succeeded
        if let Some(fault) = self.take_fault() {
            return Err(fault.rethrow("solve"));
        }
        let result = SolveResult::from_raw(bits);
        self.stats.n_solves += 1;
        if result.is_satisfiable() {
            self.stats.n_sat += 1;
        } else if result.is_unsatisfiable() {
            self.stats.n_unsat += 1;
        }
        Ok(result)
    }

    /// Waits for the search, returning true once the result is ready
    ///
    /// `None` blocks indefinitely, `Some(Duration::ZERO)` polls without
    /// blocking.
    pub fn wait(&mut self, timeout: Option<Duration>) -> bool {
        let timeout = timeout.map_or(-1.0, |d| d.as_secs_f64());
        let mut ready = false;
        unsafe { (self.lib.vtable().solve_handle_wait)(self.handle, timeout, &mut ready) };
        ready
    }

    /// The model the search is currently suspended on, if any
    ///
    /// Returns `None` once the search space is exhausted. The view borrows
    /// the handle, so the search cannot be resumed while it is alive.
    ///
    /// # Errors
    ///
    /// Rethrows errors and panics raised by registered callbacks; otherwise
    /// fails with the native error.
    pub fn model(&mut self) -> anyhow::Result<Option<Model<'_>>> {
        let mut model: *const ffi::clingo_model = std::ptr::null();
        let ok = unsafe { (self.lib.vtable().solve_handle_model)(self.handle, &mut model) };
        if !ok {
            return Err(self.failure());
        }
        if model.is_null() {
            return Ok(None);
        }
        self.stats.n_models += 1;
        Ok(Some(Model::new(&self.lib, model)))
    }

    /// Resumes the search after a model was yielded
    ///
    /// # Errors
    ///
    /// Rethrows errors and panics raised by registered callbacks; otherwise
    /// fails with the native error.
    pub fn resume(&mut self) -> anyhow::Result<()> {
        let ok = unsafe { (self.lib.vtable().solve_handle_resume)(self.handle) };
        if !ok {
            return Err(self.failure());
        }
        Ok(())
    }

    /// Requests cancellation of the search
    ///
    /// Cancellation is asynchronous: the terminal state is observed through
    /// [`SolveHandle::get`] or [`SolveHandle::wait`], and carries the
    /// interrupted flag.
    ///
    /// # Errors
    ///
    /// Fails with the native error.
    pub fn cancel(&mut self) -> anyhow::Result<()> {
        let ok = unsafe { (self.lib.vtable().solve_handle_cancel)(self.handle) };
        if !ok {
            return Err(self.failure());
        }
        Ok(())
    }

    /// Closes the handle, surfacing any native error
    ///
    /// Dropping the handle closes it as well, but swallows errors.
    ///
    /// # Errors
    ///
    /// Rethrows errors and panics raised by registered callbacks; otherwise
    /// fails with the native error.
    pub fn close(mut self) -> anyhow::Result<()> {
        self.closed = true;
        let ok = unsafe { (self.lib.vtable().solve_handle_close)(self.handle) };
        if !ok {
            return Err(self.failure());
        }
        if let Some(fault) = self.take_fault() {
            return Err(fault.rethrow("solve"));
        }
        Ok(())
    }

    fn take_fault(&mut self) -> Option<Fault> {
        if let Some(event) = &mut self.event {
            if let Some(fault) = event.fault.take() {
                return Some(fault);
            }
        }
        self.prop_fault
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
    }

    /// Translates a failed native call, preferring a stored callback fault
    /// over the generic native error state
    fn failure(&mut self) -> anyhow::Error {
        // the native error state has to be read before any further native
        // call, a stored fault takes precedence afterwards
        let native = self.lib.fetch_error();
        match self.take_fault() {
            Some(fault) => fault.rethrow("solve"),
            None => native.into(),
        }
    }
}

impl Drop for SolveHandle<'_> {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            unsafe { (self.lib.vtable().solve_handle_close)(self.handle) };
        }
    }
}
