//! # Control Objects
//!
//! A [`Control`] owns a native solver control: programs are added to it,
//! grounded, and solved. The native control is freed exactly once when the
//! value is dropped.
//!
//! Grounding may call back into Rust to evaluate external function terms;
//! the callback and its scratch state travel through the opaque userdata
//! pointer of the native ground call, and failures raised inside the
//! callback are rethrown from the enclosing [`Control::ground_with_callback`]
//! call instead of being replaced by the generic native error.

use core::ffi::{c_char, c_void, CStr};
use std::ffi::CString;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::backend::Backend;
use crate::configuration::Configuration;
use crate::error::{ErrorCode, Fault};
use crate::logging::{self, LoggerStore};
use crate::propagator::{Propagator, PropagatorDispatch, DISPATCH_CALLBACKS};
use crate::solving::{EventDispatch, SolveEventHandler, SolveHandle};
use crate::statistics::Statistics;
use crate::symbolic_atoms::SymbolicAtoms;
use crate::types::{Part, SolveMode, Warning};
use crate::utils::from_raw_parts_maybe_null;
use crate::{ffi, Clingo, Literal, Symbol};

/// Wrapper-side counters around the solving entry points
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlStats {
    /// Number of completed solve calls
    pub n_solves: u32,
    /// Number of satisfiable solve calls
    pub n_sat: u32,
    /// Number of unsatisfiable solve calls
    pub n_unsat: u32,
    /// Number of models inspected through solve handles
    pub n_models: u32,
    /// CPU time spent blocking on solve results
    pub cpu_solve_time: Duration,
}

/// An owned native solver control object
///
/// The lifetime parameter scopes the logger callback; a control with a
/// borrowed logger cannot outlive the state the logger captures.
pub struct Control<'log> {
    lib: Clingo,
    handle: *mut ffi::clingo_control,
    // the native library keeps the raw pointer into this box for its whole
    // lifetime, the store must not be dropped or moved out before the handle
    #[allow(dead_code)]
    logger: LoggerStore<'log>,
    propagators: Vec<Box<PropagatorDispatch>>,
    prop_fault: Arc<Mutex<Option<Fault>>>,
    stats: ControlStats,
}

impl std::fmt::Debug for Control<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("handle", &self.handle)
            .field("propagators", &self.propagators.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Clingo {
    /// Creates a control object with the given command line arguments
    ///
    /// Native warnings are forwarded to the [`log`] facade; use
    /// [`Clingo::control_with_logger`] to observe them directly. At most
    /// `message_limit` messages are passed to the logger.
    ///
    /// # Errors
    ///
    /// Fails with a runtime error on invalid arguments.
    pub fn control(&self, arguments: &[&str], message_limit: u32) -> anyhow::Result<Control<'static>> {
        self.control_impl(arguments, Box::new(logging::default_logger()), message_limit)
    }

    /// Creates a control object with a custom warning logger
    ///
    /// # Errors
    ///
    /// Fails with a runtime error on invalid arguments.
    pub fn control_with_logger<'log, CB>(
        &self,
        arguments: &[&str],
        logger: CB,
        message_limit: u32,
    ) -> anyhow::Result<Control<'log>>
    where
        CB: FnMut(Warning, &str) + 'log,
    {
        let logger: logging::LoggerCallbackPtr<'log> = Box::new(logger);
        self.control_impl(arguments, Box::new(logger), message_limit)
    }

    fn control_impl<'log>(
        &self,
        arguments: &[&str],
        mut logger: LoggerStore<'log>,
        message_limit: u32,
    ) -> anyhow::Result<Control<'log>> {
        let args: Vec<CString> = arguments
            .iter()
            .map(|arg| CString::new(*arg))
            .collect::<Result<_, _>>()?;
        let arg_ptrs: Vec<*const c_char> = args.iter().map(|arg| arg.as_ptr()).collect();
        let logger_data = std::ptr::from_mut(logger.as_mut()).cast::<c_void>();
        let mut handle: *mut ffi::clingo_control = std::ptr::null_mut();
        self.check(unsafe {
            (self.vtable().control_new)(
                arg_ptrs.as_ptr(),
                arg_ptrs.len(),
                Some(logging::logger_trampoline),
                logger_data,
                message_limit,
                &mut handle,
            )
        })?;
        Ok(Control {
            lib: self.clone(),
            handle,
            logger,
            propagators: Vec::new(),
            prop_fault: Arc::new(Mutex::new(None)),
            stats: ControlStats::default(),
        })
    }
}

impl<'log> Control<'log> {
    /// Adds a non-ground program block under the given name and parameters
    ///
    /// # Errors
    ///
    /// Fails with a runtime error on malformed program text.
    pub fn add(&mut self, name: &str, parameters: &[&str], program: &str) -> anyhow::Result<()> {
        let name = CString::new(name)?;
        let params: Vec<CString> = parameters
            .iter()
            .map(|p| CString::new(*p))
            .collect::<Result<_, _>>()?;
        let param_ptrs: Vec<*const c_char> = params.iter().map(|p| p.as_ptr()).collect();
        let program = CString::new(program)?;
        self.lib.check(unsafe {
            (self.lib.vtable().control_add)(
                self.handle,
                name.as_ptr(),
                param_ptrs.as_ptr(),
                param_ptrs.len(),
                program.as_ptr(),
            )
        })?;
        Ok(())
    }

    /// Grounds the given program parts
    ///
    /// External function terms that are not evaluated remain undefined and
    /// are reported through the logger.
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if grounding fails.
    pub fn ground(&mut self, parts: &[Part<'_>]) -> anyhow::Result<()> {
        self.ground_impl(parts, None)
    }

    /// Grounds the given program parts, evaluating external function terms
    /// through `callback`
    ///
    /// The callback receives the function name and its evaluated arguments
    /// and returns the replacement symbols the term expands to.
    ///
    /// # Errors
    ///
    /// An error returned by the callback is rethrown from this call (and a
    /// panic resumed); other failures surface as the native error.
    pub fn ground_with_callback<CB>(&mut self, parts: &[Part<'_>], mut callback: CB) -> anyhow::Result<()>
    where
        CB: FnMut(&str, &[Symbol]) -> anyhow::Result<Vec<Symbol>>,
    {
        let mut cb: &mut dyn FnMut(&str, &[Symbol]) -> anyhow::Result<Vec<Symbol>> = &mut callback;
        self.ground_impl(parts, Some(&mut cb))
    }

    fn ground_impl(
        &mut self,
        parts: &[Part<'_>],
        callback: Option<&mut &mut dyn FnMut(&str, &[Symbol]) -> anyhow::Result<Vec<Symbol>>>,
    ) -> anyhow::Result<()> {
        let names: Vec<CString> = parts
            .iter()
            .map(|part| CString::new(part.name))
            .collect::<Result<_, _>>()?;
        let raw_parts: Vec<ffi::clingo_part_t> = parts
            .iter()
            .zip(&names)
            .map(|(part, name)| ffi::clingo_part_t {
                name: name.as_ptr(),
                params: part.params.as_ptr().cast::<ffi::clingo_symbol_t>(),
                size: part.params.len(),
            })
            .collect();
        let mut dispatch = callback.map(|cb| GroundDispatch {
            cb,
            lib: &self.lib,
            fault: None,
        });
        let (raw_cb, data): (ffi::clingo_ground_callback_t, *mut c_void) = match &mut dispatch {
            Some(dispatch) => (
                Some(ground_trampoline),
                std::ptr::from_mut(dispatch).cast::<c_void>(),
            ),
            None => (None, std::ptr::null_mut()),
        };
        let ok = unsafe {
            (self.lib.vtable().control_ground)(
                self.handle,
                raw_parts.as_ptr(),
                raw_parts.len(),
                raw_cb,
                data,
            )
        };
        if !ok {
            // read the native error before any further native call; a fault
            // stored by the trampoline takes precedence over it
            let native = self.lib.fetch_error();
            if let Some(fault) = dispatch.and_then(|d| d.fault) {
                return Err(fault.rethrow("ground"));
            }
            return Err(native.into());
        }
        Ok(())
    }

    /// Starts a search with the given mode and assumptions
    ///
    /// The returned handle borrows the control mutably, so only one search
    /// can be active at a time. Solve events are delivered to `handler`,
    /// possibly from a native worker thread.
    ///
    /// # Errors
    ///
    /// Fails with the native error if the search cannot be started.
    pub fn solve<'a>(
        &'a mut self,
        mode: SolveMode,
        assumptions: &[Literal],
        handler: Option<&'a mut (dyn SolveEventHandler + Send)>,
    ) -> anyhow::Result<SolveHandle<'a>> {
        let lib = self.lib.clone();
        let prop_fault = self.prop_fault.clone();
        let mut event = handler.map(|handler| {
            Box::new(EventDispatch {
                handler,
                lib: lib.clone(),
                fault: None,
            })
        });
        let (raw_cb, data): (ffi::clingo_solve_event_callback_t, *mut c_void) = match &mut event {
            Some(dispatch) => (
                Some(crate::solving::solve_event_trampoline),
                std::ptr::from_mut(dispatch.as_mut()).cast::<c_void>(),
            ),
            None => (None, std::ptr::null_mut()),
        };
        let mut handle: *mut ffi::clingo_solve_handle = std::ptr::null_mut();
        lib.check(unsafe {
            (lib.vtable().control_solve)(
                self.handle,
                mode.bits(),
                assumptions.as_ptr().cast::<ffi::clingo_literal_t>(),
                assumptions.len(),
                raw_cb,
                data,
                &mut handle,
            )
        })?;
        Ok(SolveHandle {
            lib,
            handle,
            event,
            prop_fault,
            stats: &mut self.stats,
            closed: false,
        })
    }

    /// True if the program was found conflicting during grounding, before
    /// any solving
    #[must_use]
    pub fn is_conflicting(&self) -> bool {
        unsafe { (self.lib.vtable().control_is_conflicting)(self.handle) }
    }

    /// Requests interruption of the active search
    ///
    /// Asynchronous: the interrupted terminal state is observed through the
    /// solve handle.
    pub fn interrupt(&mut self) {
        unsafe { (self.lib.vtable().control_interrupt)(self.handle) };
    }

    /// Hands out an interrupter that can stop searches from another thread
    #[must_use]
    pub fn interrupter(&mut self) -> Interrupter {
        Interrupter {
            handle: self.handle,
            interrupt: self.lib.vtable().control_interrupt,
        }
    }

    /// Registers a propagator for all following solve calls
    ///
    /// With `sequential` set, the native library serializes invocations
    /// across solver threads. The propagator lives as long as the control.
    ///
    /// # Errors
    ///
    /// Fails with the native error if registration is rejected.
    pub fn register_propagator<P>(&mut self, propagator: P, sequential: bool) -> anyhow::Result<()>
    where
        P: Propagator + Send + 'static,
    {
        let mut dispatch = Box::new(PropagatorDispatch {
            prop: Box::new(propagator),
            lib: self.lib.clone(),
            fault: self.prop_fault.clone(),
        });
        let data = std::ptr::from_mut(dispatch.as_mut()).cast::<c_void>();
        self.lib.check(unsafe {
            (self.lib.vtable().control_register_propagator)(
                self.handle,
                &DISPATCH_CALLBACKS,
                data,
                sequential,
            )
        })?;
        self.propagators.push(dispatch);
        Ok(())
    }

    /// Borrowed view of the symbolic atom base built by grounding
    ///
    /// # Errors
    ///
    /// Fails with the native error.
    pub fn symbolic_atoms(&self) -> anyhow::Result<SymbolicAtoms<'_>> {
        let mut atoms: *const ffi::clingo_symbolic_atoms = std::ptr::null();
        self.lib
            .check(unsafe { (self.lib.vtable().control_symbolic_atoms)(self.handle, &mut atoms) })?;
        Ok(SymbolicAtoms::new(&self.lib, atoms))
    }

    /// Opens a backend bracket for adding ground statements directly
    ///
    /// # Errors
    ///
    /// Fails with the native error.
    pub fn backend(&mut self) -> anyhow::Result<Backend<'_>> {
        let mut backend: *mut ffi::clingo_backend = std::ptr::null_mut();
        self.lib
            .check(unsafe { (self.lib.vtable().control_backend)(self.handle, &mut backend) })?;
        Backend::new(&self.lib, backend)
    }

    /// Borrowed view of the solver configuration tree
    ///
    /// # Errors
    ///
    /// Fails with the native error.
    pub fn configuration(&mut self) -> anyhow::Result<Configuration<'_>> {
        let mut conf: *mut ffi::clingo_configuration = std::ptr::null_mut();
        self.lib
            .check(unsafe { (self.lib.vtable().control_configuration)(self.handle, &mut conf) })?;
        Ok(Configuration::new(&self.lib, conf))
    }

    /// Borrowed view of the statistics tree of the last solve call
    ///
    /// # Errors
    ///
    /// Fails with the native error.
    pub fn statistics(&self) -> anyhow::Result<Statistics<'_>> {
        let mut stats: *const ffi::clingo_statistics = std::ptr::null();
        self.lib
            .check(unsafe { (self.lib.vtable().control_statistics)(self.handle, &mut stats) })?;
        Ok(Statistics::new(&self.lib, stats))
    }

    /// The wrapper-side solving counters
    #[must_use]
    pub fn stats(&self) -> ControlStats {
        self.stats.clone()
    }
}

impl Drop for Control<'_> {
    fn drop(&mut self) {
        unsafe { (self.lib.vtable().control_free)(self.handle) };
    }
}

/// Interrupts searches of a control object from another thread
#[derive(Debug, Clone, Copy)]
pub struct Interrupter {
    handle: *mut ffi::clingo_control,
    interrupt: unsafe extern "C" fn(*mut ffi::clingo_control),
}

unsafe impl Send for Interrupter {}
unsafe impl Sync for Interrupter {}

impl Interrupter {
    /// Requests interruption of the active search
    pub fn interrupt(&self) {
        unsafe { (self.interrupt)(self.handle) };
    }
}

/// Userdata threaded through the native ground callback
struct GroundDispatch<'a, 'b> {
    cb: &'a mut &'b mut dyn FnMut(&str, &[Symbol]) -> anyhow::Result<Vec<Symbol>>,
    lib: &'a Clingo,
    fault: Option<Fault>,
}

unsafe extern "C" fn ground_trampoline(
    _location: *const ffi::clingo_location_t,
    name: *const c_char,
    arguments: *const ffi::clingo_symbol_t,
    arguments_size: usize,
    data: *mut c_void,
    symbol_callback: ffi::clingo_symbol_callback_t,
    symbol_callback_data: *mut c_void,
) -> bool {
    let dispatch = &mut *data.cast::<GroundDispatch<'_, '_>>();
    let lib = dispatch.lib;
    let outcome = catch_unwind(AssertUnwindSafe(|| -> anyhow::Result<Vec<Symbol>> {
        let name = CStr::from_ptr(name)
            .to_str()
            .map_err(|_| anyhow::anyhow!("external function name is not valid UTF-8"))?;
        let arguments: Vec<Symbol> = from_raw_parts_maybe_null(arguments, arguments_size)
            .iter()
            .map(|&sym| Symbol(sym))
            .collect();
        (dispatch.cb)(name, &arguments)
    }));
    match outcome {
        Ok(Ok(symbols)) => {
            let Some(symbol_callback) = symbol_callback else {
                return true;
            };
            symbol_callback(
                symbols.as_ptr().cast::<ffi::clingo_symbol_t>(),
                symbols.len(),
                symbol_callback_data,
            )
        }
        Ok(Err(err)) => {
            dispatch.fault = Some(Fault::Error(err));
            (lib.vtable().set_error)(
                ErrorCode::Unknown.to_raw(),
                c"ground callback failed".as_ptr(),
            );
            false
        }
        Err(payload) => {
            dispatch.fault = Some(Fault::Panic(payload));
            (lib.vtable().set_error)(
                ErrorCode::Unknown.to_raw(),
                c"ground callback panicked".as_ptr(),
            );
            false
        }
    }
}
