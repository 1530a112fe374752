//! # Propagator Interface
//!
//! A [`Propagator`] extends native solving with custom propagation written in
//! Rust. The native library calls back into the registered propagator during
//! search: once at registration time (`init`) and then during solving on the
//! solver's worker threads. The raw entry points live in a fixed dispatch
//! table; the user propagator and its scratch state travel through the opaque
//! userdata pointer.
//!
//! Registration-time and solve-time operations are separated by type:
//! [`PropagateInit`] is only handed to `init`, [`PropagateControl`] only to
//! the solve-time hooks, and neither can escape its callback window.

use core::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use crate::error::{ErrorCode, Fault};
use crate::types::{ClauseType, TruthValue};
use crate::utils::from_raw_parts_maybe_null;
use crate::{ffi, Clingo, Literal};

/// Custom propagation hooks called by the native solver
///
/// All methods have default implementations, so a propagator only implements
/// the hooks it needs. Solve-time hooks may be invoked from native worker
/// threads; with multiple solver threads each hook still runs on one thread
/// at a time per solver, but not on a fixed one.
pub trait Propagator {
    /// Called once while grounding information is still available, to query
    /// solver literals and set up watches
    ///
    /// # Errors
    ///
    /// An error aborts solving and is rethrown from the enclosing solve call.
    fn init(&mut self, init: &mut PropagateInit<'_>) -> anyhow::Result<()> {
        let _ = init;
        Ok(())
    }

    /// Called when one of the watched literals was assigned
    ///
    /// # Errors
    ///
    /// An error aborts solving and is rethrown from the enclosing solve call.
    fn propagate(
        &mut self,
        control: &mut PropagateControl<'_>,
        changes: &[Literal],
    ) -> anyhow::Result<()> {
        let _ = (control, changes);
        Ok(())
    }

    /// Called when the solver retracts assignments to watched literals
    fn undo(&mut self, control: &PropagateControl<'_>, changes: &[Literal]) {
        let _ = (control, changes);
    }

    /// Called on total assignments, regardless of watches
    ///
    /// # Errors
    ///
    /// An error aborts solving and is rethrown from the enclosing solve call.
    fn check(&mut self, control: &mut PropagateControl<'_>) -> anyhow::Result<()> {
        let _ = control;
        Ok(())
    }

    /// Asks the propagator for the next decision literal; `None` leaves the
    /// decision to the solver
    ///
    /// # Errors
    ///
    /// An error aborts solving and is rethrown from the enclosing solve call.
    fn decide(
        &mut self,
        thread_id: u32,
        assignment: &Assignment<'_>,
        fallback: Literal,
    ) -> anyhow::Result<Option<Literal>> {
        let _ = (thread_id, assignment, fallback);
        Ok(None)
    }
}

/// Registration-time view handed to [`Propagator::init`]
#[derive(Debug)]
pub struct PropagateInit<'a> {
    lib: &'a Clingo,
    init: *mut ffi::clingo_propagate_init,
}

impl PropagateInit<'_> {
    /// Maps a program literal to its solver literal
    ///
    /// # Errors
    ///
    /// Fails with a logic error on invalid literals.
    pub fn solver_literal(&self, literal: Literal) -> anyhow::Result<Literal> {
        let mut solver_lit: ffi::clingo_literal_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().propagate_init_solver_literal)(
                self.init,
                literal.to_raw(),
                &mut solver_lit,
            )
        })?;
        Ok(Literal(solver_lit))
    }

    /// Watches a solver literal in all solver threads
    ///
    /// # Errors
    ///
    /// Fails with a logic error on invalid literals.
    pub fn add_watch(&mut self, literal: Literal) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().propagate_init_add_watch)(self.init, literal.to_raw())
        })?;
        Ok(())
    }

    /// Adds a clause over solver literals; returns false if the problem
    /// became unsatisfiable
    ///
    /// # Errors
    ///
    /// Fails with a logic error on invalid literals.
    pub fn add_clause(&mut self, clause: &[Literal]) -> anyhow::Result<bool> {
        let mut result = false;
        self.lib.check(unsafe {
            (self.lib.vtable().propagate_init_add_clause)(
                self.init,
                clause.as_ptr().cast::<ffi::clingo_literal_t>(),
                clause.len(),
                &mut result,
            )
        })?;
        Ok(result)
    }

    /// The number of solver threads that will run the search
    #[must_use]
    pub fn number_of_threads(&self) -> usize {
        let n = unsafe { (self.lib.vtable().propagate_init_number_of_threads)(self.init) };
        usize::try_from(n).unwrap_or(0)
    }
}

/// Solve-time view handed to the propagation hooks
#[derive(Debug)]
pub struct PropagateControl<'a> {
    lib: &'a Clingo,
    control: *mut ffi::clingo_propagate_control,
}

impl PropagateControl<'_> {
    /// The id of the solver thread calling the hook
    #[must_use]
    pub fn thread_id(&self) -> u32 {
        unsafe { (self.lib.vtable().propagate_control_thread_id)(self.control) }
    }

    /// The current (partial) assignment of the calling solver
    #[must_use]
    pub fn assignment(&self) -> Assignment<'_> {
        Assignment {
            lib: self.lib,
            assignment: unsafe { (self.lib.vtable().propagate_control_assignment)(self.control) },
        }
    }

    /// Adds a clause to the calling solver; returns false if propagation has
    /// to be stopped to resolve a conflict
    ///
    /// # Errors
    ///
    /// Fails with a logic error on invalid literals.
    pub fn add_clause(&mut self, clause: &[Literal], clause_type: ClauseType) -> anyhow::Result<bool> {
        let mut result = false;
        self.lib.check(unsafe {
            (self.lib.vtable().propagate_control_add_clause)(
                self.control,
                clause.as_ptr().cast::<ffi::clingo_literal_t>(),
                clause.len(),
                clause_type.to_raw(),
                &mut result,
            )
        })?;
        Ok(result)
    }

    /// Propagates implied literals; returns false if a conflict was found
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn propagate(&mut self) -> anyhow::Result<bool> {
        let mut result = false;
        self.lib.check(unsafe {
            (self.lib.vtable().propagate_control_propagate)(self.control, &mut result)
        })?;
        Ok(result)
    }
}

/// Borrowed view of a solver assignment
#[derive(Debug)]
pub struct Assignment<'a> {
    lib: &'a Clingo,
    assignment: *const ffi::clingo_assignment,
}

impl Assignment<'_> {
    /// The current decision level
    #[must_use]
    pub fn decision_level(&self) -> u32 {
        unsafe { (self.lib.vtable().assignment_decision_level)(self.assignment) }
    }

    /// True if the assignment is conflicting
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        unsafe { (self.lib.vtable().assignment_has_conflict)(self.assignment) }
    }

    /// The truth value of a solver literal under the assignment
    ///
    /// # Errors
    ///
    /// Fails with a logic error on invalid literals.
    pub fn truth_value(&self, literal: Literal) -> anyhow::Result<TruthValue> {
        let mut raw: ffi::clingo_truth_value_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().assignment_truth_value)(self.assignment, literal.to_raw(), &mut raw)
        })?;
        Ok(TruthValue::from_raw(raw, "clingo_assignment_truth_value")?)
    }
}

/// Userdata threaded through the native propagator entry points
pub(crate) struct PropagatorDispatch {
    pub(crate) prop: Box<dyn Propagator + Send>,
    pub(crate) lib: Clingo,
    pub(crate) fault: Arc<Mutex<Option<Fault>>>,
}

impl PropagatorDispatch {
    /// Records the first fault and mirrors it into the native error state
    fn fail(&self, fault: Fault) {
        let mut slot = self.fault.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(fault);
        }
        drop(slot);
        unsafe {
            (self.lib.vtable().set_error)(
                ErrorCode::Unknown.to_raw(),
                c"propagator callback failed".as_ptr(),
            );
        }
    }

    fn guard(&mut self, call: impl FnOnce(&mut Self) -> anyhow::Result<()>) -> bool {
        match catch_unwind(AssertUnwindSafe(|| call(self))) {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                self.fail(Fault::Error(err));
                false
            }
            Err(payload) => {
                self.fail(Fault::Panic(payload));
                false
            }
        }
    }
}

pub(crate) const DISPATCH_CALLBACKS: ffi::clingo_propagator_t = ffi::clingo_propagator_t {
    init: Some(propagator_init),
    propagate: Some(propagator_propagate),
    undo: Some(propagator_undo),
    check: Some(propagator_check),
    decide: Some(propagator_decide),
};

#[inline]
unsafe fn to_dispatch<'a>(data: *mut c_void) -> &'a mut PropagatorDispatch {
    &mut *data.cast::<PropagatorDispatch>()
}

unsafe extern "C" fn propagator_init(
    init: *mut ffi::clingo_propagate_init,
    data: *mut c_void,
) -> bool {
    let dispatch = to_dispatch(data);
    let lib = dispatch.lib.clone();
    dispatch.guard(|dispatch| {
        let mut view = PropagateInit { lib: &lib, init };
        dispatch.prop.init(&mut view)
    })
}

unsafe extern "C" fn propagator_propagate(
    control: *mut ffi::clingo_propagate_control,
    changes: *const ffi::clingo_literal_t,
    size: usize,
    data: *mut c_void,
) -> bool {
    let dispatch = to_dispatch(data);
    let lib = dispatch.lib.clone();
    let changes: &[Literal] = cast_literals(from_raw_parts_maybe_null(changes, size));
    dispatch.guard(|dispatch| {
        let mut view = PropagateControl {
            lib: &lib,
            control,
        };
        dispatch.prop.propagate(&mut view, changes)
    })
}

unsafe extern "C" fn propagator_undo(
    control: *const ffi::clingo_propagate_control,
    changes: *const ffi::clingo_literal_t,
    size: usize,
    data: *mut c_void,
) {
    let dispatch = to_dispatch(data);
    let lib = dispatch.lib.clone();
    let changes: &[Literal] = cast_literals(from_raw_parts_maybe_null(changes, size));
    // undo cannot report failure to the native side; a panic is still
    // recorded and rethrown once the solve call returns
    dispatch.guard(|dispatch| {
        let view = PropagateControl {
            lib: &lib,
            control: control.cast_mut(),
        };
        dispatch.prop.undo(&view, changes);
        Ok(())
    });
}

unsafe extern "C" fn propagator_check(
    control: *mut ffi::clingo_propagate_control,
    data: *mut c_void,
) -> bool {
    let dispatch = to_dispatch(data);
    let lib = dispatch.lib.clone();
    dispatch.guard(|dispatch| {
        let mut view = PropagateControl {
            lib: &lib,
            control,
        };
        dispatch.prop.check(&mut view)
    })
}

unsafe extern "C" fn propagator_decide(
    thread_id: ffi::clingo_id_t,
    assignment: *const ffi::clingo_assignment,
    fallback: ffi::clingo_literal_t,
    data: *mut c_void,
    decision: *mut ffi::clingo_literal_t,
) -> bool {
    let dispatch = to_dispatch(data);
    let lib = dispatch.lib.clone();
    let mut chosen = 0;
    let ok = dispatch.guard(|dispatch| {
        let view = Assignment {
            lib: &lib,
            assignment,
        };
        chosen = dispatch
            .prop
            .decide(thread_id, &view, Literal(fallback))?
            .map_or(0, Literal::to_raw);
        Ok(())
    });
    if ok {
        *decision = chosen;
    }
    ok
}

/// Reinterprets a native literal slice as wrapper literals
///
/// Sound because [`Literal`] is a transparent wrapper over the native type.
fn cast_literals(raw: &[ffi::clingo_literal_t]) -> &[Literal] {
    unsafe { &*(std::ptr::from_ref(raw) as *const [Literal]) }
}
