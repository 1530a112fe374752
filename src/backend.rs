//! # Backend Program Construction
//!
//! The backend adds ground statements directly to the underlying program.
//! Natively it must be bracketed by begin/end calls; the [`Backend`] guard
//! issues begin on construction and guarantees exactly one end on every exit
//! path, including unwinding. Mutation is only reachable through the guard,
//! so no statement can be added outside the bracket.

use core::ffi::{c_int, c_uint};

use crate::types::{ExternalType, HeuristicType, WeightedLiteral};
use crate::{ffi, Atom, Clingo, Literal, Symbol};

/// Guard over an open backend bracket of a control object
#[derive(Debug)]
pub struct Backend<'a> {
    lib: &'a Clingo,
    backend: *mut ffi::clingo_backend,
    ended: bool,
}

impl<'a> Backend<'a> {
    pub(crate) fn new(lib: &'a Clingo, backend: *mut ffi::clingo_backend) -> anyhow::Result<Self> {
        lib.check(unsafe { (lib.vtable().backend_begin)(backend) })?;
        Ok(Backend {
            lib,
            backend,
            ended: false,
        })
    }

    /// Closes the bracket, surfacing any native error
    ///
    /// Dropping the guard closes the bracket as well, but swallows errors.
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn end(mut self) -> anyhow::Result<()> {
        self.ended = true;
        self.lib
            .check(unsafe { (self.lib.vtable().backend_end)(self.backend) })?;
        Ok(())
    }

    /// Adds a disjunctive or choice rule
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn rule(&mut self, choice: bool, head: &[Atom], body: &[Literal]) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_rule)(
                self.backend,
                choice,
                head.as_ptr().cast::<ffi::clingo_atom_t>(),
                head.len(),
                body.as_ptr().cast::<ffi::clingo_literal_t>(),
                body.len(),
            )
        })?;
        Ok(())
    }

    /// Adds a rule with a weighted body and lower bound
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn weight_rule(
        &mut self,
        choice: bool,
        head: &[Atom],
        lower_bound: i32,
        body: &[WeightedLiteral],
    ) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_weight_rule)(
                self.backend,
                choice,
                head.as_ptr().cast::<ffi::clingo_atom_t>(),
                head.len(),
                lower_bound,
                body.as_ptr().cast::<ffi::clingo_weighted_literal_t>(),
                body.len(),
            )
        })?;
        Ok(())
    }

    /// Adds a minimize constraint at the given priority
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn minimize(&mut self, priority: i32, literals: &[WeightedLiteral]) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_minimize)(
                self.backend,
                priority,
                literals.as_ptr().cast::<ffi::clingo_weighted_literal_t>(),
                literals.len(),
            )
        })?;
        Ok(())
    }

    /// Adds a projection directive
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn project(&mut self, atoms: &[Atom]) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_project)(
                self.backend,
                atoms.as_ptr().cast::<ffi::clingo_atom_t>(),
                atoms.len(),
            )
        })?;
        Ok(())
    }

    /// Marks an atom as external with the given truth assignment
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn external(&mut self, atom: Atom, external_type: ExternalType) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_external)(self.backend, atom.0, external_type.to_raw())
        })?;
        Ok(())
    }

    /// Adds assumptions for the next solve call
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn assume(&mut self, literals: &[Literal]) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_assume)(
                self.backend,
                literals.as_ptr().cast::<ffi::clingo_literal_t>(),
                literals.len(),
            )
        })?;
        Ok(())
    }

    /// Adds a heuristic modifier for an atom under a condition
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn heuristic(
        &mut self,
        atom: Atom,
        heuristic_type: HeuristicType,
        bias: i32,
        priority: u32,
        condition: &[Literal],
    ) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_heuristic)(
                self.backend,
                atom.0,
                heuristic_type.to_raw(),
                bias as c_int,
                priority as c_uint,
                condition.as_ptr().cast::<ffi::clingo_literal_t>(),
                condition.len(),
            )
        })?;
        Ok(())
    }

    /// Adds an edge directive for acyclicity checking
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the statement.
    pub fn acyc_edge(&mut self, node_u: i32, node_v: i32, condition: &[Literal]) -> anyhow::Result<()> {
        self.lib.check(unsafe {
            (self.lib.vtable().backend_acyc_edge)(
                self.backend,
                node_u,
                node_v,
                condition.as_ptr().cast::<ffi::clingo_literal_t>(),
                condition.len(),
            )
        })?;
        Ok(())
    }

    /// Returns the atom associated with a symbol, creating a fresh atom when
    /// no symbol is given
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn add_atom(&mut self, symbol: Option<Symbol>) -> anyhow::Result<Atom> {
        let mut sym = symbol.map(|s| s.0);
        let sym_ptr = sym
            .as_mut()
            .map_or(std::ptr::null_mut(), std::ptr::from_mut);
        let mut atom: ffi::clingo_atom_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().backend_add_atom)(self.backend, sym_ptr, &mut atom)
        })?;
        Ok(Atom(atom))
    }
}

impl Drop for Backend<'_> {
    fn drop(&mut self) {
        if !self.ended {
            self.ended = true;
            unsafe { (self.lib.vtable().backend_end)(self.backend) };
        }
    }
}
