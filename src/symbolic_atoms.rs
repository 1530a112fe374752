//! # Symbolic Atom Inspection
//!
//! Cursor-based traversal of the foreign-owned atom base built by grounding.
//! The sequence is lazy, finite and forward-only: a fresh [`SymbolicAtoms::iter`]
//! call restarts it, a held cursor does not rewind. The views borrow the
//! control object, so the atom base cannot be grounded (and the cursors
//! invalidated) while a walk is in progress.

use std::ffi::CString;

use crate::{ffi, Clingo, Literal, Symbol};

/// Predicate signature used to filter symbolic atom traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub(crate) ffi::clingo_signature_t);

impl Clingo {
    /// Creates a predicate signature from name, arity and sign
    ///
    /// # Errors
    ///
    /// If the native library fails to intern the name, or the name contains a
    /// NUL byte.
    pub fn signature(&self, name: &str, arity: u32, positive: bool) -> anyhow::Result<Signature> {
        let name = CString::new(name)?;
        let mut sig: ffi::clingo_signature_t = 0;
        self.check(unsafe {
            (self.vtable().signature_create)(name.as_ptr(), arity, positive, &mut sig)
        })?;
        Ok(Signature(sig))
    }
}

/// Borrowed view of the symbolic atom base of a control object
#[derive(Debug)]
pub struct SymbolicAtoms<'a> {
    lib: &'a Clingo,
    atoms: *const ffi::clingo_symbolic_atoms,
}

impl<'a> SymbolicAtoms<'a> {
    pub(crate) fn new(lib: &'a Clingo, atoms: *const ffi::clingo_symbolic_atoms) -> Self {
        SymbolicAtoms { lib, atoms }
    }

    /// The number of atoms in the base
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn len(&self) -> anyhow::Result<usize> {
        let mut size: usize = 0;
        self.lib
            .check(unsafe { (self.lib.vtable().symbolic_atoms_size)(self.atoms, &mut size) })?;
        Ok(size)
    }

    /// True if the base contains no atoms
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Iterates over all atoms in the base
    ///
    /// # Errors
    ///
    /// Fails if the begin cursor cannot be obtained.
    pub fn iter(&self) -> anyhow::Result<SymbolicAtomsIter<'a>> {
        self.iter_impl(std::ptr::null())
    }

    /// Iterates over the atoms matching a predicate signature
    ///
    /// # Errors
    ///
    /// Fails if the begin cursor cannot be obtained.
    pub fn iter_with_signature(&self, sig: Signature) -> anyhow::Result<SymbolicAtomsIter<'a>> {
        self.iter_impl(&sig.0)
    }

    fn iter_impl(
        &self,
        sig: *const ffi::clingo_signature_t,
    ) -> anyhow::Result<SymbolicAtomsIter<'a>> {
        let vt = self.lib.vtable();
        let mut cur: ffi::clingo_symbolic_atom_iterator_t = 0;
        self.lib
            .check(unsafe { (vt.symbolic_atoms_begin)(self.atoms, sig, &mut cur) })?;
        let mut end: ffi::clingo_symbolic_atom_iterator_t = 0;
        self.lib
            .check(unsafe { (vt.symbolic_atoms_end)(self.atoms, &mut end) })?;
        Ok(SymbolicAtomsIter {
            lib: self.lib,
            atoms: self.atoms,
            cur,
            end,
        })
    }
}

/// Forward-only cursor walk over the symbolic atom base
#[derive(Debug)]
pub struct SymbolicAtomsIter<'a> {
    lib: &'a Clingo,
    atoms: *const ffi::clingo_symbolic_atoms,
    cur: ffi::clingo_symbolic_atom_iterator_t,
    end: ffi::clingo_symbolic_atom_iterator_t,
}

impl<'a> SymbolicAtomsIter<'a> {
    fn at_end(&self) -> bool {
        let vt = self.lib.vtable();
        let mut valid = false;
        if unsafe { (vt.symbolic_atoms_is_valid)(self.atoms, self.cur, &mut valid) } && !valid {
            return true;
        }
        let mut equal = false;
        let ok = unsafe {
            (vt.symbolic_atoms_iterator_is_equal_to)(self.atoms, self.cur, self.end, &mut equal)
        };
        debug_assert!(ok, "iterator comparison failed");
        !ok || equal
    }
}

impl<'a> Iterator for SymbolicAtomsIter<'a> {
    type Item = SymbolicAtom<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() {
            return None;
        }
        let item = SymbolicAtom {
            lib: self.lib,
            atoms: self.atoms,
            it: self.cur,
        };
        let mut next: ffi::clingo_symbolic_atom_iterator_t = 0;
        let ok =
            unsafe { (self.lib.vtable().symbolic_atoms_next)(self.atoms, self.cur, &mut next) };
        debug_assert!(ok, "iterator advance failed");
        if !ok {
            return None;
        }
        self.cur = next;
        Some(item)
    }
}

/// Borrowed view of a single entry in the symbolic atom base
#[derive(Debug)]
pub struct SymbolicAtom<'a> {
    lib: &'a Clingo,
    atoms: *const ffi::clingo_symbolic_atoms,
    it: ffi::clingo_symbolic_atom_iterator_t,
}

impl SymbolicAtom<'_> {
    /// The symbol of the atom
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn symbol(&self) -> anyhow::Result<Symbol> {
        let mut sym: ffi::clingo_symbol_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().symbolic_atoms_symbol)(self.atoms, self.it, &mut sym)
        })?;
        Ok(Symbol(sym))
    }

    /// True if the atom is a fact, i.e. true in every model
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn is_fact(&self) -> anyhow::Result<bool> {
        let mut fact = false;
        self.lib.check(unsafe {
            (self.lib.vtable().symbolic_atoms_is_fact)(self.atoms, self.it, &mut fact)
        })?;
        Ok(fact)
    }

    /// The program literal associated with the atom
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn literal(&self) -> anyhow::Result<Literal> {
        let mut lit: ffi::clingo_literal_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().symbolic_atoms_literal)(self.atoms, self.it, &mut lit)
        })?;
        Ok(Literal(lit))
    }
}
