//! # Model Views
//!
//! A [`Model`] is a borrowed view into a native model. It is only valid while
//! the solve step that produced it is paused on it: until the solve handle is
//! resumed, or until the event callback that received it returns. The borrow
//! it carries makes retaining it past that window a compile error.

use crate::error::InvalidApiReturn;
use crate::types::{Literal, ShowType};
use crate::{ffi, Clingo, Symbol};

/// The kind of enumeration a model was found by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    /// A stable model
    StableModel,
    /// A brave consequence: the union of all stable models
    BraveConsequences,
    /// A cautious consequence: the intersection of all stable models
    CautiousConsequences,
}

impl ModelType {
    fn from_raw(raw: ffi::clingo_model_type_t) -> Result<Self, InvalidApiReturn> {
        match raw {
            0 => Ok(ModelType::StableModel),
            1 => Ok(ModelType::BraveConsequences),
            2 => Ok(ModelType::CautiousConsequences),
            value => Err(InvalidApiReturn {
                api_call: "clingo_model_type",
                value,
            }),
        }
    }
}

/// Borrowed view of a model found during solving
#[derive(Debug)]
pub struct Model<'a> {
    lib: &'a Clingo,
    model: *const ffi::clingo_model,
}

impl<'a> Model<'a> {
    pub(crate) fn new(lib: &'a Clingo, model: *const ffi::clingo_model) -> Self {
        Model { lib, model }
    }

    /// The kind of enumeration this model was found by
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiReturn`] if the native library reports an unknown
    /// model type.
    pub fn model_type(&self) -> anyhow::Result<ModelType> {
        let mut raw: ffi::clingo_model_type_t = 0;
        self.lib
            .check(unsafe { (self.lib.vtable().model_type)(self.model, &mut raw) })?;
        Ok(ModelType::from_raw(raw)?)
    }

    /// The running number of this model within the current solve call
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn number(&self) -> anyhow::Result<u64> {
        let mut number: u64 = 0;
        self.lib
            .check(unsafe { (self.lib.vtable().model_number)(self.model, &mut number) })?;
        Ok(number)
    }

    /// The symbols of the model, filtered by `show`
    ///
    /// Uses the native size-query/fetch idiom; the model cannot change
    /// between the two calls because this view holds the solve step on it.
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects either call.
    pub fn symbols(&self, show: ShowType) -> anyhow::Result<Vec<Symbol>> {
        let vt = self.lib.vtable();
        let mut size: usize = 0;
        self.lib
            .check(unsafe { (vt.model_symbols_size)(self.model, show.bits(), &mut size) })?;
        let mut symbols: Vec<Symbol> = vec![Symbol(0); size];
        self.lib.check(unsafe {
            (vt.model_symbols)(
                self.model,
                show.bits(),
                symbols.as_mut_ptr().cast::<ffi::clingo_symbol_t>(),
                size,
            )
        })?;
        Ok(symbols)
    }

    /// True if the model contains the given atom symbol
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn contains(&self, atom: Symbol) -> anyhow::Result<bool> {
        let mut contained = false;
        self.lib.check(unsafe {
            (self.lib.vtable().model_contains)(self.model, atom.0, &mut contained)
        })?;
        Ok(contained)
    }

    /// True if the given program literal holds in the model
    ///
    /// # Errors
    ///
    /// Fails with a logic error on invalid literals.
    pub fn is_true(&self, literal: Literal) -> anyhow::Result<bool> {
        let mut result = false;
        self.lib.check(unsafe {
            (self.lib.vtable().model_is_true)(self.model, literal.to_raw(), &mut result)
        })?;
        Ok(result)
    }

    /// The cost vector of the model, one entry per optimization priority
    ///
    /// Empty for programs without minimize statements.
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects either call.
    pub fn cost(&self) -> anyhow::Result<Vec<i64>> {
        let vt = self.lib.vtable();
        let mut size: usize = 0;
        self.lib
            .check(unsafe { (vt.model_cost_size)(self.model, &mut size) })?;
        let mut costs: Vec<i64> = vec![0; size];
        self.lib
            .check(unsafe { (vt.model_cost)(self.model, costs.as_mut_ptr(), size) })?;
        Ok(costs)
    }

    /// True if this model has been proven optimal
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn optimality_proven(&self) -> anyhow::Result<bool> {
        let mut proven = false;
        self.lib.check(unsafe {
            (self.lib.vtable().model_optimality_proven)(self.model, &mut proven)
        })?;
        Ok(proven)
    }
}
