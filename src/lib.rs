//! # rustasp - A Rust Interface to the clingo ASP System
//!
//! Bindings to the [clingo](https://potassco.org/clingo/) answer set
//! programming system. Grounding and solving happen inside the native
//! `libclingo`; this crate provides the typed surface over its C API:
//! control objects, grounding with external-function evaluation, iterative
//! and event-driven solving, model inspection, backends, configuration and
//! statistics trees, symbolic atom traversal, and custom propagators.
//!
//! The native library is accessed through an explicit binding table instead
//! of globally linked symbols. A [`Clingo`] value owns the table and is the
//! entry point for everything else:
//!
//! ```no_run
//! use rustasp::{Clingo, Part, ShowType, SolveMode};
//!
//! fn main() -> anyhow::Result<()> {
//!     let clingo = Clingo::open("libclingo.so")?;
//!     let mut ctl = clingo.control(&["0"], 20)?;
//!     ctl.add("base", &[], "1 {a; b} 1. c.")?;
//!     ctl.ground(&[Part::base()])?;
//!     let mut handle = ctl.solve(SolveMode::YIELD, &[], None)?;
//!     loop {
//!         handle.resume()?;
//!         let Some(model) = handle.model()? else { break };
//!         for sym in model.symbols(ShowType::SHOWN)? {
//!             print!("{} ", clingo.symbol_to_string(sym)?);
//!         }
//!         println!();
//!     }
//!     let result = handle.get()?;
//!     println!("{result}");
//!     handle.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `link`: bind to a `libclingo` provided at link time instead of loading
//!   a shared library at runtime (see below)
//!
//! ## Linking
//!
//! By default no native library is required at build time;
//! [`Clingo::open`] loads `libclingo` as a shared library when the program
//! runs. With the `link` feature, [`Clingo::linked`] uses symbols resolved
//! by the linker instead; linking can be set up by adding something like the
//! following to your project's build script (`build.rs`).
//!
//! ```
//! // Link to a system-wide clingo installation
//! println!("cargo:rustc-link-lib=dylib=clingo");
//! // Or point the search at a custom location
//! // println!("cargo:rustc-link-search=<path-to-your-libclingo>");
//! ```
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! Currently, the MSRV is 1.77.0, the plan is to always support an MSRV that
//! is at least a year old.
//!
//! Bumps in the MSRV will _not_ be considered breaking changes. If you need
//! a specific MSRV, make sure to pin a precise version of this crate.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use core::ffi::c_int;
use std::ffi::OsStr;
use std::sync::Arc;

use anyhow::Context;
use libloading::Library;

mod backend;
mod configuration;
mod control;
mod error;
pub mod ffi;
mod logging;
mod model;
mod propagator;
mod solving;
mod statistics;
mod symbol;
mod symbolic_atoms;
mod types;
mod utils;

pub use backend::Backend;
pub use configuration::{Configuration, ConfigurationKey, ConfigurationType};
pub use control::{Control, ControlStats, Interrupter};
pub use error::{CallbackError, ErrorCode, InvalidApiReturn, NativeError};
pub use model::{Model, ModelType};
pub use propagator::{Assignment, PropagateControl, PropagateInit, Propagator};
pub use solving::{SolveEventHandler, SolveHandle};
pub use statistics::{Statistics, StatisticsKey, StatisticsType};
pub use symbol::{Symbol, SymbolType};
pub use symbolic_atoms::{Signature, SymbolicAtom, SymbolicAtoms, SymbolicAtomsIter};
pub use types::{
    Atom, ClauseType, ExternalType, HeuristicType, Literal, Part, ShowType, SolveMode,
    SolveResult, TruthValue, Warning, WeightedLiteral,
};

#[derive(Debug)]
struct ClingoInner {
    vtable: ffi::Vtable,
    // keeps the shared library mapped while the copied function pointers are
    // in use; `None` for linked or hand-assembled tables
    _lib: Option<Library>,
}

/// Handle to a loaded native clingo library
///
/// Cheap to clone; all clones share one binding table. Every other value of
/// this crate is created from a `Clingo` and keeps its library alive through
/// one of these handles.
#[derive(Debug, Clone)]
pub struct Clingo(Arc<ClingoInner>);

impl Clingo {
    /// Loads `libclingo` as a shared library and resolves the full binding
    /// table
    ///
    /// # Errors
    ///
    /// Fails if the library cannot be loaded or one of the required symbols
    /// is missing; the error names the offending symbol.
    pub fn open<P: AsRef<OsStr>>(path: P) -> anyhow::Result<Self> {
        let lib = unsafe { Library::new(path.as_ref()) }
            .with_context(|| format!("loading clingo library {:?} failed", path.as_ref()))?;
        let vtable = ffi::Vtable::load(&lib).context("resolving clingo symbols failed")?;
        Ok(Clingo(Arc::new(ClingoInner {
            vtable,
            _lib: Some(lib),
        })))
    }

    /// Binds to the `libclingo` resolved by the linker
    #[cfg(feature = "link")]
    #[must_use]
    pub fn linked() -> Self {
        Clingo(Arc::new(ClingoInner {
            vtable: ffi::Vtable::linked(),
            _lib: None,
        }))
    }

    /// Wraps a hand-assembled binding table
    ///
    /// The caller is responsible for keeping whatever the table's function
    /// pointers point into alive for the lifetime of the returned value and
    /// its clones.
    #[must_use]
    pub fn from_vtable(vtable: ffi::Vtable) -> Self {
        Clingo(Arc::new(ClingoInner { vtable, _lib: None }))
    }

    pub(crate) fn vtable(&self) -> &ffi::Vtable {
        &self.0.vtable
    }

    /// The version triple of the native library
    #[must_use]
    pub fn version(&self) -> (i32, i32, i32) {
        let mut major: c_int = 0;
        let mut minor: c_int = 0;
        let mut revision: c_int = 0;
        unsafe { (self.vtable().version)(&mut major, &mut minor, &mut revision) };
        (major, minor, revision)
    }
}
