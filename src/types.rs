//! # Value Types Shared Across the API
//!
//! Thin newtypes over the fixed-width integers the native library trades in.
//! The `#[repr(transparent)]` wrappers can be passed to the native side as
//! slices without copying.

use core::fmt;
use core::ops::{BitOr, BitOrAssign, Not};

use crate::error::InvalidApiReturn;
use crate::ffi;

/// A solver or program literal
///
/// Positive literals refer to an atom, negative literals to its negation.
/// Literals are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Literal(pub(crate) ffi::clingo_literal_t);

impl Literal {
    /// Creates a literal from its raw native representation
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        debug_assert_ne!(raw, 0, "literals are non-zero");
        Literal(raw)
    }

    /// The raw native representation
    #[must_use]
    pub fn to_raw(self) -> i32 {
        self.0
    }

    /// True if the literal is positive
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The atom the literal refers to
    #[must_use]
    pub fn atom(self) -> Atom {
        Atom(self.0.unsigned_abs())
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal(-self.0)
    }
}

impl From<Atom> for Literal {
    #[allow(clippy::cast_possible_wrap)]
    fn from(atom: Atom) -> Self {
        Literal(atom.0 as i32)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A program atom as used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Atom(pub(crate) ffi::clingo_atom_t);

impl Atom {
    /// Creates an atom from its raw native representation
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        Atom(raw)
    }

    /// The raw native representation
    #[must_use]
    pub fn to_raw(self) -> u32 {
        self.0
    }
}

/// A literal paired with a weight, for weight rules and minimize constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct WeightedLiteral(pub(crate) ffi::clingo_weighted_literal_t);

impl WeightedLiteral {
    /// Pairs a literal with a weight
    #[must_use]
    pub fn new(literal: Literal, weight: i32) -> Self {
        WeightedLiteral(ffi::clingo_weighted_literal_t {
            literal: literal.0,
            weight,
        })
    }

    /// The literal
    #[must_use]
    pub fn literal(self) -> Literal {
        Literal(self.0.literal)
    }

    /// The weight
    #[must_use]
    pub fn weight(self) -> i32 {
        self.0.weight
    }
}

/// Truth value of a literal in an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruthValue {
    /// Neither the literal nor its negation holds
    #[default]
    Free,
    /// The literal holds
    True,
    /// The negation of the literal holds
    False,
}

impl TruthValue {
    pub(crate) fn from_raw(
        raw: ffi::clingo_truth_value_t,
        api_call: &'static str,
    ) -> Result<Self, InvalidApiReturn> {
        match raw {
            0 => Ok(TruthValue::Free),
            1 => Ok(TruthValue::True),
            2 => Ok(TruthValue::False),
            value => Err(InvalidApiReturn { api_call, value }),
        }
    }
}

/// A named program part to be grounded, with concrete parameter values
#[derive(Debug, Clone, Copy)]
pub struct Part<'a> {
    pub(crate) name: &'a str,
    pub(crate) params: &'a [crate::Symbol],
}

impl<'a> Part<'a> {
    /// A program part with the given name and parameters
    #[must_use]
    pub fn new(name: &'a str, params: &'a [crate::Symbol]) -> Self {
        Part { name, params }
    }

    /// The `base` part every program without `#program` directives lives in
    #[must_use]
    pub fn base() -> Self {
        Part {
            name: "base",
            params: &[],
        }
    }
}

/// Bitset selecting how a solve call behaves
///
/// The default (empty) mode solves synchronously without yielding models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveMode {
    bits: ffi::clingo_solve_mode_bitset_t,
}

impl SolveMode {
    /// Solve in a background thread
    pub const ASYNC: SolveMode = SolveMode { bits: 1 };
    /// Yield models one at a time through the solve handle
    pub const YIELD: SolveMode = SolveMode { bits: 2 };

    pub(crate) fn bits(self) -> ffi::clingo_solve_mode_bitset_t {
        self.bits
    }

    /// True if all modes in `other` are selected
    #[must_use]
    pub fn contains(self, other: SolveMode) -> bool {
        self.bits & other.bits == other.bits
    }
}

impl BitOr for SolveMode {
    type Output = SolveMode;

    fn bitor(self, rhs: SolveMode) -> SolveMode {
        SolveMode {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for SolveMode {
    fn bitor_assign(&mut self, rhs: SolveMode) {
        self.bits |= rhs.bits;
    }
}

/// Result of a finished solve call
///
/// Satisfiability and search-space exhaustion are independent flags: an
/// interrupted search can be satisfiable without being exhausted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SolveResult {
    bits: ffi::clingo_solve_result_bitset_t,
}

impl SolveResult {
    const SATISFIABLE: u32 = 1;
    const UNSATISFIABLE: u32 = 2;
    const EXHAUSTED: u32 = 4;
    const INTERRUPTED: u32 = 8;

    pub(crate) fn from_raw(bits: ffi::clingo_solve_result_bitset_t) -> Self {
        SolveResult { bits }
    }

    /// True if at least one model was found
    #[must_use]
    pub fn is_satisfiable(self) -> bool {
        self.bits & Self::SATISFIABLE != 0
    }

    /// True if the program was proven unsatisfiable
    #[must_use]
    pub fn is_unsatisfiable(self) -> bool {
        self.bits & Self::UNSATISFIABLE != 0
    }

    /// True if the search space was fully explored
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        self.bits & Self::EXHAUSTED != 0
    }

    /// True if the search was interrupted or cancelled
    #[must_use]
    pub fn is_interrupted(self) -> bool {
        self.bits & Self::INTERRUPTED != 0
    }
}

impl fmt::Debug for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolveResult")
            .field("satisfiable", &self.is_satisfiable())
            .field("unsatisfiable", &self.is_unsatisfiable())
            .field("exhausted", &self.is_exhausted())
            .field("interrupted", &self.is_interrupted())
            .finish()
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = if self.is_satisfiable() {
            "SATISFIABLE"
        } else if self.is_unsatisfiable() {
            "UNSATISFIABLE"
        } else {
            "UNKNOWN"
        };
        write!(f, "{base}")?;
        if self.is_interrupted() {
            write!(f, " (interrupted)")?;
        }
        Ok(())
    }
}

/// Bitset selecting which symbols of a model to enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowType {
    bits: ffi::clingo_show_type_bitset_t,
}

impl ShowType {
    /// Symbols selected by show directives
    pub const SHOWN: ShowType = ShowType { bits: 2 };
    /// All symbolic atoms
    pub const ATOMS: ShowType = ShowType { bits: 4 };
    /// All terms
    pub const TERMS: ShowType = ShowType { bits: 8 };
    /// Select the complement of the chosen symbols
    pub const COMPLEMENT: ShowType = ShowType { bits: 16 };
    /// Everything
    pub const ALL: ShowType = ShowType { bits: 2 | 4 | 8 };

    pub(crate) fn bits(self) -> ffi::clingo_show_type_bitset_t {
        self.bits
    }
}

impl Default for ShowType {
    fn default() -> Self {
        ShowType::SHOWN
    }
}

impl BitOr for ShowType {
    type Output = ShowType;

    fn bitor(self, rhs: ShowType) -> ShowType {
        ShowType {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Truth assignment of an external atom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalType {
    /// Keep the atom undecided
    Free,
    /// Fix the atom to true
    True,
    /// Fix the atom to false
    False,
    /// Permanently remove the atom from the program
    Release,
}

impl ExternalType {
    pub(crate) fn to_raw(self) -> ffi::clingo_external_type_t {
        match self {
            ExternalType::Free => 0,
            ExternalType::True => 1,
            ExternalType::False => 2,
            ExternalType::Release => 3,
        }
    }
}

/// Heuristic modifier applied to an atom through the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicType {
    /// Set the decision level
    Level,
    /// Set the sign of the decision
    Sign,
    /// Multiply the heuristic score
    Factor,
    /// Set the initial heuristic score
    Init,
    /// Prefer the atom to be true
    True,
    /// Prefer the atom to be false
    False,
}

impl HeuristicType {
    pub(crate) fn to_raw(self) -> ffi::clingo_heuristic_type_t {
        match self {
            HeuristicType::Level => 0,
            HeuristicType::Sign => 1,
            HeuristicType::Factor => 2,
            HeuristicType::Init => 3,
            HeuristicType::True => 4,
            HeuristicType::False => 5,
        }
    }
}

/// Lifetime class of a clause added during propagation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseType {
    /// The solver may delete the clause again
    #[default]
    Learnt,
    /// The clause is kept for the lifetime of the problem
    Static,
    /// The clause is only valid in the current solving step
    Volatile,
    /// Kept within the step, never deleted inside it
    VolatileStatic,
}

impl ClauseType {
    pub(crate) fn to_raw(self) -> ffi::clingo_clause_type_t {
        match self {
            ClauseType::Learnt => 0,
            ClauseType::Static => 1,
            ClauseType::Volatile => 2,
            ClauseType::VolatileStatic => 3,
        }
    }
}

/// Warning classes emitted through the logger callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// An arithmetic operation was undefined
    OperationUndefined,
    /// A runtime error, e.g. a failed include
    RuntimeError,
    /// An undefined atom occurred in a program
    AtomUndefined,
    /// A file was included multiple times
    FileIncluded,
    /// A variable is only bounded in one direction
    VariableUnbounded,
    /// A global variable occurred in a tuple of an aggregate
    GlobalVariable,
    /// Any other warning
    Other,
}

impl Warning {
    pub(crate) fn from_raw(raw: ffi::clingo_warning_t) -> Self {
        match raw {
            0 => Warning::OperationUndefined,
            1 => Warning::RuntimeError,
            2 => Warning::AtomUndefined,
            3 => Warning::FileIncluded,
            4 => Warning::VariableUnbounded,
            5 => Warning::GlobalVariable,
            _ => Warning::Other,
        }
    }
}
