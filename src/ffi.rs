//! # Raw ABI Surface and Binding Table
//!
//! Mirrors the subset of the clingo C API used by this crate: opaque handle
//! types, fixed-width type aliases, `#[repr(C)]` argument structures, callback
//! signatures, and the [`Vtable`] of function pointers through which every
//! native call is made.
//!
//! The vtable is an explicit value rather than a set of globally linked
//! symbols. It is populated either by resolving symbols from a shared library
//! at runtime ([`Vtable::load`]) or, with the `link` feature, from an
//! `extern "C"` block ([`Vtable::linked`]). Embedders and tests can also
//! assemble one by hand.

#![allow(non_camel_case_types)]
#![allow(missing_docs)]
#![allow(clippy::module_name_repetitions)]

use core::ffi::{c_char, c_int, c_uint, c_void};

use libloading::Library;

/// Opaque handle to a native control object
#[repr(C)]
pub struct clingo_control {
    _private: [u8; 0],
}

/// Opaque handle to a native solve handle
#[repr(C)]
pub struct clingo_solve_handle {
    _private: [u8; 0],
}

/// Opaque handle to a native model
#[repr(C)]
pub struct clingo_model {
    _private: [u8; 0],
}

/// Opaque handle to a native backend
#[repr(C)]
pub struct clingo_backend {
    _private: [u8; 0],
}

/// Opaque handle to a native configuration tree
#[repr(C)]
pub struct clingo_configuration {
    _private: [u8; 0],
}

/// Opaque handle to a native statistics tree
#[repr(C)]
pub struct clingo_statistics {
    _private: [u8; 0],
}

/// Opaque handle to the native symbolic atom base
#[repr(C)]
pub struct clingo_symbolic_atoms {
    _private: [u8; 0],
}

/// Opaque handle to a native propagate-init object
#[repr(C)]
pub struct clingo_propagate_init {
    _private: [u8; 0],
}

/// Opaque handle to a native propagate-control object
#[repr(C)]
pub struct clingo_propagate_control {
    _private: [u8; 0],
}

/// Opaque handle to a native assignment
#[repr(C)]
pub struct clingo_assignment {
    _private: [u8; 0],
}

pub type clingo_literal_t = i32;
pub type clingo_atom_t = u32;
pub type clingo_id_t = u32;
pub type clingo_weight_t = i32;
pub type clingo_symbol_t = u64;
pub type clingo_signature_t = u64;
pub type clingo_symbolic_atom_iterator_t = u64;
pub type clingo_error_t = c_int;
pub type clingo_warning_t = c_int;
pub type clingo_truth_value_t = c_int;
pub type clingo_symbol_type_t = c_int;
pub type clingo_model_type_t = c_int;
pub type clingo_statistics_type_t = c_int;
pub type clingo_external_type_t = c_int;
pub type clingo_heuristic_type_t = c_int;
pub type clingo_clause_type_t = c_int;
pub type clingo_solve_event_type_t = c_uint;
pub type clingo_solve_mode_bitset_t = c_uint;
pub type clingo_solve_result_bitset_t = c_uint;
pub type clingo_show_type_bitset_t = c_uint;
pub type clingo_configuration_type_bitset_t = c_uint;

/// Source location attached to logger and ground callbacks
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct clingo_location_t {
    pub begin_file: *const c_char,
    pub end_file: *const c_char,
    pub begin_line: usize,
    pub end_line: usize,
    pub begin_column: usize,
    pub end_column: usize,
}

/// Program part passed to grounding
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct clingo_part_t {
    pub name: *const c_char,
    pub params: *const clingo_symbol_t,
    pub size: usize,
}

/// Literal with an attached weight, used by backend rules
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct clingo_weighted_literal_t {
    pub literal: clingo_literal_t,
    pub weight: clingo_weight_t,
}

pub type clingo_logger_t =
    Option<unsafe extern "C" fn(code: clingo_warning_t, message: *const c_char, data: *mut c_void)>;

pub type clingo_symbol_callback_t = Option<
    unsafe extern "C" fn(symbols: *const clingo_symbol_t, size: usize, data: *mut c_void) -> bool,
>;

pub type clingo_ground_callback_t = Option<
    unsafe extern "C" fn(
        location: *const clingo_location_t,
        name: *const c_char,
        arguments: *const clingo_symbol_t,
        arguments_size: usize,
        data: *mut c_void,
        symbol_callback: clingo_symbol_callback_t,
        symbol_callback_data: *mut c_void,
    ) -> bool,
>;

pub type clingo_solve_event_callback_t = Option<
    unsafe extern "C" fn(
        event_type: clingo_solve_event_type_t,
        event: *mut c_void,
        data: *mut c_void,
        goon: *mut bool,
    ) -> bool,
>;

/// Table of propagator entry points registered with the native library
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct clingo_propagator_t {
    pub init: Option<unsafe extern "C" fn(*mut clingo_propagate_init, *mut c_void) -> bool>,
    pub propagate: Option<
        unsafe extern "C" fn(
            *mut clingo_propagate_control,
            *const clingo_literal_t,
            usize,
            *mut c_void,
        ) -> bool,
    >,
    pub undo: Option<
        unsafe extern "C" fn(
            *const clingo_propagate_control,
            *const clingo_literal_t,
            usize,
            *mut c_void,
        ),
    >,
    pub check: Option<unsafe extern "C" fn(*mut clingo_propagate_control, *mut c_void) -> bool>,
    pub decide: Option<
        unsafe extern "C" fn(
            clingo_id_t,
            *const clingo_assignment,
            clingo_literal_t,
            *mut c_void,
            *mut clingo_literal_t,
        ) -> bool,
    >,
}

macro_rules! vtable {
    ($($(#[$attr:meta])* $field:ident = $sym:ident:
        fn($($arg:ty),* $(,)?) $(-> $ret:ty)?;)+) => {
        /// Binding table over the native library
        ///
        /// One function pointer per used C API entry point. Calls through the
        /// table are `unsafe`: the caller must uphold the native library's
        /// documented preconditions for the respective entry point.
        #[derive(Debug, Clone, Copy)]
        pub struct Vtable {
            $($(#[$attr])* pub $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?,)+
        }

        impl Vtable {
            /// Resolves every entry point from an already-loaded shared
            /// library
            ///
            /// # Errors
            ///
            /// Fails with the [`libloading`] error naming the first symbol
            /// that cannot be resolved.
            pub fn load(lib: &Library) -> Result<Self, libloading::Error> {
                unsafe {
                    Ok(Self {
                        $($field: *lib.get::<unsafe extern "C" fn($($arg),*) $(-> $ret)?>(
                            concat!(stringify!($sym), "\0").as_bytes(),
                        )?,)+
                    })
                }
            }
        }

        #[cfg(feature = "link")]
        extern "C" {
            $(fn $sym($(_: $arg),*) $(-> $ret)?;)+
        }

        #[cfg(feature = "link")]
        impl Vtable {
            /// Builds the table from the statically or dynamically linked
            /// `libclingo`
            #[must_use]
            pub fn linked() -> Self {
                Self { $($field: $sym,)+ }
            }
        }
    };
}

vtable! {
    version = clingo_version: fn(*mut c_int, *mut c_int, *mut c_int);
    error_code = clingo_error_code: fn() -> clingo_error_t;
    error_message = clingo_error_message: fn() -> *const c_char;
    set_error = clingo_set_error: fn(clingo_error_t, *const c_char);

    signature_create = clingo_signature_create:
        fn(*const c_char, u32, bool, *mut clingo_signature_t) -> bool;

    symbol_create_number = clingo_symbol_create_number: fn(c_int, *mut clingo_symbol_t);
    symbol_create_id = clingo_symbol_create_id:
        fn(*const c_char, bool, *mut clingo_symbol_t) -> bool;
    symbol_create_string = clingo_symbol_create_string:
        fn(*const c_char, *mut clingo_symbol_t) -> bool;
    symbol_create_function = clingo_symbol_create_function:
        fn(*const c_char, *const clingo_symbol_t, usize, bool, *mut clingo_symbol_t) -> bool;
    symbol_number = clingo_symbol_number: fn(clingo_symbol_t, *mut c_int) -> bool;
    symbol_name = clingo_symbol_name: fn(clingo_symbol_t, *mut *const c_char) -> bool;
    symbol_string = clingo_symbol_string: fn(clingo_symbol_t, *mut *const c_char) -> bool;
    symbol_is_positive = clingo_symbol_is_positive: fn(clingo_symbol_t, *mut bool) -> bool;
    symbol_arguments = clingo_symbol_arguments:
        fn(clingo_symbol_t, *mut *const clingo_symbol_t, *mut usize) -> bool;
    symbol_type = clingo_symbol_type: fn(clingo_symbol_t) -> clingo_symbol_type_t;
    symbol_to_string_size = clingo_symbol_to_string_size: fn(clingo_symbol_t, *mut usize) -> bool;
    symbol_to_string = clingo_symbol_to_string: fn(clingo_symbol_t, *mut c_char, usize) -> bool;
    symbol_is_equal_to = clingo_symbol_is_equal_to: fn(clingo_symbol_t, clingo_symbol_t) -> bool;
    parse_term = clingo_parse_term:
        fn(*const c_char, clingo_logger_t, *mut c_void, c_uint, *mut clingo_symbol_t) -> bool;

    control_new = clingo_control_new:
        fn(*const *const c_char, usize, clingo_logger_t, *mut c_void, c_uint,
            *mut *mut clingo_control) -> bool;
    control_free = clingo_control_free: fn(*mut clingo_control);
    control_add = clingo_control_add:
        fn(*mut clingo_control, *const c_char, *const *const c_char, usize, *const c_char) -> bool;
    control_ground = clingo_control_ground:
        fn(*mut clingo_control, *const clingo_part_t, usize, clingo_ground_callback_t,
            *mut c_void) -> bool;
    control_solve = clingo_control_solve:
        fn(*mut clingo_control, clingo_solve_mode_bitset_t, *const clingo_literal_t, usize,
            clingo_solve_event_callback_t, *mut c_void, *mut *mut clingo_solve_handle) -> bool;
    control_is_conflicting = clingo_control_is_conflicting: fn(*const clingo_control) -> bool;
    control_interrupt = clingo_control_interrupt: fn(*mut clingo_control);
    control_symbolic_atoms = clingo_control_symbolic_atoms:
        fn(*const clingo_control, *mut *const clingo_symbolic_atoms) -> bool;
    control_backend = clingo_control_backend:
        fn(*mut clingo_control, *mut *mut clingo_backend) -> bool;
    control_configuration = clingo_control_configuration:
        fn(*mut clingo_control, *mut *mut clingo_configuration) -> bool;
    control_statistics = clingo_control_statistics:
        fn(*const clingo_control, *mut *const clingo_statistics) -> bool;
    control_register_propagator = clingo_control_register_propagator:
        fn(*mut clingo_control, *const clingo_propagator_t, *mut c_void, bool) -> bool;

    solve_handle_get = clingo_solve_handle_get:
        fn(*mut clingo_solve_handle, *mut clingo_solve_result_bitset_t) -> bool;
    solve_handle_wait = clingo_solve_handle_wait: fn(*mut clingo_solve_handle, f64, *mut bool);
    solve_handle_model = clingo_solve_handle_model:
        fn(*mut clingo_solve_handle, *mut *const clingo_model) -> bool;
    solve_handle_resume = clingo_solve_handle_resume: fn(*mut clingo_solve_handle) -> bool;
    solve_handle_cancel = clingo_solve_handle_cancel: fn(*mut clingo_solve_handle) -> bool;
    solve_handle_close = clingo_solve_handle_close: fn(*mut clingo_solve_handle) -> bool;

    model_type = clingo_model_type: fn(*const clingo_model, *mut clingo_model_type_t) -> bool;
    model_number = clingo_model_number: fn(*const clingo_model, *mut u64) -> bool;
    model_symbols_size = clingo_model_symbols_size:
        fn(*const clingo_model, clingo_show_type_bitset_t, *mut usize) -> bool;
    model_symbols = clingo_model_symbols:
        fn(*const clingo_model, clingo_show_type_bitset_t, *mut clingo_symbol_t, usize) -> bool;
    model_contains = clingo_model_contains: fn(*const clingo_model, clingo_symbol_t, *mut bool) -> bool;
    model_is_true = clingo_model_is_true:
        fn(*const clingo_model, clingo_literal_t, *mut bool) -> bool;
    model_cost_size = clingo_model_cost_size: fn(*const clingo_model, *mut usize) -> bool;
    model_cost = clingo_model_cost: fn(*const clingo_model, *mut i64, usize) -> bool;
    model_optimality_proven = clingo_model_optimality_proven:
        fn(*const clingo_model, *mut bool) -> bool;

    backend_begin = clingo_backend_begin: fn(*mut clingo_backend) -> bool;
    backend_end = clingo_backend_end: fn(*mut clingo_backend) -> bool;
    backend_rule = clingo_backend_rule:
        fn(*mut clingo_backend, bool, *const clingo_atom_t, usize, *const clingo_literal_t,
            usize) -> bool;
    backend_weight_rule = clingo_backend_weight_rule:
        fn(*mut clingo_backend, bool, *const clingo_atom_t, usize, clingo_weight_t,
            *const clingo_weighted_literal_t, usize) -> bool;
    backend_minimize = clingo_backend_minimize:
        fn(*mut clingo_backend, clingo_weight_t, *const clingo_weighted_literal_t, usize) -> bool;
    backend_project = clingo_backend_project:
        fn(*mut clingo_backend, *const clingo_atom_t, usize) -> bool;
    backend_external = clingo_backend_external:
        fn(*mut clingo_backend, clingo_atom_t, clingo_external_type_t) -> bool;
    backend_assume = clingo_backend_assume:
        fn(*mut clingo_backend, *const clingo_literal_t, usize) -> bool;
    backend_heuristic = clingo_backend_heuristic:
        fn(*mut clingo_backend, clingo_atom_t, clingo_heuristic_type_t, c_int, c_uint,
            *const clingo_literal_t, usize) -> bool;
    backend_acyc_edge = clingo_backend_acyc_edge:
        fn(*mut clingo_backend, c_int, c_int, *const clingo_literal_t, usize) -> bool;
    backend_add_atom = clingo_backend_add_atom:
        fn(*mut clingo_backend, *mut clingo_symbol_t, *mut clingo_atom_t) -> bool;

    configuration_root = clingo_configuration_root:
        fn(*mut clingo_configuration, *mut clingo_id_t) -> bool;
    configuration_type = clingo_configuration_type:
        fn(*mut clingo_configuration, clingo_id_t, *mut clingo_configuration_type_bitset_t) -> bool;
    configuration_array_size = clingo_configuration_array_size:
        fn(*mut clingo_configuration, clingo_id_t, *mut usize) -> bool;
    configuration_array_at = clingo_configuration_array_at:
        fn(*mut clingo_configuration, clingo_id_t, usize, *mut clingo_id_t) -> bool;
    configuration_map_size = clingo_configuration_map_size:
        fn(*mut clingo_configuration, clingo_id_t, *mut usize) -> bool;
    configuration_map_subkey_name = clingo_configuration_map_subkey_name:
        fn(*mut clingo_configuration, clingo_id_t, usize, *mut *const c_char) -> bool;
    configuration_map_at = clingo_configuration_map_at:
        fn(*mut clingo_configuration, clingo_id_t, *const c_char, *mut clingo_id_t) -> bool;
    configuration_value_get_size = clingo_configuration_value_get_size:
        fn(*mut clingo_configuration, clingo_id_t, *mut usize) -> bool;
    configuration_value_get = clingo_configuration_value_get:
        fn(*mut clingo_configuration, clingo_id_t, *mut c_char, usize) -> bool;
    configuration_value_set = clingo_configuration_value_set:
        fn(*mut clingo_configuration, clingo_id_t, *const c_char) -> bool;

    statistics_root = clingo_statistics_root: fn(*const clingo_statistics, *mut u64) -> bool;
    statistics_type = clingo_statistics_type:
        fn(*const clingo_statistics, u64, *mut clingo_statistics_type_t) -> bool;
    statistics_value_get = clingo_statistics_value_get:
        fn(*const clingo_statistics, u64, *mut f64) -> bool;
    statistics_array_size = clingo_statistics_array_size:
        fn(*const clingo_statistics, u64, *mut usize) -> bool;
    statistics_array_at = clingo_statistics_array_at:
        fn(*const clingo_statistics, u64, usize, *mut u64) -> bool;
    statistics_map_size = clingo_statistics_map_size:
        fn(*const clingo_statistics, u64, *mut usize) -> bool;
    statistics_map_subkey_name = clingo_statistics_map_subkey_name:
        fn(*const clingo_statistics, u64, usize, *mut *const c_char) -> bool;
    statistics_map_at = clingo_statistics_map_at:
        fn(*const clingo_statistics, u64, *const c_char, *mut u64) -> bool;

    symbolic_atoms_size = clingo_symbolic_atoms_size:
        fn(*const clingo_symbolic_atoms, *mut usize) -> bool;
    symbolic_atoms_begin = clingo_symbolic_atoms_begin:
        fn(*const clingo_symbolic_atoms, *const clingo_signature_t,
            *mut clingo_symbolic_atom_iterator_t) -> bool;
    symbolic_atoms_end = clingo_symbolic_atoms_end:
        fn(*const clingo_symbolic_atoms, *mut clingo_symbolic_atom_iterator_t) -> bool;
    symbolic_atoms_next = clingo_symbolic_atoms_next:
        fn(*const clingo_symbolic_atoms, clingo_symbolic_atom_iterator_t,
            *mut clingo_symbolic_atom_iterator_t) -> bool;
    symbolic_atoms_is_valid = clingo_symbolic_atoms_is_valid:
        fn(*const clingo_symbolic_atoms, clingo_symbolic_atom_iterator_t, *mut bool) -> bool;
    symbolic_atoms_iterator_is_equal_to = clingo_symbolic_atoms_iterator_is_equal_to:
        fn(*const clingo_symbolic_atoms, clingo_symbolic_atom_iterator_t,
            clingo_symbolic_atom_iterator_t, *mut bool) -> bool;
    symbolic_atoms_symbol = clingo_symbolic_atoms_symbol:
        fn(*const clingo_symbolic_atoms, clingo_symbolic_atom_iterator_t,
            *mut clingo_symbol_t) -> bool;
    symbolic_atoms_is_fact = clingo_symbolic_atoms_is_fact:
        fn(*const clingo_symbolic_atoms, clingo_symbolic_atom_iterator_t, *mut bool) -> bool;
    symbolic_atoms_literal = clingo_symbolic_atoms_literal:
        fn(*const clingo_symbolic_atoms, clingo_symbolic_atom_iterator_t,
            *mut clingo_literal_t) -> bool;

    propagate_init_solver_literal = clingo_propagate_init_solver_literal:
        fn(*const clingo_propagate_init, clingo_literal_t, *mut clingo_literal_t) -> bool;
    propagate_init_add_watch = clingo_propagate_init_add_watch:
        fn(*mut clingo_propagate_init, clingo_literal_t) -> bool;
    propagate_init_add_clause = clingo_propagate_init_add_clause:
        fn(*mut clingo_propagate_init, *const clingo_literal_t, usize, *mut bool) -> bool;
    propagate_init_number_of_threads = clingo_propagate_init_number_of_threads:
        fn(*const clingo_propagate_init) -> c_int;

    propagate_control_thread_id = clingo_propagate_control_thread_id:
        fn(*const clingo_propagate_control) -> clingo_id_t;
    propagate_control_assignment = clingo_propagate_control_assignment:
        fn(*const clingo_propagate_control) -> *const clingo_assignment;
    propagate_control_add_clause = clingo_propagate_control_add_clause:
        fn(*mut clingo_propagate_control, *const clingo_literal_t, usize, clingo_clause_type_t,
            *mut bool) -> bool;
    propagate_control_propagate = clingo_propagate_control_propagate:
        fn(*mut clingo_propagate_control, *mut bool) -> bool;

    assignment_decision_level = clingo_assignment_decision_level:
        fn(*const clingo_assignment) -> u32;
    assignment_has_conflict = clingo_assignment_has_conflict:
        fn(*const clingo_assignment) -> bool;
    assignment_truth_value = clingo_assignment_truth_value:
        fn(*const clingo_assignment, clingo_literal_t, *mut clingo_truth_value_t) -> bool;
}
