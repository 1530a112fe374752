//! # Symbols
//!
//! A [`Symbol`] is a copyable numeric token referring to a value interned by
//! the native library (numbers, strings, identifiers, functions). All
//! inspection goes back through the [`Clingo`](crate::Clingo) binding table;
//! symbols are never freed individually.

use core::ffi::{c_int, CStr};
use std::ffi::CString;

use anyhow::Context;

use crate::error::InvalidApiReturn;
use crate::{ffi, Clingo};

/// A value interned by the native library
///
/// Symbols are plain tokens: cheap to copy, valid for the lifetime of the
/// process, compared through [`Clingo::symbols_equal`] rather than bitwise.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Symbol(pub(crate) ffi::clingo_symbol_t);

impl Symbol {
    /// The raw native representation
    #[must_use]
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Creates a symbol from its raw native representation
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Symbol(raw)
    }
}

/// The kind of value a symbol holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    /// The `#inf` term
    Infimum,
    /// A number
    Number,
    /// A quoted string
    String,
    /// A function term; identifiers are functions without arguments
    Function,
    /// The `#sup` term
    Supremum,
}

impl SymbolType {
    fn from_raw(raw: ffi::clingo_symbol_type_t) -> Result<Self, InvalidApiReturn> {
        match raw {
            0 => Ok(SymbolType::Infimum),
            1 => Ok(SymbolType::Number),
            4 => Ok(SymbolType::String),
            5 => Ok(SymbolType::Function),
            7 => Ok(SymbolType::Supremum),
            value => Err(InvalidApiReturn {
                api_call: "clingo_symbol_type",
                value,
            }),
        }
    }
}

impl Clingo {
    /// Creates a number symbol
    #[must_use]
    pub fn number(&self, number: i32) -> Symbol {
        let mut sym: ffi::clingo_symbol_t = 0;
        unsafe { (self.vtable().symbol_create_number)(number, &mut sym) };
        Symbol(sym)
    }

    /// Creates an identifier symbol, i.e. a function without arguments
    ///
    /// # Errors
    ///
    /// If the native library fails to intern the name, or the name contains a
    /// NUL byte.
    pub fn id(&self, name: &str, positive: bool) -> anyhow::Result<Symbol> {
        let name = CString::new(name)?;
        let mut sym: ffi::clingo_symbol_t = 0;
        self.check(unsafe { (self.vtable().symbol_create_id)(name.as_ptr(), positive, &mut sym) })?;
        Ok(Symbol(sym))
    }

    /// Creates a string symbol
    ///
    /// # Errors
    ///
    /// If the native library fails to intern the string, or the string
    /// contains a NUL byte.
    pub fn string(&self, string: &str) -> anyhow::Result<Symbol> {
        let string = CString::new(string)?;
        let mut sym: ffi::clingo_symbol_t = 0;
        self.check(unsafe { (self.vtable().symbol_create_string)(string.as_ptr(), &mut sym) })?;
        Ok(Symbol(sym))
    }

    /// Creates a function symbol from a name and argument symbols
    ///
    /// # Errors
    ///
    /// If the native library fails to intern the function, or the name
    /// contains a NUL byte.
    pub fn function(&self, name: &str, arguments: &[Symbol], positive: bool) -> anyhow::Result<Symbol> {
        let name = CString::new(name)?;
        let mut sym: ffi::clingo_symbol_t = 0;
        self.check(unsafe {
            (self.vtable().symbol_create_function)(
                name.as_ptr(),
                arguments.as_ptr().cast::<ffi::clingo_symbol_t>(),
                arguments.len(),
                positive,
                &mut sym,
            )
        })?;
        Ok(Symbol(sym))
    }

    /// Parses a term in gringo syntax into a symbol
    ///
    /// # Errors
    ///
    /// Fails with a runtime error on malformed term text.
    pub fn parse_term(&self, text: &str) -> anyhow::Result<Symbol> {
        let text = CString::new(text)?;
        let mut sym: ffi::clingo_symbol_t = 0;
        self.check(unsafe {
            (self.vtable().parse_term)(text.as_ptr(), None, std::ptr::null_mut(), 0, &mut sym)
        })
        .with_context(|| "parsing term failed")?;
        Ok(Symbol(sym))
    }

    /// The number held by a number symbol
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the symbol is not a number.
    pub fn symbol_number(&self, symbol: Symbol) -> anyhow::Result<i32> {
        let mut number: c_int = 0;
        self.check(unsafe { (self.vtable().symbol_number)(symbol.0, &mut number) })?;
        Ok(number)
    }

    /// The name of a function symbol
    ///
    /// The returned string is interned by the native library for the lifetime
    /// of the process.
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the symbol is not a function, or if the
    /// name is not valid UTF-8.
    pub fn symbol_name(&self, symbol: Symbol) -> anyhow::Result<&'static str> {
        let mut name: *const core::ffi::c_char = std::ptr::null();
        self.check(unsafe { (self.vtable().symbol_name)(symbol.0, &mut name) })?;
        Ok(unsafe { CStr::from_ptr(name) }
            .to_str()
            .context("symbol name is not valid UTF-8")?)
    }

    /// The value of a string symbol
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the symbol is not a string, or if the
    /// value is not valid UTF-8.
    pub fn symbol_string(&self, symbol: Symbol) -> anyhow::Result<&'static str> {
        let mut string: *const core::ffi::c_char = std::ptr::null();
        self.check(unsafe { (self.vtable().symbol_string)(symbol.0, &mut string) })?;
        Ok(unsafe { CStr::from_ptr(string) }
            .to_str()
            .context("symbol string is not valid UTF-8")?)
    }

    /// True if a function symbol has no classical negation sign
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the symbol is not a function.
    pub fn symbol_is_positive(&self, symbol: Symbol) -> anyhow::Result<bool> {
        let mut positive = false;
        self.check(unsafe { (self.vtable().symbol_is_positive)(symbol.0, &mut positive) })?;
        Ok(positive)
    }

    /// The arguments of a function symbol
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the symbol is not a function.
    pub fn symbol_arguments(&self, symbol: Symbol) -> anyhow::Result<Vec<Symbol>> {
        let mut args: *const ffi::clingo_symbol_t = std::ptr::null();
        let mut size: usize = 0;
        self.check(unsafe { (self.vtable().symbol_arguments)(symbol.0, &mut args, &mut size) })?;
        if size == 0 {
            return Ok(Vec::new());
        }
        Ok(unsafe { std::slice::from_raw_parts(args, size) }
            .iter()
            .map(|&sym| Symbol(sym))
            .collect())
    }

    /// The kind of value a symbol holds
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiReturn`] if the native library reports an unknown
    /// type. This case can be considered a bug in the native library or this
    /// crate.
    pub fn symbol_type(&self, symbol: Symbol) -> anyhow::Result<SymbolType> {
        Ok(SymbolType::from_raw(unsafe {
            (self.vtable().symbol_type)(symbol.0)
        })?)
    }

    /// Renders a symbol in gringo term syntax
    ///
    /// Uses the native size-query/fetch idiom; the symbol cannot change
    /// between the two calls since symbols are immutable once interned.
    ///
    /// # Errors
    ///
    /// Fails if the native library cannot render the symbol, or the rendering
    /// is not valid UTF-8.
    pub fn symbol_to_string(&self, symbol: Symbol) -> anyhow::Result<String> {
        let vt = self.vtable();
        let mut size: usize = 0;
        self.check(unsafe { (vt.symbol_to_string_size)(symbol.0, &mut size) })?;
        let mut buf: Vec<u8> = vec![0; size];
        self.check(unsafe { (vt.symbol_to_string)(symbol.0, buf.as_mut_ptr().cast(), size) })?;
        // the reported size includes the NUL terminator
        while buf.last() == Some(&0) {
            buf.pop();
        }
        Ok(String::from_utf8(buf).context("symbol rendering is not valid UTF-8")?)
    }

    /// Compares two symbols for equality
    ///
    /// Symbols are tokens into native interning tables; bitwise comparison of
    /// the tokens is not specified to agree with term equality.
    #[must_use]
    pub fn symbols_equal(&self, a: Symbol, b: Symbol) -> bool {
        unsafe { (self.vtable().symbol_is_equal_to)(a.0, b.0) }
    }
}
