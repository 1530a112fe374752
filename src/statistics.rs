//! # Statistics Tree
//!
//! Read-only view of the native statistics tree, navigated by key. Each key
//! reports a type, and only the accessors matching that type are valid; using
//! the wrong family fails with a runtime error from the native library.

use core::ffi::CStr;

use anyhow::Context;

use crate::error::InvalidApiReturn;
use crate::{ffi, Clingo};

/// Key of an entry in the statistics tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsKey(u64);

/// The type of a statistics entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsType {
    /// The entry is not yet populated
    Empty,
    /// A floating point value
    Value,
    /// An array of subentries
    Array,
    /// A string-keyed map of subentries
    Map,
}

impl StatisticsType {
    fn from_raw(raw: ffi::clingo_statistics_type_t) -> Result<Self, InvalidApiReturn> {
        match raw {
            0 => Ok(StatisticsType::Empty),
            1 => Ok(StatisticsType::Value),
            2 => Ok(StatisticsType::Array),
            3 => Ok(StatisticsType::Map),
            value => Err(InvalidApiReturn {
                api_call: "clingo_statistics_type",
                value,
            }),
        }
    }
}

/// Borrowed view of the statistics tree of a control object
///
/// Valid until the next solve call updates the tree; the borrow on the
/// control enforces this window.
#[derive(Debug)]
pub struct Statistics<'a> {
    lib: &'a Clingo,
    stats: *const ffi::clingo_statistics,
}

impl<'a> Statistics<'a> {
    pub(crate) fn new(lib: &'a Clingo, stats: *const ffi::clingo_statistics) -> Self {
        Statistics { lib, stats }
    }

    /// The key of the root entry
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn root(&self) -> anyhow::Result<StatisticsKey> {
        let mut key: u64 = 0;
        self.lib
            .check(unsafe { (self.lib.vtable().statistics_root)(self.stats, &mut key) })?;
        Ok(StatisticsKey(key))
    }

    /// The type of the entry at `key`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiReturn`] on an unknown type tag.
    pub fn entry_type(&self, key: StatisticsKey) -> anyhow::Result<StatisticsType> {
        let mut raw: ffi::clingo_statistics_type_t = 0;
        self.lib
            .check(unsafe { (self.lib.vtable().statistics_type)(self.stats, key.0, &mut raw) })?;
        Ok(StatisticsType::from_raw(raw)?)
    }

    /// The value of a value-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not value-typed.
    pub fn value(&self, key: StatisticsKey) -> anyhow::Result<f64> {
        let mut value = 0.0;
        self.lib.check(unsafe {
            (self.lib.vtable().statistics_value_get)(self.stats, key.0, &mut value)
        })?;
        Ok(value)
    }

    /// The number of entries of an array-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not array-typed.
    pub fn array_size(&self, key: StatisticsKey) -> anyhow::Result<usize> {
        let mut size: usize = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().statistics_array_size)(self.stats, key.0, &mut size)
        })?;
        Ok(size)
    }

    /// The subkey at `offset` of an array-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not array-typed or the
    /// offset is out of range.
    pub fn array_at(&self, key: StatisticsKey, offset: usize) -> anyhow::Result<StatisticsKey> {
        let mut sub: u64 = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().statistics_array_at)(self.stats, key.0, offset, &mut sub)
        })?;
        Ok(StatisticsKey(sub))
    }

    /// The number of entries of a map-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not map-typed.
    pub fn map_size(&self, key: StatisticsKey) -> anyhow::Result<usize> {
        let mut size: usize = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().statistics_map_size)(self.stats, key.0, &mut size)
        })?;
        Ok(size)
    }

    /// The name of the subkey at `offset` of a map-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not map-typed or the offset
    /// is out of range.
    pub fn map_subkey_name(&self, key: StatisticsKey, offset: usize) -> anyhow::Result<String> {
        let mut name: *const core::ffi::c_char = std::ptr::null();
        self.lib.check(unsafe {
            (self.lib.vtable().statistics_map_subkey_name)(self.stats, key.0, offset, &mut name)
        })?;
        Ok(unsafe { CStr::from_ptr(name) }
            .to_str()
            .context("statistics key is not valid UTF-8")?
            .to_owned())
    }

    /// Looks up the subkey with the given name in a map-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not map-typed or has no
    /// subkey of that name.
    pub fn map_at(&self, key: StatisticsKey, name: &str) -> anyhow::Result<StatisticsKey> {
        let name = std::ffi::CString::new(name)?;
        let mut sub: u64 = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().statistics_map_at)(self.stats, key.0, name.as_ptr(), &mut sub)
        })?;
        Ok(StatisticsKey(sub))
    }
}
