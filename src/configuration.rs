//! # Configuration Tree
//!
//! Mutable view of the native solver configuration, navigated by key. Keys
//! report a type bitset; a key can be both a map and hold a value (e.g.
//! option groups with a default). Using an accessor family the key does not
//! support fails with a runtime error from the native library.

use core::ffi::CStr;
use std::ffi::CString;

use anyhow::Context;

use crate::{ffi, Clingo};

/// Key of an entry in the configuration tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationKey(ffi::clingo_id_t);

/// Type bitset of a configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationType {
    bits: ffi::clingo_configuration_type_bitset_t,
}

impl ConfigurationType {
    /// True if the entry holds a string value
    #[must_use]
    pub fn is_value(self) -> bool {
        self.bits & 1 != 0
    }

    /// True if the entry is an array
    #[must_use]
    pub fn is_array(self) -> bool {
        self.bits & 2 != 0
    }

    /// True if the entry is a string-keyed map
    #[must_use]
    pub fn is_map(self) -> bool {
        self.bits & 4 != 0
    }
}

/// Borrowed view of the configuration tree of a control object
#[derive(Debug)]
pub struct Configuration<'a> {
    lib: &'a Clingo,
    conf: *mut ffi::clingo_configuration,
}

impl<'a> Configuration<'a> {
    pub(crate) fn new(lib: &'a Clingo, conf: *mut ffi::clingo_configuration) -> Self {
        Configuration { lib, conf }
    }

    /// The key of the root entry
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn root(&self) -> anyhow::Result<ConfigurationKey> {
        let mut key: ffi::clingo_id_t = 0;
        self.lib
            .check(unsafe { (self.lib.vtable().configuration_root)(self.conf, &mut key) })?;
        Ok(ConfigurationKey(key))
    }

    /// The type bitset of the entry at `key`
    ///
    /// # Errors
    ///
    /// Fails if the native library rejects the call.
    pub fn entry_type(&self, key: ConfigurationKey) -> anyhow::Result<ConfigurationType> {
        let mut bits: ffi::clingo_configuration_type_bitset_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_type)(self.conf, key.0, &mut bits)
        })?;
        Ok(ConfigurationType { bits })
    }

    /// The number of entries of an array-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not array-typed.
    pub fn array_size(&self, key: ConfigurationKey) -> anyhow::Result<usize> {
        let mut size: usize = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_array_size)(self.conf, key.0, &mut size)
        })?;
        Ok(size)
    }

    /// The subkey at `offset` of an array-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not array-typed or the
    /// offset is out of range.
    pub fn array_at(
        &self,
        key: ConfigurationKey,
        offset: usize,
    ) -> anyhow::Result<ConfigurationKey> {
        let mut sub: ffi::clingo_id_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_array_at)(self.conf, key.0, offset, &mut sub)
        })?;
        Ok(ConfigurationKey(sub))
    }

    /// The number of entries of a map-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not map-typed.
    pub fn map_size(&self, key: ConfigurationKey) -> anyhow::Result<usize> {
        let mut size: usize = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_map_size)(self.conf, key.0, &mut size)
        })?;
        Ok(size)
    }

    /// The name of the subkey at `offset` of a map-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not map-typed or the offset
    /// is out of range.
    pub fn map_subkey_name(
        &self,
        key: ConfigurationKey,
        offset: usize,
    ) -> anyhow::Result<String> {
        let mut name: *const core::ffi::c_char = std::ptr::null();
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_map_subkey_name)(self.conf, key.0, offset, &mut name)
        })?;
        Ok(unsafe { CStr::from_ptr(name) }
            .to_str()
            .context("configuration key is not valid UTF-8")?
            .to_owned())
    }

    /// Looks up the subkey with the given name in a map-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not map-typed or has no
    /// subkey of that name.
    pub fn map_at(&self, key: ConfigurationKey, name: &str) -> anyhow::Result<ConfigurationKey> {
        let name = CString::new(name)?;
        let mut sub: ffi::clingo_id_t = 0;
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_map_at)(self.conf, key.0, name.as_ptr(), &mut sub)
        })?;
        Ok(ConfigurationKey(sub))
    }

    /// The string value of a value-typed entry
    ///
    /// Uses the native size-query/fetch idiom; the tree cannot change between
    /// the two calls because this view holds the only access to it.
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not value-typed.
    pub fn value(&self, key: ConfigurationKey) -> anyhow::Result<String> {
        let vt = self.lib.vtable();
        let mut size: usize = 0;
        self.lib
            .check(unsafe { (vt.configuration_value_get_size)(self.conf, key.0, &mut size) })?;
        let mut buf: Vec<u8> = vec![0; size];
        self.lib.check(unsafe {
            (vt.configuration_value_get)(self.conf, key.0, buf.as_mut_ptr().cast(), size)
        })?;
        // the reported size includes the NUL terminator
        while buf.last() == Some(&0) {
            buf.pop();
        }
        Ok(String::from_utf8(buf).context("configuration value is not valid UTF-8")?)
    }

    /// Sets the value of a value-typed entry
    ///
    /// # Errors
    ///
    /// Fails with a runtime error if the entry is not value-typed or the
    /// value is not accepted.
    pub fn set_value(&mut self, key: ConfigurationKey, value: &str) -> anyhow::Result<()> {
        let value = CString::new(value)?;
        self.lib.check(unsafe {
            (self.lib.vtable().configuration_value_set)(self.conf, key.0, value.as_ptr())
        })?;
        Ok(())
    }
}
