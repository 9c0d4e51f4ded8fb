// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod indexes;
mod object_entry;

pub(crate) use object_entry::{ObjectEntry, ObjectEntryPropertyDescriptor};

use crate::ecmascript::{
    builtins::{
        control_abstraction_objects::promise_objects::promise_abstract_operations::promise_resolving_functions::PromiseResolvingFunctionHeapData,
        error::ErrorHeapData,
        promise::data::PromiseHeapData,
        promisified_function::PromisifiedFunctionHeapData,
        promisified_getter::PromisifiedGetterHeapData,
    },
    execution::Realm,
    types::{
        BuiltinFunctionHeapData, HeapNumber, HeapString, Number, NumberHeapData, ObjectHeapData,
        String, StringHeapData, SymbolHeapData,
    },
};
use indexes::{NumberIndex, StringIndex};

#[derive(Debug)]
pub struct Heap {
    pub(crate) builtin_functions: Vec<Option<BuiltinFunctionHeapData>>,
    pub(crate) errors: Vec<Option<ErrorHeapData>>,
    pub(crate) numbers: Vec<Option<NumberHeapData>>,
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) promise_resolving_functions: Vec<Option<PromiseResolvingFunctionHeapData>>,
    pub(crate) promises: Vec<Option<PromiseHeapData>>,
    pub(crate) promisified_functions: Vec<Option<PromisifiedFunctionHeapData>>,
    pub(crate) promisified_getters: Vec<Option<PromisifiedGetterHeapData>>,
    pub(crate) realms: Vec<Option<Realm>>,
    pub(crate) strings: Vec<Option<StringHeapData>>,
    pub(crate) symbols: Vec<Option<SymbolHeapData>>,
}

/// Creates a [`Value`] from the given data. Allocating the data is **not**
/// guaranteed: if an equal value already exists on the heap, it may be
/// reused instead.
///
/// [`Value`]: crate::ecmascript::types::Value
pub trait CreateHeapData<T, F> {
    fn create(&mut self, data: T) -> F;
}

impl Heap {
    pub fn new() -> Heap {
        Heap {
            builtin_functions: Vec::with_capacity(64),
            errors: Vec::with_capacity(8),
            numbers: Vec::with_capacity(64),
            objects: Vec::with_capacity(256),
            promise_resolving_functions: Vec::with_capacity(16),
            promises: Vec::with_capacity(16),
            promisified_functions: Vec::with_capacity(16),
            promisified_getters: Vec::with_capacity(8),
            realms: Vec::with_capacity(1),
            strings: Vec::with_capacity(256),
            symbols: Vec::with_capacity(8),
        }
    }

    /// Allocate a string onto the heap, reusing an existing allocation if the
    /// same string content is already present. Heap strings are thus interned
    /// and handle equality implies content equality.
    pub(crate) fn alloc_string(&mut self, message: &str) -> StringIndex {
        debug_assert!(message.len() > 7 || message.ends_with('\0'));
        let found = self.strings.iter().position(|opt| {
            opt.as_ref()
                .is_some_and(|data| data.as_str() == message)
        });
        if let Some(idx) = found {
            return StringIndex::from_index(idx);
        }
        self.strings.push(Some(StringHeapData::from_str(message)));
        StringIndex::last(&self.strings)
    }

    /// Allocate a static string onto the heap.
    ///
    /// # Safety
    ///
    /// The string must not be representable as a SmallString. All
    /// SmallString data must live on the stack to keep the string heap
    /// intern guarantee intact.
    pub(crate) unsafe fn alloc_static_str(&mut self, message: &'static str) -> StringIndex {
        debug_assert!(message.len() > 7 || message.ends_with('\0'));
        let found = self.strings.iter().position(|opt| {
            opt.as_ref()
                .is_some_and(|data| data.as_str() == message)
        });
        if let Some(idx) = found {
            return StringIndex::from_index(idx);
        }
        self.strings
            .push(Some(StringHeapData::from_static_str(message)));
        StringIndex::last(&self.strings)
    }

    pub(crate) fn alloc_number(&mut self, number: f64) -> NumberIndex {
        self.numbers.push(Some(NumberHeapData::new(number)));
        NumberIndex::last(&self.numbers)
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateHeapData<f64, Number> for Heap {
    fn create(&mut self, data: f64) -> Number {
        // NOTE: This function cannot currently be implemented
        // directly using `Number::from_f64` as it takes an Agent
        // parameter that we do not have access to here.
        if let Ok(value) = Number::try_from(data) {
            value
        } else {
            Number::Number(HeapNumber(self.alloc_number(data)))
        }
    }
}

impl CreateHeapData<&str, String> for Heap {
    fn create(&mut self, data: &str) -> String {
        if let Ok(value) = String::try_from(data) {
            value
        } else {
            String::String(HeapString(self.alloc_string(data)))
        }
    }
}

impl CreateHeapData<std::string::String, String> for Heap {
    fn create(&mut self, data: std::string::String) -> String {
        self.create(data.as_str())
    }
}
