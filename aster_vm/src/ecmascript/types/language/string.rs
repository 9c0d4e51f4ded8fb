// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;

use std::ops::{Index, IndexMut};

use super::{PropertyKey, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, indexes::StringIndex},
};
use small_string::SmallString;

pub use data::StringHeapData;

/// A handle to a string stored in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HeapString(pub(crate) StringIndex);

impl HeapString {
    pub(crate) const fn _def() -> Self {
        HeapString(StringIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn len(self, agent: &Agent) -> usize {
        agent[self].len()
    }

    pub fn as_str(self, agent: &Agent) -> &str {
        agent[self].as_str()
    }
}

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum String {
    String(HeapString),
    SmallString(SmallString),
}

impl From<HeapString> for String {
    fn from(value: HeapString) -> Self {
        String::String(value)
    }
}

impl From<HeapString> for Value {
    fn from(value: HeapString) -> Self {
        Value::String(value)
    }
}

impl TryFrom<&str> for String {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SmallString::try_from(value).map(String::SmallString)
    }
}

impl TryFrom<Value> for String {
    type Error = ();
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(x) => Ok(String::String(x)),
            Value::SmallString(x) => Ok(String::SmallString(x)),
            _ => Err(()),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        match value {
            String::String(x) => Value::String(x),
            String::SmallString(x) => Value::SmallString(x),
        }
    }
}

impl From<SmallString> for Value {
    fn from(value: SmallString) -> Self {
        Value::SmallString(value)
    }
}

impl From<SmallString> for String {
    fn from(value: SmallString) -> Self {
        Self::SmallString(value)
    }
}

impl String {
    pub const EMPTY_STRING: String = String::from_small_string("");

    pub fn is_empty_string(self) -> bool {
        self == Self::EMPTY_STRING
    }

    pub fn from_str(agent: &mut Agent, str: &str) -> String {
        agent.heap.create(str)
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> String {
        agent.heap.create(string)
    }

    pub const fn to_property_key(self) -> PropertyKey {
        match self {
            String::String(data) => PropertyKey::String(data),
            String::SmallString(data) => PropertyKey::SmallString(data),
        }
    }

    pub fn from_static_str(agent: &mut Agent, str: &'static str) -> Self {
        if let Ok(value) = String::try_from(str) {
            value
        } else {
            // SAFETY: String couldn't be represented as a SmallString.
            String::String(HeapString(unsafe { agent.heap.alloc_static_str(str) }))
        }
    }

    pub const fn from_small_string(message: &'static str) -> String {
        assert!(
            message.len() < 8
                && (message.is_empty() || message.as_bytes()[message.as_bytes().len() - 1] != 0)
        );
        String::SmallString(SmallString::from_str_unchecked(message))
    }

    pub fn concat(agent: &mut Agent, strings: impl AsRef<[String]>) -> String {
        // We use this status enum so we can reuse one of the heap string
        // inputs if the output would be identical, and so we don't allocate
        // at all until it's clear we need a new heap string.
        enum Status {
            Empty,
            ExistingString(HeapString),
            SmallString { data: [u8; 7], len: usize },
            String(std::string::String),
        }
        let mut status = Status::Empty;

        for string in strings.as_ref() {
            if string.is_empty_string() {
                continue;
            }

            match &mut status {
                Status::Empty => {
                    status = match string {
                        String::SmallString(smstr) => Status::SmallString {
                            data: *smstr.data(),
                            len: smstr.len(),
                        },
                        String::String(idx) => Status::ExistingString(*idx),
                    };
                }
                Status::ExistingString(idx) => {
                    let mut result =
                        std::string::String::with_capacity(agent[*idx].len() + string.len(agent));
                    result.push_str(agent[*idx].as_str());
                    result.push_str(string.as_str(agent));
                    status = Status::String(result)
                }
                Status::SmallString { data, len } => {
                    let string_len = string.len(agent);
                    if *len + string_len <= 7 {
                        let String::SmallString(smstr) = string else {
                            // TODO: This is reachable if `string` ends with a
                            // null byte.
                            todo!()
                        };
                        data[*len..(*len + string_len)]
                            .copy_from_slice(&smstr.data()[..string_len]);
                        *len += string_len;
                    } else {
                        let mut result = std::string::String::with_capacity(*len + string_len);
                        // SAFETY: SmallStrings are guaranteed UTF-8, and
                        // `&data[..len]` is the result of concatenating UTF-8
                        // strings, which is always valid UTF-8.
                        result.push_str(unsafe { std::str::from_utf8_unchecked(&data[..*len]) });
                        result.push_str(string.as_str(agent));
                        status = Status::String(result);
                    }
                }
                Status::String(buffer) => buffer.push_str(string.as_str(agent)),
            }
        }

        match status {
            Status::Empty => String::EMPTY_STRING,
            Status::ExistingString(idx) => String::String(idx),
            Status::SmallString { data, len } => {
                // SAFETY: SmallStrings are guaranteed UTF-8, and `&data[..len]`
                // is the result of concatenating UTF-8 strings, which is
                // always valid UTF-8.
                let str_slice = unsafe { std::str::from_utf8_unchecked(&data[..len]) };
                SmallString::from_str_unchecked(str_slice).into()
            }
            Status::String(string) => agent.heap.create(string),
        }
    }

    /// Byte length of the string.
    pub fn len(self, agent: &Agent) -> usize {
        match self {
            String::String(s) => agent[s].len(),
            String::SmallString(s) => s.len(),
        }
    }

    pub fn as_str<'string, 'agent: 'string>(&'string self, agent: &'agent Agent) -> &'string str {
        match self {
            String::String(s) => agent[*s].as_str(),
            String::SmallString(s) => s.as_str(),
        }
    }
}

impl Index<HeapString> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: HeapString) -> &Self::Output {
        &self.heap.strings[index]
    }
}

impl IndexMut<HeapString> for Agent {
    fn index_mut(&mut self, index: HeapString) -> &mut Self::Output {
        &mut self.heap.strings[index]
    }
}

impl Index<HeapString> for Vec<Option<StringHeapData>> {
    type Output = StringHeapData;

    fn index(&self, index: HeapString) -> &Self::Output {
        self.get(index.get_index())
            .expect("HeapString out of bounds")
            .as_ref()
            .expect("HeapString slot empty")
    }
}

impl IndexMut<HeapString> for Vec<Option<StringHeapData>> {
    fn index_mut(&mut self, index: HeapString) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("HeapString out of bounds")
            .as_mut()
            .expect("HeapString slot empty")
    }
}
