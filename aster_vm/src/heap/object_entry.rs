// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::{Function, PropertyDescriptor, PropertyKey, Value};

#[derive(Debug, Clone)]
pub(crate) struct ObjectEntry {
    pub key: PropertyKey,
    pub value: ObjectEntryPropertyDescriptor,
}

impl ObjectEntry {
    /// Entry for a `{ writable: true, enumerable: true, configurable: true }`
    /// data property.
    pub(crate) fn new_data_entry(key: PropertyKey, value: Value) -> Self {
        Self {
            key,
            value: ObjectEntryPropertyDescriptor::Data {
                value,
                writable: true,
                enumerable: true,
                configurable: true,
            },
        }
    }
}

impl From<PropertyDescriptor> for ObjectEntryPropertyDescriptor {
    fn from(value: PropertyDescriptor) -> Self {
        let configurable = value.configurable.unwrap_or(true);
        let enumerable = value.enumerable.unwrap_or(true);
        if value.get.is_some() && value.set.is_some() {
            ObjectEntryPropertyDescriptor::ReadWrite {
                get: value.get.unwrap(),
                set: value.set.unwrap(),
                enumerable,
                configurable,
            }
        } else if value.get.is_some() {
            ObjectEntryPropertyDescriptor::ReadOnly {
                get: value.get.unwrap(),
                enumerable,
                configurable,
            }
        } else if value.set.is_some() {
            ObjectEntryPropertyDescriptor::WriteOnly {
                set: value.set.unwrap(),
                enumerable,
                configurable,
            }
        } else if value.value.is_some() {
            ObjectEntryPropertyDescriptor::Data {
                value: value.value.unwrap(),
                writable: value.writable.unwrap_or(true),
                enumerable,
                configurable,
            }
        } else if value.writable == Some(false) {
            ObjectEntryPropertyDescriptor::Blocked {
                enumerable,
                configurable,
            }
        } else {
            todo!()
        }
    }
}

impl From<&ObjectEntryPropertyDescriptor> for PropertyDescriptor {
    fn from(value: &ObjectEntryPropertyDescriptor) -> Self {
        match *value {
            ObjectEntryPropertyDescriptor::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: Some(value),
                writable: Some(writable),
                get: None,
                set: None,
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            },
            ObjectEntryPropertyDescriptor::Blocked {
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: Some(Value::Undefined),
                writable: Some(false),
                get: None,
                set: None,
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            },
            ObjectEntryPropertyDescriptor::ReadOnly {
                get,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(get),
                set: None,
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            },
            ObjectEntryPropertyDescriptor::WriteOnly {
                set,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: None,
                writable: None,
                get: None,
                set: Some(set),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            },
            ObjectEntryPropertyDescriptor::ReadWrite {
                get,
                set,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(get),
                set: Some(set),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ObjectEntryPropertyDescriptor {
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Blocked {
        enumerable: bool,
        configurable: bool,
    },
    ReadOnly {
        get: Function,
        enumerable: bool,
        configurable: bool,
    },
    WriteOnly {
        set: Function,
        enumerable: bool,
        configurable: bool,
    },
    ReadWrite {
        get: Function,
        set: Function,
        enumerable: bool,
        configurable: bool,
    },
}
