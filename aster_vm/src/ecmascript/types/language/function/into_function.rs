// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Function;
use crate::{
    ecmascript::{
        builtins::ordinary::{
            ordinary_define_own_property, ordinary_delete, ordinary_get,
            ordinary_get_own_property, ordinary_has_property, ordinary_own_property_keys,
            ordinary_set,
        },
        execution::{Agent, JsResult},
        static_strings,
        types::{
            InternalMethods, InternalSlots, IntoValue, ObjectHeapData, OrdinaryObject,
            PropertyDescriptor, PropertyKey, String, Value, language::IntoObject,
        },
    },
    heap::{CreateHeapData, ObjectEntry, ObjectEntryPropertyDescriptor},
};

pub trait IntoFunction
where
    Self: Sized + Copy + IntoObject,
{
    fn into_function(self) -> Function;
}

impl<T> IntoFunction for T
where
    T: Into<Function> + Sized + Copy + IntoObject,
{
    #[inline]
    fn into_function(self) -> Function {
        self.into()
    }
}

/// Implements getters for the properties normally present on most objects.
/// These are used when the function hasn't had a backing object created.
pub(crate) trait FunctionInternalProperties
where
    Self: IntoObject + IntoFunction + InternalSlots + InternalMethods,
{
    /// Value of the 'name' property.
    fn get_name(self, agent: &Agent) -> String;

    /// Value of the 'length' property.
    fn get_length(self, agent: &Agent) -> u8;
}

pub(crate) fn function_create_backing_object(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
) -> OrdinaryObject {
    assert!(func.get_backing_object(agent).is_none());
    let prototype = func.internal_prototype(agent);
    let length_entry = ObjectEntry {
        key: PropertyKey::from(static_strings::LENGTH),
        value: ObjectEntryPropertyDescriptor::Data {
            value: func.get_length(agent).into(),
            writable: false,
            enumerable: false,
            configurable: true,
        },
    };
    let name_entry = ObjectEntry {
        key: PropertyKey::from(static_strings::NAME),
        value: ObjectEntryPropertyDescriptor::Data {
            value: func.get_name(agent).into_value(),
            writable: false,
            enumerable: false,
            configurable: true,
        },
    };
    agent.heap.create(ObjectHeapData {
        extensible: true,
        prototype,
        entries: vec![length_entry, name_entry],
    })
}

pub(crate) fn function_internal_get_own_property(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    if let Some(backing_object) = func.get_backing_object(agent) {
        ordinary_get_own_property(agent, backing_object, property_key)
    } else if property_key == PropertyKey::from(static_strings::LENGTH) {
        Some(PropertyDescriptor {
            value: Some(func.get_length(agent).into()),
            writable: Some(false),
            enumerable: Some(false),
            configurable: Some(true),
            ..Default::default()
        })
    } else if property_key == PropertyKey::from(static_strings::NAME) {
        Some(PropertyDescriptor {
            value: Some(func.get_name(agent).into_value()),
            writable: Some(false),
            enumerable: Some(false),
            configurable: Some(true),
            ..Default::default()
        })
    } else {
        None
    }
}

pub(crate) fn function_internal_define_own_property(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
    property_key: PropertyKey,
    property_descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    let backing_object = func.get_or_create_backing_object(agent);
    ordinary_define_own_property(agent, backing_object, property_key, property_descriptor)
}

pub(crate) fn function_internal_has_property(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
    property_key: PropertyKey,
) -> JsResult<bool> {
    if let Some(backing_object) = func.get_backing_object(agent) {
        ordinary_has_property(agent, backing_object, property_key)
    } else if property_key == PropertyKey::from(static_strings::LENGTH)
        || property_key == PropertyKey::from(static_strings::NAME)
    {
        Ok(true)
    } else {
        let parent = func.internal_get_prototype_of(agent)?;
        if let Some(parent) = parent {
            parent.internal_has_property(agent, property_key)
        } else {
            Ok(false)
        }
    }
}

pub(crate) fn function_internal_get(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    if let Some(backing_object) = func.get_backing_object(agent) {
        ordinary_get(agent, backing_object, property_key, receiver)
    } else if property_key == PropertyKey::from(static_strings::LENGTH) {
        Ok(func.get_length(agent).into())
    } else if property_key == PropertyKey::from(static_strings::NAME) {
        Ok(func.get_name(agent).into_value())
    } else {
        let parent = func.internal_get_prototype_of(agent)?;
        if let Some(parent) = parent {
            parent.internal_get(agent, property_key, receiver)
        } else {
            Ok(Value::Undefined)
        }
    }
}

pub(crate) fn function_internal_set(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    if func.get_backing_object(agent).is_none()
        && (property_key == PropertyKey::from(static_strings::LENGTH)
            || property_key == PropertyKey::from(static_strings::NAME))
    {
        // length and name are not writable
        Ok(false)
    } else {
        let backing_object = func.get_or_create_backing_object(agent);
        ordinary_set(agent, backing_object, property_key, value, receiver)
    }
}

pub(crate) fn function_internal_delete(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
    property_key: PropertyKey,
) -> JsResult<bool> {
    if let Some(backing_object) = func.get_backing_object(agent) {
        ordinary_delete(agent, backing_object, property_key)
    } else if property_key == PropertyKey::from(static_strings::LENGTH)
        || property_key == PropertyKey::from(static_strings::NAME)
    {
        let backing_object = func.create_backing_object(agent);
        ordinary_delete(agent, backing_object, property_key)
    } else {
        // Non-existing property
        Ok(true)
    }
}

pub(crate) fn function_internal_own_property_keys(
    func: impl FunctionInternalProperties,
    agent: &mut Agent,
) -> Vec<PropertyKey> {
    if let Some(backing_object) = func.get_backing_object(agent) {
        ordinary_own_property_keys(agent, backing_object)
    } else {
        vec![
            PropertyKey::from(static_strings::LENGTH),
            PropertyKey::from(static_strings::NAME),
        ]
    }
}
