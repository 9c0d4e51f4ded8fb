// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)

pub(crate) mod data;

use std::ops::{Index, IndexMut};

pub use data::ErrorHeapData;

use crate::{
    ecmascript::{
        builtins::ordinary::{
            ordinary_delete, ordinary_get, ordinary_get_own_property, ordinary_has_property,
            ordinary_own_property_keys,
        },
        execution::{Agent, JsResult, ProtoIntrinsics},
        static_strings,
        types::{
            InternalMethods, InternalSlots, IntoValue, Object, ObjectHeapData, OrdinaryObject,
            PropertyDescriptor, PropertyKey, Value,
        },
    },
    heap::{CreateHeapData, Heap, ObjectEntry, ObjectEntryPropertyDescriptor, indexes::ErrorIndex},
};

/// A handle to an error object's heap data.
///
/// An error object keeps its `message` and `cause` in internal slots until
/// someone defines an unrelated own property on it; only then is a backing
/// object created and the slot values are migrated into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Error(pub(crate) ErrorIndex);

impl Error {
    pub(crate) const fn _def() -> Self {
        Self(ErrorIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }
}

impl From<Error> for Object {
    fn from(value: Error) -> Self {
        Object::Error(value)
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Error(value)
    }
}

impl TryFrom<Value> for Error {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Error(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl TryFrom<Object> for Error {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, ()> {
        match value {
            Object::Error(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl InternalSlots for Error {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Error;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        let prototype = self.internal_prototype(agent);
        let message = agent[self].message;
        let cause = agent[self].cause;
        let mut entries = Vec::with_capacity(2);
        if let Some(message) = message {
            entries.push(ObjectEntry {
                key: PropertyKey::from(static_strings::MESSAGE),
                value: ObjectEntryPropertyDescriptor::Data {
                    value: message.into_value(),
                    writable: true,
                    enumerable: false,
                    configurable: true,
                },
            });
        }
        if let Some(cause) = cause {
            entries.push(ObjectEntry {
                key: PropertyKey::from(static_strings::CAUSE),
                value: ObjectEntryPropertyDescriptor::Data {
                    value: cause,
                    writable: true,
                    enumerable: false,
                    configurable: true,
                },
            });
        }
        let backing_object = agent.heap.create(ObjectHeapData {
            extensible: true,
            prototype,
            entries,
        });
        agent[self].object_index = Some(backing_object);
        agent[self].message = None;
        agent[self].cause = None;
        backing_object
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        if let Some(backing_object) = self.get_backing_object(agent) {
            backing_object.internal_prototype(agent)
        } else {
            // The prototype follows the error kind: a TypeError instance
            // hangs off %TypeError.prototype%, and so on.
            let intrinsic = agent[self].kind.proto_intrinsics();
            Some(
                agent
                    .current_realm()
                    .intrinsics()
                    .get_intrinsic_default_proto(intrinsic),
            )
        }
    }
}

impl InternalMethods for Error {
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        if let Some(backing_object) = self.get_backing_object(agent) {
            return Ok(ordinary_get_own_property(agent, backing_object, property_key));
        }
        let slot_value = if property_key == PropertyKey::from(static_strings::MESSAGE) {
            agent[self].message.map(IntoValue::into_value)
        } else if property_key == PropertyKey::from(static_strings::CAUSE) {
            agent[self].cause
        } else {
            None
        };
        Ok(slot_value.map(|value| PropertyDescriptor {
            value: Some(value),
            writable: Some(true),
            enumerable: Some(false),
            configurable: Some(true),
            ..Default::default()
        }))
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        if let Some(backing_object) = self.get_backing_object(agent) {
            return ordinary_has_property(agent, backing_object, property_key);
        }
        if self.internal_get_own_property(agent, property_key)?.is_some() {
            return Ok(true);
        }
        let parent = self.internal_get_prototype_of(agent)?;
        if let Some(parent) = parent {
            parent.internal_has_property(agent, property_key)
        } else {
            Ok(false)
        }
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        if let Some(backing_object) = self.get_backing_object(agent) {
            return ordinary_get(agent, backing_object, property_key, receiver);
        }
        if let Some(descriptor) = self.internal_get_own_property(agent, property_key)? {
            return Ok(descriptor.value.unwrap());
        }
        let parent = self.internal_get_prototype_of(agent)?;
        if let Some(parent) = parent {
            parent.internal_get(agent, property_key, receiver)
        } else {
            Ok(Value::Undefined)
        }
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        if let Some(backing_object) = self.get_backing_object(agent) {
            ordinary_delete(agent, backing_object, property_key)
        } else if property_key == PropertyKey::from(static_strings::MESSAGE) {
            agent[self].message = None;
            Ok(true)
        } else if property_key == PropertyKey::from(static_strings::CAUSE) {
            agent[self].cause = None;
            Ok(true)
        } else {
            Ok(true)
        }
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        if let Some(backing_object) = self.get_backing_object(agent) {
            return Ok(ordinary_own_property_keys(agent, backing_object));
        }
        let mut keys = Vec::with_capacity(2);
        if agent[self].message.is_some() {
            keys.push(PropertyKey::from(static_strings::MESSAGE));
        }
        if agent[self].cause.is_some() {
            keys.push(PropertyKey::from(static_strings::CAUSE));
        }
        Ok(keys)
    }
}

impl Index<Error> for Agent {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        &self.heap.errors[index]
    }
}

impl IndexMut<Error> for Agent {
    fn index_mut(&mut self, index: Error) -> &mut Self::Output {
        &mut self.heap.errors[index]
    }
}

impl Index<Error> for Vec<Option<ErrorHeapData>> {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        self.get(index.get_index())
            .expect("Error out of bounds")
            .as_ref()
            .expect("Error slot empty")
    }
}

impl IndexMut<Error> for Vec<Option<ErrorHeapData>> {
    fn index_mut(&mut self, index: Error) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("Error out of bounds")
            .as_mut()
            .expect("Error slot empty")
    }
}

impl CreateHeapData<ErrorHeapData, Error> for Heap {
    fn create(&mut self, data: ErrorHeapData) -> Error {
        self.errors.push(Some(data));
        Error(ErrorIndex::last(&self.errors))
    }
}
