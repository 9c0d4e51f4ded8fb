// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;
mod internal_methods;
mod internal_slots;
mod into_object;
mod property_key;

use std::ops::{Index, IndexMut};

use super::{
    Value,
    value::{
        BUILTIN_FUNCTION_DISCRIMINANT, BUILTIN_PROMISE_RESOLVING_FUNCTION_DISCRIMINANT,
        ERROR_DISCRIMINANT, OBJECT_DISCRIMINANT, PROMISE_DISCRIMINANT,
        PROMISIFIED_FUNCTION_DISCRIMINANT, PROMISIFIED_GETTER_DISCRIMINANT,
    },
};
use crate::{
    ecmascript::{
        builtins::{
            ArgumentsList, BuiltinFunction,
            control_abstraction_objects::promise_objects::promise_abstract_operations::promise_resolving_functions::BuiltinPromiseResolvingFunction,
            error::Error,
            promise::Promise,
            promisified_function::PromisifiedFunction,
            promisified_getter::PromisifiedGetter,
        },
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{Function, PropertyDescriptor},
    },
    heap::{CreateHeapData, Heap, ObjectEntry, indexes::ObjectIndex},
};

pub use data::ObjectHeapData;
pub use internal_methods::InternalMethods;
pub use internal_slots::InternalSlots;
pub use into_object::IntoObject;
pub use property_key::PropertyKey;

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// Object handles come in two kinds: ordinary objects refer directly to a
/// slot of object heap data, while the exotic variants refer to their own
/// heap data that optionally carries a backing ordinary object for any plain
/// properties defined on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Object {
    Object(OrdinaryObject) = OBJECT_DISCRIMINANT,
    BuiltinFunction(BuiltinFunction) = BUILTIN_FUNCTION_DISCRIMINANT,
    BuiltinPromiseResolvingFunction(BuiltinPromiseResolvingFunction) =
        BUILTIN_PROMISE_RESOLVING_FUNCTION_DISCRIMINANT,
    PromisifiedFunction(PromisifiedFunction) = PROMISIFIED_FUNCTION_DISCRIMINANT,
    PromisifiedGetter(PromisifiedGetter) = PROMISIFIED_GETTER_DISCRIMINANT,
    Error(Error) = ERROR_DISCRIMINANT,
    Promise(Promise) = PROMISE_DISCRIMINANT,
}

/// A handle to an ordinary object's heap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

impl OrdinaryObject {
    pub(crate) const fn _def() -> Self {
        OrdinaryObject(ObjectIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// Find the index of a property entry by key. Property keys must be
    /// compared through [PropertyKey::equals]: an interned heap string and a
    /// small string may hold equal data.
    fn entry_index(self, agent: &Agent, property_key: PropertyKey) -> Option<usize> {
        agent[self]
            .entries
            .iter()
            .position(|entry| entry.key.equals(agent, property_key))
    }

    /// Read an own property entry into a property descriptor.
    pub(crate) fn property_descriptor(
        self,
        agent: &Agent,
        property_key: PropertyKey,
    ) -> Option<PropertyDescriptor> {
        let index = self.entry_index(agent, property_key)?;
        Some(PropertyDescriptor::from(&agent[self].entries[index].value))
    }

    /// Write an own property entry, replacing any previous entry with an
    /// equal key.
    pub(crate) fn define_entry(self, agent: &mut Agent, entry: ObjectEntry) {
        match self.entry_index(agent, entry.key) {
            Some(index) => agent[self].entries[index] = entry,
            None => agent[self].entries.push(entry),
        }
    }

    /// Drop an own property entry if one exists for the key.
    pub(crate) fn remove_entry(self, agent: &mut Agent, property_key: PropertyKey) {
        if let Some(index) = self.entry_index(agent, property_key) {
            agent[self].entries.remove(index);
        }
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        match value {
            Object::Object(data) => Value::Object(data),
            Object::BuiltinFunction(data) => Value::BuiltinFunction(data),
            Object::BuiltinPromiseResolvingFunction(data) => {
                Value::BuiltinPromiseResolvingFunction(data)
            }
            Object::PromisifiedFunction(data) => Value::PromisifiedFunction(data),
            Object::PromisifiedGetter(data) => Value::PromisifiedGetter(data),
            Object::Error(data) => Value::Error(data),
            Object::Promise(data) => Value::Promise(data),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    // `Self::Error` is ambiguous with the `Object::Error` variant.
    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(data) => Ok(Object::Object(data)),
            Value::BuiltinFunction(data) => Ok(Object::BuiltinFunction(data)),
            Value::BuiltinPromiseResolvingFunction(data) => {
                Ok(Object::BuiltinPromiseResolvingFunction(data))
            }
            Value::PromisifiedFunction(data) => Ok(Object::PromisifiedFunction(data)),
            Value::PromisifiedGetter(data) => Ok(Object::PromisifiedGetter(data)),
            Value::Error(data) => Ok(Object::Error(data)),
            Value::Promise(data) => Ok(Object::Promise(data)),
            _ => Err(()),
        }
    }
}

impl TryFrom<Object> for OrdinaryObject {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::Object(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl InternalSlots for OrdinaryObject {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Object;

    #[inline(always)]
    fn get_backing_object(self, _agent: &Agent) -> Option<OrdinaryObject> {
        Some(self)
    }

    fn create_backing_object(self, _agent: &mut Agent) -> OrdinaryObject {
        unreachable!("An ordinary object is its own backing object");
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        agent[self].extensible
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        agent[self].extensible = value;
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        agent[self].prototype
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        agent[self].prototype = prototype;
    }
}

impl InternalMethods for OrdinaryObject {}

macro_rules! object_delegate {
    ($value: ident, $method: ident, $($arg:expr),*) => {
        match $value {
            Self::Object(data) => data.$method($($arg),+),
            Self::BuiltinFunction(data) => data.$method($($arg),+),
            Self::BuiltinPromiseResolvingFunction(data) => data.$method($($arg),+),
            Self::PromisifiedFunction(data) => data.$method($($arg),+),
            Self::PromisifiedGetter(data) => data.$method($($arg),+),
            Self::Error(data) => data.$method($($arg),+),
            Self::Promise(data) => data.$method($($arg),+),
        }
    };
}

impl InternalSlots for Object {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Object;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        object_delegate!(self, get_backing_object, agent)
    }

    fn create_backing_object(self, _agent: &mut Agent) -> OrdinaryObject {
        unreachable!("Object should not try to create its backing object");
    }

    fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        object_delegate!(self, get_or_create_backing_object, agent)
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        object_delegate!(self, internal_extensible, agent)
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        object_delegate!(self, internal_set_extensible, agent, value)
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        object_delegate!(self, internal_prototype, agent)
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        object_delegate!(self, internal_set_prototype, agent, prototype)
    }
}

impl InternalMethods for Object {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        object_delegate!(self, internal_get_prototype_of, agent)
    }

    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        object_delegate!(self, internal_set_prototype_of, agent, prototype)
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        object_delegate!(self, internal_is_extensible, agent)
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        object_delegate!(self, internal_prevent_extensions, agent)
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        object_delegate!(self, internal_get_own_property, agent, property_key)
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        object_delegate!(
            self,
            internal_define_own_property,
            agent,
            property_key,
            property_descriptor
        )
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        object_delegate!(self, internal_has_property, agent, property_key)
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        object_delegate!(self, internal_get, agent, property_key, receiver)
    }

    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        object_delegate!(self, internal_set, agent, property_key, value, receiver)
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        object_delegate!(self, internal_delete, agent, property_key)
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        object_delegate!(self, internal_own_property_keys, agent)
    }

    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        object_delegate!(self, internal_call, agent, this_value, arguments_list)
    }

    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments_list: ArgumentsList,
        new_target: Function,
    ) -> JsResult<Object> {
        object_delegate!(self, internal_construct, agent, arguments_list, new_target)
    }
}

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        &self.heap.objects[index]
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        &mut self.heap.objects[index]
    }
}

impl Index<OrdinaryObject> for Vec<Option<ObjectHeapData>> {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        self.get(index.get_index())
            .expect("OrdinaryObject out of bounds")
            .as_ref()
            .expect("OrdinaryObject slot empty")
    }
}

impl IndexMut<OrdinaryObject> for Vec<Option<ObjectHeapData>> {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("OrdinaryObject out of bounds")
            .as_mut()
            .expect("OrdinaryObject slot empty")
    }
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(Some(data));
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}
