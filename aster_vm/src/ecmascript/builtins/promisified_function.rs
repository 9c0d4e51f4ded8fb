// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use crate::{
    ecmascript::{
        builtins::{
            ArgumentsList,
            control_abstraction_objects::promise_objects::promise_abstract_operations::{
                promise_capability_records::PromiseCapability,
                promise_resolving_functions::{
                    PromiseResolvingFunctionHeapData, PromiseResolvingFunctionType,
                },
            },
        },
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{
            Function, FunctionInternalProperties, InternalMethods, InternalSlots, IntoValue,
            Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
            function_create_backing_object, function_internal_define_own_property,
            function_internal_delete, function_internal_get, function_internal_get_own_property,
            function_internal_has_property, function_internal_own_property_keys,
            function_internal_set,
        },
    },
    heap::{CreateHeapData, Heap, indexes::PromisifiedFunctionIndex},
};

#[derive(Debug, Clone)]
pub struct PromisifiedFunctionHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    /// The wrapped callback-style function.
    pub(crate) target: Function,
    /// Initial 'name' of the wrapper, usually the target's name with the
    /// async suffix appended.
    pub(crate) name: String,
    /// Initial 'length' of the wrapper: the target's length less the
    /// trailing completion-callback parameter.
    pub(crate) length: u8,
}

/// A function exotic object wrapping a callback-style target function.
///
/// Calling it invokes the target with the same `this` and arguments plus a
/// trailing error-first completion callback, and returns a promise that the
/// callback settles. A synchronous throw from the target rejects the
/// promise instead of propagating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PromisifiedFunction(pub(crate) PromisifiedFunctionIndex);

impl PromisifiedFunction {
    pub(crate) const fn _def() -> Self {
        Self(PromisifiedFunctionIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// The callback-style function this wrapper forwards to.
    pub fn target(self, agent: &Agent) -> Function {
        agent[self].target
    }
}

/// Create a promise-returning wrapper for a callback-style function.
///
/// The wrapper's `length` is one less than the target's, accounting for the
/// completion-callback parameter the wrapper supplies itself.
pub(crate) fn promisify_function(
    agent: &mut Agent,
    target: Function,
    name: String,
) -> PromisifiedFunction {
    let length = target.length(agent).saturating_sub(1);
    agent.heap.create(PromisifiedFunctionHeapData {
        object_index: None,
        target,
        name,
        length,
    })
}

impl From<PromisifiedFunction> for Function {
    fn from(value: PromisifiedFunction) -> Self {
        Function::PromisifiedFunction(value)
    }
}

impl From<PromisifiedFunction> for Object {
    fn from(value: PromisifiedFunction) -> Self {
        Object::PromisifiedFunction(value)
    }
}

impl From<PromisifiedFunction> for Value {
    fn from(value: PromisifiedFunction) -> Self {
        Value::PromisifiedFunction(value)
    }
}

impl TryFrom<Value> for PromisifiedFunction {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::PromisifiedFunction(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl FunctionInternalProperties for PromisifiedFunction {
    fn get_name(self, agent: &Agent) -> String {
        agent[self].name
    }

    fn get_length(self, agent: &Agent) -> u8 {
        agent[self].length
    }
}

impl InternalSlots for PromisifiedFunction {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Function;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        let backing_object = function_create_backing_object(self, agent);
        agent[self].object_index = Some(backing_object);
        backing_object
    }
}

impl InternalMethods for PromisifiedFunction {
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        Ok(function_internal_get_own_property(self, agent, property_key))
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        function_internal_define_own_property(self, agent, property_key, property_descriptor)
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        function_internal_has_property(self, agent, property_key)
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        function_internal_get(self, agent, property_key, receiver)
    }

    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        function_internal_set(self, agent, property_key, value, receiver)
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        function_internal_delete(self, agent, property_key)
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        Ok(function_internal_own_property_keys(self, agent))
    }

    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        let target = agent[self].target;

        // The promise settles through the error-first completion callback
        // appended to the target's arguments.
        let capability = PromiseCapability::new(agent);
        let promise = capability.promise();
        let callback = agent.heap.create(PromiseResolvingFunctionHeapData {
            object_index: None,
            promise_capability: capability.clone(),
            resolve_type: PromiseResolvingFunctionType::Completion,
        });

        let mut arguments = Vec::with_capacity(arguments_list.len() + 1);
        arguments.extend_from_slice(&arguments_list);
        arguments.push(callback.into_value());

        let result = target.internal_call(agent, this_value, ArgumentsList::new(&arguments));
        // A synchronous throw from the target rejects the promise; if the
        // callback already settled it, the rejection is a no-op.
        if let Err(error) = result {
            capability.reject(agent, error.value());
        }

        Ok(promise.into_value())
    }
}

impl Index<PromisifiedFunction> for Agent {
    type Output = PromisifiedFunctionHeapData;

    fn index(&self, index: PromisifiedFunction) -> &Self::Output {
        &self.heap.promisified_functions[index]
    }
}

impl IndexMut<PromisifiedFunction> for Agent {
    fn index_mut(&mut self, index: PromisifiedFunction) -> &mut Self::Output {
        &mut self.heap.promisified_functions[index]
    }
}

impl Index<PromisifiedFunction> for Vec<Option<PromisifiedFunctionHeapData>> {
    type Output = PromisifiedFunctionHeapData;

    fn index(&self, index: PromisifiedFunction) -> &Self::Output {
        self.get(index.get_index())
            .expect("PromisifiedFunction out of bounds")
            .as_ref()
            .expect("PromisifiedFunction slot empty")
    }
}

impl IndexMut<PromisifiedFunction> for Vec<Option<PromisifiedFunctionHeapData>> {
    fn index_mut(&mut self, index: PromisifiedFunction) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("PromisifiedFunction out of bounds")
            .as_mut()
            .expect("PromisifiedFunction slot empty")
    }
}

impl CreateHeapData<PromisifiedFunctionHeapData, PromisifiedFunction> for Heap {
    fn create(&mut self, data: PromisifiedFunctionHeapData) -> PromisifiedFunction {
        self.promisified_functions.push(Some(data));
        PromisifiedFunction(PromisifiedFunctionIndex::last(&self.promisified_functions))
    }
}
