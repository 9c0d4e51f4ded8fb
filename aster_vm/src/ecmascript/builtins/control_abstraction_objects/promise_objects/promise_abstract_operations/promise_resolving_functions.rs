// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [27.2.1.3 CreateResolvingFunctions ( promise )](https://tc39.es/ecma262/#sec-createresolvingfunctions)

use std::ops::{Index, IndexMut};

use super::promise_capability_records::PromiseCapability;
use crate::{
    ecmascript::{
        builtins::ArgumentsList,
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{
            Function, FunctionInternalProperties, InternalMethods, InternalSlots, Object,
            OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
            function_create_backing_object, function_internal_define_own_property,
            function_internal_delete, function_internal_get, function_internal_get_own_property,
            function_internal_has_property, function_internal_own_property_keys,
            function_internal_set,
        },
    },
    heap::{CreateHeapData, Heap, indexes::PromiseResolvingFunctionIndex},
};

/// Which settling action a resolving function performs when called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromiseResolvingFunctionType {
    /// Fulfills the promise with the first argument.
    Resolve,
    /// Rejects the promise with the first argument.
    Reject,
    /// The error-first completion callback: a truthy first argument rejects
    /// the promise, otherwise the second argument fulfills it.
    Completion,
}

#[derive(Debug, Clone)]
pub struct PromiseResolvingFunctionHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) promise_capability: PromiseCapability,
    pub(crate) resolve_type: PromiseResolvingFunctionType,
}

/// A handle to a resolving function's heap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BuiltinPromiseResolvingFunction(pub(crate) PromiseResolvingFunctionIndex);

impl BuiltinPromiseResolvingFunction {
    pub(crate) const fn _def() -> Self {
        Self(PromiseResolvingFunctionIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }
}

impl From<BuiltinPromiseResolvingFunction> for Function {
    fn from(value: BuiltinPromiseResolvingFunction) -> Self {
        Function::BuiltinPromiseResolvingFunction(value)
    }
}

impl From<BuiltinPromiseResolvingFunction> for Object {
    fn from(value: BuiltinPromiseResolvingFunction) -> Self {
        Object::BuiltinPromiseResolvingFunction(value)
    }
}

impl From<BuiltinPromiseResolvingFunction> for Value {
    fn from(value: BuiltinPromiseResolvingFunction) -> Self {
        Value::BuiltinPromiseResolvingFunction(value)
    }
}

impl FunctionInternalProperties for BuiltinPromiseResolvingFunction {
    fn get_name(self, _agent: &Agent) -> String {
        String::EMPTY_STRING
    }

    fn get_length(self, agent: &Agent) -> u8 {
        match agent[self].resolve_type {
            PromiseResolvingFunctionType::Resolve | PromiseResolvingFunctionType::Reject => 1,
            PromiseResolvingFunctionType::Completion => 2,
        }
    }
}

impl InternalSlots for BuiltinPromiseResolvingFunction {
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

impl InternalMethods for BuiltinPromiseResolvingFunction {
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
        _this_value: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        let capability = agent[self].promise_capability.clone();
        match agent[self].resolve_type {
            PromiseResolvingFunctionType::Resolve => {
                capability.resolve(agent, arguments_list.get(0))
            }
            PromiseResolvingFunctionType::Reject => capability.reject(agent, arguments_list.get(0)),
            PromiseResolvingFunctionType::Completion => {
                let error = arguments_list.get(0);
                if error.to_boolean() {
                    capability.reject(agent, error);
                } else {
                    capability.resolve(agent, arguments_list.get(1));
                }
            }
        }
        Ok(Value::Undefined)
    }
}

impl Index<BuiltinPromiseResolvingFunction> for Agent {
    type Output = PromiseResolvingFunctionHeapData;

    fn index(&self, index: BuiltinPromiseResolvingFunction) -> &Self::Output {
        &self.heap.promise_resolving_functions[index]
    }
}

impl IndexMut<BuiltinPromiseResolvingFunction> for Agent {
    fn index_mut(&mut self, index: BuiltinPromiseResolvingFunction) -> &mut Self::Output {
        &mut self.heap.promise_resolving_functions[index]
    }
}

impl Index<BuiltinPromiseResolvingFunction> for Vec<Option<PromiseResolvingFunctionHeapData>> {
    type Output = PromiseResolvingFunctionHeapData;

    fn index(&self, index: BuiltinPromiseResolvingFunction) -> &Self::Output {
        self.get(index.get_index())
            .expect("BuiltinPromiseResolvingFunction out of bounds")
            .as_ref()
            .expect("BuiltinPromiseResolvingFunction slot empty")
    }
}

impl IndexMut<BuiltinPromiseResolvingFunction> for Vec<Option<PromiseResolvingFunctionHeapData>> {
    fn index_mut(&mut self, index: BuiltinPromiseResolvingFunction) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("BuiltinPromiseResolvingFunction out of bounds")
            .as_mut()
            .expect("BuiltinPromiseResolvingFunction slot empty")
    }
}

impl CreateHeapData<PromiseResolvingFunctionHeapData, BuiltinPromiseResolvingFunction> for Heap {
    fn create(
        &mut self,
        data: PromiseResolvingFunctionHeapData,
    ) -> BuiltinPromiseResolvingFunction {
        self.promise_resolving_functions.push(Some(data));
        BuiltinPromiseResolvingFunction(PromiseResolvingFunctionIndex::last(
            &self.promise_resolving_functions,
        ))
    }
}
