// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use crate::{
    ecmascript::{
        builtins::{ArgumentsList, promisified_function::promisify_function},
        execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
        types::{
            Function, FunctionInternalProperties, InternalMethods, InternalSlots, IntoValue,
            Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
            function_create_backing_object, function_internal_define_own_property,
            function_internal_delete, function_internal_get, function_internal_get_own_property,
            function_internal_has_property, function_internal_own_property_keys,
            function_internal_set,
        },
    },
    heap::{CreateHeapData, Heap, indexes::PromisifiedGetterIndex},
};

#[derive(Debug, Clone)]
pub struct PromisifiedGetterHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    /// The accessor's original getter.
    pub(crate) getter: Function,
    /// A user-supplied replacement for the default function promisifier.
    pub(crate) promisifier: Option<Function>,
    /// Initial 'name' of the getter, with the async suffix appended.
    pub(crate) name: String,
}

/// A getter exotic object standing in for an accessor whose values are
/// callback-style functions.
///
/// Reading through it calls the original getter with the same receiver and
/// promisifies whatever function the getter produced. The result is not
/// cached: a getter that answers different functions per read gets a fresh
/// wrapper each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PromisifiedGetter(pub(crate) PromisifiedGetterIndex);

impl PromisifiedGetter {
    pub(crate) const fn _def() -> Self {
        Self(PromisifiedGetterIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }
}

impl From<PromisifiedGetter> for Function {
    fn from(value: PromisifiedGetter) -> Self {
        Function::PromisifiedGetter(value)
    }
}

impl From<PromisifiedGetter> for Object {
    fn from(value: PromisifiedGetter) -> Self {
        Object::PromisifiedGetter(value)
    }
}

impl From<PromisifiedGetter> for Value {
    fn from(value: PromisifiedGetter) -> Self {
        Value::PromisifiedGetter(value)
    }
}

impl TryFrom<Value> for PromisifiedGetter {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::PromisifiedGetter(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl FunctionInternalProperties for PromisifiedGetter {
    fn get_name(self, agent: &Agent) -> String {
        agent[self].name
    }

    fn get_length(self, _agent: &Agent) -> u8 {
        0
    }
}

impl InternalSlots for PromisifiedGetter {
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

impl InternalMethods for PromisifiedGetter {
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
        _arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        let getter = agent[self].getter;
        let result = getter.internal_call(agent, this_value, ArgumentsList::default())?;

        // The getter's result has to be a function for promisification to
        // mean anything. The check happens here, lazily: installing the
        // accessor never reads through the original getter.
        let Ok(result) = Function::try_from(result) else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Called async-suffixed accessor on a non-function getter",
            ));
        };

        if let Some(promisifier) = agent[self].promisifier {
            // A user-supplied promisifier replaces the default wrapping. It
            // is called without a receiver, same as in the data-property
            // pass; only the original getter sees `this`.
            let arguments = [result.into_value()];
            promisifier.internal_call(agent, Value::Undefined, ArgumentsList::new(&arguments))
        } else {
            let name = agent[self].name;
            Ok(promisify_function(agent, result, name).into_value())
        }
    }
}

impl Index<PromisifiedGetter> for Agent {
    type Output = PromisifiedGetterHeapData;

    fn index(&self, index: PromisifiedGetter) -> &Self::Output {
        &self.heap.promisified_getters[index]
    }
}

impl IndexMut<PromisifiedGetter> for Agent {
    fn index_mut(&mut self, index: PromisifiedGetter) -> &mut Self::Output {
        &mut self.heap.promisified_getters[index]
    }
}

impl Index<PromisifiedGetter> for Vec<Option<PromisifiedGetterHeapData>> {
    type Output = PromisifiedGetterHeapData;

    fn index(&self, index: PromisifiedGetter) -> &Self::Output {
        self.get(index.get_index())
            .expect("PromisifiedGetter out of bounds")
            .as_ref()
            .expect("PromisifiedGetter slot empty")
    }
}

impl IndexMut<PromisifiedGetter> for Vec<Option<PromisifiedGetterHeapData>> {
    fn index_mut(&mut self, index: PromisifiedGetter) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("PromisifiedGetter out of bounds")
            .as_mut()
            .expect("PromisifiedGetter slot empty")
    }
}

impl CreateHeapData<PromisifiedGetterHeapData, PromisifiedGetter> for Heap {
    fn create(&mut self, data: PromisifiedGetterHeapData) -> PromisifiedGetter {
        self.promisified_getters.push(Some(data));
        PromisifiedGetter(PromisifiedGetterIndex::last(&self.promisified_getters))
    }
}
