// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;
mod into_function;

use super::{
    InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyKey, String, Value,
    value::{
        BUILTIN_FUNCTION_DISCRIMINANT, BUILTIN_PROMISE_RESOLVING_FUNCTION_DISCRIMINANT,
        PROMISIFIED_FUNCTION_DISCRIMINANT, PROMISIFIED_GETTER_DISCRIMINANT,
    },
};
use crate::ecmascript::{
    builtins::{
        ArgumentsList, BuiltinFunction,
        control_abstraction_objects::promise_objects::promise_abstract_operations::promise_resolving_functions::BuiltinPromiseResolvingFunction,
        promisified_function::PromisifiedFunction,
        promisified_getter::PromisifiedGetter,
    },
    execution::{Agent, JsResult, ProtoIntrinsics},
    types::PropertyDescriptor,
};

pub use data::BuiltinFunctionHeapData;
pub use into_function::IntoFunction;
pub(crate) use into_function::{
    FunctionInternalProperties, function_create_backing_object,
    function_internal_define_own_property, function_internal_delete, function_internal_get,
    function_internal_get_own_property, function_internal_has_property,
    function_internal_own_property_keys, function_internal_set,
};

/// ### [Function object](https://tc39.es/ecma262/#function-object)
///
/// Sub-enum of [Value] and [Object] containing the callable variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Function {
    BuiltinFunction(BuiltinFunction) = BUILTIN_FUNCTION_DISCRIMINANT,
    BuiltinPromiseResolvingFunction(BuiltinPromiseResolvingFunction) =
        BUILTIN_PROMISE_RESOLVING_FUNCTION_DISCRIMINANT,
    PromisifiedFunction(PromisifiedFunction) = PROMISIFIED_FUNCTION_DISCRIMINANT,
    PromisifiedGetter(PromisifiedGetter) = PROMISIFIED_GETTER_DISCRIMINANT,
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(data) => Object::BuiltinFunction(data),
            Function::BuiltinPromiseResolvingFunction(data) => {
                Object::BuiltinPromiseResolvingFunction(data)
            }
            Function::PromisifiedFunction(data) => Object::PromisifiedFunction(data),
            Function::PromisifiedGetter(data) => Object::PromisifiedGetter(data),
        }
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(data) => Value::BuiltinFunction(data),
            Function::BuiltinPromiseResolvingFunction(data) => {
                Value::BuiltinPromiseResolvingFunction(data)
            }
            Function::PromisifiedFunction(data) => Value::PromisifiedFunction(data),
            Function::PromisifiedGetter(data) => Value::PromisifiedGetter(data),
        }
    }
}

impl TryFrom<Value> for Function {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::BuiltinFunction(data) => Ok(Function::BuiltinFunction(data)),
            Value::BuiltinPromiseResolvingFunction(data) => {
                Ok(Function::BuiltinPromiseResolvingFunction(data))
            }
            Value::PromisifiedFunction(data) => Ok(Function::PromisifiedFunction(data)),
            Value::PromisifiedGetter(data) => Ok(Function::PromisifiedGetter(data)),
            _ => Err(()),
        }
    }
}

impl TryFrom<Object> for Function {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::BuiltinFunction(data) => Ok(Function::BuiltinFunction(data)),
            Object::BuiltinPromiseResolvingFunction(data) => {
                Ok(Function::BuiltinPromiseResolvingFunction(data))
            }
            Object::PromisifiedFunction(data) => Ok(Function::PromisifiedFunction(data)),
            Object::PromisifiedGetter(data) => Ok(Function::PromisifiedGetter(data)),
            _ => Err(()),
        }
    }
}

impl Function {
    /// Value of the function's initial 'name' property.
    pub(crate) fn name(self, agent: &Agent) -> String {
        match self {
            Function::BuiltinFunction(data) => data.get_name(agent),
            Function::BuiltinPromiseResolvingFunction(data) => data.get_name(agent),
            Function::PromisifiedFunction(data) => data.get_name(agent),
            Function::PromisifiedGetter(data) => data.get_name(agent),
        }
    }

    /// Value of the function's initial 'length' property.
    pub(crate) fn length(self, agent: &Agent) -> u8 {
        match self {
            Function::BuiltinFunction(data) => data.get_length(agent),
            Function::BuiltinPromiseResolvingFunction(data) => data.get_length(agent),
            Function::PromisifiedFunction(data) => data.get_length(agent),
            Function::PromisifiedGetter(data) => data.get_length(agent),
        }
    }
}

macro_rules! function_delegate {
    ($value: ident, $method: ident, $($arg:expr),*) => {
        match $value {
            Self::BuiltinFunction(data) => data.$method($($arg),+),
            Self::BuiltinPromiseResolvingFunction(data) => data.$method($($arg),+),
            Self::PromisifiedFunction(data) => data.$method($($arg),+),
            Self::PromisifiedGetter(data) => data.$method($($arg),+),
        }
    };
}

impl InternalSlots for Function {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Function;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        function_delegate!(self, get_backing_object, agent)
    }

    fn create_backing_object(self, _agent: &mut Agent) -> OrdinaryObject {
        unreachable!("Function should not try to create its backing object");
    }

    fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        function_delegate!(self, get_or_create_backing_object, agent)
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        function_delegate!(self, internal_extensible, agent)
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        function_delegate!(self, internal_set_extensible, agent, value)
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        function_delegate!(self, internal_prototype, agent)
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        function_delegate!(self, internal_set_prototype, agent, prototype)
    }
}

impl InternalMethods for Function {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        function_delegate!(self, internal_get_prototype_of, agent)
    }

    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        function_delegate!(self, internal_set_prototype_of, agent, prototype)
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        function_delegate!(self, internal_is_extensible, agent)
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        function_delegate!(self, internal_prevent_extensions, agent)
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        function_delegate!(self, internal_get_own_property, agent, property_key)
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        function_delegate!(
            self,
            internal_define_own_property,
            agent,
            property_key,
            property_descriptor
        )
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        function_delegate!(self, internal_has_property, agent, property_key)
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        function_delegate!(self, internal_get, agent, property_key, receiver)
    }

    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        function_delegate!(self, internal_set, agent, property_key, value, receiver)
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        function_delegate!(self, internal_delete, agent, property_key)
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        function_delegate!(self, internal_own_property_keys, agent)
    }

    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        function_delegate!(self, internal_call, agent, this_value, arguments_list)
    }

    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments_list: ArgumentsList,
        new_target: Function,
    ) -> JsResult<Object> {
        function_delegate!(self, internal_construct, agent, arguments_list, new_target)
    }
}
