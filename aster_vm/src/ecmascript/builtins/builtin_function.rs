// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Deref, Index, IndexMut};

use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType, ExecutionContext, JsResult},
        types::{
            BuiltinFunctionHeapData, Function, FunctionInternalProperties, InternalMethods,
            InternalSlots, IntoFunction, IntoObject, Object, OrdinaryObject, PropertyDescriptor,
            PropertyKey, String, Value, function_create_backing_object,
            function_internal_define_own_property, function_internal_delete,
            function_internal_get, function_internal_get_own_property,
            function_internal_has_property, function_internal_own_property_keys,
            function_internal_set,
        },
    },
    ecmascript::execution::ProtoIntrinsics,
    heap::{CreateHeapData, Heap, indexes::BuiltinFunctionIndex},
};

/// A list of ECMAScript language values given as the arguments of a function
/// call.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }

    /// Argument at the index, or undefined past the end of the list.
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

impl Default for ArgumentsList<'_> {
    fn default() -> Self {
        Self(&[])
    }
}

impl Deref for ArgumentsList<'_> {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn =
    fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;

/// The Rust-level behavior backing a builtin function.
#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
}

/// Compile-time description of a builtin function: its initial name, its
/// `length`, and its behavior.
pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;
}

#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunctionArgs {
    pub length: u32,
    pub name: &'static str,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u32, name: &'static str) -> Self {
        Self { length, name }
    }
}

/// A handle to a builtin function's heap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

impl BuiltinFunction {
    pub(crate) const fn _def() -> Self {
        BuiltinFunction(BuiltinFunctionIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }
}

impl From<BuiltinFunction> for Function {
    fn from(value: BuiltinFunction) -> Self {
        Function::BuiltinFunction(value)
    }
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

impl From<BuiltinFunction> for Value {
    fn from(value: BuiltinFunction) -> Self {
        Value::BuiltinFunction(value)
    }
}

impl TryFrom<Value> for BuiltinFunction {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::BuiltinFunction(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl FunctionInternalProperties for BuiltinFunction {
    fn get_name(self, agent: &Agent) -> String {
        agent[self].initial_name.unwrap_or(String::EMPTY_STRING)
    }

    fn get_length(self, agent: &Agent) -> u8 {
        agent[self].length
    }
}

impl InternalSlots for BuiltinFunction {
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

impl InternalMethods for BuiltinFunction {
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

    /// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Return ? BuiltinCallOrConstruct(F, thisArgument, argumentsList, undefined).
        builtin_call_or_construct(agent, self, this_value, arguments_list, None)
    }

    /// ### [10.3.2 \[\[Construct\]\] ( argumentsList, newTarget )](https://tc39.es/ecma262/#sec-built-in-function-objects-construct-argumentslist-newtarget)
    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments_list: ArgumentsList,
        new_target: Function,
    ) -> JsResult<Object> {
        // 1. Return ? BuiltinCallOrConstruct(F, UNINITIALIZED, argumentsList, newTarget).
        let result = builtin_call_or_construct(
            agent,
            self,
            Value::Undefined,
            arguments_list,
            Some(new_target),
        )?;
        // Builtin constructors in this engine always return an object.
        Ok(Object::try_from(result).unwrap())
    }
}

/// ### [10.3.3 BuiltinCallOrConstruct ( F, thisArgument, argumentsList, newTarget )](https://tc39.es/ecma262/#sec-builtincallorconstruct)
pub(crate) fn builtin_call_or_construct(
    agent: &mut Agent,
    f: BuiltinFunction,
    this_argument: Value,
    arguments_list: ArgumentsList,
    new_target: Option<Function>,
) -> JsResult<Value> {
    // 1. - 5. Prepare and push a new execution context for the call.
    let callee_context = ExecutionContext {
        function: Some(f.into_function()),
        realm: agent.current_realm_id(),
    };
    agent.execution_context_stack.push(callee_context);

    // 6. - 9. Let result be the Completion Record that is the result of
    //    evaluating F in a manner that conforms to the specification of F.
    let behaviour = agent[f].behaviour;
    let result = match behaviour {
        Behaviour::Regular(func) => {
            if new_target.is_some() {
                Err(agent.throw_exception(ExceptionType::TypeError, "Not a constructor"))
            } else {
                func(agent, this_argument, arguments_list)
            }
        }
        Behaviour::Constructor(func) => func(
            agent,
            this_argument,
            arguments_list,
            new_target.map(|target| target.into_object()),
        ),
    };

    // 10. Remove calleeContext from the execution context stack.
    agent.execution_context_stack.pop();

    // 11. Return ? result.
    result
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, … )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> BuiltinFunction {
    let initial_name = String::from_static_str(agent, args.name);
    agent.heap.create(BuiltinFunctionHeapData {
        object_index: None,
        length: args.length as u8,
        initial_name: Some(initial_name),
        behaviour,
    })
}

impl Index<BuiltinFunction> for Agent {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        &self.heap.builtin_functions[index]
    }
}

impl IndexMut<BuiltinFunction> for Agent {
    fn index_mut(&mut self, index: BuiltinFunction) -> &mut Self::Output {
        &mut self.heap.builtin_functions[index]
    }
}

impl Index<BuiltinFunction> for Vec<Option<BuiltinFunctionHeapData>> {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        self.get(index.get_index())
            .expect("BuiltinFunction out of bounds")
            .as_ref()
            .expect("BuiltinFunction slot empty")
    }
}

impl IndexMut<BuiltinFunction> for Vec<Option<BuiltinFunctionHeapData>> {
    fn index_mut(&mut self, index: BuiltinFunction) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("BuiltinFunction out of bounds")
            .as_mut()
            .expect("BuiltinFunction slot empty")
    }
}

impl CreateHeapData<BuiltinFunctionHeapData, BuiltinFunction> for Heap {
    fn create(&mut self, data: BuiltinFunctionHeapData) -> BuiltinFunction {
        self.builtin_functions.push(Some(data));
        BuiltinFunction(BuiltinFunctionIndex::last(&self.builtin_functions))
    }
}
