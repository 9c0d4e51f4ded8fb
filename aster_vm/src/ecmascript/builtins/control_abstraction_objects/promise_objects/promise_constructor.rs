// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::promise_abstract_operations::{
    promise_capability_records::PromiseCapability,
    promise_resolving_functions::{PromiseResolvingFunctionHeapData, PromiseResolvingFunctionType},
};
use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::call_function, testing_and_comparison::is_callable,
        },
        builtins::{ArgumentsList, Behaviour, Builtin},
        execution::{Agent, ExceptionType, JsResult},
        types::{Function, IntoValue, Object, Value},
    },
    heap::CreateHeapData,
};

/// ### [27.2.3 The Promise Constructor](https://tc39.es/ecma262/#sec-promise-constructor)
pub(crate) struct PromiseConstructor;

impl Builtin for PromiseConstructor {
    const NAME: &'static str = "Promise";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::constructor);
}

impl PromiseConstructor {
    /// ### [27.2.3.1 Promise ( executor )](https://tc39.es/ecma262/#sec-promise-executor)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is undefined, throw a TypeError exception.
        if new_target.is_none() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Promise Constructor requires 'new'",
            ));
        }
        // 2. If IsCallable(executor) is false, throw a TypeError exception.
        let executor = arguments.get(0);
        if !is_callable(executor) {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "Not a callable object")
            );
        }
        let executor = Function::try_from(executor).unwrap();

        // 3. - 7. Create the promise through a capability record.
        let capability = PromiseCapability::new(agent);
        let promise = capability.promise();

        // 8. Let resolvingFunctions be CreateResolvingFunctions(promise).
        let resolve = agent.heap.create(PromiseResolvingFunctionHeapData {
            object_index: None,
            promise_capability: capability.clone(),
            resolve_type: PromiseResolvingFunctionType::Resolve,
        });
        let reject = agent.heap.create(PromiseResolvingFunctionHeapData {
            object_index: None,
            promise_capability: capability.clone(),
            resolve_type: PromiseResolvingFunctionType::Reject,
        });

        // 9. Let completion be Completion(Call(executor, undefined,
        //    « resolvingFunctions.[[Resolve]], resolvingFunctions.[[Reject]] »)).
        let arguments = [resolve.into_value(), reject.into_value()];
        let result = call_function(
            agent,
            executor,
            Value::Undefined,
            Some(ArgumentsList::new(&arguments)),
        );

        // 10. If completion is an abrupt completion, then
        if let Err(error) = result {
            // a. Perform ? Call(resolvingFunctions.[[Reject]], undefined,
            //    « completion.[[Value]] »).
            capability.reject(agent, error.value());
        }

        // 11. Return promise.
        Ok(promise.into_value())
    }
}
