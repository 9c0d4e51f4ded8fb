// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{get, has_property},
            type_conversion::to_string,
        },
        builtins::{ArgumentsList, Behaviour, Builtin, error::ErrorHeapData},
        execution::{Agent, ExceptionType, JsResult},
        static_strings,
        types::{IntoValue, Object, PropertyKey, Value},
    },
    heap::CreateHeapData,
};

/// ### [20.5.1 The Error Constructor](https://tc39.es/ecma262/#sec-error-constructor)
pub(crate) struct ErrorConstructor;

impl Builtin for ErrorConstructor {
    const NAME: &'static str = "Error";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::constructor);
}

impl ErrorConstructor {
    /// ### [20.5.1.1 Error ( message \[ , options \] )](https://tc39.es/ecma262/#sec-error-message)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        _new_target: Option<Object>,
    ) -> JsResult<Value> {
        base_error_constructor(agent, arguments, ExceptionType::Error)
    }
}

/// The shared behavior of the `Error` constructor and the native error
/// constructors: only the kind of the created error differs.
pub(crate) fn base_error_constructor(
    agent: &mut Agent,
    arguments: ArgumentsList,
    kind: ExceptionType,
) -> JsResult<Value> {
    // 1. - 3. NewTarget handling does not apply: an error's prototype
    //    follows its kind.
    // 4. If message is not undefined, then
    let message = arguments.get(0);
    let message = if message.is_undefined() {
        None
    } else {
        // a. Let msg be ? ToString(message).
        Some(to_string(agent, message)?)
    };

    // 5. Perform ? InstallErrorCause(O, options).
    let options = arguments.get(1);
    let cause = if let Ok(options) = Object::try_from(options) {
        let cause_key = PropertyKey::from(static_strings::CAUSE);
        // 20.5.8.1: only install cause when the options object has one.
        if has_property(agent, options, cause_key)? {
            Some(get(agent, options, cause_key)?)
        } else {
            None
        }
    } else {
        None
    };

    // 6. Return O.
    let error = agent.heap.create(ErrorHeapData::new(kind, message, cause));
    Ok(error.into_value())
}
