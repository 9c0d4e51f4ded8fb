// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{operations_on_objects::get, type_conversion::to_string},
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, ExceptionType, JsResult},
    static_strings,
    types::{IntoValue, Object, PropertyKey, String, Value},
};

/// ### [20.5.3.4 Error.prototype.toString ( )](https://tc39.es/ecma262/#sec-error.prototype.tostring)
pub(crate) struct ErrorPrototypeToString;

impl Builtin for ErrorPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(Self::to_string);
}

impl ErrorPrototypeToString {
    fn to_string(
        agent: &mut Agent,
        this_value: Value,
        _arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. If O is not an Object, throw a TypeError exception.
        let Ok(o) = Object::try_from(this_value) else {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "'this' is not an object")
            );
        };

        // 3. Let name be ? Get(O, "name").
        let name = get(agent, o, PropertyKey::from(static_strings::NAME))?;
        // 4. If name is undefined, set name to "Error"; otherwise set name
        //    to ? ToString(name).
        let name = if name.is_undefined() {
            static_strings::ERROR
        } else {
            to_string(agent, name)?
        };

        // 5. Let msg be ? Get(O, "message").
        let message = get(agent, o, PropertyKey::from(static_strings::MESSAGE))?;
        // 6. If msg is undefined, set msg to the empty String; otherwise set
        //    msg to ? ToString(msg).
        let message = if message.is_undefined() {
            String::EMPTY_STRING
        } else {
            to_string(agent, message)?
        };

        // 7. If name is the empty String, return msg.
        if name.is_empty_string() {
            return Ok(message.into_value());
        }
        // 8. If msg is the empty String, return name.
        if message.is_empty_string() {
            return Ok(name.into_value());
        }
        // 9. Return the string-concatenation of name, ": ", and msg.
        let separator = String::from_small_string(": ");
        Ok(String::concat(agent, [name, separator, message]).into_value())
    }
}
