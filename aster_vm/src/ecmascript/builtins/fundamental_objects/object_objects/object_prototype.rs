// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_object,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, JsResult},
    types::{IntoValue, String, Value},
};

/// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
pub(crate) struct ObjectPrototypeToString;

impl Builtin for ObjectPrototypeToString {
    const NAME: &'static str = "toString";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(Self::to_string);
}

impl ObjectPrototypeToString {
    fn to_string(
        agent: &mut Agent,
        this_value: Value,
        _arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. - 14. Pick the builtin tag by the kind of this value. Without
        //    @@toStringTag support the tag fully determines the result.
        let tag = match this_value {
            Value::Undefined => "[object Undefined]",
            Value::Null => "[object Null]",
            Value::BuiltinFunction(_)
            | Value::BuiltinPromiseResolvingFunction(_)
            | Value::PromisifiedFunction(_)
            | Value::PromisifiedGetter(_) => "[object Function]",
            Value::Error(_) => "[object Error]",
            _ => "[object Object]",
        };
        // 15. - 17. Return the string-concatenation of "[object ", tag, and "]".
        Ok(String::from_static_str(agent, tag).into_value())
    }
}

/// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
pub(crate) struct ObjectPrototypeValueOf;

impl Builtin for ObjectPrototypeValueOf {
    const NAME: &'static str = "valueOf";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(Self::value_of);
}

impl ObjectPrototypeValueOf {
    fn value_of(agent: &mut Agent, this_value: Value, _arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        Ok(to_object(agent, this_value)?.into_value())
    }
}
