// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. Wrapper objects for primitives are out of scope for this engine,
//! so [to_object] only accepts values that already are objects.

use super::{
    operations_on_objects::{call_function, get},
    testing_and_comparison::is_callable,
};
use crate::ecmascript::{
    execution::{Agent, ExceptionType, JsResult},
    static_strings,
    types::{Function, Number, Object, PropertyKey, String, Value},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// Without well-known symbols there is no `@@toPrimitive` lookup; objects go
/// straight to [ordinary_to_primitive].
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    if let Ok(input) = Object::try_from(input) {
        // b. If preferredType is not present, let hint be NUMBER.
        // c. - d. Otherwise the hint follows preferredType.
        // e. Return ? OrdinaryToPrimitive(input, hint).
        ordinary_to_primitive(agent, input, preferred_type.unwrap_or(PreferredType::Number))
    } else {
        // 2. Return input.
        Ok(input)
    }
}

/// ### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
pub fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from_static_str(agent, "toString");
    let value_of_key = PropertyKey::from(static_strings::VALUE_OF);
    // 1. - 2. Order methodNames by hint.
    let method_names = if hint == PreferredType::String {
        [to_string_key, value_of_key]
    } else {
        [value_of_key, to_string_key]
    };

    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if is_callable(method) {
            // i. Let result be ? Call(method, O).
            let method = Function::try_from(method).unwrap();
            let result = call_function(agent, method, o.into(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }

    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(ExceptionType::TypeError, "Could not convert to primitive value"))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
pub fn to_boolean(argument: Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(value) => value,
        // 3. If argument is ... undefined, null, +0, -0, NaN, or the empty
        //    String, return false.
        Value::Undefined | Value::Null => false,
        Value::Integer(value) => value.into_i64() != 0,
        Value::Float(value) => value != 0.0 && !value.is_nan(),
        // Zero and NaN always fit an immediate number variant, so a heap
        // number is never falsy.
        Value::Number(_) => true,
        Value::SmallString(value) => !value.is_empty(),
        Value::String(_) => true,
        // 4. Return true.
        _ => true,
    }
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(String::from_static_str(agent, "undefined")),
        // 4. If argument is null, return "null".
        Value::Null => Ok(String::from_small_string("null")),
        // 5. - 6. Booleans.
        Value::Boolean(true) => Ok(String::from_small_string("true")),
        Value::Boolean(false) => Ok(String::from_small_string("false")),
        // 1. If argument is a String, return argument.
        Value::String(data) => Ok(data.into()),
        Value::SmallString(data) => Ok(data.into()),
        // 2. If argument is a Symbol, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol to a String",
        )),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Number(_) | Value::Integer(_) | Value::Float(_) => {
            Ok(Number::to_string_radix_10(agent, Number::new(argument)))
        }
        // 9. Assert: argument is an Object.
        _ => {
            // 10. Let primValue be ? ToPrimitive(argument, STRING).
            let primitive = to_primitive(agent, argument, Some(PreferredType::String))?;
            // 11. Return ? ToString(primValue).
            to_string(agent, primitive)
        }
    }
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// Primitive wrapper objects are not part of this engine, so any primitive
/// argument throws.
pub fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    match argument {
        Value::Undefined | Value::Null => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert undefined or null to object",
        )),
        _ => Object::try_from(argument).map_err(|_| {
            agent.throw_exception(
                ExceptionType::TypeError,
                "Primitive wrapper objects are not supported",
            )
        }),
    }
}
