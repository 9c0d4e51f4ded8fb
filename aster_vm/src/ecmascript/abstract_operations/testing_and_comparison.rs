// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::{
    execution::Agent,
    types::{Number, String, Value},
};

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
pub fn is_callable(argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    argument.is_function()
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
pub fn same_value(agent: &Agent, x: Value, y: Value) -> bool {
    let x_is_number = x.is_number();
    // 1. If Type(x) is not Type(y), return false.
    if x_is_number != y.is_number() {
        return false;
    }

    // 2. If x is a Number, then
    if x_is_number {
        // a. Return Number::sameValue(x, y).
        let x = Number::new(x);
        let y = Number::new(y);
        return x.same_value(agent, y);
    }

    // 3. Return SameValueNonNumber(x, y).
    same_value_non_number(agent, x, y)
}

/// ### [7.2.12 SameValueNonNumber ( x, y )](https://tc39.es/ecma262/#sec-samevaluenonnumber)
fn same_value_non_number(agent: &Agent, x: Value, y: Value) -> bool {
    // Interning means two heap strings with equal content share a handle,
    // but a small string never equals a heap string by handle alone.
    if let (Ok(x), Ok(y)) = (String::try_from(x), String::try_from(y)) {
        return x.as_str(agent) == y.as_str(agent);
    }

    // Booleans, undefined, null, symbols and objects compare by identity.
    match (x, y) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x == y,
        (Value::BuiltinFunction(x), Value::BuiltinFunction(y)) => x == y,
        (Value::BuiltinPromiseResolvingFunction(x), Value::BuiltinPromiseResolvingFunction(y)) => {
            x == y
        }
        (Value::PromisifiedFunction(x), Value::PromisifiedFunction(y)) => x == y,
        (Value::PromisifiedGetter(x), Value::PromisifiedGetter(y)) => x == y,
        (Value::Error(x), Value::Error(y)) => x == y,
        (Value::Promise(x), Value::Promise(y)) => x == y,
        _ => false,
    }
}
