// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [20.5.6 NativeError Object Structure](https://tc39.es/ecma262/#sec-nativeerror-object-structure)

use super::error_constructor::base_error_constructor;
use crate::ecmascript::{
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, ExceptionType, JsResult},
    types::{Object, Value},
};

pub(crate) struct RangeErrorConstructor;

impl Builtin for RangeErrorConstructor {
    const NAME: &'static str = "RangeError";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::constructor);
}

impl RangeErrorConstructor {
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        _new_target: Option<Object>,
    ) -> JsResult<Value> {
        base_error_constructor(agent, arguments, ExceptionType::RangeError)
    }
}

pub(crate) struct TypeErrorConstructor;

impl Builtin for TypeErrorConstructor {
    const NAME: &'static str = "TypeError";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::constructor);
}

impl TypeErrorConstructor {
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        _new_target: Option<Object>,
    ) -> JsResult<Value> {
        base_error_constructor(agent, arguments, ExceptionType::TypeError)
    }
}
