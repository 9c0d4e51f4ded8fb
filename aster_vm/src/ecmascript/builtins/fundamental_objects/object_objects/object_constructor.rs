// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_object,
    builtins::{
        ArgumentsList, Behaviour, Builtin, ordinary::ordinary_object_create_with_intrinsics,
    },
    execution::{Agent, JsResult, ProtoIntrinsics},
    types::{IntoValue, Object, Value},
};

/// ### [20.1.1 The Object Constructor](https://tc39.es/ecma262/#sec-object-constructor)
pub(crate) struct ObjectConstructor;

impl Builtin for ObjectConstructor {
    const NAME: &'static str = "Object";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::constructor);
}

impl ObjectConstructor {
    /// ### [20.1.1.1 Object ( \[ value \] )](https://tc39.es/ecma262/#sec-object-value)
    fn constructor(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        _new_target: Option<Object>,
    ) -> JsResult<Value> {
        let value = arguments.get(0);
        // 2. If value is either undefined or null, return
        //    OrdinaryObjectCreate(%Object.prototype%).
        if value.is_undefined() || value.is_null() {
            Ok(
                ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object))
                    .into_value(),
            )
        } else {
            // 3. Return ! ToObject(value).
            Ok(to_object(agent, value)?.into_value())
        }
    }
}
