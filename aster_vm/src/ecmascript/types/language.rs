// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod function;
mod into_value;
mod number;
mod object;
mod string;
mod symbol;
mod value;

pub(crate) use function::{
    BuiltinFunctionHeapData, FunctionInternalProperties, function_create_backing_object,
    function_internal_define_own_property, function_internal_delete, function_internal_get,
    function_internal_get_own_property, function_internal_has_property,
    function_internal_own_property_keys, function_internal_set,
};
pub use function::{Function, IntoFunction};
pub use into_value::IntoValue;
pub use number::{HeapNumber, Number, NumberHeapData};
pub use object::{
    InternalMethods, InternalSlots, IntoObject, Object, ObjectHeapData, OrdinaryObject,
    PropertyKey,
};
pub use string::{HeapString, String, StringHeapData};
pub use symbol::{Symbol, SymbolHeapData};
pub use value::Value;
