// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub use language::{
    Function, InternalMethods, InternalSlots, IntoFunction, IntoObject, IntoValue, Number, Object,
    OrdinaryObject, PropertyKey, String, Symbol, Value,
};
pub(crate) use language::{
    BuiltinFunctionHeapData, FunctionInternalProperties, HeapNumber, HeapString, NumberHeapData,
    ObjectHeapData, StringHeapData, SymbolHeapData, function_create_backing_object,
    function_internal_define_own_property, function_internal_delete, function_internal_get,
    function_internal_get_own_property, function_internal_has_property,
    function_internal_own_property_keys, function_internal_set,
};
pub use spec::PropertyDescriptor;
