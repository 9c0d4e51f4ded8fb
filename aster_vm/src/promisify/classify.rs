// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::operations_on_objects::get,
    execution::{Agent, JsResult},
    types::{Function, InternalMethods, Object, PropertyKey},
};

/// What a single own property looks like to the promisification pass.
#[derive(Debug)]
pub(super) enum PropertyCategory {
    /// A data property holding a callable value.
    FunctionValue { function: Function },
    /// An accessor with a getter, callable or not. The setter and the
    /// attribute bits are carried over to the installed sibling.
    AccessorWithGetter {
        get: Function,
        set: Option<Function>,
        enumerable: bool,
        configurable: bool,
    },
    /// A setter-only accessor.
    AccessorWithoutGetter,
    /// A data property holding anything that isn't callable, or a property
    /// deleted between snapshotting the key list and reaching it.
    NonFunctionData,
    /// Symbol-keyed properties are never transformed.
    SymbolKeyed,
}

pub(super) fn classify_property(
    agent: &mut Agent,
    target: Object,
    key: PropertyKey,
) -> JsResult<PropertyCategory> {
    if key.is_symbol() {
        return Ok(PropertyCategory::SymbolKeyed);
    }
    let Some(descriptor) = target.internal_get_own_property(agent, key)? else {
        return Ok(PropertyCategory::NonFunctionData);
    };
    if let Some(get) = descriptor.get {
        return Ok(PropertyCategory::AccessorWithGetter {
            get,
            set: descriptor.set,
            enumerable: descriptor.enumerable.unwrap_or(false),
            configurable: descriptor.configurable.unwrap_or(false),
        });
    }
    if descriptor.set.is_some() {
        return Ok(PropertyCategory::AccessorWithoutGetter);
    }
    match descriptor.value.and_then(|value| Function::try_from(value).ok()) {
        Some(function) => Ok(PropertyCategory::FunctionValue { function }),
        None => Ok(PropertyCategory::NonFunctionData),
    }
}

/// If `function` is shaped like a class constructor, return its `prototype`
/// object.
///
/// The shape test is nominal: a non-empty name starting with an uppercase
/// letter, plus an object-valued `prototype` property. Lowercase factory
/// functions and prototype-less callables stay in the plain-function lane.
pub(super) fn constructor_prototype(
    agent: &mut Agent,
    function: Function,
) -> JsResult<Option<Object>> {
    let name = function.name(agent);
    let starts_uppercase = name
        .as_str(agent)
        .chars()
        .next()
        .is_some_and(char::is_uppercase);
    if !starts_uppercase {
        return Ok(None);
    }
    let prototype_key = PropertyKey::from_static_str(agent, "prototype");
    let prototype = get(agent, function, prototype_key)?;
    Ok(Object::try_from(prototype).ok())
}
