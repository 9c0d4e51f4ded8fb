// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object promisification.
//!
//! [promisify_all] walks an object's own properties and, next to every
//! callback-style member it finds, installs a promise-returning sibling
//! under a suffixed name. Function-valued data properties get a wrapped
//! function; accessors with a getter get a wrapping accessor that
//! promisifies whatever the original getter answers. The original members
//! are left in place.

mod builtin_guard;
mod classify;
mod install;

use crate::ecmascript::{
    execution::{Agent, ExceptionType, JsResult},
    types::{InternalMethods, Object, Value},
};
use classify::PropertyCategory;

/// Configuration of one promisification pass.
#[derive(Debug, Clone)]
pub struct PromisifyOptions {
    /// The string appended to each transformed property's name.
    pub suffix: std::string::String,
    /// Replaces the built-in err-first adapter: called with a
    /// callback-style function, its return value is installed verbatim.
    pub promisifier: Option<crate::ecmascript::types::Function>,
    /// Also transform the target's prototype chain.
    pub proto: bool,
    /// Transform constructor-shaped properties through their `prototype`
    /// object instead of aliasing the constructor itself.
    pub classes: bool,
}

impl Default for PromisifyOptions {
    fn default() -> Self {
        Self {
            suffix: "Async".to_owned(),
            promisifier: None,
            proto: false,
            classes: false,
        }
    }
}

/// Install promise-returning siblings next to every callback-style member
/// of `target`, returning the same (mutated) target.
///
/// The target must be an object or callable, and must not be one of the
/// realm's built-in constructor prototypes.
pub fn promisify_all(
    agent: &mut Agent,
    target: Value,
    options: &PromisifyOptions,
) -> JsResult<Value> {
    let Ok(object) = Object::try_from(target) else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Cannot promisify non-object"));
    };
    // A direct call on a protected prototype is refused outright; during a
    // proto walk the guard instead stops the recursion quietly.
    if builtin_guard::is_protected_builtin(agent, object)? {
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot promisify built-in prototype",
        ));
    }
    promisify_object(agent, object, options)?;
    Ok(target)
}

fn promisify_object(agent: &mut Agent, target: Object, options: &PromisifyOptions) -> JsResult<()> {
    // The own-key list is snapshotted up front: members installed during
    // the pass are not themselves visited.
    let keys = target.internal_own_property_keys(agent)?;
    for key in keys {
        match classify::classify_property(agent, target, key)? {
            PropertyCategory::FunctionValue { function } => {
                if options.classes
                    && let Some(prototype) = classify::constructor_prototype(agent, function)?
                {
                    // A constructor-shaped property is promisified through
                    // its prototype; no suffixed alias of the constructor
                    // itself is created.
                    promisify_all(agent, prototype.into(), options)?;
                } else {
                    install::install_function_member(agent, target, key, function, options)?;
                }
            }
            PropertyCategory::AccessorWithGetter {
                get,
                set,
                enumerable,
                configurable,
            } => {
                install::install_accessor_member(
                    agent,
                    target,
                    key,
                    get,
                    set,
                    enumerable,
                    configurable,
                    options,
                )?;
            }
            // Setter-only accessors, non-function data and symbol-keyed
            // properties pass through untouched.
            PropertyCategory::AccessorWithoutGetter
            | PropertyCategory::NonFunctionData
            | PropertyCategory::SymbolKeyed => {}
        }
    }

    if options.proto && let Some(prototype) = target.internal_get_prototype_of(agent)? {
        // The walk stops silently at built-in prototypes rather than
        // failing the whole call.
        if !builtin_guard::is_protected_builtin(agent, prototype)? {
            promisify_object(agent, prototype, options)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{PromisifyOptions, promisify_all};
    use crate::{
        ecmascript::{
            abstract_operations::operations_on_objects::create_data_property_or_throw,
            builtins::{
                ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
                ordinary::ordinary_object_create_with_intrinsics,
            },
            execution::{
                Agent, DefaultHostHooks, JsResult, Options, ProtoIntrinsics,
                initialize_default_realm,
            },
            types::{InternalMethods, IntoValue, PropertyKey, SymbolHeapData, Value},
        },
        heap::CreateHeapData,
    };

    fn noop(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::Undefined)
    }

    #[test]
    fn symbol_keyed_functions_are_skipped() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        initialize_default_realm(&mut agent);
        let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));

        let symbol = agent.heap.create(SymbolHeapData { descriptor: None });
        let function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(noop),
            BuiltinFunctionArgs::new(1, "hidden"),
        );
        create_data_property_or_throw(
            &mut agent,
            target,
            PropertyKey::Symbol(symbol),
            function.into_value(),
        )
        .unwrap();

        promisify_all(&mut agent, target.into_value(), &PromisifyOptions::default()).unwrap();

        let keys = target.internal_own_property_keys(&mut agent).unwrap();
        assert_eq!(keys, vec![PropertyKey::Symbol(symbol)]);
    }
}
