// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::atomic::{AtomicUsize, Ordering};

use aster_vm::{
    ecmascript::{
        abstract_operations::operations_on_objects::{create_data_property_or_throw, get},
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary::ordinary_object_create_with_intrinsics,
        },
        execution::{
            Agent, HostHooks, JsResult, Options, ProtoIntrinsics, get_global_object,
            initialize_default_realm,
        },
        types::{IntoValue, Object, PropertyKey, Value},
    },
    promisify::{PromisifyOptions, promisify_all},
};

#[derive(Debug, Default)]
struct CountingHooks {
    warnings: AtomicUsize,
}

impl HostHooks for CountingHooks {
    fn emit_deprecation_warning(&self, _message: &str) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
    }
}

fn agent_with_aliases() -> (Agent, &'static CountingHooks) {
    let hooks: &'static CountingHooks = Box::leak(Box::new(CountingHooks::default()));
    let mut agent = Agent::new(Options::new(), hooks);
    initialize_default_realm(&mut agent);
    (agent, hooks)
}

fn noop(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::Undefined)
}

fn object_with_noop_method(agent: &mut Agent) -> Object {
    let target = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
    let function = create_builtin_function(
        agent,
        Behaviour::Regular(noop),
        BuiltinFunctionArgs::new(1, "work"),
    );
    let key = PropertyKey::from_static_str(agent, "work");
    create_data_property_or_throw(agent, target, key, function.into_value()).unwrap();
    target
}

fn global_prototype(agent: &mut Agent, constructor_name: &'static str) -> Value {
    let global = get_global_object(agent);
    let constructor_key = PropertyKey::from_static_str(agent, constructor_name);
    let constructor = get(agent, global, constructor_key).unwrap();
    let constructor = Object::try_from(constructor).unwrap();
    let prototype_key = PropertyKey::from_static_str(agent, "prototype");
    get(agent, constructor, prototype_key).unwrap()
}

/// Snapshotting the protected set scans the global object. The deprecated
/// alias accessors must not fire during that scan.
#[test]
fn guard_snapshot_reads_no_deprecated_aliases() {
    let (mut agent, hooks) = agent_with_aliases();
    let target = object_with_noop_method(&mut agent);

    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();
    assert_eq!(hooks.warnings.load(Ordering::Relaxed), 0);

    // The alias accessors themselves still work and still warn.
    let global = get_global_object(&agent);
    let legacy_key = PropertyKey::from_static_str(&mut agent, "GLOBAL");
    let value = get(&mut agent, global, legacy_key).unwrap();
    assert_eq!(value, global.into_value());
    assert_eq!(hooks.warnings.load(Ordering::Relaxed), 1);

    let root_key = PropertyKey::from_static_str(&mut agent, "root");
    get(&mut agent, global, root_key).unwrap();
    assert_eq!(hooks.warnings.load(Ordering::Relaxed), 2);
}

#[test]
fn every_global_constructor_prototype_is_protected() {
    let (mut agent, _) = agent_with_aliases();
    let options = PromisifyOptions::default();
    for name in ["Object", "Error", "RangeError", "TypeError", "Promise"] {
        let prototype = global_prototype(&mut agent, name);
        assert!(
            promisify_all(&mut agent, prototype, &options).is_err(),
            "{name}.prototype should be protected"
        );
    }
}

/// The protected set is snapshotted on first use; constructors added to
/// the global afterwards are not covered by it.
#[test]
fn protected_set_is_snapshotted_once() {
    let (mut agent, _) = agent_with_aliases();
    let target = object_with_noop_method(&mut agent);
    let options = PromisifyOptions::default();
    promisify_all(&mut agent, target.into_value(), &options).unwrap();

    let global = get_global_object(&agent);
    let constructor = create_builtin_function(
        &mut agent,
        Behaviour::Regular(noop),
        BuiltinFunctionArgs::new(1, "Thing"),
    );
    let late_prototype =
        ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let prototype_key = PropertyKey::from_static_str(&mut agent, "prototype");
    create_data_property_or_throw(
        &mut agent,
        constructor,
        prototype_key,
        late_prototype.into_value(),
    )
    .unwrap();
    let thing_key = PropertyKey::from_static_str(&mut agent, "Thing");
    create_data_property_or_throw(&mut agent, global, thing_key, constructor.into_value()).unwrap();

    assert!(promisify_all(&mut agent, late_prototype.into_value(), &options).is_ok());
}

/// Lowercase global bindings do not contribute protected prototypes, even
/// when they are functions with a `prototype` property.
#[test]
fn lowercase_global_functions_are_not_protected() {
    let (mut agent, _) = agent_with_aliases();
    let global = get_global_object(&agent);
    let helper = create_builtin_function(
        &mut agent,
        Behaviour::Regular(noop),
        BuiltinFunctionArgs::new(1, "helper"),
    );
    let helper_prototype =
        ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let prototype_key = PropertyKey::from_static_str(&mut agent, "prototype");
    create_data_property_or_throw(
        &mut agent,
        helper,
        prototype_key,
        helper_prototype.into_value(),
    )
    .unwrap();
    let helper_key = PropertyKey::from_static_str(&mut agent, "helper");
    create_data_property_or_throw(&mut agent, global, helper_key, helper.into_value()).unwrap();

    let options = PromisifyOptions::default();
    assert!(promisify_all(&mut agent, helper_prototype.into_value(), &options).is_ok());
}
