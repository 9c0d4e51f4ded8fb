// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::atomic::{AtomicUsize, Ordering};

use aster_vm::{
    ecmascript::{
        abstract_operations::operations_on_objects::{
            call, call_function, create_data_property_or_throw, define_property_or_throw, get,
            has_own_property,
        },
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary::ordinary_object_create_with_intrinsics,
            promise::{Promise, PromiseState},
        },
        execution::{
            Agent, DefaultHostHooks, ExceptionType, JsResult, Options, ProtoIntrinsics,
            get_global_object, initialize_default_realm,
        },
        types::{
            Function, InternalMethods, IntoValue, Object, PropertyDescriptor, PropertyKey, String,
            Value,
        },
    },
    promisify::{PromisifyOptions, promisify_all},
};

fn test_agent() -> Agent {
    let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
    initialize_default_realm(&mut agent);
    agent
}

/// `echo(value, cb)` calls `cb(null, value)`.
fn echo(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
    let value = args.get(0);
    let callback = Function::try_from(args.get(1)).unwrap();
    let arguments = [Value::Null, value];
    call_function(
        agent,
        callback,
        Value::Undefined,
        Some(ArgumentsList::new(&arguments)),
    )?;
    Ok(Value::Undefined)
}

/// `fail(cb)` calls `cb("boom")`.
fn fail(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
    let callback = Function::try_from(args.get(0)).unwrap();
    let error = String::from_str(agent, "boom").into_value();
    let arguments = [error];
    call_function(
        agent,
        callback,
        Value::Undefined,
        Some(ArgumentsList::new(&arguments)),
    )?;
    Ok(Value::Undefined)
}

fn throw_sync(agent: &mut Agent, _this: Value, _args: ArgumentsList) -> JsResult<Value> {
    Err(agent.throw_exception(ExceptionType::Error, "sync failure"))
}

/// Reads `tag` off the receiver and echoes it through the callback.
fn read_tag(agent: &mut Agent, this: Value, args: ArgumentsList) -> JsResult<Value> {
    let this_object = Object::try_from(this).unwrap();
    let tag_key = PropertyKey::from_static_str(agent, "tag");
    let tag = get(agent, this_object, tag_key)?;
    let callback = Function::try_from(args.get(0)).unwrap();
    let arguments = [Value::Null, tag];
    call_function(
        agent,
        callback,
        Value::Undefined,
        Some(ArgumentsList::new(&arguments)),
    )?;
    Ok(Value::Undefined)
}

fn add_method(
    agent: &mut Agent,
    target: Object,
    name: &'static str,
    length: u32,
    behaviour: Behaviour,
) {
    let function = create_builtin_function(agent, behaviour, BuiltinFunctionArgs::new(length, name));
    let key = PropertyKey::from_static_str(agent, name);
    create_data_property_or_throw(agent, target, key, function.into_value()).unwrap();
}

fn object_with_echo(agent: &mut Agent) -> Object {
    let target = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
    add_method(agent, target, "echo", 2, Behaviour::Regular(echo));
    target
}

fn call_wrapper(
    agent: &mut Agent,
    target: Object,
    name: &'static str,
    args: &[Value],
) -> JsResult<Promise> {
    let key = PropertyKey::from_static_str(agent, name);
    let wrapper = get(agent, target, key)?;
    let promise_value = call(
        agent,
        wrapper,
        target.into_value(),
        Some(ArgumentsList::new(args)),
    )?;
    Ok(Promise::try_from(promise_value).unwrap())
}

#[test]
fn installs_promise_returning_sibling() {
    let mut agent = test_agent();
    let target = object_with_echo(&mut agent);

    let result = promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();
    assert_eq!(result, target.into_value());

    let original_key = PropertyKey::from_static_str(&mut agent, "echo");
    let sibling_key = PropertyKey::from_static_str(&mut agent, "echoAsync");
    assert!(has_own_property(&mut agent, target, original_key).unwrap());
    assert!(has_own_property(&mut agent, target, sibling_key).unwrap());

    let promise = call_wrapper(&mut agent, target, "echoAsync", &[Value::from(7)]).unwrap();
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(7)
        }
    );
}

#[test]
fn wrapper_passes_receiver_through() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_method(&mut agent, target, "readTag", 1, Behaviour::Regular(read_tag));
    let tag_key = PropertyKey::from_static_str(&mut agent, "tag");
    create_data_property_or_throw(&mut agent, target, tag_key, Value::from(5)).unwrap();

    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let promise = call_wrapper(&mut agent, target, "readTagAsync", &[]).unwrap();
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(5)
        }
    );
}

#[test]
fn wrapper_reports_suffixed_name_and_shortened_length() {
    let mut agent = test_agent();
    let target = object_with_echo(&mut agent);
    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "echoAsync");
    let wrapper = get(&mut agent, target, sibling_key).unwrap();
    let wrapper = Object::try_from(wrapper).unwrap();

    let name_key = PropertyKey::from_static_str(&mut agent, "name");
    let name = get(&mut agent, wrapper, name_key).unwrap();
    let expected = String::from_static_str(&mut agent, "echoAsync").into_value();
    assert_eq!(name, expected);

    // The callback parameter no longer counts.
    let length_key = PropertyKey::from_static_str(&mut agent, "length");
    let length = get(&mut agent, wrapper, length_key).unwrap();
    assert_eq!(length, Value::from(1));
}

#[test]
fn synchronous_throw_becomes_rejection() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_method(&mut agent, target, "boom", 1, Behaviour::Regular(throw_sync));
    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let promise = call_wrapper(&mut agent, target, "boomAsync", &[]).unwrap();
    let PromiseState::Rejected {
        promise_result,
        is_handled,
    } = promise.state(&agent)
    else {
        panic!("expected a rejected promise");
    };
    assert!(!is_handled);
    assert!(matches!(promise_result, Value::Error(_)));
}

#[test]
fn truthy_callback_error_argument_rejects() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_method(&mut agent, target, "fail", 1, Behaviour::Regular(fail));
    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let promise = call_wrapper(&mut agent, target, "failAsync", &[]).unwrap();
    let expected = String::from_str(&mut agent, "boom").into_value();
    assert_eq!(
        promise.state(&agent),
        PromiseState::Rejected {
            promise_result: expected,
            is_handled: false
        }
    );
}

#[test]
fn non_function_data_and_setter_only_members_are_skipped() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let answer_key = PropertyKey::from_static_str(&mut agent, "answer");
    create_data_property_or_throw(&mut agent, target, answer_key, Value::from(42)).unwrap();

    let setter = create_builtin_function(
        &mut agent,
        Behaviour::Regular(echo),
        BuiltinFunctionArgs::new(1, "hidden"),
    );
    let hidden_key = PropertyKey::from_static_str(&mut agent, "hidden");
    define_property_or_throw(
        &mut agent,
        target,
        hidden_key,
        PropertyDescriptor {
            set: Some(setter.into()),
            enumerable: Some(true),
            configurable: Some(true),
            ..Default::default()
        },
    )
    .unwrap();

    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let answer_sibling = PropertyKey::from_static_str(&mut agent, "answerAsync");
    let hidden_sibling = PropertyKey::from_static_str(&mut agent, "hiddenAsync");
    assert!(!has_own_property(&mut agent, target, answer_sibling).unwrap());
    assert!(!has_own_property(&mut agent, target, hidden_sibling).unwrap());
}

#[test]
fn integer_keys_get_string_siblings() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let function = create_builtin_function(
        &mut agent,
        Behaviour::Regular(echo),
        BuiltinFunctionArgs::new(2, "zero"),
    );
    create_data_property_or_throw(
        &mut agent,
        target,
        PropertyKey::from(0u32),
        function.into_value(),
    )
    .unwrap();

    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "0Async");
    assert!(has_own_property(&mut agent, target, sibling_key).unwrap());
}

#[test]
fn custom_suffix_names_the_sibling() {
    let mut agent = test_agent();
    let target = object_with_echo(&mut agent);
    let options = PromisifyOptions {
        suffix: "X".to_owned(),
        ..Default::default()
    };
    promisify_all(&mut agent, target.into_value(), &options).unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "echoX");
    let default_key = PropertyKey::from_static_str(&mut agent, "echoAsync");
    assert!(has_own_property(&mut agent, target, sibling_key).unwrap());
    assert!(!has_own_property(&mut agent, target, default_key).unwrap());
}

static PROMISIFIER_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Counts its invocations and returns a marker string instead of a
/// callable wrapper.
fn marker_promisifier(agent: &mut Agent, this: Value, args: ArgumentsList) -> JsResult<Value> {
    PROMISIFIER_CALLS.fetch_add(1, Ordering::Relaxed);
    // Called without a receiver, with the original function as the single
    // argument.
    assert_eq!(this, Value::Undefined);
    assert!(Function::try_from(args.get(0)).is_ok());
    assert_eq!(args.len(), 1);
    Ok(String::from_str(agent, "marker").into_value())
}

#[test]
fn custom_promisifier_runs_once_per_property_and_installs_verbatim() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_method(&mut agent, target, "first", 2, Behaviour::Regular(echo));
    add_method(&mut agent, target, "second", 1, Behaviour::Regular(fail));

    let promisifier = create_builtin_function(
        &mut agent,
        Behaviour::Regular(marker_promisifier),
        BuiltinFunctionArgs::new(1, "markerPromisifier"),
    );
    let options = PromisifyOptions {
        promisifier: Some(promisifier.into()),
        ..Default::default()
    };
    promisify_all(&mut agent, target.into_value(), &options).unwrap();

    assert_eq!(PROMISIFIER_CALLS.load(Ordering::Relaxed), 2);

    // The non-callable return value lands as-is under the suffixed name.
    let sibling_key = PropertyKey::from_static_str(&mut agent, "firstAsync");
    let installed = get(&mut agent, target, sibling_key).unwrap();
    let marker = String::from_str(&mut agent, "marker").into_value();
    assert_eq!(installed, marker);
}

#[test]
fn promisifying_twice_overwrites_the_sibling() {
    let mut agent = test_agent();
    let target = object_with_echo(&mut agent);
    let options = PromisifyOptions::default();
    promisify_all(&mut agent, target.into_value(), &options).unwrap();
    promisify_all(&mut agent, target.into_value(), &options).unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "echoAsync");
    let keys = target.internal_own_property_keys(&mut agent).unwrap();
    let sibling_count = keys
        .iter()
        .filter(|key| key.equals(&agent, sibling_key))
        .count();
    assert_eq!(sibling_count, 1);

    // First-pass wrappers are ordinary function-valued data properties, so
    // the second pass visits them too.
    let doubled_key = PropertyKey::from_static_str(&mut agent, "echoAsyncAsync");
    assert!(has_own_property(&mut agent, target, doubled_key).unwrap());

    let promise = call_wrapper(&mut agent, target, "echoAsync", &[Value::from(3)]).unwrap();
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(3)
        }
    );
}

#[test]
fn proto_walk_transforms_the_chain_and_stops_at_builtins() {
    let mut agent = test_agent();
    let proto = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_method(&mut agent, proto, "inherited", 2, Behaviour::Regular(echo));
    let child = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    child.internal_set_prototype_of(&mut agent, Some(proto)).unwrap();
    add_method(&mut agent, child, "own", 2, Behaviour::Regular(echo));

    let options = PromisifyOptions {
        proto: true,
        ..Default::default()
    };
    promisify_all(&mut agent, child.into_value(), &options).unwrap();

    let own_sibling = PropertyKey::from_static_str(&mut agent, "ownAsync");
    let inherited_sibling = PropertyKey::from_static_str(&mut agent, "inheritedAsync");
    assert!(has_own_property(&mut agent, child, own_sibling).unwrap());
    // The inherited sibling lives on the prototype, not the child.
    assert!(!has_own_property(&mut agent, child, inherited_sibling).unwrap());
    assert!(has_own_property(&mut agent, proto, inherited_sibling).unwrap());

    // The walk reached Object.prototype and stopped there quietly.
    let global = get_global_object(&agent);
    let object_key = PropertyKey::from_static_str(&mut agent, "Object");
    let object_constructor = get(&mut agent, global, object_key).unwrap();
    let object_constructor = Object::try_from(object_constructor).unwrap();
    let prototype_key = PropertyKey::from_static_str(&mut agent, "prototype");
    let object_prototype = get(&mut agent, object_constructor, prototype_key).unwrap();
    let object_prototype = Object::try_from(object_prototype).unwrap();
    let to_string_sibling = PropertyKey::from_static_str(&mut agent, "toStringAsync");
    assert!(!has_own_property(&mut agent, object_prototype, to_string_sibling).unwrap());
}

fn class_fixture(agent: &mut Agent, classes: bool) -> (Object, Object) {
    let parent = ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
    let constructor = create_builtin_function(
        agent,
        Behaviour::Regular(echo),
        BuiltinFunctionArgs::new(2, "Widget"),
    );
    let class_prototype =
        ordinary_object_create_with_intrinsics(agent, Some(ProtoIntrinsics::Object));
    add_method(agent, class_prototype, "ping", 1, Behaviour::Regular(echo));
    let prototype_key = PropertyKey::from_static_str(agent, "prototype");
    create_data_property_or_throw(
        agent,
        constructor,
        prototype_key,
        class_prototype.into_value(),
    )
    .unwrap();
    let widget_key = PropertyKey::from_static_str(agent, "Widget");
    create_data_property_or_throw(agent, parent, widget_key, constructor.into_value()).unwrap();

    let options = PromisifyOptions {
        classes,
        ..Default::default()
    };
    promisify_all(agent, parent.into_value(), &options).unwrap();
    (parent, class_prototype)
}

#[test]
fn classes_option_transforms_the_prototype_instead_of_aliasing() {
    let mut agent = test_agent();
    let (parent, class_prototype) = class_fixture(&mut agent, true);

    let constructor_sibling = PropertyKey::from_static_str(&mut agent, "WidgetAsync");
    assert!(!has_own_property(&mut agent, parent, constructor_sibling).unwrap());
    let method_sibling = PropertyKey::from_static_str(&mut agent, "pingAsync");
    assert!(has_own_property(&mut agent, class_prototype, method_sibling).unwrap());
}

#[test]
fn classes_off_treats_constructors_as_plain_functions() {
    let mut agent = test_agent();
    let (parent, class_prototype) = class_fixture(&mut agent, false);

    let constructor_sibling = PropertyKey::from_static_str(&mut agent, "WidgetAsync");
    assert!(has_own_property(&mut agent, parent, constructor_sibling).unwrap());
    let method_sibling = PropertyKey::from_static_str(&mut agent, "pingAsync");
    assert!(!has_own_property(&mut agent, class_prototype, method_sibling).unwrap());
}

#[test]
fn lowercase_factories_are_not_classes() {
    let mut agent = test_agent();
    let parent = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let factory = create_builtin_function(
        &mut agent,
        Behaviour::Regular(echo),
        BuiltinFunctionArgs::new(2, "makeWidget"),
    );
    let prototype_key = PropertyKey::from_static_str(&mut agent, "prototype");
    let stray_prototype =
        ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    create_data_property_or_throw(
        &mut agent,
        factory,
        prototype_key,
        stray_prototype.into_value(),
    )
    .unwrap();
    let factory_key = PropertyKey::from_static_str(&mut agent, "makeWidget");
    create_data_property_or_throw(&mut agent, parent, factory_key, factory.into_value()).unwrap();

    let options = PromisifyOptions {
        classes: true,
        ..Default::default()
    };
    promisify_all(&mut agent, parent.into_value(), &options).unwrap();

    let factory_sibling = PropertyKey::from_static_str(&mut agent, "makeWidgetAsync");
    assert!(has_own_property(&mut agent, parent, factory_sibling).unwrap());
}

#[test]
fn primitives_cannot_be_promisified() {
    let mut agent = test_agent();
    let options = PromisifyOptions::default();
    assert!(promisify_all(&mut agent, Value::Undefined, &options).is_err());
    assert!(promisify_all(&mut agent, Value::Null, &options).is_err());
    assert!(promisify_all(&mut agent, Value::from(5), &options).is_err());
    assert!(promisify_all(&mut agent, Value::from(true), &options).is_err());
}

#[test]
fn builtin_prototypes_cannot_be_promisified() {
    let mut agent = test_agent();
    let global = get_global_object(&agent);
    let object_key = PropertyKey::from_static_str(&mut agent, "Object");
    let object_constructor = get(&mut agent, global, object_key).unwrap();
    let object_constructor = Object::try_from(object_constructor).unwrap();
    let prototype_key = PropertyKey::from_static_str(&mut agent, "prototype");
    let object_prototype = get(&mut agent, object_constructor, prototype_key).unwrap();

    let options = PromisifyOptions::default();
    assert!(promisify_all(&mut agent, object_prototype, &options).is_err());
}

#[test]
fn class_recursion_into_builtin_prototype_fails() {
    let mut agent = test_agent();
    let parent = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let global = get_global_object(&agent);
    let error_key = PropertyKey::from_static_str(&mut agent, "Error");
    let error_constructor = get(&mut agent, global, error_key).unwrap();
    let custom_key = PropertyKey::from_static_str(&mut agent, "Failure");
    create_data_property_or_throw(&mut agent, parent, custom_key, error_constructor).unwrap();

    // With classes on, the pass recurses into Error.prototype and the
    // guard refuses it.
    let options = PromisifyOptions {
        classes: true,
        ..Default::default()
    };
    assert!(promisify_all(&mut agent, parent.into_value(), &options).is_err());
}

fn fresh_echo_getter(agent: &mut Agent, _this: Value, _args: ArgumentsList) -> JsResult<Value> {
    let function = create_builtin_function(
        agent,
        Behaviour::Regular(echo),
        BuiltinFunctionArgs::new(2, "fresh"),
    );
    Ok(function.into_value())
}

fn number_getter(_agent: &mut Agent, _this: Value, _args: ArgumentsList) -> JsResult<Value> {
    Ok(Value::from(42))
}

fn add_getter(agent: &mut Agent, target: Object, name: &'static str, behaviour: Behaviour) {
    let getter = create_builtin_function(agent, behaviour, BuiltinFunctionArgs::new(0, name));
    let key = PropertyKey::from_static_str(agent, name);
    define_property_or_throw(
        agent,
        target,
        key,
        PropertyDescriptor {
            get: Some(getter.into()),
            enumerable: Some(true),
            configurable: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
}

#[test]
fn getter_accessors_get_wrapping_accessors() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_getter(&mut agent, target, "maker", Behaviour::Regular(fresh_echo_getter));

    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "makerAsync");
    let descriptor = target
        .internal_get_own_property(&mut agent, sibling_key)
        .unwrap()
        .unwrap();
    assert!(descriptor.get.is_some());
    assert_eq!(descriptor.enumerable, Some(true));
    assert_eq!(descriptor.configurable, Some(true));

    // Reading through the accessor yields a callable wrapper.
    let wrapper = get(&mut agent, target, sibling_key).unwrap();
    let promise_value = call(
        &mut agent,
        wrapper,
        target.into_value(),
        Some(ArgumentsList::new(&[Value::from(9)])),
    )
    .unwrap();
    let promise = Promise::try_from(promise_value).unwrap();
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(9)
        }
    );
}

#[test]
fn getter_results_are_not_cached() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_getter(&mut agent, target, "maker", Behaviour::Regular(fresh_echo_getter));
    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "makerAsync");
    let first = get(&mut agent, target, sibling_key).unwrap();
    let second = get(&mut agent, target, sibling_key).unwrap();
    assert_ne!(first, second);
}

/// Asserts it runs without a receiver and returns a marker string.
fn bare_promisifier(agent: &mut Agent, this: Value, args: ArgumentsList) -> JsResult<Value> {
    assert_eq!(this, Value::Undefined);
    assert!(Function::try_from(args.get(0)).is_ok());
    Ok(String::from_str(agent, "bare").into_value())
}

#[test]
fn custom_promisifier_for_getters_gets_no_receiver() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_getter(&mut agent, target, "maker", Behaviour::Regular(fresh_echo_getter));

    let promisifier = create_builtin_function(
        &mut agent,
        Behaviour::Regular(bare_promisifier),
        BuiltinFunctionArgs::new(1, "barePromisifier"),
    );
    let options = PromisifyOptions {
        promisifier: Some(promisifier.into()),
        ..Default::default()
    };
    promisify_all(&mut agent, target.into_value(), &options).unwrap();

    // Reading with the target as receiver hands `this` to the original
    // getter only; the promisifier runs receiverless and its return value
    // comes back verbatim.
    let sibling_key = PropertyKey::from_static_str(&mut agent, "makerAsync");
    let installed = get(&mut agent, target, sibling_key).unwrap();
    let marker = String::from_str(&mut agent, "bare").into_value();
    assert_eq!(installed, marker);
}

#[test]
fn non_function_getter_result_errors_on_read() {
    let mut agent = test_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_getter(&mut agent, target, "bad", Behaviour::Regular(number_getter));

    // Installation itself never reads through the getter.
    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "badAsync");
    assert!(get(&mut agent, target, sibling_key).is_err());
}
