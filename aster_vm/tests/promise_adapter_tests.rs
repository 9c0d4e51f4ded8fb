// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::atomic::{AtomicUsize, Ordering};

use aster_vm::{
    ecmascript::{
        abstract_operations::operations_on_objects::{
            call_function, construct, create_data_property_or_throw, get,
        },
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary::ordinary_object_create_with_intrinsics,
            promise::{Promise, PromiseState},
        },
        execution::{
            Agent, ExceptionType, HostHooks, JsResult, Options, PromiseRejectionTrackerOperation,
            ProtoIntrinsics, get_global_object, initialize_default_realm,
        },
        types::{Function, IntoValue, PropertyKey, String, Value},
    },
    promisify::{PromisifyOptions, promisify_all},
};

#[derive(Debug, Default)]
struct TrackerHooks {
    rejections: AtomicUsize,
    handles: AtomicUsize,
}

impl HostHooks for TrackerHooks {
    fn promise_rejection_tracker(
        &self,
        _promise: Promise,
        operation: PromiseRejectionTrackerOperation,
    ) {
        let counter = match operation {
            PromiseRejectionTrackerOperation::Reject => &self.rejections,
            PromiseRejectionTrackerOperation::Handle => &self.handles,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

fn tracked_agent() -> (Agent, &'static TrackerHooks) {
    let hooks: &'static TrackerHooks = Box::leak(Box::new(TrackerHooks::default()));
    let mut agent = Agent::new(Options::default(), hooks);
    initialize_default_realm(&mut agent);
    (agent, hooks)
}

fn promise_constructor(agent: &mut Agent) -> Function {
    let global = get_global_object(agent);
    let key = PropertyKey::from_static_str(agent, "Promise");
    let constructor = get(agent, global, key).unwrap();
    Function::try_from(constructor).unwrap()
}

fn construct_promise(agent: &mut Agent, executor: Behaviour) -> Promise {
    let executor = create_builtin_function(agent, executor, BuiltinFunctionArgs::new(2, "executor"));
    let constructor = promise_constructor(agent);
    let arguments = [executor.into_value()];
    let promise = construct(
        agent,
        constructor,
        Some(ArgumentsList::new(&arguments)),
        None,
    )
    .unwrap();
    Promise::try_from(promise).unwrap()
}

fn resolve_forty_two(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
    let resolve = Function::try_from(args.get(0)).unwrap();
    let arguments = [Value::from(42)];
    call_function(
        agent,
        resolve,
        Value::Undefined,
        Some(ArgumentsList::new(&arguments)),
    )?;
    Ok(Value::Undefined)
}

fn throwing_executor(agent: &mut Agent, _this: Value, _args: ArgumentsList) -> JsResult<Value> {
    Err(agent.throw_exception(ExceptionType::Error, "executor failure"))
}

/// Stashes the resolving functions on the global object so the test can
/// settle the promise after construction returns.
fn stashing_executor(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
    let global = get_global_object(agent);
    let resolve_key = PropertyKey::from_static_str(agent, "savedResolve");
    let reject_key = PropertyKey::from_static_str(agent, "savedReject");
    create_data_property_or_throw(agent, global, resolve_key, args.get(0))?;
    create_data_property_or_throw(agent, global, reject_key, args.get(1))?;
    Ok(Value::Undefined)
}

fn saved_resolver(agent: &mut Agent, name: &'static str) -> Function {
    let global = get_global_object(agent);
    let key = PropertyKey::from_static_str(agent, name);
    let resolver = get(agent, global, key).unwrap();
    Function::try_from(resolver).unwrap()
}

fn settle(agent: &mut Agent, resolver: Function, value: Value) {
    let arguments = [value];
    call_function(
        agent,
        resolver,
        Value::Undefined,
        Some(ArgumentsList::new(&arguments)),
    )
    .unwrap();
}

#[test]
fn promise_constructor_requires_new() {
    let (mut agent, _) = tracked_agent();
    let constructor = promise_constructor(&mut agent);
    let executor = create_builtin_function(
        &mut agent,
        Behaviour::Regular(resolve_forty_two),
        BuiltinFunctionArgs::new(2, "executor"),
    );
    let arguments = [executor.into_value()];
    let result = call_function(
        &mut agent,
        constructor,
        Value::Undefined,
        Some(ArgumentsList::new(&arguments)),
    );
    assert!(result.is_err());
}

#[test]
fn non_callable_executor_is_refused() {
    let (mut agent, _) = tracked_agent();
    let constructor = promise_constructor(&mut agent);
    let arguments = [Value::from(42)];
    let result = construct(
        &mut agent,
        constructor,
        Some(ArgumentsList::new(&arguments)),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn executor_resolution_fulfills_synchronously() {
    let (mut agent, hooks) = tracked_agent();
    let promise = construct_promise(&mut agent, Behaviour::Regular(resolve_forty_two));
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(42)
        }
    );
    assert_eq!(hooks.rejections.load(Ordering::Relaxed), 0);
}

#[test]
fn executor_throw_rejects_and_notifies_tracker() {
    let (mut agent, hooks) = tracked_agent();
    let promise = construct_promise(&mut agent, Behaviour::Regular(throwing_executor));
    let PromiseState::Rejected {
        promise_result,
        is_handled,
    } = promise.state(&agent)
    else {
        panic!("expected a rejected promise");
    };
    assert!(matches!(promise_result, Value::Error(_)));
    assert!(!is_handled);
    assert_eq!(hooks.rejections.load(Ordering::Relaxed), 1);

    promise.mark_rejection_handled(&mut agent);
    assert_eq!(hooks.handles.load(Ordering::Relaxed), 1);
    // Marking again is a no-op.
    promise.mark_rejection_handled(&mut agent);
    assert_eq!(hooks.handles.load(Ordering::Relaxed), 1);
}

#[test]
fn settlement_latches_on_first_resolution() {
    let (mut agent, hooks) = tracked_agent();
    let promise = construct_promise(&mut agent, Behaviour::Regular(stashing_executor));
    assert_eq!(
        promise.state(&agent),
        PromiseState::Pending { is_resolved: false }
    );

    let resolve = saved_resolver(&mut agent, "savedResolve");
    let reject = saved_resolver(&mut agent, "savedReject");
    settle(&mut agent, resolve, Value::from(1));
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(1)
        }
    );

    // Late settles of either kind are ignored.
    let late = String::from_str(&mut agent, "late").into_value();
    settle(&mut agent, reject, late);
    settle(&mut agent, resolve, Value::from(2));
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(1)
        }
    );
    assert_eq!(hooks.rejections.load(Ordering::Relaxed), 0);
}

#[test]
fn resolving_a_promise_with_itself_rejects() {
    let (mut agent, hooks) = tracked_agent();
    let promise = construct_promise(&mut agent, Behaviour::Regular(stashing_executor));
    let resolve = saved_resolver(&mut agent, "savedResolve");
    settle(&mut agent, resolve, promise.into());

    let PromiseState::Rejected { promise_result, .. } = promise.state(&agent) else {
        panic!("expected a rejected promise");
    };
    assert!(matches!(promise_result, Value::Error(_)));
    assert_eq!(hooks.rejections.load(Ordering::Relaxed), 1);
}

/// `echo(value, cb)` but the callback is invoked twice; only the first
/// invocation settles the adapter's promise.
fn double_calling(agent: &mut Agent, _this: Value, args: ArgumentsList) -> JsResult<Value> {
    let value = args.get(0);
    let callback = Function::try_from(args.get(1)).unwrap();
    let first = [Value::Null, value];
    call_function(
        agent,
        callback,
        Value::Undefined,
        Some(ArgumentsList::new(&first)),
    )?;
    let second = [Value::Null, Value::from(999)];
    call_function(
        agent,
        callback,
        Value::Undefined,
        Some(ArgumentsList::new(&second)),
    )?;
    Ok(Value::Undefined)
}

#[test]
fn completion_callback_latches_on_first_invocation() {
    let (mut agent, _) = tracked_agent();
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let function = create_builtin_function(
        &mut agent,
        Behaviour::Regular(double_calling),
        BuiltinFunctionArgs::new(2, "twice"),
    );
    let key = PropertyKey::from_static_str(&mut agent, "twice");
    create_data_property_or_throw(&mut agent, target, key, function.into_value()).unwrap();
    promisify_all(
        &mut agent,
        target.into_value(),
        &PromisifyOptions::default(),
    )
    .unwrap();

    let sibling_key = PropertyKey::from_static_str(&mut agent, "twiceAsync");
    let wrapper = get(&mut agent, target, sibling_key).unwrap();
    let wrapper = Function::try_from(wrapper).unwrap();
    let arguments = [Value::from(1)];
    let promise = call_function(
        &mut agent,
        wrapper,
        target.into_value(),
        Some(ArgumentsList::new(&arguments)),
    )
    .unwrap();
    let promise = Promise::try_from(promise).unwrap();
    assert_eq!(
        promise.state(&agent),
        PromiseState::Fulfilled {
            promise_result: Value::from(1)
        }
    );
}
