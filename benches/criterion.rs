use aster_vm::{
    ecmascript::{
        abstract_operations::operations_on_objects::{
            call_function, create_data_property_or_throw, get,
        },
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function,
            ordinary::ordinary_object_create_with_intrinsics,
        },
        execution::{
            Agent, DefaultHostHooks, JsResult, Options, ProtoIntrinsics, initialize_default_realm,
        },
        types::{Function, InternalMethods, IntoValue, Object, PropertyKey, Value},
    },
    promisify::{PromisifyOptions, promisify_all},
};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

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

fn add_echo_method(agent: &mut Agent, target: Object, name: String) {
    let function = create_builtin_function(
        agent,
        Behaviour::Regular(echo),
        BuiltinFunctionArgs::new(2, "echo"),
    );
    let key = PropertyKey::from_string(agent, name);
    create_data_property_or_throw(agent, target, key, function.into_value()).unwrap();
}

/// A fresh realm plus a flat object carrying `count` callback-style methods.
fn flat_target(count: usize) -> (Agent, Object) {
    let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
    initialize_default_realm(&mut agent);
    let target = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    for i in 0..count {
        add_echo_method(&mut agent, target, format!("method{i}"));
    }
    (agent, target)
}

/// A fresh realm plus a prototype chain of `depth` objects, one callback
/// method per link.
fn chained_target(depth: usize) -> (Agent, Object) {
    let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
    initialize_default_realm(&mut agent);
    let mut current =
        ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    add_echo_method(&mut agent, current, "method0".to_owned());
    for i in 1..depth {
        let child = ordinary_object_create_with_intrinsics(&mut agent, None);
        child
            .internal_set_prototype_of(&mut agent, Some(current))
            .unwrap();
        add_echo_method(&mut agent, child, format!("method{i}"));
        current = child;
    }
    (agent, current)
}

fn bench_promisify_all(c: &mut Criterion) {
    for count in [4usize, 32, 256] {
        c.bench_function(&format!("promisify_all (flat, {count} methods)"), move |b| {
            b.iter_batched(
                || flat_target(count),
                |(mut agent, target)| {
                    promisify_all(
                        &mut agent,
                        target.into_value(),
                        &PromisifyOptions::default(),
                    )
                    .unwrap();
                },
                BatchSize::PerIteration,
            )
        });
    }

    c.bench_function("promisify_all (prototype chain, depth 8)", |b| {
        let options = PromisifyOptions {
            proto: true,
            ..Default::default()
        };
        b.iter_batched(
            || chained_target(8),
            |(mut agent, target)| {
                promisify_all(&mut agent, target.into_value(), &options).unwrap();
            },
            BatchSize::PerIteration,
        )
    });
}

fn bench_wrapper_call(c: &mut Criterion) {
    c.bench_function("promisified wrapper call", |b| {
        b.iter_batched(
            || {
                let (mut agent, target) = flat_target(1);
                promisify_all(
                    &mut agent,
                    target.into_value(),
                    &PromisifyOptions::default(),
                )
                .unwrap();
                let key = PropertyKey::from_static_str(&mut agent, "method0Async");
                let wrapper = get(&mut agent, target, key).unwrap();
                let wrapper = Function::try_from(wrapper).unwrap();
                (agent, target, wrapper)
            },
            |(mut agent, target, wrapper)| {
                let arguments = [Value::from(1)];
                call_function(
                    &mut agent,
                    wrapper,
                    target.into_value(),
                    Some(ArgumentsList::new(&arguments)),
                )
                .unwrap();
            },
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(benches, bench_promisify_all, bench_wrapper_call);
criterion_main!(benches);
