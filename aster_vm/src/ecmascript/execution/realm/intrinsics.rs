// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::{
            Builtin, BuiltinFunction, BuiltinFunctionArgs, create_builtin_function,
            control_abstraction_objects::promise_objects::promise_constructor::PromiseConstructor,
            fundamental_objects::{
                error_objects::{
                    error_constructor::ErrorConstructor, error_prototype::ErrorPrototypeToString,
                    native_error_constructors::{RangeErrorConstructor, TypeErrorConstructor},
                },
                object_objects::{
                    object_constructor::ObjectConstructor,
                    object_prototype::{ObjectPrototypeToString, ObjectPrototypeValueOf},
                },
            },
        },
        execution::Agent,
        static_strings,
        types::{
            IntoValue, Object, ObjectHeapData, OrdinaryObject, PropertyKey, String,
        },
    },
    heap::{CreateHeapData, ObjectEntry, ObjectEntryPropertyDescriptor},
};

/// Enumeration of intrinsics intended to be used as the \[\[Prototype\]\]
/// value of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoIntrinsics {
    Error,
    Function,
    Object,
    Promise,
    RangeError,
    TypeError,
}

/// The intrinsic objects of a realm. Each is created eagerly when the realm
/// is created; the handles here are the canonical ones.
#[derive(Debug)]
pub(crate) struct Intrinsics {
    error: BuiltinFunction,
    error_prototype: OrdinaryObject,
    function_prototype: OrdinaryObject,
    object: BuiltinFunction,
    object_prototype: OrdinaryObject,
    promise: BuiltinFunction,
    promise_prototype: OrdinaryObject,
    range_error: BuiltinFunction,
    range_error_prototype: OrdinaryObject,
    type_error: BuiltinFunction,
    type_error_prototype: OrdinaryObject,
}

fn create_bare_object(agent: &mut Agent, prototype: Option<Object>) -> OrdinaryObject {
    agent.heap.create(ObjectHeapData {
        extensible: true,
        prototype,
        entries: vec![],
    })
}

/// Entry for a builtin method property, named after the [Builtin]'s `NAME`.
fn builtin_method_entry<T: Builtin>(agent: &mut Agent) -> ObjectEntry {
    let method = create_builtin_function(
        agent,
        T::BEHAVIOUR,
        BuiltinFunctionArgs::new(T::LENGTH.into(), T::NAME),
    );
    ObjectEntry {
        key: PropertyKey::from_static_str(agent, T::NAME),
        value: ObjectEntryPropertyDescriptor::Data {
            value: method.into_value(),
            writable: true,
            enumerable: false,
            configurable: true,
        },
    }
}

/// Create a global constructor function together with its backing object
/// carrying `length`, `name` and the non-configurable `prototype` property,
/// and link the prototype's `constructor` property back to it.
fn create_constructor<T: Builtin>(
    agent: &mut Agent,
    function_prototype: OrdinaryObject,
    prototype: OrdinaryObject,
) -> BuiltinFunction {
    let constructor = create_builtin_function(
        agent,
        T::BEHAVIOUR,
        BuiltinFunctionArgs::new(T::LENGTH.into(), T::NAME),
    );
    let length_entry = ObjectEntry {
        key: PropertyKey::from(static_strings::LENGTH),
        value: ObjectEntryPropertyDescriptor::Data {
            value: T::LENGTH.into(),
            writable: false,
            enumerable: false,
            configurable: true,
        },
    };
    let name_value = String::from_static_str(agent, T::NAME).into_value();
    let name_entry = ObjectEntry {
        key: PropertyKey::from(static_strings::NAME),
        value: ObjectEntryPropertyDescriptor::Data {
            value: name_value,
            writable: false,
            enumerable: false,
            configurable: true,
        },
    };
    let prototype_entry = ObjectEntry {
        key: PropertyKey::from_static_str(agent, "prototype"),
        value: ObjectEntryPropertyDescriptor::Data {
            value: prototype.into_value(),
            writable: false,
            enumerable: false,
            configurable: false,
        },
    };
    let backing_object = agent.heap.create(ObjectHeapData {
        extensible: true,
        prototype: Some(function_prototype.into()),
        entries: vec![length_entry, name_entry, prototype_entry],
    });
    agent[constructor].object_index = Some(backing_object);

    let constructor_key = PropertyKey::from_static_str(agent, "constructor");
    agent[prototype].entries.push(ObjectEntry {
        key: constructor_key,
        value: ObjectEntryPropertyDescriptor::Data {
            value: constructor.into_value(),
            writable: true,
            enumerable: false,
            configurable: true,
        },
    });
    constructor
}

/// Entries every native error prototype carries: an empty default `message`
/// and the error kind's `name`.
fn native_error_prototype_entries(name: String) -> [ObjectEntry; 2] {
    [
        ObjectEntry {
            key: PropertyKey::from(static_strings::MESSAGE),
            value: ObjectEntryPropertyDescriptor::Data {
                value: String::EMPTY_STRING.into_value(),
                writable: true,
                enumerable: false,
                configurable: true,
            },
        },
        ObjectEntry {
            key: PropertyKey::from(static_strings::NAME),
            value: ObjectEntryPropertyDescriptor::Data {
                value: name.into_value(),
                writable: true,
                enumerable: false,
                configurable: true,
            },
        },
    ]
}

impl Intrinsics {
    pub(crate) fn create_intrinsics(agent: &mut Agent) -> Self {
        let object_prototype = create_bare_object(agent, None);
        let function_prototype = create_bare_object(agent, Some(object_prototype.into()));
        let error_prototype = create_bare_object(agent, Some(object_prototype.into()));
        let range_error_prototype = create_bare_object(agent, Some(error_prototype.into()));
        let type_error_prototype = create_bare_object(agent, Some(error_prototype.into()));
        let promise_prototype = create_bare_object(agent, Some(object_prototype.into()));

        let object = create_constructor::<ObjectConstructor>(agent, function_prototype, object_prototype);
        let to_string_entry = builtin_method_entry::<ObjectPrototypeToString>(agent);
        let value_of_entry = builtin_method_entry::<ObjectPrototypeValueOf>(agent);
        agent[object_prototype].entries.push(to_string_entry);
        agent[object_prototype].entries.push(value_of_entry);

        let error = create_constructor::<ErrorConstructor>(agent, function_prototype, error_prototype);
        let [message_entry, name_entry] =
            native_error_prototype_entries(static_strings::ERROR);
        let error_to_string_entry = builtin_method_entry::<ErrorPrototypeToString>(agent);
        agent[error_prototype].entries.push(message_entry);
        agent[error_prototype].entries.push(name_entry);
        agent[error_prototype].entries.push(error_to_string_entry);

        let range_error =
            create_constructor::<RangeErrorConstructor>(agent, function_prototype, range_error_prototype);
        let range_error_name = String::from_static_str(agent, RangeErrorConstructor::NAME);
        let [message_entry, name_entry] = native_error_prototype_entries(range_error_name);
        agent[range_error_prototype].entries.push(message_entry);
        agent[range_error_prototype].entries.push(name_entry);

        let type_error =
            create_constructor::<TypeErrorConstructor>(agent, function_prototype, type_error_prototype);
        let type_error_name = String::from_static_str(agent, TypeErrorConstructor::NAME);
        let [message_entry, name_entry] = native_error_prototype_entries(type_error_name);
        agent[type_error_prototype].entries.push(message_entry);
        agent[type_error_prototype].entries.push(name_entry);

        let promise =
            create_constructor::<PromiseConstructor>(agent, function_prototype, promise_prototype);

        Self {
            error,
            error_prototype,
            function_prototype,
            object,
            object_prototype,
            promise,
            promise_prototype,
            range_error,
            range_error_prototype,
            type_error,
            type_error_prototype,
        }
    }

    pub(crate) fn get_intrinsic_default_proto(&self, intrinsic: ProtoIntrinsics) -> Object {
        match intrinsic {
            ProtoIntrinsics::Error => self.error_prototype(),
            ProtoIntrinsics::Function => self.function_prototype(),
            ProtoIntrinsics::Object => self.object_prototype(),
            ProtoIntrinsics::Promise => self.promise_prototype(),
            ProtoIntrinsics::RangeError => self.range_error_prototype(),
            ProtoIntrinsics::TypeError => self.type_error_prototype(),
        }
    }

    /// %Error%
    pub(crate) fn error(&self) -> BuiltinFunction {
        self.error
    }

    /// %Error.prototype%
    pub(crate) fn error_prototype(&self) -> Object {
        self.error_prototype.into()
    }

    /// %Function.prototype%
    pub(crate) fn function_prototype(&self) -> Object {
        self.function_prototype.into()
    }

    /// %Object%
    pub(crate) fn object(&self) -> BuiltinFunction {
        self.object
    }

    /// %Object.prototype%
    pub(crate) fn object_prototype(&self) -> Object {
        self.object_prototype.into()
    }

    /// %Promise%
    pub(crate) fn promise(&self) -> BuiltinFunction {
        self.promise
    }

    /// %Promise.prototype%
    pub(crate) fn promise_prototype(&self) -> Object {
        self.promise_prototype.into()
    }

    /// %RangeError%
    pub(crate) fn range_error(&self) -> BuiltinFunction {
        self.range_error
    }

    /// %RangeError.prototype%
    pub(crate) fn range_error_prototype(&self) -> Object {
        self.range_error_prototype.into()
    }

    /// %TypeError%
    pub(crate) fn type_error(&self) -> BuiltinFunction {
        self.type_error
    }

    /// %TypeError.prototype%
    pub(crate) fn type_error_prototype(&self) -> Object {
        self.type_error_prototype.into()
    }
}
