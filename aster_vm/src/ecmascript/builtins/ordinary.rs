// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, create_data_property},
            testing_and_comparison::same_value,
        },
        execution::{Agent, JsResult, ProtoIntrinsics},
        types::{
            InternalMethods, InternalSlots, Object, ObjectHeapData, OrdinaryObject,
            PropertyDescriptor, PropertyKey, Value,
        },
    },
    heap::{CreateHeapData, ObjectEntry, ObjectEntryPropertyDescriptor},
};

/// ### [10.1.1.1 OrdinaryGetPrototypeOf ( O )](https://tc39.es/ecma262/#sec-ordinarygetprototypeof)
/// and [10.1.2.1 OrdinarySetPrototypeOf ( O, V )](https://tc39.es/ecma262/#sec-ordinarysetprototypeof)
pub(crate) fn ordinary_set_prototype_of(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
) -> bool {
    // 1. Let current be O.[[Prototype]].
    let current = object.internal_prototype(agent);

    // 2. If SameValue(V, current) is true, return true.
    if prototype == current {
        return true;
    }

    // 3. Let extensible be O.[[Extensible]].
    // 4. If extensible is false, return false.
    if !object.internal_extensible(agent) {
        return false;
    }

    // 5. - 8. Walk the new prototype's chain; defining a cycle is refused.
    // Every object in this engine uses the ordinary [[GetPrototypeOf]], so
    // the walk is guaranteed to terminate.
    let mut p = prototype;
    while let Some(p_inner) = p {
        if p_inner == object {
            return false;
        }
        p = p_inner.internal_prototype(agent);
    }

    // 9. Set O.[[Prototype]] to V.
    object.internal_set_prototype(agent, prototype);

    // 10. Return true.
    true
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2. - 9. Return a fully populated descriptor of the entry.
    object.property_descriptor(agent, property_key)
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = ordinary_get_own_property(agent, object, property_key);

    // 2. Let extensible be ? IsExtensible(O).
    let extensible = object.internal_extensible(agent);

    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    Ok(validate_and_apply_property_descriptor(
        agent,
        Some(object),
        property_key,
        extensible,
        descriptor,
        current,
    ))
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
pub(crate) fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    object: Option<OrdinaryObject>,
    property_key: PropertyKey,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }

        // b. If O is undefined, return true.
        let Some(object) = object else {
            return true;
        };

        // c. - d. Create the property, filling in absent attributes with
        //    their defaults.
        let value = if descriptor.is_accessor_descriptor() {
            ObjectEntryPropertyDescriptor::from(PropertyDescriptor {
                get: descriptor.get,
                set: descriptor.set,
                enumerable: Some(descriptor.enumerable.unwrap_or(false)),
                configurable: Some(descriptor.configurable.unwrap_or(false)),
                ..Default::default()
            })
        } else {
            ObjectEntryPropertyDescriptor::Data {
                value: descriptor.value.unwrap_or(Value::Undefined),
                writable: descriptor.writable.unwrap_or(false),
                enumerable: descriptor.enumerable.unwrap_or(false),
                configurable: descriptor.configurable.unwrap_or(false),
            }
        };
        object.define_entry(
            agent,
            ObjectEntry {
                key: property_key,
                value,
            },
        );

        // e. Return true.
        return true;
    };

    // 3. Assert: current is a fully populated Property Descriptor.
    debug_assert!(current.is_fully_populated());

    // 4. If Desc does not have any fields, return true.
    if !descriptor.has_fields() {
        return true;
    }

    // 5. If current.[[Configurable]] is false, then
    if current.configurable == Some(false) {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]]
        //    is true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }
        // b. If Desc has an [[Enumerable]] field and
        //    SameValue(Desc.[[Enumerable]], current.[[Enumerable]]) is
        //    false, return false.
        if descriptor.enumerable.is_some() && descriptor.enumerable != current.enumerable {
            return false;
        }
        // c. If IsGenericDescriptor(Desc) is false and
        //    IsAccessorDescriptor(Desc) is not IsAccessorDescriptor(current),
        //    return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }
        // d. If IsAccessorDescriptor(current) is true, then
        if current.is_accessor_descriptor() {
            // i. - ii. [[Get]] and [[Set]] may not change.
            if descriptor.get.is_some() && descriptor.get != current.get {
                return false;
            }
            if descriptor.set.is_some() && descriptor.set != current.set {
                return false;
            }
        } else if current.writable == Some(false) {
            // e. Else if current.[[Writable]] is false, then
            // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is
            //    true, return false.
            if descriptor.writable == Some(true) {
                return false;
            }
            // ii. The value of a non-writable property may not change.
            if let Some(value) = descriptor.value
                && !same_value(agent, value, current.value.unwrap())
            {
                return false;
            }
        }
    }

    // 6. If O is not undefined, then
    if let Some(object) = object {
        let value = if descriptor.is_data_descriptor() && current.is_accessor_descriptor() {
            // a. Converting an accessor property to a data property keeps
            //    [[Enumerable]] and [[Configurable]], everything else resets.
            ObjectEntryPropertyDescriptor::Data {
                value: descriptor.value.unwrap_or(Value::Undefined),
                writable: descriptor.writable.unwrap_or(false),
                enumerable: descriptor.enumerable.or(current.enumerable).unwrap_or(false),
                configurable: descriptor
                    .configurable
                    .or(current.configurable)
                    .unwrap_or(false),
            }
        } else if descriptor.is_accessor_descriptor() && current.is_data_descriptor() {
            // b. The data-to-accessor conversion, likewise.
            ObjectEntryPropertyDescriptor::from(PropertyDescriptor {
                get: descriptor.get,
                set: descriptor.set,
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
                ..Default::default()
            })
        } else if current.is_accessor_descriptor() {
            // c. Merge the descriptor's present fields over the current ones.
            ObjectEntryPropertyDescriptor::from(PropertyDescriptor {
                get: descriptor.get.or(current.get),
                set: descriptor.set.or(current.set),
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
                ..Default::default()
            })
        } else {
            ObjectEntryPropertyDescriptor::Data {
                value: descriptor.value.or(current.value).unwrap_or(Value::Undefined),
                writable: descriptor.writable.or(current.writable).unwrap_or(false),
                enumerable: descriptor.enumerable.or(current.enumerable).unwrap_or(false),
                configurable: descriptor
                    .configurable
                    .or(current.configurable)
                    .unwrap_or(false),
            }
        };
        object.define_entry(
            agent,
            ObjectEntry {
                key: property_key,
                value,
            },
        );
    }

    // 7. Return true.
    true
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    // 2. If hasOwn is not undefined, return true.
    if ordinary_get_own_property(agent, object, property_key).is_some() {
        return Ok(true);
    }

    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    let parent = object.internal_get_prototype_of(agent)?;

    // 4. If parent is not null, then
    if let Some(parent) = parent {
        // a. Return ? parent.[[HasProperty]](P).
        parent.internal_has_property(agent, property_key)
    } else {
        // 5. Return false.
        Ok(false)
    }
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = ordinary_get_own_property(agent, object, property_key) else {
        // 2. If desc is undefined, then
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let Some(parent) = object.internal_get_prototype_of(agent)? else {
            // b. If parent is null, return undefined.
            return Ok(Value::Undefined);
        };

        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };

    // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
    if let Some(value) = descriptor.value {
        return Ok(value);
    }

    // 4. Assert: IsAccessorDescriptor(desc) is true.
    debug_assert!(descriptor.is_accessor_descriptor());

    // 5. Let getter be desc.[[Get]].
    // 6. If getter is undefined, return undefined.
    let Some(getter) = descriptor.get else {
        return Ok(Value::Undefined);
    };

    // 7. Return ? Call(getter, Receiver).
    call_function(agent, getter, receiver, None)
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    let own_descriptor = ordinary_get_own_property(agent, object, property_key);

    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    ordinary_set_with_own_descriptor(agent, object, property_key, value, receiver, own_descriptor)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_descriptor: Option<PropertyDescriptor>,
) -> JsResult<bool> {
    // 1. If ownDesc is undefined, then
    let own_descriptor = if let Some(own_descriptor) = own_descriptor {
        own_descriptor
    } else {
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let parent = object.internal_get_prototype_of(agent)?;

        // b. If parent is not null, then
        if let Some(parent) = parent {
            // i. Return ? parent.[[Set]](P, V, Receiver).
            return parent.internal_set(agent, property_key, value, receiver);
        }

        // c. Else, set ownDesc to the default data descriptor.
        PropertyDescriptor::new_data_descriptor(Value::Undefined)
    };

    // 2. If IsDataDescriptor(ownDesc) is true, then
    if own_descriptor.is_data_descriptor() {
        // a. If ownDesc.[[Writable]] is false, return false.
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }

        // b. If Receiver is not an Object, return false.
        let Ok(receiver) = Object::try_from(receiver) else {
            return Ok(false);
        };

        // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
        let existing_descriptor = receiver.internal_get_own_property(agent, property_key)?;

        // d. If existingDescriptor is not undefined, then
        if let Some(existing_descriptor) = existing_descriptor {
            // i. If IsAccessorDescriptor(existingDescriptor) is true, return false.
            if existing_descriptor.is_accessor_descriptor() {
                return Ok(false);
            }

            // ii. If existingDescriptor.[[Writable]] is false, return false.
            if existing_descriptor.writable == Some(false) {
                return Ok(false);
            }

            // iii. - iv. Update the existing property's value only.
            receiver.internal_define_own_property(
                agent,
                property_key,
                PropertyDescriptor {
                    value: Some(value),
                    ..Default::default()
                },
            )
        } else {
            // e. Else, create the property on the receiver.
            create_data_property(agent, receiver, property_key, value)
        }
    } else {
        // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
        debug_assert!(own_descriptor.is_accessor_descriptor());

        // 4. Let setter be ownDesc.[[Set]].
        // 5. If setter is undefined, return false.
        let Some(setter) = own_descriptor.set else {
            return Ok(false);
        };

        // 6. Perform ? Call(setter, Receiver, « V »).
        call_function(agent, setter, receiver, Some(super::ArgumentsList(&[value])))?;

        // 7. Return true.
        Ok(true)
    }
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let descriptor = ordinary_get_own_property(agent, object, property_key);

    // 2. If desc is undefined, return true.
    let Some(descriptor) = descriptor else {
        return Ok(true);
    };

    // 3. If desc.[[Configurable]] is true, then
    if descriptor.configurable == Some(true) {
        // a. Remove the own property with name P from O.
        object.remove_entry(agent, property_key);

        // b. Return true.
        Ok(true)
    } else {
        // 4. Return false.
        Ok(false)
    }
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
///
/// Integer keys come first in ascending order, then string keys in property
/// creation order, then symbol keys in property creation order.
pub(crate) fn ordinary_own_property_keys(
    agent: &Agent,
    object: OrdinaryObject,
) -> Vec<PropertyKey> {
    let entries = &agent[object].entries;
    let mut integer_keys = Vec::new();
    let mut string_keys = Vec::with_capacity(entries.len());
    let mut symbol_keys = Vec::new();

    for entry in entries {
        match entry.key {
            PropertyKey::Integer(integer) => integer_keys.push(integer),
            PropertyKey::Symbol(_) => symbol_keys.push(entry.key),
            _ => string_keys.push(entry.key),
        }
    }

    integer_keys.sort_by_key(|integer| integer.into_i64());

    let mut keys = Vec::with_capacity(entries.len());
    keys.extend(integer_keys.into_iter().map(PropertyKey::Integer));
    keys.extend(string_keys);
    keys.extend(symbol_keys);
    keys
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
///
/// Create a new ordinary object with the named intrinsic of the current
/// realm as its prototype, or a null prototype.
pub fn ordinary_object_create_with_intrinsics(
    agent: &mut Agent,
    prototype: Option<ProtoIntrinsics>,
) -> Object {
    let prototype = prototype.map(|intrinsic| {
        agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(intrinsic)
    });
    agent
        .heap
        .create(ObjectHeapData {
            extensible: true,
            prototype,
            entries: vec![],
        })
        .into()
}
