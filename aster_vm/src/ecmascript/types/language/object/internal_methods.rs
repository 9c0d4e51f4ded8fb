// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{InternalSlots, Object, PropertyKey};
use crate::ecmascript::{
    builtins::{
        ArgumentsList,
        ordinary::{
            ordinary_define_own_property, ordinary_delete, ordinary_get,
            ordinary_get_own_property, ordinary_has_property, ordinary_own_property_keys,
            ordinary_set, ordinary_set_prototype_of,
        },
    },
    execution::{Agent, JsResult},
    types::{Function, PropertyDescriptor, Value},
};

/// ### [6.1.7.2 Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-object-internal-methods-and-internal-slots)
///
/// The default implementations are the ordinary object internal methods,
/// routed through the object's backing object when one exists.
pub trait InternalMethods
where
    Self: Sized + Clone + Copy + Into<Object> + InternalSlots,
{
    /// ## \[\[GetPrototypeOf\]\]
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        // 1. Return OrdinaryGetPrototypeOf(O).
        Ok(self.internal_prototype(agent))
    }

    /// ## \[\[SetPrototypeOf\]\]
    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        // 1. Return OrdinarySetPrototypeOf(O, V).
        Ok(ordinary_set_prototype_of(agent, self.into(), prototype))
    }

    /// ## \[\[IsExtensible\]\]
    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        // 1. Return OrdinaryIsExtensible(O).
        Ok(self.internal_extensible(agent))
    }

    /// ## \[\[PreventExtensions\]\]
    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        // 1. Return OrdinaryPreventExtensions(O).
        self.internal_set_extensible(agent, false);
        Ok(true)
    }

    /// ## \[\[GetOwnProperty\]\]
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        // 1. Return OrdinaryGetOwnProperty(O, P).
        Ok(self
            .get_backing_object(agent)
            .and_then(|backing_object| ordinary_get_own_property(agent, backing_object, property_key)))
    }

    /// ## \[\[DefineOwnProperty\]\]
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        let backing_object = self.get_or_create_backing_object(agent);
        ordinary_define_own_property(agent, backing_object, property_key, property_descriptor)
    }

    /// ## \[\[HasProperty\]\]
    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        // 1. Return ? OrdinaryHasProperty(O, P).
        match self.get_backing_object(agent) {
            Some(backing_object) => ordinary_has_property(agent, backing_object, property_key),
            None => {
                // 3. Let parent be ? O.[[GetPrototypeOf]]().
                let parent = self.internal_get_prototype_of(agent)?;
                if let Some(parent) = parent {
                    // 4. If parent is not null, then
                    // a. Return ? parent.[[HasProperty]](P).
                    parent.internal_has_property(agent, property_key)
                } else {
                    // 5. Return false.
                    Ok(false)
                }
            }
        }
    }

    /// ## \[\[Get\]\]
    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        // 1. Return ? OrdinaryGet(O, P, Receiver).
        match self.get_backing_object(agent) {
            Some(backing_object) => ordinary_get(agent, backing_object, property_key, receiver),
            None => {
                // a. Let parent be ? O.[[GetPrototypeOf]]().
                let Some(parent) = self.internal_get_prototype_of(agent)? else {
                    // b. If parent is null, return undefined.
                    return Ok(Value::Undefined);
                };
                // c. Return ? parent.[[Get]](P, Receiver).
                parent.internal_get(agent, property_key, receiver)
            }
        }
    }

    /// ## \[\[Set\]\]
    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        // 1. Return ? OrdinarySet(O, P, V, Receiver).
        let backing_object = self.get_or_create_backing_object(agent);
        ordinary_set(agent, backing_object, property_key, value, receiver)
    }

    /// ## \[\[Delete\]\]
    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        // 1. Return ? OrdinaryDelete(O, P).
        match self.get_backing_object(agent) {
            Some(backing_object) => ordinary_delete(agent, backing_object, property_key),
            None => Ok(true),
        }
    }

    /// ## \[\[OwnPropertyKeys\]\]
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        // 1. Return OrdinaryOwnPropertyKeys(O).
        match self.get_backing_object(agent) {
            Some(backing_object) => Ok(ordinary_own_property_keys(agent, backing_object)),
            None => Ok(vec![]),
        }
    }

    /// ## \[\[Call\]\]
    fn internal_call(
        self,
        _agent: &mut Agent,
        _this_value: Value,
        _arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        unreachable!()
    }

    /// ## \[\[Construct\]\]
    fn internal_construct(
        self,
        _agent: &mut Agent,
        _arguments_list: ArgumentsList,
        _new_target: Function,
    ) -> JsResult<Object> {
        unreachable!()
    }
}
