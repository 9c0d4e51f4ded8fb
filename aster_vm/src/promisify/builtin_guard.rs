// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::AHashSet;

use crate::ecmascript::{
    abstract_operations::operations_on_objects::get,
    execution::{Agent, JsResult, get_global_object},
    static_strings,
    types::{Function, InternalMethods, Object, PropertyKey},
};

/// Is `object` one of the prototypes of the realm's global constructors?
///
/// Those objects are shared by every user of the realm; promisification
/// refuses to mutate them. The set is snapshotted from the global object on
/// first use and cached on the agent, so constructors added to the global
/// later are not protected.
pub(super) fn is_protected_builtin(agent: &mut Agent, object: Object) -> JsResult<bool> {
    let protected = match agent.protected_prototypes.take() {
        Some(protected) => protected,
        None => collect_protected_prototypes(agent)?,
    };
    let hit = protected.contains(&object);
    agent.protected_prototypes = Some(protected);
    Ok(hit)
}

/// Walk the global object's own properties and collect the `prototype`
/// objects of everything shaped like a constructor: a string key starting
/// with an uppercase letter whose value is a function.
fn collect_protected_prototypes(agent: &mut Agent) -> JsResult<AHashSet<Object>> {
    let global = get_global_object(agent);
    let keys = global.internal_own_property_keys(agent)?;
    let mut protected = AHashSet::new();
    for key in keys {
        // The deprecated global aliases are excluded by name, before any
        // property read could trip their deprecation accessors.
        if key.equals(agent, static_strings::LEGACY_GLOBAL.to_property_key())
            || key.equals(agent, static_strings::ROOT.to_property_key())
        {
            continue;
        }
        let starts_uppercase = match key {
            PropertyKey::SmallString(data) => {
                data.as_str().chars().next().is_some_and(char::is_uppercase)
            }
            PropertyKey::String(data) => data
                .as_str(agent)
                .chars()
                .next()
                .is_some_and(char::is_uppercase),
            PropertyKey::Integer(_) | PropertyKey::Symbol(_) => false,
        };
        if !starts_uppercase {
            continue;
        }
        let value = get(agent, global, key)?;
        let Ok(function) = Function::try_from(value) else {
            continue;
        };
        let prototype_key = PropertyKey::from_static_str(agent, "prototype");
        let prototype = get(agent, function, prototype_key)?;
        if let Ok(prototype) = Object::try_from(prototype) {
            protected.insert(prototype);
        }
    }
    Ok(protected)
}
