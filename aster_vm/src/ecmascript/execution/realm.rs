// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

use std::ops::{Index, IndexMut};

use super::{Agent, ExecutionContext, JsResult, get_global_object};
use crate::{
    ecmascript::{
        abstract_operations::operations_on_objects::define_property_or_throw,
        builtins::{
            ArgumentsList, Behaviour, Builtin, BuiltinFunctionArgs, create_builtin_function,
        },
        types::{
            IntoFunction, IntoValue, Object, ObjectHeapData, OrdinaryObject, PropertyDescriptor,
            PropertyKey, Value,
        },
    },
    heap::{CreateHeapData, Heap, indexes::BaseIndex},
};

pub(crate) use intrinsics::Intrinsics;
pub use intrinsics::ProtoIntrinsics;

pub type RealmIdentifier = BaseIndex<Realm>;

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// Before it is evaluated, all ECMAScript code must be associated with a
/// realm. Conceptually, a realm consists of a set of intrinsic objects and a
/// global object.
#[derive(Debug)]
pub struct Realm {
    intrinsics: Intrinsics,

    /// ### \[\[GlobalObject]]
    ///
    /// The global object for this realm.
    pub(crate) global_object: Object,
}

impl Realm {
    pub(crate) fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }
}

impl Index<RealmIdentifier> for Agent {
    type Output = Realm;

    fn index(&self, index: RealmIdentifier) -> &Self::Output {
        &self.heap.realms[index]
    }
}

impl IndexMut<RealmIdentifier> for Agent {
    fn index_mut(&mut self, index: RealmIdentifier) -> &mut Self::Output {
        &mut self.heap.realms[index]
    }
}

impl Index<RealmIdentifier> for Vec<Option<Realm>> {
    type Output = Realm;

    fn index(&self, index: RealmIdentifier) -> &Self::Output {
        self.get(index.into_index())
            .expect("RealmIdentifier out of bounds")
            .as_ref()
            .expect("RealmIdentifier slot empty")
    }
}

impl IndexMut<RealmIdentifier> for Vec<Option<Realm>> {
    fn index_mut(&mut self, index: RealmIdentifier) -> &mut Self::Output {
        self.get_mut(index.into_index())
            .expect("RealmIdentifier out of bounds")
            .as_mut()
            .expect("RealmIdentifier slot empty")
    }
}

impl CreateHeapData<Realm, RealmIdentifier> for Heap {
    fn create(&mut self, data: Realm) -> RealmIdentifier {
        self.realms.push(Some(data));
        RealmIdentifier::last(&self.realms)
    }
}

/// ### [9.3.1 CreateRealm ( )](https://tc39.es/ecma262/#sec-createrealm)
pub(crate) fn create_realm(agent: &mut Agent) -> RealmIdentifier {
    // 1. Let realmRec be a new Realm Record.
    // 2. Perform CreateIntrinsics(realmRec).
    let intrinsics = Intrinsics::create_intrinsics(agent);
    // 3.-5. Global object and environment are set by the caller.
    let realm = Realm {
        intrinsics,
        global_object: Object::Object(OrdinaryObject::_def()),
    };
    // 6. Return realmRec.
    agent.heap.create(realm)
}

struct LegacyGlobalGetter;
impl Builtin for LegacyGlobalGetter {
    const NAME: &'static str = "GLOBAL";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(legacy_global_getter);
}

struct LegacyRootGetter;
impl Builtin for LegacyRootGetter {
    const NAME: &'static str = "root";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(legacy_root_getter);
}

fn legacy_global_getter(
    agent: &mut Agent,
    _this_value: Value,
    _arguments: ArgumentsList,
) -> JsResult<Value> {
    agent
        .host_hooks
        .emit_deprecation_warning("'GLOBAL' is deprecated, use 'globalThis'");
    Ok(get_global_object(agent).into_value())
}

fn legacy_root_getter(
    agent: &mut Agent,
    _this_value: Value,
    _arguments: ArgumentsList,
) -> JsResult<Value> {
    agent
        .host_hooks
        .emit_deprecation_warning("'root' is deprecated, use 'globalThis'");
    Ok(get_global_object(agent).into_value())
}

/// Install a deprecated accessor alias of the global object.
fn define_legacy_alias<T: Builtin>(agent: &mut Agent, global: Object) -> JsResult<()> {
    let getter = create_builtin_function(
        agent,
        T::BEHAVIOUR,
        BuiltinFunctionArgs::new(T::LENGTH.into(), T::NAME),
    );
    let key = PropertyKey::from_static_str(agent, T::NAME);
    define_property_or_throw(
        agent,
        global,
        key,
        PropertyDescriptor {
            get: Some(getter.into_function()),
            enumerable: Some(false),
            configurable: Some(true),
            ..Default::default()
        },
    )
}

/// ### [9.3.3 SetDefaultGlobalBindings ( realmRec )](https://tc39.es/ecma262/#sec-setdefaultglobalbindings)
pub(crate) fn set_default_global_bindings(
    agent: &mut Agent,
    realm_id: RealmIdentifier,
) -> JsResult<Object> {
    // 1. Let global be realmRec.[[GlobalObject]].
    let global = agent[realm_id].global_object;

    // 2. Define the value properties of the global object.
    macro_rules! define_constructor_property {
        ($name:literal, $value:expr) => {{
            let name = PropertyKey::from_static_str(agent, $name);
            let value = $value;
            define_property_or_throw(
                agent,
                global,
                name,
                PropertyDescriptor {
                    value: Some(value.into_value()),
                    writable: Some(true),
                    enumerable: Some(false),
                    configurable: Some(true),
                    ..Default::default()
                },
            )?;
        }};
    }

    // globalThis
    define_constructor_property!("globalThis", global);
    // Constructor bindings.
    define_constructor_property!("Object", agent[realm_id].intrinsics().object());
    define_constructor_property!("Error", agent[realm_id].intrinsics().error());
    define_constructor_property!("RangeError", agent[realm_id].intrinsics().range_error());
    define_constructor_property!("TypeError", agent[realm_id].intrinsics().type_error());
    define_constructor_property!("Promise", agent[realm_id].intrinsics().promise());

    // Deprecated aliases of globalThis, installed only when the host still
    // wants them.
    if agent.options.legacy_global_aliases {
        define_legacy_alias::<LegacyGlobalGetter>(agent, global)?;
        define_legacy_alias::<LegacyRootGetter>(agent, global)?;
    }

    // 3. Return global.
    Ok(global)
}

/// Create and initialize the default realm: intrinsics, global object, and
/// default global bindings, with a root execution context on the stack.
pub fn initialize_default_realm(agent: &mut Agent) {
    let realm_id = create_realm(agent);
    agent.execution_context_stack.push(ExecutionContext {
        function: None,
        realm: realm_id,
    });
    let object_prototype = agent[realm_id].intrinsics().object_prototype();
    let global_object: Object = agent
        .heap
        .create(ObjectHeapData {
            extensible: true,
            prototype: Some(object_prototype),
            entries: vec![],
        })
        .into();
    agent[realm_id].global_object = global_object;
    set_default_global_bindings(agent, realm_id)
        .expect("initializing a fresh global object cannot fail");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::get,
        execution::{DefaultHostHooks, Options, initialize_default_realm},
    };

    #[test]
    fn default_realm_global_bindings() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        initialize_default_realm(&mut agent);

        let global = get_global_object(&agent);
        for name in ["Object", "Error", "RangeError", "TypeError", "Promise"] {
            let key = PropertyKey::from_static_str(&mut agent, name);
            let value = get(&mut agent, global, key).unwrap();
            assert!(value.is_function(), "global {name} should be a function");
        }

        let global_this_key = PropertyKey::from_static_str(&mut agent, "globalThis");
        let global_this = get(&mut agent, global, global_this_key).unwrap();
        assert_eq!(global_this, global.into_value());
    }

    #[test]
    fn legacy_aliases_follow_options() {
        assert_eq!(Options::default(), Options::new());

        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        initialize_default_realm(&mut agent);
        let global = get_global_object(&agent);
        for name in ["GLOBAL", "root"] {
            let key = PropertyKey::from_static_str(&mut agent, name);
            let value = get(&mut agent, global, key).unwrap();
            assert_eq!(value, global.into_value());
        }

        let mut agent = Agent::new(
            Options {
                legacy_global_aliases: false,
            },
            &DefaultHostHooks,
        );
        initialize_default_realm(&mut agent);
        let global = get_global_object(&agent);
        let key = PropertyKey::from_static_str(&mut agent, "GLOBAL");
        assert!(
            !crate::ecmascript::abstract_operations::operations_on_objects::has_own_property(
                &mut agent, global, key
            )
            .unwrap()
        );
    }
}
