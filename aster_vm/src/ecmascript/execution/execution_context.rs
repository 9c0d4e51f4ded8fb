// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Agent, RealmIdentifier};
use crate::ecmascript::types::{Function, Object};

/// ### [9.4 Execution Contexts](https://tc39.es/ecma262/#sec-execution-contexts)
///
/// Without scripts or modules in the picture, a context records only which
/// function is running (if any) and in which realm.
#[derive(Debug)]
pub(crate) struct ExecutionContext {
    /// ### Function
    ///
    /// If the context is evaluating the code of a function object, the value
    /// of this component is that function object. The value is None for the
    /// realm's root context.
    pub(crate) function: Option<Function>,

    /// ### Realm
    ///
    /// The Realm Record from which associated code accesses ECMAScript
    /// resources.
    pub(crate) realm: RealmIdentifier,
}

/// ### [9.3.4 GetGlobalObject ( )](https://tc39.es/ecma262/#sec-getglobalobject)
pub fn get_global_object(agent: &Agent) -> Object {
    // 1. Let currentRealm be the current Realm Record.
    // 2. Return currentRealm.[[GlobalObject]].
    agent.current_realm().global_object
}
