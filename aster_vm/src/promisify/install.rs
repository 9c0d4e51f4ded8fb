// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::PromisifyOptions;
use crate::{
    ecmascript::{
        abstract_operations::operations_on_objects::call_function,
        builtins::{
            ArgumentsList, promisified_function::promisify_function,
            promisified_getter::PromisifiedGetterHeapData,
        },
        execution::{Agent, JsResult},
        types::{
            Function, InternalSlots, IntoValue, Object, PropertyDescriptor, PropertyKey, String,
            Value,
        },
    },
    heap::{CreateHeapData, ObjectEntry},
};

/// The string form of a non-symbol property key, as suffixing sees it.
/// Integer keys rejoin the string world here: promisifying `{ 0: f }`
/// installs `0Async`.
fn key_string(agent: &Agent, key: PropertyKey) -> std::string::String {
    match key {
        PropertyKey::Integer(data) => data.into_i64().to_string(),
        PropertyKey::SmallString(data) => data.as_str().to_owned(),
        PropertyKey::String(data) => data.as_str(agent).to_owned(),
        PropertyKey::Symbol(_) => unreachable!(),
    }
}

/// Install the promise-returning sibling of a function-valued data
/// property.
///
/// The sibling always lands as a `{ writable: true, enumerable: true,
/// configurable: true }` data property, replacing whatever previously sat
/// under the suffixed name. Running the pass twice therefore converges.
pub(super) fn install_function_member(
    agent: &mut Agent,
    target: Object,
    key: PropertyKey,
    function: Function,
    options: &PromisifyOptions,
) -> JsResult<()> {
    let suffixed_name = format!("{}{}", key_string(agent, key), options.suffix);
    let wrapped = if let Some(promisifier) = options.promisifier {
        // A custom promisifier sees the original function and its return
        // value is installed as-is, callable or not.
        let arguments = [function.into_value()];
        call_function(
            agent,
            promisifier,
            Value::Undefined,
            Some(ArgumentsList::new(&arguments)),
        )?
    } else {
        let name = String::from_string(agent, suffixed_name.clone());
        promisify_function(agent, function, name).into_value()
    };
    let suffixed_key = PropertyKey::from_string(agent, suffixed_name);
    let backing_object = target.get_or_create_backing_object(agent);
    backing_object.define_entry(agent, ObjectEntry::new_data_entry(suffixed_key, wrapped));
    Ok(())
}

/// Install the promise-returning sibling of a getter-bearing accessor.
///
/// The sibling keeps the original setter and attribute bits; only the
/// getter is replaced, by one that promisifies whatever function the
/// original getter answers on each read.
pub(super) fn install_accessor_member(
    agent: &mut Agent,
    target: Object,
    key: PropertyKey,
    get: Function,
    set: Option<Function>,
    enumerable: bool,
    configurable: bool,
    options: &PromisifyOptions,
) -> JsResult<()> {
    let suffixed_name = format!("{}{}", key_string(agent, key), options.suffix);
    let name = String::from_string(agent, suffixed_name.clone());
    let getter = agent.heap.create(PromisifiedGetterHeapData {
        object_index: None,
        getter: get,
        promisifier: options.promisifier,
        name,
    });
    let descriptor = PropertyDescriptor {
        get: Some(getter.into()),
        set,
        enumerable: Some(enumerable),
        configurable: Some(configurable),
        ..Default::default()
    };
    let suffixed_key = PropertyKey::from_string(agent, suffixed_name);
    let backing_object = target.get_or_create_backing_object(agent);
    backing_object.define_entry(
        agent,
        ObjectEntry {
            key: suffixed_key,
            value: descriptor.into(),
        },
    );
    Ok(())
}
