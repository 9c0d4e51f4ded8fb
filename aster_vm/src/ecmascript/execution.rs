// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod agent;
mod default_host_hooks;
mod execution_context;
mod realm;

pub use agent::{
    Agent, ExceptionType, HostHooks, JsError, JsResult, Options,
    PromiseRejectionTrackerOperation,
};
pub use default_host_hooks::DefaultHostHooks;
pub(crate) use execution_context::ExecutionContext;
pub use execution_context::get_global_object;
pub use realm::{ProtoIntrinsics, Realm, RealmIdentifier, initialize_default_realm};
