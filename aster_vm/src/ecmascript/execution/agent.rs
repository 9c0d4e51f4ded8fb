// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{ExecutionContext, Realm, RealmIdentifier};
use crate::{
    ecmascript::{
        builtins::{error::ErrorHeapData, promise::Promise},
        types::{IntoValue, Object, String, Value},
    },
    heap::{CreateHeapData, Heap},
};
use ahash::AHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Install the deprecated `GLOBAL` and `root` aliases of the global
    /// object when the default realm is initialized. On by default; embedders
    /// opt out explicitly.
    pub legacy_global_aliases: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            legacy_global_aliases: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// An exception that was thrown. The wrapped value is what `throw` threw,
/// usually (but not necessarily) an [Error](crate::ecmascript::builtins::error::Error)
/// object.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsError(Value);

impl JsError {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    pub fn to_string(self, agent: &mut Agent) -> String {
        self.0.string_repr(agent)
    }
}

/// Which way a promise's settlement was observed by the host.
///
/// See [HostHooks::promise_rejection_tracker].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromiseRejectionTrackerOperation {
    Reject,
    Handle,
}

/// Embedder-defined hooks the engine consults at runtime.
pub trait HostHooks: std::fmt::Debug {
    /// ### [27.2.1.9 HostPromiseRejectionTracker ( promise, operation )](https://tc39.es/ecma262/#sec-host-promise-rejection-tracker)
    fn promise_rejection_tracker(
        &self,
        _promise: Promise,
        _operation: PromiseRejectionTrackerOperation,
    ) {
        // The default implementation of HostPromiseRejectionTracker is to
        // return unused.
    }

    /// Called when a deprecated global alias is read.
    fn emit_deprecation_warning(&self, _message: &str) {}
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    pub(crate) host_hooks: &'static dyn HostHooks,
    pub(crate) execution_context_stack: Vec<ExecutionContext>,
    /// Prototype objects of the global constructors, snapshotted once on
    /// first use and immutable afterwards.
    pub(crate) protected_prototypes: Option<AHashSet<Object>>,
}

impl Agent {
    pub fn new(options: Options, host_hooks: &'static dyn HostHooks) -> Self {
        Self {
            heap: Heap::new(),
            options,
            host_hooks,
            execution_context_stack: Vec::new(),
            protected_prototypes: None,
        }
    }

    pub(crate) fn current_realm_id(&self) -> RealmIdentifier {
        self.running_execution_context().realm
    }

    pub(crate) fn current_realm(&self) -> &Realm {
        self.get_realm(self.current_realm_id())
    }

    pub(crate) fn get_realm(&self, id: RealmIdentifier) -> &Realm {
        &self[id]
    }

    pub(crate) fn running_execution_context(&self) -> &ExecutionContext {
        self.execution_context_stack.last().unwrap()
    }

    /// Allocate an error object of the given kind and return it as a thrown
    /// exception.
    pub fn throw_exception(&mut self, kind: ExceptionType, message: &'static str) -> JsError {
        let message = String::from_static_str(self, message);
        let error = self.heap.create(ErrorHeapData::new(kind, Some(message), None));
        JsError(error.into_value())
    }
}

/// The error kinds an [Agent] can throw natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    RangeError,
    TypeError,
}

impl ExceptionType {
    pub(crate) fn proto_intrinsics(self) -> super::ProtoIntrinsics {
        match self {
            ExceptionType::Error => super::ProtoIntrinsics::Error,
            ExceptionType::RangeError => super::ProtoIntrinsics::RangeError,
            ExceptionType::TypeError => super::ProtoIntrinsics::TypeError,
        }
    }
}
