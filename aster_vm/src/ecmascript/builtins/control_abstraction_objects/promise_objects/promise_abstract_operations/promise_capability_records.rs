// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [27.2.1.1 PromiseCapability Records](https://tc39.es/ecma262/#sec-promisecapability-records)

use crate::{
    ecmascript::{
        builtins::promise::{Promise, data::PromiseHeapData, data::PromiseState},
        execution::{Agent, ExceptionType, PromiseRejectionTrackerOperation},
        types::{IntoValue, Value},
    },
    heap::CreateHeapData,
};

/// A PromiseCapability Record encapsulates a promise together with the
/// ability to settle it. Without a job queue the capability settles the
/// promise directly, and the resolve/reject pair of a capability is
/// represented by the resolving-function objects that share a clone of this
/// record.
#[derive(Debug, Clone)]
pub(crate) struct PromiseCapability {
    promise: Promise,
}

impl PromiseCapability {
    /// ### [27.2.1.5 NewPromiseCapability ( C )](https://tc39.es/ecma262/#sec-newpromisecapability)
    ///
    /// Creates a fresh pending promise together with the capability to
    /// settle it.
    pub(crate) fn new(agent: &mut Agent) -> Self {
        Self {
            promise: agent.heap.create(PromiseHeapData::default()),
        }
    }

    pub(crate) fn promise(&self) -> Promise {
        self.promise
    }

    /// Whether the promise's resolving functions have already run. Settled
    /// promises count as resolved.
    fn is_already_resolved(&self, agent: &Agent) -> bool {
        !matches!(
            agent[self.promise].promise_state,
            PromiseState::Pending { is_resolved: false }
        )
    }

    /// ### [27.2.1.3.2 Promise Resolve Functions](https://tc39.es/ecma262/#sec-promise-resolve-functions)
    ///
    /// Settles the promise with the resolution value. Thenable adoption and
    /// job queueing do not exist in this engine: a non-self resolution value
    /// fulfills the promise immediately.
    pub(crate) fn resolve(&self, agent: &mut Agent, resolution: Value) {
        // 1. - 5. If promise.[[AlreadyResolved]] is true, return unused.
        if self.is_already_resolved(agent) {
            return;
        }
        // 6. Set alreadyResolved.[[Value]] to true.
        agent[self.promise].promise_state = PromiseState::Pending { is_resolved: true };

        // 7. If SameValue(resolution, promise) is true, then
        if resolution == self.promise.into_value() {
            // a. Let selfResolutionError be a newly created TypeError object.
            let error = agent
                .throw_exception(
                    ExceptionType::TypeError,
                    "Tried to resolve a promise with itself.",
                )
                .value();
            // b. Perform RejectPromise(promise, selfResolutionError).
            self.internal_reject(agent, error);
            return;
        }

        // 8. - 15. FulfillPromise(promise, resolution).
        agent[self.promise].promise_state = PromiseState::Fulfilled {
            promise_result: resolution,
        };
    }

    /// ### [27.2.1.3.1 Promise Reject Functions](https://tc39.es/ecma262/#sec-promise-reject-functions)
    pub(crate) fn reject(&self, agent: &mut Agent, reason: Value) {
        // 1. - 5. If promise.[[AlreadyResolved]] is true, return unused.
        if self.is_already_resolved(agent) {
            return;
        }
        // 6. Set alreadyResolved.[[Value]] to true.
        // 7. Perform RejectPromise(promise, reason).
        self.internal_reject(agent, reason);
    }

    /// ### [27.2.1.7 RejectPromise ( promise, reason )](https://tc39.es/ecma262/#sec-rejectpromise)
    fn internal_reject(&self, agent: &mut Agent, reason: Value) {
        // 1. - 6. Set the promise state to rejected.
        agent[self.promise].promise_state = PromiseState::Rejected {
            promise_result: reason,
            is_handled: false,
        };
        // 7. Perform HostPromiseRejectionTracker(promise, "reject").
        agent.host_hooks.promise_rejection_tracker(
            self.promise,
            PromiseRejectionTrackerOperation::Reject,
        );
    }
}
