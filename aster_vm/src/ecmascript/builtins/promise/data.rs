// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::{OrdinaryObject, Value};

#[derive(Debug, Clone, Default)]
pub struct PromiseHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) promise_state: PromiseState,
}

/// ### [27.2.6 Properties of Promise Instances](https://tc39.es/ecma262/#sec-properties-of-promise-instances)
///
/// The \[\[PromiseState\]\], \[\[PromiseResult\]\], \[\[PromiseIsHandled\]\]
/// and \[\[AlreadyResolved\]\] slots of a promise, folded into one enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromiseState {
    Pending {
        /// True if the promise's resolving functions have already run, even
        /// though the promise has not settled yet.
        is_resolved: bool,
    },
    Fulfilled {
        promise_result: Value,
    },
    Rejected {
        promise_result: Value,
        /// False if this rejection has not been handled, used by
        /// HostPromiseRejectionTracker reporting.
        is_handled: bool,
    },
}

impl Default for PromiseState {
    fn default() -> Self {
        Self::Pending { is_resolved: false }
    }
}
