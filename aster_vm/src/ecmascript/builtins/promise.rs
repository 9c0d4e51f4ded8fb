// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [27.2 Promise Objects](https://tc39.es/ecma262/#sec-promise-objects)

pub mod data;

use std::ops::{Index, IndexMut};

pub use data::{PromiseHeapData, PromiseState};

use crate::{
    ecmascript::{
        execution::{Agent, PromiseRejectionTrackerOperation, ProtoIntrinsics},
        types::{InternalMethods, InternalSlots, Object, ObjectHeapData, OrdinaryObject, Value},
    },
    heap::{CreateHeapData, Heap, indexes::PromiseIndex},
};

/// A handle to a promise's heap data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Promise(pub(crate) PromiseIndex);

impl Promise {
    pub(crate) const fn _def() -> Self {
        Self(PromiseIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// The current settlement state of the promise.
    ///
    /// Settlement is synchronous in this engine, so the state can be
    /// inspected directly after the settling call returns.
    pub fn state(self, agent: &Agent) -> PromiseState {
        agent[self].promise_state
    }

    /// Mark a rejected promise's rejection as handled by the host,
    /// notifying HostPromiseRejectionTracker of the handling.
    pub fn mark_rejection_handled(self, agent: &mut Agent) {
        if let PromiseState::Rejected { is_handled, .. } = &mut agent[self].promise_state
            && !*is_handled
        {
            *is_handled = true;
            agent
                .host_hooks
                .promise_rejection_tracker(self, PromiseRejectionTrackerOperation::Handle);
        }
    }
}

impl From<Promise> for Object {
    fn from(value: Promise) -> Self {
        Object::Promise(value)
    }
}

impl From<Promise> for Value {
    fn from(value: Promise) -> Self {
        Value::Promise(value)
    }
}

impl TryFrom<Value> for Promise {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Promise(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl TryFrom<Object> for Promise {
    type Error = ();

    fn try_from(value: Object) -> Result<Self, Self::Error> {
        match value {
            Object::Promise(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl InternalSlots for Promise {
    const DEFAULT_PROTOTYPE: ProtoIntrinsics = ProtoIntrinsics::Promise;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].object_index
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        let prototype = self.internal_prototype(agent);
        let backing_object = agent.heap.create(ObjectHeapData {
            extensible: true,
            prototype,
            entries: vec![],
        });
        agent[self].object_index = Some(backing_object);
        backing_object
    }
}

impl InternalMethods for Promise {}

impl Index<Promise> for Agent {
    type Output = PromiseHeapData;

    fn index(&self, index: Promise) -> &Self::Output {
        &self.heap.promises[index]
    }
}

impl IndexMut<Promise> for Agent {
    fn index_mut(&mut self, index: Promise) -> &mut Self::Output {
        &mut self.heap.promises[index]
    }
}

impl Index<Promise> for Vec<Option<PromiseHeapData>> {
    type Output = PromiseHeapData;

    fn index(&self, index: Promise) -> &Self::Output {
        self.get(index.get_index())
            .expect("Promise out of bounds")
            .as_ref()
            .expect("Promise slot empty")
    }
}

impl IndexMut<Promise> for Vec<Option<PromiseHeapData>> {
    fn index_mut(&mut self, index: Promise) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("Promise out of bounds")
            .as_mut()
            .expect("Promise slot empty")
    }
}

impl CreateHeapData<PromiseHeapData, Promise> for Heap {
    fn create(&mut self, data: PromiseHeapData) -> Promise {
        self.promises.push(Some(data));
        Promise(PromiseIndex::last(&self.promises))
    }
}
