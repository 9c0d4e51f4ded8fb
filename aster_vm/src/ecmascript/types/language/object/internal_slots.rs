// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, OrdinaryObject};
use crate::ecmascript::execution::{Agent, ProtoIntrinsics};

/// ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
///
/// Exotic objects keep their named properties in an optional backing
/// ordinary object. The backing object is created on demand: an exotic
/// object that no-one has assigned properties onto has no backing object
/// and answers the slot methods from its defaults.
pub trait InternalSlots
where
    Self: Sized + Clone + Copy + Into<Object>,
{
    /// The prototype an object of this kind has before anyone has replaced
    /// it, as an intrinsic of the object's realm.
    const DEFAULT_PROTOTYPE: ProtoIntrinsics;

    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject>;

    /// Create the backing object and store it in the exotic object's heap
    /// data. Only called once per exotic object.
    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject;

    fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        match self.get_backing_object(agent) {
            Some(backing_object) => backing_object,
            None => self.create_backing_object(agent),
        }
    }

    /// #### \[\[Extensible\]\]
    ///
    /// Every ordinary object has a Boolean-valued \[\[Extensible\]\]
    /// internal slot which is used to fulfill the extensibility-related
    /// internal method invariants specified in [6.1.7.3](https://tc39.es/ecma262/#sec-invariants-of-the-essential-internal-methods).
    fn internal_extensible(self, agent: &Agent) -> bool {
        match self.get_backing_object(agent) {
            Some(backing_object) => backing_object.internal_extensible(agent),
            None => true,
        }
    }

    /// #### \[\[Extensible\]\]
    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        if let Some(backing_object) = self.get_backing_object(agent) {
            backing_object.internal_set_extensible(agent, value)
        } else if !value {
            self.create_backing_object(agent)
                .internal_set_extensible(agent, value)
        }
    }

    /// #### \[\[Prototype\]\]
    ///
    /// All ordinary objects have an internal slot called \[\[Prototype\]\].
    /// The value of this internal slot is either null or an object and is
    /// used for implementing inheritance.
    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        match self.get_backing_object(agent) {
            Some(backing_object) => backing_object.internal_prototype(agent),
            None => Some(
                agent
                    .current_realm()
                    .intrinsics()
                    .get_intrinsic_default_proto(Self::DEFAULT_PROTOTYPE),
            ),
        }
    }

    /// #### \[\[Prototype\]\]
    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        if let Some(backing_object) = self.get_backing_object(agent) {
            backing_object.internal_set_prototype(agent, prototype)
        } else {
            let default_proto = agent
                .current_realm()
                .intrinsics()
                .get_intrinsic_default_proto(Self::DEFAULT_PROTOTYPE);
            if prototype == Some(default_proto) {
                return;
            }
            self.create_backing_object(agent)
                .internal_set_prototype(agent, prototype)
        }
    }
}
