// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Object;
use crate::heap::ObjectEntry;

/// Heap data of an ordinary object.
///
/// Property entries are stored in insertion order. Integer keys are only
/// sorted ahead of the rest when own property keys are listed.
#[derive(Debug, Clone)]
pub struct ObjectHeapData {
    pub(crate) extensible: bool,
    pub(crate) prototype: Option<Object>,
    pub(crate) entries: Vec<ObjectEntry>,
}
