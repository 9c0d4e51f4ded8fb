// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builtins::Behaviour,
    types::{OrdinaryObject, String},
};

#[derive(Debug, Clone)]
pub struct BuiltinFunctionHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) length: u8,
    /// #### \[\[InitialName]]
    ///
    /// A String that is the initial name of the function.
    pub(crate) initial_name: Option<String>,
    pub(crate) behaviour: Behaviour,
}
