// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::agent::ExceptionType,
    types::{OrdinaryObject, String, Value},
};

#[derive(Debug, Clone)]
pub struct ErrorHeapData {
    pub(crate) object_index: Option<OrdinaryObject>,
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
    pub(crate) cause: Option<Value>,
}

impl ErrorHeapData {
    pub(crate) fn new(kind: ExceptionType, message: Option<String>, cause: Option<Value>) -> Self {
        Self {
            object_index: None,
            kind,
            message,
            cause,
        }
    }
}
