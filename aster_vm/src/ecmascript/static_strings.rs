// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Well-known strings that fit on the stack. These are usable without an
//! agent; anything above seven bytes has to go through
//! [String::from_static_str](crate::ecmascript::types::String::from_static_str)
//! instead.

use crate::ecmascript::types::String;

pub(crate) const CAUSE: String = String::from_small_string("cause");
pub(crate) const ERROR: String = String::from_small_string("Error");
pub(crate) const LEGACY_GLOBAL: String = String::from_small_string("GLOBAL");
pub(crate) const LENGTH: String = String::from_small_string("length");
pub(crate) const MESSAGE: String = String::from_small_string("message");
pub(crate) const NAME: String = String::from_small_string("name");
pub(crate) const OBJECT: String = String::from_small_string("Object");
pub(crate) const ROOT: String = String::from_small_string("root");
pub(crate) const VALUE_OF: String = String::from_small_string("valueOf");
