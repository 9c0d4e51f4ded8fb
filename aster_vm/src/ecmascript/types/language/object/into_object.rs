// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Object;
use crate::ecmascript::types::language::into_value::IntoValue;

pub trait IntoObject
where
    Self: Sized + Copy + IntoValue,
{
    fn into_object(self) -> Object;
}

impl<T> IntoObject for T
where
    T: Into<Object> + Sized + Copy + IntoValue,
{
    #[inline]
    fn into_object(self) -> Object {
        self.into()
    }
}
