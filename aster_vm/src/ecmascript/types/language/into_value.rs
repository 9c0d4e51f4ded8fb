// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::Value;

pub trait IntoValue
where
    Self: Sized + Copy,
{
    /// Convert the value into a [`Value`] handle.
    fn into_value(self) -> Value;
}

impl<T> IntoValue for T
where
    T: Into<Value> + Sized + Copy,
{
    #[inline]
    fn into_value(self) -> Value {
        self.into()
    }
}
