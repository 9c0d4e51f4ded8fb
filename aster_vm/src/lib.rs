// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Aster
//!
//! An embedded object engine carrying exactly the machinery that structural
//! reflection needs: values, ordinary objects with property descriptors,
//! prototype chains, errors, promises, and a handful of builtin function
//! flavors. On top of it lives [promisify], which installs promise-returning
//! siblings next to callback-style members of arbitrary objects.

pub mod ecmascript;
pub(crate) mod heap;
pub mod promisify;
mod small_integer;

pub use small_integer::SmallInteger;
