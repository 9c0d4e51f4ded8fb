// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod builtin_function;
pub mod control_abstraction_objects;
pub mod error;
pub(crate) mod fundamental_objects;
pub mod ordinary;
pub mod promise;
pub mod promisified_function;
pub mod promisified_getter;

pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunction, BuiltinFunctionArgs, ConstructorFn,
    RegularFn, create_builtin_function,
};
