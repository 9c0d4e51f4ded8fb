// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;

use std::ops::{Index, IndexMut};

use super::{
    String, Value,
    value::{FLOAT_DISCRIMINANT, INTEGER_DISCRIMINANT, NUMBER_DISCRIMINANT},
};
use crate::{
    SmallInteger,
    ecmascript::execution::Agent,
    heap::{CreateHeapData, indexes::NumberIndex},
};

pub use data::NumberHeapData;

/// A handle to a number stored in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HeapNumber(pub(crate) NumberIndex);

impl HeapNumber {
    pub(crate) const fn _def() -> Self {
        HeapNumber(NumberIndex::from_u32_index(0))
    }

    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }
}

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
#[derive(Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum Number {
    Number(HeapNumber) = NUMBER_DISCRIMINANT,
    // 56-bit signed integer.
    Integer(SmallInteger) = INTEGER_DISCRIMINANT,
    Float(f32) = FLOAT_DISCRIMINANT,
}

impl std::fmt::Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Number::Number(idx) => write!(f, "Number({idx:?})"),
            Number::Integer(value) => write!(f, "{}", value.into_i64()),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<SmallInteger> for Number {
    fn from(value: SmallInteger) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(SmallInteger::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        let n = value.min(SmallInteger::MAX).max(SmallInteger::MIN);
        // SAFETY: Clamped to the valid range above.
        Number::Integer(unsafe { SmallInteger::from_i64_unchecked(n) })
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value)
    }
}

impl TryFrom<f64> for Number {
    type Error = ();
    fn try_from(value: f64) -> Result<Self, ()> {
        if let Ok(value) = SmallInteger::try_from(value) {
            Ok(Number::Integer(value))
        } else if value as f32 as f64 == value {
            Ok(Number::Float(value as f32))
        } else {
            Err(())
        }
    }
}

impl TryFrom<Value> for Number {
    type Error = ();
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if matches!(
            value,
            Value::Number(_) | Value::Integer(_) | Value::Float(_)
        ) {
            // SAFETY: Sub-enum.
            Ok(unsafe { std::mem::transmute::<Value, Number>(value) })
        } else {
            Err(())
        }
    }
}

impl Number {
    pub fn new(value: Value) -> Self {
        debug_assert!(matches!(
            value,
            Value::Number(_) | Value::Integer(_) | Value::Float(_)
        ));
        // SAFETY: Sub-enum.
        unsafe { std::mem::transmute::<Value, Number>(value) }
    }

    pub fn from_f64(agent: &mut Agent, value: f64) -> Self {
        agent.heap.create(value)
    }

    pub fn nan() -> Self {
        Self::from(f32::NAN)
    }

    pub fn neg_zero() -> Self {
        Self::from(-0.0f32)
    }

    pub fn pos_zero() -> Self {
        Self::from(0)
    }

    pub fn pos_inf() -> Self {
        Self::from(f32::INFINITY)
    }

    pub fn neg_inf() -> Self {
        Self::from(f32::NEG_INFINITY)
    }

    pub fn into_value(self) -> Value {
        // SAFETY: Sub-enum.
        unsafe { std::mem::transmute::<Number, Value>(self) }
    }

    pub fn is_nan(self, agent: &Agent) -> bool {
        match self {
            Number::Number(n) => agent[n].data.is_nan(),
            Number::Integer(_) => false,
            Number::Float(n) => n.is_nan(),
        }
    }

    pub fn is_pos_zero(self, agent: &Agent) -> bool {
        match self {
            Number::Number(n) => {
                let n = agent[n].data;
                n == 0.0 && n.is_sign_positive()
            }
            Number::Integer(n) => n.into_i64() == 0,
            Number::Float(n) => n == 0.0 && n.is_sign_positive(),
        }
    }

    pub fn is_neg_zero(self, agent: &Agent) -> bool {
        match self {
            Number::Number(n) => {
                let n = agent[n].data;
                n == 0.0 && n.is_sign_negative()
            }
            Number::Integer(_) => false,
            Number::Float(n) => n == 0.0 && n.is_sign_negative(),
        }
    }

    pub fn into_f64(self, agent: &Agent) -> f64 {
        match self {
            Number::Number(n) => agent[n].data,
            Number::Integer(n) => n.into_i64() as f64,
            Number::Float(n) => n as f64,
        }
    }

    /// A minimal version of ObjectIs when you know the arguments are numbers.
    pub fn is(self, agent: &Agent, y: Self) -> bool {
        match (self, y) {
            (Number::Number(x), Number::Number(y)) => agent[x].data == agent[y].data,
            (Number::Number(x), Number::Integer(y)) => agent[x].data == y.into_i64() as f64,
            (Number::Number(x), Number::Float(y)) => agent[x].data == y as f64,
            (Number::Integer(x), Number::Number(y)) => (x.into_i64() as f64) == agent[y].data,
            (Number::Integer(x), Number::Integer(y)) => x.into_i64() == y.into_i64(),
            (Number::Integer(x), Number::Float(y)) => (x.into_i64() as f64) == y as f64,
            (Number::Float(x), Number::Number(y)) => (x as f64) == agent[y].data,
            (Number::Float(x), Number::Integer(y)) => (x as f64) == y.into_i64() as f64,
            (Number::Float(x), Number::Float(y)) => x == y,
        }
    }

    /// ### [6.1.6.1.14 Number::sameValue ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-sameValue)
    pub fn same_value(self, agent: &Agent, y: Self) -> bool {
        let x = self;

        // 1. If x is NaN and y is NaN, return true.
        if x.is_nan(agent) && y.is_nan(agent) {
            return true;
        }

        // 2. If x is +0𝔽 and y is -0𝔽, return false.
        if x.is_pos_zero(agent) && y.is_neg_zero(agent) {
            return false;
        }

        // 3. If x is -0𝔽 and y is +0𝔽, return false.
        if x.is_neg_zero(agent) && y.is_pos_zero(agent) {
            return false;
        }

        // 4. If x is y, return true.
        if x.is(agent, y) {
            return true;
        }

        // 5. Return false.
        false
    }

    /// Render the number in decimal, following the JavaScript number to
    /// string algorithm.
    pub fn to_string_radix_10(agent: &mut Agent, x: Self) -> String {
        let mut buffer = ryu_js::Buffer::new();
        let string = buffer.format(x.into_f64(agent));
        String::from_str(agent, string)
    }
}

impl Index<HeapNumber> for Agent {
    type Output = NumberHeapData;

    fn index(&self, index: HeapNumber) -> &Self::Output {
        &self.heap.numbers[index]
    }
}

impl IndexMut<HeapNumber> for Agent {
    fn index_mut(&mut self, index: HeapNumber) -> &mut Self::Output {
        &mut self.heap.numbers[index]
    }
}

impl Index<HeapNumber> for Vec<Option<NumberHeapData>> {
    type Output = NumberHeapData;

    fn index(&self, index: HeapNumber) -> &Self::Output {
        self.get(index.get_index())
            .expect("HeapNumber out of bounds")
            .as_ref()
            .expect("HeapNumber slot empty")
    }
}

impl IndexMut<HeapNumber> for Vec<Option<NumberHeapData>> {
    fn index_mut(&mut self, index: HeapNumber) -> &mut Self::Output {
        self.get_mut(index.get_index())
            .expect("HeapNumber out of bounds")
            .as_mut()
            .expect("HeapNumber slot empty")
    }
}
