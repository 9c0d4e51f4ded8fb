// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    SmallInteger,
    ecmascript::{
        execution::Agent,
        types::{
            String, Symbol, Value,
            language::{
                string::HeapString,
                value::{
                    INTEGER_DISCRIMINANT, SMALL_STRING_DISCRIMINANT, STRING_DISCRIMINANT,
                    SYMBOL_DISCRIMINANT,
                },
            },
        },
    },
};
use small_string::SmallString;

/// ### [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys. A
/// _property key_ is either a String or a Symbol. All Strings and Symbols,
/// including the empty String, are valid as property keys. A _property name_
/// is a property key that is a String.
///
/// Integer-valued property names are stored as integers, in their canonical
/// form only: the keys `"01"`, `"+1"` and `"-0"` all stay strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PropertyKey {
    Integer(SmallInteger) = INTEGER_DISCRIMINANT,
    SmallString(SmallString) = SMALL_STRING_DISCRIMINANT,
    String(HeapString) = STRING_DISCRIMINANT,
    Symbol(Symbol) = SYMBOL_DISCRIMINANT,
}

/// Parse a string into an integer property key, if it is the canonical
/// decimal representation of an integer in the safe integer range.
fn parse_string_to_integer_property_key(str: &str) -> Option<PropertyKey> {
    if let Ok(n) = str.parse::<i64>()
        && let Ok(n) = SmallInteger::try_from(n)
        && n.into_i64().to_string() == str
    {
        Some(PropertyKey::Integer(n))
    } else {
        None
    }
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        parse_string_to_integer_property_key(str)
            .unwrap_or_else(|| String::from_str(agent, str).into())
    }

    pub fn from_static_str(agent: &mut Agent, str: &'static str) -> Self {
        parse_string_to_integer_property_key(str)
            .unwrap_or_else(|| String::from_static_str(agent, str).into())
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Self {
        parse_string_to_integer_property_key(&string)
            .unwrap_or_else(|| String::from_string(agent, string).into())
    }

    /// Convert a PropertyKey into a Value.
    ///
    /// This converts any integer keys into strings. This matches what the
    /// ECMAScript specification expects.
    pub fn convert_to_value(self, agent: &mut Agent) -> Value {
        match self {
            PropertyKey::Integer(small_integer) => {
                String::from_string(agent, small_integer.into_i64().to_string()).into()
            }
            PropertyKey::SmallString(small_string) => Value::SmallString(small_string),
            PropertyKey::String(heap_string) => Value::String(heap_string),
            PropertyKey::Symbol(symbol) => Value::Symbol(symbol),
        }
    }

    /// Convert a PropertyKey into a Value directly.
    ///
    /// This does not convert integer keys into strings. This is not correct
    /// from the specification point of view and should only be done when
    /// used with other directly converted PropertyKeys.
    ///
    /// ## Safety
    ///
    /// If the resulting Value is mixed with normal JavaScript values or
    /// passed to user code, the resulting JavaScript will not necessarily
    /// correctly match the ECMAScript specification or user's expectations.
    #[inline(always)]
    pub(crate) unsafe fn into_value_unchecked(self) -> Value {
        match self {
            PropertyKey::Integer(small_integer) => Value::Integer(small_integer),
            PropertyKey::SmallString(small_string) => Value::SmallString(small_string),
            PropertyKey::String(heap_string) => Value::String(heap_string),
            PropertyKey::Symbol(symbol) => Value::Symbol(symbol),
        }
    }

    pub(self) fn is_str_eq_num(s: &str, n: i64) -> bool {
        // TODO: Come up with an allocation-free digit comparison.
        s == n.to_string()
    }

    pub fn equals(self, agent: &Agent, y: Self) -> bool {
        let x = self;

        match (x, y) {
            // Assumes the interner is working correctly.
            (PropertyKey::String(s1), PropertyKey::String(s2)) => s1 == s2,
            (PropertyKey::SmallString(s1), PropertyKey::SmallString(s2)) => s1 == s2,
            (PropertyKey::String(s), PropertyKey::Integer(n)) => {
                Self::is_str_eq_num(s.as_str(agent), n.into_i64())
            }
            (PropertyKey::SmallString(s), PropertyKey::Integer(n)) => {
                Self::is_str_eq_num(s.as_str(), n.into_i64())
            }
            (PropertyKey::Integer(n1), PropertyKey::Integer(n2)) => n1.into_i64() == n2.into_i64(),
            (PropertyKey::Integer(_), _) => y.equals(agent, self),
            (PropertyKey::Symbol(s1), PropertyKey::Symbol(s2)) => s1 == s2,
            _ => false,
        }
    }

    /// Returns true if the PropertyKey is a Symbol.
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// Returns true if the PropertyKey is a String according to the
    /// ECMAScript specification.
    ///
    /// > Note: This returns true for Integer property keys as well.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            PropertyKey::String(_) | PropertyKey::SmallString(_) | PropertyKey::Integer(_)
        )
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        PropertyKey::Integer(value.into())
    }
}

impl From<u16> for PropertyKey {
    fn from(value: u16) -> Self {
        PropertyKey::Integer(value.into())
    }
}

impl From<u8> for PropertyKey {
    fn from(value: u8) -> Self {
        PropertyKey::Integer(value.into())
    }
}

impl From<i32> for PropertyKey {
    fn from(value: i32) -> Self {
        PropertyKey::Integer(value.into())
    }
}

impl From<i16> for PropertyKey {
    fn from(value: i16) -> Self {
        PropertyKey::Integer(value.into())
    }
}

impl From<i8> for PropertyKey {
    fn from(value: i8) -> Self {
        PropertyKey::Integer(value.into())
    }
}

impl From<SmallInteger> for PropertyKey {
    fn from(value: SmallInteger) -> Self {
        PropertyKey::Integer(value)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        match value {
            String::String(x) => PropertyKey::String(x),
            String::SmallString(x) => {
                // NOTE: Makes property keys slightly more correct by
                // converting small strings to integers when possible.
                if let Some(key) = parse_string_to_integer_property_key(x.as_str()) {
                    return key;
                }

                PropertyKey::SmallString(x)
            }
        }
    }
}

impl From<PropertyKey> for Value {
    /// Note: You should not be using this conversion without thinking.
    /// Integer keys don't actually become proper strings here, so converting
    /// a PropertyKey into a Value using this and then comparing that with an
    /// actual Value is unsound.
    fn from(value: PropertyKey) -> Self {
        // SAFETY: Don't be silly!
        unsafe { value.into_value_unchecked() }
    }
}

impl TryFrom<i64> for PropertyKey {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, ()> {
        Ok(PropertyKey::Integer(SmallInteger::try_from(value)?))
    }
}

impl TryFrom<usize> for PropertyKey {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, ()> {
        if let Ok(i64) = i64::try_from(value) {
            Self::try_from(i64)
        } else {
            Err(())
        }
    }
}

#[test]
fn compare_num_str() {
    assert!(PropertyKey::is_str_eq_num("23", 23));
    assert!(PropertyKey::is_str_eq_num("-23", -23));
    assert!(PropertyKey::is_str_eq_num("-120543809", -120543809));
    assert!(PropertyKey::is_str_eq_num("985493", 985493));
    assert!(PropertyKey::is_str_eq_num("0", 0));
    assert!(PropertyKey::is_str_eq_num("5", 5));
    assert!(PropertyKey::is_str_eq_num("-5", -5));
    assert!(PropertyKey::is_str_eq_num("9302", 9302));
    assert!(PropertyKey::is_str_eq_num("19", 19));

    assert!(!PropertyKey::is_str_eq_num("19", 91));
    assert!(!PropertyKey::is_str_eq_num("-19", 19));
}

#[test]
fn non_canonical_integer_strings_stay_strings() {
    assert_eq!(parse_string_to_integer_property_key("7"), Some(7.into()));
    assert_eq!(parse_string_to_integer_property_key("-7"), Some((-7).into()));
    assert_eq!(parse_string_to_integer_property_key("07"), None);
    assert_eq!(parse_string_to_integer_property_key("+7"), None);
    assert_eq!(parse_string_to_integer_property_key("-0"), None);
    assert_eq!(parse_string_to_integer_property_key("seven"), None);
}
