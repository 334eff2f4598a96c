//! Array-like access to literal segments.
//!
//! [`Template`] is the single boundary between statically typed sequences and
//! dynamically shaped [`Value`]s: anything that can report a `length` and read
//! an element by index can be cooked.

use std::borrow::Cow;

use crate::coerce::Coerce;
use crate::coerce::to_length;
use crate::coerce::to_number;
use crate::error::CookError;
use crate::error::Result;
use crate::value::Value;

pub trait Template {
    type Element<'a>: Coerce
    where
        Self: 'a;

    /// Fails for templates that cannot be viewed as an object (`null`,
    /// `undefined`, `None`). Checked before [`Template::length`].
    fn require_object_coercible(&self) -> Result<()> {
        Ok(())
    }

    /// Number of literal segments, already clamped to `0..=MAX_LENGTH`.
    fn length(&self) -> Result<u64>;

    /// The element stored at `index`, or `None` when the slot is absent.
    fn element_at(&self, index: u64) -> Option<Self::Element<'_>>;
}

impl<T: Coerce> Template for [T] {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    fn length(&self) -> Result<u64> {
        Ok(self.len() as u64)
    }

    fn element_at(&self, index: u64) -> Option<&T> {
        usize::try_from(index).ok().and_then(|i| self.get(i))
    }
}

impl<T: Coerce, const N: usize> Template for [T; N] {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    fn length(&self) -> Result<u64> {
        self.as_slice().length()
    }

    fn element_at(&self, index: u64) -> Option<&T> {
        self.as_slice().element_at(index)
    }
}

impl<T: Coerce> Template for Vec<T> {
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    fn length(&self) -> Result<u64> {
        self.as_slice().length()
    }

    fn element_at(&self, index: u64) -> Option<&T> {
        self.as_slice().element_at(index)
    }
}

/// `None` plays the part of `undefined`.
impl<T: Template> Template for Option<T> {
    type Element<'a>
        = T::Element<'a>
    where
        Self: 'a;

    fn require_object_coercible(&self) -> Result<()> {
        match self {
            Some(template) => template.require_object_coercible(),
            None => Err(CookError::Conversion),
        }
    }

    fn length(&self) -> Result<u64> {
        self.as_ref().ok_or(CookError::Conversion)?.length()
    }

    fn element_at(&self, index: u64) -> Option<Self::Element<'_>> {
        self.as_ref()?.element_at(index)
    }
}

impl<T: Template + ?Sized> Template for &T {
    type Element<'a>
        = T::Element<'a>
    where
        Self: 'a;

    fn require_object_coercible(&self) -> Result<()> {
        (**self).require_object_coercible()
    }

    fn length(&self) -> Result<u64> {
        (**self).length()
    }

    fn element_at(&self, index: u64) -> Option<Self::Element<'_>> {
        (**self).element_at(index)
    }
}

/// A string viewed as an object: one element per character.
///
/// Each `element_at` walks the string from the start, so cooking a string
/// template is quadratic in its length. Collect into a `Vec<char>` first for
/// long inputs.
impl Template for str {
    type Element<'a> = char;

    fn length(&self) -> Result<u64> {
        Ok(self.chars().count() as u64)
    }

    fn element_at(&self, index: u64) -> Option<char> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.chars().nth(i))
    }
}

impl Template for String {
    type Element<'a> = char;

    fn length(&self) -> Result<u64> {
        self.as_str().length()
    }

    fn element_at(&self, index: u64) -> Option<char> {
        self.as_str().element_at(index)
    }
}

impl Template for Value {
    type Element<'a> = Cow<'a, Value>;

    fn require_object_coercible(&self) -> Result<()> {
        if self.is_nullish() {
            return Err(CookError::Conversion);
        }
        Ok(())
    }

    fn length(&self) -> Result<u64> {
        match self {
            Value::Undefined | Value::Null => Err(CookError::Conversion),
            Value::Array(items) => Ok(items.len() as u64),
            Value::Object(_) => {
                let length = self.get("length").unwrap_or(&Value::Undefined);
                Ok(to_length(to_number(length)?))
            }
            Value::String(s) => s.length(),
            // Boolean, Number and Symbol wrappers carry no `length`.
            Value::Bool(_) | Value::Number(_) | Value::Symbol(_) => Ok(0),
        }
    }

    fn element_at(&self, index: u64) -> Option<Cow<'_, Value>> {
        match self {
            Value::Array(items) => usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .map(Cow::Borrowed),
            Value::Object(map) => map.get(index.to_string().as_str()).map(Cow::Borrowed),
            Value::String(s) => s.element_at(index).map(|c| Cow::Owned(Value::from(c))),
            _ => None,
        }
    }
}
