//! The fixed-length array container.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::slice;

use crate::error::Error;
use crate::value::Value;

/// A fixed-length indexed sequence of [`Value`]s.
///
/// The length is fixed at creation and every slot starts as `Value::Null`.
/// There is no resize operation; [`Array::set`] replaces (and drops) the
/// prior occupant of a slot, and out-of-range access is an
/// [`Error::IndexOutOfBounds`], never silently clamped.
///
/// # Examples
///
/// ```
/// use jsoncodec::{Array, Value};
///
/// let mut array = Array::new(3);
/// array.set(1, Value::Bool(true))?;
/// assert!(array.get(0)?.is_null());
/// assert_eq!(array.get(1)?, &Value::Bool(true));
/// assert!(array.get(3).is_err());
/// # Ok::<(), jsoncodec::Error>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    slots: Box<[Value]>,
}

impl Array {
    /// Creates an array of `len` slots, each initialized to `Value::Null`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Value::Null; len].into_boxed_slice(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array has zero slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), Error> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
        }
    }

    /// Borrows the value at `index`. Ownership stays with the array.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Value, Error> {
        self.check(index)?;
        Ok(&self.slots[index])
    }

    /// Mutably borrows the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value, Error> {
        self.check(index)?;
        Ok(&mut self.slots[index])
    }

    /// Moves `value` into the slot at `index`, dropping the prior occupant.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= len`; `value` is dropped
    /// along with the error.
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), Error> {
        self.check(index)?;
        self.slots[index] = value;
        Ok(())
    }

    /// Iterator over the slots in index order.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.slots.iter()
    }
}

impl From<Vec<Value>> for Array {
    /// Fixes the length of `values` and adopts them as the array's slots.
    fn from(values: Vec<Value>) -> Self {
        Self {
            slots: values.into_boxed_slice(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_array_is_all_null() {
        let array = Array::new(4);
        assert_eq!(array.len(), 4);
        for index in 0..4 {
            assert!(array.get(index).unwrap().is_null());
        }
    }

    #[test]
    fn set_replaces_prior_occupant() {
        let mut array = Array::new(2);
        array.set(0, Value::Number(1.0)).unwrap();
        array.set(0, Value::Number(2.0)).unwrap();
        assert_eq!(array.get(0), Ok(&Value::Number(2.0)));
    }

    #[test]
    fn out_of_bounds_is_an_error_not_a_clamp() {
        let mut array = Array::new(2);
        let err = Error::IndexOutOfBounds { index: 2, len: 2 };
        assert_eq!(array.get(2), Err(err.clone()));
        assert_eq!(array.set(2, Value::Null), Err(err));
        assert_eq!(
            array.get(99),
            Err(Error::IndexOutOfBounds { index: 99, len: 2 })
        );
    }

    #[test]
    fn zero_length_array() {
        let array = Array::new(0);
        assert!(array.is_empty());
        assert_eq!(
            array.get(0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn iteration_in_index_order() {
        let mut array = Array::new(3);
        array.set(0, Value::Number(0.0)).unwrap();
        array.set(2, Value::Number(2.0)).unwrap();
        let kinds: alloc::vec::Vec<bool> = array.iter().map(Value::is_null).collect();
        assert_eq!(kinds, [false, true, false]);
    }
}
