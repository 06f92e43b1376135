//! Whole-container reductions
//!
//! Left folds and linear scans over all positions of one vector: element
//! sum and product (seeded by the first element cast to the output type),
//! and minimum/maximum tracking with first-seen tie behaviour.

use crate::traits::Scalar;
use crate::vector::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Sum of all elements, folded left in the output type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vega_math::Vector;
    ///
    /// let v = Vector::new([1i32, 2, 3, 4]);
    /// let total: f64 = v.element_sum();
    /// assert_eq!(total, 10.0);
    /// ```
    #[inline]
    pub fn element_sum<O: Scalar>(&self) -> O {
        let mut acc: O = self.0[0].cast();
        for i in 1..N {
            acc = acc + self.0[i].cast();
        }
        acc
    }

    /// Product of all elements, folded left in the output type.
    #[inline]
    pub fn element_product<O: Scalar>(&self) -> O {
        let mut acc: O = self.0[0].cast();
        for i in 1..N {
            acc = acc * self.0[i].cast();
        }
        acc
    }

    /// Smallest element.
    #[inline]
    pub fn min_element(&self) -> T {
        self.min_element_index().1
    }

    /// Largest element.
    #[inline]
    pub fn max_element(&self) -> T {
        self.max_element_index().1
    }

    /// Smallest element and its position; ties keep the first-seen index.
    #[inline]
    pub fn min_element_index(&self) -> (usize, T) {
        let mut idx = 0;
        let mut best = self.0[0];
        for i in 1..N {
            if self.0[i] < best {
                idx = i;
                best = self.0[i];
            }
        }
        (idx, best)
    }

    /// Largest element and its position; ties keep the first-seen index.
    #[inline]
    pub fn max_element_index(&self) -> (usize, T) {
        let mut idx = 0;
        let mut best = self.0[0];
        for i in 1..N {
            if self.0[i] > best {
                idx = i;
                best = self.0[i];
            }
        }
        (idx, best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_and_product() {
        let v = Vector::new([1, 2, 3, 4]);
        assert_eq!(v.element_sum::<i32>(), 10);
        assert_eq!(v.element_product::<i32>(), 24);
        // output type chosen independently of the element type
        assert_eq!(v.element_sum::<f32>(), 10.0);
    }

    #[test]
    fn single_element_reductions() {
        let v = Vector::new([5i32]);
        assert_eq!(v.element_sum::<i32>(), 5);
        assert_eq!(v.element_product::<i32>(), 5);
    }

    #[test]
    fn min_max_tracking() {
        let v = Vector::new([3.0f32, -1.0, 7.0, -1.0]);
        assert_eq!(v.min_element(), -1.0);
        assert_eq!(v.max_element(), 7.0);
        // first-seen index wins on ties
        assert_eq!(v.min_element_index(), (1, -1.0));
        assert_eq!(v.max_element_index(), (2, 7.0));
    }
}
