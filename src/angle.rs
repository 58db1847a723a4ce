// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::ops::Index;

/// Ensures a canonical representation of an angle between
/// three atoms.
///
/// An angle is formed by two consecutive bonds:
///
/// ```text
///     |  i       k  |
///     |    \   /    |
///     |      j      |
/// ```
///
/// The outer atoms are sorted, so `(i, j, k)` and `(k, j, i)` are the same
/// angle.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Angle {
    data: [usize; 3],
}

impl Index<usize> for Angle {
    type Output = usize;

    /// Get the index of the `i`th atom (`i == 0`, `i == 1` or `i == 2`) in the
    /// angle.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not 0, 1, or 2
    fn index(&self, index: usize) -> &Self::Output {
        if index >= 3 {
            panic!("can not access atom n° {index} in angle")
        }
        &self.data[index]
    }
}

impl Angle {
    /// Create a new angle centered on `j`.
    ///
    /// # Panics
    ///
    /// Panics if the same atom appears twice.
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        if i == j || i == k || j == k {
            panic!("can not have the same atom twice in an angle")
        }
        Angle {
            data: [i.min(k), j, i.max(k)],
        }
    }

    pub fn as_array(&self) -> [usize; 3] {
        self.data
    }
}
