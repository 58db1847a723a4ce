// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::ops::Index;

/// The order of a bond, as found in chemical file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    /// Bond order is unknown or unspecified
    #[default]
    Unknown,

    /// Single bond
    Single,

    /// Double bond
    Double,

    /// Triple bond
    Triple,

    /// Quadruplet bond
    Quadruple,

    /// Quintuplet bond
    Quintuplet,

    /// Single bond direction from first atom to second is 'down'. Used for cis-trans isomers
    Down,

    /// Single bond direction from first atom to second is 'up'. Used for cis-trans isomers
    Up,

    /// Dative bond where the electrons are localized to the first atom
    DativeR,

    /// Dative bond where the electrons are localized to the second atom
    DativeL,

    /// Amide bond (C(=O)-NH)
    Amide,

    /// Aromatic bond (for example the ring bonds in benzene)
    Aromatic,
}

/// Ensures a canonical representation of a bond between two atoms: the
/// smaller index always comes first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Bond {
    data: [usize; 2],
}

impl Index<usize> for Bond {
    type Output = usize;

    /// Access one of the two atom indices in the bond.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2`.
    fn index(&self, index: usize) -> &Self::Output {
        if index >= 2 {
            panic!("can not access atom n° {index} in bond");
        }
        &self.data[index]
    }
}

impl Bond {
    /// Create a new bond between `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i == j`.
    pub fn new(i: usize, j: usize) -> Self {
        if i == j {
            panic!("can not have a bond between an atom and itself");
        }
        Bond {
            data: [i.min(j), i.max(j)],
        }
    }

    /// Does this bond involve atom `index`?
    pub fn contains(&self, index: usize) -> bool {
        self.data.contains(&index)
    }

    pub fn as_array(&self) -> [usize; 2] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical() {
        let bond = Bond::new(5, 2);
        assert_eq!(bond[0], 2);
        assert_eq!(bond[1], 5);
        assert_eq!(bond, Bond::new(2, 5));
        assert!(bond.contains(5));
        assert!(!bond.contains(3));
    }

    #[test]
    #[should_panic(expected = "can not have a bond between an atom and itself")]
    fn self_bond() {
        let _ = Bond::new(3, 3);
    }

    #[test]
    #[should_panic(expected = "can not access atom n° 2 in bond")]
    fn out_of_bounds() {
        let _ = Bond::new(0, 1)[2];
    }
}
