// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::{
    angle::Angle,
    bond::{Bond, BondOrder},
    dihedral::Dihedral,
};

/// Angles and dihedrals implied by a set of bonds
#[derive(Default, Debug, Clone, PartialEq)]
struct Derived {
    angles: BTreeSet<Angle>,
    dihedrals: BTreeSet<Dihedral>,
}

/// Bonds between atoms (with their order), and the angles and dihedrals they
/// imply.
///
/// Angles and dihedrals are cached: any change to the bonds invalidates the
/// cache, and the next read rebuilds it once. Adding many bonds one by one is
/// thus linear in the number of bonds.
#[derive(Default, Debug, Clone)]
pub struct Connectivity {
    /// Bonds in this connectivity, with their order
    bonds: BTreeMap<Bond, BondOrder>,

    /// Cached angles and dihedrals, empty when out of date
    derived: OnceLock<Derived>,
}

impl PartialEq for Connectivity {
    fn eq(&self, other: &Self) -> bool {
        self.bonds == other.bonds
    }
}

impl Connectivity {
    pub fn bonds(&self) -> impl ExactSizeIterator<Item = Bond> + '_ {
        self.bonds.keys().copied()
    }

    /// Bond orders, in the same order as [`Connectivity::bonds`]
    pub fn bond_orders(&self) -> impl ExactSizeIterator<Item = BondOrder> + '_ {
        self.bonds.values().copied()
    }

    pub fn bonds_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn contains(&self, bond: &Bond) -> bool {
        self.bonds.contains_key(bond)
    }

    /// Get the order of the bond between `i` and `j`, if this bond exists
    pub fn bond_order(&self, i: usize, j: usize) -> Option<BondOrder> {
        if i == j {
            return None;
        }
        self.bonds.get(&Bond::new(i, j)).copied()
    }

    pub fn angles(&self) -> &BTreeSet<Angle> {
        &self.derived().angles
    }

    pub fn dihedrals(&self) -> &BTreeSet<Dihedral> {
        &self.derived().dihedrals
    }

    fn derived(&self) -> &Derived {
        self.derived.get_or_init(|| recalculate(&self.bonds))
    }

    fn invalidate(&mut self) {
        self.derived.take();
    }

    /// Add a bond between atoms `i` and `j`. An existing bond keeps its order.
    pub fn add_bond(&mut self, i: usize, j: usize, bond_order: BondOrder) {
        if let Entry::Vacant(entry) = self.bonds.entry(Bond::new(i, j)) {
            entry.insert(bond_order);
            self.invalidate();
        }
    }

    /// Remove any bond between atoms `i` and `j`
    pub fn remove_bond(&mut self, i: usize, j: usize) {
        if self.bonds.remove(&Bond::new(i, j)).is_some() {
            self.invalidate();
        }
    }

    /// Replace all the bonds at once
    pub fn set_bonds(&mut self, bonds: impl IntoIterator<Item = (Bond, BondOrder)>) {
        self.bonds = bonds.into_iter().collect();
        self.invalidate();
    }

    pub fn clear(&mut self) {
        self.bonds.clear();
        self.invalidate();
    }

    /// Update the bonds after the removal of atom `index`.
    ///
    /// Bonds involving this atom are removed, and all indices bigger than
    /// `index` are shifted by -1.
    pub fn atom_removed(&mut self, index: usize) {
        let shift = |i: usize| if i > index { i - 1 } else { i };
        let bonds = std::mem::take(&mut self.bonds);
        self.set_bonds(
            bonds
                .into_iter()
                .filter(|(bond, _)| !bond.contains(index))
                .map(|(bond, order)| (Bond::new(shift(bond[0]), shift(bond[1])), order)),
        );
    }

    /// Remove all the bonds involving atoms with an index of `size` or more.
    pub fn truncate(&mut self, size: usize) {
        let before = self.bonds.len();
        // the second index of a bond is the biggest one
        self.bonds.retain(|bond, _| bond[1] < size);
        if self.bonds.len() != before {
            self.invalidate();
        }
    }
}

fn recalculate(bonds: &BTreeMap<Bond, BondOrder>) -> Derived {
    let mut derived = Derived::default();

    // Generate the list of which atom is bonded to which one
    let mut bonded_to: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for bond in bonds.keys() {
        bonded_to.entry(bond[0]).or_default().push(bond[1]);
        bonded_to.entry(bond[1]).or_default().push(bond[0]);
    }
    let neighbors = |i: usize| bonded_to.get(&i).map(Vec::as_slice).unwrap_or(&[]);

    // Generate list of angles
    for bond in bonds.keys() {
        let i = bond[0];
        let j = bond[1];
        for &k in neighbors(i) {
            if k != j {
                derived.angles.insert(Angle::new(k, i, j));
            }
        }

        for &k in neighbors(j) {
            if k != i {
                derived.angles.insert(Angle::new(i, j, k));
            }
        }
    }

    // Generate list of dihedrals
    for angle in &derived.angles {
        let i = angle[0];
        let j = angle[1];
        let k = angle[2];

        for &m in neighbors(i) {
            if m != j && m != k {
                derived.dihedrals.insert(Dihedral::new(m, i, j, k));
            }
        }

        for &m in neighbors(k) {
            if m != i && m != j {
                derived.dihedrals.insert(Dihedral::new(i, j, k, m));
            }
        }
    }

    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(bonds: &[(usize, usize)]) -> Connectivity {
        let mut connect = Connectivity::default();
        connect.set_bonds(
            bonds
                .iter()
                .map(|&(i, j)| (Bond::new(i, j), BondOrder::Unknown)),
        );
        connect
    }

    #[test]
    fn chain_angles_and_dihedrals() {
        let mut connect = Connectivity::default();
        connect.add_bond(0, 1, BondOrder::Single);
        connect.add_bond(1, 2, BondOrder::Single);
        connect.add_bond(2, 3, BondOrder::Single);
        // duplicated bonds are ignored
        connect.add_bond(3, 2, BondOrder::Double);

        assert_eq!(connect.bonds_count(), 3);
        assert_eq!(connect.bond_order(2, 3), Some(BondOrder::Single));
        assert_eq!(
            connect.angles().iter().copied().collect::<Vec<_>>(),
            vec![Angle::new(0, 1, 2), Angle::new(1, 2, 3)]
        );
        assert_eq!(
            connect.dihedrals().iter().copied().collect::<Vec<_>>(),
            vec![Dihedral::new(0, 1, 2, 3)]
        );

        connect.remove_bond(2, 3);
        assert_eq!(connect.bonds_count(), 2);
        assert_eq!(connect.angles().len(), 1);
        assert!(connect.dihedrals().is_empty());

        // removing a missing bond does nothing
        connect.remove_bond(0, 3);
        assert_eq!(connect.bonds_count(), 2);
    }

    #[test]
    fn cache_follows_bond_changes() {
        let mut connect = chain(&[(0, 1)]);
        assert!(connect.angles().is_empty());

        connect.add_bond(1, 2, BondOrder::Unknown);
        assert_eq!(connect.angles().len(), 1);

        connect.add_bond(2, 3, BondOrder::Unknown);
        assert_eq!(connect.dihedrals().len(), 1);

        connect.clear();
        assert!(connect.angles().is_empty());
        assert!(connect.dihedrals().is_empty());
    }

    #[test]
    fn long_chain() {
        let mut connect = Connectivity::default();
        for i in 1..20_000 {
            connect.add_bond(i - 1, i, BondOrder::Single);
        }
        assert_eq!(connect.bonds_count(), 19_999);
        assert_eq!(connect.angles().len(), 19_998);
        assert_eq!(connect.dihedrals().len(), 19_997);
    }

    #[test]
    fn ring() {
        let connect = chain(&[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(connect.angles().len(), 3);
        // the path i-j-k-i is not a dihedral
        assert!(connect.dihedrals().is_empty());
    }

    #[test]
    fn bond_orders() {
        let mut connect = Connectivity::default();
        connect.add_bond(0, 1, BondOrder::Unknown);
        connect.add_bond(3, 4, BondOrder::Unknown);
        connect.add_bond(2, 1, BondOrder::Quintuplet);

        assert_eq!(
            connect.bond_orders().collect::<Vec<_>>(),
            vec![BondOrder::Unknown, BondOrder::Quintuplet, BondOrder::Unknown]
        );
        assert_eq!(connect.bond_order(1, 2), Some(BondOrder::Quintuplet));
        assert_eq!(connect.bond_order(0, 2), None);
        assert_eq!(connect.bond_order(2, 2), None);
    }

    #[test]
    fn atom_removed() {
        let mut connect = Connectivity::default();
        connect.add_bond(0, 1, BondOrder::Single);
        connect.add_bond(1, 2, BondOrder::Single);
        connect.add_bond(3, 4, BondOrder::Aromatic);
        connect.atom_removed(1);

        assert_eq!(connect.bonds().collect::<Vec<_>>(), vec![Bond::new(2, 3)]);
        assert_eq!(connect.bond_order(2, 3), Some(BondOrder::Aromatic));
        assert!(connect.angles().is_empty());
    }

    #[test]
    fn truncate() {
        let mut connect = chain(&[(0, 1), (1, 2), (2, 3), (0, 5)]);
        assert_eq!(connect.angles().len(), 3);

        connect.truncate(3);
        assert_eq!(
            connect.bonds().collect::<Vec<_>>(),
            vec![Bond::new(0, 1), Bond::new(1, 2)]
        );
        assert_eq!(connect.angles().len(), 1);
    }

    #[test]
    fn equality_ignores_cache() {
        let connect = chain(&[(0, 1), (1, 2)]);
        assert_eq!(connect.angles().len(), 1);
        assert_eq!(connect, chain(&[(1, 2), (0, 1)]));
        assert_ne!(connect, chain(&[(0, 1)]));
    }
}
