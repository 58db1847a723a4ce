// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::ops::Index;

use crate::{
    angle::Angle,
    atom::Atom,
    bond::{Bond, BondOrder},
    connectivity::Connectivity,
    dihedral::Dihedral,
    error::CError,
};

/// The atoms of a system and the bonds between them.
///
/// Atoms are indexed contiguously from 0. Every bond references two
/// distinct atoms of this topology.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Topology {
    /// Atoms in the system
    atoms: Vec<Atom>,

    /// Connectivity of the system
    connect: Connectivity,
}

impl Index<usize> for Topology {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl Topology {
    pub fn new() -> Self {
        Topology::default()
    }

    pub fn with_atoms(atoms: Vec<Atom>) -> Self {
        Topology {
            atoms,
            connect: Connectivity::default(),
        }
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), CError> {
        if index >= self.size() {
            return Err(CError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    fn check_bond(&self, i: usize, j: usize) -> Result<(), CError> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j {
            return Err(CError::InvalidBond(i));
        }
        Ok(())
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// Remove the atom at `index`, together with all its bonds. The atoms
    /// after it are shifted down by one.
    pub fn remove(&mut self, index: usize) -> Result<Atom, CError> {
        self.check_index(index)?;
        self.connect.atom_removed(index);
        Ok(self.atoms.remove(index))
    }

    /// Resize the topology to hold `size` atoms. New atoms have an empty name;
    /// shrinking drops the bonds involving removed atoms.
    pub fn resize(&mut self, size: usize) {
        if size < self.atoms.len() {
            self.connect.truncate(size);
            self.atoms.truncate(size);
        }
        self.atoms.resize_with(size, || Atom::new(""));
    }

    /// Add a bond of unknown order between `i` and `j`.
    pub fn add_bond(&mut self, i: usize, j: usize) -> Result<(), CError> {
        self.add_bond_with_order(i, j, BondOrder::Unknown)
    }

    /// Add a bond between `i` and `j`. If the bond already exists, its order
    /// is not modified.
    pub fn add_bond_with_order(
        &mut self,
        i: usize,
        j: usize,
        bond_order: BondOrder,
    ) -> Result<(), CError> {
        self.check_bond(i, j)?;
        self.connect.add_bond(i, j, bond_order);
        Ok(())
    }

    /// Remove the bond between `i` and `j`, if it exists.
    pub fn remove_bond(&mut self, i: usize, j: usize) -> Result<(), CError> {
        self.check_bond(i, j)?;
        self.connect.remove_bond(i, j);
        Ok(())
    }

    pub fn clear_bonds(&mut self) {
        self.connect.clear();
    }

    /// Replace all the bonds with bonds of unknown order. Nothing is modified
    /// if any of the pairs is invalid.
    pub fn set_bonds(&mut self, bonds: &[(usize, usize)]) -> Result<(), CError> {
        for &(i, j) in bonds {
            self.check_bond(i, j)?;
        }
        self.connect.set_bonds(
            bonds
                .iter()
                .map(|&(i, j)| (Bond::new(i, j), BondOrder::Unknown)),
        );
        Ok(())
    }

    /// All the bonds, sorted
    pub fn bonds(&self) -> Vec<Bond> {
        self.connect.bonds().collect()
    }

    /// Orders of all the bonds, matching [`Topology::bonds`]
    pub fn bond_orders(&self) -> Vec<BondOrder> {
        self.connect.bond_orders().collect()
    }

    /// Order of the bond between `i` and `j`, or `None` if there is no such
    /// bond.
    pub fn bond_order(&self, i: usize, j: usize) -> Option<BondOrder> {
        self.connect.bond_order(i, j)
    }

    pub fn angles(&self) -> Vec<Angle> {
        self.connect.angles().iter().copied().collect()
    }

    pub fn dihedrals(&self) -> Vec<Dihedral> {
        self.connect.dihedrals().iter().copied().collect()
    }

    pub fn bonds_count(&self) -> usize {
        self.connect.bonds_count()
    }

    pub fn angles_count(&self) -> usize {
        self.connect.angles().len()
    }

    pub fn dihedrals_count(&self) -> usize {
        self.connect.dihedrals().len()
    }

    pub fn is_bond(&self, i: usize, j: usize) -> bool {
        i != j && self.connect.contains(&Bond::new(i, j))
    }

    pub fn is_angle(&self, i: usize, j: usize, k: usize) -> bool {
        i != j && i != k && j != k && self.connect.angles().contains(&Angle::new(i, j, k))
    }

    pub fn is_dihedral(&self, i: usize, j: usize, k: usize, m: usize) -> bool {
        let distinct = i != j && i != k && i != m && j != k && j != m && k != m;
        distinct
            && self
                .connect
                .dihedrals()
                .contains(&Dihedral::new(i, j, k, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_chain() -> Topology {
        let mut topology = Topology::new();
        topology.push(Atom::new("H"));
        topology.push(Atom::new("O"));
        topology.push(Atom::new("O"));
        topology.push(Atom::new("H"));
        topology
    }

    #[test]
    fn topology() {
        let mut topology = water_chain();
        assert_eq!(topology.size(), 4);
        assert_eq!(topology.bonds_count(), 0);
        assert_eq!(topology.angles_count(), 0);
        assert_eq!(topology.dihedrals_count(), 0);

        topology.add_bond(0, 1).unwrap();
        topology.add_bond(1, 2).unwrap();
        topology.add_bond(2, 3).unwrap();

        assert_eq!(topology.bonds_count(), 3);
        assert_eq!(topology.angles_count(), 2);
        assert_eq!(topology.dihedrals_count(), 1);

        assert!(topology.is_bond(0, 1));
        assert!(topology.is_bond(1, 0));
        assert!(!topology.is_bond(0, 3));
        assert!(!topology.is_bond(0, 0));

        assert!(topology.is_angle(0, 1, 2));
        assert!(!topology.is_angle(0, 1, 3));

        assert!(topology.is_dihedral(0, 1, 2, 3));
        assert!(!topology.is_dihedral(0, 1, 3, 2));

        assert_eq!(
            topology.bonds().iter().map(Bond::as_array).collect::<Vec<_>>(),
            vec![[0, 1], [1, 2], [2, 3]]
        );
        assert_eq!(
            topology.angles().iter().map(Angle::as_array).collect::<Vec<_>>(),
            vec![[0, 1, 2], [1, 2, 3]]
        );

        topology.remove_bond(2, 3).unwrap();
        assert_eq!(topology.bonds_count(), 2);
        assert_eq!(topology.angles_count(), 1);
        assert_eq!(topology.dihedrals_count(), 0);

        let removed = topology.remove(3).unwrap();
        assert_eq!(removed.name, "H");
        assert_eq!(topology.size(), 3);
    }

    #[test]
    fn invalid_bonds() {
        let mut topology = water_chain();
        assert_eq!(
            topology.add_bond(0, 4),
            Err(CError::IndexOutOfRange { index: 4, size: 4 })
        );
        assert_eq!(topology.add_bond(2, 2), Err(CError::InvalidBond(2)));
        assert!(topology.remove_bond(7, 1).is_err());

        topology.add_bond(0, 1).unwrap();
        assert!(topology.set_bonds(&[(1, 2), (2, 9)]).is_err());
        // unchanged after a failed bulk update
        assert!(topology.is_bond(0, 1));
        assert_eq!(topology.bonds_count(), 1);
    }

    #[test]
    fn set_bonds() {
        let mut topology = water_chain();
        topology.add_bond(0, 3).unwrap();
        topology.set_bonds(&[(1, 0), (2, 1)]).unwrap();
        assert!(!topology.is_bond(0, 3));
        assert_eq!(topology.bonds_count(), 2);
        assert!(topology.is_angle(2, 1, 0));

        topology.clear_bonds();
        assert_eq!(topology.bonds_count(), 0);
        assert_eq!(topology.angles_count(), 0);
    }

    #[test]
    fn remove_shifts_bonds() {
        let mut topology = water_chain();
        topology.add_bond(0, 1).unwrap();
        topology.add_bond(2, 3).unwrap();
        topology.remove(1).unwrap();

        assert_eq!(topology.size(), 3);
        assert_eq!(topology[1].name, "O");
        assert_eq!(topology.bonds(), vec![Bond::new(1, 2)]);

        assert!(topology.remove(3).is_err());
    }

    #[test]
    fn resize() {
        let mut topology = water_chain();
        topology.add_bond(0, 1).unwrap();
        topology.add_bond(2, 3).unwrap();

        topology.resize(6);
        assert_eq!(topology.size(), 6);
        assert_eq!(topology[5].name, "");
        assert_eq!(topology.bonds_count(), 2);

        topology.resize(3);
        assert_eq!(topology.size(), 3);
        assert_eq!(topology.bonds(), vec![Bond::new(0, 1)]);
    }

    #[test]
    fn atoms() {
        let mut topology = water_chain();
        topology.atom_mut(0).unwrap().charge = 0.4;
        assert_eq!(topology.atom(0).unwrap().charge, 0.4);
        assert!(topology.atom(4).is_none());
        assert_eq!(topology.atoms().len(), 4);
        assert!(!topology.is_empty());
        assert!(Topology::new().is_empty());
    }

    #[test]
    fn bond_orders() {
        let mut topology = water_chain();
        topology.add_bond(0, 1).unwrap();
        topology
            .add_bond_with_order(2, 1, BondOrder::Double)
            .unwrap();
        topology.add_bond(2, 3).unwrap();

        assert_eq!(
            topology.bond_orders(),
            vec![BondOrder::Unknown, BondOrder::Double, BondOrder::Unknown]
        );
        assert_eq!(topology.bond_order(1, 2), Some(BondOrder::Double));
        assert_eq!(topology.bond_order(0, 3), None);
        assert_eq!(
            topology.add_bond_with_order(1, 1, BondOrder::Single),
            Err(CError::InvalidBond(1))
        );

        topology.remove(0).unwrap();
        assert_eq!(topology.bond_order(0, 1), Some(BondOrder::Double));
    }

    #[test]
    fn bond_by_bond_chain() {
        let mut topology = Topology::new();
        topology.resize(20_000);
        for i in 1..20_000 {
            topology.add_bond(i - 1, i).unwrap();
        }
        assert_eq!(topology.bonds_count(), 19_999);
        assert_eq!(topology.angles_count(), 19_998);
        assert_eq!(topology.dihedrals_count(), 19_997);

        topology.resize(10);
        assert_eq!(topology.bonds_count(), 9);
        assert_eq!(topology.dihedrals_count(), 7);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds() {
        let topology = Topology::new();
        let _ = &topology[0];
    }
}
