// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use log::warn;
use nalgebra::Vector3;

use crate::atom::Atom;
use crate::unit_cell::UnitCell;
use crate::Vector3D;

/// Default factor used to guess bonds between atoms.
const DEFAULT_RADIUS_FACTOR: f64 = 0.55;

/// Connectivity inference: find which pairs of atoms are bonded.
///
/// Implementations get atoms and positions of the same length, and must
/// return pairs of distinct, in-range indices.
pub trait GuessBonds {
    fn guess_bonds(
        &self,
        atoms: &[Atom],
        positions: &[Vector3D],
        cell: &UnitCell,
    ) -> Vec<(usize, usize)>;
}

/// Distance based bond guessing.
///
/// Two atoms are bonded when the distance between them (using the minimum
/// image convention of the cell) is lower than the sum of their van der
/// Waals radii multiplied by `radius_factor`.
///
/// Atoms without a van der Waals radius are never bonded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondGuesser {
    pub radius_factor: f64,
}

impl Default for BondGuesser {
    fn default() -> Self {
        BondGuesser {
            radius_factor: DEFAULT_RADIUS_FACTOR,
        }
    }
}

impl GuessBonds for BondGuesser {
    fn guess_bonds(
        &self,
        atoms: &[Atom],
        positions: &[Vector3D],
        cell: &UnitCell,
    ) -> Vec<(usize, usize)> {
        debug_assert_eq!(atoms.len(), positions.len());

        let radii: Vec<Option<f64>> = atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| {
                let radius = atom.vdw_radius();
                if radius.is_none() {
                    warn!(
                        "atom {i} ('{}') has no van der Waals radius, it will not be bonded",
                        atom.name
                    );
                }
                radius
            })
            .collect();

        let mut bonds = Vec::new();
        for i in 0..positions.len() {
            let Some(r_i) = radii[i] else { continue };
            let position_i = Vector3::from(positions[i]);
            for j in (i + 1)..positions.len() {
                let Some(r_j) = radii[j] else { continue };
                let delta = Vector3::from(positions[j]) - position_i;
                let distance = Vector3::from(cell.wrap(delta.into())).norm();
                if distance < self.radius_factor * (r_i + r_j) {
                    bonds.push((i, j));
                }
            }
        }
        bonds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(atoms: &[&str], positions: &[Vector3D], cell: &UnitCell) -> Vec<(usize, usize)> {
        let atoms: Vec<Atom> = atoms.iter().map(|&name| Atom::new(name)).collect();
        BondGuesser::default().guess_bonds(&atoms, positions, cell)
    }

    #[test]
    fn water() {
        let positions = [[0.0, 0.0, 0.0], [0.757, 0.586, 0.0], [-0.757, 0.586, 0.0]];
        let bonds = guess(&["O", "H", "H"], &positions, &UnitCell::infinite());
        assert_eq!(bonds, vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn far_apart() {
        let positions = [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]];
        let bonds = guess(&["C", "C"], &positions, &UnitCell::infinite());
        assert!(bonds.is_empty());
    }

    #[test]
    fn across_periodic_boundary() {
        let positions = [[0.2, 5.0, 5.0], [9.8, 5.0, 5.0]];
        let mut cell = UnitCell::cubic(10.0).unwrap();
        assert_eq!(guess(&["H", "H"], &positions, &cell), vec![(0, 1)]);

        cell.set_periodic_x(false);
        assert!(guess(&["H", "H"], &positions, &cell).is_empty());
    }

    #[test]
    fn missing_radius() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let bonds = guess(&["Fe", "C"], &positions, &UnitCell::infinite());
        assert!(bonds.is_empty());

        let bonds = guess(&["X", "C"], &positions, &UnitCell::infinite());
        assert!(bonds.is_empty());
    }

    #[test]
    fn radius_factor() {
        let atoms = [Atom::new("C"), Atom::new("C")];
        let positions = [[0.0, 0.0, 0.0], [2.5, 0.0, 0.0]];
        let cell = UnitCell::infinite();

        assert!(BondGuesser::default()
            .guess_bonds(&atoms, &positions, &cell)
            .is_empty());

        let loose = BondGuesser { radius_factor: 0.8 };
        assert_eq!(loose.guess_bonds(&atoms, &positions, &cell), vec![(0, 1)]);
    }
}
