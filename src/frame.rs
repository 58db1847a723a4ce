// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::bond::BondOrder;
use crate::error::CError;
use crate::guess::{BondGuesser, GuessBonds};
use crate::property::Properties;
use crate::unit_cell::UnitCell;
use crate::Vector3D;
use crate::{atom::Atom, topology::Topology};
use log::{debug, warn};
use nalgebra::Vector3;
use std::ops::{Index, IndexMut};

/// One step of a simulation: positions, optional velocities, the topology
/// and the unit cell of the system.
///
/// The number of atoms in the frame is the number of positions. When
/// present, velocities always have the same length as the positions. The
/// topology can be replaced independently, and [`Frame::check_consistency`]
/// reports a topology that does not match the positions.
///
/// Cloning a frame gives a deep copy.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    /// Named properties of the whole frame
    pub properties: Properties,
    step: usize,
    cell: UnitCell,
    topology: Topology,
    positions: Vec<Vector3D>,
    velocities: Option<Vec<Vector3D>>,
}

impl Frame {
    /// Create an empty frame, with an infinite cell.
    pub fn new() -> Self {
        Frame::default()
    }

    /// Create a frame containing `natoms` atoms with empty names, all at the
    /// origin.
    pub fn with_size(natoms: usize) -> Self {
        let mut frame = Frame::new();
        frame.resize(natoms);
        frame
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn set_step(&mut self, step: usize) {
        self.step = step;
    }

    pub fn cell(&self) -> &UnitCell {
        &self.cell
    }

    /// Get a mutable reference to the cell. The cell validates its own
    /// mutations, so this can not break the frame.
    pub fn cell_mut(&mut self) -> &mut UnitCell {
        &mut self.cell
    }

    pub fn set_cell(&mut self, cell: UnitCell) {
        self.cell = cell;
    }

    /// Get a const reference to the topology of this frame
    ///
    /// It is not possible to get a modifiable reference to the topology,
    /// because it would then be possible to remove/add atoms without changing
    /// the actual positions and velocity storage. Instead, the mutating
    /// functionalities of the topology are mirrored on the frame (adding and
    /// removing atoms and bonds).
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Replace the topology of this frame. The positions are not resized:
    /// use [`Frame::check_consistency`] to verify that sizes match.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Number of atoms in the frame, i.e. the number of positions.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    pub fn natoms(&self) -> usize {
        self.size()
    }

    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Modify the positions in place. The number of atoms can not change
    /// through this slice.
    pub fn positions_mut(&mut self) -> &mut [Vector3D] {
        &mut self.positions
    }

    /// Replace all the positions. The topology is not resized.
    ///
    /// # Errors
    ///
    /// Returns [`CError::SizeMismatch`] if the frame has velocities of a
    /// different length; the frame is left unchanged.
    pub fn set_positions(&mut self, positions: Vec<Vector3D>) -> Result<(), CError> {
        if let Some(velocities) = &self.velocities {
            if velocities.len() != positions.len() {
                return Err(CError::SizeMismatch {
                    what: "velocities",
                    expected: positions.len(),
                    got: velocities.len(),
                });
            }
        }
        self.positions = positions;
        Ok(())
    }

    pub fn has_velocities(&self) -> bool {
        self.velocities.is_some()
    }

    pub fn velocities(&self) -> Option<&[Vector3D]> {
        self.velocities.as_deref()
    }

    pub fn velocities_mut(&mut self) -> Option<&mut [Vector3D]> {
        self.velocities.as_deref_mut()
    }

    /// Replace all the velocities. An empty `velocities` removes the
    /// velocities from the frame.
    ///
    /// # Errors
    ///
    /// Returns [`CError::SizeMismatch`] if `velocities` is not empty and does
    /// not have one entry per atom.
    pub fn set_velocities(&mut self, velocities: Vec<Vector3D>) -> Result<(), CError> {
        if velocities.is_empty() {
            self.clear_velocities();
            return Ok(());
        }

        if velocities.len() != self.positions.len() {
            return Err(CError::SizeMismatch {
                what: "velocities",
                expected: self.positions.len(),
                got: velocities.len(),
            });
        }
        self.velocities = Some(velocities);
        Ok(())
    }

    /// Add zero-filled velocities to this frame, if it does not have any.
    pub fn add_velocities(&mut self) {
        if self.velocities.is_none() {
            self.velocities = Some(vec![[0.0; 3]; self.positions.len()]);
        }
    }

    pub fn clear_velocities(&mut self) {
        self.velocities = None;
    }

    /// Resize the frame to contain `natoms` atoms. New atoms have an empty
    /// name and sit at the origin with zero velocity.
    pub fn resize(&mut self, natoms: usize) {
        self.positions.resize(natoms, [0.0; 3]);
        if let Some(velocities) = &mut self.velocities {
            velocities.resize(natoms, [0.0; 3]);
        }
        self.topology.resize(natoms);
    }

    /// Add an atom at the given `position`. The `velocity` defaults to zero,
    /// and is ignored if the frame has no velocities.
    pub fn add_atom(&mut self, atom: Atom, position: Vector3D, velocity: Option<Vector3D>) {
        self.topology.push(atom);
        self.positions.push(position);
        match &mut self.velocities {
            Some(velocities) => velocities.push(velocity.unwrap_or([0.0; 3])),
            None if velocity.is_some() => {
                warn!("ignoring the velocity of a new atom, this frame has no velocities");
            }
            None => {}
        }
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

    /// Remove the atom at `index`, with its position, velocity and bonds.
    pub fn remove(&mut self, index: usize) -> Result<Atom, CError> {
        self.check_index(index)?;
        let atom = self.topology.remove(index)?;
        self.positions.remove(index);
        if let Some(velocities) = &mut self.velocities {
            velocities.remove(index);
        }
        Ok(atom)
    }

    /// Add a bond of unknown order in the system, between the atoms at
    /// index `i` and `j`.
    pub fn add_bond(&mut self, i: usize, j: usize) -> Result<(), CError> {
        self.add_bond_with_order(i, j, BondOrder::Unknown)
    }

    pub fn add_bond_with_order(
        &mut self,
        i: usize,
        j: usize,
        bond_order: BondOrder,
    ) -> Result<(), CError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.topology.add_bond_with_order(i, j, bond_order)
    }

    pub fn remove_bond(&mut self, i: usize, j: usize) -> Result<(), CError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.topology.remove_bond(i, j)
    }

    pub fn clear_bonds(&mut self) {
        self.topology.clear_bonds();
    }

    /// Check that the topology has one atom per position. This should be
    /// called before using the frame as a whole, e.g. before writing it.
    pub fn check_consistency(&self) -> Result<(), CError> {
        if self.topology.size() != self.positions.len() {
            return Err(CError::SizeMismatch {
                what: "topology",
                expected: self.positions.len(),
                got: self.topology.size(),
            });
        }
        debug_assert!(self
            .velocities
            .as_ref()
            .map_or(true, |v| v.len() == self.positions.len()));
        Ok(())
    }

    /// Guess the bonds in the system from the positions and the cell, with
    /// the default [`BondGuesser`]. Existing bonds are replaced, atoms are
    /// kept.
    pub fn guess_topology(&mut self) -> Result<(), CError> {
        self.guess_topology_with(&BondGuesser::default())
    }

    /// Guess the bonds in the system with a custom bond guesser.
    pub fn guess_topology_with<G: GuessBonds>(&mut self, guesser: &G) -> Result<(), CError> {
        self.check_consistency()?;
        let bonds = guesser.guess_bonds(self.topology.atoms(), &self.positions, &self.cell);
        self.topology.set_bonds(&bonds)?;
        debug!(
            "guessed {} bonds between {} atoms at step {}",
            bonds.len(),
            self.size(),
            self.step
        );
        Ok(())
    }

    /// Vector from atom `i` to atom `j`, using the minimum image convention.
    fn wrapped_vector(&self, i: usize, j: usize) -> Vector3<f64> {
        let delta = Vector3::from(self.positions[j]) - Vector3::from(self.positions[i]);
        Vector3::from(self.cell.wrap(delta.into()))
    }

    /// Distance between atoms `i` and `j`, accounting for periodic boundary
    /// conditions.
    pub fn distance(&self, i: usize, j: usize) -> Result<f64, CError> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.wrapped_vector(i, j).norm())
    }

    /// Angle (in radians) formed by the atoms `i`, `j` and `k`, centered on `j`.
    pub fn angle(&self, i: usize, j: usize, k: usize) -> Result<f64, CError> {
        for index in [i, j, k] {
            self.check_index(index)?;
        }
        let r_ji = self.wrapped_vector(j, i);
        let r_jk = self.wrapped_vector(j, k);
        let norms = r_ji.norm() * r_jk.norm();
        if norms == 0.0 {
            return Err(CError::InvalidGeometry(format!(
                "atom {j} overlaps with atom {i} or {k}, the angle is undefined"
            )));
        }
        let cos = r_ji.dot(&r_jk) / norms;
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Dihedral angle (in radians) formed by the atoms `i`, `j`, `k` and `m`.
    pub fn dihedral(&self, i: usize, j: usize, k: usize, m: usize) -> Result<f64, CError> {
        for index in [i, j, k, m] {
            self.check_index(index)?;
        }
        let r_ij = self.wrapped_vector(i, j);
        let r_jk = self.wrapped_vector(j, k);
        let r_km = self.wrapped_vector(k, m);

        let a = r_ij.cross(&r_jk);
        let b = r_jk.cross(&r_km);
        Ok((r_jk.norm() * r_ij.dot(&b)).atan2(a.dot(&b)))
    }

    /// Signed distance (in Å) between atom `j` and the plane formed by the
    /// atoms `i`, `k` and `m`.
    pub fn out_of_plane(&self, i: usize, j: usize, k: usize, m: usize) -> Result<f64, CError> {
        for index in [i, j, k, m] {
            self.check_index(index)?;
        }
        let r_ij = self.wrapped_vector(i, j);
        let r_ik = self.wrapped_vector(i, k);
        let r_im = self.wrapped_vector(i, m);

        let normal = r_ik.cross(&r_im);
        let norm = normal.norm();
        if norm == 0.0 {
            return Err(CError::InvalidGeometry(format!(
                "atoms {i}, {k} and {m} are aligned and do not define a plane"
            )));
        }
        Ok(r_ij.dot(&normal) / norm)
    }
}

impl Index<usize> for Frame {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.topology[index]
    }
}

impl IndexMut<usize> for Frame {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.topology.atom_mut(index) {
            Some(atom) => atom,
            None => panic!("can not access atom n° {index} in frame"),
        }
    }
}
