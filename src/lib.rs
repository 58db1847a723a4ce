// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Frames, topologies and periodic unit cells: the in-memory model that
//! chemistry file format readers fill and writers consume.
//!
//! ```
//! use molframe::atom::Atom;
//! use molframe::frame::Frame;
//! use molframe::unit_cell::UnitCell;
//!
//! let mut frame = Frame::new();
//! frame.set_cell(UnitCell::cubic(10.0).unwrap());
//! frame.add_atom(Atom::new("O"), [0.0, 0.0, 0.0], None);
//! frame.add_atom(Atom::new("H"), [0.757, 0.586, 0.0], None);
//! frame.add_atom(Atom::new("H"), [-0.757, 0.586, 0.0], None);
//!
//! frame.guess_topology().unwrap();
//! assert_eq!(frame.topology().bonds_count(), 2);
//! assert_eq!(frame.topology().angles_count(), 1);
//! ```

pub mod angle;
pub mod atom;
pub mod bond;
pub mod connectivity;
pub mod dihedral;
pub mod error;
pub mod frame;
pub mod guess;
pub mod periodic_table;
pub mod property;
pub mod topology;
pub mod unit_cell;

/// A cartesian vector, in Å for positions
pub type Vector3D = [f64; 3];
