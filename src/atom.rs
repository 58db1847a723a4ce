// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::periodic_table::{find_element, Element};
use crate::property::Properties;

/// What kind of particle an [`Atom`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AtomType {
    /// A chemical element, whose name is the element symbol
    Element,
    /// A coarse-grained bead
    CoarseGrain,
    /// A dummy site, without physical meaning
    Dummy,
    #[default]
    Undefined,
}

/// A particle in a [`Topology`](crate::topology::Topology).
///
/// Two atoms are equal when their name, mass, charge, type and properties
/// are equal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    /// Mass in atomic mass units
    pub mass: f64,
    /// Charge in units of the elementary charge
    pub charge: f64,
    pub kind: AtomType,
    pub properties: Properties,
}

impl Atom {
    /// Create an atom from its `name`. If the name is an element symbol, the
    /// atom is an [`AtomType::Element`] with the mass of this element.
    /// Otherwise it is [`AtomType::Undefined`] with a mass of zero.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let (mass, kind) = match find_element(&name) {
            Some(element) => (element.mass, AtomType::Element),
            None => (0.0, AtomType::Undefined),
        };
        Self {
            name,
            mass,
            charge: 0.0,
            kind,
            properties: Properties::new(),
        }
    }

    /// Create an atom with an explicit type. Only element atoms take their
    /// mass from the periodic table.
    pub fn with_type(name: impl Into<String>, kind: AtomType) -> Self {
        let mut atom = Self::new(name);
        if kind != AtomType::Element {
            atom.mass = 0.0;
        }
        atom.kind = kind;
        atom
    }

    fn element(&self) -> Option<&'static Element> {
        match self.kind {
            AtomType::Element => find_element(&self.name),
            _ => None,
        }
    }

    /// Full name of the element ("Helium" for "He"), if any
    pub fn full_name(&self) -> Option<&'static str> {
        self.element().map(|e| e.name)
    }

    /// Van der Waals radius in Å, if known
    pub fn vdw_radius(&self) -> Option<f64> {
        self.element().and_then(|e| e.vdw_radius)
    }

    /// Covalent radius in Å, if known
    pub fn covalent_radius(&self) -> Option<f64> {
        self.element().and_then(|e| e.covalent_radius)
    }

    pub fn atomic_number(&self) -> Option<u64> {
        self.element().map(|e| e.number)
    }
}
