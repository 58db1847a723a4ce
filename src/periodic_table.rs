// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Element data, keyed by element symbol.
//!
//! The table covers hydrogen to lawrencium. Masses are standard atomic
//! weights (u), or the mass number of the most stable isotope for elements
//! without one. Radii are in Å. Covalent radii are from Cordero *et al.*
//! (2008), up to curium. Van der Waals radii are from Bondi (1964), completed
//! for the main group elements by Mantina *et al.* (2009). Most transition
//! metals, lanthanides and actinides have no van der Waals radius.

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Atomic number
    pub number: u64,
    /// Full name of the element
    pub name: &'static str,
    /// Atomic mass in u
    pub mass: f64,
    pub covalent_radius: Option<f64>,
    /// Not all elements have a well defined van der Waals radius
    pub vdw_radius: Option<f64>,
}

static PERIODIC_TABLE: phf::Map<&'static str, Element> = phf_map! {
    "H" => Element {
        number: 1,
        name: "Hydrogen",
        mass: 1.008,
        covalent_radius: Some(0.31),
        vdw_radius: Some(1.20),
    },
    "He" => Element {
        number: 2,
        name: "Helium",
        mass: 4.002602,
        covalent_radius: Some(0.28),
        vdw_radius: Some(1.40),
    },
    "Li" => Element {
        number: 3,
        name: "Lithium",
        mass: 6.94,
        covalent_radius: Some(1.28),
        vdw_radius: Some(1.82),
    },
    "Be" => Element {
        number: 4,
        name: "Beryllium",
        mass: 9.0121831,
        covalent_radius: Some(0.96),
        vdw_radius: Some(1.53),
    },
    "B" => Element {
        number: 5,
        name: "Boron",
        mass: 10.81,
        covalent_radius: Some(0.84),
        vdw_radius: Some(1.92),
    },
    "C" => Element {
        number: 6,
        name: "Carbon",
        mass: 12.011,
        covalent_radius: Some(0.76),
        vdw_radius: Some(1.70),
    },
    "N" => Element {
        number: 7,
        name: "Nitrogen",
        mass: 14.007,
        covalent_radius: Some(0.71),
        vdw_radius: Some(1.55),
    },
    "O" => Element {
        number: 8,
        name: "Oxygen",
        mass: 15.999,
        covalent_radius: Some(0.66),
        vdw_radius: Some(1.52),
    },
    "F" => Element {
        number: 9,
        name: "Fluorine",
        mass: 18.998403163,
        covalent_radius: Some(0.57),
        vdw_radius: Some(1.47),
    },
    "Ne" => Element {
        number: 10,
        name: "Neon",
        mass: 20.1797,
        covalent_radius: Some(0.58),
        vdw_radius: Some(1.54),
    },
    "Na" => Element {
        number: 11,
        name: "Sodium",
        mass: 22.98976928,
        covalent_radius: Some(1.66),
        vdw_radius: Some(2.27),
    },
    "Mg" => Element {
        number: 12,
        name: "Magnesium",
        mass: 24.305,
        covalent_radius: Some(1.41),
        vdw_radius: Some(1.73),
    },
    "Al" => Element {
        number: 13,
        name: "Aluminium",
        mass: 26.9815385,
        covalent_radius: Some(1.21),
        vdw_radius: Some(1.84),
    },
    "Si" => Element {
        number: 14,
        name: "Silicon",
        mass: 28.085,
        covalent_radius: Some(1.11),
        vdw_radius: Some(2.10),
    },
    "P" => Element {
        number: 15,
        name: "Phosphorus",
        mass: 30.973761998,
        covalent_radius: Some(1.07),
        vdw_radius: Some(1.80),
    },
    "S" => Element {
        number: 16,
        name: "Sulfur",
        mass: 32.06,
        covalent_radius: Some(1.05),
        vdw_radius: Some(1.80),
    },
    "Cl" => Element {
        number: 17,
        name: "Chlorine",
        mass: 35.45,
        covalent_radius: Some(1.02),
        vdw_radius: Some(1.75),
    },
    "Ar" => Element {
        number: 18,
        name: "Argon",
        mass: 39.948,
        covalent_radius: Some(1.06),
        vdw_radius: Some(1.88),
    },
    "K" => Element {
        number: 19,
        name: "Potassium",
        mass: 39.0983,
        covalent_radius: Some(2.03),
        vdw_radius: Some(2.75),
    },
    "Ca" => Element {
        number: 20,
        name: "Calcium",
        mass: 40.078,
        covalent_radius: Some(1.76),
        vdw_radius: Some(2.31),
    },
    "Sc" => Element {
        number: 21,
        name: "Scandium",
        mass: 44.955908,
        covalent_radius: Some(1.70),
        vdw_radius: None,
    },
    "Ti" => Element {
        number: 22,
        name: "Titanium",
        mass: 47.867,
        covalent_radius: Some(1.60),
        vdw_radius: None,
    },
    "V" => Element {
        number: 23,
        name: "Vanadium",
        mass: 50.9415,
        covalent_radius: Some(1.53),
        vdw_radius: None,
    },
    "Cr" => Element {
        number: 24,
        name: "Chromium",
        mass: 51.9961,
        covalent_radius: Some(1.39),
        vdw_radius: None,
    },
    "Mn" => Element {
        number: 25,
        name: "Manganese",
        mass: 54.938044,
        covalent_radius: Some(1.39),
        vdw_radius: None,
    },
    "Fe" => Element {
        number: 26,
        name: "Iron",
        mass: 55.845,
        covalent_radius: Some(1.32),
        vdw_radius: None,
    },
    "Co" => Element {
        number: 27,
        name: "Cobalt",
        mass: 58.933194,
        covalent_radius: Some(1.26),
        vdw_radius: None,
    },
    "Ni" => Element {
        number: 28,
        name: "Nickel",
        mass: 58.6934,
        covalent_radius: Some(1.24),
        vdw_radius: Some(1.63),
    },
    "Cu" => Element {
        number: 29,
        name: "Copper",
        mass: 63.546,
        covalent_radius: Some(1.32),
        vdw_radius: Some(1.40),
    },
    "Zn" => Element {
        number: 30,
        name: "Zinc",
        mass: 65.38,
        covalent_radius: Some(1.22),
        vdw_radius: Some(1.39),
    },
    "Ga" => Element {
        number: 31,
        name: "Gallium",
        mass: 69.723,
        covalent_radius: Some(1.22),
        vdw_radius: Some(1.87),
    },
    "Ge" => Element {
        number: 32,
        name: "Germanium",
        mass: 72.630,
        covalent_radius: Some(1.20),
        vdw_radius: Some(2.11),
    },
    "As" => Element {
        number: 33,
        name: "Arsenic",
        mass: 74.921595,
        covalent_radius: Some(1.19),
        vdw_radius: Some(1.85),
    },
    "Se" => Element {
        number: 34,
        name: "Selenium",
        mass: 78.971,
        covalent_radius: Some(1.20),
        vdw_radius: Some(1.90),
    },
    "Br" => Element {
        number: 35,
        name: "Bromine",
        mass: 79.904,
        covalent_radius: Some(1.20),
        vdw_radius: Some(1.85),
    },
    "Kr" => Element {
        number: 36,
        name: "Krypton",
        mass: 83.798,
        covalent_radius: Some(1.16),
        vdw_radius: Some(2.02),
    },
    "Rb" => Element {
        number: 37,
        name: "Rubidium",
        mass: 85.4678,
        covalent_radius: Some(2.20),
        vdw_radius: Some(3.03),
    },
    "Sr" => Element {
        number: 38,
        name: "Strontium",
        mass: 87.62,
        covalent_radius: Some(1.95),
        vdw_radius: Some(2.49),
    },
    "Y" => Element {
        number: 39,
        name: "Yttrium",
        mass: 88.90584,
        covalent_radius: Some(1.90),
        vdw_radius: None,
    },
    "Zr" => Element {
        number: 40,
        name: "Zirconium",
        mass: 91.224,
        covalent_radius: Some(1.75),
        vdw_radius: None,
    },
    "Nb" => Element {
        number: 41,
        name: "Niobium",
        mass: 92.90637,
        covalent_radius: Some(1.64),
        vdw_radius: None,
    },
    "Mo" => Element {
        number: 42,
        name: "Molybdenum",
        mass: 95.95,
        covalent_radius: Some(1.54),
        vdw_radius: None,
    },
    "Tc" => Element {
        number: 43,
        name: "Technetium",
        mass: 98.0,
        covalent_radius: Some(1.47),
        vdw_radius: None,
    },
    "Ru" => Element {
        number: 44,
        name: "Ruthenium",
        mass: 101.07,
        covalent_radius: Some(1.46),
        vdw_radius: None,
    },
    "Rh" => Element {
        number: 45,
        name: "Rhodium",
        mass: 102.90550,
        covalent_radius: Some(1.42),
        vdw_radius: None,
    },
    "Pd" => Element {
        number: 46,
        name: "Palladium",
        mass: 106.42,
        covalent_radius: Some(1.39),
        vdw_radius: Some(1.63),
    },
    "Ag" => Element {
        number: 47,
        name: "Silver",
        mass: 107.8682,
        covalent_radius: Some(1.45),
        vdw_radius: Some(1.72),
    },
    "Cd" => Element {
        number: 48,
        name: "Cadmium",
        mass: 112.414,
        covalent_radius: Some(1.44),
        vdw_radius: Some(1.58),
    },
    "In" => Element {
        number: 49,
        name: "Indium",
        mass: 114.818,
        covalent_radius: Some(1.42),
        vdw_radius: Some(1.93),
    },
    "Sn" => Element {
        number: 50,
        name: "Tin",
        mass: 118.710,
        covalent_radius: Some(1.39),
        vdw_radius: Some(2.17),
    },
    "Sb" => Element {
        number: 51,
        name: "Antimony",
        mass: 121.760,
        covalent_radius: Some(1.39),
        vdw_radius: Some(2.06),
    },
    "Te" => Element {
        number: 52,
        name: "Tellurium",
        mass: 127.60,
        covalent_radius: Some(1.38),
        vdw_radius: Some(2.06),
    },
    "I" => Element {
        number: 53,
        name: "Iodine",
        mass: 126.90447,
        covalent_radius: Some(1.39),
        vdw_radius: Some(1.98),
    },
    "Xe" => Element {
        number: 54,
        name: "Xenon",
        mass: 131.293,
        covalent_radius: Some(1.40),
        vdw_radius: Some(2.16),
    },
    "Cs" => Element {
        number: 55,
        name: "Caesium",
        mass: 132.90545196,
        covalent_radius: Some(2.44),
        vdw_radius: Some(3.43),
    },
    "Ba" => Element {
        number: 56,
        name: "Barium",
        mass: 137.327,
        covalent_radius: Some(2.15),
        vdw_radius: Some(2.68),
    },
    "La" => Element {
        number: 57,
        name: "Lanthanum",
        mass: 138.90547,
        covalent_radius: Some(2.07),
        vdw_radius: None,
    },
    "Ce" => Element {
        number: 58,
        name: "Cerium",
        mass: 140.116,
        covalent_radius: Some(2.04),
        vdw_radius: None,
    },
    "Pr" => Element {
        number: 59,
        name: "Praseodymium",
        mass: 140.90766,
        covalent_radius: Some(2.03),
        vdw_radius: None,
    },
    "Nd" => Element {
        number: 60,
        name: "Neodymium",
        mass: 144.242,
        covalent_radius: Some(2.01),
        vdw_radius: None,
    },
    "Pm" => Element {
        number: 61,
        name: "Promethium",
        mass: 145.0,
        covalent_radius: Some(1.99),
        vdw_radius: None,
    },
    "Sm" => Element {
        number: 62,
        name: "Samarium",
        mass: 150.36,
        covalent_radius: Some(1.98),
        vdw_radius: None,
    },
    "Eu" => Element {
        number: 63,
        name: "Europium",
        mass: 151.964,
        covalent_radius: Some(1.98),
        vdw_radius: None,
    },
    "Gd" => Element {
        number: 64,
        name: "Gadolinium",
        mass: 157.25,
        covalent_radius: Some(1.96),
        vdw_radius: None,
    },
    "Tb" => Element {
        number: 65,
        name: "Terbium",
        mass: 158.92535,
        covalent_radius: Some(1.94),
        vdw_radius: None,
    },
    "Dy" => Element {
        number: 66,
        name: "Dysprosium",
        mass: 162.500,
        covalent_radius: Some(1.92),
        vdw_radius: None,
    },
    "Ho" => Element {
        number: 67,
        name: "Holmium",
        mass: 164.93033,
        covalent_radius: Some(1.92),
        vdw_radius: None,
    },
    "Er" => Element {
        number: 68,
        name: "Erbium",
        mass: 167.259,
        covalent_radius: Some(1.89),
        vdw_radius: None,
    },
    "Tm" => Element {
        number: 69,
        name: "Thulium",
        mass: 168.93422,
        covalent_radius: Some(1.90),
        vdw_radius: None,
    },
    "Yb" => Element {
        number: 70,
        name: "Ytterbium",
        mass: 173.045,
        covalent_radius: Some(1.87),
        vdw_radius: None,
    },
    "Lu" => Element {
        number: 71,
        name: "Lutetium",
        mass: 174.9668,
        covalent_radius: Some(1.87),
        vdw_radius: None,
    },
    "Hf" => Element {
        number: 72,
        name: "Hafnium",
        mass: 178.49,
        covalent_radius: Some(1.75),
        vdw_radius: None,
    },
    "Ta" => Element {
        number: 73,
        name: "Tantalum",
        mass: 180.94788,
        covalent_radius: Some(1.70),
        vdw_radius: None,
    },
    "W" => Element {
        number: 74,
        name: "Tungsten",
        mass: 183.84,
        covalent_radius: Some(1.62),
        vdw_radius: None,
    },
    "Re" => Element {
        number: 75,
        name: "Rhenium",
        mass: 186.207,
        covalent_radius: Some(1.51),
        vdw_radius: None,
    },
    "Os" => Element {
        number: 76,
        name: "Osmium",
        mass: 190.23,
        covalent_radius: Some(1.44),
        vdw_radius: None,
    },
    "Ir" => Element {
        number: 77,
        name: "Iridium",
        mass: 192.217,
        covalent_radius: Some(1.41),
        vdw_radius: None,
    },
    "Pt" => Element {
        number: 78,
        name: "Platinum",
        mass: 195.084,
        covalent_radius: Some(1.36),
        vdw_radius: Some(1.75),
    },
    "Au" => Element {
        number: 79,
        name: "Gold",
        mass: 196.966569,
        covalent_radius: Some(1.36),
        vdw_radius: Some(1.66),
    },
    "Hg" => Element {
        number: 80,
        name: "Mercury",
        mass: 200.592,
        covalent_radius: Some(1.32),
        vdw_radius: Some(1.55),
    },
    "Tl" => Element {
        number: 81,
        name: "Thallium",
        mass: 204.38,
        covalent_radius: Some(1.45),
        vdw_radius: Some(1.96),
    },
    "Pb" => Element {
        number: 82,
        name: "Lead",
        mass: 207.2,
        covalent_radius: Some(1.46),
        vdw_radius: Some(2.02),
    },
    "Bi" => Element {
        number: 83,
        name: "Bismuth",
        mass: 208.98040,
        covalent_radius: Some(1.48),
        vdw_radius: Some(2.07),
    },
    "Po" => Element {
        number: 84,
        name: "Polonium",
        mass: 209.0,
        covalent_radius: Some(1.40),
        vdw_radius: Some(1.97),
    },
    "At" => Element {
        number: 85,
        name: "Astatine",
        mass: 210.0,
        covalent_radius: Some(1.50),
        vdw_radius: Some(2.02),
    },
    "Rn" => Element {
        number: 86,
        name: "Radon",
        mass: 222.0,
        covalent_radius: Some(1.50),
        vdw_radius: Some(2.20),
    },
    "Fr" => Element {
        number: 87,
        name: "Francium",
        mass: 223.0,
        covalent_radius: Some(2.60),
        vdw_radius: Some(3.48),
    },
    "Ra" => Element {
        number: 88,
        name: "Radium",
        mass: 226.0,
        covalent_radius: Some(2.21),
        vdw_radius: Some(2.83),
    },
    "Ac" => Element {
        number: 89,
        name: "Actinium",
        mass: 227.0,
        covalent_radius: Some(2.15),
        vdw_radius: None,
    },
    "Th" => Element {
        number: 90,
        name: "Thorium",
        mass: 232.0377,
        covalent_radius: Some(2.06),
        vdw_radius: None,
    },
    "Pa" => Element {
        number: 91,
        name: "Protactinium",
        mass: 231.03588,
        covalent_radius: Some(2.00),
        vdw_radius: None,
    },
    "U" => Element {
        number: 92,
        name: "Uranium",
        mass: 238.02891,
        covalent_radius: Some(1.96),
        vdw_radius: Some(1.86),
    },
    "Np" => Element {
        number: 93,
        name: "Neptunium",
        mass: 237.0,
        covalent_radius: Some(1.90),
        vdw_radius: None,
    },
    "Pu" => Element {
        number: 94,
        name: "Plutonium",
        mass: 244.0,
        covalent_radius: Some(1.87),
        vdw_radius: None,
    },
    "Am" => Element {
        number: 95,
        name: "Americium",
        mass: 243.0,
        covalent_radius: Some(1.80),
        vdw_radius: None,
    },
    "Cm" => Element {
        number: 96,
        name: "Curium",
        mass: 247.0,
        covalent_radius: Some(1.69),
        vdw_radius: None,
    },
    "Bk" => Element {
        number: 97,
        name: "Berkelium",
        mass: 247.0,
        covalent_radius: None,
        vdw_radius: None,
    },
    "Cf" => Element {
        number: 98,
        name: "Californium",
        mass: 251.0,
        covalent_radius: None,
        vdw_radius: None,
    },
    "Es" => Element {
        number: 99,
        name: "Einsteinium",
        mass: 252.0,
        covalent_radius: None,
        vdw_radius: None,
    },
    "Fm" => Element {
        number: 100,
        name: "Fermium",
        mass: 257.0,
        covalent_radius: None,
        vdw_radius: None,
    },
    "Md" => Element {
        number: 101,
        name: "Mendelevium",
        mass: 258.0,
        covalent_radius: None,
        vdw_radius: None,
    },
    "No" => Element {
        number: 102,
        name: "Nobelium",
        mass: 259.0,
        covalent_radius: None,
        vdw_radius: None,
    },
    "Lr" => Element {
        number: 103,
        name: "Lawrencium",
        mass: 266.0,
        covalent_radius: None,
        vdw_radius: None,
    },
};

/// Find the element with the given `symbol`. The lookup is case-sensitive,
/// so `"Co"` is cobalt and `"CO"` is nothing.
pub fn find_element(symbol: &str) -> Option<&'static Element> {
    PERIODIC_TABLE.get(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn lookup() {
        let helium = find_element("He").unwrap();
        assert_eq!(helium.number, 2);
        assert_eq!(helium.name, "Helium");
        assert_approx_eq!(helium.mass, 4.002602);
        assert_approx_eq!(helium.vdw_radius.unwrap(), 1.4);

        let zinc = find_element("Zn").unwrap();
        assert_eq!(zinc.name, "Zinc");
        assert_eq!(zinc.number, 30);
    }

    #[test]
    fn missing() {
        assert!(find_element("H1").is_none());
        assert!(find_element("CO").is_none());
        assert!(find_element("").is_none());
        assert!(find_element("Fe").unwrap().vdw_radius.is_none());
        assert!(find_element("Es").unwrap().covalent_radius.is_none());
    }

    #[test]
    fn complete() {
        let mut numbers: Vec<u64> = PERIODIC_TABLE.values().map(|e| e.number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=103).collect::<Vec<u64>>());

        for (symbol, name, number) in [
            ("La", "Lanthanum", 57),
            ("Hf", "Hafnium", 72),
            ("Os", "Osmium", 76),
            ("Ir", "Iridium", 77),
            ("Th", "Thorium", 90),
            ("Lr", "Lawrencium", 103),
        ] {
            let element = find_element(symbol).unwrap();
            assert_eq!(element.name, name);
            assert_eq!(element.number, number);
            assert!(element.mass > 0.0);
        }
        assert_approx_eq!(find_element("Os").unwrap().covalent_radius.unwrap(), 1.44);
    }
}
