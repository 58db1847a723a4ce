// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::error::CError;
use crate::Vector3D;
use core::f64;
use log::warn;
use nalgebra::{Matrix3, Vector3};
use std::fmt;

/// The shape of a [`UnitCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellShape {
    /// The three angles are 90°
    Orthorhombic,
    /// The three angles may take any value in (0°, 180°)
    Triclinic,
    /// No periodic boundary conditions: the cell has no finite extent
    #[default]
    Infinite,
}

/// A periodic lattice: three lengths (Å), three angles (degrees), a
/// [`CellShape`] and per-axis periodicity.
///
/// The cartesian basis is stored as a matrix whose **rows** are the three
/// lattice vectors:
///
/// ```text
///     | a_x   0     0   |
///     | b_x   b_y   0   |
///     | c_x   c_y   c_z |
/// ```
///
/// The matrix (and its inverse) is recomputed on every mutation, so it always
/// reflects the current parameters. Every mutation is validated first and
/// leaves the cell untouched when it fails. In particular, changing an angle
/// of an orthorhombic cell to anything else than 90° is rejected: switch the
/// shape to [`CellShape::Triclinic`] first.
#[derive(Debug, Clone)]
pub struct UnitCell {
    lengths: Vector3D,
    angles: Vector3D,
    shape: CellShape,
    periodicity: [bool; 3],
    cell_matrix: Matrix3<f64>,
    inverse: Option<Matrix3<f64>>,
}

impl Default for UnitCell {
    fn default() -> Self {
        UnitCell::infinite()
    }
}

impl PartialEq for UnitCell {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self.periodicity == other.periodicity
            && self
                .lengths
                .iter()
                .chain(self.angles.iter())
                .zip(other.lengths.iter().chain(other.angles.iter()))
                .all(|(a, b)| (a - b).abs() < Self::EPSILON)
    }
}

impl fmt::Display for UnitCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.lengths;
        let [alpha, beta, gamma] = self.angles;
        write!(f, "UnitCell({a}, {b}, {c}, {alpha}, {beta}, {gamma})")
    }
}

impl UnitCell {
    const EPSILON: f64 = 1e-5;

    fn deg2rad(x: f64) -> f64 {
        x * f64::consts::PI / 180.0
    }

    fn rad2deg(x: f64) -> f64 {
        x * 180.0 / f64::consts::PI
    }

    fn cos_degree(theta: f64) -> f64 {
        Self::deg2rad(theta).cos()
    }

    fn sin_degree(theta: f64) -> f64 {
        Self::deg2rad(theta).sin()
    }

    /// Create an infinite cell: zero lengths, right angles, no periodicity.
    pub fn infinite() -> Self {
        UnitCell {
            lengths: [0.0; 3],
            angles: [90.0; 3],
            shape: CellShape::Infinite,
            periodicity: [false; 3],
            cell_matrix: Matrix3::zeros(),
            inverse: None,
        }
    }

    /// Create a cubic cell with side `a`.
    pub fn cubic(a: f64) -> Result<Self, CError> {
        Self::orthorhombic(a, a, a)
    }

    /// Create an orthorhombic cell with the given lengths.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Result<Self, CError> {
        Self::with_parameters(CellShape::Orthorhombic, [a, b, c], [90.0; 3])
    }

    /// Create a cell from its `lengths` and `angles`.
    ///
    /// The shape is inferred: orthorhombic when all the angles are (roughly)
    /// 90°, triclinic otherwise. Zero lengths with right angles give an
    /// infinite cell. Use [`UnitCell::triclinic`] to force a triclinic shape.
    pub fn new(lengths: Vector3D, angles: Vector3D) -> Result<Self, CError> {
        if lengths == [0.0; 3] && angles == [90.0; 3] {
            return Ok(Self::infinite());
        }

        Self::check_angles(&angles)?;
        let angles = Self::snap_right_angles(angles);
        let shape = if angles.iter().all(|&x| x == 90.0) {
            CellShape::Orthorhombic
        } else {
            CellShape::Triclinic
        };
        Self::with_parameters(shape, lengths, angles)
    }

    /// Create a triclinic cell. The shape stays triclinic even when all the
    /// angles are 90°.
    pub fn triclinic(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self, CError> {
        Self::with_parameters(CellShape::Triclinic, [a, b, c], [alpha, beta, gamma])
    }

    /// Create a cell of the given `shape` with zero lengths and right angles.
    ///
    /// A finite cell created this way has no extent (and a zero matrix) until
    /// its lengths are set.
    pub fn with_shape(shape: CellShape) -> Self {
        let mut cell = Self::infinite();
        if shape != CellShape::Infinite {
            cell.shape = shape;
            cell.periodicity = [true; 3];
        }
        cell
    }

    /// Create a cell of the given `shape` with lengths `a`, `b`, `c` and right
    /// angles.
    pub fn with_shape_and_lengths(
        shape: CellShape,
        a: f64,
        b: f64,
        c: f64,
    ) -> Result<Self, CError> {
        if shape == CellShape::Infinite {
            return Err(CError::InvalidGeometry(
                "can not set lengths of an infinite cell".to_string(),
            ));
        }
        Self::with_parameters(shape, [a, b, c], [90.0; 3])
    }

    /// Create a cell from a matrix whose rows are the lattice vectors.
    ///
    /// The lengths and angles are extracted from the vectors, and the matrix
    /// is then rebuilt in the canonical orientation. A zero matrix gives an
    /// infinite cell.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self, CError> {
        if matrix.iter().all(|x| x.abs() < Self::EPSILON) {
            return Ok(Self::infinite());
        }

        if matrix.determinant() <= 0.0 {
            return Err(CError::InvalidGeometry(
                "the cell matrix must have a positive determinant".to_string(),
            ));
        }

        let a: Vector3<f64> = matrix.row(0).transpose();
        let b: Vector3<f64> = matrix.row(1).transpose();
        let c: Vector3<f64> = matrix.row(2).transpose();
        let angle = |u: &Vector3<f64>, v: &Vector3<f64>| {
            Self::rad2deg((u.dot(v) / (u.norm() * v.norm())).clamp(-1.0, 1.0).acos())
        };

        let lengths = [a.norm(), b.norm(), c.norm()];
        let angles = Self::snap_right_angles([angle(&b, &c), angle(&a, &c), angle(&a, &b)]);
        let shape = if angles.iter().all(|&x| x == 90.0) {
            CellShape::Orthorhombic
        } else {
            CellShape::Triclinic
        };

        Self::with_parameters(shape, lengths, angles)
    }

    fn with_parameters(
        shape: CellShape,
        lengths: Vector3D,
        angles: Vector3D,
    ) -> Result<Self, CError> {
        let mut cell = Self::with_shape(shape);
        cell.set_parameters(shape, lengths, angles)?;
        Ok(cell)
    }

    fn check_lengths(lengths: &Vector3D) -> Result<(), CError> {
        if lengths.iter().any(|&x| x.is_nan() || x <= 0.0) {
            return Err(CError::InvalidGeometry(
                "lengths must be positive".to_string(),
            ));
        };

        if lengths.iter().any(|x| x.is_infinite()) {
            return Err(CError::InvalidGeometry(
                "lengths must be finite".to_string(),
            ));
        }

        Ok(())
    }

    fn check_angles(angles: &Vector3D) -> Result<(), CError> {
        if angles.iter().any(|&x| x.is_nan() || x < 0.0) {
            return Err(CError::InvalidGeometry(
                "angles cannot be negative".to_string(),
            ));
        };

        if angles.iter().any(|&x| x.abs() < Self::EPSILON) {
            return Err(CError::InvalidGeometry(
                "angles cannot be (roughly) zero".to_string(),
            ));
        }

        if angles.iter().any(|&x| x >= 180.0) {
            return Err(CError::InvalidGeometry(
                "angles cannot be larger than or equal to 180 degrees".to_string(),
            ));
        }

        Ok(())
    }

    fn snap_right_angles(mut angles: Vector3D) -> Vector3D {
        if angles.iter().all(|&x| (x - 90.0).abs() < 1e-3) {
            angles.iter_mut().for_each(|x| *x = 90.0);
        }
        angles
    }

    /// Compute the cell matrix for the given parameters. Rows are the lattice
    /// vectors `a`, `b` and `c`.
    fn cell_matrix_from_lengths_angles(
        shape: CellShape,
        lengths: &Vector3D,
        angles: &Vector3D,
    ) -> Result<Matrix3<f64>, CError> {
        match shape {
            CellShape::Infinite => Ok(Matrix3::zeros()),
            CellShape::Orthorhombic => Ok(Matrix3::from_diagonal(&Vector3::from(*lengths))),
            CellShape::Triclinic => {
                let cos_alpha = Self::cos_degree(angles[0]);
                let cos_beta = Self::cos_degree(angles[1]);
                let cos_gamma = Self::cos_degree(angles[2]);
                let sin_gamma = Self::sin_degree(angles[2]);

                let c_y = (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
                let radicand = 1.0 - cos_beta * cos_beta - c_y * c_y;
                if radicand.is_nan() || radicand <= 0.0 {
                    return Err(CError::InvalidGeometry(format!(
                        "angles ({}, {}, {}) do not describe a valid cell",
                        angles[0], angles[1], angles[2]
                    )));
                }

                let mut cell_matrix: Matrix3<f64> = Matrix3::zeros();
                cell_matrix[(0, 0)] = lengths[0];

                cell_matrix[(1, 0)] = cos_gamma * lengths[1];
                cell_matrix[(1, 1)] = sin_gamma * lengths[1];

                cell_matrix[(2, 0)] = cos_beta * lengths[2];
                cell_matrix[(2, 1)] = c_y * lengths[2];
                cell_matrix[(2, 2)] = radicand.sqrt() * lengths[2];

                Ok(cell_matrix)
            }
        }
    }

    /// Validate and store a full set of parameters, rebuilding the matrices.
    /// Nothing is modified if validation fails.
    fn set_parameters(
        &mut self,
        shape: CellShape,
        lengths: Vector3D,
        angles: Vector3D,
    ) -> Result<(), CError> {
        if shape != CellShape::Infinite {
            Self::check_lengths(&lengths)?;
        }
        Self::check_angles(&angles)?;
        let angles = Self::snap_right_angles(angles);

        if shape == CellShape::Orthorhombic && angles.iter().any(|&x| x != 90.0) {
            return Err(CError::InvalidGeometry(
                "orthorhombic cells must have all angles equal to 90 degrees".to_string(),
            ));
        }

        let cell_matrix = Self::cell_matrix_from_lengths_angles(shape, &lengths, &angles)?;

        self.shape = shape;
        self.lengths = lengths;
        self.angles = angles;
        self.cell_matrix = cell_matrix;
        self.inverse = match shape {
            CellShape::Infinite => None,
            _ => cell_matrix.try_inverse(),
        };
        Ok(())
    }

    pub fn shape(&self) -> CellShape {
        self.shape
    }

    /// Change the shape of the cell, keeping its lengths and angles.
    ///
    /// Going to [`CellShape::Orthorhombic`] requires right angles. Going to
    /// [`CellShape::Infinite`] clears the periodicity, and leaving it makes the
    /// cell fully periodic again.
    ///
    /// An infinite cell obtained this way keeps its previous lengths and
    /// angles: `lengths()` still reports them, and the cell does not compare
    /// equal to [`UnitCell::infinite`]. Its matrix and volume are zero.
    pub fn set_shape(&mut self, shape: CellShape) -> Result<(), CError> {
        if shape == self.shape {
            return Ok(());
        }

        let was_infinite = self.shape == CellShape::Infinite;
        match shape {
            CellShape::Infinite => {
                self.set_parameters(shape, self.lengths, self.angles)?;
                self.periodicity = [false; 3];
            }
            _ => {
                // an infinite cell may still have zero lengths here, which
                // only gives a degenerate matrix until the lengths are set
                let angles = Self::snap_right_angles(self.angles);
                if shape == CellShape::Orthorhombic && angles.iter().any(|&x| x != 90.0) {
                    return Err(CError::InvalidGeometry(
                        "orthorhombic cells must have all angles equal to 90 degrees"
                            .to_string(),
                    ));
                }
                let cell_matrix =
                    Self::cell_matrix_from_lengths_angles(shape, &self.lengths, &angles)?;
                self.shape = shape;
                self.angles = angles;
                self.cell_matrix = cell_matrix;
                self.inverse = cell_matrix.try_inverse();
                if was_infinite {
                    self.periodicity = [true; 3];
                }
            }
        }
        Ok(())
    }

    pub fn a(&self) -> f64 {
        self.lengths[0]
    }

    pub fn b(&self) -> f64 {
        self.lengths[1]
    }

    pub fn c(&self) -> f64 {
        self.lengths[2]
    }

    pub fn lengths(&self) -> Vector3D {
        self.lengths
    }

    pub fn alpha(&self) -> f64 {
        self.angles[0]
    }

    pub fn beta(&self) -> f64 {
        self.angles[1]
    }

    pub fn gamma(&self) -> f64 {
        self.angles[2]
    }

    pub fn angles(&self) -> Vector3D {
        self.angles
    }

    /// Set the three lengths of the cell. Infinite cells have no lengths.
    pub fn set_lengths(&mut self, a: f64, b: f64, c: f64) -> Result<(), CError> {
        if self.shape == CellShape::Infinite {
            return Err(CError::InvalidGeometry(
                "can not set lengths of an infinite cell".to_string(),
            ));
        }
        self.set_parameters(self.shape, [a, b, c], self.angles)
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), CError> {
        self.set_lengths(a, self.lengths[1], self.lengths[2])
    }

    pub fn set_b(&mut self, b: f64) -> Result<(), CError> {
        self.set_lengths(self.lengths[0], b, self.lengths[2])
    }

    pub fn set_c(&mut self, c: f64) -> Result<(), CError> {
        self.set_lengths(self.lengths[0], self.lengths[1], c)
    }

    /// Set the three angles of the cell. Only triclinic cells accept angles
    /// other than 90°.
    pub fn set_angles(&mut self, alpha: f64, beta: f64, gamma: f64) -> Result<(), CError> {
        if self.shape == CellShape::Infinite {
            return Err(CError::InvalidGeometry(
                "can not set angles of an infinite cell".to_string(),
            ));
        }
        self.set_parameters(self.shape, self.lengths, [alpha, beta, gamma])
    }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), CError> {
        self.set_angles(alpha, self.angles[1], self.angles[2])
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<(), CError> {
        self.set_angles(self.angles[0], beta, self.angles[2])
    }

    pub fn set_gamma(&mut self, gamma: f64) -> Result<(), CError> {
        self.set_angles(self.angles[0], self.angles[1], gamma)
    }

    pub fn periodic_x(&self) -> bool {
        self.periodicity[0]
    }

    pub fn periodic_y(&self) -> bool {
        self.periodicity[1]
    }

    pub fn periodic_z(&self) -> bool {
        self.periodicity[2]
    }

    pub fn periodicity(&self) -> [bool; 3] {
        self.periodicity
    }

    fn set_periodic(&mut self, axis: usize, periodic: bool) {
        if self.shape == CellShape::Infinite {
            if periodic {
                warn!("ignoring periodicity along axis {axis} of an infinite cell");
            }
            return;
        }
        self.periodicity[axis] = periodic;
    }

    pub fn set_periodic_x(&mut self, periodic: bool) {
        self.set_periodic(0, periodic);
    }

    pub fn set_periodic_y(&mut self, periodic: bool) {
        self.set_periodic(1, periodic);
    }

    pub fn set_periodic_z(&mut self, periodic: bool) {
        self.set_periodic(2, periodic);
    }

    /// Is the cell periodic along all three axis?
    pub fn full_periodic(&self) -> bool {
        self.periodicity.iter().all(|&p| p)
    }

    pub fn set_full_periodic(&mut self, periodic: bool) {
        for axis in 0..3 {
            self.set_periodic(axis, periodic);
        }
    }

    /// Get the cell matrix, with the lattice vectors as rows. This is the
    /// zero matrix for infinite cells.
    pub fn matrix(&self) -> Matrix3<f64> {
        self.cell_matrix
    }

    /// Volume of the cell: the scalar triple product `a · (b × c)` of the
    /// lattice vectors.
    pub fn volume(&self) -> f64 {
        if self.shape == CellShape::Infinite {
            return 0.0;
        }
        let a = self.cell_matrix.row(0).transpose();
        let b = self.cell_matrix.row(1).transpose();
        let c = self.cell_matrix.row(2).transpose();
        a.dot(&b.cross(&c))
    }

    /// Wrap `vector` in the cell, using the minimum image convention along
    /// the periodic axis. Infinite and degenerate cells return `vector`
    /// unchanged.
    pub fn wrap(&self, vector: Vector3D) -> Vector3D {
        let Some(inverse) = self.inverse else {
            return vector;
        };

        let cartesian = Vector3::from(vector);
        let mut shift = inverse.transpose() * cartesian;
        for (s, &periodic) in shift.iter_mut().zip(self.periodicity.iter()) {
            *s = if periodic { s.round() } else { 0.0 };
        }

        (cartesian - self.cell_matrix.transpose() * shift).into()
    }
}
