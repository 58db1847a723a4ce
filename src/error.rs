// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("size mismatch: {what} (expected {expected}, got {got})")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("out of bounds atomic index: {index} (we have {size} atoms)")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("can not have a bond between atom {0} and itself")]
    InvalidBond(usize),
}
