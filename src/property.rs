// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::Vector3D;

const EPSILON: f64 = 1e-12;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PropertyKind {
    Bool,
    Double,
    String,
    Vector3D,
}

/// A value attached to an atom or a frame under a name.
#[derive(Debug, Clone)]
pub enum Property {
    Bool(bool),
    Double(f64),
    String(String),
    Vector3D(Vector3D),
}

/// Returns `true` if `a` and `b` are both finite and within `epsilon` of each other.
/// Any `NaN` or infinite value always compares as `false`.
fn almost_eq(a: f64, b: f64, epsilon: f64) -> bool {
    a.is_finite() && b.is_finite() && (a - b).abs() <= epsilon
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Property::Bool(a), Property::Bool(b)) => a == b,
            (Property::Double(a), Property::Double(b)) => almost_eq(*a, *b, EPSILON),
            (Property::String(a), Property::String(b)) => a == b,
            (Property::Vector3D(a), Property::Vector3D(b)) => a
                .iter()
                .zip(b.iter())
                .all(|(x, y)| almost_eq(*x, *y, EPSILON)),
            // different variants are never equal
            _ => false,
        }
    }
}

impl From<bool> for Property {
    fn from(value: bool) -> Self {
        Property::Bool(value)
    }
}

impl From<f64> for Property {
    fn from(value: f64) -> Self {
        Property::Double(value)
    }
}

impl From<&str> for Property {
    fn from(value: &str) -> Self {
        Property::String(value.to_string())
    }
}

impl From<String> for Property {
    fn from(value: String) -> Self {
        Property::String(value)
    }
}

impl From<Vector3D> for Property {
    fn from(value: Vector3D) -> Self {
        Property::Vector3D(value)
    }
}

impl Property {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::Bool(_) => PropertyKind::Bool,
            Property::Double(_) => PropertyKind::Double,
            Property::String(_) => PropertyKind::String,
            Property::Vector3D(_) => PropertyKind::Vector3D,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Property::Bool(b) = *self {
            Some(b)
        } else {
            None
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        if let Property::Double(x) = *self {
            Some(x)
        } else {
            None
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        if let Property::String(ref s) = *self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_vector3d(&self) -> Option<Vector3D> {
        if let Property::Vector3D(v) = *self {
            Some(v)
        } else {
            None
        }
    }
}

/// Named properties. Setting a property overwrites any previous value with
/// the same name, whatever its kind.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Properties(HashMap<String, Property>);

impl Properties {
    pub fn new() -> Self {
        Properties(HashMap::new())
    }

    /// Set the property `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Property>) -> Option<Property> {
        self.0.insert(name.into(), value.into())
    }

    /// Names of all the properties, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Deref for Properties {
    type Target = HashMap<String, Property>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Properties {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Properties {
    type Item = (String, Property);
    type IntoIter = <HashMap<String, Property> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a Property);
    type IntoIter = <&'a HashMap<String, Property> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn accessors() {
        let prop = Property::from(true);
        assert_eq!(prop.kind(), PropertyKind::Bool);
        assert_eq!(prop.as_bool(), Some(true));
        assert_eq!(prop.as_double(), None);

        let prop = Property::from(std::f64::consts::PI);
        assert_eq!(prop.kind(), PropertyKind::Double);
        assert_approx_eq!(prop.as_double().unwrap(), std::f64::consts::PI);
        assert_eq!(prop.as_string(), None);

        let prop = Property::from("test");
        assert_eq!(prop.kind(), PropertyKind::String);
        assert_eq!(prop.as_string(), Some("test"));
        assert_eq!(prop.as_vector3d(), None);

        let prop = Property::from([1.0, 2.0, 3.0]);
        assert_eq!(prop.kind(), PropertyKind::Vector3D);
        assert_eq!(prop.as_vector3d(), Some([1.0, 2.0, 3.0]));
        assert_eq!(prop.as_bool(), None);
    }

    #[test]
    fn equality() {
        assert_eq!(Property::Double(1.0), Property::Double(1.0 + EPSILON / 2.0));
        assert_ne!(Property::Double(1.0), Property::Double(1.0 + EPSILON * 2.0));
        assert_eq!(
            Property::Vector3D([1.0, 2.0, 3.0]),
            Property::Vector3D([1.0, 2.0, 3.0])
        );

        // different kinds are never equal
        assert_ne!(Property::Bool(true), Property::String("true".to_string()));
        assert_ne!(Property::Double(1.0), Property::Bool(true));

        assert_ne!(Property::Double(f64::NAN), Property::Double(f64::NAN));
        assert_ne!(
            Property::Double(f64::INFINITY),
            Property::Double(f64::INFINITY)
        );
    }

    #[test]
    fn container() {
        let mut properties = Properties::new();
        assert!(properties.set("foo", 3.0).is_none());
        assert_eq!(properties.get("foo"), Some(&Property::Double(3.0)));

        // overwriting changes the kind
        assert_eq!(properties.set("foo", false), Some(Property::Double(3.0)));
        assert_eq!(properties["foo"].as_bool(), Some(false));

        assert!(properties.get("bar").is_none());
        properties.set("bar", "baz");

        assert_eq!(properties.len(), 2);
        assert_eq!(properties.names(), vec!["bar", "foo"]);

        properties.remove("bar");
        assert_eq!(properties.names(), vec!["foo"]);

        let mut count = 0;
        for (name, property) in &properties {
            assert_eq!(name, "foo");
            assert_eq!(property.kind(), PropertyKind::Bool);
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
