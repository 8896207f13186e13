//! Typed vertex and edge property maps.
//!
//! # Overview
//!
//! A property map stores one value per vertex (or per edge), indexed by the
//! dense indices of [`GraphView`]. The value type is chosen at runtime from a
//! closed set ([`ValueType`]); algorithms match on the [`Values`] variant and
//! call a generic kernel instantiated for that concrete type (see
//! [`Float`]). Anything outside the set is unrepresentable.
//!
//! The key marker ([`VertexKey`] / [`EdgeKey`]) keeps vertex and edge maps
//! from being swapped at call sites.

#![allow(clippy::module_name_repetitions)]

mod scalar;

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use scalar::{Distance, Float};

use crate::error::{CentralityError, MapKind};
use crate::graph::GraphView;

// ---------------------------------------------------------------------------
// ValueType
// ---------------------------------------------------------------------------

/// The closed set of property value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
}

impl ValueType {
    pub const ALL: [Self; 6] = [
        Self::Bool,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::String,
    ];

    /// Canonical type name (`"double"`, `"int32_t"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::String => "string",
        }
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::String)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == lowered)
            .or(match lowered.as_str() {
                "int" | "int32" => Some(Self::Int32),
                "long" | "int64" => Some(Self::Int64),
                "f32" | "float32" => Some(Self::Float32),
                "f64" | "float64" => Some(Self::Float64),
                _ => None,
            })
            .ok_or_else(|| format!("unknown value type '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Storage for one property map, one variant per [`ValueType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Bool(Vec<bool>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    String(Vec<String>),
}

impl Values {
    fn zeroed(ty: ValueType, len: usize) -> Self {
        match ty {
            ValueType::Bool => Self::Bool(vec![false; len]),
            ValueType::Int32 => Self::Int32(vec![0; len]),
            ValueType::Int64 => Self::Int64(vec![0; len]),
            ValueType::Float32 => Self::Float32(vec![0.0; len]),
            ValueType::Float64 => Self::Float64(vec![0.0; len]),
            ValueType::String => Self::String(vec![String::new(); len]),
        }
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int32(_) => ValueType::Int32,
            Self::Int64(_) => ValueType::Int64,
            Self::Float32(_) => ValueType::Float32,
            Self::Float64(_) => ValueType::Float64,
            Self::String(_) => ValueType::String,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::String(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read slot `i` as `f64`. `None` for string maps or out-of-range slots.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            Self::Bool(v) => v.get(i).map(|&b| if b { 1.0 } else { 0.0 }),
            Self::Int32(v) => v.get(i).map(|&x| f64::from(x)),
            Self::Int64(v) => v.get(i).map(|&x| x as f64),
            Self::Float32(v) => v.get(i).map(|&x| f64::from(x)),
            Self::Float64(v) => v.get(i).copied(),
            Self::String(_) => None,
        }
    }

    /// Convert a scalar map to any [`Float`] type. `None` for string maps.
    #[must_use]
    pub fn to_float_vec<T: Float>(&self) -> Option<Vec<T>> {
        if !self.value_type().is_scalar() {
            return None;
        }
        (0..self.len())
            .map(|i| self.get(i).map(T::from_f64))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// PropertyMap
// ---------------------------------------------------------------------------

/// Marker trait tying a map to vertices or edges.
pub trait Key {
    /// Expected map length for `g`.
    fn expected_len<G: GraphView>(g: &G) -> usize;
}

/// Key marker for per-vertex maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKey {}

/// Key marker for per-edge maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKey {}

impl Key for VertexKey {
    fn expected_len<G: GraphView>(g: &G) -> usize {
        g.vertex_count()
    }
}

impl Key for EdgeKey {
    fn expected_len<G: GraphView>(g: &G) -> usize {
        g.edge_count()
    }
}

/// A property map keyed by vertex or edge index.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMap<K> {
    values: Values,
    _key: PhantomData<fn() -> K>,
}

pub type VertexMap = PropertyMap<VertexKey>;
pub type EdgeMap = PropertyMap<EdgeKey>;

impl<K: Key> PropertyMap<K> {
    /// A zero-filled map of `len` slots.
    #[must_use]
    pub fn new(ty: ValueType, len: usize) -> Self {
        Self::from_values(Values::zeroed(ty, len))
    }

    /// A zero-filled map sized for `g`.
    #[must_use]
    pub fn for_graph<G: GraphView>(g: &G, ty: ValueType) -> Self {
        Self::new(ty, K::expected_len(g))
    }

    #[must_use]
    pub const fn from_values(values: Values) -> Self {
        Self {
            values,
            _key: PhantomData,
        }
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.values.value_type()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i)
    }

    /// All slots as `f64`. `None` for string maps.
    #[must_use]
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        self.values.to_float_vec()
    }

    #[must_use]
    pub const fn values(&self) -> &Values {
        &self.values
    }

    pub const fn values_mut(&mut self) -> &mut Values {
        &mut self.values
    }

    /// Check the map has one slot per vertex/edge of `g`.
    pub(crate) fn check_len<G: GraphView>(&self, g: &G, map: MapKind) -> Result<(), CentralityError> {
        let expected = K::expected_len(g);
        if self.len() == expected {
            Ok(())
        } else {
            Err(CentralityError::SizeMismatch {
                map,
                expected,
                found: self.len(),
            })
        }
    }
}

macro_rules! impl_from_vec {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl<K: Key> From<Vec<$t>> for PropertyMap<K> {
            fn from(values: Vec<$t>) -> Self {
                Self::from_values(Values::$variant(values))
            }
        }
    )*};
}

impl_from_vec!(
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => String,
);
