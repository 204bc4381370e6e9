//! Error types for the Arbor core library.
//!
//! Defines the error enums exposed by graph construction and the MST engines,
//! each paired with a stable machine-readable code.

use std::fmt;

use thiserror::Error;

use crate::mst::Algorithm;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, vertex_count)`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// The offending endpoint as supplied by the caller.
        vertex: usize,
        /// Number of vertices in the graph under construction.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint lies outside `[0, vertex_count)`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

/// An error produced by an MST engine run.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The engine could not span every vertex and the configured
    /// [`crate::DisconnectedPolicy`] rejects partial results.
    #[error("{algorithm} accepted {accepted} of the {required} edges a spanning tree needs; the graph is disconnected")]
    Disconnected {
        /// Engine that detected the disconnection.
        algorithm: Algorithm,
        /// Number of edges accepted before the engine ran out of candidates.
        accepted: usize,
        /// Number of edges a spanning tree of the graph requires.
        required: usize,
    },
    /// The running total weight no longer fits in an `i64`.
    #[error("{algorithm} total weight overflowed a 64-bit signed integer")]
    WeightOverflow {
        /// Engine whose accumulator overflowed.
        algorithm: Algorithm,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph is disconnected and partial results are rejected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The running total weight overflowed.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}

impl MstError {
    /// Returns the engine that produced this error.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Disconnected { algorithm, .. } | Self::WeightOverflow { algorithm } => *algorithm,
        }
    }
}
