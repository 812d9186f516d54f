//! Error types for the treecut core library.
//!
//! Hosts the `define_error_codes!` helper shared by every module-level error
//! enum, the pipeline-level [`TreecutError`], and a convenient result alias.

use thiserror::Error;

use crate::{
    extract::ExtractionError, graph::GraphError, mst::MstError, points::PointSetError,
};

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

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
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

pub(crate) use define_error_codes;

/// Error type produced when configuring or running [`crate::Treecut`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TreecutError {
    /// The requested cluster count was zero.
    #[error("cluster count must be at least 1 (got {got})")]
    InvalidClusterCount {
        /// The cluster count supplied by the caller.
        got: usize,
    },
    /// The coefficient-of-variation threshold was not a positive finite number.
    #[error("variation threshold must be finite and greater than zero (got {got})")]
    InvalidThreshold {
        /// The threshold supplied by the caller.
        got: f64,
    },
    /// Deriving a graph from a point set failed.
    #[error("point set rejected: {source}")]
    Points {
        /// Underlying point-set error.
        #[from]
        source: PointSetError,
    },
    /// Building the weighted graph failed.
    #[error("graph construction failed: {source}")]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
    /// The minimum spanning tree could not be computed.
    #[error("spanning tree construction failed: {source}")]
    Mst {
        /// Underlying spanning tree error.
        #[from]
        source: MstError,
    },
    /// Removing edges from the spanning tree failed.
    #[error("cluster extraction failed: {source}")]
    Extraction {
        /// Underlying extraction error.
        #[from]
        source: ExtractionError,
    },
}

define_error_codes! {
    /// Stable codes describing [`TreecutError`] variants.
    enum TreecutErrorCode for TreecutError {
        /// The requested cluster count was zero.
        InvalidClusterCount => InvalidClusterCount { .. } => "TREECUT_INVALID_CLUSTER_COUNT",
        /// The variation threshold was not a positive finite number.
        InvalidThreshold => InvalidThreshold { .. } => "TREECUT_INVALID_THRESHOLD",
        /// Deriving a graph from a point set failed.
        PointSetFailure => Points { .. } => "TREECUT_POINT_SET_FAILURE",
        /// Building the weighted graph failed.
        GraphFailure => Graph { .. } => "TREECUT_GRAPH_FAILURE",
        /// The minimum spanning tree could not be computed.
        MstFailure => Mst { .. } => "TREECUT_MST_FAILURE",
        /// Removing edges from the spanning tree failed.
        ExtractionFailure => Extraction { .. } => "TREECUT_EXTRACTION_FAILURE",
    }
}

impl TreecutError {
    /// Retrieve the stable code of the stage error wrapped by this error, if any.
    ///
    /// # Examples
    /// ```
    /// use treecut_core::{MstError, TreecutError};
    ///
    /// let err = TreecutError::from(MstError::EmptyGraph);
    /// assert_eq!(err.stage_code(), Some("MST_EMPTY_GRAPH"));
    /// ```
    #[must_use]
    pub const fn stage_code(&self) -> Option<&'static str> {
        match self {
            Self::Points { source } => Some(source.code().as_str()),
            Self::Graph { source } => Some(source.code().as_str()),
            Self::Mst { source } => Some(source.code().as_str()),
            Self::Extraction { source } => Some(source.code().as_str()),
            Self::InvalidClusterCount { .. } | Self::InvalidThreshold { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the pipeline API.
pub type Result<T> = core::result::Result<T, TreecutError>;
