#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mesh::MeshLevel;

/// エラーの大分類。
///
/// エラーメッセージの文言は安定した契約ではないため、
/// 呼び出し側でエラーを判別する場合はこの値を用いる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// 数値インデックスが階層ごとの有効範囲外。
    Range,
    /// メッシュコードの書式が不正。
    Format,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("Longitude number '{number}' is out of range for {level} (valid: 0..{limit})")]
    LonNumberOutOfRange {
        level: MeshLevel,
        number: i32,
        limit: i32,
    },

    #[error("Latitude number '{number}' is out of range for {level} (valid: 0..{limit})")]
    LatNumberOutOfRange {
        level: MeshLevel,
        number: i32,
        limit: i32,
    },

    #[error("Divide index '{index}' is out of range for {level} (valid: 1..=4)")]
    DivIndexOutOfRange { level: MeshLevel, index: i32 },

    #[error("Coordinate (lon: {lon}ms, lat: {lat}ms) is not finite")]
    NonFiniteCoordinate { lon: f64, lat: f64 },

    #[error("Invalid mesh code for {level}: '{code}'")]
    InvalidCode { level: MeshLevel, code: String },

    #[error("Invalid mesh code: '{code}'")]
    UnknownCode { code: String },
}

impl Error {
    /// このエラーの大分類を返す。
    ///
    /// ```
    /// # use jpmesh::{ErrorKind, FirstMesh};
    /// let err = FirstMesh::new(100, 0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LonNumberOutOfRange { .. }
            | Error::LatNumberOutOfRange { .. }
            | Error::DivIndexOutOfRange { .. }
            | Error::NonFiniteCoordinate { .. } => ErrorKind::Range,
            Error::InvalidCode { .. } | Error::UnknownCode { .. } => ErrorKind::Format,
        }
    }
}
