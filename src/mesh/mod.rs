//! 標準地域メッシュ（JIS X 0410）の各階層と、コード・座標との相互変換。
//!
//! 第1次メッシュを頂点として、各階層は親のメッシュを分割して得られる。
//! 子のコードは親のコードの末尾に自身の番号を連結したものになる。

use std::{fmt, hash::Hash, str::FromStr};

#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::{coordinate::Coordinate, error::Error};

pub(crate) mod first;
pub(crate) mod indexed;
pub(crate) mod level;
pub(crate) mod numbered;

#[cfg(test)]
mod tests;

pub use first::FirstMesh;
pub use indexed::{
    HalfDivision, HalfMesh, IndexDividedMesh, OneEighthDivision, OneEighthMesh, QuarterDivision,
    QuarterMesh,
};
pub use level::{MeshLevel, Subdivision};
pub use numbered::{NumberDividedMesh, SecondDivision, SecondMesh, ThirdDivision, ThirdMesh};

/// すべての階層のメッシュが備える性質。
pub trait Mesh: Sized + Clone + fmt::Debug + fmt::Display + Eq + Hash {
    /// このメッシュの階層。
    const LEVEL: MeshLevel;

    /// 区切り文字を含まない正規のメッシュコードを返す。
    fn code(&self) -> String {
        self.to_string()
    }

    /// 階層ごとに `-` で区切ったメッシュコードを返す（例: `5339-35-96-4`）。
    fn hyphenated_code(&self) -> String;

    /// 南西端の座標を返す。
    fn south_west(&self) -> Coordinate;

    /// この階層のメッシュ 1 つ分の大きさを返す。
    fn size() -> Coordinate {
        Self::LEVEL.size()
    }

    /// 北東端の座標を返す。この座標自体はメッシュに含まれない。
    fn north_east(&self) -> Coordinate {
        self.south_west().add(Self::size())
    }

    /// 座標がこのメッシュに含まれるかを返す。
    ///
    /// 南・西の境界を含み、北・東の境界を含まない。
    fn contains(&self, coord: Coordinate) -> bool {
        let south_west = self.south_west();
        let north_east = self.north_east();
        south_west.lon() <= coord.lon()
            && coord.lon() < north_east.lon()
            && south_west.lat() <= coord.lat()
            && coord.lat() < north_east.lat()
    }

    /// メッシュコードからメッシュを生成する。各階層の間の `-` は省略できる。
    fn from_code(code: &str) -> Result<Self, Error>;

    /// 座標を含むメッシュを生成する。
    fn from_coordinate(coord: Coordinate) -> Result<Self, Error>;

    /// 外部の乱数生成器を使用してランダムなメッシュを生成する。
    #[cfg(any(test, feature = "random"))]
    fn random_using<R: Rng>(rng: &mut R) -> Self;

    /// ランダムなメッシュを生成する。
    #[cfg(any(test, feature = "random"))]
    fn random() -> Self {
        Self::random_using(&mut rand::rng())
    }
}

/// [`NumberDividedMesh`] と [`IndexDividedMesh`] の各階層を定義するトレイト。
///
/// 実装する型は値を持たない目印であり、親の階層と自身の階層だけを与える。
/// 分割数や大きさは [`MeshLevel`] から導かれる。
pub trait Division: fmt::Debug + Clone + 'static {
    type Parent: Mesh;
    const LEVEL: MeshLevel;
}

/// いずれかの階層のメッシュ。
///
/// 階層が実行時まで分からないメッシュコードを扱う際に用いる。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JapanMesh {
    First(FirstMesh),
    Second(SecondMesh),
    Third(ThirdMesh),
    Half(HalfMesh),
    Quarter(QuarterMesh),
    OneEighth(OneEighthMesh),
}

impl fmt::Display for JapanMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JapanMesh::First(mesh) => mesh.fmt(f),
            JapanMesh::Second(mesh) => mesh.fmt(f),
            JapanMesh::Third(mesh) => mesh.fmt(f),
            JapanMesh::Half(mesh) => mesh.fmt(f),
            JapanMesh::Quarter(mesh) => mesh.fmt(f),
            JapanMesh::OneEighth(mesh) => mesh.fmt(f),
        }
    }
}

impl FromStr for JapanMesh {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mesh_code(s)
    }
}

impl JapanMesh {
    /// このメッシュの階層を返す。
    pub fn level(&self) -> MeshLevel {
        match self {
            JapanMesh::First(_) => MeshLevel::First,
            JapanMesh::Second(_) => MeshLevel::Second,
            JapanMesh::Third(_) => MeshLevel::Third,
            JapanMesh::Half(_) => MeshLevel::Half,
            JapanMesh::Quarter(_) => MeshLevel::Quarter,
            JapanMesh::OneEighth(_) => MeshLevel::OneEighth,
        }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn hyphenated_code(&self) -> String {
        match self {
            JapanMesh::First(mesh) => mesh.hyphenated_code(),
            JapanMesh::Second(mesh) => mesh.hyphenated_code(),
            JapanMesh::Third(mesh) => mesh.hyphenated_code(),
            JapanMesh::Half(mesh) => mesh.hyphenated_code(),
            JapanMesh::Quarter(mesh) => mesh.hyphenated_code(),
            JapanMesh::OneEighth(mesh) => mesh.hyphenated_code(),
        }
    }

    pub fn south_west(&self) -> Coordinate {
        match self {
            JapanMesh::First(mesh) => mesh.south_west(),
            JapanMesh::Second(mesh) => mesh.south_west(),
            JapanMesh::Third(mesh) => mesh.south_west(),
            JapanMesh::Half(mesh) => mesh.south_west(),
            JapanMesh::Quarter(mesh) => mesh.south_west(),
            JapanMesh::OneEighth(mesh) => mesh.south_west(),
        }
    }

    pub fn size(&self) -> Coordinate {
        self.level().size()
    }

    pub fn north_east(&self) -> Coordinate {
        self.south_west().add(self.size())
    }

    /// 座標がこのメッシュに含まれるかを返す。
    pub fn contains(&self, coord: Coordinate) -> bool {
        match self {
            JapanMesh::First(mesh) => mesh.contains(coord),
            JapanMesh::Second(mesh) => mesh.contains(coord),
            JapanMesh::Third(mesh) => mesh.contains(coord),
            JapanMesh::Half(mesh) => mesh.contains(coord),
            JapanMesh::Quarter(mesh) => mesh.contains(coord),
            JapanMesh::OneEighth(mesh) => mesh.contains(coord),
        }
    }

    /// 指定した階層で、座標を含むメッシュを生成する。
    ///
    /// ```
    /// # use jpmesh::{Coordinate, JapanMesh, MeshLevel};
    /// let coord = Coordinate::from_degrees(139.7454, 35.6586);
    /// let mesh = JapanMesh::from_coordinate(coord, MeshLevel::Third).unwrap();
    /// assert_eq!(mesh.code(), "53393599");
    /// ```
    pub fn from_coordinate(coord: Coordinate, level: MeshLevel) -> Result<JapanMesh, Error> {
        Ok(match level {
            MeshLevel::First => FirstMesh::from_coordinate(coord)?.into(),
            MeshLevel::Second => SecondMesh::from_coordinate(coord)?.into(),
            MeshLevel::Third => ThirdMesh::from_coordinate(coord)?.into(),
            MeshLevel::Half => HalfMesh::from_coordinate(coord)?.into(),
            MeshLevel::Quarter => QuarterMesh::from_coordinate(coord)?.into(),
            MeshLevel::OneEighth => OneEighthMesh::from_coordinate(coord)?.into(),
        })
    }

    /// 指定した階層でランダムなメッシュを生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_at(level: MeshLevel) -> JapanMesh {
        Self::random_at_using(&mut rand::rng(), level)
    }

    /// 外部の乱数生成器を使用して、指定した階層でランダムなメッシュを生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_at_using<R: Rng>(rng: &mut R, level: MeshLevel) -> JapanMesh {
        match level {
            MeshLevel::First => FirstMesh::random_using(rng).into(),
            MeshLevel::Second => SecondMesh::random_using(rng).into(),
            MeshLevel::Third => ThirdMesh::random_using(rng).into(),
            MeshLevel::Half => HalfMesh::random_using(rng).into(),
            MeshLevel::Quarter => QuarterMesh::random_using(rng).into(),
            MeshLevel::OneEighth => OneEighthMesh::random_using(rng).into(),
        }
    }
}

impl From<FirstMesh> for JapanMesh {
    fn from(mesh: FirstMesh) -> Self {
        JapanMesh::First(mesh)
    }
}

impl From<SecondMesh> for JapanMesh {
    fn from(mesh: SecondMesh) -> Self {
        JapanMesh::Second(mesh)
    }
}

impl From<ThirdMesh> for JapanMesh {
    fn from(mesh: ThirdMesh) -> Self {
        JapanMesh::Third(mesh)
    }
}

impl From<HalfMesh> for JapanMesh {
    fn from(mesh: HalfMesh) -> Self {
        JapanMesh::Half(mesh)
    }
}

impl From<QuarterMesh> for JapanMesh {
    fn from(mesh: QuarterMesh) -> Self {
        JapanMesh::Quarter(mesh)
    }
}

impl From<OneEighthMesh> for JapanMesh {
    fn from(mesh: OneEighthMesh) -> Self {
        JapanMesh::OneEighth(mesh)
    }
}

/// メッシュコードの階層を自動で判別し、対応するメッシュを生成する。
///
/// 粗い階層から順にコード全体と照合し、最初に一致した階層で解析する。
/// どの階層にも一致しない場合は [`Error::UnknownCode`] を返す。
///
/// ```
/// # use jpmesh::{parse_mesh_code, JapanMesh, MeshLevel};
/// let mesh = parse_mesh_code("5339-35-96-4").unwrap();
/// assert_eq!(mesh.level(), MeshLevel::Half);
/// assert_eq!(mesh.code(), "533935964");
///
/// assert!(parse_mesh_code("").is_err());
/// ```
pub fn parse_mesh_code(code: &str) -> Result<JapanMesh, Error> {
    let Some(level) = MeshLevel::ALL
        .into_iter()
        .find(|level| level.code_regex().is_match(code))
    else {
        tracing::debug!(code, "mesh code matched no level");
        return Err(Error::UnknownCode {
            code: code.to_string(),
        });
    };

    tracing::trace!(code, %level, "mesh code level resolved");
    Ok(match level {
        MeshLevel::First => FirstMesh::from_code(code)?.into(),
        MeshLevel::Second => SecondMesh::from_code(code)?.into(),
        MeshLevel::Third => ThirdMesh::from_code(code)?.into(),
        MeshLevel::Half => HalfMesh::from_code(code)?.into(),
        MeshLevel::Quarter => QuarterMesh::from_code(code)?.into(),
        MeshLevel::OneEighth => OneEighthMesh::from_code(code)?.into(),
    })
}
