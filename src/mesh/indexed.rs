use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::{
    coordinate::Coordinate,
    error::Error,
    mesh::{Division, Mesh, ThirdMesh, level::MeshLevel},
};

/// 親メッシュを 2 × 2 に分割し、`1..=4` の分割番号を振ったメッシュ。
///
/// 分割番号は南西が 1、南東が 2、北西が 3、北東が 4。
///
/// ```text
/// +---+---+
/// | 3 | 4 |
/// +---+---+
/// | 1 | 2 |
/// +---+---+
/// ```
///
/// コードは親のコードの後ろに分割番号を 1 桁連結したもの。
/// 2分の1・4分の1・8分の1メッシュがこの方式で分割される。
#[derive(Debug, Clone)]
pub struct IndexDividedMesh<D: Division> {
    parent: D::Parent,
    div_index: u8,
    south_west: Coordinate,
    division: PhantomData<D>,
}

/// 2分の1メッシュの階層定義。
#[derive(Debug, Clone, Copy)]
pub enum HalfDivision {}

impl Division for HalfDivision {
    type Parent = ThirdMesh;
    const LEVEL: MeshLevel = MeshLevel::Half;
}

/// 4分の1メッシュの階層定義。
#[derive(Debug, Clone, Copy)]
pub enum QuarterDivision {}

impl Division for QuarterDivision {
    type Parent = HalfMesh;
    const LEVEL: MeshLevel = MeshLevel::Quarter;
}

/// 8分の1メッシュの階層定義。
#[derive(Debug, Clone, Copy)]
pub enum OneEighthDivision {}

impl Division for OneEighthDivision {
    type Parent = QuarterMesh;
    const LEVEL: MeshLevel = MeshLevel::OneEighth;
}

/// 2分の1地域メッシュ（約 500m 四方）。第3次メッシュを 2 × 2 に分割したもの。
///
/// ```
/// # use jpmesh::{HalfMesh, Mesh};
/// let mesh = HalfMesh::from_code("5339-35-96-4").unwrap();
/// assert_eq!(mesh.code(), "533935964");
/// assert_eq!(mesh.div_index(), 4);
/// ```
pub type HalfMesh = IndexDividedMesh<HalfDivision>;

/// 4分の1地域メッシュ（約 250m 四方）。2分の1メッシュを 2 × 2 に分割したもの。
pub type QuarterMesh = IndexDividedMesh<QuarterDivision>;

/// 8分の1地域メッシュ（約 125m 四方）。4分の1メッシュを 2 × 2 に分割したもの。
pub type OneEighthMesh = IndexDividedMesh<OneEighthDivision>;

impl<D: Division> IndexDividedMesh<D> {
    /// 親メッシュと分割番号から構築する。
    ///
    /// # バリデーション
    /// - `div_index` が `1..=4` の範囲外の場合、[`Error::DivIndexOutOfRange`] を返す。
    ///
    /// ```
    /// # use jpmesh::{Error, HalfMesh, MeshLevel, Mesh, ThirdMesh};
    /// let third = ThirdMesh::from_code("53393596").unwrap();
    /// let err = HalfMesh::new(third, 0).unwrap_err();
    /// assert_eq!(err, Error::DivIndexOutOfRange { level: MeshLevel::Half, index: 0 });
    /// ```
    pub fn new(parent: D::Parent, div_index: i32) -> Result<Self, Error> {
        if !(1..=4).contains(&div_index) {
            return Err(Error::DivIndexOutOfRange {
                level: D::LEVEL,
                index: div_index,
            });
        }
        Ok(Self::from_parts(parent, div_index as u8))
    }

    /// 範囲の検証を済ませた分割番号から構築する。
    fn from_parts(parent: D::Parent, div_index: u8) -> Self {
        let size = D::LEVEL.size();
        let lon_half = (div_index - 1) % 2;
        let lat_half = (div_index - 1) / 2;
        let offset = Coordinate::new(
            size.lon().scale(lon_half as f64),
            size.lat().scale(lat_half as f64),
        );
        let south_west = parent.south_west().add(offset);
        IndexDividedMesh {
            parent,
            div_index,
            south_west,
            division: PhantomData,
        }
    }

    /// 親メッシュを返す。
    pub fn parent(&self) -> &D::Parent {
        &self.parent
    }

    /// 分割番号（`1..=4`）を返す。
    pub fn div_index(&self) -> u8 {
        self.div_index
    }

    /// `parent` を分割した 4 つの子メッシュを分割番号の順に返す。
    pub fn children_of(parent: &D::Parent) -> impl Iterator<Item = Self> + use<D> {
        let parent = parent.clone();
        (1..=4).map(move |div_index| Self::from_parts(parent.clone(), div_index))
    }
}

impl<D: Division> fmt::Display for IndexDividedMesh<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.parent, self.div_index)
    }
}

impl<D: Division> PartialEq for IndexDividedMesh<D> {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.div_index == other.div_index
    }
}

impl<D: Division> Eq for IndexDividedMesh<D> {}

impl<D: Division> Hash for IndexDividedMesh<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.div_index.hash(state);
    }
}

impl<D: Division> FromStr for IndexDividedMesh<D> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl<D: Division> Mesh for IndexDividedMesh<D> {
    const LEVEL: MeshLevel = D::LEVEL;

    fn hyphenated_code(&self) -> String {
        format!("{}-{}", self.parent.hyphenated_code(), self.div_index)
    }

    fn south_west(&self) -> Coordinate {
        self.south_west
    }

    fn from_code(code: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidCode {
            level: D::LEVEL,
            code: code.to_string(),
        };
        let captures = D::LEVEL.parse_regex().captures(code).ok_or_else(invalid)?;
        let parent = D::Parent::from_code(&captures[1])?;
        let div_index = captures[2].parse::<i32>().map_err(|_| invalid())?;
        Self::new(parent, div_index)
    }

    fn from_coordinate(coord: Coordinate) -> Result<Self, Error> {
        let parent = D::Parent::from_coordinate(coord)?;
        let remaining = coord.subtract(parent.south_west());
        let size = D::LEVEL.size();
        let lon_half = remaining.lon().ratio_in(size.lon()).floor() as i32;
        let lat_half = remaining.lat().ratio_in(size.lat()).floor() as i32;

        // 範囲外の値が分割番号の計算で別の象限に化けないよう、先に検証する
        if !(0..2).contains(&lon_half) {
            return Err(Error::LonNumberOutOfRange {
                level: D::LEVEL,
                number: lon_half,
                limit: 2,
            });
        }
        if !(0..2).contains(&lat_half) {
            return Err(Error::LatNumberOutOfRange {
                level: D::LEVEL,
                number: lat_half,
                limit: 2,
            });
        }
        Self::new(parent, lat_half * 2 + lon_half + 1)
    }

    #[cfg(any(test, feature = "random"))]
    fn random_using<R: Rng>(rng: &mut R) -> Self {
        let parent = D::Parent::random_using(rng);
        let div_index = rng.random_range(1..=4);
        Self::from_parts(parent, div_index)
    }
}
