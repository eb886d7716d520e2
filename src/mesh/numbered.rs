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
    mesh::{Division, FirstMesh, Mesh, level::MeshLevel},
};

/// 親メッシュを `n × n` に分割し、経度・緯度それぞれに `0..n` の番号を振ったメッシュ。
///
/// コードは親のコードの後ろに緯度番号・経度番号を 1 桁ずつ連結したもの。
/// 第2次メッシュ（`n = 8`）と第3次メッシュ（`n = 10`）がこの方式で分割される。
///
/// 内部的には下記のような構造体で構成されている。
///
/// ```ignore
/// pub struct NumberDividedMesh<D: Division> {
///     parent: D::Parent,
///     lon_number: u8,
///     lat_number: u8,
///     south_west: Coordinate,
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NumberDividedMesh<D: Division> {
    parent: D::Parent,
    lon_number: u8,
    lat_number: u8,
    south_west: Coordinate,
    division: PhantomData<D>,
}

/// 第2次メッシュの階層定義。
#[derive(Debug, Clone, Copy)]
pub enum SecondDivision {}

impl Division for SecondDivision {
    type Parent = FirstMesh;
    const LEVEL: MeshLevel = MeshLevel::Second;
}

/// 第3次メッシュの階層定義。
#[derive(Debug, Clone, Copy)]
pub enum ThirdDivision {}

impl Division for ThirdDivision {
    type Parent = SecondMesh;
    const LEVEL: MeshLevel = MeshLevel::Third;
}

/// 第2次地域区画（約 10km 四方）。第1次メッシュを 8 × 8 に分割したもの。
///
/// ```
/// # use jpmesh::{Mesh, SecondMesh};
/// let mesh = SecondMesh::from_code("5339-45").unwrap();
/// assert_eq!(mesh.code(), "533945");
/// assert_eq!(mesh.lat_number(), 4);
/// assert_eq!(mesh.lon_number(), 5);
/// ```
pub type SecondMesh = NumberDividedMesh<SecondDivision>;

/// 第3次地域区画（約 1km 四方）。第2次メッシュを 10 × 10 に分割したもの。
///
/// ```
/// # use jpmesh::{Mesh, ThirdMesh};
/// let mesh = ThirdMesh::from_code("5339-35-96").unwrap();
/// assert_eq!(mesh.code(), "53393596");
/// assert_eq!(mesh.parent().code(), "533935");
/// ```
pub type ThirdMesh = NumberDividedMesh<ThirdDivision>;

impl<D: Division> NumberDividedMesh<D> {
    /// 親メッシュと経度番号・緯度番号から構築する。
    ///
    /// # バリデーション
    /// - `lon_number` が `0..n` の範囲外の場合、[`Error::LonNumberOutOfRange`] を返す。
    /// - `lat_number` が `0..n` の範囲外の場合、[`Error::LatNumberOutOfRange`] を返す。
    ///
    /// ```
    /// # use jpmesh::{Error, FirstMesh, MeshLevel, SecondMesh};
    /// let first = FirstMesh::new(39, 53).unwrap();
    /// let err = SecondMesh::new(first, 8, 0).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     Error::LonNumberOutOfRange { level: MeshLevel::Second, number: 8, limit: 8 }
    /// );
    /// ```
    pub fn new(parent: D::Parent, lon_number: i32, lat_number: i32) -> Result<Self, Error> {
        let limit = D::LEVEL.divide_num() as i32;
        if !(0..limit).contains(&lon_number) {
            return Err(Error::LonNumberOutOfRange {
                level: D::LEVEL,
                number: lon_number,
                limit,
            });
        }
        if !(0..limit).contains(&lat_number) {
            return Err(Error::LatNumberOutOfRange {
                level: D::LEVEL,
                number: lat_number,
                limit,
            });
        }
        Ok(Self::from_parts(parent, lon_number as u8, lat_number as u8))
    }

    /// 範囲の検証を済ませた番号から構築する。
    fn from_parts(parent: D::Parent, lon_number: u8, lat_number: u8) -> Self {
        let size = D::LEVEL.size();
        let offset = Coordinate::new(
            size.lon().scale(lon_number as f64),
            size.lat().scale(lat_number as f64),
        );
        let south_west = parent.south_west().add(offset);
        NumberDividedMesh {
            parent,
            lon_number,
            lat_number,
            south_west,
            division: PhantomData,
        }
    }

    /// 親メッシュを返す。
    pub fn parent(&self) -> &D::Parent {
        &self.parent
    }

    /// 経度番号（コードの末尾の桁）を返す。
    pub fn lon_number(&self) -> u8 {
        self.lon_number
    }

    /// 緯度番号（コードの末尾から 2 番目の桁）を返す。
    pub fn lat_number(&self) -> u8 {
        self.lat_number
    }

    /// `parent` を分割したすべての子メッシュをコードの昇順で返す。
    ///
    /// ```
    /// # use jpmesh::{FirstMesh, Mesh, SecondMesh};
    /// let first = FirstMesh::from_code("5339").unwrap();
    /// let children: Vec<SecondMesh> = SecondMesh::children_of(&first).collect();
    /// assert_eq!(children.len(), 64);
    /// assert_eq!(children[0].code(), "533900");
    /// assert_eq!(children[63].code(), "533977");
    /// ```
    pub fn children_of(parent: &D::Parent) -> impl Iterator<Item = Self> + use<D> {
        let parent = parent.clone();
        let n = D::LEVEL.divide_num();
        (0..n).flat_map(move |lat_number| {
            let parent = parent.clone();
            (0..n).map(move |lon_number| Self::from_parts(parent.clone(), lon_number, lat_number))
        })
    }
}

impl<D: Division> fmt::Display for NumberDividedMesh<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.parent, self.lat_number, self.lon_number)
    }
}

impl<D: Division> PartialEq for NumberDividedMesh<D> {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent
            && self.lon_number == other.lon_number
            && self.lat_number == other.lat_number
    }
}

impl<D: Division> Eq for NumberDividedMesh<D> {}

impl<D: Division> Hash for NumberDividedMesh<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.lon_number.hash(state);
        self.lat_number.hash(state);
    }
}

impl<D: Division> FromStr for NumberDividedMesh<D> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl<D: Division> Mesh for NumberDividedMesh<D> {
    const LEVEL: MeshLevel = D::LEVEL;

    fn hyphenated_code(&self) -> String {
        format!(
            "{}-{}{}",
            self.parent.hyphenated_code(),
            self.lat_number,
            self.lon_number
        )
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
        let lat_number = captures[2].parse::<i32>().map_err(|_| invalid())?;
        let lon_number = captures[3].parse::<i32>().map_err(|_| invalid())?;
        Self::new(parent, lon_number, lat_number)
    }

    /// 座標を含むメッシュを生成する。
    ///
    /// 親メッシュの南西端からの差分を子メッシュの大きさで割り、
    /// 整数部をそれぞれ経度番号・緯度番号とする。
    fn from_coordinate(coord: Coordinate) -> Result<Self, Error> {
        let parent = D::Parent::from_coordinate(coord)?;
        let remaining = coord.subtract(parent.south_west());
        let size = D::LEVEL.size();
        let lon_number = remaining.lon().ratio_in(size.lon()).floor();
        let lat_number = remaining.lat().ratio_in(size.lat()).floor();
        Self::new(parent, lon_number as i32, lat_number as i32)
    }

    #[cfg(any(test, feature = "random"))]
    fn random_using<R: Rng>(rng: &mut R) -> Self {
        let parent = D::Parent::random_using(rng);
        let n = D::LEVEL.divide_num();
        let lon_number = rng.random_range(0..n);
        let lat_number = rng.random_range(0..n);
        Self::from_parts(parent, lon_number, lat_number)
    }
}
