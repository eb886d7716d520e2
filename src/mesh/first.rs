use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

#[cfg(any(test, feature = "random"))]
use rand::Rng;

use crate::{
    angle::Angle,
    coordinate::Coordinate,
    error::Error,
    mesh::{
        Mesh,
        level::{FIRST_MESH_SIZE, MeshLevel},
    },
};

/// 第1次メッシュの経度・緯度番号の上限（この値を含まない）。
const NUMBER_LIMIT: i32 = 100;

/// 第1次メッシュの経度番号 0 に対応する経度（度）。
const LON_ORIGIN_DEGREE: f64 = 100.0;

/// 第1次地域区画（約 80km 四方）。
///
/// 経度 1 度 × 緯度 40 分の区画で、すべての階層の頂点となる。
/// コードは緯度番号 2 桁と経度番号 2 桁を連結した 4 桁。
///
/// ```
/// # use jpmesh::{FirstMesh, Mesh};
/// let mesh = FirstMesh::from_code("5339").unwrap();
/// assert_eq!(mesh.lat_number(), 53);
/// assert_eq!(mesh.lon_number(), 39);
/// assert_eq!(mesh.south_west().lon().degree(), 139.0);
/// ```
#[derive(Debug, Clone)]
pub struct FirstMesh {
    lon_number: u8,
    lat_number: u8,
    south_west: Coordinate,
}

impl FirstMesh {
    /// 経度番号・緯度番号から [`FirstMesh`] を構築する。
    ///
    /// # バリデーション
    /// - `lon_number` が `0..100` の範囲外の場合、[`Error::LonNumberOutOfRange`] を返す。
    /// - `lat_number` が `0..100` の範囲外の場合、[`Error::LatNumberOutOfRange`] を返す。
    ///
    /// ```
    /// # use jpmesh::{Error, FirstMesh, MeshLevel};
    /// let err = FirstMesh::new(0, 100).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     Error::LatNumberOutOfRange { level: MeshLevel::First, number: 100, limit: 100 }
    /// );
    /// ```
    pub fn new(lon_number: i32, lat_number: i32) -> Result<FirstMesh, Error> {
        if !(0..NUMBER_LIMIT).contains(&lon_number) {
            return Err(Error::LonNumberOutOfRange {
                level: MeshLevel::First,
                number: lon_number,
                limit: NUMBER_LIMIT,
            });
        }
        if !(0..NUMBER_LIMIT).contains(&lat_number) {
            return Err(Error::LatNumberOutOfRange {
                level: MeshLevel::First,
                number: lat_number,
                limit: NUMBER_LIMIT,
            });
        }

        let south_west = Coordinate::new(
            Angle::from_degree(lon_number as f64 + LON_ORIGIN_DEGREE),
            Angle::from_minute(lat_number as f64 * 40.0),
        );
        Ok(FirstMesh {
            lon_number: lon_number as u8,
            lat_number: lat_number as u8,
            south_west,
        })
    }

    /// 経度番号（コードの下 2 桁）を返す。
    pub fn lon_number(&self) -> u8 {
        self.lon_number
    }

    /// 緯度番号（コードの上 2 桁）を返す。
    pub fn lat_number(&self) -> u8 {
        self.lat_number
    }
}

impl fmt::Display for FirstMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.lat_number, self.lon_number)
    }
}

impl PartialEq for FirstMesh {
    fn eq(&self, other: &Self) -> bool {
        self.lon_number == other.lon_number && self.lat_number == other.lat_number
    }
}

impl Eq for FirstMesh {}

impl Hash for FirstMesh {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lon_number.hash(state);
        self.lat_number.hash(state);
    }
}

impl FromStr for FirstMesh {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FirstMesh::from_code(s)
    }
}

impl Mesh for FirstMesh {
    const LEVEL: MeshLevel = MeshLevel::First;

    fn hyphenated_code(&self) -> String {
        self.code()
    }

    fn south_west(&self) -> Coordinate {
        self.south_west
    }

    fn from_code(code: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidCode {
            level: MeshLevel::First,
            code: code.to_string(),
        };
        let captures = MeshLevel::First
            .parse_regex()
            .captures(code)
            .ok_or_else(invalid)?;
        let lat_number = captures[1].parse::<i32>().map_err(|_| invalid())?;
        let lon_number = captures[2].parse::<i32>().map_err(|_| invalid())?;
        FirstMesh::new(lon_number, lat_number)
    }

    /// 座標を含む [`FirstMesh`] を生成する。
    ///
    /// 経度番号は経度（度）の整数部から 100 を引いた値、
    /// 緯度番号は緯度を 40 分で割った値の整数部となる。
    /// 東経 100 度から 200 度、北緯 0 度から約 66.7 度の範囲外では
    /// 番号が範囲外となりエラーを返す。
    fn from_coordinate(coord: Coordinate) -> Result<Self, Error> {
        if !coord.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                lon: coord.lon().millisecond(),
                lat: coord.lat().millisecond(),
            });
        }

        let lon_number = coord.lon().ratio_in(Angle::from_degree(1.0)).floor() - LON_ORIGIN_DEGREE;
        let lat_number = coord.lat().ratio_in(FIRST_MESH_SIZE.lat()).floor();
        FirstMesh::new(lon_number as i32, lat_number as i32)
    }

    #[cfg(any(test, feature = "random"))]
    fn random_using<R: Rng>(rng: &mut R) -> Self {
        let lon_number = rng.random_range(0..NUMBER_LIMIT);
        let lat_number = rng.random_range(0..NUMBER_LIMIT);
        FirstMesh::new(lon_number, lat_number).expect("Invalid random FirstMesh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let mesh = FirstMesh::new(39, 53).unwrap();
        assert_eq!(mesh.code(), "5339");
        assert_eq!(
            mesh.south_west(),
            Coordinate::new(
                Angle::from_millisecond(500_400_000.0),
                Angle::from_millisecond(127_200_000.0)
            )
        );
    }

    #[test]
    fn test_new_zero_padding() {
        let mesh = FirstMesh::new(5, 3).unwrap();
        assert_eq!(mesh.code(), "0305");
        assert_eq!(FirstMesh::from_code("0305").unwrap(), mesh);
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(
            FirstMesh::new(100, 0),
            Err(Error::LonNumberOutOfRange {
                level: MeshLevel::First,
                number: 100,
                limit: 100
            })
        );
        assert_eq!(
            FirstMesh::new(0, 100),
            Err(Error::LatNumberOutOfRange {
                level: MeshLevel::First,
                number: 100,
                limit: 100
            })
        );
        assert!(FirstMesh::new(-1, 0).is_err());
        assert!(FirstMesh::new(0, -1).is_err());
    }

    #[test]
    fn test_from_code_invalid() {
        for code in ["", "533", "53390", "53a9", "53-39", " 5339"] {
            assert_eq!(
                FirstMesh::from_code(code),
                Err(Error::InvalidCode {
                    level: MeshLevel::First,
                    code: code.to_string()
                }),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_coordinate() {
        let mesh = FirstMesh::from_coordinate(Coordinate::from_degrees(139.7454, 35.6586)).unwrap();
        assert_eq!(mesh.code(), "5339");
    }

    #[test]
    fn test_from_coordinate_outside_domain() {
        let west = FirstMesh::from_coordinate(Coordinate::from_degrees(99.9, 35.0));
        assert!(matches!(
            west,
            Err(Error::LonNumberOutOfRange { number: -1, .. })
        ));

        let south = FirstMesh::from_coordinate(Coordinate::from_degrees(139.0, -0.1));
        assert!(matches!(
            south,
            Err(Error::LatNumberOutOfRange { number: -1, .. })
        ));
    }

    #[test]
    fn test_from_coordinate_not_finite() {
        let result = FirstMesh::from_coordinate(Coordinate::from_degrees(f64::NAN, 35.0));
        assert!(matches!(result, Err(Error::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn test_from_str() {
        let mesh: FirstMesh = "6441".parse().unwrap();
        assert_eq!(mesh, FirstMesh::new(41, 64).unwrap());
        assert_eq!(mesh.hyphenated_code(), "6441");
    }
}
