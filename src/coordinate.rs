use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::Angle;

/// 経度と緯度の組で表される座標。
///
/// 演算はすべて成分ごとに行われる。
///
/// ```
/// # use jpmesh::{Angle, Coordinate};
/// let coord = Coordinate::from_degrees(139.7, 35.6);
/// assert_eq!(coord.lon(), Angle::from_degree(139.7));
/// assert_eq!(coord.lat(), Angle::from_degree(35.6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    lon: Angle,
    lat: Angle,
}

impl Coordinate {
    pub const fn new(lon: Angle, lat: Angle) -> Coordinate {
        Coordinate { lon, lat }
    }

    /// 度単位の経度・緯度から [`Coordinate`] を生成する。
    pub const fn from_degrees(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(Angle::from_degree(lon), Angle::from_degree(lat))
    }

    /// 経度を返す。
    pub const fn lon(&self) -> Angle {
        self.lon
    }

    /// 緯度を返す。
    pub const fn lat(&self) -> Angle {
        self.lat
    }

    pub fn add(self, that: Coordinate) -> Coordinate {
        Coordinate::new(self.lon.add(that.lon), self.lat.add(that.lat))
    }

    pub fn subtract(self, that: Coordinate) -> Coordinate {
        Coordinate::new(self.lon.subtract(that.lon), self.lat.subtract(that.lat))
    }

    pub fn scale(self, by: f64) -> Coordinate {
        Coordinate::new(self.lon.scale(by), self.lat.scale(by))
    }

    pub fn divide(self, by: f64) -> Coordinate {
        Coordinate::new(self.lon.divide(by), self.lat.divide(by))
    }

    /// 各成分をミリ秒単位で除算し、負の無限大方向へ丸める。
    pub fn floor_divide(self, by: f64) -> Coordinate {
        Coordinate::new(self.lon.floor_divide(by), self.lat.floor_divide(by))
    }

    pub fn negate(self) -> Coordinate {
        Coordinate::new(self.lon.negate(), self.lat.negate())
    }

    /// 経度・緯度がともに有限値であれば `true` を返す。
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::add(self, rhs)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: f64) -> Coordinate {
        self.scale(rhs)
    }
}

impl Div<f64> for Coordinate {
    type Output = Coordinate;

    fn div(self, rhs: f64) -> Coordinate {
        self.divide(rhs)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(Angle::from_millisecond(lon), Angle::from_millisecond(lat))
    }

    #[test]
    fn test_accessors() {
        let coord = ms(1.0, 2.0);
        assert_eq!(coord.lon(), Angle::from_millisecond(1.0));
        assert_eq!(coord.lat(), Angle::from_millisecond(2.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = ms(1.0, 2.0);
        let b = ms(3.0, 5.0);

        assert_eq!(a.add(b), ms(4.0, 7.0));
        assert_eq!(b.subtract(a), ms(2.0, 3.0));
        assert_eq!(a.scale(3.0), ms(3.0, 6.0));
        assert_eq!(b.divide(2.0), ms(1.5, 2.5));
        assert_eq!(b.floor_divide(2.0), ms(1.0, 2.0));
        assert_eq!(a.negate(), ms(-1.0, -2.0));
    }

    #[test]
    fn test_operators() {
        let a = ms(1.0, 2.0);
        let b = ms(3.0, 5.0);

        assert_eq!(a + b, ms(4.0, 7.0));
        assert_eq!(b - a, ms(2.0, 3.0));
        assert_eq!(a * 3.0, ms(3.0, 6.0));
        assert_eq!(b / 2.0, ms(1.5, 2.5));
        assert_eq!(-a, ms(-1.0, -2.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_floor_divide_negative() {
        let coord = ms(-3.0, 3.0);
        assert_eq!(coord.floor_divide(2.0), ms(-2.0, 1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::from_degrees(139.0, 35.0).is_finite());
        assert!(!Coordinate::from_degrees(f64::NAN, 35.0).is_finite());
    }
}
