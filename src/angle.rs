use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 平面角を表す不変の値型。
///
/// 内部ではミリ秒（1/1000 秒角）単位の `f64` で保持する。
/// メッシュの境界はすべてミリ秒単位の整数値になるため、
/// 加減算および除算による細分化で誤差が生じない。
///
/// ```
/// # use jpmesh::Angle;
/// let angle = Angle::from_degree(1.5);
/// assert_eq!(angle.minute(), 90.0);
/// assert_eq!(angle.millisecond(), 5_400_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    millisecond: f64,
}

impl Angle {
    /// 度単位の値から [`Angle`] を生成する。
    pub const fn from_degree(degree: f64) -> Angle {
        Angle::from_minute(degree * 60.0)
    }

    /// 分単位の値から [`Angle`] を生成する。
    pub const fn from_minute(minute: f64) -> Angle {
        Angle::from_second(minute * 60.0)
    }

    /// 秒単位の値から [`Angle`] を生成する。
    pub const fn from_second(second: f64) -> Angle {
        Angle::from_millisecond(second * 1000.0)
    }

    /// ミリ秒単位の値から [`Angle`] を生成する。
    pub const fn from_millisecond(millisecond: f64) -> Angle {
        Angle { millisecond }
    }

    /// 度単位の値を返す。
    pub const fn degree(&self) -> f64 {
        self.minute() / 60.0
    }

    /// 分単位の値を返す。
    pub const fn minute(&self) -> f64 {
        self.second() / 60.0
    }

    /// 秒単位の値を返す。
    pub const fn second(&self) -> f64 {
        self.millisecond / 1000.0
    }

    /// ミリ秒単位の値を返す。
    pub const fn millisecond(&self) -> f64 {
        self.millisecond
    }

    pub fn add(self, that: Angle) -> Angle {
        Angle::from_millisecond(self.millisecond + that.millisecond)
    }

    pub fn subtract(self, that: Angle) -> Angle {
        Angle::from_millisecond(self.millisecond - that.millisecond)
    }

    pub fn scale(self, by: f64) -> Angle {
        Angle::from_millisecond(self.millisecond * by)
    }

    pub fn divide(self, by: f64) -> Angle {
        Angle::from_millisecond(self.millisecond / by)
    }

    /// ミリ秒単位で除算し、結果を負の無限大方向へ丸める。
    ///
    /// ```
    /// # use jpmesh::Angle;
    /// let angle = Angle::from_millisecond(7.0);
    /// assert_eq!(angle.floor_divide(2.0), Angle::from_millisecond(3.0));
    /// assert_eq!(angle.negate().floor_divide(2.0), Angle::from_millisecond(-4.0));
    /// ```
    pub fn floor_divide(self, by: f64) -> Angle {
        Angle::from_millisecond((self.millisecond / by).floor())
    }

    pub fn negate(self) -> Angle {
        Angle::from_millisecond(-self.millisecond)
    }

    pub fn abs(self) -> Angle {
        Angle::from_millisecond(self.millisecond.abs())
    }

    /// 基準となる角度 `base` に対するこの角度の比を返す。
    ///
    /// 親メッシュ内での相対位置から子メッシュの番号を求める際に用いる。
    ///
    /// ```
    /// # use jpmesh::Angle;
    /// let offset = Angle::from_second(90.0);
    /// assert_eq!(offset.ratio_in(Angle::from_second(45.0)), 2.0);
    /// ```
    pub fn ratio_in(self, base: Angle) -> f64 {
        self.millisecond / base.millisecond
    }

    pub fn is_finite(&self) -> bool {
        self.millisecond.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::add(self, rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        self.scale(rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        self.divide(rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        self.negate()
    }
}
