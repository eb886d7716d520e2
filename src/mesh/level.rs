use std::{fmt, sync::OnceLock};

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{angle::Angle, coordinate::Coordinate};

/// 第1次メッシュの大きさ（経度 1 度 × 緯度 40 分）。
pub(crate) const FIRST_MESH_SIZE: Coordinate =
    Coordinate::new(Angle::from_minute(60.0), Angle::from_minute(40.0));

/// 親メッシュを子メッシュへ分割する方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subdivision {
    /// 親を持たない。経度・緯度の番号を直接持つ。
    Root,
    /// 親を `n × n` に分割し、経度・緯度それぞれ `0..n` の番号を振る。
    Numbered(u8),
    /// 親を 2 × 2 に分割し、南西から `1..=4` の番号を振る。
    Indexed,
}

/// メッシュの階層。粗いものから細かいものの順に並ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeshLevel {
    /// 第1次地域区画（約 80km 四方）。
    First,
    /// 第2次地域区画（約 10km 四方）。
    Second,
    /// 第3次地域区画（約 1km 四方）。
    Third,
    /// 2分の1地域メッシュ（約 500m 四方）。
    Half,
    /// 4分の1地域メッシュ（約 250m 四方）。
    Quarter,
    /// 8分の1地域メッシュ（約 125m 四方）。
    OneEighth,
}

impl fmt::Display for MeshLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeshLevel::First => "FirstMesh",
            MeshLevel::Second => "SecondMesh",
            MeshLevel::Third => "ThirdMesh",
            MeshLevel::Half => "HalfMesh",
            MeshLevel::Quarter => "QuarterMesh",
            MeshLevel::OneEighth => "OneEighthMesh",
        };
        f.write_str(name)
    }
}

impl MeshLevel {
    /// すべての階層を粗いものから順に並べたもの。
    ///
    /// メッシュコードの自動判別はこの順に照合する。
    pub const ALL: [MeshLevel; 6] = [
        MeshLevel::First,
        MeshLevel::Second,
        MeshLevel::Third,
        MeshLevel::Half,
        MeshLevel::Quarter,
        MeshLevel::OneEighth,
    ];

    /// 一つ粗い階層を返す。第1次メッシュの場合は `None`。
    ///
    /// ```
    /// # use jpmesh::MeshLevel;
    /// assert_eq!(MeshLevel::Half.parent(), Some(MeshLevel::Third));
    /// assert_eq!(MeshLevel::First.parent(), None);
    /// ```
    pub fn parent(self) -> Option<MeshLevel> {
        match self {
            MeshLevel::First => None,
            MeshLevel::Second => Some(MeshLevel::First),
            MeshLevel::Third => Some(MeshLevel::Second),
            MeshLevel::Half => Some(MeshLevel::Third),
            MeshLevel::Quarter => Some(MeshLevel::Half),
            MeshLevel::OneEighth => Some(MeshLevel::Quarter),
        }
    }

    /// 一つ細かい階層を返す。8分の1メッシュの場合は `None`。
    pub fn child(self) -> Option<MeshLevel> {
        MeshLevel::ALL.get(self as usize + 1).copied()
    }

    /// 親メッシュからの分割方式を返す。
    pub fn subdivision(self) -> Subdivision {
        match self {
            MeshLevel::First => Subdivision::Root,
            MeshLevel::Second => Subdivision::Numbered(8),
            MeshLevel::Third => Subdivision::Numbered(10),
            MeshLevel::Half | MeshLevel::Quarter | MeshLevel::OneEighth => Subdivision::Indexed,
        }
    }

    /// 親メッシュを経度・緯度それぞれ何分割したかを返す。第1次メッシュは 1。
    pub fn divide_num(self) -> u8 {
        match self.subdivision() {
            Subdivision::Root => 1,
            Subdivision::Numbered(n) => n,
            Subdivision::Indexed => 2,
        }
    }

    /// 区切り文字を除いた正規のメッシュコードの桁数を返す。
    ///
    /// ```
    /// # use jpmesh::MeshLevel;
    /// let lens: Vec<usize> = MeshLevel::ALL.iter().map(|l| l.code_len()).collect();
    /// assert_eq!(lens, vec![4, 6, 8, 9, 10, 11]);
    /// ```
    pub fn code_len(self) -> usize {
        match (self.parent(), self.subdivision()) {
            (Some(parent), Subdivision::Numbered(_)) => parent.code_len() + 2,
            (Some(parent), _) => parent.code_len() + 1,
            (None, _) => 4,
        }
    }

    /// この階層のメッシュ 1 つ分の大きさ（経度方向の幅, 緯度方向の高さ）を返す。
    ///
    /// ```
    /// # use jpmesh::{Angle, Coordinate, MeshLevel};
    /// assert_eq!(
    ///     MeshLevel::Third.size(),
    ///     Coordinate::new(Angle::from_second(45.0), Angle::from_second(30.0))
    /// );
    /// ```
    pub fn size(self) -> Coordinate {
        match self.parent() {
            Some(parent) => parent.size().divide(self.divide_num() as f64),
            None => FIRST_MESH_SIZE,
        }
    }

    /// 前後の区切りを含まないメッシュコードのパターン。
    ///
    /// 子の階層のパターンは親のパターンを接頭辞として含む。
    fn code_pattern(self) -> String {
        match (self.parent(), self.subdivision()) {
            (Some(parent), Subdivision::Numbered(_)) => {
                format!("{}-?[0-9]{{2}}", parent.code_pattern())
            }
            (Some(parent), _) => format!("{}-?[1-4]", parent.code_pattern()),
            (None, _) => "[0-9]{4}".to_string(),
        }
    }

    /// 値を取り出すためのパターン。
    ///
    /// 第1次メッシュでは 1 番目が緯度、2 番目が経度の番号。
    /// それ以外では 1 番目が親のコードで、続いて緯度・経度の番号または分割番号。
    fn parse_pattern(self) -> String {
        match (self.parent(), self.subdivision()) {
            (Some(parent), Subdivision::Numbered(n)) => format!(
                "^({})-?([0-{max}])([0-{max}])$",
                parent.code_pattern(),
                max = n - 1
            ),
            (Some(parent), _) => format!("^({})-?([1-4])$", parent.code_pattern()),
            (None, _) => "^([0-9]{2})([0-9]{2})$".to_string(),
        }
    }

    /// 階層の判別に用いる、コード全体に一致する正規表現を返す。
    pub(crate) fn code_regex(self) -> &'static Regex {
        &compiled_patterns()[self as usize].code
    }

    /// 値の取り出しに用いる正規表現を返す。
    pub(crate) fn parse_regex(self) -> &'static Regex {
        &compiled_patterns()[self as usize].parse
    }
}

struct LevelPatterns {
    code: Regex,
    parse: Regex,
}

fn compiled_patterns() -> &'static [LevelPatterns] {
    static PATTERNS: OnceLock<Vec<LevelPatterns>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        MeshLevel::ALL
            .iter()
            .map(|level| LevelPatterns {
                code: Regex::new(&format!("^{}$", level.code_pattern()))
                    .expect("mesh code pattern must compile"),
                parse: Regex::new(&level.parse_pattern()).expect("mesh parse pattern must compile"),
            })
            .collect()
    })
}
