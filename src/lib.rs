//! 標準地域メッシュ（JIS X 0410）のメッシュコードと経緯度座標を相互に変換する。
//!
//! ```
//! use jpmesh::{parse_mesh_code, Coordinate, Mesh, MeshLevel, ThirdMesh};
//!
//! let coord = Coordinate::from_degrees(139.7454, 35.6586);
//! let mesh = ThirdMesh::from_coordinate(coord).unwrap();
//! assert_eq!(mesh.code(), "53393599");
//!
//! let parsed = parse_mesh_code("5339-35-99").unwrap();
//! assert_eq!(parsed.level(), MeshLevel::Third);
//! assert_eq!(parsed.south_west(), mesh.south_west());
//! ```

/// 度・分・秒・ミリ秒を相互に変換できる角度の型。
mod angle;

/// 経度・緯度の組で表される座標の型。
mod coordinate;

/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// メッシュの各階層と、コード・座標からの変換。
mod mesh;

pub use angle::Angle;
pub use coordinate::Coordinate;
pub use error::{Error, ErrorKind};
pub use mesh::{
    Division, FirstMesh, HalfDivision, HalfMesh, IndexDividedMesh, JapanMesh, Mesh, MeshLevel,
    NumberDividedMesh, OneEighthDivision, OneEighthMesh, QuarterDivision, QuarterMesh,
    SecondDivision, SecondMesh, Subdivision, ThirdDivision, ThirdMesh, parse_mesh_code,
};
