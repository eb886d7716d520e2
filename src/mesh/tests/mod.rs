use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{Angle, Coordinate, mesh::Mesh};

pub mod properties;

/// 南西端の座標をミリ秒単位の値から生成する。
pub fn ms(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(Angle::from_millisecond(lon), Angle::from_millisecond(lat))
}

/// テストのために、ランダムなメッシュを生成する Strategy
/// シードから決定的に生成するため、失敗時の縮小はシード単位で行われる
pub fn arb_mesh<M: Mesh + 'static>() -> impl Strategy<Value = M> {
    any::<u64>().prop_map(|seed| M::random_using(&mut ChaCha8Rng::seed_from_u64(seed)))
}

/// 第1次メッシュの範囲（東経 100-200 度、北緯 0 度から 100 区画分）内の座標
pub fn arb_coordinate() -> impl Strategy<Value = Coordinate> {
    (360_000_000.0..720_000_000.0f64, 0.0..240_000_000.0f64).prop_map(|(lon, lat)| ms(lon, lat))
}
