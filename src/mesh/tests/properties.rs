#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        Coordinate, FirstMesh, HalfMesh, JapanMesh, OneEighthMesh, QuarterMesh, SecondMesh,
        ThirdMesh, parse_mesh_code,
        mesh::{
            Mesh,
            tests::{arb_coordinate, arb_mesh},
        },
    };

    /// 南西端の座標から同じメッシュが復元されること
    fn check_coordinate_roundtrip<M: Mesh>(mesh: &M) {
        let restored = M::from_coordinate(mesh.south_west()).unwrap();
        assert_eq!(&restored, mesh);
        assert_eq!(restored.code(), mesh.code());
    }

    /// コードを読み直しても同じメッシュになること
    fn check_code_idempotence<M: Mesh>(mesh: &M) {
        let from_code = M::from_code(&mesh.code()).unwrap();
        let from_hyphenated = M::from_code(&mesh.hyphenated_code()).unwrap();
        assert_eq!(&from_code, mesh);
        assert_eq!(&from_hyphenated, mesh);
        assert_eq!(M::from_code(&from_hyphenated.code()).unwrap(), from_hyphenated);
        assert_eq!(mesh.code().len(), M::LEVEL.code_len());
        assert_eq!(mesh.south_west(), from_code.south_west());
    }

    /// 子メッシュが親メッシュの範囲に収まること
    fn check_containment<M: Mesh>(child: &M, parent: Coordinate, parent_north_east: Coordinate) {
        let south_west = child.south_west();
        let north_east = child.north_east();
        assert!(parent.lon() <= south_west.lon() && south_west.lon() < parent_north_east.lon());
        assert!(parent.lat() <= south_west.lat() && south_west.lat() < parent_north_east.lat());
        assert!(north_east.lon() <= parent_north_east.lon());
        assert!(north_east.lat() <= parent_north_east.lat());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn random_test_first_mesh(mesh in arb_mesh::<FirstMesh>()) {
            check_coordinate_roundtrip(&mesh);
            check_code_idempotence(&mesh);
        }

        #[test]
        fn random_test_second_mesh(mesh in arb_mesh::<SecondMesh>()) {
            check_coordinate_roundtrip(&mesh);
            check_code_idempotence(&mesh);
            let parent = mesh.parent();
            check_containment(&mesh, parent.south_west(), parent.north_east());
        }

        #[test]
        fn random_test_third_mesh(mesh in arb_mesh::<ThirdMesh>()) {
            check_coordinate_roundtrip(&mesh);
            check_code_idempotence(&mesh);
            let parent = mesh.parent();
            check_containment(&mesh, parent.south_west(), parent.north_east());
        }

        #[test]
        fn random_test_half_mesh(mesh in arb_mesh::<HalfMesh>()) {
            check_coordinate_roundtrip(&mesh);
            check_code_idempotence(&mesh);
            let parent = mesh.parent();
            check_containment(&mesh, parent.south_west(), parent.north_east());
        }

        #[test]
        fn random_test_quarter_mesh(mesh in arb_mesh::<QuarterMesh>()) {
            check_coordinate_roundtrip(&mesh);
            check_code_idempotence(&mesh);
            let parent = mesh.parent();
            check_containment(&mesh, parent.south_west(), parent.north_east());
        }

        #[test]
        fn random_test_one_eighth_mesh(mesh in arb_mesh::<OneEighthMesh>()) {
            check_coordinate_roundtrip(&mesh);
            check_code_idempotence(&mesh);
            let parent = mesh.parent();
            check_containment(&mesh, parent.south_west(), parent.north_east());
        }

        #[test]
        fn random_test_boundary_truncation(third in arb_mesh::<ThirdMesh>()) {
            // 親の南西端ちょうどの座標は、番号 0 または分割番号 1 の子に属する
            let corner = third.south_west();
            let half = HalfMesh::from_coordinate(corner).unwrap();
            prop_assert_eq!(half.div_index(), 1);
            prop_assert_eq!(half.parent(), &third);

            let second = third.parent();
            let first_child = ThirdMesh::from_coordinate(second.south_west()).unwrap();
            prop_assert_eq!(first_child.lon_number(), 0);
            prop_assert_eq!(first_child.lat_number(), 0);
        }

        #[test]
        fn random_test_coordinate_is_contained(coord in arb_coordinate()) {
            let mut previous: Option<JapanMesh> = None;
            for level in crate::MeshLevel::ALL {
                let mesh = JapanMesh::from_coordinate(coord, level).unwrap();
                prop_assert!(mesh.contains(coord), "{} should contain {:?}", mesh, coord);
                if let Some(parent) = previous {
                    prop_assert!(mesh.code().starts_with(&parent.code()));
                }
                prop_assert_eq!(parse_mesh_code(&mesh.code()).unwrap(), mesh.clone());
                previous = Some(mesh);
            }
        }
    }

    #[test]
    fn test_children_cover_parent() {
        let first = FirstMesh::from_code("5339").unwrap();
        for second in SecondMesh::children_of(&first) {
            assert!(first.contains(second.south_west()));
            check_coordinate_roundtrip(&second);
        }

        let third = ThirdMesh::from_code("53393596").unwrap();
        let halves: Vec<HalfMesh> = HalfMesh::children_of(&third).collect();
        assert_eq!(halves.len(), 4);
        for half in &halves {
            check_containment(half, third.south_west(), third.north_east());
            check_coordinate_roundtrip(half);
        }
    }
}
