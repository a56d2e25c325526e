use foamgen::{apply_mask, classify_boundary, BoundaryFace, Grid, PatchKind, Point};

#[test]
fn patches_partition_the_boundary_suffix() {
    let grid = Grid::from_box(4, 3, 2, 2.0, 1.5, 1.0);
    let mesh = apply_mask(&grid, &|c: &Point| c.x < 1.6).unwrap();

    let mut next = mesh.neighbour.len();
    let mut total = 0;
    for patch in &mesh.patches {
        assert_eq!(patch.start_face, next);
        next += patch.n_faces;
        total += patch.n_faces;
    }
    assert_eq!(next, mesh.faces.len());
    assert_eq!(total, mesh.faces.len() - mesh.neighbour.len());
}

#[test]
fn single_cell_hits_every_patch_once() {
    let grid = Grid::from_box(1, 1, 1, 1.0, 1.0, 1.0);
    let mesh = apply_mask(&grid, &|_: &Point| true).unwrap();

    for kind in PatchKind::WRITE_ORDER {
        assert_eq!(mesh.patch(kind).n_faces, 1, "{:?}", kind);
    }
}

#[test]
fn z_planes_win_over_y_planes_on_a_flat_slab() {
    // collapse the z extent so every face centroid sits on both the min-Z
    // and min/max-Y planes; the Z test runs first, so everything is "back"
    let grid = Grid::from_box(2, 2, 1, 1.0, 1.0, 0.0);
    let mesh = apply_mask(&grid, &|_: &Point| true).unwrap();

    let n_boundary = mesh.faces.len() - mesh.neighbour.len();
    assert_eq!(mesh.patch(PatchKind::Back).n_faces, n_boundary);
    assert_eq!(mesh.patch(PatchKind::Front).n_faces, 0);
    assert_eq!(mesh.patch(PatchKind::Bottom).n_faces, 0);
    assert_eq!(mesh.patch(PatchKind::Top).n_faces, 0);
    assert_eq!(mesh.patch(PatchKind::Left).n_faces, 0);
    assert_eq!(mesh.patch(PatchKind::Right).n_faces, 0);
}

#[test]
fn degenerate_bounding_box_falls_back_to_unit_extent() {
    // every point collapses onto the origin, so the box has no extent; the
    // reference length falls back to 1.0, the tolerance stays finite, and
    // the first plane test (min-Z) claims every face
    let grid = Grid::from_box(1, 1, 1, 0.0, 0.0, 0.0);
    let mesh = apply_mask(&grid, &|_: &Point| true).unwrap();

    assert_eq!(mesh.patch(PatchKind::Back).n_faces, 6);
    for kind in [
        PatchKind::Front,
        PatchKind::Bottom,
        PatchKind::Top,
        PatchKind::Left,
        PatchKind::Right,
    ] {
        assert_eq!(mesh.patch(kind).n_faces, 0, "{:?}", kind);
    }
}

#[test]
fn classifier_offsets_start_at_the_internal_face_count() {
    // unit cube corners, one candidate on the z-min plane
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
    ];
    let candidates = vec![BoundaryFace {
        verts: [0, 2, 3, 1],
        owner: 0,
    }];
    let classified = classify_boundary(&points, &candidates, 7);

    assert_eq!(classified.faces, vec![[0, 2, 3, 1]]);
    assert_eq!(classified.owner, vec![0]);

    // emission order back, front, bottom, top, right, left
    let kinds: Vec<PatchKind> = classified.patches.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        [
            PatchKind::Back,
            PatchKind::Front,
            PatchKind::Bottom,
            PatchKind::Top,
            PatchKind::Right,
            PatchKind::Left,
        ]
    );
    assert_eq!(classified.patches[0].start_face, 7);
    assert_eq!(classified.patches[0].n_faces, 1);
    for patch in &classified.patches[1..] {
        assert_eq!(patch.start_face, 8);
        assert_eq!(patch.n_faces, 0);
    }
}

#[test]
fn carved_interior_faces_land_in_the_catch_all() {
    // keep only the x-low half: the exposed cut plane is nowhere near the
    // x-min wall, so it must land in "right" together with nothing else
    // from the true max-X wall (those cells are gone)
    let grid = Grid::from_box(4, 2, 2, 4.0, 2.0, 2.0);
    let mesh = apply_mask(&grid, &|c: &Point| c.x < 2.0).unwrap();

    // cut plane at x = 2 exposes 2x2 faces
    assert_eq!(mesh.patch(PatchKind::Right).n_faces, 4);
    assert_eq!(mesh.patch(PatchKind::Left).n_faces, 4);
}
