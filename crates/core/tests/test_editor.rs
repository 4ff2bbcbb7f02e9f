use hexmap::{
    CubeCoord, HexError, MapConfig, MapEditor, OrientationKind, Point2,
    RotationDirection, TileType, Viewport,
};
use strum::IntoEnumIterator;

fn editor(orientation: OrientationKind) -> MapEditor {
    let config = MapConfig {
        orientation,
        hex_width: 20.0,
        hex_height: 20.0,
        ..Default::default()
    };
    MapEditor::new(config, Viewport::new(640.0, 480.0)).unwrap()
}

/// Pixel at the center of a cell
fn pixel(editor: &MapEditor, q: i32, r: i32, s: i32) -> Point2 {
    editor
        .layout()
        .hex_to_pixel(CubeCoord::new(q, r, s).unwrap())
}

#[test]
fn test_locate_hit_and_miss() {
    for orientation in OrientationKind::iter() {
        let mut editor = editor(orientation);
        let hit = pixel(&editor, 1, -1, 0);
        editor.paint(hit, false);

        assert_eq!(editor.tiles().locate(editor.layout(), hit), Some(0));
        let miss = pixel(&editor, 2, -2, 0);
        assert_eq!(editor.tiles().locate(editor.layout(), miss), None);
    }
}

#[test]
fn test_height_clamped_at_max() {
    let mut editor = editor(OrientationKind::Flat);
    let center = pixel(&editor, 0, 0, 0);
    assert_eq!(editor.paint(center, false).height(), 0);
    for expected in [1, 2, 3, 3, 3].iter() {
        assert_eq!(editor.paint(center, false).height(), *expected);
    }
    for expected in [2, 1, 0, -1, -2, -3, -3].iter() {
        assert_eq!(editor.paint(center, true).height(), *expected);
    }
}

#[test]
fn test_retype_resets_height() {
    let mut editor = editor(OrientationKind::Pointy);
    let target = pixel(&editor, -2, 0, 2);
    editor.paint(target, false);
    editor.paint(target, false);
    editor.paint(target, false);
    assert_eq!(editor.tiles().tile_height_at(editor.layout(), target), Some(2));

    editor.set_tile_type(TileType::Stone);
    let tile = editor.paint(target, true);
    assert_eq!(tile.height(), -2);
    assert_eq!(tile.color(), TileType::Stone.color());
}

#[test]
fn test_rotate_requires_direction() {
    let mut editor = editor(OrientationKind::Flat);
    for (q, r) in [(1, 0), (0, 2), (-3, 1)].iter() {
        editor.paint(pixel(&editor, *q, *r, -q - r), false);
    }
    let before = editor.tiles().clone();

    match editor.rotate(None) {
        Err(HexError::InvalidDirection { given: None }) => {}
        other => panic!("expected invalid direction, got {:?}", other),
    }
    assert_eq!(editor.tiles(), &before);

    // "up" isn't a direction either
    let err = "up".parse::<RotationDirection>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid rotation direction Some(\"up\"); expected \"left\" or \"right\""
    );
}

#[test]
fn test_rotate_full_turn() {
    let mut editor = editor(OrientationKind::Pointy);
    for (q, r) in [(1, 0), (0, 2), (-3, 1), (2, -2)].iter() {
        editor.paint(pixel(&editor, *q, *r, -q - r), false);
    }
    let before = editor.tiles().clone();

    for direction in RotationDirection::iter() {
        editor.rotate(Some(direction)).unwrap();
        assert_ne!(editor.tiles(), &before);
        let opposite = match direction {
            RotationDirection::Left => RotationDirection::Right,
            RotationDirection::Right => RotationDirection::Left,
        };
        editor.rotate(Some(opposite)).unwrap();
        assert_eq!(editor.tiles(), &before);
    }

    for _ in 0..6 {
        editor.rotate(Some(RotationDirection::Left)).unwrap();
    }
    let order: Vec<_> = editor.tiles().iter().map(|tile| tile.location()).collect();
    let expected: Vec<_> = before.iter().map(|tile| tile.location()).collect();
    assert_eq!(order, expected);
}

#[test]
fn test_hover_edges() {
    let editor = editor(OrientationKind::Flat);
    let hex = CubeCoord::new_qr(3, -2);
    let center = editor.layout().hex_to_pixel(hex);

    // Nudge just inside each corner, it should still be the same cell
    for corner in editor.hover(center).corners.iter() {
        let nudged = center + (*corner - center) * 0.95;
        assert_eq!(editor.hover(nudged).hex, hex);
    }
}
