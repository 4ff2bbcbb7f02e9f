use crate::{
    render::MapRenderer, util::unit::Point2, GridCell, MapEditor, Tile,
};
use svg::{
    node::{
        element::{Group, Polygon},
        Comment,
    },
    Document,
};

/// Render an editor's map as an SVG. The view box is the editor's viewport,
/// so the document lines up pixel-for-pixel with the editor. The grid goes
/// on the bottom, then tiles are drawn in paint order.
pub fn map_to_svg(editor: &MapEditor, renderer: &MapRenderer) -> Document {
    let viewport = editor.viewport();
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, viewport.width, viewport.height))
        .set("width", viewport.width)
        .set("height", viewport.height)
        .add(Comment::new(format!("\n{:#?}\n", editor.config())));

    if renderer.render_config().show_grid {
        document = document.add(draw_grid(editor, renderer));
    }

    let layout = editor.layout();
    for tile in editor.tiles().iter() {
        let corners = layout.polygon_corners(tile.location());
        document = document.add(draw_tile(renderer, tile, &corners));
    }

    document
}

/// Convert polygon corners into the format the SVG lib wants for `points`
fn points(corners: &[Point2; 6]) -> Vec<(f64, f64)> {
    corners.iter().map(|corner| (corner.x, corner.y)).collect()
}

/// Generate a group holding the outline of every grid cell
fn draw_grid(editor: &MapEditor, renderer: &MapRenderer) -> Group {
    editor.grid_cells().fold(
        Group::new()
            .set("fill", "none")
            .set("stroke", MapRenderer::GRID_COLOR.to_css())
            .set("stroke-width", renderer.render_config().stroke_width),
        |group, GridCell { corners, .. }| {
            group.add(Polygon::new().set("points", points(&corners)))
        },
    )
}

/// Generate an SVG polygon for a single tile
fn draw_tile(
    renderer: &MapRenderer,
    tile: &Tile,
    corners: &[Point2; 6],
) -> Group {
    let stroke_width = renderer.render_config().stroke_width;
    let mut polygon = Polygon::new()
        .set("points", points(corners))
        .set("fill", renderer.tile_color(tile).to_css());
    if stroke_width > 0.0 {
        polygon = polygon
            .set("stroke", MapRenderer::TILE_STROKE_COLOR.to_css())
            .set("stroke-width", stroke_width);
    }

    Group::new()
        .add(Comment::new(format!(
            "{} height={}",
            tile.location(),
            tile.height()
        ))) // Readability!
        .add(polygon)
}
