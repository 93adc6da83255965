// SPDX-License-Identifier: MPL-2.0
use iced_iconlib::{Error, Registry, RenderOptions};
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Builds a temporary icon tree matching the built-in registry layout:
///
/// ```text
/// material/add/regular.svg      16x16, left half covered
/// material/add/regular.png      extension-override target
/// material/wifi_find/regular.svg
/// internal/folder/regular.png   4x4, mixed alpha
/// ```
fn icon_tree() -> TempDir {
    let temp_dir = tempdir().expect("failed to create temp dir");

    let half_rect = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16">
        <rect x="0" y="0" width="8" height="16" fill="blue" />
    </svg>"#;
    let full_rect = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16">
        <rect width="16" height="16" fill="green" />
    </svg>"#;

    write_file(temp_dir.path(), "material/add/regular.svg", half_rect);
    write_file(temp_dir.path(), "material/wifi_find/regular.svg", full_rect);

    let mut png = RgbaImage::new(4, 4);
    for (x, y, pixel) in png.enumerate_pixels_mut() {
        // Top row transparent, the rest increasingly opaque blue.
        let alpha = if y == 0 { 0 } else { (y * 60 + x) as u8 };
        *pixel = Rgba([10, 20, 200, alpha]);
    }
    let png_dir = temp_dir.path().join("internal/folder");
    fs::create_dir_all(&png_dir).expect("failed to create png dir");
    png.save(png_dir.join("regular.png"))
        .expect("failed to write png icon");
    png.save(temp_dir.path().join("material/add/regular.png"))
        .expect("failed to write override png");

    temp_dir
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("path should have a parent"))
        .expect("failed to create icon dir");
    fs::write(path, content).expect("failed to write icon file");
}

#[test]
fn library_names_are_sorted_and_complete() {
    let registry = Registry::builtin("/icons");
    assert_eq!(registry.library_names(), vec!["internal", "material"]);
}

#[test]
fn resolve_uses_default_extension() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    let path = registry
        .resolve("material", "add", &[])
        .expect("icon should resolve");
    assert_eq!(path.extension().and_then(|s| s.to_str()), Some("svg"));

    let path = registry
        .resolve("internal", "folder", &[])
        .expect("icon should resolve");
    assert_eq!(path.extension().and_then(|s| s.to_str()), Some("png"));
}

#[test]
fn resolve_honours_extension_override() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    let path = registry
        .resolve("material", "add", &[("ext", "png")])
        .expect("icon should resolve with override");
    assert!(path.ends_with("material/add/regular.png"));
}

#[test]
fn unknown_library_fails_regardless_of_icon() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    for icon in ["add", "wifi_find", "no_such_icon"] {
        match registry.resolve("fontawesome", icon, &[]) {
            Err(Error::LibraryNotFound { library, available }) => {
                assert_eq!(library, "fontawesome");
                assert_eq!(available, vec!["internal", "material"]);
            }
            other => panic!("expected LibraryNotFound, got {other:?}"),
        }
    }
}

#[test]
fn unknown_icon_fails_with_icon_not_found() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    match registry.resolve("material", "no_such_icon", &[]) {
        Err(Error::IconNotFound(path)) => {
            assert!(path.ends_with("material/no_such_icon/regular.svg"));
        }
        other => panic!("expected IconNotFound, got {other:?}"),
    }
}

#[test]
fn raster_recolour_is_exactly_alpha_preserving() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    // Request the source size so no resampling disturbs the pixels.
    let options = RenderOptions::sized(4, 4).coloured(Rgba([255, 0, 0, 255]));
    let bitmap = registry
        .bitmap("internal", "folder", &options, &[])
        .expect("png icon should render");
    assert_eq!((bitmap.width, bitmap.height), (4, 4));

    let bytes = bitmap.rgba_bytes();
    for y in 0..4u32 {
        for x in 0..4u32 {
            let i = ((y * 4 + x) * 4) as usize;
            let original_alpha = if y == 0 { 0 } else { (y * 60 + x) as u8 };
            if original_alpha == 0 {
                // Transparent pixels keep their original colour and alpha.
                assert_eq!(&bytes[i..i + 4], &[10, 20, 200, 0]);
            } else {
                assert_eq!(&bytes[i..i + 4], &[255, 0, 0, original_alpha]);
            }
        }
    }
}

#[test]
fn untinted_raster_keeps_source_pixels() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    let bitmap = registry
        .bitmap("internal", "folder", &RenderOptions::sized(4, 4), &[])
        .expect("png icon should render");

    // Bottom-left pixel of the fixture: y=3, x=0.
    let i = ((3 * 4) * 4) as usize;
    assert_eq!(&bitmap.rgba_bytes()[i..i + 4], &[10, 20, 200, 180]);
}

#[test]
fn svg_defaults_to_white_fill_at_requested_size() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    let bitmap = registry
        .bitmap("material", "wifi_find", &RenderOptions::sized(30, 30), &[])
        .expect("svg icon should render");
    assert_eq!((bitmap.width, bitmap.height), (30, 30));

    // Centre pixel: the square source covers it fully, so white and opaque.
    let i = ((15 * 30 + 15) * 4) as usize;
    assert_eq!(&bitmap.rgba_bytes()[i..i + 4], &[255, 255, 255, 255]);
}

#[test]
fn svg_shape_masks_the_tint() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    let options = RenderOptions::sized(16, 16).coloured(Rgba([0, 128, 255, 255]));
    let bitmap = registry
        .bitmap("material", "add", &options, &[])
        .expect("svg icon should render");

    let bytes = bitmap.rgba_bytes();
    // Inside the left-half rect.
    let covered = ((8 * 16 + 4) * 4) as usize;
    assert_eq!(&bytes[covered..covered + 4], &[0, 128, 255, 255]);
    // Outside the rect: transparent.
    let uncovered = ((8 * 16 + 12) * 4) as usize;
    assert_eq!(bytes[uncovered + 3], 0);
}

#[test]
fn raster_scaling_preserves_aspect_ratio() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    let wide = RgbaImage::from_pixel(8, 4, Rgba([0, 0, 0, 255]));
    let icon_dir = tree.path().join("internal/banner");
    fs::create_dir_all(&icon_dir).expect("failed to create icon dir");
    wide.save(icon_dir.join("regular.png"))
        .expect("failed to write wide png");

    let bitmap = registry
        .bitmap("internal", "banner", &RenderOptions::sized(30, 30), &[])
        .expect("png icon should render");
    assert_eq!((bitmap.width, bitmap.height), (30, 15));
}

#[test]
fn bitmap_propagates_resolver_errors() {
    let tree = icon_tree();
    let registry = Registry::builtin(tree.path());

    match registry.bitmap("fontawesome", "add", &RenderOptions::default(), &[]) {
        Err(Error::LibraryNotFound { .. }) => {}
        other => panic!("expected LibraryNotFound, got {other:?}"),
    }
    match registry.bitmap("material", "no_such_icon", &RenderOptions::default(), &[]) {
        Err(Error::IconNotFound(_)) => {}
        other => panic!("expected IconNotFound, got {other:?}"),
    }
}
