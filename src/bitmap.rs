// SPDX-License-Identifier: MPL-2.0
//! Icon rasterization: SVG rendering via resvg and alpha-preserving
//! recolouring of pre-rendered raster icons.

use crate::error::{Error, Result};
use crate::registry::Registry;
use iced::widget::image;
use image_rs::{Rgba, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia;

/// Default edge length for rendered icons, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 20;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Size and tint parameters for [`Registry::bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Fill colour applied to the icon. For an SVG the rendered shape's
    /// coverage is used as a mask and filled with this colour (white when
    /// unset). For a raster icon every non-transparent pixel takes this
    /// colour while keeping its alpha; unset leaves the pixels as-is.
    pub colour: Option<Rgba<u8>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_ICON_SIZE,
            height: DEFAULT_ICON_SIZE,
            colour: None,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn coloured(mut self, colour: Rgba<u8>) -> Self {
        self.colour = Some(colour);
        self
    }
}

/// A rendered icon, ready to hand to an `iced` image widget.
#[derive(Debug, Clone)]
pub struct IconBitmap {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Rendered RGBA bytes, kept for pixel inspection.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl IconBitmap {
    /// Creates a new `IconBitmap` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the rendered RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl Registry {
    /// Renders an icon into an RGBA bitmap of at most `options.width` ×
    /// `options.height` pixels, preserving the source aspect ratio.
    ///
    /// SVG sources are rasterized at the target scale and filled with the
    /// tint colour (white when unset) using the shape's coverage as a
    /// mask. Raster sources are loaded as-is, recoloured only when a tint
    /// is given, and scaled with smooth resampling.
    ///
    /// # Errors
    ///
    /// Path resolution errors propagate unchanged; see
    /// [`Registry::resolve`]. Unreadable or undecodable sources yield
    /// [`Error::Io`] or [`Error::Svg`].
    pub fn bitmap(
        &self,
        library: &str,
        icon: &str,
        options: &RenderOptions,
        overrides: &[(&str, &str)],
    ) -> Result<IconBitmap> {
        let path = self.resolve(library, icon, overrides)?;
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let rendered = if extension.eq_ignore_ascii_case("svg") {
            let colour = options.colour.unwrap_or(WHITE);
            rasterize_svg(&path, options.width, options.height, colour)?
        } else {
            let mut img = load_raster(&path)?;
            if let Some(colour) = options.colour {
                recolour_by_alpha(&mut img, colour);
            }
            scale_to_fit(img, options.width, options.height)
        };

        let (width, height) = rendered.dimensions();
        Ok(IconBitmap::from_rgba(width, height, rendered.into_vec()))
    }
}

/// Rasterize an SVG file at a uniform scale fitting `width` × `height`,
/// filled with `colour` wherever the shape has coverage.
fn rasterize_svg(path: &Path, width: u32, height: u32, colour: Rgba<u8>) -> Result<RgbaImage> {
    let svg_data = fs::read(path)?;
    let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    // usvg rejects zero-size documents at parse time, so the size is
    // guaranteed positive here.
    let scale = (width as f32 / tree.size().width()).min(height as f32 / tree.size().height());
    let target_width = ((tree.size().width() * scale).round() as u32).max(1);
    let target_height = ((tree.size().height() * scale).round() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(target_width, target_height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // Source-in composite: only the rendered alpha is kept, the tint
    // supplies the colour channels.
    let mut out = RgbaImage::new(target_width, target_height);
    for (pixel, rendered) in out.pixels_mut().zip(pixmap.pixels()) {
        let alpha = (u16::from(rendered.alpha()) * u16::from(colour[3]) / 255) as u8;
        *pixel = Rgba([colour[0], colour[1], colour[2], alpha]);
    }

    Ok(out)
}

fn load_raster(path: &Path) -> Result<RgbaImage> {
    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;
    Ok(img.to_rgba8())
}

/// Replaces the colour channels of every non-transparent pixel with
/// `colour`, keeping each pixel's original alpha value exactly. Fully
/// transparent pixels are left untouched.
fn recolour_by_alpha(image: &mut RgbaImage, colour: Rgba<u8>) {
    for pixel in image.pixels_mut() {
        let alpha = pixel[3];
        if alpha > 0 {
            *pixel = Rgba([colour[0], colour[1], colour[2], alpha]);
        }
    }
}

/// Scales `image` to fit `width` × `height` preserving aspect ratio, with
/// Catmull-Rom resampling. Returns the image unchanged when it already has
/// the requested dimensions.
fn scale_to_fit(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image;
    }
    image_rs::DynamicImage::ImageRgba8(image)
        .resize(width, height, image_rs::imageops::FilterType::CatmullRom)
        .to_rgba8()
}
