//! Built-in battery glyphs, used when no icon file is installed.

use battray_core::{IconKind, IconName};

use image::{Rgba, RgbaImage};

/// Edge length of a rendered glyph in pixels.
pub const GLYPH_SIZE: u32 = 32;

const BODY_LEFT: u32 = 2;
const BODY_RIGHT: u32 = 27;
const BODY_TOP: u32 = 8;
const BODY_BOTTOM: u32 = 23;
const BORDER: u32 = 2;

const INNER_LEFT: u32 = BODY_LEFT + BORDER + 1;
const INNER_RIGHT: u32 = BODY_RIGHT - BORDER - 1;
const INNER_TOP: u32 = BODY_TOP + BORDER + 1;
const INNER_BOTTOM: u32 = BODY_BOTTOM - BORDER - 1;

const OUTLINE: Rgba<u8> = Rgba([230, 230, 230, 255]);
const MISSING: Rgba<u8> = Rgba([140, 140, 140, 255]);
const CROSS: Rgba<u8> = Rgba([200, 40, 40, 255]);
const CHARGING: Rgba<u8> = Rgba([60, 140, 230, 255]);
const GOOD: Rgba<u8> = Rgba([70, 180, 70, 255]);
const CAUTION: Rgba<u8> = Rgba([230, 170, 40, 255]);
const EMPTY: Rgba<u8> = Rgba([210, 50, 50, 255]);

/// Draw a battery outline filled according to the icon's kind and bucket.
pub fn render_glyph(icon: &IconName) -> RgbaImage {
    let mut image = RgbaImage::new(GLYPH_SIZE, GLYPH_SIZE);

    let outline = match icon.kind() {
        IconKind::Missing => MISSING,
        _ => OUTLINE,
    };

    // Body border and terminal nub.
    fill_rect(&mut image, BODY_LEFT, BODY_TOP, BODY_RIGHT, BODY_TOP + BORDER - 1, outline);
    fill_rect(&mut image, BODY_LEFT, BODY_BOTTOM - BORDER + 1, BODY_RIGHT, BODY_BOTTOM, outline);
    fill_rect(&mut image, BODY_LEFT, BODY_TOP, BODY_LEFT + BORDER - 1, BODY_BOTTOM, outline);
    fill_rect(&mut image, BODY_RIGHT - BORDER + 1, BODY_TOP, BODY_RIGHT, BODY_BOTTOM, outline);
    fill_rect(&mut image, BODY_RIGHT + 1, 12, BODY_RIGHT + 3, 19, outline);

    match icon.kind() {
        IconKind::Missing => draw_cross(&mut image),
        kind => {
            let color = fill_color(kind, icon.fill());
            let inner_width = INNER_RIGHT - INNER_LEFT + 1;
            let width = (inner_width * u32::from(icon.fill()) / 100).max(1);
            fill_rect(
                &mut image,
                INNER_LEFT,
                INNER_TOP,
                INNER_LEFT + width - 1,
                INNER_BOTTOM,
                color,
            );
        }
    }

    image
}

fn fill_color(kind: IconKind, fill: u8) -> Rgba<u8> {
    match kind {
        IconKind::Charging | IconKind::Charged => CHARGING,
        _ if fill <= 20 => EMPTY,
        _ if fill <= 40 => CAUTION,
        _ => GOOD,
    }
}

fn fill_rect(image: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            image.put_pixel(x, y, color);
        }
    }
}

fn draw_cross(image: &mut RgbaImage) {
    let width = INNER_RIGHT - INNER_LEFT;
    let height = INNER_BOTTOM - INNER_TOP;

    for step in 0..=height {
        let x = INNER_LEFT + step * width / height;
        image.put_pixel(x, INNER_TOP + step, CROSS);
        image.put_pixel(x, INNER_BOTTOM - step, CROSS);
    }
}
