//! Sprite sheet loading
//!
//! The art ships inside the binary as an SVG wrapping a base64-encoded
//! PNG. Decoding is split in two: [`decode_sheet`] is pure (bytes in,
//! RGBA out) so it can be unit tested, and [`SpriteSheet::load`] uploads
//! the pixels to a texture once at startup. A decode failure is fatal;
//! main logs it and exits.

use base64::Engine;
use macroquad::prelude::*;

/// The embedded sprite sheet source
pub const SHEET_SVG: &str = include_str!("../assets/sprites.svg");

/// Named regions of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    PlayerRight,
    PlayerLeft,
    Sword,
    Dagger,
}

impl SpriteId {
    /// Source rectangle of this sprite on the sheet
    pub fn region(self) -> Rect {
        match self {
            SpriteId::PlayerRight => Rect::new(0.0, 0.0, 30.0, 40.0),
            SpriteId::PlayerLeft => Rect::new(32.0, 0.0, 30.0, 40.0),
            SpriteId::Sword => Rect::new(64.0, 0.0, 40.0, 20.0),
            SpriteId::Dagger => Rect::new(64.0, 24.0, 20.0, 10.0),
        }
    }
}

/// Extract and decode the PNG payload embedded in the SVG container
pub fn decode_sheet(svg: &str) -> Result<image::RgbaImage, String> {
    let payload = svg
        .split("base64,")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .ok_or_else(|| "no base64 image payload in sprite sheet".to_string())?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| format!("sprite sheet base64: {}", e))?;

    let img = image::load_from_memory(&bytes).map_err(|e| format!("sprite sheet png: {}", e))?;
    Ok(img.to_rgba8())
}

/// The decoded sheet, uploaded and ready to blit from
pub struct SpriteSheet {
    pub texture: Texture2D,
}

impl SpriteSheet {
    /// Decode the embedded sheet and upload it. Fatal on failure.
    pub fn load() -> Result<Self, String> {
        let rgba = decode_sheet(SHEET_SVG)?;
        let (w, h) = rgba.dimensions();
        let texture = Texture2D::from_rgba8(w as u16, h as u16, rgba.as_raw());
        texture.set_filter(FilterMode::Nearest);
        Ok(Self { texture })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sheet_decodes() {
        let rgba = decode_sheet(SHEET_SVG).unwrap();
        assert_eq!(rgba.dimensions(), (128, 64));
    }

    #[test]
    fn test_regions_fit_the_sheet() {
        let rgba = decode_sheet(SHEET_SVG).unwrap();
        let (w, h) = rgba.dimensions();
        for id in [
            SpriteId::PlayerRight,
            SpriteId::PlayerLeft,
            SpriteId::Sword,
            SpriteId::Dagger,
        ] {
            let r = id.region();
            assert!(r.right() <= w as f32);
            assert!(r.bottom() <= h as f32);
        }
    }

    #[test]
    fn test_player_sprites_are_mirrored() {
        // the left-facing sprite is a horizontal flip of the right one
        let rgba = decode_sheet(SHEET_SVG).unwrap();
        let right = SpriteId::PlayerRight.region();
        let left = SpriteId::PlayerLeft.region();
        for y in 0..right.h as u32 {
            for x in 0..right.w as u32 {
                let a = rgba.get_pixel(right.x as u32 + x, y);
                let b = rgba.get_pixel(left.x as u32 + (left.w as u32 - 1 - x), y);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        assert!(decode_sheet("<svg></svg>").is_err());
    }

    #[test]
    fn test_bad_base64_is_rejected() {
        assert!(decode_sheet("href=\"data:image/png;base64,@@not-base64@@\"").is_err());
    }
}
