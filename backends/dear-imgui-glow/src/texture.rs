//! GL textures backing Dear ImGui's managed textures (font atlas and friends)
//!
//! ImGui asks the renderer to create, update and destroy textures through the
//! `ImTextureData` list attached to each frame's draw data. The texture id handed
//! back to ImGui is the GL texture name, so draw commands resolve to a GL handle
//! without a lookup table.

use std::collections::HashMap;

use dear_imgui_rs::render::DrawData;
use dear_imgui_rs::{TextureFormat, TextureId, TextureStatus};
use glow::{Context, HasContext};

use crate::{GlTexture, RenderError, RenderResult, native_name};

struct TextureSlot {
    texture: GlTexture,
    width: u32,
    height: u32,
}

/// Textures created on ImGui's behalf, keyed by the id given back to ImGui
#[derive(Default)]
pub(crate) struct Textures {
    slots: HashMap<u64, TextureSlot>,
    warned_missing_pixels: bool,
}

impl Textures {
    /// Resolve a draw command's texture id to the GL texture to bind
    pub fn resolve(&self, id: TextureId) -> RenderResult<GlTexture> {
        let raw = id.id();
        match self.slots.get(&raw) {
            Some(slot) => Ok(slot.texture),
            // Ids not created here are user textures that are GL names already.
            None => i32::try_from(raw)
                .ok()
                .and_then(native_name)
                .map(glow::NativeTexture)
                .ok_or(RenderError::InvalidTexture(raw)),
        }
    }

    fn note_missing_pixels(&mut self, width: u32, height: u32) {
        if !self.warned_missing_pixels {
            self.warned_missing_pixels = true;
            tracing::warn!(width, height, "skipping texture without pixel data");
        } else {
            tracing::trace!(width, height, "texture still has no pixel data");
        }
    }

    /// Process the create/update/destroy requests queued for this frame
    pub fn apply_requests(&mut self, gl: &Context, draw_data: &DrawData) -> RenderResult<()> {
        for mut td in draw_data.textures() {
            let id = td.tex_id().id();
            match td.status() {
                TextureStatus::OK | TextureStatus::Destroyed => {}
                TextureStatus::WantCreate => {
                    let (width, height) = (td.width().max(0) as u32, td.height().max(0) as u32);
                    let Some(pixels) = td.pixels().and_then(|pixels| {
                        let full = UpdateRect::full(width, height);
                        to_rgba(td.format(), pixels, width, full)
                    }) else {
                        // The request stays queued, so this repeats every frame.
                        self.note_missing_pixels(width, height);
                        continue;
                    };
                    let new_id = self.create(gl, width, height, &pixels)?;
                    td.set_tex_id(TextureId::from(new_id));
                    td.set_status(TextureStatus::OK);
                }
                TextureStatus::WantUpdates => {
                    let Some(slot) = self.slots.get(&id) else {
                        // Lost our copy: ask ImGui to resend the whole texture.
                        td.set_status(TextureStatus::WantCreate);
                        continue;
                    };
                    let r = td.update_rect();
                    let rect = UpdateRect::new(r.x, r.y, r.w, r.h).clamp(slot.width, slot.height);
                    if !rect.is_empty() {
                        if let Some(pixels) = td
                            .pixels()
                            .and_then(|pixels| to_rgba(td.format(), pixels, slot.width, rect))
                        {
                            upload_sub_rect(gl, slot.texture, rect, &pixels);
                        }
                    }
                    td.set_status(TextureStatus::OK);
                }
                TextureStatus::WantDestroy => {
                    self.destroy(gl, id);
                    unsafe {
                        // Without this flag ImGui reads `Destroyed` as "recreate me".
                        (*td.as_raw_mut()).WantDestroyNextFrame = true;
                    }
                    td.set_status(TextureStatus::Destroyed);
                }
            }
        }
        Ok(())
    }

    fn create(&mut self, gl: &Context, width: u32, height: u32, rgba: &[u8]) -> RenderResult<u64> {
        let texture = unsafe {
            let last_texture = gl.get_parameter_i32(glow::TEXTURE_BINDING_2D);
            let texture = gl.create_texture().map_err(RenderError::CreateTexture)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            for (param, value) in [
                (glow::TEXTURE_MIN_FILTER, glow::LINEAR),
                (glow::TEXTURE_MAG_FILTER, glow::LINEAR),
                (glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE),
            ] {
                gl.tex_parameter_i32(glow::TEXTURE_2D, param, value as i32);
            }
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(rgba)),
            );
            gl.bind_texture(
                glow::TEXTURE_2D,
                native_name(last_texture).map(glow::NativeTexture),
            );
            texture
        };

        let id = u64::from(texture.0.get());
        tracing::debug!(id, width, height, "created imgui texture");
        self.slots.insert(
            id,
            TextureSlot {
                texture,
                width,
                height,
            },
        );
        Ok(id)
    }

    fn destroy(&mut self, gl: &Context, id: u64) {
        if let Some(slot) = self.slots.remove(&id) {
            unsafe { gl.delete_texture(slot.texture) };
        }
    }

    pub fn destroy_all(&mut self, gl: &Context) {
        for (_, slot) in self.slots.drain() {
            unsafe { gl.delete_texture(slot.texture) };
        }
    }
}

fn upload_sub_rect(gl: &Context, texture: GlTexture, rect: UpdateRect, rgba: &[u8]) {
    unsafe {
        let last_texture = gl.get_parameter_i32(glow::TEXTURE_BINDING_2D);
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.tex_sub_image_2d(
            glow::TEXTURE_2D,
            0,
            rect.x as i32,
            rect.y as i32,
            rect.w as i32,
            rect.h as i32,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(rgba)),
        );
        gl.bind_texture(
            glow::TEXTURE_2D,
            native_name(last_texture).map(glow::NativeTexture),
        );
    }
}

/// Pixel rectangle inside a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UpdateRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl UpdateRect {
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
        }
    }

    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width,
            h: height,
        }
    }

    /// Shrink the rectangle so it lies within a `width` x `height` texture
    pub fn clamp(self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            w: self.w.min(width - x),
            h: self.h.min(height - y),
        }
    }

    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Copy `rect` out of a tightly packed texture of width `tex_width` as RGBA8
///
/// Alpha8 texels expand to white with the texel as alpha, which the GL 2.1
/// path needs since it has no texture swizzle.
pub(crate) fn to_rgba(
    format: TextureFormat,
    pixels: &[u8],
    tex_width: u32,
    rect: UpdateRect,
) -> Option<Vec<u8>> {
    if rect.is_empty() || rect.x + rect.w > tex_width {
        return None;
    }
    let bpp = match format {
        TextureFormat::RGBA32 => 4,
        TextureFormat::Alpha8 => 1,
    };
    let (tex_width, w) = (tex_width as usize, rect.w as usize);

    let mut out = Vec::with_capacity(w * rect.h as usize * 4);
    for row in rect.y as usize..(rect.y + rect.h) as usize {
        let start = (row * tex_width + rect.x as usize) * bpp;
        let src = pixels.get(start..start + w * bpp)?;
        match format {
            TextureFormat::RGBA32 => out.extend_from_slice(src),
            TextureFormat::Alpha8 => {
                for &alpha in src {
                    out.extend_from_slice(&[255, 255, 255, alpha]);
                }
            }
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_pixels_warn_once() {
        let mut textures = Textures::default();
        assert!(!textures.warned_missing_pixels);
        textures.note_missing_pixels(512, 64);
        assert!(textures.warned_missing_pixels);
        textures.note_missing_pixels(512, 64);
        assert!(textures.warned_missing_pixels);
        assert!(textures.slots.is_empty());
    }

    #[test]
    fn alpha8_expands_to_white_rgba() {
        let pixels = [0u8, 128, 255, 7];
        let rgba = to_rgba(TextureFormat::Alpha8, &pixels, 2, UpdateRect::full(2, 2));
        assert_eq!(
            rgba,
            Some(vec![
                255, 255, 255, 0, 255, 255, 255, 128, //
                255, 255, 255, 255, 255, 255, 255, 7,
            ])
        );
    }

    #[test]
    fn rgba_sub_rect_picks_rows() {
        // 2x2 RGBA texture; take the right column.
        let pixels: Vec<u8> = (0u8..16).collect();
        let rect = UpdateRect {
            x: 1,
            y: 0,
            w: 1,
            h: 2,
        };
        let rgba = to_rgba(TextureFormat::RGBA32, &pixels, 2, rect);
        assert_eq!(rgba, Some(vec![4, 5, 6, 7, 12, 13, 14, 15]));
    }

    #[test]
    fn short_pixel_buffer_is_rejected() {
        let pixels = [1u8, 2, 3];
        assert_eq!(
            to_rgba(TextureFormat::Alpha8, &pixels, 2, UpdateRect::full(2, 2)),
            None
        );
    }

    #[test]
    fn clamp_keeps_rect_inside_texture() {
        let rect = UpdateRect::new(6, 2, 10, 10).clamp(8, 4);
        assert_eq!(
            rect,
            UpdateRect {
                x: 6,
                y: 2,
                w: 2,
                h: 2
            }
        );
        assert!(UpdateRect::new(9, 0, 4, 4).clamp(8, 8).is_empty());
    }
}
