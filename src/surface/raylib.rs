//! raylib backend.
//!
//! [`RaylibSurface`] wraps any raylib draw handle (plain drawing, 2D camera
//! mode, texture mode) and blits with `draw_texture_pro`. [`load_textures`]
//! fills an [`ImageStore`] with one texture per distinct image id found in a
//! set of sprite definitions; the id doubles as the file path.

use log::info;
use raylib::prelude::*;

use crate::error::{Result, SpriteError};
use crate::resources::imagestore::ImageStore;
use crate::resources::spritedefs::SpriteDefs;
use crate::surface::{DrawSurface, Rect};

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        Rectangle::new(r.x, r.y, r.width, r.height)
    }
}

pub struct RaylibSurface<'a, D: RaylibDraw>(pub &'a mut D);

impl<D: RaylibDraw> DrawSurface for RaylibSurface<'_, D> {
    type Bitmap = Texture2D;

    fn blit(&mut self, bitmap: &Texture2D, src: Rect, dst: Rect) {
        self.0.draw_texture_pro(
            bitmap,
            Rectangle::from(src),
            Rectangle::from(dst),
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }
}

pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    defs: &SpriteDefs,
) -> Result<ImageStore<Texture2D>> {
    let mut store = ImageStore::new();
    for def in defs.sprites.values() {
        if store.contains(&def.image) {
            continue;
        }
        let texture = rl
            .load_texture(thread, &def.image)
            .map_err(|e| SpriteError::ImageLoad {
                id: def.image.clone(),
                reason: e.to_string(),
            })?;
        info!(
            "Loaded texture '{}' ({}x{})",
            def.image, texture.width, texture.height
        );
        store.insert(def.image.clone(), texture);
    }
    Ok(store)
}
