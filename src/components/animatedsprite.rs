//! Animated sprite sheet component.
//!
//! An [`AnimatedSprite`] plays the frames of a horizontal sprite sheet. The
//! owner calls [`AnimatedSprite::advance`] with the elapsed time and then
//! [`AnimatedSprite::draw`] once per tick. Playback is driven by a fractional
//! cursor: its floor selects the displayed frame, wrapping around the sheet.
//!
//! One-shot sprites stop drawing once the cursor runs past the last frame and
//! raise [`AnimatedSprite::is_finished`]. The flag never clears; replace the
//! sprite to play it again.
//!
//! # Related
//!
//! - [`crate::systems::animatedsprite`] – ECS systems that advance and draw sprites
//! - [`crate::events::animation::AnimationFinishedEvent`] – emitted when a one-shot ends

use bevy_ecs::prelude::Component;
use log::debug;

use crate::error::{Result, SpriteError};
use crate::surface::{DrawSurface, ImageProvider, Rect, Vec2};

#[derive(Component, Clone, Debug, PartialEq)]
pub struct AnimatedSprite {
    image_id: String,
    /// Top-left draw coordinate.
    pub position: Vec2,
    width: f32,
    height: f32,
    speed: f32,
    frame_index: f64,
    frame_count: u32,
    /// Optional mapping from playback step to sheet column.
    sequence: Option<Vec<u32>>,
    play_once: bool,
    finished: bool,
}

impl AnimatedSprite {
    /// Create a looping sprite over `frame_count` frames of `width` x `height`.
    ///
    /// `speed` is in frames per unit of time; zero or negative keeps the
    /// sprite on frame 0.
    pub fn new(
        image_id: impl Into<String>,
        position: Vec2,
        width: f32,
        height: f32,
        speed: f32,
        frame_count: u32,
    ) -> Result<Self> {
        if frame_count == 0 {
            return Err(SpriteError::InvalidFrameCount);
        }
        Ok(Self {
            image_id: image_id.into(),
            position,
            width,
            height,
            speed,
            frame_index: 0.0,
            frame_count,
            sequence: None,
            play_once: false,
            finished: false,
        })
    }

    /// Create a sprite that plays the given sheet columns in order, e.g.
    /// `[0, 1, 2, 3, 2, 1]` for a ping-pong walk cycle.
    pub fn from_sequence(
        image_id: impl Into<String>,
        position: Vec2,
        width: f32,
        height: f32,
        speed: f32,
        sequence: Vec<u32>,
    ) -> Result<Self> {
        let frame_count =
            u32::try_from(sequence.len()).map_err(|_| SpriteError::InvalidFrameCount)?;
        let mut sprite = Self::new(image_id, position, width, height, speed, frame_count)?;
        sprite.sequence = Some(sequence);
        Ok(sprite)
    }

    pub fn with_play_once(mut self, play_once: bool) -> Self {
        self.play_once = play_once;
        self
    }

    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn frame_index(&self) -> f64 {
        self.frame_index
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn play_once(&self) -> bool {
        self.play_once
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move the playback cursor by `speed * dt`.
    ///
    /// The cursor is kept in `f64` so long runs keep advancing, and it
    /// never goes below zero.
    pub fn advance(&mut self, dt: f32) {
        let delta = f64::from(self.speed) * f64::from(dt);
        self.frame_index = (self.frame_index + delta).max(0.0);
    }

    /// Whole frames played so far.
    fn step(&self) -> u64 {
        // float-to-int casts saturate, so a huge cursor stays past the end
        self.frame_index.floor() as u64
    }

    fn played_through(&self) -> bool {
        self.speed > 0.0 && self.play_once && self.step() >= u64::from(self.frame_count)
    }

    /// Sheet column shown by the next draw.
    pub fn display_frame(&self) -> u32 {
        if self.speed <= 0.0 {
            return 0;
        }
        // the remainder is below frame_count, so it fits back into u32
        let step = (self.step() % u64::from(self.frame_count)) as u32;
        match &self.sequence {
            Some(sequence) => sequence[step as usize],
            None => step,
        }
    }

    /// Region of the sheet for the current frame.
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            self.display_frame() as f32 * self.width,
            0.0,
            self.width,
            self.height,
        )
    }

    /// Where the frame lands on the surface. Drawn unscaled.
    pub fn dest_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Blit the current frame to `surface`.
    ///
    /// A one-shot sprite whose cursor has run past the sheet is marked
    /// finished and draws nothing. Fails with [`SpriteError::ImageNotFound`]
    /// if `images` cannot resolve the image id, in which case nothing is
    /// drawn. Never moves the playback cursor.
    pub fn draw<S, P>(&mut self, surface: &mut S, images: &P) -> Result<()>
    where
        S: DrawSurface + ?Sized,
        P: ImageProvider<Bitmap = S::Bitmap> + ?Sized,
    {
        if self.played_through() {
            if !self.finished {
                debug!(
                    "One-shot sprite '{}' finished after {} frames",
                    self.image_id, self.frame_count
                );
                self.finished = true;
            }
            return Ok(());
        }

        let bitmap = images.get(&self.image_id)?;
        surface.blit(bitmap, self.source_rect(), self.dest_rect());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::imagestore::ImageStore;

    #[derive(Default)]
    struct Recorder {
        blits: Vec<(&'static str, Rect, Rect)>,
    }

    impl DrawSurface for Recorder {
        type Bitmap = &'static str;

        fn blit(&mut self, bitmap: &&'static str, src: Rect, dst: Rect) {
            self.blits.push((*bitmap, src, dst));
        }
    }

    fn sheet() -> ImageStore<&'static str> {
        let mut store = ImageStore::new();
        store.insert("hero", "hero.png");
        store
    }

    fn sprite(speed: f32, frame_count: u32) -> AnimatedSprite {
        AnimatedSprite::new("hero", Vec2::new(10.0, 20.0), 16.0, 24.0, speed, frame_count)
            .unwrap()
    }

    #[test]
    fn test_zero_frame_count_is_rejected() {
        let result = AnimatedSprite::new("hero", Vec2::default(), 16.0, 16.0, 1.0, 0);
        assert_eq!(result, Err(SpriteError::InvalidFrameCount));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let result =
            AnimatedSprite::from_sequence("hero", Vec2::default(), 16.0, 16.0, 1.0, vec![]);
        assert_eq!(result, Err(SpriteError::InvalidFrameCount));
    }

    #[test]
    fn test_advance_adds_speed_times_delta() {
        let mut s = sprite(2.5, 8);
        s.advance(0.4);
        let before = s.frame_index();
        s.advance(0.3);
        assert_eq!(s.frame_index(), before + f64::from(2.5f32) * f64::from(0.3f32));
    }

    #[test]
    fn test_advance_keeps_moving_on_long_runs() {
        let mut s = sprite(16.0, 13);
        s.advance(8_388_608.0 / 16.0);
        assert_eq!(s.frame_index(), 8_388_608.0);
        let frame_before = s.display_frame();

        let dt = 1.0f32 / 60.0;
        s.advance(dt);
        assert_eq!(s.frame_index(), 8_388_608.0 + 16.0 * f64::from(dt));
        for _ in 0..3 {
            s.advance(dt);
        }
        assert_eq!(s.frame_index().floor(), 8_388_609.0);
        assert_ne!(s.display_frame(), frame_before);
    }

    #[test]
    fn test_advance_zero_delta_is_noop() {
        let mut s = sprite(3.0, 4);
        s.advance(1.25);
        let before = s.frame_index();
        s.advance(0.0);
        assert_eq!(s.frame_index(), before);
    }

    #[test]
    fn test_advance_does_not_clamp_past_frame_count() {
        let mut s = sprite(1.0, 4);
        s.advance(10.0);
        assert_eq!(s.frame_index(), 10.0);
    }

    #[test]
    fn test_negative_speed_keeps_cursor_at_zero() {
        let mut s = sprite(-1.0, 4);
        s.advance(3.0);
        assert_eq!(s.frame_index(), 0.0);
    }

    #[test]
    fn test_cycling_wraps_around_sheet() {
        let mut s = sprite(1.0, 4);
        s.advance(4.5);
        assert_eq!(s.display_frame(), 0);

        let mut recorder = Recorder::default();
        s.draw(&mut recorder, &sheet()).unwrap();
        assert_eq!(recorder.blits.len(), 1);
        assert_eq!(recorder.blits[0].1, Rect::new(0.0, 0.0, 16.0, 24.0));
    }

    #[test]
    fn test_draw_uses_frame_offset_and_position() {
        let mut s = sprite(1.0, 4);
        s.advance(2.9);

        let mut recorder = Recorder::default();
        s.draw(&mut recorder, &sheet()).unwrap();

        let (bitmap, src, dst) = recorder.blits[0];
        assert_eq!(bitmap, "hero.png");
        assert_eq!(src, Rect::new(32.0, 0.0, 16.0, 24.0));
        assert_eq!(dst, Rect::new(10.0, 20.0, 16.0, 24.0));
    }

    #[test]
    fn test_draw_follows_moved_position() {
        let mut s = sprite(1.0, 4);
        s.position = Vec2::new(-5.0, 7.5);

        let mut recorder = Recorder::default();
        s.draw(&mut recorder, &sheet()).unwrap();
        assert_eq!(recorder.blits[0].2, Rect::new(-5.0, 7.5, 16.0, 24.0));
    }

    #[test]
    fn test_static_sprite_always_draws_frame_zero() {
        for speed in [0.0, -2.0] {
            let mut s = sprite(speed, 3).with_play_once(true);
            let mut recorder = Recorder::default();
            for _ in 0..10 {
                s.advance(1.0);
                s.draw(&mut recorder, &sheet()).unwrap();
            }
            assert_eq!(recorder.blits.len(), 10);
            assert!(recorder.blits.iter().all(|(_, src, _)| src.x == 0.0));
            assert!(!s.is_finished());
        }
    }

    #[test]
    fn test_draw_never_moves_cursor() {
        let mut s = sprite(1.0, 4);
        s.advance(1.7);
        let mut recorder = Recorder::default();
        s.draw(&mut recorder, &sheet()).unwrap();
        s.draw(&mut recorder, &sheet()).unwrap();
        assert_eq!(s.frame_index(), f64::from(1.7f32));
    }

    #[test]
    fn test_play_once_finishes_and_stops_drawing() {
        let mut s = sprite(1.0, 3).with_play_once(true);
        let mut recorder = Recorder::default();

        s.advance(2.5);
        s.draw(&mut recorder, &sheet()).unwrap();
        assert!(!s.is_finished());
        assert_eq!(recorder.blits.len(), 1);

        s.advance(0.5);
        s.draw(&mut recorder, &sheet()).unwrap();
        assert!(s.is_finished());
        assert_eq!(recorder.blits.len(), 1);

        for _ in 0..5 {
            s.advance(1.0);
            s.draw(&mut recorder, &sheet()).unwrap();
            assert!(s.is_finished());
        }
        assert_eq!(recorder.blits.len(), 1);
    }

    #[test]
    fn test_finished_is_only_set_by_draw() {
        let mut s = sprite(1.0, 2).with_play_once(true);
        s.advance(5.0);
        assert!(!s.is_finished());

        let mut recorder = Recorder::default();
        s.draw(&mut recorder, &sheet()).unwrap();
        assert!(s.is_finished());
    }

    #[test]
    fn test_finished_skips_image_lookup() {
        let mut s = sprite(1.0, 2).with_play_once(true);
        s.advance(3.0);
        let mut recorder = Recorder::default();
        let empty: ImageStore<&'static str> = ImageStore::new();
        assert!(s.draw(&mut recorder, &empty).is_ok());
        assert!(s.is_finished());
    }

    #[test]
    fn test_unknown_image_fails_without_drawing() {
        let mut s = AnimatedSprite::new("ghost", Vec2::default(), 8.0, 8.0, 1.0, 2).unwrap();
        let mut recorder = Recorder::default();
        let err = s.draw(&mut recorder, &sheet()).unwrap_err();
        assert_eq!(err, SpriteError::ImageNotFound("ghost".to_string()));
        assert!(recorder.blits.is_empty());
    }

    #[test]
    fn test_sequence_maps_steps_to_columns() {
        let mut s = AnimatedSprite::from_sequence(
            "hero",
            Vec2::default(),
            10.0,
            10.0,
            1.0,
            vec![0, 1, 2, 1],
        )
        .unwrap();
        let mut columns = Vec::new();
        for _ in 0..6 {
            columns.push(s.display_frame());
            s.advance(1.0);
        }
        assert_eq!(columns, vec![0, 1, 2, 1, 0, 1]);
        assert_eq!(s.source_rect().x, 20.0);
    }

    #[test]
    fn test_sequence_length_bounds_one_shot() {
        let mut s = AnimatedSprite::from_sequence(
            "hero",
            Vec2::default(),
            10.0,
            10.0,
            1.0,
            vec![4, 4, 5],
        )
        .unwrap()
        .with_play_once(true);
        let mut recorder = Recorder::default();
        s.advance(2.0);
        s.draw(&mut recorder, &sheet()).unwrap();
        assert_eq!(recorder.blits[0].1.x, 50.0);
        s.advance(1.0);
        s.draw(&mut recorder, &sheet()).unwrap();
        assert!(s.is_finished());
        assert_eq!(recorder.blits.len(), 1);
    }
}
