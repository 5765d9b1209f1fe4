//! Animation cursor over a borrowed frame list.
//!
//! [`Animation`] never owns its frames: it borrows a slice for `'a` and only
//! tracks which element is current. The frame list must outlive every use of
//! the animation; sprites stored in the ECS world therefore use `'static`
//! frame lists (see [`crate::components::sprite::Sprite`]).
//!
//! Two calls to [`Animation::play`] refer to "the same animation" when they pass
//! the same slice (same address and length) and the same fps. Frame lists meant
//! to be re-triggered every frame should be `static` items rather than `const`
//! items, because each use of a `const` may produce a fresh address.

/// Playback state for a sprite animation.
#[derive(Debug, Clone, Copy)]
pub struct Animation<'a, T> {
    frames: &'a [T],
    fps: f32,
    elapsed_time: f32,
    frame_index: usize,
    playing: bool,
}

impl<T> Default for Animation<'_, T> {
    fn default() -> Self {
        Self {
            frames: &[],
            fps: 0.0,
            elapsed_time: 0.0,
            frame_index: 0,
            playing: false,
        }
    }
}

impl<'a, T: Copy> Animation<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or keep) playing `frames` at `fps` frames per second.
    ///
    /// Empty frame lists and non-positive fps are ignored. Re-playing the
    /// active animation resumes it without touching time or index; anything
    /// else restarts from frame 0.
    ///
    /// Returns the frame to display, or `None` when the call was ignored.
    pub fn play(&mut self, frames: &'a [T], fps: f32) -> Option<T> {
        // `!(fps > 0.0)` also rejects NaN
        if frames.is_empty() || !(fps > 0.0) {
            return None;
        }

        if !self.is_same(frames, fps) {
            self.frames = frames;
            self.fps = fps;
            self.elapsed_time = 0.0;
            self.frame_index = 0;
        }

        self.playing = true;
        self.current_frame()
    }

    /// Pause on the current frame.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Rewind to frame 0 without changing the playing flag.
    pub fn reset(&mut self) -> Option<T> {
        self.elapsed_time = 0.0;
        self.frame_index = 0;
        self.current_frame()
    }

    /// Forget the frame list entirely.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Several frames may be consumed in one call when `dt` spans more than one
    /// frame period. Returns the frame to display, or `None` when paused or
    /// without frames.
    pub fn advance(&mut self, dt: f32) -> Option<T> {
        if !self.playing || self.frames.is_empty() {
            return None;
        }

        self.elapsed_time += dt;

        let frame_duration = 1.0 / self.fps;
        while self.elapsed_time >= frame_duration {
            self.elapsed_time -= frame_duration;
            self.frame_index += 1;
            if self.frame_index >= self.frames.len() {
                self.frame_index = 0;
            }
        }

        self.current_frame()
    }

    pub fn current_frame(&self) -> Option<T> {
        self.frames.get(self.frame_index).copied()
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether `frames`/`fps` describe the animation currently loaded.
    pub fn is_same(&self, frames: &[T], fps: f32) -> bool {
        std::ptr::eq(self.frames, frames) && self.fps == fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_default_is_stopped_and_empty() {
        let anim: Animation<u32> = Animation::new();
        assert!(!anim.is_playing());
        assert_eq!(anim.frame_count(), 0);
        assert_eq!(anim.current_frame(), None);
    }

    #[test]
    fn test_play_ignores_bad_input() {
        let frames = [1u32, 2];
        let empty: [u32; 0] = [];
        let mut anim = Animation::new();

        assert_eq!(anim.play(&empty, 8.0), None);
        assert_eq!(anim.play(&frames, 0.0), None);
        assert_eq!(anim.play(&frames, -1.0), None);
        assert_eq!(anim.play(&frames, f32::NAN), None);
        assert!(!anim.is_playing());
        assert_eq!(anim.frame_count(), 0);
    }

    #[test]
    fn test_play_starts_on_first_frame() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        assert_eq!(anim.play(&frames, 2.0), Some(10));
        assert!(anim.is_playing());
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn test_advance_steps_one_frame_per_period() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        anim.play(&frames, 2.0);

        assert_eq!(anim.advance(0.5), Some(20));
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.advance(0.5), Some(10));
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.advance(0.5), Some(20));
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_advance_consumes_multiple_periods_in_one_call() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        anim.play(&frames, 2.0);

        // 2.5 periods: two frame steps (0 -> 1 -> 0) and 0.25s left over.
        assert_eq!(anim.advance(1.25), Some(10));
        assert_eq!(anim.frame_index(), 0);
        assert!((anim.elapsed_time() - 0.25).abs() < EPSILON);

        let three = [1u32, 2, 3];
        let mut anim = Animation::new();
        anim.play(&three, 2.0);
        assert_eq!(anim.advance(1.25), Some(3));
        assert_eq!(anim.frame_index(), 2);
        assert!((anim.elapsed_time() - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_advance_below_period_keeps_frame() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        anim.play(&frames, 2.0);
        assert_eq!(anim.advance(0.25), Some(10));
        assert!((anim.elapsed_time() - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_replay_same_animation_does_not_reset() {
        let frames = [10u32, 20, 30];
        let mut anim = Animation::new();
        anim.play(&frames, 4.0);
        anim.advance(0.3);
        let index = anim.frame_index();
        let elapsed = anim.elapsed_time();
        assert_eq!(index, 1);

        assert_eq!(anim.play(&frames, 4.0), Some(20));
        assert_eq!(anim.frame_index(), index);
        assert_eq!(anim.elapsed_time(), elapsed);
    }

    #[test]
    fn test_replay_with_different_fps_resets() {
        let frames = [10u32, 20, 30];
        let mut anim = Animation::new();
        anim.play(&frames, 4.0);
        anim.advance(0.3);

        assert_eq!(anim.play(&frames, 8.0), Some(10));
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.elapsed_time(), 0.0);
    }

    #[test]
    fn test_replay_with_sub_slice_resets() {
        let frames = [10u32, 20, 30];
        let mut anim = Animation::new();
        anim.play(&frames, 4.0);
        anim.advance(0.3);

        // Same start address, different length: a different animation.
        assert_eq!(anim.play(&frames[..2], 4.0), Some(10));
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.frame_count(), 2);
    }

    #[test]
    fn test_stop_freezes_and_play_resumes() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        anim.play(&frames, 2.0);
        anim.advance(0.5);
        anim.stop();

        assert_eq!(anim.advance(10.0), None);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.current_frame(), Some(20));

        assert_eq!(anim.play(&frames, 2.0), Some(20));
        assert!(anim.is_playing());
    }

    #[test]
    fn test_reset_rewinds_regardless_of_playing() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        anim.play(&frames, 2.0);
        anim.advance(0.75);
        anim.stop();

        assert_eq!(anim.reset(), Some(10));
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.elapsed_time(), 0.0);
        assert!(!anim.is_playing());
    }

    #[test]
    fn test_reset_without_frames() {
        let mut anim: Animation<u32> = Animation::new();
        assert_eq!(anim.reset(), None);
    }

    #[test]
    fn test_clear_forgets_frames() {
        let frames = [10u32, 20];
        let mut anim = Animation::new();
        anim.play(&frames, 2.0);
        anim.clear();
        assert!(!anim.is_playing());
        assert_eq!(anim.frame_count(), 0);
        assert_eq!(anim.advance(1.0), None);
    }
}
