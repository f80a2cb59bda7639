use raylib::prelude::*;

use crate::constants::{
    FADE_DURATION, INDICATOR_HIT_RADIUS, INDICATOR_MARGIN_BOTTOM, INDICATOR_RADIUS,
    INDICATOR_SPACING,
};
use crate::slide::Slide;
use crate::state::CarouselState;
use crate::swipe::SwipeTracker;

/// Center of indicator dot `index` in a row of `count`, centered horizontally
/// near the bottom edge of the window.
pub fn indicator_center(index: usize, count: usize, screen_width: f32, screen_height: f32) -> Vector2 {
    let row_width = count.saturating_sub(1) as f32 * INDICATOR_SPACING;
    let left = (screen_width - row_width) * 0.5;
    Vector2::new(
        left + index as f32 * INDICATOR_SPACING,
        screen_height - INDICATOR_MARGIN_BOTTOM,
    )
}

/// Hit-tests a click against the indicator row. The hit radius is slightly
/// larger than the drawn dot.
pub fn hit_indicator(point: Vector2, count: usize, screen_width: f32, screen_height: f32) -> Option<usize> {
    for index in 0..count {
        let center = indicator_center(index, count, screen_width, screen_height);
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        if dx * dx + dy * dy <= INDICATOR_HIT_RADIUS * INDICATOR_HIT_RADIUS {
            return Some(index);
        }
    }
    None
}

/// The carousel controller. Owns the slides and the only mutable state, and
/// funnels every trigger (autoplay expiry, arrow keys, swipes, indicator
/// clicks, hover) through the same transition path so exactly one slide is
/// active after each of them.
pub struct Carousel {
    slides: Vec<Slide>,
    state: CarouselState,
    swipe: SwipeTracker,
    cursor_inside: bool,
    previous: usize,
    fade: f32,
}

impl Carousel {
    /// Builds the controller with slide 0 active and autoplay running.
    pub fn new(slides: Vec<Slide>, interval: f32) -> Carousel {
        let mut carousel = Carousel {
            state: CarouselState::new(slides.len(), interval),
            slides,
            swipe: SwipeTracker::default(),
            cursor_inside: false,
            previous: 0,
            fade: 1.0,
        };
        // With no slides the controller is inert: autoplay never starts and
        // every trigger falls through the state's guards.
        if !carousel.state.is_empty() {
            carousel.sync_playback(0);
        }
        carousel
    }

    /// Applies the side effects of activating `to`: pause every other
    /// slide's video, best-effort play the new one, start the crossfade.
    fn transition(&mut self, from: usize, to: usize) {
        self.previous = from;
        if from != to {
            self.fade = 0.0;
        }
        self.sync_playback(to);
    }

    fn sync_playback(&mut self, active: usize) {
        for (index, slide) in self.slides.iter_mut().enumerate() {
            if let Some(video) = slide.video_mut() {
                if index == active {
                    video.play();
                } else {
                    video.pause();
                }
            }
        }
    }

    pub fn change_slide(&mut self, direction: i32) {
        let from = self.state.current();
        if let Some(to) = self.state.change(direction) {
            self.transition(from, to);
        }
    }

    pub fn go_to_slide(&mut self, index: usize) {
        let from = self.state.current();
        if let Some(to) = self.state.go_to(index) {
            self.transition(from, to);
        }
    }

    /// Dispatches this frame's input events: arrow keys, window hover
    /// (pauses/resumes autoplay), and the press/release pair that is either
    /// a swipe or an indicator click.
    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.change_slide(-1);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.change_slide(1);
        }

        // The window is the native analogue of the hero element: hovering it
        // pauses autoplay, leaving it starts a fresh interval.
        let on_screen = rl.is_cursor_on_screen();
        if on_screen != self.cursor_inside {
            self.cursor_inside = on_screen;
            if on_screen {
                self.state.autoplay.stop();
            } else {
                self.state.autoplay.start();
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.swipe.begin(rl.get_mouse_position().x);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            let position = rl.get_mouse_position();
            match self.swipe.end(position.x) {
                Some(direction) => self.change_slide(direction.step()),
                None => {
                    let screen_width = rl.get_screen_width() as f32;
                    let screen_height = rl.get_screen_height() as f32;
                    if let Some(index) =
                        hit_indicator(position, self.state.len(), screen_width, screen_height)
                    {
                        self.go_to_slide(index);
                    }
                }
            }
        }
    }

    /// Per-frame update: feeds the autoplay cadence, advances the crossfade,
    /// and pulls video frames for whichever slide is playing.
    pub fn update(&mut self, dt: f32) {
        let from = self.state.current();
        if let Some(to) = self.state.tick(dt) {
            self.transition(from, to);
        }
        if self.fade < 1.0 {
            self.fade = (self.fade + dt / FADE_DURATION).min(1.0);
        }
        for slide in &mut self.slides {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;
        let current = self.state.current();

        // During the crossfade the outgoing slide stays underneath.
        if self.fade < 1.0 {
            if let Some(previous) = self.slides.get(self.previous) {
                previous.draw(d, screen_width, screen_height, Color::WHITE);
            }
        }
        if let Some(slide) = self.slides.get(current) {
            let alpha = (self.fade * 255.0) as u8;
            slide.draw(d, screen_width, screen_height, Color::new(255, 255, 255, alpha));
        }

        // Indicator dots mirror the active slide.
        for index in 0..self.slides.len() {
            let center = indicator_center(index, self.slides.len(), screen_width, screen_height);
            if index == current {
                d.draw_circle_v(center, INDICATOR_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_lines(
                    center.x as i32,
                    center.y as i32,
                    INDICATOR_RADIUS,
                    Color::new(255, 255, 255, 160),
                );
            }
        }
    }
}
