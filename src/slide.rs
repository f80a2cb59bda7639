use raylib::prelude::*;

use crate::video::Video;

pub enum Media {
    Image(Texture2D),
    Video(Video),
}

/// One display unit of the carousel: a still image or a video. Whether a
/// slide is active is derived from the controller's current index; slides
/// carry no activation state of their own.
pub struct Slide {
    media: Media,
}

impl Slide {
    pub fn image(texture: Texture2D) -> Slide {
        Slide {
            media: Media::Image(texture),
        }
    }

    pub fn video(video: Video) -> Slide {
        Slide {
            media: Media::Video(video),
        }
    }

    pub fn video_mut(&mut self) -> Option<&mut Video> {
        match &mut self.media {
            Media::Video(video) => Some(video),
            Media::Image(_) => None,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Media::Video(video) = &mut self.media {
            video.update(dt);
        }
    }

    /// Draws the slide letterboxed into the window, preserving aspect ratio.
    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32, tint: Color) {
        let texture = match &self.media {
            Media::Image(texture) => texture,
            Media::Video(video) => video.texture(),
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = (screen_width / tex_width).min(screen_height / tex_height);
        let dest_width = tex_width * scale;
        let dest_height = tex_height * scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - dest_width) * 0.5,
                (screen_height - dest_height) * 0.5,
                dest_width,
                dest_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            tint,
        );
    }
}
