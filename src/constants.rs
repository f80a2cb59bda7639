pub const RENDER_WIDTH: i32 = 1920;             // Decoded video frame width
pub const RENDER_HEIGHT: i32 = 1080;            // Decoded video frame height
pub const FPS: u32 = 60;                        // Window target frames per second
pub const VIDEO_FPS: u32 = 30;                  // Frame rate video slides are decoded at

pub const AUTOPLAY_INTERVAL: f32 = 6.0;         // Seconds between automatic slide advances
pub const FADE_DURATION: f32 = 0.8;             // Crossfade on slide activation (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;          // Minimum horizontal drag distance (pixels)

pub const INDICATOR_RADIUS: f32 = 8.0;          // Indicator dot radius (pixels)
pub const INDICATOR_SPACING: f32 = 28.0;        // Distance between indicator dot centers (pixels)
pub const INDICATOR_MARGIN_BOTTOM: f32 = 36.0;  // Indicator row distance from the bottom edge (pixels)
pub const INDICATOR_HIT_RADIUS: f32 = 12.0;     // Click hit-test radius, slightly padded (pixels)
