use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::warn;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH, VIDEO_FPS};

const BYTES_PER_PIXEL: usize = 4; // RGBA

/// An ffmpeg child process decoding a video file into raw RGBA frames on a
/// pipe. Frames are scaled and letterbox-padded to the fixed render size so
/// every read is the same length.
struct Decoder {
    process: Child,
    stdout: ChildStdout,
}

impl Decoder {
    fn spawn(path: &Path) -> Result<Decoder> {
        let scale = format!(
            "scale={w}:{h}:force_original_aspect_ratio=decrease,pad={w}:{h}:(ow-iw)/2:(oh-ih)/2",
            w = RENDER_WIDTH,
            h = RENDER_HEIGHT
        );
        let mut process = Command::new("ffmpeg")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .args(["-loglevel", "error"])
            .arg("-i")
            .arg(path)
            .args(["-f", "rawvideo"])
            .args(["-pix_fmt", "rgba"])
            .args(["-vf", &scale])
            .args(["-r", &VIDEO_FPS.to_string()])
            .arg("-an")
            .arg("pipe:1")
            .spawn()
            .with_context(|| format!("failed to start ffmpeg for {:?}", path))?;
        let stdout = process
            .stdout
            .take()
            .context("failed to open ffmpeg stdout")?;
        Ok(Decoder { process, stdout })
    }

    /// Reads the next full frame into `frame`. Returns false on a clean end
    /// of stream.
    fn read_frame(&mut self, frame: &mut [u8]) -> Result<bool> {
        let mut filled = 0;
        while filled < frame.len() {
            let n = self.stdout.read(&mut frame[filled..])?;
            if n == 0 {
                if filled == 0 {
                    return Ok(false);
                }
                anyhow::bail!(
                    "truncated frame from ffmpeg ({} of {} bytes)",
                    filled,
                    frame.len()
                );
            }
            filled += n;
        }
        Ok(true)
    }
}

impl Drop for Decoder {
    fn drop(&mut self) {
        // The child is usually still mid-stream; reap it rather than leak it.
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// Best-effort video playback for a slide. The decoder is spawned lazily on
/// first playback; a spawn failure is logged once, latches `failed`, and is
/// never retried — the slide then keeps showing its last (or black) frame
/// while carousel transitions carry on as normal.
pub struct Video {
    path: PathBuf,
    texture: Texture2D,
    frame: Vec<u8>,
    decoder: Option<Decoder>,
    playing: bool,
    failed: bool,
    clock: f32,
}

impl Video {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Video> {
        let image = Image::gen_image_color(RENDER_WIDTH, RENDER_HEIGHT, Color::BLACK);
        let texture = rl
            .load_texture_from_image(thread, &image)
            .map_err(anyhow::Error::msg)?;
        Ok(Video {
            path: path.to_path_buf(),
            texture,
            frame: vec![0; (RENDER_WIDTH * RENDER_HEIGHT) as usize * BYTES_PER_PIXEL],
            decoder: None,
            playing: false,
            failed: false,
            clock: 0.0,
        })
    }

    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    /// Starts or resumes playback. A decoder spawn failure is logged and
    /// swallowed; the slide transition proceeds regardless.
    pub fn play(&mut self) {
        if self.failed {
            return;
        }
        if self.decoder.is_none() {
            match Decoder::spawn(&self.path) {
                Ok(decoder) => self.decoder = Some(decoder),
                Err(e) => {
                    warn!("video playback unavailable for {:?}: {e:#}", self.path);
                    self.failed = true;
                    return;
                }
            }
        }
        self.playing = true;
    }

    /// Freezes the frame clock. Idempotent; the decoder stays in place so a
    /// later `play` resumes where it stopped.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pulls decoded frames according to elapsed time and uploads the newest
    /// one to the texture. End of stream loops the video from the start.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let frame_time = 1.0 / VIDEO_FPS as f32;
        // Drop backlog after a window hitch instead of stalling on reads.
        self.clock = (self.clock + dt).min(4.0 * frame_time);
        let mut uploaded = false;
        while self.clock >= frame_time {
            self.clock -= frame_time;
            let Some(decoder) = self.decoder.as_mut() else {
                return;
            };
            match decoder.read_frame(&mut self.frame) {
                Ok(true) => uploaded = true,
                Ok(false) => {
                    // Loop the video: restart the decoder from the top.
                    self.decoder = None;
                    match Decoder::spawn(&self.path) {
                        Ok(decoder) => self.decoder = Some(decoder),
                        Err(e) => {
                            warn!("failed to restart video {:?}: {e:#}", self.path);
                            self.failed = true;
                            self.playing = false;
                            return;
                        }
                    }
                }
                Err(e) => {
                    warn!("video decode error for {:?}: {e:#}", self.path);
                    self.playing = false;
                    return;
                }
            }
        }
        if uploaded {
            self.texture.update_texture(&self.frame);
        }
    }
}
