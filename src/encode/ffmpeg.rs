use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8, premul_rgba8};
use crate::render::backend::FrameRGBA;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path`.
    pub overwrite: bool,
    /// Straight RGBA8 color translucent pixels are flattened against.
    pub bg_rgba: [u8; 4],
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
        }
    }
}

/// A running `ffmpeg` child reading raw frames from its stdin.
struct Encoder {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
}

impl Encoder {
    fn spawn(args: &[String]) -> JellyfishResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| JellyfishError::encode(format!("failed to spawn ffmpeg: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| JellyfishError::encode("ffmpeg stdin is not available"))?;
        // ffmpeg stalls once the stderr pipe fills; drain it on a thread.
        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf)?;
                Ok(buf)
            })
        });
        Ok(Self {
            child,
            stdin: Some(stdin),
            stderr,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> JellyfishResult<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| JellyfishError::encode("ffmpeg stdin already closed"))?;
        stdin
            .write_all(bytes)
            .map_err(|e| JellyfishError::encode(format!("write frame to ffmpeg: {e}")))
    }

    fn finish(mut self) -> JellyfishResult<()> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| JellyfishError::encode(format!("wait for ffmpeg: {e}")))?;
        let log = match self.stderr.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| JellyfishError::encode("ffmpeg stderr reader panicked"))?
                .map_err(|e| JellyfishError::encode(format!("read ffmpeg stderr: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            return Err(JellyfishError::encode(format!(
                "ffmpeg exited with {status}: {}",
                String::from_utf8_lossy(&log).trim()
            )));
        }
        Ok(())
    }
}

/// Streams frames into a system `ffmpeg` producing an H.264 / yuv420p MP4.
///
/// Frames are flattened over [`FfmpegSinkOpts::bg_rgba`] first; `ffmpeg` only sees opaque RGBA.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> JellyfishResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(JellyfishError::validation(
                "ffmpeg sink width/height must be non-zero",
            ));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(JellyfishError::validation(format!(
                "yuv420p output needs even dimensions, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(JellyfishError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(JellyfishError::encode("ffmpeg was not found on PATH"));
        }

        let args = encoder_args(&cfg, &self.opts);
        tracing::debug!(out = %self.opts.out_path.display(), ?args, "spawning ffmpeg");
        self.encoder = Some(Encoder::spawn(&args)?);
        self.scratch = vec![0; cfg.width as usize * cfg.height as usize * 4];
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> JellyfishResult<()> {
        check_frame(self.cfg.as_ref(), self.last_idx, idx, frame)?;
        self.last_idx = Some(idx);
        flatten_to_opaque(&mut self.scratch, frame, self.opts.bg_rgba)?;
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| JellyfishError::encode("ffmpeg sink not started"))?;
        encoder.write(&self.scratch)
    }

    fn end(&mut self) -> JellyfishResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| JellyfishError::encode("ffmpeg sink not started"))?;
        self.cfg = None;
        encoder.finish()
    }
}

/// Command line for reading `rgba` rawvideo from stdin and writing `opts.out_path`.
fn encoder_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<String> {
    let mut args: Vec<String> = vec![
        (if opts.overwrite { "-y" } else { "-n" }).into(),
        "-loglevel".into(),
        "error".into(),
        "-f".into(),
        "rawvideo".into(),
        "-pix_fmt".into(),
        "rgba".into(),
        "-s".into(),
        format!("{}x{}", cfg.width, cfg.height),
        "-r".into(),
        format!("{}/{}", cfg.fps.num, cfg.fps.den),
        "-i".into(),
        "pipe:0".into(),
    ];
    args.extend(
        [
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]
        .map(String::from),
    );
    args.push(opts.out_path.to_string_lossy().into_owned());
    args
}

/// Composite `frame` over the straight `bg_rgba` color into opaque RGBA8.
fn flatten_to_opaque(dst: &mut [u8], frame: &FrameRGBA, bg_rgba: [u8; 4]) -> JellyfishResult<()> {
    if dst.len() != frame.data.len() || !dst.len().is_multiple_of(4) {
        return Err(JellyfishError::validation(
            "flatten expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(frame.data.chunks_exact(4)) {
        let px = [s[0], s[1], s[2], s[3]];
        let [r, g, b, a] = if frame.premultiplied {
            px
        } else {
            premul_rgba8(px)
        };
        let inv = 255 - u16::from(a);
        d[0] = add_sat_u8(r, mul_div255_u8(u16::from(bg_rgba[0]), inv));
        d[1] = add_sat_u8(g, mul_div255_u8(u16::from(bg_rgba[1]), inv));
        d[2] = add_sat_u8(b, mul_div255_u8(u16::from(bg_rgba[2]), inv));
        d[3] = 255;
    }
    Ok(())
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> JellyfishResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                JellyfishError::encode(format!(
                    "failed to create output directory '{}': {e}",
                    parent.display()
                ))
            })
        }
        _ => Ok(()),
    }
}

/// Whether `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
