//! Frame-counted animation.
//!
//! A [`FrameArray`] cycles through a list of surfaces, advancing at most once
//! every `delay` presents. Pacing is counted in frames, never in wall time.

use std::path::Path;
use std::sync::Arc;

use trellis_core::Point;

use crate::error::{BuildResult, ConfigError, UiResult, WidgetError};
use crate::render::{CopyTo, Drawable, RenderTarget, Surface, SurfaceLoader};

/// An animation: frames played in a loop, optionally a bounded number of
/// times.
///
/// Frames are shared: [`shared`](Self::shared) and `clone` hand out another
/// player over the same frames, [`deep_copy`](Self::deep_copy) duplicates
/// them.
#[derive(Debug, Clone)]
pub struct FrameArray {
    frames: Arc<Vec<Surface>>,
    /// Presents per advance. Never zero.
    delay: usize,
    counter: usize,
    index: usize,
    /// Advances left; negative plays forever.
    times: i64,
    paused: bool,
}

impl FrameArray {
    /// Creates a looping animation starting at frame `index`.
    ///
    /// # Errors
    ///
    /// [`WidgetError::InvalidConfiguration`] if `delay` is zero, `frames` is
    /// empty or `index` is out of range.
    pub fn new(frames: Vec<Surface>, delay: usize, index: usize) -> BuildResult<Self> {
        if delay == 0 {
            return Err(WidgetError::invalid("FrameArray", "delay must be nonzero"));
        }
        if frames.is_empty() {
            return Err(WidgetError::invalid("FrameArray", "no frames"));
        }
        if index >= frames.len() {
            return Err(WidgetError::invalid(
                "FrameArray",
                format!("start index {index} out of {} frames", frames.len()),
            ));
        }
        tracing::debug!(frames = frames.len(), delay, "frame array created");
        Ok(Self::from_shared(Arc::new(frames), delay, index))
    }

    fn from_shared(frames: Arc<Vec<Surface>>, delay: usize, index: usize) -> Self {
        Self {
            frames,
            delay,
            counter: 0,
            index,
            times: -1,
            paused: false,
        }
    }

    /// Loads every regular file in `dir` whose name ends with `suffix`, in
    /// file name order.
    ///
    /// Files the loader rejects are skipped with a warning.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the directory cannot be listed,
    /// [`WidgetError::ExhaustedResource`] if no frame could be loaded, or the
    /// errors of [`new`](Self::new).
    pub fn from_dir(
        dir: impl AsRef<Path>,
        suffix: &str,
        delay: usize,
        index: usize,
        loader: &mut dyn SurfaceLoader,
    ) -> UiResult<Self> {
        let dir = dir.as_ref();
        let io_error = |source| ConfigError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(suffix));
            if matches && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut frames = Vec::with_capacity(paths.len());
        for path in &paths {
            match loader.load(path) {
                Ok(surface) => frames.push(surface),
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping frame"),
            }
        }
        if frames.is_empty() {
            return Err(WidgetError::ExhaustedResource {
                source_name: dir.display().to_string(),
            }
            .into());
        }
        Ok(Self::new(frames, delay, index)?)
    }

    /// Another player over the same frames, with fresh playback state.
    #[must_use]
    pub fn shared(&self) -> Self {
        Self::from_shared(Arc::clone(&self.frames), self.delay, self.index)
    }

    /// Another player over copies of the frames, with fresh playback state.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self::from_shared(Arc::new(self.frames.as_ref().clone()), self.delay, self.index)
    }

    /// Ticks the counter and reports whether this tick advances the
    /// animation.
    ///
    /// The first tick advances, then every `delay`-th. With a bounded play
    /// count, exactly that many ticks advance; afterwards none do.
    pub fn next(&mut self) -> bool {
        let advance = self.counter % self.delay == 0;
        self.counter = self.counter.wrapping_add(1);
        if !advance {
            return false;
        }
        match self.times {
            0 => false,
            t if t < 0 => true,
            _ => {
                self.times -= 1;
                true
            }
        }
    }

    /// Draws the current frame at `pos`, advancing first unless paused.
    ///
    /// Returns whether the animation advanced.
    pub fn copy_to(&mut self, target: &mut dyn RenderTarget, pos: Point) -> bool {
        let advanced = !self.paused && self.next();
        if advanced {
            self.index = (self.index + 1) % self.frames.len();
        }
        self.frames[self.index].draw(target, pos);
        advanced
    }

    /// Limits playback to `times` more advances; negative plays forever.
    pub fn set_times(&mut self, times: i64) {
        self.times = times;
    }

    /// Stops advancing. The current frame keeps being drawn.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes advancing.
    pub fn unpause(&mut self) {
        self.paused = false;
    }

    /// Returns true while paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Index of the frame drawn last.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; construction rejects empty frame lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns true if `other` plays the same frames.
    #[must_use]
    pub fn shares_frames(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.frames, &other.frames)
    }
}

impl CopyTo for FrameArray {
    fn copy_to(&mut self, target: &mut dyn RenderTarget, pos: Point) {
        let _ = FrameArray::copy_to(self, target, pos);
    }
}
