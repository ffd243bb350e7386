//! Step-wise walk of an actor along a found [Path], painting the tiles it leaves behind.
//!
//! The driver owns no clock. [Playback::step] performs one step; [Playback::advance] performs
//! every step due after a given amount of elapsed time, with step `i` due at
//! `i * step_interval`. Timers and drawing belong to the caller.
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::grid_map::GridMap;
use crate::interpreter::{classify, SegmentKind};
use crate::path::Path;
use crate::DEFAULT_STEP_MILLIS;
use log::debug;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Time between two consecutive steps.
    pub step_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(DEFAULT_STEP_MILLIS),
        }
    }
}

/// One performed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Index into the path of the tile the actor moved onto.
    pub index: usize,
    /// Where to draw the actor; `None` once it has reached the goal.
    pub position: Option<Coordinate>,
    /// The tile left behind and what it was painted as, if any.
    pub painted: Option<(Coordinate, SegmentKind)>,
}

#[derive(Clone, Debug)]
pub struct Playback {
    path: Path,
    config: PlaybackConfig,
    next: usize,
    cancelled: bool,
    touched: Vec<Coordinate>,
}

impl Playback {
    pub fn new(path: Path, config: PlaybackConfig) -> Playback {
        Playback {
            path,
            config,
            next: 1,
            cancelled: false,
            touched: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Tiles painted so far, in path order. Hand them to
    /// [clear_path](crate::interpreter::clear_path) to erase the trail.
    pub fn touched(&self) -> &[Coordinate] {
        &self.touched
    }

    /// Steps performed so far.
    pub fn steps_taken(&self) -> usize {
        self.next - 1
    }

    /// Total number of steps a full playback performs.
    pub fn total_steps(&self) -> usize {
        self.path.moves()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True once every step ran or playback was cancelled.
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.next >= self.path.len()
    }

    /// Stops playback. Tiles painted so far stay painted.
    pub fn cancel(&mut self) {
        if !self.is_finished() {
            debug!(
                "Playback cancelled after {} of {} steps",
                self.steps_taken(),
                self.total_steps()
            );
        }
        self.cancelled = true;
    }

    /// Elapsed time at which step `index` is due, saturating at [Duration::MAX].
    pub fn due_at(&self, index: usize) -> Duration {
        u32::try_from(index)
            .ok()
            .and_then(|index| self.config.step_interval.checked_mul(index))
            .unwrap_or(Duration::MAX)
    }

    /// Elapsed time at which the final step is due.
    pub fn duration(&self) -> Duration {
        self.due_at(self.total_steps())
    }

    /// Performs the next step, or returns `None` if playback is finished.
    pub fn step(&mut self, map: &mut GridMap) -> Result<Option<Step>> {
        if self.is_finished() {
            return Ok(None);
        }
        let index = self.next;
        let steps = self.path.as_slice();
        let current = steps[index];
        let painted = if index > 1 {
            let (before, previous) = (steps[index - 2], steps[index - 1]);
            let kind = classify(before, previous, Some(current));
            map.set_terrain(previous, kind.into())?;
            self.touched.push(previous);
            Some((previous, kind))
        } else {
            None
        };
        let last = index == steps.len() - 1;
        self.next += 1;
        if last {
            debug!("Playback reached {}", current);
        }
        Ok(Some(Step {
            index,
            position: (!last).then_some(current),
            painted,
        }))
    }

    /// Performs every step due by `elapsed` since playback began.
    pub fn advance(&mut self, map: &mut GridMap, elapsed: Duration) -> Result<Vec<Step>> {
        let mut performed = Vec::new();
        while !self.is_finished() && self.due_at(self.next) <= elapsed {
            match self.step(map)? {
                Some(step) => performed.push(step),
                None => break,
            }
        }
        Ok(performed)
    }

    /// Runs the remaining steps regardless of time.
    pub fn finish(&mut self, map: &mut GridMap) -> Result<Vec<Step>> {
        let mut performed = Vec::new();
        while let Some(step) = self.step(map)? {
            performed.push(step);
        }
        Ok(performed)
    }
}
