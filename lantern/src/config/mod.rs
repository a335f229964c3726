mod errors;
mod storage;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub(crate) use self::storage::{
    ConfigLoad, ConfigLoadStatus, load_config, save_config,
};

const DEFAULT_DISPLAY_MS: u64 = 7000;
const DEFAULT_TRANSITION_MS: u64 = 1000;
const DEFAULT_FRAME_MS: u64 = 16;
const DEFAULT_AUTO_REFRESH_SECS: u64 = 60;

/// Effective launcher shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LauncherConfig {
    /// Root directory holding `instances/`.
    pub(crate) base_dir: PathBuf,
    /// Directory holding bundled `icons/` and `fonts/`.
    pub(crate) assets_dir: PathBuf,
    pub(crate) carousel: CarouselTimings,
    pub(crate) auto_refresh_secs: u64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            assets_dir: PathBuf::from("assets"),
            carousel: CarouselTimings::default(),
            auto_refresh_secs: DEFAULT_AUTO_REFRESH_SECS,
        }
    }
}

impl LauncherConfig {
    pub(crate) fn instances_dir(&self) -> PathBuf {
        self.base_dir.join("instances")
    }

    pub(crate) fn icons_dir(&self) -> PathBuf {
        self.assets_dir.join("icons")
    }

    pub(crate) fn fonts_dir(&self) -> PathBuf {
        self.assets_dir.join("fonts")
    }

    /// Interval of the silent instance list refresh, never zero.
    pub(crate) fn auto_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.auto_refresh_secs.max(1))
    }
}

/// Carousel timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CarouselTimings {
    pub(crate) display_ms: u64,
    pub(crate) transition_ms: u64,
    pub(crate) frame_ms: u64,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_DISPLAY_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl CarouselTimings {
    pub(crate) fn display_interval(&self) -> Duration {
        Duration::from_millis(self.display_ms.max(1))
    }

    pub(crate) fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Alpha added on each crossfade frame.
    pub(crate) fn alpha_step(&self) -> f32 {
        let transition = self.transition_ms.max(1) as f32;
        (self.frame_ms.max(1) as f32 / transition).min(1.0)
    }
}

fn default_base_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".lantern");
    }
    std::env::temp_dir().join("lantern")
}

#[cfg(test)]
mod tests {
    use super::{CarouselTimings, LauncherConfig};

    #[test]
    fn given_default_timings_when_computing_alpha_step_then_step_is_frame_over_duration()
     {
        let timings = CarouselTimings::default();

        assert!((timings.alpha_step() - 0.016).abs() < f32::EPSILON);
    }

    #[test]
    fn given_zero_timings_when_computing_intervals_then_values_stay_positive() {
        let timings = CarouselTimings {
            display_ms: 0,
            transition_ms: 0,
            frame_ms: 0,
        };

        assert_eq!(timings.alpha_step(), 1.0);
        assert!(!timings.display_interval().is_zero());
        assert!(!timings.frame_interval().is_zero());
    }

    #[test]
    fn given_config_when_resolving_directories_then_they_are_nested() {
        let config = LauncherConfig {
            base_dir: "/data/lantern".into(),
            assets_dir: "/opt/lantern/assets".into(),
            ..LauncherConfig::default()
        };

        assert_eq!(
            config.instances_dir(),
            std::path::PathBuf::from("/data/lantern/instances")
        );
        assert_eq!(
            config.icons_dir(),
            std::path::PathBuf::from("/opt/lantern/assets/icons")
        );
    }
}
