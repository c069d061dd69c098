use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    /// Environment-facing camera, preferred for scanning.
    Rear,
    Front,
}

/// Capture parameters handed to the scanner adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub frames_per_second: u32,
    /// Side of the square central detection region, in logical units.
    pub detection_box: u32,
    pub aspect_ratio: f32,
    pub facing: CameraFacing,
}

impl ScanConfig {
    /// Time between two sampled frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.frames_per_second.max(1)))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 10,
            detection_box: 250,
            aspect_ratio: 1.0,
            facing: CameraFacing::Rear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_samples_ten_frames_per_second() {
        let config = ScanConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(100));
        assert_eq!(config.detection_box, 250);
        assert_eq!(config.facing, CameraFacing::Rear);
    }

    #[test]
    fn zero_rate_does_not_divide_by_zero() {
        let config = ScanConfig {
            frames_per_second: 0,
            ..ScanConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_secs(1));
    }
}
