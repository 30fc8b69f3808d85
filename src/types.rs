use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Mp4,
    Mp3,
    Webm,
}

impl Default for MediaFormat {
    fn default() -> Self {
        MediaFormat::Mp4
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "360p")]
    P360,
}

impl Default for Quality {
    fn default() -> Self {
        Quality::P720
    }
}

/// Fixed catalogs backing the selectors; there is no capability probing.
pub const FORMATS: [MediaFormat; 3] = [MediaFormat::Mp4, MediaFormat::Mp3, MediaFormat::Webm];
pub const QUALITIES: [Quality; 4] = [Quality::P1080, Quality::P720, Quality::P480, Quality::P360];

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Pending,
    Downloading,
    Completed,
    Paused,
    /// Modelled but never produced by the simulation; the list still knows
    /// how to render it.
    Error,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DownloadRecord {
    pub id: u64,
    /// The submitted input, verbatim.
    pub url: String,
    /// Display label derived from the source hostname.
    pub title: String,
    pub format: MediaFormat,
    pub quality: Quality,
    /// Percentage in [0, 100]; only advances while `Downloading`.
    pub progress: f32,
    pub status: DownloadStatus,
}

/// What the form hands over on submit.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub format: MediaFormat,
    pub quality: Quality,
}

pub fn format_str(f: &MediaFormat) -> &'static str {
    match f {
        MediaFormat::Mp4 => "mp4",
        MediaFormat::Mp3 => "mp3",
        MediaFormat::Webm => "webm",
    }
}

pub fn format_label(f: &MediaFormat) -> &'static str {
    match f {
        MediaFormat::Mp4 => "MP4 Video",
        MediaFormat::Mp3 => "MP3 Audio",
        MediaFormat::Webm => "WebM Video",
    }
}

pub fn format_from_str(value: &str) -> Option<MediaFormat> {
    match value {
        "mp4" => Some(MediaFormat::Mp4),
        "mp3" => Some(MediaFormat::Mp3),
        "webm" => Some(MediaFormat::Webm),
        _ => None,
    }
}

pub fn quality_str(q: &Quality) -> &'static str {
    match q {
        Quality::P1080 => "1080p",
        Quality::P720 => "720p",
        Quality::P480 => "480p",
        Quality::P360 => "360p",
    }
}

pub fn quality_label(q: &Quality) -> &'static str {
    match q {
        Quality::P1080 => "1080p Full HD",
        Quality::P720 => "720p HD",
        Quality::P480 => "480p SD",
        Quality::P360 => "360p",
    }
}

pub fn quality_from_str(value: &str) -> Option<Quality> {
    match value {
        "1080p" => Some(Quality::P1080),
        "720p" => Some(Quality::P720),
        "480p" => Some(Quality::P480),
        "360p" => Some(Quality::P360),
        _ => None,
    }
}

pub fn status_str(s: &DownloadStatus) -> &'static str {
    match s {
        DownloadStatus::Pending => "pending",
        DownloadStatus::Downloading => "downloading",
        DownloadStatus::Completed => "completed",
        DownloadStatus::Paused => "paused",
        DownloadStatus::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_values_round_trip() {
        for f in FORMATS {
            assert_eq!(format_from_str(format_str(&f)), Some(f));
        }
        for q in QUALITIES {
            assert_eq!(quality_from_str(quality_str(&q)), Some(q));
        }
        assert_eq!(format_from_str("flac"), None);
        assert_eq!(quality_from_str("8k"), None);
    }

    #[test]
    fn defaults_match_the_initial_selections() {
        assert_eq!(MediaFormat::default(), MediaFormat::Mp4);
        assert_eq!(Quality::default(), Quality::P720);
    }

    #[test]
    fn labels_carry_the_display_copy() {
        assert_eq!(format_label(&MediaFormat::Mp3), "MP3 Audio");
        assert_eq!(quality_label(&Quality::P1080), "1080p Full HD");
        assert_eq!(status_str(&DownloadStatus::Downloading), "downloading");
    }

    #[test]
    fn wire_names_match_the_ui_values() {
        assert_eq!(serde_json::to_string(&Quality::P1080).unwrap(), "\"1080p\"");
        assert_eq!(
            serde_json::to_string(&DownloadStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
