//! One on-screen segment of the rendered video.
use serde::{Deserialize, Serialize};

/// A chunk bound to its frame duration and background clip.
///
/// Serialized with camelCase keys, the shape the render request expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSection {
    pub text: String,
    pub duration_in_frames: u32,
    /// Opaque path or URL of the background clip.
    pub background_asset_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_render_keys() {
        let section = VideoSection {
            text: "Hello".into(),
            duration_in_frames: 27,
            background_asset_ref: "bg/0.mp4".into(),
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["durationInFrames"], 27);
        assert_eq!(json["backgroundAssetRef"], "bg/0.mp4");
    }
}
