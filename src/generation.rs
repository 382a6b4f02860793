//! Mock media-generation service behind the generator UI.
//!
//! Stands in for a real image/video generation API: it waits a fixed
//! simulated delay and returns a canned asset. The busy-state handling in
//! the UI is the contract; the delay itself is not.

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

/// Minimum prompt length for the text-to-image and text-to-video forms.
pub const MIN_PROMPT_LEN: usize = 10;

const DEMO_CHARACTERS: &[&str] = &[
    "/anime-character-1.jpg",
    "/anime-character-2.jpg",
    "/anime-character-3.jpg",
];

const DEMO_VIDEO: &str = "/anime-video-sample.mp4";

/// Visual style for text-to-image generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStyle {
    #[default]
    Anime,
    Manga,
    Chibi,
    Mecha,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 4] = [
        ImageStyle::Anime,
        ImageStyle::Manga,
        ImageStyle::Chibi,
        ImageStyle::Mecha,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImageStyle::Anime => "Standard Anime",
            ImageStyle::Manga => "Manga Style",
            ImageStyle::Chibi => "Chibi",
            ImageStyle::Mecha => "Mecha",
        }
    }
}

/// Requested clip length for video generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoDuration {
    #[default]
    Short,
    Medium,
    Long,
}

impl VideoDuration {
    pub const ALL: [VideoDuration; 3] = [
        VideoDuration::Short,
        VideoDuration::Medium,
        VideoDuration::Long,
    ];

    pub fn seconds(self) -> u32 {
        match self {
            VideoDuration::Short => 5,
            VideoDuration::Medium => 10,
            VideoDuration::Long => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoDuration::Short => "Short (5s)",
            VideoDuration::Medium => "Medium (10s)",
            VideoDuration::Long => "Long (15s)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
}

/// A generated media asset; the URL is an opaque string.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("your prompt must be at least {MIN_PROMPT_LEN} characters")]
    PromptTooShort,
    #[error("please select an image first")]
    NoImageSelected,
    #[error("generation failed: {0}")]
    Failed(String),
}

/// Pre-submit prompt check for the text-driven generator forms.
pub fn validate_prompt(prompt: &str) -> Result<(), GenerateError> {
    if prompt.trim().len() < MIN_PROMPT_LEN {
        Err(GenerateError::PromptTooShort)
    } else {
        Ok(())
    }
}

/// External content-generation collaborator. The portal only ever talks to
/// this interface; the mock below is the sole implementation.
#[async_trait(?Send)]
pub trait MediaGenerator {
    async fn generate_image(
        &self,
        prompt: &str,
        style: ImageStyle,
    ) -> Result<GeneratedAsset, GenerateError>;

    async fn generate_video(
        &self,
        prompt: &str,
        duration: VideoDuration,
    ) -> Result<GeneratedAsset, GenerateError>;
}

/// Fixed-delay mock implementation returning canned demo assets.
pub struct MockGenerator {
    image_delay_ms: u32,
    video_delay_ms: u32,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            image_delay_ms: 2000,
            video_delay_ms: 3000,
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl MediaGenerator for MockGenerator {
    async fn generate_image(
        &self,
        prompt: &str,
        style: ImageStyle,
    ) -> Result<GeneratedAsset, GenerateError> {
        tracing::info!("generating image, style {style:?}, prompt {prompt:?}");
        simulate_delay(self.image_delay_ms).await;
        let idx = rand::thread_rng().gen_range(0..DEMO_CHARACTERS.len());
        Ok(GeneratedAsset {
            kind: AssetKind::Image,
            url: DEMO_CHARACTERS[idx].to_string(),
        })
    }

    async fn generate_video(
        &self,
        prompt: &str,
        duration: VideoDuration,
    ) -> Result<GeneratedAsset, GenerateError> {
        tracing::info!(
            "generating {}s video, prompt {prompt:?}",
            duration.seconds()
        );
        simulate_delay(self.video_delay_ms).await;
        Ok(GeneratedAsset {
            kind: AssetKind::Video,
            url: DEMO_VIDEO.to_string(),
        })
    }
}

async fn simulate_delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn prompt_validation_boundary() {
        assert_eq!(validate_prompt("too short"), Err(GenerateError::PromptTooShort));
        assert_eq!(validate_prompt("   padded   "), Err(GenerateError::PromptTooShort));
        assert!(validate_prompt("a ninja in neon Tokyo").is_ok());
        assert!(validate_prompt("exactly10!").is_ok());
    }

    #[test]
    fn duration_seconds() {
        assert_eq!(VideoDuration::Short.seconds(), 5);
        assert_eq!(VideoDuration::Medium.seconds(), 10);
        assert_eq!(VideoDuration::Long.seconds(), 15);
    }

    #[test]
    fn mock_image_comes_from_demo_pool() {
        let generator = MockGenerator::new();
        let asset = block_on(
            generator.generate_image("a swordsman under a red moon", ImageStyle::Manga),
        )
        .unwrap();
        assert_eq!(asset.kind, AssetKind::Image);
        assert!(DEMO_CHARACTERS.contains(&asset.url.as_str()));
    }

    #[test]
    fn mock_video_is_the_sample_clip() {
        let generator = MockGenerator::new();
        let asset = block_on(
            generator.generate_video("city chase at night", VideoDuration::Long),
        )
        .unwrap();
        assert_eq!(asset.kind, AssetKind::Video);
        assert_eq!(asset.url, DEMO_VIDEO);
    }
}
