//! Generator page: text-to-image, text-to-video and image-to-video forms
//! backed by the injected [`MediaGenerator`].

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::generation::{
    validate_prompt, AssetKind, GeneratedAsset, ImageStyle, MediaGenerator, VideoDuration,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    TextToImage,
    TextToVideo,
    ImageToVideo,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::TextToImage, Tab::TextToVideo, Tab::ImageToVideo];

    fn slug(self) -> &'static str {
        match self {
            Tab::TextToImage => "image",
            Tab::TextToVideo => "video",
            Tab::ImageToVideo => "animate",
        }
    }

    fn from_slug(slug: &str) -> Tab {
        match slug {
            "video" => Tab::TextToVideo,
            "animate" => Tab::ImageToVideo,
            _ => Tab::TextToImage,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::TextToImage => "Text to Image",
            Tab::TextToVideo => "Text to Video",
            Tab::ImageToVideo => "Image to Video",
        }
    }
}

#[component]
pub fn Generator(tab: String) -> Element {
    let generator = use_context::<Rc<dyn MediaGenerator>>();
    let toasts = use_toast();
    let active = Tab::from_slug(&tab);

    let mut prompt = use_signal(String::new);
    let mut style = use_signal(ImageStyle::default);
    let mut duration = use_signal(VideoDuration::default);
    let mut selected_image = use_signal(|| None::<String>);
    let mut prompt_error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut result = use_signal(|| None::<GeneratedAsset>);

    let generate = {
        let generator = generator.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            if busy() {
                return;
            }

            // The animate form keys off the uploaded image; its prompt is an
            // optional hint. The text forms require a real prompt.
            match active {
                Tab::TextToImage | Tab::TextToVideo => {
                    if let Err(err) = validate_prompt(&prompt()) {
                        prompt_error.set(Some(err.to_string()));
                        return;
                    }
                }
                Tab::ImageToVideo => {
                    if selected_image().is_none() {
                        toasts.error("Please select an image first");
                        return;
                    }
                }
            }
            prompt_error.set(None);

            busy.set(true);
            result.set(None);
            let generator = generator.clone();
            spawn(async move {
                let outcome = match active {
                    Tab::TextToImage => generator.generate_image(&prompt(), style()).await,
                    Tab::TextToVideo | Tab::ImageToVideo => {
                        generator.generate_video(&prompt(), duration()).await
                    }
                };
                match outcome {
                    Ok(asset) => {
                        toasts.success("Generation complete!");
                        result.set(Some(asset));
                    }
                    Err(err) => toasts.error(err.to_string()),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        Layout {
            title: "Generator".to_string(),
            nav_active: "generator".to_string(),

            h1 { "AI Generator" }
            p { class: "text-muted", "Conjure new art and clips in the style of the show." }

            div { class: "tab-row", role: "tablist",
                for t in Tab::ALL {
                    Link {
                        class: if t == active { "tab tab-active" } else { "tab" },
                        to: Route::Generator { tab: t.slug().to_string() },
                        {t.label()}
                    }
                }
            }

            form { class: "generator-form", onsubmit: generate,
                label { r#for: "prompt",
                    if active == Tab::ImageToVideo { "Motion hint (optional)" } else { "Prompt" }
                }
                textarea {
                    id: "prompt",
                    rows: 3,
                    placeholder: "A shadow phoenix rising over a burning village...",
                    value: "{prompt}",
                    oninput: move |evt| {
                        prompt.set(evt.value());
                        prompt_error.set(None);
                    },
                }
                if let Some(err) = prompt_error() {
                    small { class: "field-error", "{err}" }
                }

                if active == Tab::TextToImage {
                    fieldset { class: "option-row",
                        legend { "Style" }
                        for s in ImageStyle::ALL {
                            button {
                                r#type: "button",
                                class: if style() == s { "chip chip-active" } else { "chip" },
                                onclick: move |_| style.set(s),
                                {s.label()}
                            }
                        }
                    }
                } else {
                    fieldset { class: "option-row",
                        legend { "Duration" }
                        for d in VideoDuration::ALL {
                            button {
                                r#type: "button",
                                class: if duration() == d { "chip chip-active" } else { "chip" },
                                onclick: move |_| duration.set(d),
                                {d.label()}
                            }
                        }
                    }
                }

                if active == Tab::ImageToVideo {
                    label { r#for: "source-image", "Source image" }
                    input {
                        id: "source-image",
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt| {
                            let name = evt.files().first().map(|f| f.name());
                            selected_image.set(name);
                        },
                    }
                    if let Some(name) = selected_image() {
                        small { class: "text-muted", "Selected: {name}" }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Generating..." } else { "Generate" }
                }
            }

            if busy() {
                div { class: "generator-progress", aria_busy: "true",
                    p { "Summoning shadows, hold on..." }
                }
            }

            if let Some(asset) = result() {
                section { class: "generator-result",
                    h2 { "Result" }
                    match asset.kind {
                        AssetKind::Image => rsx! {
                            img { class: "generated-asset", src: "{asset.url}", alt: "Generated image" }
                        },
                        AssetKind::Video => rsx! {
                            video { class: "generated-asset", controls: true, src: "{asset.url}" }
                        },
                    }
                    a { class: "btn btn-ghost", href: "{asset.url}", download: "", "Download" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tab_slugs_fall_back_to_text_to_image() {
        assert_eq!(Tab::from_slug(""), Tab::TextToImage);
        assert_eq!(Tab::from_slug("nonsense"), Tab::TextToImage);
    }

    #[test]
    fn tab_slugs_round_trip() {
        for t in Tab::ALL {
            assert_eq!(Tab::from_slug(t.slug()), t);
        }
    }
}
