use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use raylib::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use crate::panel::DetailPanel;
use crate::quiz::Quiz;
use crate::texture_loader::{load_texture, scan_image_paths};

pub const MANIFEST_NAME: &str = "deck.toml";

/// Optional `deck.toml` sitting in the deck directory. Without it the
/// deck is just the directory's images in file-name order.
#[derive(Debug, Default, Deserialize)]
pub struct DeckManifest {
    pub title: Option<String>,
    #[serde(rename = "slide", default)]
    pub slides: Vec<SlideManifest>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlideManifest {
    /// Backdrop file name. Omitted: the entry is matched to the image
    /// at the same position, or is text-only when there is none.
    pub image: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub details: Option<DetailPanel>,
    pub quiz: Option<Quiz>,
}

/// One manifest entry resolved against the scanned image files.
#[derive(Debug)]
pub struct SlidePlan {
    pub manifest: SlideManifest,
    pub image: Option<PathBuf>,
}

pub struct Slide {
    pub title: String,
    pub body: Option<String>,
    pub details: Option<DetailPanel>,
    pub quiz: Option<Quiz>,
    pub texture: Option<Texture2D>,
    pub active: bool,
}

pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

/// Pair manifest entries with image files. Entries naming an `image`
/// take that file; unnamed entries take the file at their own position;
/// leftover images become bare slides appended in order.
pub fn plan_slides(entries: Vec<SlideManifest>, images: &[PathBuf]) -> Vec<SlidePlan> {
    let mut used = vec![false; images.len()];
    let mut plans = Vec::new();

    for (position, manifest) in entries.into_iter().enumerate() {
        let image = match &manifest.image {
            Some(name) => {
                let found = images
                    .iter()
                    .position(|p| p.file_name().and_then(|n| n.to_str()) == Some(name.as_str()));
                match found {
                    Some(i) => {
                        used[i] = true;
                        Some(images[i].clone())
                    }
                    None => {
                        warn!("manifest names missing image {:?}; slide will have no backdrop", name);
                        None
                    }
                }
            }
            None => {
                if position < images.len() && !used[position] {
                    used[position] = true;
                    Some(images[position].clone())
                } else {
                    None // text-only slide
                }
            }
        };
        plans.push(SlidePlan { manifest, image });
    }

    for (i, path) in images.iter().enumerate() {
        if !used[i] {
            plans.push(SlidePlan {
                manifest: SlideManifest::default(),
                image: Some(path.clone()),
            });
        }
    }

    plans
}

fn fallback_title(plan: &SlidePlan, position: usize) -> String {
    plan.image
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Slide {}", position + 1))
}

impl Deck {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Deck> {
        let manifest_path = dir.join(MANIFEST_NAME);
        let manifest = if manifest_path.is_file() {
            let text = fs::read_to_string(&manifest_path)
                .with_context(|| format!("failed to read {}", manifest_path.display()))?;
            toml::from_str::<DeckManifest>(&text)
                .with_context(|| format!("failed to parse {}", manifest_path.display()))?
        } else {
            DeckManifest::default()
        };

        let images = scan_image_paths(dir)?;
        let plans = plan_slides(manifest.slides, &images);
        if plans.is_empty() {
            bail!("deck directory {} has no images and no manifest slides", dir.display());
        }

        let mut slides = Vec::with_capacity(plans.len());
        for (position, plan) in plans.into_iter().enumerate() {
            let texture = match &plan.image {
                Some(path) => match load_texture(rl, thread, path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        // A broken image leaves the slide as text-only
                        warn!("{:#}", e);
                        None
                    }
                },
                None => None,
            };
            let title = plan
                .manifest
                .title
                .clone()
                .unwrap_or_else(|| fallback_title(&plan, position));
            slides.push(Slide {
                title,
                body: plan.manifest.body,
                details: plan.manifest.details,
                quiz: plan.manifest.quiz,
                texture,
                active: false,
            });
        }

        let title = manifest.title.unwrap_or_else(|| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Presentation")
                .to_string()
        });
        info!("loaded deck {:?} with {} slides", title, slides.len());
        Ok(Deck { title, slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Make `index` the single active slide. The menu items mirror
    /// these flags, so this is the one place activation changes.
    pub fn activate(&mut self, index: usize) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.active = i == index;
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.active)
    }

    pub fn active_slide_mut(&mut self) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_slide(title: &str) -> Slide {
        Slide {
            title: title.to_string(),
            body: None,
            details: None,
            quiz: None,
            texture: None,
            active: false,
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn activate_leaves_exactly_one_active() {
        let mut deck = Deck {
            title: "t".to_string(),
            slides: vec![text_slide("a"), text_slide("b"), text_slide("c")],
        };
        for i in 0..deck.len() {
            deck.activate(i);
            let active: Vec<usize> = deck
                .slides
                .iter()
                .enumerate()
                .filter(|(_, s)| s.active)
                .map(|(j, _)| j)
                .collect();
            assert_eq!(active, vec![i]);
        }
    }

    #[test]
    fn unnamed_entries_match_images_by_position() {
        let entries = vec![
            SlideManifest { title: Some("one".into()), ..Default::default() },
            SlideManifest { title: Some("two".into()), ..Default::default() },
        ];
        let plans = plan_slides(entries, &paths(&["01.png", "02.png"]));
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].image.as_deref(), Some(Path::new("01.png")));
        assert_eq!(plans[1].image.as_deref(), Some(Path::new("02.png")));
    }

    #[test]
    fn named_image_overrides_position() {
        let entries = vec![SlideManifest {
            image: Some("02.png".into()),
            ..Default::default()
        }];
        let plans = plan_slides(entries, &paths(&["01.png", "02.png"]));
        assert_eq!(plans[0].image.as_deref(), Some(Path::new("02.png")));
        // 01.png was never claimed, so it trails as a bare slide
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].image.as_deref(), Some(Path::new("01.png")));
    }

    #[test]
    fn entries_past_the_image_count_are_text_only() {
        let entries = vec![
            SlideManifest::default(),
            SlideManifest { title: Some("closing".into()), ..Default::default() },
        ];
        let plans = plan_slides(entries, &paths(&["01.png"]));
        assert_eq!(plans.len(), 2);
        assert!(plans[0].image.is_some());
        assert!(plans[1].image.is_none());
    }

    #[test]
    fn manifest_parses_widgets() {
        let manifest: DeckManifest = toml::from_str(
            r#"
            title = "Market outlook"

            [[slide]]
            title = "Growth"
            body = "Two lines\nof body text"

            [slide.details]
            summary = "detailed analysis"
            text = "The long version."

            [slide.quiz]
            question = "What drives long-run growth?"

            [[slide.quiz.option]]
            label = "Economic development"
            correct = true

            [[slide.quiz.option]]
            label = "Seasonal demand"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.title.as_deref(), Some("Market outlook"));
        let slide = &manifest.slides[0];
        assert!(slide.details.is_some());
        let quiz = slide.quiz.as_ref().unwrap();
        assert!(quiz.options[0].correct);
        assert!(!quiz.options[1].correct);
    }
}
