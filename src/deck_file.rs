use std::collections::HashSet;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use tracing::info;

use crate::error::DeckError;
use crate::slide::{Slide, SlideContent, Stat};

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    slides: Vec<Slide>,
}

/// A loaded deck: window title plus its slides, in presentation order.
#[derive(Debug, Clone)]
pub struct DeckSource {
    pub title: String,
    pub slides: Vec<Slide>,
}

// --- Load a deck description from a JSON file ---
pub fn load_deck(path: &Path) -> Result<DeckSource, DeckError> {
    let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: DeckFile = serde_json::from_str(&text).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = path.parent().unwrap_or(Path::new("."));
    let slides = file
        .slides
        .into_iter()
        .map(|slide| resolve_image_path(slide, base_dir))
        .collect::<Vec<_>>();
    validate(&slides)?;

    let title = file.title.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Pitch deck".to_string())
    });
    info!(path = %path.display(), slides = slides.len(), "loaded deck");
    Ok(DeckSource { title, slides })
}

// Image paths in a deck file are relative to the file itself
fn resolve_image_path(mut slide: Slide, base_dir: &Path) -> Slide {
    if let SlideContent::Image { path, .. } = &mut slide.content {
        if path.is_relative() {
            *path = base_dir.join(&*path);
        }
    }
    slide
}

fn validate(slides: &[Slide]) -> Result<(), DeckError> {
    if slides.is_empty() {
        return Err(DeckError::Empty);
    }
    let mut seen = HashSet::new();
    for slide in slides {
        if !seen.insert(slide.id.as_str()) {
            return Err(DeckError::DuplicateId(slide.id.clone()));
        }
    }
    Ok(())
}

fn stats(items: &[(&str, &str)]) -> SlideContent {
    SlideContent::Stats {
        items: items
            .iter()
            .map(|(label, value)| Stat { label: label.to_string(), value: value.to_string() })
            .collect(),
    }
}

/// The EcoSort hackathon pitch shipped with the binary.
pub fn builtin_deck() -> DeckSource {
    let slides = vec![
        Slide::bullets(
            "title",
            "EcoSort",
            Some("Smart waste sorting for every street corner"),
            &["Hackathon 2024 submission", "Team Green Loop"],
        ),
        Slide::bullets(
            "problem",
            "The problem",
            Some("Most recyclables never get recycled"),
            &[
                "Mixed bins contaminate whole collection loads",
                "Residents are unsure what goes where",
                "Collection trucks run on fixed routes, full or empty",
            ],
        ),
        Slide::bullets(
            "solution",
            "Our solution",
            Some("A sensor kit that retrofits existing public bins"),
            &[
                "Camera + classifier identifies items at drop-off",
                "LED guide tells the user which compartment to use",
                "Fill-level sensors report to the city dashboard",
            ],
        ),
        Slide::bullets(
            "how-it-works",
            "How it works",
            None,
            &[
                "1. Item is held over the lid",
                "2. On-device model classifies it in under 200 ms",
                "3. Matching compartment lights up",
                "4. Fill data is batched and uploaded hourly",
            ],
        ),
        Slide::new(
            "impact",
            "Projected impact",
            stats(&[
                ("Contamination", "-45%"),
                ("Recycling rate", "+38%"),
                ("Collection trips", "-30%"),
                ("CO2 per district", "-120 t/yr"),
            ]),
        ),
        Slide::new(
            "api",
            "Open city API",
            SlideContent::Endpoints {
                base_url: Some("https://api.ecosort.example/v1".to_string()),
                routes: vec![
                    "GET  /bins".to_string(),
                    "GET  /bins/{id}/fill-level".to_string(),
                    "GET  /districts/{id}/stats".to_string(),
                    "POST /pickups/schedule".to_string(),
                ],
            },
        ),
        Slide::bullets(
            "business",
            "Business model",
            Some("Hardware at cost, software as a subscription"),
            &[
                "Per-bin monthly licence for municipalities",
                "Route optimisation add-on for haulers",
                "Anonymised material data for recyclers",
            ],
        ),
        Slide::bullets(
            "roadmap",
            "Roadmap",
            None,
            &[
                "Q1  Pilot with 50 bins in one district",
                "Q2  Dashboard and open API",
                "Q3  Route optimisation",
                "Q4  City-wide rollout",
            ],
        ),
        Slide::bullets(
            "team",
            "The team",
            None,
            &[
                "Hardware & sensors",
                "Machine learning",
                "Backend & API",
                "Design & product",
            ],
        ),
        Slide::bullets(
            "ask",
            "Join us",
            Some("Help us pilot EcoSort in your city"),
            &["hello@ecosort.example", "Thank you!"],
        ),
    ];

    DeckSource {
        title: "EcoSort pitch".to_string(),
        slides,
    }
}
