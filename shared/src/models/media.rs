//! Images, FAQs and other free-form listing content

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validation::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_required_text};

/// Listing images
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub hero: Option<String>,
    /// Promo / gallery images
    #[serde(default, alias = "promo")]
    pub gallery: Vec<String>,
}

impl Images {
    pub fn validate(&self) -> ValidationResult {
        if let Some(hero) = &self.hero {
            validate_required_text(hero, "images.hero", MAX_URL_LEN)?;
        }
        for url in &self.gallery {
            validate_required_text(url, "images.gallery", MAX_URL_LEN)?;
        }
        Ok(())
    }

    /// Hero image, falling back to the first gallery image
    pub fn cover(&self) -> Option<&str> {
        self.hero
            .as_deref()
            .or_else(|| self.gallery.first().map(String::as_str))
    }
}

/// Question/answer pair shown on listing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn validate(&self) -> ValidationResult {
        validate_required_text(&self.question, "faqs.question", MAX_NAME_LEN)?;
        validate_required_text(&self.answer, "faqs.answer", MAX_DESCRIPTION_LEN)
    }
}

/// Result of `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    #[serde(default)]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_cover_falls_back_to_gallery() {
        let images = Images {
            hero: None,
            gallery: vec!["a.jpg".into(), "b.jpg".into()],
        };
        assert_eq!(images.cover(), Some("a.jpg"));
        assert_eq!(Images::default().cover(), None);
    }

    #[test]
    fn test_images_accepts_promo_alias() {
        let images: Images = serde_json::from_str(r#"{"hero":"h.jpg","promo":["p.jpg"]}"#).unwrap();
        assert_eq!(images.gallery, vec!["p.jpg".to_string()]);
    }

    #[test]
    fn test_faq_validate() {
        let faq = Faq {
            question: "Is parking available?".into(),
            answer: String::new(),
        };
        assert_eq!(faq.validate().unwrap_err().field(), "faqs.answer");
    }
}
