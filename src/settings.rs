//! Global widget configuration.
//!
//! Settings come from the CMS configuration document (YAML), one
//! optional section per widget, every field optional with a stated
//! default. The loaded struct is immutable for the page-render
//! lifecycle and passed by shared reference into render and decorate
//! functions; there is no process-wide mutable state.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{UiTagError, UiTagResult};
use crate::ratio::AspectRatio;

/// Configuration for all widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub blurb: BlurbSettings,
    pub card: CardSettings,
    pub carousel: CarouselSettings,
}

impl Settings {
    /// Load settings from the CMS configuration document.
    ///
    /// Missing sections and fields take their defaults; CSS class
    /// overrides are checked against the class token pattern.
    pub fn from_yaml(yaml: &str) -> UiTagResult<Self> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> UiTagResult<()> {
        validate_class_list("blurb.css_class.title", &self.blurb.css_class.title)?;
        validate_class_list("blurb.css_class.text", &self.blurb.css_class.text)?;
        validate_class_list("blurb.css_class.more_link", &self.blurb.css_class.more_link)?;
        validate_class_list("card.css_class.position", &self.card.css_class.position)?;
        validate_class_list("card.css_class.title", &self.card.css_class.title)?;
        validate_class_list("card.css_class.text", &self.card.css_class.text)?;
        validate_class_list("carousel.css_class.text", &self.carousel.css_class.text)?;
        Ok(())
    }
}

/// `[ui.blurb]` settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurbSettings {
    pub enabled: bool,
    /// Pull Bootstrap from the CDN instead of assuming the theme loads it.
    pub load_bootstrap: bool,
    pub css_class: BlurbClasses,
}

/// Extra CSS classes appended to the blurb's generated elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurbClasses {
    pub title: String,
    pub text: String,
    pub more_link: String,
}

/// `[ui.card]` settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    pub enabled: bool,
    /// Pull Bootstrap from the CDN instead of assuming the theme loads it.
    pub load_bootstrap: bool,
    pub css_class: CardClasses,
}

/// Extra CSS classes for the card's generated elements. `position`
/// carries the grid column classes and so defaults non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardClasses {
    pub position: String,
    pub title: String,
    pub text: String,
}

impl Default for CardClasses {
    fn default() -> Self {
        Self {
            position: "col-md-4 col-sm-6 col-xs-6".to_string(),
            title: String::new(),
            text: String::new(),
        }
    }
}

/// `[ui.carousel]` settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub enabled: bool,
    /// Pull jQuery from `jquery_url` instead of assuming the theme loads it.
    pub load_jquery: bool,
    pub jquery_url: String,
    /// Base path the Slick assets are served from (CDN or local).
    pub slick_path: String,
    /// Page-level default ratio, overridable per tag. Unparsable values
    /// fall back to the built-in default at load time.
    #[serde(with = "ratio_string")]
    pub ratio: AspectRatio,
    pub css_class: CarouselClasses,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            load_jquery: false,
            jquery_url: "//cdn.jsdelivr.net/jquery/3.2.1/jquery.min.js".to_string(),
            slick_path: "//cdn.jsdelivr.net/jquery.slick/1.6.0".to_string(),
            ratio: AspectRatio::default(),
            css_class: CarouselClasses::default(),
        }
    }
}

/// Extra CSS classes for the carousel's generated elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselClasses {
    pub text: String,
}

mod ratio_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ratio::AspectRatio;

    pub fn serialize<S: Serializer>(ratio: &AspectRatio, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ratio.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AspectRatio, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AspectRatio::parse_or_default(&raw, AspectRatio::default()))
    }
}

fn validate_class_list(key: &str, value: &str) -> UiTagResult<()> {
    static CLASS_LIST_REGEX: OnceLock<Regex> = OnceLock::new();
    let pattern = CLASS_LIST_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_\- ]*$").unwrap());
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(UiTagError::InvalidCssClass {
            key: key.to_string(),
            value: value.to_string(),
            reason: "holds characters outside the class token set".to_string(),
        })
    }
}
