use serde::{Deserialize, Serialize};

/// Display record of the purchased product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub image: String,
}

impl ProductRef {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            image: image.into(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Full name when present and non-empty, otherwise the short name.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(full) if !full.is_empty() => full,
            _ => &self.name,
        }
    }

    /// `true` when the image is a URL or an absolute path rather than an inline glyph.
    pub fn has_remote_image(&self) -> bool {
        self.image.starts_with("http") || self.image.starts_with('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let product = ProductRef::new("Mouse", "🖱️");
        assert_eq!(product.display_name(), "Mouse");

        let product = product.with_full_name("Wireless Optical Mouse 2.4GHz");
        assert_eq!(product.display_name(), "Wireless Optical Mouse 2.4GHz");

        let blank = ProductRef::new("Mouse", "🖱️").with_full_name("");
        assert_eq!(blank.display_name(), "Mouse");
    }

    #[test]
    fn test_image_kind() {
        assert!(ProductRef::new("a", "https://cdn.example.com/a.png").has_remote_image());
        assert!(ProductRef::new("a", "/assets/a.png").has_remote_image());
        assert!(!ProductRef::new("a", "👟").has_remote_image());
    }
}
