use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerStyle {
    pub background_color: String,
    pub text_color: String,
    pub text_align: String,
    pub font_size: String,
    pub padding: String,
    pub margin: String,
    pub border_radius: String,
    pub is_visible: bool,
    /// `left`, `right`, `center` or `custom` (then `image_x`/`image_y` apply).
    pub image_position: String,
    pub image_x: String,
    pub image_y: String,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            background_color: "#f8d7da".to_string(),
            text_color: "#721c24".to_string(),
            text_align: "center".to_string(),
            font_size: "18px".to_string(),
            padding: "20px".to_string(),
            margin: "20px".to_string(),
            border_radius: "8px".to_string(),
            is_visible: true,
            image_position: String::new(),
            image_x: String::new(),
            image_y: String::new(),
        }
    }
}

/// Homepage announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(default)]
    pub style: BannerStyle,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            text: "Vítejte na našem webu!".to_string(),
            image: String::new(),
            link: String::new(),
            style: BannerStyle::default(),
        }
    }
}

/// Admin edit of the banner. Every field is replaced; the image is carried
/// over unless a new path is given or `remove_image` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerUpdate {
    pub text: String,
    pub link: String,
    pub image: Option<String>,
    pub remove_image: bool,
    pub style: BannerStyle,
}

impl BannerUpdate {
    pub fn apply(self, current: &Banner) -> Banner {
        let image = match (self.image, self.remove_image) {
            (Some(path), _) if !path.trim().is_empty() => path.trim().to_string(),
            (_, true) => String::new(),
            _ => current.image.clone(),
        };

        Banner {
            text: self.text,
            image,
            link: self.link,
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_image() -> Banner {
        Banner {
            image: "/uploads/banner-1.jpg".to_string(),
            ..Banner::default()
        }
    }

    #[test]
    fn default_banner_is_visible_and_centered() {
        let b = Banner::default();
        assert_eq!(b.text, "Vítejte na našem webu!");
        assert!(b.style.is_visible);
        assert_eq!(b.style.text_align, "center");
        assert_eq!(b.style.background_color, "#f8d7da");
    }

    #[test]
    fn update_keeps_existing_image() {
        let update = BannerUpdate {
            text: "Nová zpráva".to_string(),
            ..BannerUpdate::default()
        };
        let next = update.apply(&with_image());
        assert_eq!(next.text, "Nová zpráva");
        assert_eq!(next.image, "/uploads/banner-1.jpg");
    }

    #[test]
    fn update_can_remove_or_replace_image() {
        let removed = BannerUpdate {
            remove_image: true,
            ..BannerUpdate::default()
        }
        .apply(&with_image());
        assert!(removed.image.is_empty());

        let replaced = BannerUpdate {
            image: Some("/uploads/banner-2.png".to_string()),
            remove_image: true,
            ..BannerUpdate::default()
        }
        .apply(&with_image());
        assert_eq!(replaced.image, "/uploads/banner-2.png");
    }

    #[test]
    fn style_uses_camel_case_keys() {
        let json = serde_json::to_value(Banner::default()).unwrap();
        assert_eq!(json["style"]["backgroundColor"], "#f8d7da");
        assert_eq!(json["style"]["isVisible"], true);
        assert!(json.get("image").is_none());

        let update: BannerUpdate =
            serde_json::from_str(r#"{"text":"x","removeImage":true,"style":{"isVisible":false}}"#).unwrap();
        assert!(update.remove_image);
        assert!(!update.style.is_visible);
        assert_eq!(update.style.font_size, "18px");
    }
}
