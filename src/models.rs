//! Domain model for a single catalog entry. Records arrive as JSON and are
//! treated as read-only data holders; every other layer derives views from
//! them without mutating the originals.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Prefix used when a course does not ship its own styling tag.
const CATEGORY_CLASS_PREFIX: &str = "category-";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One course as it appears in the data file.
pub struct Course {
    /// Title shown on the card and matched by search.
    pub title: String,
    /// Grouping label. Filtering compares it exactly, search compares it
    /// case-insensitively.
    pub category: String,
    /// Instructor name, also searchable.
    pub instructor: String,
    /// Display-only price. Numbers in the source are kept in their textual
    /// form so `49` and `"$49"` both survive decoding.
    #[serde(deserialize_with = "display_text")]
    pub price: String,
    /// Display-only image reference.
    pub image_url: String,
    /// Optional styling tag for the category badge.
    #[serde(default)]
    pub category_class: Option<String>,
}

impl Course {
    /// Styling tag for the category badge: the explicit one when present and
    /// non-empty (kept verbatim, even if it is only whitespace), otherwise
    /// derived from the category label.
    pub fn category_class(&self) -> String {
        match &self.category_class {
            Some(class) if !class.is_empty() => class.clone(),
            _ => derive_category_class(&self.category),
        }
    }

    /// Whether an already normalized query occurs in the title, category or
    /// instructor. An empty query matches everything.
    pub fn matches_query(&self, normalized: &str) -> bool {
        if normalized.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(normalized)
            || self.category.to_lowercase().contains(normalized)
            || self.instructor.to_lowercase().contains(normalized)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Lower-case the label and collapse each whitespace run into a single `-`.
pub fn derive_category_class(category: &str) -> String {
    let mut class = String::from(CATEGORY_CLASS_PREFIX);
    let mut in_whitespace = false;
    for ch in category.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                class.push('-');
            }
            in_whitespace = true;
        } else {
            class.push(ch);
            in_whitespace = false;
        }
    }
    class
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(text) => text,
        Text::Num(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, category: &str, instructor: &str) -> Course {
        Course {
            title: title.to_string(),
            category: category.to_string(),
            instructor: instructor.to_string(),
            price: "$10".to_string(),
            image_url: "img.png".to_string(),
            category_class: None,
        }
    }

    #[test]
    fn derives_class_from_category() {
        assert_eq!(derive_category_class("Web Design"), "category-web-design");
        assert_eq!(derive_category_class("HR  &  Recruiting"), "category-hr-&-recruiting");
        assert_eq!(derive_category_class("Marketing"), "category-marketing");
    }

    #[test]
    fn explicit_class_wins() {
        let mut c = course("Intro", "Web Design", "Ann");
        c.category_class = Some("tag-web".to_string());
        assert_eq!(c.category_class(), "tag-web");
        c.category_class = None;
        assert_eq!(c.category_class(), "category-web-design");
    }

    #[test]
    fn only_an_empty_class_falls_back() {
        let mut c = course("Intro", "Web Design", "Ann");
        c.category_class = Some(" ".to_string());
        assert_eq!(c.category_class(), " ");
        c.category_class = Some(String::new());
        assert_eq!(c.category_class(), "category-web-design");
    }

    #[test]
    fn query_matches_any_searchable_field() {
        let c = course("Intro to Go", "Development", "Rob Pike");
        assert!(c.matches_query(""));
        assert!(c.matches_query("go"));
        assert!(c.matches_query("develop"));
        assert!(c.matches_query("pike"));
        assert!(!c.matches_query("rust"));
    }

    #[test]
    fn decodes_camel_case_fields_and_numeric_price() {
        let json = r#"{
            "title": "Golf",
            "category": "Sport",
            "instructor": "Tiger",
            "price": 49,
            "imageUrl": "golf.png"
        }"#;
        let c: Course = serde_json::from_str(json).unwrap();
        assert_eq!(c.price, "49");
        assert_eq!(c.image_url, "golf.png");
        assert_eq!(c.category_class, None);
    }
}
