use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::slug::slugify;

/// Blog post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Integration,
    Playbook,
    Architecture,
    Education,
    Comparison,
}

/// A blog post as stored in the post collection file.
///
/// The post is stored as submitted: a field left out of the request stays
/// absent on disk and in every response. Fields not listed here are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<PostSection>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlogPost {
    /// Fill an empty slug from the title. A slug set by hand is kept, and a
    /// post without a title keeps its empty slug.
    pub fn ensure_slug(&mut self) {
        if !self.slug.trim().is_empty() {
            return;
        }
        if let Some(title) = &self.title {
            self.slug = slugify(title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_post() -> Value {
        json!({
            "slug": "webhooks-101",
            "title": "Webhooks 101",
            "description": "Getting started with webhooks",
            "category": "Education",
            "publishedAt": "2025-03-14",
            "readTimeMinutes": 7,
            "ctaLabel": "Read the docs",
            "ctaHref": "https://example.com/docs",
            "sections": [
                { "heading": "Intro", "paragraphs": ["One", "Two"] }
            ]
        })
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let post: BlogPost = serde_json::from_value(full_post()).unwrap();
        assert_eq!(post.slug, "webhooks-101");
        assert_eq!(post.category, Some(Category::Education));
        assert_eq!(post.published_at, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(post.read_time_minutes, Some(7));
        let sections = post.sections.unwrap();
        assert_eq!(
            sections[0].paragraphs,
            Some(vec!["One".to_string(), "Two".to_string()])
        );
        assert!(post.extra.is_empty());
    }

    #[test]
    fn serializes_back_to_the_same_json() {
        let post: BlogPost = serde_json::from_value(full_post()).unwrap();
        assert_eq!(serde_json::to_value(&post).unwrap(), full_post());
    }

    #[test]
    fn unknown_fields_survive() {
        let mut raw = full_post();
        raw["coverImage"] = json!("/images/cover.png");
        raw["sections"][0]["note"] = json!(true);

        let post: BlogPost = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(post.extra["coverImage"], json!("/images/cover.png"));
        assert_eq!(serde_json::to_value(&post).unwrap(), raw);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut raw = full_post();
        raw["category"] = json!("Gossip");
        assert!(serde_json::from_value::<BlogPost>(raw).is_err());
    }

    #[test]
    fn missing_fields_stay_absent() {
        let raw = json!({ "slug": "x", "title": "T" });
        let post: BlogPost = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(post.category, None);
        assert_eq!(post.read_time_minutes, None);
        assert_eq!(post.sections, None);
        assert_eq!(serde_json::to_value(&post).unwrap(), raw);
    }

    #[test]
    fn sparse_sections_round_trip() {
        let raw = json!({
            "slug": "draft",
            "sections": [{ "heading": "Only a heading" }, { "paragraphs": [] }]
        });
        let post: BlogPost = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&post).unwrap(), raw);
    }

    #[test]
    fn ensure_slug_derives_only_when_empty() {
        let mut post = BlogPost {
            title: Some("Hello There".to_string()),
            ..BlogPost::default()
        };
        post.ensure_slug();
        assert_eq!(post.slug, "hello-there");

        post.slug = "custom".to_string();
        post.title = Some("Changed".to_string());
        post.ensure_slug();
        assert_eq!(post.slug, "custom");
    }

    #[test]
    fn ensure_slug_without_title_keeps_slug_empty() {
        let mut post = BlogPost::default();
        post.ensure_slug();
        assert_eq!(post.slug, "");
    }
}
