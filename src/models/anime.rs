//! Lenient view of an AnimeThemes `/anime` search response.
//!
//! The views borrow the parsed document and never fail. A missing key reads
//! as `None`, while a key holding `null` reads as `Some(Value::Null)`. A
//! collection of the wrong type reads as empty, and only the elements the
//! caller actually visits are ever looked at.

use serde_json::Value;

fn field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key)
}

fn list<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    node.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResponse<'a>(&'a Value);

impl<'a> SearchResponse<'a> {
    #[must_use]
    pub const fn new(document: &'a Value) -> Self {
        Self(document)
    }

    /// The `anime` array, or `None` when the key is missing or not an array.
    #[must_use]
    pub fn anime(&self) -> Option<&'a [Value]> {
        self.0
            .get("anime")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn first_anime(&self) -> Option<AnimeSummary<'a>> {
        self.anime()?.first().map(AnimeSummary)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnimeSummary<'a>(&'a Value);

impl<'a> AnimeSummary<'a> {
    #[must_use]
    pub fn id(&self) -> Option<&'a Value> {
        field(self.0, "id")
    }

    #[must_use]
    pub fn name(&self) -> Option<&'a Value> {
        field(self.0, "name")
    }

    #[must_use]
    pub fn media_format(&self) -> Option<&'a Value> {
        field(self.0, "media_format")
    }

    pub fn images(&self) -> impl ExactSizeIterator<Item = Image<'a>> + use<'a> {
        list(self.0, "images").iter().map(Image)
    }

    #[must_use]
    pub fn theme_count(&self) -> usize {
        list(self.0, "animethemes").len()
    }

    #[must_use]
    pub fn first_theme(&self) -> Option<Theme<'a>> {
        list(self.0, "animethemes").first().map(Theme)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Image<'a>(&'a Value);

impl<'a> Image<'a> {
    #[must_use]
    pub fn link(&self) -> Option<&'a Value> {
        field(self.0, "link")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme<'a>(&'a Value);

impl<'a> Theme<'a> {
    #[must_use]
    pub fn name(&self) -> Option<&'a Value> {
        field(self.0, "name")
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        list(self.0, "animethemeentries").len()
    }

    #[must_use]
    pub fn first_entry(&self) -> Option<Entry<'a>> {
        list(self.0, "animethemeentries").first().map(Entry)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Entry<'a>(&'a Value);

impl<'a> Entry<'a> {
    #[must_use]
    pub fn version(&self) -> Option<&'a Value> {
        field(self.0, "version")
    }

    #[must_use]
    pub fn video_count(&self) -> usize {
        list(self.0, "videos").len()
    }

    #[must_use]
    pub fn first_video(&self) -> Option<Video<'a>> {
        list(self.0, "videos").first().map(Video)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Video<'a>(&'a Value);

impl<'a> Video<'a> {
    #[must_use]
    pub fn link(&self) -> Option<&'a Value> {
        field(self.0, "link")
    }

    /// The attached audio track. Only a non-empty object counts.
    #[must_use]
    pub fn audio(&self) -> Option<Audio<'a>> {
        field(self.0, "audio")
            .filter(|audio| audio.as_object().is_some_and(|map| !map.is_empty()))
            .map(Audio)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Audio<'a>(&'a Value);

impl<'a> Audio<'a> {
    #[must_use]
    pub fn link(&self) -> Option<&'a Value> {
        field(self.0, "link")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_anime_key() {
        let document = json!({ "links": {}, "meta": {} });
        let response = SearchResponse::new(&document);
        assert!(response.anime().is_none());
        assert!(response.first_anime().is_none());
    }

    #[test]
    fn test_null_kept_apart_from_missing() {
        let document = json!({ "anime": [{ "id": 1, "name": null }] });
        let anime = SearchResponse::new(&document).first_anime().unwrap();

        assert_eq!(anime.id(), Some(&json!(1)));
        assert_eq!(anime.name(), Some(&Value::Null));
        assert!(anime.media_format().is_none());
    }

    #[test]
    fn test_wrong_typed_collections_read_as_empty() {
        let document = json!({
            "anime": [{ "images": { "large": "x" }, "animethemes": null }]
        });
        let anime = SearchResponse::new(&document).first_anime().unwrap();

        assert_eq!(anime.images().len(), 0);
        assert_eq!(anime.theme_count(), 0);
        assert!(anime.first_theme().is_none());
    }

    #[test]
    fn test_later_elements_are_not_inspected() {
        let document = json!({
            "anime": [{ "id": 1 }, { "id": 2, "images": { "large": "x" } }, "junk"]
        });
        let response = SearchResponse::new(&document);

        assert_eq!(response.anime().map(<[Value]>::len), Some(3));
        assert_eq!(response.first_anime().unwrap().id(), Some(&json!(1)));
    }

    #[test]
    fn test_nested_audio() {
        let document = json!({
            "anime": [{
                "animethemes": [{
                    "animethemeentries": [{
                        "version": null,
                        "videos": [{ "link": "https://v.animethemes.moe/a.webm",
                                     "audio": { "link": "https://a.animethemes.moe/a.ogg", "size": 10 } }]
                    }]
                }]
            }]
        });

        let entry = SearchResponse::new(&document)
            .first_anime()
            .and_then(|a| a.first_theme())
            .and_then(|t| t.first_entry())
            .unwrap();
        assert_eq!(entry.version(), Some(&Value::Null));

        let audio = entry.first_video().and_then(|v| v.audio()).unwrap();
        assert_eq!(audio.link(), Some(&json!("https://a.animethemes.moe/a.ogg")));
    }

    #[test]
    fn test_audio_must_be_non_empty_object() {
        for audio in [json!({}), json!("https://a.animethemes.moe/a.ogg"), Value::Null] {
            let document = json!({ "audio": audio });
            assert!(Video(&document).audio().is_none());
        }
    }
}
