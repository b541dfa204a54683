use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::model::ImageAsset;

/// One English/Spanish word pair plus its illustration.
///
/// `english_local` decides which side of the pair is shown on the button of
/// the player holding the device (`local`) and which one scrolls across the
/// teammate's screen (`remote`). The deck loader and the round logic own the
/// flag and the id; the word fields are fixed once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordEntry {
    id: u32,
    english: String,
    spanish: String,
    english_local: bool,
    #[serde(serialize_with = "serialize_image_name")]
    image: Option<Arc<ImageAsset>>,
}

impl WordEntry {
    /// Builds an entry with `english_local = true` and the unassigned id `0`.
    pub fn new(english: String, spanish: String, image: Option<Arc<ImageAsset>>) -> Self {
        Self {
            id: 0,
            english,
            spanish,
            english_local: true,
            image,
        }
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn spanish(&self) -> &str {
        &self.spanish
    }

    pub fn image(&self) -> Option<&Arc<ImageAsset>> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn english_local(&self) -> bool {
        self.english_local
    }

    pub fn set_english_local(&mut self, english_local: bool) {
        self.english_local = english_local;
    }

    pub fn toggle_locality(&mut self) {
        self.english_local = !self.english_local;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Word shown on the local player's button.
    pub fn local(&self) -> &str {
        if self.english_local {
            &self.english
        } else {
            &self.spanish
        }
    }

    /// Word scrolled across the teammate's screen.
    pub fn remote(&self) -> &str {
        if self.english_local {
            &self.spanish
        } else {
            &self.english
        }
    }
}

fn serialize_image_name<S>(image: &Option<Arc<ImageAsset>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match image {
        Some(image) => serializer.serialize_some(image.name()),
        None => serializer.serialize_none(),
    }
}
