/**
 * Players
 *
 * Roster records stored in `players_data.json`, with images under
 * `uploads/player_images/`.
 *
 * # Form Fields
 *
 * - `name`, `position` - required on create; replaced on update when non-empty
 * - `bio`, `nationality` - replaced on update whenever sent, even empty
 * - `jerseyNumber`, `order` - replaced on update when they parse as integers
 * - `dateOfBirth` - replaced on update when non-empty
 * - `playerImage` - optional image file
 */

use chrono::Utc;

use super::record::{parse_int_lenient, MediaRecord};
use crate::backend::media::{MediaCollection, UploadForm};
use crate::backend::store::{Collections, JsonStore};
use crate::shared::{Player, SharedError};

impl MediaRecord for Player {
    const COLLECTION: MediaCollection = MediaCollection::Players;
    const LABEL: &'static str = "Player";
    const RESPONSE_KEY: &'static str = "player";

    fn store(collections: &Collections) -> &JsonStore<Self> {
        &collections.players
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn image_filename(&self) -> Option<&str> {
        self.image_filename.as_deref()
    }

    fn set_image_filename(&mut self, filename: Option<String>) {
        self.image_filename = filename;
    }

    fn from_form(form: &UploadForm, image_filename: Option<String>) -> Result<Self, SharedError> {
        let (Some(name), Some(position)) = (form.non_empty("name"), form.non_empty("position")) else {
            return Err(SharedError::validation("name", "Name and position are required."));
        };

        let now = Utc::now();
        Ok(Player {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            position: position.to_string(),
            jersey_number: form.non_empty("jerseyNumber").and_then(parse_int_lenient),
            bio: form.text("bio").unwrap_or_default().to_string(),
            date_of_birth: form.non_empty("dateOfBirth").map(str::to_string),
            nationality: form.text("nationality").unwrap_or_default().to_string(),
            image_filename,
            order: form.non_empty("order").and_then(parse_int_lenient).unwrap_or(0),
            created_at: now,
            updated_at: now,
        })
    }

    fn merge_form(&mut self, form: &UploadForm) {
        if let Some(name) = form.non_empty("name") {
            self.name = name.to_string();
        }
        if let Some(position) = form.non_empty("position") {
            self.position = position.to_string();
        }
        if let Some(number) = form.non_empty("jerseyNumber").and_then(parse_int_lenient) {
            self.jersey_number = Some(number);
        }
        if let Some(bio) = form.text("bio") {
            self.bio = bio.to_string();
        }
        if let Some(date) = form.non_empty("dateOfBirth") {
            self.date_of_birth = Some(date.to_string());
        }
        if let Some(nationality) = form.text("nationality") {
            self.nationality = nationality.to_string();
        }
        if let Some(order) = form.non_empty("order").and_then(parse_int_lenient) {
            self.order = order;
        }
        self.updated_at = Utc::now();
    }
}
