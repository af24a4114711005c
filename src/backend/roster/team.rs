/**
 * Team Members
 *
 * Management and staff records stored in `team_management_data.json`, with
 * images under `uploads/team_images/`.
 *
 * # Form Fields
 *
 * - `name`, `role` - required on create; replaced on update when non-empty
 * - `bio` - replaced on update whenever sent, even empty
 * - `order` - replaced on update when it parses as an integer
 * - `teamImage` - optional image file
 */

use chrono::Utc;

use super::record::{parse_int_lenient, MediaRecord};
use crate::backend::media::{MediaCollection, UploadForm};
use crate::backend::store::{Collections, JsonStore};
use crate::shared::{SharedError, TeamMember};

impl MediaRecord for TeamMember {
    const COLLECTION: MediaCollection = MediaCollection::Team;
    const LABEL: &'static str = "Team member";
    const RESPONSE_KEY: &'static str = "member";

    fn store(collections: &Collections) -> &JsonStore<Self> {
        &collections.team
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
        let (Some(name), Some(role)) = (form.non_empty("name"), form.non_empty("role")) else {
            return Err(SharedError::validation("name", "Name and role are required."));
        };

        Ok(TeamMember {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            role: role.to_string(),
            bio: form.text("bio").unwrap_or_default().to_string(),
            image_filename,
            order: form.non_empty("order").and_then(parse_int_lenient).unwrap_or(0),
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn merge_form(&mut self, form: &UploadForm) {
        if let Some(name) = form.non_empty("name") {
            self.name = name.to_string();
        }
        if let Some(role) = form.non_empty("role") {
            self.role = role.to_string();
        }
        if let Some(bio) = form.text("bio") {
            self.bio = bio.to_string();
        }
        if let Some(order) = form.non_empty("order").and_then(parse_int_lenient) {
            self.order = order;
        }
        self.updated_at = Some(Utc::now());
    }
}
