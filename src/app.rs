use anyhow::Result;

use crate::config::Settings;
use crate::controller::ListController;
use crate::domain::Attendee;
use crate::render::ListView;
use crate::services::{HttpDataSource, MemoryLocation, UrlStateCodec};

pub type AttendeeController = ListController<HttpDataSource<Attendee>, MemoryLocation>;

/// Attendee list wired to the configured endpoint and an in-memory address bar
pub struct App {
    pub controller: AttendeeController,
    pub location: MemoryLocation,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let source = HttpDataSource::new(settings.attendees_url()?, settings.request_timeout_seconds)?;
        let location = MemoryLocation::new(settings.start_url.clone());
        let controller = ListController::new(source, UrlStateCodec::new(location.clone()));

        Ok(Self {
            controller,
            location,
        })
    }

    pub fn view(&self) -> ListView<'_, Attendee> {
        ListView::new(
            self.controller.state(),
            self.controller.results(),
            self.controller.pagination(),
        )
    }
}
