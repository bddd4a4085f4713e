//! Request descriptors.

use steamapps_wire::proto::AppInfoRequestApp;

/// Section mask selecting every metadata section of an app.
pub const ALL_SECTIONS: u32 = 0xFFFF;

/// App to request metadata for, with the sections wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct App {
    app_id: u32,
    section_flags: u32,
}

impl App {
    /// Requests every section of `app_id`.
    #[must_use]
    pub const fn new(app_id: u32) -> Self {
        Self::with_sections(app_id, ALL_SECTIONS)
    }

    /// Requests only the sections selected by `section_flags`.
    #[must_use]
    pub const fn with_sections(app_id: u32, section_flags: u32) -> Self {
        Self {
            app_id,
            section_flags,
        }
    }

    /// App identifier.
    #[must_use]
    pub const fn app_id(&self) -> u32 {
        self.app_id
    }

    /// Requested section mask.
    #[must_use]
    pub const fn section_flags(&self) -> u32 {
        self.section_flags
    }
}

impl From<u32> for App {
    fn from(app_id: u32) -> Self {
        Self::new(app_id)
    }
}

impl From<App> for AppInfoRequestApp {
    fn from(app: App) -> Self {
        Self {
            app_id: Some(app.app_id),
            section_flags: Some(app.section_flags),
        }
    }
}
