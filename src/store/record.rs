use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{DrillHole, GeomechInterval, Project};

/// An entity that can live in a [`RecordStore`](super::RecordStore).
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Human-readable entity name for errors and logs.
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

impl Record for Project {
    const KIND: &'static str = "Project";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl Record for DrillHole {
    const KIND: &'static str = "Drill hole";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl Record for GeomechInterval {
    const KIND: &'static str = "Geomech record";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
