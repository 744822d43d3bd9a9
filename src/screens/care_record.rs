//! Facilities tab: the family's own care record

use tracing::{debug, warn};

use crate::core::care_record::{CareRecord, CareRecordForm};
use crate::error::Result;
use crate::storage::{records, SharedStore};

pub const MSG_RECORD_SAVED: &str = "저장되었습니다";

pub struct CareRecordScreen {
    store: SharedStore,
    form: CareRecordForm,
    saved: Option<CareRecord>,
    message: Option<String>,
}

impl CareRecordScreen {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            form: CareRecordForm::default(),
            saved: None,
            message: None,
        }
    }

    /// Prefill the form from the saved record, if any
    pub async fn load(&mut self) -> Result<()> {
        self.saved = records::load_care_record(&*self.store).await?;
        if let Some(record) = &self.saved {
            debug!("Loaded care record for {}", record.facility_name);
            self.form = CareRecordForm::from_record(record);
        }
        Ok(())
    }

    pub fn form(&self) -> &CareRecordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CareRecordForm {
        &mut self.form
    }

    pub fn saved(&self) -> Option<&CareRecord> {
        self.saved.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validate the form and persist it. Invalid forms leave the saved record alone.
    pub async fn save(&mut self) -> Result<&CareRecord> {
        let check = self.form.validate();
        for warning in &check.warnings {
            warn!("{}", warning);
        }
        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                self.message = Some(e.user_message());
                return Err(e);
            }
        };

        records::save_care_record(&*self.store, &record).await?;
        self.message = Some(MSG_RECORD_SAVED.to_string());
        Ok(self.saved.insert(record))
    }
}
