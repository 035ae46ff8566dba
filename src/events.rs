use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::ApplicationId;
use crate::workflow::{ApplicationStatus, Role};

/// audit events emitted by workflow operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ApplicationSubmitted {
        application_id: ApplicationId,
        principal: Money,
        tenor_months: u32,
        net_disbursement: Money,
        timestamp: DateTime<Utc>,
    },
    StatusChanged {
        application_id: ApplicationId,
        old_status: ApplicationStatus,
        new_status: ApplicationStatus,
        actor: Role,
        timestamp: DateTime<Utc>,
    },
    ApplicationRejected {
        application_id: ApplicationId,
        reason: String,
        actor: Role,
        timestamp: DateTime<Utc>,
    },
    DocumentAttached {
        application_id: ApplicationId,
        name: String,
        timestamp: DateTime<Utc>,
    },
    DisbursementRecorded {
        application_id: ApplicationId,
        net_amount: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
