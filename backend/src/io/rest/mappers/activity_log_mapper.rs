use shared::{ActivityLog as SharedActivityLog, ActivityLogListResponse};

use crate::domain::models::activity_log::ActivityLog as DomainActivityLog;

pub struct ActivityLogMapper;

impl ActivityLogMapper {
    pub fn to_dto(domain: DomainActivityLog) -> SharedActivityLog {
        SharedActivityLog {
            id: domain.id,
            child_id: domain.child_id,
            action: domain.action,
            location: domain.location,
            timestamp: domain.timestamp,
            status: domain.status,
            hash: domain.hash,
            block_number: domain.block_number,
            application: domain.application,
            criteria_met: domain.criteria_met,
        }
    }

    pub fn to_list_dto(domain_logs: Vec<DomainActivityLog>) -> ActivityLogListResponse {
        ActivityLogListResponse {
            logs: domain_logs.into_iter().map(Self::to_dto).collect(),
        }
    }
}
