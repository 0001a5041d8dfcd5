use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::models::AuditEntry;
use crate::store::MemoryStore;

pub fn log_audit(
    store: &MemoryStore,
    user_id: Option<Uuid>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    store.audit.insert(AuditEntry {
        id: Uuid::new_v4(),
        user_id,
        action: action.to_owned(),
        resource: resource.map(str::to_owned),
        metadata,
        created_at: Utc::now(),
    });
    tracing::debug!(action, resource, "audit entry recorded");
}
