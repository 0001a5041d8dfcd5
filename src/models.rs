use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::listing::{FieldValue, Listed};
use crate::store::HasId;

/// Closed set of roles. Authorization goes through [`Role::allows`], never
/// through string comparisons in handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ManageCatalog,
    ManageUsers,
    ManageJobs,
    ManageStaff,
    ManageAppointments,
    ManageOrders,
    Notify,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::User => "user",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "staff" => Some(Role::Staff),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Admin => &[
                Capability::ManageCatalog,
                Capability::ManageUsers,
                Capability::ManageJobs,
                Capability::ManageStaff,
                Capability::ManageAppointments,
                Capability::ManageOrders,
                Capability::Notify,
            ],
            Role::Staff => &[Capability::ManageAppointments, Capability::Notify],
            Role::User => &[],
        }
    }

    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Draft,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Reviewing,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    System,
    Order,
    Appointment,
    Message,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::System => "system",
            NotificationKind::Order => "order",
            NotificationKind::Appointment => "appointment",
            NotificationKind::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    /// Price in minor currency units.
    pub price: i64,
    pub duration_min: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub brand_id: Uuid,
    pub category_id: Uuid,
    pub price: i64,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub status: JobStatus,
    pub closing_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub staff_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub resource: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

macro_rules! has_id {
    ($($ty:ty),+ $(,)?) => {
        $(impl HasId for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
        })+
    };
}

has_id!(
    Brand,
    Category,
    Service,
    Product,
    User,
    Job,
    Application,
    Staff,
    Appointment,
    Notification,
    Order,
    AuditEntry,
);

// Field-accessor maps for the list engine. Names match the wire casing used
// in query parameters.

impl Listed for Brand {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "description" => Some(FieldValue::from_opt(self.description.as_deref())),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Category {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description"];
    const DEFAULT_SORT: &'static str = "name";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "description" => Some(FieldValue::from_opt(self.description.as_deref())),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Service {
    const SEARCH_FIELDS: &'static [&'static str] = &["name"];
    const DEFAULT_SORT: &'static str = "name";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "categoryId" => Some(FieldValue::from(self.category_id)),
            "price" => Some(FieldValue::Int(self.price)),
            "durationMin" => Some(FieldValue::Int(self.duration_min as i64)),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Product {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "description" => Some(FieldValue::from_opt(self.description.as_deref())),
            "brandId" => Some(FieldValue::from(self.brand_id)),
            "categoryId" => Some(FieldValue::from(self.category_id)),
            "price" => Some(FieldValue::Int(self.price)),
            "stock" => Some(FieldValue::Int(self.stock as i64)),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for User {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "email" => Some(FieldValue::from(&self.email)),
            "role" => Some(FieldValue::from(self.role.as_str())),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Job {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "description"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::from(&self.title)),
            "description" => Some(FieldValue::from(&self.description)),
            "location" => Some(FieldValue::from(&self.location)),
            "type" => Some(FieldValue::from(self.employment_type.as_str())),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "closingDate" => Some(FieldValue::Time(self.closing_date)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Application {
    const SEARCH_FIELDS: &'static [&'static str] = &["applicantName", "email"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "applicantName" => Some(FieldValue::from(&self.applicant_name)),
            "email" => Some(FieldValue::from(&self.email)),
            "jobId" => Some(FieldValue::from(self.job_id)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Staff {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "specialization"];
    const DEFAULT_SORT: &'static str = "name";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::from(&self.name)),
            "email" => Some(FieldValue::from(&self.email)),
            "specialization" => Some(FieldValue::from(&self.specialization)),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Appointment {
    const SEARCH_FIELDS: &'static [&'static str] = &["notes"];
    const DEFAULT_SORT: &'static str = "scheduledAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "notes" => Some(FieldValue::from_opt(self.notes.as_deref())),
            "userId" => Some(FieldValue::from(self.user_id)),
            "serviceId" => Some(FieldValue::from(self.service_id)),
            "staffId" => Some(FieldValue::from(self.staff_id)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "scheduledAt" => Some(FieldValue::Time(self.scheduled_at)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Notification {
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "body"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::from(&self.title)),
            "body" => Some(FieldValue::from(&self.body)),
            "userId" => Some(FieldValue::from(self.user_id)),
            "kind" => Some(FieldValue::from(self.kind.as_str())),
            "isRead" => Some(FieldValue::Bool(self.is_read)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}

impl Listed for Order {
    const SEARCH_FIELDS: &'static [&'static str] = &[];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "userId" => Some(FieldValue::from(self.user_id)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "totalAmount" => Some(FieldValue::Int(self.total_amount)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            "updatedAt" => Some(FieldValue::Time(self.updated_at)),
            _ => None,
        }
    }
}

impl Listed for AuditEntry {
    const SEARCH_FIELDS: &'static [&'static str] = &["action"];
    const DEFAULT_SORT: &'static str = "createdAt";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "action" => Some(FieldValue::from(&self.action)),
            "createdAt" => Some(FieldValue::Time(self.created_at)),
            _ => None,
        }
    }
}
