//! In-memory repository backing the list/filter contract.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::listing::{self, ListQuery, Listed, Page};
use crate::models::{
    Application, Appointment, AuditEntry, Brand, Category, Job, Notification, Order, Product,
    Service, Staff, User,
};

pub mod seed;

pub trait HasId {
    fn id(&self) -> Uuid;
}

/// One collection per resource; the single implementation of
/// `list / get / create / update / delete` every endpoint goes through.
pub struct Collection<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    // Lock guards are never held across await points; every operation below
    // completes synchronously.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }
}

impl<T: HasId + Listed + Clone> Collection<T> {
    pub fn select(&self, query: &ListQuery<T>) -> Page<T> {
        listing::select(self.read().as_slice(), query)
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.read().iter().find(|item| item.id() == id).cloned()
    }

    pub fn insert(&self, record: T) -> T {
        self.write().push(record.clone());
        record
    }

    pub fn update(&self, id: Uuid, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut items = self.write();
        let record = items.iter_mut().find(|item| item.id() == id)?;
        apply(record);
        Some(record.clone())
    }

    pub fn remove(&self, id: Uuid) -> bool {
        let mut items = self.write();
        let before = items.len();
        items.retain(|item| item.id() != id);
        items.len() != before
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub brands: Collection<Brand>,
    pub categories: Collection<Category>,
    pub services: Collection<Service>,
    pub products: Collection<Product>,
    pub users: Collection<User>,
    pub jobs: Collection<Job>,
    pub applications: Collection<Application>,
    pub staff: Collection<Staff>,
    pub appointments: Collection<Appointment>,
    pub notifications: Collection<Notification>,
    pub orders: Collection<Order>,
    pub audit: Collection<AuditEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the mock data set.
    pub fn seeded() -> anyhow::Result<Self> {
        seed::seed()
    }
}
