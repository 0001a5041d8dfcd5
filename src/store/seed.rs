//! Mock data set loaded at startup and in tests.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{
    Application, ApplicationStatus, Appointment, AppointmentStatus, Brand, Category,
    EmploymentType, Job, JobStatus, Notification, NotificationKind, Order, OrderStatus, Product,
    Role, Service, Staff, User,
};
use crate::store::MemoryStore;

pub fn seed() -> anyhow::Result<MemoryStore> {
    let store = MemoryStore::new();
    let now = Utc::now();

    let admin = store.users.insert(User {
        id: Uuid::new_v4(),
        name: "Amelia Reyes".into(),
        email: "admin@salonhub.dev".into(),
        password_hash: hash_password("admin123")?,
        role: Role::Admin,
        is_active: true,
        created_at: now - Duration::days(90),
    });
    let staff_user = store.users.insert(User {
        id: Uuid::new_v4(),
        name: "Noor Haddad".into(),
        email: "staff@salonhub.dev".into(),
        password_hash: hash_password("staff123")?,
        role: Role::Staff,
        is_active: true,
        created_at: now - Duration::days(60),
    });
    let customer = store.users.insert(User {
        id: Uuid::new_v4(),
        name: "Jordan Blake".into(),
        email: "jordan@example.com".into(),
        password_hash: hash_password("user123")?,
        role: Role::User,
        is_active: true,
        created_at: now - Duration::days(30),
    });

    let lumiere = store.brands.insert(Brand {
        id: Uuid::new_v4(),
        name: "Lumière Paris".into(),
        description: Some("Luxury skincare and fragrance house".into()),
        logo_url: Some("https://cdn.salonhub.dev/brands/lumiere.png".into()),
        is_active: true,
        created_at: now - Duration::days(80),
    });
    let velvet = store.brands.insert(Brand {
        id: Uuid::new_v4(),
        name: "Velvet & Co".into(),
        description: Some("Professional colour cosmetics".into()),
        logo_url: None,
        is_active: true,
        created_at: now - Duration::days(70),
    });
    store.brands.insert(Brand {
        id: Uuid::new_v4(),
        name: "Maison Noir".into(),
        description: Some("Discontinued heritage line".into()),
        logo_url: None,
        is_active: false,
        created_at: now - Duration::days(400),
    });

    let hair = store.categories.insert(Category {
        id: Uuid::new_v4(),
        name: "Hair".into(),
        description: Some("Cuts, colour and styling".into()),
        is_active: true,
        created_at: now - Duration::days(80),
    });
    let nails = store.categories.insert(Category {
        id: Uuid::new_v4(),
        name: "Nails".into(),
        description: Some("Manicure and pedicure".into()),
        is_active: true,
        created_at: now - Duration::days(79),
    });
    let makeup = store.categories.insert(Category {
        id: Uuid::new_v4(),
        name: "Makeup".into(),
        description: Some("Event and bridal makeup".into()),
        is_active: true,
        created_at: now - Duration::days(78),
    });
    let skincare = store.categories.insert(Category {
        id: Uuid::new_v4(),
        name: "Skincare".into(),
        description: None,
        is_active: true,
        created_at: now - Duration::days(77),
    });

    let haircut = store.services.insert(Service {
        id: Uuid::new_v4(),
        name: "Haircut & Style".into(),
        category_id: hair.id,
        price: 4500,
        duration_min: 45,
        is_active: true,
        created_at: now - Duration::days(75),
    });
    store.services.insert(Service {
        id: Uuid::new_v4(),
        name: "Gel Manicure".into(),
        category_id: nails.id,
        price: 3800,
        duration_min: 60,
        is_active: true,
        created_at: now - Duration::days(74),
    });
    let bridal = store.services.insert(Service {
        id: Uuid::new_v4(),
        name: "Bridal Makeup".into(),
        category_id: makeup.id,
        price: 12000,
        duration_min: 90,
        is_active: true,
        created_at: now - Duration::days(73),
    });
    store.services.insert(Service {
        id: Uuid::new_v4(),
        name: "Deep Cleansing Facial".into(),
        category_id: skincare.id,
        price: 6500,
        duration_min: 60,
        is_active: false,
        created_at: now - Duration::days(72),
    });

    store.products.insert(Product {
        id: Uuid::new_v4(),
        name: "Repair Shampoo 250ml".into(),
        description: Some("Keratin repair for damaged hair".into()),
        brand_id: lumiere.id,
        category_id: hair.id,
        price: 1800,
        stock: 42,
        is_active: true,
        created_at: now - Duration::days(50),
    });
    store.products.insert(Product {
        id: Uuid::new_v4(),
        name: "Velvet Matte Lipstick".into(),
        description: Some("Long-wear matte finish".into()),
        brand_id: velvet.id,
        category_id: makeup.id,
        price: 2400,
        stock: 3,
        is_active: true,
        created_at: now - Duration::days(40),
    });
    store.products.insert(Product {
        id: Uuid::new_v4(),
        name: "Hydrating Serum".into(),
        description: Some("Hyaluronic acid concentrate".into()),
        brand_id: lumiere.id,
        category_id: skincare.id,
        price: 5200,
        stock: 17,
        is_active: true,
        created_at: now - Duration::days(20),
    });
    store.products.insert(Product {
        id: Uuid::new_v4(),
        name: "Nail Strengthener".into(),
        description: None,
        brand_id: velvet.id,
        category_id: nails.id,
        price: 1500,
        stock: 0,
        is_active: false,
        created_at: now - Duration::days(10),
    });

    // Exactly three job postings; only this one mentions "stylist".
    let stylist_job = store.jobs.insert(Job {
        id: Uuid::new_v4(),
        title: "Senior Hair Stylist".into(),
        description: "Lead colour and cutting specialist for our flagship salon.".into(),
        location: "Amsterdam".into(),
        employment_type: EmploymentType::FullTime,
        status: JobStatus::Active,
        closing_date: now + Duration::days(30),
        created_at: now - Duration::days(14),
    });
    store.jobs.insert(Job {
        id: Uuid::new_v4(),
        title: "Salon Receptionist".into(),
        description: "Front desk, bookings and client care.".into(),
        location: "Amsterdam".into(),
        employment_type: EmploymentType::PartTime,
        status: JobStatus::Active,
        closing_date: now + Duration::days(21),
        created_at: now - Duration::days(10),
    });
    store.jobs.insert(Job {
        id: Uuid::new_v4(),
        title: "Nail Technician".into(),
        description: "Gel and acrylic specialist, portfolio required.".into(),
        location: "Rotterdam".into(),
        employment_type: EmploymentType::Contract,
        status: JobStatus::Draft,
        closing_date: now + Duration::days(45),
        created_at: now - Duration::days(7),
    });

    store.applications.insert(Application {
        id: Uuid::new_v4(),
        job_id: stylist_job.id,
        applicant_name: "Mira Kovács".into(),
        email: "mira.kovacs@example.com".into(),
        phone: Some("+31 6 1234 5678".into()),
        resume_url: Some("https://cdn.salonhub.dev/resumes/mira.pdf".into()),
        status: ApplicationStatus::Reviewing,
        created_at: now - Duration::days(5),
    });
    store.applications.insert(Application {
        id: Uuid::new_v4(),
        job_id: stylist_job.id,
        applicant_name: "Tomás Silva".into(),
        email: "tomas.silva@example.com".into(),
        phone: None,
        resume_url: None,
        status: ApplicationStatus::Submitted,
        created_at: now - Duration::days(2),
    });

    let amara = store.staff.insert(Staff {
        id: Uuid::new_v4(),
        name: "Amara Diallo".into(),
        email: "amara@salonhub.dev".into(),
        specialization: "Makeup Artist".into(),
        is_active: true,
        created_at: now - Duration::days(65),
    });
    store.staff.insert(Staff {
        id: Uuid::new_v4(),
        name: "Ingrid Larsen".into(),
        email: "ingrid@salonhub.dev".into(),
        specialization: "Makeup & Bridal".into(),
        is_active: false,
        created_at: now - Duration::days(200),
    });
    let chloe = store.staff.insert(Staff {
        id: Uuid::new_v4(),
        name: "Chloe Tan".into(),
        email: "chloe@salonhub.dev".into(),
        specialization: "Hair Colorist".into(),
        is_active: true,
        created_at: now - Duration::days(55),
    });
    store.staff.insert(Staff {
        id: Uuid::new_v4(),
        name: "Rosa Martinez".into(),
        email: "rosa@salonhub.dev".into(),
        specialization: "Nail Art".into(),
        is_active: true,
        created_at: now - Duration::days(45),
    });

    store.appointments.insert(Appointment {
        id: Uuid::new_v4(),
        user_id: customer.id,
        service_id: haircut.id,
        staff_id: chloe.id,
        scheduled_at: now + Duration::days(2),
        status: AppointmentStatus::Confirmed,
        notes: Some("First visit".into()),
        created_at: now - Duration::days(3),
    });
    store.appointments.insert(Appointment {
        id: Uuid::new_v4(),
        user_id: customer.id,
        service_id: bridal.id,
        staff_id: amara.id,
        scheduled_at: now + Duration::days(14),
        status: AppointmentStatus::Pending,
        notes: None,
        created_at: now - Duration::days(1),
    });
    store.appointments.insert(Appointment {
        id: Uuid::new_v4(),
        user_id: staff_user.id,
        service_id: haircut.id,
        staff_id: chloe.id,
        scheduled_at: now - Duration::days(20),
        status: AppointmentStatus::Completed,
        notes: None,
        created_at: now - Duration::days(25),
    });

    store.notifications.insert(Notification {
        id: Uuid::new_v4(),
        user_id: customer.id,
        title: "Appointment confirmed".into(),
        body: "Your haircut is booked for this week.".into(),
        kind: NotificationKind::Appointment,
        is_read: false,
        created_at: now - Duration::days(3),
    });
    store.notifications.insert(Notification {
        id: Uuid::new_v4(),
        user_id: customer.id,
        title: "Order shipped".into(),
        body: "Your order is on its way.".into(),
        kind: NotificationKind::Order,
        is_read: true,
        created_at: now - Duration::days(8),
    });

    store.orders.insert(Order {
        id: Uuid::new_v4(),
        user_id: customer.id,
        total_amount: 4200,
        status: OrderStatus::Pending,
        created_at: now - Duration::days(1),
        updated_at: now - Duration::days(1),
    });
    store.orders.insert(Order {
        id: Uuid::new_v4(),
        user_id: customer.id,
        total_amount: 7600,
        status: OrderStatus::Shipped,
        created_at: now - Duration::days(9),
        updated_at: now - Duration::days(8),
    });
    store.orders.insert(Order {
        id: Uuid::new_v4(),
        user_id: admin.id,
        total_amount: 1800,
        status: OrderStatus::Completed,
        created_at: now - Duration::days(40),
        updated_at: now - Duration::days(35),
    });

    Ok(store)
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}
