use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        applications::{ApplicationList, CreateApplicationRequest, UpdateApplicationRequest},
        appointments::{AppointmentList, CreateAppointmentRequest, UpdateAppointmentRequest},
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        brands::{BrandList, CreateBrandRequest, UpdateBrandRequest},
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        jobs::{CreateJobRequest, JobList, UpdateJobRequest},
        notifications::{NotificationList, SendNotificationRequest},
        orders::{OrderList, UpdateOrderStatusRequest},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
        staff::{CreateStaffRequest, StaffList, UpdateStaffRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
    },
    models::{
        Application, ApplicationStatus, Appointment, AppointmentStatus, Brand, Category,
        EmploymentType, Job, JobStatus, Notification, NotificationKind, Order, OrderStatus,
        Product, Role, Service, Staff, User,
    },
    response::{ApiResponse, PageInfo},
    routes::{
        admin, applications, appointments, auth, brands, categories, health, jobs, notifications,
        params, products, services as service_routes, staff, users,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        brands::list_brands,
        brands::get_brand,
        brands::create_brand,
        brands::update_brand,
        brands::delete_brand,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        service_routes::list_services,
        service_routes::get_service,
        service_routes::create_service,
        service_routes::update_service,
        service_routes::delete_service,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        jobs::list_jobs,
        jobs::get_job,
        jobs::create_job,
        jobs::update_job,
        jobs::delete_job,
        applications::list_applications,
        applications::get_application,
        applications::create_application,
        applications::update_application,
        applications::delete_application,
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::create_appointment,
        appointments::update_appointment,
        appointments::delete_appointment,
        notifications::list_notifications,
        notifications::send_notification,
        notifications::mark_read,
        notifications::delete_notification,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status
    ),
    components(
        schemas(
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
            Role,
            JobStatus,
            EmploymentType,
            ApplicationStatus,
            AppointmentStatus,
            NotificationKind,
            OrderStatus,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateBrandRequest,
            UpdateBrandRequest,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateServiceRequest,
            UpdateServiceRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateUserRequest,
            UpdateUserRequest,
            CreateJobRequest,
            UpdateJobRequest,
            CreateApplicationRequest,
            UpdateApplicationRequest,
            CreateStaffRequest,
            UpdateStaffRequest,
            CreateAppointmentRequest,
            UpdateAppointmentRequest,
            SendNotificationRequest,
            UpdateOrderStatusRequest,
            BrandList,
            CategoryList,
            ServiceList,
            ProductList,
            UserList,
            JobList,
            ApplicationList,
            StaffList,
            AppointmentList,
            NotificationList,
            OrderList,
            params::ListParams,
            PageInfo,
            ApiResponse<Brand>,
            ApiResponse<BrandList>,
            ApiResponse<ProductList>,
            ApiResponse<JobList>,
            ApiResponse<StaffList>,
            ApiResponse<OrderList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Brands", description = "Brand catalog endpoints"),
        (name = "Categories", description = "Service category endpoints"),
        (name = "Services", description = "Salon service endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Users", description = "User administration endpoints"),
        (name = "Jobs", description = "Job posting endpoints"),
        (name = "Applications", description = "Job application endpoints"),
        (name = "Staff", description = "Staff roster endpoints"),
        (name = "Appointments", description = "Appointment booking endpoints"),
        (name = "Notifications", description = "Notification endpoints"),
        (name = "Admin", description = "Admin order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
