use chrono::{Duration, Utc};
use uuid::Uuid;

use salonhub_api::{
    dto::{
        applications::CreateApplicationRequest,
        auth::RegisterRequest,
        brands::CreateBrandRequest,
        jobs::CreateJobRequest,
        orders::UpdateOrderStatusRequest,
    },
    error::AppError,
    middleware::auth::AuthUser,
    models::Role,
    routes::params::{JobListQuery, ListParams, OrderListQuery, StaffListQuery, UserListQuery},
    services::{
        application_service, appointment_service, auth_service, brand_service, job_service,
        order_service, staff_service, user_service,
    },
    state::AppState,
    store::MemoryStore,
};

fn seeded_state() -> anyhow::Result<AppState> {
    Ok(AppState::new(MemoryStore::seeded()?))
}

fn admin() -> AuthUser {
    AuthUser {
        user_id: Uuid::new_v4(),
        role: Role::Admin,
    }
}

fn customer(user_id: Uuid) -> AuthUser {
    AuthUser {
        user_id,
        role: Role::User,
    }
}

// GET /api/jobs?search=stylist&page=1&limit=10 over the three seeded jobs.
#[tokio::test]
async fn job_search_finds_only_the_stylist_posting() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let query = JobListQuery {
        list: ListParams {
            page: Some(1),
            limit: Some(10),
            search: Some("stylist".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let resp = job_service::list_jobs(&state, query).await?;

    let jobs = resp.data.expect("job list").items;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Senior Hair Stylist");

    let pagination = resp.pagination.expect("pagination block");
    assert_eq!(pagination.total_count, 1);
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.limit, 10);
    Ok(())
}

// GET /api/staff?specialization=Makeup&active=true: substring match on the
// specialization, exact match on the active flag.
#[tokio::test]
async fn staff_filters_combine_substring_and_exact_predicates() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let query = StaffListQuery {
        specialization: Some("Makeup".into()),
        active: Some(true),
        ..Default::default()
    };
    let resp = staff_service::list_staff(&state, query).await?;

    let members = resp.data.expect("staff list").items;
    assert!(!members.is_empty());
    for member in &members {
        assert!(member.is_active);
        assert!(member.specialization.to_lowercase().contains("makeup"));
    }
    // The inactive makeup artist from the seed data must be filtered out.
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Amara Diallo");
    Ok(())
}

#[tokio::test]
async fn job_with_past_closing_date_is_rejected() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let payload = CreateJobRequest {
        title: Some("Spa Manager".into()),
        description: Some("Runs the day spa".into()),
        location: Some("Utrecht".into()),
        employment_type: None,
        status: None,
        closing_date: Some(Utc::now() - Duration::days(1)),
    };
    let err = job_service::create_job(&state, &admin(), payload)
        .await
        .expect_err("past closing date must be rejected");

    match err {
        AppError::BadRequest(message) => {
            assert_eq!(message, "Closing date must be in the future");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn deleting_an_absent_record_is_not_found() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let err = job_service::delete_job(&state, &admin(), Uuid::new_v4())
        .await
        .expect_err("absent job must 404");
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn customers_cannot_manage_the_catalog() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let payload = CreateBrandRequest {
        name: Some("Contraband".into()),
        description: None,
        logo_url: None,
        is_active: None,
    };
    let err = brand_service::create_brand(&state, &customer(Uuid::new_v4()), payload)
        .await
        .expect_err("customer role lacks the catalog capability");
    assert!(matches!(err, AppError::Forbidden));
    Ok(())
}

#[tokio::test]
async fn missing_required_field_is_a_bad_request() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let payload = CreateBrandRequest {
        name: Some("   ".into()),
        description: None,
        logo_url: None,
        is_active: None,
    };
    let err = brand_service::create_brand(&state, &admin(), payload)
        .await
        .expect_err("blank name must be rejected");
    match err {
        AppError::BadRequest(message) => assert_eq!(message, "Name is required"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn order_status_updates_are_validated_against_the_closed_set() -> anyhow::Result<()> {
    let state = seeded_state()?;
    let admin = admin();

    let orders = order_service::list_orders(&state, &admin, OrderListQuery::default())
        .await?
        .data
        .expect("order list")
        .items;
    let order_id = orders.first().expect("seeded orders").id;

    let err = order_service::update_order_status(
        &state,
        &admin,
        order_id,
        UpdateOrderStatusRequest {
            status: Some("teleported".into()),
        },
    )
    .await
    .expect_err("unknown status must be rejected");
    match err {
        AppError::BadRequest(message) => assert_eq!(message, "Invalid order status"),
        other => panic!("expected BadRequest, got {other:?}"),
    }

    let updated = order_service::update_order_status(
        &state,
        &admin,
        order_id,
        UpdateOrderStatusRequest {
            status: Some("shipped".into()),
        },
    )
    .await?;
    assert_eq!(
        updated.data.expect("order").status.as_str(),
        "shipped"
    );
    Ok(())
}

#[tokio::test]
async fn applications_are_rejected_for_jobs_that_are_not_open() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let drafts = job_service::list_jobs(
        &state,
        JobListQuery {
            status: Some("draft".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("job list")
    .items;
    let draft_job = drafts.first().expect("seeded draft job");

    let payload = CreateApplicationRequest {
        job_id: Some(draft_job.id),
        applicant_name: Some("Sam Carter".into()),
        email: Some("sam@example.com".into()),
        phone: None,
        resume_url: None,
    };
    let err = application_service::create_application(&state, payload)
        .await
        .expect_err("draft jobs are not open");
    match err {
        AppError::BadRequest(message) => {
            assert_eq!(message, "Job is not open for applications");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn duplicate_registration_email_is_rejected() -> anyhow::Result<()> {
    let state = seeded_state()?;

    let payload = RegisterRequest {
        name: Some("Impostor".into()),
        email: Some("admin@salonhub.dev".into()),
        password: Some("hunter2hunter2".into()),
    };
    let err = auth_service::register_user(&state, payload)
        .await
        .expect_err("seed admin already owns this address");
    match err {
        AppError::BadRequest(message) => assert_eq!(message, "Email is already taken"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn customers_only_see_their_own_appointments() -> anyhow::Result<()> {
    let state = seeded_state()?;
    let admin = admin();

    let users = user_service::list_users(
        &state,
        &admin,
        UserListQuery {
            list: ListParams {
                search: Some("jordan".into()),
                ..Default::default()
            },
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("user list")
    .items;
    let jordan = users.first().expect("seeded customer");

    let resp = appointment_service::list_appointments(
        &state,
        &customer(jordan.id),
        Default::default(),
    )
    .await?;

    let appointments = resp.data.expect("appointment list").items;
    assert!(!appointments.is_empty());
    assert!(appointments.iter().all(|a| a.user_id == jordan.id));

    // The seed data also holds appointments for other users.
    let all = appointment_service::list_appointments(&state, &admin, Default::default()).await?;
    let total = all.pagination.expect("pagination").total_count;
    assert!(total > appointments.len() as i64);
    Ok(())
}

#[tokio::test]
async fn malformed_numeric_parameters_fail_closed_to_defaults() -> anyhow::Result<()> {
    let params: ListParams = serde_json::from_value(serde_json::json!({
        "page": "abc",
        "limit": "15",
        "sortOrder": "sideways"
    }))?;
    assert_eq!(params.page, None);
    assert_eq!(params.limit, Some(15));
    assert_eq!(params.order(), None);

    let staff_query: StaffListQuery = serde_json::from_value(serde_json::json!({
        "page": "2",
        "active": "not-a-bool",
        "specialization": "Makeup"
    }))?;
    assert_eq!(staff_query.list.page, Some(2));
    assert_eq!(staff_query.active, None);
    assert_eq!(staff_query.specialization.as_deref(), Some("Makeup"));
    Ok(())
}
