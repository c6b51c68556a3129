//! Integration tests for repository CRUD across the content collections.

use assert_matches::assert_matches;
use hkv_core::forms::FormField;
use hkv_core::grocery::{compute_totals, KitSelection};
use hkv_db::models::campaign::{CampaignListParams, CreateCampaign, UpdateCampaign};
use hkv_db::models::careers::{CreateJobApplication, CreateJobOpening, JobListParams};
use hkv_db::models::donor_wall::{CreateDonorWallEntry, DonorWallListParams, UpdateDonorWallEntry};
use hkv_db::models::form::{CreateForm, UpdateForm};
use hkv_db::models::gallery::{CreateGalleryPhoto, CreateGalleryVideo, GalleryListParams};
use hkv_db::models::grocery::{CreateGroceryDonation, CreateGroceryItem};
use hkv_db::repositories::{
    CampaignRepo, DashboardRepo, DonorWallRepo, FormRepo, FormSubmissionRepo, GalleryPhotoRepo,
    GalleryVideoRepo, GroceryDonationRepo, GroceryItemRepo, JobApplicationRepo, JobOpeningRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_campaign(title: &str, category: Option<&str>) -> CreateCampaign {
    CreateCampaign {
        title: title.to_string(),
        slug: None,
        description: None,
        category: category.map(str::to_string),
        goal_amount: 50_000.0,
        deadline: None,
        donation_options: None,
        image_path: None,
        is_active: None,
    }
}

fn new_wall_entry(name: &str, amount: f64) -> CreateDonorWallEntry {
    CreateDonorWallEntry {
        donor_name: name.to_string(),
        amount,
        message: None,
        location: None,
        is_visible: None,
        display_order: None,
        donated_on: None,
    }
}

fn new_grocery_item(name: &str, unit_price: f64) -> CreateGroceryItem {
    CreateGroceryItem {
        name: name.to_string(),
        unit: "kg".to_string(),
        unit_price,
        description: None,
        image_path: None,
        is_active: None,
        sort_order: None,
    }
}

fn text_field(name: &str) -> FormField {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "label": name,
        "type": "text",
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_defaults_and_partial_update(pool: PgPool) {
    let created = CampaignRepo::create(&pool, &new_campaign("Annadan", None), "annadan")
        .await
        .unwrap();
    assert!(created.is_active);
    assert_eq!(created.raised_amount, 0.0);
    assert_eq!(created.donor_count, 0);
    assert!(created.donation_options.is_empty());

    let update = UpdateCampaign {
        goal_amount: Some(75_000.0),
        ..Default::default()
    };
    let updated = CampaignRepo::update(&pool, created.id, &update, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.goal_amount, 75_000.0);
    assert_eq!(updated.title, "Annadan");
    assert_eq!(updated.slug, "annadan");
    assert!(updated.updated_at >= created.updated_at);

    let missing = CampaignRepo::update(&pool, 999_999, &update, None).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_slug_is_unique(pool: PgPool) {
    CampaignRepo::create(&pool, &new_campaign("One", None), "same-slug")
        .await
        .unwrap();
    let err = CampaignRepo::create(&pool, &new_campaign("Two", None), "same-slug")
        .await
        .unwrap_err();

    assert_matches!(&err, sqlx::Error::Database(db) if db.constraint() == Some("uq_campaigns_slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_filters_and_toggle(pool: PgPool) {
    let a = CampaignRepo::create(&pool, &new_campaign("A", Some("food")), "a")
        .await
        .unwrap();
    CampaignRepo::create(&pool, &new_campaign("B", Some("education")), "b")
        .await
        .unwrap();

    let toggled = CampaignRepo::toggle_active(&pool, a.id).await.unwrap().unwrap();
    assert!(!toggled.is_active);

    let active = CampaignListParams {
        active_only: true,
        ..Default::default()
    };
    assert_eq!(CampaignRepo::count(&pool, &active).await.unwrap(), 1);

    let food = CampaignListParams {
        category: Some("food".to_string()),
        ..Default::default()
    };
    let listed = CampaignRepo::list(&pool, &food).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, a.id);

    let by_slug = CampaignRepo::find_by_slug(&pool, "b").await.unwrap().unwrap();
    assert_eq!(by_slug.title, "B");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_limit_is_clamped(pool: PgPool) {
    for i in 0..3 {
        CampaignRepo::create(&pool, &new_campaign("C", None), &format!("c-{i}"))
            .await
            .unwrap();
    }

    let zero = CampaignListParams {
        limit: Some(0),
        offset: Some(-5),
        ..Default::default()
    };
    assert_eq!(CampaignRepo::list(&pool, &zero).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Donor wall
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donor_wall_tier_is_derived(pool: PgPool) {
    let entry = DonorWallRepo::create(&pool, &new_wall_entry("Radha", 50_000.0))
        .await
        .unwrap();
    assert_eq!(entry.tier, "gold");

    let update = UpdateDonorWallEntry {
        amount: Some(9_999.0),
        ..Default::default()
    };
    let updated = DonorWallRepo::update(&pool, entry.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.tier, "supporter");

    let untouched = DonorWallRepo::update(
        &pool,
        entry.id,
        &UpdateDonorWallEntry {
            location: Some("Vrindavan".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(untouched.tier, "supporter");
    assert_eq!(untouched.location.as_deref(), Some("Vrindavan"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donor_wall_visibility(pool: PgPool) {
    let hidden = DonorWallRepo::create(&pool, &new_wall_entry("Hidden", 100.0))
        .await
        .unwrap();
    DonorWallRepo::create(&pool, &new_wall_entry("Shown", 200_000.0))
        .await
        .unwrap();

    DonorWallRepo::toggle_visibility(&pool, hidden.id)
        .await
        .unwrap()
        .unwrap();

    let visible = DonorWallRepo::list_visible(&pool).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].tier, "platinum");

    let params = DonorWallListParams {
        tier: Some("supporter".to_string()),
        ..Default::default()
    };
    assert_eq!(DonorWallRepo::count(&pool, &params).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Grocery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grocery_checkout_stores_priced_lines(pool: PgPool) {
    let rice = GroceryItemRepo::create(&pool, &new_grocery_item("Rice", 60.0))
        .await
        .unwrap();
    let dal = GroceryItemRepo::create(&pool, &new_grocery_item("Toor Dal", 140.0))
        .await
        .unwrap();

    let selection = vec![
        KitSelection {
            item_id: rice.id,
            quantity: 5,
        },
        KitSelection {
            item_id: dal.id,
            quantity: 2,
        },
    ];
    let catalogue: Vec<_> = GroceryItemRepo::find_active_by_ids(&pool, &[rice.id, dal.id])
        .await
        .unwrap()
        .iter()
        .map(|item| item.priced())
        .collect();
    let totals = compute_totals(&selection, &catalogue, 0.0).unwrap();

    let input = CreateGroceryDonation {
        donor_name: "Madhav".to_string(),
        donor_email: "madhav@example.org".to_string(),
        donor_phone: None,
        items: selection,
        gateway_order_id: None,
        notes: None,
    };
    let donation = GroceryDonationRepo::create(&pool, &input, &totals)
        .await
        .unwrap();

    assert_eq!(donation.payment_status, "pending");
    assert_eq!(donation.items.0.len(), 2);
    assert_eq!(donation.items.0[0].name, "Rice");
    assert_eq!(donation.subtotal, 580.0);
    assert_eq!(donation.total, 580.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_items_are_not_priced(pool: PgPool) {
    let mut input = new_grocery_item("Ghee", 600.0);
    input.is_active = Some(false);
    let ghee = GroceryItemRepo::create(&pool, &input).await.unwrap();

    let found = GroceryItemRepo::find_active_by_ids(&pool, &[ghee.id])
        .await
        .unwrap();
    assert!(found.is_empty());
    assert_eq!(GroceryItemRepo::list(&pool, true).await.unwrap().len(), 0);
    assert_eq!(GroceryItemRepo::list(&pool, false).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_video_views_increment(pool: PgPool) {
    let input = CreateGalleryVideo {
        title: "Janmashtami".to_string(),
        description: None,
        video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        thumbnail_url: None,
        category: Some("festivals".to_string()),
        is_active: None,
        display_order: None,
    };
    let video = GalleryVideoRepo::create(&pool, &input, None).await.unwrap();
    assert_eq!(video.views, 0);

    GalleryVideoRepo::increment_views(&pool, video.id).await.unwrap();
    let viewed = GalleryVideoRepo::increment_views(&pool, video.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(viewed.views, 2);

    let params = GalleryListParams {
        category: Some("festivals".to_string()),
        ..Default::default()
    };
    assert_eq!(GalleryVideoRepo::count(&pool, &params).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photo_delete_returns_row(pool: PgPool) {
    let input = CreateGalleryPhoto {
        title: "Deity darshan".to_string(),
        description: None,
        category: None,
        file_path: "images/abc.jpg".to_string(),
        original_filename: Some("darshan.jpg".to_string()),
        file_size_bytes: 1024,
        width: Some(800),
        height: Some(600),
        is_active: None,
        display_order: None,
    };
    let photo = GalleryPhotoRepo::create(&pool, &input).await.unwrap();

    let removed = GalleryPhotoRepo::delete(&pool, photo.id).await.unwrap().unwrap();
    assert_eq!(removed.file_path, "images/abc.jpg");
    assert!(GalleryPhotoRepo::delete(&pool, photo.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_fields_round_trip_and_cascade(pool: PgPool) {
    let input = CreateForm {
        name: "Volunteer".to_string(),
        slug: None,
        description: None,
        fields: vec![text_field("full_name"), text_field("city")],
        submit_label: None,
        success_message: None,
        is_active: None,
    };
    let form = FormRepo::create(&pool, &input, "volunteer").await.unwrap();
    assert_eq!(form.fields.0.len(), 2);
    assert_eq!(form.fields.0[1].name, "city");

    let updated = FormRepo::update(
        &pool,
        form.id,
        &UpdateForm {
            fields: Some(vec![text_field("email")]),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.fields.0.len(), 1);
    assert_eq!(updated.name, "Volunteer");

    let mut values = serde_json::Map::new();
    values.insert("email".into(), serde_json::json!("a@b.org"));
    let submission = FormSubmissionRepo::create(&pool, form.id, &values)
        .await
        .unwrap();
    assert_eq!(submission.data["email"], "a@b.org");
    assert_eq!(FormSubmissionRepo::count_by_form(&pool, form.id).await.unwrap(), 1);

    // A submission is only reachable through its own form.
    assert!(FormSubmissionRepo::find_by_id(&pool, form.id + 1, submission.id)
        .await
        .unwrap()
        .is_none());

    assert!(FormRepo::delete(&pool, form.id).await.unwrap());
    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM form_submissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

// ---------------------------------------------------------------------------
// Careers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_applications_follow_job(pool: PgPool) {
    let job = JobOpeningRepo::create(
        &pool,
        &CreateJobOpening {
            title: "Teacher".to_string(),
            department: Some("Education".to_string()),
            location: None,
            employment_type: None,
            description: None,
            requirements: Some(vec!["B.Ed".to_string()]),
            closes_on: None,
            is_active: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(job.employment_type, "full_time");
    assert_eq!(job.requirements, vec!["B.Ed".to_string()]);

    let application = JobApplicationRepo::create(
        &pool,
        job.id,
        &CreateJobApplication {
            applicant_name: "Lalita".to_string(),
            email: "lalita@example.org".to_string(),
            phone: None,
            cover_letter: None,
            resume_path: Some("documents/cv.pdf".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(application.status, "received");

    let reviewed = JobApplicationRepo::update_status(&pool, application.id, "shortlisted")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reviewed.status, "shortlisted");

    let filtered = JobOpeningRepo::list(
        &pool,
        &JobListParams {
            active_only: true,
            department: Some("Education".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(filtered.len(), 1);

    assert!(JobOpeningRepo::delete(&pool, job.id).await.unwrap());
    assert!(JobApplicationRepo::find_by_id(&pool, application.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_summary_counts(pool: PgPool) {
    CampaignRepo::create(&pool, &new_campaign("Dash", None), "dash")
        .await
        .unwrap();
    DonorWallRepo::create(&pool, &new_wall_entry("Wall", 10.0))
        .await
        .unwrap();

    let summary = DashboardRepo::summary(&pool).await.unwrap();
    assert_eq!(summary.campaigns_total, 1);
    assert_eq!(summary.campaigns_active, 1);
    assert_eq!(summary.donor_wall_entries, 1);
    assert_eq!(summary.donations_total, 0);
    assert_eq!(summary.amount_raised, 0.0);
}
