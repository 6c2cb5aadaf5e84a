mod common;

use recruitment_records::dto::decision_dto::{
    CreateManagerDecisionPayload, CreateTeamLeadDecisionPayload,
};
use recruitment_records::dto::email_log_dto::{CreateEmailLogPayload, EmailLogQuery};
use recruitment_records::dto::meeting_dto::{CreateMeetingReviewPayload, CreateMeetingSchedulePayload};
use recruitment_records::dto::profile_dto::CreateProfilePayload;
use recruitment_records::error::Error;
use recruitment_records::models::record_label::{RecordKind, RecordLabel};
use recruitment_records::models::team_lead_decision::Verdict;
use recruitment_records::AppState;

use common::{application_payload, job_payload, seed_user, test_pool, unique_tag};

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn email_logs_are_listed_newest_first() {
    let pool = test_pool().await;
    let state = AppState::new(pool, "media");
    let applicant = format!("Eve Stone {}", unique_tag());

    let first = state
        .email_log_service
        .record(CreateEmailLogPayload {
            applicant: Some(applicant.clone()),
            sender_name: "HR Team".into(),
            to_email: "eve@example.com".into(),
            subject: "Application received".into(),
            message: "Thanks for applying".into(),
        })
        .await
        .unwrap();
    let second = state
        .email_log_service
        .record(CreateEmailLogPayload {
            applicant: Some(applicant.clone()),
            sender_name: "HR Team".into(),
            to_email: "eve@example.com".into(),
            subject: "Interview invitation".into(),
            message: "Please pick a slot".into(),
        })
        .await
        .unwrap();

    let logs = state
        .email_log_service
        .list(EmailLogQuery { applicant: Some(applicant), limit: None })
        .await
        .unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, second.id);
    assert_eq!(logs[1].to_string(), "HR Team to eve@example.com - Application received");

    let bad = state
        .email_log_service
        .record(CreateEmailLogPayload {
            applicant: None,
            sender_name: "HR Team".into(),
            to_email: "not an address".into(),
            subject: "x".into(),
            message: "x".into(),
        })
        .await;
    assert!(matches!(bad, Err(Error::Validation(_))));

    state.email_log_service.delete(first.id).await.unwrap();
    state.email_log_service.delete(second.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn admin_labels_join_related_records() {
    let pool = test_pool().await;
    let state = AppState::new(pool, "media");
    let user = seed_user(&state.pool, "gil").await;
    let job_name = format!("SRE {}", unique_tag());
    let job = state.job_service.create(job_payload(&job_name, None)).await.unwrap();
    let last_name = unique_tag();

    let application = state
        .job_application_service
        .create(application_payload(user.id, Some(job.id), "Gil", &last_name))
        .await
        .unwrap();
    let schedule = state
        .meeting_schedule_service
        .create(CreateMeetingSchedulePayload {
            job_application_id: application.id,
            ..Default::default()
        })
        .await
        .unwrap();
    let review = state
        .meeting_review_service
        .create(CreateMeetingReviewPayload {
            meeting_schedule_id: schedule.id,
            reviewer_id: None,
            decision: "maybe".into(),
            reason: "Free-text decisions are allowed".into(),
        })
        .await
        .unwrap();

    let labels = state.admin_service.labels(RecordKind::JobApplication).await.unwrap();
    let label = labels.iter().find(|l| l.id == application.id).unwrap();
    assert_eq!(label.label, format!("Gil {} - {}", last_name, job_name));

    let labels = state.admin_service.labels(RecordKind::MeetingSchedule).await.unwrap();
    let label = labels.iter().find(|l| l.id == schedule.id).unwrap();
    assert_eq!(label.label, format!("Meeting for {}", user.username));

    let labels = state.admin_service.labels(RecordKind::MeetingReview).await.unwrap();
    let label = labels.iter().find(|l| l.id == review.id).unwrap();
    assert_eq!(label.label, format!("Review for Gil {}", last_name));

    let labels = state.admin_service.labels(RecordKind::Job).await.unwrap();
    assert!(labels.iter().any(|l| l.id == job.id && l.label == job_name));

    state.user_service.delete(user.id).await.unwrap();
    state.job_service.delete(job.id).await.unwrap();
}

fn label_of(labels: &[RecordLabel], id: i64) -> &str {
    labels
        .iter()
        .find(|l| l.id == id)
        .map(|l| l.label.as_str())
        .expect("label for seeded row")
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn admin_labels_cover_every_record_kind() {
    let pool = test_pool().await;
    let state = AppState::new(pool, "media");
    let user = seed_user(&state.pool, "lbl").await;
    let last_name = unique_tag();

    let profile = state
        .profile_service
        .create(CreateProfilePayload {
            user_id: user.id,
            is_teamlead: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let orphan = state
        .job_application_service
        .create(application_payload(user.id, None, "Ivy", &last_name))
        .await
        .unwrap();
    let linked = state
        .team_lead_decision_service
        .create(CreateTeamLeadDecisionPayload {
            applicant_id: Some(user.id),
            decision: Verdict::Accept,
            reason: "Strong systems background".into(),
            reviewer_id: None,
        })
        .await
        .unwrap();
    let unlinked = state
        .team_lead_decision_service
        .create(CreateTeamLeadDecisionPayload {
            applicant_id: None,
            decision: Verdict::Reject,
            reason: "Walk-in candidate".into(),
            reviewer_id: None,
        })
        .await
        .unwrap();
    let manager_applicant = format!("Ivy {}", last_name);
    let manager = state
        .manager_decision_service
        .create(CreateManagerDecisionPayload {
            applicant: manager_applicant.clone(),
            approved_by_manager: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let email = state
        .email_log_service
        .record(CreateEmailLogPayload {
            applicant: Some(manager_applicant.clone()),
            sender_name: "HR Team".into(),
            to_email: "ivy@example.com".into(),
            subject: "Offer".into(),
            message: "Welcome aboard".into(),
        })
        .await
        .unwrap();

    let labels = state.admin_service.labels(RecordKind::Profile).await.unwrap();
    assert_eq!(label_of(&labels, profile.id), user.username);

    let labels = state.admin_service.labels(RecordKind::JobApplication).await.unwrap();
    assert_eq!(label_of(&labels, orphan.id), format!("Ivy {}", last_name));

    let labels = state.admin_service.labels(RecordKind::TeamLeadDecision).await.unwrap();
    assert_eq!(
        label_of(&labels, linked.id),
        format!("{} - Decision: accept", user.username)
    );
    assert_eq!(label_of(&labels, unlinked.id), "Decision: reject (No MeetingReview)");

    let labels = state.admin_service.labels(RecordKind::ManagerDecision).await.unwrap();
    assert_eq!(label_of(&labels, manager.id), manager_applicant);

    let labels = state.admin_service.labels(RecordKind::EmailLog).await.unwrap();
    assert_eq!(label_of(&labels, email.id), "HR Team to ivy@example.com - Offer");

    state.team_lead_decision_service.delete(unlinked.id).await.unwrap();
    state.manager_decision_service.delete(manager.id).await.unwrap();
    state.email_log_service.delete(email.id).await.unwrap();
    state.user_service.delete(user.id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn attendee_set_is_replaced_wholesale() {
    let pool = test_pool().await;
    let state = AppState::new(pool, "media");
    let applicant = seed_user(&state.pool, "att_app").await;
    let hr = seed_user(&state.pool, "att_hr").await;
    let lead = seed_user(&state.pool, "att_lead").await;
    let member = seed_user(&state.pool, "att_member").await;

    let application = state
        .job_application_service
        .create(application_payload(applicant.id, None, "Max", &unique_tag()))
        .await
        .unwrap();
    let schedule = state
        .meeting_schedule_service
        .create(CreateMeetingSchedulePayload {
            job_application_id: application.id,
            scheduled_by: Some(hr.id),
            attendee_ids: vec![hr.id, lead.id],
            ..Default::default()
        })
        .await
        .unwrap();

    let ids = |users: Vec<recruitment_records::models::user::User>| -> Vec<i64> {
        users.into_iter().map(|u| u.id).collect()
    };

    let attendees = state.meeting_schedule_service.attendees(schedule.id).await.unwrap();
    assert_eq!(ids(attendees), vec![hr.id, lead.id]);

    state
        .meeting_schedule_service
        .set_attendees(schedule.id, &[member.id, member.id])
        .await
        .unwrap();
    let attendees = state.meeting_schedule_service.attendees(schedule.id).await.unwrap();
    assert_eq!(ids(attendees), vec![member.id]);

    state
        .meeting_schedule_service
        .set_attendees(schedule.id, &[])
        .await
        .unwrap();
    let attendees = state.meeting_schedule_service.attendees(schedule.id).await.unwrap();
    assert!(attendees.is_empty());

    let missing = state
        .meeting_schedule_service
        .set_attendees(i64::MAX, &[member.id])
        .await;
    assert!(matches!(missing, Err(Error::NotFound(_))));

    for user in [applicant, hr, lead, member] {
        state.user_service.delete(user.id).await.unwrap();
    }
}
