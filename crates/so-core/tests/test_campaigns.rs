mod common;

use mockito::Matcher;
use so_core::models::{CampaignStatus, NewCampaign, TriggerAck};
use so_core::{Orchestrator, OrchestratorError};

use common::Harness;

fn spring_push() -> NewCampaign {
    NewCampaign {
        name: "Spring push".into(),
        platform: "TikTok".into(),
        content_strategy: "Behind the scenes".into(),
    }
}

async fn with_draft_campaign(h: &mut Harness) -> Orchestrator {
    let _create = h
        .mock_api_json(
            "POST",
            "/campaigns",
            201,
            r#"{"id":"c-1","name":"Spring push","platform":"TikTok","status":"Draft"}"#,
        )
        .await;
    let orchestrator = h.orchestrator().await;
    orchestrator.create_campaign(spring_push()).await.unwrap();
    orchestrator
}

#[tokio::test]
async fn create_campaign_posts_draft() {
    let mut h = Harness::new().await;
    let mock = h
        .api
        .mock("POST", "/campaigns")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "Spring push",
            "platform": "TikTok",
            "contentStrategy": "Behind the scenes",
            "status": "Draft",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":3,"name":"Spring push","status":"Draft","budget":500}"#)
        .create_async()
        .await;
    let orchestrator = h.orchestrator().await;

    let campaign = orchestrator.create_campaign(spring_push()).await.unwrap();
    mock.assert_async().await;
    assert_eq!(campaign.id, "3");
    assert_eq!(campaign.status, CampaignStatus::Draft);
    assert_eq!(campaign.extra["budget"], 500);
    assert_eq!(orchestrator.snapshot().await.campaigns, vec![campaign]);
}

#[tokio::test]
async fn create_campaign_failure_is_hard() {
    let mut h = Harness::new().await;
    let _m = h
        .api
        .mock("POST", "/campaigns")
        .with_status(422)
        .with_body("platform not supported")
        .create_async()
        .await;
    let orchestrator = h.orchestrator().await;

    let err = orchestrator.create_campaign(spring_push()).await.unwrap_err();
    assert!(matches!(err, OrchestratorError::CampaignCreationFailed(_)));
    assert_eq!(err.to_string(), "platform not supported");
    assert!(orchestrator.snapshot().await.campaigns.is_empty());
}

#[tokio::test]
async fn trigger_flips_draft_to_active() {
    let mut h = Harness::new().await;
    let orchestrator = with_draft_campaign(&mut h).await;
    let trigger = h
        .api
        .mock("POST", "/campaigns/c-1/trigger")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let ack = orchestrator.trigger_campaign("c-1").await.unwrap();
    trigger.assert_async().await;
    assert_eq!(
        ack,
        TriggerAck {
            success: true,
            message: "Campaign triggered".into(),
        }
    );

    let campaigns = orchestrator.snapshot().await.campaigns;
    assert_eq!(campaigns[0].status, CampaignStatus::Active);

    // The new status is written through.
    let reopened = h.orchestrator().await;
    assert_eq!(
        reopened.snapshot().await.campaigns[0].status,
        CampaignStatus::Active
    );
}

#[tokio::test]
async fn failed_trigger_mutates_nothing() {
    let mut h = Harness::new().await;
    let orchestrator = with_draft_campaign(&mut h).await;
    let _m = h
        .api
        .mock("POST", "/campaigns/c-1/trigger")
        .with_status(409)
        .with_body("campaign has no content")
        .create_async()
        .await;
    let before = orchestrator.snapshot().await;

    let err = orchestrator.trigger_campaign("c-1").await.unwrap_err();
    assert!(matches!(err, OrchestratorError::CampaignTriggerFailed(_)));
    assert_eq!(err.to_string(), "campaign has no content");
    assert_eq!(orchestrator.snapshot().await, before);
}

#[tokio::test]
async fn unknown_campaign_trigger_fails() {
    let mut h = Harness::new().await;
    let orchestrator = with_draft_campaign(&mut h).await;

    // Unmocked path: the stub answers 501.
    let err = orchestrator.trigger_campaign("missing").await.unwrap_err();
    assert!(matches!(err, OrchestratorError::CampaignTriggerFailed(_)));
    assert_eq!(
        orchestrator.snapshot().await.campaigns[0].status,
        CampaignStatus::Draft
    );
}

#[tokio::test]
async fn created_campaign_keeps_server_status() {
    let mut h = Harness::new().await;
    let _m = h
        .mock_api_json(
            "POST",
            "/campaigns",
            201,
            r#"{"id":5,"name":"Spring push","status":"Scheduled"}"#,
        )
        .await;
    let orchestrator = h.orchestrator().await;

    let campaign = orchestrator.create_campaign(spring_push()).await.unwrap();
    assert_eq!(campaign.status, CampaignStatus::Other("Scheduled".into()));

    let reopened = h.orchestrator().await;
    assert_eq!(
        reopened.snapshot().await.campaigns[0].status,
        CampaignStatus::Other("Scheduled".into())
    );
}

#[tokio::test]
async fn fetch_tolerates_unfamiliar_statuses() {
    let mut h = Harness::new().await;
    let _m = h
        .mock_api_json(
            "GET",
            "/campaigns",
            200,
            r#"[{"id":1,"name":"A","status":"Draft"},{"id":2,"name":"B","status":"draft"},{"id":3,"name":"C","status":null}]"#,
        )
        .await;
    let orchestrator = h.orchestrator().await;

    assert!(orchestrator.fetch_campaigns().await);
    let campaigns = orchestrator.snapshot().await.campaigns;
    assert_eq!(campaigns.len(), 3);
    assert_eq!(campaigns[0].status, CampaignStatus::Draft);
    assert_eq!(campaigns[1].status, CampaignStatus::Other("draft".into()));
    assert_eq!(campaigns[2].status, CampaignStatus::Draft);
}
