use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tests opening a ticket with an attachment.
///
/// Expected: Ok with an INSP- number, the attachment stored and an acknowledgement queued
#[tokio::test]
async fn creates_ticket_with_attachment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let created = SupportService::new(db)
        .create_ticket(
            &principal(&user),
            CreateTicketParams {
                subject: "Payment not reflected".to_string(),
                message: "I paid yesterday but my registration is still pending".to_string(),
                category: TicketCategory::Payment,
                priority: TicketPriority::High,
                attachments: vec![AttachmentInput {
                    key: format!("support/{}/1-receipt.png", user.id),
                    file_name: "receipt.png".to_string(),
                    content_type: "image/png".to_string(),
                    size: 2048,
                }],
            },
        )
        .await?;

    assert!(created.ticket_number.starts_with("INSP-"));

    let tickets = SupportTicket::find().all(db).await?;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].status, "OPEN");
    assert_eq!(tickets[0].priority, "HIGH");
    assert_eq!(SupportAttachment::find().count(db).await?, 1);

    let jobs = OutboxJob::find().all(db).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].kind, "ticket_created");

    Ok(())
}

/// Tests that two tickets get different numbers.
///
/// Expected: Ok with distinct ticket numbers
#[tokio::test]
async fn allocates_distinct_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = SupportService::new(db);

    let mut numbers = Vec::new();
    for _ in 0..2 {
        let created = service
            .create_ticket(
                &principal(&user),
                CreateTicketParams {
                    subject: "Cannot log in".to_string(),
                    message: "The login button does nothing".to_string(),
                    category: TicketCategory::Technical,
                    priority: TicketPriority::Medium,
                    attachments: Vec::new(),
                },
            )
            .await?;
        numbers.push(created.ticket_number);
    }

    assert_ne!(numbers[0], numbers[1]);

    Ok(())
}

fn ticket_params() -> CreateTicketParams {
    CreateTicketParams {
        subject: "Cannot access dashboard".to_string(),
        message: "The dashboard keeps redirecting me to the login page".to_string(),
        category: TicketCategory::Technical,
        priority: TicketPriority::Medium,
        attachments: Vec::new(),
    }
}

/// Hands out `numbers` in order, repeating the last one.
fn sequence(numbers: Vec<String>) -> impl Fn() -> String + Send + Sync {
    let next = AtomicUsize::new(0);
    move || {
        let index = next.fetch_add(1, Ordering::SeqCst).min(numbers.len() - 1);
        numbers[index].clone()
    }
}

/// Tests every one of the five drawn numbers already being taken.
///
/// Expected: Err(Conflict), no ticket and no outbox job written
#[tokio::test]
async fn gives_up_after_five_colliding_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let taken: Vec<String> = (1..=5).map(|i| format!("INSP-TAKEN-000{}", i)).collect();
    for number in &taken {
        factory::support::TicketFactory::new(db, user.id)
            .ticket_number(number.clone())
            .build()
            .await?;
    }

    let result = SupportService::new(db)
        .with_ticket_numbers(sequence(taken))
        .create_ticket(&principal(&user), ticket_params())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(SupportTicket::find().count(db).await?, 5);
    assert_eq!(OutboxJob::find().count(db).await?, 0);

    Ok(())
}

/// Tests a free number found on the last allowed draw.
///
/// Expected: Ok with the fifth number
#[tokio::test]
async fn uses_fifth_number_after_four_collisions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_support_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let mut numbers: Vec<String> = (1..=4).map(|i| format!("INSP-TAKEN-000{}", i)).collect();
    for number in &numbers {
        factory::support::TicketFactory::new(db, user.id)
            .ticket_number(number.clone())
            .build()
            .await?;
    }
    numbers.push("INSP-FREE-0005".to_string());

    let created = SupportService::new(db)
        .with_ticket_numbers(sequence(numbers))
        .create_ticket(&principal(&user), ticket_params())
        .await?;

    assert_eq!(created.ticket_number, "INSP-FREE-0005");
    assert_eq!(SupportTicket::find().count(db).await?, 5);

    Ok(())
}
