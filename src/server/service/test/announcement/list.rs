use super::*;

/// Tests listing announcements with a markdown body.
///
/// Expected: Ok with the newest first and the body rendered to HTML
#[tokio::test]
async fn lists_newest_first_with_html() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    factory::create_announcement(db, "Schedule", None).await?;
    factory::create_announcement(db, "Venue map", Some("uploads/1/map.pdf")).await?;

    let announcements = AnnouncementService::new(db, &storage).list().await?;

    assert_eq!(announcements.len(), 2);
    assert_eq!(announcements[0].title, "Venue map");
    assert_eq!(announcements[0].attachment_name.as_deref(), Some("map.pdf"));
    assert!(announcements[1].body_html.contains("<strong>Friday</strong>"));

    Ok(())
}
