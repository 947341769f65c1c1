use chrono::{Duration, TimeZone, Utc};
use invite_history::{
    filter_invitations, HistoryConfig, Invitation, InvitationHistory, InvitationHistoryFilter,
    InvitationStatus,
};

fn sent_invitations() -> Vec<Invitation> {
    let start = Utc.with_ymd_and_hms(2021, 6, 1, 9, 0, 0).unwrap();
    let statuses = [
        InvitationStatus::Claimed,
        InvitationStatus::Pending,
        InvitationStatus::Pending,
        InvitationStatus::Claimed,
        InvitationStatus::Pending,
    ];

    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            Invitation::with_created_at(
                format!("https://invitations.example/i/{}", i),
                *status,
                start + Duration::hours(i as i64),
            )
            .tagged(format!("friend {}", i))
        })
        .collect()
}

#[test]
fn test_user_switches_between_segments() {
    let _ = tracing_subscriber::fmt::try_init();

    let config = HistoryConfig::from_json(r#"{"default_filter": "all"}"#).unwrap();
    let mut history = InvitationHistory::new(config);
    history.set_invitations(sent_invitations());

    let counts = history.counts();
    assert_eq!(counts.all, 5);
    assert_eq!(counts.pending, 3);
    assert_eq!(counts.claimed, 2);

    for filter in InvitationHistoryFilter::iter() {
        assert!(history.set_filter_index(filter.index()).is_ok());
        assert_eq!(history.filter(), filter);
        assert_eq!(history.len(), counts.get(filter));
        assert!(history.visible().iter().all(|i| filter.matches(i)));
    }

    // Newest first: the last invitation sent heads every segment
    history.set_filter(InvitationHistoryFilter::Pending);
    assert_eq!(history.visible()[0].tag.as_deref(), Some("friend 4"));
    history.set_filter(InvitationHistoryFilter::Claimed);
    assert_eq!(history.visible()[0].tag.as_deref(), Some("friend 3"));
}

#[test]
fn test_model_agrees_with_free_filter() {
    let invitations = sent_invitations();
    let mut history = InvitationHistory::new(HistoryConfig {
        newest_first: false,
        ..Default::default()
    });
    history.set_invitations(invitations.clone());

    for filter in InvitationHistoryFilter::ALL {
        history.set_filter(filter);
        let expected = filter_invitations(&invitations, filter);
        let visible: Vec<Invitation> = history.visible().into_iter().cloned().collect();
        assert_eq!(visible, expected);
    }
}

#[test]
fn test_replacing_records_keeps_filter() {
    let mut history = InvitationHistory::default();
    history.set_filter(InvitationHistoryFilter::Claimed);
    history.set_invitations(sent_invitations());
    assert_eq!(history.len(), 2);

    history.set_invitations(Vec::new());
    assert_eq!(history.filter(), InvitationHistoryFilter::Claimed);
    assert!(history.is_empty());
    assert!(history.visible().is_empty());
}
