use shoecount_core::{
    Card, CountSession, CountingSystem, DealResult, Event, EventBus, Rank, RngState, SessionError,
    Shoe, Suit,
};

fn session() -> (CountSession, EventBus) {
    (CountSession::new(RngState::from_seed(1)), EventBus::default())
}

fn deal(session: &mut CountSession, events: &mut EventBus) -> (Card, f64, usize) {
    match session.deal_next(events).expect("active session") {
        DealResult::Dealt {
            card,
            running_count,
            cards_remaining,
        } => (card, running_count, cards_remaining),
        DealResult::Complete => panic!("shoe exhausted early"),
    }
}

#[test]
fn hi_lo_single_deck_opening_sequence() {
    let (mut session, mut events) = session();
    let mut cards = vec![
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Hearts),
    ];
    // Pad to a full single deck so the remaining-card math matches a real run.
    let base = Shoe::new(1);
    let opening = cards.clone();
    cards.extend(
        base.cards()
            .iter()
            .copied()
            .filter(|card| !opening.contains(card)),
    );
    assert_eq!(cards.len(), 52);
    session.start_with_shoe(Shoe::from_cards(cards), CountingSystem::HiLo, &mut events);

    let first = deal(&mut session, &mut events);
    assert_eq!(first, (Card::new(Rank::Two, Suit::Hearts), 1.0, 51));
    assert_eq!(session.cards_dealt(), 1);

    let second = deal(&mut session, &mut events);
    assert_eq!(second, (Card::new(Rank::Ten, Suit::Hearts), 0.0, 50));
    assert_eq!(session.cards_dealt(), 2);

    let third = deal(&mut session, &mut events);
    assert_eq!(third, (Card::new(Rank::Ace, Suit::Hearts), -1.0, 49));
    assert_eq!(session.cards_dealt(), 3);
}

#[test]
fn true_count_divides_by_whole_shoe_fraction() {
    let (mut session, mut events) = session();
    session.start(2, CountingSystem::Ko, &mut events).unwrap();
    for _ in 0..100 {
        deal(&mut session, &mut events);
    }
    assert_eq!(session.cards_remaining(), 4);
    // decks_remaining = 4 / 104, so the true count scales the running count
    // by 104 / 4 = 26.
    let expected = session.running_count() * 104.0 / 4.0;
    assert_eq!(session.true_count(), expected);
}

#[test]
fn true_count_is_zero_with_nothing_left() {
    let (mut session, mut events) = session();
    session.start(1, CountingSystem::HiLo, &mut events).unwrap();
    for _ in 0..52 {
        deal(&mut session, &mut events);
    }
    assert_eq!(session.cards_remaining(), 0);
    assert_eq!(session.true_count(), 0.0);
}

#[test]
fn exhausted_shoe_reports_complete_without_mutation() {
    let (mut session, mut events) = session();
    let cards = vec![
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];
    session.start_with_shoe(Shoe::from_cards(cards), CountingSystem::HiLo, &mut events);
    for _ in 0..3 {
        deal(&mut session, &mut events);
    }
    let running = session.running_count();
    let dealt = session.cards_dealt();

    assert_eq!(session.deal_next(&mut events).unwrap(), DealResult::Complete);
    assert_eq!(session.running_count(), running);
    assert_eq!(session.cards_dealt(), dealt);
    assert_eq!(session.cards_remaining(), 0);

    let exhausted = events
        .drain()
        .find(|event| matches!(event, Event::ShoeExhausted { .. }));
    assert_eq!(
        exhausted,
        Some(Event::ShoeExhausted {
            cards_dealt: 3,
            running_count: running,
            true_count: 0.0,
        })
    );
}

#[test]
fn summary_reflects_the_live_counters() {
    let (mut session, mut events) = session();
    session
        .start(1, CountingSystem::OmegaII, &mut events)
        .unwrap();
    for _ in 0..10 {
        deal(&mut session, &mut events);
    }
    let summary = session.summary();
    assert_eq!(summary.cards_dealt, 10);
    assert_eq!(summary.cards_remaining, 42);
    assert_eq!(summary.running_count, session.running_count());
    assert_eq!(summary.true_count, session.true_count());
}

#[test]
fn invalid_starts_never_build_a_shoe() {
    let (mut session, mut events) = session();
    assert!(matches!(
        session.start(0, CountingSystem::HiLo, &mut events),
        Err(SessionError::InvalidDeckCount(_))
    ));
    assert!(!session.is_active());
    assert!(matches!(
        session.deal_next(&mut events),
        Err(SessionError::NotStarted)
    ));
}

#[test]
fn shuffled_runs_still_count_every_card() {
    let (mut session, mut events) = session();
    session.start(2, CountingSystem::Ko, &mut events).unwrap();
    let mut dealt = 0usize;
    loop {
        match session.deal_next(&mut events).unwrap() {
            DealResult::Dealt { .. } => dealt += 1,
            DealResult::Complete => break,
        }
    }
    assert_eq!(dealt, 104);
    // KO over any number of full decks nets +4 per deck.
    assert_eq!(session.running_count(), 8.0);
}
