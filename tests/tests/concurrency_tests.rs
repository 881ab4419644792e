use ecdhx_algorithms::ec::Point;
use ecdhx_exchange::{ExchangeSummary, Initiator, KeyPolicy, Role};
use ecdhx_tests::harness::{dial_config, loopback_config, spawn_responder};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Barrier};
use std::thread;

const SESSIONS: usize = 100;

#[test]
fn hundred_concurrent_sessions() {
    let running = spawn_responder(loopback_config(KeyPolicy::Ephemeral), SESSIONS).unwrap();
    let config = Arc::new(dial_config(running.addr));
    let barrier = Arc::new(Barrier::new(SESSIONS));

    let clients: Vec<_> = (0..SESSIONS)
        .map(|_| {
            let config = Arc::clone(&config);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                Initiator::connect(&config)
            })
        })
        .collect();

    let initiators: Vec<ExchangeSummary> = clients
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    let outcomes = running.join().unwrap();
    assert_eq!(outcomes.len(), SESSIONS);

    let ids: HashSet<u64> = outcomes.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), SESSIONS);

    // responder view, keyed by the initiator's public point
    let mut by_initiator: HashMap<Point, ExchangeSummary> = HashMap::new();
    for outcome in outcomes {
        let summary = outcome.result.unwrap();
        assert_eq!(summary.role, Role::Responder);
        let key = summary.peer_public_key.point().clone();
        assert!(by_initiator.insert(key, summary).is_none());
    }

    let mut secrets = HashSet::new();
    for ours in &initiators {
        let theirs = by_initiator
            .get(ours.public_key.point())
            .expect("every initiator was served");
        assert_eq!(theirs.public_key, ours.peer_public_key);
        assert!(ours.shared_secret.ct_eq(&theirs.shared_secret));
        assert!(secrets.insert(ours.shared_secret.to_hex()));
    }
    assert_eq!(secrets.len(), SESSIONS);
}

#[test]
fn concurrent_sessions_with_static_key() {
    const CLIENTS: usize = 16;
    let running = spawn_responder(loopback_config(KeyPolicy::Static), CLIENTS).unwrap();
    let responder_key = running.static_public.clone().unwrap();
    let config = Arc::new(dial_config(running.addr));

    let clients: Vec<_> = (0..CLIENTS)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || Initiator::connect(&config))
        })
        .collect();

    let mut secrets = HashSet::new();
    for handle in clients {
        let summary = handle.join().unwrap().unwrap();
        assert_eq!(summary.peer_public_key, responder_key);
        assert!(secrets.insert(summary.shared_secret.to_hex()));
    }

    let outcomes = running.join().unwrap();
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
}
