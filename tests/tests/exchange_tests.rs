use ecdhx_algorithms::ec::CurveParameters;
use ecdhx_api::Transport;
use ecdhx_exchange::{wire, ExchangeConfig, Initiator, KeyPolicy, Role, SessionState, TcpTransport};
use ecdhx_tests::harness::{dial_config, loopback_config, spawn_responder};
use std::io::Write;
use std::net::TcpStream;
use std::time::Duration;

#[test]
fn end_to_end_over_tcp() {
    let running = spawn_responder(loopback_config(KeyPolicy::Ephemeral), 1).unwrap();
    let ours = Initiator::connect(&dial_config(running.addr)).unwrap();
    let outcomes = running.join().unwrap();

    assert_eq!(outcomes.len(), 1);
    let theirs = outcomes[0].result.as_ref().unwrap();
    assert_eq!(ours.role, Role::Initiator);
    assert_eq!(theirs.role, Role::Responder);
    assert_eq!(theirs.peer_public_key, ours.public_key);
    assert_eq!(ours.peer_public_key, theirs.public_key);
    assert!(ours.shared_secret.ct_eq(&theirs.shared_secret));
    assert_eq!(ours.shared_secret.to_hex().len(), 64);
}

#[test]
fn static_responder_key_is_shared_by_sessions() {
    let running = spawn_responder(loopback_config(KeyPolicy::Static), 3).unwrap();
    let expected = running.static_public.clone().unwrap();
    let config = dial_config(running.addr);

    for _ in 0..3 {
        let summary = Initiator::connect(&config).unwrap();
        assert_eq!(summary.peer_public_key, expected);
    }
    let outcomes = running.join().unwrap();
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("ecdhx-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"curve": "secp256r1", "address": "127.0.0.1:0", "io_timeout_ms": 2000}"#,
    )
    .unwrap();
    let config = ExchangeConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.io_timeout(), Some(Duration::from_secs(2)));
    assert_eq!(config.key_policy, KeyPolicy::Ephemeral);

    let running = spawn_responder(config, 1).unwrap();
    Initiator::connect(&dial_config(running.addr)).unwrap();
    assert!(running.join().unwrap()[0].result.is_ok());
}

#[test]
fn unknown_curve_is_configuration_error() {
    let config = ExchangeConfig {
        curve: "P-384".to_string(),
        ..loopback_config(KeyPolicy::Ephemeral)
    };
    let err = spawn_responder(config.clone(), 1).err().unwrap();
    assert_eq!(err.category(), "ConfigurationError");

    let err = Initiator::connect(&config).unwrap_err();
    assert_eq!(err.category(), "ConfigurationError");
    assert_eq!(err.state, SessionState::Idle);
}

#[test]
fn nobody_listening_is_transport_error() {
    // bind and drop to find a closed port
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = Initiator::connect(&dial_config(addr)).unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.role, Role::Initiator);
}

#[test]
fn malformed_initiator_message() {
    let running = spawn_responder(loopback_config(KeyPolicy::Ephemeral), 1).unwrap();
    let mut transport =
        TcpTransport::connect(running.addr, Some(Duration::from_secs(10)), 4096).unwrap();
    transport.send(br#"{"X": "0xzz", "Y": "0x1"}"#).unwrap();

    // the responder still answers with its own key before rejecting ours
    let reply = transport.receive().unwrap();
    let curve = CurveParameters::p256();
    let point = wire::decode_point(&curve, &reply).unwrap();
    assert!(curve.is_on_curve(&point));

    let outcomes = running.join().unwrap();
    let err = outcomes[0].result.as_ref().unwrap_err();
    assert_eq!(err.category(), "DeserializationError");
    assert_eq!(err.role, Role::Responder);
}

#[test]
fn silent_initiator_times_out() {
    let config = ExchangeConfig {
        io_timeout_ms: 200,
        ..loopback_config(KeyPolicy::Ephemeral)
    };
    let running = spawn_responder(config, 1).unwrap();
    let stream = TcpStream::connect(running.addr).unwrap();

    let outcomes = running.join().unwrap();
    let err = outcomes[0].result.as_ref().unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.state, SessionState::KeyGenerated);
    drop(stream);
}

#[test]
fn truncated_frame_is_transport_error() {
    let running = spawn_responder(loopback_config(KeyPolicy::Ephemeral), 1).unwrap();
    let mut stream = TcpStream::connect(running.addr).unwrap();
    // header promises 100 bytes, only 3 arrive
    stream.write_all(&100u32.to_be_bytes()).unwrap();
    stream.write_all(b"{\"X").unwrap();
    drop(stream);

    let outcomes = running.join().unwrap();
    assert!(outcomes[0].result.as_ref().unwrap_err().is_transport());
}
