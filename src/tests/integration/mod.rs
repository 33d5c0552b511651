//! Integration tests
//!
//! These tests run commands through the configured codec and decode daemon
//! replies the way a client would.

use std::sync::Arc;

use serde_json::json;

use crate::{
    application::{
        commands::{Cmd, GetKernelStakeModifierCmd},
        services::CommandCodec,
    },
    domain::{KernelStakeModifierReply, StakeModifier},
    infrastructure::reply::RpcReply,
    shared::error::AppError,
    tests::{config, fixtures, utils, TestResult},
};

fn codec() -> CommandCodec {
    config::init();
    CommandCodec::new(Arc::new(config::test_config().codec))
}

#[test]
fn test_request_reply_round_trip_verbose() -> TestResult<()> {
    let codec = codec();
    let cmd = fixtures::verbose_cmd(11);

    let request: serde_json::Value = serde_json::from_slice(&codec.encode(&cmd)?)?;
    assert_eq!(
        request,
        json!({
            "jsonrpc": "1.0",
            "id": 11,
            "method": "getkernelstakemodifier",
            "params": [fixtures::BLOCK_HASH]
        })
    );

    let reply = RpcReply::from_slice(&fixtures::verbose_reply("18446744073709551615"))?;
    let decoded = reply.decode_kernel_stake_modifier(&cmd)?;
    let record = decoded.verbose().ok_or("expected verbose reply")?;
    assert_eq!(record.hash, fixtures::BLOCK_HASH);
    assert_eq!(record.kernel_stake_modifier, StakeModifier(u64::MAX));

    Ok(())
}

#[test]
fn test_request_reply_round_trip_terse() -> TestResult<()> {
    let codec = codec();
    let cmd = fixtures::terse_cmd(12);

    let request: serde_json::Value = serde_json::from_slice(&codec.encode(&cmd)?)?;
    assert_eq!(request["params"], json!([fixtures::BLOCK_HASH, false]));

    let body = utils::create_rpc_reply(json!("0123456789abcdef"), json!(12)).to_string();
    let decoded = RpcReply::from_slice(body.as_bytes())?.decode_kernel_stake_modifier(&cmd)?;
    assert_eq!(decoded, KernelStakeModifierReply::Hex("0123456789abcdef".to_string()));

    Ok(())
}

#[test]
fn test_server_side_decode_of_client_requests() -> TestResult<()> {
    let codec = codec();

    let cmd: GetKernelStakeModifierCmd = codec.decode(&fixtures::request_body(json!(["deadbeef"])))?;
    assert_eq!(cmd.hash(), "deadbeef");
    assert!(cmd.verbose());
    assert!(!cmd.verbose_tx());

    let cmd: GetKernelStakeModifierCmd = codec.decode(&fixtures::request_body(json!(["deadbeef", false])))?;
    assert!(!cmd.verbose());

    Ok(())
}

#[test]
fn test_invalid_requests_map_to_jsonrpc_errors() {
    let codec = codec();

    let cases = [
        (fixtures::request_body(json!([])), -32602),
        (fixtures::request_body(json!(["a", true, true])), -32602),
        (fixtures::request_body(json!([1])), -32602),
        (fixtures::request_body(json!(["a", "b"])), -32602),
        (b"{".to_vec(), -32700),
    ];

    for (body, code) in cases {
        let err = codec.decode::<GetKernelStakeModifierCmd>(&body).unwrap_err();
        assert_eq!(err.to_jsonrpc_error()["error"]["code"], code, "{}", err);
    }
}

#[test]
fn test_daemon_error_reply() -> TestResult<()> {
    let cmd = fixtures::verbose_cmd(3);
    let body = utils::create_rpc_error(-8, "Block not found", json!(3)).to_string();

    let err = RpcReply::from_slice(body.as_bytes())?
        .decode_kernel_stake_modifier(&cmd)
        .unwrap_err();
    assert_eq!(err, AppError::Rpc { code: -8, message: "Block not found".to_string() });

    Ok(())
}

#[test]
fn test_verbose_tx_is_not_put_on_the_wire() -> TestResult<()> {
    let cmd = GetKernelStakeModifierCmd::from_positional(1u64, fixtures::BLOCK_HASH, &[true, true])?;
    assert!(cmd.verbose_tx());

    let decoded = GetKernelStakeModifierCmd::unmarshal(&cmd.marshal()?)?;
    assert!(decoded.verbose());
    assert!(!decoded.verbose_tx());

    Ok(())
}
