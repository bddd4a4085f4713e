//! Outbound request construction.

use std::sync::Arc;

use mockall::mock;
use rstest::rstest;

use steamapps_wire::fixed::MsgClientGetDepotDecryptionKey;
use steamapps_wire::proto::{
    AppInfoRequestApp, CMsgClientAppInfoRequest, CMsgClientAppInfoUpdate,
    CMsgClientGetAppOwnershipTicket, CMsgClientPackageInfoRequest,
};
use steamapps_wire::{ClientMsg, EMsg, Schema, decode_fixed, decode_protobuf};

use super::support::{Harness, harness, inbound};
use crate::{App, CallbackQueue, RequestError, SteamApps, Transport, TransportError};

mock! {
    Connection {}
    impl Transport for Connection {
        fn send(&self, msg: ClientMsg) -> Result<(), TransportError>;
    }
}

fn app_info_request(msg: &ClientMsg) -> CMsgClientAppInfoRequest {
    decode_protobuf::<CMsgClientAppInfoRequest>(&inbound(msg))
        .expect("app info request decodes")
        .body
}

#[rstest]
fn ownership_ticket_request_carries_app_id(harness: Harness) {
    harness.apps.get_app_ownership_ticket(440).expect("send");

    let msg = harness.transport.only_sent();
    let frame = decode_protobuf::<CMsgClientGetAppOwnershipTicket>(&inbound(&msg))
        .expect("decode");
    assert_eq!(frame.body.app_id, Some(440));
}

#[rstest]
fn empty_app_info_request_has_no_entries(harness: Harness) {
    harness.apps.get_app_info(Vec::<App>::new()).expect("send");

    let msg = harness.transport.only_sent();
    assert_eq!(msg.emsg(), EMsg::ClientAppInfoRequest);
    assert!(app_info_request(&msg).apps.is_empty());
}

#[rstest]
fn app_info_request_preserves_order_and_sections(harness: Harness) {
    harness
        .apps
        .get_app_info([App::new(10), App::with_sections(20, 3)])
        .expect("send");

    let request = app_info_request(&harness.transport.only_sent());
    assert_eq!(
        request.apps,
        vec![
            AppInfoRequestApp {
                app_id: Some(10),
                section_flags: Some(0xFFFF),
            },
            AppInfoRequestApp {
                app_id: Some(20),
                section_flags: Some(3),
            },
        ]
    );
}

#[rstest]
fn package_info_request_asks_for_full_metadata(harness: Harness) {
    harness.apps.get_package_info([7, 8, 9]).expect("send");

    let msg = harness.transport.only_sent();
    let frame = decode_protobuf::<CMsgClientPackageInfoRequest>(&inbound(&msg)).expect("decode");
    assert_eq!(frame.body.package_ids, vec![7, 8, 9]);
    assert_eq!(frame.body.meta_data_only, Some(false));
}

#[rstest]
fn app_changes_request_asks_for_change_list(harness: Harness) {
    harness.apps.get_app_changes(1_000).expect("send");

    let msg = harness.transport.only_sent();
    let frame = decode_protobuf::<CMsgClientAppInfoUpdate>(&inbound(&msg)).expect("decode");
    assert_eq!(frame.body.last_changenumber, Some(1_000));
    assert_eq!(frame.body.send_changelist, Some(true));
}

#[rstest]
fn depot_key_request_uses_fixed_framing(harness: Harness) {
    harness.apps.get_depot_decryption_key(731).expect("send");

    let msg = harness.transport.only_sent();
    let packet = inbound(&msg);
    assert!(!packet.is_proto());
    let frame = decode_fixed::<MsgClientGetDepotDecryptionKey>(&packet).expect("decode");
    assert_eq!(frame.body.depot_id, 731);
    assert!(frame.payload.is_empty());
}

#[rstest]
#[case::ownership_ticket(EMsg::ClientGetAppOwnershipTicket, Schema::Structured)]
#[case::app_info(EMsg::ClientAppInfoRequest, Schema::Structured)]
#[case::package_info(EMsg::ClientPackageInfoRequest, Schema::Structured)]
#[case::app_changes(EMsg::ClientAppInfoUpdate, Schema::Structured)]
#[case::depot_key(EMsg::ClientGetDepotDecryptionKey, Schema::FixedHeader)]
fn each_operation_sends_its_tag_and_framing(
    harness: Harness,
    #[case] emsg: EMsg,
    #[case] schema: Schema,
) {
    let apps = &harness.apps;
    let sent = match emsg {
        EMsg::ClientGetAppOwnershipTicket => apps.get_app_ownership_ticket(1),
        EMsg::ClientAppInfoRequest => apps.get_app_info([App::new(1)]),
        EMsg::ClientPackageInfoRequest => apps.get_package_info([1]),
        EMsg::ClientAppInfoUpdate => apps.get_app_changes(1),
        EMsg::ClientGetDepotDecryptionKey => apps.get_depot_decryption_key(1),
        other => panic!("no operation sends {other:?}"),
    };
    sent.expect("send");

    let msg = harness.transport.only_sent();
    assert_eq!(msg.emsg(), emsg);
    assert_eq!(msg.schema(), schema);
    assert_eq!(msg.schema(), emsg.schema());
}

#[rstest]
fn each_call_sends_exactly_one_message(harness: Harness) {
    harness.apps.get_app_changes(1).expect("send");
    harness.apps.get_app_changes(1).expect("send");
    harness.apps.get_depot_decryption_key(2).expect("send");

    let tags: Vec<EMsg> = harness
        .transport
        .sent()
        .iter()
        .map(ClientMsg::emsg)
        .collect();
    assert_eq!(
        tags,
        vec![
            EMsg::ClientAppInfoUpdate,
            EMsg::ClientAppInfoUpdate,
            EMsg::ClientGetDepotDecryptionKey,
        ]
    );
    assert!(harness.queue.is_empty());
}

#[rstest]
fn transport_failure_is_returned_to_caller() {
    let mut connection = MockConnection::new();
    connection
        .expect_send()
        .withf(|msg| msg.emsg() == EMsg::ClientGetAppOwnershipTicket)
        .once()
        .returning(|_| Err(TransportError::Disconnected));
    let apps = SteamApps::new(Arc::new(connection), Arc::new(CallbackQueue::new()));

    let error = apps.get_app_ownership_ticket(440).expect_err("send fails");
    assert!(matches!(
        error,
        RequestError::Transport {
            emsg: EMsg::ClientGetAppOwnershipTicket,
            source: TransportError::Disconnected,
        }
    ));
}
