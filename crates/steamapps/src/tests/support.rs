//! Shared fakes and frame builders.

use std::io;
use std::sync::{Arc, Mutex};

use rstest::fixture;
use steamapps_config::{Config, LogFormat};

use steamapps_wire::{
    ClientMsg, EMsg, FixedBody, JobId, PROTO_MASK, PacketMsg, ProtoBody, Schema,
};

use crate::telemetry::{self, BoxedSubscriber};
use crate::{CallbackQueue, SteamApps, Transport, TransportError};

/// Transport that records every message it is handed.
#[derive(Debug, Default)]
pub(super) struct RecordingTransport {
    sent: Mutex<Vec<ClientMsg>>,
}

impl RecordingTransport {
    pub(super) fn sent(&self) -> Vec<ClientMsg> {
        self.sent.lock().expect("transport lock").clone()
    }

    pub(super) fn only_sent(&self) -> ClientMsg {
        let mut sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one message");
        sent.remove(0)
    }
}

impl Transport for RecordingTransport {
    fn send(&self, msg: ClientMsg) -> Result<(), TransportError> {
        self.sent.lock().expect("transport lock").push(msg);
        Ok(())
    }
}

/// Handler wired to a recording transport and an in-memory queue.
pub(super) struct Harness {
    pub(super) apps: SteamApps,
    pub(super) transport: Arc<RecordingTransport>,
    pub(super) queue: Arc<CallbackQueue>,
}

impl Harness {
    pub(super) fn with_queue(queue: CallbackQueue) -> Self {
        let transport = Arc::new(RecordingTransport::default());
        let queue = Arc::new(queue);
        let apps = SteamApps::new(transport.clone(), queue.clone());
        Self {
            apps,
            transport,
            queue,
        }
    }
}

#[fixture]
pub(super) fn harness() -> Harness {
    Harness::with_queue(CallbackQueue::new())
}

/// Frames `body` as a structured message answering `job`.
pub(super) fn structured<M: ProtoBody>(body: &M, job: JobId) -> PacketMsg {
    inbound(&ClientMsg::protobuf(body).with_target_job(job))
}

/// Frames `body` and `payload` as a fixed-header message answering `job`.
pub(super) fn fixed<B: FixedBody>(body: &B, payload: &[u8], job: JobId) -> PacketMsg {
    inbound(
        &ClientMsg::fixed(body)
            .with_payload(payload)
            .with_target_job(job),
    )
}

/// Re-reads an outbound message as the peer would receive it.
pub(super) fn inbound(msg: &ClientMsg) -> PacketMsg {
    PacketMsg::parse(msg.encode()).expect("encoded frame parses")
}

/// A frame holding only the tag, framed the way `emsg` expects.
pub(super) fn truncated(emsg: EMsg) -> PacketMsg {
    let raw = match emsg.schema() {
        Schema::Structured => emsg.code() | PROTO_MASK,
        Schema::FixedHeader => emsg.code(),
    };
    PacketMsg::parse(raw.to_le_bytes().to_vec()).expect("tag parses")
}

/// A structured frame with a valid empty header and an unterminated varint
/// as body.
pub(super) fn corrupt_structured(emsg: EMsg) -> PacketMsg {
    let mut frame = (emsg.code() | PROTO_MASK).to_le_bytes().to_vec();
    frame.extend_from_slice(&0_u32.to_le_bytes());
    frame.extend_from_slice(&[0x08, 0xff]);
    PacketMsg::parse(frame).expect("tag parses")
}

/// A frame for a tag this crate has no [`EMsg`] for, with a small body.
pub(super) fn foreign(code: u32, is_proto: bool) -> PacketMsg {
    let raw = if is_proto { code | PROTO_MASK } else { code };
    let mut frame = raw.to_le_bytes().to_vec();
    frame.extend_from_slice(&[0, 0, 0, 0, 0x08, 0x01]);
    PacketMsg::parse(frame).expect("tag parses")
}

/// In-memory log sink for asserting on emitted diagnostics.
#[derive(Debug, Clone, Default)]
pub(super) struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Builds a compact, colourless subscriber writing into this capture.
    pub(super) fn subscriber(&self, filter: &str) -> BoxedSubscriber {
        let config = Config {
            log_filter: filter.to_owned(),
            log_format: LogFormat::Compact,
            client_id: None,
        };
        let writer = self.clone();
        telemetry::build_subscriber(&config, move || writer.clone(), false)
            .expect("test filter parses")
    }

    pub(super) fn contents(&self) -> String {
        let bytes = self.0.lock().expect("capture lock");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
