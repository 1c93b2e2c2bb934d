//! Outbound event forwarding to the remote runtime.
//!
//! Forwarding is one-way: events are emitted and any reply is ignored.
//! A controller whose remote link has been severed, or which was never
//! registered, simply drops its events.

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::chrome_client::ChromeClientController;
use crate::constants::EVENT_CHANNEL_NAME;
use crate::registry::{InstanceId, InstanceRegistry};

/// Fire-and-forget event sink towards the remote runtime.
pub trait EventChannel: Send + Sync {
    fn emit(&self, source_id: InstanceId, event: &str, args: Value);
}

/// Raw byte sink underneath [`JsonEventChannel`].
pub trait MessageTransport: Send + Sync {
    fn send(&self, channel: &str, payload: &[u8]);
}

/// Encodes events as JSON method calls on a named channel.
///
/// The envelope is `{"method": <event>, "args": [<source_id>, …]}`,
/// with the event's own arguments spliced in after the source id.
pub struct JsonEventChannel {
    transport: Arc<dyn MessageTransport>,
}

impl JsonEventChannel {
    pub fn new(transport: Arc<dyn MessageTransport>) -> Self {
        JsonEventChannel { transport }
    }
}

impl EventChannel for JsonEventChannel {
    fn emit(&self, source_id: InstanceId, event: &str, args: Value) {
        let mut call_args = vec![json!(source_id)];
        match args {
            Value::Array(items) => call_args.extend(items),
            Value::Null => {}
            other => call_args.push(other),
        }
        let envelope = json!({ "method": event, "args": call_args });
        self.transport
            .send(EVENT_CHANNEL_NAME, envelope.to_string().as_bytes());
    }
}

/// Forwards controller callbacks to the remote runtime, tagged with
/// the controller's registry id.
pub struct ChromeClientEventApi {
    registry: Arc<Mutex<InstanceRegistry>>,
    channel: Arc<dyn EventChannel>,
}

impl ChromeClientEventApi {
    pub fn new(registry: Arc<Mutex<InstanceRegistry>>, channel: Arc<dyn EventChannel>) -> Self {
        ChromeClientEventApi { registry, channel }
    }

    /// Reports a load-progress update for `controller`.
    pub fn progress_changed(&self, controller: &Arc<ChromeClientController>, percent: i64) {
        let Some(id) = self.registry.lock().id_of_controller(controller) else {
            debug!("[ChromeClientEventApi] Progress update dropped; controller is not registered.");
            return;
        };
        self.channel.emit(id, "onProgressChanged", json!([percent]));
    }

    /// Tells the remote runtime the counterpart of `controller` may be
    /// discarded.
    pub fn dispose(&self, controller: &Arc<ChromeClientController>) {
        let Some(id) = self.registry.lock().id_of_controller(controller) else {
            debug!("[ChromeClientEventApi] Dispose dropped; controller is not registered.");
            return;
        };
        self.channel.emit(id, "dispose", json!([]));
    }
}
