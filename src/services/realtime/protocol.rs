// ============================================================================
// SOCKET.IO v5 SOBRE ENGINE.IO v4 - Codec de frames de texto
// ============================================================================
// Solo el subconjunto que usa la vista: namespace por defecto, sin binarios
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Conexión al namespace por defecto
pub const CONNECT_FRAME: &str = "40";
/// Respuesta al ping del servidor
pub const PONG_FRAME: &str = "3";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProtocolError {
    #[error("empty frame")]
    Empty,
    #[error("unknown packet type '{0}'")]
    UnknownPacket(char),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
    #[error("malformed event: {0}")]
    MalformedEvent(String),
    #[error("invalid socket address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInfo {
    pub sid: String,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
}

/// Frame decodificado (Engine.IO y Socket.IO aplanados)
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Open(OpenInfo),
    Close,
    Ping,
    Pong,
    Noop,
    /// Acuse de conexión al namespace
    Connected { sid: Option<String> },
    ConnectError(String),
    Disconnected,
    Event { name: String, payload: Value },
    /// Paquetes válidos que la vista no usa (acks, binarios, upgrade)
    Ignored,
}

fn parse_json(text: &str) -> Result<Value, ProtocolError> {
    serde_json::from_str(text).map_err(|e| ProtocolError::InvalidJson(e.to_string()))
}

/// Quita `/namespace,` y el id de ack opcionales antes del JSON
fn strip_event_prefix(body: &str) -> &str {
    let body = match body.strip_prefix('/') {
        Some(rest) => rest.split_once(',').map(|(_, tail)| tail).unwrap_or(""),
        None => body,
    };
    body.trim_start_matches(|c: char| c.is_ascii_digit())
}

fn decode_socket_packet(body: &str) -> Result<Frame, ProtocolError> {
    let mut chars = body.chars();
    let kind = chars.next().ok_or(ProtocolError::Empty)?;
    let rest = chars.as_str();

    match kind {
        '0' => {
            let sid = if rest.is_empty() {
                None
            } else {
                parse_json(rest)?
                    .get("sid")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            };
            Ok(Frame::Connected { sid })
        }
        '1' => Ok(Frame::Disconnected),
        '2' => {
            let json = strip_event_prefix(rest);
            let mut items = match parse_json(json)? {
                Value::Array(items) => items.into_iter(),
                other => return Err(ProtocolError::MalformedEvent(other.to_string())),
            };
            let name = match items.next() {
                Some(Value::String(name)) => name,
                _ => return Err(ProtocolError::MalformedEvent(json.to_string())),
            };
            let payload = items.next().unwrap_or(Value::Null);
            Ok(Frame::Event { name, payload })
        }
        '4' => {
            let reason = match parse_json(rest) {
                Ok(Value::String(message)) => message,
                Ok(value) => value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string()),
                Err(_) => rest.to_string(),
            };
            Ok(Frame::ConnectError(reason))
        }
        '3' | '5' | '6' => Ok(Frame::Ignored),
        other => Err(ProtocolError::UnknownPacket(other)),
    }
}

/// Decodifica un frame de texto recibido por el WebSocket
pub fn decode(frame: &str) -> Result<Frame, ProtocolError> {
    let mut chars = frame.chars();
    let kind = chars.next().ok_or(ProtocolError::Empty)?;
    let rest = chars.as_str();

    match kind {
        '0' => serde_json::from_str::<OpenInfo>(rest)
            .map(Frame::Open)
            .map_err(|e| ProtocolError::InvalidJson(e.to_string())),
        '1' => Ok(Frame::Close),
        '2' => Ok(Frame::Ping),
        '3' => Ok(Frame::Pong),
        '4' => decode_socket_packet(rest),
        '5' => Ok(Frame::Ignored),
        '6' => Ok(Frame::Noop),
        other => Err(ProtocolError::UnknownPacket(other)),
    }
}

/// `42["<name>",<payload>]`
pub fn encode_event<T: Serialize>(name: &str, payload: &T) -> Result<String, ProtocolError> {
    let payload = serde_json::to_value(payload).map_err(|e| ProtocolError::InvalidJson(e.to_string()))?;
    let body = Value::Array(vec![Value::String(name.to_string()), payload]);
    Ok(format!("42{}", body))
}

/// `http(s)://host` → `ws(s)://host/socket.io/?EIO=4&transport=websocket`
pub fn socket_url(backend_address: &str) -> Result<String, ProtocolError> {
    let mut url = Url::parse(backend_address).map_err(|e| ProtocolError::InvalidAddress(e.to_string()))?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(ProtocolError::InvalidAddress(format!("unsupported scheme '{}'", other))),
    };
    url.set_scheme(scheme)
        .map_err(|_| ProtocolError::InvalidAddress(backend_address.to_string()))?;
    url.set_path("/socket.io/");
    url.set_query(Some("EIO=4&transport=websocket"));
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::models::NewDirection;

    #[test]
    fn decodes_engine_open_handshake() {
        let frame = decode(r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#)
            .unwrap();
        assert_eq!(
            frame,
            Frame::Open(OpenInfo { sid: "abc".into(), ping_interval: 25000, ping_timeout: 20000 })
        );
    }

    #[test]
    fn decodes_control_frames() {
        assert_eq!(decode("2").unwrap(), Frame::Ping);
        assert_eq!(decode("3").unwrap(), Frame::Pong);
        assert_eq!(decode("1").unwrap(), Frame::Close);
        assert_eq!(decode("6").unwrap(), Frame::Noop);
        assert_eq!(decode("41").unwrap(), Frame::Disconnected);
        assert_eq!(decode("").unwrap_err(), ProtocolError::Empty);
        assert_eq!(decode("9").unwrap_err(), ProtocolError::UnknownPacket('9'));
    }

    #[test]
    fn decodes_namespace_connect_ack_and_error() {
        assert_eq!(
            decode(r#"40{"sid":"xyz"}"#).unwrap(),
            Frame::Connected { sid: Some("xyz".into()) }
        );
        assert_eq!(decode("40").unwrap(), Frame::Connected { sid: None });
        assert_eq!(
            decode(r#"44{"message":"Not authorized"}"#).unwrap(),
            Frame::ConnectError("Not authorized".into())
        );
    }

    #[test]
    fn decodes_events_with_and_without_ack_id_or_namespace() {
        let expected = Frame::Event {
            name: "new-position".into(),
            payload: json!({"routeId": "r1", "position": [1.0, 2.0], "finished": false}),
        };
        let body = r#"["new-position",{"routeId":"r1","position":[1.0,2.0],"finished":false}]"#;

        assert_eq!(decode(&format!("42{}", body)).unwrap(), expected);
        assert_eq!(decode(&format!("4217{}", body)).unwrap(), expected);
        assert_eq!(decode(&format!("42/admin,{}", body)).unwrap(), expected);
    }

    #[test]
    fn event_without_name_is_malformed() {
        assert!(matches!(decode(r#"42[1,2]"#), Err(ProtocolError::MalformedEvent(_))));
        assert!(matches!(decode(r#"42{"a":1}"#), Err(ProtocolError::MalformedEvent(_))));
        assert!(matches!(decode("42[oops"), Err(ProtocolError::InvalidJson(_))));
    }

    #[test]
    fn encodes_new_direction_event() {
        let frame = encode_event("new-direction", &NewDirection { route_id: "r1".into() }).unwrap();
        assert_eq!(frame, r#"42["new-direction",{"routeId":"r1"}]"#);
    }

    #[test]
    fn socket_url_switches_scheme_and_targets_engine_endpoint() {
        assert_eq!(
            socket_url("http://localhost:3000").unwrap(),
            "ws://localhost:3000/socket.io/?EIO=4&transport=websocket"
        );
        assert_eq!(
            socket_url("https://api.example.com").unwrap(),
            "wss://api.example.com/socket.io/?EIO=4&transport=websocket"
        );
        assert!(socket_url("ftp://example.com").is_err());
    }
}
